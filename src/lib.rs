//! sdwire-notify - Desktop companion for the OctoPrint Sdwire plugin
//!
//! This crate consumes the Sdwire server plugin's push messages (upload
//! progress, error reports) and mirrors them into a terminal progress bar
//! and desktop notifications.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Push-message value objects, configuration, and errors
//! - **Application**: The view model, its registry, and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (indicatif, notify-rust, XDG config)
//! - **CLI**: Command-line interface, message feeds, and the run loop

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
