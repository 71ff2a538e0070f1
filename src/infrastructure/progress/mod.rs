//! Progress display infrastructure module
//!
//! Provides terminal renditions of the file-list progress display:
//! an animated bar (interactive terminals) and a line-per-update
//! fallback for plain output.

mod indicatif;
mod plain;

pub use self::indicatif::ProgressBarPresenter;
pub use plain::PlainPresenter;

use crate::application::ports::FileListPresenter;

/// Create the progress presenter for the requested output mode
pub fn create_presenter(plain: bool) -> Box<dyn FileListPresenter> {
    if plain {
        Box::new(PlainPresenter::new())
    } else {
        Box::new(ProgressBarPresenter::new())
    }
}
