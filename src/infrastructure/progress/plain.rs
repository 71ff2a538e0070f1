//! Line-oriented progress presenter for non-interactive terminals

use async_trait::async_trait;
use colored::*;

use crate::application::ports::{FileListPresenter, PresenterError};

/// Presenter that prints one stderr line per progress update
pub struct PlainPresenter;

impl PlainPresenter {
    /// Create a new plain presenter
    pub fn new() -> Self {
        Self
    }
}

impl Default for PlainPresenter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FileListPresenter for PlainPresenter {
    async fn set_progress(
        &self,
        percent: i64,
        label: &str,
        done: bool,
    ) -> Result<(), PresenterError> {
        if done {
            eprintln!("{} {}", "✓".green(), label);
        } else {
            eprintln!("{} [{:>3}%] {}", "↑".cyan(), percent, label);
        }
        Ok(())
    }
}
