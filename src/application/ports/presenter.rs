//! File-list presenter port interface

use async_trait::async_trait;
use thiserror::Error;

/// Presenter errors
#[derive(Debug, Clone, Error)]
pub enum PresenterError {
    #[error("Failed to render progress: {0}")]
    RenderFailed(String),
}

/// Port for the file-list progress display.
///
/// Models the one operation the host's file list actually exposes to
/// push-message consumers; nothing else of its surface is needed here.
#[async_trait]
pub trait FileListPresenter: Send + Sync {
    /// Update the upload progress display.
    ///
    /// # Arguments
    /// * `percent` - Progress percentage, expected 0-100
    /// * `label` - Text shown alongside the progress value
    /// * `done` - Whether this update marks the final/completed state
    async fn set_progress(
        &self,
        percent: i64,
        label: &str,
        done: bool,
    ) -> Result<(), PresenterError>;
}

/// Blanket implementation for boxed presenter types
#[async_trait]
impl FileListPresenter for Box<dyn FileListPresenter> {
    async fn set_progress(
        &self,
        percent: i64,
        label: &str,
        done: bool,
    ) -> Result<(), PresenterError> {
        self.as_ref().set_progress(percent, label, done).await
    }
}
