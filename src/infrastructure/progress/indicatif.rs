//! Terminal progress bar presenter using indicatif

use std::sync::Mutex;

use async_trait::async_trait;
use indicatif::{ProgressBar, ProgressStyle};

use crate::application::ports::{FileListPresenter, PresenterError};

/// Progress bar presenter backed by an indicatif bar.
///
/// The bar is created lazily on the first update and finished when an
/// update marks the final state. Percentages outside 0-100 are clamped
/// for rendering.
pub struct ProgressBarPresenter {
    bar: Mutex<Option<ProgressBar>>,
}

impl ProgressBarPresenter {
    /// Create a new progress bar presenter
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn make_bar() -> ProgressBar {
        let bar = ProgressBar::new(100);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{bar:30.cyan/blue} {pos:>3}% {msg}")
                .unwrap()
                .progress_chars("█░ "),
        );
        bar
    }
}

impl Default for ProgressBarPresenter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FileListPresenter for ProgressBarPresenter {
    async fn set_progress(
        &self,
        percent: i64,
        label: &str,
        done: bool,
    ) -> Result<(), PresenterError> {
        let mut guard = self
            .bar
            .lock()
            .map_err(|e| PresenterError::RenderFailed(e.to_string()))?;

        let bar = guard.get_or_insert_with(Self::make_bar);
        bar.set_position(percent.clamp(0, 100) as u64);
        bar.set_message(label.to_string());

        if done {
            if let Some(bar) = guard.take() {
                bar.finish_with_message(label.to_string());
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn updates_then_finishes() {
        let presenter = ProgressBarPresenter::new();
        presenter
            .set_progress(40, "Uploading to sdwire - 40%...", false)
            .await
            .unwrap();
        assert!(presenter.bar.lock().unwrap().is_some());

        presenter.set_progress(100, "Done", true).await.unwrap();
        assert!(presenter.bar.lock().unwrap().is_none());
    }

    #[tokio::test]
    async fn out_of_range_percent_is_clamped() {
        let presenter = ProgressBarPresenter::new();
        presenter.set_progress(250, "over", false).await.unwrap();
        presenter.set_progress(-5, "under", false).await.unwrap();
    }
}
