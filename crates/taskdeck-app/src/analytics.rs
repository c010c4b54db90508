//! Analytics screen: fetch-and-render of the server-computed aggregate.

use taskdeck_api_models::TaskAnalysis;
use taskdeck_client::{ApiClient, SessionToken};

/// Error banner text shown when the analysis fetch fails.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch task analysis";

/// Render state of the analytics screen.
///
/// Unlike the task list, this screen surfaces failures: a failed fetch lands
/// in [`AnalyticsState::Failed`] with a visible banner message.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AnalyticsState {
    /// A fetch is in flight; the screen shows a spinner.
    #[default]
    Loading,
    /// The latest fetch succeeded; the snapshot is rendered as-is.
    Ready(TaskAnalysis),
    /// The latest fetch failed; the message is shown in an error banner.
    Failed(String),
}

/// State machine for the analytics dashboard.
///
/// Each fetch produces an immutable snapshot; the screen never mutates or
/// derives from it locally. A manual refresh re-enters [`AnalyticsState::Loading`]
/// and repeats the same fetch.
#[derive(Debug, Default)]
pub struct AnalyticsScreen {
    state: AnalyticsState,
}

impl AnalyticsScreen {
    /// Screen as first mounted: loading, nothing fetched yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current render state.
    #[must_use]
    pub const fn state(&self) -> &AnalyticsState {
        &self.state
    }

    /// Fetch the analysis aggregate, transitioning loading -> ready or
    /// loading -> failed. Used both for the initial mount fetch and for the
    /// manual refresh action.
    pub async fn refresh(&mut self, client: &ApiClient, token: &SessionToken) {
        self.state = AnalyticsState::Loading;
        match client.analyze_tasks(token).await {
            Ok(analysis) => self.state = AnalyticsState::Ready(analysis),
            Err(err) => {
                tracing::error!(error = %err, "failed to fetch task analysis");
                self.state = AnalyticsState::Failed(FETCH_FAILED_MESSAGE.to_string());
            }
        }
    }
}
