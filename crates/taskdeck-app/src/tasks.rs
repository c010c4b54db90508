//! Task list screen: mirrored store, creation drafts, and mutations.

use taskdeck_api_models::{Task, TaskDraft};
use taskdeck_client::{ApiClient, SessionToken};

/// Sub-tabs of the authenticated workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WorkspaceTab {
    /// The task list and creation form; the default tab.
    #[default]
    Tasks,
    /// The analytics dashboard, which performs its own fetch.
    Analytics,
}

/// Result of a creation form submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum SubmitOutcome {
    /// The title was blank; no request was issued.
    Rejected,
    /// A create request was issued (it may still have failed server-side;
    /// failures are logged, not surfaced).
    Submitted,
}

/// State of the task list screen.
///
/// The store is a read-only mirror of the server's collection, replaced
/// wholesale after every successful mutation. Failures on this screen are
/// logged and otherwise swallowed: the stale or empty mirror persists
/// silently.
#[derive(Debug, Default)]
pub struct TaskListScreen {
    tasks: Vec<Task>,
    title_draft: String,
    description_draft: String,
    active_tab: WorkspaceTab,
}

impl TaskListScreen {
    /// Empty screen: no tasks, blank drafts, tasks tab active.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mirrored task collection, in server order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Current title draft.
    #[must_use]
    pub fn title_draft(&self) -> &str {
        &self.title_draft
    }

    /// Current description draft.
    #[must_use]
    pub fn description_draft(&self) -> &str {
        &self.description_draft
    }

    /// Replace the title draft with the latest form value.
    pub fn set_title_draft(&mut self, value: impl Into<String>) {
        self.title_draft = value.into();
    }

    /// Replace the description draft with the latest form value.
    pub fn set_description_draft(&mut self, value: impl Into<String>) {
        self.description_draft = value.into();
    }

    /// Active workspace sub-tab.
    #[must_use]
    pub const fn active_tab(&self) -> WorkspaceTab {
        self.active_tab
    }

    /// Switch sub-tabs. Purely local; no network effect. The analytics
    /// screen mounted by the analytics tab fetches independently.
    pub const fn select_tab(&mut self, tab: WorkspaceTab) {
        self.active_tab = tab;
    }

    /// Fetch the full collection and replace the mirror.
    ///
    /// On failure the error is logged and the existing mirror is left
    /// untouched; there is no user-visible error state on this path.
    pub async fn load(&mut self, client: &ApiClient, token: &SessionToken) {
        match client.list_tasks(token).await {
            Ok(tasks) => self.tasks = tasks,
            Err(err) => tracing::error!(error = %err, "failed to fetch tasks"),
        }
    }

    /// Submit the creation form.
    ///
    /// A blank (after trimming) title is rejected before any request is
    /// issued. On success both drafts are cleared and the collection is
    /// reloaded; on failure the error is logged and the drafts are kept so
    /// the user can retry.
    pub async fn submit_new_task(
        &mut self,
        client: &ApiClient,
        token: &SessionToken,
    ) -> SubmitOutcome {
        let draft = TaskDraft::new(self.title_draft.clone(), self.description_draft.clone());
        if draft.title_is_blank() {
            return SubmitOutcome::Rejected;
        }

        match client.create_task(token, &draft).await {
            Ok(_) => {
                self.title_draft.clear();
                self.description_draft.clear();
                self.load(client, token).await;
            }
            Err(err) => tracing::error!(error = %err, "failed to add task"),
        }
        SubmitOutcome::Submitted
    }

    /// Send the logical negation of the task's current completion flag as a
    /// full replace, then reload. Unknown ids are a logged no-op; failed
    /// requests are logged and leave the mirror untouched.
    pub async fn toggle_completed(
        &mut self,
        client: &ApiClient,
        token: &SessionToken,
        task_id: i64,
    ) {
        let Some(task) = self.tasks.iter().find(|task| task.id == task_id) else {
            tracing::warn!(task_id, "toggle requested for task not in the store");
            return;
        };

        match client.set_completed(token, task_id, !task.completed).await {
            Ok(_) => self.load(client, token).await,
            Err(err) => tracing::error!(error = %err, task_id, "failed to update task"),
        }
    }

    /// Delete a task by id, then reload. Failures (including deleting an id
    /// the server no longer knows) are logged and otherwise ignored.
    pub async fn delete(&mut self, client: &ApiClient, token: &SessionToken, task_id: i64) {
        match client.delete_task(token, task_id).await {
            Ok(()) => self.load(client, token).await,
            Err(err) => tracing::error!(error = %err, task_id, "failed to delete task"),
        }
    }
}
