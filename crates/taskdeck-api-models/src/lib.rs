#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Shared HTTP DTOs for the task-manager API.
//!
//! These types are the single source of truth for the wire contract spoken by
//! the client, the screen layer, and the CLI. The server owns every `Task`;
//! the client only ever echoes identifiers back, so the structs here are
//! deliberately dumb: serde derives, defaults for fields older servers omit,
//! and nothing that could drift from the JSON the backend actually emits.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user-owned to-do item as returned by `GET /api/tasks`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    /// Server-assigned unique identifier. Clients never construct one.
    pub id: i64,
    /// Required, non-empty title.
    pub title: String,
    #[serde(default)]
    /// Optional free-form description.
    pub description: Option<String>,
    #[serde(default)]
    /// Completion flag; newly created tasks start out `false`.
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Creation timestamp, when the server reports one.
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Owning user id, when the server reports one.
    pub user_id: Option<i64>,
}

/// JSON body accepted by `POST /api/tasks`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct TaskDraft {
    /// Title of the new task. Must be non-empty after trimming.
    pub title: String,
    #[serde(default)]
    /// Optional description; an empty string is sent as-is rather than
    /// omitted.
    pub description: Option<String>,
}

impl TaskDraft {
    /// Build a draft from form field values.
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: Some(description.into()),
        }
    }

    /// Returns `true` when the title is empty after trimming, i.e. the draft
    /// must be rejected client-side before any request is issued.
    #[must_use]
    pub fn title_is_blank(&self) -> bool {
        self.title.trim().is_empty()
    }
}

/// JSON body accepted by `PATCH /api/tasks/{id}`.
///
/// The contract is a full replace of the completion flag, never a patch-merge
/// of arbitrary fields.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaskCompletionPatch {
    /// New value for the completion flag.
    pub completed: bool,
}

/// JSON body accepted by `POST /api/register`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterRequest {
    /// Email address used as the account identifier.
    pub email: String,
    /// Plain-text password; hashing is the server's concern.
    pub password: String,
}

/// Bearer token document returned by `POST /api/token`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenResponse {
    /// Opaque bearer token string.
    pub access_token: String,
    /// Token scheme label, `"bearer"` in practice.
    pub token_type: String,
}

/// User profile returned by `POST /api/register` and `GET /api/me`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserProfile {
    /// Server-assigned user id.
    pub id: i64,
    /// Account email address.
    pub email: String,
    /// Whether the account is active.
    pub is_active: bool,
    #[serde(default)]
    /// Tasks embedded in the profile payload.
    pub tasks: Vec<Task>,
}

/// Error body emitted by the backend on non-2xx responses.
///
/// FastAPI reports errors as `{"detail": ...}` where `detail` is usually a
/// string but may be a structured validation payload; only the string form is
/// surfaced to users, anything else falls back to the raw body text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ApiErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Human-readable diagnostic when the server provides one.
    pub detail: Option<String>,
}

/// Aggregate returned by `GET /api/tasks/analyze`.
///
/// Treated as an immutable snapshot per fetch; the client renders it and
/// never derives local state from it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaskAnalysis {
    /// Distribution figures, workload verdict, and tips.
    pub summary: AnalysisSummary,
    #[serde(default)]
    /// Pending tasks the analyzer flagged for attention.
    pub priority_tasks: Vec<PriorityTask>,
    #[serde(default)]
    /// Per-task narrative analyses.
    pub individual_analyses: Vec<TaskInsight>,
}

/// Summary block of a [`TaskAnalysis`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisSummary {
    /// Counts and completion rate over the user's collection.
    pub task_distribution: TaskDistribution,
    /// Server-computed workload verdict sentence.
    pub workload_status: String,
    #[serde(default)]
    /// Server-computed suggestions, rendered verbatim.
    pub optimization_tips: Vec<String>,
}

/// Completion-status distribution over a task collection.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TaskDistribution {
    /// Number of tasks in the collection.
    pub total_tasks: u64,
    /// Number of completed tasks.
    pub completed_tasks: u64,
    /// Number of tasks still pending.
    pub pending_tasks: u64,
    /// Completed share as a percentage (0.0-100.0); 0 for an empty
    /// collection.
    pub completion_rate: f64,
}

/// A pending task the analyzer singled out.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PriorityTask {
    /// Identifier of the flagged task.
    pub id: i64,
    /// Title of the flagged task.
    pub title: String,
    /// Why the analyzer flagged it.
    pub reason: String,
}

/// Narrative analysis of a single task.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaskInsight {
    /// Identifier of the analysed task.
    pub task_id: i64,
    /// Analysis text, or an error note when `success` is false.
    pub analysis: String,
    /// Whether the analyzer produced a real analysis for this task.
    pub success: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn task_decodes_minimal_payload() {
        let task: Task = serde_json::from_value(json!({
            "id": 3,
            "title": "Buy milk"
        }))
        .expect("minimal task should decode");

        assert_eq!(task.id, 3);
        assert_eq!(task.title, "Buy milk");
        assert_eq!(task.description, None);
        assert!(!task.completed);
        assert!(task.created_at.is_none());
        assert!(task.user_id.is_none());
    }

    #[test]
    fn task_decodes_full_backend_payload() {
        let task: Task = serde_json::from_value(json!({
            "id": 7,
            "title": "Write report",
            "description": "quarterly numbers",
            "completed": true,
            "created_at": "2024-05-01T12:00:00Z",
            "user_id": 2
        }))
        .expect("full task should decode");

        assert!(task.completed);
        assert_eq!(task.description.as_deref(), Some("quarterly numbers"));
        assert_eq!(task.user_id, Some(2));
        assert!(task.created_at.is_some());
    }

    #[test]
    fn task_draft_blank_title_detection_trims() {
        assert!(TaskDraft::new("   ", "anything").title_is_blank());
        assert!(!TaskDraft::new("Buy milk", "").title_is_blank());
    }

    #[test]
    fn task_draft_serializes_empty_description_as_is() {
        let draft = TaskDraft::new("Buy milk", "");
        let value = serde_json::to_value(&draft).expect("draft should encode");
        assert_eq!(value, json!({"title": "Buy milk", "description": ""}));
    }

    #[test]
    fn completion_patch_is_flag_only() {
        let patch = TaskCompletionPatch { completed: true };
        let value = serde_json::to_value(patch).expect("patch should encode");
        assert_eq!(value, json!({"completed": true}));
    }

    #[test]
    fn error_body_tolerates_structured_detail() {
        // FastAPI validation errors carry a list under `detail`; the typed
        // decode fails and callers fall back to raw body text.
        let parsed = serde_json::from_value::<ApiErrorBody>(json!({
            "detail": [{"loc": ["body", "title"], "msg": "field required"}]
        }));
        assert!(parsed.is_err());

        let parsed: ApiErrorBody =
            serde_json::from_value(json!({"detail": "Incorrect username or password"}))
                .expect("string detail should decode");
        assert_eq!(
            parsed.detail.as_deref(),
            Some("Incorrect username or password")
        );
    }

    #[test]
    fn analysis_decodes_analyzer_payload() {
        let analysis: TaskAnalysis = serde_json::from_value(json!({
            "summary": {
                "task_distribution": {
                    "total_tasks": 4,
                    "completed_tasks": 1,
                    "pending_tasks": 3,
                    "completion_rate": 25.0
                },
                "workload_status": "Moderate workload. Focus on completing high-priority tasks first.",
                "optimization_tips": [
                    "Regular breaks can help maintain productivity and focus."
                ]
            },
            "priority_tasks": [
                {"id": 2, "title": "Write report", "reason": "Pending task requiring attention"}
            ],
            "individual_analyses": [
                {"task_id": 2, "analysis": "High priority; block an hour.", "success": true}
            ]
        }))
        .expect("analysis should decode");

        assert_eq!(analysis.summary.task_distribution.total_tasks, 4);
        assert!((analysis.summary.task_distribution.completion_rate - 25.0).abs() < f64::EPSILON);
        assert_eq!(analysis.priority_tasks.len(), 1);
        assert!(analysis.individual_analyses[0].success);
    }
}
