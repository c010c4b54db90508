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
//! Client-side state machines for the task-manager screens.
//!
//! The remote server owns all task data; these types hold the in-memory
//! mirror and the small amount of view state each screen needs. The
//! transition rules are deliberate:
//!
//! - every mutation is followed by a full reload of the collection (no
//!   optimistic merge, no sequencing token, last completed fetch wins);
//! - task-list failures are swallowed to a log and leave state untouched,
//!   while the analytics screen surfaces a visible error state -- the two
//!   screens deliberately disagree, see DESIGN.md;
//! - the session shell never transitions back to the auth view once a token
//!   is stored.

pub mod analytics;
pub mod session;
pub mod tasks;

pub use analytics::{AnalyticsScreen, AnalyticsState, FETCH_FAILED_MESSAGE};
pub use session::{AuthTab, SessionShell, ShellView};
pub use tasks::{SubmitOutcome, TaskListScreen, WorkspaceTab};
