//! Task collection commands: `ls`, `add`, `toggle`, `rm`, `dashboard`.

use taskdeck_api_models::TaskDraft;
use taskdeck_app::{AnalyticsScreen, TaskListScreen};

use crate::cli::{AddArgs, OutputFormat};
use crate::context::{AppContext, CliError, CliResult};
use crate::output::{render_dashboard, render_task_list};

/// List the task collection in server order.
pub(crate) async fn handle_list(ctx: &AppContext, format: OutputFormat) -> CliResult<()> {
    let token = ctx.require_token()?;
    let tasks = ctx.api.list_tasks(token).await?;
    render_task_list(&tasks, format)
}

/// Create a task. A blank title is rejected locally before any request.
pub(crate) async fn handle_add(ctx: &AppContext, args: AddArgs) -> CliResult<()> {
    let token = ctx.require_token()?;
    let draft = TaskDraft::new(args.title, args.description);
    if draft.title_is_blank() {
        return Err(CliError::validation("title must not be empty"));
    }
    let created = ctx.api.create_task(token, &draft).await?;
    println!("Task created (id: {})", created.id);
    Ok(())
}

/// Flip a task's completion flag by sending the negation of its current
/// server-side value.
pub(crate) async fn handle_toggle(ctx: &AppContext, task_id: i64) -> CliResult<()> {
    let token = ctx.require_token()?;
    let tasks = ctx.api.list_tasks(token).await?;
    let Some(task) = tasks.iter().find(|task| task.id == task_id) else {
        return Err(CliError::validation(format!("no task with id {task_id}")));
    };
    let updated = ctx.api.set_completed(token, task_id, !task.completed).await?;
    let status = if updated.completed { "completed" } else { "pending" };
    println!("Task {} is now {status}", updated.id);
    Ok(())
}

/// Delete a task by id.
pub(crate) async fn handle_remove(ctx: &AppContext, task_id: i64) -> CliResult<()> {
    let token = ctx.require_token()?;
    ctx.api.delete_task(token, task_id).await?;
    println!("Task {task_id} deleted");
    Ok(())
}

/// Drive the task list and analytics screens through one load each and
/// render the combined result. Screen error semantics apply: a failed task
/// fetch leaves the list empty and logs, while a failed analysis fetch shows
/// its error banner.
pub(crate) async fn handle_dashboard(ctx: &AppContext, format: OutputFormat) -> CliResult<()> {
    let token = ctx.require_token()?;

    let mut list = TaskListScreen::new();
    list.load(&ctx.api, token).await;

    let mut analytics = AnalyticsScreen::new();
    analytics.refresh(&ctx.api, token).await;

    render_dashboard(list.tasks(), analytics.state(), format)
}
