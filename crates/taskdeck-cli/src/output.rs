//! Renderers turning DTOs into terminal tables or pretty-printed JSON.

use serde::Serialize;
use serde_json::json;

use taskdeck_api_models::{Task, TaskAnalysis, UserProfile};
use taskdeck_app::AnalyticsState;

use crate::cli::OutputFormat;
use crate::context::{CliError, CliResult};

pub(crate) fn render_user(profile: &UserProfile, format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Table => println!("{}", format_user(profile)),
        OutputFormat::Json => println!("{}", to_pretty_json(profile)?),
    }
    Ok(())
}

pub(crate) fn render_task_list(tasks: &[Task], format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Table => println!("{}", format_task_table(tasks)),
        OutputFormat::Json => println!("{}", to_pretty_json(&tasks)?),
    }
    Ok(())
}

pub(crate) fn render_analysis(analysis: &TaskAnalysis, format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Table => println!("{}", format_analysis(analysis)),
        OutputFormat::Json => println!("{}", to_pretty_json(analysis)?),
    }
    Ok(())
}

pub(crate) fn render_dashboard(
    tasks: &[Task],
    analytics: &AnalyticsState,
    format: OutputFormat,
) -> CliResult<()> {
    match format {
        OutputFormat::Table => {
            println!("{}", format_task_table(tasks));
            println!();
            println!("{}", format_analytics_state(analytics));
        }
        OutputFormat::Json => {
            let analytics_value = match analytics {
                AnalyticsState::Loading => json!(null),
                AnalyticsState::Ready(analysis) => json!(analysis),
                AnalyticsState::Failed(message) => json!({ "error": message }),
            };
            let document = json!({ "tasks": tasks, "analytics": analytics_value });
            println!("{}", to_pretty_json(&document)?);
        }
    }
    Ok(())
}

fn to_pretty_json<T: Serialize>(value: &T) -> CliResult<String> {
    serde_json::to_string_pretty(value).map_err(CliError::failure)
}

fn format_user(profile: &UserProfile) -> String {
    let status = if profile.is_active { "active" } else { "inactive" };
    format!(
        "id: {}\nemail: {}\nstatus: {status}\ntasks: {}",
        profile.id,
        profile.email,
        profile.tasks.len()
    )
}

fn format_task_table(tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return "No tasks yet. Use `taskdeck add` to create one.".to_string();
    }
    let mut out = format!("{:>6}  {:4}  TITLE", "ID", "DONE");
    for task in tasks {
        let done = if task.completed { "[x]" } else { "[ ]" };
        out.push_str(&format!("\n{:>6}  {done:4}  {}", task.id, task.title));
        if let Some(description) = &task.description
            && !description.is_empty()
        {
            out.push_str(&format!("\n{:6}  {:4}  {description}", "", ""));
        }
    }
    out
}

fn format_analysis(analysis: &TaskAnalysis) -> String {
    let distribution = &analysis.summary.task_distribution;
    let mut out = format!(
        "Tasks: {} total, {} completed, {} pending ({:.1}% done)",
        distribution.total_tasks,
        distribution.completed_tasks,
        distribution.pending_tasks,
        distribution.completion_rate
    );
    out.push_str(&format!("\nWorkload: {}", analysis.summary.workload_status));
    if !analysis.priority_tasks.is_empty() {
        out.push_str("\n\nPriority tasks:");
        for task in &analysis.priority_tasks {
            out.push_str(&format!("\n  #{} {} ({})", task.id, task.title, task.reason));
        }
    }
    if !analysis.summary.optimization_tips.is_empty() {
        out.push_str("\n\nTips:");
        for tip in &analysis.summary.optimization_tips {
            out.push_str(&format!("\n  - {tip}"));
        }
    }
    if !analysis.individual_analyses.is_empty() {
        out.push_str("\n\nPer-task notes:");
        for insight in &analysis.individual_analyses {
            out.push_str(&format!("\n  #{}: {}", insight.task_id, insight.analysis));
        }
    }
    out
}

fn format_analytics_state(state: &AnalyticsState) -> String {
    match state {
        AnalyticsState::Loading => "Analytics: loading".to_string(),
        AnalyticsState::Ready(analysis) => format_analysis(analysis),
        AnalyticsState::Failed(message) => format!("Analytics: {message}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskdeck_api_models::{
        AnalysisSummary, PriorityTask, TaskDistribution, TaskInsight,
    };

    fn task(id: i64, title: &str, completed: bool) -> Task {
        Task {
            id,
            title: title.to_string(),
            description: None,
            completed,
            created_at: None,
            user_id: None,
        }
    }

    fn sample_analysis() -> TaskAnalysis {
        TaskAnalysis {
            summary: AnalysisSummary {
                task_distribution: TaskDistribution {
                    total_tasks: 2,
                    completed_tasks: 1,
                    pending_tasks: 1,
                    completion_rate: 50.0,
                },
                workload_status: "Light workload".to_string(),
                optimization_tips: vec!["Batch similar tasks".to_string()],
            },
            priority_tasks: vec![PriorityTask {
                id: 7,
                title: "Write report".to_string(),
                reason: "Pending task requiring attention".to_string(),
            }],
            individual_analyses: vec![TaskInsight {
                task_id: 7,
                analysis: "Block an hour for this.".to_string(),
                success: true,
            }],
        }
    }

    #[test]
    fn empty_task_table_suggests_adding() {
        assert!(format_task_table(&[]).contains("No tasks yet"));
    }

    #[test]
    fn task_table_marks_completion() {
        let rendered = format_task_table(&[task(1, "Buy milk", true), task(2, "Ship crate", false)]);
        assert!(rendered.contains("[x]"));
        assert!(rendered.contains("[ ]"));
        assert!(rendered.contains("Buy milk"));
    }

    #[test]
    fn task_table_includes_nonempty_descriptions() {
        let mut described = task(3, "Plan sprint", false);
        described.description = Some("draft the board first".to_string());
        let rendered = format_task_table(&[described]);
        assert!(rendered.contains("draft the board first"));
    }

    #[test]
    fn analysis_rendering_covers_all_sections() {
        let rendered = format_analysis(&sample_analysis());
        assert!(rendered.contains("2 total, 1 completed, 1 pending (50.0% done)"));
        assert!(rendered.contains("Light workload"));
        assert!(rendered.contains("#7 Write report"));
        assert!(rendered.contains("Batch similar tasks"));
        assert!(rendered.contains("Block an hour for this."));
    }

    #[test]
    fn failed_analytics_state_renders_banner() {
        let state = AnalyticsState::Failed("Failed to fetch task analysis".to_string());
        assert_eq!(
            format_analytics_state(&state),
            "Analytics: Failed to fetch task analysis"
        );
    }

    #[test]
    fn user_rendering_reports_activity() {
        let profile = UserProfile {
            id: 9,
            email: "me@example.com".to_string(),
            is_active: true,
            tasks: vec![task(1, "Buy milk", false)],
        };
        let rendered = format_user(&profile);
        assert!(rendered.contains("me@example.com"));
        assert!(rendered.contains("active"));
        assert!(rendered.contains("tasks: 1"));
    }
}
