//! Analytics command: `analyze`.

use crate::cli::OutputFormat;
use crate::context::{AppContext, CliResult};
use crate::output::render_analysis;

/// Fetch the server-computed analysis aggregate and render it.
///
/// Unlike the `dashboard` command this path surfaces failures directly: a
/// failed fetch is an execution error, not a banner.
pub(crate) async fn handle_analyze(ctx: &AppContext, format: OutputFormat) -> CliResult<()> {
    let token = ctx.require_token()?;
    let analysis = ctx.api.analyze_tasks(token).await?;
    render_analysis(&analysis, format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::MockServer;
    use httpmock::prelude::*;
    use serde_json::json;
    use taskdeck_client::{ApiClient, SessionToken};

    use crate::context::EXIT_FAILURE;

    fn context_for(server: &MockServer) -> AppContext {
        AppContext {
            api: ApiClient::new(server.base_url().parse().expect("valid URL"))
                .expect("client builds"),
            token: Some(SessionToken::new("tok")),
        }
    }

    #[tokio::test]
    async fn analyze_renders_the_aggregate() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/tasks/analyze")
                    .header("authorization", "Bearer tok");
                then.status(200)
                    .header("content-type", "application/json")
                    .json_body(json!({
                        "summary": {
                            "task_distribution": {
                                "total_tasks": 1,
                                "completed_tasks": 0,
                                "pending_tasks": 1,
                                "completion_rate": 0.0
                            },
                            "workload_status": "Light workload",
                            "optimization_tips": []
                        },
                        "priority_tasks": [],
                        "individual_analyses": []
                    }));
            })
            .await;

        let ctx = context_for(&server);
        handle_analyze(&ctx, OutputFormat::Json)
            .await
            .expect("analysis fetch succeeds");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn analyze_failure_is_an_execution_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/tasks/analyze");
                then.status(503);
            })
            .await;

        let ctx = context_for(&server);
        let err = handle_analyze(&ctx, OutputFormat::Table)
            .await
            .expect_err("analysis fetch fails");
        assert_eq!(err.exit_code(), EXIT_FAILURE);
    }
}
