//! Shared command context, CLI error type, and telemetry plumbing.

use std::io::IsTerminal;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use serde::Serialize;
use tracing_subscriber::EnvFilter;
use url::Url;

use taskdeck_client::{ApiClient, ClientError, ClientOptions, SessionToken};

use crate::cli::Cli;

/// Exit code for validation failures (bad input, missing token).
pub(crate) const EXIT_VALIDATION: i32 = 2;
/// Exit code for execution failures (transport, server, decode).
pub(crate) const EXIT_FAILURE: i32 = 3;

const TELEMETRY_ENDPOINT_ENV: &str = "TASKDECK_TELEMETRY_ENDPOINT";

/// Result alias used by every command handler.
pub(crate) type CliResult<T> = Result<T, CliError>;

/// Failure raised while executing a CLI command.
#[derive(Debug)]
pub(crate) enum CliError {
    /// The invocation was rejected before or by the server for bad input.
    Validation(String),
    /// The command could not complete.
    Failure(anyhow::Error),
}

impl CliError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub(crate) fn failure(err: impl Into<anyhow::Error>) -> Self {
        Self::Failure(err.into())
    }

    pub(crate) const fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) => EXIT_VALIDATION,
            Self::Failure(_) => EXIT_FAILURE,
        }
    }

    /// Human-readable message suitable for stderr and telemetry.
    pub(crate) fn display_message(&self) -> String {
        match self {
            Self::Validation(message) => message.clone(),
            Self::Failure(err) => format!("{err:#}"),
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_message())
    }
}

impl std::error::Error for CliError {}

impl From<ClientError> for CliError {
    fn from(err: ClientError) -> Self {
        if err.is_validation() {
            Self::Validation(err.to_string())
        } else {
            Self::Failure(anyhow::Error::new(err))
        }
    }
}

/// Per-invocation context handed to command handlers.
pub(crate) struct AppContext {
    pub(crate) api: ApiClient,
    pub(crate) token: Option<SessionToken>,
}

impl AppContext {
    /// Returns the configured session token or a validation error telling
    /// the operator how to supply one.
    pub(crate) fn require_token(&self) -> CliResult<&SessionToken> {
        self.token.as_ref().ok_or_else(|| {
            CliError::validation("session token is required (pass --token or set TASKDECK_TOKEN)")
        })
    }
}

/// Dependencies resolved once per invocation from arguments and environment.
pub(crate) struct CliDependencies {
    pub(crate) api: ApiClient,
    pub(crate) telemetry: Option<TelemetryEmitter>,
}

impl CliDependencies {
    pub(crate) fn from_cli(cli: &Cli, trace_id: &str) -> CliResult<Self> {
        let options = ClientOptions {
            timeout: Duration::from_secs(cli.timeout),
            request_id: Some(trace_id.to_string()),
        };
        let api =
            ApiClient::with_options(cli.api_url.clone(), &options).map_err(CliError::failure)?;
        Ok(Self {
            api,
            telemetry: TelemetryEmitter::from_env(),
        })
    }
}

#[derive(Serialize)]
struct TelemetryEvent<'a> {
    command: &'a str,
    outcome: &'a str,
    trace_id: &'a str,
    exit_code: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'a str>,
    timestamp_ms: u128,
}

/// Fire-and-forget emitter posting one outcome event per invocation to an
/// operator-configured collector endpoint.
#[derive(Clone)]
pub(crate) struct TelemetryEmitter {
    client: reqwest::Client,
    endpoint: Url,
}

impl TelemetryEmitter {
    /// Builds an emitter when `TASKDECK_TELEMETRY_ENDPOINT` holds a valid
    /// URL; otherwise telemetry stays disabled.
    pub(crate) fn from_env() -> Option<Self> {
        let raw = std::env::var(TELEMETRY_ENDPOINT_ENV).ok()?;
        match raw.parse::<Url>() {
            Ok(endpoint) => Some(Self {
                client: reqwest::Client::new(),
                endpoint,
            }),
            Err(err) => {
                tracing::warn!(error = %err, "ignoring invalid telemetry endpoint");
                None
            }
        }
    }

    /// Posts the outcome event. Emission failures are logged and never affect
    /// the command's exit code.
    pub(crate) async fn emit(
        &self,
        trace_id: &str,
        command: &str,
        outcome: &str,
        exit_code: i32,
        message: Option<&str>,
    ) {
        let event = TelemetryEvent {
            command,
            outcome,
            trace_id,
            exit_code,
            message,
            timestamp_ms: timestamp_now_ms(),
        };
        if let Err(err) = self.client.post(self.endpoint.clone()).json(&event).send().await {
            tracing::debug!(error = %err, "telemetry emission failed");
        }
    }
}

fn timestamp_now_ms() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis())
        .unwrap_or_default()
}

/// Resolves a password from the flag value or an interactive prompt.
///
/// Prompting requires a terminal on stdin; piped invocations must pass the
/// flag explicitly.
pub(crate) fn resolve_password(flag: Option<String>) -> CliResult<String> {
    if let Some(password) = flag {
        return Ok(password);
    }
    if !std::io::stdin().is_terminal() {
        return Err(CliError::validation(
            "password required: pass --password or run interactively",
        ));
    }
    rpassword::prompt_password("Password: ").map_err(CliError::failure)
}

/// Clap value parser for URL-typed flags.
pub(crate) fn parse_url(raw: &str) -> Result<Url, String> {
    raw.parse::<Url>().map_err(|err| err.to_string())
}

/// Installs the global tracing subscriber: stderr, `RUST_LOG` override,
/// `info` by default.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
