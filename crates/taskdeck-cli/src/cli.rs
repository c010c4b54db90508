//! Argument parsing and command dispatch.

use clap::{Args, Parser, Subcommand, ValueEnum};
use url::Url;
use uuid::Uuid;

use taskdeck_client::SessionToken;

use crate::commands::{analysis, auth, tasks};
use crate::context::{AppContext, CliDependencies, CliResult, parse_url};

const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

/// Parses CLI arguments, executes the requested command, and handles
/// outcome telemetry emission. Returns the process exit code.
pub async fn run() -> i32 {
    let cli = Cli::parse();
    let command_name = command_label(&cli.command);
    let trace_id = Uuid::new_v4().to_string();
    let deps = match CliDependencies::from_cli(&cli, &trace_id) {
        Ok(deps) => deps,
        Err(err) => {
            eprintln!("error: {}", err.display_message());
            return err.exit_code();
        }
    };
    let result = dispatch(cli, &deps).await;

    let (exit_code, message, outcome) = match result {
        Ok(()) => (0, None, "success"),
        Err(err) => {
            let exit_code = err.exit_code();
            let message = err.display_message();
            eprintln!("error: {message}");
            (exit_code, Some(message), "error")
        }
    };

    if let Some(emitter) = &deps.telemetry {
        emitter
            .emit(
                &trace_id,
                command_name,
                outcome,
                exit_code,
                message.as_deref(),
            )
            .await;
    }

    exit_code
}

async fn dispatch(cli: Cli, deps: &CliDependencies) -> CliResult<()> {
    let ctx = AppContext {
        api: deps.api.clone(),
        token: cli.token.map(SessionToken::new),
    };

    match cli.command {
        Command::Register(args) => auth::handle_register(&ctx, args, cli.output).await,
        Command::Login(args) => auth::handle_login(&ctx, args).await,
        Command::Whoami => auth::handle_whoami(&ctx, cli.output).await,
        Command::Ls => tasks::handle_list(&ctx, cli.output).await,
        Command::Add(args) => tasks::handle_add(&ctx, args).await,
        Command::Toggle(args) => tasks::handle_toggle(&ctx, args.id).await,
        Command::Rm(args) => tasks::handle_remove(&ctx, args.id).await,
        Command::Analyze => analysis::handle_analyze(&ctx, cli.output).await,
        Command::Dashboard => tasks::handle_dashboard(&ctx, cli.output).await,
    }
}

#[derive(Parser)]
#[command(name = "taskdeck", about = "Command-line client for the task-manager API")]
pub(crate) struct Cli {
    #[arg(
        long,
        global = true,
        env = "TASKDECK_API_URL",
        value_parser = parse_url,
        default_value = DEFAULT_API_URL
    )]
    pub(crate) api_url: Url,
    #[arg(
        long,
        global = true,
        env = "TASKDECK_TOKEN",
        help = "Bearer token obtained from `taskdeck login`"
    )]
    pub(crate) token: Option<String>,
    #[arg(
        long,
        global = true,
        env = "TASKDECK_HTTP_TIMEOUT_SECS",
        default_value_t = DEFAULT_TIMEOUT_SECS
    )]
    pub(crate) timeout: u64,
    #[arg(
        long = "output",
        alias = "format",
        global = true,
        value_enum,
        default_value = "table",
        help = "Select output format for commands that render structured data"
    )]
    pub(crate) output: OutputFormat,
    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Subcommand)]
pub(crate) enum Command {
    /// Create a new account.
    Register(RegisterArgs),
    /// Exchange credentials for a bearer token and print it.
    Login(LoginArgs),
    /// Show the profile of the authenticated user.
    Whoami,
    /// List the task collection.
    Ls,
    /// Create a task.
    Add(AddArgs),
    /// Flip a task's completion flag.
    Toggle(ToggleArgs),
    /// Delete a task.
    Rm(TaskIdArg),
    /// Fetch and render the server-computed task analysis.
    Analyze,
    /// Render the task list and analytics screens in one pass.
    Dashboard,
}

#[derive(Args)]
pub(crate) struct RegisterArgs {
    #[arg(long)]
    pub(crate) email: String,
    #[arg(long, help = "Password; prompted for interactively when omitted")]
    pub(crate) password: Option<String>,
}

#[derive(Args)]
pub(crate) struct LoginArgs {
    #[arg(long)]
    pub(crate) email: String,
    #[arg(long, help = "Password; prompted for interactively when omitted")]
    pub(crate) password: Option<String>,
}

#[derive(Args)]
pub(crate) struct AddArgs {
    #[arg(help = "Task title (must not be empty)")]
    pub(crate) title: String,
    #[arg(long, default_value = "", help = "Optional task description")]
    pub(crate) description: String,
}

#[derive(Args)]
pub(crate) struct ToggleArgs {
    #[arg(help = "Task identifier")]
    pub(crate) id: i64,
}

#[derive(Args)]
pub(crate) struct TaskIdArg {
    #[arg(help = "Task identifier")]
    pub(crate) id: i64,
}

#[derive(Copy, Clone, Debug, Default, ValueEnum)]
pub(crate) enum OutputFormat {
    #[default]
    Table,
    Json,
}

const fn command_label(command: &Command) -> &'static str {
    match command {
        Command::Register(_) => "register",
        Command::Login(_) => "login",
        Command::Whoami => "whoami",
        Command::Ls => "ls",
        Command::Add(_) => "add",
        Command::Toggle(_) => "toggle",
        Command::Rm(_) => "rm",
        Command::Analyze => "analyze",
        Command::Dashboard => "dashboard",
    }
}
