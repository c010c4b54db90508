//! Account and session commands: `register`, `login`, `whoami`.

use taskdeck_api_models::RegisterRequest;

use crate::cli::{LoginArgs, OutputFormat, RegisterArgs};
use crate::context::{AppContext, CliResult, resolve_password};
use crate::output::render_user;

/// Create an account. Registration never yields a token; the operator logs
/// in afterwards.
pub(crate) async fn handle_register(
    ctx: &AppContext,
    args: RegisterArgs,
    format: OutputFormat,
) -> CliResult<()> {
    let password = resolve_password(args.password)?;
    let request = RegisterRequest {
        email: args.email,
        password,
    };
    let profile = ctx.api.register(&request).await?;
    eprintln!("Account created; run `taskdeck login` to obtain a token.");
    render_user(&profile, format)
}

/// Exchange credentials for a bearer token and print the raw token on
/// stdout, so it can be captured into `TASKDECK_TOKEN` directly.
pub(crate) async fn handle_login(ctx: &AppContext, args: LoginArgs) -> CliResult<()> {
    let password = resolve_password(args.password)?;
    let token = ctx.api.login(&args.email, &password).await?;
    println!("{}", token.as_str());
    Ok(())
}

/// Show the authenticated user's profile.
pub(crate) async fn handle_whoami(ctx: &AppContext, format: OutputFormat) -> CliResult<()> {
    let token = ctx.require_token()?;
    let profile = ctx.api.current_user(token).await?;
    render_user(&profile, format)
}
