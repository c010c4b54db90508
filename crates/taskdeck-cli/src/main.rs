//! Thin entrypoint for the `taskdeck` binary.

use std::process;

#[tokio::main]
async fn main() {
    taskdeck_cli::init_logging();
    let exit_code = taskdeck_cli::run().await;
    if exit_code != 0 {
        process::exit(exit_code);
    }
}
