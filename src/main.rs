use std::process::ExitCode;

use clap::Parser;
use revticket_client::frameworks::app;
use revticket_client::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    app::init_runtime();

    match app::run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            ExitCode::FAILURE
        }
    }
}
