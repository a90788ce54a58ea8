use anyhow::Result;
use clap::Parser;
use log::info;

use assess_cli::auth::SessionExpired;
use assess_cli::cli::commands::{
    handle_auth_command, handle_draft_command, handle_forms_command, handle_groups_command,
};
use assess_cli::cli::{Cli, Commands};
use assess_cli::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logger to file (truncate on each run)
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open("assess-cli.log")?;
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .init();

    let cli = Cli::parse();
    info!("Starting assess-cli");

    let result = match cli.command {
        Commands::Auth(cmd) => handle_auth_command(cmd).await,
        Commands::Forms(cmd) => handle_forms_command(cmd).await,
        Commands::Groups(cmd) => handle_groups_command(cmd).await,
        Commands::Draft(cmd) => handle_draft_command(cmd).await,
    };

    // A 401 means the stored session is no longer good; drop it so the next
    // command prompts for a fresh login instead of failing the same way.
    if let Err(ref e) = result {
        if e.chain().any(|c| c.downcast_ref::<SessionExpired>().is_some()) {
            if let Ok(mut config) = Config::load() {
                let _ = config.clear_session();
            }
            eprintln!("Session expired. Run `assess-cli auth login` and try again.");
        }
    }

    result
}
