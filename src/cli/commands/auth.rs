use crate::auth::{AuthClient, RegisterRequest};
use crate::config::Config;
use anyhow::Result;
use clap::{Args, Subcommand};
use colored::Colorize;

#[derive(Args)]
pub struct AuthCommands {
    #[command(subcommand)]
    pub command: AuthSubcommands,
}

#[derive(Subcommand)]
pub enum AuthSubcommands {
    /// Log in and store the session in the local profile
    Login {
        /// Account email
        email: String,
    },
    /// Create a new account
    Register {
        /// Account email
        email: String,
        /// Full name
        #[arg(long)]
        name: String,
        /// Identity document number
        #[arg(long)]
        document: String,
        /// Phone number
        #[arg(long)]
        phone: String,
    },
    /// Discard the stored session
    Logout,
    /// Show the stored session, if any
    Status,
}

pub async fn handle_auth_command(cmd: AuthCommands) -> Result<()> {
    let mut config = Config::load()?;

    match cmd.command {
        AuthSubcommands::Login { email } => {
            let password = dialoguer::Password::new()
                .with_prompt("Password")
                .interact()?;

            let auth = AuthClient::new(config.api_url());
            let session = auth.login(&email, &password).await?;

            match auth.fetch_role(&session).await {
                Ok(role) => println!("Logged in as {} ({:?})", session.email.bold(), role.role),
                Err(e) => {
                    log::warn!("role lookup failed: {}", e);
                    println!("Logged in as {}", session.email.bold());
                }
            }
            println!("Session expires {}", session.expires_at);
            config.set_session(session)?;
        }
        AuthSubcommands::Register {
            email,
            name,
            document,
            phone,
        } => {
            let password = dialoguer::Password::new()
                .with_prompt("Password")
                .with_confirmation("Confirm password", "Passwords do not match")
                .interact()?;

            let auth = AuthClient::new(config.api_url());
            let account = auth
                .register(&RegisterRequest {
                    full_name: name,
                    email,
                    password,
                    document_number: document,
                    phone_number: phone,
                })
                .await?;

            println!("Registered {} ({})", account.email.bold(), account.id);
            println!("Run `assess-cli auth login {}` to start a session.", account.email);
        }
        AuthSubcommands::Logout => {
            config.clear_session()?;
            println!("Logged out.");
        }
        AuthSubcommands::Status => match config.session() {
            Ok(session) => {
                println!("Logged in as {}", session.email.bold());
                println!("Session expires {}", session.expires_at);
            }
            Err(e) => println!("{}", e.to_string().yellow()),
        },
    }

    Ok(())
}
