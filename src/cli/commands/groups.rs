use crate::api::AssessClient;
use crate::api::models::SkillGroupEntry;
use crate::config::Config;
use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use colored::Colorize;
use rand::Rng;

#[derive(Args)]
pub struct GroupsCommands {
    #[command(subcommand)]
    pub command: GroupsSubcommands,
}

#[derive(Subcommand)]
pub enum GroupsSubcommands {
    /// List the skill-group catalog
    List,
    /// Show one catalog entry
    Show {
        /// Group code
        code: String,
    },
    /// Add a catalog entry
    Add {
        /// Group description
        description: String,
        /// Group code; generated when omitted
        #[arg(long)]
        code: Option<String>,
    },
    /// Change a catalog entry's description
    Update {
        /// Group code
        code: String,
        /// New description
        description: String,
    },
    /// Delete a catalog entry
    Remove {
        /// Group code
        code: String,
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}

/// Six-digit numeric code, matching what the backend already holds.
fn generate_code() -> String {
    format!("{:06}", rand::thread_rng().gen_range(0..1_000_000u32))
}

pub async fn handle_groups_command(cmd: GroupsCommands) -> Result<()> {
    let config = Config::load()?;
    let client = AssessClient::new(config.api_url(), config.session()?)?;

    match cmd.command {
        GroupsSubcommands::List => {
            let groups = client
                .list_skill_groups()
                .await
                .context("could not load skill-group catalog")?;

            if groups.is_empty() {
                println!("The skill-group catalog is empty.");
                return Ok(());
            }

            for group in &groups {
                println!("{:<12} {}", group.code.bold(), group.description);
            }
            Ok(())
        }
        GroupsSubcommands::Show { code } => {
            let group = client
                .fetch_skill_group(&code)
                .await
                .context("could not load skill group")?;
            println!("{:<12} {}", group.code.bold(), group.description);
            Ok(())
        }
        GroupsSubcommands::Add { description, code } => {
            let entry = SkillGroupEntry {
                code: code.unwrap_or_else(generate_code),
                description,
            };
            let created = client
                .create_skill_group(&entry)
                .await
                .context("could not create skill group")?;
            println!("{} Added group {} ({})", "✓".green(), created.code.bold(), created.description);
            Ok(())
        }
        GroupsSubcommands::Update { code, description } => {
            let updated = client
                .update_skill_group(&SkillGroupEntry { code, description })
                .await
                .context("could not update skill group")?;
            println!("{} Updated group {} ({})", "✓".green(), updated.code.bold(), updated.description);
            Ok(())
        }
        GroupsSubcommands::Remove { code, force } => {
            if !force {
                let confirmed = dialoguer::Confirm::new()
                    .with_prompt(format!("Delete skill group {}?", code))
                    .default(false)
                    .interact()?;
                if !confirmed {
                    println!("Aborted.");
                    return Ok(());
                }
            }

            client
                .delete_skill_group(&code)
                .await
                .context("could not delete skill group")?;
            println!("Deleted skill group {}", code);
            Ok(())
        }
    }
}
