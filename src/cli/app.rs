use super::commands::{AuthCommands, DraftCommands, FormsCommands, GroupsCommands};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "assess-cli")]
#[command(about = "A CLI for the behavioral-assessment platform")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Session management (login, logout, status)
    Auth(AuthCommands),
    /// Questionnaires: list, inspect, pull/push drafts, delete
    Forms(FormsCommands),
    /// Skill-group catalog
    Groups(GroupsCommands),
    /// Local questionnaire draft files
    Draft(DraftCommands),
}
