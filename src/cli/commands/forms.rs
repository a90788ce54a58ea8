use crate::api::AssessClient;
use crate::api::models::QuestionnaireStatus;
use crate::cli::draft_file::DraftFile;
use crate::config::Config;
use crate::editor::{QuestionnaireDraft, SaveOutcome, save_draft};
use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use colored::Colorize;
use std::path::PathBuf;

#[derive(Args)]
pub struct FormsCommands {
    #[command(subcommand)]
    pub command: FormsSubcommands,
}

#[derive(Subcommand)]
pub enum FormsSubcommands {
    /// List all questionnaires
    List,
    /// Show a questionnaire's sections and questions
    Show {
        /// Questionnaire id
        id: i64,
    },
    /// Download a questionnaire (and its default answers) into a draft file
    Pull {
        /// Questionnaire id
        id: i64,
        /// Draft file to write
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Validate a draft file and save it (create or update)
    Push {
        /// Draft file to submit
        file: PathBuf,
    },
    /// Delete a questionnaire
    Delete {
        /// Questionnaire id
        id: i64,
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}

fn status_label(status: QuestionnaireStatus) -> colored::ColoredString {
    match status {
        QuestionnaireStatus::Draft => "Draft".yellow(),
        QuestionnaireStatus::Published => "Published".green(),
        QuestionnaireStatus::Archived => "Archived".dimmed(),
    }
}

fn authed_client(config: &Config) -> Result<AssessClient> {
    AssessClient::new(config.api_url(), config.session()?)
}

pub async fn handle_forms_command(cmd: FormsCommands) -> Result<()> {
    let config = Config::load()?;
    let client = authed_client(&config)?;

    match cmd.command {
        FormsSubcommands::List => list_command(&client).await,
        FormsSubcommands::Show { id } => show_command(&client, id).await,
        FormsSubcommands::Pull { id, output } => pull_command(&client, id, output).await,
        FormsSubcommands::Push { file } => push_command(&client, file).await,
        FormsSubcommands::Delete { id, force } => delete_command(&client, id, force).await,
    }
}

async fn list_command(client: &AssessClient) -> Result<()> {
    let list = client
        .list_questionnaires()
        .await
        .context("could not load questionnaires")?;

    if list.questionnaires.is_empty() {
        println!("No questionnaires yet.");
        return Ok(());
    }

    println!(
        "{:<6} {:<40} {:<10} {}",
        "ID".bold(),
        "NAME".bold(),
        "STATUS".bold(),
        "CREATED".bold()
    );
    for q in &list.questionnaires {
        println!(
            "{:<6} {:<40} {:<10} {}",
            q.id,
            q.name,
            status_label(q.status),
            q.created_at.format("%Y-%m-%d")
        );
    }
    println!("{} questionnaire(s)", list.total_count);
    Ok(())
}

async fn show_command(client: &AssessClient, id: i64) -> Result<()> {
    let detail = client
        .fetch_questionnaire(id)
        .await
        .context("could not load questionnaire")?;
    let answers = client.list_default_answers(id).await.unwrap_or_default();
    let draft = QuestionnaireDraft::from_detail(&detail);

    println!("{} ({})", detail.name.bold(), status_label(detail.status));
    if let Some(description) = &detail.description {
        println!("{}", description.dimmed());
    }
    println!(
        "{} question(s) in {} section(s)",
        draft.total_questions(),
        draft.named_sections()
    );

    for (i, section) in detail.sections.iter().enumerate() {
        println!("\n{}. {}", i + 1, section.name.bold());
        for (j, question) in section.questions.iter().enumerate() {
            match &question.observations {
                Some(obs) => println!("   {}.{} {} ({})", i + 1, j + 1, question.text, obs.dimmed()),
                None => println!("   {}.{} {}", i + 1, j + 1, question.text),
            }
        }
    }

    if !answers.is_empty() {
        println!("\nDefault answers:");
        for answer in &answers {
            println!("  {} ({})", answer.label, answer.color);
        }
    }
    Ok(())
}

async fn pull_command(client: &AssessClient, id: i64, output: Option<PathBuf>) -> Result<()> {
    let detail = client
        .fetch_questionnaire(id)
        .await
        .context("could not load questionnaire")?;
    let answers = client
        .list_default_answers(id)
        .await
        .context("could not load default answers")?;

    let draft = QuestionnaireDraft::from_detail(&detail);
    let path = output.unwrap_or_else(|| PathBuf::from(format!("questionnaire-{}.toml", id)));
    DraftFile::from_editor(&draft, &answers).store(&path)?;

    println!("Pulled questionnaire {} into {:?}", id, path);
    Ok(())
}

async fn push_command(client: &AssessClient, file: PathBuf) -> Result<()> {
    let (draft, answers) = DraftFile::load(&file)?.into_editor();

    match save_draft(client, &draft, &answers).await? {
        SaveOutcome::Created(detail) => {
            println!(
                "{} Created questionnaire {} (\"{}\")",
                "✓".green(),
                detail.id,
                detail.name
            );
            println!(
                "Run `assess-cli forms pull {}` to get a draft with ids for further edits.",
                detail.id
            );
        }
        SaveOutcome::Updated { detail, answers } => {
            println!(
                "{} Updated questionnaire {} (\"{}\")",
                "✓".green(),
                detail.id,
                detail.name
            );
            for outcome in &answers.outcomes {
                match &outcome.result {
                    Ok(()) => println!("  {} {}", "✓".green(), outcome.op),
                    Err(e) => println!("  {} {}: {}", "✗".red(), outcome.op, e),
                }
            }
            if !answers.is_clean() {
                anyhow::bail!(
                    "{} of {} default-answer call(s) failed; the server list may be partial. Pull the questionnaire to see its current state",
                    answers.failed(),
                    answers.outcomes.len()
                );
            }
        }
    }
    Ok(())
}

async fn delete_command(client: &AssessClient, id: i64, force: bool) -> Result<()> {
    if !force {
        let confirmed = dialoguer::Confirm::new()
            .with_prompt(format!("Delete questionnaire {}?", id))
            .default(false)
            .interact()?;
        if !confirmed {
            println!("Aborted.");
            return Ok(());
        }
    }

    client
        .delete_questionnaire(id)
        .await
        .context("could not delete questionnaire")?;
    println!("Deleted questionnaire {}", id);
    Ok(())
}
