use crate::cli::draft_file::DraftFile;
use crate::editor::{QuestionnaireDraft, validate};
use anyhow::Result;
use clap::{Args, Subcommand};
use colored::Colorize;
use std::path::PathBuf;

#[derive(Args)]
pub struct DraftCommands {
    #[command(subcommand)]
    pub command: DraftSubcommands,
}

#[derive(Subcommand)]
pub enum DraftSubcommands {
    /// Scaffold a new draft file
    New {
        /// Draft file to write
        #[arg(short, long, default_value = "questionnaire.toml")]
        output: PathBuf,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Check a draft file against the submission rules without saving
    Check {
        /// Draft file to validate
        file: PathBuf,
    },
}

pub async fn handle_draft_command(cmd: DraftCommands) -> Result<()> {
    match cmd.command {
        DraftSubcommands::New { output, force } => {
            if output.exists() && !force {
                anyhow::bail!("{:?} already exists (use --force to overwrite)", output);
            }

            // Build the scaffold through the editor so the file reflects
            // exactly what a fresh authoring session produces.
            let draft = QuestionnaireDraft::new()
                .set_name("New questionnaire")
                .add_section();
            let section = draft.sections[0].temp_id;
            let draft = draft
                .rename_section(section, "First section")
                .add_question(section);
            let question = draft.sections[0].questions[0].temp_id;
            let draft = draft.set_question_text(section, question, "First question?");

            DraftFile::from_editor(&draft, &[]).store(&output)?;
            println!("Wrote draft scaffold to {:?}", output);
            println!("Edit it, then run `assess-cli forms push {:?}`.", output);
            Ok(())
        }
        DraftSubcommands::Check { file } => {
            let (draft, answers) = DraftFile::load(&file)?.into_editor();

            match validate(&draft) {
                Ok(()) => {
                    println!(
                        "{} {:?}: {} question(s) in {} section(s), {} default answer(s)",
                        "✓".green(),
                        file,
                        draft.total_questions(),
                        draft.named_sections(),
                        answers.len()
                    );
                    Ok(())
                }
                Err(e) => anyhow::bail!("{:?}: {}", file, e),
            }
        }
    }
}
