//! Editor events, one variant per editable field or structural action.
//!
//! The driving layer (CLI, tests, a future interactive frontend) feeds these
//! through [`QuestionnaireDraft::apply`] one at a time; each event produces
//! the next tree synchronously.

use super::ids::TempId;
use super::tree::QuestionnaireDraft;

#[derive(Debug, Clone, PartialEq)]
pub enum EditorMsg {
    SetName(String),
    SetDescription(String),
    AddSection,
    RenameSection { section: TempId, name: String },
    DeleteSection { section: TempId },
    ToggleSection { section: TempId },
    SetSectionCode { section: TempId, code: Option<String> },
    AddQuestion { section: TempId },
    SetQuestionText { section: TempId, question: TempId, text: String },
    SetQuestionObservations { section: TempId, question: TempId, observations: String },
    DeleteQuestion { section: TempId, question: TempId },
}

impl QuestionnaireDraft {
    pub fn apply(&self, msg: EditorMsg) -> Self {
        match msg {
            EditorMsg::SetName(name) => self.set_name(&name),
            EditorMsg::SetDescription(description) => self.set_description(&description),
            EditorMsg::AddSection => self.add_section(),
            EditorMsg::RenameSection { section, name } => self.rename_section(section, &name),
            EditorMsg::DeleteSection { section } => self.delete_section(section),
            EditorMsg::ToggleSection { section } => self.toggle_section(section),
            EditorMsg::SetSectionCode { section, code } => self.set_section_code(section, code),
            EditorMsg::AddQuestion { section } => self.add_question(section),
            EditorMsg::SetQuestionText {
                section,
                question,
                text,
            } => self.set_question_text(section, question, &text),
            EditorMsg::SetQuestionObservations {
                section,
                question,
                observations,
            } => self.set_question_observations(section, question, &observations),
            EditorMsg::DeleteQuestion { section, question } => {
                self.delete_question(section, question)
            }
        }
    }
}
