//! Submission gate for questionnaire drafts.
//!
//! Checks run in a fixed order and the first failure wins; only that one
//! message reaches the user. Nothing here touches the network.

use super::tree::QuestionnaireDraft;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Questionnaire name is blank after trimming.
    MissingName,
    /// No sections, or no questions anywhere.
    NoContent,
    /// Some section name is blank after trimming.
    UnnamedSection,
    /// Some question text is blank after trimming.
    EmptyQuestion,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            ValidationError::MissingName => "Please enter a name for the questionnaire.",
            ValidationError::NoContent => "Please add at least one section with a question.",
            ValidationError::UnnamedSection => "Please name every section.",
            ValidationError::EmptyQuestion => "Please fill in every question.",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for ValidationError {}

pub fn validate(draft: &QuestionnaireDraft) -> Result<(), ValidationError> {
    if draft.name.trim().is_empty() {
        return Err(ValidationError::MissingName);
    }
    if draft.sections.is_empty() || draft.total_questions() == 0 {
        return Err(ValidationError::NoContent);
    }
    if draft.sections.iter().any(|s| s.name.trim().is_empty()) {
        return Err(ValidationError::UnnamedSection);
    }
    if draft
        .sections
        .iter()
        .any(|s| s.questions.iter().any(|q| q.text.trim().is_empty()))
    {
        return Err(ValidationError::EmptyQuestion);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_draft() -> QuestionnaireDraft {
        let draft = QuestionnaireDraft::new()
            .set_name("Social Skills")
            .add_section();
        let section = draft.sections[0].temp_id;
        let draft = draft
            .rename_section(section, "Communication")
            .add_question(section);
        let question = draft.sections[0].questions[0].temp_id;
        draft.set_question_text(section, question, "Makes eye contact?")
    }

    #[test]
    fn accepts_complete_draft() {
        assert_eq!(validate(&filled_draft()), Ok(()));
    }

    #[test]
    fn rejects_blank_name_first() {
        // Name check fires even when everything else is also wrong.
        let draft = QuestionnaireDraft::new().set_name("   ");
        assert_eq!(validate(&draft), Err(ValidationError::MissingName));
    }

    #[test]
    fn rejects_draft_without_content() {
        let draft = QuestionnaireDraft::new().set_name("Social Skills");
        assert_eq!(validate(&draft), Err(ValidationError::NoContent));

        // A section without any question is still "no content".
        let draft = draft.add_section();
        let s = draft.sections[0].temp_id;
        let draft = draft.rename_section(s, "Communication");
        assert_eq!(validate(&draft), Err(ValidationError::NoContent));
    }

    #[test]
    fn rejects_unnamed_section_before_empty_question() {
        let draft = filled_draft().add_section();
        let unnamed = draft.sections[1].temp_id;
        let draft = draft.add_question(unnamed);
        // Both an unnamed section and an empty question exist; section wins.
        assert_eq!(validate(&draft), Err(ValidationError::UnnamedSection));
    }

    #[test]
    fn rejects_whitespace_only_question() {
        let draft = filled_draft();
        let s = draft.sections[0].temp_id;
        let draft = draft.add_question(s);
        let q = draft.sections[0].questions[1].temp_id;
        let draft = draft.set_question_text(s, q, "   ");
        assert_eq!(validate(&draft), Err(ValidationError::EmptyQuestion));
    }
}
