//! TOML draft files: the on-disk form a questionnaire takes between
//! `forms pull` and `forms push`.
//!
//! Persisted ids are kept in the file so a pulled draft pushes back as an
//! update; a hand-written draft without ids pushes as a create. Section and
//! question order is the file order.

use crate::api::models::{DefaultAnswer, QuestionnaireStatus};
use crate::editor::{QuestionNode, QuestionnaireDraft, SectionNode, TempIdGen};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<QuestionnaireStatus>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub answers: Vec<DraftAnswer>,
    #[serde(default)]
    pub sections: Vec<DraftSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skill_group_code: Option<String>,
    #[serde(default)]
    pub questions: Vec<DraftQuestion>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftQuestion {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub text: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub observations: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftAnswer {
    /// 0 (or omitted) marks an answer the backend has not created yet.
    #[serde(default)]
    pub id: i64,
    pub label: String,
    pub color: String,
}

impl DraftFile {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read draft file {:?}", path))?;
        toml::from_str(&content).with_context(|| format!("failed to parse draft file {:?}", path))
    }

    pub fn store(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("failed to serialize draft")?;
        fs::write(path, content).with_context(|| format!("failed to write draft file {:?}", path))
    }

    pub fn from_editor(draft: &QuestionnaireDraft, answers: &[DefaultAnswer]) -> Self {
        Self {
            id: draft.id,
            name: draft.name.clone(),
            description: draft.description.clone(),
            status: Some(draft.status),
            answers: answers
                .iter()
                .map(|a| DraftAnswer {
                    id: a.id,
                    label: a.label.clone(),
                    color: a.color.clone(),
                })
                .collect(),
            sections: draft
                .sections
                .iter()
                .map(|s| DraftSection {
                    id: s.id,
                    name: s.name.clone(),
                    skill_group_code: s.skill_group_code.clone(),
                    questions: s
                        .questions
                        .iter()
                        .map(|q| DraftQuestion {
                            id: q.id,
                            text: q.text.clone(),
                            observations: q.observations.clone(),
                        })
                        .collect(),
                })
                .collect(),
        }
    }

    /// Build the editor tree plus the local default-answer list. Order comes
    /// from file position.
    pub fn into_editor(self) -> (QuestionnaireDraft, Vec<DefaultAnswer>) {
        let questionnaire_id = self.id.unwrap_or(0);
        let mut ids = TempIdGen::new();

        let sections = self
            .sections
            .into_iter()
            .enumerate()
            .map(|(i, s)| SectionNode {
                temp_id: ids.next(),
                id: s.id,
                name: s.name,
                order: i as i32,
                expanded: true,
                skill_group_code: s.skill_group_code,
                questions: s
                    .questions
                    .into_iter()
                    .enumerate()
                    .map(|(j, q)| QuestionNode {
                        temp_id: ids.next(),
                        id: q.id,
                        text: q.text,
                        observations: q.observations,
                        order: j as i32,
                    })
                    .collect(),
            })
            .collect();

        let draft = QuestionnaireDraft::from_sections(
            self.id,
            self.name,
            self.description,
            self.status.unwrap_or(QuestionnaireStatus::Draft),
            sections,
            ids,
        );

        let answers = self
            .answers
            .into_iter()
            .map(|a| DefaultAnswer {
                id: a.id,
                questionnaire_id,
                label: a.label,
                color: a.color,
            })
            .collect();

        (draft, answers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_handwritten_draft() {
        let toml = r#"
            name = "Social Skills"

            [[sections]]
            name = "Communication"

            [[sections.questions]]
            text = "Makes eye contact?"
        "#;

        let file: DraftFile = toml::from_str(toml).unwrap();
        let (draft, answers) = file.into_editor();

        assert_eq!(draft.id, None);
        assert_eq!(draft.status, QuestionnaireStatus::Draft);
        assert_eq!(draft.sections.len(), 1);
        assert_eq!(draft.sections[0].questions[0].text, "Makes eye contact?");
        assert!(answers.is_empty());
    }

    #[test]
    fn file_positions_become_orders() {
        let toml = r#"
            name = "n"

            [[sections]]
            name = "A"
            [[sections.questions]]
            text = "q1"
            [[sections.questions]]
            text = "q2"

            [[sections]]
            name = "B"
        "#;

        let (draft, _) = toml::from_str::<DraftFile>(toml).unwrap().into_editor();
        assert_eq!(draft.sections[0].order, 0);
        assert_eq!(draft.sections[1].order, 1);
        assert_eq!(draft.sections[0].questions[1].order, 1);
        // Temp ids stay distinct across the whole tree.
        assert_ne!(
            draft.sections[0].questions[0].temp_id,
            draft.sections[1].temp_id
        );
    }

    #[test]
    fn editor_round_trip_keeps_ids_and_answers() {
        let toml = r##"
            id = 12
            name = "Social Skills"
            description = "Observation battery"
            status = "Published"

            [[answers]]
            id = 5
            label = "Yes"
            color = "#22c55e"

            [[answers]]
            label = "Maybe"
            color = "#eab308"

            [[sections]]
            id = 3
            name = "Communication"

            [[sections.questions]]
            id = 10
            text = "Makes eye contact?"
        "##;

        let file: DraftFile = toml::from_str(toml).unwrap();
        let (draft, answers) = file.into_editor();

        assert_eq!(draft.id, Some(12));
        assert_eq!(draft.status, QuestionnaireStatus::Published);
        assert_eq!(draft.sections[0].id, Some(3));
        assert_eq!(draft.sections[0].questions[0].id, Some(10));
        assert_eq!(answers[0].id, 5);
        assert!(answers[1].is_new());
        assert_eq!(answers[1].questionnaire_id, 12);

        let back = DraftFile::from_editor(&draft, &answers);
        let rendered = toml::to_string_pretty(&back).unwrap();
        let reparsed: DraftFile = toml::from_str(&rendered).unwrap();
        assert_eq!(reparsed.id, Some(12));
        assert_eq!(reparsed.sections[0].questions[0].id, Some(10));
        assert_eq!(reparsed.answers.len(), 2);
    }
}
