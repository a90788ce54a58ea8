//! In-memory questionnaire tree manipulated during authoring.
//!
//! Every operation takes the current tree by reference and returns a new
//! tree, so callers can re-render (or diff) deterministically after each
//! event. Operations addressing a temp id that no longer exists are no-ops;
//! stale events from the driving layer must never panic the editor.

use super::ids::{TempId, TempIdGen};
use crate::api::models::{QuestionnaireDetail, QuestionnaireStatus};

/// First order value strictly above every existing sibling's.
fn next_order(orders: impl Iterator<Item = i32>) -> i32 {
    orders.max().map_or(0, |max| max + 1)
}

/// A question being authored. `id` is only present when the question was
/// loaded from an existing record; locally added questions carry `None`
/// until the backend assigns one.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionNode {
    pub temp_id: TempId,
    pub id: Option<i64>,
    pub text: String,
    pub observations: String,
    pub order: i32,
}

/// A skill group ("section" on the wire) containing ordered questions.
/// `expanded` is display state only and never persisted. `skill_group_code`
/// is an optional reference into the global skill-group catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionNode {
    pub temp_id: TempId,
    pub id: Option<i64>,
    pub name: String,
    pub questions: Vec<QuestionNode>,
    pub order: i32,
    pub expanded: bool,
    pub skill_group_code: Option<String>,
}

/// The questionnaire draft under edit. Created empty for the create flow or
/// hydrated from a fetched detail record for the edit flow. Nothing is
/// persisted until the draft is explicitly saved.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionnaireDraft {
    pub id: Option<i64>,
    pub name: String,
    pub description: String,
    pub status: QuestionnaireStatus,
    pub sections: Vec<SectionNode>,
    ids: TempIdGen,
}

impl Default for QuestionnaireDraft {
    fn default() -> Self {
        Self::new()
    }
}

impl QuestionnaireDraft {
    /// Empty draft for the create flow.
    pub fn new() -> Self {
        Self {
            id: None,
            name: String::new(),
            description: String::new(),
            status: QuestionnaireStatus::Draft,
            sections: Vec::new(),
            ids: TempIdGen::new(),
        }
    }

    /// Hydrate a draft from a backend detail record (edit flow). Persisted
    /// ids are kept on every node; temp ids are freshly allocated. Status is
    /// carried from the record and not mutated by the editor.
    pub fn from_detail(detail: &QuestionnaireDetail) -> Self {
        let mut ids = TempIdGen::new();
        let sections = detail
            .sections
            .iter()
            .map(|s| SectionNode {
                temp_id: ids.next(),
                id: Some(s.id),
                name: s.name.clone(),
                order: s.order,
                expanded: true,
                skill_group_code: None,
                questions: s
                    .questions
                    .iter()
                    .map(|q| QuestionNode {
                        temp_id: ids.next(),
                        id: Some(q.id),
                        text: q.text.clone(),
                        observations: q.observations.clone().unwrap_or_default(),
                        order: q.order,
                    })
                    .collect(),
            })
            .collect();

        Self {
            id: Some(detail.id),
            name: detail.name.clone(),
            description: detail.description.clone().unwrap_or_default(),
            status: detail.status,
            sections,
            ids,
        }
    }

    /// Assemble a draft from already-built sections (draft files). The
    /// generator must be the one that allocated the section temp ids.
    pub fn from_sections(
        id: Option<i64>,
        name: String,
        description: String,
        status: QuestionnaireStatus,
        sections: Vec<SectionNode>,
        ids: TempIdGen,
    ) -> Self {
        Self {
            id,
            name,
            description,
            status,
            sections,
            ids,
        }
    }

    pub fn set_name(&self, name: &str) -> Self {
        let mut next = self.clone();
        next.name = name.to_string();
        next
    }

    pub fn set_description(&self, description: &str) -> Self {
        let mut next = self.clone();
        next.description = description.to_string();
        next
    }

    /// Append a new empty section, expanded, ordered after the existing ones.
    pub fn add_section(&self) -> Self {
        let mut next = self.clone();
        // After a delete, surviving hydrated orders can be sparse; len would
        // collide with them.
        let order = next_order(next.sections.iter().map(|s| s.order));
        let section = SectionNode {
            temp_id: next.ids.next(),
            id: None,
            name: String::new(),
            questions: Vec::new(),
            order,
            expanded: true,
            skill_group_code: None,
        };
        next.sections.push(section);
        next
    }

    pub fn rename_section(&self, section: TempId, name: &str) -> Self {
        self.map_section(section, |s| s.name = name.to_string())
    }

    /// Remove a section and all of its questions. Whether a persisted
    /// section actually disappears server-side is decided at save time.
    pub fn delete_section(&self, section: TempId) -> Self {
        let mut next = self.clone();
        next.sections.retain(|s| s.temp_id != section);
        next
    }

    pub fn toggle_section(&self, section: TempId) -> Self {
        self.map_section(section, |s| s.expanded = !s.expanded)
    }

    pub fn set_section_code(&self, section: TempId, code: Option<String>) -> Self {
        self.map_section(section, |s| s.skill_group_code = code.clone())
    }

    /// Append a new empty question to the addressed section.
    pub fn add_question(&self, section: TempId) -> Self {
        let mut next = self.clone();
        let question = QuestionNode {
            temp_id: next.ids.next(),
            id: None,
            text: String::new(),
            observations: String::new(),
            order: 0,
        };
        if let Some(s) = next.sections.iter_mut().find(|s| s.temp_id == section) {
            let mut question = question;
            question.order = next_order(s.questions.iter().map(|q| q.order));
            s.questions.push(question);
        }
        next
    }

    pub fn set_question_text(&self, section: TempId, question: TempId, text: &str) -> Self {
        self.map_question(section, question, |q| q.text = text.to_string())
    }

    pub fn set_question_observations(
        &self,
        section: TempId,
        question: TempId,
        observations: &str,
    ) -> Self {
        self.map_question(section, question, |q| {
            q.observations = observations.to_string()
        })
    }

    pub fn delete_question(&self, section: TempId, question: TempId) -> Self {
        let mut next = self.clone();
        if let Some(s) = next.sections.iter_mut().find(|s| s.temp_id == section) {
            s.questions.retain(|q| q.temp_id != question);
        }
        next
    }

    /// Total questions across all sections.
    pub fn total_questions(&self) -> usize {
        self.sections.iter().map(|s| s.questions.len()).sum()
    }

    /// Sections that already carry a non-blank name.
    pub fn named_sections(&self) -> usize {
        self.sections
            .iter()
            .filter(|s| !s.name.trim().is_empty())
            .count()
    }

    pub fn section(&self, section: TempId) -> Option<&SectionNode> {
        self.sections.iter().find(|s| s.temp_id == section)
    }

    fn map_section(&self, section: TempId, f: impl Fn(&mut SectionNode)) -> Self {
        let mut next = self.clone();
        if let Some(s) = next.sections.iter_mut().find(|s| s.temp_id == section) {
            f(s);
        }
        next
    }

    fn map_question(
        &self,
        section: TempId,
        question: TempId,
        f: impl Fn(&mut QuestionNode),
    ) -> Self {
        let mut next = self.clone();
        if let Some(s) = next.sections.iter_mut().find(|s| s.temp_id == section) {
            if let Some(q) = s.questions.iter_mut().find(|q| q.temp_id == question) {
                f(q);
            }
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft_with_section() -> (QuestionnaireDraft, TempId) {
        let draft = QuestionnaireDraft::new().add_section();
        let id = draft.sections[0].temp_id;
        (draft, id)
    }

    #[test]
    fn add_section_appends_expanded_and_ordered() {
        let draft = QuestionnaireDraft::new().add_section().add_section();
        assert_eq!(draft.sections.len(), 2);
        assert_eq!(draft.sections[0].order, 0);
        assert_eq!(draft.sections[1].order, 1);
        assert!(draft.sections.iter().all(|s| s.expanded));
        assert_ne!(draft.sections[0].temp_id, draft.sections[1].temp_id);
    }

    #[test]
    fn question_count_matches_sum_of_sections() {
        let (draft, s1) = draft_with_section();
        let draft = draft.add_section();
        let s2 = draft.sections[1].temp_id;

        let draft = draft.add_question(s1).add_question(s1).add_question(s2);
        assert_eq!(draft.total_questions(), 3);

        let q = draft.sections[0].questions[0].temp_id;
        let draft = draft.delete_question(s1, q);

        let by_hand: usize = draft.sections.iter().map(|s| s.questions.len()).sum();
        assert_eq!(draft.total_questions(), by_hand);
        assert_eq!(draft.total_questions(), 2);
    }

    #[test]
    fn delete_section_leaves_siblings_untouched() {
        let (draft, s1) = draft_with_section();
        let draft = draft.add_section();
        let s2 = draft.sections[1].temp_id;
        let draft = draft
            .rename_section(s2, "Motor Skills")
            .add_question(s2)
            .add_question(s1);

        let sibling = draft.section(s2).unwrap().clone();
        let trimmed = draft.delete_section(s1);

        assert_eq!(trimmed.sections.len(), 1);
        assert_eq!(trimmed.sections[0], sibling);
        assert_eq!(trimmed.total_questions(), 1);
    }

    #[test]
    fn deleting_last_question_leaves_empty_section() {
        let (draft, s) = draft_with_section();
        let draft = draft.add_question(s);
        let q = draft.sections[0].questions[0].temp_id;
        let draft = draft.delete_question(s, q);
        assert_eq!(draft.sections.len(), 1);
        assert!(draft.sections[0].questions.is_empty());
    }

    #[test]
    fn unknown_temp_ids_are_noops() {
        let (draft, s) = draft_with_section();
        let mut foreign = TempIdGen::new();
        let stale = {
            // Advance past any id the draft could have handed out so far.
            let mut last = foreign.next();
            for _ in 0..16 {
                last = foreign.next();
            }
            last
        };

        let after = draft
            .rename_section(stale, "ghost")
            .delete_section(stale)
            .toggle_section(stale)
            .add_question(stale)
            .set_question_text(s, stale, "ghost")
            .delete_question(stale, stale);

        assert_eq!(after, draft);
    }

    #[test]
    fn toggle_flips_display_flag_only() {
        let (draft, s) = draft_with_section();
        let collapsed = draft.toggle_section(s);
        assert!(!collapsed.sections[0].expanded);
        let expanded = collapsed.toggle_section(s);
        assert_eq!(expanded, draft);
    }

    #[test]
    fn orders_stay_unique_after_delete_then_add() {
        use crate::api::models::{QuestionRecord, SectionRecord};

        let detail = QuestionnaireDetail {
            id: 7,
            name: "Social Skills".into(),
            description: None,
            status: QuestionnaireStatus::Draft,
            created_at: chrono::Utc::now(),
            sections: vec![
                SectionRecord {
                    id: 1,
                    name: "Communication".into(),
                    order: 0,
                    questions: vec![
                        QuestionRecord {
                            id: 10,
                            text: "Q1".into(),
                            observations: None,
                            order: 0,
                        },
                        QuestionRecord {
                            id: 11,
                            text: "Q2".into(),
                            observations: None,
                            order: 1,
                        },
                    ],
                },
                SectionRecord {
                    id: 2,
                    name: "Motor Skills".into(),
                    order: 1,
                    questions: vec![],
                },
            ],
        };

        // Deleting the order-0 section leaves the survivor at order 1; a new
        // section must not reuse that order.
        let draft = QuestionnaireDraft::from_detail(&detail);
        let first = draft.sections[0].temp_id;
        let draft = draft.delete_section(first).add_section();
        assert_eq!(draft.sections[0].order, 1);
        assert_eq!(draft.sections[1].order, 2);

        // Same within a section's questions.
        let detail_draft = QuestionnaireDraft::from_detail(&detail);
        let section = detail_draft.sections[0].temp_id;
        let q1 = detail_draft.sections[0].questions[0].temp_id;
        let draft = detail_draft.delete_question(section, q1).add_question(section);
        let orders: Vec<i32> = draft.sections[0].questions.iter().map(|q| q.order).collect();
        assert_eq!(orders, vec![1, 2]);
    }

    #[test]
    fn original_tree_is_not_mutated() {
        let (draft, s) = draft_with_section();
        let _ = draft.rename_section(s, "Communication").add_question(s);
        assert_eq!(draft.sections[0].name, "");
        assert!(draft.sections[0].questions.is_empty());
    }
}
