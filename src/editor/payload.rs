//! Transforms a validated draft into the wire shape the backend expects.
//!
//! Create flow: no identifiers at all, `order` taken from array position.
//! Update flow: every node carries its persisted id or the sentinel 0, and
//! `order` is the node's own field (hydration preserved the loaded values).
//! No side effects; callers own the network calls.

use super::tree::QuestionnaireDraft;
use crate::api::models::{
    CreateQuestionPayload, CreateQuestionnairePayload, CreateSectionPayload, QuestionnaireStatus,
    UpdateQuestionPayload, UpdateQuestionnairePayload, UpdateSectionPayload,
};

fn optional(text: &str) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

/// Every questionnaire starts life as a draft; whatever status the caller's
/// tree carries, a create always goes out as `Draft`.
pub fn build_create_payload(draft: &QuestionnaireDraft) -> CreateQuestionnairePayload {
    CreateQuestionnairePayload {
        name: draft.name.clone(),
        description: optional(&draft.description),
        status: QuestionnaireStatus::Draft,
        sections: draft
            .sections
            .iter()
            .enumerate()
            .map(|(i, s)| CreateSectionPayload {
                name: s.name.clone(),
                order: i as i32,
                questions: s
                    .questions
                    .iter()
                    .enumerate()
                    .map(|(j, q)| CreateQuestionPayload {
                        text: q.text.clone(),
                        observations: optional(&q.observations),
                        order: j as i32,
                    })
                    .collect(),
            })
            .collect(),
    }
}

/// Build the update payload for a draft hydrated from record `id`. Status is
/// passed through unchanged; the editor offers no status control.
pub fn build_update_payload(draft: &QuestionnaireDraft, id: i64) -> UpdateQuestionnairePayload {
    UpdateQuestionnairePayload {
        id,
        name: draft.name.clone(),
        description: optional(&draft.description),
        status: draft.status,
        sections: draft
            .sections
            .iter()
            .map(|s| UpdateSectionPayload {
                id: s.id.unwrap_or(0),
                name: s.name.clone(),
                order: s.order,
                questions: s
                    .questions
                    .iter()
                    .map(|q| UpdateQuestionPayload {
                        id: q.id.unwrap_or(0),
                        text: q.text.clone(),
                        observations: optional(&q.observations),
                        order: q.order,
                    })
                    .collect(),
            })
            .collect(),
    }
}
