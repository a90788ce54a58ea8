//! Save orchestration: validate, submit, then reconcile default answers.
//!
//! The sequence mirrors the authoring screens: validation failures stop
//! before any network traffic, and a failed save leaves the caller's draft
//! untouched so it can be retried as-is.

use super::payload::{build_create_payload, build_update_payload};
use super::reconcile::{SyncReport, plan_answer_sync, run_answer_sync};
use super::tree::QuestionnaireDraft;
use super::validate::validate;
use crate::api::client::AssessClient;
use crate::api::models::{DefaultAnswer, QuestionnaireDetail};
use anyhow::Result;

pub enum SaveOutcome {
    Created(QuestionnaireDetail),
    Updated {
        detail: QuestionnaireDetail,
        answers: SyncReport,
    },
}

/// Save a draft. Create flow when the draft has no persisted id, update flow
/// (including default-answer reconciliation) when it does. `local_answers`
/// is the edit screen's answer list and is ignored on create.
pub async fn save_draft(
    client: &AssessClient,
    draft: &QuestionnaireDraft,
    local_answers: &[DefaultAnswer],
) -> Result<SaveOutcome> {
    validate(draft)?;

    match draft.id {
        None => {
            let payload = build_create_payload(draft);
            log::info!("creating questionnaire \"{}\"", payload.name);
            let detail = client.create_questionnaire(&payload).await?;
            Ok(SaveOutcome::Created(detail))
        }
        Some(id) => {
            let payload = build_update_payload(draft, id);
            log::info!("updating questionnaire {} (\"{}\")", id, payload.name);
            let detail = client.update_questionnaire(&payload).await?;

            let server_answers = client.list_default_answers(id).await?;
            let plan = plan_answer_sync(&server_answers, local_answers);
            log::debug!("default-answer plan: {} call(s)", plan.len());
            let answers = run_answer_sync(client, id, plan).await;

            Ok(SaveOutcome::Updated { detail, answers })
        }
    }
}
