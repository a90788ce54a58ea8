//! Default-answer reconciliation for the edit flow.
//!
//! The backend has no batch endpoint for default answers, so the plan runs
//! as individual delete/create calls. Each call's outcome is recorded in a
//! [`SyncReport`] so a partial failure names exactly which calls landed
//! instead of collapsing into one generic error.

use crate::api::client::AssessClient;
use crate::api::models::{DefaultAnswer, NewDefaultAnswer};
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum AnswerOp {
    /// Present on the server but absent from the local list.
    Delete { id: i64, label: String },
    /// Present locally with id 0 (never persisted).
    Create { label: String, color: String },
}

impl fmt::Display for AnswerOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswerOp::Delete { id, label } => write!(f, "delete \"{}\" (id {})", label, id),
            AnswerOp::Create { label, .. } => write!(f, "create \"{}\"", label),
        }
    }
}

/// Three-way diff between the server's current list and the local list.
/// Entries matched by id are left untouched; editing an existing answer is
/// expressed as delete + recreate by the caller.
pub fn plan_answer_sync(server: &[DefaultAnswer], local: &[DefaultAnswer]) -> Vec<AnswerOp> {
    let mut plan = Vec::new();

    for current in server {
        if !local.iter().any(|l| l.id == current.id) {
            plan.push(AnswerOp::Delete {
                id: current.id,
                label: current.label.clone(),
            });
        }
    }

    for answer in local.iter().filter(|l| l.is_new()) {
        plan.push(AnswerOp::Create {
            label: answer.label.clone(),
            color: answer.color.clone(),
        });
    }

    plan
}

/// Outcome of one executed [`AnswerOp`].
#[derive(Debug)]
pub struct SyncOutcome {
    pub op: AnswerOp,
    pub result: Result<(), String>,
}

/// Per-call record of a reconciliation run.
#[derive(Debug, Default)]
pub struct SyncReport {
    pub outcomes: Vec<SyncOutcome>,
}

impl SyncReport {
    pub fn is_clean(&self) -> bool {
        self.outcomes.iter().all(|o| o.result.is_ok())
    }

    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }
}

/// Execute a plan sequentially against the API. Calls keep going after a
/// failure so the report covers the whole plan; the server may end up
/// between states and the report is the user's map of where it landed.
pub async fn run_answer_sync(
    client: &AssessClient,
    questionnaire_id: i64,
    plan: Vec<AnswerOp>,
) -> SyncReport {
    let mut report = SyncReport::default();

    for op in plan {
        let result = match &op {
            AnswerOp::Delete { id, .. } => client
                .delete_default_answer(*id)
                .await
                .map(|_| ())
                .map_err(|e| e.to_string()),
            AnswerOp::Create { label, color } => client
                .create_default_answer(&NewDefaultAnswer {
                    questionnaire_id,
                    label: label.clone(),
                    color: color.clone(),
                })
                .await
                .map(|_| ())
                .map_err(|e| e.to_string()),
        };

        if let Err(ref e) = result {
            log::error!("default-answer sync: {} failed: {}", op, e);
        } else {
            log::debug!("default-answer sync: {} ok", op);
        }
        report.outcomes.push(SyncOutcome { op, result });
    }

    report
}
