//! HTTP client for the assessment platform backend.
//!
//! Covers the questionnaire endpoints (forms, default answers, skill-group
//! catalog) over JSON with bearer-token auth. Auth endpoints live in
//! [`crate::auth`].

pub mod client;
pub mod constants;
pub mod models;
pub mod resilience;

pub use client::AssessClient;
pub use models::{
    CreateQuestionnairePayload, DefaultAnswer, NewDefaultAnswer, QuestionnaireDetail,
    QuestionnaireList, QuestionnaireStatus, QuestionnaireSummary, SkillGroupEntry,
    UpdateQuestionnairePayload,
};
pub use resilience::{RetryConfig, RetryPolicy, RetryableError};
