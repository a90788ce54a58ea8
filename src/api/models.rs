//! Wire types for the assessment platform API.
//!
//! Field names follow the backend's camelCase JSON. Optional description and
//! observations are omitted entirely when absent, matching what the backend
//! accepts on create/update.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle state owned by the backend. The editor only ever writes
/// `Draft` on create and passes the loaded value through on update;
/// publish/archive transitions happen elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuestionnaireStatus {
    Draft,
    Published,
    Archived,
}

impl std::fmt::Display for QuestionnaireStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            QuestionnaireStatus::Draft => "Draft",
            QuestionnaireStatus::Published => "Published",
            QuestionnaireStatus::Archived => "Archived",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionnaireSummary {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub status: QuestionnaireStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionnaireList {
    pub questionnaires: Vec<QuestionnaireSummary>,
    pub total_count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionRecord {
    pub id: i64,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observations: Option<String>,
    pub order: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionRecord {
    pub id: i64,
    pub name: String,
    pub order: i32,
    pub questions: Vec<QuestionRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionnaireDetail {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub status: QuestionnaireStatus,
    pub created_at: DateTime<Utc>,
    pub sections: Vec<SectionRecord>,
}

/// A default answer option attached to a questionnaire. `id` 0 marks a
/// locally added entry the backend has not created yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefaultAnswer {
    pub id: i64,
    pub questionnaire_id: i64,
    pub label: String,
    pub color: String,
}

impl DefaultAnswer {
    pub fn is_new(&self) -> bool {
        self.id == 0
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDefaultAnswer {
    pub questionnaire_id: i64,
    pub label: String,
    pub color: String,
}

/// Entry in the global skill-group catalog. Metadata only; sections may
/// reference a code but nothing structural depends on it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillGroupEntry {
    pub code: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillGroupCatalog {
    pub skill_groups: Vec<SkillGroupEntry>,
}

// Submit payloads built by the editor (src/editor/payload.rs).

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateQuestionPayload {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observations: Option<String>,
    pub order: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSectionPayload {
    pub name: String,
    pub order: i32,
    pub questions: Vec<CreateQuestionPayload>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateQuestionnairePayload {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub status: QuestionnaireStatus,
    pub sections: Vec<CreateSectionPayload>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateQuestionPayload {
    /// Persisted id, or 0 for a question added in this edit session.
    pub id: i64,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observations: Option<String>,
    pub order: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSectionPayload {
    /// Persisted id, or 0 for a section added in this edit session.
    pub id: i64,
    pub name: String,
    pub order: i32,
    pub questions: Vec<UpdateQuestionPayload>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateQuestionnairePayload {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub status: QuestionnaireStatus,
    pub sections: Vec<UpdateSectionPayload>,
}
