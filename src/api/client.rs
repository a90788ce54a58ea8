use super::constants;
use super::models::{
    CreateQuestionnairePayload, DefaultAnswer, NewDefaultAnswer, QuestionnaireDetail,
    QuestionnaireList, SkillGroupCatalog, SkillGroupEntry, UpdateQuestionnairePayload,
};
use super::resilience::RetryPolicy;
use crate::auth::{Session, SessionExpired};
use anyhow::{Context, Result};
use log::debug;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Authenticated client for the questionnaire API, with connection pooling
/// and retry on transient transport failures. Cheap to clone.
#[derive(Clone)]
pub struct AssessClient {
    base_url: String,
    http_client: reqwest::Client,
    session: Session,
    retry_policy: RetryPolicy,
}

impl AssessClient {
    pub fn new(base_url: String, session: Session) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(90))
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("assess-cli/0.1")
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            base_url,
            http_client,
            session,
            retry_policy: RetryPolicy::default(),
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub async fn list_questionnaires(&self) -> Result<QuestionnaireList> {
        self.get_json(&constants::list_forms_endpoint(&self.base_url))
            .await
    }

    pub async fn fetch_questionnaire(&self, id: i64) -> Result<QuestionnaireDetail> {
        self.get_json(&constants::get_form_endpoint(&self.base_url, id))
            .await
    }

    pub async fn create_questionnaire(
        &self,
        payload: &CreateQuestionnairePayload,
    ) -> Result<QuestionnaireDetail> {
        self.post_json(&constants::create_form_endpoint(&self.base_url), payload)
            .await
    }

    pub async fn update_questionnaire(
        &self,
        payload: &UpdateQuestionnairePayload,
    ) -> Result<QuestionnaireDetail> {
        self.put_json(&constants::update_form_endpoint(&self.base_url), payload)
            .await
    }

    pub async fn delete_questionnaire(&self, id: i64) -> Result<bool> {
        self.delete_json(&constants::delete_form_endpoint(&self.base_url, id))
            .await
    }

    pub async fn list_default_answers(&self, questionnaire_id: i64) -> Result<Vec<DefaultAnswer>> {
        self.get_json(&constants::list_default_answers_endpoint(
            &self.base_url,
            questionnaire_id,
        ))
        .await
    }

    pub async fn create_default_answer(&self, answer: &NewDefaultAnswer) -> Result<DefaultAnswer> {
        self.post_json(
            &constants::create_default_answer_endpoint(&self.base_url),
            answer,
        )
        .await
    }

    pub async fn delete_default_answer(&self, id: i64) -> Result<bool> {
        self.delete_json(&constants::delete_default_answer_endpoint(
            &self.base_url,
            id,
        ))
        .await
    }

    pub async fn list_skill_groups(&self) -> Result<Vec<SkillGroupEntry>> {
        let catalog: SkillGroupCatalog = self
            .get_json(&constants::list_groups_endpoint(&self.base_url))
            .await?;
        Ok(catalog.skill_groups)
    }

    pub async fn fetch_skill_group(&self, code: &str) -> Result<SkillGroupEntry> {
        self.get_json(&constants::get_group_endpoint(&self.base_url, code))
            .await
    }

    pub async fn create_skill_group(&self, group: &SkillGroupEntry) -> Result<SkillGroupEntry> {
        self.post_json(&constants::create_group_endpoint(&self.base_url), group)
            .await
    }

    pub async fn update_skill_group(&self, group: &SkillGroupEntry) -> Result<SkillGroupEntry> {
        self.put_json(&constants::update_group_endpoint(&self.base_url), group)
            .await
    }

    pub async fn delete_skill_group(&self, code: &str) -> Result<bool> {
        self.delete_json(&constants::delete_group_endpoint(&self.base_url, code))
            .await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!("GET {}", url);
        let response = self
            .retry_policy
            .execute(|| async {
                self.http_client
                    .get(url)
                    .bearer_auth(&self.session.token)
                    .header("Accept", constants::headers::CONTENT_TYPE_JSON)
                    .send()
                    .await
            })
            .await?;
        self.parse_response(response).await
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(&self, url: &str, body: &B) -> Result<T> {
        debug!("POST {}", url);
        let response = self
            .retry_policy
            .execute(|| async {
                self.http_client
                    .post(url)
                    .bearer_auth(&self.session.token)
                    .header("Content-Type", constants::headers::CONTENT_TYPE_JSON)
                    .json(body)
                    .send()
                    .await
            })
            .await?;
        self.parse_response(response).await
    }

    async fn put_json<B: Serialize, T: DeserializeOwned>(&self, url: &str, body: &B) -> Result<T> {
        debug!("PUT {}", url);
        let response = self
            .retry_policy
            .execute(|| async {
                self.http_client
                    .put(url)
                    .bearer_auth(&self.session.token)
                    .header("Content-Type", constants::headers::CONTENT_TYPE_JSON)
                    .json(body)
                    .send()
                    .await
            })
            .await?;
        self.parse_response(response).await
    }

    async fn delete_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!("DELETE {}", url);
        let response = self
            .retry_policy
            .execute(|| async {
                self.http_client
                    .delete(url)
                    .bearer_auth(&self.session.token)
                    .header("Accept", constants::headers::CONTENT_TYPE_JSON)
                    .send()
                    .await
            })
            .await?;
        self.parse_response(response).await
    }

    /// Decode a successful body, or surface the error text. 401 maps to
    /// [`SessionExpired`] so callers can invalidate the stored session.
    async fn parse_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(anyhow::Error::new(SessionExpired));
        }

        if status.is_success() {
            let text = response.text().await.context("failed to read response")?;
            serde_json::from_str(&text)
                .with_context(|| format!("failed to parse response body (HTTP {})", status))
        } else {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            anyhow::bail!("API error (HTTP {}): {}", status, error_text)
        }
    }
}
