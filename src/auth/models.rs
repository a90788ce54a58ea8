//! Session and account types for the platform's auth endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An authenticated session: issued at login, passed explicitly to every
/// client that needs it, and invalidated at logout or expiry. There is no
/// ambient global session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub user_id: String,
    pub email: String,
}

impl Session {
    pub fn is_expired(&self) -> bool {
        self.expires_at <= Utc::now()
    }
}

/// Marker error for HTTP 401 responses, so callers can tear the stored
/// session down instead of just printing a transport error.
#[derive(Debug)]
pub struct SessionExpired;

impl std::fmt::Display for SessionExpired {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("session expired or rejected by the server (HTTP 401)")
    }
}

impl std::error::Error for SessionExpired {}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAccount {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub email_confirmed: bool,
    pub phone_number_confirmed: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub expiration: DateTime<Utc>,
    pub user: UserAccount,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub document_number: String,
    pub phone_number: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub id: String,
    pub full_name: String,
    pub email: String,
}

/// Role names as the backend spells them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "Cliente")]
    Client,
    #[serde(rename = "Administrador")]
    Administrator,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRoleResponse {
    pub user_id: String,
    pub email: String,
    pub full_name: String,
    pub role: Role,
}

/// Envelope used by the register and role endpoints (login returns its body
/// bare).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiEnvelope<T> {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<EnvelopeError>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvelopeError {
    pub code: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_parses_success_without_error_field() {
        let envelope: ApiEnvelope<RegisterResponse> = serde_json::from_str(
            r#"{
                "status": "Success",
                "result": { "id": "u-1", "fullName": "Ana Souza", "email": "ana@clinic.example" }
            }"#,
        )
        .unwrap();

        assert_eq!(envelope.status, "Success");
        assert_eq!(envelope.result.unwrap().email, "ana@clinic.example");
    }

    #[test]
    fn envelope_parses_failure_without_result_field() {
        let envelope: ApiEnvelope<UserRoleResponse> = serde_json::from_str(
            r#"{
                "status": "Error",
                "errorMessage": { "code": "USER_NOT_FOUND", "message": "No such user" }
            }"#,
        )
        .unwrap();

        assert!(envelope.result.is_none());
        assert_eq!(envelope.error_message.unwrap().code, "USER_NOT_FOUND");
    }
}
