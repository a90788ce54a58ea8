//! Endpoint paths for the assessment platform API.

/// Route prefix shared by every controller.
pub const API_BASE_PATH: &str = "/api";

pub mod headers {
    pub const CONTENT_TYPE_JSON: &str = "application/json";
}

fn questionnaire(base_url: &str, tail: &str) -> String {
    format!("{}{}/questionnaire/{}", base_url, API_BASE_PATH, tail)
}

pub fn list_forms_endpoint(base_url: &str) -> String {
    questionnaire(base_url, "list-forms")
}

pub fn create_form_endpoint(base_url: &str) -> String {
    questionnaire(base_url, "create-form")
}

pub fn get_form_endpoint(base_url: &str, id: i64) -> String {
    questionnaire(base_url, &format!("get-form/{}", id))
}

pub fn update_form_endpoint(base_url: &str) -> String {
    questionnaire(base_url, "update-form")
}

pub fn delete_form_endpoint(base_url: &str, id: i64) -> String {
    questionnaire(base_url, &format!("delete-form/{}", id))
}

pub fn list_default_answers_endpoint(base_url: &str, questionnaire_id: i64) -> String {
    questionnaire(base_url, &format!("list-default-answers/{}", questionnaire_id))
}

pub fn create_default_answer_endpoint(base_url: &str) -> String {
    questionnaire(base_url, "create-default-answer")
}

pub fn delete_default_answer_endpoint(base_url: &str, id: i64) -> String {
    questionnaire(base_url, &format!("delete-default-answer/{}", id))
}

pub fn list_groups_endpoint(base_url: &str) -> String {
    questionnaire(base_url, "list-groups")
}

// The group routes mix singular and plural; these spellings are the
// backend's, not a typo.
pub fn create_group_endpoint(base_url: &str) -> String {
    questionnaire(base_url, "create-groups")
}

pub fn get_group_endpoint(base_url: &str, code: &str) -> String {
    questionnaire(base_url, &format!("get-group/{}", code))
}

pub fn update_group_endpoint(base_url: &str) -> String {
    questionnaire(base_url, "update-groups")
}

pub fn delete_group_endpoint(base_url: &str, code: &str) -> String {
    questionnaire(base_url, &format!("delete-group/{}", code))
}

pub fn login_endpoint(base_url: &str) -> String {
    format!("{}{}/Auth/login", base_url, API_BASE_PATH)
}

pub fn register_endpoint(base_url: &str) -> String {
    format!("{}{}/Auth/register", base_url, API_BASE_PATH)
}

pub fn user_role_endpoint(base_url: &str, user_id: &str) -> String {
    format!("{}{}/Auth/user-role/{}", base_url, API_BASE_PATH, user_id)
}
