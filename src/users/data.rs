use serde::{Deserialize, Serialize};

/// Account record as surfaced to callers. The stored password hash never
/// leaves the users table.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    pub created_at: String,
}

#[derive(Deserialize, Debug)]
pub struct SignupRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}
