use serde::{Deserialize, Serialize};

pub type TaskID = i64;

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub completed: bool,
    pub created_at: String,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AddTaskRequest {
    pub title: Option<String>,
    pub user_id: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct UpdateTaskRequest {
    pub completed: Option<bool>,
}
