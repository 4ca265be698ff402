use serde::{Deserialize, Serialize};

pub type GoalID = i64;

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub target: i64,
    pub progress: i64,
    pub completed: bool,
    pub created_at: String,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AddGoalRequest {
    pub title: Option<String>,
    pub target: Option<i64>,
    pub user_id: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct UpdateGoalRequest {
    pub progress: Option<i64>,
}
