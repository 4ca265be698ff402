use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyRating {
    pub id: String,
    pub user_id: String,
    pub week_start: String,
    pub week_end: String,
    pub rating: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub tasks_completed: i64,
    pub goals_completed: i64,
    pub created_at: String,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AddWeeklyRatingRequest {
    pub week_start: Option<String>,
    pub week_end: Option<String>,
    pub rating: Option<i64>,
    pub notes: Option<String>,
    pub tasks_completed: Option<i64>,
    pub goals_completed: Option<i64>,
    pub user_id: Option<String>,
}
