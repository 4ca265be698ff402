use serde::{Deserialize, Serialize};

/// Per-day, per-user rollup of completed-item counts. A cache over the live
/// task and goal tables, refreshed on every completion mutation.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DailyData {
    pub id: String,
    pub date: String,
    pub user_id: String,
    pub tasks: i64,
    pub goals: i64,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct UpsertDailyDataRequest {
    pub date: Option<String>,
    pub user_id: Option<String>,
}
