use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Streak {
    pub id: String,
    pub user_id: String,
    pub streak: i64,
    pub last_active_date: String,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CheckStreakRequest {
    pub user_id: Option<String>,
}

/// Outcome of evaluating today's activity against the stored streak.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreakUpdate {
    /// Already recorded today; nothing to write.
    Unchanged(i64),
    /// Yesterday was active, so the run continues.
    Extended(i64),
    /// A gap (or no prior record); the run starts over at 1.
    Reset,
}
