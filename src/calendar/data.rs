use chrono::NaiveDate;
use rocket::FromForm;
use serde::Serialize;

pub const WEEK_LENGTH: usize = 7;

/// One cell of the contribution grid. `count` and `level` are `None` for
/// days outside the selected year or after today, so the renderer can omit
/// them without confusing "no data" with "zero activity".
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DayCell {
    pub date: NaiveDate,
    pub count: Option<u32>,
    pub level: Option<u8>,
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MonthLabel {
    pub name: String,
    pub start_week: usize,
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ContributionGraph {
    pub weeks: Vec<Vec<DayCell>>,
    pub months: Vec<MonthLabel>,
    pub total_contributions: u32,
}

#[derive(FromForm)]
pub struct ContributionsQuery {
    #[field(name = "userId")]
    pub user_id: Option<String>,
    pub year: Option<i32>,
}
