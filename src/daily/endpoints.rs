use chrono::NaiveDate;
use rocket::serde::json::Json;
use rocket::{get, post, State};

use crate::data::{DBConnection, UserQuery};
use crate::error::{ApiError, ApiResult};

use super::data::*;
use super::helpers::*;

#[get("/daily-data?<query..>")]
pub fn get_daily_data(
    query: UserQuery,
    db_connection: &State<DBConnection>,
) -> ApiResult<Json<Vec<DailyData>>> {
    let user_id = query
        .user_id
        .ok_or_else(|| ApiError::validation("userId is required"))?;
    let db_connection = db_connection.lock()?;

    let records = get_daily_data_for_user(&db_connection, &user_id)?;

    Ok(Json(records))
}

/// Upserts the rollup for one (date, user). Counts are recomputed from live
/// task and goal state rather than taken from the request body, so the stored
/// record can never drift from its source of truth.
#[post("/daily-data", format = "json", data = "<request>")]
pub fn upsert_daily_data(
    request: Json<UpsertDailyDataRequest>,
    db_connection: &State<DBConnection>,
) -> ApiResult<Json<DailyData>> {
    let request = request.into_inner();
    let (date, user_id) = match (request.date, request.user_id) {
        (Some(date), Some(user_id)) if !user_id.is_empty() => (date, user_id),
        _ => return Err(ApiError::validation("date and userId are required")),
    };

    let date = date
        .parse::<NaiveDate>()
        .map_err(|_| ApiError::validation("date must be formatted YYYY-MM-DD"))?;

    let db_connection = db_connection.lock()?;
    let record = refresh_daily_data(&db_connection, &user_id, date)?;

    Ok(Json(record))
}
