use chrono::Datelike;
use rocket::serde::json::Json;
use rocket::{get, State};

use crate::daily::helpers::counts_by_date;
use crate::data::{today, DBConnection};
use crate::error::{ApiError, ApiResult};

use super::data::*;
use super::helpers::*;

#[get("/contributions?<query..>")]
pub fn get_contributions(
    query: ContributionsQuery,
    db_connection: &State<DBConnection>,
) -> ApiResult<Json<ContributionGraph>> {
    let user_id = query
        .user_id
        .ok_or_else(|| ApiError::validation("userId is required"))?;

    let today = today();
    let year = query.year.unwrap_or_else(|| today.year());

    let db_connection = db_connection.lock()?;
    let counts = counts_by_date(&db_connection, &user_id)?;

    let graph = build_year_grid(year, &counts, today)
        .ok_or_else(|| ApiError::validation("year is out of range"))?;

    Ok(Json(graph))
}
