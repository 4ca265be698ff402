use rocket::serde::json::Json;
use rocket::{get, post, State};

use crate::data::{today, DBConnection, UserQuery};
use crate::error::{ApiError, ApiResult};

use super::data::*;
use super::helpers::*;

#[get("/streak?<query..>")]
pub fn get_streak(
    query: UserQuery,
    db_connection: &State<DBConnection>,
) -> ApiResult<Json<Option<Streak>>> {
    let user_id = query
        .user_id
        .ok_or_else(|| ApiError::validation("userId is required"))?;
    let db_connection = db_connection.lock()?;

    let streak = get_streak_for_user(&db_connection, &user_id)?;

    Ok(Json(streak))
}

/// Records today's activity against the user's streak. Safe to call any
/// number of times per day; only the first invocation changes the counter.
#[post("/streak", format = "json", data = "<request>")]
pub fn check_streak(
    request: Json<CheckStreakRequest>,
    db_connection: &State<DBConnection>,
) -> ApiResult<Json<Streak>> {
    let user_id = request
        .into_inner()
        .user_id
        .ok_or_else(|| ApiError::validation("userId is required"))?;

    let db_connection = db_connection.lock()?;
    let streak = evaluate_streak(&db_connection, &user_id, today())?;

    Ok(Json(streak))
}
