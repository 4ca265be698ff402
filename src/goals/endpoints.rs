use rocket::response::status;
use rocket::serde::json::Json;
use rocket::{delete, get, post, put, State};
use serde_json::{json, Value};

use crate::data::{parse_row_id, today, DBConnection, UserQuery};
use crate::error::{ApiError, ApiResult};

use super::data::*;
use super::helpers::*;

#[get("/goals?<query..>")]
pub fn get_goals(
    query: UserQuery,
    db_connection: &State<DBConnection>,
) -> ApiResult<Json<Vec<Goal>>> {
    let user_id = query
        .user_id
        .ok_or_else(|| ApiError::validation("userId is required"))?;
    let db_connection = db_connection.lock()?;

    let goals = get_goals_for_user(&db_connection, &user_id)?;

    Ok(Json(goals))
}

#[post("/goals", format = "json", data = "<request>")]
pub fn add_goal(
    request: Json<AddGoalRequest>,
    db_connection: &State<DBConnection>,
) -> ApiResult<status::Created<Json<Goal>>> {
    let request = request.into_inner();
    let (title, target, user_id) = match (request.title, request.target, request.user_id) {
        (Some(title), Some(target), Some(user_id))
            if !title.is_empty() && !user_id.is_empty() =>
        {
            (title, target, user_id)
        }
        _ => return Err(ApiError::validation("title, target and userId are required")),
    };

    if target < 1 {
        return Err(ApiError::validation("target must be at least 1"));
    }

    let db_connection = db_connection.lock()?;
    let goal = add_goal_to_db(&db_connection, &title, target, &user_id)?;

    let location = format!("/api/goals/{}", goal.id);
    Ok(status::Created::new(location).body(Json(goal)))
}

#[put("/goals/<id>", format = "json", data = "<request>")]
pub fn update_goal(
    id: &str,
    request: Json<UpdateGoalRequest>,
    db_connection: &State<DBConnection>,
) -> ApiResult<Json<Value>> {
    let progress = request
        .progress
        .ok_or_else(|| ApiError::validation("progress is required"))?;
    let goal_id = parse_row_id(id).ok_or_else(|| ApiError::not_found("Goal not found"))?;

    let db_connection = db_connection.lock()?;
    set_goal_progress(&db_connection, goal_id, progress, today())?;

    Ok(Json(json!({ "message": "Goal updated successfully" })))
}

#[delete("/goals/<id>")]
pub fn delete_goal(id: &str, db_connection: &State<DBConnection>) -> ApiResult<Json<Value>> {
    let goal_id = parse_row_id(id).ok_or_else(|| ApiError::not_found("Goal not found"))?;

    let db_connection = db_connection.lock()?;
    delete_goal_from_db(&db_connection, goal_id)?;

    Ok(Json(json!({ "message": "Goal deleted successfully" })))
}
