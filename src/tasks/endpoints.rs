use rocket::response::status;
use rocket::serde::json::Json;
use rocket::{delete, get, post, put, State};
use serde_json::{json, Value};

use crate::data::{parse_row_id, today, DBConnection, UserQuery};
use crate::error::{ApiError, ApiResult};

use super::data::*;
use super::helpers::*;

#[get("/tasks?<query..>")]
pub fn get_tasks(
    query: UserQuery,
    db_connection: &State<DBConnection>,
) -> ApiResult<Json<Vec<Task>>> {
    let user_id = query
        .user_id
        .ok_or_else(|| ApiError::validation("userId is required"))?;
    let db_connection = db_connection.lock()?;

    let tasks = get_tasks_for_user(&db_connection, &user_id)?;

    Ok(Json(tasks))
}

#[post("/tasks", format = "json", data = "<request>")]
pub fn add_task(
    request: Json<AddTaskRequest>,
    db_connection: &State<DBConnection>,
) -> ApiResult<status::Created<Json<Task>>> {
    let request = request.into_inner();
    let (title, user_id) = match (request.title, request.user_id) {
        (Some(title), Some(user_id)) if !title.is_empty() && !user_id.is_empty() => {
            (title, user_id)
        }
        _ => return Err(ApiError::validation("title and userId are required")),
    };

    let db_connection = db_connection.lock()?;
    let task = add_task_to_db(&db_connection, &title, &user_id)?;

    let location = format!("/api/tasks/{}", task.id);
    Ok(status::Created::new(location).body(Json(task)))
}

#[put("/tasks/<id>", format = "json", data = "<request>")]
pub fn update_task(
    id: &str,
    request: Json<UpdateTaskRequest>,
    db_connection: &State<DBConnection>,
) -> ApiResult<Json<Value>> {
    let completed = request
        .completed
        .ok_or_else(|| ApiError::validation("completed status is required"))?;
    let task_id = parse_row_id(id).ok_or_else(|| ApiError::not_found("Task not found"))?;

    let db_connection = db_connection.lock()?;
    set_task_completed(&db_connection, task_id, completed, today())?;

    Ok(Json(json!({ "message": "Task updated successfully" })))
}

#[delete("/tasks/<id>")]
pub fn delete_task(id: &str, db_connection: &State<DBConnection>) -> ApiResult<Json<Value>> {
    let task_id = parse_row_id(id).ok_or_else(|| ApiError::not_found("Task not found"))?;

    let db_connection = db_connection.lock()?;
    delete_task_from_db(&db_connection, task_id)?;

    Ok(Json(json!({ "message": "Task deleted successfully" })))
}
