use chrono::{NaiveDate, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::daily::helpers::refresh_daily_data;
use crate::error::{ApiError, ApiResult};

use super::data::*;

fn task_from_row(row: &Row) -> rusqlite::Result<Task> {
    Ok(Task {
        id: row.get::<usize, i64>(0)?.to_string(),
        user_id: row.get(1)?,
        title: row.get(2)?,
        completed: row.get(3)?,
        created_at: row.get(4)?,
    })
}

pub fn get_tasks_for_user(db_connection: &Connection, user_id: &str) -> ApiResult<Vec<Task>> {
    let mut statement = db_connection.prepare(
        "SELECT rowid, user_id, title, completed, created_at FROM tasks WHERE user_id = ?1",
    )?;

    let rows = statement.query_map(params![user_id], task_from_row)?;

    let mut tasks = vec![];
    for row_result in rows {
        tasks.push(row_result?);
    }

    Ok(tasks)
}

pub fn add_task_to_db(db_connection: &Connection, title: &str, user_id: &str) -> ApiResult<Task> {
    let created_at = Utc::now().to_rfc3339();

    db_connection.execute(
        "INSERT INTO tasks (user_id, title, completed, completed_at, created_at)
         VALUES (?1, ?2, 0, NULL, ?3)",
        params![user_id, title, created_at],
    )?;

    Ok(Task {
        id: db_connection.last_insert_rowid().to_string(),
        user_id: user_id.to_string(),
        title: title.to_string(),
        completed: false,
        created_at,
    })
}

/// Marks a task complete or incomplete and keeps the daily rollup in step.
/// The rollup counts by completion date, so both the previous completion date
/// and today are refreshed. A task that stays complete keeps its original
/// completion date.
pub fn set_task_completed(
    db_connection: &Connection,
    task_id: TaskID,
    completed: bool,
    today: NaiveDate,
) -> ApiResult<()> {
    let existing: Option<(String, Option<String>)> = db_connection
        .query_row(
            "SELECT user_id, completed_at FROM tasks WHERE rowid = ?1",
            params![task_id],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .optional()?;

    let (user_id, previous_completed_at) =
        existing.ok_or_else(|| ApiError::not_found("Task not found"))?;

    db_connection.execute(
        "UPDATE tasks
         SET completed = ?1,
             completed_at = CASE WHEN ?1 THEN COALESCE(completed_at, ?2) ELSE NULL END
         WHERE rowid = ?3",
        params![completed, today.to_string(), task_id],
    )?;

    refresh_daily_data(db_connection, &user_id, today)?;
    if let Some(date) = previous_completed_at.and_then(|d| d.parse::<NaiveDate>().ok()) {
        if date != today {
            refresh_daily_data(db_connection, &user_id, date)?;
        }
    }

    Ok(())
}

pub fn delete_task_from_db(db_connection: &Connection, task_id: TaskID) -> ApiResult<()> {
    let existing: Option<(String, Option<String>)> = db_connection
        .query_row(
            "SELECT user_id, completed_at FROM tasks WHERE rowid = ?1",
            params![task_id],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .optional()?;

    let (user_id, completed_at) = existing.ok_or_else(|| ApiError::not_found("Task not found"))?;

    db_connection.execute("DELETE FROM tasks WHERE rowid = ?1", params![task_id])?;

    if let Some(date) = completed_at.and_then(|d| d.parse::<NaiveDate>().ok()) {
        refresh_daily_data(db_connection, &user_id, date)?;
    }

    Ok(())
}
