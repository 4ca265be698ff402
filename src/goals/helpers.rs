use chrono::{NaiveDate, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::daily::helpers::refresh_daily_data;
use crate::error::{ApiError, ApiResult};

use super::data::*;

fn goal_from_row(row: &Row) -> rusqlite::Result<Goal> {
    Ok(Goal {
        id: row.get::<usize, i64>(0)?.to_string(),
        user_id: row.get(1)?,
        title: row.get(2)?,
        target: row.get(3)?,
        progress: row.get(4)?,
        completed: row.get(5)?,
        created_at: row.get(6)?,
    })
}

pub fn get_goals_for_user(db_connection: &Connection, user_id: &str) -> ApiResult<Vec<Goal>> {
    let mut statement = db_connection.prepare(
        "SELECT rowid, user_id, title, target, progress, completed, created_at
         FROM goals WHERE user_id = ?1",
    )?;

    let rows = statement.query_map(params![user_id], goal_from_row)?;

    let mut goals = vec![];
    for row_result in rows {
        goals.push(row_result?);
    }

    Ok(goals)
}

pub fn add_goal_to_db(
    db_connection: &Connection,
    title: &str,
    target: i64,
    user_id: &str,
) -> ApiResult<Goal> {
    let created_at = Utc::now().to_rfc3339();

    db_connection.execute(
        "INSERT INTO goals (user_id, title, target, progress, completed, completed_at, created_at)
         VALUES (?1, ?2, ?3, 0, 0, NULL, ?4)",
        params![user_id, title, target, created_at],
    )?;

    Ok(Goal {
        id: db_connection.last_insert_rowid().to_string(),
        user_id: user_id.to_string(),
        title: title.to_string(),
        target,
        progress: 0,
        completed: false,
        created_at,
    })
}

/// Updates goal progress. Completion is a pure function of progress and
/// target, recomputed here on every update; callers cannot set it directly.
pub fn set_goal_progress(
    db_connection: &Connection,
    goal_id: GoalID,
    progress: i64,
    today: NaiveDate,
) -> ApiResult<()> {
    let existing: Option<(String, i64, Option<String>)> = db_connection
        .query_row(
            "SELECT user_id, target, completed_at FROM goals WHERE rowid = ?1",
            params![goal_id],
            |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
        )
        .optional()?;

    let (user_id, target, previous_completed_at) =
        existing.ok_or_else(|| ApiError::not_found("Goal not found"))?;

    let completed = progress >= target;

    // A goal that stays complete keeps its original completion date.
    db_connection.execute(
        "UPDATE goals
         SET progress = ?1,
             completed = ?2,
             completed_at = CASE WHEN ?2 THEN COALESCE(completed_at, ?3) ELSE NULL END
         WHERE rowid = ?4",
        params![progress, completed, today.to_string(), goal_id],
    )?;

    refresh_daily_data(db_connection, &user_id, today)?;
    if let Some(date) = previous_completed_at.and_then(|d| d.parse::<NaiveDate>().ok()) {
        if date != today {
            refresh_daily_data(db_connection, &user_id, date)?;
        }
    }

    Ok(())
}

pub fn delete_goal_from_db(db_connection: &Connection, goal_id: GoalID) -> ApiResult<()> {
    let existing: Option<(String, Option<String>)> = db_connection
        .query_row(
            "SELECT user_id, completed_at FROM goals WHERE rowid = ?1",
            params![goal_id],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .optional()?;

    let (user_id, completed_at) = existing.ok_or_else(|| ApiError::not_found("Goal not found"))?;

    db_connection.execute("DELETE FROM goals WHERE rowid = ?1", params![goal_id])?;

    if let Some(date) = completed_at.and_then(|d| d.parse::<NaiveDate>().ok()) {
        refresh_daily_data(db_connection, &user_id, date)?;
    }

    Ok(())
}
