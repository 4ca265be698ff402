use chrono::Utc;
use rusqlite::{params, Connection, Row};

use crate::error::ApiResult;

use super::data::*;

fn weekly_rating_from_row(row: &Row) -> rusqlite::Result<WeeklyRating> {
    Ok(WeeklyRating {
        id: row.get::<usize, i64>(0)?.to_string(),
        user_id: row.get(1)?,
        week_start: row.get(2)?,
        week_end: row.get(3)?,
        rating: row.get(4)?,
        notes: row.get(5)?,
        tasks_completed: row.get(6)?,
        goals_completed: row.get(7)?,
        created_at: row.get(8)?,
    })
}

pub fn get_weekly_ratings_for_user(
    db_connection: &Connection,
    user_id: &str,
) -> ApiResult<Vec<WeeklyRating>> {
    let mut statement = db_connection.prepare(
        "SELECT rowid, user_id, week_start, week_end, rating, notes,
                tasks_completed, goals_completed, created_at
         FROM weekly_ratings WHERE user_id = ?1",
    )?;

    let rows = statement.query_map(params![user_id], weekly_rating_from_row)?;

    let mut ratings = vec![];
    for row_result in rows {
        ratings.push(row_result?);
    }

    Ok(ratings)
}

pub struct NewWeeklyRating {
    pub user_id: String,
    pub week_start: String,
    pub week_end: String,
    pub rating: i64,
    pub notes: Option<String>,
    pub tasks_completed: i64,
    pub goals_completed: i64,
}

pub fn add_weekly_rating_to_db(
    db_connection: &Connection,
    rating: NewWeeklyRating,
) -> ApiResult<WeeklyRating> {
    let created_at = Utc::now().to_rfc3339();

    db_connection.execute(
        "INSERT INTO weekly_ratings
             (user_id, week_start, week_end, rating, notes,
              tasks_completed, goals_completed, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            rating.user_id,
            rating.week_start,
            rating.week_end,
            rating.rating,
            rating.notes,
            rating.tasks_completed,
            rating.goals_completed,
            created_at,
        ],
    )?;

    Ok(WeeklyRating {
        id: db_connection.last_insert_rowid().to_string(),
        user_id: rating.user_id,
        week_start: rating.week_start,
        week_end: rating.week_end,
        rating: rating.rating,
        notes: rating.notes,
        tasks_completed: rating.tasks_completed,
        goals_completed: rating.goals_completed,
        created_at,
    })
}
