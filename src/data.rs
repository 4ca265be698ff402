use chrono::{NaiveDate, Utc};
use rocket::FromForm;
use rusqlite::Connection;

use std::sync::{Arc, Mutex};

pub type DBConnection = Arc<Mutex<Connection>>;

/// Query guard for list endpoints; every collection is scoped to one user.
#[derive(FromForm)]
pub struct UserQuery {
    #[field(name = "userId")]
    pub user_id: Option<String>,
}

pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

pub fn parse_row_id(id: &str) -> Option<i64> {
    id.parse().ok()
}

pub fn create_tables(connection: &Connection) -> rusqlite::Result<()> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS users (
            email TEXT NOT NULL UNIQUE,
            name TEXT NOT NULL,
            avatar TEXT,
            provider TEXT,
            password_hash TEXT,
            created_at TEXT NOT NULL
        )",
        [],
    )?;
    connection.execute(
        "CREATE TABLE IF NOT EXISTS tasks (
            user_id TEXT NOT NULL,
            title TEXT NOT NULL,
            completed INTEGER NOT NULL DEFAULT 0,
            completed_at TEXT,
            created_at TEXT NOT NULL
        )",
        [],
    )?;
    connection.execute(
        "CREATE TABLE IF NOT EXISTS goals (
            user_id TEXT NOT NULL,
            title TEXT NOT NULL,
            target INTEGER NOT NULL,
            progress INTEGER NOT NULL DEFAULT 0,
            completed INTEGER NOT NULL DEFAULT 0,
            completed_at TEXT,
            created_at TEXT NOT NULL
        )",
        [],
    )?;
    connection.execute(
        "CREATE TABLE IF NOT EXISTS daily_data (
            date TEXT NOT NULL,
            user_id TEXT NOT NULL,
            tasks INTEGER NOT NULL DEFAULT 0,
            goals INTEGER NOT NULL DEFAULT 0,
            UNIQUE(date, user_id)
        )",
        [],
    )?;
    connection.execute(
        "CREATE TABLE IF NOT EXISTS streaks (
            user_id TEXT NOT NULL UNIQUE,
            streak INTEGER NOT NULL,
            last_active_date TEXT NOT NULL
        )",
        [],
    )?;
    connection.execute(
        "CREATE TABLE IF NOT EXISTS weekly_ratings (
            user_id TEXT NOT NULL,
            week_start TEXT NOT NULL,
            week_end TEXT NOT NULL,
            rating INTEGER NOT NULL,
            notes TEXT,
            tasks_completed INTEGER NOT NULL DEFAULT 0,
            goals_completed INTEGER NOT NULL DEFAULT 0,
            created_at TEXT NOT NULL
        )",
        [],
    )?;

    Ok(())
}
