use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension, Row};

use std::collections::HashMap;

use crate::error::{ApiError, ApiResult};

use super::data::*;

fn daily_data_from_row(row: &Row) -> rusqlite::Result<DailyData> {
    Ok(DailyData {
        id: row.get::<usize, i64>(0)?.to_string(),
        date: row.get(1)?,
        user_id: row.get(2)?,
        tasks: row.get(3)?,
        goals: row.get(4)?,
    })
}

pub fn get_daily_data_for_user(
    db_connection: &Connection,
    user_id: &str,
) -> ApiResult<Vec<DailyData>> {
    let mut statement = db_connection.prepare(
        "SELECT rowid, date, user_id, tasks, goals FROM daily_data WHERE user_id = ?1",
    )?;

    let rows = statement.query_map(params![user_id], daily_data_from_row)?;

    let mut records = vec![];
    for row_result in rows {
        records.push(row_result?);
    }

    Ok(records)
}

/// Counts tasks and goals completed on the given date, from live records.
/// Counting is by completion date, the one canonical definition.
pub fn completed_counts(
    db_connection: &Connection,
    user_id: &str,
    date: NaiveDate,
) -> ApiResult<(i64, i64)> {
    let date = date.to_string();

    let tasks: i64 = db_connection.query_row(
        "SELECT COUNT(*) FROM tasks WHERE user_id = ?1 AND completed = 1 AND completed_at = ?2",
        params![user_id, date],
        |row| row.get(0),
    )?;
    let goals: i64 = db_connection.query_row(
        "SELECT COUNT(*) FROM goals WHERE user_id = ?1 AND completed = 1 AND completed_at = ?2",
        params![user_id, date],
        |row| row.get(0),
    )?;

    Ok((tasks, goals))
}

/// Recomputes the rollup for (date, user) from live records and upserts it.
pub fn refresh_daily_data(
    db_connection: &Connection,
    user_id: &str,
    date: NaiveDate,
) -> ApiResult<DailyData> {
    let (tasks, goals) = completed_counts(db_connection, user_id, date)?;

    db_connection.execute(
        "INSERT INTO daily_data (date, user_id, tasks, goals) VALUES (?1, ?2, ?3, ?4)
         ON CONFLICT(date, user_id) DO UPDATE SET tasks = excluded.tasks, goals = excluded.goals",
        params![date.to_string(), user_id, tasks, goals],
    )?;

    db_connection
        .query_row(
            "SELECT rowid, date, user_id, tasks, goals FROM daily_data
             WHERE date = ?1 AND user_id = ?2",
            params![date.to_string(), user_id],
            daily_data_from_row,
        )
        .optional()?
        .ok_or_else(|| ApiError::Storage("daily data missing after upsert".to_string()))
}

/// Date-keyed activity totals (tasks + goals) for one user, as consumed by
/// the contribution graph. Rows with dates that fail to parse are skipped.
pub fn counts_by_date(
    db_connection: &Connection,
    user_id: &str,
) -> ApiResult<HashMap<NaiveDate, u32>> {
    let mut statement = db_connection
        .prepare("SELECT date, tasks + goals FROM daily_data WHERE user_id = ?1")?;

    let rows = statement.query_map(params![user_id], |row| {
        Ok((row.get::<usize, String>(0)?, row.get::<usize, i64>(1)?))
    })?;

    let mut counts = HashMap::new();
    for row_result in rows {
        let (date, total) = row_result?;
        match date.parse::<NaiveDate>() {
            Ok(date) => {
                // Clamp rather than truncate, so a corrupt rollup row cannot
                // wrap the contribution total.
                let total = u32::try_from(total.max(0)).unwrap_or(u32::MAX);
                counts.insert(date, total);
            }
            Err(_) => log::warn!("skipping daily data row with bad date: {}", date),
        }
    }

    Ok(counts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::create_tables;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn counts_clamp_out_of_range_totals() {
        let connection = Connection::open_in_memory().unwrap();
        create_tables(&connection).unwrap();

        connection
            .execute(
                "INSERT INTO daily_data (date, user_id, tasks, goals)
                 VALUES ('2026-05-01', 'u1', 5000000000, 0),
                        ('2026-05-02', 'u1', -3, 0),
                        ('2026-05-03', 'u1', 2, 1)",
                [],
            )
            .unwrap();

        let counts = counts_by_date(&connection, "u1").unwrap();
        assert_eq!(counts[&date("2026-05-01")], u32::MAX);
        assert_eq!(counts[&date("2026-05-02")], 0);
        assert_eq!(counts[&date("2026-05-03")], 3);
    }
}
