use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};

use crate::error::ApiResult;

use super::data::*;

const EMAIL_PROVIDER: &str = "email";

/// Registers an email-provider account. Returns `None` when the address is
/// already taken.
pub fn signup_user(
    db_connection: &Connection,
    email: &str,
    password: &str,
    name: &str,
) -> ApiResult<Option<User>> {
    let existing: Option<i64> = db_connection
        .query_row(
            "SELECT rowid FROM users WHERE email = ?1",
            params![email],
            |row| row.get(0),
        )
        .optional()?;

    if existing.is_some() {
        return Ok(None);
    }

    let password_hash = bcrypt::hash(password, bcrypt::DEFAULT_COST)?;
    let created_at = Utc::now().to_rfc3339();

    db_connection.execute(
        "INSERT INTO users (email, name, avatar, provider, password_hash, created_at)
         VALUES (?1, ?2, NULL, ?3, ?4, ?5)",
        params![email, name, EMAIL_PROVIDER, password_hash, created_at],
    )?;

    Ok(Some(User {
        id: db_connection.last_insert_rowid().to_string(),
        email: email.to_string(),
        name: name.to_string(),
        avatar: None,
        provider: Some(EMAIL_PROVIDER.to_string()),
        created_at,
    }))
}

/// Checks credentials against the stored hash. Returns `None` on an unknown
/// address, a non-email provider account, or a wrong password.
pub fn login_user(
    db_connection: &Connection,
    email: &str,
    password: &str,
) -> ApiResult<Option<User>> {
    let row: Option<(i64, String, String, Option<String>, Option<String>, Option<String>, String)> =
        db_connection
            .query_row(
                "SELECT rowid, email, name, avatar, provider, password_hash, created_at
                 FROM users WHERE email = ?1",
                params![email],
                |row| {
                    Ok((
                        row.get(0)?,
                        row.get(1)?,
                        row.get(2)?,
                        row.get(3)?,
                        row.get(4)?,
                        row.get(5)?,
                        row.get(6)?,
                    ))
                },
            )
            .optional()?;

    let Some((id, email, name, avatar, provider, password_hash, created_at)) = row else {
        return Ok(None);
    };

    let Some(password_hash) = password_hash else {
        return Ok(None);
    };

    if !bcrypt::verify(password, &password_hash)? {
        return Ok(None);
    }

    Ok(Some(User {
        id: id.to_string(),
        email,
        name,
        avatar,
        provider,
        created_at,
    }))
}
