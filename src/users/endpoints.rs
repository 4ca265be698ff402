use rocket::response::status;
use rocket::serde::json::Json;
use rocket::{post, State};

use crate::data::DBConnection;
use crate::error::{ApiError, ApiResult};

use super::data::*;
use super::helpers::*;

#[post("/auth/signup", format = "json", data = "<request>")]
pub fn signup(
    request: Json<SignupRequest>,
    db_connection: &State<DBConnection>,
) -> ApiResult<status::Created<Json<User>>> {
    let request = request.into_inner();
    let (email, password, name) = match (request.email, request.password, request.name) {
        (Some(email), Some(password), Some(name))
            if !email.is_empty() && !password.is_empty() && !name.is_empty() =>
        {
            (email, password, name)
        }
        _ => return Err(ApiError::validation("email, password and name are required")),
    };

    let db_connection = db_connection.lock()?;
    let user = signup_user(&db_connection, &email, &password, &name)?
        .ok_or_else(|| ApiError::validation("email is already registered"))?;

    let location = format!("/api/users/{}", user.id);
    Ok(status::Created::new(location).body(Json(user)))
}

#[post("/auth/login", format = "json", data = "<request>")]
pub fn login(
    request: Json<LoginRequest>,
    db_connection: &State<DBConnection>,
) -> ApiResult<Json<Option<User>>> {
    let request = request.into_inner();
    let (email, password) = match (request.email, request.password) {
        (Some(email), Some(password)) => (email, password),
        _ => return Err(ApiError::validation("email and password are required")),
    };

    let db_connection = db_connection.lock()?;
    let user = login_user(&db_connection, &email, &password)?;

    Ok(Json(user))
}
