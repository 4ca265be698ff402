use rocket::http::{ContentType, Status};
use rocket::request::Request;
use rocket::response::{self, Responder, Response};
use serde_json::json;

use std::io::Cursor;
use std::sync::PoisonError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("storage error: {0}")]
    Storage(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn validation(message: impl Into<String>) -> ApiError {
        ApiError::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> ApiError {
        ApiError::NotFound(message.into())
    }
}

impl<T> From<PoisonError<T>> for ApiError {
    fn from(e: PoisonError<T>) -> ApiError {
        ApiError::Storage(e.to_string())
    }
}

impl From<rusqlite::Error> for ApiError {
    fn from(e: rusqlite::Error) -> ApiError {
        ApiError::Storage(e.to_string())
    }
}

impl From<bcrypt::BcryptError> for ApiError {
    fn from(e: bcrypt::BcryptError) -> ApiError {
        ApiError::Storage(e.to_string())
    }
}

impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, _: &'r Request<'_>) -> response::Result<'static> {
        let (status, body) = match &self {
            ApiError::Validation(message) => (Status::BadRequest, json!({ "message": message })),
            ApiError::NotFound(message) => (Status::NotFound, json!({ "message": message })),
            ApiError::Storage(message) => {
                log::warn!("storage failure: {}", message);
                (
                    Status::InternalServerError,
                    json!({ "message": "Internal storage failure", "error": message }),
                )
            }
        };

        let body = body.to_string();
        Response::build()
            .status(status)
            .header(ContentType::JSON)
            .sized_body(body.len(), Cursor::new(body))
            .ok()
    }
}
