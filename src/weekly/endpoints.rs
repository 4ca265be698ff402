use rocket::response::status;
use rocket::serde::json::Json;
use rocket::{get, post, State};

use crate::data::{DBConnection, UserQuery};
use crate::error::{ApiError, ApiResult};

use super::data::*;
use super::helpers::*;

#[get("/weekly-ratings?<query..>")]
pub fn get_weekly_ratings(
    query: UserQuery,
    db_connection: &State<DBConnection>,
) -> ApiResult<Json<Vec<WeeklyRating>>> {
    let user_id = query
        .user_id
        .ok_or_else(|| ApiError::validation("userId is required"))?;
    let db_connection = db_connection.lock()?;

    let ratings = get_weekly_ratings_for_user(&db_connection, &user_id)?;

    Ok(Json(ratings))
}

/// Creates a weekly self-rating. Once-per-week gating is left to the client;
/// the server only validates the fields themselves.
#[post("/weekly-ratings", format = "json", data = "<request>")]
pub fn add_weekly_rating(
    request: Json<AddWeeklyRatingRequest>,
    db_connection: &State<DBConnection>,
) -> ApiResult<status::Created<Json<WeeklyRating>>> {
    let request = request.into_inner();

    let (week_start, week_end, rating, user_id) = match (
        request.week_start,
        request.week_end,
        request.rating,
        request.user_id,
    ) {
        (Some(week_start), Some(week_end), Some(rating), Some(user_id))
            if !user_id.is_empty() =>
        {
            (week_start, week_end, rating, user_id)
        }
        _ => {
            return Err(ApiError::validation(
                "weekStart, weekEnd, rating and userId are required",
            ))
        }
    };

    if !(1..=10).contains(&rating) {
        return Err(ApiError::validation("rating must be between 1 and 10"));
    }

    let new_rating = NewWeeklyRating {
        user_id,
        week_start,
        week_end,
        rating,
        notes: request.notes,
        tasks_completed: request.tasks_completed.unwrap_or(0),
        goals_completed: request.goals_completed.unwrap_or(0),
    };

    let db_connection = db_connection.lock()?;
    let rating = add_weekly_rating_to_db(&db_connection, new_rating)?;

    let location = format!("/api/weekly-ratings/{}", rating.id);
    Ok(status::Created::new(location).body(Json(rating)))
}
