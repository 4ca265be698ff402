use rocket::{routes, Build, Rocket};

pub mod calendar;
pub mod daily;
pub mod data;
pub mod error;
pub mod goals;
pub mod streak;
pub mod tasks;
pub mod users;
pub mod weekly;

use data::DBConnection;

pub fn rocket(connection: DBConnection) -> Rocket<Build> {
    rocket::build().manage(connection).mount(
        "/api",
        routes![
            tasks::endpoints::get_tasks,
            tasks::endpoints::add_task,
            tasks::endpoints::update_task,
            tasks::endpoints::delete_task,
            goals::endpoints::get_goals,
            goals::endpoints::add_goal,
            goals::endpoints::update_goal,
            goals::endpoints::delete_goal,
            daily::endpoints::get_daily_data,
            daily::endpoints::upsert_daily_data,
            streak::endpoints::get_streak,
            streak::endpoints::check_streak,
            weekly::endpoints::get_weekly_ratings,
            weekly::endpoints::add_weekly_rating,
            calendar::endpoints::get_contributions,
            users::endpoints::signup,
            users::endpoints::login,
        ],
    )
}
