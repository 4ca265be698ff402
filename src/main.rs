use rusqlite::Connection;

use std::error::Error;
use std::sync::{Arc, Mutex};

use daytrack::data::create_tables;

#[rocket::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let connection = Connection::open("daytrack.db")?;
    create_tables(&connection)?;
    log::info!("database schema ready");

    let connection = Arc::new(Mutex::new(connection));

    daytrack::rocket(connection).launch().await?;

    Ok(())
}
