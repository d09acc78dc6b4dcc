use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel_migrations::{embed_migrations, EmbeddedMigrations};
use dotenvy::dotenv;
use std::env;

pub mod error;
pub mod handlers;
pub mod models;
pub mod payloads;
pub mod schema;
pub mod store;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("./migrations");

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;

pub fn database_url() -> String {
    dotenv().ok();

    env::var("DATABASE_URL").unwrap_or_else(|_| "pizzeria.db".to_string())
}

pub fn establish_connection() -> SqliteConnection {
    SqliteConnection::establish(&database_url()).expect("Failed to open database")
}

pub fn establish_pool() -> DbPool {
    Pool::builder()
        .build(ConnectionManager::<SqliteConnection>::new(database_url()))
        .expect("Failed to create connection pool")
}
