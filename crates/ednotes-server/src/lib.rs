//! EdNotes content backend: CRUD over categories, articles and projects,
//! plus the navigation tree served to the wiki client.

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod navigation;
pub mod routes;
pub mod store;

pub use config::Config;
pub use db::DbPool;
pub use routes::{create_router, AppState};
