pub mod cache;
pub mod database;
pub mod provider;
pub mod repositories;
pub mod time;
