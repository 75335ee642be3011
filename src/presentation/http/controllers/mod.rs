pub mod admin;
pub mod articles;
