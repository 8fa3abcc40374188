pub mod admin;
pub mod authentication;
pub mod booking;
pub mod chef;
pub mod db;
pub mod feedback;
pub mod health;
pub mod llm;
pub mod preferences;
pub mod recipe;
pub mod shopping_list;
pub mod sync;
pub mod user;
