pub mod admin;
pub mod authentication;
pub mod booking;
pub mod chat;
pub mod chef;
pub mod feedback;
pub mod health;
pub mod preferences;
pub mod recipe;
pub mod server;
pub mod shopping_list;
pub mod sync;
pub mod user;
