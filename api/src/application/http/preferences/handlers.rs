pub mod get_favorites;
pub mod get_preferences;
pub mod toggle_dietary_filter;
pub mod toggle_favorite;
pub mod update_preferences;
