pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;

pub use entities::{AVAILABLE_FILTERS, DietaryFilterOption, UserPreferences};
pub use ports::{PreferencesRepository, PreferencesService};
