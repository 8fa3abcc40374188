pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;

pub use entities::{Role, User, UserActivity, UserStatus};
pub use ports::{UserRepository, UserService};
