pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;

pub use entities::{AuthSession, JwtClaim};
pub use ports::{AuthService, HasherRepository, TokenRepository};
pub use value_objects::Identity;
