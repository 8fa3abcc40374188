pub mod entities;
pub mod helpers;
pub mod policies;
pub mod ports;
pub mod pricing;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use ports::*;
pub use pricing::booking_total;
