pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;

pub use entities::Feedback;
pub use ports::{FeedbackRepository, FeedbackService};
