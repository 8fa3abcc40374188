pub mod entities;
pub mod helpers;
pub mod ports;
pub mod services;
pub mod value_objects;

pub use entities::{ChatMessage, ChatRole, ConversationTurn};
pub use ports::ChatService;
