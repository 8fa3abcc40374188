pub mod entities;
pub mod helpers;
pub mod ports;
pub mod services;

pub use entities::ShoppingList;
pub use ports::{ShoppingListRepository, ShoppingListService};
