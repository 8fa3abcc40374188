pub mod entities;
pub mod ports;
pub mod services;

pub use entities::{ChangeEvent, Snapshot, SyncTopic};
pub use ports::{ChangeNotifier, SyncService};
