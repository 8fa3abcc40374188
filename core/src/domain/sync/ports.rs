use std::future::Future;

use tokio::sync::broadcast;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    sync::entities::{ChangeEvent, Snapshot, SyncTopic},
};

/// Fan-out of change events to live subscriptions.
#[cfg_attr(test, mockall::automock)]
pub trait ChangeNotifier: Send + Sync {
    fn publish(&self, event: ChangeEvent);

    fn subscribe(&self) -> broadcast::Receiver<ChangeEvent>;
}

#[cfg_attr(test, mockall::automock)]
pub trait SyncService: Send + Sync {
    /// Loads the full current state of `topic` as visible to `identity`.
    fn snapshot(
        &self,
        identity: Identity,
        topic: SyncTopic,
    ) -> impl Future<Output = Result<Snapshot, CoreError>> + Send;

    fn subscribe(&self) -> broadcast::Receiver<ChangeEvent>;
}
