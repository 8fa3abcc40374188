use culinary_core::domain::{
    authentication::value_objects::Identity,
    sync::{
        entities::{ChangeEvent, Snapshot, SyncTopic},
        ports::SyncService,
    },
};
use futures::{Stream, stream};
use tokio::sync::broadcast::{Receiver, error::RecvError};
use tracing::{debug, warn};

struct Feed<S> {
    service: S,
    identity: Identity,
    topic: SyncTopic,
    receiver: Receiver<ChangeEvent>,
    pending: Option<Snapshot>,
}

/// Yields `initial`, then a fresh snapshot after every change that concerns
/// the subscriber. A lagging receiver just triggers one more snapshot.
pub fn snapshot_feed<S>(
    service: S,
    identity: Identity,
    topic: SyncTopic,
    initial: Snapshot,
    receiver: Receiver<ChangeEvent>,
) -> impl Stream<Item = Snapshot> + Send
where
    S: SyncService + 'static,
{
    let feed = Feed {
        service,
        identity,
        topic,
        receiver,
        pending: Some(initial),
    };

    stream::unfold(feed, |mut feed| async move {
        if let Some(snapshot) = feed.pending.take() {
            return Some((snapshot, feed));
        }

        let sees_everything = feed.identity.is_admin();
        loop {
            match feed.receiver.recv().await {
                Ok(event) if !event.concerns(feed.topic, feed.identity.id(), sees_everything) => {
                    continue;
                }
                Ok(_) => {}
                Err(RecvError::Lagged(skipped)) => {
                    debug!(skipped, topic = feed.topic.as_str(), "subscriber lagged");
                }
                Err(RecvError::Closed) => return None,
            }

            match feed
                .service
                .snapshot(feed.identity.clone(), feed.topic)
                .await
            {
                Ok(snapshot) => return Some((snapshot, feed)),
                Err(e) => {
                    warn!(topic = feed.topic.as_str(), "closing subscription: {}", e);
                    return None;
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use std::{
        sync::{
            Arc,
            atomic::{AtomicUsize, Ordering},
        },
        time::Duration,
    };

    use culinary_core::domain::{
        common::entities::app_errors::CoreError, recipe::entities::Ingredient,
        user::entities::Role,
    };
    use futures::StreamExt;
    use tokio::sync::broadcast;
    use uuid::Uuid;

    use super::*;

    /// Counts snapshots so each one is distinguishable.
    #[derive(Clone)]
    struct CountingSync {
        sender: broadcast::Sender<ChangeEvent>,
        calls: Arc<AtomicUsize>,
    }

    impl SyncService for CountingSync {
        async fn snapshot(&self, _: Identity, _: SyncTopic) -> Result<Snapshot, CoreError> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
            Ok(Snapshot::ShoppingList(vec![Ingredient {
                name: format!("item-{}", n),
                quantity: "1 unit".to_string(),
                is_available: false,
            }]))
        }

        fn subscribe(&self) -> broadcast::Receiver<ChangeEvent> {
            self.sender.subscribe()
        }
    }

    fn first_name(snapshot: &Snapshot) -> String {
        match snapshot {
            Snapshot::ShoppingList(items) => items[0].name.clone(),
            other => panic!("unexpected snapshot {:?}", other),
        }
    }

    #[tokio::test]
    async fn initial_then_only_concerning_changes() {
        let (sender, _) = broadcast::channel(16);
        let service = CountingSync {
            sender: sender.clone(),
            calls: Arc::new(AtomicUsize::new(0)),
        };
        let identity = Identity {
            user_id: Uuid::new_v4(),
            email: "me@example.com".to_string(),
            name: "Me".to_string(),
            role: Role::User,
        };
        let receiver = service.subscribe();
        let initial = Snapshot::ShoppingList(vec![]);

        let feed = snapshot_feed(
            service,
            identity.clone(),
            SyncTopic::ShoppingList,
            initial.clone(),
            receiver,
        );
        let mut feed = Box::pin(feed);

        assert_eq!(feed.next().await, Some(initial));

        sender
            .send(ChangeEvent::owned(SyncTopic::ShoppingList, vec![Uuid::new_v4()]))
            .unwrap();
        sender.send(ChangeEvent::global(SyncTopic::Chefs)).unwrap();
        sender
            .send(ChangeEvent::owned(SyncTopic::ShoppingList, vec![identity.id()]))
            .unwrap();

        let next = tokio::time::timeout(Duration::from_secs(1), feed.next())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(first_name(&next), "item-1");

        drop(sender);
        let end = tokio::time::timeout(Duration::from_secs(1), feed.next())
            .await
            .unwrap();
        assert_eq!(end, None);
    }
}
