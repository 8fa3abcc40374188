use tokio::sync::broadcast;
use tracing::trace;

use crate::domain::sync::{entities::ChangeEvent, ports::ChangeNotifier};

pub const CHANGE_FEED_CAPACITY: usize = 256;

#[derive(Debug, Clone)]
pub struct BroadcastChangeNotifier {
    sender: broadcast::Sender<ChangeEvent>,
}

impl BroadcastChangeNotifier {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(CHANGE_FEED_CAPACITY);
        Self { sender }
    }
}

impl Default for BroadcastChangeNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl ChangeNotifier for BroadcastChangeNotifier {
    fn publish(&self, event: ChangeEvent) {
        // No subscribers is not an error.
        if let Err(e) = self.sender.send(event) {
            trace!("change dropped: {}", e);
        }
    }

    fn subscribe(&self) -> broadcast::Receiver<ChangeEvent> {
        self.sender.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::sync::entities::SyncTopic;

    #[tokio::test]
    async fn subscribers_receive_published_events() {
        let notifier = BroadcastChangeNotifier::new();
        let mut receiver = notifier.subscribe();

        notifier.publish(ChangeEvent::global(SyncTopic::Chefs));

        let event = receiver.recv().await.unwrap();
        assert_eq!(event.topic, SyncTopic::Chefs);
    }

    #[test]
    fn publishing_without_subscribers_is_silent() {
        BroadcastChangeNotifier::new().publish(ChangeEvent::global(SyncTopic::Settings));
    }
}
