use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    admin::entities::{AppSettings, Payout, Transaction},
    booking::entities::ChefBookingRequest,
    chef::entities::{ChefApplication, ChefProfile},
    recipe::entities::Ingredient,
    user::entities::User,
};

/// A collection or document clients can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum SyncTopic {
    Chefs,
    Bookings,
    Users,
    Transactions,
    Applications,
    Payouts,
    Settings,
    ShoppingList,
}

impl SyncTopic {
    pub fn as_str(&self) -> &str {
        match self {
            SyncTopic::Chefs => "chefs",
            SyncTopic::Bookings => "bookings",
            SyncTopic::Users => "users",
            SyncTopic::Transactions => "transactions",
            SyncTopic::Applications => "applications",
            SyncTopic::Payouts => "payouts",
            SyncTopic::Settings => "settings",
            SyncTopic::ShoppingList => "shopping-list",
        }
    }
}

impl TryFrom<&str> for SyncTopic {
    type Error = ();

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "chefs" => Ok(SyncTopic::Chefs),
            "bookings" => Ok(SyncTopic::Bookings),
            "users" => Ok(SyncTopic::Users),
            "transactions" => Ok(SyncTopic::Transactions),
            "applications" => Ok(SyncTopic::Applications),
            "payouts" => Ok(SyncTopic::Payouts),
            "settings" => Ok(SyncTopic::Settings),
            "shopping-list" => Ok(SyncTopic::ShoppingList),
            _ => Err(()),
        }
    }
}

/// Emitted after every successful write.
///
/// `owners` lists the users whose private view changed (the booking's client,
/// the shopping list's owner). Empty means the change is visible to everyone
/// subscribed to the topic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    pub topic: SyncTopic,
    pub owners: Vec<Uuid>,
}

impl ChangeEvent {
    pub fn global(topic: SyncTopic) -> Self {
        Self {
            topic,
            owners: Vec::new(),
        }
    }

    pub fn owned(topic: SyncTopic, owners: Vec<Uuid>) -> Self {
        Self { topic, owners }
    }

    /// Whether a subscriber of `topic` viewing as `subscriber` must refresh.
    pub fn concerns(&self, topic: SyncTopic, subscriber: Uuid, sees_everything: bool) -> bool {
        if self.topic != topic {
            return false;
        }
        sees_everything || self.owners.is_empty() || self.owners.contains(&subscriber)
    }
}

/// Full current state of a topic, as pushed to subscribers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "topic", content = "data", rename_all = "kebab-case")]
pub enum Snapshot {
    Chefs(Vec<ChefProfile>),
    Bookings(Vec<ChefBookingRequest>),
    Users(Vec<User>),
    Transactions(Vec<Transaction>),
    Applications(Vec<ChefApplication>),
    Payouts(Vec<Payout>),
    Settings(AppSettings),
    ShoppingList(Vec<Ingredient>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owned_events_only_reach_their_owner() {
        let owner = Uuid::new_v4();
        let stranger = Uuid::new_v4();
        let event = ChangeEvent::owned(SyncTopic::ShoppingList, vec![owner]);

        assert!(event.concerns(SyncTopic::ShoppingList, owner, false));
        assert!(!event.concerns(SyncTopic::ShoppingList, stranger, false));
        assert!(!event.concerns(SyncTopic::Bookings, owner, false));
    }

    #[test]
    fn privileged_subscribers_see_every_owned_event() {
        let event = ChangeEvent::owned(SyncTopic::Bookings, vec![Uuid::new_v4()]);
        assert!(event.concerns(SyncTopic::Bookings, Uuid::new_v4(), true));
    }

    #[test]
    fn topic_names_parse_back() {
        for topic in [
            SyncTopic::Chefs,
            SyncTopic::Bookings,
            SyncTopic::ShoppingList,
            SyncTopic::Settings,
        ] {
            assert_eq!(SyncTopic::try_from(topic.as_str()), Ok(topic));
        }
        assert!(SyncTopic::try_from("scans").is_err());
    }
}
