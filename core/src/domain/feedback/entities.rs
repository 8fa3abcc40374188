use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

pub const GUEST_USERNAME: &str = "guest";

/// A rating of one recipe generation, left by a user or a guest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Feedback {
    pub id: Uuid,
    /// `None` for guests.
    pub user_id: Option<Uuid>,
    pub username: String,
    pub rating: i32,
    pub accuracy_score: i32,
    pub comment: String,
    pub scan_id: Option<Uuid>,
    pub timestamp: DateTime<Utc>,
}

impl Feedback {
    pub fn new(
        user_id: Option<Uuid>,
        username: String,
        rating: i32,
        accuracy_score: i32,
        comment: String,
        scan_id: Option<Uuid>,
    ) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            user_id,
            username,
            rating,
            accuracy_score,
            comment,
            scan_id,
            timestamp: now,
        }
    }
}
