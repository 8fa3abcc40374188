use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::{generate_timestamp, today};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
    Chef,
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
            Role::Chef => "chef",
        }
    }
}

impl From<&str> for Role {
    fn from(s: &str) -> Self {
        match s {
            "admin" => Role::Admin,
            "chef" => Role::Chef,
            _ => Role::User,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum UserStatus {
    Active,
    Blocked,
}

impl UserStatus {
    pub fn as_str(&self) -> &str {
        match self {
            UserStatus::Active => "Active",
            UserStatus::Blocked => "Blocked",
        }
    }
}

impl From<&str> for UserStatus {
    fn from(s: &str) -> Self {
        match s {
            "Blocked" => UserStatus::Blocked,
            _ => UserStatus::Active,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub join_date: String,
    pub scans: i32,
    pub recipes_generated: i32,
    pub grocery_purchases: i32,
    pub bookings: i32,
    pub cuisine: String,
    pub diet: Vec<String>,
    pub last_active: DateTime<Utc>,
    pub status: UserStatus,
    pub role: Role,
}

impl User {
    pub fn new(name: String, email: String, role: Role) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            name,
            email,
            join_date: today(),
            scans: 0,
            recipes_generated: 0,
            grocery_purchases: 0,
            bookings: 0,
            cuisine: "Global".to_string(),
            diet: Vec::new(),
            last_active: now,
            status: UserStatus::Active,
            role,
        }
    }

    pub fn is_blocked(&self) -> bool {
        self.status == UserStatus::Blocked
    }

    pub fn touch(&mut self) {
        self.last_active = Utc::now();
    }
}

/// Counter increments applied atomically by the repository.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UserActivity {
    pub scans: i32,
    pub recipes_generated: i32,
    pub grocery_purchases: i32,
    pub bookings: i32,
}
