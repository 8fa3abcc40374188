use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Completed,
    Declined,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Completed => "completed",
            BookingStatus::Declined => "declined",
            BookingStatus::Cancelled => "cancelled",
        }
    }
}

impl From<&str> for BookingStatus {
    fn from(s: &str) -> Self {
        match s {
            "confirmed" => BookingStatus::Confirmed,
            "completed" => BookingStatus::Completed,
            "declined" => BookingStatus::Declined,
            "cancelled" => BookingStatus::Cancelled,
            _ => BookingStatus::Pending,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum PaymentStatus {
    Paid,
    Pending,
    Refunded,
    Failed,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &str {
        match self {
            PaymentStatus::Paid => "Paid",
            PaymentStatus::Pending => "Pending",
            PaymentStatus::Refunded => "Refunded",
            PaymentStatus::Failed => "Failed",
        }
    }
}

impl From<&str> for PaymentStatus {
    fn from(s: &str) -> Self {
        match s {
            "Paid" => PaymentStatus::Paid,
            "Refunded" => PaymentStatus::Refunded,
            "Failed" => PaymentStatus::Failed,
            _ => PaymentStatus::Pending,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ChefBookingRequest {
    pub id: Uuid,
    pub user_id: Uuid,
    pub chef_id: Uuid,
    pub client_name: String,
    pub client_email: Option<String>,
    pub chef_name: Option<String>,
    pub event_type: Option<String>,
    pub date: String,
    pub time: Option<String>,
    pub hours: i32,
    pub guests: i32,
    pub meal_types: Vec<String>,
    pub location: Option<String>,
    pub total_payout: i64,
    pub commission: Option<i64>,
    pub status: BookingStatus,
    pub payment_status: Option<PaymentStatus>,
    pub created_at: DateTime<Utc>,
}

pub struct ChefBookingConfig {
    pub user_id: Uuid,
    pub chef_id: Uuid,
    pub client_name: String,
    pub client_email: Option<String>,
    pub chef_name: Option<String>,
    pub event_type: Option<String>,
    pub date: String,
    pub time: Option<String>,
    pub hours: i32,
    pub guests: i32,
    pub meal_types: Vec<String>,
    pub location: Option<String>,
    pub total_payout: i64,
    pub commission: Option<i64>,
}

impl ChefBookingRequest {
    pub fn new(config: ChefBookingConfig) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            user_id: config.user_id,
            chef_id: config.chef_id,
            client_name: config.client_name,
            client_email: config.client_email,
            chef_name: config.chef_name,
            event_type: config.event_type,
            date: config.date,
            time: config.time,
            hours: config.hours,
            guests: config.guests,
            meal_types: config.meal_types,
            location: config.location,
            total_payout: config.total_payout,
            commission: config.commission,
            status: BookingStatus::Pending,
            payment_status: Some(PaymentStatus::Pending),
            created_at: now,
        }
    }
}

/// Figures shown on the chef partner dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ChefStats {
    pub total_revenue: i64,
    pub pending_orders: usize,
    pub completed_orders: usize,
    pub payout_estimate: i64,
}
