use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::{generate_uuid_v7, today};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum TransactionType {
    #[serde(rename = "Booking Commission")]
    BookingCommission,
    #[serde(rename = "Grocery Affiliate")]
    GroceryAffiliate,
    #[serde(rename = "Chef Payout")]
    ChefPayout,
    Refund,
}

impl TransactionType {
    pub fn as_str(&self) -> &str {
        match self {
            TransactionType::BookingCommission => "Booking Commission",
            TransactionType::GroceryAffiliate => "Grocery Affiliate",
            TransactionType::ChefPayout => "Chef Payout",
            TransactionType::Refund => "Refund",
        }
    }
}

impl From<&str> for TransactionType {
    fn from(s: &str) -> Self {
        match s {
            "Grocery Affiliate" => TransactionType::GroceryAffiliate,
            "Chef Payout" => TransactionType::ChefPayout,
            "Refund" => TransactionType::Refund,
            _ => TransactionType::BookingCommission,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum TransactionStatus {
    Completed,
    Pending,
    Failed,
}

impl TransactionStatus {
    pub fn as_str(&self) -> &str {
        match self {
            TransactionStatus::Completed => "Completed",
            TransactionStatus::Pending => "Pending",
            TransactionStatus::Failed => "Failed",
        }
    }
}

impl From<&str> for TransactionStatus {
    fn from(s: &str) -> Self {
        match s {
            "Completed" => TransactionStatus::Completed,
            "Failed" => TransactionStatus::Failed,
            _ => TransactionStatus::Pending,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Transaction {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub party: String,
    pub date: String,
    pub amount: i64,
    pub status: TransactionStatus,
}

impl Transaction {
    pub fn new(kind: TransactionType, party: String, amount: i64, status: TransactionStatus) -> Self {
        Self {
            id: generate_uuid_v7(),
            kind,
            party,
            date: today(),
            amount,
            status,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum PayoutStatus {
    Pending,
    Completed,
}

impl PayoutStatus {
    pub fn as_str(&self) -> &str {
        match self {
            PayoutStatus::Pending => "Pending",
            PayoutStatus::Completed => "Completed",
        }
    }
}

impl From<&str> for PayoutStatus {
    fn from(s: &str) -> Self {
        match s {
            "Completed" => PayoutStatus::Completed,
            _ => PayoutStatus::Pending,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Payout {
    pub id: Uuid,
    pub chef_name: String,
    pub amount: i64,
    pub last_payout_date: String,
    pub status: PayoutStatus,
}

impl Payout {
    pub fn new(chef_name: String, amount: i64) -> Self {
        Self {
            id: generate_uuid_v7(),
            chef_name,
            amount,
            last_payout_date: String::new(),
            status: PayoutStatus::Pending,
        }
    }

    pub fn release(&mut self) {
        self.status = PayoutStatus::Completed;
        self.last_payout_date = today();
    }
}

/// The single global settings document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AppSettings {
    pub app_name: String,
    pub maintenance_mode: bool,
    pub model_name: String,
    pub temperature: f64,
    pub max_tokens: i32,
    /// Percent taken on grocery affiliate sales.
    pub commission_rate: i64,
    pub affiliate_partner: String,
    /// Percent taken on chef bookings.
    pub chef_commission: i64,
    pub auto_approve_chefs: bool,
    pub notifications: bool,
    pub email_alerts: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            app_name: "CulinaryAI".to_string(),
            maintenance_mode: false,
            model_name: "gemini-3-flash-preview".to_string(),
            temperature: 0.7,
            max_tokens: 2048,
            commission_rate: 5,
            affiliate_partner: "Instacart".to_string(),
            chef_commission: 10,
            auto_approve_chefs: false,
            notifications: true,
            email_alerts: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AdminOverview {
    pub total_revenue: i64,
    pub pending_applications: usize,
    pub users: usize,
    pub chefs: usize,
    pub bookings: usize,
    pub scans: u64,
}

/// Sum of the positive transaction amounts; refunds and payouts count as zero.
pub fn total_revenue(transactions: &[Transaction]) -> i64 {
    transactions
        .iter()
        .map(|t| t.amount)
        .filter(|amount| *amount > 0)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn revenue_ignores_negative_amounts() {
        let transactions = vec![
            Transaction::new(
                TransactionType::BookingCommission,
                "Chef Arjun".to_string(),
                1100,
                TransactionStatus::Completed,
            ),
            Transaction::new(
                TransactionType::Refund,
                "Priya".to_string(),
                -700,
                TransactionStatus::Completed,
            ),
            Transaction::new(
                TransactionType::GroceryAffiliate,
                "Instacart".to_string(),
                250,
                TransactionStatus::Pending,
            ),
        ];

        assert_eq!(total_revenue(&transactions), 1350);
    }

    #[test]
    fn releasing_a_payout_completes_it_today() {
        let mut payout = Payout::new("Chef Meera".to_string(), 9000);
        payout.release();
        assert_eq!(payout.status, PayoutStatus::Completed);
        assert_eq!(payout.last_payout_date, today());
    }

    #[test]
    fn transaction_type_uses_display_names_on_the_wire() {
        let json = serde_json::to_value(TransactionType::BookingCommission).unwrap();
        assert_eq!(json, "Booking Commission");
        assert_eq!(
            TransactionType::from("Chef Payout"),
            TransactionType::ChefPayout
        );
    }
}
