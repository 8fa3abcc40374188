use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    booking::pricing::base_price,
    common::{entities::app_errors::CoreError, generate_uuid_v7, today},
};

/// Hourly rate given to a chef approved without an explicit one.
pub const DEFAULT_HOURLY_RATE: i64 = 1500;

/// Upper bound accepted for an hourly rate.
pub const MAX_HOURLY_RATE: i64 = 1_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum ChefStatus {
    Active,
    Suspended,
}

impl ChefStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ChefStatus::Active => "Active",
            ChefStatus::Suspended => "Suspended",
        }
    }
}

impl From<&str> for ChefStatus {
    fn from(s: &str) -> Self {
        match s {
            "Suspended" => ChefStatus::Suspended,
            _ => ChefStatus::Active,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ChefProfile {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub speciality: String,
    pub rating: f64,
    pub reviews: i32,
    /// Price of the base engagement (`hourly_rate` for the base hours).
    pub price: i64,
    pub hourly_rate: i64,
    pub image: String,
    pub badges: Vec<String>,
    pub joined_date: String,
    pub status: ChefStatus,
}

impl ChefProfile {
    pub fn from_application(
        application: &ChefApplication,
        hourly_rate: i64,
    ) -> Result<Self, CoreError> {
        Ok(Self {
            id: generate_uuid_v7(),
            user_id: application.user_id,
            name: format!("{} {}", application.first_name, application.last_name)
                .trim()
                .to_string(),
            email: application.email.clone(),
            mobile: String::new(),
            speciality: application.specialty.clone(),
            rating: 0.0,
            reviews: 0,
            price: base_price(hourly_rate)?,
            hourly_rate,
            image: String::new(),
            badges: Vec::new(),
            joined_date: today(),
            status: ChefStatus::Active,
        })
    }

    pub fn set_hourly_rate(&mut self, hourly_rate: i64) -> Result<(), CoreError> {
        self.price = base_price(hourly_rate)?;
        self.hourly_rate = hourly_rate;
        Ok(())
    }

    pub fn is_active(&self) -> bool {
        self.status == ChefStatus::Active
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Pending,
    Approved,
    Rejected,
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::Approved => "approved",
            ApplicationStatus::Rejected => "rejected",
        }
    }
}

impl From<&str> for ApplicationStatus {
    fn from(s: &str) -> Self {
        match s {
            "approved" => ApplicationStatus::Approved,
            "rejected" => ApplicationStatus::Rejected,
            _ => ApplicationStatus::Pending,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ChefApplication {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub specialty: String,
    pub years_experience: i32,
    pub status: ApplicationStatus,
    pub applied_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume_data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn application() -> ChefApplication {
        ChefApplication {
            id: generate_uuid_v7(),
            user_id: Some(Uuid::new_v4()),
            first_name: "Meera".to_string(),
            last_name: "Iyer".to_string(),
            email: "meera@example.com".to_string(),
            specialty: "South Indian".to_string(),
            years_experience: 8,
            status: ApplicationStatus::Pending,
            applied_date: today(),
            resume_data: None,
            resume_name: None,
        }
    }

    #[test]
    fn approved_application_becomes_an_active_profile() {
        let app = application();
        let chef = ChefProfile::from_application(&app, 2000).unwrap();

        assert_eq!(chef.name, "Meera Iyer");
        assert_eq!(chef.user_id, app.user_id);
        assert_eq!(chef.speciality, "South Indian");
        assert_eq!(chef.price, 8000);
        assert!(chef.is_active());
    }

    #[test]
    fn changing_the_rate_reprices_the_base_engagement() {
        let mut chef = ChefProfile::from_application(&application(), DEFAULT_HOURLY_RATE).unwrap();
        chef.set_hourly_rate(2500).unwrap();
        assert_eq!(chef.price, 10000);
    }

    #[test]
    fn overflowing_rate_leaves_the_profile_untouched() {
        let mut chef = ChefProfile::from_application(&application(), DEFAULT_HOURLY_RATE).unwrap();

        assert!(matches!(chef.set_hourly_rate(i64::MAX), Err(CoreError::Invalid(_))));
        assert_eq!(chef.hourly_rate, DEFAULT_HOURLY_RATE);
        assert_eq!(chef.price, 6000);
        assert!(ChefProfile::from_application(&application(), i64::MAX).is_err());
    }
}
