use sea_orm::ActiveValue::Set;
use tracing::error;

use crate::{
    domain::{
        chef::entities::{ChefApplication, ChefProfile},
        common::entities::app_errors::CoreError,
    },
    entity::{chef_applications, chefs},
};

impl From<&chefs::Model> for ChefProfile {
    fn from(model: &chefs::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            name: model.name.clone(),
            email: model.email.clone(),
            mobile: model.mobile.clone(),
            speciality: model.speciality.clone(),
            rating: model.rating,
            reviews: model.reviews,
            price: model.price,
            hourly_rate: model.hourly_rate,
            image: model.image.clone(),
            badges: serde_json::from_value(model.badges.clone()).unwrap_or_default(),
            joined_date: model.joined_date.clone(),
            status: model.status.as_str().into(),
        }
    }
}

impl From<chefs::Model> for ChefProfile {
    fn from(model: chefs::Model) -> Self {
        Self::from(&model)
    }
}

impl TryFrom<&ChefProfile> for chefs::ActiveModel {
    type Error = CoreError;

    fn try_from(chef: &ChefProfile) -> Result<Self, Self::Error> {
        let badges = serde_json::to_value(&chef.badges).map_err(|e| {
            error!("Failed to serialize badges: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(Self {
            id: Set(chef.id),
            user_id: Set(chef.user_id),
            name: Set(chef.name.clone()),
            email: Set(chef.email.clone()),
            mobile: Set(chef.mobile.clone()),
            speciality: Set(chef.speciality.clone()),
            rating: Set(chef.rating),
            reviews: Set(chef.reviews),
            price: Set(chef.price),
            hourly_rate: Set(chef.hourly_rate),
            image: Set(chef.image.clone()),
            badges: Set(badges),
            joined_date: Set(chef.joined_date.clone()),
            status: Set(chef.status.as_str().to_string()),
        })
    }
}

impl From<&chef_applications::Model> for ChefApplication {
    fn from(model: &chef_applications::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            first_name: model.first_name.clone(),
            last_name: model.last_name.clone(),
            email: model.email.clone(),
            specialty: model.specialty.clone(),
            years_experience: model.years_experience,
            status: model.status.as_str().into(),
            applied_date: model.applied_date.clone(),
            resume_data: model.resume_data.clone(),
            resume_name: model.resume_name.clone(),
        }
    }
}

impl From<chef_applications::Model> for ChefApplication {
    fn from(model: chef_applications::Model) -> Self {
        Self::from(&model)
    }
}

impl From<ChefApplication> for chef_applications::ActiveModel {
    fn from(application: ChefApplication) -> Self {
        Self {
            id: Set(application.id),
            user_id: Set(application.user_id),
            first_name: Set(application.first_name),
            last_name: Set(application.last_name),
            email: Set(application.email),
            specialty: Set(application.specialty),
            years_experience: Set(application.years_experience),
            status: Set(application.status.as_str().to_string()),
            applied_date: Set(application.applied_date),
            resume_data: Set(application.resume_data),
            resume_name: Set(application.resume_name),
        }
    }
}
