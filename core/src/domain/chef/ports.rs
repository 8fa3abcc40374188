use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    chef::{
        entities::{ChefApplication, ChefProfile, ChefStatus},
        value_objects::{ApplyAsChefInput, ApproveApplicationInput, UpdateChefProfileInput},
    },
    common::entities::app_errors::CoreError,
};

#[cfg_attr(test, mockall::automock)]
pub trait ChefRepository: Send + Sync {
    fn list_chefs(&self) -> impl Future<Output = Result<Vec<ChefProfile>, CoreError>> + Send;

    fn get_by_id(
        &self,
        chef_id: Uuid,
    ) -> impl Future<Output = Result<Option<ChefProfile>, CoreError>> + Send;

    fn get_by_user_id(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Option<ChefProfile>, CoreError>> + Send;

    fn create_chef(
        &self,
        chef: ChefProfile,
    ) -> impl Future<Output = Result<ChefProfile, CoreError>> + Send;

    fn update_chef(
        &self,
        chef: ChefProfile,
    ) -> impl Future<Output = Result<ChefProfile, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait ChefApplicationRepository: Send + Sync {
    fn list_applications(
        &self,
    ) -> impl Future<Output = Result<Vec<ChefApplication>, CoreError>> + Send;

    fn get_by_id(
        &self,
        application_id: Uuid,
    ) -> impl Future<Output = Result<Option<ChefApplication>, CoreError>> + Send;

    fn create_application(
        &self,
        application: ChefApplication,
    ) -> impl Future<Output = Result<ChefApplication, CoreError>> + Send;

    fn update_application(
        &self,
        application: ChefApplication,
    ) -> impl Future<Output = Result<ChefApplication, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait ChefService: Send + Sync {
    /// Guests and users see active chefs only; admins see every profile.
    fn get_chefs(
        &self,
        identity: Option<Identity>,
    ) -> impl Future<Output = Result<Vec<ChefProfile>, CoreError>> + Send;

    fn get_chef(&self, chef_id: Uuid)
    -> impl Future<Output = Result<ChefProfile, CoreError>> + Send;

    fn get_my_chef_profile(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<ChefProfile, CoreError>> + Send;

    fn update_my_chef_profile(
        &self,
        identity: Identity,
        input: UpdateChefProfileInput,
    ) -> impl Future<Output = Result<ChefProfile, CoreError>> + Send;

    fn set_chef_status(
        &self,
        identity: Identity,
        chef_id: Uuid,
        status: ChefStatus,
    ) -> impl Future<Output = Result<ChefProfile, CoreError>> + Send;

    fn apply(
        &self,
        identity: Option<Identity>,
        input: ApplyAsChefInput,
    ) -> impl Future<Output = Result<ChefApplication, CoreError>> + Send;

    fn get_applications(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<Vec<ChefApplication>, CoreError>> + Send;

    fn approve_application(
        &self,
        identity: Identity,
        input: ApproveApplicationInput,
    ) -> impl Future<Output = Result<ChefProfile, CoreError>> + Send;

    fn reject_application(
        &self,
        identity: Identity,
        application_id: Uuid,
    ) -> impl Future<Output = Result<ChefApplication, CoreError>> + Send;
}
