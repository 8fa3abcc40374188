use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    user::{
        entities::{User, UserActivity},
        value_objects::{UpdateProfileInput, UpdateUserInput},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait UserRepository: Send + Sync {
    fn create_user(
        &self,
        user: User,
        password_hash: String,
    ) -> impl Future<Output = Result<User, CoreError>> + Send;

    fn get_by_id(&self, user_id: Uuid)
    -> impl Future<Output = Result<Option<User>, CoreError>> + Send;

    fn get_by_email(
        &self,
        email: String,
    ) -> impl Future<Output = Result<Option<User>, CoreError>> + Send;

    fn get_password_hash(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Option<String>, CoreError>> + Send;

    fn list_users(&self) -> impl Future<Output = Result<Vec<User>, CoreError>> + Send;

    fn update_user(&self, user: User) -> impl Future<Output = Result<User, CoreError>> + Send;

    fn record_activity(
        &self,
        user_id: Uuid,
        activity: UserActivity,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn delete_user(&self, user_id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait UserService: Send + Sync {
    fn get_profile(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<User, CoreError>> + Send;

    fn update_profile(
        &self,
        identity: Identity,
        input: UpdateProfileInput,
    ) -> impl Future<Output = Result<User, CoreError>> + Send;

    fn delete_account(&self, identity: Identity)
    -> impl Future<Output = Result<(), CoreError>> + Send;

    fn get_users(&self, identity: Identity)
    -> impl Future<Output = Result<Vec<User>, CoreError>> + Send;

    fn update_user(
        &self,
        identity: Identity,
        input: UpdateUserInput,
    ) -> impl Future<Output = Result<User, CoreError>> + Send;
}
