use std::future::Future;

use crate::domain::{
    authentication::{
        entities::{AuthSession, JwtClaim},
        value_objects::{AuthorizeRequestInput, Identity, SignInInput, SignUpInput},
    },
    common::entities::app_errors::CoreError,
    user::entities::User,
};

#[cfg_attr(test, mockall::automock)]
pub trait HasherRepository: Send + Sync {
    fn hash_password(&self, password: &str) -> Result<String, CoreError>;

    fn verify_password(&self, password: &str, hash: &str) -> Result<bool, CoreError>;
}

#[cfg_attr(test, mockall::automock)]
pub trait TokenRepository: Send + Sync {
    fn issue(&self, user: &User) -> Result<(String, i64), CoreError>;

    fn decode(&self, token: &str) -> Result<JwtClaim, CoreError>;
}

#[cfg_attr(test, mockall::automock)]
pub trait AuthService: Send + Sync {
    fn sign_up(
        &self,
        input: SignUpInput,
    ) -> impl Future<Output = Result<AuthSession, CoreError>> + Send;

    fn sign_in(
        &self,
        input: SignInInput,
    ) -> impl Future<Output = Result<AuthSession, CoreError>> + Send;

    fn authorize_request(
        &self,
        input: AuthorizeRequestInput,
    ) -> impl Future<Output = Result<Identity, CoreError>> + Send;
}
