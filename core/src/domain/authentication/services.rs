use crate::domain::{
    admin::ports::{LedgerRepository, SettingsRepository},
    authentication::{
        entities::{AuthSession, MIN_PASSWORD_LENGTH},
        ports::{AuthService, HasherRepository, TokenRepository},
        value_objects::{AuthorizeRequestInput, Identity, SignInInput, SignUpInput},
    },
    booking::ports::BookingRepository,
    chef::ports::{ChefApplicationRepository, ChefRepository},
    common::{entities::app_errors::CoreError, services::Service},
    feedback::ports::FeedbackRepository,
    health::ports::HealthCheckRepository,
    preferences::ports::PreferencesRepository,
    recipe::ports::{LLMClient, ScanRepository},
    shopping_list::ports::ShoppingListRepository,
    sync::{
        entities::{ChangeEvent, SyncTopic},
        ports::ChangeNotifier,
    },
    user::{
        entities::{Role, User},
        ports::UserRepository,
    },
};

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

impl<U, H, T, CH, CA, B, SL, P, SC, F, L, ST, LLM, N, HC> AuthService
    for Service<U, H, T, CH, CA, B, SL, P, SC, F, L, ST, LLM, N, HC>
where
    U: UserRepository,
    H: HasherRepository,
    T: TokenRepository,
    CH: ChefRepository,
    CA: ChefApplicationRepository,
    B: BookingRepository,
    SL: ShoppingListRepository,
    P: PreferencesRepository,
    SC: ScanRepository,
    F: FeedbackRepository,
    L: LedgerRepository,
    ST: SettingsRepository,
    LLM: LLMClient,
    N: ChangeNotifier,
    HC: HealthCheckRepository,
{
    async fn sign_up(&self, input: SignUpInput) -> Result<AuthSession, CoreError> {
        if input.role == Role::Admin {
            return Err(CoreError::Forbidden(
                "admin accounts cannot be self-registered".to_string(),
            ));
        }

        if input.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(CoreError::WeakPassword);
        }

        let email = normalize_email(&input.email);
        if self
            .user_repository
            .get_by_email(email.clone())
            .await?
            .is_some()
        {
            return Err(CoreError::EmailAlreadyInUse);
        }

        let password_hash = self.hasher_repository.hash_password(&input.password)?;
        let user = User::new(input.name.trim().to_string(), email, input.role);
        let user = self.user_repository.create_user(user, password_hash).await?;

        tracing::info!(user_id = %user.id, role = user.role.as_str(), "user signed up");
        self.notify(ChangeEvent::global(SyncTopic::Users));

        self.open_session(user)
    }

    async fn sign_in(&self, input: SignInInput) -> Result<AuthSession, CoreError> {
        let mut user = self
            .user_repository
            .get_by_email(normalize_email(&input.email))
            .await?
            .ok_or(CoreError::InvalidCredentials)?;

        let hash = self
            .user_repository
            .get_password_hash(user.id)
            .await?
            .ok_or(CoreError::InvalidCredentials)?;

        if !self
            .hasher_repository
            .verify_password(&input.password, &hash)?
        {
            return Err(CoreError::InvalidCredentials);
        }

        if user.is_blocked() {
            return Err(CoreError::Forbidden("this account has been blocked".to_string()));
        }

        user.touch();
        let user = self.user_repository.update_user(user).await?;

        self.open_session(user)
    }

    async fn authorize_request(&self, input: AuthorizeRequestInput) -> Result<Identity, CoreError> {
        let claims = self.token_repository.decode(&input.token)?;

        let user = self
            .user_repository
            .get_by_id(claims.sub)
            .await?
            .ok_or(CoreError::InvalidToken)?;

        if user.is_blocked() {
            return Err(CoreError::Forbidden("this account has been blocked".to_string()));
        }

        Ok(Identity::from(&user))
    }
}

impl<U, H, T, CH, CA, B, SL, P, SC, F, L, ST, LLM, N, HC>
    Service<U, H, T, CH, CA, B, SL, P, SC, F, L, ST, LLM, N, HC>
where
    T: TokenRepository,
{
    fn open_session(&self, user: User) -> Result<AuthSession, CoreError> {
        let (access_token, expires_in) = self.token_repository.issue(&user)?;

        Ok(AuthSession {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in,
            user,
        })
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::domain::{
        authentication::entities::JwtClaim,
        common::services::test_support::{MockService, accept_notifications, mock_service},
        user::entities::UserStatus,
    };

    fn sign_up_input(password: &str) -> SignUpInput {
        SignUpInput {
            name: "Asha".to_string(),
            email: "Asha@Example.com ".to_string(),
            password: password.to_string(),
            role: Role::User,
        }
    }

    fn existing_user(status: UserStatus) -> User {
        let mut user = User::new("Asha".to_string(), "asha@example.com".to_string(), Role::User);
        user.status = status;
        user
    }

    fn issue_tokens(service: &mut MockService) {
        service
            .token_repository
            .expect_issue()
            .returning(|_| Ok(("token".to_string(), 3600)));
    }

    #[tokio::test]
    async fn short_password_is_rejected_before_any_lookup() {
        let service = mock_service();

        let result = service.sign_up(sign_up_input("12345")).await;

        assert_eq!(result, Err(CoreError::WeakPassword));
        assert_eq!(
            CoreError::WeakPassword.to_string(),
            "Password should be at least 6 characters."
        );
    }

    #[tokio::test]
    async fn registered_email_is_reported() {
        let mut service = mock_service();
        service
            .user_repository
            .expect_get_by_email()
            .withf(|email| email == "asha@example.com")
            .returning(|_| Box::pin(async { Ok(Some(existing_user(UserStatus::Active))) }));

        let result = service.sign_up(sign_up_input("secret1")).await;

        assert_eq!(result, Err(CoreError::EmailAlreadyInUse));
        assert_eq!(
            CoreError::EmailAlreadyInUse.to_string(),
            "This email is already registered."
        );
    }

    #[tokio::test]
    async fn admins_cannot_register_themselves() {
        let service = mock_service();
        let mut input = sign_up_input("secret1");
        input.role = Role::Admin;

        assert!(matches!(
            service.sign_up(input).await,
            Err(CoreError::Forbidden(_))
        ));
    }

    #[tokio::test]
    async fn sign_up_creates_the_user_and_opens_a_session() {
        let mut service = mock_service();
        service
            .user_repository
            .expect_get_by_email()
            .returning(|_| Box::pin(async { Ok(None) }));
        service
            .hasher_repository
            .expect_hash_password()
            .returning(|_| Ok("hashed".to_string()));
        service
            .user_repository
            .expect_create_user()
            .withf(|user, hash| user.email == "asha@example.com" && hash == "hashed")
            .returning(|user, _| Box::pin(async move { Ok(user) }));
        issue_tokens(&mut service);
        accept_notifications(&mut service);

        let session = service.sign_up(sign_up_input("secret1")).await.unwrap();

        assert_eq!(session.access_token, "token");
        assert_eq!(session.token_type, "Bearer");
        assert_eq!(session.user.role, Role::User);
    }

    #[tokio::test]
    async fn wrong_password_reads_as_incorrect_credentials() {
        let mut service = mock_service();
        service
            .user_repository
            .expect_get_by_email()
            .returning(|_| Box::pin(async { Ok(Some(existing_user(UserStatus::Active))) }));
        service
            .user_repository
            .expect_get_password_hash()
            .returning(|_| Box::pin(async { Ok(Some("hashed".to_string())) }));
        service
            .hasher_repository
            .expect_verify_password()
            .returning(|_, _| Ok(false));

        let result = service
            .sign_in(SignInInput {
                email: "asha@example.com".to_string(),
                password: "nope".to_string(),
            })
            .await;

        assert_eq!(result, Err(CoreError::InvalidCredentials));
        assert_eq!(
            CoreError::InvalidCredentials.to_string(),
            "Incorrect email or password."
        );
    }

    #[tokio::test]
    async fn unknown_email_reads_as_incorrect_credentials() {
        let mut service = mock_service();
        service
            .user_repository
            .expect_get_by_email()
            .returning(|_| Box::pin(async { Ok(None) }));

        let result = service
            .sign_in(SignInInput {
                email: "ghost@example.com".to_string(),
                password: "secret1".to_string(),
            })
            .await;

        assert_eq!(result, Err(CoreError::InvalidCredentials));
    }

    #[tokio::test]
    async fn blocked_user_cannot_sign_in() {
        let mut service = mock_service();
        service
            .user_repository
            .expect_get_by_email()
            .returning(|_| Box::pin(async { Ok(Some(existing_user(UserStatus::Blocked))) }));
        service
            .user_repository
            .expect_get_password_hash()
            .returning(|_| Box::pin(async { Ok(Some("hashed".to_string())) }));
        service
            .hasher_repository
            .expect_verify_password()
            .returning(|_, _| Ok(true));

        let result = service
            .sign_in(SignInInput {
                email: "asha@example.com".to_string(),
                password: "secret1".to_string(),
            })
            .await;

        assert!(matches!(result, Err(CoreError::Forbidden(_))));
    }

    #[tokio::test]
    async fn token_of_a_deleted_user_is_invalid() {
        let mut service = mock_service();
        service.token_repository.expect_decode().returning(|_| {
            Ok(JwtClaim {
                sub: Uuid::new_v4(),
                email: "gone@example.com".to_string(),
                role: Role::User,
                iat: 0,
                exp: 0,
            })
        });
        service
            .user_repository
            .expect_get_by_id()
            .returning(|_| Box::pin(async { Ok(None) }));

        let result = service
            .authorize_request(AuthorizeRequestInput {
                token: "t".to_string(),
            })
            .await;

        assert_eq!(result, Err(CoreError::InvalidToken));
    }
}
