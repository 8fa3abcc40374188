use uuid::Uuid;

use crate::domain::{
    admin::ports::{LedgerRepository, SettingsRepository},
    authentication::{
        ports::{HasherRepository, TokenRepository},
        value_objects::Identity,
    },
    booking::ports::BookingRepository,
    chef::{
        entities::{
            ApplicationStatus, ChefApplication, ChefProfile, ChefStatus, DEFAULT_HOURLY_RATE,
            MAX_HOURLY_RATE,
        },
        ports::{ChefApplicationRepository, ChefRepository, ChefService},
        value_objects::{ApplyAsChefInput, ApproveApplicationInput, UpdateChefProfileInput},
    },
    common::{
        entities::app_errors::CoreError,
        generate_uuid_v7,
        policies::{RolePolicy, ensure_policy},
        services::Service,
        today,
    },
    feedback::ports::FeedbackRepository,
    health::ports::HealthCheckRepository,
    preferences::ports::PreferencesRepository,
    recipe::ports::{LLMClient, ScanRepository},
    shopping_list::ports::ShoppingListRepository,
    sync::{
        entities::{ChangeEvent, SyncTopic},
        ports::ChangeNotifier,
    },
    user::{entities::Role, ports::UserRepository},
};

fn validate_rate(hourly_rate: i64) -> Result<i64, CoreError> {
    if hourly_rate <= 0 {
        return Err(CoreError::Invalid("hourly rate must be positive".to_string()));
    }
    if hourly_rate > MAX_HOURLY_RATE {
        return Err(CoreError::Invalid(format!(
            "hourly rate cannot exceed {}",
            MAX_HOURLY_RATE
        )));
    }
    Ok(hourly_rate)
}

impl<U, H, T, CH, CA, B, SL, P, SC, F, L, ST, LLM, N, HC> ChefService
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
    async fn get_chefs(&self, identity: Option<Identity>) -> Result<Vec<ChefProfile>, CoreError> {
        let chefs = self.chef_repository.list_chefs().await?;

        if identity.as_ref().is_some_and(|i| i.is_admin()) {
            return Ok(chefs);
        }
        Ok(chefs.into_iter().filter(|c| c.is_active()).collect())
    }

    async fn get_chef(&self, chef_id: Uuid) -> Result<ChefProfile, CoreError> {
        self.chef_repository
            .get_by_id(chef_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    async fn get_my_chef_profile(&self, identity: Identity) -> Result<ChefProfile, CoreError> {
        self.chef_repository
            .get_by_user_id(identity.id())
            .await?
            .ok_or(CoreError::NotFound)
    }

    async fn update_my_chef_profile(
        &self,
        identity: Identity,
        input: UpdateChefProfileInput,
    ) -> Result<ChefProfile, CoreError> {
        let mut chef = self
            .chef_repository
            .get_by_user_id(identity.id())
            .await?
            .ok_or(CoreError::NotFound)?;

        if let Some(mobile) = input.mobile {
            chef.mobile = mobile;
        }
        if let Some(speciality) = input.speciality {
            chef.speciality = speciality;
        }
        if let Some(hourly_rate) = input.hourly_rate {
            chef.set_hourly_rate(validate_rate(hourly_rate)?)?;
        }
        if let Some(image) = input.image {
            chef.image = image;
        }
        if let Some(badges) = input.badges {
            chef.badges = badges;
        }

        let chef = self.chef_repository.update_chef(chef).await?;
        self.notify(ChangeEvent::global(SyncTopic::Chefs));

        Ok(chef)
    }

    async fn set_chef_status(
        &self,
        identity: Identity,
        chef_id: Uuid,
        status: ChefStatus,
    ) -> Result<ChefProfile, CoreError> {
        ensure_policy(RolePolicy::is_admin(&identity), "only admins can moderate chefs")?;

        let mut chef = self
            .chef_repository
            .get_by_id(chef_id)
            .await?
            .ok_or(CoreError::NotFound)?;
        chef.status = status;

        let chef = self.chef_repository.update_chef(chef).await?;

        tracing::info!(chef_id = %chef.id, status = chef.status.as_str(), "chef status changed");
        self.notify(ChangeEvent::global(SyncTopic::Chefs));

        Ok(chef)
    }

    async fn apply(
        &self,
        identity: Option<Identity>,
        input: ApplyAsChefInput,
    ) -> Result<ChefApplication, CoreError> {
        if input.first_name.trim().is_empty() || input.email.trim().is_empty() {
            return Err(CoreError::Invalid("name and email are required".to_string()));
        }
        if input.years_experience < 0 {
            return Err(CoreError::Invalid(
                "years of experience cannot be negative".to_string(),
            ));
        }

        let application = ChefApplication {
            id: generate_uuid_v7(),
            user_id: identity.as_ref().map(|i| i.id()),
            first_name: input.first_name.trim().to_string(),
            last_name: input.last_name.trim().to_string(),
            email: input.email.trim().to_string(),
            specialty: input.specialty,
            years_experience: input.years_experience,
            status: ApplicationStatus::Pending,
            applied_date: today(),
            resume_data: input.resume_data,
            resume_name: input.resume_name,
        };
        let application = self
            .chef_application_repository
            .create_application(application)
            .await?;

        tracing::info!(application_id = %application.id, "chef application received");
        self.notify(ChangeEvent::global(SyncTopic::Applications));

        if self.current_settings().await?.auto_approve_chefs {
            return match self.approve(application.clone(), DEFAULT_HOURLY_RATE).await {
                Ok((application, _)) => Ok(application),
                Err(e) => {
                    tracing::warn!(
                        application_id = %application.id,
                        "auto-approval failed, left pending: {}",
                        e
                    );
                    Ok(application)
                }
            };
        }

        Ok(application)
    }

    async fn get_applications(&self, identity: Identity) -> Result<Vec<ChefApplication>, CoreError> {
        ensure_policy(
            RolePolicy::is_admin(&identity),
            "only admins can review applications",
        )?;

        self.chef_application_repository.list_applications().await
    }

    async fn approve_application(
        &self,
        identity: Identity,
        input: ApproveApplicationInput,
    ) -> Result<ChefProfile, CoreError> {
        ensure_policy(
            RolePolicy::is_admin(&identity),
            "only admins can review applications",
        )?;

        let application = self
            .chef_application_repository
            .get_by_id(input.application_id)
            .await?
            .ok_or(CoreError::NotFound)?;
        if application.status == ApplicationStatus::Approved {
            return Err(CoreError::Invalid(
                "application is already approved".to_string(),
            ));
        }

        let rate = validate_rate(input.hourly_rate.unwrap_or(DEFAULT_HOURLY_RATE))?;
        let (_, chef) = self.approve(application, rate).await?;

        Ok(chef)
    }

    async fn reject_application(
        &self,
        identity: Identity,
        application_id: Uuid,
    ) -> Result<ChefApplication, CoreError> {
        ensure_policy(
            RolePolicy::is_admin(&identity),
            "only admins can review applications",
        )?;

        let mut application = self
            .chef_application_repository
            .get_by_id(application_id)
            .await?
            .ok_or(CoreError::NotFound)?;
        application.status = ApplicationStatus::Rejected;

        let application = self
            .chef_application_repository
            .update_application(application)
            .await?;
        self.notify(ChangeEvent::global(SyncTopic::Applications));

        Ok(application)
    }
}

impl<U, H, T, CH, CA, B, SL, P, SC, F, L, ST, LLM, N, HC>
    Service<U, H, T, CH, CA, B, SL, P, SC, F, L, ST, LLM, N, HC>
where
    U: UserRepository,
    CH: ChefRepository,
    CA: ChefApplicationRepository,
    ST: SettingsRepository,
    N: ChangeNotifier,
{
    /// Opens the chef profile, then marks the application approved and promotes the applicant.
    ///
    /// The application keeps its status when the profile cannot be created.
    async fn approve(
        &self,
        mut application: ChefApplication,
        hourly_rate: i64,
    ) -> Result<(ChefApplication, ChefProfile), CoreError> {
        if let Some(user_id) = application.user_id
            && self
                .chef_repository
                .get_by_user_id(user_id)
                .await?
                .is_some()
        {
            return Err(CoreError::Invalid(
                "applicant already has a chef profile".to_string(),
            ));
        }

        let chef = self
            .chef_repository
            .create_chef(ChefProfile::from_application(&application, hourly_rate)?)
            .await?;

        application.status = ApplicationStatus::Approved;
        let application = self
            .chef_application_repository
            .update_application(application)
            .await?;

        if let Some(user_id) = application.user_id
            && let Some(mut user) = self.user_repository.get_by_id(user_id).await?
            && user.role == Role::User
        {
            user.role = Role::Chef;
            self.user_repository.update_user(user).await?;
            self.notify(ChangeEvent::global(SyncTopic::Users));
        }

        tracing::info!(
            application_id = %application.id,
            chef_id = %chef.id,
            hourly_rate,
            "chef application approved"
        );
        self.notify(ChangeEvent::global(SyncTopic::Applications));
        self.notify(ChangeEvent::global(SyncTopic::Chefs));

        Ok((application, chef))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        admin::entities::AppSettings,
        common::services::test_support::{MockService, accept_notifications, mock_service},
        user::entities::User,
    };

    fn identity(role: Role) -> Identity {
        Identity {
            user_id: Uuid::new_v4(),
            email: "meera@example.com".to_string(),
            name: "Meera".to_string(),
            role,
        }
    }

    fn apply_input() -> ApplyAsChefInput {
        ApplyAsChefInput {
            first_name: "Meera".to_string(),
            last_name: "Iyer".to_string(),
            email: "meera@example.com".to_string(),
            specialty: "Chettinad".to_string(),
            years_experience: 9,
            resume_data: None,
            resume_name: None,
        }
    }

    fn settings(service: &mut MockService, auto_approve_chefs: bool) {
        service
            .settings_repository
            .expect_get_settings()
            .returning(move || {
                Box::pin(async move {
                    Ok(Some(AppSettings {
                        auto_approve_chefs,
                        ..AppSettings::default()
                    }))
                })
            });
    }

    fn persist_applications(service: &mut MockService) {
        service
            .chef_application_repository
            .expect_create_application()
            .returning(|app| Box::pin(async move { Ok(app) }));
        service
            .chef_application_repository
            .expect_update_application()
            .returning(|app| Box::pin(async move { Ok(app) }));
    }

    #[tokio::test]
    async fn application_waits_for_review_by_default() {
        let mut service = mock_service();
        settings(&mut service, false);
        persist_applications(&mut service);
        accept_notifications(&mut service);
        service.chef_repository.expect_create_chef().never();

        let application = service
            .apply(Some(identity(Role::User)), apply_input())
            .await
            .unwrap();

        assert_eq!(application.status, ApplicationStatus::Pending);
        assert!(application.user_id.is_some());
    }

    #[tokio::test]
    async fn auto_approval_opens_a_profile_and_promotes_the_user() {
        let mut service = mock_service();
        let applicant = identity(Role::User);
        let user = User {
            id: applicant.user_id,
            ..User::new("Meera".to_string(), "meera@example.com".to_string(), Role::User)
        };
        settings(&mut service, true);
        persist_applications(&mut service);
        accept_notifications(&mut service);
        no_existing_profile(&mut service);
        service
            .chef_repository
            .expect_create_chef()
            .times(1)
            .withf(|chef| chef.hourly_rate == DEFAULT_HOURLY_RATE && chef.price == 6000)
            .returning(|chef| Box::pin(async move { Ok(chef) }));
        service.user_repository.expect_get_by_id().returning(move |_| {
            let user = user.clone();
            Box::pin(async move { Ok(Some(user)) })
        });
        service
            .user_repository
            .expect_update_user()
            .times(1)
            .withf(|user| user.role == Role::Chef)
            .returning(|user| Box::pin(async move { Ok(user) }));

        let application = service.apply(Some(applicant), apply_input()).await.unwrap();

        assert_eq!(application.status, ApplicationStatus::Approved);
    }

    #[tokio::test]
    async fn public_listing_hides_suspended_chefs() {
        let mut service = mock_service();
        service.chef_repository.expect_list_chefs().returning(|| {
            Box::pin(async {
                let app = ChefApplication {
                    id: Uuid::new_v4(),
                    user_id: None,
                    first_name: "A".to_string(),
                    last_name: "B".to_string(),
                    email: "a@b.c".to_string(),
                    specialty: "Any".to_string(),
                    years_experience: 1,
                    status: ApplicationStatus::Approved,
                    applied_date: "2026-01-01".to_string(),
                    resume_data: None,
                    resume_name: None,
                };
                let active = ChefProfile::from_application(&app, 1000).unwrap();
                let mut suspended = ChefProfile::from_application(&app, 1000).unwrap();
                suspended.status = ChefStatus::Suspended;
                Ok(vec![active, suspended])
            })
        });

        assert_eq!(service.get_chefs(None).await.unwrap().len(), 1);
        assert_eq!(
            service
                .get_chefs(Some(identity(Role::Admin)))
                .await
                .unwrap()
                .len(),
            2
        );
    }

    fn pending_application(user_id: Option<Uuid>) -> ChefApplication {
        ChefApplication {
            id: Uuid::new_v4(),
            user_id,
            first_name: "A".to_string(),
            last_name: "B".to_string(),
            email: "a@b.c".to_string(),
            specialty: "Any".to_string(),
            years_experience: 1,
            status: ApplicationStatus::Pending,
            applied_date: "2026-01-01".to_string(),
            resume_data: None,
            resume_name: None,
        }
    }

    fn no_existing_profile(service: &mut MockService) {
        service
            .chef_repository
            .expect_get_by_user_id()
            .returning(|_| Box::pin(async { Ok(None) }));
    }

    fn rate_update(hourly_rate: i64) -> UpdateChefProfileInput {
        UpdateChefProfileInput {
            mobile: None,
            speciality: None,
            hourly_rate: Some(hourly_rate),
            image: None,
            badges: None,
        }
    }

    fn existing_chef(service: &mut MockService) {
        let mut chef = ChefProfile::from_application(&pending_application(None), 1000).unwrap();
        chef.user_id = Some(Uuid::new_v4());
        service.chef_repository.expect_get_by_user_id().returning(move |_| {
            let chef = chef.clone();
            Box::pin(async move { Ok(Some(chef)) })
        });
    }

    #[tokio::test]
    async fn non_positive_rate_is_rejected() {
        let mut service = mock_service();
        existing_chef(&mut service);

        let result = service
            .update_my_chef_profile(identity(Role::Chef), rate_update(0))
            .await;

        assert!(matches!(result, Err(CoreError::Invalid(_))));
    }

    #[tokio::test]
    async fn absurd_rate_is_rejected_without_saving() {
        let mut service = mock_service();
        existing_chef(&mut service);
        service.chef_repository.expect_update_chef().never();

        let result = service
            .update_my_chef_profile(identity(Role::Chef), rate_update(i64::MAX))
            .await;

        assert!(matches!(result, Err(CoreError::Invalid(_))));
    }

    #[tokio::test]
    async fn failed_profile_creation_keeps_the_application_pending() {
        let mut service = mock_service();
        let application = pending_application(Some(Uuid::new_v4()));
        let id = application.id;
        service
            .chef_application_repository
            .expect_get_by_id()
            .returning(move |_| {
                let application = application.clone();
                Box::pin(async move { Ok(Some(application)) })
            });
        no_existing_profile(&mut service);
        service
            .chef_repository
            .expect_create_chef()
            .returning(|_| Box::pin(async { Err(CoreError::InternalServerError) }));
        service
            .chef_application_repository
            .expect_update_application()
            .never();

        let result = service
            .approve_application(
                identity(Role::Admin),
                ApproveApplicationInput {
                    application_id: id,
                    hourly_rate: None,
                },
            )
            .await;

        assert_eq!(result, Err(CoreError::InternalServerError));
    }

    #[tokio::test]
    async fn applicant_with_a_profile_is_not_approved_twice() {
        let mut service = mock_service();
        let application = pending_application(Some(Uuid::new_v4()));
        let id = application.id;
        service
            .chef_application_repository
            .expect_get_by_id()
            .returning(move |_| {
                let application = application.clone();
                Box::pin(async move { Ok(Some(application)) })
            });
        existing_chef(&mut service);
        service.chef_repository.expect_create_chef().never();
        service
            .chef_application_repository
            .expect_update_application()
            .never();

        let result = service
            .approve_application(
                identity(Role::Admin),
                ApproveApplicationInput {
                    application_id: id,
                    hourly_rate: Some(2000),
                },
            )
            .await;

        assert!(matches!(result, Err(CoreError::Invalid(_))));
    }

    #[tokio::test]
    async fn failed_auto_approval_still_records_the_application() {
        let mut service = mock_service();
        settings(&mut service, true);
        persist_applications(&mut service);
        accept_notifications(&mut service);
        no_existing_profile(&mut service);
        service
            .chef_repository
            .expect_create_chef()
            .returning(|_| Box::pin(async { Err(CoreError::InternalServerError) }));

        let application = service
            .apply(Some(identity(Role::User)), apply_input())
            .await
            .unwrap();

        assert_eq!(application.status, ApplicationStatus::Pending);
    }
}
