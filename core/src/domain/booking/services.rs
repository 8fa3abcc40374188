use uuid::Uuid;

use crate::domain::{
    admin::ports::{LedgerRepository, SettingsRepository},
    authentication::{
        ports::{HasherRepository, TokenRepository},
        value_objects::Identity,
    },
    booking::{
        entities::{ChefBookingConfig, ChefBookingRequest, ChefStats},
        helpers::compute_chef_stats,
        policies::can_manage_booking,
        ports::{BookingRepository, BookingService},
        pricing::{BASE_HOURS, booking_total, commission},
        value_objects::{CreateBookingInput, UpdateBookingStatusInput},
    },
    chef::{
        entities::ChefProfile,
        ports::{ChefApplicationRepository, ChefRepository},
    },
    common::{entities::app_errors::CoreError, policies::ensure_policy, services::Service},
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
        entities::{Role, UserActivity},
        ports::UserRepository,
    },
};

/// Users whose booking view changes when `booking` does.
fn booking_owners(booking: &ChefBookingRequest, chef: Option<&ChefProfile>) -> Vec<Uuid> {
    let mut owners = vec![booking.user_id];
    if let Some(chef_user) = chef.and_then(|c| c.user_id)
        && chef_user != booking.user_id
    {
        owners.push(chef_user);
    }
    owners
}

impl<U, H, T, CH, CA, B, SL, P, SC, F, L, ST, LLM, N, HC> BookingService
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
    async fn create_booking(
        &self,
        identity: Identity,
        input: CreateBookingInput,
    ) -> Result<ChefBookingRequest, CoreError> {
        if input.guests < 1 {
            return Err(CoreError::Invalid("at least one guest is required".to_string()));
        }
        if input.date.trim().is_empty() {
            return Err(CoreError::Invalid("a date is required".to_string()));
        }

        let chef = self
            .chef_repository
            .get_by_id(input.chef_id)
            .await?
            .ok_or(CoreError::NotFound)?;
        if !chef.is_active() {
            return Err(CoreError::Invalid(
                "this chef is not accepting bookings".to_string(),
            ));
        }

        let settings = self.current_settings().await?;
        let total = booking_total(chef.hourly_rate, i64::from(input.guests))?;

        let booking = ChefBookingRequest::new(ChefBookingConfig {
            user_id: identity.id(),
            chef_id: chef.id,
            client_name: identity.name.clone(),
            client_email: Some(identity.email.clone()),
            chef_name: Some(chef.name.clone()),
            event_type: input.event_type,
            date: input.date,
            time: input.time,
            hours: BASE_HOURS as i32,
            guests: input.guests,
            meal_types: input.meal_types,
            location: input.location,
            total_payout: total,
            commission: Some(commission(total, settings.chef_commission)),
        });

        let booking = self.booking_repository.create_booking(booking).await?;
        self.user_repository
            .record_activity(
                identity.id(),
                UserActivity {
                    bookings: 1,
                    ..Default::default()
                },
            )
            .await?;

        tracing::info!(
            booking_id = %booking.id,
            chef_id = %chef.id,
            total = booking.total_payout,
            "booking created"
        );
        self.notify(ChangeEvent::owned(
            SyncTopic::Bookings,
            booking_owners(&booking, Some(&chef)),
        ));

        Ok(booking)
    }

    async fn get_bookings(&self, identity: Identity) -> Result<Vec<ChefBookingRequest>, CoreError> {
        match identity.role {
            Role::Admin => self.booking_repository.list_all().await,
            Role::Chef => match self.chef_repository.get_by_user_id(identity.id()).await? {
                Some(chef) => self.booking_repository.list_by_chef(chef.id).await,
                None => Ok(Vec::new()),
            },
            Role::User => self.booking_repository.list_by_user(identity.id()).await,
        }
    }

    async fn update_booking_status(
        &self,
        identity: Identity,
        input: UpdateBookingStatusInput,
    ) -> Result<ChefBookingRequest, CoreError> {
        let mut booking = self
            .booking_repository
            .get_by_id(input.booking_id)
            .await?
            .ok_or(CoreError::NotFound)?;
        let chef = self.chef_repository.get_by_id(booking.chef_id).await?;

        ensure_policy(
            can_manage_booking(&identity, &booking, chef.as_ref()),
            "you cannot change this booking",
        )?;

        if let Some(status) = input.status {
            booking.status = status;
        }
        if let Some(payment_status) = input.payment_status {
            booking.payment_status = Some(payment_status);
        }

        let booking = self.booking_repository.update_booking(booking).await?;

        tracing::info!(
            booking_id = %booking.id,
            status = booking.status.as_str(),
            "booking updated"
        );
        self.notify(ChangeEvent::owned(
            SyncTopic::Bookings,
            booking_owners(&booking, chef.as_ref()),
        ));

        Ok(booking)
    }

    async fn get_chef_stats(&self, identity: Identity) -> Result<ChefStats, CoreError> {
        let chef = self
            .chef_repository
            .get_by_user_id(identity.id())
            .await?
            .ok_or(CoreError::NotFound)?;

        let bookings = self.booking_repository.list_by_chef(chef.id).await?;
        let settings = self.current_settings().await?;

        Ok(compute_chef_stats(&bookings, settings.chef_commission))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        booking::entities::{BookingStatus, PaymentStatus},
        chef::entities::{ApplicationStatus, ChefApplication, ChefStatus},
        common::services::test_support::{
            MockService, accept_notifications, default_settings, mock_service,
        },
    };

    fn identity(role: Role) -> Identity {
        Identity {
            user_id: Uuid::new_v4(),
            email: "priya@example.com".to_string(),
            name: "Priya".to_string(),
            role,
        }
    }

    fn chef(hourly_rate: i64, user_id: Option<Uuid>) -> ChefProfile {
        ChefProfile::from_application(
            &ChefApplication {
                id: Uuid::new_v4(),
                user_id,
                first_name: "Arjun".to_string(),
                last_name: "Rao".to_string(),
                email: "arjun@example.com".to_string(),
                specialty: "Coastal".to_string(),
                years_experience: 10,
                status: ApplicationStatus::Approved,
                applied_date: "2026-01-01".to_string(),
                resume_data: None,
                resume_name: None,
            },
            hourly_rate,
        )
        .unwrap()
    }

    fn booking_input(chef_id: Uuid, guests: i32) -> CreateBookingInput {
        CreateBookingInput {
            chef_id,
            date: "2026-12-24".to_string(),
            time: Some("19:00".to_string()),
            guests,
            event_type: Some("Dinner party".to_string()),
            meal_types: vec!["Dinner".to_string()],
            location: Some("Pune".to_string()),
        }
    }

    fn chef_lookup(service: &mut MockService, profile: ChefProfile) {
        service.chef_repository.expect_get_by_id().returning(move |_| {
            let profile = profile.clone();
            Box::pin(async move { Ok(Some(profile)) })
        });
    }

    #[tokio::test]
    async fn booking_is_priced_from_the_chef_rate() {
        let mut service = mock_service();
        let profile = chef(2500, Some(Uuid::new_v4()));
        let chef_id = profile.id;
        let chef_user = profile.user_id;
        chef_lookup(&mut service, profile);
        default_settings(&mut service);
        service
            .booking_repository
            .expect_create_booking()
            .returning(|booking| Box::pin(async move { Ok(booking) }));
        service
            .user_repository
            .expect_record_activity()
            .withf(|_, activity| activity.bookings == 1)
            .returning(|_, _| Box::pin(async { Ok(()) }));
        service
            .change_notifier
            .expect_publish()
            .withf(move |event| {
                event.topic == SyncTopic::Bookings
                    && chef_user.is_some_and(|id| event.owners.contains(&id))
            })
            .times(1)
            .returning(|_| ());

        let client = identity(Role::User);
        let booking = service
            .create_booking(client.clone(), booking_input(chef_id, 4))
            .await
            .unwrap();

        assert_eq!(booking.total_payout, 11000);
        assert_eq!(booking.commission, Some(1100));
        assert_eq!(booking.hours, 4);
        assert_eq!(booking.status, BookingStatus::Pending);
        assert_eq!(booking.payment_status, Some(PaymentStatus::Pending));
        assert_eq!(booking.user_id, client.user_id);
        assert_eq!(booking.client_name, "Priya");
    }

    #[tokio::test]
    async fn suspended_chef_cannot_be_booked() {
        let mut service = mock_service();
        let mut profile = chef(1800, None);
        profile.status = ChefStatus::Suspended;
        let chef_id = profile.id;
        chef_lookup(&mut service, profile);

        let result = service
            .create_booking(identity(Role::User), booking_input(chef_id, 2))
            .await;

        assert!(matches!(result, Err(CoreError::Invalid(_))));
    }

    #[tokio::test]
    async fn stranger_cannot_update_a_booking() {
        let mut service = mock_service();
        let profile = chef(1800, Some(Uuid::new_v4()));
        let booking = ChefBookingRequest::new(ChefBookingConfig {
            user_id: Uuid::new_v4(),
            chef_id: profile.id,
            client_name: "Someone".to_string(),
            client_email: None,
            chef_name: None,
            event_type: None,
            date: "2026-12-24".to_string(),
            time: None,
            hours: 4,
            guests: 2,
            meal_types: vec![],
            location: None,
            total_payout: 7200,
            commission: Some(720),
        });
        let booking_id = booking.id;
        service
            .booking_repository
            .expect_get_by_id()
            .returning(move |_| {
                let booking = booking.clone();
                Box::pin(async move { Ok(Some(booking)) })
            });
        chef_lookup(&mut service, profile);
        service.booking_repository.expect_update_booking().never();

        let result = service
            .update_booking_status(
                identity(Role::User),
                UpdateBookingStatusInput {
                    booking_id,
                    status: Some(BookingStatus::Cancelled),
                    payment_status: None,
                },
            )
            .await;

        assert!(matches!(result, Err(CoreError::Forbidden(_))));
    }

    #[tokio::test]
    async fn chef_confirms_their_own_booking() {
        let mut service = mock_service();
        let chef_user = identity(Role::Chef);
        let profile = chef(1800, Some(chef_user.user_id));
        let booking = ChefBookingRequest::new(ChefBookingConfig {
            user_id: Uuid::new_v4(),
            chef_id: profile.id,
            client_name: "Someone".to_string(),
            client_email: None,
            chef_name: None,
            event_type: None,
            date: "2026-12-24".to_string(),
            time: None,
            hours: 4,
            guests: 2,
            meal_types: vec![],
            location: None,
            total_payout: 7200,
            commission: Some(720),
        });
        let booking_id = booking.id;
        service
            .booking_repository
            .expect_get_by_id()
            .returning(move |_| {
                let booking = booking.clone();
                Box::pin(async move { Ok(Some(booking)) })
            });
        chef_lookup(&mut service, profile);
        service
            .booking_repository
            .expect_update_booking()
            .returning(|booking| Box::pin(async move { Ok(booking) }));
        accept_notifications(&mut service);

        let updated = service
            .update_booking_status(
                chef_user,
                UpdateBookingStatusInput {
                    booking_id,
                    status: Some(BookingStatus::Confirmed),
                    payment_status: Some(PaymentStatus::Paid),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.status, BookingStatus::Confirmed);
        assert_eq!(updated.payment_status, Some(PaymentStatus::Paid));
    }

    #[tokio::test]
    async fn users_only_list_their_own_bookings() {
        let mut service = mock_service();
        let user = identity(Role::User);
        let user_id = user.user_id;
        service
            .booking_repository
            .expect_list_by_user()
            .withf(move |id| *id == user_id)
            .times(1)
            .returning(|_| Box::pin(async { Ok(vec![]) }));
        service.booking_repository.expect_list_all().never();

        assert_eq!(service.get_bookings(user).await, Ok(vec![]));
    }
}
