use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Select};
use tracing::error;
use uuid::Uuid;

use crate::domain::{
    booking::{entities::ChefBookingRequest, ports::BookingRepository},
    common::entities::app_errors::CoreError,
};
use crate::entity::bookings::{
    ActiveModel as BookingActiveModel, Column as BookingColumn, Entity as BookingEntity,
};

#[derive(Debug, Clone)]
pub struct PostgresBookingRepository {
    pub db: DatabaseConnection,
}

impl PostgresBookingRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn fetch(&self, query: Select<BookingEntity>) -> Result<Vec<ChefBookingRequest>, CoreError> {
        let bookings = query
            .order_by_desc(BookingColumn::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch bookings: {}", e);
                CoreError::InternalServerError
            })?
            .iter()
            .map(ChefBookingRequest::from)
            .collect::<Vec<ChefBookingRequest>>();

        Ok(bookings)
    }
}

impl BookingRepository for PostgresBookingRepository {
    async fn create_booking(
        &self,
        booking: ChefBookingRequest,
    ) -> Result<ChefBookingRequest, CoreError> {
        let created = BookingEntity::insert(BookingActiveModel::try_from(&booking)?)
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create booking: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(created.into())
    }

    async fn get_by_id(&self, booking_id: Uuid) -> Result<Option<ChefBookingRequest>, CoreError> {
        let booking = BookingEntity::find_by_id(booking_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get booking by id: {}", e);
                CoreError::InternalServerError
            })?
            .map(ChefBookingRequest::from);

        Ok(booking)
    }

    async fn list_all(&self) -> Result<Vec<ChefBookingRequest>, CoreError> {
        self.fetch(BookingEntity::find()).await
    }

    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<ChefBookingRequest>, CoreError> {
        self.fetch(BookingEntity::find().filter(BookingColumn::UserId.eq(user_id)))
            .await
    }

    async fn list_by_chef(&self, chef_id: Uuid) -> Result<Vec<ChefBookingRequest>, CoreError> {
        self.fetch(BookingEntity::find().filter(BookingColumn::ChefId.eq(chef_id)))
            .await
    }

    async fn update_booking(
        &self,
        booking: ChefBookingRequest,
    ) -> Result<ChefBookingRequest, CoreError> {
        let updated = BookingEntity::update(BookingActiveModel::try_from(&booking)?)
            .filter(BookingColumn::Id.eq(booking.id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to update booking: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(updated.into())
    }
}
