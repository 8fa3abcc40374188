use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    booking::{
        entities::{ChefBookingRequest, ChefStats},
        value_objects::{CreateBookingInput, UpdateBookingStatusInput},
    },
    common::entities::app_errors::CoreError,
};

#[cfg_attr(test, mockall::automock)]
pub trait BookingRepository: Send + Sync {
    fn create_booking(
        &self,
        booking: ChefBookingRequest,
    ) -> impl Future<Output = Result<ChefBookingRequest, CoreError>> + Send;

    fn get_by_id(
        &self,
        booking_id: Uuid,
    ) -> impl Future<Output = Result<Option<ChefBookingRequest>, CoreError>> + Send;

    fn list_all(&self) -> impl Future<Output = Result<Vec<ChefBookingRequest>, CoreError>> + Send;

    fn list_by_user(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Vec<ChefBookingRequest>, CoreError>> + Send;

    fn list_by_chef(
        &self,
        chef_id: Uuid,
    ) -> impl Future<Output = Result<Vec<ChefBookingRequest>, CoreError>> + Send;

    fn update_booking(
        &self,
        booking: ChefBookingRequest,
    ) -> impl Future<Output = Result<ChefBookingRequest, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait BookingService: Send + Sync {
    fn create_booking(
        &self,
        identity: Identity,
        input: CreateBookingInput,
    ) -> impl Future<Output = Result<ChefBookingRequest, CoreError>> + Send;

    /// Admins get every booking, chefs the ones addressed to them, users their own.
    fn get_bookings(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<Vec<ChefBookingRequest>, CoreError>> + Send;

    fn update_booking_status(
        &self,
        identity: Identity,
        input: UpdateBookingStatusInput,
    ) -> impl Future<Output = Result<ChefBookingRequest, CoreError>> + Send;

    fn get_chef_stats(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<ChefStats, CoreError>> + Send;
}
