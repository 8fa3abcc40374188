use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    admin::{
        entities::{AdminOverview, AppSettings, Payout, Transaction},
        value_objects::{CreatePayoutInput, RecordTransactionInput},
    },
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
};

/// Repository for the money side of the marketplace: transactions and payouts
#[cfg_attr(test, mockall::automock)]
pub trait LedgerRepository: Send + Sync {
    fn list_transactions(&self) -> impl Future<Output = Result<Vec<Transaction>, CoreError>> + Send;

    fn create_transaction(
        &self,
        transaction: Transaction,
    ) -> impl Future<Output = Result<Transaction, CoreError>> + Send;

    fn list_payouts(&self) -> impl Future<Output = Result<Vec<Payout>, CoreError>> + Send;

    fn get_payout(&self, payout_id: Uuid)
    -> impl Future<Output = Result<Option<Payout>, CoreError>> + Send;

    fn create_payout(&self, payout: Payout) -> impl Future<Output = Result<Payout, CoreError>> + Send;

    fn update_payout(&self, payout: Payout) -> impl Future<Output = Result<Payout, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait SettingsRepository: Send + Sync {
    /// `None` until an admin saves the settings for the first time.
    fn get_settings(&self) -> impl Future<Output = Result<Option<AppSettings>, CoreError>> + Send;

    fn save_settings(
        &self,
        settings: AppSettings,
    ) -> impl Future<Output = Result<AppSettings, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait AdminService: Send + Sync {
    fn get_settings(&self) -> impl Future<Output = Result<AppSettings, CoreError>> + Send;

    fn update_settings(
        &self,
        identity: Identity,
        settings: AppSettings,
    ) -> impl Future<Output = Result<AppSettings, CoreError>> + Send;

    fn get_transactions(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<Vec<Transaction>, CoreError>> + Send;

    fn record_transaction(
        &self,
        identity: Identity,
        input: RecordTransactionInput,
    ) -> impl Future<Output = Result<Transaction, CoreError>> + Send;

    fn get_payouts(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<Vec<Payout>, CoreError>> + Send;

    fn create_payout(
        &self,
        identity: Identity,
        input: CreatePayoutInput,
    ) -> impl Future<Output = Result<Payout, CoreError>> + Send;

    fn release_payout(
        &self,
        identity: Identity,
        payout_id: Uuid,
    ) -> impl Future<Output = Result<Payout, CoreError>> + Send;

    fn get_overview(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<AdminOverview, CoreError>> + Send;
}
