pub mod create_payout;
pub mod get_feedback;
pub mod get_overview;
pub mod get_payouts;
pub mod get_settings;
pub mod get_transactions;
pub mod get_users;
pub mod record_transaction;
pub mod release_payout;
pub mod update_settings;
pub mod update_user;
