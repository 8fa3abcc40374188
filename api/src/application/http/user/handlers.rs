pub mod delete_account;
pub mod get_profile;
pub mod update_profile;
