pub mod ledger_repository;
pub mod settings_repository;
