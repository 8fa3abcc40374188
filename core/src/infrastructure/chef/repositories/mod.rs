pub mod chef_application_repository;
pub mod chef_repository;
