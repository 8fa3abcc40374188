pub mod apply_as_chef;
pub mod approve_application;
pub mod get_applications;
pub mod get_chef;
pub mod get_chefs;
pub mod get_my_chef_profile;
pub mod reject_application;
pub mod set_chef_status;
pub mod update_my_chef_profile;
