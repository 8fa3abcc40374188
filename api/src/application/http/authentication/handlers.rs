pub mod get_identity;
pub mod sign_in;
pub mod sign_up;
