pub mod create_booking;
pub mod get_bookings;
pub mod get_chef_stats;
pub mod update_booking_status;
