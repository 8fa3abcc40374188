pub mod booking_repository;
