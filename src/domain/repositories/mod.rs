pub mod birthday_repository;
pub mod custom_date_repository;

pub use birthday_repository::BirthdayRepository;
pub use custom_date_repository::CustomDateRepository;
