#[cfg(test)]
pub mod memory_countdown_repository;
pub mod sqlite_birthday_repository;
pub mod sqlite_custom_date_repository;

pub use sqlite_birthday_repository::SqliteBirthdayRepository;
pub use sqlite_custom_date_repository::SqliteCustomDateRepository;
