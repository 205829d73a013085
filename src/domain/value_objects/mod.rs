pub mod holiday;
pub mod plural_forms;
pub mod time_unit;

pub use holiday::Holiday;
pub use time_unit::TimeUnit;
