pub mod entities;
pub mod repositories;
pub mod value_objects;

pub use entities::{Birthday, CustomDate, DateSpec, TimeBreakdown};
pub use repositories::{BirthdayRepository, CustomDateRepository};
pub use value_objects::{Holiday, TimeUnit};
