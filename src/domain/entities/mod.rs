pub mod birthday;
pub mod custom_date;
pub mod date_spec;

pub use birthday::Birthday;
pub use custom_date::CustomDate;
pub use date_spec::{DateSpec, TimeBreakdown};
