pub mod countdown_service;
pub mod remainder_formatter;
pub mod target_year;

pub use countdown_service::{BirthdayRequest, CountdownService, CustomDateRequest};
