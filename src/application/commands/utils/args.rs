//! Maps the options a user filled in onto the request a command understands.
//! Option combinations that make no sense yield `None` and the caller answers
//! with a usage hint.

use crate::application::services::{BirthdayRequest, CustomDateRequest};
use crate::domain::DateSpec;
use crate::domain::entities::custom_date::MAX_NAME_LENGTH;

/// Either nothing (query) or both day and month (set)
pub fn parse_birthday_args(day: Option<i64>, month: Option<i64>) -> Option<BirthdayRequest> {
    match (day, month) {
        (None, None) => Some(BirthdayRequest::Query),
        (Some(day), Some(month)) if DateSpec::annual(day, month).is_valid() => {
            Some(BirthdayRequest::Set { day, month })
        }
        _ => None,
    }
}

/// Day and month are required, the year is optional
pub fn parse_date_args(day: Option<i64>, month: Option<i64>, year: Option<i64>) -> Option<DateSpec> {
    let date = DateSpec::new(day?, month?, year);
    date.is_valid().then_some(date)
}

/// Nothing lists, a name alone queries, a name with a date stores it
pub fn parse_custom_date_args(
    name: Option<String>,
    day: Option<i64>,
    month: Option<i64>,
    year: Option<i64>,
) -> Option<CustomDateRequest> {
    let name = match name.map(|n| n.trim().to_string()) {
        None => {
            return (day.is_none() && month.is_none() && year.is_none())
                .then_some(CustomDateRequest::List);
        }
        Some(n) if n.is_empty() || n.chars().count() > MAX_NAME_LENGTH => return None,
        Some(n) => n,
    };

    match (day, month, year) {
        (None, None, None) => Some(CustomDateRequest::Query { name }),
        (Some(day), Some(month), year) => {
            let date = DateSpec::new(day, month, year);
            date.is_valid()
                .then_some(CustomDateRequest::Upsert { name, date })
        }
        _ => None,
    }
}
