use chrono::{Datelike, NaiveDate};

/// Year of the next occurrence of `day`.`month`, counting from `today`.
///
/// A date equal to today stays in the current year.
pub fn resolve_target_year(day: i64, month: i64, today: NaiveDate) -> i64 {
    let current_year = today.year() as i64;
    let current_month = today.month() as i64;
    let current_day = today.day() as i64;

    if current_month > month || (current_month == month && current_day > day) {
        current_year + 1
    } else {
        current_year
    }
}
