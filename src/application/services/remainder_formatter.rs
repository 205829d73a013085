use chrono::{
    DateTime, Datelike, Duration, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone,
};

use super::target_year::resolve_target_year;
use crate::domain::{DateSpec, TimeBreakdown, TimeUnit};

// Keeps every target and its distance to now inside chrono's range
const MIN_YEAR: i64 = -200_000;
const MAX_YEAR: i64 = 200_000;

/// Countdown report for `date` as seen from the local wall clock
pub fn time_until(date: DateSpec, label: Option<&str>) -> String {
    time_until_at(date, label, Local::now().naive_local())
}

/// Countdown report for `date` as seen from `now`. A missing year resolves
/// to the next occurrence of the day and month.
pub fn time_until_at(date: DateSpec, label: Option<&str>, now: NaiveDateTime) -> String {
    let year = date
        .year
        .unwrap_or_else(|| resolve_target_year(date.day, date.month, now.date()));

    render(date.day, date.month, year, label, now)
}

/// Renders the report for a fully resolved target.
///
/// Without a label the date itself, as `DD.MM.YYYY` in backticks, is used.
pub fn render(day: i64, month: i64, year: i64, label: Option<&str>, now: NaiveDateTime) -> String {
    let breakdown = compute_breakdown(target_midnight(day, month, year), now);

    let date_str = format!("{:02}.{:02}.{}", day, month, year);
    let label = match label {
        Some(text) => text.to_string(),
        None => format!("`{}`", date_str),
    };

    let header = if breakdown.is_past {
        format!("{} наступило", label)
    } else {
        format!("До {} осталось", label)
    };

    let discrete = [
        (breakdown.weeks, TimeUnit::Weeks),
        (breakdown.days, TimeUnit::Days),
        (breakdown.hours, TimeUnit::Hours),
        (breakdown.minutes, TimeUnit::Minutes),
        (breakdown.seconds, TimeUnit::Seconds),
    ]
    .iter()
    .map(|(n, unit)| format!("`{}` {}", n, unit.forms().select(*n as i64)))
    .collect::<Vec<_>>()
    .join("\n");

    let int_seconds = breakdown.total_seconds.floor() as u64;
    let totals = TimeUnit::ALL
        .iter()
        .map(|unit| {
            let shown = match unit {
                TimeUnit::Seconds => int_seconds.to_string(),
                _ => format_total(breakdown.total_seconds / unit.seconds() as f64, int_seconds),
            };
            // the plural agrees with the whole part of what is displayed
            let whole = shown.parse::<f64>().map(|v| v.floor() as i64).unwrap_or(0);
            format!("`{}` {}", shown, unit.forms().select(whole))
        })
        .collect::<Vec<_>>()
        .join("\n");

    let output = format!("{}\n\n{}\n\n{}", header, discrete, totals);

    if breakdown.is_past {
        return output + "\n\nназад";
    }

    output
}

/// Local midnight of the given date. Out-of-range months and days roll over
/// into neighbouring months and years instead of failing.
pub fn target_midnight(day: i64, month: i64, year: i64) -> NaiveDateTime {
    let month_index = month.saturating_sub(1);
    let year = year
        .clamp(MIN_YEAR, MAX_YEAR)
        .saturating_add(month_index.div_euclid(12))
        .clamp(MIN_YEAR, MAX_YEAR);
    let month = month_index.rem_euclid(12) + 1;

    let first_of_month = NaiveDate::from_ymd_opt(year as i32, month as u32, 1).unwrap_or_default();

    let offset = day.saturating_sub(1);
    let date = Duration::try_days(offset)
        .and_then(|delta| first_of_month.checked_add_signed(delta))
        .unwrap_or(if offset < 0 { NaiveDate::MIN } else { NaiveDate::MAX });

    date.and_time(NaiveTime::default())
}

/// Signed distance from `target` to `now`, both read as local wall-clock
/// times, so a DST shift in between counts. Reaching the target exactly
/// already counts as past.
pub fn compute_breakdown(target: NaiveDateTime, now: NaiveDateTime) -> TimeBreakdown {
    let elapsed = match (local_instant(target), local_instant(now)) {
        (Some(target), Some(now)) => now.signed_duration_since(target),
        // outside what the local zone can map; fall back to wall-clock arithmetic
        _ => now.signed_duration_since(target),
    };

    let is_past = elapsed >= Duration::zero();
    let total_ms = elapsed.num_milliseconds().unsigned_abs();

    decompose(total_ms as f64 / 1000.0, is_past)
}

/// Earliest instant showing `wall` on the local clock. A time skipped by a
/// DST jump has none, and the zone is only consulted for years 1 to 9999.
fn local_instant(wall: NaiveDateTime) -> Option<DateTime<Local>> {
    if !(1..=9999).contains(&wall.year()) {
        return None;
    }

    Local.from_local_datetime(&wall).earliest()
}

/// Splits a non-negative number of seconds into whole weeks, days within the
/// week and hours/minutes/seconds within the day.
pub fn decompose(total_seconds: f64, is_past: bool) -> TimeBreakdown {
    let total_seconds = total_seconds.max(0.0);

    let day = TimeUnit::Days.seconds() as f64;
    let hour = TimeUnit::Hours.seconds() as f64;
    let minute = TimeUnit::Minutes.seconds() as f64;

    let total_days = (total_seconds / day).floor();
    let in_day = total_seconds % day;

    TimeBreakdown {
        is_past,
        weeks: (total_days / 7.0).floor() as u64,
        days: (total_days % 7.0) as u64,
        hours: (in_day / hour).floor() as u64,
        minutes: ((in_day % hour) / minute).floor() as u64,
        seconds: (in_day % minute).floor() as u64,
        total_seconds,
    }
}

/// Formats a continuous total with as many significant figures as
/// `int_seconds` has digits, dropping a zero fraction.
pub fn format_total(value: f64, int_seconds: u64) -> String {
    if int_seconds == 0 {
        return (value.floor() as u64).to_string();
    }

    let significant = int_seconds.to_string().len();
    strip_trailing_zeros(to_precision(value, significant))
}

/// Positional rendering of `value` rounded to `significant` figures, halves
/// rounding away from zero
fn to_precision(value: f64, significant: usize) -> String {
    let significant = significant.max(1);
    let (mut digits, mut exponent) = exact_digits(value);

    if digits.len() > significant {
        let round_up = digits[significant] >= b'5';
        digits.truncate(significant);

        if round_up && increment(&mut digits) {
            // 9.99 -> 10.0: one more integer digit, same figure count
            digits.insert(0, b'1');
            digits.truncate(significant);
            exponent += 1;
        }
    }
    digits.resize(significant, b'0');

    let digits = String::from_utf8_lossy(&digits);
    if exponent < 0 {
        return format!("0.{}{}", "0".repeat((-exponent - 1) as usize), digits);
    }

    let int_len = exponent as usize + 1;
    if int_len >= digits.len() {
        format!("{}{}", digits, "0".repeat(int_len - digits.len()))
    } else {
        format!("{}.{}", &digits[..int_len], &digits[int_len..])
    }
}

/// Every significant digit of `value` and its decimal exponent. The
/// expansion of an `f64` always terminates within `EXACT_DIGITS` figures.
fn exact_digits(value: f64) -> (Vec<u8>, i64) {
    const EXACT_DIGITS: usize = 768;

    let scientific = format!("{:.*e}", EXACT_DIGITS, value.abs());
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let digits = mantissa.bytes().filter(u8::is_ascii_digit).collect();

    (digits, exponent.parse().unwrap_or(0))
}

/// Adds one to the last digit; returns whether the carry ran off the front
fn increment(digits: &mut [u8]) -> bool {
    for digit in digits.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            return false;
        }
    }
    true
}

fn strip_trailing_zeros(number: String) -> String {
    if !number.contains('.') {
        return number;
    }

    number.trim_end_matches('0').trim_end_matches('.').to_string()
}
