use chrono::NaiveDate;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const DEFAULT_TRIP_DAYS: u32 = 3;

/// Inclusive number of days between two `YYYY-MM-DD` dates, never below 1.
/// Unparsable input yields `DEFAULT_TRIP_DAYS` instead of an error.
pub fn trip_length_days(start: &str, end: &str) -> u32 {
    let (start, end) = match (
        NaiveDate::parse_from_str(start, DATE_FORMAT),
        NaiveDate::parse_from_str(end, DATE_FORMAT),
    ) {
        (Ok(start), Ok(end)) => (start, end),
        _ => return DEFAULT_TRIP_DAYS,
    };

    let days = (end - start).num_days() + 1;
    days.clamp(1, u32::MAX as i64) as u32
}
