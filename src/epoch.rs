use crate::types::CalendarDate;

/// Days since 2000 January 0.0 UT at 0h UT of the given date.
///
/// Valid for 1801-2099; outside that range the result is still a
/// number but no longer tracks the Gregorian calendar.
pub fn days_since_2000(year: i32, month: u32, day: u32) -> f64 {
    let (y, m, d) = (year as i64, month as i64, day as i64);
    let days = 367 * y - (7 * (y + (m + 9) / 12)) / 4 + (275 * m) / 9 + d - 730_530;
    days as f64
}

/// Epoch at 12h local mean solar time for `date` at `longitude` (east positive).
pub fn local_noon_epoch(date: CalendarDate, longitude: f64) -> f64 {
    days_since_2000(date.year, date.month, date.day) + 0.5 - longitude / 360.0
}
