use chrono::{Duration, FixedOffset, NaiveTime};

use crate::daylength::day_civil_twilight_length;
use crate::riseset::{astronomical_twilight, civil_twilight, nautical_twilight, sun_rise_set};
use crate::types::{CalendarDate, CrossingResult, GeoCoordinate};

/// Convert fractional hours UT to local clock time at `offset`, truncated
/// to the minute and wrapped into the 24h day (a sunset at 24.5h UT in
/// UTC-4 reads 20:30).
pub fn local_clock(ut_hours: f64, offset: FixedOffset) -> NaiveTime {
    let ut_minutes = (ut_hours * 60.0).floor() as i64;
    let offset_minutes = i64::from(offset.local_minus_utc()) / 60;
    NaiveTime::MIN + Duration::minutes(ut_minutes + offset_minutes)
}

fn clock(ut_hours: f64, offset: FixedOffset) -> String {
    local_clock(ut_hours, offset).format("%H:%M").to_string()
}

/// Format a duration in hours as `HHhMMmSSs`.
pub fn format_hms(hours: f64) -> String {
    let h = hours.floor();
    let frac_minutes = 60.0 * (hours - h);
    let m = frac_minutes.floor();
    let s = (60.0 * (frac_minutes - m)).floor();
    format!("{:02}h{:02}m{:02}s", h as i64, m as i64, s as i64)
}

/// All crossings and the civil-inclusive day length for one date and place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayReport {
    pub rise_set: CrossingResult,
    pub civil: CrossingResult,
    pub nautical: CrossingResult,
    pub astronomical: CrossingResult,
    pub civil_day_length: f64,
}

impl DayReport {
    pub fn compute(date: CalendarDate, coordinate: GeoCoordinate) -> Self {
        Self {
            rise_set: sun_rise_set(date, coordinate),
            civil: civil_twilight(date, coordinate),
            nautical: nautical_twilight(date, coordinate),
            astronomical: astronomical_twilight(date, coordinate),
            civil_day_length: day_civil_twilight_length(date, coordinate),
        }
    }

    /// Render the table shown by `sunstat`, with times at `offset`.
    pub fn render(&self, offset: FixedOffset, zone: &str) -> String {
        let mut out = String::new();
        out.push_str(&format!("{:>21}  Sunrise     Sunset\n", ""));
        out.push_str(&render_row("", &self.rise_set, offset, zone));
        out.push_str(&render_row("Civil twilight", &self.civil, offset, zone));
        out.push_str(&render_row("Nautical twilight", &self.nautical, offset, zone));
        out.push_str(&render_row("Astronomical twilight", &self.astronomical, offset, zone));
        out.push('\n');
        out.push_str(&format!(
            "Hours of daylight, incl. civil twilight: {}.\n",
            format_hms(self.civil_day_length)
        ));
        out.push_str(&format!(
            "The Sun is overhead (due south/north) at {} {}.\n",
            clock(self.rise_set.solar_noon(), offset),
            zone
        ));
        out
    }
}

fn render_row(label: &str, result: &CrossingResult, offset: FixedOffset, zone: &str) -> String {
    match result {
        CrossingResult::Normal { rise, set } => format!(
            "{label:>21}  {} {zone}   {} {zone}\n",
            clock(*rise, offset),
            clock(*set, offset)
        ),
        CrossingResult::AlwaysAbove { .. } => format!("{label:>21}  ---         (none)\n"),
        CrossingResult::AlwaysBelow { .. } => format!("{label:>21}  (none)      ---\n"),
    }
}
