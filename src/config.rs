use chrono::{FixedOffset, NaiveDate, Offset, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::SunstatError;
use crate::report::DayReport;
use crate::types::{CalendarDate, GeoCoordinate};

/// Everything the report needs, resolved up front so the solvers never
/// look at process clock or zone state.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportConfig {
    pub date: CalendarDate,
    pub coordinate: GeoCoordinate,
    pub offset: FixedOffset,
    pub zone_label: String,
}

impl ReportConfig {
    pub fn new(
        date: CalendarDate,
        coordinate: GeoCoordinate,
        offset: FixedOffset,
        zone_label: impl Into<String>,
    ) -> Result<Self, SunstatError> {
        if !(-90.0..=90.0).contains(&coordinate.latitude) {
            return Err(SunstatError::LatitudeOutOfRange(coordinate.latitude));
        }
        if !(-180.0..=180.0).contains(&coordinate.longitude) {
            return Err(SunstatError::LongitudeOutOfRange(coordinate.longitude));
        }
        Ok(Self {
            date,
            coordinate,
            offset,
            zone_label: zone_label.into(),
        })
    }

    pub fn utc(date: CalendarDate, coordinate: GeoCoordinate) -> Result<Self, SunstatError> {
        Self::new(date, coordinate, Utc.fix(), "UTC")
    }

    pub fn report(&self) -> String {
        DayReport::compute(self.date, self.coordinate).render(self.offset, &self.zone_label)
    }
}

/// Offset and abbreviation (e.g. `EDT`) of `tz` at local noon on `date`.
pub fn zone_at_noon(tz: Tz, date: NaiveDate) -> Option<(FixedOffset, String)> {
    let noon = tz.from_local_datetime(&date.and_hms_opt(12, 0, 0)?).earliest()?;
    Some((noon.offset().fix(), noon.offset().to_string()))
}

pub fn parse_date(s: &str) -> Result<NaiveDate, SunstatError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| SunstatError::InvalidDate(s.to_string()))
}

/// Parse `+HH:MM`, `-HH:MM` or `+HH` into a fixed offset. Hours run 0-23.
pub fn parse_offset(s: &str) -> Result<FixedOffset, SunstatError> {
    let invalid = || SunstatError::InvalidOffset(s.to_string());
    let (sign, rest) = match s.chars().next() {
        Some('+') => (1, &s[1..]),
        Some('-') => (-1, &s[1..]),
        _ => return Err(invalid()),
    };
    let (hours, minutes) = rest.split_once(':').unwrap_or((rest, "00"));
    let hours = parse_field(hours, 24).ok_or_else(invalid)?;
    let minutes = parse_field(minutes, 60).ok_or_else(invalid)?;
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60)).ok_or_else(invalid)
}

/// One or two ASCII digits below `limit`.
fn parse_field(field: &str, limit: i32) -> Option<i32> {
    if field.is_empty() || field.len() > 2 || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok().filter(|v| *v < limit)
}
