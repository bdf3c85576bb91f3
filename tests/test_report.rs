use chrono::{FixedOffset, NaiveDate, NaiveTime};
use chrono_tz::{America::New_York, Asia::Tokyo};
use sunriset::config::*;
use sunriset::error::SunstatError;
use sunriset::report::*;
use sunriset::types::*;

fn edt() -> FixedOffset {
    FixedOffset::west_opt(4 * 3600).unwrap()
}

fn utc() -> FixedOffset {
    FixedOffset::east_opt(0).unwrap()
}

// ── Local clock ──

fn hm(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}

#[test]
fn test_local_clock_applies_offset() {
    assert_eq!(local_clock(9.4157, edt()), hm(5, 24));
    assert_eq!(local_clock(12.0, FixedOffset::east_opt(5 * 3600 + 1800).unwrap()), hm(17, 30));
}

#[test]
fn test_local_clock_wraps_day() {
    assert_eq!(local_clock(24.506, edt()), hm(20, 30));
    assert_eq!(local_clock(-0.5, utc()), hm(23, 30));
    assert_eq!(local_clock(23.99, FixedOffset::east_opt(3600).unwrap()), hm(0, 59));
    assert_eq!(local_clock(35.9, FixedOffset::east_opt(14 * 3600).unwrap()), hm(1, 54));
}

#[test]
fn test_local_clock_truncates_to_minute() {
    let t = local_clock(5.0 + 4.99 / 60.0, utc());
    assert_eq!(t, hm(5, 4));
    assert_eq!(t.format("%H:%M").to_string(), "05:04");
}

// ── Duration formatting ──

#[test]
fn test_format_hms() {
    assert_eq!(format_hms(15.5), "15h30m00s");
    assert_eq!(format_hms(0.0), "00h00m00s");
    assert_eq!(format_hms(24.0), "24h00m00s");
    assert_eq!(format_hms(1.0 + 2.0 / 60.0 + 3.5 / 3600.0), "01h02m03s");
}

// ── DayReport ──

#[test]
fn test_new_york_report() {
    let report = DayReport::compute(CalendarDate::new(2000, 6, 21), GeoCoordinate::new(40.6611, -73.9439));
    let expected = concat!(
        "                       Sunrise     Sunset\n",
        "                       05:24 EDT   20:30 EDT\n",
        "       Civil twilight  04:51 EDT   21:03 EDT\n",
        "    Nautical twilight  04:09 EDT   21:46 EDT\n",
        "Astronomical twilight  03:18 EDT   22:36 EDT\n",
        "\n",
        "Hours of daylight, incl. civil twilight: 16h12m02s.\n",
        "The Sun is overhead (due south/north) at 12:57 EDT.\n",
    );
    assert_eq!(report.render(edt(), "EDT"), expected);
}

#[test]
fn test_white_night_rows() {
    let report = DayReport::compute(CalendarDate::new(2000, 6, 21), GeoCoordinate::new(60.0, 0.0));
    assert!(report.rise_set.is_normal());
    let text = report.render(utc(), "UTC");
    assert!(text.contains("    Nautical twilight  ---         (none)\n"), "{}", text);
    assert!(text.contains("Astronomical twilight  ---         (none)\n"), "{}", text);
    assert!(text.contains("Hours of daylight, incl. civil twilight: 22h25m22s.\n"), "{}", text);
}

#[test]
fn test_polar_night_rows() {
    let report = DayReport::compute(CalendarDate::new(2000, 12, 21), GeoCoordinate::new(78.0, 15.0));
    assert_eq!(report.civil_day_length, 0.0);
    let text = report.render(utc(), "UTC");
    assert!(text.contains("\n                       (none)      ---\n"), "{}", text);
    assert!(text.contains("       Civil twilight  (none)      ---\n"), "{}", text);
    assert!(report.nautical.is_normal());
}

// ── ReportConfig ──

#[test]
fn test_config_rejects_out_of_range_coordinates() {
    let date = CalendarDate::new(2000, 6, 21);
    assert_eq!(
        ReportConfig::utc(date, GeoCoordinate::new(91.0, 0.0)),
        Err(SunstatError::LatitudeOutOfRange(91.0))
    );
    assert_eq!(
        ReportConfig::utc(date, GeoCoordinate::new(0.0, -180.5)),
        Err(SunstatError::LongitudeOutOfRange(-180.5))
    );
    assert!(ReportConfig::utc(date, GeoCoordinate::new(f64::NAN, 0.0)).is_err());
}

#[test]
fn test_config_report_matches_day_report() {
    let date = CalendarDate::new(2000, 6, 21);
    let coordinate = GeoCoordinate::new(40.6611, -73.9439);
    let config = ReportConfig::new(date, coordinate, edt(), "EDT").unwrap();
    assert_eq!(config.report(), DayReport::compute(date, coordinate).render(edt(), "EDT"));

    let config = ReportConfig::utc(date, coordinate).unwrap();
    assert_eq!(config.zone_label, "UTC");
    assert!(config.report().contains("09:24 UTC"));
}

#[test]
fn test_parse_date() {
    let date = parse_date("2000-06-21").unwrap();
    assert_eq!(CalendarDate::from(date), CalendarDate::new(2000, 6, 21));
    assert_eq!(parse_date("2000-02-30"), Err(SunstatError::InvalidDate("2000-02-30".into())));
    assert!(parse_date("21/06/2000").is_err());
}

#[test]
fn test_parse_offset() {
    assert_eq!(parse_offset("-04:00").unwrap(), edt());
    assert_eq!(parse_offset("+05:30").unwrap().local_minus_utc(), 19800);
    assert_eq!(parse_offset("+09").unwrap().local_minus_utc(), 32400);
    assert_eq!(parse_offset("-00:30").unwrap().local_minus_utc(), -1800);
    assert_eq!(parse_offset("04:00"), Err(SunstatError::InvalidOffset("04:00".into())));
    assert!(parse_offset("+04:75").is_err());
    assert!(parse_offset("+30:00").is_err());
}

#[test]
fn test_parse_offset_rejects_oversized_hours() {
    assert_eq!(
        parse_offset("+999999:00"),
        Err(SunstatError::InvalidOffset("+999999:00".into()))
    );
    assert!(parse_offset("-2147483648").is_err());
    assert!(parse_offset("+24:00").is_err());
    assert_eq!(parse_offset("+23:59").unwrap().local_minus_utc(), 23 * 3600 + 59 * 60);
}

#[test]
fn test_parse_offset_rejects_inner_sign() {
    assert_eq!(
        parse_offset("+-05:00"),
        Err(SunstatError::InvalidOffset("+-05:00".into()))
    );
    assert!(parse_offset("-+05:00").is_err());
    assert!(parse_offset("+05:-30").is_err());
    assert!(parse_offset("+").is_err());
    assert!(parse_offset("+05:").is_err());
}

// ── Zone lookup ──

#[test]
fn test_zone_at_noon_uses_abbreviation() {
    let summer = NaiveDate::from_ymd_opt(2000, 6, 21).unwrap();
    let winter = NaiveDate::from_ymd_opt(2000, 12, 21).unwrap();
    assert_eq!(zone_at_noon(New_York, summer), Some((edt(), "EDT".to_string())));
    assert_eq!(
        zone_at_noon(New_York, winter),
        Some((FixedOffset::west_opt(5 * 3600).unwrap(), "EST".to_string()))
    );
    assert_eq!(
        zone_at_noon(Tokyo, summer),
        Some((FixedOffset::east_opt(9 * 3600).unwrap(), "JST".to_string()))
    );
}

#[test]
fn test_error_messages() {
    assert_eq!(
        SunstatError::LatitudeOutOfRange(91.0).to_string(),
        "latitude 91 is outside [-90, 90]"
    );
    assert_eq!(
        SunstatError::InvalidDate("x".into()).to_string(),
        "invalid date `x`, expected YYYY-MM-DD"
    );
}
