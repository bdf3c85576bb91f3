use log::trace;

use crate::angles::{hours_from_degrees, sind};
use crate::epoch::local_noon_epoch;
use crate::riseset::{cos_hour_angle, effective_altitude, hour_angle_deg};
use crate::solar::{obliquity, sun_position};
use crate::types::{AltitudeThreshold, CalendarDate, GeoCoordinate};

/// Hours the Sun spends above `threshold` on `date`, in [0, 24].
///
/// Needs only the arc length, so declination comes straight from the
/// ecliptic longitude and no sidereal time is computed. Longitude only
/// shifts the epoch by a fraction of a day.
pub fn solve_duration(
    date: CalendarDate,
    coordinate: GeoCoordinate,
    threshold: AltitudeThreshold,
) -> f64 {
    let d = local_noon_epoch(date, coordinate.longitude);
    let obl = obliquity(d);
    let sun = sun_position(d);

    let sin_decl = sind(obl) * sind(sun.longitude);
    let cos_decl = (1.0 - sin_decl * sin_decl).sqrt();

    let altitude = effective_altitude(threshold, sun.distance);
    let cos_t = cos_hour_angle(altitude, coordinate.latitude, sin_decl, cos_decl);
    trace!("duration d={d:.4} sin_decl={sin_decl:.6} cos_t={cos_t:.6}");

    if cos_t >= 1.0 {
        0.0
    } else if cos_t <= -1.0 {
        24.0
    } else {
        2.0 * hours_from_degrees(hour_angle_deg(cos_t))
    }
}

/// Length of one twilight band (dawn or dusk) bounded by `threshold` and
/// ordinary sunrise/sunset.
pub fn twilight_duration(
    date: CalendarDate,
    coordinate: GeoCoordinate,
    threshold: AltitudeThreshold,
) -> f64 {
    let outer = solve_duration(date, coordinate, threshold);
    let inner = solve_duration(date, coordinate, AltitudeThreshold::RISE_SET);
    (outer - inner) / 2.0
}

pub fn day_length(date: CalendarDate, coordinate: GeoCoordinate) -> f64 {
    solve_duration(date, coordinate, AltitudeThreshold::RISE_SET)
}

pub fn day_civil_twilight_length(date: CalendarDate, coordinate: GeoCoordinate) -> f64 {
    solve_duration(date, coordinate, AltitudeThreshold::CIVIL)
}

pub fn day_nautical_twilight_length(date: CalendarDate, coordinate: GeoCoordinate) -> f64 {
    solve_duration(date, coordinate, AltitudeThreshold::NAUTICAL)
}

pub fn day_astronomical_twilight_length(date: CalendarDate, coordinate: GeoCoordinate) -> f64 {
    solve_duration(date, coordinate, AltitudeThreshold::ASTRONOMICAL)
}
