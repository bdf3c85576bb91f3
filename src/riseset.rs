use log::{debug, trace};

use crate::angles::{acosd, cosd, hours_from_degrees, rev180, revolution, sind};
use crate::epoch::local_noon_epoch;
use crate::solar::{equatorial_position, sidereal_time_at_epoch};
use crate::types::{AltitudeThreshold, CalendarDate, CrossingResult, GeoCoordinate};

/// Apparent solar radius in degrees at one AU.
pub const SOLAR_RADIUS_AT_1AU: f64 = 0.2666;

/// Target altitude after the optional upper-limb correction.
pub(crate) fn effective_altitude(threshold: AltitudeThreshold, distance: f64) -> f64 {
    if threshold.upper_limb {
        threshold.altitude - SOLAR_RADIUS_AT_1AU / distance
    } else {
        threshold.altitude
    }
}

/// Cosine of the hour angle at which the Sun reaches `altitude`.
///
/// Values at or beyond +/-1 mean the threshold is never crossed.
pub(crate) fn cos_hour_angle(altitude: f64, latitude: f64, sin_decl: f64, cos_decl: f64) -> f64 {
    (sind(altitude) - sind(latitude) * sin_decl) / (cosd(latitude) * cos_decl)
}

/// Hour angle in degrees for a `cos_t` strictly inside (-1, 1). The clamp
/// only absorbs rounding overshoot such as 1.0000000002.
pub(crate) fn hour_angle_deg(cos_t: f64) -> f64 {
    acosd(cos_t.clamp(-1.0, 1.0))
}

/// UT of the Sun's meridian transit for the epoch `d` at `longitude`.
pub fn solar_south_time(d: f64, longitude: f64, right_ascension: f64) -> f64 {
    let sidereal = revolution(sidereal_time_at_epoch(d) + 180.0 + longitude);
    12.0 - hours_from_degrees(rev180(sidereal - right_ascension))
}

/// Times (hours UT) at which the Sun crosses `threshold` on `date`.
///
/// Rise and set are placed symmetrically around the solar-south time.
/// High-latitude dates where the threshold is never crossed yield
/// `AlwaysAbove` or `AlwaysBelow`; both are ordinary answers.
pub fn solve_crossing(
    date: CalendarDate,
    coordinate: GeoCoordinate,
    threshold: AltitudeThreshold,
) -> CrossingResult {
    let d = local_noon_epoch(date, coordinate.longitude);
    let pos = equatorial_position(d);
    let south = solar_south_time(d, coordinate.longitude, pos.right_ascension);

    let altitude = effective_altitude(threshold, pos.distance);
    let cos_t = cos_hour_angle(
        altitude,
        coordinate.latitude,
        sind(pos.declination),
        cosd(pos.declination),
    );
    trace!(
        "crossing d={d:.4} ra={:.4} decl={:.4} south={south:.4} cos_t={cos_t:.6}",
        pos.right_ascension,
        pos.declination
    );

    let result = if cos_t >= 1.0 {
        CrossingResult::AlwaysBelow {
            rise: south,
            set: south,
        }
    } else if cos_t <= -1.0 {
        CrossingResult::AlwaysAbove {
            rise: south - 12.0,
            set: south + 12.0,
        }
    } else {
        let t = hours_from_degrees(hour_angle_deg(cos_t));
        CrossingResult::Normal {
            rise: south - t,
            set: south + t,
        }
    };
    debug!(
        "{}-{:02}-{:02} lat={} lon={} alt={}: {:?}",
        date.year,
        date.month,
        date.day,
        coordinate.latitude,
        coordinate.longitude,
        threshold.altitude,
        result
    );
    result
}

pub fn sun_rise_set(date: CalendarDate, coordinate: GeoCoordinate) -> CrossingResult {
    solve_crossing(date, coordinate, AltitudeThreshold::RISE_SET)
}

pub fn civil_twilight(date: CalendarDate, coordinate: GeoCoordinate) -> CrossingResult {
    solve_crossing(date, coordinate, AltitudeThreshold::CIVIL)
}

pub fn nautical_twilight(date: CalendarDate, coordinate: GeoCoordinate) -> CrossingResult {
    solve_crossing(date, coordinate, AltitudeThreshold::NAUTICAL)
}

pub fn astronomical_twilight(date: CalendarDate, coordinate: GeoCoordinate) -> CrossingResult {
    solve_crossing(date, coordinate, AltitudeThreshold::ASTRONOMICAL)
}
