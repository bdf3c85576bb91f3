//! Low-precision solar ephemeris.
//!
//! Mean orbital elements are linear in the epoch (days since 2000 Jan 0.0)
//! and the eccentric anomaly takes a single first-order correction, which
//! keeps rise/set times within about a minute for 1801-2099.

use crate::angles::{atan2d, cosd, rad_to_deg, revolution, sind};
use crate::types::{EquatorialPosition, SolarPosition};

const MEAN_ANOMALY_AT_EPOCH: f64 = 356.0470;
const MEAN_ANOMALY_RATE: f64 = 0.985_600_258_5;
const PERIHELION_AT_EPOCH: f64 = 282.9404;
const PERIHELION_RATE: f64 = 4.709_35e-5;

pub fn mean_anomaly(d: f64) -> f64 {
    revolution(MEAN_ANOMALY_AT_EPOCH + MEAN_ANOMALY_RATE * d)
}

pub fn perihelion_longitude(d: f64) -> f64 {
    PERIHELION_AT_EPOCH + PERIHELION_RATE * d
}

pub fn eccentricity(d: f64) -> f64 {
    0.016709 - 1.151e-9 * d
}

/// Obliquity of the ecliptic in degrees.
pub fn obliquity(d: f64) -> f64 {
    23.4393 - 3.563e-7 * d
}

/// Sun's ecliptic longitude and distance. Ecliptic latitude is taken as zero.
pub fn sun_position(d: f64) -> SolarPosition {
    let m = mean_anomaly(d);
    let w = perihelion_longitude(d);
    let e = eccentricity(d);

    let ecc_anomaly = m + e * rad_to_deg(sind(m) * (1.0 + e * cosd(m)));
    let x = cosd(ecc_anomaly) - e;
    let y = (1.0 - e * e).sqrt() * sind(ecc_anomaly);

    let distance = x.hypot(y);
    let true_anomaly = atan2d(y, x);
    let mut longitude = true_anomaly + w;
    if longitude >= 360.0 {
        longitude -= 360.0;
    }
    SolarPosition {
        longitude,
        distance,
    }
}

pub fn equatorial_position(d: f64) -> EquatorialPosition {
    let SolarPosition {
        longitude,
        distance,
    } = sun_position(d);

    let x = distance * cosd(longitude);
    let y_ecl = distance * sind(longitude);

    let obl = obliquity(d);
    let z = y_ecl * sind(obl);
    let y = y_ecl * cosd(obl);

    EquatorialPosition {
        right_ascension: atan2d(y, x),
        declination: atan2d(z, x.hypot(y)),
        distance,
    }
}

/// GMST0 generalised to any epoch: Greenwich sidereal time minus UT, which
/// equals the Sun's mean longitude plus 180 degrees.
pub fn sidereal_time_at_epoch(d: f64) -> f64 {
    revolution(
        (180.0 + MEAN_ANOMALY_AT_EPOCH + PERIHELION_AT_EPOCH)
            + (MEAN_ANOMALY_RATE + PERIHELION_RATE) * d,
    )
}
