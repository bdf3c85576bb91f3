pub mod angles;
pub mod config;
pub mod daylength;
pub mod epoch;
pub mod error;
pub mod report;
pub mod riseset;
pub mod solar;
pub mod types;

pub use angles::{
    acosd, atan2d, cosd, deg_to_rad, hours_from_degrees, rad_to_deg, rev180, revolution, sind,
    tand, DEGREES_PER_HOUR,
};

pub use config::{parse_date, parse_offset, zone_at_noon, ReportConfig};

pub use daylength::{
    day_astronomical_twilight_length, day_civil_twilight_length, day_length,
    day_nautical_twilight_length, solve_duration, twilight_duration,
};

pub use epoch::{days_since_2000, local_noon_epoch};

pub use error::SunstatError;

pub use report::{format_hms, local_clock, DayReport};

pub use riseset::{
    astronomical_twilight, civil_twilight, nautical_twilight, solar_south_time, solve_crossing,
    sun_rise_set, SOLAR_RADIUS_AT_1AU,
};

pub use solar::{equatorial_position, obliquity, sidereal_time_at_epoch, sun_position};

pub use types::{
    AltitudeThreshold, CalendarDate, CrossingResult, EquatorialPosition, GeoCoordinate,
    SolarPosition,
};
