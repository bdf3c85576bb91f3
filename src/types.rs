use chrono::{Datelike, NaiveDate};

/// Calendar date in the proleptic Gregorian calendar. Documented range is
/// 1801-2099; nothing checks it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl CalendarDate {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month(), date.day())
    }
}

/// Observer position in degrees, north and east positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoCoordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Solar altitude that defines an event, and whether it refers to the
/// upper limb (the apparent radius is then subtracted) or the centre.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AltitudeThreshold {
    pub altitude: f64,
    pub upper_limb: bool,
}

impl AltitudeThreshold {
    /// Ordinary sunrise/sunset: upper limb 35' below the horizon (refraction).
    pub const RISE_SET: Self = Self::new(-35.0 / 60.0, true);
    pub const CIVIL: Self = Self::new(-6.0, false);
    pub const NAUTICAL: Self = Self::new(-12.0, false);
    pub const ASTRONOMICAL: Self = Self::new(-18.0, false);

    pub const fn new(altitude: f64, upper_limb: bool) -> Self {
        Self {
            altitude,
            upper_limb,
        }
    }
}

/// Sun's ecliptic longitude (degrees, [0, 360)) and distance (AU).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarPosition {
    pub longitude: f64,
    pub distance: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquatorialPosition {
    pub right_ascension: f64,
    pub declination: f64,
    pub distance: f64,
}

/// Outcome of a rise/set query. All times are fractional hours UT.
///
/// Only `Normal` carries real crossing instants. The other two hold
/// placeholders derived from the solar-south time: `AlwaysAbove` spans
/// south-12h to south+12h, `AlwaysBelow` collapses both to south.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CrossingResult {
    Normal { rise: f64, set: f64 },
    AlwaysAbove { rise: f64, set: f64 },
    AlwaysBelow { rise: f64, set: f64 },
}

impl CrossingResult {
    pub fn rise(&self) -> f64 {
        match *self {
            Self::Normal { rise, .. }
            | Self::AlwaysAbove { rise, .. }
            | Self::AlwaysBelow { rise, .. } => rise,
        }
    }

    pub fn set(&self) -> f64 {
        match *self {
            Self::Normal { set, .. }
            | Self::AlwaysAbove { set, .. }
            | Self::AlwaysBelow { set, .. } => set,
        }
    }

    /// Time the Sun crosses the meridian, valid for every variant.
    pub fn solar_noon(&self) -> f64 {
        (self.rise() + self.set()) / 2.0
    }

    pub fn is_normal(&self) -> bool {
        matches!(self, Self::Normal { .. })
    }

    /// Rise and set times, only when the threshold is actually crossed.
    pub fn crossing_times(&self) -> Option<(f64, f64)> {
        match *self {
            Self::Normal { rise, set } => Some((rise, set)),
            Self::AlwaysAbove { .. } | Self::AlwaysBelow { .. } => None,
        }
    }
}
