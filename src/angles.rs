pub const DEGREES_PER_HOUR: f64 = 15.0;

const INV360: f64 = 1.0 / 360.0;

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (std::f64::consts::PI / 180.0)
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / std::f64::consts::PI)
}

pub fn sind(x: f64) -> f64 {
    deg_to_rad(x).sin()
}

pub fn cosd(x: f64) -> f64 {
    deg_to_rad(x).cos()
}

pub fn tand(x: f64) -> f64 {
    deg_to_rad(x).tan()
}

pub fn atan2d(y: f64, x: f64) -> f64 {
    rad_to_deg(y.atan2(x))
}

/// Inverse cosine in degrees. The argument must already lie in [-1, 1];
/// the solvers clamp before calling.
pub fn acosd(x: f64) -> f64 {
    rad_to_deg(x.acos())
}

/// Reduce an angle to [0, 360).
pub fn revolution(x: f64) -> f64 {
    x - 360.0 * (x * INV360).floor()
}

/// Reduce an angle to the signed range around zero, used for
/// shortest-path differences such as sidereal time minus right ascension.
pub fn rev180(x: f64) -> f64 {
    x - 360.0 * (x * INV360 + 0.5).floor()
}

pub fn hours_from_degrees(deg: f64) -> f64 {
    deg / DEGREES_PER_HOUR
}
