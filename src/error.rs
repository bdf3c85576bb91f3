use thiserror::Error;

/// Failures of the command-line layer. The solvers themselves never fail.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SunstatError {
    #[error("invalid date `{0}`, expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("latitude {0} is outside [-90, 90]")]
    LatitudeOutOfRange(f64),
    #[error("longitude {0} is outside [-180, 180]")]
    LongitudeOutOfRange(f64),
    #[error("invalid UTC offset `{0}`, expected +HH:MM or -HH:MM")]
    InvalidOffset(String),
}
