use chrono::{FixedOffset, Local, NaiveDate, Offset, TimeZone};
use chrono_tz::Tz;
use clap::Parser;
use log::debug;

use sunriset::{
    parse_date, parse_offset, zone_at_noon, GeoCoordinate, ReportConfig, SunstatError,
};

#[derive(Parser)]
#[command(
    name = "sunstat",
    about = "Sunrise, sunset and twilight times for a location",
    after_help = "Examples:\n    sunstat +40.6611 -73.9439\n    sunstat +40.6611 -73.9439 --offset -04:00 --date 2000-06-21"
)]
struct Cli {
    /// Latitude in degrees, north positive
    #[arg(allow_negative_numbers = true)]
    latitude: f64,
    /// Longitude in degrees, east positive
    #[arg(allow_negative_numbers = true)]
    longitude: f64,
    /// Date (YYYY-MM-DD), defaults to today in the local zone
    #[arg(long)]
    date: Option<String>,
    /// Show times in UTC
    #[arg(long, conflicts_with = "offset")]
    utc: bool,
    /// Fixed UTC offset for displayed times (+HH:MM)
    #[arg(long, allow_hyphen_values = true)]
    offset: Option<String>,
}

impl Cli {
    fn into_config(self) -> Result<ReportConfig, SunstatError> {
        let date = match &self.date {
            Some(s) => parse_date(s)?,
            None => Local::now().date_naive(),
        };
        let coordinate = GeoCoordinate::new(self.latitude, self.longitude);

        if self.utc {
            return ReportConfig::utc(date.into(), coordinate);
        }
        let (offset, zone_label) = match &self.offset {
            Some(s) => {
                let offset = parse_offset(s)?;
                (offset, offset.to_string())
            }
            None => system_zone_at_noon(date),
        };
        ReportConfig::new(date.into(), coordinate, offset, zone_label)
    }
}

/// Offset and label of the system zone at local noon. Falls back to the
/// bare offset when the zone name is not an IANA identifier.
fn system_zone_at_noon(date: NaiveDate) -> (FixedOffset, String) {
    let named = iana_time_zone::get_timezone()
        .ok()
        .and_then(|name| name.parse::<Tz>().ok())
        .and_then(|tz| zone_at_noon(tz, date));
    if let Some(zone) = named {
        return zone;
    }
    debug!("system zone not resolved, labelling with the UTC offset");
    let offset = date
        .and_hms_opt(12, 0, 0)
        .and_then(|noon| Local.offset_from_local_datetime(&noon).earliest())
        .unwrap_or_else(|| Local::now().offset().fix());
    (offset, offset.to_string())
}

fn main() -> Result<(), SunstatError> {
    env_logger::init();
    let config = Cli::parse().into_config()?;
    debug!("{config:?}");
    print!("{}", config.report());
    Ok(())
}
