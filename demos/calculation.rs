use chrono::NaiveDate;
use chrono_tz::America::New_York;

use sunriset::{
    day_length, format_hms, local_clock, solve_crossing, twilight_duration, zone_at_noon,
    AltitudeThreshold, CalendarDate, CrossingResult, DayReport, GeoCoordinate,
};

fn main() {
    let latitude = 40.6611;
    let longitude = -73.9439;
    let naive = NaiveDate::from_ymd_opt(2000, 6, 21).unwrap();

    let date = CalendarDate::from(naive);
    let place = GeoCoordinate::new(latitude, longitude);
    let (offset, zone) = zone_at_noon(New_York, naive).unwrap();

    println!("=== Sunrise/Sunset Calculation Example ===");
    println!(
        "Location: New York City ({:.4}°N, {:.4}°W)",
        latitude, -longitude
    );
    println!("Date: {}  ({}, UTC{})", naive, zone, offset);
    println!();

    println!("--- Crossings ---");
    for (name, threshold) in [
        ("Sunrise/sunset", AltitudeThreshold::RISE_SET),
        ("Civil", AltitudeThreshold::CIVIL),
        ("Nautical", AltitudeThreshold::NAUTICAL),
        ("Astronomical", AltitudeThreshold::ASTRONOMICAL),
    ] {
        match solve_crossing(date, place, threshold) {
            CrossingResult::Normal { rise, set } => println!(
                "{:>15}: {:.4}h UT ({}) .. {:.4}h UT ({})",
                name,
                rise,
                local_clock(rise, offset).format("%H:%M"),
                set,
                local_clock(set, offset).format("%H:%M")
            ),
            CrossingResult::AlwaysAbove { .. } => println!("{:>15}: above all day", name),
            CrossingResult::AlwaysBelow { .. } => println!("{:>15}: below all day", name),
        }
    }
    println!();

    println!("--- Durations ---");
    println!("Day length: {}", format_hms(day_length(date, place)));
    println!(
        "Civil twilight (each side): {}",
        format_hms(twilight_duration(date, place, AltitudeThreshold::CIVIL))
    );
    println!();

    println!("--- Report ---");
    print!("{}", DayReport::compute(date, place).render(offset, &zone));
}
