//! Display formatting for transfer results.
//!
//! The engine itself deals in seconds and meters; these helpers produce the
//! strings a client shows the rider.

/// Meters per statute mile.
const METERS_PER_MILE: f64 = 1609.34;

/// Format a walking time for display.
///
/// Times under a minute are shown in seconds, longer times in whole
/// minutes (rounded to nearest).
///
/// # Examples
///
/// ```
/// use transfer_server::transfer::format_walking_time;
///
/// assert_eq!(format_walking_time(45), "45 sec");
/// assert_eq!(format_walking_time(447), "7 min");
/// ```
pub fn format_walking_time(secs: u32) -> String {
    if secs < 60 {
        format!("{secs} sec")
    } else {
        let minutes = (f64::from(secs) / 60.0).round() as u32;
        format!("{minutes} min")
    }
}

/// Format a distance for display.
///
/// Distances under a kilometer are shown in meters; beyond that, in miles
/// with one decimal place.
pub fn format_distance(meters: u32) -> String {
    if meters < 1000 {
        format!("{meters}m")
    } else {
        let miles = f64::from(meters) / METERS_PER_MILE;
        format!("{miles:.1} mi")
    }
}

/// Format a minutes-until-arrival value for display.
pub fn format_minutes_until(minutes: i64) -> String {
    if minutes <= 0 {
        "Now".to_string()
    } else if minutes < 60 {
        format!("{minutes} min")
    } else {
        let hours = minutes / 60;
        let mins = minutes % 60;
        if mins == 0 {
            format!("{hours} hr")
        } else {
            format!("{hours} hr {mins} min")
        }
    }
}

/// Format a countdown as "M:SS", clamped at "0:00".
pub fn format_countdown(secs: i64) -> String {
    if secs <= 0 {
        return "0:00".to_string();
    }
    format!("{}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walking_time_under_a_minute_is_seconds() {
        assert_eq!(format_walking_time(0), "0 sec");
        assert_eq!(format_walking_time(30), "30 sec");
        assert_eq!(format_walking_time(59), "59 sec");
    }

    #[test]
    fn walking_time_rounds_to_minutes() {
        assert_eq!(format_walking_time(60), "1 min");
        assert_eq!(format_walking_time(89), "1 min");
        assert_eq!(format_walking_time(90), "2 min");
        assert_eq!(format_walking_time(447), "7 min");
    }

    #[test]
    fn short_distances_in_meters() {
        assert_eq!(format_distance(0), "0m");
        assert_eq!(format_distance(150), "150m");
        assert_eq!(format_distance(999), "999m");
    }

    #[test]
    fn long_distances_in_miles() {
        assert_eq!(format_distance(1000), "0.6 mi");
        assert_eq!(format_distance(1609), "1.0 mi");
        assert_eq!(format_distance(5000), "3.1 mi");
    }

    #[test]
    fn minutes_until() {
        assert_eq!(format_minutes_until(-5), "Now");
        assert_eq!(format_minutes_until(0), "Now");
        assert_eq!(format_minutes_until(1), "1 min");
        assert_eq!(format_minutes_until(45), "45 min");
        assert_eq!(format_minutes_until(60), "1 hr");
        assert_eq!(format_minutes_until(75), "1 hr 15 min");
        assert_eq!(format_minutes_until(120), "2 hr");
    }

    #[test]
    fn countdown() {
        assert_eq!(format_countdown(-10), "0:00");
        assert_eq!(format_countdown(0), "0:00");
        assert_eq!(format_countdown(9), "0:09");
        assert_eq!(format_countdown(150), "2:30");
        assert_eq!(format_countdown(600), "10:00");
    }
}
