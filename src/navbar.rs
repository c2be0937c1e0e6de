//! Header clock state
//!
//! Keeps the greeting, date and time strings shown in the header.
//! The strings are rebuilt at most once per second; the main loop polls
//! much faster than that and re-rendering identical text every frame
//! would churn for nothing.

use chrono::{DateTime, Local, Timelike};
use std::time::{Duration, Instant};

/// Minimum interval between clock string rebuilds
pub const REFRESH_INTERVAL: Duration = Duration::from_millis(1000);

/// Cached header strings plus the time they were last rebuilt
pub struct Navbar {
    pub greeting: &'static str,
    pub date_line: String,
    pub time_line: String,
    last_refresh: Option<Instant>,
}

impl Navbar {
    pub fn new() -> Self {
        Self {
            greeting: "",
            date_line: String::new(),
            time_line: String::new(),
            last_refresh: None,
        }
    }

    /// Rebuild the cached strings when the refresh interval has passed
    pub fn maybe_refresh(&mut self, now: Instant) {
        let due = self
            .last_refresh
            .map_or(true, |at| now.duration_since(at) >= REFRESH_INTERVAL);
        if !due {
            return;
        }
        self.last_refresh = Some(now);

        let local = Local::now();
        self.greeting = greeting_for_hour(local.hour());
        self.date_line = format_date(&local);
        self.time_line = format_time(&local);
    }
}

impl Default for Navbar {
    fn default() -> Self {
        Self::new()
    }
}

/// Time-of-day greeting for a 24-hour clock value
pub fn greeting_for_hour(hour: u32) -> &'static str {
    if hour < 12 {
        "Good Morning"
    } else if hour < 17 {
        "Good Afternoon"
    } else if hour < 20 {
        "Good Evening"
    } else {
        "Good Night"
    }
}

/// Long date line, e.g. "Wednesday, March 5, 2025"
pub fn format_date(time: &DateTime<Local>) -> String {
    time.format("%A, %B %-d, %Y").to_string()
}

/// 12-hour clock line with seconds, e.g. "02:30:05 PM"
pub fn format_time(time: &DateTime<Local>) -> String {
    time.format("%I:%M:%S %p").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn local(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    #[test]
    fn test_greeting_bands() {
        assert_eq!(greeting_for_hour(0), "Good Morning");
        assert_eq!(greeting_for_hour(11), "Good Morning");
        assert_eq!(greeting_for_hour(12), "Good Afternoon");
        assert_eq!(greeting_for_hour(16), "Good Afternoon");
        assert_eq!(greeting_for_hour(17), "Good Evening");
        assert_eq!(greeting_for_hour(19), "Good Evening");
        assert_eq!(greeting_for_hour(20), "Good Night");
        assert_eq!(greeting_for_hour(23), "Good Night");
    }

    #[test]
    fn test_format_date_unpadded_day() {
        let t = local(2025, 3, 5, 14, 30, 5);
        assert_eq!(format_date(&t), "Wednesday, March 5, 2025");
    }

    #[test]
    fn test_format_time_twelve_hour() {
        let afternoon = local(2025, 3, 5, 14, 30, 5);
        assert_eq!(format_time(&afternoon), "02:30:05 PM");

        let past_midnight = local(2025, 3, 5, 0, 5, 9);
        assert_eq!(format_time(&past_midnight), "12:05:09 AM");
    }

    #[test]
    fn test_refresh_is_rate_limited() {
        let t0 = Instant::now();
        let mut navbar = Navbar::new();

        navbar.maybe_refresh(t0);
        assert!(!navbar.date_line.is_empty());
        assert!(!navbar.time_line.is_empty());
        assert!(!navbar.greeting.is_empty());

        // Inside the interval the cache is left alone.
        navbar.date_line = String::from("sentinel");
        navbar.maybe_refresh(t0 + Duration::from_millis(500));
        assert_eq!(navbar.date_line, "sentinel");

        // At the interval boundary it is rebuilt.
        navbar.maybe_refresh(t0 + REFRESH_INTERVAL);
        assert_ne!(navbar.date_line, "sentinel");
    }
}
