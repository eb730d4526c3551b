use chrono::{DateTime, Local, TimeZone};

pub struct TimeUtils;

impl TimeUtils {
    pub const CLOCK_FORMAT: &str = "%H:%M:%S";
    pub const STANDARD_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
}

/// Wall-clock time of a fetch, e.g. `14:03:27`.
pub fn format_clock<Tz: TimeZone>(at: DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format(TimeUtils::CLOCK_FORMAT).to_string()
}

pub fn local_now_string() -> String {
    Local::now().format(TimeUtils::STANDARD_TIME_FORMAT).to_string()
}
