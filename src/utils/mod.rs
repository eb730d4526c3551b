mod time_utils;

pub use time_utils::{TimeUtils, format_clock, local_now_string};
