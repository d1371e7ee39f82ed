use colored::{ColoredString, Colorize};
use std::time::Duration;

pub struct FormatElapsedTimeOptions {
    pub(crate) sec_yellow_threshold: u64,
    pub(crate) sec_red_threshold: u64,
    pub(crate) millis_yellow_threshold: Option<u128>,
    pub(crate) millis_red_threshold: Option<u128>,
}

impl Default for FormatElapsedTimeOptions {
    fn default() -> Self {
        Self {
            sec_yellow_threshold: 1,
            sec_red_threshold: 2,
            millis_yellow_threshold: Some(100),
            millis_red_threshold: Some(500),
        }
    }
}

/// Formats a build step duration for log lines, coloured by how slow it was.
pub fn format_elapsed_time(elapsed: Duration, options: &FormatElapsedTimeOptions) -> ColoredString {
    match elapsed.as_secs() {
        secs if secs >= 60 => format!("{}m", secs / 60).red(),
        secs if secs > options.sec_red_threshold => format!("{}s", secs).red(),
        secs if secs > options.sec_yellow_threshold => format!("{}s", secs).yellow(),
        secs if secs > 0 => format!("{}s", secs).normal(),
        _ => match elapsed.as_millis() {
            millis
                if options
                    .millis_red_threshold
                    .is_some_and(|threshold| millis > threshold) =>
            {
                format!("{}ms", millis).red()
            }
            millis
                if options
                    .millis_yellow_threshold
                    .is_some_and(|threshold| millis > threshold) =>
            {
                format!("{}ms", millis).yellow()
            }
            millis if millis > 0 => format!("{}ms", millis).normal(),
            _ => format!("{}μs", elapsed.as_micros()).normal(),
        },
    }
}
