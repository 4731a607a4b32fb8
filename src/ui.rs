//! Leveled terminal messages.
//!
//! Status goes to stderr so that relayed `make` output on stdout stays
//! untouched. Each line is a wall-clock time, a coloured level badge, the
//! message, then any `key=value` fields:
//!
//! ```text
//! 3:04PM  INFO  Starting server directory=build port=8080
//! ```

use chrono::{Local, NaiveTime};
use colored::*;
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Warn,
    Error,
}

impl Level {
    fn badge(self) -> ColoredString {
        match self {
            Level::Info => " INFO ".black().on_magenta(),
            Level::Warn => " WARN ".black().on_yellow(),
            Level::Error => " ERROR!! ".black().on_red(),
        }
    }
}

/// Hour without padding, minutes, AM/PM: `3:04PM`.
const TIME_FORMAT: &str = "%-I:%M%p";

pub fn format_line(
    time: NaiveTime,
    level: Level,
    message: &str,
    fields: &[(&str, &dyn Display)],
) -> String {
    let mut line = format!(
        "{} {} {}",
        time.format(TIME_FORMAT).to_string().dimmed(),
        level.badge(),
        message
    );
    for (key, value) in fields {
        let value = value.to_string();
        let value = if level == Level::Error {
            value.bold().to_string()
        } else {
            value
        };
        line.push_str(&format!(" {}={}", key.dimmed(), value));
    }
    line
}

pub fn log(level: Level, message: &str, fields: &[(&str, &dyn Display)]) {
    eprintln!("{}", format_line(Local::now().time(), level, message, fields));
}

pub fn info(message: impl Display) {
    log(Level::Info, &message.to_string(), &[]);
}

pub fn warn(message: impl Display) {
    log(Level::Warn, &message.to_string(), &[]);
}

pub fn error(message: impl Display) {
    log(Level::Error, &message.to_string(), &[]);
}
