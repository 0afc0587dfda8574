//! Log level definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Placeholder printed for a raw level value outside the known range
pub const UNKNOWN_LEVEL_LABEL: &str = "UNKNOWN";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
pub enum LogLevel {
    Debug = 0,
    #[default]
    Info = 1,
    Warn = 2,
    Error = 3,
}

impl LogLevel {
    pub const ALL: [LogLevel; 4] = [
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
    ];

    /// Four-character tag written into every line
    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "EROR",
        }
    }

    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(LogLevel::Debug),
            1 => Some(LogLevel::Info),
            2 => Some(LogLevel::Warn),
            3 => Some(LogLevel::Error),
            _ => None,
        }
    }

    /// Console color for this level, `None` meaning the terminal default
    pub fn console_color(&self) -> Option<colored::Color> {
        use colored::Color::*;
        match self {
            LogLevel::Debug => Some(Green),
            LogLevel::Info => None,
            LogLevel::Warn => Some(Yellow),
            LogLevel::Error => Some(Red),
        }
    }
}

/// Label for a raw level value, e.g. one read back from an external source
pub fn level_label(value: u8) -> &'static str {
    LogLevel::from_u8(value)
        .map(|level| level.to_str())
        .unwrap_or(UNKNOWN_LEVEL_LABEL)
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "DEBUG" | "DBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARN" | "WARNING" => Ok(LogLevel::Warn),
            "ERROR" | "EROR" => Ok(LogLevel::Error),
            _ => Err(format!("Invalid log level: '{}'", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_are_totally_ordered() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warn);
        assert!(LogLevel::Warn < LogLevel::Error);
    }

    #[test]
    fn test_parse_accepts_short_aliases() {
        assert_eq!("dbug".parse::<LogLevel>().unwrap(), LogLevel::Debug);
        assert_eq!("EROR".parse::<LogLevel>().unwrap(), LogLevel::Error);
        assert_eq!(" warning ".parse::<LogLevel>().unwrap(), LogLevel::Warn);
        assert!("verbose".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_tags_are_four_characters() {
        assert_eq!(LogLevel::Debug.to_string(), "DBUG");
        assert_eq!(LogLevel::Info.to_string(), "INFO");
        assert_eq!(LogLevel::Warn.to_string(), "WARN");
        assert_eq!(LogLevel::Error.to_string(), "EROR");
        assert!(LogLevel::ALL.iter().all(|level| level.to_str().len() == 4));
    }

    #[test]
    fn test_parse_accepts_long_names() {
        assert_eq!("debug".parse::<LogLevel>().unwrap(), LogLevel::Debug);
        assert_eq!("Error".parse::<LogLevel>().unwrap(), LogLevel::Error);
    }

    #[test]
    fn test_raw_labels() {
        assert_eq!(level_label(0), "DBUG");
        assert_eq!(level_label(2), "WARN");
        assert_eq!(level_label(3), "EROR");
        assert_eq!(level_label(4), UNKNOWN_LEVEL_LABEL);
        assert_eq!(level_label(u8::MAX), UNKNOWN_LEVEL_LABEL);
    }

    #[test]
    fn test_console_colors() {
        assert_eq!(LogLevel::Debug.console_color(), Some(colored::Color::Green));
        assert_eq!(LogLevel::Info.console_color(), None);
        assert_eq!(LogLevel::Warn.console_color(), Some(colored::Color::Yellow));
        assert_eq!(LogLevel::Error.console_color(), Some(colored::Color::Red));
    }
}
