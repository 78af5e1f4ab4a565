use serde::{Deserialize, Serialize};

/// Severity carried by `Log` events.
///
/// Routing only distinguishes `Error` from everything else. Levels this crate
/// has never seen round-trip through `Other` unchanged, so an exotic producer
/// level is preserved rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
    Other(String),
}

impl LogLevel {
    pub fn is_error(&self) -> bool {
        matches!(self, LogLevel::Error)
    }

    pub fn as_str(&self) -> &str {
        match self {
            LogLevel::Debug => "Debug",
            LogLevel::Info => "Info",
            LogLevel::Warn => "Warn",
            LogLevel::Error => "Error",
            LogLevel::Other(level) => level,
        }
    }
}

impl From<String> for LogLevel {
    fn from(level: String) -> Self {
        match level.as_str() {
            "Debug" => LogLevel::Debug,
            "Info" => LogLevel::Info,
            "Warn" => LogLevel::Warn,
            "Error" => LogLevel::Error,
            _ => LogLevel::Other(level),
        }
    }
}

impl From<LogLevel> for String {
    fn from(level: LogLevel) -> Self {
        level.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_levels_parse_from_strings() {
        assert_eq!(LogLevel::from("Error".to_string()), LogLevel::Error);
        assert_eq!(LogLevel::from("Info".to_string()), LogLevel::Info);
        assert_eq!(LogLevel::from("Warn".to_string()), LogLevel::Warn);
        assert_eq!(LogLevel::from("Debug".to_string()), LogLevel::Debug);
    }

    #[test]
    fn unknown_levels_are_preserved() {
        let level = LogLevel::from("Critical".to_string());
        assert_eq!(level, LogLevel::Other("Critical".to_string()));
        assert_eq!(level.as_str(), "Critical");
        assert!(!level.is_error());
    }

    #[test]
    fn only_error_is_error() {
        assert!(LogLevel::Error.is_error());
        assert!(!LogLevel::Info.is_error());
        assert!(!LogLevel::Other("Error-ish".to_string()).is_error());
    }

    #[test]
    fn serde_round_trips_as_plain_strings() {
        let json = serde_json::to_value(&LogLevel::Error).unwrap();
        assert_eq!(json, serde_json::json!("Error"));

        let back: LogLevel = serde_json::from_value(serde_json::json!("Trace")).unwrap();
        assert_eq!(back, LogLevel::Other("Trace".to_string()));
    }
}
