// RUNTIME PREFERENCES (User Experience)

use serde::{Deserialize, Serialize};
use std::env;

/// Runtime log level selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogLevel {
    Error,
    Warning,
    Info,
    Debug,
}

impl LogLevel {
    /// Convert to the logging event level
    pub fn to_events_log_level(self) -> crate::logging::events::LogLevel {
        match self {
            LogLevel::Error => crate::logging::events::LogLevel::Error,
            LogLevel::Warning => crate::logging::events::LogLevel::Warning,
            LogLevel::Info => crate::logging::events::LogLevel::Info,
            LogLevel::Debug => crate::logging::events::LogLevel::Debug,
        }
    }

    fn from_env(var: &str, default: Self) -> Self {
        match env::var(var).ok().as_deref() {
            Some("error") => LogLevel::Error,
            Some("warning") | Some("warn") => LogLevel::Warning,
            Some("info") => LogLevel::Info,
            Some("debug") => LogLevel::Debug,
            _ => default,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingPreferences {
    /// Minimum level an event needs to be emitted
    pub min_log_level: LogLevel,

    /// Whether to emit JSON lines instead of human-readable lines
    pub use_structured_logging: bool,

    /// Whether console output is enabled at all
    pub enable_console_logging: bool,
}

impl Default for LoggingPreferences {
    fn default() -> Self {
        Self {
            min_log_level: LogLevel::from_env("CAMEL_LOG_LEVEL", LogLevel::Warning),
            use_structured_logging: env::var("CAMEL_STRUCTURED_LOGGING")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            enable_console_logging: env::var("CAMEL_CONSOLE_LOGGING")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexicalPreferences {
    /// Whether to collect per-kind token metrics while scanning
    pub collect_detailed_metrics: bool,

    /// Whether to show line/column information in error messages
    pub include_position_in_errors: bool,
}

impl Default for LexicalPreferences {
    fn default() -> Self {
        Self {
            collect_detailed_metrics: env::var("CAMEL_LEXICAL_DETAILED_METRICS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            include_position_in_errors: env::var("CAMEL_LEXICAL_INCLUDE_POSITIONS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyntaxPreferences {
    /// Whether to log each production as the parser enters it
    pub log_parse_steps: bool,
}

impl Default for SyntaxPreferences {
    fn default() -> Self {
        Self {
            log_parse_steps: env::var("CAMEL_SYNTAX_LOG_PARSE_STEPS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_env() {
        let prefs = LexicalPreferences {
            collect_detailed_metrics: true,
            include_position_in_errors: true,
        };
        assert!(prefs.collect_detailed_metrics);
        assert!(prefs.include_position_in_errors);
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            LogLevel::Debug.to_events_log_level(),
            crate::logging::events::LogLevel::Debug
        );
        assert_eq!(
            LogLevel::Error.to_events_log_level(),
            crate::logging::events::LogLevel::Error
        );
    }

    #[test]
    fn test_preferences_serialize() {
        let prefs = LoggingPreferences {
            min_log_level: LogLevel::Info,
            use_structured_logging: true,
            enable_console_logging: true,
        };

        let json = serde_json::to_string(&prefs).expect("serializable");
        let back: LoggingPreferences = serde_json::from_str(&json).expect("deserializable");
        assert_eq!(back.min_log_level, LogLevel::Info);
        assert!(back.use_structured_logging);
    }
}
