use serde::Deserialize;

use crate::bus::topic::DEFAULT_SEPARATOR;

/// Top-level configuration settings for the bus.
///
/// Includes settings for dispatching and for logging.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Settings {
    pub bus: BusSettings,
    pub logging: LoggingSettings,
}

/// What a trigger does when a callback fails.
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Keep firing the remaining callbacks and report every failure once
    /// the trigger has finished.
    #[default]
    Isolate,
    /// Stop the whole trigger at the first failure.
    FailFast,
}

/// Configuration settings for dispatching.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct BusSettings {
    /// Character splitting an event from its namespace in a topic.
    pub separator: char,
    pub failure_policy: FailurePolicy,
    /// Turn callback panics into reported failures instead of unwinding
    /// through `trigger`.
    pub catch_panics: bool,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LoggingSettings {
    pub level: String,
}

/// Partial configuration settings loaded from files or environment.
///
/// Missing values are filled in from `Settings::default()`.
#[derive(Debug, Deserialize)]
pub struct PartialSettings {
    pub bus: Option<PartialBusSettings>,
    pub logging: Option<PartialLoggingSettings>,
}

#[derive(Debug, Deserialize)]
pub struct PartialBusSettings {
    pub separator: Option<char>,
    pub failure_policy: Option<FailurePolicy>,
    pub catch_panics: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct PartialLoggingSettings {
    pub level: Option<String>,
}

impl Default for BusSettings {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR,
            failure_policy: FailurePolicy::Isolate,
            catch_panics: true,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bus: BusSettings::default(),
            logging: LoggingSettings::default(),
        }
    }
}
