mod settings;

use config::{Config, ConfigError, Environment, File};

use settings::PartialSettings;

pub use settings::{BusSettings, FailurePolicy, LoggingSettings, Settings};

/// Loads the configuration from `config/default` and the environment.
///
/// Environment variables use the `POPBUS_` prefix and `__` between
/// sections, e.g. `POPBUS_BUS__FAILURE_POLICY=fail_fast`. A `.env` file
/// in the working directory is read first if present.
pub fn load_config() -> Result<Settings, ConfigError> {
    load_config_from("config/default")
}

/// Same as `load_config` with an explicit base path for the settings file
/// (extension is resolved by the `config` crate; the file is optional).
pub fn load_config_from(path: &str) -> Result<Settings, ConfigError> {
    dotenvy::dotenv().ok();

    let builder = Config::builder()
        .add_source(File::with_name(path).required(false))
        .add_source(
            Environment::with_prefix("POPBUS")
                .prefix_separator("_")
                .separator("__"),
        );

    let config = builder.build()?;
    let partial: PartialSettings = config.try_deserialize()?;
    let default = Settings::default();

    Ok(Settings {
        bus: BusSettings {
            separator: partial
                .bus
                .as_ref()
                .and_then(|b| b.separator)
                .unwrap_or(default.bus.separator),
            failure_policy: partial
                .bus
                .as_ref()
                .and_then(|b| b.failure_policy)
                .unwrap_or(default.bus.failure_policy),
            catch_panics: partial
                .bus
                .as_ref()
                .and_then(|b| b.catch_panics)
                .unwrap_or(default.bus.catch_panics),
        },
        logging: LoggingSettings {
            level: partial
                .logging
                .as_ref()
                .and_then(|l| l.level.clone())
                .unwrap_or(default.logging.level),
        },
    })
}
