//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `robot-service.toml` in the working directory (or the path in
//! `ROBOT_SERVICE_CONFIG`). Every field has a sensible default so the file is
//! optional. Environment variables take precedence over file values.

use robot_service_app::services::controller::Capacities;
use robot_service_domain::robot::RobotType;
use robot_service_domain::service::ServiceType;
use robot_service_domain::supplement::SupplementType;
use serde::Deserialize;

const DEFAULT_PATH: &str = "robot-service.toml";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Robot slots per service type.
    pub capacity: CapacityConfig,
    /// Entities created at startup.
    pub seed: SeedConfig,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Robot capacity given to newly created services.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct CapacityConfig {
    pub main: usize,
    pub secondary: usize,
}

/// Services, supplements and robots to create at startup, in that order.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    pub services: Vec<ServiceSeed>,
    pub supplements: Vec<SupplementSeed>,
    pub robots: Vec<RobotSeed>,
}

#[derive(Debug, Deserialize)]
pub struct ServiceSeed {
    #[serde(rename = "type")]
    pub service_type: ServiceType,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct SupplementSeed {
    #[serde(rename = "type")]
    pub supplement_type: SupplementType,
    /// Install straight into the services with this name.
    pub service: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RobotSeed {
    pub service: String,
    #[serde(rename = "type")]
    pub robot_type: RobotType,
    pub name: String,
    pub kind: String,
    pub price: f64,
}

impl Config {
    /// Load configuration from `robot-service.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var("ROBOT_SERVICE_CONFIG").unwrap_or_else(|_| DEFAULT_PATH.into());
        let mut config = Self::from_file(&path)?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("ROBOT_SERVICE_MAIN_CAPACITY")
            && let Ok(capacity) = val.parse()
        {
            self.capacity.main = capacity;
        }
        if let Ok(val) = std::env::var("ROBOT_SERVICE_SECONDARY_CAPACITY")
            && let Ok(capacity) = val.parse()
        {
            self.capacity.secondary = capacity;
        }
        if let Ok(val) = std::env::var("ROBOT_SERVICE_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity.main == 0 || self.capacity.secondary == 0 {
            return Err(ConfigError::Validation(
                "service capacities must be non-zero".to_string(),
            ));
        }
        if let Some(robot) = self.seed.robots.iter().find(|r| !r.price.is_finite()) {
            return Err(ConfigError::Validation(format!(
                "seed robot {} has a non-finite price",
                robot.name
            )));
        }
        Ok(())
    }

    /// Capacities to hand to the controller.
    #[must_use]
    pub fn capacities(&self) -> Capacities {
        Capacities {
            main: self.capacity.main,
            secondary: self.capacity.secondary,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "robot_serviced=info,robot_service_app=info".to_string(),
        }
    }
}

impl Default for CapacityConfig {
    fn default() -> Self {
        let defaults = Capacities::default();
        Self {
            main: defaults.main,
            secondary: defaults.secondary,
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
