//! Configuration management for the `TourGuide` planner
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::TourGuideError;
use crate::clock::parse_start_time;
use crate::models::TravelStyle;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for the `TourGuide` planner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TourGuideConfig {
    /// Travel model and day budget
    #[serde(default)]
    pub planner: PlannerConfig,
    /// Defaults for trip parameters
    #[serde(default)]
    pub trip: TripConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Travel model and scheduling settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlannerConfig {
    /// Average travel speed between stops in km/h
    #[serde(default = "default_avg_speed")]
    pub avg_speed_kmph: f64,
    /// Minimum travel time between any two stops in hours
    #[serde(default = "default_min_travel_hours")]
    pub min_travel_hours: f64,
    /// Wrap-up time after each visit in minutes
    #[serde(default = "default_buffer_minutes")]
    pub buffer_minutes: u32,
    /// Maximum travel plus visit hours per day
    #[serde(default = "default_day_hours_budget")]
    pub day_hours_budget: f64,
}

/// Default trip parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripConfig {
    /// Daily start time (HH:MM)
    #[serde(default = "default_start_time")]
    pub start_time: String,
    /// Number of days when not given
    #[serde(default = "default_days")]
    pub days: u32,
    /// Upper bound for the number of days
    #[serde(default = "default_max_days")]
    pub max_days: u32,
    /// Travel style when not given
    #[serde(default = "default_travel_style")]
    pub travel_style: TravelStyle,
    /// POI catalog file
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_avg_speed() -> f64 {
    crate::planner::travel::DEFAULT_AVG_SPEED_KMPH
}

fn default_min_travel_hours() -> f64 {
    crate::planner::travel::DEFAULT_MIN_TRAVEL_HOURS
}

fn default_buffer_minutes() -> u32 {
    crate::planner::DEFAULT_BUFFER_MINUTES
}

fn default_day_hours_budget() -> f64 {
    crate::planner::DEFAULT_DAY_HOURS_BUDGET
}

fn default_start_time() -> String {
    "09:00".to_string()
}

fn default_days() -> u32 {
    3
}

fn default_max_days() -> u32 {
    14
}

fn default_travel_style() -> TravelStyle {
    TravelStyle::Cultural
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            avg_speed_kmph: default_avg_speed(),
            min_travel_hours: default_min_travel_hours(),
            buffer_minutes: default_buffer_minutes(),
            day_hours_budget: default_day_hours_budget(),
        }
    }
}

impl Default for TripConfig {
    fn default() -> Self {
        Self {
            start_time: default_start_time(),
            days: default_days(),
            max_days: default_max_days(),
            travel_style: default_travel_style(),
            catalog_path: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for TourGuideConfig {
    fn default() -> Self {
        Self {
            planner: PlannerConfig::default(),
            trip: TripConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl TourGuideConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        // Load from file if path is provided or use default location
        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Environment overrides, e.g. TOURGUIDE_PLANNER__AVG_SPEED_KMPH=40
        builder = builder.add_source(
            Environment::with_prefix("TOURGUIDE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: TourGuideConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("tourguide").join("config.toml"))
    }

    /// Replace empty or zero values with their defaults
    pub fn apply_defaults(&mut self) {
        if self.trip.start_time.trim().is_empty() {
            self.trip.start_time = default_start_time();
        }
        if self.trip.days == 0 {
            self.trip.days = default_days();
        }
        if self.trip.max_days == 0 {
            self.trip.max_days = default_max_days();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_planner()?;
        self.validate_trip()?;
        self.validate_string_values()?;
        Ok(())
    }

    fn validate_planner(&self) -> Result<()> {
        let planner = &self.planner;
        if !(planner.avg_speed_kmph > 0.0 && planner.avg_speed_kmph <= 200.0) {
            return Err(TourGuideError::config(
                "Average speed must be greater than 0 and cannot exceed 200 km/h",
            )
            .into());
        }

        if !(planner.min_travel_hours >= 0.0 && planner.min_travel_hours.is_finite()) {
            return Err(TourGuideError::config("Minimum travel time cannot be negative").into());
        }

        if planner.buffer_minutes > 240 {
            return Err(
                TourGuideError::config("Buffer between visits cannot exceed 240 minutes").into(),
            );
        }

        if !(planner.day_hours_budget > 0.0 && planner.day_hours_budget <= 24.0) {
            return Err(TourGuideError::config(
                "Day hours budget must be greater than 0 and cannot exceed 24 hours",
            )
            .into());
        }

        Ok(())
    }

    fn validate_trip(&self) -> Result<()> {
        parse_start_time(&self.trip.start_time).with_context(|| "Invalid default start time")?;

        if self.trip.max_days > 31 {
            return Err(TourGuideError::config("Maximum days cannot exceed 31").into());
        }

        if self.trip.days > self.trip.max_days {
            return Err(TourGuideError::config(format!(
                "Default days ({}) cannot exceed maximum days ({})",
                self.trip.days, self.trip.max_days
            ))
            .into());
        }

        Ok(())
    }

    /// Validate string configuration values
    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(TourGuideError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(TourGuideError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        Ok(())
    }
}
