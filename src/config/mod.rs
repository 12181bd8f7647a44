pub mod toml_config;

use crate::adapters::clock::ClockStyle;
use crate::adapters::linear_model::ModelSource;
use crate::domain::model::{CoffeeCups, SleepAmount, WakeTime};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use toml_config::AppConfig;

#[cfg(feature = "cli")]
use clap::Parser;

/// Everything one run needs, after command line and config file are merged.
#[derive(Debug, Clone)]
pub struct Settings {
    pub wake_up: WakeTime,
    pub sleep_hours: f64,
    pub coffee_cups: u32,
    pub model: ModelSource,
    pub clock: ClockStyle,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(Parser))]
#[cfg_attr(feature = "cli", command(name = "better-rest"))]
#[cfg_attr(
    feature = "cli",
    command(about = "Estimate the ideal bedtime for a wake time, sleep goal and coffee intake")
)]
pub struct CliConfig {
    /// Wake-up time, HH:MM (24-hour)
    #[cfg_attr(feature = "cli", arg(short, long))]
    pub wake: Option<String>,

    /// Desired sleep in hours, 4-12 in steps of 0.25
    #[cfg_attr(feature = "cli", arg(short, long))]
    pub sleep: Option<f64>,

    /// Cups of coffee per day, 1-15
    #[cfg_attr(feature = "cli", arg(short, long))]
    pub coffee: Option<u32>,

    /// Path to a TOML configuration file
    #[cfg_attr(feature = "cli", arg(long))]
    pub config: Option<String>,

    /// Path to a TOML model coefficient file
    #[cfg_attr(feature = "cli", arg(long))]
    pub model: Option<String>,

    /// Clock style: 12h, 24h or auto
    #[cfg_attr(feature = "cli", arg(long))]
    pub clock: Option<String>,

    /// Print the result as JSON
    #[cfg_attr(feature = "cli", arg(long))]
    pub json: bool,

    /// Emit logs as JSON
    #[cfg_attr(feature = "cli", arg(long))]
    pub log_json: bool,

    /// Enable verbose output
    #[cfg_attr(feature = "cli", arg(short, long))]
    pub verbose: bool,
}

impl CliConfig {
    pub fn load_app_config(&self) -> Result<AppConfig> {
        match &self.config {
            Some(path) => AppConfig::from_file(path),
            None => Ok(AppConfig::default()),
        }
    }

    /// Command line values win over the config file, which wins over the
    /// form defaults.
    pub fn resolve(&self, file: &AppConfig) -> Result<Settings> {
        let wake_up = match &self.wake {
            Some(wake) => wake.parse()?,
            None => file.defaults.wake.unwrap_or_default(),
        };
        let sleep_hours = self
            .sleep
            .or(file.defaults.sleep)
            .unwrap_or(SleepAmount::DEFAULT);
        let coffee_cups = self.coffee.or(file.defaults.coffee).unwrap_or(CoffeeCups::MIN);

        let model = match &self.model {
            Some(path) => ModelSource::from_path(Some(path.as_str())),
            None => file.model_source(),
        };
        let clock = match &self.clock {
            Some(clock) => ClockStyle::resolve(clock)?,
            None => file.clock_style()?,
        };

        Ok(Settings {
            wake_up,
            sleep_hours,
            coffee_cups,
            model,
            clock,
        })
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(wake) = &self.wake {
            wake.parse::<WakeTime>()?;
        }
        if let Some(sleep) = self.sleep {
            SleepAmount::checked(sleep)?;
        }
        if let Some(coffee) = self.coffee {
            CoffeeCups::checked(coffee)?;
        }
        if let Some(model) = &self.model {
            crate::utils::validation::validate_path("model", model)?;
        }
        if let Some(clock) = &self.clock {
            ClockStyle::resolve(clock)?;
        }
        Ok(())
    }
}
