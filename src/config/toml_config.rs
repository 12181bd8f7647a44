use crate::adapters::clock::ClockStyle;
use crate::adapters::linear_model::ModelSource;
use crate::domain::model::{CoffeeCups, SleepAmount, WakeTime};
use crate::utils::error::{BedtimeError, Result};
use crate::utils::validation::{validate_path, Validate};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Coefficient file; the bundled model is used when absent.
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// "12h", "24h" or "auto".
    pub clock: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefaultsConfig {
    pub wake: Option<WakeTime>,
    pub sleep: Option<f64>,
    pub coffee: Option<u32>,
}

impl AppConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content)?;
        toml::from_str(&processed).map_err(|e| BedtimeError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the variable's value; unknown variables are
    /// left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| BedtimeError::ConfigError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn model_source(&self) -> ModelSource {
        ModelSource::from_path(self.model.path.as_deref())
    }

    pub fn clock_style(&self) -> Result<ClockStyle> {
        ClockStyle::resolve(self.display.clock.as_deref().unwrap_or("auto"))
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.model.path {
            validate_path("model.path", path)?;
        }
        if let Some(clock) = &self.display.clock {
            if !clock.trim().eq_ignore_ascii_case("auto") {
                clock.parse::<ClockStyle>()?;
            }
        }
        if let Some(sleep) = self.defaults.sleep {
            SleepAmount::checked(sleep)?;
        }
        if let Some(coffee) = self.defaults.coffee {
            CoffeeCups::checked(coffee)?;
        }
        Ok(())
    }
}
