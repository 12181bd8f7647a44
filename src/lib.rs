pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::clock::ClockStyle;
pub use adapters::linear_model::{BundledModel, LinearSleepModel, ModelFile, ModelSource, PreloadedModel};
pub use app::form::{Alert, BedtimeForm};
pub use config::{toml_config::AppConfig, CliConfig, Settings};
pub use crate::core::estimator::BedtimeEstimator;
pub use domain::model::{BedtimeInputs, CoffeeCups, EstimationResult, SleepAmount, SleepFeatures, WakeTime};
pub use domain::ports::{ModelLoader, SleepPredictor, TimeFormatter};
pub use utils::error::{BedtimeError, Result, BEDTIME_FAILURE_MESSAGE};
