use crate::domain::model::SleepFeatures;
use crate::domain::ports::{ModelLoader, SleepPredictor};
use crate::utils::error::{BedtimeError, Result};
use crate::utils::validation::{validate_finite, validate_path, Validate};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const BUNDLED_MODEL: &str = include_str!("../../models/sleep_calculator.toml");

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ModelDocument {
    model: LinearSleepModel,
}

/// Linear regressor over the three sleep features:
/// `intercept + wake * wake_s + estimated_sleep * hours + coffee * cups`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearSleepModel {
    #[serde(default = "default_name")]
    pub name: String,
    pub intercept: f64,
    pub wake: f64,
    pub estimated_sleep: f64,
    pub coffee: f64,
}

fn default_name() -> String {
    "SleepCalculator".to_string()
}

impl LinearSleepModel {
    pub fn new(intercept: f64, wake: f64, estimated_sleep: f64, coffee: f64) -> Result<Self> {
        let model = Self {
            name: default_name(),
            intercept,
            wake,
            estimated_sleep,
            coffee,
        };
        model.validate()?;
        Ok(model)
    }

    /// Parses a `[model]` coefficient table.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let document: ModelDocument = toml::from_str(content)?;
        document.model.validate()?;
        Ok(document.model)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn bundled() -> Result<Self> {
        Self::from_toml_str(BUNDLED_MODEL)
    }
}

impl Validate for LinearSleepModel {
    fn validate(&self) -> Result<()> {
        validate_finite("model.intercept", self.intercept)?;
        validate_finite("model.wake", self.wake)?;
        validate_finite("model.estimated_sleep", self.estimated_sleep)?;
        validate_finite("model.coffee", self.coffee)?;
        Ok(())
    }
}

impl SleepPredictor for LinearSleepModel {
    fn predict(&self, features: &SleepFeatures) -> Result<f64> {
        let prediction = self.intercept
            + self.wake * features.wake
            + self.estimated_sleep * features.estimated_sleep
            + self.coffee * features.coffee;

        if prediction.is_finite() {
            Ok(prediction)
        } else {
            Err(BedtimeError::invocation(format!(
                "{} cannot predict for {:?}",
                self.name, features
            )))
        }
    }
}

/// Coefficients read from a TOML file each time the model is loaded.
#[derive(Debug, Clone)]
pub struct ModelFile {
    path: PathBuf,
}

impl ModelFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ModelLoader for ModelFile {
    type Model = LinearSleepModel;

    fn load(&self) -> Result<LinearSleepModel> {
        let shown = self.path.display().to_string();
        validate_path("model.path", &shown)?;

        tracing::debug!("Loading sleep model from {}", shown);
        LinearSleepModel::from_file(&self.path).map_err(|e| BedtimeError::ModelLoadError {
            source_name: shown,
            message: e.to_string(),
        })
    }
}

/// The coefficient set compiled into the crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledModel;

impl ModelLoader for BundledModel {
    type Model = LinearSleepModel;

    fn load(&self) -> Result<LinearSleepModel> {
        LinearSleepModel::bundled().map_err(|e| BedtimeError::ModelLoadError {
            source_name: "bundled".to_string(),
            message: e.to_string(),
        })
    }
}

/// Hands out a copy of a predictor that is already built.
#[derive(Debug, Clone)]
pub struct PreloadedModel<P> {
    model: P,
}

impl<P> PreloadedModel<P> {
    pub fn new(model: P) -> Self {
        Self { model }
    }
}

impl<P: SleepPredictor + Clone> ModelLoader for PreloadedModel<P> {
    type Model = P;

    fn load(&self) -> Result<P> {
        Ok(self.model.clone())
    }
}

/// Either the bundled model or one read from disk.
#[derive(Debug, Clone)]
pub enum ModelSource {
    Bundled(BundledModel),
    File(ModelFile),
}

impl ModelSource {
    pub fn from_path(path: Option<&str>) -> Self {
        match path {
            Some(path) => Self::File(ModelFile::new(path)),
            None => Self::Bundled(BundledModel),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Self::Bundled(_) => "bundled".to_string(),
            Self::File(file) => file.path().display().to_string(),
        }
    }
}

impl ModelLoader for ModelSource {
    type Model = LinearSleepModel;

    fn load(&self) -> Result<LinearSleepModel> {
        match self {
            Self::Bundled(bundled) => bundled.load(),
            Self::File(file) => file.load(),
        }
    }
}
