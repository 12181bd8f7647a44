use crate::domain::model::SleepFeatures;
use crate::utils::error::Result;
use chrono::NaiveTime;

/// A trained regressor that predicts how long the user will actually sleep,
/// in seconds, from the three encoded features.
pub trait SleepPredictor {
    fn predict(&self, features: &SleepFeatures) -> Result<f64>;
}

impl<F> SleepPredictor for F
where
    F: Fn(&SleepFeatures) -> Result<f64>,
{
    fn predict(&self, features: &SleepFeatures) -> Result<f64> {
        self(features)
    }
}

/// Builds a predictor. Construction is fallible and happens once per
/// estimation.
pub trait ModelLoader {
    type Model: SleepPredictor;

    fn load(&self) -> Result<Self::Model>;
}

/// Renders a time of day as short localized text, without a date.
pub trait TimeFormatter {
    fn format_short(&self, time: NaiveTime) -> String;
}
