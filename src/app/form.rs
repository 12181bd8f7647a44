use crate::core::estimator::BedtimeEstimator;
use crate::domain::model::{BedtimeInputs, CoffeeCups, EstimationResult, SleepAmount, WakeTime};
use crate::domain::ports::{ModelLoader, TimeFormatter};
use serde::Serialize;

pub const WAKE_HEADING: &str = "When do you want to wake up?";
pub const SLEEP_HEADING: &str = "How long do you want to sleep?";
pub const COFFEE_HEADING: &str = "How much coffee do you drink?";
pub const BEDTIME_HEADING: &str = "Your bedtime should be:";

/// Result of the last calculation, as shown to the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Alert {
    pub title: String,
    pub message: String,
    pub showing: bool,
}

/// View state of the bedtime screen.
///
/// Owned by whatever presents it. The steppers keep sleep on the
/// quarter-hour grid in 4..=12 and coffee in 1..=15; the estimator only
/// ever reads these values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BedtimeForm {
    inputs: BedtimeInputs,
    alert: Alert,
}

impl BedtimeForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from the given values, pulled into the stepper bounds.
    pub fn with_inputs(wake_up: WakeTime, sleep_hours: f64, coffee_cups: u32) -> Self {
        let mut form = Self::new();
        form.set_wake_up(wake_up);
        form.set_sleep_amount(sleep_hours);
        form.set_coffee_cups(coffee_cups);
        form
    }

    pub fn inputs(&self) -> &BedtimeInputs {
        &self.inputs
    }

    pub fn alert(&self) -> &Alert {
        &self.alert
    }

    pub fn set_wake_up(&mut self, wake_up: WakeTime) {
        self.inputs.wake_up = wake_up;
    }

    pub fn set_sleep_amount(&mut self, hours: f64) {
        self.inputs.sleep_amount = SleepAmount::clamped(hours);
    }

    pub fn set_coffee_cups(&mut self, cups: u32) {
        self.inputs.coffee_cups = CoffeeCups::clamped(cups);
    }

    pub fn increment_sleep(&mut self) {
        self.set_sleep_amount(self.inputs.sleep_amount.hours() + SleepAmount::STEP);
    }

    pub fn decrement_sleep(&mut self) {
        self.set_sleep_amount(self.inputs.sleep_amount.hours() - SleepAmount::STEP);
    }

    pub fn increment_coffee(&mut self) {
        self.set_coffee_cups(self.inputs.coffee_cups.count().saturating_add(1));
    }

    pub fn decrement_coffee(&mut self) {
        self.set_coffee_cups(self.inputs.coffee_cups.count().saturating_sub(1));
    }

    pub fn sleep_label(&self) -> String {
        format!("{} hours", self.inputs.sleep_amount)
    }

    pub fn coffee_label(&self) -> String {
        self.inputs.coffee_cups.to_string()
    }

    /// Runs one estimation and shows its outcome.
    pub fn calculate<L, F>(&mut self, estimator: &BedtimeEstimator<L, F>) -> EstimationResult
    where
        L: ModelLoader,
        F: TimeFormatter,
    {
        let result = estimator.estimate(&self.inputs);
        self.alert = Alert {
            title: result.title().to_string(),
            message: result.message().to_string(),
            showing: true,
        };
        result
    }

    pub fn dismiss_alert(&mut self) {
        self.alert.showing = false;
    }
}
