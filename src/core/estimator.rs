use crate::domain::model::{BedtimeInputs, EstimationResult, SleepFeatures, SECONDS_PER_DAY};
use crate::domain::ports::{ModelLoader, SleepPredictor, TimeFormatter};
use crate::utils::error::{BedtimeError, Result};
use chrono::{NaiveTime, Timelike};

/// Turns the three form inputs into a bedtime by way of the sleep model.
///
/// Each call loads the model once and asks it for exactly one prediction.
/// Nothing is retried and the inputs are only read.
pub struct BedtimeEstimator<L, F> {
    loader: L,
    formatter: F,
}

impl<L: ModelLoader, F: TimeFormatter> BedtimeEstimator<L, F> {
    pub fn new(loader: L, formatter: F) -> Self {
        Self { loader, formatter }
    }

    /// Bedtime as a time of day, or the error raised by the model.
    pub fn predict_bedtime(&self, inputs: &BedtimeInputs) -> Result<NaiveTime> {
        let features = SleepFeatures::from(inputs);
        tracing::debug!(
            wake = features.wake,
            estimated_sleep = features.estimated_sleep,
            coffee = features.coffee,
            "Invoking sleep model"
        );

        let model = self.loader.load()?;
        let actual_sleep = model.predict(&features)?;
        if !actual_sleep.is_finite() {
            return Err(BedtimeError::invocation(format!(
                "model produced a non-finite prediction: {}",
                actual_sleep
            )));
        }

        tracing::debug!(actual_sleep, "Sleep model prediction");
        Ok(subtract_seconds(inputs.wake_up.as_time(), actual_sleep))
    }

    /// Formatted bedtime, with every model error folded into the fixed
    /// failure message.
    pub fn estimate(&self, inputs: &BedtimeInputs) -> EstimationResult {
        match self.predict_bedtime(inputs) {
            Ok(time) => {
                let text = self.formatter.format_short(time);
                tracing::info!(wake = %inputs.wake_up, bedtime = %text, "Bedtime calculated");
                EstimationResult::BedTime { time, text }
            }
            Err(e) => {
                tracing::warn!(
                    "Bedtime calculation failed: {} (Category: {:?})",
                    e,
                    e.category()
                );
                EstimationResult::failure()
            }
        }
    }
}

/// Moves `time` back by `seconds`, wrapping past midnight into the previous
/// day. Negative `seconds` move forward.
pub fn subtract_seconds(time: NaiveTime, seconds: f64) -> NaiveTime {
    let day = f64::from(SECONDS_PER_DAY);
    let start =
        f64::from(time.num_seconds_from_midnight()) + f64::from(time.nanosecond()) / 1e9;

    let mut offset = (start - seconds).rem_euclid(day);
    // rem_euclid can round up to exactly one day.
    if offset >= day {
        offset = 0.0;
    }

    let whole = offset.floor();
    let nanos = (((offset - whole) * 1e9) as u32).min(999_999_999);
    NaiveTime::from_num_seconds_from_midnight_opt(whole as u32, nanos).unwrap_or(NaiveTime::MIN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::clock::ClockStyle;
    use crate::adapters::linear_model::PreloadedModel;
    use crate::domain::model::{CoffeeCups, SleepAmount, WakeTime};
    use crate::utils::error::BEDTIME_FAILURE_MESSAGE;
    use std::cell::Cell;

    fn inputs(hour: u32, minute: u32, sleep: f64, coffee: u32) -> BedtimeInputs {
        BedtimeInputs {
            wake_up: WakeTime::new(hour, minute).unwrap(),
            sleep_amount: SleepAmount::new(sleep),
            coffee_cups: CoffeeCups::new(coffee),
        }
    }

    fn constant(seconds: f64) -> impl Fn(&SleepFeatures) -> Result<f64> + Clone {
        move |_: &SleepFeatures| Ok(seconds)
    }

    struct BrokenLoader;

    impl ModelLoader for BrokenLoader {
        type Model = fn(&SleepFeatures) -> Result<f64>;

        fn load(&self) -> Result<Self::Model> {
            Err(BedtimeError::ModelLoadError {
                source_name: "SleepCalculator".to_string(),
                message: "model file is corrupt".to_string(),
            })
        }
    }

    #[test]
    fn eight_hours_before_seven_is_eleven_pm() {
        let estimator =
            BedtimeEstimator::new(PreloadedModel::new(constant(28_800.0)), ClockStyle::TwelveHour);
        let result = estimator.estimate(&inputs(7, 0, 8.0, 1));

        assert_eq!(
            result,
            EstimationResult::BedTime {
                time: NaiveTime::from_hms_opt(23, 0, 0).unwrap(),
                text: "11:00 PM".to_string(),
            }
        );
        assert_eq!(result.title(), "Your ideal bedtime is");
    }

    #[test]
    fn short_night_stays_on_same_side_of_midnight() {
        let estimator =
            BedtimeEstimator::new(PreloadedModel::new(constant(19_800.0)), ClockStyle::TwelveHour);
        let result = estimator.estimate(&inputs(6, 30, 6.0, 5));

        assert_eq!(result.message(), "1:00 AM");
    }

    #[test]
    fn model_load_failure_becomes_fixed_message() {
        let estimator = BedtimeEstimator::new(BrokenLoader, ClockStyle::TwelveHour);
        let result = estimator.estimate(&inputs(7, 0, 8.0, 1));

        assert_eq!(
            result,
            EstimationResult::Failure {
                message: BEDTIME_FAILURE_MESSAGE.to_string()
            }
        );
        assert_eq!(result.title(), "Error");
    }

    #[test]
    fn prediction_error_becomes_fixed_message() {
        let failing = |_: &SleepFeatures| -> Result<f64> {
            Err(BedtimeError::invocation("feature out of training range"))
        };
        let estimator = BedtimeEstimator::new(PreloadedModel::new(failing), ClockStyle::TwelveHour);

        let result = estimator.estimate(&inputs(7, 0, 8.0, 1));
        assert!(!result.is_success());
        assert_eq!(result.message(), BEDTIME_FAILURE_MESSAGE);
    }

    #[test]
    fn non_finite_prediction_is_a_failure() {
        let estimator =
            BedtimeEstimator::new(PreloadedModel::new(constant(f64::NAN)), ClockStyle::TwelveHour);
        assert!(estimator.predict_bedtime(&inputs(7, 0, 8.0, 1)).is_err());
        assert!(!estimator.estimate(&inputs(7, 0, 8.0, 1)).is_success());
    }

    #[test]
    fn model_receives_encoded_features_once() {
        let calls = Cell::new(0);
        let seen = Cell::new(None);
        let recording = |features: &SleepFeatures| -> Result<f64> {
            calls.set(calls.get() + 1);
            seen.set(Some(*features));
            Ok(0.0)
        };
        let estimator = BedtimeEstimator::new(PreloadedModel::new(recording), ClockStyle::TwentyFourHour);

        let result = estimator.estimate(&inputs(7, 0, 4.0, 15));

        assert_eq!(calls.get(), 1);
        assert_eq!(
            seen.get(),
            Some(SleepFeatures {
                wake: 25_200.0,
                estimated_sleep: 4.0,
                coffee: 15.0,
            })
        );
        assert_eq!(result.message(), "07:00");
    }

    #[test]
    fn identical_inputs_give_identical_results() {
        let estimator =
            BedtimeEstimator::new(PreloadedModel::new(constant(30_125.0)), ClockStyle::TwelveHour);
        let input = inputs(5, 45, 12.0, 3);
        assert_eq!(estimator.estimate(&input), estimator.estimate(&input));
    }

    #[test]
    fn subtraction_wraps_in_both_directions() {
        let seven = NaiveTime::from_hms_opt(7, 0, 0).unwrap();
        assert_eq!(
            subtract_seconds(seven, 28_800.0),
            NaiveTime::from_hms_opt(23, 0, 0).unwrap()
        );
        assert_eq!(
            subtract_seconds(seven, -18_000.0),
            NaiveTime::from_hms_opt(12, 0, 0).unwrap()
        );
        assert_eq!(
            subtract_seconds(seven, 3.0 * 86_400.0 + 3600.0),
            NaiveTime::from_hms_opt(6, 0, 0).unwrap()
        );
        assert_eq!(subtract_seconds(NaiveTime::MIN, 0.0), NaiveTime::MIN);
    }

    #[test]
    fn fractional_seconds_truncate_in_short_format() {
        let estimator =
            BedtimeEstimator::new(PreloadedModel::new(constant(28_800.4)), ClockStyle::TwelveHour);
        assert_eq!(estimator.estimate(&inputs(7, 0, 8.0, 1)).message(), "10:59 PM");
    }
}
