use crate::utils::error::{BedtimeError, Result};
use crate::utils::validation::{validate_range, validate_step};
use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const SECONDS_PER_DAY: u32 = 86_400;

/// Time of day the user wants to wake up. Only hour and minute are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WakeTime {
    hour: u32,
    minute: u32,
}

impl WakeTime {
    pub fn new(hour: u32, minute: u32) -> Result<Self> {
        validate_range("wake hour", hour, 0, 23)?;
        validate_range("wake minute", minute, 0, 59)?;
        Ok(Self { hour, minute })
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    /// Seconds since midnight, the encoding the model is trained on.
    pub fn total_seconds(&self) -> u32 {
        self.hour * 3600 + self.minute * 60
    }

    pub fn as_time(&self) -> NaiveTime {
        NaiveTime::from_hms_opt(self.hour, self.minute, 0).unwrap_or(NaiveTime::MIN)
    }
}

impl Default for WakeTime {
    // Midnight, not 07:00. Existing behaviour; 07:00 was probably the intent.
    fn default() -> Self {
        Self { hour: 0, minute: 0 }
    }
}

impl From<NaiveTime> for WakeTime {
    fn from(time: NaiveTime) -> Self {
        Self {
            hour: time.hour(),
            minute: time.minute(),
        }
    }
}

impl FromStr for WakeTime {
    type Err = BedtimeError;

    fn from_str(s: &str) -> Result<Self> {
        let time = NaiveTime::parse_from_str(s.trim(), "%H:%M").map_err(|e| {
            BedtimeError::invalid_input("wake time", s, format!("expected HH:MM ({})", e))
        })?;
        Ok(time.into())
    }
}

impl TryFrom<String> for WakeTime {
    type Error = BedtimeError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<WakeTime> for String {
    fn from(value: WakeTime) -> Self {
        value.to_string()
    }
}

impl fmt::Display for WakeTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// Desired hours of sleep. Holds any real value; the form keeps it on the
/// quarter-hour grid between [`SleepAmount::MIN`] and [`SleepAmount::MAX`].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SleepAmount(f64);

impl SleepAmount {
    pub const MIN: f64 = 4.0;
    pub const MAX: f64 = 12.0;
    pub const STEP: f64 = 0.25;
    pub const DEFAULT: f64 = 8.0;

    pub fn new(hours: f64) -> Self {
        Self(hours)
    }

    /// Accepts only values a stepper could have produced.
    pub fn checked(hours: f64) -> Result<Self> {
        validate_range("sleep amount", hours, Self::MIN, Self::MAX)?;
        validate_step("sleep amount", hours, Self::MIN, Self::STEP)?;
        Ok(Self(hours))
    }

    /// Snaps to the nearest quarter hour inside the allowed range.
    pub fn clamped(hours: f64) -> Self {
        if hours.is_nan() {
            return Self(Self::DEFAULT);
        }
        let snapped = (hours / Self::STEP).round() * Self::STEP;
        Self(snapped.clamp(Self::MIN, Self::MAX))
    }

    pub fn hours(&self) -> f64 {
        self.0
    }
}

impl Default for SleepAmount {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl fmt::Display for SleepAmount {
    // Shortest decimal form: 8 -> "8", 8.25 -> "8.25".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Cups of coffee per day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CoffeeCups(u32);

impl CoffeeCups {
    pub const MIN: u32 = 1;
    pub const MAX: u32 = 15;

    pub fn new(cups: u32) -> Self {
        Self(cups)
    }

    pub fn checked(cups: u32) -> Result<Self> {
        validate_range("coffee cups", cups, Self::MIN, Self::MAX)?;
        Ok(Self(cups))
    }

    pub fn clamped(cups: u32) -> Self {
        Self(cups.clamp(Self::MIN, Self::MAX))
    }

    pub fn count(&self) -> u32 {
        self.0
    }
}

impl Default for CoffeeCups {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl fmt::Display for CoffeeCups {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 1 {
            write!(f, "1 Cup")
        } else {
            write!(f, "{} Cups", self.0)
        }
    }
}

/// The three inputs of one estimation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BedtimeInputs {
    pub wake_up: WakeTime,
    pub sleep_amount: SleepAmount,
    pub coffee_cups: CoffeeCups,
}

/// Feature vector in the encoding the sleep model expects.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SleepFeatures {
    /// Seconds since midnight.
    pub wake: f64,
    /// Hours.
    pub estimated_sleep: f64,
    pub coffee: f64,
}

impl From<&BedtimeInputs> for SleepFeatures {
    fn from(inputs: &BedtimeInputs) -> Self {
        Self {
            wake: f64::from(inputs.wake_up.total_seconds()),
            estimated_sleep: inputs.sleep_amount.hours(),
            coffee: f64::from(inputs.coffee_cups.count()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum EstimationResult {
    BedTime { time: NaiveTime, text: String },
    Failure { message: String },
}

impl EstimationResult {
    pub const SUCCESS_TITLE: &'static str = "Your ideal bedtime is";
    pub const FAILURE_TITLE: &'static str = "Error";

    pub fn failure() -> Self {
        Self::Failure {
            message: crate::utils::error::BEDTIME_FAILURE_MESSAGE.to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::BedTime { .. })
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::BedTime { .. } => Self::SUCCESS_TITLE,
            Self::Failure { .. } => Self::FAILURE_TITLE,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::BedTime { text, .. } => text,
            Self::Failure { message } => message,
        }
    }
}
