use crate::domain::ports::TimeFormatter;
use crate::utils::error::{BedtimeError, Result};
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How a time of day is written: "11:00 PM" or "23:00".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClockStyle {
    #[serde(rename = "12h")]
    TwelveHour,
    #[serde(rename = "24h")]
    TwentyFourHour,
}

const LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_TIME", "LANG"];

impl ClockStyle {
    /// Picks the clock a locale tag such as `en_US.UTF-8` or `de-DE` uses.
    pub fn from_locale(tag: &str) -> Self {
        let tag = tag.split(['.', '@']).next().unwrap_or_default().replace('-', "_");
        let mut parts = tag.split('_');
        let language = parts.next().unwrap_or_default().to_ascii_lowercase();
        let region = parts.next().unwrap_or_default().to_ascii_uppercase();

        match (language.as_str(), region.as_str()) {
            ("en", "US" | "CA" | "AU" | "NZ" | "PH" | "IN" | "") => Self::TwelveHour,
            ("es", "US" | "MX" | "CO") => Self::TwelveHour,
            ("hi" | "ar" | "ko" | "bn" | "ur", _) => Self::TwelveHour,
            _ => Self::TwentyFourHour,
        }
    }

    /// Reads the locale from the environment; 12-hour if none is set.
    pub fn detect() -> Self {
        Self::detect_with(|key| std::env::var(key).ok())
    }

    pub fn detect_with<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        LOCALE_VARS
            .iter()
            .filter_map(|&key| lookup(key))
            .find(|value| !value.trim().is_empty())
            .map(|value| Self::from_locale(&value))
            .unwrap_or(Self::TwelveHour)
    }

    /// `"12h"`, `"24h"`, or `"auto"` for locale detection.
    pub fn resolve(setting: &str) -> Result<Self> {
        match setting.trim().to_ascii_lowercase().as_str() {
            "auto" | "" => Ok(Self::detect()),
            other => other.parse(),
        }
    }
}

impl FromStr for ClockStyle {
    type Err = BedtimeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "12h" | "12" => Ok(Self::TwelveHour),
            "24h" | "24" => Ok(Self::TwentyFourHour),
            other => Err(BedtimeError::invalid_input(
                "clock",
                other,
                "expected 12h, 24h or auto",
            )),
        }
    }
}

impl TimeFormatter for ClockStyle {
    fn format_short(&self, time: NaiveTime) -> String {
        match self {
            Self::TwelveHour => time.format("%-I:%M %p").to_string(),
            Self::TwentyFourHour => time.format("%H:%M").to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    #[test]
    fn twelve_hour_format() {
        let clock = ClockStyle::TwelveHour;
        assert_eq!(clock.format_short(at(23, 0)), "11:00 PM");
        assert_eq!(clock.format_short(at(1, 0)), "1:00 AM");
        assert_eq!(clock.format_short(at(0, 15)), "12:15 AM");
        assert_eq!(clock.format_short(at(12, 5)), "12:05 PM");
    }

    #[test]
    fn twenty_four_hour_format() {
        let clock = ClockStyle::TwentyFourHour;
        assert_eq!(clock.format_short(at(23, 0)), "23:00");
        assert_eq!(clock.format_short(at(1, 0)), "01:00");
    }

    #[test]
    fn locale_tags() {
        assert_eq!(ClockStyle::from_locale("en_US.UTF-8"), ClockStyle::TwelveHour);
        assert_eq!(ClockStyle::from_locale("en-AU"), ClockStyle::TwelveHour);
        assert_eq!(ClockStyle::from_locale("en_GB.UTF-8"), ClockStyle::TwentyFourHour);
        assert_eq!(ClockStyle::from_locale("de_DE@euro"), ClockStyle::TwentyFourHour);
        assert_eq!(ClockStyle::from_locale("C"), ClockStyle::TwentyFourHour);
        assert_eq!(ClockStyle::from_locale("ko_KR"), ClockStyle::TwelveHour);
    }

    #[test]
    fn detection_order() {
        let env = |key: &str| match key {
            "LC_ALL" => Some(String::new()),
            "LC_TIME" => Some("fr_FR.UTF-8".to_string()),
            "LANG" => Some("en_US.UTF-8".to_string()),
            _ => None,
        };
        assert_eq!(ClockStyle::detect_with(env), ClockStyle::TwentyFourHour);
        assert_eq!(ClockStyle::detect_with(|_| None), ClockStyle::TwelveHour);
    }

    #[test]
    fn parse_settings() {
        assert_eq!("24h".parse::<ClockStyle>().unwrap(), ClockStyle::TwentyFourHour);
        assert_eq!(ClockStyle::resolve("12H").unwrap(), ClockStyle::TwelveHour);
        assert!("noon".parse::<ClockStyle>().is_err());
    }
}
