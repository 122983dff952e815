use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::consts::{PLACEHOLDER, TIME_SEPARATOR};
use crate::prelude::*;
use crate::types::{Hour, Minute, Second};

/// Error type for clock value operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimeError {
    /// Time string with no content.
    #[error("Empty time string")]
    EmptyInput,

    /// Non-numeric token or too many separators.
    #[error("Invalid time format: {0}")]
    InvalidFormat(String),

    /// Hour outside the 24-hour clock.
    #[error("Invalid hour: {0} (must be 0-23)")]
    InvalidHour(u8),

    /// Minute outside a clock face.
    #[error("Invalid minute: {0} (must be 0-59)")]
    InvalidMinute(u8),

    /// Second outside a clock face.
    #[error("Invalid second: {0} (must be 0-59)")]
    InvalidSecond(u8),

    /// Dial value outside the 12-hour dial.
    #[error("Invalid dial hour: {0} (must be 1-12)")]
    InvalidDialHour(u8),

    /// Period string other than `am` / `pm`.
    #[error("Invalid period: {0} (must be am or pm)")]
    InvalidPeriod(String),

    /// Hour format string other than `ampm` / `24hr`.
    #[error("Unknown hour format: {0} (must be ampm or 24hr)")]
    UnknownHourFormat(String),
}

/// Half of the 12-hour clock day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Period {
    /// Midnight up to (excluding) noon
    Am,
    /// Noon up to (excluding) midnight
    Pm,
}

impl Period {
    /// Button label for this period
    pub const fn label(self) -> &'static str {
        match self {
            Self::Am => "AM",
            Self::Pm => "PM",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Period {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "am" => Ok(Self::Am),
            "pm" => Ok(Self::Pm),
            other => Err(TimeError::InvalidPeriod(other.to_owned())),
        }
    }
}

/// How hours are displayed: on a 12-hour dial with AM/PM periods, or on
/// the 24-hour clock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display)]
pub enum HourFormat {
    /// 12-hour dial with AM/PM periods
    #[default]
    #[display(fmt = "ampm")]
    AmPm,
    /// 24-hour clock
    #[display(fmt = "24hr")]
    H24,
}

impl FromStr for HourFormat {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "ampm" => Ok(Self::AmPm),
            "24hr" => Ok(Self::H24),
            other => Err(TimeError::UnknownHourFormat(other.to_owned())),
        }
    }
}

/// The clock field a picker title is displaying or selecting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    Hour,
    Minute,
    Second,
}

/// A clock reading with independently optional fields. A fresh picker has
/// no fields set; fields fill in as the user selects them, and unset
/// fields display as the placeholder.
///
/// Serializes as an object with the set fields only (`{"hour":5}`), the
/// same shape the values arrive in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClockTime {
    #[serde(skip_serializing_if = "Option::is_none")]
    hour: Option<Hour>,
    #[serde(skip_serializing_if = "Option::is_none")]
    minute: Option<Minute>,
    #[serde(skip_serializing_if = "Option::is_none")]
    second: Option<Second>,
}

impl ClockTime {
    /// Creates a clock reading with no fields set
    pub const fn new() -> Self {
        Self {
            hour: None,
            minute: None,
            second: None,
        }
    }

    /// Sets the hour field
    pub const fn with_hour(mut self, hour: Hour) -> Self {
        self.hour = Some(hour);
        self
    }

    /// Sets the minute field
    pub const fn with_minute(mut self, minute: Minute) -> Self {
        self.minute = Some(minute);
        self
    }

    /// Sets the second field
    pub const fn with_second(mut self, second: Second) -> Self {
        self.second = Some(second);
        self
    }

    /// Creates a clock reading from raw optional values, validating each
    /// one that is present.
    ///
    /// # Errors
    /// Returns the corresponding `TimeError` for the first out-of-range
    /// field.
    pub fn from_parts(
        hour: Option<u8>,
        minute: Option<u8>,
        second: Option<u8>,
    ) -> Result<Self, TimeError> {
        Ok(Self {
            hour: hour.map(Hour::new).transpose()?,
            minute: minute.map(Minute::new).transpose()?,
            second: second.map(Second::new).transpose()?,
        })
    }

    /// Returns the hour field if set
    pub const fn hour(&self) -> Option<Hour> {
        self.hour
    }

    /// Returns the minute field if set
    pub const fn minute(&self) -> Option<Minute> {
        self.minute
    }

    /// Returns the second field if set
    pub const fn second(&self) -> Option<Second> {
        self.second
    }

    /// Returns true if no field is set
    pub const fn is_empty(&self) -> bool {
        self.hour.is_none() && self.minute.is_none() && self.second.is_none()
    }

    /// Text for one field of a picker title. An unset field renders as the
    /// placeholder; a set hour renders as the unpadded dial value under
    /// [`HourFormat::AmPm`]; everything else is two-digit zero-padded.
    pub fn display(&self, unit: TimeUnit, format: HourFormat) -> String {
        match (unit, format) {
            (TimeUnit::Hour, HourFormat::AmPm) => self
                .hour
                .map_or_else(|| PLACEHOLDER.to_owned(), |hour| hour.to_dial().to_string()),
            (TimeUnit::Hour, HourFormat::H24) => pad_or_placeholder(self.hour.map(Hour::get)),
            (TimeUnit::Minute, _) => pad_or_placeholder(self.minute.map(Minute::get)),
            (TimeUnit::Second, _) => pad_or_placeholder(self.second.map(Second::get)),
        }
    }

    /// Full title text: hour and minute joined by the clock separator,
    /// plus the second field when `with_seconds` is set.
    pub fn title(&self, format: HourFormat, with_seconds: bool) -> String {
        let hour = self.display(TimeUnit::Hour, format);
        let minute = self.display(TimeUnit::Minute, format);
        let mut title = format!("{hour}{TIME_SEPARATOR}{minute}");
        if with_seconds {
            title.push(TIME_SEPARATOR);
            title.push_str(&self.display(TimeUnit::Second, format));
        }
        title
    }

    /// AM/PM period of the hour field, if set. Drives which period button
    /// is highlighted.
    pub fn period(&self) -> Option<Period> {
        self.hour.map(Hour::period)
    }
}

impl fmt::Display for ClockTime {
    /// 24-hour title form; the second field appears only when set.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title(HourFormat::H24, self.second.is_some()))
    }
}

impl FromStr for ClockTime {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(TimeError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(TIME_SEPARATOR).map(str::trim).collect();
        if parts.len() > 3 {
            return Err(TimeError::InvalidFormat(format!(
                "Too many {TIME_SEPARATOR} separators: expected 0-2, found {}",
                parts.len() - 1
            )));
        }

        let mut time = Self::new().with_hour(Hour::new(parse_u8(parts[0])?)?);
        if let Some(minute) = parts.get(1) {
            time = time.with_minute(Minute::new(parse_u8(minute)?)?);
        }
        if let Some(second) = parts.get(2) {
            time = time.with_second(Second::new(parse_u8(second)?)?);
        }
        Ok(time)
    }
}

/// Field text for a possibly-absent clock reading: the placeholder when no
/// time is selected at all, the field display otherwise.
pub fn display_field(time: Option<&ClockTime>, unit: TimeUnit, format: HourFormat) -> String {
    time.map_or_else(
        || PLACEHOLDER.to_owned(),
        |time| time.display(unit, format),
    )
}

/// Helper to parse u8 with better error messages
fn parse_u8(s: &str) -> Result<u8, TimeError> {
    s.parse::<u8>()
        .map_err(|_| TimeError::InvalidFormat(s.to_owned()))
}

fn pad_or_placeholder(value: Option<u8>) -> String {
    value.map_or_else(|| PLACEHOLDER.to_owned(), |value| format!("{value:02}"))
}
