mod clock;
mod consts;
mod prelude;
#[cfg(test)]
mod test_utils;
mod types;

pub use clock::{ClockTime, HourFormat, Period, TimeError, TimeUnit, display_field};
pub use consts::*;
pub use types::{Day, Hour, Minute, Month, Second, Year, days_in_month, is_leap_year};

use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How much of a calendar stamp to render: a bare year, a year-month
/// pair, or a full date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Granularity {
    /// `YYYY`
    #[display(fmt = "year")]
    Year,
    /// `YYYY-MM`
    #[display(fmt = "month")]
    Month,
    /// `YYYY-MM-DD`
    #[display(fmt = "date")]
    Date,
}

impl Granularity {
    /// Rendered width of a token at this granularity: 4, 7, or 10.
    pub const fn width(self) -> usize {
        match self {
            Self::Year => YEAR_WIDTH,
            Self::Month => MONTH_WIDTH,
            Self::Date => DATE_WIDTH,
        }
    }
}

impl FromStr for Granularity {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "year" => Ok(Self::Year),
            "month" => Ok(Self::Month),
            "date" => Ok(Self::Date),
            other => Err(ParseError::InvalidGranularity(other.to_owned())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be 1-{})", "_0", MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: u16, month: u8, day: u8 },
    #[display(fmt = "Unknown granularity: {_0} (must be year, month, or date)")]
    InvalidGranularity(String),
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

/// A calendar value with all three components pinned down.
/// Parsing fills an omitted month or day with 1, so any well-formed
/// `YYYY[-M[-D]]` input yields a stamp that renders at every
/// [`Granularity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
pub struct CalendarStamp {
    year: Year,
    month: Month,
    day: Day,
}

impl CalendarStamp {
    /// Creates a new stamp (types are already validated)
    pub const fn new(year: Year, month: Month, day: Day) -> Self {
        Self { year, month, day }
    }

    /// Creates a stamp from raw component values, validating each one.
    ///
    /// # Errors
    /// Returns the corresponding `ParseError` for the first out-of-range
    /// component.
    pub fn from_parts(year: u16, month: u8, day: u8) -> Result<Self, ParseError> {
        let year = Year::new(year)?;
        let month = Month::new(month)?;
        let day = Day::new(year, month, day)?;
        Ok(Self { year, month, day })
    }

    /// Returns the year component (as u16 for convenience)
    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    /// Returns the month component (as u8 for convenience)
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the day component (as u8 for convenience)
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// Returns the Year type
    pub const fn year_typed(&self) -> Year {
        self.year
    }

    /// Returns the Month type
    pub const fn month_typed(&self) -> Month {
        self.month
    }

    /// Returns the Day type
    pub const fn day_typed(&self) -> Day {
        self.day
    }

    /// Renders the stamp at the requested granularity by truncating the
    /// canonical `YYYY-MM-DD` text to the granularity's width. Components
    /// are fixed-width, so the cut always lands on a separator boundary.
    pub fn render(&self, granularity: Granularity) -> String {
        let mut text = self.to_string();
        text.truncate(granularity.width());
        text
    }
}

impl FromStr for CalendarStamp {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        // YYYY or YYYY-MM or YYYY-MM-DD, components possibly unpadded
        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
        if parts.len() > 3 {
            return Err(ParseError::InvalidFormat(format!(
                "Too many {DATE_SEPARATOR} separators: expected 0-2, found {}",
                parts.len() - 1
            )));
        }

        let year = parse_u16(parts[0])?;
        let month = parts
            .get(1)
            .map(|part| parse_u8(part))
            .transpose()?
            .unwrap_or(JANUARY);
        let day = parts
            .get(2)
            .map(|part| parse_u8(part))
            .transpose()?
            .unwrap_or(MIN_DAY);

        Self::from_parts(year, month, day)
    }
}

/// Normalizes a loose `YYYY[-M[-D]]` string to a fixed-width calendar
/// token: two-digit month/day, four-digit year, truncated to the
/// granularity's width. An omitted month or day reads as 1, so
/// `normalize("2024", Granularity::Date)` yields `"2024-01-01"`.
///
/// # Errors
/// Returns a `ParseError` for empty input, non-numeric tokens, too many
/// separators, or out-of-range components.
pub fn normalize(input: &str, granularity: Granularity) -> Result<String, ParseError> {
    Ok(input.parse::<CalendarStamp>()?.render(granularity))
}

/// Helper to parse u16 with better error messages
fn parse_u16(s: &str) -> Result<u16, ParseError> {
    s.parse::<u16>()
        .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
}

/// Helper to parse u8 with better error messages
fn parse_u8(s: &str) -> Result<u8, ParseError> {
    s.parse::<u8>()
        .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
}

impl Serialize for CalendarStamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for CalendarStamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
