use crate::clock::{Period, TimeError};
use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, DIAL_HOURS, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE,
    LEAP_YEAR_CYCLE, MAX_HOUR, MAX_MINUTE, MAX_MONTH, MAX_SECOND, MAX_YEAR, NOON_HOUR,
};
use crate::prelude::*;
use crate::ParseError;
use serde::{Deserialize, Serialize};
use std::num::NonZeroU16;
use std::num::NonZeroU8;

/// A year value guaranteed to be in the range `1..=MAX_YEAR` (1..=9999).
/// Uses `NonZeroU16` internally, so 0 is not a valid year, and every year
/// renders at exactly four digits in a calendar token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year, validating that it's non-zero and <= `MAX_YEAR`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` if the value is 0 or > `MAX_YEAR`.
    pub fn new(value: u16) -> Result<Self, ParseError> {
        NonZeroU16::new(value)
            .filter(|year| year.get() <= MAX_YEAR)
            .map(Self)
            .ok_or(ParseError::InvalidYear(value))
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }
}

impl TryFrom<u16> for Year {
    type Error = ParseError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.get()
    }
}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12).
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, ParseError> {
        NonZeroU8::new(value)
            .filter(|month| month.get() <= MAX_MONTH)
            .map(Self)
            .ok_or(ParseError::InvalidMonth(value))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Month {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.get()
    }
}

/// A day value guaranteed to be valid for a given year and month.
/// Uses `NonZeroU8` internally, so 0 is not a valid day. Construction
/// requires the typed year and month, so a day can never be validated
/// against the wrong month length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating it against the month length
    /// (leap-year aware).
    ///
    /// # Errors
    /// Returns `ParseError::InvalidDay` if the value is 0 or past the end
    /// of the given month.
    pub fn new(year: Year, month: Month, value: u8) -> Result<Self, ParseError> {
        let limit = days_in_month(year, month);
        NonZeroU8::new(value)
            .filter(|day| day.get() <= limit)
            .map(Self)
            .ok_or(ParseError::InvalidDay {
                year: year.get(),
                month: month.get(),
                day: value,
            })
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.get()
    }
}

/// An hour on the 24-hour clock, in the range `0..=MAX_HOUR` (0..=23).
/// Midnight is hour 0, so unlike the calendar components this is a plain
/// `u8` wrapper rather than a `NonZero` type.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct Hour(u8);

impl Hour {
    /// Creates a new Hour, validating that it's <= `MAX_HOUR`
    ///
    /// # Errors
    /// Returns `TimeError::InvalidHour` if the value is > `MAX_HOUR`.
    pub fn new(value: u8) -> Result<Self, TimeError> {
        if value > MAX_HOUR {
            return Err(TimeError::InvalidHour(value));
        }
        Ok(Self(value))
    }

    /// Returns the hour value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Value shown on a 12-hour dial: `1..=12`, with hours 0 and 12 both
    /// shown as 12.
    pub const fn to_dial(self) -> u8 {
        match self.0 % DIAL_HOURS {
            0 => DIAL_HOURS,
            dial => dial,
        }
    }

    /// Reconstructs a 24-hour value from a dial value and its period.
    /// Dial 12 maps back to hour 0 under AM and hour 12 under PM.
    ///
    /// # Errors
    /// Returns `TimeError::InvalidDialHour` if `dial` is outside `1..=12`.
    pub fn from_dial(dial: u8, period: Period) -> Result<Self, TimeError> {
        if dial == 0 || dial > DIAL_HOURS {
            return Err(TimeError::InvalidDialHour(dial));
        }
        let hour = match period {
            Period::Am => dial % DIAL_HOURS,
            Period::Pm => dial % DIAL_HOURS + NOON_HOUR,
        };
        Ok(Self(hour))
    }

    /// Period this hour falls in: AM before noon, PM from noon on.
    pub const fn period(self) -> Period {
        if self.0 < NOON_HOUR {
            Period::Am
        } else {
            Period::Pm
        }
    }
}

impl TryFrom<u8> for Hour {
    type Error = TimeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Hour> for u8 {
    fn from(hour: Hour) -> Self {
        hour.get()
    }
}

/// A minute value in the range `0..=MAX_MINUTE` (0..=59).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct Minute(u8);

impl Minute {
    /// Creates a new Minute, validating that it's <= `MAX_MINUTE`
    ///
    /// # Errors
    /// Returns `TimeError::InvalidMinute` if the value is > `MAX_MINUTE`.
    pub fn new(value: u8) -> Result<Self, TimeError> {
        if value > MAX_MINUTE {
            return Err(TimeError::InvalidMinute(value));
        }
        Ok(Self(value))
    }

    /// Returns the minute value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Minute {
    type Error = TimeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Minute> for u8 {
    fn from(minute: Minute) -> Self {
        minute.get()
    }
}

/// A second value in the range `0..=MAX_SECOND` (0..=59).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct Second(u8);

impl Second {
    /// Creates a new Second, validating that it's <= `MAX_SECOND`
    ///
    /// # Errors
    /// Returns `TimeError::InvalidSecond` if the value is > `MAX_SECOND`.
    pub fn new(value: u8) -> Result<Self, TimeError> {
        if value > MAX_SECOND {
            return Err(TimeError::InvalidSecond(value));
        }
        Ok(Self(value))
    }

    /// Returns the second value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Second {
    type Error = TimeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Second> for u8 {
    fn from(second: Second) -> Self {
        second.get()
    }
}

// Helper functions

pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: Year, month: Month) -> u8 {
    if month.get() == FEBRUARY && is_leap_year(year.get()) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month.get() as usize]
    }
}
