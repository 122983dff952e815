//! Shared constructor helpers for tests.
//!
//! These panic on invalid input, which keeps test bodies focused on the
//! behavior under test instead of on unwrapping.

use crate::{CalendarStamp, ClockTime, Day, Hour, Minute, Month, Second, Year};

pub fn year(value: u16) -> Year {
    Year::new(value).unwrap()
}

pub fn month(value: u8) -> Month {
    Month::new(value).unwrap()
}

pub fn day(year_value: u16, month_value: u8, value: u8) -> Day {
    Day::new(year(year_value), month(month_value), value).unwrap()
}

pub fn hour(value: u8) -> Hour {
    Hour::new(value).unwrap()
}

pub fn minute(value: u8) -> Minute {
    Minute::new(value).unwrap()
}

pub fn second(value: u8) -> Second {
    Second::new(value).unwrap()
}

pub fn stamp(year_value: u16, month_value: u8, day_value: u8) -> CalendarStamp {
    CalendarStamp::from_parts(year_value, month_value, day_value).unwrap()
}

pub fn clock(
    hour_value: Option<u8>,
    minute_value: Option<u8>,
    second_value: Option<u8>,
) -> ClockTime {
    ClockTime::from_parts(hour_value, minute_value, second_value).unwrap()
}
