//! Calendar dates with whole-day granularity.
//!
//! A [`CalendarDate`] is a plain (day, month, year) triple. It can hold any
//! triple so that raw user input can be represented and then checked with
//! [`is_valid_date`]. Ordering is lexicographic on (year, month, day).

use crate::error::DateError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Earliest year accepted by [`is_valid_date`]
pub const MIN_YEAR: i32 = 1900;

/// Latest year accepted by [`is_valid_date`]
pub const MAX_YEAR: i32 = 2100;

/// A calendar day, e.g. 01/06/2024
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CalendarDate {
    day: u32,
    month: u32,
    year: i32,
}

impl CalendarDate {
    /// Build a date without validating it
    pub const fn new(day: u32, month: u32, year: i32) -> Self {
        Self { day, month, year }
    }

    /// Build a date, rejecting triples that are not real calendar days
    pub fn try_new(day: u32, month: u32, year: i32) -> Result<Self, DateError> {
        let date = Self::new(day, month, year);
        if is_valid_date(date) {
            Ok(date)
        } else {
            Err(DateError::Invalid(date))
        }
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn is_valid(&self) -> bool {
        is_valid_date(*self)
    }

    /// Convert to a chrono date. Returns `None` for invalid triples.
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        if !self.is_valid() {
            return None;
        }
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }
}

impl Ord for CalendarDate {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.year, self.month, self.day).cmp(&(other.year, other.month, other.day))
    }
}

impl PartialOrd for CalendarDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}/{:04}", self.day, self.month, self.year)
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        use chrono::Datelike;
        Self::new(date.day(), date.month(), date.year())
    }
}

/// Parses `dd mm yyyy`. Separators may be whitespace, `/` or `.`, and `-`
/// between two digits (`01-06-2024`).
///
/// Components must be plain digits; a signed component such as `-1` is
/// malformed. Only the shape is checked here; call [`is_valid_date`] for
/// calendar validity.
impl FromStr for CalendarDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || DateError::Malformed(s.trim().to_string());

        let chars: Vec<char> = s.chars().collect();
        let mut parts = Vec::new();
        let mut current = String::new();
        for (i, &c) in chars.iter().enumerate() {
            let dash_between_digits = c == '-'
                && i > 0
                && chars[i - 1].is_ascii_digit()
                && chars.get(i + 1).is_some_and(|next| next.is_ascii_digit());

            if c.is_whitespace() || matches!(c, '/' | '.') || dash_between_digits {
                if !current.is_empty() {
                    parts.push(std::mem::take(&mut current));
                }
            } else {
                current.push(c);
            }
        }
        if !current.is_empty() {
            parts.push(current);
        }

        if parts
            .iter()
            .any(|part| !part.chars().all(|c| c.is_ascii_digit()))
        {
            return Err(malformed());
        }

        let [day, month, year] = parts.as_slice() else {
            return Err(malformed());
        };

        let day = day.parse::<u32>().map_err(|_| malformed())?;
        let month = month.parse::<u32>().map_err(|_| malformed())?;
        let year = year.parse::<i32>().map_err(|_| malformed())?;

        Ok(Self::new(day, month, year))
    }
}

/// Gregorian leap year rule
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` of `year`; 0 for a month outside 1..=12
pub fn days_in_month(month: u32, year: i32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

pub fn is_valid_date(date: CalendarDate) -> bool {
    if !(MIN_YEAR..=MAX_YEAR).contains(&date.year) {
        return false;
    }
    if !(1..=12).contains(&date.month) {
        return false;
    }
    (1..=days_in_month(date.month, date.year)).contains(&date.day)
}

/// Strict chronological ordering; equal dates are not before each other
pub fn is_before(d1: CalendarDate, d2: CalendarDate) -> bool {
    d1 < d2
}
