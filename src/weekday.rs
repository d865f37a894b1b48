//! Weekday codes and workweek windows.
//!
//! The scheduling tables store weekdays as two-letter codes in a fixed,
//! Sunday-first order (`SU MO TU WE TH FR SA`, indexed 0–6). Everything that
//! turns a calendar date into "which tasks are due today" goes through here.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Duration, NaiveDate};
use thiserror::Error;

/// Two-letter weekday code, Sunday-indexed (0 = SU .. 6 = SA).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayCode {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

/// All codes in index order. Order is significant: index 0 is Sunday.
pub const DAY_CODES: [DayCode; 7] = [
    DayCode::Sunday,
    DayCode::Monday,
    DayCode::Tuesday,
    DayCode::Wednesday,
    DayCode::Thursday,
    DayCode::Friday,
    DayCode::Saturday,
];

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown weekday code: {0:?}")]
pub struct ParseDayCodeError(String);

impl DayCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sunday => "SU",
            Self::Monday => "MO",
            Self::Tuesday => "TU",
            Self::Wednesday => "WE",
            Self::Thursday => "TH",
            Self::Friday => "FR",
            Self::Saturday => "SA",
        }
    }

    /// Sunday-first index, 0–6.
    pub fn index(&self) -> usize {
        match self {
            Self::Sunday => 0,
            Self::Monday => 1,
            Self::Tuesday => 2,
            Self::Wednesday => 3,
            Self::Thursday => 4,
            Self::Friday => 5,
            Self::Saturday => 6,
        }
    }

    /// Code for a calendar date.
    pub fn for_date(date: NaiveDate) -> DayCode {
        DAY_CODES[date.weekday().num_days_from_sunday() as usize]
    }

    /// Code for an ISO `YYYY-MM-DD` date key; `None` if the key is unparseable.
    pub fn for_date_key(date_key: &str) -> Option<DayCode> {
        parse_date_key(date_key).map(Self::for_date)
    }
}

impl fmt::Display for DayCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DayCode {
    type Err = ParseDayCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SU" => Ok(Self::Sunday),
            "MO" => Ok(Self::Monday),
            "TU" => Ok(Self::Tuesday),
            "WE" => Ok(Self::Wednesday),
            "TH" => Ok(Self::Thursday),
            "FR" => Ok(Self::Friday),
            "SA" => Ok(Self::Saturday),
            other => Err(ParseDayCodeError(other.to_string())),
        }
    }
}

/// Parse an ISO `YYYY-MM-DD` date key. `None` on any malformed input.
pub fn parse_date_key(date_key: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date_key, "%Y-%m-%d").ok()
}

/// Format a date as the ISO date key used throughout the agenda tables.
/// Lexicographic order on these keys equals chronological order.
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// The Monday–Friday date keys of the week containing `reference`.
///
/// This is the rolling workweek window the agenda picker shows; Sunday counts
/// as the tail of the previous workweek.
pub fn workweek_date_keys(reference: NaiveDate) -> Vec<String> {
    let monday = reference - Duration::days(reference.weekday().num_days_from_monday() as i64);
    (0..5)
        .map(|offset| date_key(monday + Duration::days(offset)))
        .collect()
}
