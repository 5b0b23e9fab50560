//! Service time handling.
//!
//! The scheduler works in whole minutes since midnight (0-1439), which is how
//! timetable data arrives. This module provides a validated newtype for these
//! times plus `HH:MM` parsing and display.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of minutes in a service day.
pub const MINUTES_PER_DAY: u16 = 1440;

/// Error returned when constructing or parsing an invalid time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A time of day in whole minutes since midnight.
///
/// Always in `0..1440` by construction, so arithmetic and ordering on the
/// raw minute count are safe. Ordering is chronological, which is what the
/// dispatch heap keys on.
///
/// # Examples
///
/// ```
/// use transit_engine::domain::ServiceTime;
///
/// let nine = ServiceTime::parse_hhmm("09:00").unwrap();
/// assert_eq!(nine.minutes(), 540);
/// assert_eq!(nine.to_string(), "09:00");
///
/// // Out-of-range minute counts are rejected
/// assert!(ServiceTime::new(1440).is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct ServiceTime(u16);

impl ServiceTime {
    /// Create a time from minutes since midnight.
    pub fn new(minutes: u16) -> Result<Self, TimeError> {
        if minutes >= MINUTES_PER_DAY {
            return Err(TimeError::new("minutes must be 0-1439"));
        }
        Ok(Self(minutes))
    }

    /// Create a time from hour and minute components.
    pub fn from_hm(hour: u16, minute: u16) -> Result<Self, TimeError> {
        if hour > 23 {
            return Err(TimeError::new("hour must be 0-23"));
        }
        if minute > 59 {
            return Err(TimeError::new("minute must be 0-59"));
        }
        Ok(Self(hour * 60 + minute))
    }

    /// Parse a time from `HH:MM` format.
    ///
    /// # Examples
    ///
    /// ```
    /// use transit_engine::domain::ServiceTime;
    ///
    /// assert!(ServiceTime::parse_hhmm("00:00").is_ok());
    /// assert!(ServiceTime::parse_hhmm("23:59").is_ok());
    ///
    /// assert!(ServiceTime::parse_hhmm("900").is_err());
    /// assert!(ServiceTime::parse_hhmm("24:00").is_err());
    /// assert!(ServiceTime::parse_hhmm("09:60").is_err());
    /// ```
    pub fn parse_hhmm(s: &str) -> Result<Self, TimeError> {
        // Must be exactly 5 characters: HH:MM
        if s.len() != 5 {
            return Err(TimeError::new("expected HH:MM format"));
        }

        let bytes = s.as_bytes();

        if bytes[2] != b':' {
            return Err(TimeError::new("expected colon at position 2"));
        }

        let hour =
            parse_two_digits(&bytes[0..2]).ok_or_else(|| TimeError::new("invalid hour digits"))?;
        let minute = parse_two_digits(&bytes[3..5])
            .ok_or_else(|| TimeError::new("invalid minute digits"))?;

        Self::from_hm(hour, minute)
    }

    /// Minutes since midnight (0-1439).
    pub fn minutes(&self) -> u16 {
        self.0
    }

    /// The hour component (0-23).
    pub fn hour(&self) -> u16 {
        self.0 / 60
    }

    /// The minute component (0-59).
    pub fn minute(&self) -> u16 {
        self.0 % 60
    }
}

impl TryFrom<u16> for ServiceTime {
    type Error = TimeError;

    fn try_from(minutes: u16) -> Result<Self, Self::Error> {
        Self::new(minutes)
    }
}

impl From<ServiceTime> for u16 {
    fn from(t: ServiceTime) -> u16 {
        t.0
    }
}

impl fmt::Debug for ServiceTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ServiceTime({self})")
    }
}

impl fmt::Display for ServiceTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// Parse exactly two ASCII digits into a number.
fn parse_two_digits(bytes: &[u8]) -> Option<u16> {
    if bytes.len() != 2 || !bytes[0].is_ascii_digit() || !bytes[1].is_ascii_digit() {
        return None;
    }
    Some(u16::from(bytes[0] - b'0') * 10 + u16::from(bytes[1] - b'0'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_valid_range() {
        assert_eq!(ServiceTime::new(0).unwrap().minutes(), 0);
        assert_eq!(ServiceTime::new(1439).unwrap().minutes(), 1439);
        assert!(ServiceTime::new(1440).is_err());
        assert!(ServiceTime::new(u16::MAX).is_err());
    }

    #[test]
    fn from_hm_components() {
        let t = ServiceTime::from_hm(9, 30).unwrap();
        assert_eq!(t.minutes(), 570);
        assert_eq!(t.hour(), 9);
        assert_eq!(t.minute(), 30);

        assert!(ServiceTime::from_hm(24, 0).is_err());
        assert!(ServiceTime::from_hm(0, 60).is_err());
    }

    #[test]
    fn parse_valid_times() {
        assert_eq!(ServiceTime::parse_hhmm("06:00").unwrap().minutes(), 360);
        assert_eq!(ServiceTime::parse_hhmm("09:10").unwrap().minutes(), 550);
        assert_eq!(ServiceTime::parse_hhmm("23:59").unwrap().minutes(), 1439);
    }

    #[test]
    fn parse_rejects_malformed() {
        assert!(ServiceTime::parse_hhmm("").is_err());
        assert!(ServiceTime::parse_hhmm("0900").is_err());
        assert!(ServiceTime::parse_hhmm("9:00").is_err());
        assert!(ServiceTime::parse_hhmm("09-00").is_err());
        assert!(ServiceTime::parse_hhmm("ab:cd").is_err());
        assert!(ServiceTime::parse_hhmm("25:00").is_err());
        assert!(ServiceTime::parse_hhmm("09:61").is_err());
    }

    #[test]
    fn display_pads_with_zeros() {
        assert_eq!(ServiceTime::new(0).unwrap().to_string(), "00:00");
        assert_eq!(ServiceTime::new(540).unwrap().to_string(), "09:00");
        assert_eq!(ServiceTime::new(1439).unwrap().to_string(), "23:59");
    }

    #[test]
    fn ordering_is_chronological() {
        let early = ServiceTime::parse_hhmm("06:15").unwrap();
        let late = ServiceTime::parse_hhmm("18:45").unwrap();
        assert!(early < late);
    }

    #[test]
    fn serde_round_trip_as_minutes() {
        let t = ServiceTime::new(540).unwrap();
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, "540");
        let back: ServiceTime = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
    }

    #[test]
    fn serde_rejects_out_of_range() {
        assert!(serde_json::from_str::<ServiceTime>("1440").is_err());
    }
}
