//! Age threshold value object - how many days an item must sit in the trash

use std::str::FromStr;

use chrono::{Duration, NaiveDateTime};

use crate::error::PurgeError;

/// A non-negative number of days.
///
/// Items become eligible for purging once they were deleted strictly
/// before `now - days`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct AgeThreshold {
    days: u32,
}

impl AgeThreshold {
    pub fn days(days: u32) -> Self {
        Self { days }
    }

    /// The moment before which items count as old enough.
    ///
    /// Saturates at the earliest representable date, so huge thresholds
    /// simply make nothing eligible.
    pub fn cutoff(&self, now: NaiveDateTime) -> NaiveDateTime {
        now.checked_sub_signed(Duration::days(i64::from(self.days)))
            .unwrap_or(NaiveDateTime::MIN)
    }
}

impl FromStr for AgeThreshold {
    type Err = PurgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .map(Self::days)
            .map_err(|_| PurgeError::InvalidThreshold {
                value: s.to_string(),
            })
    }
}

impl std::fmt::Display for AgeThreshold {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.days {
            1 => write!(f, "1 day"),
            n => write!(f, "{} days", n),
        }
    }
}
