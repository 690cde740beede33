//! Time-of-day values in `HH:mm` form.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// A wall-clock time with minute precision.
///
/// Ordering is lexicographic on `(hour, minute)`, which is what the
/// end-after-start rule relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TimeOfDay {
    pub hour: u8,
    pub minute: u8,
}

impl TimeOfDay {
    /// Build a time, rejecting hours above 23 and minutes above 59.
    pub fn new(hour: u8, minute: u8) -> Result<Self> {
        if hour > 23 || minute > 59 {
            return Err(ModelError::TimeOutOfRange {
                value: format!("{hour:02}:{minute:02}"),
            });
        }
        Ok(Self { hour, minute })
    }

    /// Parse `HH:mm`. Surrounding whitespace is ignored; single-digit
    /// components are accepted (`9:05`).
    pub fn parse(value: &str) -> Result<Self> {
        let trimmed = value.trim();
        let invalid = || ModelError::InvalidTime {
            value: value.to_string(),
        };

        let (hh, mm) = trimmed.split_once(':').ok_or_else(invalid)?;
        if mm.contains(':') {
            return Err(invalid());
        }
        let hour: u8 = hh.trim().parse().map_err(|_| invalid())?;
        let minute: u8 = mm.trim().parse().map_err(|_| invalid())?;

        Self::new(hour, minute).map_err(|_| ModelError::TimeOutOfRange {
            value: value.to_string(),
        })
    }
}

impl FromStr for TimeOfDay {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        assert_eq!(TimeOfDay::parse("09:30").unwrap(), TimeOfDay::new(9, 30).unwrap());
        assert_eq!(TimeOfDay::parse(" 9:05 ").unwrap().to_string(), "09:05");
        assert_eq!(TimeOfDay::parse("23:59").unwrap().to_string(), "23:59");
    }

    #[test]
    fn test_parse_invalid_format() {
        for input in ["", "0930", "09.30", "aa:bb", "09:30:00", ":30", "09:"] {
            assert!(
                matches!(TimeOfDay::parse(input), Err(ModelError::InvalidTime { .. })),
                "expected InvalidTime for {input:?}"
            );
        }
    }

    #[test]
    fn test_parse_out_of_range() {
        assert!(matches!(
            TimeOfDay::parse("24:00"),
            Err(ModelError::TimeOutOfRange { .. })
        ));
        assert!(matches!(
            TimeOfDay::parse("10:60"),
            Err(ModelError::TimeOutOfRange { .. })
        ));
    }

    #[test]
    fn test_ordering_is_hour_then_minute() {
        let a = TimeOfDay::new(9, 59).unwrap();
        let b = TimeOfDay::new(10, 0).unwrap();
        assert!(b > a);
        assert_eq!(a, TimeOfDay::parse("09:59").unwrap());
    }
}
