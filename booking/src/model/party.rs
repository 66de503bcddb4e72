//! Party size type for reservations.

use std::fmt;

use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Serialize};

/// The number of guests in a reservation (1 to `i32::MAX`).
///
/// The upper bound matches the 32-bit `INTEGER` column the count is stored in.
///
/// # Examples
///
/// ```
/// use booking::PartyCount;
///
/// let party = PartyCount::try_from(4).unwrap();
/// assert_eq!(party.value(), 4);
///
/// assert!(PartyCount::try_from(0).is_err());
/// assert!(PartyCount::try_from(-2).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct PartyCount(u32);

impl PartyCount {
    /// The smallest valid party.
    pub const MIN: i64 = 1;

    /// The largest party the store can hold.
    pub const MAX: i64 = i32::MAX as i64;

    /// Returns the number of guests.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl TryFrom<i64> for PartyCount {
    type Error = InvalidPartyCountError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value < Self::MIN {
            return Err(InvalidPartyCountError {
                value,
                reason: "party count must be at least 1".into(),
            });
        }
        if value > Self::MAX {
            return Err(InvalidPartyCountError {
                value,
                reason: format!("party count must not exceed {}", Self::MAX),
            });
        }
        u32::try_from(value)
            .map(Self)
            .map_err(|e| InvalidPartyCountError {
                value,
                reason: e.to_string(),
            })
    }
}

impl From<PartyCount> for i64 {
    fn from(party: PartyCount) -> Self {
        Self::from(party.0)
    }
}

impl fmt::Display for PartyCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl ToSql for PartyCount {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(i64::from(*self)))
    }
}

impl FromSql for PartyCount {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let raw = value.as_i64()?;
        Self::try_from(raw).map_err(|e| FromSqlError::Other(Box::new(e)))
    }
}

/// Error type for invalid party counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidPartyCountError {
    /// The rejected value.
    pub value: i64,
    /// The reason the value is invalid.
    pub reason: String,
}

impl fmt::Display for InvalidPartyCountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid party count {}: {}", self.value, self.reason)
    }
}

impl std::error::Error for InvalidPartyCountError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_party() {
        let party = PartyCount::try_from(2).unwrap();
        assert_eq!(party.value(), 2);
        assert_eq!(party.to_string(), "2");
    }

    #[test]
    fn test_zero_rejected() {
        let err = PartyCount::try_from(0).unwrap_err();
        assert_eq!(err.value, 0);
        assert!(err.reason.contains("at least 1"));
    }

    #[test]
    fn test_upper_bound() {
        assert!(PartyCount::try_from(PartyCount::MAX).is_ok());
        assert!(PartyCount::try_from(PartyCount::MAX + 1).is_err());
    }

    #[test]
    fn test_json_rejects_negative() {
        let result: Result<PartyCount, _> = serde_json::from_str("-3");
        assert!(result.is_err());
    }

    #[test]
    fn test_json_number() {
        let party: PartyCount = serde_json::from_str("6").unwrap();
        assert_eq!(party.value(), 6);
        assert_eq!(serde_json::to_string(&party).unwrap(), "6");
    }
}
