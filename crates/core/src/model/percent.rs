use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("percentage must be between 0 and 100, got {0}")]
pub struct PercentError(pub u32);

/// Whole-number percentage in `0..=100`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u32", into = "u8")]
pub struct Percent(u8);

impl Percent {
    pub const ZERO: Percent = Percent(0);
    pub const FULL: Percent = Percent(100);

    /// # Errors
    ///
    /// Returns `PercentError` if `value` exceeds 100.
    pub fn new(value: u32) -> Result<Self, PercentError> {
        u8::try_from(value)
            .ok()
            .filter(|v| *v <= 100)
            .map(Self)
            .ok_or(PercentError(value))
    }

    /// `round(100 * part / whole)`, rounding halves up. Zero when `whole` is zero.
    #[must_use]
    pub fn of(part: usize, whole: usize) -> Self {
        if whole == 0 {
            return Self::ZERO;
        }
        let part = part.min(whole);
        // Integer form of round-half-up avoids float drift on exact halves.
        let rounded = (200 * part + whole) / (2 * whole);
        Self(u8::try_from(rounded).unwrap_or(100))
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u32> for Percent {
    type Error = PercentError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Percent::new(value)
    }
}

impl From<Percent> for u8 {
    fn from(value: Percent) -> Self {
        value.0
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&format!("{}%", self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn of_rounds_to_nearest() {
        assert_eq!(Percent::of(2, 6).value(), 33);
        assert_eq!(Percent::of(2, 7).value(), 29);
        assert_eq!(Percent::of(1, 8).value(), 13);
        assert_eq!(Percent::of(1, 3).value(), 33);
        assert_eq!(Percent::of(2, 3).value(), 67);
        assert_eq!(Percent::of(7, 7), Percent::FULL);
    }

    #[test]
    fn of_empty_is_zero() {
        assert_eq!(Percent::of(0, 0), Percent::ZERO);
    }

    #[test]
    fn new_rejects_out_of_range() {
        assert_eq!(Percent::new(35).unwrap().value(), 35);
        assert_eq!(Percent::new(101), Err(PercentError(101)));
        assert_eq!(Percent::new(1_000), Err(PercentError(1_000)));
    }

    #[test]
    fn display_has_suffix() {
        assert_eq!(Percent::new(35).unwrap().to_string(), "35%");
        assert_eq!(format!("{:>4}", Percent::new(9).unwrap()), "  9%");
    }
}
