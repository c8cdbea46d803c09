//! Fixed-point monetary amount.

use serde::{Deserialize, Serialize};

/// Monetary amount in smallest currency unit (e.g., halalas/cents).
///
/// The authority's verification tooling expects totals rendered with exactly
/// two decimals, `.` as the separator and no thousands grouping; `Display`
/// produces that form (`11500` becomes `"115.00"`). Never floating point.
#[derive(
    Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Amount(u64);

impl Amount {
    pub const ZERO: Amount = Amount(0);

    /// From minor units: `Amount::from_minor(11500)` is 115.00.
    pub const fn from_minor(minor: u64) -> Self {
        Self(minor)
    }

    /// From whole currency units: `Amount::from_major(115)` is 115.00.
    pub const fn from_major(major: u64) -> Self {
        Self(major * 100)
    }

    pub const fn minor_units(&self) -> u64 {
        self.0
    }

    pub fn checked_add(self, other: Amount) -> Option<Amount> {
        self.0.checked_add(other.0).map(Amount)
    }
}

impl core::fmt::Display for Amount {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_exactly_two_decimals() {
        assert_eq!(Amount::from_major(115).to_string(), "115.00");
        assert_eq!(Amount::from_minor(1500).to_string(), "15.00");
        assert_eq!(Amount::from_minor(1550).to_string(), "15.50");
        assert_eq!(Amount::from_minor(5).to_string(), "0.05");
        assert_eq!(Amount::ZERO.to_string(), "0.00");
    }

    #[test]
    fn no_thousands_separators() {
        assert_eq!(Amount::from_major(1_234_567).to_string(), "1234567.00");
    }

    #[test]
    fn serde_is_transparent() {
        let amount = Amount::from_minor(11500);
        let json = serde_json::to_string(&amount).unwrap();
        assert_eq!(json, "11500");
        let back: Amount = serde_json::from_str(&json).unwrap();
        assert_eq!(back, amount);
    }

    #[test]
    fn checked_add_detects_overflow() {
        assert_eq!(
            Amount::from_minor(1).checked_add(Amount::from_minor(2)),
            Some(Amount::from_minor(3))
        );
        assert_eq!(
            Amount::from_minor(u64::MAX).checked_add(Amount::from_minor(1)),
            None
        );
    }
}
