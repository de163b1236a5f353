//! Delta Tier Value Object

use serde::{Deserialize, Serialize};
use std::fmt;

use super::errors::StrikeSizingError;

/// Target short-strike delta.
///
/// Serialized as the bare delta number (`5` or `3`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum DeltaTier {
    /// 5-delta shorts (iron condor).
    Five,
    /// 3-delta shorts (vertical spread).
    Three,
}

impl DeltaTier {
    /// Target delta as a whole number.
    #[must_use]
    pub const fn delta(self) -> u8 {
        match self {
            Self::Five => 5,
            Self::Three => 3,
        }
    }

    /// Number of one-day standard deviations between spot and the short strike.
    #[must_use]
    pub const fn sigma_multiplier(self) -> f64 {
        match self {
            Self::Five => 1.65,
            Self::Three => 1.88,
        }
    }
}

impl From<DeltaTier> for u8 {
    fn from(tier: DeltaTier) -> Self {
        tier.delta()
    }
}

impl TryFrom<u8> for DeltaTier {
    type Error = StrikeSizingError;

    fn try_from(delta: u8) -> Result<Self, Self::Error> {
        match delta {
            5 => Ok(Self::Five),
            3 => Ok(Self::Three),
            other => Err(StrikeSizingError::UnsupportedDelta(other)),
        }
    }
}

impl fmt::Display for DeltaTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Delta {}", self.delta())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multipliers() {
        assert_eq!(DeltaTier::Five.sigma_multiplier(), 1.65);
        assert_eq!(DeltaTier::Three.sigma_multiplier(), 1.88);
    }

    #[test]
    fn try_from_delta() {
        assert_eq!(DeltaTier::try_from(5).unwrap(), DeltaTier::Five);
        assert_eq!(DeltaTier::try_from(3).unwrap(), DeltaTier::Three);
        assert_eq!(
            DeltaTier::try_from(10),
            Err(StrikeSizingError::UnsupportedDelta(10))
        );
    }

    #[test]
    fn display() {
        assert_eq!(DeltaTier::Five.to_string(), "Delta 5");
    }

    #[test]
    fn serializes_as_number() {
        assert_eq!(serde_json::to_string(&DeltaTier::Three).unwrap(), "3");
        let parsed: DeltaTier = serde_json::from_str("5").unwrap();
        assert_eq!(parsed, DeltaTier::Five);
        assert!(serde_json::from_str::<DeltaTier>("4").is_err());
    }
}
