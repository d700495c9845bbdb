use std::fmt;

use serde::{Deserialize, Serialize};

/// Permaculture management tier, from `0` (the house) to `5` (wild land).
///
/// Levels are ordered by visitation frequency: lower levels are visited more
/// often.  Only levels `0..=4` are produced by zone generation; `WILD` exists
/// for hand-assigned elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct ZoneLevel(pub(crate) u8);

impl ZoneLevel {
    pub const HOME: Self = Self(0);
    pub const DAILY: Self = Self(1);
    pub const FREQUENT: Self = Self(2);
    pub const OCCASIONAL: Self = Self(3);
    pub const MINIMAL: Self = Self(4);
    pub const WILD: Self = Self(5);

    /// Build a level, rejecting anything above `5`.
    #[inline]
    pub const fn new(level: u8) -> Option<Self> {
        if level <= 5 { Some(Self(level)) } else { None }
    }

    /// Numeric level.
    #[inline] pub const fn get(self) -> u8 { self.0 }

    /// All levels in ascending order.
    pub const fn all() -> [ZoneLevel; 6] {
        [Self::HOME, Self::DAILY, Self::FREQUENT, Self::OCCASIONAL, Self::MINIMAL, Self::WILD]
    }
}

impl TryFrom<u8> for ZoneLevel {
    type Error = String;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Self::new(level).ok_or_else(|| format!("zone level {level} is out of range 0..=5"))
    }
}

impl From<ZoneLevel> for u8 {
    fn from(level: ZoneLevel) -> Self { level.0 }
}

impl fmt::Display for ZoneLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Zone {}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_out_of_range() {
        assert_eq!(ZoneLevel::new(5), Some(ZoneLevel::WILD));
        assert_eq!(ZoneLevel::new(6), None);
        assert!(ZoneLevel::try_from(9).is_err());
    }

    #[test]
    fn ordering() {
        assert!(ZoneLevel::HOME < ZoneLevel::DAILY);
        assert!(ZoneLevel::MINIMAL < ZoneLevel::WILD);
    }

    #[test]
    fn display() {
        assert_eq!(ZoneLevel::FREQUENT.to_string(), "Zone 2");
    }

    #[test]
    fn serializes_as_plain_number() {
        assert_eq!(serde_json::to_string(&ZoneLevel::OCCASIONAL).unwrap(), "3");
        assert_eq!(serde_json::from_str::<ZoneLevel>("1").unwrap(), ZoneLevel::DAILY);
        assert!(serde_json::from_str::<ZoneLevel>("7").is_err());
    }
}
