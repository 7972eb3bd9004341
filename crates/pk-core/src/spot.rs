//! Parking spot categories.

use std::fmt;

/// Zone classification of a parking spot, derived from its distance to the
/// nearer exit.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpotType {
    Standard,
    Handicap,
    #[cfg_attr(feature = "serde", serde(rename = "VIP"))]
    Vip,
}

impl SpotType {
    /// Price charged by FCFS and PRIORITY allocation, and the reserve price
    /// of an uncontested auction.
    #[inline]
    pub fn base_price(self) -> u32 {
        match self {
            SpotType::Standard => 5,
            SpotType::Handicap => 10,
            SpotType::Vip      => 20,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SpotType::Standard => "Standard",
            SpotType::Handicap => "Handicap",
            SpotType::Vip      => "VIP",
        }
    }
}

impl fmt::Display for SpotType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
