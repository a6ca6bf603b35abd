//! Delivery areas and their display metadata.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::DomainError;

/// One of the three rotating delivery zones worked by the carrier.
///
/// Areas are identified on the wire by their district code (`"45"`, `"14"`,
/// `"12"`). The set is closed and purely descriptive; label and color are
/// resolved by exhaustive match so a new area cannot be added without the
/// compiler pointing at every lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Area {
    #[serde(rename = "45")]
    Zone45,
    #[serde(rename = "14")]
    Zone14,
    #[serde(rename = "12")]
    Zone12,
}

impl Area {
    /// All areas, in the working-day rotation order.
    pub const ALL: [Area; 3] = [Area::Zone45, Area::Zone14, Area::Zone12];

    /// Stable wire code for this area.
    pub fn code(&self) -> &'static str {
        match self {
            Area::Zone45 => "45",
            Area::Zone14 => "14",
            Area::Zone12 => "12",
        }
    }

    /// Human-facing label shown on the dashboard.
    pub fn label(&self) -> &'static str {
        match self {
            Area::Zone45 => "Zone 45",
            Area::Zone14 => "Zone 14",
            Area::Zone12 => "Zone 12",
        }
    }

    /// Display color (hex) used by the frontend for this area.
    pub fn color(&self) -> &'static str {
        match self {
            Area::Zone45 => "#e53935",
            Area::Zone14 => "#1e88e5",
            Area::Zone12 => "#43a047",
        }
    }

    /// Parse a wire code.
    ///
    /// Unknown codes are rejected as [`DomainError::UnknownArea`], never
    /// silently defaulted.
    pub fn from_code(code: &str) -> Result<Area, DomainError> {
        match code {
            "45" => Ok(Area::Zone45),
            "14" => Ok(Area::Zone14),
            "12" => Ok(Area::Zone12),
            other => Err(DomainError::UnknownArea(other.to_string())),
        }
    }
}

impl FromStr for Area {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Area::from_code(s)
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
