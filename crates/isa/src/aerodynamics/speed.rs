use std::{fmt, str::FromStr};

use crate::IsaError;

/// How an input speed is to be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpeedKind {
    /// True airspeed, m/s.
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "TAS"))]
    Tas,
    /// Equivalent airspeed, m/s.
    #[cfg_attr(feature = "serde", serde(rename = "EAS"))]
    Eas,
    /// Mach number.
    #[cfg_attr(feature = "serde", serde(rename = "mach"))]
    Mach,
}

impl SpeedKind {
    /// Returns the canonical name: `TAS`, `EAS` or `mach`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SpeedKind::Tas => "TAS",
            SpeedKind::Eas => "EAS",
            SpeedKind::Mach => "mach",
        }
    }
}

impl fmt::Display for SpeedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses a speed kind, ignoring ASCII case.
impl FromStr for SpeedKind {
    type Err = IsaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [SpeedKind::Tas, SpeedKind::Eas, SpeedKind::Mach]
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                IsaError::InvalidArgument(format!(
                    "unknown speed kind `{s}`, expected one of `TAS`, `EAS`, `mach`"
                ))
            })
    }
}
