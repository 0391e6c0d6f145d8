//! Statistical area identifier.
//!
//! Area ids are published as numeric strings of varying width (`"7"`,
//! `"0007"`).  They are stored numerically so that ordering, hashing and the
//! "largest neighbouring area" rule all operate on the number, and rendered
//! zero-padded to four digits.  For ids below 10 000 numeric order and
//! zero-padded lexicographic order coincide.

use std::fmt;
use std::str::FromStr;

use crate::CoreError;

/// A statistical sub-district identifier.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AreaId(pub u32);

impl AreaId {
    /// Width the identifier is zero-padded to when rendered.
    pub const WIDTH: usize = 4;

    /// Zero-padded textual form, e.g. `AreaId(7).code() == "0007"`.
    pub fn code(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for AreaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0width$}", self.0, width = Self::WIDTH)
    }
}

impl FromStr for AreaId {
    type Err = CoreError;

    /// Accepts padded or unpadded decimal digits, surrounding whitespace
    /// ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CoreError::Parse(format!(
                "invalid area id {s:?}: expected decimal digits"
            )));
        }
        trimmed
            .parse::<u32>()
            .map(AreaId)
            .map_err(|e| CoreError::Parse(format!("invalid area id {s:?}: {e}")))
    }
}

impl From<u32> for AreaId {
    #[inline]
    fn from(raw: u32) -> Self {
        AreaId(raw)
    }
}
