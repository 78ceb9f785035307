//! Hardware variants supported by the openawair firmware line.
//!
//! The numeric codes are shared with firmware images and provisioning tools
//! already in the field. A new variant takes a fresh code; existing codes are
//! never renumbered or reused.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Hardware variant a firmware image targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
#[repr(u32)]
pub enum ModelKind {
    /// Awair Glow C smart plug
    GlowC = 1,
    /// Awair Element
    Element = 2,
}

impl ModelKind {
    /// Every variant, in code order
    pub const ALL: [ModelKind; 2] = [ModelKind::GlowC, ModelKind::Element];

    /// Wire/ABI code of this variant
    pub const fn code(self) -> u32 {
        self as u32
    }

    /// Product name as printed on the unit
    pub const fn name(self) -> &'static str {
        match self {
            Self::GlowC => "GLOW C",
            Self::Element => "ELEMENT",
        }
    }

    /// Label used for the model field of telemetry payloads
    pub const fn telemetry_name(self) -> &'static str {
        match self {
            Self::GlowC => "AwairGlowC",
            Self::Element => "AwairElement",
        }
    }

    /// Spellings accepted by [`FromStr`], lowercase and without separators
    const fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::GlowC => &["glowc", "awairglowc"],
            Self::Element => &["element", "awairelement"],
        }
    }
}

impl TryFrom<u32> for ModelKind {
    type Error = ConfigError;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Self::GlowC),
            2 => Ok(Self::Element),
            other => Err(ConfigError::InvalidModel(other)),
        }
    }
}

impl From<ModelKind> for u32 {
    fn from(model: ModelKind) -> Self {
        model.code()
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Compare `input` against a lowercase alias, ignoring case, spaces, `_` and `-`.
fn matches_loosely(input: &str, alias: &str) -> bool {
    input
        .chars()
        .filter(|c| !matches!(*c, ' ' | '_' | '-'))
        .map(|c| c.to_ascii_lowercase())
        .eq(alias.chars())
}

impl FromStr for ModelKind {
    type Err = ConfigError;

    /// Accepts the wire code (`"1"`), the product name (`"GLOW C"`),
    /// the telemetry label (`"AwairGlowC"`) or the variant name (`"GlowC"`).
    ///
    /// A code is ASCII digits only: no sign and no surrounding whitespace.
    /// Leading zeros are allowed (`"01"` is code 1).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(code) = s.parse::<u32>() {
                return Self::try_from(code);
            }
        }

        Self::ALL
            .into_iter()
            .find(|model| model.aliases().iter().any(|alias| matches_loosely(s, alias)))
            .ok_or_else(|| ConfigError::unknown_model_name(s))
    }
}
