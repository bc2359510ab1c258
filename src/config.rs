//! Match configuration.
//!
//! The only value the board needs is its edge length; everything else
//! (entry cells, lanes, pawn counts) is derived from it.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{ConfigResult, FieldSizeError, MAX_FIELD_SIZE, MIN_FIELD_SIZE};

/// Validated board edge length: odd, between 5 and 21 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct FieldSize(u8);

impl FieldSize {
    /// Validate a board edge length.
    ///
    /// # Errors
    ///
    /// Returns [`FieldSizeError::TooLarge`] above 21 and
    /// [`FieldSizeError::Invalid`] for even values or values below 5.
    pub fn new(size: u32) -> ConfigResult<Self> {
        if size > u32::from(MAX_FIELD_SIZE) {
            return Err(FieldSizeError::TooLarge(size));
        }
        if size < u32::from(MIN_FIELD_SIZE) || size % 2 == 0 {
            return Err(FieldSizeError::Invalid(size));
        }
        let size = u8::try_from(size).map_err(|_| FieldSizeError::TooLarge(size))?;
        Ok(Self(size))
    }

    /// Board edge length.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Index of the middle row and column.
    #[must_use]
    pub const fn medium(self) -> u8 {
        (self.0 - 1) / 2
    }

    /// Number of pawns each side starts with.
    #[must_use]
    pub const fn pawns_per_side(self) -> u8 {
        (self.0 - 3) / 2
    }
}

impl Default for FieldSize {
    fn default() -> Self {
        Self(11)
    }
}

impl fmt::Display for FieldSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for FieldSize {
    type Err = FieldSizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(FieldSizeError::NotInteger(trimmed.to_string()));
        }
        // Digits only, so the only parse failure left is overflow.
        let size = trimmed.parse::<u32>().unwrap_or(u32::MAX);
        Self::new(size)
    }
}

/// How far a pawn travels on a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StepRule {
    /// Every move covers exactly six cells, whatever the die shows.
    #[default]
    Fixed,
    /// A non-six roll moves by the rolled value; a six moves six.
    Rolled,
}

impl StepRule {
    /// Cells to advance for a given roll.
    #[must_use]
    pub const fn steps(self, roll: u8) -> u8 {
        match self {
            Self::Fixed => FIXED_STEPS,
            Self::Rolled => roll,
        }
    }
}

/// Distance covered by every move under [`StepRule::Fixed`].
pub const FIXED_STEPS: u8 = 6;

/// Default turn cap.
pub const DEFAULT_MAX_TURNS: u32 = 1000;

/// Everything needed to set up a match, apart from the dice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MatchConfig {
    /// Board edge length.
    pub field_size: FieldSize,
    /// Movement distance rule.
    pub step_rule: StepRule,
    /// Turns after which an undecided match is a draw (0 = no cap).
    pub max_turns: u32,
}

impl MatchConfig {
    /// Default configuration on a board of the given size.
    #[must_use]
    pub fn with_size(field_size: FieldSize) -> Self {
        Self {
            field_size,
            ..Self::default()
        }
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            field_size: FieldSize::default(),
            step_rule: StepRule::default(),
            max_turns: DEFAULT_MAX_TURNS,
        }
    }
}
