// SPDX-License-Identifier: Apache-2.0

use crate::shared::unit_to_char;

/// Errors that can occur while converting a Unicode escape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnescapeError {
    /// Fewer than 4 hex digits remain after the resolved start position.
    ///
    /// `deficit` is the number of available units minus the number required,
    /// so it is always negative.
    InsufficientCharacters { deficit: isize },
    /// A unit outside the `(\u|u)?[0-9A-Fa-f]{4}` grammar was found.
    ///
    /// `index` is the position of `found` in the original input, counted in
    /// UTF-16 code units. `found` is `None` when the input ends where a unit
    /// was required, as with a trailing backslash.
    UnexpectedCharacter { found: Option<u16>, index: usize },
}

impl UnescapeError {
    /// Builds an `InsufficientCharacters` error for an input of `len` units
    /// when the escape would have ended at `end`.
    pub(crate) fn insufficient_characters(len: usize, end: usize) -> Self {
        let missing = end.saturating_sub(len);
        UnescapeError::InsufficientCharacters {
            deficit: -(missing as isize),
        }
    }

    /// The offending unit as a `char`, for `UnexpectedCharacter` errors that
    /// found one.
    pub fn found_char(&self) -> Option<char> {
        match *self {
            UnescapeError::UnexpectedCharacter { found, .. } => found.map(unit_to_char),
            UnescapeError::InsufficientCharacters { .. } => None,
        }
    }
}

impl core::fmt::Display for UnescapeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match *self {
            UnescapeError::InsufficientCharacters { deficit } => {
                write!(f, "Insufficient characters found: {deficit}")
            }
            UnescapeError::UnexpectedCharacter {
                found: Some(found),
                index,
            } => write!(
                f,
                "Unexpected character \"{}\" found at {index}",
                unit_to_char(found)
            ),
            UnescapeError::UnexpectedCharacter { found: None, index } => {
                write!(f, "Unexpected character \"undefined\" found at {index}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for UnescapeError {}
