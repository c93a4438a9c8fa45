// SPDX-License-Identifier: Apache-2.0

//! Resolves the optional marker in front of the 4 hex digits of an escape.

use log::trace;

use crate::shared::{CodeUnits, BACKSLASH, LOWER_U};
use crate::unescape_error::UnescapeError;

/// The marker found at the start of an escape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscapeMarker {
    /// `\u` precedes the digits.
    Backslash,
    /// A bare `u` precedes the digits.
    Bare,
    /// The digits start immediately.
    Absent,
}

impl EscapeMarker {
    /// Number of code units to skip before the first hex digit.
    pub const fn offset(self) -> usize {
        match self {
            EscapeMarker::Backslash => 2,
            EscapeMarker::Bare => 1,
            EscapeMarker::Absent => 0,
        }
    }
}

/// Inspect `input` at `start` and classify the escape marker there.
///
/// A backslash must be followed by a lowercase `u`; anything else, including
/// the end of the input, is reported as `UnexpectedCharacter` at `start + 1`.
/// A `start` at or past the end of the input resolves to
/// [`EscapeMarker::Absent`] and is left for the bounds check to reject.
pub fn locate<S>(input: &S, start: usize) -> Result<EscapeMarker, UnescapeError>
where
    S: CodeUnits + ?Sized,
{
    let marker = match input.unit_at(start) {
        Some(BACKSLASH) => {
            let index = start.saturating_add(1);
            match input.unit_at(index) {
                Some(LOWER_U) => EscapeMarker::Backslash,
                found => {
                    trace!("Backslash at {start} not followed by 'u'");
                    return Err(UnescapeError::UnexpectedCharacter { found, index });
                }
            }
        }
        Some(LOWER_U) => EscapeMarker::Bare,
        _ => EscapeMarker::Absent,
    };

    trace!("Escape marker at {start}: {marker:?}");
    Ok(marker)
}
