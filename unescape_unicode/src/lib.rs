// SPDX-License-Identifier: Apache-2.0

//! Converts a single `\uXXXX` Unicode escape into the code unit it spells out.
//!
//! The escape may carry a `\u` marker, a bare `u` marker, or no marker at all:
//!
//! ```text
//! (\u|u)?[0-9A-Fa-f]{4}
//! ```
//!
//! # Examples
//!
//! ```rust
//! use unescape_unicode::unescape_unicode;
//!
//! assert_eq!(unescape_unicode(Some("\\u2665"), None).unwrap().unwrap(), '♥');
//! assert_eq!(unescape_unicode(Some("2665"), None).unwrap().unwrap(), '♥');
//! assert_eq!(unescape_unicode(Some("I \\u2665 Unicode!"), Some(2)).unwrap().unwrap(), '♥');
//!
//! // A missing input passes straight through
//! assert_eq!(unescape_unicode::<str>(None, Some(4)), Ok(None));
//!
//! let error = unescape_unicode(Some("003g"), None).unwrap_err();
//! assert_eq!(error.to_string(), "Unexpected character \"g\" found at 3");
//! ```

#![cfg_attr(not(any(test, feature = "std")), no_std)]

use log::trace;

mod escape_locator;
pub use escape_locator::{locate, EscapeMarker};

mod hex_accumulator;
pub use hex_accumulator::{hex_value, HexAccumulator};

mod shared;
pub use shared::{CodeUnits, Unescaped};

mod unescape_error;
pub use unescape_error::UnescapeError;

/// Convert the Unicode escape in `input` that begins at `start`.
///
/// `None` input is passed through as `Ok(None)`. A `start` of `None` or a
/// negative value converts from the beginning of `input`.
///
/// # Errors
/// - [`UnescapeError::InsufficientCharacters`] if fewer than 4 units remain
///   after the marker.
/// - [`UnescapeError::UnexpectedCharacter`] if a backslash is not followed by
///   a lowercase `u` (including a backslash at the end of `input`), or if any
///   of the 4 digits is not hexadecimal.
pub fn unescape_unicode<S>(
    input: Option<&S>,
    start: Option<isize>,
) -> Result<Option<Unescaped>, UnescapeError>
where
    S: CodeUnits + ?Sized,
{
    let Some(input) = input else {
        return Ok(None);
    };
    let start = start.and_then(|s| usize::try_from(s).ok()).unwrap_or(0);

    unescape_unicode_at(input, start).map(Some)
}

/// Convert the Unicode escape in `input` that begins at `start`.
///
/// Same as [`unescape_unicode`] without the `None` pass-through or start
/// normalization. A `start` beyond the end of `input` is clamped to its length
/// before the bounds check, so it reports a deficit of -4 rather than reading
/// out of bounds.
pub fn unescape_unicode_at<S>(input: &S, start: usize) -> Result<Unescaped, UnescapeError>
where
    S: CodeUnits + ?Sized,
{
    let marker = locate(input, start)?;
    let start = start.saturating_add(marker.offset());

    let len = input.unit_count();
    let end = start.min(len) + HexAccumulator::DIGITS;
    if end > len {
        trace!("Escape at {start} needs units up to {end}, input has {len}");
        return Err(UnescapeError::insufficient_characters(len, end));
    }

    hex_accumulator::accumulate(input, start)
}
