// SPDX-License-Identifier: Apache-2.0

use log::trace;

use crate::shared::{CodeUnits, Unescaped};
use crate::unescape_error::UnescapeError;

/// Marks table entries that are not hex digits.
const INVALID: u8 = 0xFF;

/// Digit values for the ASCII range, `INVALID` everywhere else.
///
/// Units at or above 0x80 are never hex digits and fall outside the table.
const HEX_VALUES: [u8; 128] = {
    let mut table = [INVALID; 128];
    let mut i = 0;
    while i < table.len() {
        let byte = i as u8;
        table[i] = match byte {
            b'0'..=b'9' => byte - b'0',
            b'a'..=b'f' => byte - b'a' + 10,
            b'A'..=b'F' => byte - b'A' + 10,
            _ => INVALID,
        };
        i += 1;
    }
    table
};

/// Looks up the value (0-15) of a hex digit code unit.
///
/// # Returns
/// `None` if `unit` is not one of `[0-9A-Fa-f]`.
pub fn hex_value(unit: u16) -> Option<u8> {
    match HEX_VALUES.get(usize::from(unit)) {
        Some(&value) if value != INVALID => Some(value),
        _ => None,
    }
}

/// Collects the 4 hex digits of an escape into a 16-bit code unit.
///
/// Digits are folded most-significant first. The index passed with each digit
/// is only used for error reporting, so it should be the digit's position in
/// the caller's original input.
#[derive(Debug, Default)]
pub struct HexAccumulator {
    code_unit: u16,
    digits: usize,
}

impl HexAccumulator {
    /// Number of hex digits in an escape.
    pub const DIGITS: usize = 4;

    /// Create an empty accumulator
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one more digit into the code unit.
    ///
    /// Returns true if this completes the 4-digit sequence. A unit that is not
    /// a hex digit, or any unit after the sequence is complete, is reported as
    /// `UnexpectedCharacter` at `index` and leaves the accumulator unchanged.
    pub fn push(&mut self, unit: u16, index: usize) -> Result<bool, UnescapeError> {
        let unexpected = UnescapeError::UnexpectedCharacter {
            found: Some(unit),
            index,
        };
        if self.is_complete() {
            return Err(unexpected);
        }
        let value = hex_value(unit).ok_or(unexpected)?;

        self.code_unit = (self.code_unit << 4) | u16::from(value);
        self.digits += 1;

        Ok(self.is_complete())
    }

    /// Check whether all 4 digits have been collected
    pub fn is_complete(&self) -> bool {
        self.digits == Self::DIGITS
    }

    /// The converted code unit, once all 4 digits are in.
    pub fn finish(self) -> Option<Unescaped> {
        self.is_complete().then_some(Unescaped::new(self.code_unit))
    }
}

/// Fold the 4 units at `start..start + 4` of `input`.
///
/// The units are read in a single pass. The caller has already checked that
/// the input is long enough; a short input still fails cleanly with
/// `InsufficientCharacters`.
pub(crate) fn accumulate<S>(input: &S, start: usize) -> Result<Unescaped, UnescapeError>
where
    S: CodeUnits + ?Sized,
{
    let end = start + HexAccumulator::DIGITS;
    let mut accumulator = HexAccumulator::new();

    for (index, unit) in (start..end).zip(input.units_from(start)) {
        if let Err(error) = accumulator.push(unit, index) {
            trace!("Rejected hex digit at {index}: {error}");
            return Err(error);
        }
    }

    let unescaped = accumulator
        .finish()
        .ok_or_else(|| UnescapeError::insufficient_characters(input.unit_count(), end))?;
    trace!(
        "Accumulated code unit {:#06X} from {start}..{end}",
        unescaped.code_unit()
    );
    Ok(unescaped)
}
