// SPDX-License-Identifier: Apache-2.0

//! Shared types for the escape locator and the hex accumulator

/// Backslash that opens a `\uXXXX` marker.
pub(crate) const BACKSLASH: u16 = b'\\' as u16;
/// Lowercase `u`, either after a backslash or as a bare marker.
pub(crate) const LOWER_U: u16 = b'u' as u16;

/// Text that can be addressed as a sequence of UTF-16 code units.
///
/// All positions taken and reported by this crate are UTF-16 code unit
/// indices, so a `str` containing characters outside the Basic Multilingual
/// Plane counts each of those as two positions.
pub trait CodeUnits {
    /// Number of UTF-16 code units in the input.
    fn unit_count(&self) -> usize;

    /// The code unit at `index`, or `None` past the end of the input.
    fn unit_at(&self, index: usize) -> Option<u16>;

    /// The code units from `start` to the end of the input, in one pass.
    fn units_from(&self, start: usize) -> impl Iterator<Item = u16> + '_;
}

impl CodeUnits for str {
    fn unit_count(&self) -> usize {
        self.encode_utf16().count()
    }

    fn unit_at(&self, index: usize) -> Option<u16> {
        self.encode_utf16().nth(index)
    }

    fn units_from(&self, start: usize) -> impl Iterator<Item = u16> + '_ {
        self.encode_utf16().skip(start)
    }
}

impl CodeUnits for [u16] {
    fn unit_count(&self) -> usize {
        self.len()
    }

    fn unit_at(&self, index: usize) -> Option<u16> {
        self.get(index).copied()
    }

    fn units_from(&self, start: usize) -> impl Iterator<Item = u16> + '_ {
        self.get(start..).unwrap_or_default().iter().copied()
    }
}

/// Renders a single code unit, substituting U+FFFD for surrogate halves.
pub(crate) fn unit_to_char(unit: u16) -> char {
    char::from_u32(u32::from(unit)).unwrap_or(char::REPLACEMENT_CHARACTER)
}

/// The single UTF-16 code unit produced by a successful conversion.
///
/// Any 4-digit escape is accepted, including `D800`-`DFFF`, which do not form
/// a `char` on their own. Use [`Unescaped::to_char`] when a scalar value is
/// required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Unescaped(u16);

impl Unescaped {
    /// Wraps a raw code unit.
    pub const fn new(code_unit: u16) -> Self {
        Unescaped(code_unit)
    }

    /// The 16-bit code point that the escape spelled out.
    pub const fn code_unit(self) -> u16 {
        self.0
    }

    /// The converted character, or `None` for a lone surrogate half.
    pub fn to_char(self) -> Option<char> {
        char::from_u32(u32::from(self.0))
    }
}

impl From<Unescaped> for u16 {
    fn from(unescaped: Unescaped) -> Self {
        unescaped.0
    }
}

impl PartialEq<char> for Unescaped {
    fn eq(&self, other: &char) -> bool {
        u32::from(self.0) == u32::from(*other)
    }
}

impl core::fmt::Display for Unescaped {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        use core::fmt::Write;
        f.write_char(unit_to_char(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_str_units_are_utf16() {
        let text = "a😀b";
        assert_eq!(text.unit_count(), 4);
        assert_eq!(text.unit_at(0), Some(u16::from(b'a')));
        assert_eq!(text.unit_at(1), Some(0xD83D));
        assert_eq!(text.unit_at(2), Some(0xDE00));
        assert_eq!(text.unit_at(3), Some(u16::from(b'b')));
        assert_eq!(text.unit_at(4), None);
    }

    #[test]
    fn test_units_from() {
        let text = "a😀b";
        assert!(text.units_from(1).eq([0xD83D, 0xDE00, u16::from(b'b')]));
        assert_eq!(text.units_from(4).count(), 0);
        assert_eq!(text.units_from(usize::MAX).count(), 0);

        let units: &[u16] = &[0x30, 0x30, 0x33, 0x63];
        assert!(units.units_from(2).eq([0x33, 0x63]));
        assert_eq!(units.units_from(4).count(), 0);
        assert_eq!(units.units_from(usize::MAX).count(), 0);
    }

    #[test]
    fn test_slice_units() {
        let units: &[u16] = &[0x30, 0x30, 0x33, 0x63];
        assert_eq!(units.unit_count(), 4);
        assert_eq!(units.unit_at(3), Some(0x63));
        assert_eq!(units.unit_at(10), None);
    }

    #[test]
    fn test_unescaped_char_conversion() {
        let heart = Unescaped::new(0x2665);
        assert_eq!(heart.to_char(), Some('♥'));
        assert_eq!(heart, '♥');
        assert_eq!(u16::from(heart), 0x2665);
        assert_eq!(heart.to_string(), "♥");
    }

    #[test]
    fn test_unescaped_surrogate_half() {
        let high = Unescaped::new(0xD801);
        assert_eq!(high.to_char(), None);
        assert_eq!(high.code_unit(), 0xD801);
        assert_eq!(high.to_string(), "\u{FFFD}");
        assert_ne!(high, char::REPLACEMENT_CHARACTER);
    }
}
