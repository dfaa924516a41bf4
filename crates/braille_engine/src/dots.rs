//! The six dots of a braille cell.
//!
//! ```text
//!  1 ● ● 4
//!  2 ● ● 5
//!  3 ● ● 6
//! ```
//!
//! Dot *n* is stored in bit *n − 1*, which happens to be the same layout the
//! Unicode braille block (U+2800..U+283F) uses for its lower six bits.

use bitflags::bitflags;

use crate::{EngineError, Result};

bitflags! {
    /// Set of raised dots in one braille cell.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
    pub struct Dots: u8 {
        const DOT1 = 0b00_0001;
        const DOT2 = 0b00_0010;
        const DOT3 = 0b00_0100;
        const DOT4 = 0b00_1000;
        const DOT5 = 0b01_0000;
        const DOT6 = 0b10_0000;

        const LEFT_COLUMN = Self::DOT1.bits() | Self::DOT2.bits() | Self::DOT3.bits();
        const RIGHT_COLUMN = Self::DOT4.bits() | Self::DOT5.bits() | Self::DOT6.bits();
    }
}

/// Base code point of the Unicode braille patterns block.
const UNICODE_BRAILLE_BASE: u32 = 0x2800;

impl Dots {
    /// Builds a pattern from dot numbers, silently skipping anything outside `1..=6`.
    ///
    /// Usable in constant tables.
    pub const fn pattern(numbers: &[u8]) -> Dots {
        let mut bits = 0u8;
        let mut i = 0;
        while i < numbers.len() {
            let n = numbers[i];
            if n >= 1 && n <= 6 {
                bits |= 1 << (n - 1);
            }
            i += 1;
        }
        Dots::from_bits_truncate(bits)
    }

    /// Builds a pattern from dot numbers.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidDot`] for numbers outside `1..=6`.
    pub fn from_numbers(numbers: &[u8]) -> Result<Dots> {
        let mut dots = Dots::empty();
        for &n in numbers {
            dots.insert(Dots::dot(n).ok_or(EngineError::InvalidDot { dot: n })?);
        }
        Ok(dots)
    }

    /// The single-dot flag for dot number `n`.
    pub fn dot(n: u8) -> Option<Dots> {
        if (1..=6).contains(&n) { Some(Dots::from_bits_truncate(1 << (n - 1))) } else { None }
    }

    pub fn has_dot(self, n: u8) -> bool {
        Dots::dot(n).is_some_and(|d| self.contains(d))
    }

    /// Dot numbers in ascending order.
    pub fn numbers(self) -> Vec<u8> {
        self.iter_numbers().collect()
    }

    pub fn iter_numbers(self) -> impl Iterator<Item = u8> {
        (1..=6u8).filter(move |&n| self.has_dot(n))
    }

    /// Number of dots present in exactly one of the two sets.
    pub fn distance(self, other: Dots) -> u32 {
        self.symmetric_difference(other).bits().count_ones()
    }

    pub fn to_unicode(self) -> char {
        char::from_u32(UNICODE_BRAILLE_BASE + self.bits() as u32).unwrap_or(' ')
    }

    pub fn from_unicode(ch: char) -> Option<Dots> {
        let offset = (ch as u32).checked_sub(UNICODE_BRAILLE_BASE)?;
        if offset > 0x3F {
            return None;
        }
        Some(Dots::from_bits_truncate(offset as u8))
    }
}

impl std::fmt::Display for Dots {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.numbers())
    }
}
