//! An unsigned integer type with 384 bits

use std::error::Error;
use std::fmt::{self, Display, LowerHex, UpperHex};
use std::ops::{Add, AddAssign, Shl, ShlAssign};
use std::str::FromStr;

/// How many words make up a [U384].
pub const WORDS: usize = 12;
/// How many hex digits fit into one word.
const NIBBLES_PER_WORD: u32 = 8;

/// A 384 bit unsigned integer, stored as 12 words of 32 bits each.
///
/// The words are ordered from least significant to most significant:
/// word 0 holds the lowest 32 bits, word 11 the highest. All arithmetic
/// wraps at 384 bits, just like the native unsigned integers wrap at their
/// width. There is no ordering between values, only equality.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Default)]
pub struct U384([u32; WORDS]);

impl U384 {
    pub const MAX: Self = U384([u32::MAX; WORDS]);
    pub const MIN: Self = U384([0; WORDS]);
    pub const ZERO: Self = Self::MIN;
    pub const ONE: Self = U384([1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
    pub const BITS: u32 = 384;

    #[inline]
    pub const fn new(words: [u32; WORDS]) -> Self {
        Self(words)
    }

    /// Parse a number from hexadecimal text.
    ///
    /// The digits are case insensitive and given most significant first,
    /// without a `0x` prefix, sign or separators. An empty string parses to
    /// zero. Digits beyond the 96 that fit into 384 bits fall out at the top,
    /// the same way an overflowing addition would wrap.
    ///
    /// Internally a 32 bit word is filled nibble by nibble. Each time it is
    /// full, the whole number is moved up by one word and the finished word
    /// is inserted at the least significant position. A trailing partial
    /// word is folded in with a final small shift.
    pub fn from_hex(s: &str) -> Result<Self, ParseHexError> {
        let mut num = Self::ZERO;
        let mut word: u32 = 0;
        let mut nibbles: u32 = 0;
        for (position, character) in s.chars().enumerate() {
            let nibble = match character {
                '0'..='9' => character as u32 & 0x0f,
                'a'..='f' | 'A'..='F' => (character as u32 & 0x0f) + 9,
                _ => {
                    return Err(ParseHexError {
                        character,
                        position,
                    })
                }
            };
            word = (word << 4) | nibble;
            nibbles += 1;
            if nibbles == NIBBLES_PER_WORD {
                // a whole word was read: make room at the bottom, the
                // topmost word falls off
                for j in (1..WORDS).rev() {
                    num.0[j] = num.0[j - 1];
                }
                num.0[0] = word;
                word = 0;
                nibbles = 0;
            }
        }
        // fold in the trailing word that is probably not word aligned
        num <<= nibbles * 4;
        num.0[0] |= word;
        Ok(num)
    }
}

/// The input string contained something that is not a hexadecimal digit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseHexError {
    character: char,
    position: usize,
}

impl Display for ParseHexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid hexadecimal digit {:?} at position {}",
            self.character, self.position
        )
    }
}

impl Error for ParseHexError {}

impl FromStr for U384 {
    type Err = ParseHexError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl AddAssign for U384 {
    /// Multi-precision addition: carry handling is important.
    ///
    /// The words are processed least significant first. An overflow of the
    /// word addition shows up as the sum wrapping below the addend, and the
    /// carry from the last word can overflow a second time when it is added
    /// on top. The carry out of the highest word is discarded, the sum wraps
    /// at 384 bits.
    fn add_assign(&mut self, rhs: Self) {
        let mut carry: u32 = 0;
        for i in 0..WORDS {
            let addend = rhs.0[i];
            let mut sum = self.0[i].wrapping_add(addend);
            let mut overflow = sum < addend;
            sum = sum.wrapping_add(carry);
            overflow |= sum < carry;
            self.0[i] = sum;
            carry = overflow as u32;
        }
    }
}

impl Add for U384 {
    type Output = Self;
    fn add(mut self, rhs: Self) -> Self::Output {
        self += rhs;
        self
    }
}

impl ShlAssign<u32> for U384 {
    /// Multi-precision shift-left, wrapping at 384 bits.
    ///
    /// Works in two phases: whole words are moved first, then the remaining
    /// bit shift ripples a carry from each word into the next. Bits pushed
    /// out of the highest word are discarded, the vacated low bits are zero.
    fn shl_assign(&mut self, rhs: u32) {
        // 1. word-level shifting
        let word_shift = ((rhs / 32) as usize).min(WORDS);
        for j in (word_shift..WORDS).rev() {
            self.0[j] = self.0[j - word_shift];
        }
        for j in 0..word_shift {
            self.0[j] = 0;
        }
        // 2. bit-level shifting
        let bit_shift = rhs % 32;
        if bit_shift > 0 {
            let mut carry: u32 = 0;
            for word in &mut self.0 {
                // highest bits are moved into the next word
                let carry_next = *word >> (32 - bit_shift);
                *word = (*word << bit_shift) | carry;
                carry = carry_next;
            }
        }
    }
}

impl Shl<u32> for U384 {
    type Output = Self;
    fn shl(mut self, rhs: u32) -> Self::Output {
        self <<= rhs;
        self
    }
}

impl UpperHex for U384 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for word in self.0.iter().rev() {
            write!(f, "{word:08X}")?;
        }
        Ok(())
    }
}

impl LowerHex for U384 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for word in self.0.iter().rev() {
            write!(f, "{word:08x}")?;
        }
        Ok(())
    }
}

impl Display for U384 {
    /// Always renders all 96 hex digits, most significant first, uppercase.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        UpperHex::fmt(self, f)
    }
}

// From conversions

impl From<u128> for U384 {
    fn from(value: u128) -> Self {
        let mut words = [0; WORDS];
        words[0] = value as u32;
        words[1] = (value >> 32) as u32;
        words[2] = (value >> 64) as u32;
        words[3] = (value >> 96) as u32;
        Self(words)
    }
}

impl From<u64> for U384 {
    fn from(value: u64) -> Self {
        let mut words = [0; WORDS];
        words[0] = value as u32;
        words[1] = (value >> 32) as u32;
        Self(words)
    }
}

impl From<u32> for U384 {
    fn from(value: u32) -> Self {
        let mut words = [0; WORDS];
        words[0] = value;
        Self(words)
    }
}

impl From<u16> for U384 {
    fn from(value: u16) -> Self {
        Self::from(value as u32)
    }
}

impl From<u8> for U384 {
    fn from(value: u8) -> Self {
        Self::from(value as u32)
    }
}

impl From<[u32; WORDS]> for U384 {
    fn from(words: [u32; WORDS]) -> Self {
        Self(words)
    }
}

impl From<U384> for [u32; WORDS] {
    fn from(value: U384) -> Self {
        value.0
    }
}
