// Copyright © 2023–2026 The Kilim Developers

// This program is free software: you can redistribute it and/or
// modify it under the terms of the GNU Lesser General Public License
// as published by the Free Software Foundation, either version 3 of
// the License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU Lesser General Public
// License and a copy of the GNU General Public License along with
// this program. If not, see <https://www.gnu.org/licenses/>.

use crate::ext::limbs::{self, Limb};
use crate::integer::big::Integer;
use crate::Assign;
use std::error::Error;
use std::fmt::{self, Display, Formatter};

/// The order of the words in a digit buffer.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Order {
    /// The least significant word comes first.
    Lsf,
    /// The most significant word comes first.
    Msf,
}

/// The order of the bytes within each word of a digit buffer.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Endianness {
    /// The least significant byte comes first.
    Little,
    /// The most significant byte comes first.
    Big,
}

/// The word layout of a digit buffer: word order, byte order within a
/// word, bytes per word, and the number of unused high bits (nails)
/// per word.
///
/// # Examples
///
/// ```rust
/// use kilim::integer::{DigitLayout, Endianness, Order};
/// let layout = DigitLayout::new(Order::Msf, Endianness::Big, 4, 0);
/// assert_eq!(layout.bits_per_word(), 32);
/// let packed = DigitLayout::new(Order::Lsf, Endianness::Little, 1, 1);
/// assert_eq!(packed.bits_per_word(), 7);
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct DigitLayout {
    order: Order,
    endianness: Endianness,
    width: usize,
    nails: u32,
}

impl DigitLayout {
    /// Creates a layout.
    ///
    /// # Panics
    ///
    /// Panics if `width` is zero or if `nails` does not leave at
    /// least one significant bit per word.
    pub fn new(
        order: Order,
        endianness: Endianness,
        width: usize,
        nails: u32,
    ) -> DigitLayout {
        assert!(width > 0, "empty word");
        assert!(
            (nails as usize) < width * 8,
            "nails consume the whole word"
        );
        DigitLayout {
            order,
            endianness,
            width,
            nails,
        }
    }

    /// Returns the number of significant bits each word carries.
    #[inline]
    pub fn bits_per_word(&self) -> usize {
        self.width * 8 - self.nails as usize
    }
}

/// An error which can be returned when importing digits.
///
/// # Examples
///
/// ```rust
/// use kilim::integer::{DigitLayout, Endianness, Order};
/// use kilim::Integer;
/// let layout = DigitLayout::new(Order::Lsf, Endianness::Little, 4, 0);
/// // two bytes cannot hold a whole four-byte word
/// let error = Integer::from_digits(&[1, 2], layout).unwrap_err();
/// println!("Import error: {}", error);
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct ImportDigitsError {
    kind: ImportErrorKind,
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
enum ImportErrorKind {
    TooShort,
    RaggedBuffer,
}

impl Display for ImportDigitsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        use self::ImportErrorKind::*;
        let desc = match self.kind {
            TooShort => "buffer is shorter than one word",
            RaggedBuffer => "buffer length is not a multiple of the word size",
        };
        f.write_str(desc)
    }
}

impl Error for ImportDigitsError {}

impl Integer {
    /// Creates an `Integer` from a buffer of words laid out according
    /// to `layout`.
    ///
    /// The imported value is the magnitude; it is never negative.
    /// A buffer shorter than one word (including an empty buffer) is
    /// an error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kilim::integer::{DigitLayout, Endianness, Order};
    /// use kilim::Integer;
    /// let layout = DigitLayout::new(Order::Msf, Endianness::Big, 2, 0);
    /// let i = Integer::from_digits(&[0x12, 0x34, 0x56, 0x78], layout).unwrap();
    /// assert_eq!(i, 0x1234_5678);
    /// ```
    pub fn from_digits(
        bytes: &[u8],
        layout: DigitLayout,
    ) -> Result<Integer, ImportDigitsError> {
        let mut i = Integer::new();
        i.assign_digits(bytes, layout)?;
        Ok(i)
    }

    /// Assigns from a buffer of words laid out according to `layout`,
    /// leaving the value unchanged on failure.
    pub fn assign_digits(
        &mut self,
        bytes: &[u8],
        layout: DigitLayout,
    ) -> Result<(), ImportDigitsError> {
        use self::ImportErrorKind as Kind;

        if bytes.len() < layout.width {
            return Err(ImportDigitsError {
                kind: Kind::TooShort,
            });
        }
        if bytes.len() % layout.width != 0 {
            return Err(ImportDigitsError {
                kind: Kind::RaggedBuffer,
            });
        }
        let words = bytes.len() / layout.width;
        let p = layout.bits_per_word();
        let mut mag = vec![0 as Limb; (words * p).div_ceil(64)];
        for w in 0..words {
            let word = word_bytes(bytes, layout, words, w);
            for b in 0..layout.width {
                let lo = b * 8;
                if lo >= p {
                    break;
                }
                let take = (p - lo).min(8);
                let byte = u64::from(word[b]) & (0xffu64 >> (8 - take));
                or_bits(&mut mag, w * p + lo, byte);
            }
        }
        limbs::trim(&mut mag);
        self.assign(Integer::from_sign_mag(false, mag));
        Ok(())
    }

    /// Writes the magnitude to a buffer of words laid out according
    /// to `layout`.
    ///
    /// The sign is not stored; zero is written as a single zero word.
    /// The export and [`from_digits`][Integer::from_digits] round
    /// trip for every layout.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kilim::integer::{DigitLayout, Endianness, Order};
    /// use kilim::Integer;
    /// let layout = DigitLayout::new(Order::Msf, Endianness::Big, 2, 0);
    /// let i = Integer::from(0x1234_5678);
    /// assert_eq!(i.to_digits(layout), [0x12, 0x34, 0x56, 0x78]);
    /// ```
    pub fn to_digits(&self, layout: DigitLayout) -> Vec<u8> {
        let words = self.digit_count(layout);
        let p = layout.bits_per_word();
        let mut out = vec![0u8; words * layout.width];
        for w in 0..words {
            let mut word = vec![0u8; layout.width];
            for (b, byte) in word.iter_mut().enumerate() {
                let lo = b * 8;
                if lo >= p {
                    break;
                }
                let take = (p - lo).min(8);
                *byte = (bits_at(&self.mag, w * p + lo, take)) as u8;
            }
            let start = match layout.order {
                Order::Lsf => w * layout.width,
                Order::Msf => (words - 1 - w) * layout.width,
            };
            match layout.endianness {
                Endianness::Little => {
                    out[start..start + layout.width].copy_from_slice(&word);
                }
                Endianness::Big => {
                    word.reverse();
                    out[start..start + layout.width].copy_from_slice(&word);
                }
            }
        }
        out
    }

    /// Returns the number of words [`to_digits`][Integer::to_digits]
    /// produces for the value under `layout`.
    ///
    /// Zero still occupies one word.
    #[inline]
    pub fn digit_count(&self, layout: DigitLayout) -> usize {
        let bits = limbs::bit_len(&self.mag);
        bits.div_ceil(layout.bits_per_word()).max(1)
    }
}

// the bytes of word `w` in value order, least significant byte first
fn word_bytes(
    bytes: &[u8],
    layout: DigitLayout,
    words: usize,
    w: usize,
) -> Vec<u8> {
    let start = match layout.order {
        Order::Lsf => w * layout.width,
        Order::Msf => (words - 1 - w) * layout.width,
    };
    let mut word = bytes[start..start + layout.width].to_vec();
    if layout.endianness == Endianness::Big {
        word.reverse();
    }
    word
}

fn or_bits(mag: &mut [Limb], pos: usize, val: u64) {
    let limb = pos / 64;
    let off = pos % 64;
    mag[limb] |= val << off;
    if off > 56 && limb + 1 < mag.len() {
        mag[limb + 1] |= val >> (64 - off);
    }
}

// up to eight bits starting at `pos`; bits past the top are zero
fn bits_at(mag: &[Limb], pos: usize, count: usize) -> u64 {
    let limb = pos / 64;
    let off = pos % 64;
    if limb >= mag.len() {
        return 0;
    }
    let mut val = mag[limb] >> off;
    if off + count > 64 && limb + 1 < mag.len() {
        val |= mag[limb + 1] << (64 - off);
    }
    val & (u64::MAX >> (64 - count))
}

#[cfg(test)]
mod tests {
    use super::{DigitLayout, Endianness, Order};
    use crate::Integer;

    fn layouts() -> Vec<DigitLayout> {
        let mut all = Vec::new();
        for order in [Order::Lsf, Order::Msf] {
            for endianness in [Endianness::Little, Endianness::Big] {
                for width in [1usize, 2, 3, 4, 8] {
                    for nails in [0u32, 1, 7] {
                        all.push(DigitLayout::new(
                            order, endianness, width, nails,
                        ));
                    }
                }
            }
        }
        all
    }

    #[test]
    fn check_round_trip() {
        let values = [
            Integer::new(),
            Integer::from(1),
            Integer::from(0xff),
            Integer::from(0x1234_5678_9abc_def0_u64),
            (Integer::from(1u32) << 200u32) - 0x1234,
        ];
        for layout in layouts() {
            for v in &values {
                let bytes = v.to_digits(layout);
                assert_eq!(bytes.len() % layout.bits_per_word().div_ceil(8), 0);
                let back = Integer::from_digits(&bytes, layout).unwrap();
                assert_eq!(&back, v, "layout {:?} value {}", layout, v);
            }
        }
    }

    #[test]
    fn check_export_zero() {
        for layout in layouts() {
            let bytes = Integer::new().to_digits(layout);
            assert!(bytes.iter().all(|&b| b == 0));
            assert_eq!(Integer::new().digit_count(layout), 1);
            let back = Integer::from_digits(&bytes, layout).unwrap();
            assert_eq!(back, 0);
        }
    }

    #[test]
    fn check_known_layouts() {
        let i = Integer::from(0x1234_5678);
        let be = DigitLayout::new(Order::Msf, Endianness::Big, 4, 0);
        assert_eq!(i.to_digits(be), [0x12, 0x34, 0x56, 0x78]);
        let le = DigitLayout::new(Order::Lsf, Endianness::Little, 4, 0);
        assert_eq!(i.to_digits(le), [0x78, 0x56, 0x34, 0x12]);
        let le16 = DigitLayout::new(Order::Lsf, Endianness::Little, 2, 0);
        assert_eq!(i.to_digits(le16), [0x78, 0x56, 0x34, 0x12]);
        let msf_le16 = DigitLayout::new(Order::Msf, Endianness::Little, 2, 0);
        assert_eq!(i.to_digits(msf_le16), [0x34, 0x12, 0x78, 0x56]);
    }

    #[test]
    fn check_nails() {
        // seven payload bits per byte
        let layout = DigitLayout::new(Order::Lsf, Endianness::Little, 1, 1);
        let i = Integer::from(0x81u32);
        let bytes = i.to_digits(layout);
        assert_eq!(bytes, [0x01, 0x01]);
        assert_eq!(Integer::from_digits(&bytes, layout).unwrap(), 0x81);
        // nail bits in the source are ignored on import
        let with_nails = [0x81u8, 0x81];
        assert_eq!(Integer::from_digits(&with_nails, layout).unwrap(), 0x81);
    }

    #[test]
    fn check_import_failures() {
        let layout = DigitLayout::new(Order::Lsf, Endianness::Little, 4, 0);
        assert!(Integer::from_digits(&[], layout).is_err());
        assert!(Integer::from_digits(&[1, 2], layout).is_err());
        assert!(Integer::from_digits(&[1, 2, 3, 4, 5], layout).is_err());
        let mut value = Integer::from(42);
        assert!(value.assign_digits(&[1, 2], layout).is_err());
        assert_eq!(value, 42);
    }

    #[test]
    fn check_digit_count() {
        let layout = DigitLayout::new(Order::Lsf, Endianness::Little, 2, 0);
        assert_eq!(Integer::from(0xffff).digit_count(layout), 1);
        assert_eq!(Integer::from(0x1_0000).digit_count(layout), 2);
        let seven = DigitLayout::new(Order::Lsf, Endianness::Little, 1, 1);
        assert_eq!(Integer::from(0x7f).digit_count(seven), 1);
        assert_eq!(Integer::from(0x80).digit_count(seven), 2);
    }
}
