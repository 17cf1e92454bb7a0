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

use crate::ext::limbs::{self, Limb, LIMB_BITS};
use crate::Assign;
use std::cmp::Ordering;
use std::error::Error;
use std::fmt::{
    self, Binary, Debug, Display, Formatter, LowerHex, Octal, UpperHex,
};
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// An arbitrary-precision integer.
///
/// Standard arithmetic operations, bitwise operations and comparisons
/// are supported. In standard arithmetic operations such as addition,
/// you can mix `Integer` and primitive integer types; the result will
/// be an `Integer`.
///
/// Internally the integer is stored as a sign and a magnitude, not
/// using two’s-complement representation; however, for bitwise
/// operations and shifts, the functionality is the same as if the
/// representation was using two’s complement.
///
/// # Examples
///
/// ```rust
/// use kilim::{Assign, Integer};
/// // Create an integer initialized as zero.
/// let mut int = Integer::new();
/// assert_eq!(int, 0);
/// assert_eq!(int.to_u32(), Some(0));
/// int.assign(-14);
/// assert_eq!(int, -14);
/// assert_eq!(int.to_u32(), None);
/// assert_eq!(int.to_i32(), Some(-14));
/// ```
///
/// Arithmetic operations with mixed arbitrary and primitive types are
/// allowed.
///
/// ```rust
/// use kilim::Integer;
/// let mut a = Integer::from(0xc);
/// a = (a << 80) + 0xffee;
/// assert_eq!(a.to_string_radix(16), "c0000000000000000ffee");
/// //                                  ^   ^   ^   ^   ^
/// //                                 80  64  48  32  16
/// ```
///
/// Bitwise operations on `Integer` values behave as if the value uses
/// two’s-complement representation.
///
/// ```rust
/// use kilim::Integer;
///
/// let mut i = Integer::from(1);
/// i = i << 1000;
/// // i is now 1000000... (1000 zeros)
/// assert_eq!(i.significant_bits(), 1001);
/// assert_eq!(i.find_one(0), Some(1000));
/// i -= 1;
/// // i is now 111111... (1000 ones)
/// assert_eq!(i.count_ones(), Some(1000));
///
/// let a = Integer::from(0xf00d);
/// let all_ones_xor_a = Integer::from(-1) ^ &a;
/// // a is unchanged as we borrowed it
/// let complement_a = !a;
/// assert_eq!(all_ones_xor_a, complement_a);
/// assert_eq!(complement_a, -0xf00e);
/// assert_eq!(format!("{:x}", complement_a), "-f00e");
/// ```
///
/// To initialize a large `Integer` that does not fit in a primitive
/// type, you can parse a string.
///
/// ```rust
/// use kilim::Integer;
/// let s1 = "123456789012345678901234567890";
/// let i1 = s1.parse::<Integer>().unwrap();
/// assert_eq!(i1.significant_bits(), 97);
/// let s2 = "ffff0000ffff0000ffff0000ffff0000ffff0000";
/// let i2 = Integer::from_str_radix(s2, 16).unwrap();
/// assert_eq!(i2.significant_bits(), 160);
/// assert_eq!(i2.count_ones(), Some(80));
/// ```
///
/// Most methods come in pairs: one that consumes the operand and one
/// that mutates it in place.
///
/// ```rust
/// use kilim::Integer;
///
/// // 1. consume the operand
/// let a = Integer::from(-15);
/// let abs_a = a.abs();
/// assert_eq!(abs_a, 15);
///
/// // 2. mutate the operand
/// let mut b = Integer::from(-16);
/// b.abs_mut();
/// assert_eq!(b, 16);
/// ```
#[derive(Clone)]
pub struct Integer {
    // invariant: `mag` has no most-significant zero limbs, and
    // `neg` is false when `mag` is empty
    pub(crate) neg: bool,
    pub(crate) mag: Vec<Limb>,
}

impl Integer {
    /// Constructs a new arbitrary-precision integer with value 0.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kilim::Integer;
    /// let i = Integer::new();
    /// assert_eq!(i, 0);
    /// ```
    #[inline]
    pub fn new() -> Integer {
        Integer {
            neg: false,
            mag: Vec::new(),
        }
    }

    /// Constructs a new arbitrary-precision integer with value 0 and
    /// at least the specified capacity.
    ///
    /// The capacity is a performance hint only; it never changes the
    /// value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kilim::Integer;
    /// let i = Integer::with_capacity(137);
    /// assert_eq!(i, 0);
    /// assert!(i.capacity() >= 137);
    /// ```
    #[inline]
    pub fn with_capacity(bits: usize) -> Integer {
        Integer {
            neg: false,
            mag: Vec::with_capacity(bits.div_ceil(LIMB_BITS as usize)),
        }
    }

    /// Returns the capacity in bits that can be stored without
    /// reallocating.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kilim::Integer;
    /// let i = Integer::with_capacity(137);
    /// assert!(i.capacity() >= 137);
    /// ```
    #[inline]
    pub fn capacity(&self) -> usize {
        self.mag
            .capacity()
            .checked_mul(LIMB_BITS as usize)
            .expect("overflow")
    }

    /// Reserves capacity for at least `additional` more bits in the
    /// `Integer`.
    ///
    /// If the integer already has enough excess capacity, this
    /// function does nothing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kilim::Integer;
    /// // 0x2000_0000 needs 30 bits.
    /// let mut i = Integer::from(0x2000_0000);
    /// i.reserve(34);
    /// let capacity = i.capacity();
    /// assert!(capacity >= 64);
    /// i.reserve(34);
    /// assert!(i.capacity() == capacity);
    /// ```
    pub fn reserve(&mut self, additional: usize) {
        if additional == 0 {
            return;
        }
        let used_bits = limbs::bit_len(&self.mag);
        let req_limbs = used_bits
            .checked_add(additional)
            .expect("overflow")
            .div_ceil(LIMB_BITS as usize);
        if req_limbs > self.mag.capacity() {
            self.mag.reserve(req_limbs - self.mag.len());
        }
    }

    /// Shrinks the capacity of the `Integer` as much as possible.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kilim::Integer;
    /// // let i be 100 bits wide
    /// let mut i = Integer::from_str_radix("fffff12345678901234567890", 16)
    ///     .unwrap();
    /// assert!(i.capacity() >= 100);
    /// i >>= 80;
    /// i.shrink_to_fit();
    /// assert!(i.capacity() >= 20);
    /// ```
    #[inline]
    pub fn shrink_to_fit(&mut self) {
        self.mag.shrink_to_fit();
    }

    /// Creates an `Integer` from an `f32` if it is finite, rounding
    /// towards zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kilim::Integer;
    /// let i = Integer::from_f32(-5.6).unwrap();
    /// assert_eq!(i, -5);
    /// let neg_inf = Integer::from_f32(f32::NEG_INFINITY);
    /// assert!(neg_inf.is_none());
    /// ```
    #[inline]
    pub fn from_f32(val: f32) -> Option<Integer> {
        Integer::from_f64(val.into())
    }

    /// Creates an `Integer` from an `f64` if it is finite, rounding
    /// towards zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kilim::Integer;
    /// let i = Integer::from_f64(1e20).unwrap();
    /// assert_eq!(i, "100000000000000000000".parse::<Integer>().unwrap());
    /// let inf = Integer::from_f64(f64::INFINITY);
    /// assert!(inf.is_none());
    /// ```
    pub fn from_f64(val: f64) -> Option<Integer> {
        if !val.is_finite() {
            return None;
        }
        let neg = val < 0.0;
        let val = val.abs();
        if val < 1.0 {
            return Some(Integer::new());
        }
        // decompose into a 53-bit mantissa and a power of two
        let bits = val.to_bits();
        let exp = ((bits >> 52) & 0x7ff) as i64 - 1023 - 52;
        let mant = (bits & ((1 << 52) - 1)) | (1 << 52);
        let mag = if exp >= 0 {
            limbs::shl(&[mant], exp as usize)
        } else {
            limbs::shr(&[mant], (-exp) as usize)
        };
        Some(Integer::from_sign_mag(neg, mag))
    }

    /// Assigns from an `f32` if it is finite, rounding towards zero.
    #[inline]
    pub fn assign_f32(&mut self, val: f32) -> Result<(), ()> {
        self.assign_f64(val.into())
    }

    /// Assigns from an `f64` if it is finite, rounding towards zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kilim::Integer;
    /// let mut i = Integer::new();
    /// let ret = i.assign_f64(12.7);
    /// assert!(ret.is_ok());
    /// assert_eq!(i, 12);
    /// let ret = i.assign_f64(1.0 / 0.0);
    /// assert!(ret.is_err());
    /// assert_eq!(i, 12);
    /// ```
    #[inline]
    pub fn assign_f64(&mut self, val: f64) -> Result<(), ()> {
        match Integer::from_f64(val) {
            Some(i) => {
                *self = i;
                Ok(())
            }
            None => Err(()),
        }
    }

    /// Parses an `Integer` using the given radix.
    ///
    /// The radix can be between 2 and 62 inclusive, or 0 to detect
    /// the radix from a prefix: `0x` or `0X` for hexadecimal, a
    /// leading `0` for octal, decimal otherwise.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kilim::Integer;
    /// let i = Integer::from_str_radix("-ff", 16).unwrap();
    /// assert_eq!(i, -0xff);
    /// let auto = Integer::from_str_radix("0x1f", 0).unwrap();
    /// assert_eq!(auto, 31);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `radix` is 1, negative, or greater than 62.
    #[inline]
    pub fn from_str_radix(
        src: &str,
        radix: i32,
    ) -> Result<Integer, ParseIntegerError> {
        let mut i = Integer::new();
        i.assign_str_radix(src, radix)?;
        Ok(i)
    }

    /// Checks if an `Integer` can be parsed.
    ///
    /// If this method does not return an error, neither will any
    /// other function that parses an `Integer`. If this method
    /// returns an error, the other functions will return the same
    /// error.
    ///
    /// The string can start with an optional minus or plus sign.
    /// Whitespace is not allowed anywhere in the string, including in
    /// the beginning and end.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kilim::Integer;
    ///
    /// let valid1 = Integer::valid_str_radix("1223", 4);
    /// let i1 = Integer::from(valid1.unwrap());
    /// assert_eq!(i1, 3 + 4 * (2 + 4 * (2 + 4 * 1)));
    /// let valid2 = Integer::valid_str_radix("12yz", 36);
    /// let i2 = Integer::from(valid2.unwrap());
    /// assert_eq!(i2, 35 + 36 * (34 + 36 * (2 + 36 * 1)));
    ///
    /// let invalid = Integer::valid_str_radix("123", 3);
    /// let invalid_f = Integer::from_str_radix("123", 3);
    /// assert_eq!(invalid.unwrap_err(), invalid_f.unwrap_err());
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `radix` is 1, negative, or greater than 62.
    pub fn valid_str_radix(
        src: &str,
        radix: i32,
    ) -> Result<ValidInteger, ParseIntegerError> {
        use self::ParseErrorKind as Kind;

        assert!(
            radix == 0 || (2..=62).contains(&radix),
            "radix out of range"
        );
        let bytes = src.as_bytes();
        let (neg, rest) = match bytes.first() {
            Some(&b'-') => (true, &bytes[1..]),
            Some(&b'+') => (false, &bytes[1..]),
            _ => (false, bytes),
        };
        let (radix, digits) = if radix != 0 {
            (radix, rest)
        } else if rest.starts_with(b"0x") || rest.starts_with(b"0X") {
            (16, &rest[2..])
        } else if rest.len() > 1 && rest[0] == b'0' {
            (8, &rest[1..])
        } else {
            (10, rest)
        };
        if digits.is_empty() {
            return Err(ParseIntegerError {
                kind: Kind::NoDigits,
            });
        }
        for &b in digits {
            if digit_value(b, radix).is_none() {
                return Err(ParseIntegerError {
                    kind: Kind::InvalidDigit,
                });
            }
        }
        Ok(ValidInteger { neg, digits, radix })
    }

    /// Parses an `Integer` from a string in decimal, leaving the
    /// value unchanged on failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kilim::Integer;
    /// let mut i = Integer::new();
    /// i.assign_str("123").unwrap();
    /// assert_eq!(i, 123);
    /// let ret = i.assign_str("bad");
    /// assert!(ret.is_err());
    /// assert_eq!(i, 123);
    /// ```
    #[inline]
    pub fn assign_str(&mut self, src: &str) -> Result<(), ParseIntegerError> {
        self.assign_str_radix(src, 10)
    }

    /// Parses an `Integer` from a string with the given radix,
    /// leaving the value unchanged on failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kilim::Integer;
    /// let mut i = Integer::new();
    /// i.assign_str_radix("ff", 16).unwrap();
    /// assert_eq!(i, 0xff);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `radix` is 1, negative, or greater than 62.
    pub fn assign_str_radix(
        &mut self,
        src: &str,
        radix: i32,
    ) -> Result<(), ParseIntegerError> {
        let valid = Integer::valid_str_radix(src, radix)?;
        self.assign(Integer::from(valid));
        Ok(())
    }

    /// Converts to an `i8` if the value fits.
    #[inline]
    pub fn to_i8(&self) -> Option<i8> {
        self.to_i64().and_then(|i| i.try_into().ok())
    }

    /// Converts to an `i16` if the value fits.
    #[inline]
    pub fn to_i16(&self) -> Option<i16> {
        self.to_i64().and_then(|i| i.try_into().ok())
    }

    /// Converts to an `i32` if the value fits.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kilim::Integer;
    /// let fits = Integer::from(-50);
    /// assert_eq!(fits.to_i32(), Some(-50));
    /// let small = Integer::from(-123456789012345_i64);
    /// assert_eq!(small.to_i32(), None);
    /// let large = Integer::from(123456789012345_u64);
    /// assert_eq!(large.to_i32(), None);
    /// ```
    #[inline]
    pub fn to_i32(&self) -> Option<i32> {
        self.to_i64().and_then(|i| i.try_into().ok())
    }

    /// Converts to an `i64` if the value fits.
    ///
    /// The most negative value round-trips: `i64::MIN` converts back
    /// to `Some(i64::MIN)` even though its magnitude has no positive
    /// counterpart at the same width.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kilim::Integer;
    /// let fits = Integer::from(i64::MIN);
    /// assert_eq!(fits.to_i64(), Some(i64::MIN));
    /// let too_small = Integer::from(i64::MIN) - 1u32;
    /// assert_eq!(too_small.to_i64(), None);
    /// ```
    pub fn to_i64(&self) -> Option<i64> {
        let m = match self.mag.len() {
            0 => 0,
            1 => self.mag[0],
            _ => return None,
        };
        if self.neg {
            if m <= 1 << 63 {
                Some((m as i64).wrapping_neg())
            } else {
                None
            }
        } else if m <= i64::MAX as u64 {
            Some(m as i64)
        } else {
            None
        }
    }

    /// Converts to an `i128` if the value fits.
    pub fn to_i128(&self) -> Option<i128> {
        let m = self.abs_u128()?;
        if self.neg {
            if m <= 1 << 127 {
                Some((m as i128).wrapping_neg())
            } else {
                None
            }
        } else if m <= i128::MAX as u128 {
            Some(m as i128)
        } else {
            None
        }
    }

    /// Converts to an `isize` if the value fits.
    #[inline]
    pub fn to_isize(&self) -> Option<isize> {
        self.to_i64().and_then(|i| i.try_into().ok())
    }

    /// Converts to a `u8` if the value fits.
    #[inline]
    pub fn to_u8(&self) -> Option<u8> {
        self.to_u64().and_then(|u| u.try_into().ok())
    }

    /// Converts to a `u16` if the value fits.
    #[inline]
    pub fn to_u16(&self) -> Option<u16> {
        self.to_u64().and_then(|u| u.try_into().ok())
    }

    /// Converts to a `u32` if the value fits.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kilim::Integer;
    /// let fits = Integer::from(1234567890);
    /// assert_eq!(fits.to_u32(), Some(1234567890));
    /// let neg = Integer::from(-1);
    /// assert_eq!(neg.to_u32(), None);
    /// ```
    #[inline]
    pub fn to_u32(&self) -> Option<u32> {
        self.to_u64().and_then(|u| u.try_into().ok())
    }

    /// Converts to a `u64` if the value fits.
    pub fn to_u64(&self) -> Option<u64> {
        if self.neg {
            return None;
        }
        match self.mag.len() {
            0 => Some(0),
            1 => Some(self.mag[0]),
            _ => None,
        }
    }

    /// Converts to a `u128` if the value fits.
    pub fn to_u128(&self) -> Option<u128> {
        if self.neg {
            return None;
        }
        self.abs_u128()
    }

    /// Converts to a `usize` if the value fits.
    #[inline]
    pub fn to_usize(&self) -> Option<usize> {
        self.to_u64().and_then(|u| u.try_into().ok())
    }

    /// Converts to an `i8`, wrapping if the value does not fit.
    #[inline]
    pub fn to_i8_wrapping(&self) -> i8 {
        self.to_u8_wrapping() as i8
    }

    /// Converts to an `i16`, wrapping if the value does not fit.
    #[inline]
    pub fn to_i16_wrapping(&self) -> i16 {
        self.to_u16_wrapping() as i16
    }

    /// Converts to an `i32`, wrapping if the value does not fit.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kilim::Integer;
    /// let fits = Integer::from(-0xabcdef_i32);
    /// assert_eq!(fits.to_i32_wrapping(), -0xabcdef);
    /// let large = Integer::from(0x1000_ffff_ffff_u64);
    /// assert_eq!(large.to_i32_wrapping(), -1);
    /// ```
    #[inline]
    pub fn to_i32_wrapping(&self) -> i32 {
        self.to_u32_wrapping() as i32
    }

    /// Converts to an `i64`, wrapping if the value does not fit.
    #[inline]
    pub fn to_i64_wrapping(&self) -> i64 {
        self.to_u64_wrapping() as i64
    }

    /// Converts to an `i128`, wrapping if the value does not fit.
    #[inline]
    pub fn to_i128_wrapping(&self) -> i128 {
        self.to_u128_wrapping() as i128
    }

    /// Converts to an `isize`, wrapping if the value does not fit.
    #[inline]
    pub fn to_isize_wrapping(&self) -> isize {
        self.to_i64_wrapping() as isize
    }

    /// Converts to a `u8`, wrapping if the value does not fit.
    #[inline]
    pub fn to_u8_wrapping(&self) -> u8 {
        self.to_u64_wrapping() as u8
    }

    /// Converts to a `u16`, wrapping if the value does not fit.
    #[inline]
    pub fn to_u16_wrapping(&self) -> u16 {
        self.to_u64_wrapping() as u16
    }

    /// Converts to a `u32`, wrapping if the value does not fit.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kilim::Integer;
    /// let neg = Integer::from(-1);
    /// assert_eq!(neg.to_u32_wrapping(), u32::MAX);
    /// ```
    #[inline]
    pub fn to_u32_wrapping(&self) -> u32 {
        self.to_u64_wrapping() as u32
    }

    /// Converts to a `u64`, wrapping if the value does not fit.
    ///
    /// Wrapping reduces the value modulo 2<sup>64</sup>.
    pub fn to_u64_wrapping(&self) -> u64 {
        let low = self.mag.first().copied().unwrap_or(0);
        if self.neg {
            low.wrapping_neg()
        } else {
            low
        }
    }

    /// Converts to a `u128`, wrapping if the value does not fit.
    pub fn to_u128_wrapping(&self) -> u128 {
        let lo = self.mag.first().copied().unwrap_or(0);
        let hi = self.mag.get(1).copied().unwrap_or(0);
        let low = u128::from(lo) | (u128::from(hi) << 64);
        if self.neg {
            low.wrapping_neg()
        } else {
            low
        }
    }

    /// Converts to a `usize`, wrapping if the value does not fit.
    #[inline]
    pub fn to_usize_wrapping(&self) -> usize {
        self.to_u64_wrapping() as usize
    }

    /// Converts to an `f32`, rounding towards zero.
    ///
    /// If the value is too large in magnitude, the result is
    /// infinity.
    #[inline]
    pub fn to_f32(&self) -> f32 {
        let (top, shift) = self.float_parts(24);
        let pow = if shift == 0 {
            1.0
        } else if shift <= 127 {
            f32::from_bits((127 + shift as u32) << 23)
        } else {
            f32::INFINITY
        };
        let abs = top as f32 * pow;
        if self.neg {
            -abs
        } else {
            abs
        }
    }

    /// Converts to an `f64`, rounding towards zero.
    ///
    /// If the value is too large in magnitude, the result is
    /// infinity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kilim::Integer;
    /// let i = Integer::from(0xff) << 1500u32;
    /// assert_eq!(i.to_f64(), f64::INFINITY);
    /// ```
    #[inline]
    pub fn to_f64(&self) -> f64 {
        let (top, shift) = self.float_parts(53);
        let pow = if shift == 0 {
            1.0
        } else if shift <= 1023 {
            f64::from_bits(u64::from(1023 + shift as u32) << 52)
        } else {
            f64::INFINITY
        };
        let abs = top as f64 * pow;
        if self.neg {
            -abs
        } else {
            abs
        }
    }

    /// Converts to an `f32` mantissa and exponent, rounding towards
    /// zero.
    ///
    /// The returned mantissa is in the range ±[0.5, 1) and satisfies
    /// mantissa × 2<sup>exponent</sup> = `self` within the mantissa
    /// precision. Zero yields `(0.0, 0)`.
    #[inline]
    pub fn to_f32_exp(&self) -> (f32, u32) {
        let (m, exp) = self.to_f64_exp();
        (m as f32, exp)
    }

    /// Converts to an `f64` mantissa and exponent, rounding towards
    /// zero.
    ///
    /// The returned mantissa is in the range ±[0.5, 1) and satisfies
    /// mantissa × 2<sup>exponent</sup> = `self` within the mantissa
    /// precision. Zero yields `(0.0, 0)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kilim::Integer;
    /// let i = Integer::from(6);
    /// let (m, exp) = i.to_f64_exp();
    /// assert_eq!((m, exp), (0.75, 3));
    /// ```
    pub fn to_f64_exp(&self) -> (f64, u32) {
        let bits = limbs::bit_len(&self.mag);
        if bits == 0 {
            return (0.0, 0);
        }
        let top = if bits >= 53 {
            limbs::shr(&self.mag, bits - 53)[0]
        } else {
            self.mag[0] << (53 - bits)
        };
        // top has its 53rd bit set, so this lands in [0.5, 1)
        let mut m = top as f64 / (1u64 << 53) as f64;
        if self.neg {
            m = -m;
        }
        (m, cast_u32(bits))
    }

    /// Returns a string representation of the value in the given
    /// radix.
    ///
    /// The radix can be between 2 and 62 inclusive; digits above 9
    /// use lowercase letters up to radix 36, then uppercase letters
    /// follow.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kilim::Integer;
    /// let i = Integer::from(-10);
    /// assert_eq!(i.to_string_radix(16), "-a");
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `radix` is less than 2 or greater than 62.
    pub fn to_string_radix(&self, radix: i32) -> String {
        let mut s = String::new();
        append_to_string(&mut s, self, radix, false);
        s
    }

    /// Returns the exact length of the string produced by
    /// [`to_string_radix`][Integer::to_string_radix], including the
    /// sign, without building the string.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kilim::Integer;
    /// let i = Integer::from(-1000);
    /// assert_eq!(i.size_in_base(10), 5);
    /// assert_eq!(i.size_in_base(2), 11);
    /// assert_eq!(Integer::new().size_in_base(10), 1);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `radix` is less than 2 or greater than 62.
    pub fn size_in_base(&self, radix: i32) -> usize {
        assert!((2..=62).contains(&radix), "radix out of range");
        let sign = usize::from(self.neg);
        if self.mag.is_empty() {
            return 1 + sign;
        }
        let bits = limbs::bit_len(&self.mag);
        if radix.count_ones() == 1 {
            let log = radix.trailing_zeros() as usize;
            return bits.div_ceil(log) + sign;
        }
        let (big_base, chunk_digits) = radix_chunk(radix);
        let mut mag = self.mag.clone();
        let mut digits = 0;
        loop {
            let (q, r) = limbs::div_rem_limb(&mag, big_base);
            if q.is_empty() {
                let mut top = r;
                while top != 0 {
                    digits += 1;
                    top /= radix as u64;
                }
                return digits + sign;
            }
            digits += chunk_digits;
            mag = q;
        }
    }

    /// Returns the number of limbs used to store the magnitude.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kilim::Integer;
    /// assert_eq!(Integer::new().limb_count(), 0);
    /// let i = Integer::from(1u8) << 64u32;
    /// assert_eq!(i.limb_count(), 2);
    /// ```
    #[inline]
    pub fn limb_count(&self) -> usize {
        self.mag.len()
    }

    /// Returns the limb of the magnitude at the given index, with
    /// index 0 being the least significant. Indices beyond
    /// [`limb_count`][Integer::limb_count] yield 0.
    #[inline]
    pub fn limb(&self, index: usize) -> u64 {
        self.mag.get(index).copied().unwrap_or(0)
    }

    /// Returns `true` if the value is even.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kilim::Integer;
    /// assert!(Integer::new().is_even());
    /// assert!(!Integer::from(-5).is_even());
    /// ```
    #[inline]
    pub fn is_even(&self) -> bool {
        self.mag.first().map_or(true, |&l| l & 1 == 0)
    }

    /// Returns `true` if the value is odd.
    #[inline]
    pub fn is_odd(&self) -> bool {
        !self.is_even()
    }

    /// Returns the ordering of the value against zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kilim::Integer;
    /// use std::cmp::Ordering;
    /// assert_eq!(Integer::from(-5).cmp0(), Ordering::Less);
    /// assert_eq!(Integer::new().cmp0(), Ordering::Equal);
    /// assert_eq!(Integer::from(5).cmp0(), Ordering::Greater);
    /// ```
    #[inline]
    pub fn cmp0(&self) -> Ordering {
        if self.mag.is_empty() {
            Ordering::Equal
        } else if self.neg {
            Ordering::Less
        } else {
            Ordering::Greater
        }
    }

    /// Compares the absolute values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kilim::Integer;
    /// use std::cmp::Ordering;
    /// let a = Integer::from(-10);
    /// let b = Integer::from(4);
    /// assert_eq!(a.cmp(&b), Ordering::Less);
    /// assert_eq!(a.cmp_abs(&b), Ordering::Greater);
    /// ```
    #[inline]
    pub fn cmp_abs(&self, other: &Integer) -> Ordering {
        limbs::cmp(&self.mag, &other.mag)
    }

    /// Returns the number of bits required to represent the absolute
    /// value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kilim::Integer;
    /// assert_eq!(Integer::from(0).significant_bits(), 0);
    /// assert_eq!(Integer::from(4).significant_bits(), 3);
    /// assert_eq!(Integer::from(-7).significant_bits(), 3);
    /// ```
    #[inline]
    pub fn significant_bits(&self) -> u32 {
        cast_u32(limbs::bit_len(&self.mag))
    }

    /// Computes the absolute value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kilim::Integer;
    /// let i = Integer::from(-100);
    /// let abs = i.abs();
    /// assert_eq!(abs, 100);
    /// ```
    #[inline]
    pub fn abs(mut self) -> Integer {
        self.abs_mut();
        self
    }

    /// Computes the absolute value.
    #[inline]
    pub fn abs_mut(&mut self) {
        self.neg = false;
    }

    /// Computes the signum.
    ///
    /// * 0 if the value is zero
    /// * 1 if the value is positive
    /// * −1 if the value is negative
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kilim::Integer;
    /// let i = Integer::from(-100);
    /// let signum = i.signum();
    /// assert_eq!(signum, -1);
    /// ```
    #[inline]
    pub fn signum(mut self) -> Integer {
        self.signum_mut();
        self
    }

    /// Computes the signum.
    #[inline]
    pub fn signum_mut(&mut self) {
        if !self.mag.is_empty() {
            self.mag.clear();
            self.mag.push(1);
        }
    }

    /// Adds the product `a` × `b` to `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kilim::Integer;
    /// let mut acc = Integer::from(100);
    /// acc.add_mul_mut(&Integer::from(3), &Integer::from(-7));
    /// assert_eq!(acc, 79);
    /// ```
    pub fn add_mul_mut(&mut self, a: &Integer, b: &Integer) {
        let p_neg = a.neg != b.neg;
        let p_mag = limbs::mul(&a.mag, &b.mag);
        self.add_signed(p_neg && !p_mag.is_empty(), &p_mag);
    }

    /// Adds the product `a` × `b` to `self`.
    #[inline]
    pub fn add_mul(mut self, a: &Integer, b: &Integer) -> Integer {
        self.add_mul_mut(a, b);
        self
    }

    /// Subtracts the product `a` × `b` from `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kilim::Integer;
    /// let mut acc = Integer::from(100);
    /// acc.sub_mul_mut(&Integer::from(3), &Integer::from(7));
    /// assert_eq!(acc, 79);
    /// ```
    pub fn sub_mul_mut(&mut self, a: &Integer, b: &Integer) {
        let p_neg = a.neg != b.neg;
        let p_mag = limbs::mul(&a.mag, &b.mag);
        self.add_signed(!p_neg && !p_mag.is_empty(), &p_mag);
    }

    /// Subtracts the product `a` × `b` from `self`.
    #[inline]
    pub fn sub_mul(mut self, a: &Integer, b: &Integer) -> Integer {
        self.sub_mul_mut(a, b);
        self
    }

    /// Counts the ones in the binary representation.
    ///
    /// Negative values have infinitely many ones under sign
    /// extension, so the count is `None` for them.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kilim::Integer;
    /// assert_eq!(Integer::from(0).count_ones(), Some(0));
    /// assert_eq!(Integer::from(15).count_ones(), Some(4));
    /// assert_eq!(Integer::from(-1).count_ones(), None);
    /// ```
    pub fn count_ones(&self) -> Option<u32> {
        if self.neg {
            None
        } else {
            Some(self.mag.iter().map(|l| l.count_ones()).sum())
        }
    }

    /// Counts the zeros in the binary representation.
    ///
    /// Non-negative values have infinitely many leading zeros, so the
    /// count is `None` for them.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kilim::Integer;
    /// assert_eq!(Integer::from(0).count_zeros(), None);
    /// assert_eq!(Integer::from(-1).count_zeros(), Some(0));
    /// assert_eq!(Integer::from(-2).count_zeros(), Some(1));
    /// ```
    pub fn count_zeros(&self) -> Option<u32> {
        if !self.neg {
            return None;
        }
        // the zeros of -x are the ones of x - 1
        let m1 = limbs::sub_limb(&self.mag, 1);
        Some(m1.iter().map(|l| l.count_ones()).sum())
    }

    /// Returns the location of the first zero bit, starting at
    /// `start`.
    ///
    /// For negative values, which are all ones beyond their
    /// significant bits under sign extension, there may be no zero to
    /// find.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kilim::Integer;
    /// // -2 is ...11111110
    /// assert_eq!(Integer::from(-2).find_zero(0), Some(0));
    /// assert_eq!(Integer::from(-2).find_zero(1), None);
    /// // 15 is 1111
    /// assert_eq!(Integer::from(15).find_zero(0), Some(4));
    /// assert_eq!(Integer::from(15).find_zero(20), Some(20));
    /// ```
    pub fn find_zero(&self, start: u32) -> Option<u32> {
        let start = start as usize;
        if !self.neg {
            let bits = limbs::bit_len(&self.mag);
            for i in start..bits {
                if !limbs::get_bit(&self.mag, i) {
                    return Some(cast_u32(i));
                }
            }
            return Some(cast_u32(start.max(bits)));
        }
        let limit = self.mag.len() * 64;
        for i in start..limit {
            if !self.twos_bit(i) {
                return Some(cast_u32(i));
            }
        }
        None
    }

    /// Returns the location of the first one bit, starting at
    /// `start`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kilim::Integer;
    /// // -16 is ...11110000
    /// assert_eq!(Integer::from(-16).find_one(0), Some(4));
    /// assert_eq!(Integer::from(-16).find_one(20), Some(20));
    /// // 16 is 10000
    /// assert_eq!(Integer::from(16).find_one(0), Some(4));
    /// assert_eq!(Integer::from(16).find_one(20), None);
    /// ```
    pub fn find_one(&self, start: u32) -> Option<u32> {
        let start = start as usize;
        if !self.neg {
            let bits = limbs::bit_len(&self.mag);
            for i in start..bits {
                if limbs::get_bit(&self.mag, i) {
                    return Some(cast_u32(i));
                }
            }
            return None;
        }
        let limit = self.mag.len() * 64;
        for i in start..limit {
            if self.twos_bit(i) {
                return Some(cast_u32(i));
            }
        }
        // sign extension is all ones from here on
        Some(cast_u32(start.max(limit)))
    }

    /// Sets the bit at location `index` to 1 if `val` is `true` or 0
    /// if `val` is `false`, treating negative values as sign
    /// extended.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kilim::{Assign, Integer};
    /// let mut i = Integer::from(-1);
    /// assert_eq!(*i.set_bit(0, false), -2);
    /// i.assign(0xff);
    /// assert_eq!(*i.set_bit(11, true), 0x8ff);
    /// ```
    pub fn set_bit(&mut self, index: u32, val: bool) -> &mut Integer {
        let index = index as usize;
        if !self.neg {
            limbs::set_bit(&mut self.mag, index, val);
        } else {
            // bit of the value is the complemented bit of mag - 1
            let mut m1 = limbs::sub_limb(&self.mag, 1);
            limbs::set_bit(&mut m1, index, !val);
            self.mag = limbs::add_limb(&m1, 1);
        }
        self
    }

    /// Returns `true` if the bit at location `index` is 1, treating
    /// negative values as sign extended.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kilim::Integer;
    /// let i = Integer::from(0b100101);
    /// assert!(i.get_bit(0));
    /// assert!(!i.get_bit(1));
    /// assert!(i.get_bit(5));
    /// let neg = Integer::from(-1);
    /// assert!(neg.get_bit(1000));
    /// ```
    #[inline]
    pub fn get_bit(&self, index: u32) -> bool {
        if self.neg {
            self.twos_bit(index as usize)
        } else {
            limbs::get_bit(&self.mag, index as usize)
        }
    }

    /// Toggles the bit at location `index`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kilim::Integer;
    /// let mut i = Integer::from(0b100101);
    /// i.toggle_bit(5);
    /// assert_eq!(i, 0b101);
    /// ```
    #[inline]
    pub fn toggle_bit(&mut self, index: u32) -> &mut Integer {
        let bit = self.get_bit(index);
        self.set_bit(index, !bit)
    }

    /// Retains the `n` least significant bits, as if reducing modulo
    /// 2<sup>`n`</sup>; the result is non-negative.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kilim::Integer;
    /// assert_eq!(Integer::from(-1).keep_bits(8), 0xff);
    /// assert_eq!(Integer::from(0x1234).keep_bits(8), 0x34);
    /// ```
    #[inline]
    pub fn keep_bits(mut self, n: u32) -> Integer {
        self.keep_bits_mut(n);
        self
    }

    /// Retains the `n` least significant bits, as if reducing modulo
    /// 2<sup>`n`</sup>; the result is non-negative.
    pub fn keep_bits_mut(&mut self, n: u32) {
        let n = n as usize;
        let full_limbs = n / 64;
        let extra = n % 64;
        let keep_len = full_limbs + usize::from(extra != 0);
        if self.neg {
            let len = self.mag.len().max(keep_len) + 1;
            let mut twos = limbs::to_twos(&self.mag, true, len);
            for l in twos.iter_mut().skip(keep_len) {
                *l = 0;
            }
            if extra != 0 {
                twos[full_limbs] &= u64::MAX >> (64 - extra);
            }
            limbs::trim(&mut twos);
            self.mag = twos;
            self.neg = false;
        } else {
            if self.mag.len() > keep_len {
                self.mag.truncate(keep_len);
            }
            if extra != 0 && self.mag.len() == keep_len {
                *self.mag.last_mut().unwrap() &= u64::MAX >> (64 - extra);
            }
            limbs::trim(&mut self.mag);
        }
    }

    /// Retrieves the Hamming distance between `self` and `other` if
    /// they have the same sign.
    ///
    /// Values of different signs differ in infinitely many bits under
    /// sign extension.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kilim::Integer;
    /// let i = Integer::from(-1);
    /// assert_eq!(Integer::from(0).hamming_dist(&i), None);
    /// assert_eq!(Integer::from(-1).hamming_dist(&i), Some(0));
    /// // -1 is ...11111111 and -13 is ...11110011
    /// assert_eq!(Integer::from(-13).hamming_dist(&i), Some(2));
    /// ```
    pub fn hamming_dist(&self, other: &Integer) -> Option<u32> {
        if self.neg != other.neg {
            return None;
        }
        let (a, b) = if self.neg {
            // the bits of -x are the complemented bits of x - 1, so
            // two negatives differ exactly where (x - 1) ^ (y - 1) is set
            (
                limbs::sub_limb(&self.mag, 1),
                limbs::sub_limb(&other.mag, 1),
            )
        } else {
            (self.mag.clone(), other.mag.clone())
        };
        let mut dist = 0;
        for i in 0..a.len().max(b.len()) {
            let x = a.get(i).copied().unwrap_or(0);
            let y = b.get(i).copied().unwrap_or(0);
            dist += (x ^ y).count_ones();
        }
        Some(dist)
    }
}

// crate-internal plumbing
impl Integer {
    #[inline]
    pub(crate) fn from_sign_mag(neg: bool, mag: Vec<Limb>) -> Integer {
        debug_assert!(mag.last().map_or(true, |&l| l != 0));
        Integer {
            neg: neg && !mag.is_empty(),
            mag,
        }
    }

    fn abs_u128(&self) -> Option<u128> {
        match self.mag.len() {
            0 => Some(0),
            1 => Some(u128::from(self.mag[0])),
            2 => Some(u128::from(self.mag[0]) | (u128::from(self.mag[1]) << 64)),
            _ => None,
        }
    }

    // top `mant` bits of the magnitude and the amount they were
    // shifted down by; values shorter than `mant` bits are not
    // shifted up
    fn float_parts(&self, mant: u32) -> (u64, usize) {
        let bits = limbs::bit_len(&self.mag);
        if bits <= mant as usize {
            (self.mag.first().copied().unwrap_or(0), 0)
        } else {
            let shift = bits - mant as usize;
            (limbs::shr(&self.mag, shift)[0], shift)
        }
    }

    // bit of the two's-complement form; only meaningful when `neg`
    fn twos_bit(&self, index: usize) -> bool {
        debug_assert!(self.neg);
        let limb = index / 64;
        if limb >= self.mag.len() {
            return true;
        }
        let low_zero = self.mag[..limb].iter().all(|&l| l == 0);
        let tc = if low_zero {
            self.mag[limb].wrapping_neg()
        } else {
            !self.mag[limb]
        };
        (tc >> (index % 64)) & 1 == 1
    }

    // self += (neg, mag) in sign-magnitude arithmetic
    pub(crate) fn add_signed(&mut self, neg: bool, mag: &[Limb]) {
        if mag.is_empty() {
            return;
        }
        if self.neg == neg || self.mag.is_empty() {
            self.mag = limbs::add(&self.mag, mag);
            self.neg = neg;
            return;
        }
        match limbs::cmp(&self.mag, mag) {
            Ordering::Greater => {
                self.mag = limbs::sub(&self.mag, mag);
            }
            Ordering::Less => {
                self.mag = limbs::sub(mag, &self.mag);
                self.neg = neg;
            }
            Ordering::Equal => {
                self.mag.clear();
                self.neg = false;
            }
        }
    }

    pub(crate) fn mul_signed(&mut self, neg: bool, mag: &[Limb]) {
        self.mag = limbs::mul(&self.mag, mag);
        self.neg = !self.mag.is_empty() && (self.neg != neg);
    }
}

impl Default for Integer {
    #[inline]
    fn default() -> Integer {
        Integer::new()
    }
}

impl Assign for Integer {
    #[inline]
    fn assign(&mut self, src: Integer) {
        *self = src;
    }
}

impl Assign<&Integer> for Integer {
    #[inline]
    fn assign(&mut self, src: &Integer) {
        self.clone_from(src);
    }
}

macro_rules! assign_from {
    ($($T:ty)*) => { $(
        impl Assign<$T> for Integer {
            #[inline]
            fn assign(&mut self, src: $T) {
                *self = Integer::from(src);
            }
        }
    )* };
}

assign_from! { i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize bool }

macro_rules! from_unsigned {
    ($($T:ty)*) => { $(
        impl From<$T> for Integer {
            #[inline]
            fn from(val: $T) -> Integer {
                let mut mag = vec![val as u64];
                limbs::trim(&mut mag);
                Integer { neg: false, mag }
            }
        }
    )* };
}

macro_rules! from_signed {
    ($($T:ty)*) => { $(
        impl From<$T> for Integer {
            #[inline]
            fn from(val: $T) -> Integer {
                let mut mag = vec![val.unsigned_abs() as u64];
                limbs::trim(&mut mag);
                Integer::from_sign_mag(val < 0, mag)
            }
        }
    )* };
}

from_unsigned! { u8 u16 u32 u64 usize }
from_signed! { i8 i16 i32 i64 isize }

impl From<u128> for Integer {
    #[inline]
    fn from(val: u128) -> Integer {
        let mut mag = vec![val as u64, (val >> 64) as u64];
        limbs::trim(&mut mag);
        Integer { neg: false, mag }
    }
}

impl From<i128> for Integer {
    #[inline]
    fn from(val: i128) -> Integer {
        let abs = val.unsigned_abs();
        let mut mag = vec![abs as u64, (abs >> 64) as u64];
        limbs::trim(&mut mag);
        Integer::from_sign_mag(val < 0, mag)
    }
}

impl From<bool> for Integer {
    #[inline]
    fn from(val: bool) -> Integer {
        if val {
            Integer::from(1u32)
        } else {
            Integer::new()
        }
    }
}

impl From<&Integer> for Integer {
    #[inline]
    fn from(val: &Integer) -> Integer {
        val.clone()
    }
}

impl FromStr for Integer {
    type Err = ParseIntegerError;
    #[inline]
    fn from_str(src: &str) -> Result<Integer, ParseIntegerError> {
        Integer::from_str_radix(src, 10)
    }
}

impl Hash for Integer {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.neg.hash(state);
        self.mag.hash(state);
    }
}

impl Display for Integer {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        fmt_radix(self, f, 10, false, "")
    }
}

impl Debug for Integer {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        fmt_radix(self, f, 10, false, "")
    }
}

impl Binary for Integer {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        fmt_radix(self, f, 2, false, "0b")
    }
}

impl Octal for Integer {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        fmt_radix(self, f, 8, false, "0o")
    }
}

impl LowerHex for Integer {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        fmt_radix(self, f, 16, false, "0x")
    }
}

impl UpperHex for Integer {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        fmt_radix(self, f, 16, true, "0x")
    }
}

fn fmt_radix(
    i: &Integer,
    f: &mut Formatter<'_>,
    radix: i32,
    to_upper: bool,
    prefix: &str,
) -> fmt::Result {
    let mut s = String::new();
    append_to_string(&mut s, i, radix, to_upper);
    let (is_neg, digits) = if let Some(stripped) = s.strip_prefix('-') {
        (true, stripped)
    } else {
        (false, s.as_str())
    };
    let prefix = if f.alternate() { prefix } else { "" };
    f.pad_integral(!is_neg, prefix, digits)
}

pub(crate) fn digit_value(b: u8, radix: i32) -> Option<u64> {
    let val = if radix <= 36 {
        match b {
            b'0'..=b'9' => u64::from(b - b'0'),
            b'a'..=b'z' => u64::from(b - b'a') + 10,
            b'A'..=b'Z' => u64::from(b - b'A') + 10,
            _ => return None,
        }
    } else {
        match b {
            b'0'..=b'9' => u64::from(b - b'0'),
            b'A'..=b'Z' => u64::from(b - b'A') + 10,
            b'a'..=b'z' => u64::from(b - b'a') + 36,
            _ => return None,
        }
    };
    if val < radix as u64 {
        Some(val)
    } else {
        None
    }
}

fn digit_char(val: u64, radix: i32, to_upper: bool) -> u8 {
    debug_assert!(val < radix as u64);
    let val = val as u8;
    if radix <= 36 {
        match val {
            0..=9 => b'0' + val,
            _ if to_upper => b'A' + (val - 10),
            _ => b'a' + (val - 10),
        }
    } else {
        match val {
            0..=9 => b'0' + val,
            10..=35 => b'A' + (val - 10),
            _ => b'a' + (val - 36),
        }
    }
}

// the largest power of `radix` that fits in a limb, with its exponent
pub(crate) fn radix_chunk(radix: i32) -> (u64, usize) {
    let radix = radix as u64;
    let mut base = radix;
    let mut digits = 1;
    while let Some(next) = base.checked_mul(radix) {
        base = next;
        digits += 1;
    }
    (base, digits)
}

pub(crate) fn append_to_string(
    s: &mut String,
    i: &Integer,
    radix: i32,
    to_upper: bool,
) {
    assert!((2..=62).contains(&radix), "radix out of range");
    if i.mag.is_empty() {
        s.push('0');
        return;
    }
    if i.neg {
        s.push('-');
    }
    let (big_base, chunk_digits) = radix_chunk(radix);
    let mut chunks = Vec::new();
    let mut mag = i.mag.clone();
    while !mag.is_empty() {
        let (q, r) = limbs::div_rem_limb(&mag, big_base);
        chunks.push(r);
        mag = q;
    }
    let mut bytes = Vec::new();
    for (pos, &chunk) in chunks.iter().rev().enumerate() {
        let mut digits = [0u8; 64];
        let mut len = 0;
        let mut c = chunk;
        while c != 0 {
            digits[len] = digit_char(c % radix as u64, radix, to_upper);
            c /= radix as u64;
            len += 1;
        }
        if pos > 0 {
            // inner chunks keep their leading zeros
            for _ in len..chunk_digits {
                bytes.push(b'0');
            }
        }
        bytes.extend(digits[..len].iter().rev());
    }
    s.push_str(std::str::from_utf8(&bytes).expect("ascii"));
}

/// A validated string that can always be converted to an `Integer`.
///
/// See the [`valid_str_radix`][Integer::valid_str_radix] method.
#[derive(Clone, Copy, Debug)]
pub struct ValidInteger<'a> {
    neg: bool,
    digits: &'a [u8],
    radix: i32,
}

impl<'a> From<ValidInteger<'a>> for Integer {
    fn from(src: ValidInteger<'a>) -> Self {
        let (big_base, chunk_digits) = radix_chunk(src.radix);
        let mut mag: Vec<Limb> = Vec::new();
        for chunk in src.digits.chunks(chunk_digits) {
            let mut acc = 0u64;
            let mut scale = 1u64;
            for &b in chunk {
                let digit = digit_value(b, src.radix).expect("validated");
                acc = acc * src.radix as u64 + digit;
                scale = scale.wrapping_mul(src.radix as u64);
            }
            let scale = if chunk.len() == chunk_digits {
                big_base
            } else {
                scale
            };
            mag = limbs::mul_limb(&mag, scale);
            mag = limbs::add_limb(&mag, acc);
        }
        limbs::trim(&mut mag);
        Integer::from_sign_mag(src.neg, mag)
    }
}

/// An error which can be returned when parsing an `Integer`.
///
/// # Examples
///
/// ```rust
/// use kilim::integer::ParseIntegerError;
/// use kilim::Integer;
/// // This string is not an integer.
/// let s = "something completely different (_!_!_)";
/// let error: ParseIntegerError = match Integer::valid_str_radix(s, 4) {
///     Ok(_) => unreachable!(),
///     Err(error) => error,
/// };
/// println!("Parse error: {}", error);
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ParseIntegerError {
    kind: ParseErrorKind,
}

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
enum ParseErrorKind {
    InvalidDigit,
    NoDigits,
}

impl Display for ParseIntegerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        use self::ParseErrorKind::*;
        let desc = match self.kind {
            InvalidDigit => "invalid digit found in string",
            NoDigits => "string has no digits",
        };
        f.write_str(desc)
    }
}

impl Error for ParseIntegerError {}

pub(crate) fn cast_u32(x: usize) -> u32 {
    x.try_into().expect("overflow")
}
