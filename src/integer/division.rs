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

use crate::ext::limbs;
use crate::integer::big::Integer;
use crate::ops::{
    DivRounding, DivRoundingAssign, RemRounding, RemRoundingAssign,
};
use std::borrow::Borrow;

impl Integer {
    /// Performs a division producing both the quotient and remainder,
    /// with the quotient rounded towards zero.
    ///
    /// The remainder has the same sign as the dividend.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kilim::Integer;
    /// let dividend = Integer::from(23);
    /// let divisor = Integer::from(-10);
    /// let (quotient, rem) = dividend.div_rem(divisor);
    /// assert_eq!(quotient, -2);
    /// assert_eq!(rem, 3);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is zero.
    #[inline]
    pub fn div_rem(self, divisor: Integer) -> (Integer, Integer) {
        div_rem_trunc(&self, &divisor)
    }

    /// Performs a division producing both the quotient and remainder,
    /// with the quotient rounded towards zero.
    ///
    /// The quotient is stored in `self` and the remainder in
    /// `divisor`.
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is zero.
    #[inline]
    pub fn div_rem_mut(&mut self, divisor: &mut Integer) {
        let (q, r) = div_rem_trunc(self, divisor);
        *self = q;
        *divisor = r;
    }

    /// Performs a division producing both the quotient and remainder,
    /// with the quotient rounded up.
    ///
    /// The sign of the remainder is the opposite of the divisor’s.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kilim::Integer;
    /// let (q, rem) = Integer::from(23).div_rem_ceil(Integer::from(10));
    /// assert_eq!(q, 3);
    /// assert_eq!(rem, -7);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is zero.
    #[inline]
    pub fn div_rem_ceil(self, divisor: Integer) -> (Integer, Integer) {
        div_rem_ceil(&self, &divisor)
    }

    /// Performs a division producing both the quotient and remainder,
    /// with the quotient rounded up; the quotient is stored in `self`
    /// and the remainder in `divisor`.
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is zero.
    #[inline]
    pub fn div_rem_ceil_mut(&mut self, divisor: &mut Integer) {
        let (q, r) = div_rem_ceil(self, divisor);
        *self = q;
        *divisor = r;
    }

    /// Performs a division producing both the quotient and remainder,
    /// with the quotient rounded down.
    ///
    /// The remainder has the same sign as the divisor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kilim::Integer;
    /// let (q, rem) = Integer::from(-23).div_rem_floor(Integer::from(10));
    /// assert_eq!(q, -3);
    /// assert_eq!(rem, 7);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is zero.
    #[inline]
    pub fn div_rem_floor(self, divisor: Integer) -> (Integer, Integer) {
        div_rem_floor(&self, &divisor)
    }

    /// Performs a division producing both the quotient and remainder,
    /// with the quotient rounded down; the quotient is stored in
    /// `self` and the remainder in `divisor`.
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is zero.
    #[inline]
    pub fn div_rem_floor_mut(&mut self, divisor: &mut Integer) {
        let (q, r) = div_rem_floor(self, divisor);
        *self = q;
        *divisor = r;
    }

    /// Performs Euclidean division producing both the quotient and
    /// remainder, with the remainder always non-negative.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kilim::Integer;
    /// let (q, rem) = Integer::from(-23).div_rem_euc(Integer::from(-10));
    /// assert_eq!(q, 3);
    /// assert_eq!(rem, 7);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is zero.
    #[inline]
    pub fn div_rem_euc(self, divisor: Integer) -> (Integer, Integer) {
        div_rem_euc(&self, &divisor)
    }

    /// Performs Euclidean division producing both the quotient and
    /// remainder; the quotient is stored in `self` and the remainder
    /// in `divisor`.
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is zero.
    #[inline]
    pub fn div_rem_euc_mut(&mut self, divisor: &mut Integer) {
        let (q, r) = div_rem_euc(self, divisor);
        *self = q;
        *divisor = r;
    }

    /// Performs a truncating division if the divisor is nonzero.
    ///
    /// This is the recoverable form of [`div_rem`][Integer::div_rem]:
    /// a zero divisor yields `None` and the operands are unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kilim::Integer;
    /// let n = Integer::from(10);
    /// assert!(n.checked_div_rem(&Integer::new()).is_none());
    /// let (q, rem) = n.checked_div_rem(&Integer::from(3)).unwrap();
    /// assert_eq!(q, 3);
    /// assert_eq!(rem, 1);
    /// ```
    #[inline]
    pub fn checked_div_rem(
        &self,
        divisor: &Integer,
    ) -> Option<(Integer, Integer)> {
        if divisor.mag.is_empty() {
            None
        } else {
            Some(div_rem_trunc(self, divisor))
        }
    }

    /// Performs a ceiling division if the divisor is nonzero.
    #[inline]
    pub fn checked_div_rem_ceil(
        &self,
        divisor: &Integer,
    ) -> Option<(Integer, Integer)> {
        if divisor.mag.is_empty() {
            None
        } else {
            Some(div_rem_ceil(self, divisor))
        }
    }

    /// Performs a flooring division if the divisor is nonzero.
    #[inline]
    pub fn checked_div_rem_floor(
        &self,
        divisor: &Integer,
    ) -> Option<(Integer, Integer)> {
        if divisor.mag.is_empty() {
            None
        } else {
            Some(div_rem_floor(self, divisor))
        }
    }

    /// Performs Euclidean division if the divisor is nonzero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kilim::Integer;
    /// let n = Integer::from(-10);
    /// let (q, rem) = n.checked_div_rem_euc(&Integer::from(3)).unwrap();
    /// assert_eq!(q, -4);
    /// assert_eq!(rem, 2);
    /// ```
    #[inline]
    pub fn checked_div_rem_euc(
        &self,
        divisor: &Integer,
    ) -> Option<(Integer, Integer)> {
        if divisor.mag.is_empty() {
            None
        } else {
            Some(div_rem_euc(self, divisor))
        }
    }

    /// Performs an exact division.
    ///
    /// The caller must ensure that the division is exact; the result
    /// is unspecified otherwise.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kilim::Integer;
    /// let i = Integer::from(12345_i64 * 54321);
    /// let q = i.div_exact(&Integer::from(12345));
    /// assert_eq!(q, 54321);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is zero.
    #[inline]
    pub fn div_exact(mut self, divisor: &Integer) -> Integer {
        self.div_exact_mut(divisor);
        self
    }

    /// Performs an exact division.
    ///
    /// The caller must ensure that the division is exact; the result
    /// is unspecified otherwise.
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is zero.
    pub fn div_exact_mut(&mut self, divisor: &Integer) {
        assert!(!divisor.mag.is_empty(), "division by zero");
        let (q_mag, r_mag) = limbs::div_rem(&self.mag, &divisor.mag);
        debug_assert!(r_mag.is_empty(), "inexact division");
        let _ = r_mag;
        let neg = self.neg != divisor.neg;
        *self = Integer::from_sign_mag(neg, q_mag);
    }

    /// Performs an exact division by a primitive.
    ///
    /// The caller must ensure that the division is exact; the result
    /// is unspecified otherwise.
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is zero.
    pub fn div_exact_u(self, divisor: u32) -> Integer {
        assert_ne!(divisor, 0, "division by zero");
        let (q_mag, r) = limbs::div_rem_limb(&self.mag, u64::from(divisor));
        debug_assert_eq!(r, 0, "inexact division");
        let _ = r;
        Integer::from_sign_mag(self.neg, q_mag)
    }

    /// Returns the remainder of division by `modulo`, always
    /// non-negative.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kilim::Integer;
    /// assert_eq!(Integer::from(17).mod_u(10), 7);
    /// assert_eq!(Integer::from(-17).mod_u(10), 3);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `modulo` is zero.
    pub fn mod_u(&self, modulo: u32) -> u32 {
        assert_ne!(modulo, 0, "division by zero");
        let r = limbs::rem_limb(&self.mag, u64::from(modulo)) as u32;
        if self.neg && r != 0 {
            modulo - r
        } else {
            r
        }
    }

    /// Returns `true` if the value is divisible by `divisor`.
    ///
    /// Unlike the division operations, a zero divisor is allowed
    /// here; only zero is divisible by zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kilim::Integer;
    /// let i = Integer::from(230);
    /// assert!(i.is_divisible(&Integer::from(10)));
    /// assert!(!i.is_divisible(&Integer::from(100)));
    /// assert!(!i.is_divisible(&Integer::new()));
    /// assert!(Integer::new().is_divisible(&Integer::new()));
    /// ```
    pub fn is_divisible(&self, divisor: &Integer) -> bool {
        if divisor.mag.is_empty() {
            return self.mag.is_empty();
        }
        limbs::div_rem(&self.mag, &divisor.mag).1.is_empty()
    }

    /// Returns `true` if the value is divisible by `divisor`.
    ///
    /// Only zero is divisible by zero.
    #[inline]
    pub fn is_divisible_u(&self, divisor: u32) -> bool {
        if divisor == 0 {
            return self.mag.is_empty();
        }
        limbs::rem_limb(&self.mag, u64::from(divisor)) == 0
    }

    /// Returns `true` if the value is divisible by 2<sup>`b`</sup>.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kilim::Integer;
    /// let i = Integer::from(15 << 17);
    /// assert!(i.is_divisible_2pow(16));
    /// assert!(i.is_divisible_2pow(17));
    /// assert!(!i.is_divisible_2pow(18));
    /// ```
    #[inline]
    pub fn is_divisible_2pow(&self, b: u32) -> bool {
        !limbs::low_bits_nonzero(&self.mag, b as usize)
    }

    /// Returns `true` if the value is congruent to `c` modulo
    /// `divisor`.
    ///
    /// With a zero `divisor`, the values are congruent only when they
    /// are equal.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kilim::Integer;
    /// let n = Integer::from(105);
    /// let divisor = Integer::from(10);
    /// assert!(n.is_congruent(&Integer::from(5), &divisor));
    /// assert!(n.is_congruent(&Integer::from(-5), &divisor));
    /// assert!(!n.is_congruent(&Integer::from(6), &divisor));
    /// // n is congruent to itself even for a zero divisor
    /// assert!(n.is_congruent(&n, &Integer::new()));
    /// ```
    pub fn is_congruent(&self, c: &Integer, divisor: &Integer) -> bool {
        let diff = self.clone() - c;
        diff.is_divisible(divisor)
    }

    /// Returns `true` if the value is congruent to `c` modulo
    /// `divisor`.
    #[inline]
    pub fn is_congruent_u(&self, c: u32, divisor: u32) -> bool {
        if divisor == 0 {
            return *self == c;
        }
        self.mod_u(divisor) == c % divisor
    }

    /// Returns `true` if the value is congruent to `c` modulo
    /// 2<sup>`b`</sup>.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kilim::Integer;
    /// let n = Integer::from(0x3ff);
    /// assert!(n.is_congruent_2pow(&Integer::from(7 << 8 | 0xff), 8));
    /// assert!(!n.is_congruent_2pow(&Integer::from(0xfe), 8));
    /// ```
    #[inline]
    pub fn is_congruent_2pow(&self, c: &Integer, b: u32) -> bool {
        let diff = self.clone() - c;
        !limbs::low_bits_nonzero(&diff.mag, b as usize)
    }

    /// Divides by 2<sup>`b`</sup>, rounding the quotient towards
    /// zero.
    ///
    /// This is a shift, so large exponents never build the power of
    /// two.
    #[inline]
    pub fn div_2exp_trunc(mut self, b: u32) -> Integer {
        self.div_2exp_trunc_mut(b);
        self
    }

    /// Divides by 2<sup>`b`</sup>, rounding the quotient towards
    /// zero.
    pub fn div_2exp_trunc_mut(&mut self, b: u32) {
        let neg = self.neg;
        let mag = limbs::shr(&self.mag, b as usize);
        *self = Integer::from_sign_mag(neg, mag);
    }

    /// Divides by 2<sup>`b`</sup>, rounding the quotient up.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kilim::Integer;
    /// assert_eq!(Integer::from(9).div_2exp_ceil(2), 3);
    /// assert_eq!(Integer::from(-9).div_2exp_ceil(2), -2);
    /// ```
    #[inline]
    pub fn div_2exp_ceil(mut self, b: u32) -> Integer {
        self.div_2exp_ceil_mut(b);
        self
    }

    /// Divides by 2<sup>`b`</sup>, rounding the quotient up.
    pub fn div_2exp_ceil_mut(&mut self, b: u32) {
        let sticky = limbs::low_bits_nonzero(&self.mag, b as usize);
        let neg = self.neg;
        let mut mag = limbs::shr(&self.mag, b as usize);
        if sticky && !neg {
            mag = limbs::add_limb(&mag, 1);
        }
        *self = Integer::from_sign_mag(neg, mag);
    }

    /// Divides by 2<sup>`b`</sup>, rounding the quotient down.
    ///
    /// The `>>` operator performs the same operation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kilim::Integer;
    /// assert_eq!(Integer::from(9).div_2exp_floor(2), 2);
    /// assert_eq!(Integer::from(-9).div_2exp_floor(2), -3);
    /// ```
    #[inline]
    pub fn div_2exp_floor(mut self, b: u32) -> Integer {
        self.div_2exp_floor_mut(b);
        self
    }

    /// Divides by 2<sup>`b`</sup>, rounding the quotient down.
    pub fn div_2exp_floor_mut(&mut self, b: u32) {
        let sticky = limbs::low_bits_nonzero(&self.mag, b as usize);
        let neg = self.neg;
        let mut mag = limbs::shr(&self.mag, b as usize);
        if sticky && neg {
            mag = limbs::add_limb(&mag, 1);
        }
        *self = Integer::from_sign_mag(neg, mag);
    }

    /// Finds the remainder of division by 2<sup>`b`</sup> with the
    /// quotient rounded towards zero; the remainder keeps the sign of
    /// the dividend.
    #[inline]
    pub fn rem_2exp_trunc(mut self, b: u32) -> Integer {
        self.rem_2exp_trunc_mut(b);
        self
    }

    /// Finds the remainder of division by 2<sup>`b`</sup> with the
    /// quotient rounded towards zero.
    pub fn rem_2exp_trunc_mut(&mut self, b: u32) {
        let neg = self.neg;
        let mut mag = std::mem::take(&mut self.mag);
        let b = b as usize;
        let full = b / 64;
        let extra = b % 64;
        mag.truncate(full + usize::from(extra != 0));
        if extra != 0 && mag.len() == full + 1 {
            mag[full] &= u64::MAX >> (64 - extra);
        }
        limbs::trim(&mut mag);
        *self = Integer::from_sign_mag(neg, mag);
    }

    /// Finds the remainder of division by 2<sup>`b`</sup> with the
    /// quotient rounded up; the remainder is zero or negative.
    #[inline]
    pub fn rem_2exp_ceil(mut self, b: u32) -> Integer {
        self.rem_2exp_ceil_mut(b);
        self
    }

    /// Finds the remainder of division by 2<sup>`b`</sup> with the
    /// quotient rounded up.
    pub fn rem_2exp_ceil_mut(&mut self, b: u32) {
        self.rem_2exp_floor_mut(b);
        if !self.mag.is_empty() {
            // the floor remainder is in [0, 2^b); shift it down a period
            let pow =
                Integer::from_sign_mag(false, limbs::shl(&[1], b as usize));
            *self -= pow;
        }
    }

    /// Finds the remainder of division by 2<sup>`b`</sup> with the
    /// quotient rounded down; the remainder is non-negative.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kilim::Integer;
    /// assert_eq!(Integer::from(-19).rem_2exp_floor(4), 13);
    /// ```
    #[inline]
    pub fn rem_2exp_floor(mut self, b: u32) -> Integer {
        self.rem_2exp_floor_mut(b);
        self
    }

    /// Finds the remainder of division by 2<sup>`b`</sup> with the
    /// quotient rounded down.
    #[inline]
    pub fn rem_2exp_floor_mut(&mut self, b: u32) {
        self.keep_bits_mut(b);
    }
}

pub(crate) fn div_rem_trunc(n: &Integer, d: &Integer) -> (Integer, Integer) {
    assert!(!d.mag.is_empty(), "division by zero");
    let (q_mag, r_mag) = limbs::div_rem(&n.mag, &d.mag);
    let q = Integer::from_sign_mag(n.neg != d.neg, q_mag);
    let r = Integer::from_sign_mag(n.neg, r_mag);
    (q, r)
}

pub(crate) fn div_rem_floor(n: &Integer, d: &Integer) -> (Integer, Integer) {
    let (mut q, mut r) = div_rem_trunc(n, d);
    if !r.mag.is_empty() && n.neg != d.neg {
        q -= 1;
        r += d;
    }
    (q, r)
}

pub(crate) fn div_rem_ceil(n: &Integer, d: &Integer) -> (Integer, Integer) {
    let (mut q, mut r) = div_rem_trunc(n, d);
    if !r.mag.is_empty() && n.neg == d.neg {
        q += 1;
        r -= d;
    }
    (q, r)
}

pub(crate) fn div_rem_euc(n: &Integer, d: &Integer) -> (Integer, Integer) {
    let (mut q, mut r) = div_rem_trunc(n, d);
    if r.neg {
        if d.neg {
            q += 1;
            r -= d;
        } else {
            q -= 1;
            r += d;
        }
    }
    (q, r)
}

macro_rules! div_rounding_ops {
    ($Big:ty) => {
        impl DivRounding<$Big> for Integer {
            type Output = Integer;
            #[inline]
            fn div_trunc(self, rhs: $Big) -> Integer {
                div_rem_trunc(&self, rhs.borrow()).0
            }
            #[inline]
            fn div_ceil(self, rhs: $Big) -> Integer {
                div_rem_ceil(&self, rhs.borrow()).0
            }
            #[inline]
            fn div_floor(self, rhs: $Big) -> Integer {
                div_rem_floor(&self, rhs.borrow()).0
            }
            #[inline]
            fn div_euc(self, rhs: $Big) -> Integer {
                div_rem_euc(&self, rhs.borrow()).0
            }
        }

        impl RemRounding<$Big> for Integer {
            type Output = Integer;
            #[inline]
            fn rem_trunc(self, rhs: $Big) -> Integer {
                div_rem_trunc(&self, rhs.borrow()).1
            }
            #[inline]
            fn rem_ceil(self, rhs: $Big) -> Integer {
                div_rem_ceil(&self, rhs.borrow()).1
            }
            #[inline]
            fn rem_floor(self, rhs: $Big) -> Integer {
                div_rem_floor(&self, rhs.borrow()).1
            }
            #[inline]
            fn rem_euc(self, rhs: $Big) -> Integer {
                div_rem_euc(&self, rhs.borrow()).1
            }
        }

        impl DivRoundingAssign<$Big> for Integer {
            #[inline]
            fn div_trunc_assign(&mut self, rhs: $Big) {
                *self = div_rem_trunc(self, rhs.borrow()).0;
            }
            #[inline]
            fn div_ceil_assign(&mut self, rhs: $Big) {
                *self = div_rem_ceil(self, rhs.borrow()).0;
            }
            #[inline]
            fn div_floor_assign(&mut self, rhs: $Big) {
                *self = div_rem_floor(self, rhs.borrow()).0;
            }
            #[inline]
            fn div_euc_assign(&mut self, rhs: $Big) {
                *self = div_rem_euc(self, rhs.borrow()).0;
            }
        }

        impl RemRoundingAssign<$Big> for Integer {
            #[inline]
            fn rem_trunc_assign(&mut self, rhs: $Big) {
                *self = div_rem_trunc(self, rhs.borrow()).1;
            }
            #[inline]
            fn rem_ceil_assign(&mut self, rhs: $Big) {
                *self = div_rem_ceil(self, rhs.borrow()).1;
            }
            #[inline]
            fn rem_floor_assign(&mut self, rhs: $Big) {
                *self = div_rem_floor(self, rhs.borrow()).1;
            }
            #[inline]
            fn rem_euc_assign(&mut self, rhs: $Big) {
                *self = div_rem_euc(self, rhs.borrow()).1;
            }
        }
    };
}

div_rounding_ops! { Integer }
div_rounding_ops! { &Integer }

macro_rules! div_rounding_prim {
    ($($T:ty)*) => { $(
        impl DivRounding<$T> for Integer {
            type Output = Integer;
            #[inline]
            fn div_trunc(self, rhs: $T) -> Integer {
                self.div_trunc(&Integer::from(rhs))
            }
            #[inline]
            fn div_ceil(self, rhs: $T) -> Integer {
                self.div_ceil(&Integer::from(rhs))
            }
            #[inline]
            fn div_floor(self, rhs: $T) -> Integer {
                self.div_floor(&Integer::from(rhs))
            }
            #[inline]
            fn div_euc(self, rhs: $T) -> Integer {
                self.div_euc(&Integer::from(rhs))
            }
        }

        impl RemRounding<$T> for Integer {
            type Output = Integer;
            #[inline]
            fn rem_trunc(self, rhs: $T) -> Integer {
                self.rem_trunc(&Integer::from(rhs))
            }
            #[inline]
            fn rem_ceil(self, rhs: $T) -> Integer {
                self.rem_ceil(&Integer::from(rhs))
            }
            #[inline]
            fn rem_floor(self, rhs: $T) -> Integer {
                self.rem_floor(&Integer::from(rhs))
            }
            #[inline]
            fn rem_euc(self, rhs: $T) -> Integer {
                self.rem_euc(&Integer::from(rhs))
            }
        }

        impl DivRounding<Integer> for $T {
            type Output = Integer;
            #[inline]
            fn div_trunc(self, rhs: Integer) -> Integer {
                Integer::from(self).div_trunc(&rhs)
            }
            #[inline]
            fn div_ceil(self, rhs: Integer) -> Integer {
                Integer::from(self).div_ceil(&rhs)
            }
            #[inline]
            fn div_floor(self, rhs: Integer) -> Integer {
                Integer::from(self).div_floor(&rhs)
            }
            #[inline]
            fn div_euc(self, rhs: Integer) -> Integer {
                Integer::from(self).div_euc(&rhs)
            }
        }

        impl RemRounding<Integer> for $T {
            type Output = Integer;
            #[inline]
            fn rem_trunc(self, rhs: Integer) -> Integer {
                Integer::from(self).rem_trunc(&rhs)
            }
            #[inline]
            fn rem_ceil(self, rhs: Integer) -> Integer {
                Integer::from(self).rem_ceil(&rhs)
            }
            #[inline]
            fn rem_floor(self, rhs: Integer) -> Integer {
                Integer::from(self).rem_floor(&rhs)
            }
            #[inline]
            fn rem_euc(self, rhs: Integer) -> Integer {
                Integer::from(self).rem_euc(&rhs)
            }
        }

        impl DivRoundingAssign<$T> for Integer {
            #[inline]
            fn div_trunc_assign(&mut self, rhs: $T) {
                self.div_trunc_assign(&Integer::from(rhs));
            }
            #[inline]
            fn div_ceil_assign(&mut self, rhs: $T) {
                self.div_ceil_assign(&Integer::from(rhs));
            }
            #[inline]
            fn div_floor_assign(&mut self, rhs: $T) {
                self.div_floor_assign(&Integer::from(rhs));
            }
            #[inline]
            fn div_euc_assign(&mut self, rhs: $T) {
                self.div_euc_assign(&Integer::from(rhs));
            }
        }

        impl RemRoundingAssign<$T> for Integer {
            #[inline]
            fn rem_trunc_assign(&mut self, rhs: $T) {
                self.rem_trunc_assign(&Integer::from(rhs));
            }
            #[inline]
            fn rem_ceil_assign(&mut self, rhs: $T) {
                self.rem_ceil_assign(&Integer::from(rhs));
            }
            #[inline]
            fn rem_floor_assign(&mut self, rhs: $T) {
                self.rem_floor_assign(&Integer::from(rhs));
            }
            #[inline]
            fn rem_euc_assign(&mut self, rhs: $T) {
                self.rem_euc_assign(&Integer::from(rhs));
            }
        }
    )* };
}

div_rounding_prim! { i32 u32 }

#[cfg(test)]
mod tests {
    use crate::ops::{DivRounding, RemRounding};
    use crate::Integer;

    #[test]
    fn check_trunc() {
        let ndqr = [
            (23, 10, 2, 3),
            (23, -10, -2, 3),
            (-23, 10, -2, -3),
            (-23, -10, 2, -3),
            (20, 10, 2, 0),
            (20, -10, -2, 0),
            (-20, 10, -2, 0),
            (-20, -10, 2, 0),
            (3, 10, 0, 3),
            (3, -10, 0, 3),
            (-3, 10, 0, -3),
            (-3, -10, 0, -3),
            (0, 10, 0, 0),
            (0, -10, 0, 0),
        ];
        for &(n, d, q, r) in ndqr.iter() {
            assert_eq!(Integer::from(n) / d, q);
            assert_eq!(Integer::from(n).div_trunc(d), q);
            assert_eq!(Integer::from(n) % d, r);
            assert_eq!(Integer::from(n).rem_trunc(d), r);
            let qr = Integer::from(n).div_rem(Integer::from(d));
            assert_eq!(qr.0, q);
            assert_eq!(qr.1, r);
            let (mut nq, mut dr) = (Integer::from(n), Integer::from(d));
            nq.div_rem_mut(&mut dr);
            assert_eq!(nq, q);
            assert_eq!(dr, r);
        }
    }

    #[test]
    fn check_ceil() {
        let ndqr = [
            (23, 10, 3, -7),
            (23, -10, -2, 3),
            (-23, 10, -2, -3),
            (-23, -10, 3, 7),
            (20, 10, 2, 0),
            (20, -10, -2, 0),
            (-20, 10, -2, 0),
            (-20, -10, 2, 0),
            (3, 10, 1, -7),
            (3, -10, 0, 3),
            (-3, 10, 0, -3),
            (-3, -10, 1, 7),
            (0, 10, 0, 0),
            (0, -10, 0, 0),
        ];
        for &(n, d, q, r) in ndqr.iter() {
            assert_eq!(Integer::from(n).div_ceil(d), q);
            assert_eq!(Integer::from(n).rem_ceil(d), r);
            let qr = Integer::from(n).div_rem_ceil(Integer::from(d));
            assert_eq!(qr.0, q);
            assert_eq!(qr.1, r);
            let (mut nq, mut dr) = (Integer::from(n), Integer::from(d));
            nq.div_rem_ceil_mut(&mut dr);
            assert_eq!(nq, q);
            assert_eq!(dr, r);
        }
    }

    #[test]
    fn check_floor() {
        let ndqr = [
            (23, 10, 2, 3),
            (23, -10, -3, -7),
            (-23, 10, -3, 7),
            (-23, -10, 2, -3),
            (20, 10, 2, 0),
            (20, -10, -2, 0),
            (-20, 10, -2, 0),
            (-20, -10, 2, 0),
            (3, 10, 0, 3),
            (3, -10, -1, -7),
            (-3, 10, -1, 7),
            (-3, -10, 0, -3),
            (0, 10, 0, 0),
            (0, -10, 0, 0),
        ];
        for &(n, d, q, r) in ndqr.iter() {
            assert_eq!(Integer::from(n).div_floor(d), q);
            assert_eq!(Integer::from(n).rem_floor(d), r);
            let qr = Integer::from(n).div_rem_floor(Integer::from(d));
            assert_eq!(qr.0, q);
            assert_eq!(qr.1, r);
            let (mut nq, mut dr) = (Integer::from(n), Integer::from(d));
            nq.div_rem_floor_mut(&mut dr);
            assert_eq!(nq, q);
            assert_eq!(dr, r);
        }
    }

    #[test]
    fn check_euc() {
        let ndqr = [
            (23, 10, 2, 3),
            (23, -10, -2, 3),
            (-23, 10, -3, 7),
            (-23, -10, 3, 7),
            (20, 10, 2, 0),
            (20, -10, -2, 0),
            (-20, 10, -2, 0),
            (-20, -10, 2, 0),
            (3, 10, 0, 3),
            (3, -10, 0, 3),
            (-3, 10, -1, 7),
            (-3, -10, 1, 7),
            (0, 10, 0, 0),
            (0, -10, 0, 0),
        ];
        for &(n, d, q, r) in ndqr.iter() {
            assert_eq!(Integer::from(n).div_euc(d), q);
            assert_eq!(Integer::from(n).rem_euc(d), r);
            let qr = Integer::from(n).div_rem_euc(Integer::from(d));
            assert_eq!(qr.0, q);
            assert_eq!(qr.1, r);
            let (mut nq, mut dr) = (Integer::from(n), Integer::from(d));
            nq.div_rem_euc_mut(&mut dr);
            assert_eq!(nq, q);
            assert_eq!(dr, r);
        }
    }

    #[test]
    fn check_division_identity() {
        // n == q * d + r must hold for every convention
        let ns = [-100, -23, -10, -3, -1, 0, 1, 3, 10, 23, 100];
        let ds = [-10, -7, -3, -1, 1, 3, 7, 10];
        for &n0 in &ns {
            for &d0 in &ds {
                let n = Integer::from(n0) * Integer::from(1u64 << 40)
                    + Integer::from(n0);
                let d = Integer::from(d0);
                for (q, r) in [
                    n.clone().div_rem(d.clone()),
                    n.clone().div_rem_ceil(d.clone()),
                    n.clone().div_rem_floor(d.clone()),
                    n.clone().div_rem_euc(d.clone()),
                ] {
                    assert_eq!(q * &d + &r, n);
                }
                let (_, r) = n.clone().div_rem_euc(d.clone());
                assert!(r.cmp0() != std::cmp::Ordering::Less);
                assert!(r < d.abs());
            }
        }
    }

    #[test]
    fn check_checked_division() {
        let n = Integer::from(10);
        let zero = Integer::new();
        assert!(n.checked_div_rem(&zero).is_none());
        assert!(n.checked_div_rem_ceil(&zero).is_none());
        assert!(n.checked_div_rem_floor(&zero).is_none());
        assert!(n.checked_div_rem_euc(&zero).is_none());
        assert_eq!(n, 10);
        let (q, r) = Integer::from(10)
            .checked_div_rem_floor(&Integer::from(3))
            .unwrap();
        assert_eq!(q, 3);
        assert_eq!(r, 1);
        let (q, r) = Integer::from(-10)
            .checked_div_rem_floor(&Integer::from(3))
            .unwrap();
        assert_eq!(q, -4);
        assert_eq!(r, 2);
        let (q, _) = Integer::from(10)
            .checked_div_rem_ceil(&Integer::from(3))
            .unwrap();
        assert_eq!(q, 4);
    }

    #[test]
    fn check_euclidean_range() {
        for n in -50..50 {
            for d in [-7i32, -3, 3, 7] {
                let r = Integer::from(n).rem_euc(d);
                assert!(r.cmp0() != std::cmp::Ordering::Less);
                assert!(r < d.unsigned_abs());
                assert_eq!(r, Integer::from(n).mod_u(d.unsigned_abs()));
            }
        }
        assert_eq!(Integer::from(-10).rem_euc(3), 2);
    }

    #[test]
    fn check_2exp() {
        assert_eq!(Integer::from(9).div_2exp_trunc(2), 2);
        assert_eq!(Integer::from(-9).div_2exp_trunc(2), -2);
        assert_eq!(Integer::from(9).div_2exp_ceil(2), 3);
        assert_eq!(Integer::from(-9).div_2exp_ceil(2), -2);
        assert_eq!(Integer::from(9).div_2exp_floor(2), 2);
        assert_eq!(Integer::from(-9).div_2exp_floor(2), -3);
        assert_eq!(Integer::from(9).rem_2exp_trunc(2), 1);
        assert_eq!(Integer::from(-9).rem_2exp_trunc(2), -1);
        assert_eq!(Integer::from(9).rem_2exp_ceil(2), -3);
        assert_eq!(Integer::from(-9).rem_2exp_ceil(2), -1);
        assert_eq!(Integer::from(9).rem_2exp_floor(2), 1);
        assert_eq!(Integer::from(-9).rem_2exp_floor(2), 3);
        // identity at every convention, including exponents past the width
        for &n in &[-1000i64, -64, -9, -1, 0, 1, 9, 64, 1000] {
            let big = Integer::from(n) * Integer::from(3u64 << 40);
            for b in [0, 1, 5, 63, 64, 65, 130] {
                let pow = Integer::from(1u32) << b;
                let t = big.clone().div_2exp_trunc(b) * &pow
                    + big.clone().rem_2exp_trunc(b);
                assert_eq!(t, big);
                let c = big.clone().div_2exp_ceil(b) * &pow
                    + big.clone().rem_2exp_ceil(b);
                assert_eq!(c, big);
                let fl = big.clone().div_2exp_floor(b) * &pow
                    + big.clone().rem_2exp_floor(b);
                assert_eq!(fl, big);
                // agrees with real division by the power of two
                assert_eq!(
                    big.clone().div_2exp_floor(b),
                    big.clone().div_floor(&pow)
                );
                assert_eq!(
                    big.clone().div_2exp_ceil(b),
                    big.clone().div_ceil(&pow)
                );
            }
        }
    }

    #[test]
    fn check_divisibility() {
        let i = Integer::from(230);
        assert!(i.is_divisible(&Integer::from(10)));
        assert!(i.is_divisible(&Integer::from(-10)));
        assert!(!i.is_divisible(&Integer::from(100)));
        assert!(!i.is_divisible(&Integer::new()));
        assert!(Integer::new().is_divisible(&Integer::new()));
        assert!(i.is_divisible_u(23));
        assert!(!i.is_divisible_u(7));
        assert!(!i.is_divisible_u(0));
        assert!(Integer::new().is_divisible_u(0));
        assert!(Integer::new().is_divisible_2pow(1000));
        assert!(Integer::from(-64).is_divisible_2pow(6));
        assert!(!Integer::from(-64).is_divisible_2pow(7));
    }

    #[test]
    fn check_congruence() {
        let n = Integer::from(105);
        assert!(n.is_congruent(&Integer::from(5), &Integer::from(10)));
        assert!(n.is_congruent(&Integer::from(-5), &Integer::from(10)));
        assert!(!n.is_congruent(&Integer::from(6), &Integer::from(10)));
        assert!(n.is_congruent(&n, &Integer::new()));
        assert!(!n.is_congruent(&Integer::from(104), &Integer::new()));
        assert!(n.is_congruent_u(5, 10));
        assert!(!n.is_congruent_u(6, 10));
        assert!(n.is_congruent_u(105, 0));
        assert!(Integer::from(-7).is_congruent_u(3, 10));
        let a = Integer::from(0x1_00ff);
        assert!(a.is_congruent_2pow(&Integer::from(0xff), 8));
        assert!(!a.is_congruent_2pow(&Integer::from(0xff), 16));
    }

    #[test]
    fn check_exact() {
        let i = Integer::from(12345_i64 * 54321);
        assert_eq!(i.clone().div_exact(&Integer::from(12345)), 54321);
        assert_eq!(i.clone().div_exact(&Integer::from(-12345)), -54321);
        assert_eq!((-i.clone()).div_exact(&Integer::from(12345)), -54321);
        assert_eq!(i.div_exact_u(12345), 54321);
        let mut j = Integer::from(99) * Integer::from(1u64 << 40);
        j.div_exact_mut(&Integer::from(99));
        assert_eq!(j, 1u64 << 40);
    }

    #[test]
    #[should_panic(expected = "division by zero")]
    fn check_div_by_zero_panics() {
        let _ = Integer::from(1).div_rem(Integer::new());
    }
}
