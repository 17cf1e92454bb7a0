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
use std::cmp::Ordering;

impl Eq for Integer {}

impl Ord for Integer {
    fn cmp(&self, other: &Integer) -> Ordering {
        match (self.neg, other.neg) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => limbs::cmp(&self.mag, &other.mag),
            (true, true) => limbs::cmp(&other.mag, &self.mag),
        }
    }
}

impl PartialEq for Integer {
    #[inline]
    fn eq(&self, other: &Integer) -> bool {
        self.neg == other.neg && self.mag == other.mag
    }
}

impl PartialOrd for Integer {
    #[inline]
    fn partial_cmp(&self, other: &Integer) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// compares against the sign and 128-bit magnitude of a primitive
fn cmp_sign_mag(i: &Integer, neg: bool, mag: u128) -> Ordering {
    if i.neg != neg {
        return if neg { Ordering::Greater } else { Ordering::Less };
    }
    let abs = match i.mag.len() {
        0 => 0,
        1 => u128::from(i.mag[0]),
        2 => u128::from(i.mag[0]) | (u128::from(i.mag[1]) << 64),
        _ => return if neg { Ordering::Less } else { Ordering::Greater },
    };
    let ord = abs.cmp(&mag);
    if neg {
        ord.reverse()
    } else {
        ord
    }
}

macro_rules! cmp_signed {
    ($($T:ty)*) => { $(
        impl PartialEq<$T> for Integer {
            #[inline]
            fn eq(&self, other: &$T) -> bool {
                self.partial_cmp(other) == Some(Ordering::Equal)
            }
        }

        impl PartialEq<Integer> for $T {
            #[inline]
            fn eq(&self, other: &Integer) -> bool {
                other.partial_cmp(self) == Some(Ordering::Equal)
            }
        }

        impl PartialOrd<$T> for Integer {
            #[inline]
            fn partial_cmp(&self, other: &$T) -> Option<Ordering> {
                let neg = *other < 0;
                Some(cmp_sign_mag(self, neg, other.unsigned_abs() as u128))
            }
        }

        impl PartialOrd<Integer> for $T {
            #[inline]
            fn partial_cmp(&self, other: &Integer) -> Option<Ordering> {
                other.partial_cmp(self).map(Ordering::reverse)
            }
        }
    )* };
}

macro_rules! cmp_unsigned {
    ($($T:ty)*) => { $(
        impl PartialEq<$T> for Integer {
            #[inline]
            fn eq(&self, other: &$T) -> bool {
                self.partial_cmp(other) == Some(Ordering::Equal)
            }
        }

        impl PartialEq<Integer> for $T {
            #[inline]
            fn eq(&self, other: &Integer) -> bool {
                other.partial_cmp(self) == Some(Ordering::Equal)
            }
        }

        impl PartialOrd<$T> for Integer {
            #[inline]
            fn partial_cmp(&self, other: &$T) -> Option<Ordering> {
                Some(cmp_sign_mag(self, false, *other as u128))
            }
        }

        impl PartialOrd<Integer> for $T {
            #[inline]
            fn partial_cmp(&self, other: &Integer) -> Option<Ordering> {
                other.partial_cmp(self).map(Ordering::reverse)
            }
        }
    )* };
}

cmp_signed! { i8 i16 i32 i64 isize }
cmp_unsigned! { u8 u16 u32 u64 usize }

impl PartialEq<i128> for Integer {
    #[inline]
    fn eq(&self, other: &i128) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialEq<Integer> for i128 {
    #[inline]
    fn eq(&self, other: &Integer) -> bool {
        other.partial_cmp(self) == Some(Ordering::Equal)
    }
}

impl PartialOrd<i128> for Integer {
    #[inline]
    fn partial_cmp(&self, other: &i128) -> Option<Ordering> {
        Some(cmp_sign_mag(self, *other < 0, other.unsigned_abs()))
    }
}

impl PartialOrd<Integer> for i128 {
    #[inline]
    fn partial_cmp(&self, other: &Integer) -> Option<Ordering> {
        other.partial_cmp(self).map(Ordering::reverse)
    }
}

impl PartialEq<u128> for Integer {
    #[inline]
    fn eq(&self, other: &u128) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialEq<Integer> for u128 {
    #[inline]
    fn eq(&self, other: &Integer) -> bool {
        other.partial_cmp(self) == Some(Ordering::Equal)
    }
}

impl PartialOrd<u128> for Integer {
    #[inline]
    fn partial_cmp(&self, other: &u128) -> Option<Ordering> {
        Some(cmp_sign_mag(self, false, *other))
    }
}

impl PartialOrd<Integer> for u128 {
    #[inline]
    fn partial_cmp(&self, other: &Integer) -> Option<Ordering> {
        other.partial_cmp(self).map(Ordering::reverse)
    }
}

impl PartialEq<f64> for Integer {
    #[inline]
    fn eq(&self, other: &f64) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialEq<Integer> for f64 {
    #[inline]
    fn eq(&self, other: &Integer) -> bool {
        other.partial_cmp(self) == Some(Ordering::Equal)
    }
}

impl PartialOrd<f64> for Integer {
    fn partial_cmp(&self, other: &f64) -> Option<Ordering> {
        if other.is_nan() {
            return None;
        }
        if other.is_infinite() {
            return Some(if *other > 0.0 {
                Ordering::Less
            } else {
                Ordering::Greater
            });
        }
        let trunc = other.trunc();
        let whole = Integer::from_f64(trunc).expect("finite");
        match self.cmp(&whole) {
            Ordering::Equal => {
                // tie-break on the fractional part
                let frac = other - trunc;
                Some(if frac > 0.0 {
                    Ordering::Less
                } else if frac < 0.0 {
                    Ordering::Greater
                } else {
                    Ordering::Equal
                })
            }
            ord => Some(ord),
        }
    }
}

impl PartialOrd<Integer> for f64 {
    #[inline]
    fn partial_cmp(&self, other: &Integer) -> Option<Ordering> {
        other.partial_cmp(self).map(Ordering::reverse)
    }
}

impl PartialEq<f32> for Integer {
    #[inline]
    fn eq(&self, other: &f32) -> bool {
        self.partial_cmp(&f64::from(*other)) == Some(Ordering::Equal)
    }
}

impl PartialEq<Integer> for f32 {
    #[inline]
    fn eq(&self, other: &Integer) -> bool {
        other.partial_cmp(&f64::from(*self)) == Some(Ordering::Equal)
    }
}

impl PartialOrd<f32> for Integer {
    #[inline]
    fn partial_cmp(&self, other: &f32) -> Option<Ordering> {
        self.partial_cmp(&f64::from(*other))
    }
}

impl PartialOrd<Integer> for f32 {
    #[inline]
    fn partial_cmp(&self, other: &Integer) -> Option<Ordering> {
        other.partial_cmp(&f64::from(*self)).map(Ordering::reverse)
    }
}

#[cfg(test)]
mod tests {
    use crate::Integer;
    use std::cmp::Ordering;

    #[test]
    fn check_ordering() {
        let values = [
            Integer::from(i64::MIN) - 1,
            Integer::from(i64::MIN),
            Integer::from(-2),
            Integer::from(-1),
            Integer::new(),
            Integer::from(1),
            Integer::from(2),
            Integer::from(u64::MAX),
            Integer::from(u64::MAX) + 1,
        ];
        for (i, a) in values.iter().enumerate() {
            for (j, b) in values.iter().enumerate() {
                assert_eq!(a.cmp(b), i.cmp(&j));
                assert_eq!(a == b, i == j);
            }
        }
    }

    #[test]
    fn check_cmp_prim() {
        assert_eq!(Integer::from(-1), -1);
        assert!(Integer::from(-1) < 0);
        assert!(Integer::from(-1) > -2);
        assert!(Integer::from(1) < 2u32);
        assert!(0u8 < Integer::from(1));
        assert!(i64::MIN == Integer::from(i64::MIN));
        assert!(u64::MAX == Integer::from(u64::MAX));
        assert!(Integer::from(u64::MAX) + 1 > u64::MAX);
        assert!(i128::MIN == Integer::from(i128::MIN));
        assert!(u128::MAX == Integer::from(u128::MAX));
        assert!(Integer::from(-5) < 5usize);
        assert!(Integer::from(300) > 255u8);
    }

    #[test]
    fn check_cmp_float() {
        assert!(Integer::from(5) < 5.5);
        assert!(Integer::from(6) > 5.5);
        assert!(Integer::from(5) == 5.0);
        assert!(Integer::from(-5) > -5.5);
        assert!(Integer::from(-6) < -5.5);
        assert!(Integer::from(5).partial_cmp(&f64::NAN).is_none());
        assert!(Integer::from(5) < f64::INFINITY);
        assert!(Integer::from(5) > f64::NEG_INFINITY);
        assert!(5.5 > Integer::from(5));
        assert!(Integer::from(5) < 5.5f32);
        // larger than any value with the same low bits
        let big = (Integer::from(1u32) << 100u32) + 1;
        assert!(big > 2f64.powi(100));
    }

    #[test]
    fn check_cmp_abs() {
        let a = Integer::from(-10);
        let b = Integer::from(4);
        assert_eq!(a.cmp(&b), Ordering::Less);
        assert_eq!(a.cmp_abs(&b), Ordering::Greater);
        assert_eq!(Integer::from(-4).cmp_abs(&b), Ordering::Equal);
    }
}
