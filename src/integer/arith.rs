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
use crate::integer::division::div_rem_trunc;
use crate::ops::{NegAssign, NotAssign, Pow, PowAssign};
use crate::Assign;
use std::mem;
use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor,
    BitXorAssign, Div, DivAssign, Mul, MulAssign, Neg, Not, Rem, RemAssign,
    Shl, ShlAssign, Shr, ShrAssign, Sub, SubAssign,
};

#[inline]
fn add_fn(lhs: &mut Integer, rhs: &Integer) {
    lhs.add_signed(rhs.neg, &rhs.mag);
}

#[inline]
fn sub_fn(lhs: &mut Integer, rhs: &Integer) {
    lhs.add_signed(!rhs.neg && !rhs.mag.is_empty(), &rhs.mag);
}

#[inline]
fn mul_fn(lhs: &mut Integer, rhs: &Integer) {
    lhs.mul_signed(rhs.neg, &rhs.mag);
}

#[inline]
fn div_fn(lhs: &mut Integer, rhs: &Integer) {
    *lhs = div_rem_trunc(lhs, rhs).0;
}

#[inline]
fn rem_fn(lhs: &mut Integer, rhs: &Integer) {
    *lhs = div_rem_trunc(lhs, rhs).1;
}

// bitwise operations work on the two's-complement form, with one
// extra limb so the sign extension is explicit
fn bit_op(lhs: &mut Integer, rhs: &Integer, f: fn(u64, u64) -> u64) {
    if !lhs.neg && !rhs.neg {
        let len = lhs.mag.len().max(rhs.mag.len());
        let mut out = Vec::with_capacity(len);
        for i in 0..len {
            let x = lhs.mag.get(i).copied().unwrap_or(0);
            let y = rhs.mag.get(i).copied().unwrap_or(0);
            out.push(f(x, y));
        }
        limbs::trim(&mut out);
        *lhs = Integer::from_sign_mag(false, out);
        return;
    }
    let len = lhs.mag.len().max(rhs.mag.len()) + 1;
    let a = limbs::to_twos(&lhs.mag, lhs.neg, len);
    let b = limbs::to_twos(&rhs.mag, rhs.neg, len);
    let out: Vec<u64> = a.iter().zip(&b).map(|(&x, &y)| f(x, y)).collect();
    let (mag, neg) = limbs::from_twos(out);
    *lhs = Integer::from_sign_mag(neg, mag);
}

#[inline]
fn bitand_fn(lhs: &mut Integer, rhs: &Integer) {
    bit_op(lhs, rhs, |x, y| x & y);
}

#[inline]
fn bitor_fn(lhs: &mut Integer, rhs: &Integer) {
    bit_op(lhs, rhs, |x, y| x | y);
}

#[inline]
fn bitxor_fn(lhs: &mut Integer, rhs: &Integer) {
    bit_op(lhs, rhs, |x, y| x ^ y);
}

macro_rules! arith_binary {
    (
        $Imp:ident { $method:ident },
        $ImpAssign:ident { $method_assign:ident },
        $func:path
    ) => {
        impl $Imp<Integer> for Integer {
            type Output = Integer;
            #[inline]
            fn $method(mut self, rhs: Integer) -> Integer {
                $func(&mut self, &rhs);
                self
            }
        }

        impl $Imp<&Integer> for Integer {
            type Output = Integer;
            #[inline]
            fn $method(mut self, rhs: &Integer) -> Integer {
                $func(&mut self, rhs);
                self
            }
        }

        impl $Imp<Integer> for &Integer {
            type Output = Integer;
            #[inline]
            fn $method(self, rhs: Integer) -> Integer {
                let mut lhs = self.clone();
                $func(&mut lhs, &rhs);
                lhs
            }
        }

        impl $Imp<&Integer> for &Integer {
            type Output = Integer;
            #[inline]
            fn $method(self, rhs: &Integer) -> Integer {
                let mut lhs = self.clone();
                $func(&mut lhs, rhs);
                lhs
            }
        }

        impl $ImpAssign<Integer> for Integer {
            #[inline]
            fn $method_assign(&mut self, rhs: Integer) {
                $func(self, &rhs);
            }
        }

        impl $ImpAssign<&Integer> for Integer {
            #[inline]
            fn $method_assign(&mut self, rhs: &Integer) {
                $func(self, rhs);
            }
        }
    };
}

arith_binary! { Add { add }, AddAssign { add_assign }, add_fn }
arith_binary! { Sub { sub }, SubAssign { sub_assign }, sub_fn }
arith_binary! { Mul { mul }, MulAssign { mul_assign }, mul_fn }
arith_binary! { Div { div }, DivAssign { div_assign }, div_fn }
arith_binary! { Rem { rem }, RemAssign { rem_assign }, rem_fn }
arith_binary! { BitAnd { bitand }, BitAndAssign { bitand_assign }, bitand_fn }
arith_binary! { BitOr { bitor }, BitOrAssign { bitor_assign }, bitor_fn }
arith_binary! { BitXor { bitxor }, BitXorAssign { bitxor_assign }, bitxor_fn }

macro_rules! arith_prim {
    (
        $Imp:ident { $method:ident },
        $ImpAssign:ident { $method_assign:ident };
        $($T:ty)*
    ) => { $(
        impl $Imp<$T> for Integer {
            type Output = Integer;
            #[inline]
            fn $method(self, rhs: $T) -> Integer {
                self.$method(Integer::from(rhs))
            }
        }

        impl $Imp<$T> for &Integer {
            type Output = Integer;
            #[inline]
            fn $method(self, rhs: $T) -> Integer {
                self.$method(Integer::from(rhs))
            }
        }

        impl $Imp<Integer> for $T {
            type Output = Integer;
            #[inline]
            fn $method(self, rhs: Integer) -> Integer {
                Integer::from(self).$method(rhs)
            }
        }

        impl $Imp<&Integer> for $T {
            type Output = Integer;
            #[inline]
            fn $method(self, rhs: &Integer) -> Integer {
                Integer::from(self).$method(rhs)
            }
        }

        impl $ImpAssign<$T> for Integer {
            #[inline]
            fn $method_assign(&mut self, rhs: $T) {
                self.$method_assign(Integer::from(rhs));
            }
        }
    )* };
}

arith_prim! { Add { add }, AddAssign { add_assign }; i32 u32 }
arith_prim! { Sub { sub }, SubAssign { sub_assign }; i32 u32 }
arith_prim! { Mul { mul }, MulAssign { mul_assign }; i32 u32 }
arith_prim! { Div { div }, DivAssign { div_assign }; i32 u32 }
arith_prim! { Rem { rem }, RemAssign { rem_assign }; i32 u32 }
arith_prim! { BitAnd { bitand }, BitAndAssign { bitand_assign }; i32 u32 }
arith_prim! { BitOr { bitor }, BitOrAssign { bitor_assign }; i32 u32 }
arith_prim! { BitXor { bitxor }, BitXorAssign { bitxor_assign }; i32 u32 }

impl Neg for Integer {
    type Output = Integer;
    #[inline]
    fn neg(mut self) -> Integer {
        self.neg_assign();
        self
    }
}

impl Neg for &Integer {
    type Output = Integer;
    #[inline]
    fn neg(self) -> Integer {
        -self.clone()
    }
}

impl NegAssign for Integer {
    #[inline]
    fn neg_assign(&mut self) {
        self.neg = !self.neg && !self.mag.is_empty();
    }
}

impl Not for Integer {
    type Output = Integer;
    #[inline]
    fn not(mut self) -> Integer {
        self.not_assign();
        self
    }
}

impl Not for &Integer {
    type Output = Integer;
    #[inline]
    fn not(self) -> Integer {
        !self.clone()
    }
}

impl NotAssign for Integer {
    // !x is -(x + 1)
    fn not_assign(&mut self) {
        if self.neg {
            self.mag = limbs::sub_limb(&self.mag, 1);
            self.neg = false;
        } else {
            self.mag = limbs::add_limb(&self.mag, 1);
            self.neg = true;
        }
    }
}

impl ShlAssign<u32> for Integer {
    #[inline]
    fn shl_assign(&mut self, rhs: u32) {
        let neg = self.neg;
        let mag = limbs::shl(&self.mag, rhs as usize);
        *self = Integer::from_sign_mag(neg, mag);
    }
}

impl ShrAssign<u32> for Integer {
    /// Arithmetic shift, equivalent to flooring division by a power
    /// of two.
    #[inline]
    fn shr_assign(&mut self, rhs: u32) {
        self.div_2exp_floor_mut(rhs);
    }
}

impl ShlAssign<i32> for Integer {
    /// A negative shift count shifts in the opposite direction.
    #[inline]
    fn shl_assign(&mut self, rhs: i32) {
        if rhs >= 0 {
            *self <<= rhs.unsigned_abs();
        } else {
            *self >>= rhs.unsigned_abs();
        }
    }
}

impl ShrAssign<i32> for Integer {
    /// A negative shift count shifts in the opposite direction.
    #[inline]
    fn shr_assign(&mut self, rhs: i32) {
        if rhs >= 0 {
            *self >>= rhs.unsigned_abs();
        } else {
            *self <<= rhs.unsigned_abs();
        }
    }
}

macro_rules! shift_ops {
    ($($T:ty)*) => { $(
        impl Shl<$T> for Integer {
            type Output = Integer;
            #[inline]
            fn shl(mut self, rhs: $T) -> Integer {
                self <<= rhs;
                self
            }
        }

        impl Shl<$T> for &Integer {
            type Output = Integer;
            #[inline]
            fn shl(self, rhs: $T) -> Integer {
                self.clone() << rhs
            }
        }

        impl Shr<$T> for Integer {
            type Output = Integer;
            #[inline]
            fn shr(mut self, rhs: $T) -> Integer {
                self >>= rhs;
                self
            }
        }

        impl Shr<$T> for &Integer {
            type Output = Integer;
            #[inline]
            fn shr(self, rhs: $T) -> Integer {
                self.clone() >> rhs
            }
        }
    )* };
}

shift_ops! { i32 u32 }

impl Pow<u32> for Integer {
    type Output = Integer;
    #[inline]
    fn pow(mut self, rhs: u32) -> Integer {
        self.pow_assign(rhs);
        self
    }
}

impl Pow<u32> for &Integer {
    type Output = Integer;
    #[inline]
    fn pow(self, rhs: u32) -> Integer {
        self.clone().pow(rhs)
    }
}

impl PowAssign<u32> for Integer {
    fn pow_assign(&mut self, rhs: u32) {
        let base = mem::take(self);
        self.assign(1);
        if rhs == 0 {
            return;
        }
        let bits = 32 - rhs.leading_zeros();
        for i in (0..bits).rev() {
            *self = self.clone() * &*self;
            if (rhs >> i) & 1 == 1 {
                *self *= &base;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::ops::{NegAssign, NotAssign, Pow};
    use crate::Integer;

    #[test]
    fn check_neg_not() {
        let mut i = Integer::from(-42);
        i.neg_assign();
        assert_eq!(i, 42);
        assert_eq!(-Integer::from(42), -42);
        assert_eq!(-Integer::new(), 0);
        i.not_assign();
        assert_eq!(i, -43);
        assert_eq!(!Integer::new(), -1);
        assert_eq!(!Integer::from(-1), 0);
        assert_eq!(!&Integer::from(0xf00d), -0xf00e);
    }

    #[test]
    fn check_bitwise_twos_complement() {
        // same answers as 64-bit two's complement for values that fit
        let vals = [
            -0x1_0000_0001_i64,
            -0xf0f0,
            -0xff,
            -2,
            -1,
            0,
            1,
            2,
            0xff,
            0xf0f0,
            0x1_0000_0001,
        ];
        for &x in &vals {
            for &y in &vals {
                let bx = Integer::from(x);
                let by = Integer::from(y);
                assert_eq!(bx.clone() & &by, x & y, "{} & {}", x, y);
                assert_eq!(bx.clone() | &by, x | y, "{} | {}", x, y);
                assert_eq!(bx.clone() ^ &by, x ^ y, "{} ^ {}", x, y);
            }
            assert_eq!(!Integer::from(x), !x);
        }
    }

    #[test]
    fn check_bitwise_large() {
        let a = (Integer::from(1u32) << 200u32) - 1u32;
        let b = Integer::from(1u32) << 100u32;
        assert_eq!((a.clone() & &b), b);
        assert_eq!((a.clone() | &b), a);
        assert_eq!((a.clone() ^ &b), a.clone() - &b);
        let minus_one = Integer::from(-1);
        assert_eq!(a.clone() & &minus_one, a);
        assert_eq!(a.clone() | &minus_one, -1);
        assert_eq!(a.clone() ^ &minus_one, !a);
    }

    #[test]
    fn check_shift_u_s() {
        let pos: Integer = Integer::from(11) << 100;
        let neg: Integer = Integer::from(-33) << 50;
        assert_eq!(pos.clone() << 10, pos.clone() >> -10);
        assert_eq!(pos.clone() << 10, Integer::from(11) << 110);
        assert_eq!(pos.clone() << -100, pos.clone() >> 100);
        assert_eq!(pos.clone() << -100, 11);
        assert_eq!(neg.clone() << 10, neg.clone() >> -10);
        assert_eq!(neg.clone() << 10, Integer::from(-33) << 60);
        assert_eq!(neg.clone() << -100, neg.clone() >> 100);
        assert_eq!(neg.clone() << -100, -1);
    }

    #[test]
    fn check_shr_floors() {
        assert_eq!(Integer::from(-1) >> 1u32, -1);
        assert_eq!(Integer::from(-2) >> 1u32, -1);
        assert_eq!(Integer::from(-3) >> 1u32, -2);
        assert_eq!(Integer::from(3) >> 1u32, 1);
        assert_eq!(Integer::from(-9) >> 2u32, -3);
    }

    #[test]
    fn check_pow() {
        assert_eq!(Integer::from(0).pow(0), 1);
        assert_eq!(Integer::from(0).pow(5), 0);
        assert_eq!(Integer::from(10).pow(5), 100_000);
        assert_eq!(Integer::from(-3).pow(3), -27);
        assert_eq!(Integer::from(-3).pow(4), 81);
        assert_eq!((&Integer::from(2)).pow(100), Integer::from(1u32) << 100u32);
    }

    #[test]
    fn check_aliasing_safe() {
        let mut a = Integer::from(123);
        a += a.clone();
        assert_eq!(a, 246);
        let b = a.clone();
        a -= b;
        assert_eq!(a, 0);
        let mut c = Integer::from(7);
        c *= c.clone();
        assert_eq!(c, 49);
    }

    #[test]
    fn check_assign_ops_mixed() {
        let mut i = Integer::from(100);
        i += 5;
        assert_eq!(i, 105);
        i -= 6u32;
        assert_eq!(i, 99);
        i *= -2;
        assert_eq!(i, -198);
        i /= 10;
        assert_eq!(i, -19);
        i %= 4;
        assert_eq!(i, -3);
        i &= 0xff;
        assert_eq!(i, 0xfd);
        i |= 0x100;
        assert_eq!(i, 0x1fd);
        i ^= 0xff;
        assert_eq!(i, 0x102);
    }
}
