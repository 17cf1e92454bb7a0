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
use crate::integer::big::{cast_u32, Integer};
use crate::ops::{DivRounding, Pow, RemRounding};
use crate::Assign;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::cmp::Ordering;
use std::mem;

// trial-division pre-filter; everything below 311² that survives it is prime
const SMALL_PRIMES: [u32; 64] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67,
    71, 73, 79, 83, 89, 97, 101, 103, 107, 109, 113, 127, 131, 137, 139, 149,
    151, 157, 163, 167, 173, 179, 181, 191, 193, 197, 199, 211, 223, 227,
    229, 233, 239, 241, 251, 257, 263, 269, 271, 277, 281, 283, 293, 307,
    311,
];

impl Integer {
    /// Finds the greatest common divisor.
    ///
    /// The result is always non-negative; the GCD of zero and zero is
    /// zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kilim::Integer;
    /// let a = Integer::from(48);
    /// assert_eq!(a.gcd(&Integer::from(18)), 6);
    /// assert_eq!(Integer::from(-48).gcd(&Integer::from(18)), 6);
    /// assert_eq!(Integer::new().gcd(&Integer::new()), 0);
    /// ```
    #[inline]
    pub fn gcd(mut self, other: &Integer) -> Integer {
        self.gcd_mut(other);
        self
    }

    /// Finds the greatest common divisor.
    pub fn gcd_mut(&mut self, other: &Integer) {
        let mut a = mem::take(&mut self.mag);
        let mut b = other.mag.clone();
        while !b.is_empty() {
            let (_, r) = limbs::div_rem(&a, &b);
            a = b;
            b = r;
        }
        self.mag = a;
        self.neg = false;
    }

    /// Finds the greatest common divisor with a primitive.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kilim::Integer;
    /// assert_eq!(Integer::from(140).gcd_u(42), 14);
    /// // the GCD with zero is the absolute value
    /// assert_eq!(Integer::from(-140).gcd_u(0), 140);
    /// ```
    pub fn gcd_u(mut self, other: u32) -> Integer {
        if other == 0 {
            self.neg = false;
            return self;
        }
        let mut a = u64::from(other);
        let mut b = limbs::rem_limb(&self.mag, a);
        while b != 0 {
            let t = a % b;
            a = b;
            b = t;
        }
        Integer::from(a)
    }

    /// Finds the greatest common divisor and the Bezout coefficients
    /// satisfying `self` × s + `other` × t = g.
    ///
    /// The GCD is always non-negative, and both operands being zero
    /// yields `(0, 0, 0)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kilim::Integer;
    /// let a = Integer::from(4);
    /// let b = Integer::from(6);
    /// let (g, s, t) = a.extended_gcd(b);
    /// assert_eq!(g, 2);
    /// assert_eq!(Integer::from(4) * s + Integer::from(6) * t, 2);
    /// ```
    pub fn extended_gcd(self, other: Integer) -> (Integer, Integer, Integer) {
        if self.cmp0() == Ordering::Equal && other.cmp0() == Ordering::Equal {
            return (Integer::new(), Integer::new(), Integer::new());
        }
        let (mut old_r, mut r) = (self, other);
        let (mut old_s, mut s) = (Integer::from(1), Integer::new());
        let (mut old_t, mut t) = (Integer::new(), Integer::from(1));
        while r.cmp0() != Ordering::Equal {
            let (q, rem) = old_r.div_rem(r.clone());
            old_r = mem::replace(&mut r, rem);
            let new_s = old_s - q.clone() * &s;
            old_s = mem::replace(&mut s, new_s);
            let new_t = old_t - q * &t;
            old_t = mem::replace(&mut t, new_t);
        }
        if old_r.cmp0() == Ordering::Less {
            old_r = -old_r;
            old_s = -old_s;
            old_t = -old_t;
        }
        (old_r, old_s, old_t)
    }

    /// Finds the least common multiple.
    ///
    /// The result is zero if either operand is zero, and non-negative
    /// otherwise.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kilim::Integer;
    /// let a = Integer::from(10);
    /// assert_eq!(a.lcm(&Integer::from(-14)), 70);
    /// assert_eq!(Integer::new().lcm(&Integer::from(5)), 0);
    /// ```
    #[inline]
    pub fn lcm(mut self, other: &Integer) -> Integer {
        self.lcm_mut(other);
        self
    }

    /// Finds the least common multiple.
    pub fn lcm_mut(&mut self, other: &Integer) {
        if self.mag.is_empty() || other.mag.is_empty() {
            *self = Integer::new();
            return;
        }
        let g = self.clone().gcd(other);
        *self = (mem::take(self).div_exact(&g) * other).abs();
    }

    /// Finds the multiplicative inverse modulo `modulo` if an inverse
    /// exists, returning the unchanged operand otherwise.
    ///
    /// The inverse exists when the operand is coprime to a nonzero
    /// modulus; it is returned in the range [0, |`modulo`|).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kilim::Integer;
    /// let i = Integer::from(3);
    /// let inv = i.invert(&Integer::from(11)).unwrap();
    /// assert_eq!(inv, 4);
    /// let no_inv = Integer::from(4).invert(&Integer::from(12));
    /// assert_eq!(no_inv.unwrap_err(), 4);
    /// ```
    #[inline]
    pub fn invert(self, modulo: &Integer) -> Result<Integer, Integer> {
        match invert_impl(&self, modulo) {
            Some(inv) => Ok(inv),
            None => Err(self),
        }
    }

    /// Finds the multiplicative inverse modulo `modulo` if an inverse
    /// exists, returning whether the value was replaced.
    #[inline]
    pub fn invert_mut(&mut self, modulo: &Integer) -> bool {
        match invert_impl(self, modulo) {
            Some(inv) => {
                *self = inv;
                true
            }
            None => false,
        }
    }

    /// Raises a value to the power of `exponent` modulo `modulo`,
    /// returning the unchanged operand when the result is undefined.
    ///
    /// A negative exponent requires the inverse to exist; the result
    /// is in the range [0, |`modulo`|).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kilim::Integer;
    /// let five = Integer::from(5);
    /// let pow = five.pow_mod(&Integer::from(3), &Integer::from(13));
    /// assert_eq!(pow.unwrap(), 8);
    /// // a negative exponent uses the inverse
    /// let two = Integer::from(2);
    /// let pow = two.pow_mod(&Integer::from(-1), &Integer::from(5));
    /// assert_eq!(pow.unwrap(), 3);
    /// ```
    pub fn pow_mod(
        self,
        exponent: &Integer,
        modulo: &Integer,
    ) -> Result<Integer, Integer> {
        if modulo.cmp0() == Ordering::Equal {
            return Err(self);
        }
        let base = if exponent.cmp0() == Ordering::Less {
            match invert_impl(&self, modulo) {
                Some(inv) => inv,
                None => return Err(self),
            }
        } else {
            self.rem_euc(modulo)
        };
        Ok(pow_mod_impl(&base, &exponent.clone().abs(), modulo))
    }

    /// Raises a value to the power of `exponent` modulo `modulo`,
    /// leaving the value unchanged when the result is undefined.
    pub fn pow_mod_mut(
        &mut self,
        exponent: &Integer,
        modulo: &Integer,
    ) -> Result<(), ()> {
        if modulo.cmp0() == Ordering::Equal {
            return Err(());
        }
        let base = if exponent.cmp0() == Ordering::Less {
            match invert_impl(self, modulo) {
                Some(inv) => inv,
                None => return Err(()),
            }
        } else {
            self.clone().rem_euc(modulo)
        };
        *self = pow_mod_impl(&base, &exponent.clone().abs(), modulo);
        Ok(())
    }

    /// Raises a value to the power of `exponent` modulo `modulo`,
    /// performing a uniform amount of work per exponent bit so the
    /// timing does not leak the exponent's bit pattern.
    ///
    /// Computes the same result as [`pow_mod`][Integer::pow_mod].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kilim::Integer;
    /// let five = Integer::from(5);
    /// let pow = five.secure_pow_mod(&Integer::from(3), &Integer::from(13));
    /// assert_eq!(pow, 8);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `modulo` is even or zero, or if a negative exponent
    /// is used and no inverse exists.
    pub fn secure_pow_mod(
        self,
        exponent: &Integer,
        modulo: &Integer,
    ) -> Integer {
        assert!(modulo.is_odd(), "modulus must be odd");
        let base = if exponent.cmp0() == Ordering::Less {
            invert_impl(&self, modulo).expect("no inverse exists")
        } else {
            self.rem_euc(modulo)
        };
        let e = exponent.clone().abs();
        let bits = e.significant_bits();
        // Montgomery ladder: one multiplication and one squaring per
        // bit, whichever way the bit falls
        let mut r0 = Integer::from(1).rem_euc(modulo);
        let mut r1 = base;
        for i in (0..bits).rev() {
            if e.get_bit(i) {
                r0 = (r0 * &r1).rem_euc(modulo);
                r1 = (r1.clone() * &r1).rem_euc(modulo);
            } else {
                r1 = (r1 * &r0).rem_euc(modulo);
                r0 = (r0.clone() * &r0).rem_euc(modulo);
            }
        }
        r0
    }

    /// Computes the Jacobi symbol (`self`/`n`).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kilim::Integer;
    /// assert_eq!(Integer::from(2).jacobi(&Integer::from(3)), -1);
    /// assert_eq!(Integer::from(2).jacobi(&Integer::from(9)), 1);
    /// assert_eq!(Integer::from(0).jacobi(&Integer::from(3)), 0);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `n` is even or not positive.
    #[inline]
    pub fn jacobi(&self, n: &Integer) -> i32 {
        assert!(
            n.is_odd() && n.cmp0() == Ordering::Greater,
            "n must be odd and positive"
        );
        jacobi_impl(self, n)
    }

    /// Computes the Legendre symbol (`self`/`p`).
    ///
    /// The result is meaningful when `p` is an odd prime.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kilim::Integer;
    /// assert_eq!(Integer::from(2).legendre(&Integer::from(7)), 1);
    /// assert_eq!(Integer::from(3).legendre(&Integer::from(7)), -1);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `p` is even or not positive.
    #[inline]
    pub fn legendre(&self, p: &Integer) -> i32 {
        self.jacobi(p)
    }

    /// Computes the Kronecker symbol (`self`/`n`), defined for every
    /// `n` including even and negative values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kilim::Integer;
    /// assert_eq!(Integer::from(5).kronecker(&Integer::from(8)), -1);
    /// assert_eq!(Integer::from(1).kronecker(&Integer::new()), 1);
    /// assert_eq!(Integer::from(-3).kronecker(&Integer::from(-1)), -1);
    /// ```
    pub fn kronecker(&self, n: &Integer) -> i32 {
        if n.cmp0() == Ordering::Equal {
            let unit = self.mag.len() == 1 && self.mag[0] == 1;
            return i32::from(unit);
        }
        let mut result = if n.neg && self.neg { -1 } else { 1 };
        let mut n_abs = n.clone().abs();
        let e = n_abs.find_one(0).expect("nonzero");
        if e > 0 {
            if self.is_even() {
                return 0;
            }
            n_abs >>= e;
            if e % 2 == 1 {
                let m8 = self.mod_u(8);
                if m8 == 3 || m8 == 5 {
                    result = -result;
                }
            }
        }
        result * jacobi_impl(self, &n_abs)
    }

    /// Determines whether the value is prime.
    ///
    /// The test uses trial division followed by `reps` rounds of the
    /// Miller-Rabin test, so composites are misidentified as
    /// [`IsPrime::Probably`] with probability at most
    /// 4<sup>−`reps`</sup>. [`IsPrime::Yes`] is only returned for
    /// values small enough for trial division to be exhaustive.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kilim::integer::IsPrime;
    /// use kilim::Integer;
    /// let no = Integer::from(163 * 4003);
    /// assert_eq!(no.is_probably_prime(15), IsPrime::No);
    /// let yes = Integer::from(21_751);
    /// assert_eq!(yes.is_probably_prime(15), IsPrime::Yes);
    /// // 817_504_243 is actually a prime
    /// let probably = Integer::from(817_504_243);
    /// assert_eq!(probably.is_probably_prime(15), IsPrime::Probably);
    /// ```
    pub fn is_probably_prime(&self, reps: u32) -> IsPrime {
        let n = self.clone().abs();
        if n < 2 {
            return IsPrime::No;
        }
        for &p in SMALL_PRIMES.iter() {
            if n == p {
                return IsPrime::Yes;
            }
            if n.is_divisible_u(p) {
                return IsPrime::No;
            }
        }
        let limit = u64::from(*SMALL_PRIMES.last().unwrap());
        if let Some(v) = n.to_u64() {
            if v <= limit * limit {
                return IsPrime::Yes;
            }
        }

        let nm1 = n.clone() - 1u32;
        let s = nm1.find_one(0).expect("n is odd");
        let d = nm1.clone() >> s;
        let mut rng =
            StdRng::seed_from_u64(n.to_u64_wrapping() ^ 0x9e37_79b9_7f4a_7c15);
        let bound = n.clone() - 3u32;
        'witness: for round in 0..reps.max(1) {
            let base = if round == 0 {
                Integer::from(2)
            } else {
                Integer::from(2) + random_below(&mut rng, &bound)
            };
            let mut x = base.pow_mod(&d, &n).expect("nonzero modulus");
            if x == 1 || x == nm1 {
                continue;
            }
            for _ in 1..s {
                x = (x.clone() * &x).rem_euc(&n);
                if x == nm1 {
                    continue 'witness;
                }
                if x == 1 {
                    return IsPrime::No;
                }
            }
            return IsPrime::No;
        }
        IsPrime::Probably
    }

    /// Finds the next prime after the value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kilim::Integer;
    /// assert_eq!(Integer::from(-5).next_prime(), 2);
    /// assert_eq!(Integer::from(8).next_prime(), 11);
    /// assert_eq!(Integer::from(11).next_prime(), 13);
    /// ```
    #[inline]
    pub fn next_prime(mut self) -> Integer {
        self.next_prime_mut();
        self
    }

    /// Finds the next prime after the value.
    pub fn next_prime_mut(&mut self) {
        if *self < 2 {
            self.assign(2);
            return;
        }
        *self += 1u32;
        if self.is_even() {
            *self += 1u32;
        }
        while self.is_probably_prime(30) == IsPrime::No {
            *self += 2u32;
        }
    }

    /// Finds the previous prime before the value if one exists.
    ///
    /// There is no prime before 2.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kilim::Integer;
    /// assert_eq!(Integer::from(10).prev_prime(), Some(Integer::from(7)));
    /// assert_eq!(Integer::from(3).prev_prime(), Some(Integer::from(2)));
    /// assert_eq!(Integer::from(2).prev_prime(), None);
    /// ```
    #[inline]
    pub fn prev_prime(mut self) -> Option<Integer> {
        if self.prev_prime_mut() {
            Some(self)
        } else {
            None
        }
    }

    /// Finds the previous prime before the value, returning whether
    /// one exists; the value is unchanged when there is none.
    pub fn prev_prime_mut(&mut self) -> bool {
        if *self <= 2 {
            return false;
        }
        let mut c = self.clone() - 1u32;
        if c == 2 {
            self.assign(2);
            return true;
        }
        if c.is_even() {
            c -= 1u32;
        }
        while c.is_probably_prime(30) == IsPrime::No {
            c -= 2u32;
        }
        *self = c;
        true
    }

    /// Removes all occurrences of the factor, returning the
    /// factor-free quotient and the number of divisions performed.
    ///
    /// Zero values, zero factors and unit factors yield a count of
    /// zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kilim::Integer;
    /// let i = Integer::from(48);
    /// let (quotient, count) = i.remove_factor(&Integer::from(2));
    /// assert_eq!(quotient, 3);
    /// assert_eq!(count, 4);
    /// ```
    #[inline]
    pub fn remove_factor(mut self, factor: &Integer) -> (Integer, u32) {
        let count = self.remove_factor_mut(factor);
        (self, count)
    }

    /// Removes all occurrences of the factor, returning the number of
    /// divisions performed.
    pub fn remove_factor_mut(&mut self, factor: &Integer) -> u32 {
        let unit = factor.mag.len() == 1 && factor.mag[0] == 1;
        if self.mag.is_empty() || factor.mag.is_empty() || unit {
            return 0;
        }
        let mut count = 0;
        loop {
            let (q, r) = limbs::div_rem(&self.mag, &factor.mag);
            if !r.is_empty() {
                break;
            }
            self.mag = q;
            if factor.neg {
                self.neg = !self.neg;
            }
            count += 1;
        }
        count
    }

    /// Assigns the factorial of `n`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kilim::Integer;
    /// let mut i = Integer::new();
    /// i.assign_factorial(10);
    /// assert_eq!(i, 3628800);
    /// ```
    pub fn assign_factorial(&mut self, n: u32) {
        self.assign(1);
        for i in 2..=u64::from(n) {
            self.mag = limbs::mul_limb(&self.mag, i);
        }
    }

    /// Assigns the double factorial of `n`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kilim::Integer;
    /// let mut i = Integer::new();
    /// i.assign_factorial_2(9);
    /// assert_eq!(i, 945);
    /// ```
    #[inline]
    pub fn assign_factorial_2(&mut self, n: u32) {
        self.assign_factorial_m(n, 2);
    }

    /// Assigns the `m`-multi factorial of `n`, the product of `n`,
    /// `n` − `m`, `n` − 2`m`, and so on down to one.
    ///
    /// A step of 1 is the ordinary factorial.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kilim::Integer;
    /// let mut i = Integer::new();
    /// i.assign_factorial_m(10, 3);
    /// assert_eq!(i, 10 * 7 * 4);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `m` is zero.
    pub fn assign_factorial_m(&mut self, n: u32, m: u32) {
        assert_ne!(m, 0, "invalid step");
        self.assign(1);
        let mut i = n;
        while i > 1 {
            self.mag = limbs::mul_limb(&self.mag, u64::from(i));
            if i <= m {
                break;
            }
            i -= m;
        }
    }

    /// Assigns the primorial of `n`, the product of the primes up to
    /// and including `n`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kilim::Integer;
    /// let mut i = Integer::new();
    /// i.assign_primorial(10);
    /// assert_eq!(i, 2 * 3 * 5 * 7);
    /// ```
    pub fn assign_primorial(&mut self, n: u32) {
        self.assign(1);
        if n < 2 {
            return;
        }
        let n = n as usize;
        let mut sieve = vec![true; n + 1];
        for p in 2..=n {
            if sieve[p] {
                self.mag = limbs::mul_limb(&self.mag, p as u64);
                let mut q = p * p;
                while q <= n {
                    sieve[q] = false;
                    q += p;
                }
            }
        }
    }

    /// Computes the binomial coefficient over `k`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kilim::Integer;
    /// let i = Integer::from(10);
    /// assert_eq!(i.binomial(4), 210);
    /// ```
    #[inline]
    pub fn binomial(mut self, k: u32) -> Integer {
        self.binomial_mut(k);
        self
    }

    /// Computes the binomial coefficient over `k`.
    pub fn binomial_mut(&mut self, k: u32) {
        let n = mem::take(self);
        self.assign(1);
        for i in 1..=k {
            *self *= n.clone() - Integer::from(k - i);
            *self = mem::take(self).div_exact_u(i);
        }
    }

    /// Assigns the binomial coefficient of `n` over `k`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kilim::Integer;
    /// let mut i = Integer::new();
    /// i.assign_binomial_u(10, 4);
    /// assert_eq!(i, 210);
    /// ```
    #[inline]
    pub fn assign_binomial_u(&mut self, n: u32, k: u32) {
        *self = Integer::from(n).binomial(k);
    }

    /// Assigns the `n`th Fibonacci number.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kilim::Integer;
    /// let mut i = Integer::new();
    /// i.assign_fibonacci(10);
    /// assert_eq!(i, 55);
    /// ```
    #[inline]
    pub fn assign_fibonacci(&mut self, n: u32) {
        *self = fib_pair(n).0;
    }

    /// Assigns the `n`th Fibonacci number to `self` and the
    /// `n` − 1st to `previous`, allowing iteration to continue in
    /// either direction.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kilim::Integer;
    /// let mut f = Integer::new();
    /// let mut f_prev = Integer::new();
    /// f.assign_fibonacci_2(&mut f_prev, 10);
    /// assert_eq!(f, 55);
    /// assert_eq!(f_prev, 34);
    /// ```
    pub fn assign_fibonacci_2(&mut self, previous: &mut Integer, n: u32) {
        if n == 0 {
            self.assign(0);
            previous.assign(1);
        } else {
            let (f_nm1, f_n) = fib_pair(n - 1);
            *previous = f_nm1;
            *self = f_n;
        }
    }

    /// Assigns the `n`th Lucas number.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kilim::Integer;
    /// let mut i = Integer::new();
    /// i.assign_lucas(10);
    /// assert_eq!(i, 123);
    /// ```
    pub fn assign_lucas(&mut self, n: u32) {
        let (f_n, f_n1) = fib_pair(n);
        *self = f_n1 * 2u32 - &f_n;
    }

    /// Assigns the `n`th Lucas number to `self` and the `n` − 1st to
    /// `previous`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kilim::Integer;
    /// let mut l = Integer::new();
    /// let mut l_prev = Integer::new();
    /// l.assign_lucas_2(&mut l_prev, 10);
    /// assert_eq!(l, 123);
    /// assert_eq!(l_prev, 76);
    /// ```
    pub fn assign_lucas_2(&mut self, previous: &mut Integer, n: u32) {
        let (f_n, f_n1) = fib_pair(n);
        *self = f_n1.clone() * 2u32 - &f_n;
        *previous = f_n * 3u32 - &f_n1;
    }

    /// Computes the square root, truncated towards zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kilim::Integer;
    /// assert_eq!(Integer::from(99).sqrt(), 9);
    /// assert_eq!(Integer::from(100).sqrt(), 10);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if the value is negative.
    #[inline]
    pub fn sqrt(mut self) -> Integer {
        self.sqrt_mut();
        self
    }

    /// Computes the square root, truncated towards zero.
    #[inline]
    pub fn sqrt_mut(&mut self) {
        self.root_mut(2);
    }

    /// Computes the square root and the remainder; the remainder is
    /// the value minus the square of the root.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kilim::Integer;
    /// let (root, rem) = Integer::from(99).sqrt_rem();
    /// assert_eq!(root, 9);
    /// assert_eq!(rem, 18);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if the value is negative.
    #[inline]
    pub fn sqrt_rem(self) -> (Integer, Integer) {
        self.root_rem(2)
    }

    /// Computes the `n`th root, truncated towards zero.
    ///
    /// Odd roots of negative values are negative.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kilim::Integer;
    /// assert_eq!(Integer::from(64).root(3), 4);
    /// assert_eq!(Integer::from(10).root(3), 2);
    /// assert_eq!(Integer::from(-10).root(3), -2);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `n` is zero, or if `n` is even and the value is
    /// negative.
    #[inline]
    pub fn root(mut self, n: u32) -> Integer {
        self.root_mut(n);
        self
    }

    /// Computes the `n`th root, truncated towards zero.
    pub fn root_mut(&mut self, n: u32) {
        assert_ne!(n, 0, "zeroth root");
        assert!(!(self.neg && n % 2 == 0), "even root of negative");
        let neg = self.neg;
        let mag = root_mag(&self.mag, n);
        *self = Integer::from_sign_mag(neg, mag);
    }

    /// Computes the `n`th root and the remainder satisfying
    /// `self` = root<sup>`n`</sup> + remainder.
    ///
    /// The root is exact when the remainder is zero; the remainder
    /// carries the sign of the value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kilim::Integer;
    /// let (root, rem) = Integer::from(64).root_rem(3);
    /// assert_eq!((root, rem), (Integer::from(4), Integer::from(0)));
    /// let (root, rem) = Integer::from(10).root_rem(3);
    /// assert_eq!((root, rem), (Integer::from(2), Integer::from(2)));
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `n` is zero, or if `n` is even and the value is
    /// negative.
    pub fn root_rem(self, n: u32) -> (Integer, Integer) {
        assert_ne!(n, 0, "zeroth root");
        assert!(!(self.neg && n % 2 == 0), "even root of negative");
        let neg = self.neg;
        let root = Integer::from_sign_mag(neg, root_mag(&self.mag, n));
        let rem = self - root.clone().pow(n);
        (root, rem)
    }

    /// Returns `true` if the value is a perfect square.
    ///
    /// Zero and one are squares; negative values are not.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kilim::Integer;
    /// assert!(Integer::from(0).is_perfect_square());
    /// assert!(Integer::from(49).is_perfect_square());
    /// assert!(!Integer::from(50).is_perfect_square());
    /// assert!(!Integer::from(-49).is_perfect_square());
    /// ```
    pub fn is_perfect_square(&self) -> bool {
        if self.neg {
            return false;
        }
        if self.mag.is_empty() {
            return true;
        }
        let (_, rem) = self.clone().sqrt_rem();
        rem.cmp0() == Ordering::Equal
    }

    /// Returns `true` if the value is a perfect power.
    ///
    /// Zero and one are powers by convention; negative values can
    /// only be odd powers.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kilim::Integer;
    /// assert!(Integer::from(64).is_perfect_power());
    /// assert!(Integer::from(-27).is_perfect_power());
    /// assert!(!Integer::from(-4).is_perfect_power());
    /// assert!(!Integer::from(63).is_perfect_power());
    /// ```
    pub fn is_perfect_power(&self) -> bool {
        if self.mag.is_empty() {
            return true;
        }
        if self.mag.len() == 1 && self.mag[0] == 1 {
            return true;
        }
        let bits = cast_u32(limbs::bit_len(&self.mag));
        for k in 2..=bits {
            if self.neg && k % 2 == 0 {
                continue;
            }
            let root = root_mag(&self.mag, k);
            let pow = Integer::from_sign_mag(false, root).pow(k);
            if pow.mag == self.mag {
                return true;
            }
        }
        false
    }
}

fn invert_impl(a: &Integer, modulo: &Integer) -> Option<Integer> {
    if modulo.cmp0() == Ordering::Equal {
        return None;
    }
    let m = modulo.clone().abs();
    if m == 1 {
        return Some(Integer::new());
    }
    let a_red = a.clone().rem_euc(&m);
    let (g, s, _) = a_red.extended_gcd(m.clone());
    if g != 1 {
        return None;
    }
    Some(s.rem_euc(&m))
}

fn pow_mod_impl(base: &Integer, exponent: &Integer, modulo: &Integer) -> Integer {
    debug_assert!(exponent.cmp0() != Ordering::Less);
    let bits = exponent.significant_bits();
    let mut result = Integer::from(1).rem_euc(modulo);
    for i in (0..bits).rev() {
        result = (result.clone() * &result).rem_euc(modulo);
        if exponent.get_bit(i) {
            result = (result * base).rem_euc(modulo);
        }
    }
    result
}

fn jacobi_impl(a: &Integer, n: &Integer) -> i32 {
    debug_assert!(n.is_odd() && n.cmp0() == Ordering::Greater);
    let mut a = a.clone().rem_euc(n);
    let mut n = n.clone();
    let mut t = 1;
    while a.cmp0() != Ordering::Equal {
        let tz = a.find_one(0).expect("nonzero");
        if tz % 2 == 1 {
            let m8 = n.mod_u(8);
            if m8 == 3 || m8 == 5 {
                t = -t;
            }
        }
        a >>= tz;
        if a.mod_u(4) == 3 && n.mod_u(4) == 3 {
            t = -t;
        }
        mem::swap(&mut a, &mut n);
        a = a.rem_euc(&n);
    }
    if n == 1 {
        t
    } else {
        0
    }
}

// (F(n), F(n + 1)) by fast doubling
fn fib_pair(n: u32) -> (Integer, Integer) {
    if n == 0 {
        return (Integer::new(), Integer::from(1));
    }
    let (a, b) = fib_pair(n / 2);
    let c = a.clone() * (b.clone() * 2u32 - &a);
    let d = a.clone() * &a + b.clone() * &b;
    if n % 2 == 0 {
        (c, d)
    } else {
        (d.clone(), c + d)
    }
}

// truncated nth root of a magnitude by Newton's method
fn root_mag(mag: &[Limb], n: u32) -> Vec<Limb> {
    if mag.is_empty() {
        return Vec::new();
    }
    if n == 1 {
        return mag.to_vec();
    }
    let bits = limbs::bit_len(mag);
    if bits <= n as usize {
        // 1 <= value < 2^n, so the root is 1
        return vec![1];
    }
    let v = Integer::from_sign_mag(false, mag.to_vec());
    let mut x = Integer::from(1u32) << cast_u32(bits.div_ceil(n as usize));
    loop {
        let t = (x.clone() * (n - 1) + v.clone().div_trunc(&x.clone().pow(n - 1)))
            .div_trunc(n);
        if t < x {
            x = t;
        } else {
            break;
        }
    }
    while x.clone().pow(n) > v {
        x -= 1;
    }
    loop {
        let y = x.clone() + 1u32;
        if y.clone().pow(n) <= v {
            x = y;
        } else {
            break;
        }
    }
    x.mag
}

fn random_below(rng: &mut StdRng, bound: &Integer) -> Integer {
    debug_assert!(bound.cmp0() == Ordering::Greater);
    let bits = bound.significant_bits();
    loop {
        let cand = random_bits_rng(rng, bits);
        if cand < *bound {
            return cand;
        }
    }
}

fn random_bits_rng(rng: &mut StdRng, bits: u32) -> Integer {
    let limb_count = (bits as usize).div_ceil(64);
    let mut mag: Vec<Limb> = (0..limb_count).map(|_| rng.next_u64()).collect();
    let extra = bits % 64;
    if extra != 0 {
        if let Some(l) = mag.last_mut() {
            *l &= u64::MAX >> (64 - extra);
        }
    }
    limbs::trim(&mut mag);
    Integer::from_sign_mag(false, mag)
}

/// Whether a number is prime.
///
/// See the [`is_probably_prime`][Integer::is_probably_prime] method.
///
/// # Examples
///
/// ```rust
/// use kilim::integer::IsPrime;
/// use kilim::Integer;
/// let no = Integer::from(163 * 4003);
/// assert_eq!(no.is_probably_prime(15), IsPrime::No);
/// let yes = Integer::from(21_751);
/// assert_eq!(yes.is_probably_prime(15), IsPrime::Yes);
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum IsPrime {
    /// The number is definitely not prime.
    No,
    /// The number is probably prime.
    Probably,
    /// The number is definitely prime.
    Yes,
}

#[cfg(test)]
mod tests {
    use crate::integer::IsPrime;
    use crate::ops::Pow;
    use crate::Integer;
    use std::cmp::Ordering;

    #[test]
    fn check_gcd() {
        assert_eq!(Integer::from(48).gcd(&Integer::from(18)), 6);
        assert_eq!(Integer::from(-48).gcd(&Integer::from(18)), 6);
        assert_eq!(Integer::from(48).gcd(&Integer::from(-18)), 6);
        assert_eq!(Integer::from(-48).gcd(&Integer::from(-18)), 6);
        assert_eq!(Integer::new().gcd(&Integer::new()), 0);
        assert_eq!(Integer::new().gcd(&Integer::from(-5)), 5);
        assert_eq!(Integer::from(-5).gcd(&Integer::new()), 5);
        assert_eq!(Integer::from(140).gcd_u(42), 14);
        assert_eq!(Integer::from(-140).gcd_u(42), 14);
        assert_eq!(Integer::from(-140).gcd_u(0), 140);
        assert_eq!(Integer::new().gcd_u(42), 42);
    }

    #[test]
    fn check_extended_gcd() {
        let cases = [
            (240, 46),
            (-240, 46),
            (240, -46),
            (-240, -46),
            (0, 5),
            (5, 0),
            (0, -5),
            (7, 7),
            (1, 1),
            (17, 13),
        ];
        for &(a, b) in cases.iter() {
            let (g, s, t) = Integer::from(a).extended_gcd(Integer::from(b));
            assert!(g.cmp0() != Ordering::Less, "g < 0 for ({}, {})", a, b);
            assert_eq!(
                Integer::from(a) * &s + Integer::from(b) * &t,
                g,
                "identity fails for ({}, {})",
                a,
                b
            );
            assert_eq!(g, Integer::from(a).gcd(&Integer::from(b)));
        }
        let (g, s, t) = Integer::new().extended_gcd(Integer::new());
        assert_eq!(g, 0);
        assert_eq!(s, 0);
        assert_eq!(t, 0);
    }

    #[test]
    fn check_lcm() {
        assert_eq!(Integer::from(10).lcm(&Integer::from(14)), 70);
        assert_eq!(Integer::from(-10).lcm(&Integer::from(14)), 70);
        assert_eq!(Integer::from(10).lcm(&Integer::from(-14)), 70);
        assert_eq!(Integer::new().lcm(&Integer::from(5)), 0);
        assert_eq!(Integer::from(5).lcm(&Integer::new()), 0);
    }

    #[test]
    fn check_invert() {
        assert_eq!(Integer::from(3).invert(&Integer::from(11)).unwrap(), 4);
        assert_eq!(Integer::from(3).invert(&Integer::from(-11)).unwrap(), 4);
        assert_eq!(Integer::from(-3).invert(&Integer::from(11)).unwrap(), 7);
        assert_eq!(Integer::from(5).invert(&Integer::from(1)).unwrap(), 0);
        assert_eq!(Integer::from(4).invert(&Integer::from(12)).unwrap_err(), 4);
        assert_eq!(Integer::new().invert(&Integer::from(7)).unwrap_err(), 0);
        assert_eq!(Integer::from(3).invert(&Integer::new()).unwrap_err(), 3);
        // inverse round trip stays in range
        for a in 1u32..50 {
            for m in 2u32..30 {
                let inv = Integer::from(a).invert(&Integer::from(m));
                if Integer::from(a).gcd(&Integer::from(m)) == 1 {
                    let inv = inv.unwrap();
                    assert!(inv.cmp0() != Ordering::Less);
                    assert!(inv < m);
                    assert_eq!((inv * a).mod_u(m as u32), 1);
                } else {
                    assert!(inv.is_err());
                }
            }
        }
        let mut i = Integer::from(3);
        assert!(i.invert_mut(&Integer::from(11)));
        assert_eq!(i, 4);
        let mut j = Integer::from(4);
        assert!(!j.invert_mut(&Integer::from(12)));
        assert_eq!(j, 4);
    }

    #[test]
    fn check_pow_mod() {
        let five = Integer::from(5);
        assert_eq!(
            five.pow_mod(&Integer::from(3), &Integer::from(13)).unwrap(),
            8
        );
        assert_eq!(
            Integer::from(2)
                .pow_mod(&Integer::from(-1), &Integer::from(5))
                .unwrap(),
            3
        );
        assert_eq!(
            Integer::from(-2)
                .pow_mod(&Integer::from(3), &Integer::from(5))
                .unwrap(),
            2
        );
        assert_eq!(
            Integer::from(7)
                .pow_mod(&Integer::new(), &Integer::from(13))
                .unwrap(),
            1
        );
        assert_eq!(
            Integer::from(7)
                .pow_mod(&Integer::from(5), &Integer::from(1))
                .unwrap(),
            0
        );
        assert_eq!(
            Integer::from(4)
                .pow_mod(&Integer::from(-1), &Integer::from(12))
                .unwrap_err(),
            4
        );
        assert_eq!(
            Integer::from(4)
                .pow_mod(&Integer::from(2), &Integer::new())
                .unwrap_err(),
            4
        );
        let mut i = Integer::from(5);
        assert!(i.pow_mod_mut(&Integer::from(3), &Integer::from(13)).is_ok());
        assert_eq!(i, 8);
        let mut j = Integer::from(4);
        assert!(j
            .pow_mod_mut(&Integer::from(-1), &Integer::from(12))
            .is_err());
        assert_eq!(j, 4);
    }

    #[test]
    fn check_secure_pow_mod() {
        for base in [-7i32, -2, 0, 1, 2, 5, 9] {
            for exp in [0i32, 1, 2, 3, 10, 17] {
                for modulo in [3i32, 13, 255, 1001] {
                    let standard = Integer::from(base)
                        .pow_mod(&Integer::from(exp), &Integer::from(modulo))
                        .unwrap();
                    let secure = Integer::from(base)
                        .secure_pow_mod(&Integer::from(exp), &Integer::from(modulo));
                    assert_eq!(standard, secure, "{}^{} mod {}", base, exp, modulo);
                }
            }
        }
        // negative exponents agree when the inverse exists
        let standard = Integer::from(2)
            .pow_mod(&Integer::from(-2), &Integer::from(9))
            .unwrap();
        let secure =
            Integer::from(2).secure_pow_mod(&Integer::from(-2), &Integer::from(9));
        assert_eq!(standard, secure);
        assert_eq!(secure, 7);
    }

    #[test]
    fn check_jacobi_kronecker() {
        assert_eq!(Integer::from(2).jacobi(&Integer::from(3)), -1);
        assert_eq!(Integer::from(2).jacobi(&Integer::from(9)), 1);
        assert_eq!(Integer::from(5).jacobi(&Integer::from(9)), 1);
        assert_eq!(Integer::from(0).jacobi(&Integer::from(3)), 0);
        assert_eq!(Integer::from(3).jacobi(&Integer::from(3)), 0);
        assert_eq!(Integer::from(-1).jacobi(&Integer::from(3)), -1);
        assert_eq!(Integer::from(2).legendre(&Integer::from(7)), 1);
        assert_eq!(Integer::from(3).legendre(&Integer::from(7)), -1);
        // the Jacobi symbol is multiplicative in the numerator
        for a in -20i32..20 {
            for b in -20i32..20 {
                let n = Integer::from(15);
                let ab = Integer::from(a) * Integer::from(b);
                assert_eq!(
                    ab.jacobi(&n),
                    Integer::from(a).jacobi(&n) * Integer::from(b).jacobi(&n)
                );
            }
        }
        assert_eq!(Integer::from(5).kronecker(&Integer::from(8)), -1);
        assert_eq!(Integer::from(7).kronecker(&Integer::from(8)), 1);
        assert_eq!(Integer::from(4).kronecker(&Integer::from(8)), 0);
        assert_eq!(Integer::from(1).kronecker(&Integer::new()), 1);
        assert_eq!(Integer::from(-1).kronecker(&Integer::new()), 1);
        assert_eq!(Integer::from(5).kronecker(&Integer::new()), 0);
        assert_eq!(Integer::from(3).kronecker(&Integer::from(-1)), 1);
        assert_eq!(Integer::from(-3).kronecker(&Integer::from(-1)), -1);
        // agrees with Jacobi on positive odd denominators
        for a in -30i32..30 {
            for n in [3i32, 5, 9, 15, 21] {
                assert_eq!(
                    Integer::from(a).kronecker(&Integer::from(n)),
                    Integer::from(a).jacobi(&Integer::from(n))
                );
            }
        }
    }

    #[test]
    fn check_primality() {
        assert_eq!(Integer::from(0).is_probably_prime(15), IsPrime::No);
        assert_eq!(Integer::from(1).is_probably_prime(15), IsPrime::No);
        assert_eq!(Integer::from(2).is_probably_prime(15), IsPrime::Yes);
        assert_eq!(Integer::from(3).is_probably_prime(15), IsPrime::Yes);
        assert_eq!(Integer::from(4).is_probably_prime(15), IsPrime::No);
        assert_eq!(Integer::from(21_751).is_probably_prime(15), IsPrime::Yes);
        assert_eq!(
            Integer::from(163 * 4003).is_probably_prime(15),
            IsPrime::No
        );
        // composite with no factor in the trial-division table
        assert_eq!(
            Integer::from(1009u64 * 1013).is_probably_prime(15),
            IsPrime::No
        );
        assert_eq!(
            Integer::from(817_504_243).is_probably_prime(15),
            IsPrime::Probably
        );
        // Mersenne prime 2^61 - 1
        assert_eq!(
            Integer::from((1u64 << 61) - 1).is_probably_prime(15),
            IsPrime::Probably
        );
        // negative candidates follow their absolute value
        assert_eq!(Integer::from(-7).is_probably_prime(15), IsPrime::Yes);
        assert_eq!(Integer::from(-8).is_probably_prime(15), IsPrime::No);
    }

    #[test]
    fn check_next_prev_prime() {
        assert_eq!(Integer::from(-5).next_prime(), 2);
        assert_eq!(Integer::from(0).next_prime(), 2);
        assert_eq!(Integer::from(2).next_prime(), 3);
        assert_eq!(Integer::from(8).next_prime(), 11);
        assert_eq!(Integer::from(11).next_prime(), 13);
        assert_eq!(Integer::from(97_000).next_prime(), 97_001);
        assert_eq!(Integer::from(2).prev_prime(), None);
        assert_eq!(Integer::from(1).prev_prime(), None);
        assert_eq!(Integer::from(-7).prev_prime(), None);
        assert_eq!(Integer::from(3).prev_prime(), Some(Integer::from(2)));
        assert_eq!(Integer::from(10).prev_prime(), Some(Integer::from(7)));
        assert_eq!(Integer::from(13).prev_prime(), Some(Integer::from(11)));
        let mut i = Integer::from(2);
        assert!(!i.prev_prime_mut());
        assert_eq!(i, 2);
    }

    #[test]
    fn check_factorials() {
        let mut i = Integer::new();
        i.assign_factorial(0);
        assert_eq!(i, 1);
        i.assign_factorial(10);
        assert_eq!(i, 3628800);
        i.assign_factorial_2(9);
        assert_eq!(i, 945);
        i.assign_factorial_2(10);
        assert_eq!(i, 3840);
        i.assign_factorial_m(10, 3);
        assert_eq!(i, 280);
        i.assign_factorial_m(10, 1);
        assert_eq!(i, 3628800);
        i.assign_primorial(10);
        assert_eq!(i, 210);
        i.assign_primorial(1);
        assert_eq!(i, 1);
        i.assign_primorial(13);
        assert_eq!(i, 30030);
    }

    #[test]
    fn check_binomial() {
        assert_eq!(Integer::from(10).binomial(4), 210);
        assert_eq!(Integer::from(10).binomial(0), 1);
        assert_eq!(Integer::from(10).binomial(10), 1);
        assert_eq!(Integer::from(4).binomial(6), 0);
        // C(-4, 3) = -C(6, 3)
        assert_eq!(Integer::from(-4).binomial(3), -20);
        let mut i = Integer::new();
        i.assign_binomial_u(10, 4);
        assert_eq!(i, 210);
        i.assign_binomial_u(3, 7);
        assert_eq!(i, 0);
    }

    #[test]
    fn check_fibonacci_lucas() {
        let expected = [0, 1, 1, 2, 3, 5, 8, 13, 21, 34, 55];
        for (n, &f) in expected.iter().enumerate() {
            let mut i = Integer::new();
            i.assign_fibonacci(n as u32);
            assert_eq!(i, f);
        }
        let mut f = Integer::new();
        let mut f_prev = Integer::new();
        f.assign_fibonacci_2(&mut f_prev, 0);
        assert_eq!(f, 0);
        assert_eq!(f_prev, 1);
        f.assign_fibonacci_2(&mut f_prev, 10);
        assert_eq!(f, 55);
        assert_eq!(f_prev, 34);
        let mut big = Integer::new();
        big.assign_fibonacci(100);
        assert_eq!(big.to_string(), "354224848179261915075");

        let expected = [2, 1, 3, 4, 7, 11, 18, 29, 47, 76, 123];
        for (n, &l) in expected.iter().enumerate() {
            let mut i = Integer::new();
            i.assign_lucas(n as u32);
            assert_eq!(i, l);
        }
        let mut l = Integer::new();
        let mut l_prev = Integer::new();
        l.assign_lucas_2(&mut l_prev, 10);
        assert_eq!(l, 123);
        assert_eq!(l_prev, 76);
        l.assign_lucas_2(&mut l_prev, 0);
        assert_eq!(l, 2);
        assert_eq!(l_prev, -1);
    }

    #[test]
    fn check_roots() {
        assert_eq!(Integer::from(64).root(3), 4);
        assert_eq!(Integer::from(10).root(3), 2);
        assert_eq!(Integer::from(-10).root(3), -2);
        assert_eq!(Integer::from(-27).root(3), -3);
        assert_eq!(Integer::from(0).root(5), 0);
        assert_eq!(Integer::from(1).root(5), 1);
        assert_eq!(Integer::from(99).sqrt(), 9);
        assert_eq!(Integer::from(100).sqrt(), 10);
        let (root, rem) = Integer::from(99).sqrt_rem();
        assert_eq!(root, 9);
        assert_eq!(rem, 18);
        let (root, rem) = Integer::from(-10).root_rem(3);
        assert_eq!(root, -2);
        assert_eq!(rem, -2);
        let big = Integer::from(1u32) << 100u32;
        assert_eq!(big.clone().root(4), Integer::from(1u32) << 25u32);
        // root and remainder recompose the value
        for v in 0u32..200 {
            for n in 1..6 {
                let (root, rem) = Integer::from(v).root_rem(n);
                assert!(rem.cmp0() != Ordering::Less);
                assert_eq!(root.pow(n) + rem, v);
            }
        }
    }

    #[test]
    fn check_perfect_powers() {
        assert!(Integer::from(0).is_perfect_square());
        assert!(Integer::from(1).is_perfect_square());
        assert!(Integer::from(49).is_perfect_square());
        assert!(!Integer::from(50).is_perfect_square());
        assert!(!Integer::from(-49).is_perfect_square());
        assert!(Integer::from(0).is_perfect_power());
        assert!(Integer::from(1).is_perfect_power());
        assert!(Integer::from(-1).is_perfect_power());
        assert!(Integer::from(64).is_perfect_power());
        assert!(Integer::from(-27).is_perfect_power());
        assert!(!Integer::from(-4).is_perfect_power());
        assert!(!Integer::from(63).is_perfect_power());
        assert!((Integer::from(3).pow(5)).is_perfect_power());
    }

    #[test]
    fn check_remove_factor() {
        let (q, count) = Integer::from(48).remove_factor(&Integer::from(2));
        assert_eq!((q, count), (Integer::from(3), 4));
        let (q, count) = Integer::from(48).remove_factor(&Integer::from(-2));
        assert_eq!((q, count), (Integer::from(3), 4));
        let (q, count) = Integer::from(-48).remove_factor(&Integer::from(2));
        assert_eq!((q, count), (Integer::from(-3), 4));
        let (q, count) = Integer::from(48).remove_factor(&Integer::from(7));
        assert_eq!((q, count), (Integer::from(48), 0));
        let (q, count) = Integer::new().remove_factor(&Integer::from(7));
        assert_eq!((q, count), (Integer::new(), 0));
        let (q, count) = Integer::from(48).remove_factor(&Integer::new());
        assert_eq!((q, count), (Integer::from(48), 0));
        let (q, count) = Integer::from(48).remove_factor(&Integer::from(1));
        assert_eq!((q, count), (Integer::from(48), 0));
    }
}
