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

//! Random number generation.
//!
//! [`RandState`] is a deterministic generator: seeding it with the
//! same seed always produces the same sequence, which is what tests
//! and reproducible simulations need. [`SecureRandState`] draws from
//! the operating system's entropy source and is meant for
//! cryptographic use; it has no seeding interface.

use crate::ext::limbs::{self, Limb};
use crate::integer::big::Integer;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::cmp::Ordering;

/// Generates random numbers for a custom [`RandState`].
///
/// # Examples
///
/// ```rust
/// use kilim::rand::{RandGen, RandState};
/// use kilim::Integer;
/// struct Seed(u32);
/// impl RandGen for Seed {
///     fn gen(&mut self) -> u32 {
///         self.0 = self.0.wrapping_mul(0x0019_660d).wrapping_add(0x3c6e_f35f);
///         self.0
///     }
/// }
/// let mut rand = RandState::new_custom(Box::new(Seed(42)));
/// let i = Integer::from(15).random_below(&mut rand);
/// assert!(i < 15);
/// ```
pub trait RandGen {
    /// Gets a random 32-bit unsigned integer.
    fn gen(&mut self) -> u32;
}

/// The state of a deterministic random number generator.
///
/// # Examples
///
/// ```rust
/// use kilim::rand::RandState;
/// use kilim::Integer;
/// let mut rand = RandState::new();
/// rand.seed(&Integer::from(123456));
/// let i = Integer::random_bits(80, &mut rand);
/// assert!(i.significant_bits() <= 80);
/// ```
pub struct RandState {
    inner: Inner,
}

enum Inner {
    Std(StdRng),
    Custom(Box<dyn RandGen>),
}

impl Default for RandState {
    #[inline]
    fn default() -> RandState {
        RandState::new()
    }
}

impl RandState {
    /// Creates a new random generator seeded from operating-system
    /// entropy.
    pub fn new() -> RandState {
        let mut key = [0u8; 32];
        getrandom::getrandom(&mut key).expect("entropy source failure");
        RandState {
            inner: Inner::Std(StdRng::from_seed(key)),
        }
    }

    /// Creates a new custom random generator.
    pub fn new_custom(custom: Box<dyn RandGen>) -> RandState {
        RandState {
            inner: Inner::Custom(custom),
        }
    }

    /// Seeds the generator, making its output reproducible: the same
    /// seed always produces the same sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kilim::rand::RandState;
    /// use kilim::Integer;
    /// let seed = Integer::from(9_876_543_210_u64);
    /// let mut a = RandState::new();
    /// let mut b = RandState::new();
    /// a.seed(&seed);
    /// b.seed(&seed);
    /// assert_eq!(Integer::random_bits(100, &mut a),
    ///            Integer::random_bits(100, &mut b));
    /// ```
    pub fn seed(&mut self, seed: &Integer) {
        let mut key = [0u8; 32];
        for (i, limb) in seed.mag.iter().enumerate() {
            for (j, byte) in limb.to_le_bytes().iter().enumerate() {
                key[(i * 8 + j) % 32] ^= *byte;
            }
        }
        key[31] ^= u8::from(seed.cmp0() == Ordering::Less);
        self.inner = Inner::Std(StdRng::from_seed(key));
    }

    /// Generates up to 32 random bits.
    ///
    /// # Panics
    ///
    /// Panics if `bits` is greater than 32.
    pub fn bits(&mut self, bits: u32) -> u32 {
        assert!(bits <= 32, "bits out of range");
        if bits == 0 {
            return 0;
        }
        self.gen_u32() >> (32 - bits)
    }

    /// Generates a random number below the given boundary value.
    ///
    /// # Panics
    ///
    /// Panics if `bound` is zero.
    pub fn below(&mut self, bound: u32) -> u32 {
        assert_ne!(bound, 0, "cannot be below zero");
        let bits = 32 - (bound - 1).leading_zeros();
        loop {
            let val = self.bits(bits);
            if val < bound {
                return val;
            }
        }
    }

    fn gen_u32(&mut self) -> u32 {
        match &mut self.inner {
            Inner::Std(rng) => rng.next_u32(),
            Inner::Custom(custom) => custom.gen(),
        }
    }

    fn gen_limb(&mut self) -> Limb {
        let lo = u64::from(self.gen_u32());
        let hi = u64::from(self.gen_u32());
        lo | (hi << 32)
    }
}

/// A handle to the process-wide cryptographically secure entropy
/// source.
///
/// The handle itself is stateless; every operation draws fresh
/// entropy, so the output is never reproducible.
///
/// # Examples
///
/// ```rust
/// use kilim::rand::SecureRandState;
/// use kilim::Integer;
/// let mut rand = SecureRandState::new();
/// let i = Integer::secure_random_bits(256, &mut rand);
/// // the top bit is always set
/// assert_eq!(i.significant_bits(), 256);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct SecureRandState {
    _priv: (),
}

impl SecureRandState {
    /// Creates a handle to the entropy source.
    #[inline]
    pub fn new() -> SecureRandState {
        SecureRandState { _priv: () }
    }

    fn fill(&mut self, buf: &mut [u8]) {
        getrandom::getrandom(buf).expect("entropy source failure");
    }
}

impl Integer {
    /// Generates a random number with exactly `bits` random bits, so
    /// the result may have leading zeros.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kilim::rand::RandState;
    /// use kilim::Integer;
    /// let mut rand = RandState::new();
    /// let i = Integer::random_bits(100, &mut rand);
    /// assert!(i.significant_bits() <= 100);
    /// ```
    pub fn random_bits(bits: u32, rng: &mut RandState) -> Integer {
        let mut i = Integer::new();
        i.assign_random_bits(bits, rng);
        i
    }

    /// Assigns a random number with exactly `bits` random bits.
    pub fn assign_random_bits(&mut self, bits: u32, rng: &mut RandState) {
        let limb_count = (bits as usize).div_ceil(64);
        let mut mag: Vec<Limb> =
            (0..limb_count).map(|_| rng.gen_limb()).collect();
        let extra = bits % 64;
        if extra != 0 {
            if let Some(l) = mag.last_mut() {
                *l &= u64::MAX >> (64 - extra);
            }
        }
        limbs::trim(&mut mag);
        *self = Integer::from_sign_mag(false, mag);
    }

    /// Generates a random number uniformly distributed in the range
    /// [0, `self`).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kilim::rand::RandState;
    /// use kilim::Integer;
    /// let mut rand = RandState::new();
    /// let i = Integer::from(15).random_below(&mut rand);
    /// assert!(i < 15);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if the boundary value is not positive.
    #[inline]
    pub fn random_below(mut self, rng: &mut RandState) -> Integer {
        self.random_below_mut(rng);
        self
    }

    /// Generates a random number uniformly distributed in the range
    /// [0, `self`).
    ///
    /// # Panics
    ///
    /// Panics if the boundary value is not positive.
    pub fn random_below_mut(&mut self, rng: &mut RandState) {
        assert!(
            self.cmp0() == Ordering::Greater,
            "cannot be below zero or negative"
        );
        let bits = self.significant_bits();
        loop {
            let cand = Integer::random_bits(bits, rng);
            if cand < *self {
                *self = cand;
                return;
            }
        }
    }

    /// Generates a cryptographically secure random number with
    /// exactly `bits` significant bits: the top bit is always set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kilim::rand::SecureRandState;
    /// use kilim::Integer;
    /// let mut rand = SecureRandState::new();
    /// let i = Integer::secure_random_bits(100, &mut rand);
    /// assert_eq!(i.significant_bits(), 100);
    /// ```
    pub fn secure_random_bits(
        bits: u32,
        rng: &mut SecureRandState,
    ) -> Integer {
        let mut i = Integer::new();
        i.assign_secure_random_bits(bits, rng);
        i
    }

    /// Assigns a cryptographically secure random number with exactly
    /// `bits` significant bits: the top bit is always set.
    pub fn assign_secure_random_bits(
        &mut self,
        bits: u32,
        rng: &mut SecureRandState,
    ) {
        if bits == 0 {
            *self = Integer::new();
            return;
        }
        let bytes = (bits as usize).div_ceil(8);
        let mut buf = vec![0u8; bytes];
        rng.fill(&mut buf);
        let mut mag = vec![0 as Limb; bytes.div_ceil(8)];
        for (i, &b) in buf.iter().enumerate() {
            mag[i / 8] |= u64::from(b) << ((i % 8) * 8);
        }
        let extra = bits % 64;
        if extra != 0 {
            if let Some(l) = mag.last_mut() {
                *l &= u64::MAX >> (64 - extra);
            }
        }
        limbs::set_bit(&mut mag, bits as usize - 1, true);
        limbs::trim(&mut mag);
        *self = Integer::from_sign_mag(false, mag);
    }

    /// Generates a cryptographically secure random number uniformly
    /// distributed in the range [0, `self`), by rejection sampling
    /// over byte-aligned draws from the entropy source.
    ///
    /// A boundary value of 1 always yields 0.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kilim::rand::SecureRandState;
    /// use kilim::Integer;
    /// let mut rand = SecureRandState::new();
    /// let i = Integer::from(1).secure_random_below(&mut rand);
    /// assert_eq!(i, 0);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if the boundary value is not positive.
    #[inline]
    pub fn secure_random_below(
        mut self,
        rng: &mut SecureRandState,
    ) -> Integer {
        self.secure_random_below_mut(rng);
        self
    }

    /// Generates a cryptographically secure random number uniformly
    /// distributed in the range [0, `self`).
    ///
    /// # Panics
    ///
    /// Panics if the boundary value is not positive.
    pub fn secure_random_below_mut(&mut self, rng: &mut SecureRandState) {
        assert!(
            self.cmp0() == Ordering::Greater,
            "cannot be below zero or negative"
        );
        let bits = self.significant_bits();
        let bytes = (bits as usize).div_ceil(8);
        let mut buf = vec![0u8; bytes];
        loop {
            rng.fill(&mut buf);
            let mut mag = vec![0 as Limb; bytes.div_ceil(8)];
            for (i, &b) in buf.iter().enumerate() {
                mag[i / 8] |= u64::from(b) << ((i % 8) * 8);
            }
            let extra = bits % 64;
            if extra != 0 {
                if let Some(l) = mag.last_mut() {
                    *l &= u64::MAX >> (64 - extra);
                }
            }
            limbs::trim(&mut mag);
            let cand = Integer::from_sign_mag(false, mag);
            if cand < *self {
                *self = cand;
                return;
            }
        }
    }
}
