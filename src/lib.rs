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

//! # Arbitrary-precision integers
//!
//! The `kilim` crate provides arbitrary-precision integers: the
//! magnitude of an [`Integer`] is bounded only by memory, and all
//! arithmetic is exact. Beyond the ordinary arithmetic, bitwise and
//! comparison operations, the crate covers four division conventions
//! (truncating, ceiling, flooring and Euclidean), number-theoretic
//! functions (GCDs and Bezout coefficients, modular inverses and
//! exponentiation including a timing-uniform variant, Jacobi and
//! Kronecker symbols, primality testing, factorials, binomial
//! coefficients, Fibonacci and Lucas numbers, integer roots), bit
//! manipulation with two's-complement semantics, and byte-buffer
//! import/export for interoperation with other representations.
//!
//! This crate is free software: you can redistribute it and/or modify
//! it under the terms of the GNU Lesser General Public License as
//! published by the Free Software Foundation, either version 3 of the
//! License, or (at your option) any later version.
//!
//! # Basic use
//!
//! The main type is [`Integer`]. Arithmetic operators work on owned
//! values and on references, and can mix in primitive integers.
//!
//! ```rust
//! use kilim::Integer;
//! let mut i = Integer::from(10);
//! i = i * 5 + 4;
//! assert_eq!(i, 54);
//! let big = Integer::from(7) << 300u32;
//! assert_eq!(big.significant_bits(), 303);
//! ```
//!
//! Most methods come in pairs: one that consumes the operand and one
//! that mutates it in place.
//!
//! ```rust
//! use kilim::Integer;
//! let a = Integer::from(-15);
//! assert_eq!(a.abs(), 15);
//! let mut b = Integer::from(-15);
//! b.abs_mut();
//! assert_eq!(b, 15);
//! ```
//!
//! # Optional features
//!
//! The `serde` feature, enabled by default, implements serialization
//! of [`Integer`] as a radix string.

mod ext;
pub mod integer;
pub mod ops;
pub mod rand;

pub use crate::integer::Integer;

/// Assigns to a number from another value.
///
/// # Examples
///
/// ```rust
/// use kilim::{Assign, Integer};
/// let mut i = Integer::from(15);
/// i.assign(23);
/// assert_eq!(i, 23);
/// let other = Integer::from(-41);
/// i.assign(&other);
/// assert_eq!(i, -41);
/// ```
pub trait Assign<Src = Self> {
    /// Peforms the assignment.
    fn assign(&mut self, src: Src);
}
