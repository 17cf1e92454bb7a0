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

//! Arbitrary-precision integers.
//!
//! This module provides support for arbitrary-precision integers of
//! type [`Integer`](../struct.Integer.html), plus the secondary types
//! used by its conversions.
//!
//! # Examples
//!
//! ```rust
//! use kilim::{Assign, Integer};
//! let mut int = Integer::from(10);
//! assert_eq!(int, 10);
//! int.assign(-41);
//! assert_eq!(int, -41);
//! ```

pub(crate) mod arith;
pub(crate) mod big;
pub(crate) mod casts;
pub(crate) mod cmp;
pub(crate) mod digits;
pub(crate) mod division;
#[cfg(feature = "serde")]
pub(crate) mod serde;
pub(crate) mod theory;

pub use self::big::{Integer, ParseIntegerError, ValidInteger};
pub use self::digits::{DigitLayout, Endianness, ImportDigitsError, Order};
pub use self::theory::IsPrime;
