// Copyright 2026 the Variant Algebra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reference-counted tagged values with a closed operator algebra.
//!
//! A [`Variant`] holds one of five [`Kind`]s: an `i64` or `f64` scalar, an `i64` or `f64`
//! sequence, or a raw byte string. Handles share immutable storage; every operator builds a new
//! value.
//!
//! ## Promotion and broadcasting
//!
//! - Integer with integer stays integer; any float operand makes the result float.
//! - A scalar combined with a sequence is applied to every element.
//! - Two sequences of different length combine their common prefix; the longer one's tail is
//!   copied through unchanged.
//! - Comparisons involving a sequence compare element sums.
//!
//! ```
//! use variant_algebra::{Kind, Variant};
//!
//! let v = (Variant::from(vec![1_i64, 2, 3]) + Variant::from(0.5))?;
//! assert_eq!(v.kind(), Some(Kind::FloatSeq));
//! assert_eq!(v.dump(), "vecf[1.5, 2.5, 3.5]");
//!
//! let same_sum = Variant::from(vec![1_i64, 5]).equal(&Variant::from(vec![3_i64, 3]))?;
//! assert!(same_sum.to_bool());
//! # Ok::<(), variant_algebra::VariantError>(())
//! ```
//!
//! Operators with no meaning for a kind combination (bitwise on floats, arithmetic on byte
//! strings, shifts on sequences) return [`VariantError::UnsupportedOperation`].
//!
//! ## Features
//!
//! - `std`: `std::io` helpers in [`codec`].

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod codec;
mod error;
mod kind;
pub mod ops;
mod storage;
pub mod trace;
mod variant;

pub use error::VariantError;
pub use kind::{Kind, TypeTag};
pub use ops::{BinaryOp, OpCode, UnaryOp};
pub use variant::{FromVariant, Variant};
