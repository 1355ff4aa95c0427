// Copyright 2026 the Variant Algebra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Promotion and broadcasting over numeric operands.
//!
//! Operands are viewed as [`Lane`]s of one element type. Integer operands are widened to `f64`
//! lanes whenever the other side is float; nothing narrows back to `i64`.
//!
//! Combining two lanes:
//! - scalar with scalar gives a scalar;
//! - scalar with sequence broadcasts the scalar over every element;
//! - sequence with sequence combines the common prefix and copies the tail of the longer side
//!   through unchanged, whichever side that is.

use alloc::borrow::Cow;
use alloc::vec::Vec;

use crate::error::VariantError;
use crate::storage::Storage;

/// A numeric operand of a single element type.
#[derive(Clone, Debug, PartialEq)]
pub(super) enum Lane<'a, T: Clone> {
    Scalar(T),
    Seq(Cow<'a, [T]>),
}

/// Element types the numeric tables operate on.
pub(super) trait Element: Copy + PartialEq {
    const ZERO: Self;
    const ONE: Self;

    /// Wrapping for integers.
    fn sum(values: &[Self]) -> Self;

    /// Wraps a result lane into a storage block of the matching kind.
    fn pack(lane: Lane<'_, Self>) -> Storage;

    #[inline]
    fn from_bool(b: bool) -> Self {
        if b { Self::ONE } else { Self::ZERO }
    }

    #[inline]
    fn is_truthy(self) -> bool {
        self != Self::ZERO
    }
}

impl Element for i64 {
    const ZERO: Self = 0;
    const ONE: Self = 1;

    fn sum(values: &[Self]) -> Self {
        values.iter().fold(0, |acc, x| acc.wrapping_add(*x))
    }

    fn pack(lane: Lane<'_, Self>) -> Storage {
        match lane {
            Lane::Scalar(x) => Storage::Int(x),
            Lane::Seq(v) => Storage::IntSeq(v.into_owned().into_boxed_slice()),
        }
    }
}

impl Element for f64 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;

    fn sum(values: &[Self]) -> Self {
        values.iter().sum()
    }

    fn pack(lane: Lane<'_, Self>) -> Storage {
        match lane {
            Lane::Scalar(x) => Storage::Float(x),
            Lane::Seq(v) => Storage::FloatSeq(v.into_owned().into_boxed_slice()),
        }
    }
}

/// A numeric operand in its own element type.
#[derive(Clone, Debug, PartialEq)]
pub(super) enum Lanes<'a> {
    Int(Lane<'a, i64>),
    Float(Lane<'a, f64>),
}

impl<'a> Lanes<'a> {
    /// Returns `None` for byte strings.
    pub(super) fn of(s: &'a Storage) -> Option<Self> {
        Some(match s {
            Storage::Int(x) => Self::Int(Lane::Scalar(*x)),
            Storage::IntSeq(v) => Self::Int(Lane::Seq(Cow::Borrowed(&v[..]))),
            Storage::Float(x) => Self::Float(Lane::Scalar(*x)),
            Storage::FloatSeq(v) => Self::Float(Lane::Seq(Cow::Borrowed(&v[..]))),
            Storage::Bytes(_) => return None,
        })
    }
}

/// Views `s` as an integer lane. Float and byte-string storage have none.
pub(super) fn int_lane(s: &Storage) -> Option<Lane<'_, i64>> {
    match Lanes::of(s)? {
        Lanes::Int(lane) => Some(lane),
        Lanes::Float(_) => None,
    }
}

/// Views `s` as a float lane, widening integers.
pub(super) fn float_lane(s: &Storage) -> Option<Lane<'_, f64>> {
    match Lanes::of(s)? {
        Lanes::Float(lane) => Some(lane),
        Lanes::Int(Lane::Scalar(x)) => Some(Lane::Scalar(x as f64)),
        Lanes::Int(Lane::Seq(v)) => Some(Lane::Seq(Cow::Owned(
            v.iter().map(|x| *x as f64).collect(),
        ))),
    }
}

/// Reduces a lane to one value: scalars are themselves, sequences their sum.
pub(super) fn reduce<T: Element>(lane: &Lane<'_, T>) -> T {
    match lane {
        Lane::Scalar(x) => *x,
        Lane::Seq(v) => T::sum(v),
    }
}

/// Applies `f` to every element.
pub(super) fn map<T: Element>(lane: Lane<'_, T>, f: impl Fn(T) -> T) -> Lane<'static, T> {
    match lane {
        Lane::Scalar(x) => Lane::Scalar(f(x)),
        Lane::Seq(v) => Lane::Seq(Cow::Owned(v.iter().map(|x| f(*x)).collect())),
    }
}

/// Combines two lanes elementwise under the broadcasting rules.
pub(super) fn zip<T: Element>(
    lhs: Lane<'_, T>,
    rhs: Lane<'_, T>,
    mut f: impl FnMut(T, T) -> Result<T, VariantError>,
) -> Result<Lane<'static, T>, VariantError> {
    Ok(match (lhs, rhs) {
        (Lane::Scalar(a), Lane::Scalar(b)) => Lane::Scalar(f(a, b)?),
        (Lane::Scalar(a), Lane::Seq(b)) => Lane::Seq(Cow::Owned(
            b.iter().map(|y| f(a, *y)).collect::<Result<Vec<_>, _>>()?,
        )),
        (Lane::Seq(a), Lane::Scalar(b)) => Lane::Seq(Cow::Owned(
            a.iter().map(|x| f(*x, b)).collect::<Result<Vec<_>, _>>()?,
        )),
        (Lane::Seq(a), Lane::Seq(b)) => {
            let common = a.len().min(b.len());
            let mut out = Vec::with_capacity(a.len().max(b.len()));
            for (x, y) in a.iter().zip(b.iter()) {
                out.push(f(*x, *y)?);
            }
            let tail = if a.len() > common {
                &a[common..]
            } else {
                &b[common..]
            };
            out.extend_from_slice(tail);
            Lane::Seq(Cow::Owned(out))
        }
    })
}
