// Copyright 2026 the Variant Algebra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Operation table for byte strings.
//!
//! Only the relational operators are defined between byte strings. `!` and unary `-` return the
//! operand unchanged; everything else is unsupported.

use core::cmp::Ordering;

use crate::error::VariantError;
use crate::kind::Kind;
use crate::ops::{BinaryOp, UnaryOp};
use crate::storage::Storage;
use crate::variant::Variant;

pub(super) fn unary(op: UnaryOp, v: &Variant) -> Result<Variant, VariantError> {
    match op {
        UnaryOp::Not | UnaryOp::Neg => Ok(v.clone()),
        UnaryOp::BitNot => Err(VariantError::unsupported(op, Kind::Bytes, None)),
    }
}

pub(super) fn binary(op: BinaryOp, a: &[u8], b: &[u8]) -> Result<Storage, VariantError> {
    if !op.is_relational() {
        return Err(VariantError::unsupported(
            op,
            Kind::Bytes,
            Some(Kind::Bytes),
        ));
    }
    Ok(Storage::Int(i64::from(op.holds(Some(compare(a, b))))))
}

/// Compares the common prefix; if it matches, the sign of `a.len() - b.len()` decides.
fn compare(a: &[u8], b: &[u8]) -> Ordering {
    let common = a.len().min(b.len());
    match a[..common].cmp(&b[..common]) {
        Ordering::Equal => a.len().cmp(&b.len()),
        ord => ord,
    }
}
