// Copyright 2026 the Variant Algebra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors produced by the operator algebra and by typed access.

use core::fmt;

use crate::kind::{Kind, TypeTag};
use crate::ops::OpCode;

/// A variant algebra error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VariantError {
    /// The operator has no defined semantics for this kind combination.
    UnsupportedOperation {
        /// The operator that was applied.
        op: OpCode,
        /// Kind of the left (or only) operand.
        lhs: Kind,
        /// Kind of the right operand, if the operator is binary.
        rhs: Option<Kind>,
    },
    /// A typed read asked for a kind the value does not hold.
    KindMismatch {
        /// Kind the caller asked for.
        expected: Kind,
        /// Kind actually stored, or `None` if the value is unset.
        found: Option<Kind>,
    },
    /// Integer division or remainder by zero.
    DivisionByZero,
    /// A raw buffer length does not fit the kind's element layout.
    BadLength {
        /// Kind being constructed.
        kind: Kind,
        /// Offending length in bytes.
        byte_len: usize,
    },
    /// A type tag that names no kind.
    UnknownTag(TypeTag),
}

impl VariantError {
    pub(crate) fn unsupported(op: impl Into<OpCode>, lhs: Kind, rhs: Option<Kind>) -> Self {
        Self::UnsupportedOperation {
            op: op.into(),
            lhs,
            rhs,
        }
    }
}

impl fmt::Display for VariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedOperation {
                op,
                lhs,
                rhs: Some(rhs),
            } => write!(f, "unsupported operation: {lhs} {op} {rhs}"),
            Self::UnsupportedOperation { op, lhs, rhs: None } => {
                write!(f, "unsupported operation: {op}{lhs}")
            }
            Self::KindMismatch {
                expected,
                found: Some(found),
            } => write!(f, "kind mismatch: expected {expected}, found {found}"),
            Self::KindMismatch {
                expected,
                found: None,
            } => write!(f, "kind mismatch: expected {expected}, value is unset"),
            Self::DivisionByZero => write!(f, "integer division by zero"),
            Self::BadLength { kind, byte_len } => write!(
                f,
                "{byte_len} bytes is not a valid {kind} buffer (element size {})",
                kind.element_size()
            ),
            Self::UnknownTag(tag) => write!(f, "unknown type tag `{tag}`"),
        }
    }
}

impl core::error::Error for VariantError {}
