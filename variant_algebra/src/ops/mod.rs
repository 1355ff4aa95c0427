// Copyright 2026 the Variant Algebra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Operator identities and per-kind dispatch.
//!
//! Each [`Kind`](crate::Kind) has an operation table: one for the numeric kinds, which share
//! promotion and broadcasting rules, and one for byte strings. [`Variant::unary`] and
//! [`Variant::binary`] pick the table from the operand kinds.
//!
//! Every operator returns a fresh [`Variant`]. Operands are never mutated.

use core::cmp::Ordering;
use core::fmt;

use crate::error::VariantError;
use crate::storage::Storage;
use crate::variant::Variant;

mod broadcast;
mod bytes;
mod numeric;
mod operators;

/// A single-operand operator.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    /// Logical not (`!`).
    Not,
    /// Bitwise complement (`~`).
    BitNot,
    /// Arithmetic negation (unary `-`).
    Neg,
}

impl UnaryOp {
    /// Every unary operator.
    pub const ALL: [Self; 3] = [Self::Not, Self::BitNot, Self::Neg];

    /// Returns the operator symbol.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Not => "!",
            Self::BitNot => "~",
            Self::Neg => "-",
        }
    }

    /// Returns a stable identifier, suitable for labels.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Not => "not",
            Self::BitNot => "bit_not",
            Self::Neg => "neg",
        }
    }
}

/// A two-operand operator.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    /// Logical and (`&&`).
    And,
    /// Logical or (`||`).
    Or,
    /// Bitwise and (`&`).
    BitAnd,
    /// Bitwise or (`|`).
    BitOr,
    /// Bitwise exclusive or (`^`).
    BitXor,
    /// Shift left (`<<`).
    Shl,
    /// Arithmetic shift right (`>>`).
    Shr,
    /// Multiplication.
    Mul,
    /// Division.
    Div,
    /// Remainder.
    Rem,
    /// Addition.
    Add,
    /// Subtraction.
    Sub,
    /// Less than.
    Lt,
    /// Less than or equal.
    Le,
    /// Equal.
    Eq,
    /// Not equal.
    Ne,
    /// Greater than or equal.
    Ge,
    /// Greater than.
    Gt,
}

/// Coarse operator families; each family shares promotion and failure rules.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum OpClass {
    Logic,
    Bitwise,
    Shift,
    Arith,
    Relational,
}

impl BinaryOp {
    /// Every binary operator.
    pub const ALL: [Self; 18] = [
        Self::And,
        Self::Or,
        Self::BitAnd,
        Self::BitOr,
        Self::BitXor,
        Self::Shl,
        Self::Shr,
        Self::Mul,
        Self::Div,
        Self::Rem,
        Self::Add,
        Self::Sub,
        Self::Lt,
        Self::Le,
        Self::Eq,
        Self::Ne,
        Self::Ge,
        Self::Gt,
    ];

    /// Returns the operator symbol.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::And => "&&",
            Self::Or => "||",
            Self::BitAnd => "&",
            Self::BitOr => "|",
            Self::BitXor => "^",
            Self::Shl => "<<",
            Self::Shr => ">>",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Rem => "%",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Lt => "<",
            Self::Le => "<=",
            Self::Eq => "==",
            Self::Ne => "!=",
            Self::Ge => ">=",
            Self::Gt => ">",
        }
    }

    /// Returns a stable identifier, suitable for labels.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::And => "and",
            Self::Or => "or",
            Self::BitAnd => "bit_and",
            Self::BitOr => "bit_or",
            Self::BitXor => "bit_xor",
            Self::Shl => "shl",
            Self::Shr => "shr",
            Self::Mul => "mul",
            Self::Div => "div",
            Self::Rem => "rem",
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Lt => "lt",
            Self::Le => "le",
            Self::Eq => "eq",
            Self::Ne => "ne",
            Self::Ge => "ge",
            Self::Gt => "gt",
        }
    }

    /// Returns `true` for the comparison operators.
    #[must_use]
    #[inline]
    pub const fn is_relational(self) -> bool {
        matches!(self.class(), OpClass::Relational)
    }

    pub(crate) const fn class(self) -> OpClass {
        match self {
            Self::And | Self::Or => OpClass::Logic,
            Self::BitAnd | Self::BitOr | Self::BitXor => OpClass::Bitwise,
            Self::Shl | Self::Shr => OpClass::Shift,
            Self::Mul | Self::Div | Self::Rem | Self::Add | Self::Sub => OpClass::Arith,
            Self::Lt | Self::Le | Self::Eq | Self::Ne | Self::Ge | Self::Gt => OpClass::Relational,
        }
    }

    /// Evaluates a relational operator against a comparison result.
    ///
    /// `None` means unordered (a NaN was involved): only `!=` holds.
    pub(crate) fn holds(self, ord: Option<Ordering>) -> bool {
        match self {
            Self::Lt => ord == Some(Ordering::Less),
            Self::Le => matches!(ord, Some(Ordering::Less | Ordering::Equal)),
            Self::Eq => ord == Some(Ordering::Equal),
            Self::Ne => ord != Some(Ordering::Equal),
            Self::Ge => matches!(ord, Some(Ordering::Greater | Ordering::Equal)),
            Self::Gt => ord == Some(Ordering::Greater),
            _ => false,
        }
    }
}

/// Any operator, for error reporting and tracing.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum OpCode {
    /// A unary operator.
    Unary(UnaryOp),
    /// A binary operator.
    Binary(BinaryOp),
}

impl OpCode {
    /// Returns a stable identifier, suitable for labels.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Unary(op) => op.name(),
            Self::Binary(op) => op.name(),
        }
    }
}

impl From<UnaryOp> for OpCode {
    fn from(op: UnaryOp) -> Self {
        Self::Unary(op)
    }
}

impl From<BinaryOp> for OpCode {
    fn from(op: BinaryOp) -> Self {
        Self::Binary(op)
    }
}

impl fmt::Display for OpCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unary(op) => f.write_str(op.symbol()),
            Self::Binary(op) => f.write_str(op.symbol()),
        }
    }
}

impl Variant {
    /// Applies a unary operator.
    ///
    /// An unset operand yields an unset result.
    pub fn unary(&self, op: UnaryOp) -> Result<Self, VariantError> {
        match self.storage() {
            None => Ok(Self::new()),
            Some(Storage::Bytes(_)) => bytes::unary(op, self),
            Some(s) => numeric::unary(op, s).map(Self::from_storage),
        }
    }

    /// Applies a binary operator with `self` on the left.
    ///
    /// If either side is unset, `==` holds only when both are unset, `!=` is its negation, the
    /// ordering operators are false and every other operator yields an unset result.
    pub fn binary(&self, op: BinaryOp, rhs: &Self) -> Result<Self, VariantError> {
        let (Some(a), Some(b)) = (self.storage(), rhs.storage()) else {
            return Ok(unset_binary(op, self.is_set() || rhs.is_set()));
        };
        let out = match (a, b) {
            (Storage::Bytes(x), Storage::Bytes(y)) => bytes::binary(op, x, y)?,
            (Storage::Bytes(_), _) | (_, Storage::Bytes(_)) => {
                return Err(VariantError::unsupported(op, a.kind(), Some(b.kind())));
            }
            _ => numeric::binary(op, a, b)?,
        };
        Ok(Self::from_storage(out))
    }
}

fn unset_binary(op: BinaryOp, any_set: bool) -> Variant {
    match op {
        BinaryOp::Eq => Variant::from(!any_set),
        BinaryOp::Ne => Variant::from(any_set),
        BinaryOp::Lt | BinaryOp::Le | BinaryOp::Ge | BinaryOp::Gt => Variant::from(false),
        _ => Variant::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn every_binary_op_has_one_class() {
        let relational = BinaryOp::ALL.iter().filter(|op| op.is_relational()).count();
        assert_eq!(relational, 6);
        assert_eq!(BinaryOp::Shl.class(), OpClass::Shift);
        assert_eq!(BinaryOp::Rem.class(), OpClass::Arith);
    }

    #[test]
    fn holds_treats_unordered_as_not_equal() {
        for op in [BinaryOp::Lt, BinaryOp::Le, BinaryOp::Eq, BinaryOp::Ge, BinaryOp::Gt] {
            assert!(!op.holds(None), "{op:?} should not hold for unordered operands");
        }
        assert!(BinaryOp::Ne.holds(None));
        assert!(!BinaryOp::Add.holds(Some(Ordering::Equal)));
    }

    #[test]
    fn unset_operands() {
        let unset = Variant::new();
        let one = Variant::from(1_i64);

        assert_eq!(unset.binary(BinaryOp::Eq, &unset), Ok(Variant::from(true)));
        assert_eq!(unset.binary(BinaryOp::Eq, &one), Ok(Variant::from(false)));
        assert_eq!(one.binary(BinaryOp::Ne, &unset), Ok(Variant::from(true)));
        assert_eq!(unset.binary(BinaryOp::Lt, &one), Ok(Variant::from(false)));
        assert_eq!(one.binary(BinaryOp::Add, &unset), Ok(Variant::new()));
        assert_eq!(unset.unary(UnaryOp::Neg), Ok(Variant::new()));
    }

    #[test]
    fn bytes_mixed_with_numbers_is_unsupported() {
        let s = Variant::from("abc");
        let v = Variant::from(vec![1_i64]);
        assert_eq!(
            s.binary(BinaryOp::Eq, &v),
            Err(VariantError::UnsupportedOperation {
                op: OpCode::Binary(BinaryOp::Eq),
                lhs: crate::Kind::Bytes,
                rhs: Some(crate::Kind::IntSeq),
            })
        );
    }
}
