// Copyright 2026 the Variant Algebra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Operator forwarding: `std::ops` impls and named methods for the operators Rust has no trait
//! for (logical and relational).
//!
//! Every operator returns `Result<Variant, VariantError>`; booleans come back as int-scalar 0/1.

use core::ops::{Add, BitAnd, BitOr, BitXor, Div, Mul, Neg, Rem, Shl, Shr, Sub};

use crate::error::VariantError;
use crate::ops::{BinaryOp, UnaryOp};
use crate::variant::Variant;

macro_rules! forward_binary {
    ($($trait:ident :: $method:ident => $op:expr;)*) => {$(
        impl $trait<&Variant> for &Variant {
            type Output = Result<Variant, VariantError>;

            #[inline]
            fn $method(self, rhs: &Variant) -> Self::Output {
                self.binary($op, rhs)
            }
        }

        impl $trait<Variant> for &Variant {
            type Output = Result<Variant, VariantError>;

            #[inline]
            fn $method(self, rhs: Variant) -> Self::Output {
                self.binary($op, &rhs)
            }
        }

        impl $trait<&Variant> for Variant {
            type Output = Result<Variant, VariantError>;

            #[inline]
            fn $method(self, rhs: &Variant) -> Self::Output {
                self.binary($op, rhs)
            }
        }

        impl $trait<Variant> for Variant {
            type Output = Result<Variant, VariantError>;

            #[inline]
            fn $method(self, rhs: Variant) -> Self::Output {
                self.binary($op, &rhs)
            }
        }
    )*};
}

forward_binary! {
    Add::add => BinaryOp::Add;
    Sub::sub => BinaryOp::Sub;
    Mul::mul => BinaryOp::Mul;
    Div::div => BinaryOp::Div;
    Rem::rem => BinaryOp::Rem;
    BitAnd::bitand => BinaryOp::BitAnd;
    BitOr::bitor => BinaryOp::BitOr;
    BitXor::bitxor => BinaryOp::BitXor;
    Shl::shl => BinaryOp::Shl;
    Shr::shr => BinaryOp::Shr;
}

impl Neg for &Variant {
    type Output = Result<Variant, VariantError>;

    #[inline]
    fn neg(self) -> Self::Output {
        self.unary(UnaryOp::Neg)
    }
}

impl Neg for Variant {
    type Output = Result<Variant, VariantError>;

    #[inline]
    fn neg(self) -> Self::Output {
        self.unary(UnaryOp::Neg)
    }
}

impl Variant {
    /// `self < rhs`.
    pub fn less(&self, rhs: &Self) -> Result<Self, VariantError> {
        self.binary(BinaryOp::Lt, rhs)
    }

    /// `self <= rhs`.
    pub fn less_equal(&self, rhs: &Self) -> Result<Self, VariantError> {
        self.binary(BinaryOp::Le, rhs)
    }

    /// `self == rhs` under the algebra's comparison rules.
    ///
    /// Sequences compare by the sum of their elements, so `[1, 5]` equals `[3, 3]`. For structural
    /// identity use `PartialEq`.
    pub fn equal(&self, rhs: &Self) -> Result<Self, VariantError> {
        self.binary(BinaryOp::Eq, rhs)
    }

    /// `self != rhs`.
    pub fn not_equal(&self, rhs: &Self) -> Result<Self, VariantError> {
        self.binary(BinaryOp::Ne, rhs)
    }

    /// `self >= rhs`.
    pub fn greater_equal(&self, rhs: &Self) -> Result<Self, VariantError> {
        self.binary(BinaryOp::Ge, rhs)
    }

    /// `self > rhs`.
    pub fn greater(&self, rhs: &Self) -> Result<Self, VariantError> {
        self.binary(BinaryOp::Gt, rhs)
    }

    /// `self && rhs`.
    pub fn logical_and(&self, rhs: &Self) -> Result<Self, VariantError> {
        self.binary(BinaryOp::And, rhs)
    }

    /// `self || rhs`.
    pub fn logical_or(&self, rhs: &Self) -> Result<Self, VariantError> {
        self.binary(BinaryOp::Or, rhs)
    }

    /// `!self`.
    pub fn logical_not(&self) -> Result<Self, VariantError> {
        self.unary(UnaryOp::Not)
    }

    /// `~self`.
    pub fn bit_not(&self) -> Result<Self, VariantError> {
        self.unary(UnaryOp::BitNot)
    }

    /// `-self`.
    pub fn negate(&self) -> Result<Self, VariantError> {
        self.unary(UnaryOp::Neg)
    }
}
