// Copyright 2026 the Variant Algebra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Operation table for the four numeric kinds.

use crate::error::VariantError;
use crate::ops::broadcast::{Element, Lane, Lanes, float_lane, int_lane, map, reduce, zip};
use crate::ops::{BinaryOp, OpClass, UnaryOp};
use crate::storage::Storage;

pub(super) fn unary(op: UnaryOp, s: &Storage) -> Result<Storage, VariantError> {
    let unsupported = || VariantError::unsupported(op, s.kind(), None);
    if op == UnaryOp::Not && s.kind().is_scalar() {
        return Ok(Storage::Int(i64::from(!s.is_truthy())));
    }
    let lanes = Lanes::of(s).ok_or_else(unsupported)?;
    Ok(match (op, lanes) {
        (UnaryOp::Not, Lanes::Int(l)) => i64::pack(map(l, not)),
        (UnaryOp::Not, Lanes::Float(l)) => f64::pack(map(l, not)),
        (UnaryOp::Neg, Lanes::Int(l)) => i64::pack(map(l, i64::wrapping_neg)),
        (UnaryOp::Neg, Lanes::Float(l)) => f64::pack(map(l, |x| -x)),
        (UnaryOp::BitNot, Lanes::Int(l)) => i64::pack(map(l, |x| !x)),
        (UnaryOp::BitNot, Lanes::Float(_)) => return Err(unsupported()),
    })
}

fn not<T: Element>(x: T) -> T {
    T::from_bool(!x.is_truthy())
}

pub(super) fn binary(op: BinaryOp, a: &Storage, b: &Storage) -> Result<Storage, VariantError> {
    let unsupported = || VariantError::unsupported(op, a.kind(), Some(b.kind()));
    let float = a.kind().is_float() || b.kind().is_float();

    match op.class() {
        OpClass::Relational => {
            let ord = if float {
                let (x, y) = float_lanes(a, b).ok_or_else(unsupported)?;
                reduce(&x).partial_cmp(&reduce(&y))
            } else {
                let (x, y) = int_lanes(a, b).ok_or_else(unsupported)?;
                Some(reduce(&x).cmp(&reduce(&y)))
            };
            Ok(Storage::Int(i64::from(op.holds(ord))))
        }
        OpClass::Shift => {
            if float || a.element_count() != 1 || b.element_count() != 1 {
                return Err(unsupported());
            }
            let (x, y) = int_lanes(a, b).ok_or_else(unsupported)?;
            Ok(i64::pack(zip(x, y, |p, q| Ok(shift(op, p, q)))?))
        }
        OpClass::Bitwise => {
            if float {
                return Err(unsupported());
            }
            let (x, y) = int_lanes(a, b).ok_or_else(unsupported)?;
            let f: fn(i64, i64) -> i64 = match op {
                BinaryOp::BitAnd => |p, q| p & q,
                BinaryOp::BitOr => |p, q| p | q,
                _ => |p, q| p ^ q,
            };
            Ok(i64::pack(zip(x, y, |p, q| Ok(f(p, q)))?))
        }
        OpClass::Logic => {
            if a.kind().is_scalar() && b.kind().is_scalar() {
                return Ok(Storage::Int(i64::from(logic(
                    op,
                    a.is_truthy(),
                    b.is_truthy(),
                ))));
            }
            if float {
                let (x, y) = float_lanes(a, b).ok_or_else(unsupported)?;
                Ok(f64::pack(zip(x, y, |p, q| Ok(logic_element(op, p, q)))?))
            } else {
                let (x, y) = int_lanes(a, b).ok_or_else(unsupported)?;
                Ok(i64::pack(zip(x, y, |p, q| Ok(logic_element(op, p, q)))?))
            }
        }
        OpClass::Arith => {
            if float {
                let (x, y) = float_lanes(a, b).ok_or_else(unsupported)?;
                Ok(f64::pack(zip(x, y, |p, q| Ok(float_arith(op, p, q)))?))
            } else {
                let (x, y) = int_lanes(a, b).ok_or_else(unsupported)?;
                Ok(i64::pack(zip(x, y, |p, q| int_arith(op, p, q))?))
            }
        }
    }
}

fn int_lanes<'a>(a: &'a Storage, b: &'a Storage) -> Option<(Lane<'a, i64>, Lane<'a, i64>)> {
    Some((int_lane(a)?, int_lane(b)?))
}

fn float_lanes<'a>(a: &'a Storage, b: &'a Storage) -> Option<(Lane<'a, f64>, Lane<'a, f64>)> {
    Some((float_lane(a)?, float_lane(b)?))
}

fn logic(op: BinaryOp, p: bool, q: bool) -> bool {
    match op {
        BinaryOp::And => p && q,
        _ => p || q,
    }
}

fn logic_element<T: Element>(op: BinaryOp, p: T, q: T) -> T {
    T::from_bool(logic(op, p.is_truthy(), q.is_truthy()))
}

/// The shift amount is taken modulo 64; `>>` is arithmetic.
fn shift(op: BinaryOp, x: i64, y: i64) -> i64 {
    let amount = u32::try_from(y.rem_euclid(64)).unwrap_or(0);
    match op {
        BinaryOp::Shl => x.wrapping_shl(amount),
        _ => x.wrapping_shr(amount),
    }
}

fn int_arith(op: BinaryOp, x: i64, y: i64) -> Result<i64, VariantError> {
    Ok(match op {
        BinaryOp::Add => x.wrapping_add(y),
        BinaryOp::Sub => x.wrapping_sub(y),
        BinaryOp::Mul => x.wrapping_mul(y),
        BinaryOp::Div | BinaryOp::Rem if y == 0 => return Err(VariantError::DivisionByZero),
        BinaryOp::Div => x.wrapping_div(y),
        _ => x.wrapping_rem(y),
    })
}

fn float_arith(op: BinaryOp, x: f64, y: f64) -> f64 {
    match op {
        BinaryOp::Add => x + y,
        BinaryOp::Sub => x - y,
        BinaryOp::Mul => x * y,
        BinaryOp::Div => x / y,
        _ => x % y,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn ints(v: &[i64]) -> Storage {
        Storage::IntSeq(v.into())
    }

    fn floats(v: &[f64]) -> Storage {
        Storage::FloatSeq(v.into())
    }

    #[test]
    fn integer_arithmetic_wraps() {
        let out = binary(BinaryOp::Add, &Storage::Int(i64::MAX), &Storage::Int(1));
        assert_eq!(out, Ok(Storage::Int(i64::MIN)));
        let out = binary(BinaryOp::Div, &Storage::Int(i64::MIN), &Storage::Int(-1));
        assert_eq!(out, Ok(Storage::Int(i64::MIN)));
        let out = binary(BinaryOp::Rem, &Storage::Int(-7), &Storage::Int(3));
        assert_eq!(out, Ok(Storage::Int(-1)));
    }

    #[test]
    fn integer_division_by_zero_fails_anywhere_in_a_sequence() {
        let out = binary(BinaryOp::Rem, &ints(&[4, 5]), &ints(&[2, 0]));
        assert_eq!(out, Err(VariantError::DivisionByZero));
        let out = binary(BinaryOp::Div, &Storage::Float(1.0), &Storage::Float(0.0));
        assert_eq!(out, Ok(Storage::Float(f64::INFINITY)));
    }

    #[test]
    fn mixed_scalars_promote_to_float() {
        let out = binary(BinaryOp::Mul, &Storage::Int(3), &Storage::Float(0.5));
        assert_eq!(out, Ok(Storage::Float(1.5)));
        let out = binary(BinaryOp::Sub, &Storage::Float(0.5), &ints(&[1, 2]));
        assert_eq!(out, Ok(floats(&[-0.5, -1.5])));
    }

    #[test]
    fn promoted_tail_is_widened() {
        let out = binary(BinaryOp::Add, &ints(&[1, 2, 3]), &floats(&[0.5]));
        assert_eq!(out, Ok(floats(&[1.5, 2.0, 3.0])));
    }

    #[test]
    fn shifts_need_single_int_elements() {
        assert_eq!(
            binary(BinaryOp::Shl, &Storage::Int(1), &Storage::Int(4)),
            Ok(Storage::Int(16))
        );
        assert_eq!(
            binary(BinaryOp::Shr, &Storage::Int(-16), &Storage::Int(2)),
            Ok(Storage::Int(-4))
        );
        assert_eq!(
            binary(BinaryOp::Shl, &Storage::Int(1), &Storage::Int(65)),
            Ok(Storage::Int(2))
        );
        assert_eq!(
            binary(BinaryOp::Shl, &ints(&[1]), &Storage::Int(3)),
            Ok(ints(&[8]))
        );
        assert_eq!(
            binary(BinaryOp::Shr, &Storage::Int(32), &ints(&[2])),
            Ok(ints(&[8]))
        );
        assert_eq!(binary(BinaryOp::Shl, &ints(&[1]), &ints(&[2])), Ok(ints(&[4])));
        assert!(binary(BinaryOp::Shl, &ints(&[1, 2]), &Storage::Int(1)).is_err());
        assert!(binary(BinaryOp::Shl, &Storage::Int(1), &ints(&[])).is_err());
        assert!(binary(BinaryOp::Shr, &Storage::Int(1), &Storage::Float(1.0)).is_err());
        assert!(binary(BinaryOp::Shr, &floats(&[1.0]), &Storage::Int(1)).is_err());
    }

    #[test]
    fn bitwise_rejects_floats() {
        assert_eq!(
            binary(BinaryOp::BitXor, &ints(&[6, 3]), &Storage::Int(5)),
            Ok(ints(&[3, 6]))
        );
        assert!(binary(BinaryOp::BitAnd, &ints(&[1]), &floats(&[1.0])).is_err());
        assert!(unary(UnaryOp::BitNot, &Storage::Float(1.0)).is_err());
        assert_eq!(unary(UnaryOp::BitNot, &Storage::Int(0)), Ok(Storage::Int(-1)));
    }

    #[test]
    fn logic_on_scalars_is_boolean_int() {
        let out = binary(BinaryOp::And, &Storage::Float(0.5), &Storage::Int(2));
        assert_eq!(out, Ok(Storage::Int(1)));
        let out = binary(BinaryOp::Or, &Storage::Float(0.0), &Storage::Int(0));
        assert_eq!(out, Ok(Storage::Int(0)));
        assert_eq!(unary(UnaryOp::Not, &Storage::Float(0.0)), Ok(Storage::Int(1)));
    }

    #[test]
    fn logic_on_sequences_is_elementwise() {
        let out = binary(BinaryOp::And, &ints(&[0, 2, 7]), &ints(&[1, 1]));
        assert_eq!(out, Ok(ints(&[0, 1, 7])));
        let out = binary(BinaryOp::Or, &Storage::Int(0), &floats(&[0.0, 3.0]));
        assert_eq!(out, Ok(floats(&[0.0, 1.0])));
        assert_eq!(unary(UnaryOp::Not, &ints(&[0, 5])), Ok(ints(&[1, 0])));
    }

    #[test]
    fn relational_reduces_sequences_to_sums() {
        let out = binary(BinaryOp::Eq, &ints(&[1, 5]), &ints(&[3, 3]));
        assert_eq!(out, Ok(Storage::Int(1)));
        let out = binary(BinaryOp::Lt, &ints(&[1, 1]), &Storage::Float(2.5));
        assert_eq!(out, Ok(Storage::Int(1)));
        let out = binary(BinaryOp::Gt, &floats(&[1.0, 1.0]), &ints(&[2]));
        assert_eq!(out, Ok(Storage::Int(0)));
    }

    #[test]
    fn nan_is_unordered() {
        let nan = Storage::Float(f64::NAN);
        assert_eq!(binary(BinaryOp::Eq, &nan, &nan), Ok(Storage::Int(0)));
        assert_eq!(binary(BinaryOp::Ne, &nan, &nan), Ok(Storage::Int(1)));
        assert_eq!(binary(BinaryOp::Le, &nan, &Storage::Int(0)), Ok(Storage::Int(0)));
    }

    #[test]
    fn negate_sequences() {
        assert_eq!(unary(UnaryOp::Neg, &ints(&[1, -2])), Ok(ints(&[-1, 2])));
        assert_eq!(
            unary(UnaryOp::Neg, &Storage::FloatSeq(vec![0.5].into())),
            Ok(floats(&[-0.5]))
        );
    }
}
