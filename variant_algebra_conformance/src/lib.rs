// Copyright 2026 the Variant Algebra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conformance vectors for `variant_algebra`.
//!
//! Each case pins one operator application to its expected dump or error class. The integration
//! tests under `tests/` run the same vectors through the `std::ops` surface, traced dispatch and
//! the codec, so every entry point agrees on one table.

use variant_algebra::{BinaryOp, UnaryOp, Variant, VariantError};

/// Expected result of a case.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expect {
    /// The operator succeeds and the result dumps as this string.
    Dump(&'static str),
    /// The operator fails with [`VariantError::UnsupportedOperation`].
    Unsupported,
    /// The operator fails with [`VariantError::DivisionByZero`].
    DivisionByZero,
}

impl Expect {
    /// Checks `result` against this expectation, describing any mismatch.
    pub fn check(&self, result: &Result<Variant, VariantError>) -> Result<(), String> {
        match (self, result) {
            (Self::Dump(want), Ok(v)) if v.dump() == *want => Ok(()),
            (Self::Unsupported, Err(VariantError::UnsupportedOperation { .. }))
            | (Self::DivisionByZero, Err(VariantError::DivisionByZero)) => Ok(()),
            (want, got) => Err(format!("expected {want:?}, got {got:?}")),
        }
    }
}

/// A binary operator case.
#[derive(Clone, Debug)]
pub struct BinaryCase {
    /// Short identifier used in failure messages.
    pub name: &'static str,
    /// Left operand.
    pub lhs: Variant,
    /// Operator.
    pub op: BinaryOp,
    /// Right operand.
    pub rhs: Variant,
    /// Expected result.
    pub expect: Expect,
}

/// A unary operator case.
#[derive(Clone, Debug)]
pub struct UnaryCase {
    /// Short identifier used in failure messages.
    pub name: &'static str,
    /// Operand.
    pub operand: Variant,
    /// Operator.
    pub op: UnaryOp,
    /// Expected result.
    pub expect: Expect,
}

fn case(
    name: &'static str,
    lhs: impl Into<Variant>,
    op: BinaryOp,
    rhs: impl Into<Variant>,
    expect: Expect,
) -> BinaryCase {
    BinaryCase {
        name,
        lhs: lhs.into(),
        op,
        rhs: rhs.into(),
        expect,
    }
}

/// Binary operator vectors.
#[must_use]
pub fn binary_cases() -> Vec<BinaryCase> {
    use BinaryOp::*;
    use Expect::{DivisionByZero as DivZero, Dump, Unsupported};
    vec![
        case("int_add", 2_i64, Add, 3_i64, Dump("int[5]")),
        case("int_wraps", i64::MAX, Add, 1_i64, Dump("int[-9223372036854775808]")),
        case("int_float_mul", 3_i64, Mul, 0.5, Dump("flt[1.5]")),
        case("seq_plus_float", vec![1_i64, 2, 3], Add, 0.5, Dump("vecf[1.5, 2.5, 3.5]")),
        case("scalar_left_broadcast", 10_i64, Sub, vec![1_i64, 2], Dump("veci[9, 8]")),
        case("left_tail", vec![1_i64, 2, 3], Add, vec![10_i64, 20], Dump("veci[11, 22, 3]")),
        case("right_tail", vec![1_i64], Sub, vec![10_i64, 20, 30], Dump("veci[-9, 20, 30]")),
        case("right_promoted_tail", vec![1.0], Add, vec![1_i64, 2, 3], Dump("vecf[2, 2, 3]")),
        case("promoted_tail", vec![1_i64, 2, 3], Mul, vec![0.5], Dump("vecf[0.5, 2, 3]")),
        case("int_rem", -7_i64, Rem, 3_i64, Dump("int[-1]")),
        case("float_rem", 7.5, Rem, 2_i64, Dump("flt[1.5]")),
        case("int_div_zero", 1_i64, Div, 0_i64, DivZero),
        case("seq_div_zero", vec![4_i64, 5], Div, vec![2_i64, 0], DivZero),
        case("float_div_zero", 1.0, Div, 0_i64, Dump("flt[inf]")),
        case("shl", 1_i64, Shl, 10_i64, Dump("int[1024]")),
        case("shr_negative", -16_i64, Shr, 2_i64, Dump("int[-4]")),
        case("shl_single_element_seq", vec![1_i64], Shl, 3_i64, Dump("veci[8]")),
        case("shr_single_element_seqs", vec![-16_i64], Shr, vec![2_i64], Dump("veci[-4]")),
        case("shl_two_element_seq", vec![1_i64, 2], Shl, 1_i64, Unsupported),
        case("shr_float", 8.0, Shr, 1_i64, Unsupported),
        case("bitxor_seq", vec![6_i64, 3], BitXor, 5_i64, Dump("veci[3, 6]")),
        case("bitand_float", 1.0, BitAnd, 2_i64, Unsupported),
        case("bitor_float_seq", 1_i64, BitOr, vec![1.0], Unsupported),
        case("and_scalars", 0.5, And, 2_i64, Dump("int[1]")),
        case("or_scalars", 0.0, Or, 0_i64, Dump("int[0]")),
        case("or_seq", vec![0_i64, 0], Or, vec![0_i64, 3], Dump("veci[0, 1]")),
        case("and_float_seq", vec![2.5, 0.0], And, 1_i64, Dump("vecf[1, 0]")),
        case("sum_eq", vec![1_i64, 5], Eq, vec![3_i64, 3], Dump("int[1]")),
        case("sum_lt", vec![1_i64, 2], Lt, 3.5, Dump("int[1]")),
        case("sum_ge", vec![0.5, 0.5], Ge, vec![1_i64], Dump("int[1]")),
        case("scalar_ne", 1_i64, Ne, 1.0, Dump("int[0]")),
        case("bytes_lt_prefix", "ab", Lt, "abc", Dump("int[1]")),
        case("bytes_eq", "ab", Eq, "ab", Dump("int[1]")),
        case("bytes_gt_first_byte", "b", Gt, "abc", Dump("int[1]")),
        case("bytes_le_longer", "abc", Le, "ab", Dump("int[0]")),
        case("bytes_add", "x", Add, "y", Unsupported),
        case("bytes_and", "x", And, "y", Unsupported),
        case("bytes_vs_int", "1", Eq, 1_i64, Unsupported),
        case("int_vs_bytes", 1_i64, Mul, "2", Unsupported),
        case("unset_eq_unset", Variant::new(), Eq, Variant::new(), Dump("int[1]")),
        case("unset_eq_set", Variant::new(), Eq, 0_i64, Dump("int[0]")),
        case("unset_lt", 0_i64, Lt, Variant::new(), Dump("int[0]")),
        case("unset_add", Variant::new(), Add, 1_i64, Dump("unset[]")),
    ]
}

fn unary(name: &'static str, operand: impl Into<Variant>, op: UnaryOp, expect: Expect) -> UnaryCase {
    UnaryCase {
        name,
        operand: operand.into(),
        op,
        expect,
    }
}

/// Unary operator vectors.
#[must_use]
pub fn unary_cases() -> Vec<UnaryCase> {
    use Expect::{Dump, Unsupported};
    use UnaryOp::*;
    vec![
        unary("neg_int", 5_i64, Neg, Dump("int[-5]")),
        unary("neg_min_wraps", i64::MIN, Neg, Dump("int[-9223372036854775808]")),
        unary("neg_float_seq", vec![0.5, -1.0], Neg, Dump("vecf[-0.5, 1]")),
        unary("not_int_seq", vec![0_i64, 4], Not, Dump("veci[1, 0]")),
        unary("not_float", 0.0, Not, Dump("int[1]")),
        unary("bit_not_int", 0_i64, BitNot, Dump("int[-1]")),
        unary("bit_not_int_seq", vec![1_i64, -1], BitNot, Dump("veci[-2, 0]")),
        unary("bit_not_float", 1.0, BitNot, Unsupported),
        unary("not_bytes", "abc", Not, Dump("string[abc]")),
        unary("neg_bytes", "abc", Neg, Dump("string[abc]")),
        unary("bit_not_bytes", "abc", BitNot, Unsupported),
        unary("neg_unset", Variant::new(), Neg, Dump("unset[]")),
    ]
}

/// A spread of values covering every kind, plus unset.
#[must_use]
pub fn sample_values() -> Vec<Variant> {
    vec![
        Variant::new(),
        Variant::from(0_i64),
        Variant::from(-3_i64),
        Variant::from(i64::MAX),
        Variant::from(0.0),
        Variant::from(2.25),
        Variant::from(-1e300),
        Variant::from(Vec::<i64>::new()),
        Variant::from(vec![1_i64, -2, 3]),
        Variant::from(vec![0.5, 1.5]),
        Variant::from(""),
        Variant::from("hello"),
    ]
}

/// Integers used for algebraic law checks; sums and products stay in range when paired.
#[must_use]
pub fn law_integers() -> Vec<i64> {
    vec![0, 1, -1, 2, 7, -13, 1_000, -65_536, 3_037_000_499, -3_037_000_499]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_names_are_unique() {
        let mut names: Vec<_> = binary_cases().iter().map(|c| c.name).collect();
        names.extend(unary_cases().iter().map(|c| c.name));
        let total = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), total, "duplicate case name");
    }

    #[test]
    fn check_reports_mismatch() {
        let got = Ok(Variant::from(1_i64));
        assert!(Expect::Dump("int[1]").check(&got).is_ok());
        assert!(Expect::Dump("int[2]").check(&got).is_err());
        assert!(Expect::Unsupported.check(&got).is_err());
    }
}
