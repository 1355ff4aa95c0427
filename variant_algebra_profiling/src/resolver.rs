// Copyright 2026 the Variant Algebra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::collections::HashMap;
use std::string::String;

use variant_algebra::{Kind, OpCode};

/// Optional label resolver for profiling zones.
///
/// Return `None` to fall back to the default kind-name labels.
pub trait LabelResolver {
    /// Resolve a label for one operator dispatch.
    fn op_label(
        &mut self,
        _op: OpCode,
        _lhs: Option<Kind>,
        _rhs: Option<Option<Kind>>,
    ) -> Option<String> {
        None
    }
}

/// Default resolver that keeps kind-name labels (`add veci,flt`).
#[derive(Default, Debug)]
pub struct DefaultLabelResolver;

impl LabelResolver for DefaultLabelResolver {}

/// Resolver that labels operands by their four-character type tags (`add iv64,fx64`).
///
/// Labels are cached per operator and kind combination.
#[derive(Default, Debug)]
pub struct TagLabelResolver {
    cache: HashMap<(OpCode, Option<Kind>, Option<Option<Kind>>), String>,
}

impl LabelResolver for TagLabelResolver {
    fn op_label(
        &mut self,
        op: OpCode,
        lhs: Option<Kind>,
        rhs: Option<Option<Kind>>,
    ) -> Option<String> {
        let label = self
            .cache
            .entry((op, lhs, rhs))
            .or_insert_with(|| format_label(op, lhs, rhs, |k| k.tag().to_string()));
        Some(label.clone())
    }
}

pub(crate) fn default_op_label(op: OpCode, lhs: Option<Kind>, rhs: Option<Option<Kind>>) -> String {
    format_label(op, lhs, rhs, |k| k.name().to_string())
}

fn format_label(
    op: OpCode,
    lhs: Option<Kind>,
    rhs: Option<Option<Kind>>,
    name: impl Fn(Kind) -> String,
) -> String {
    let operand = |k: Option<Kind>| k.map_or_else(|| "unset".to_string(), &name);
    match rhs {
        Some(rhs) => format!("{} {},{}", op.name(), operand(lhs), operand(rhs)),
        None => format!("{} {}", op.name(), operand(lhs)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use variant_algebra::{BinaryOp, UnaryOp};

    #[test]
    fn default_labels_use_kind_names() {
        let label = default_op_label(
            OpCode::Binary(BinaryOp::Add),
            Some(Kind::IntSeq),
            Some(Some(Kind::Float)),
        );
        assert_eq!(label, "add veci,flt");
        let label = default_op_label(OpCode::Unary(UnaryOp::Neg), None, None);
        assert_eq!(label, "neg unset");
    }

    #[test]
    fn tag_labels_are_cached() {
        let mut r = TagLabelResolver::default();
        let op = OpCode::Binary(BinaryOp::Lt);
        let first = r.op_label(op, Some(Kind::Bytes), Some(None));
        assert_eq!(first.as_deref(), Some("lt strx,unset"));
        assert_eq!(r.op_label(op, Some(Kind::Bytes), Some(None)), first);
        assert_eq!(r.cache.len(), 1);
    }
}
