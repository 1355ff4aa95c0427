// Copyright 2026 the Variant Algebra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::resolver::{DefaultLabelResolver, LabelResolver, default_op_label};
use std::string::String;
use std::vec::Vec;
use variant_algebra::trace::{OpOutcome, TraceMask, TraceSink};
use variant_algebra::{Kind, OpCode};

type BackendGuard = tracy_client::Span;

struct ScopeEntry {
    op: OpCode,
    // Keep the label alive for backends that may borrow it.
    label: String,
    guard: Option<BackendGuard>,
}

/// A `TraceSink` that emits Tracy zones via `tracy-client`.
///
/// Each operator dispatch becomes one zone. Failed operators also emit a Tracy message carrying
/// the error text.
pub struct ProfilingTraceSink<R = DefaultLabelResolver> {
    resolver: R,
    stack: Vec<ScopeEntry>,
}

impl ProfilingTraceSink<DefaultLabelResolver> {
    /// Create a new sink with kind-name labels.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<R: LabelResolver> ProfilingTraceSink<R> {
    /// Create a new sink with a custom label resolver.
    #[must_use]
    pub fn with_resolver(resolver: R) -> Self {
        Self {
            resolver,
            stack: Vec::new(),
        }
    }

    fn on_op_enter(&mut self, op: OpCode, lhs: Option<Kind>, rhs: Option<Option<Kind>>) {
        let label = self
            .resolver
            .op_label(op, lhs, rhs)
            .unwrap_or_else(|| default_op_label(op, lhs, rhs));
        let guard = self.start_scope(&label);
        self.stack.push(ScopeEntry { op, label, guard });
    }

    fn on_op_exit(&mut self, op: OpCode, outcome: OpOutcome<'_>) {
        if let OpOutcome::Err(err) = outcome
            && let Some(client) = tracy_client::Client::running()
        {
            client.message(&format!("{op}: {err}"), 0);
        }
        if self.stack.last().is_some_and(|top| top.op == op) {
            if let Some(entry) = self.stack.pop() {
                let ScopeEntry {
                    label: _label,
                    guard: _guard,
                    ..
                } = entry;
                let _ = (_label, _guard);
            }
            return;
        }
        // Out of sync: close everything still open.
        self.drop_active_scopes();
    }

    fn start_scope(&self, label: &str) -> Option<BackendGuard> {
        let client = tracy_client::Client::running()?;
        Some(client.span_alloc(Some(label), "variant_algebra.op", "variant_algebra", 0, 0))
    }

    // LIFO so nested zones close inner-to-outer.
    fn drop_active_scopes(&mut self) {
        while let Some(entry) = self.stack.pop() {
            let ScopeEntry {
                label: _label,
                guard: _guard,
                ..
            } = entry;
            let _ = (_label, _guard);
        }
    }
}

impl<R: LabelResolver> TraceSink for ProfilingTraceSink<R> {
    fn mask(&self) -> TraceMask {
        TraceMask::OPS
    }

    fn op_enter(&mut self, op: OpCode, lhs: Option<Kind>, rhs: Option<Option<Kind>>) {
        self.on_op_enter(op, lhs, rhs);
    }

    fn op_exit(&mut self, op: OpCode, outcome: OpOutcome<'_>) {
        self.on_op_exit(op, outcome);
    }
}

impl<R> Default for ProfilingTraceSink<R>
where
    R: LabelResolver + Default,
{
    fn default() -> Self {
        Self::with_resolver(R::default())
    }
}

impl<R> std::fmt::Debug for ProfilingTraceSink<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProfilingTraceSink")
            .field("stack_depth", &self.stack.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::ProfilingTraceSink;
    use crate::TagLabelResolver;
    use variant_algebra::{BinaryOp, UnaryOp, Variant, VariantError};

    #[test]
    fn start_scope_without_tracy_client_does_not_panic() {
        let sink = ProfilingTraceSink::new();
        let _guard = sink.start_scope("test");
    }

    #[test]
    fn traced_ops_leave_no_open_scopes() {
        let mut sink = ProfilingTraceSink::with_resolver(TagLabelResolver::default());
        let a = Variant::from(vec![1_i64, 2, 3]);
        let b = Variant::from(0.5);

        let sum = a.binary_traced(BinaryOp::Add, &b, &mut sink).unwrap();
        assert_eq!(sum.dump(), "vecf[1.5, 2.5, 3.5]");
        assert_eq!(sink.stack.len(), 0);

        let err = b.unary_traced(UnaryOp::BitNot, &mut sink).unwrap_err();
        assert!(matches!(err, VariantError::UnsupportedOperation { .. }));
        assert_eq!(sink.stack.len(), 0);
    }

    #[test]
    fn mismatched_exit_closes_everything() {
        let mut sink = ProfilingTraceSink::new();
        sink.on_op_enter(BinaryOp::Add.into(), None, Some(None));
        sink.on_op_enter(BinaryOp::Mul.into(), None, Some(None));
        assert_eq!(sink.stack.len(), 2);
        sink.on_op_exit(
            UnaryOp::Neg.into(),
            variant_algebra::trace::OpOutcome::Ok {
                kind: None,
                elements: 0,
            },
        );
        assert_eq!(sink.stack.len(), 0);
    }
}
