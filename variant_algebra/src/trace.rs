// Copyright 2026 the Variant Algebra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Observing operator dispatch.
//!
//! The core crate has no logging dependency. Embedders that want to see which operators run
//! (and which fail) pass a [`TraceSink`] to [`Variant::unary_traced`] or
//! [`Variant::binary_traced`]. The sink's [`TraceMask`] selects which callbacks fire.

use alloc::vec::Vec;

use crate::error::VariantError;
use crate::kind::Kind;
use crate::ops::{BinaryOp, OpCode, UnaryOp};
use crate::variant::Variant;

/// Bit set selecting which trace callbacks a sink receives.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TraceMask(u8);

impl TraceMask {
    /// No callbacks.
    pub const NONE: Self = Self(0);
    /// Enter and exit of every operator.
    pub const OPS: Self = Self(1 << 0);
    /// Exit of operators that failed.
    pub const ERRORS: Self = Self(1 << 1);
    /// Every callback.
    pub const ALL: Self = Self(Self::OPS.0 | Self::ERRORS.0);

    /// Returns `true` if this mask contains every bit in `other`.
    #[must_use]
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Returns the bits set in either mask.
    #[must_use]
    #[inline]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Returns `true` if no bit is set.
    #[must_use]
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

/// What an operator produced.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum OpOutcome<'a> {
    /// The operator returned a value.
    Ok {
        /// Kind of the result, `None` for unset.
        kind: Option<Kind>,
        /// Element count of the result.
        elements: usize,
    },
    /// The operator failed.
    Err(&'a VariantError),
}

/// Receives operator dispatch events.
pub trait TraceSink {
    /// Callbacks this sink wants.
    fn mask(&self) -> TraceMask;

    /// An operator is about to run. `rhs` is `None` for unary operators; an unset operand is
    /// reported as `Some(None)`.
    fn op_enter(&mut self, op: OpCode, lhs: Option<Kind>, rhs: Option<Option<Kind>>) {
        let _ = (op, lhs, rhs);
    }

    /// An operator finished.
    fn op_exit(&mut self, op: OpCode, outcome: OpOutcome<'_>) {
        let _ = (op, outcome);
    }
}

impl Variant {
    /// [`Variant::unary`], reporting to `sink`.
    pub fn unary_traced(
        &self,
        op: UnaryOp,
        sink: &mut dyn TraceSink,
    ) -> Result<Self, VariantError> {
        observe(sink, op.into(), self.kind(), None, || self.unary(op))
    }

    /// [`Variant::binary`], reporting to `sink`.
    pub fn binary_traced(
        &self,
        op: BinaryOp,
        rhs: &Self,
        sink: &mut dyn TraceSink,
    ) -> Result<Self, VariantError> {
        observe(sink, op.into(), self.kind(), Some(rhs.kind()), || {
            self.binary(op, rhs)
        })
    }
}

fn observe(
    sink: &mut dyn TraceSink,
    op: OpCode,
    lhs: Option<Kind>,
    rhs: Option<Option<Kind>>,
    run: impl FnOnce() -> Result<Variant, VariantError>,
) -> Result<Variant, VariantError> {
    let mask = sink.mask();
    let ops = mask.contains(TraceMask::OPS);
    if ops {
        sink.op_enter(op, lhs, rhs);
    }
    let result = run();
    match &result {
        Ok(v) if ops => sink.op_exit(
            op,
            OpOutcome::Ok {
                kind: v.kind(),
                elements: v.element_count(),
            },
        ),
        Err(e) if ops || mask.contains(TraceMask::ERRORS) => sink.op_exit(op, OpOutcome::Err(e)),
        _ => {}
    }
    result
}

/// A recorded trace event.
#[derive(Clone, Debug, PartialEq)]
pub enum TraceEvent {
    /// See [`TraceSink::op_enter`].
    Enter {
        /// Operator.
        op: OpCode,
        /// Left operand kind.
        lhs: Option<Kind>,
        /// Right operand kind, for binary operators.
        rhs: Option<Option<Kind>>,
    },
    /// See [`TraceSink::op_exit`].
    Exit {
        /// Operator.
        op: OpCode,
        /// Result kind and element count, or the error.
        result: Result<(Option<Kind>, usize), VariantError>,
    },
}

/// A sink that stores every event it receives.
#[derive(Clone, Debug)]
pub struct RecordingSink {
    mask: TraceMask,
    events: Vec<TraceEvent>,
}

impl RecordingSink {
    /// Creates a sink recording the callbacks selected by `mask`.
    #[must_use]
    pub const fn new(mask: TraceMask) -> Self {
        Self {
            mask,
            events: Vec::new(),
        }
    }

    /// Recorded events, oldest first.
    #[must_use]
    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }

    /// Takes the recorded events, leaving the sink empty.
    pub fn take_events(&mut self) -> Vec<TraceEvent> {
        core::mem::take(&mut self.events)
    }
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self::new(TraceMask::ALL)
    }
}

impl TraceSink for RecordingSink {
    fn mask(&self) -> TraceMask {
        self.mask
    }

    fn op_enter(&mut self, op: OpCode, lhs: Option<Kind>, rhs: Option<Option<Kind>>) {
        self.events.push(TraceEvent::Enter { op, lhs, rhs });
    }

    fn op_exit(&mut self, op: OpCode, outcome: OpOutcome<'_>) {
        let result = match outcome {
            OpOutcome::Ok { kind, elements } => Ok((kind, elements)),
            OpOutcome::Err(e) => Err(e.clone()),
        };
        self.events.push(TraceEvent::Exit { op, result });
    }
}
