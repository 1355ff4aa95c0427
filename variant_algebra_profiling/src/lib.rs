// Copyright 2026 the Variant Algebra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Profiling adapters for `variant_algebra` (currently Tracy).
//!
//! This crate is `std`-only and keeps `variant_algebra` itself free of profiling dependencies.
//! It listens for operator enter/exit callbacks and emits matching profiling zones. Failed
//! operators are additionally reported as Tracy messages.
//!
//! ## Backend
//! This crate currently supports the Tracy backend via `tracy-client`.
//!
//! ## Example
//! ```ignore
//! use variant_algebra::{BinaryOp, Variant};
//! use variant_algebra_profiling::ProfilingTraceSink;
//!
//! let mut sink = ProfilingTraceSink::new();
//! let sum = a.binary_traced(BinaryOp::Add, &b, &mut sink)?;
//! # Ok::<(), variant_algebra::VariantError>(())
//! ```

mod resolver;
mod sink;

pub use resolver::{DefaultLabelResolver, LabelResolver, TagLabelResolver};
pub use sink::ProfilingTraceSink;
