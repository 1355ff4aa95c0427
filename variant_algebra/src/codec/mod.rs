// Copyright 2026 the Variant Algebra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A compact, framed binary form for variants.
//!
//! ```text
//! tag: 4 bytes (the kind's type tag; 0000 for unset, which ends the frame)
//! count: ULEB128 element count
//! payload:
//!   int kinds:   `count` SLEB128 values
//!   float kinds: `count` x 8 bytes, little-endian `f64::to_bits`
//!   byte string: `count` raw bytes
//! ```
//!
//! Scalar kinds always carry a count of 1.

use alloc::vec::Vec;
use core::fmt;

use crate::kind::{Kind, TypeTag};
use crate::storage::Storage;
use crate::variant::Variant;

mod leb128;

/// A decoding error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DecodeError {
    /// Input ended in the middle of a frame.
    UnexpectedEof,
    /// A varint was malformed or overflowed 64 bits.
    InvalidVarint,
    /// An offset or length did not fit in `usize`.
    OutOfBounds,
    /// The frame's tag names no kind.
    UnknownTag(TypeTag),
    /// A scalar frame declared a count other than 1.
    BadScalarCount(u64),
    /// Bytes were left after the frame.
    TrailingBytes,
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedEof => write!(f, "unexpected end of input"),
            Self::InvalidVarint => write!(f, "invalid varint"),
            Self::OutOfBounds => write!(f, "offset out of bounds"),
            Self::UnknownTag(tag) => write!(f, "unknown type tag `{tag}`"),
            Self::BadScalarCount(n) => write!(f, "scalar frame with {n} elements"),
            Self::TrailingBytes => write!(f, "trailing bytes after frame"),
        }
    }
}

impl core::error::Error for DecodeError {}

/// Appends the framed form of `value` to `out`.
pub fn encode(value: &Variant, out: &mut Vec<u8>) {
    out.extend_from_slice(&value.tag().chars());
    let Some(storage) = value.storage() else {
        return;
    };
    leb128::write_u64(
        out,
        u64::try_from(storage.element_count()).unwrap_or(u64::MAX),
    );
    match storage {
        Storage::Int(x) => leb128::write_i64(out, *x),
        Storage::IntSeq(v) => {
            for x in v {
                leb128::write_i64(out, *x);
            }
        }
        Storage::Float(x) => out.extend_from_slice(&x.to_bits().to_le_bytes()),
        Storage::FloatSeq(v) => {
            for x in v {
                out.extend_from_slice(&x.to_bits().to_le_bytes());
            }
        }
        Storage::Bytes(b) => out.extend_from_slice(b),
    }
}

/// Returns the framed form of `value`.
#[must_use]
pub fn encode_to_vec(value: &Variant) -> Vec<u8> {
    let mut out = Vec::new();
    encode(value, &mut out);
    out
}

/// Decodes one frame starting at `offset`, advancing `offset` past it.
pub fn decode(bytes: &[u8], offset: &mut usize) -> Result<Variant, DecodeError> {
    let tag = TypeTag::from_chars(take_array(bytes, offset)?);
    if tag == TypeTag::UNSET {
        return Ok(Variant::new());
    }
    let kind = Kind::from_tag(tag).ok_or(DecodeError::UnknownTag(tag))?;
    let declared = leb128::read_u64(bytes, offset)?;
    if kind.is_scalar() && declared != 1 {
        return Err(DecodeError::BadScalarCount(declared));
    }
    let count = usize::try_from(declared).map_err(|_| DecodeError::OutOfBounds)?;
    // Every element takes at least one byte, so the remaining input bounds the allocation.
    let capacity = count.min(bytes.len().saturating_sub(*offset));

    let storage = match kind {
        Kind::Int => Storage::Int(leb128::read_i64(bytes, offset)?),
        Kind::Float => Storage::Float(read_f64(bytes, offset)?),
        Kind::IntSeq => {
            let mut v = Vec::with_capacity(capacity);
            for _ in 0..count {
                v.push(leb128::read_i64(bytes, offset)?);
            }
            Storage::IntSeq(v.into_boxed_slice())
        }
        Kind::FloatSeq => {
            let mut v = Vec::with_capacity(capacity);
            for _ in 0..count {
                v.push(read_f64(bytes, offset)?);
            }
            Storage::FloatSeq(v.into_boxed_slice())
        }
        Kind::Bytes => Storage::Bytes(take(bytes, offset, count)?.into()),
    };
    Ok(Variant::from_storage(storage))
}

/// Decodes a buffer holding exactly one frame.
pub fn decode_exact(bytes: &[u8]) -> Result<Variant, DecodeError> {
    let mut offset = 0;
    let value = decode(bytes, &mut offset)?;
    if offset != bytes.len() {
        return Err(DecodeError::TrailingBytes);
    }
    Ok(value)
}

/// Writes the framed form of `value` to `w`.
#[cfg(feature = "std")]
pub fn write_to<W: std::io::Write>(value: &Variant, w: &mut W) -> std::io::Result<()> {
    w.write_all(&encode_to_vec(value))
}

/// Reads `r` to the end and decodes exactly one frame from it.
#[cfg(feature = "std")]
pub fn read_from<R: std::io::Read>(r: &mut R) -> std::io::Result<Variant> {
    let mut buf = Vec::new();
    r.read_to_end(&mut buf)?;
    decode_exact(&buf).map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
}

fn take<'a>(bytes: &'a [u8], offset: &mut usize, len: usize) -> Result<&'a [u8], DecodeError> {
    let end = offset.checked_add(len).ok_or(DecodeError::OutOfBounds)?;
    let slice = bytes.get(*offset..end).ok_or(DecodeError::UnexpectedEof)?;
    *offset = end;
    Ok(slice)
}

fn take_array<const N: usize>(bytes: &[u8], offset: &mut usize) -> Result<[u8; N], DecodeError> {
    let mut out = [0_u8; N];
    out.copy_from_slice(take(bytes, offset, N)?);
    Ok(out)
}

fn read_f64(bytes: &[u8], offset: &mut usize) -> Result<f64, DecodeError> {
    Ok(f64::from_bits(u64::from_le_bytes(take_array(
        bytes, offset,
    )?)))
}
