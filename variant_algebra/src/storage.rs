// Copyright 2026 the Variant Algebra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The storage block shared by [`Variant`](crate::Variant) handles.
//!
//! A block is immutable once built. Its buffer is never resized; every change to a variant swaps
//! in a whole new block.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use crate::error::VariantError;
use crate::kind::Kind;

/// One payload per [`Kind`].
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Storage {
    Int(i64),
    Float(f64),
    IntSeq(Box<[i64]>),
    FloatSeq(Box<[f64]>),
    Bytes(Box<[u8]>),
}

impl Storage {
    pub(crate) fn kind(&self) -> Kind {
        match self {
            Self::Int(_) => Kind::Int,
            Self::Float(_) => Kind::Float,
            Self::IntSeq(_) => Kind::IntSeq,
            Self::FloatSeq(_) => Kind::FloatSeq,
            Self::Bytes(_) => Kind::Bytes,
        }
    }

    pub(crate) fn element_count(&self) -> usize {
        match self {
            Self::Int(_) | Self::Float(_) => 1,
            Self::IntSeq(v) => v.len(),
            Self::FloatSeq(v) => v.len(),
            Self::Bytes(b) => b.len(),
        }
    }

    /// Always `element_count * element_size`.
    pub(crate) fn byte_len(&self) -> usize {
        self.element_count() * self.kind().element_size()
    }

    /// Scalars are non-zero tests, sequences test their sum, byte strings test their length.
    pub(crate) fn is_truthy(&self) -> bool {
        match self {
            Self::Int(x) => *x != 0,
            Self::Float(x) => *x != 0.0,
            Self::IntSeq(v) => v.iter().fold(0_i64, |acc, x| acc.wrapping_add(*x)) != 0,
            Self::FloatSeq(v) => v.iter().sum::<f64>() != 0.0,
            Self::Bytes(b) => !b.is_empty(),
        }
    }

    /// Encodes the buffer with little-endian elements.
    pub(crate) fn to_le_bytes(&self) -> Vec<u8> {
        match self {
            Self::Int(x) => x.to_le_bytes().to_vec(),
            Self::Float(x) => x.to_le_bytes().to_vec(),
            Self::IntSeq(v) => v.iter().flat_map(|x| x.to_le_bytes()).collect(),
            Self::FloatSeq(v) => v.iter().flat_map(|x| x.to_le_bytes()).collect(),
            Self::Bytes(b) => b.to_vec(),
        }
    }

    /// Rebuilds a block from a raw little-endian buffer.
    ///
    /// Scalar kinds need exactly one element; sequence kinds need a whole number of elements.
    pub(crate) fn from_le_bytes(kind: Kind, data: &[u8]) -> Result<Self, VariantError> {
        let size = kind.element_size();
        let bad_length = VariantError::BadLength {
            kind,
            byte_len: data.len(),
        };
        if data.len() % size != 0 || (kind.is_scalar() && data.len() != size) {
            return Err(bad_length);
        }
        Ok(match kind {
            Kind::Int => Self::Int(i64::from_le_bytes(words(data).next().ok_or(bad_length)?)),
            Kind::Float => Self::Float(f64::from_le_bytes(words(data).next().ok_or(bad_length)?)),
            Kind::IntSeq => Self::IntSeq(words(data).map(i64::from_le_bytes).collect()),
            Kind::FloatSeq => Self::FloatSeq(words(data).map(f64::from_le_bytes).collect()),
            Kind::Bytes => Self::Bytes(data.into()),
        })
    }
}

fn words(data: &[u8]) -> impl Iterator<Item = [u8; 8]> + '_ {
    data.chunks_exact(8).map(|chunk| {
        let mut word = [0_u8; 8];
        word.copy_from_slice(chunk);
        word
    })
}

fn write_list<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl fmt::Display for Storage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[", self.kind().name())?;
        match self {
            Self::Int(x) => write!(f, "{x}")?,
            Self::Float(x) => write!(f, "{x}")?,
            Self::IntSeq(v) => write_list(f, v)?,
            Self::FloatSeq(v) => write_list(f, v)?,
            Self::Bytes(b) => {
                for chunk in b.utf8_chunks() {
                    f.write_str(chunk.valid())?;
                    if !chunk.invalid().is_empty() {
                        f.write_str("\u{FFFD}")?;
                    }
                }
            }
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;

    #[test]
    fn byte_len_matches_layout() {
        assert_eq!(Storage::Int(3).byte_len(), 8);
        assert_eq!(Storage::IntSeq(vec![1, 2, 3].into()).byte_len(), 24);
        assert_eq!(Storage::FloatSeq(Box::default()).byte_len(), 0);
        assert_eq!(Storage::Bytes((*b"abcde").into()).byte_len(), 5);
    }

    #[test]
    fn raw_buffer_rebuilds_same_block() {
        let s = Storage::FloatSeq(vec![1.5, -2.0].into());
        let raw = s.to_le_bytes();
        assert_eq!(raw.len(), s.byte_len());
        assert_eq!(Storage::from_le_bytes(Kind::FloatSeq, &raw), Ok(s));
    }

    #[test]
    fn raw_buffer_rejects_partial_elements() {
        assert_eq!(
            Storage::from_le_bytes(Kind::IntSeq, &[0; 12]),
            Err(VariantError::BadLength {
                kind: Kind::IntSeq,
                byte_len: 12,
            })
        );
        assert!(Storage::from_le_bytes(Kind::Int, &[0; 16]).is_err());
        assert!(Storage::from_le_bytes(Kind::Float, &[]).is_err());
    }

    #[test]
    fn truthiness_by_kind() {
        assert!(!Storage::Int(0).is_truthy());
        assert!(Storage::Float(-0.5).is_truthy());
        assert!(!Storage::IntSeq(vec![2, -2].into()).is_truthy());
        assert!(Storage::FloatSeq(vec![0.0, 0.25].into()).is_truthy());
        assert!(!Storage::Bytes(Box::default()).is_truthy());
    }

    #[test]
    fn display_replaces_invalid_utf8() {
        let s = Storage::Bytes(vec![b'a', 0xff, b'b'].into());
        assert_eq!(s.to_string(), "string[a\u{FFFD}b]");
    }
}
