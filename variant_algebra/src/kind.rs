// Copyright 2026 the Variant Algebra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The closed set of value kinds and their packed type tags.
//!
//! Kind checks are plain integer comparisons: a [`TypeTag`] is four ASCII characters packed into a
//! `u32`, usable as a serialization and debugging label.

use core::fmt;

/// A packed four-character identifier for a [`Kind`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeTag(u32);

impl TypeTag {
    /// Tag for [`Kind::Int`].
    pub const INT: Self = Self::from_chars(*b"ix64");
    /// Tag for [`Kind::Float`].
    pub const FLOAT: Self = Self::from_chars(*b"fx64");
    /// Tag for [`Kind::IntSeq`].
    pub const INT_SEQ: Self = Self::from_chars(*b"iv64");
    /// Tag for [`Kind::FloatSeq`].
    pub const FLOAT_SEQ: Self = Self::from_chars(*b"fv64");
    /// Tag for [`Kind::Bytes`].
    pub const BYTES: Self = Self::from_chars(*b"strx");
    /// Reserved tag for an unset value. No [`Kind`] maps to it.
    pub const UNSET: Self = Self(0);

    /// Packs four characters, first character in the most significant byte.
    #[must_use]
    #[inline]
    pub const fn from_chars(chars: [u8; 4]) -> Self {
        Self(u32::from_be_bytes(chars))
    }

    /// Creates a tag from its packed encoding.
    #[must_use]
    #[inline]
    pub const fn from_u32(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the packed encoding.
    #[must_use]
    #[inline]
    pub const fn as_u32(self) -> u32 {
        self.0
    }

    /// Returns the four characters of this tag.
    #[must_use]
    #[inline]
    pub const fn chars(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in self.chars() {
            write!(f, "{}", b.escape_ascii())?;
        }
        Ok(())
    }
}

/// Which concrete representation a [`Variant`](crate::Variant) holds.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    /// One signed 64-bit integer.
    Int,
    /// One 64-bit float.
    Float,
    /// A sequence of signed 64-bit integers.
    IntSeq,
    /// A sequence of 64-bit floats.
    FloatSeq,
    /// A raw byte string.
    Bytes,
}

impl Kind {
    /// Every kind, in tag order.
    pub const ALL: [Self; 5] = [
        Self::Int,
        Self::Float,
        Self::IntSeq,
        Self::FloatSeq,
        Self::Bytes,
    ];

    /// Returns the type tag for this kind.
    #[must_use]
    pub const fn tag(self) -> TypeTag {
        match self {
            Self::Int => TypeTag::INT,
            Self::Float => TypeTag::FLOAT,
            Self::IntSeq => TypeTag::INT_SEQ,
            Self::FloatSeq => TypeTag::FLOAT_SEQ,
            Self::Bytes => TypeTag::BYTES,
        }
    }

    /// Looks up the kind for `tag`.
    #[must_use]
    pub fn from_tag(tag: TypeTag) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.tag() == tag)
    }

    /// Returns the name used by [`Variant::dump`](crate::Variant::dump).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Float => "flt",
            Self::IntSeq => "veci",
            Self::FloatSeq => "vecf",
            Self::Bytes => "string",
        }
    }

    /// Returns the kind of a single element.
    ///
    /// Sequences map to their scalar counterpart; scalars and byte strings map to themselves.
    #[must_use]
    pub const fn element_kind(self) -> Self {
        match self {
            Self::Int | Self::IntSeq => Self::Int,
            Self::Float | Self::FloatSeq => Self::Float,
            Self::Bytes => Self::Bytes,
        }
    }

    /// Size in bytes of one element.
    #[must_use]
    pub const fn element_size(self) -> usize {
        match self {
            Self::Int | Self::IntSeq => size_of::<i64>(),
            Self::Float | Self::FloatSeq => size_of::<f64>(),
            Self::Bytes => 1,
        }
    }

    /// Returns `true` for the single-element kinds.
    #[must_use]
    #[inline]
    pub const fn is_scalar(self) -> bool {
        matches!(self, Self::Int | Self::Float)
    }

    /// Returns `true` for the numeric sequence kinds.
    #[must_use]
    #[inline]
    pub const fn is_sequence(self) -> bool {
        matches!(self, Self::IntSeq | Self::FloatSeq)
    }

    /// Returns `true` if elements are floats.
    #[must_use]
    #[inline]
    pub const fn is_float(self) -> bool {
        matches!(self, Self::Float | Self::FloatSeq)
    }

    /// Returns `true` for every kind except [`Kind::Bytes`].
    #[must_use]
    #[inline]
    pub const fn is_numeric(self) -> bool {
        !matches!(self, Self::Bytes)
    }

    /// Returns the float kind an integer kind promotes to.
    #[must_use]
    pub const fn promoted(self) -> Option<Self> {
        match self {
            Self::Int => Some(Self::Float),
            Self::IntSeq => Some(Self::FloatSeq),
            Self::Float | Self::FloatSeq | Self::Bytes => None,
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
