// Copyright 2026 the Variant Algebra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The [`Variant`] handle.
//!
//! A variant is a thin, cloneable handle to a shared storage block. Cloning shares the block;
//! dropping the last handle frees it. Blocks are immutable, so handles can be read from several
//! threads at once. The only in-place change a handle supports is [`Variant::set`], which rebinds
//! this handle to a new block and leaves every other handle untouched.

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use crate::error::VariantError;
use crate::kind::{Kind, TypeTag};
use crate::storage::Storage;

/// A reference-counted tagged value.
///
/// A default-constructed variant is *unset*: it is falsy, equal only to another unset variant,
/// and every typed read on it yields the default value.
#[derive(Clone, Default, PartialEq)]
pub struct Variant {
    storage: Option<Arc<Storage>>,
}

impl Variant {
    /// Creates an unset variant.
    #[must_use]
    #[inline]
    pub const fn new() -> Self {
        Self { storage: None }
    }

    pub(crate) fn from_storage(storage: Storage) -> Self {
        Self {
            storage: Some(Arc::new(storage)),
        }
    }

    #[inline]
    pub(crate) fn storage(&self) -> Option<&Storage> {
        self.storage.as_deref()
    }

    /// Builds a variant from a type tag and a raw little-endian buffer.
    ///
    /// This is the inverse of [`Variant::to_le_bytes`]. The buffer must hold a whole number of
    /// elements, and exactly one for the scalar kinds.
    pub fn from_tagged_bytes(tag: TypeTag, data: &[u8]) -> Result<Self, VariantError> {
        let kind = Kind::from_tag(tag).ok_or(VariantError::UnknownTag(tag))?;
        Storage::from_le_bytes(kind, data).map(Self::from_storage)
    }

    /// Returns the raw buffer with little-endian elements. Empty if unset.
    #[must_use]
    pub fn to_le_bytes(&self) -> Vec<u8> {
        self.storage().map(Storage::to_le_bytes).unwrap_or_default()
    }

    /// Rebinds this handle to `value`.
    ///
    /// The old block is released if this was its last handle. Other handles to it keep seeing
    /// the old value.
    pub fn set(&mut self, value: impl Into<Self>) {
        *self = value.into();
    }

    /// Rebinds this handle to unset.
    pub fn clear(&mut self) {
        self.storage = None;
    }

    /// Returns `true` unless the variant is unset.
    #[must_use]
    #[inline]
    pub fn is_set(&self) -> bool {
        self.storage.is_some()
    }

    /// Returns `true` if the variant holds `kind`.
    #[must_use]
    #[inline]
    pub fn is_kind(&self, kind: Kind) -> bool {
        self.kind() == Some(kind)
    }

    /// Returns `true` if the variant's type tag is `tag`.
    #[must_use]
    #[inline]
    pub fn is_tag(&self, tag: TypeTag) -> bool {
        self.tag() == tag
    }

    /// Returns the stored kind, or `None` if unset.
    #[must_use]
    pub fn kind(&self) -> Option<Kind> {
        self.storage().map(Storage::kind)
    }

    /// Returns the type tag, [`TypeTag::UNSET`] if unset.
    #[must_use]
    pub fn tag(&self) -> TypeTag {
        self.kind().map_or(TypeTag::UNSET, Kind::tag)
    }

    /// Number of elements: 1 for scalars, the length for sequences and byte strings, 0 if unset.
    #[must_use]
    pub fn element_count(&self) -> usize {
        self.storage().map_or(0, Storage::element_count)
    }

    /// Kind of a single element, or `None` if unset.
    #[must_use]
    pub fn element_kind(&self) -> Option<Kind> {
        self.kind().map(Kind::element_kind)
    }

    /// Size of the stored buffer in bytes.
    #[must_use]
    pub fn byte_len(&self) -> usize {
        self.storage().map_or(0, Storage::byte_len)
    }

    /// Number of handles sharing this variant's block, 0 if unset.
    #[must_use]
    pub fn ref_count(&self) -> usize {
        self.storage.as_ref().map_or(0, Arc::strong_count)
    }

    /// Returns `true` if both handles point at the same block.
    #[must_use]
    pub fn shares_storage(&self, other: &Self) -> bool {
        match (&self.storage, &other.storage) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Reads the value as `T`, failing if the stored kind is not `T::KIND`.
    pub fn try_get<T: FromVariant>(&self) -> Result<T, VariantError> {
        T::read(self).ok_or(VariantError::KindMismatch {
            expected: T::KIND,
            found: self.kind(),
        })
    }

    /// Reads the value as `T`, or `T::default()` if the stored kind is not `T::KIND`.
    #[must_use]
    pub fn get<T: FromVariant>(&self) -> T {
        T::read(self).unwrap_or_default()
    }

    /// Truthiness.
    ///
    /// Scalars are non-zero tests, sequences test the sum of their elements, byte strings test
    /// for a non-zero length. Unset is false.
    #[must_use]
    pub fn to_bool(&self) -> bool {
        self.storage().is_some_and(Storage::is_truthy)
    }

    /// Copies out a byte string; empty for any other kind.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        match self.storage() {
            Some(Storage::Bytes(b)) => b.to_vec(),
            _ => Vec::new(),
        }
    }

    /// Copies out a byte string as text, replacing invalid UTF-8; empty for any other kind.
    #[must_use]
    pub fn to_string_lossy(&self) -> String {
        match self.storage() {
            Some(Storage::Bytes(b)) => String::from_utf8_lossy(b).into_owned(),
            _ => String::new(),
        }
    }

    /// Copies out an integer sequence; empty for any other kind.
    #[must_use]
    pub fn to_veci(&self) -> Vec<i64> {
        self.get()
    }

    /// Copies out a float sequence; empty for any other kind.
    #[must_use]
    pub fn to_vecf(&self) -> Vec<f64> {
        self.get()
    }

    /// Renders `<kindname>[<elements>]`, e.g. `int[42]`, `vecf[1.5, 2.5]` or `string[abc]`.
    #[must_use]
    pub fn dump(&self) -> String {
        use alloc::string::ToString;
        self.to_string()
    }
}

/// Types that [`Variant::get`] can read.
pub trait FromVariant: Sized + Default {
    /// The kind a value of this type is read from.
    const KIND: Kind;

    /// Returns `None` unless `variant` holds [`Self::KIND`].
    fn read(variant: &Variant) -> Option<Self>;
}

impl FromVariant for i64 {
    const KIND: Kind = Kind::Int;

    fn read(variant: &Variant) -> Option<Self> {
        match variant.storage()? {
            Storage::Int(x) => Some(*x),
            _ => None,
        }
    }
}

impl FromVariant for f64 {
    const KIND: Kind = Kind::Float;

    fn read(variant: &Variant) -> Option<Self> {
        match variant.storage()? {
            Storage::Float(x) => Some(*x),
            _ => None,
        }
    }
}

impl FromVariant for Vec<i64> {
    const KIND: Kind = Kind::IntSeq;

    fn read(variant: &Variant) -> Option<Self> {
        match variant.storage()? {
            Storage::IntSeq(v) => Some(v.to_vec()),
            _ => None,
        }
    }
}

impl FromVariant for Vec<f64> {
    const KIND: Kind = Kind::FloatSeq;

    fn read(variant: &Variant) -> Option<Self> {
        match variant.storage()? {
            Storage::FloatSeq(v) => Some(v.to_vec()),
            _ => None,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.storage() {
            Some(s) => fmt::Display::fmt(s, f),
            None => f.write_str("unset[]"),
        }
    }
}

impl fmt::Debug for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Variant({self})")
    }
}

impl From<bool> for Variant {
    /// Booleans are int scalars holding 0 or 1.
    fn from(value: bool) -> Self {
        Self::from_storage(Storage::Int(i64::from(value)))
    }
}

impl From<i64> for Variant {
    fn from(value: i64) -> Self {
        Self::from_storage(Storage::Int(value))
    }
}

impl From<f64> for Variant {
    fn from(value: f64) -> Self {
        Self::from_storage(Storage::Float(value))
    }
}

impl From<&[u8]> for Variant {
    fn from(value: &[u8]) -> Self {
        Self::from_storage(Storage::Bytes(value.into()))
    }
}

impl From<Vec<u8>> for Variant {
    fn from(value: Vec<u8>) -> Self {
        Self::from_storage(Storage::Bytes(value.into_boxed_slice()))
    }
}

impl From<&str> for Variant {
    fn from(value: &str) -> Self {
        Self::from(value.as_bytes())
    }
}

impl From<String> for Variant {
    fn from(value: String) -> Self {
        Self::from(value.into_bytes())
    }
}

impl From<&[i64]> for Variant {
    fn from(value: &[i64]) -> Self {
        Self::from_storage(Storage::IntSeq(value.into()))
    }
}

impl From<Vec<i64>> for Variant {
    fn from(value: Vec<i64>) -> Self {
        Self::from_storage(Storage::IntSeq(value.into_boxed_slice()))
    }
}

impl From<&[f64]> for Variant {
    fn from(value: &[f64]) -> Self {
        Self::from_storage(Storage::FloatSeq(value.into()))
    }
}

impl From<Vec<f64>> for Variant {
    fn from(value: Vec<f64>) -> Self {
        Self::from_storage(Storage::FloatSeq(value.into_boxed_slice()))
    }
}
