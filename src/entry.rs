use alloc::boxed::Box;
use core::fmt::{self, Debug, Formatter};

use crate::{
    any::KeyInfo,
    key::MetadataKey,
    utils::thread_safety::{AnyThreadSafety, BoxAnyThreadSafety},
};

/// A key with its type-erased value
pub struct MetadataEntry {
    pub(crate) key: KeyInfo,
    pub(crate) value: BoxAnyThreadSafety,
}

impl MetadataEntry {
    #[inline]
    #[must_use]
    pub fn new<K: MetadataKey>(value: K::Value) -> Self {
        Self {
            key: KeyInfo::of::<K>(),
            value: Box::new(value),
        }
    }

    /// Creates an entry from an already erased value.
    ///
    /// # Notes
    /// Nothing checks that `value` has the type the key declares.
    /// A wrong type is reported later by [`MetadataKey::try_get`].
    #[inline]
    #[must_use]
    pub fn from_parts(key: KeyInfo, value: BoxAnyThreadSafety) -> Self {
        Self { key, value }
    }

    #[inline]
    #[must_use]
    pub fn key(&self) -> KeyInfo {
        self.key
    }

    #[inline]
    #[must_use]
    pub fn value(&self) -> &AnyThreadSafety {
        &*self.value
    }

    #[inline]
    #[must_use]
    pub fn into_parts(self) -> (KeyInfo, BoxAnyThreadSafety) {
        (self.key, self.value)
    }
}

impl Debug for MetadataEntry {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("MetadataEntry").field("key", &self.key.name).finish_non_exhaustive()
    }
}
