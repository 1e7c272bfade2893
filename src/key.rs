use core::any::type_name;
use tracing::{debug, error};

use crate::{
    any::KeyInfo,
    entry::MetadataEntry,
    errors::MetadataErrorKind,
    metadata::Metadata,
    utils::thread_safety::{SendSafety, SyncSafety},
};

/// Typed key of a metadata slot.
///
/// A key is identified by its type: all values of one key type address the same slot,
/// whatever instance is used, and whatever fields or `PartialEq` impl the key type has.
/// Compare keys by slot with [`MetadataKeyExt::same_key`] or [`MetadataKeyExt::info`].
/// Usually keys are unit structs declared with [`crate::metadata_key!`].
///
/// ```
/// use metakey::{metadata_key, Metadata, MetadataKey as _};
///
/// metadata_key! {
///     struct Title: &'static str;
/// }
///
/// let metadata = Title.insert(Metadata::new(), "index");
/// assert_eq!(Title.get(&metadata), Some(&"index"));
///
/// let metadata = Title.remove(metadata);
/// assert!(metadata.is_absent());
/// ```
pub trait MetadataKey: Sized + 'static {
    type Value: SendSafety + SyncSafety + 'static;

    /// Gets the value stored under the key
    ///
    /// # Notes
    /// A value of an unexpected type is logged and treated as missing,
    /// use [`Self::try_get`] to handle it.
    #[must_use]
    fn get<'a>(&self, metadata: &'a Metadata) -> Option<&'a Self::Value> {
        match self.try_get(metadata) {
            Ok(value) => value,
            Err(err) => {
                error!("{}", err);
                None
            }
        }
    }

    /// Gets the value stored under the key
    ///
    /// # Errors
    /// Returns [`MetadataErrorKind::TypeMismatch`] if the stored value isn't [`Self::Value`].
    /// This can only occur for entries inserted by [`Metadata::insert_entry`].
    fn try_get<'a>(&self, metadata: &'a Metadata) -> Result<Option<&'a Self::Value>, MetadataErrorKind> {
        let key = KeyInfo::of::<Self>();
        let Some(value) = metadata.value(&key) else {
            return Ok(None);
        };

        match value.downcast_ref() {
            Some(value) => Ok(Some(value)),
            None => Err(MetadataErrorKind::TypeMismatch {
                key,
                expected: KeyInfo::of::<Self::Value>(),
            }),
        }
    }

    #[must_use]
    fn get_mut<'a>(&self, metadata: &'a mut Metadata) -> Option<&'a mut Self::Value> {
        let key = KeyInfo::of::<Self>();
        let value = metadata.value_mut(&key)?;

        if value.is::<Self::Value>() {
            value.downcast_mut()
        } else {
            error!(
                "{}",
                MetadataErrorKind::TypeMismatch {
                    key,
                    expected: KeyInfo::of::<Self::Value>(),
                }
            );
            None
        }
    }

    /// Sets the value under the key, or removes it if `value` is `None`.
    /// Returns the collection to keep in place of the passed one.
    ///
    /// - An existing value is replaced in place.
    /// - A new value is appended, the collection grows by one.
    /// - Removal keeps the order of the other entries, removing the last entry makes the collection absent.
    #[must_use]
    fn set(&self, metadata: Metadata, value: Option<Self::Value>) -> Metadata {
        match value {
            Some(value) => self.insert(metadata, value),
            None => self.remove(metadata),
        }
    }

    #[inline]
    #[must_use]
    fn insert(&self, metadata: Metadata, value: Self::Value) -> Metadata {
        metadata.insert_entry(MetadataEntry::new::<Self>(value))
    }

    #[inline]
    #[must_use]
    fn remove(&self, metadata: Metadata) -> Metadata {
        metadata.remove(&KeyInfo::of::<Self>()).0
    }

    /// Removes the value under the key and returns it with the collection to keep
    #[must_use]
    fn take(&self, metadata: Metadata) -> (Metadata, Option<Self::Value>) {
        let (metadata, entry) = metadata.remove(&KeyInfo::of::<Self>());
        let Some(entry) = entry else {
            debug!(key = type_name::<Self>(), "Nothing to take");
            return (metadata, None);
        };

        let (key, value) = entry.into_parts();
        match value.downcast::<Self::Value>() {
            Ok(value) => (metadata, Some(*value)),
            Err(_) => {
                error!(
                    "{}",
                    MetadataErrorKind::TypeMismatch {
                        key,
                        expected: KeyInfo::of::<Self::Value>(),
                    }
                );
                (metadata, None)
            }
        }
    }
}

/// Slot identity of a key, derived from its type only
pub trait MetadataKeyExt: MetadataKey {
    #[must_use]
    fn info(&self) -> KeyInfo;

    /// Returns `true` if both keys address the same slot
    #[must_use]
    fn same_key<K: MetadataKey>(&self, other: &K) -> bool;
}

impl<T: MetadataKey> MetadataKeyExt for T {
    #[inline]
    fn info(&self) -> KeyInfo {
        KeyInfo::of::<T>()
    }

    #[inline]
    fn same_key<K: MetadataKey>(&self, _other: &K) -> bool {
        KeyInfo::of::<T>() == KeyInfo::of::<K>()
    }
}
