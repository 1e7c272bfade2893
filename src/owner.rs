use core::mem;

use crate::{key::MetadataKey, metadata::Metadata};

/// An object owning a metadata collection.
///
/// Provided methods always store the collection returned by the key operation back into the owner.
///
/// ```
/// use metakey::{metadata_key, HasMetadata, Metadata};
///
/// metadata_key! {
///     struct Tooltip: String;
/// }
///
/// #[derive(Default)]
/// struct Component {
///     metadata: Metadata,
/// }
///
/// impl HasMetadata for Component {
///     fn metadata(&self) -> &Metadata {
///         &self.metadata
///     }
///
///     fn metadata_mut(&mut self) -> &mut Metadata {
///         &mut self.metadata
///     }
/// }
///
/// let mut component = Component::default();
/// component.set_metadata(&Tooltip, Some("Save".to_owned()));
/// assert_eq!(component.get_metadata(&Tooltip).map(String::as_str), Some("Save"));
/// ```
pub trait HasMetadata {
    #[must_use]
    fn metadata(&self) -> &Metadata;

    #[must_use]
    fn metadata_mut(&mut self) -> &mut Metadata;

    #[inline]
    #[must_use]
    fn get_metadata<K: MetadataKey>(&self, key: &K) -> Option<&K::Value> {
        key.get(self.metadata())
    }

    #[inline]
    #[must_use]
    fn get_metadata_mut<K: MetadataKey>(&mut self, key: &K) -> Option<&mut K::Value> {
        key.get_mut(self.metadata_mut())
    }

    /// Sets the value under `key`, or removes it if `value` is `None`
    #[inline]
    fn set_metadata<K: MetadataKey>(&mut self, key: &K, value: Option<K::Value>) {
        let metadata = mem::take(self.metadata_mut());
        *self.metadata_mut() = key.set(metadata, value);
    }

    /// Removes the value under `key` and returns it
    #[inline]
    fn remove_metadata<K: MetadataKey>(&mut self, key: &K) -> Option<K::Value> {
        let (metadata, value) = key.take(mem::take(self.metadata_mut()));
        *self.metadata_mut() = metadata;
        value
    }
}

impl HasMetadata for Metadata {
    #[inline]
    fn metadata(&self) -> &Metadata {
        self
    }

    #[inline]
    fn metadata_mut(&mut self) -> &mut Metadata {
        self
    }
}
