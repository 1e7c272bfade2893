use alloc::{boxed::Box, vec::Vec};
use core::fmt::{self, Debug, Formatter};
use tracing::debug;

use crate::{any::KeyInfo, entry::MetadataEntry, key::MetadataKey, utils::thread_safety::AnyThreadSafety};

/// Metadata entries of one owner.
///
/// The collection is either absent or holds at least one entry,
/// and its storage always fits the entries exactly.
/// Every entry has its own key, entries keep the order they were added in.
///
/// Mutating operations take the collection by value and return the one to keep,
/// because the storage may be reallocated or dropped.
#[derive(Default)]
pub struct Metadata {
    entries: Option<Box<[MetadataEntry]>>,
}

impl Metadata {
    /// Creates an absent collection, which doesn't allocate
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { entries: None }
    }

    #[inline]
    #[must_use]
    pub fn is_absent(&self) -> bool {
        self.entries.is_none()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.as_ref().map_or(0, |entries| entries.len())
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.is_absent()
    }

    #[inline]
    #[must_use]
    pub fn contains<K: MetadataKey>(&self, _key: &K) -> bool {
        self.position(&KeyInfo::of::<K>()).is_some()
    }

    /// Sets the value of the entry with an equal key, or appends the entry if there's none.
    ///
    /// This is the type-erased counterpart of [`MetadataKey::insert`].
    #[must_use]
    pub fn insert_entry(mut self, entry: MetadataEntry) -> Self {
        if let Some(index) = self.position(&entry.key) {
            if let Some(entries) = self.entries.as_mut() {
                entries[index].value = entry.value;
                debug!(key = entry.key.name, "Value replaced");
                return self;
            }
        }

        let key = entry.key;
        let entries = match self.entries.take() {
            Some(entries) => {
                let mut grown = Vec::with_capacity(entries.len() + 1);
                grown.extend(entries.into_vec());
                grown.push(entry);
                grown.into_boxed_slice()
            }
            None => Box::new([entry]) as Box<[MetadataEntry]>,
        };
        debug!(key = key.name, len = entries.len(), "Entry appended");

        Self { entries: Some(entries) }
    }

    pub(crate) fn position(&self, key: &KeyInfo) -> Option<usize> {
        self.entries.as_ref()?.iter().position(|entry| entry.key == *key)
    }

    pub(crate) fn keys(&self) -> impl Iterator<Item = KeyInfo> + '_ {
        self.entries.iter().flat_map(|entries| entries.iter().map(MetadataEntry::key))
    }

    pub(crate) fn value(&self, key: &KeyInfo) -> Option<&AnyThreadSafety> {
        self.entries
            .as_ref()?
            .iter()
            .find(|entry| entry.key == *key)
            .map(MetadataEntry::value)
    }

    pub(crate) fn value_mut(&mut self, key: &KeyInfo) -> Option<&mut AnyThreadSafety> {
        self.entries
            .as_mut()?
            .iter_mut()
            .find(|entry| entry.key == *key)
            .map(|entry| &mut *entry.value)
    }

    /// Removes the entry under `key`, keeping the order of the rest.
    /// The collection becomes absent when the last entry is removed.
    pub(crate) fn remove(mut self, key: &KeyInfo) -> (Self, Option<MetadataEntry>) {
        let Some(index) = self.position(key) else {
            return (self, None);
        };
        let Some(entries) = self.entries.take() else {
            return (self, None);
        };

        let len = entries.len() - 1;
        if len == 0 {
            let removed = entries.into_vec().pop();
            debug!(key = key.name, "Last entry removed");
            return (Self::new(), removed);
        }

        let mut entries = entries.into_vec();
        let mut shrunk = Vec::with_capacity(len);
        let mut tail = entries.split_off(index + 1);
        let removed = entries.pop();
        shrunk.append(&mut entries);
        shrunk.append(&mut tail);
        debug!(key = key.name, len, "Entry removed");

        (
            Self {
                entries: Some(shrunk.into_boxed_slice()),
            },
            removed,
        )
    }
}

impl Debug for Metadata {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.entries {
            Some(_) => f.debug_list().entries(self.keys().map(|key| key.name)).finish(),
            None => f.write_str("Absent"),
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::Metadata;
    use crate::{any::KeyInfo, entry::MetadataEntry};

    use alloc::{
        boxed::Box,
        format,
        string::{String, ToString as _},
        vec::Vec,
    };
    use tracing_test::traced_test;

    struct A;
    struct B;
    struct C;

    fn entry<K: 'static>(value: u32) -> MetadataEntry {
        MetadataEntry::from_parts(KeyInfo::of::<K>(), Box::new(value))
    }

    fn keys(metadata: &Metadata) -> Vec<KeyInfo> {
        metadata.keys().collect()
    }

    #[test]
    fn test_new_is_absent() {
        let metadata = Metadata::new();

        assert!(metadata.is_absent());
        assert!(metadata.is_empty());
        assert_eq!(metadata.len(), 0);
    }

    #[test]
    #[traced_test]
    fn test_insert_entry_appends_exact_fit() {
        let metadata = Metadata::new().insert_entry(entry::<A>(1)).insert_entry(entry::<B>(2));

        assert_eq!(metadata.len(), 2);
        assert_eq!(keys(&metadata), [KeyInfo::of::<A>(), KeyInfo::of::<B>()]);
    }

    #[test]
    #[traced_test]
    fn test_insert_entry_replaces_in_place() {
        let metadata = Metadata::new()
            .insert_entry(entry::<A>(1))
            .insert_entry(entry::<B>(2))
            .insert_entry(entry::<A>(3));

        assert_eq!(keys(&metadata), [KeyInfo::of::<A>(), KeyInfo::of::<B>()]);
        assert_eq!(
            metadata.value(&KeyInfo::of::<A>()).and_then(|value| value.downcast_ref::<u32>()),
            Some(&3)
        );
    }

    #[test]
    #[traced_test]
    fn test_remove_keeps_order() {
        let metadata = Metadata::new()
            .insert_entry(entry::<A>(1))
            .insert_entry(entry::<B>(2))
            .insert_entry(entry::<C>(3));

        let (metadata, removed) = metadata.remove(&KeyInfo::of::<B>());

        assert_eq!(removed.map(|entry| entry.key()), Some(KeyInfo::of::<B>()));
        assert_eq!(keys(&metadata), [KeyInfo::of::<A>(), KeyInfo::of::<C>()]);
    }

    #[test]
    #[traced_test]
    fn test_remove_first_and_last() {
        let metadata = Metadata::new()
            .insert_entry(entry::<A>(1))
            .insert_entry(entry::<B>(2))
            .insert_entry(entry::<C>(3));

        let (metadata, _) = metadata.remove(&KeyInfo::of::<A>());
        assert_eq!(keys(&metadata), [KeyInfo::of::<B>(), KeyInfo::of::<C>()]);

        let (metadata, _) = metadata.remove(&KeyInfo::of::<C>());
        assert_eq!(keys(&metadata), [KeyInfo::of::<B>()]);
    }

    #[test]
    #[traced_test]
    fn test_remove_single_collapses() {
        let (metadata, removed) = Metadata::new().insert_entry(entry::<A>(1)).remove(&KeyInfo::of::<A>());

        assert!(removed.is_some());
        assert!(metadata.is_absent());
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let (metadata, removed) = Metadata::new().remove(&KeyInfo::of::<A>());
        assert!(removed.is_none());
        assert!(metadata.is_absent());

        let (metadata, removed) = Metadata::new().insert_entry(entry::<A>(1)).remove(&KeyInfo::of::<B>());
        assert!(removed.is_none());
        assert_eq!(keys(&metadata), [KeyInfo::of::<A>()]);
    }

    #[test]
    fn test_debug_lists_keys() {
        assert_eq!(format!("{:?}", Metadata::new()), "Absent");

        let metadata = Metadata::new().insert_entry(entry::<A>(1));
        let debug: String = format!("{metadata:?}");
        assert!(debug.contains("::A"));
    }
}
