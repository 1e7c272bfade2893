/// Declares unit metadata keys.
///
/// Each key gets [`crate::MetadataKey`] with the given value type,
/// common derives and a [`core::fmt::Display`] impl with the key type name.
///
/// ```
/// use metakey::metadata_key;
///
/// metadata_key! {
///     /// Markup id of a component
///     pub struct MarkupId: String;
///     struct Visits: u32;
/// }
/// ```
#[macro_export]
macro_rules! metadata_key {
    // === Base case ===
    () => {};

    // === Single key ===
    // Example: metadata_key! { pub struct Title: String; }
    (
        $(#[$attr:meta])*
        $vis:vis struct $name:ident: $value:ty;
        $($rest:tt)*
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
        $vis struct $name;

        impl $crate::MetadataKey for $name {
            type Value = $value;
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Display::fmt(&$crate::KeyInfo::of::<$name>(), f)
            }
        }

        $crate::metadata_key! { $($rest)* }
    };
}
