#![no_std]

extern crate alloc;

#[macro_use]
pub(crate) mod key_macros;

pub(crate) mod any;
pub(crate) mod entry;
pub(crate) mod errors;
pub(crate) mod key;
pub(crate) mod metadata;
pub(crate) mod owner;

pub mod utils;

pub use any::KeyInfo;
pub use entry::MetadataEntry;
pub use errors::MetadataErrorKind;
pub use key::{MetadataKey, MetadataKeyExt};
pub use metadata::Metadata;
pub use owner::HasMetadata;
