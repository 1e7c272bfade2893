mod metadata;

pub use metadata::MetadataErrorKind;
