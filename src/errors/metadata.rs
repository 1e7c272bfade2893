use crate::any::KeyInfo;

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetadataErrorKind {
    #[error("Incorrect value type stored under key {key}. Expected: {expected}")]
    TypeMismatch { key: KeyInfo, expected: KeyInfo },
}
