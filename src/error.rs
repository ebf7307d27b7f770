use thiserror::Error;

/// Errors raised by `OrderedCollection`.
///
/// Out-of-range and missing arguments are normalized rather than reported,
/// so this only covers operations that have no meaningful result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollectionError {
    #[error("invalid operation: {0}")]
    InvalidOperation(&'static str),
}
