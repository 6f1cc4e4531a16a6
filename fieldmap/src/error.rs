//! Error types produced by the mapper.

use thiserror::Error;

/// Errors that can occur while mapping one value onto another.
///
/// The variants classify the failure and carry no further state. The path of
/// a failing field is available from [`crate::MapReport`] when a failure is
/// suppressed at a struct field boundary.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[non_exhaustive]
pub enum MapError {
    /// The destination cannot be written through, for example an `Arc`
    /// shared with other owners.
    #[error("mapping destination is not writable")]
    NotAddressableDestination,

    /// The destination's shape matches none of the supported mapping cases
    /// for the given source.
    #[error("destination kind is not supported for this source")]
    UnsupportedKind,
}

/// Result alias used throughout the crate.
pub type MapResult<T> = Result<T, MapError>;
