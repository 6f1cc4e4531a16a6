//! The structural mapper.
//!
//! [`Mapper::map`] copies a source value into a destination of a possibly
//! different type by matching struct fields by name. Control flows from the
//! dispatcher, which classifies the destination, into the struct, pointer and
//! collection strategies, which recurse back into the dispatcher for nested
//! values.
//!
//! # Examples
//!
//! ```
//! use fieldmap::{Mapper, Reflect};
//!
//! #[derive(Clone, Default, Reflect)]
//! struct Person {
//!     name: String,
//!     age: u32,
//!     email: String,
//! }
//!
//! #[derive(Clone, Debug, Default, PartialEq, Reflect)]
//! struct PersonSummary {
//!     name: String,
//!     age: u32,
//! }
//!
//! let person = Person { name: "Ada".into(), age: 36, email: "ada@example.com".into() };
//! let summary: PersonSummary = Mapper::default().map_into(&person)?;
//! assert_eq!(summary, PersonSummary { name: "Ada".into(), age: 36 });
//! # Ok::<(), fieldmap::MapError>(())
//! ```

mod dispatch;
mod report;
mod resolve;
mod slice;
mod structs;

use std::sync::LazyLock;

pub use report::{FieldPath, MapReport, PathSegment, SkippedField};

use report::MapContext;

use crate::{MapError, MapResult, OpaqueTypeRegistry, Reflect, ReflectMut, Typed};

static DEFAULT_MAPPER: LazyLock<Mapper> = LazyLock::new(Mapper::default);

/// Maps values between structurally related types.
///
/// A mapper holds only its [`OpaqueTypeRegistry`]; it keeps no per-call
/// state, so one instance can serve concurrent calls.
#[derive(Clone, Debug, Default)]
pub struct Mapper {
    registry: OpaqueTypeRegistry,
}

impl Mapper {
    /// Create a mapper using `registry` for opaque leaf types.
    #[must_use]
    pub const fn new(registry: OpaqueTypeRegistry) -> Self {
        Self { registry }
    }

    /// The opaque types this mapper copies atomically.
    #[must_use]
    pub const fn registry(&self) -> &OpaqueTypeRegistry {
        &self.registry
    }

    /// Map `source` onto `destination`.
    ///
    /// Fields the source does not supply keep their current value, so the
    /// destination should start out as a zero (`Default`) instance. Failures
    /// inside individual struct fields are suppressed and the field is left
    /// untouched; use [`Mapper::map_with_report`] to see them.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::NotAddressableDestination`] when `destination` is
    /// shared storage, and [`MapError::UnsupportedKind`] when the destination
    /// shape cannot be produced from the source at the top level or inside a
    /// collection.
    pub fn map(&self, source: &dyn Reflect, destination: &mut dyn Reflect) -> MapResult<()> {
        self.map_with_report(source, destination).map(drop)
    }

    /// Map `source` onto `destination`, returning the struct fields that were
    /// skipped because they could not be mapped.
    ///
    /// # Errors
    ///
    /// Fails in the same situations as [`Mapper::map`].
    pub fn map_with_report(
        &self,
        source: &dyn Reflect,
        destination: &mut dyn Reflect,
    ) -> MapResult<MapReport> {
        if matches!(destination.reflect_mut(), ReflectMut::Shared) {
            return Err(MapError::NotAddressableDestination);
        }
        let mut cx = MapContext::default();
        self.map_value(source, destination, &mut cx)?;
        Ok(cx.into_report())
    }

    /// Map `source` into a fresh `D::default()`.
    ///
    /// # Errors
    ///
    /// Fails in the same situations as [`Mapper::map`].
    pub fn map_into<D: Typed>(&self, source: &dyn Reflect) -> MapResult<D> {
        let mut destination = D::default();
        self.map(source, &mut destination)?;
        Ok(destination)
    }
}

/// Map `source` onto `destination` using a process-wide mapper with the
/// default [`OpaqueTypeRegistry`].
///
/// # Errors
///
/// Fails in the same situations as [`Mapper::map`].
///
/// # Examples
///
/// ```
/// #[derive(Clone, Default, fieldmap::Reflect)]
/// struct Source { inner: Option<Inner> }
/// #[derive(Clone, Default, fieldmap::Reflect)]
/// struct Inner { value: u8 }
/// #[derive(Clone, Default, fieldmap::Reflect)]
/// struct Destination { inner: Option<Inner> }
///
/// let mut destination = Destination::default();
/// fieldmap::map(&Source { inner: None }, &mut destination)?;
/// assert!(destination.inner.is_none());
/// # Ok::<(), fieldmap::MapError>(())
/// ```
pub fn map(source: &dyn Reflect, destination: &mut dyn Reflect) -> MapResult<()> {
    DEFAULT_MAPPER.map(source, destination)
}
