//! Registry of opaque leaf types.
//!
//! An opaque type is copied by whole-value assignment when the source and
//! destination share it exactly, and is never decomposed field by field in
//! that case. The registry is handed to [`crate::Mapper::new`] and cannot be
//! changed once the mapper owns it.

use std::any::TypeId;
use std::collections::HashMap;

use crate::Typed;

/// Set of types the mapper copies atomically.
///
/// # Examples
///
/// ```
/// use fieldmap::{Mapper, OpaqueTypeRegistry};
///
/// #[derive(Clone, Debug, Default, PartialEq, fieldmap::Reflect)]
/// struct Money {
///     amount: i64,
///     currency: String,
/// }
///
/// let registry = OpaqueTypeRegistry::default().with::<Money>();
/// assert!(registry.contains_type::<Money>());
/// let mapper = Mapper::new(registry);
/// # let _ = mapper;
/// ```
#[derive(Clone, Debug)]
pub struct OpaqueTypeRegistry {
    types: HashMap<TypeId, &'static str>,
}

impl OpaqueTypeRegistry {
    /// A registry with no entries.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            types: HashMap::new(),
        }
    }

    /// Register `T`, returning the updated registry.
    #[must_use]
    pub fn with<T: Typed>(mut self) -> Self {
        self.register::<T>();
        self
    }

    /// Register `T`. Returns `false` if it was already present.
    pub fn register<T: Typed>(&mut self) -> bool {
        let info = T::type_info();
        self.types
            .insert(info.type_id(), info.type_name())
            .is_none()
    }

    /// Returns `true` when the type with the given identity is registered.
    #[must_use]
    pub fn contains(&self, type_id: TypeId) -> bool {
        self.types.contains_key(&type_id)
    }

    /// Returns `true` when `T` is registered.
    #[must_use]
    pub fn contains_type<T: 'static>(&self) -> bool {
        self.contains(TypeId::of::<T>())
    }

    /// Names of the registered types, in no particular order.
    pub fn type_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.types.values().copied()
    }

    /// Number of registered types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns `true` when nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl Default for OpaqueTypeRegistry {
    /// The standard registry: UTC timestamps when the `chrono` feature is
    /// enabled, otherwise empty.
    fn default() -> Self {
        let mut registry = Self::empty();
        #[cfg(feature = "chrono")]
        registry.register::<chrono::DateTime<chrono::Utc>>();
        registry
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for opaque type registration.

    use rstest::rstest;

    use super::OpaqueTypeRegistry;

    #[rstest]
    fn empty_registry_contains_nothing() {
        let registry = OpaqueTypeRegistry::empty();
        assert!(registry.is_empty());
        assert!(!registry.contains_type::<String>());
    }

    #[rstest]
    fn registering_twice_keeps_one_entry() {
        let mut registry = OpaqueTypeRegistry::empty();
        assert!(registry.register::<u64>());
        assert!(!registry.register::<u64>());
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.type_names().collect::<Vec<_>>(), vec!["u64"]);
    }

    #[cfg(feature = "chrono")]
    #[rstest]
    fn default_registry_holds_utc_timestamps() {
        let registry = OpaqueTypeRegistry::default();
        assert_eq!(registry.len(), 1);
        assert!(registry.contains_type::<chrono::DateTime<chrono::Utc>>());
        assert!(!registry.contains_type::<chrono::NaiveDateTime>());
    }
}
