//! Reflection model used by the mapper.
//!
//! Rust offers no runtime field introspection, so participating types describe
//! themselves. `#[derive(Reflect)]` implements [`Typed`], [`Reflect`] and
//! [`Struct`] for records; this module supplies the leaf, optional
//! ([`Pointer`]) and sequence ([`Collection`]) implementations.
//!
//! # Examples
//!
//! ```
//! use fieldmap::{Reflect, ReflectRef};
//!
//! let value: Option<u8> = Some(3);
//! let reflected: &dyn Reflect = &value;
//! assert!(matches!(
//!     reflected.reflect_ref(),
//!     ReflectRef::Pointer(pointer) if pointer.pointee().is_some()
//! ));
//! ```

use std::any::Any;

mod containers;
mod type_info;
mod values;

pub use type_info::{FieldDescriptor, Kind, TypeInfo};

/// Dynamic access to a value whose shape is known at runtime.
pub trait Reflect: Any {
    /// Metadata of the concrete type behind this value.
    fn represented_type(&self) -> TypeInfo;

    /// Borrow the value through its structural kind.
    fn reflect_ref(&self) -> ReflectRef<'_>;

    /// Mutably borrow the value through its structural kind.
    ///
    /// Returns [`ReflectMut::Shared`] when the storage is shared with other
    /// owners and cannot be written through.
    fn reflect_mut(&mut self) -> ReflectMut<'_>;

    /// Overwrite `self` with a clone of `source` when both are the same type.
    ///
    /// Returns `false`, leaving `self` untouched, on a type mismatch.
    fn try_assign(&mut self, source: &dyn Reflect) -> bool;
}

/// Static counterpart of [`Reflect`], available for every reflected type.
///
/// The `Default` bound provides the zero value used for freshly allocated
/// pointees, collection elements and probes; `Clone` backs whole-value
/// assignment.
pub trait Typed: Reflect + Default + Clone {
    /// Metadata describing `Self`.
    fn type_info() -> TypeInfo;
}

impl dyn Reflect {
    /// Returns `true` when the concrete type behind `self` is `T`.
    #[must_use]
    pub fn is<T: Reflect>(&self) -> bool {
        self.represented_type().is::<T>()
    }

    /// Downcast to a concrete type.
    #[must_use]
    pub fn downcast_ref<T: Reflect>(&self) -> Option<&T> {
        let any: &dyn Any = self;
        any.downcast_ref::<T>()
    }
}

/// Take ownership of a boxed reflected value as `T`.
pub(crate) fn take<T: Reflect>(value: Box<dyn Reflect>) -> Option<T> {
    let any: Box<dyn Any> = value;
    any.downcast::<T>().ok().map(|boxed| *boxed)
}

/// Clone `source` into `target` when `source` is a `T`.
///
/// Shared implementation of [`Reflect::try_assign`] for generated and
/// hand-written impls.
pub fn assign_cloned<T: Reflect + Clone>(target: &mut T, source: &dyn Reflect) -> bool {
    let Some(value) = source.downcast_ref::<T>() else {
        return false;
    };
    target.clone_from(value);
    true
}

/// Immutable view of a reflected value, split by structural kind.
pub enum ReflectRef<'a> {
    /// A leaf value.
    Value(&'a dyn Reflect),
    /// A record with named fields.
    Struct(&'a dyn Struct),
    /// An optional slot.
    Pointer(&'a dyn Pointer),
    /// An ordered collection.
    Collection(&'a dyn Collection),
}

/// Mutable view of a reflected value, split by structural kind.
pub enum ReflectMut<'a> {
    /// A leaf value.
    Value(&'a mut dyn Reflect),
    /// A record with named fields.
    Struct(&'a mut dyn Struct),
    /// An optional slot.
    Pointer(&'a mut dyn Pointer),
    /// An ordered collection.
    Collection(&'a mut dyn Collection),
    /// Storage shared with other owners; it cannot be written through.
    Shared,
}

/// Records with named fields, usually implemented by `#[derive(Reflect)]`.
pub trait Struct: Reflect {
    /// Descriptor table of the reflected fields in declaration order.
    fn fields(&self) -> &'static [FieldDescriptor];

    /// Borrow the field at the given ordinal position.
    fn field_at(&self, index: usize) -> Option<&dyn Reflect>;

    /// Mutably borrow the field at the given ordinal position.
    fn field_at_mut(&mut self, index: usize) -> Option<&mut dyn Reflect>;
}

impl dyn Struct {
    /// Borrow a direct (non-promoted) field by exact name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&dyn Reflect> {
        let descriptor = self.fields().iter().find(|field| field.name() == name)?;
        self.field_at(descriptor.index())
    }
}

/// Optional slots: `Option<T>` reflects as a pointer to `T`.
pub trait Pointer: Reflect {
    /// Borrow the pointee, or `None` when the slot is empty.
    fn pointee(&self) -> Option<&dyn Reflect>;

    /// Metadata of the pointee type.
    fn pointee_type(&self) -> TypeInfo;

    /// Store `value` as the pointee. Returns `false`, leaving the slot
    /// untouched, when `value` is not of the pointee type.
    fn attach(&mut self, value: Box<dyn Reflect>) -> bool;
}

/// Ordered collections: `Vec<T>` reflects as a collection of `T`.
pub trait Collection: Reflect {
    /// Number of elements.
    fn len(&self) -> usize;

    /// Returns `true` when the collection holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Borrow the element at `index`.
    fn element(&self, index: usize) -> Option<&dyn Reflect>;

    /// Metadata of the element type.
    fn element_type(&self) -> TypeInfo;

    /// Replace the whole contents with `elements`. Returns `false`, leaving
    /// the collection untouched, if any element is not of the element type.
    fn replace_elements(&mut self, elements: Vec<Box<dyn Reflect>>) -> bool;
}

impl dyn Collection {
    /// Iterate over the elements in order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Reflect> + '_ {
        (0..self.len()).filter_map(move |index| self.element(index))
    }
}
