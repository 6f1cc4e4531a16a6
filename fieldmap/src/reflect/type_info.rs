//! Static type metadata consumed by the mapper.
//!
//! A [`TypeInfo`] is produced by [`Typed::type_info`] for every reflected type.
//! Struct types additionally expose a `'static` table of [`FieldDescriptor`]s
//! generated by `#[derive(Reflect)]`, so name lookups never allocate.

use std::any::{self, TypeId};
use std::fmt;

use super::{Reflect, Typed};

/// Describes a reflected type: identity, structural kind and a zero
/// constructor.
#[derive(Clone, Copy)]
pub struct TypeInfo {
    type_id: TypeId,
    type_name: &'static str,
    kind: Kind,
    content: Option<fn() -> TypeInfo>,
    zeroed: fn() -> Box<dyn Reflect>,
}

impl TypeInfo {
    /// Build the metadata for `T` with the provided structural kind.
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldmap::{Kind, TypeInfo};
    ///
    /// let info = TypeInfo::of::<u32>(Kind::Value);
    /// assert!(info.is::<u32>());
    /// assert_eq!(info.type_name(), "u32");
    /// ```
    #[must_use]
    pub fn of<T: Typed>(kind: Kind) -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            type_name: any::type_name::<T>(),
            kind,
            content: None,
            zeroed: zeroed::<T>,
        }
    }

    /// Build the metadata for a wrapper `W` that stores a `T` and borrows
    /// through to it, such as `Arc<T>`. The wrapper shares the kind of `T`.
    #[must_use]
    pub fn transparent<W: Typed, T: Typed>() -> Self {
        Self {
            content: Some(T::type_info),
            ..Self::of::<W>(T::type_info().kind())
        }
    }

    /// Identity of the described type.
    #[must_use]
    pub const fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Fully qualified name of the described type.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Structural kind of the described type.
    #[must_use]
    pub const fn kind(&self) -> Kind {
        self.kind
    }

    /// Metadata of the type stored behind a transparent wrapper; `None` for
    /// every other type.
    #[must_use]
    pub fn content(&self) -> Option<Self> {
        self.content.map(|content| content())
    }

    /// Returns `true` when a value of type `other` can be assigned to this
    /// type, either directly or into the contents of a transparent wrapper.
    #[must_use]
    pub fn accepts(&self, other: &Self) -> bool {
        self.type_id == other.type_id
            || self
                .content()
                .is_some_and(|content| content.type_id == other.type_id)
    }

    /// Construct a fresh zero (`Default`) instance of the described type.
    #[must_use]
    pub fn zeroed(&self) -> Box<dyn Reflect> {
        (self.zeroed)()
    }

    /// Returns `true` when this metadata describes `T`.
    #[must_use]
    pub fn is<T: 'static>(&self) -> bool {
        self.type_id == TypeId::of::<T>()
    }
}

impl PartialEq for TypeInfo {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for TypeInfo {}

impl fmt::Debug for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeInfo")
            .field("type_name", &self.type_name)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

fn zeroed<T: Typed>() -> Box<dyn Reflect> {
    Box::new(T::default())
}

/// Structural kind of a reflected type.
#[derive(Clone, Copy)]
pub enum Kind {
    /// A leaf value with no reflected structure.
    Value,
    /// A record with named fields.
    Struct(&'static [FieldDescriptor]),
    /// An optional, nullable slot holding a value of the pointee type.
    Pointer(fn() -> TypeInfo),
    /// An ordered collection of elements of the given type.
    Collection(fn() -> TypeInfo),
}

impl Kind {
    /// Returns `true` for [`Kind::Struct`].
    #[must_use]
    pub const fn is_struct(&self) -> bool {
        matches!(self, Self::Struct(_))
    }

    /// Field table of a struct kind; empty for every other kind.
    #[must_use]
    pub const fn fields(&self) -> &'static [FieldDescriptor] {
        match self {
            Self::Struct(fields) => *fields,
            Self::Value | Self::Pointer(_) | Self::Collection(_) => &[],
        }
    }

    const fn label(&self) -> &'static str {
        match self {
            Self::Value => "value",
            Self::Struct(_) => "struct",
            Self::Pointer(_) => "pointer",
            Self::Collection(_) => "collection",
        }
    }
}

impl fmt::Debug for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Static description of one reflected struct field.
#[derive(Clone, Copy)]
pub struct FieldDescriptor {
    name: &'static str,
    index: usize,
    embedded: bool,
    type_info: fn() -> TypeInfo,
}

impl FieldDescriptor {
    /// Describe a field. Used by generated code.
    #[must_use]
    pub const fn new(
        name: &'static str,
        index: usize,
        embedded: bool,
        type_info: fn() -> TypeInfo,
    ) -> Self {
        Self {
            name,
            index,
            embedded,
            type_info,
        }
    }

    /// Field name as declared.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Ordinal position among the reflected fields of the struct.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Whether the field is embedded, promoting its own fields into the
    /// enclosing struct for lookups.
    #[must_use]
    pub const fn is_embedded(&self) -> bool {
        self.embedded
    }

    /// Metadata of the declared field type.
    #[must_use]
    pub fn type_info(&self) -> TypeInfo {
        (self.type_info)()
    }
}

impl fmt::Debug for FieldDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("name", &self.name)
            .field("index", &self.index)
            .field("embedded", &self.embedded)
            .field("type_name", &self.type_info().type_name())
            .finish()
    }
}
