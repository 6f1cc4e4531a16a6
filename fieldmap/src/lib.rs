//! Structural, name-driven mapping between related Rust types.
//!
//! `fieldmap` copies a source value into a destination of a possibly
//! different type. Struct fields are matched by exact name and mapped
//! recursively; `Option` fields behave as nullable pointers, `Vec` fields are
//! mapped element by element, and types registered in an
//! [`OpaqueTypeRegistry`] are copied whole.
//!
//! Types opt in with `#[derive(Reflect)]`, which generates a static field
//! table for the struct. The actual derive implementation lives in the
//! companion `fieldmap_macros` crate.
//!
//! ```
//! use fieldmap::Reflect;
//!
//! #[derive(Clone, Default, Reflect)]
//! struct Base {
//!     city: String,
//! }
//!
//! #[derive(Clone, Default, Reflect)]
//! struct Customer {
//!     #[fieldmap(embed)]
//!     base: Base,
//!     name: String,
//! }
//!
//! #[derive(Clone, Debug, Default, PartialEq, Reflect)]
//! struct CustomerRow {
//!     name: String,
//!     city: String,
//! }
//!
//! let customer = Customer { base: Base { city: "Lyon".into() }, name: "X".into() };
//! let mut row = CustomerRow::default();
//! fieldmap::map(&customer, &mut row)?;
//! assert_eq!(row, CustomerRow { name: "X".into(), city: "Lyon".into() });
//! # Ok::<(), fieldmap::MapError>(())
//! ```

pub use fieldmap_macros::Reflect;

mod error;
mod mapper;
pub mod reflect;
mod registry;

pub use error::{MapError, MapResult};
pub use mapper::{FieldPath, MapReport, Mapper, PathSegment, SkippedField, map};
pub use reflect::{
    Collection, FieldDescriptor, Kind, Pointer, Reflect, ReflectMut, ReflectRef, Struct,
    TypeInfo, Typed,
};
pub use registry::OpaqueTypeRegistry;
