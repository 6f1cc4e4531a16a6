//! Field-by-field mapping between records.

use super::report::PathSegment;
use super::{MapContext, Mapper};
use crate::{FieldDescriptor, MapError, MapResult, Reflect, ReflectRef, Struct};

/// Source of a struct mapping after pointer dereferencing.
enum StructSource<'a> {
    Borrowed(&'a dyn Reflect),
    /// Zero instance standing in for an absent source.
    Zeroed(Box<dyn Reflect>),
}

impl<'a> StructSource<'a> {
    fn dereference(source: &'a dyn Reflect) -> Self {
        match source.reflect_ref() {
            ReflectRef::Pointer(pointer) => pointer.pointee().map_or_else(
                || Self::Zeroed(pointer.pointee_type().zeroed()),
                Self::Borrowed,
            ),
            _ => Self::Borrowed(source),
        }
    }

    fn get(&self) -> &dyn Reflect {
        match self {
            Self::Borrowed(value) => *value,
            Self::Zeroed(value) => &**value,
        }
    }
}

impl Mapper {
    /// Map every reflected field of `destination` from `source`.
    ///
    /// A failing field is logged, recorded in the context and left untouched;
    /// it never fails the struct as a whole.
    pub(crate) fn map_struct(
        &self,
        source: &dyn Reflect,
        destination: &mut dyn Struct,
        cx: &mut MapContext,
    ) -> MapResult<()> {
        let origin = StructSource::dereference(source);
        for field in destination.fields() {
            cx.within(PathSegment::Field(field.name()), |field_cx| {
                if let Err(error) = self.map_field(origin.get(), destination, field, field_cx) {
                    tracing::debug!(
                        field = %field_cx.path(),
                        %error,
                        "skipping field that could not be mapped"
                    );
                    field_cx.skip(error);
                }
            });
        }
        Ok(())
    }

    fn map_field(
        &self,
        source: &dyn Reflect,
        destination: &mut dyn Struct,
        field: &FieldDescriptor,
        cx: &mut MapContext,
    ) -> MapResult<()> {
        let Some(value) = self.resolve_field(source, field)? else {
            return Ok(());
        };
        let slot = destination
            .field_at_mut(field.index())
            .ok_or(MapError::UnsupportedKind)?;
        self.map_value(value, slot, cx)
    }
}
