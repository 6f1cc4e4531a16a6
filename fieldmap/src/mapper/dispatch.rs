//! Classification of each (source, destination) pair and routing to the
//! matching strategy.

use super::{MapContext, Mapper};
use crate::{Kind, MapError, MapResult, Pointer, Reflect, ReflectMut, ReflectRef, TypeInfo};

/// How a destination is produced from a source. Computed per call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum TypeShape {
    /// Registered opaque type present on both sides: whole-value copy.
    Opaque,
    /// Destination is a record: field-by-field mapping.
    Struct,
    /// Identical non-struct types: whole-value copy.
    ExactMatch,
    /// Destination is an optional slot.
    Pointer,
    /// Destination is an ordered collection.
    Collection,
    /// Nothing applies.
    Unsupported,
}

impl Mapper {
    pub(crate) fn classify(&self, source: &TypeInfo, destination: &TypeInfo) -> TypeShape {
        let same_type = source.type_id() == destination.type_id();
        if same_type && self.registry.contains(destination.type_id()) {
            return TypeShape::Opaque;
        }
        match destination.kind() {
            Kind::Struct(_) => TypeShape::Struct,
            _ if destination.accepts(source) => TypeShape::ExactMatch,
            Kind::Pointer(_) => TypeShape::Pointer,
            Kind::Collection(_) => TypeShape::Collection,
            Kind::Value => TypeShape::Unsupported,
        }
    }

    pub(crate) fn map_value(
        &self,
        source: &dyn Reflect,
        destination: &mut dyn Reflect,
        cx: &mut MapContext,
    ) -> MapResult<()> {
        let shape = self.classify(&source.represented_type(), &destination.represented_type());
        match shape {
            TypeShape::Opaque | TypeShape::ExactMatch => assign(source, destination),
            TypeShape::Struct => match destination.reflect_mut() {
                ReflectMut::Struct(target) => self.map_struct(source, target, cx),
                ReflectMut::Shared => Err(MapError::NotAddressableDestination),
                _ => Err(MapError::UnsupportedKind),
            },
            TypeShape::Pointer => match destination.reflect_mut() {
                ReflectMut::Pointer(target) => self.map_pointer(source, target, cx),
                ReflectMut::Shared => Err(MapError::NotAddressableDestination),
                _ => Err(MapError::UnsupportedKind),
            },
            TypeShape::Collection => match destination.reflect_mut() {
                ReflectMut::Collection(target) => self.map_collection(source, target, cx),
                ReflectMut::Shared => Err(MapError::NotAddressableDestination),
                _ => Err(MapError::UnsupportedKind),
            },
            TypeShape::Unsupported => Err(MapError::UnsupportedKind),
        }
    }

    /// An absent source leaves the slot empty; anything else is mapped into a
    /// fresh pointee which is then stored in the slot.
    fn map_pointer(
        &self,
        source: &dyn Reflect,
        destination: &mut dyn Pointer,
        cx: &mut MapContext,
    ) -> MapResult<()> {
        if is_nil(source) {
            return Ok(());
        }
        let mut pointee = destination.pointee_type().zeroed();
        self.map_value(source, &mut *pointee, cx)?;
        if destination.attach(pointee) {
            Ok(())
        } else {
            Err(MapError::UnsupportedKind)
        }
    }
}

fn assign(source: &dyn Reflect, destination: &mut dyn Reflect) -> MapResult<()> {
    if destination.try_assign(source) {
        Ok(())
    } else if matches!(destination.reflect_mut(), ReflectMut::Shared) {
        Err(MapError::NotAddressableDestination)
    } else {
        Err(MapError::UnsupportedKind)
    }
}

/// Returns `true` for an empty optional slot.
pub(crate) fn is_nil(value: &dyn Reflect) -> bool {
    matches!(value.reflect_ref(), ReflectRef::Pointer(pointer) if pointer.pointee().is_none())
}
