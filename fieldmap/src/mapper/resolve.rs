//! Locating the source value for a destination field.
//!
//! Lookups match names exactly. Fields of embedded members are promoted into
//! the enclosing struct, so `Employee { #[fieldmap(embed)] person: Person }`
//! answers a lookup for `name` with `person.name`.

use std::any::TypeId;
use std::collections::{HashMap, HashSet};

use super::Mapper;
use crate::{FieldDescriptor, Kind, MapError, MapResult, Reflect, ReflectRef, Struct, TypeInfo};

impl Mapper {
    /// Resolve the source value for `field`.
    ///
    /// Returns `Ok(None)` when the source has no usable value, in which case
    /// the destination field is left alone. Fails when `source` is not a
    /// struct.
    pub(crate) fn resolve_field<'a>(
        &self,
        source: &'a dyn Reflect,
        field: &FieldDescriptor,
    ) -> MapResult<Option<&'a dyn Reflect>> {
        let ReflectRef::Struct(record) = source.reflect_ref() else {
            return Err(MapError::UnsupportedKind);
        };
        let field_type = field.type_info();
        if field.is_embedded() && self.registry.contains(field_type.type_id()) {
            return Ok(record.field(field.name()));
        }
        if let Some(path) = lookup(record.fields(), field.name()) {
            // `None` here means an embedded `Option` on the way is empty.
            return Ok(follow(record, &path));
        }
        if field_type.kind().is_struct() {
            // The destination nests what the source keeps flat.
            return Ok(Some(source));
        }
        Ok(promote(record, field.name()))
    }
}

/// Breadth-first search for `name` through `fields` and, level by level, the
/// fields of embedded members.
///
/// Returns the index path of the match at the shallowest depth. Two matches
/// at that depth make the name ambiguous and nothing is returned; a struct
/// type embedded more than once at one depth counts once per occurrence.
/// Each struct type is searched at most once, at its shallowest depth.
pub(crate) fn lookup(fields: &'static [FieldDescriptor], name: &str) -> Option<Vec<usize>> {
    let mut level: Vec<(Vec<usize>, Option<TypeId>, &'static [FieldDescriptor])> =
        vec![(Vec::new(), None, fields)];
    let mut visited = HashSet::new();
    while !level.is_empty() {
        let mut occurrences: HashMap<TypeId, usize> = HashMap::new();
        for (_, type_id, _) in &level {
            if let Some(id) = type_id {
                *occurrences.entry(*id).or_default() += 1;
            }
        }
        let mut found = None;
        let mut matches = 0_usize;
        let mut next = Vec::new();
        for (prefix, type_id, members) in &level {
            if let Some(id) = type_id
                && !visited.insert(*id)
            {
                continue;
            }
            let weight = type_id
                .and_then(|id| occurrences.get(&id).copied())
                .unwrap_or(1);
            for field in *members {
                let path = extend(prefix, field.index());
                if field.name() == name {
                    matches += weight;
                    found = Some(path);
                } else if field.is_embedded()
                    && let Some(embedded) = embedded_struct(field)
                {
                    next.push((path, Some(embedded.type_id()), embedded.kind().fields()));
                }
            }
        }
        match matches {
            0 => level = next,
            1 => return found,
            _ => return None,
        }
    }
    None
}

fn extend(prefix: &[usize], index: usize) -> Vec<usize> {
    let mut path = Vec::with_capacity(prefix.len() + 1);
    path.extend_from_slice(prefix);
    path.push(index);
    path
}

/// Struct type reachable through an embedded field, directly or through an
/// `Option`.
fn embedded_struct(field: &FieldDescriptor) -> Option<TypeInfo> {
    let info = field.type_info();
    match info.kind() {
        Kind::Struct(_) => Some(info),
        Kind::Pointer(pointee) => Some(pointee()).filter(|inner| inner.kind().is_struct()),
        Kind::Value | Kind::Collection(_) => None,
    }
}

/// Walk an index path produced by [`lookup`]. Returns `None` when an embedded
/// `Option` along the way is empty.
fn follow<'a>(record: &'a dyn Struct, path: &[usize]) -> Option<&'a dyn Reflect> {
    let (last, parents) = path.split_last()?;
    let mut current = record;
    for index in parents {
        let member = current.field_at(*index)?;
        let value = match member.reflect_ref() {
            ReflectRef::Pointer(pointer) => pointer.pointee()?,
            _ => member,
        };
        let ReflectRef::Struct(inner) = value.reflect_ref() else {
            return None;
        };
        current = inner;
    }
    current.field_at(*last)
}

/// One level of promotion through struct-valued members: the first member,
/// in declaration order, that resolves `name`.
fn promote<'a>(record: &'a dyn Struct, name: &str) -> Option<&'a dyn Reflect> {
    record
        .fields()
        .iter()
        .filter_map(|member| record.field_at(member.index()))
        .find_map(|member| {
            let ReflectRef::Struct(inner) = member.reflect_ref() else {
                return None;
            };
            lookup(inner.fields(), name).and_then(|path| follow(inner, &path))
        })
}
