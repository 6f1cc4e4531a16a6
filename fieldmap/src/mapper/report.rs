//! Diagnostics for fields skipped during a best-effort mapping.

use std::fmt;

use crate::MapError;

/// One step in the path from the mapping root to a field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum PathSegment {
    /// A named struct field.
    Field(&'static str),
    /// A collection element.
    Index(usize),
}

/// Location of a field relative to the mapping root, rendered as
/// `outer.items[2].name`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FieldPath(Vec<PathSegment>);

impl FieldPath {
    /// Segments from the root outwards.
    #[must_use]
    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    /// Returns `true` for the mapping root.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn push(&mut self, segment: PathSegment) {
        self.0.push(segment);
    }

    pub(crate) fn pop(&mut self) {
        self.0.pop();
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("<root>");
        }
        for (position, segment) in self.0.iter().enumerate() {
            match segment {
                PathSegment::Field(name) if position == 0 => f.write_str(name)?,
                PathSegment::Field(name) => write!(f, ".{name}")?,
                PathSegment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

/// A struct field left at its zero value because mapping it failed.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SkippedField {
    path: FieldPath,
    error: MapError,
}

impl SkippedField {
    /// Location of the skipped field.
    #[must_use]
    pub const fn path(&self) -> &FieldPath {
        &self.path
    }

    /// Failure that caused the field to be skipped.
    #[must_use]
    pub const fn error(&self) -> MapError {
        self.error
    }
}

impl fmt::Display for SkippedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.error)
    }
}

/// Outcome of [`crate::Mapper::map_with_report`].
///
/// A mapping succeeds even when individual struct fields fail; those fields
/// keep their zero value and are listed here.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MapReport {
    skipped: Vec<SkippedField>,
}

impl MapReport {
    /// Returns `true` when no field was skipped.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }

    /// Skipped fields in the order they were visited.
    #[must_use]
    pub fn skipped(&self) -> &[SkippedField] {
        &self.skipped
    }

    /// Iterate over the skipped fields.
    #[must_use = "iterators should be consumed to inspect skipped fields"]
    pub fn iter(&self) -> std::slice::Iter<'_, SkippedField> {
        self.skipped.iter()
    }
}

impl<'a> IntoIterator for &'a MapReport {
    type Item = &'a SkippedField;
    type IntoIter = std::slice::Iter<'a, SkippedField>;

    fn into_iter(self) -> Self::IntoIter {
        self.skipped.iter()
    }
}

impl IntoIterator for MapReport {
    type Item = SkippedField;
    type IntoIter = std::vec::IntoIter<SkippedField>;

    fn into_iter(self) -> Self::IntoIter {
        self.skipped.into_iter()
    }
}

/// Per-call state threaded through the recursion: the current field path and
/// the failures suppressed so far.
#[derive(Debug, Default)]
pub(crate) struct MapContext {
    path: FieldPath,
    skipped: Vec<SkippedField>,
}

impl MapContext {
    pub(crate) const fn path(&self) -> &FieldPath {
        &self.path
    }

    /// Run `f` with `segment` appended to the current path.
    pub(crate) fn within<T>(
        &mut self,
        segment: PathSegment,
        f: impl FnOnce(&mut Self) -> T,
    ) -> T {
        self.path.push(segment);
        let outcome = f(self);
        self.path.pop();
        outcome
    }

    pub(crate) fn skip(&mut self, error: MapError) {
        self.skipped.push(SkippedField {
            path: self.path.clone(),
            error,
        });
    }

    pub(crate) fn into_report(self) -> MapReport {
        MapReport {
            skipped: self.skipped,
        }
    }
}
