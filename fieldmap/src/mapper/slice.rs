//! Element-wise mapping of ordered collections.

use super::report::PathSegment;
use super::{MapContext, Mapper};
use crate::{Collection, MapError, MapResult, Reflect, ReflectRef, TypeInfo};

impl Mapper {
    /// Replace `destination` with the element-wise mapping of `source`.
    ///
    /// Elements are mapped in order into fresh zero values and only stored
    /// once all of them succeed. An empty source is checked with a probe
    /// mapping of one zero element so incompatible element types fail even
    /// without data.
    pub(crate) fn map_collection(
        &self,
        source: &dyn Reflect,
        destination: &mut dyn Collection,
        cx: &mut MapContext,
    ) -> MapResult<()> {
        let ReflectRef::Collection(items) = source.reflect_ref() else {
            return Err(MapError::UnsupportedKind);
        };
        let element_type = destination.element_type();
        let mut mapped = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            let mut slot = element_type.zeroed();
            cx.within(PathSegment::Index(index), |element_cx| {
                self.map_value(item, &mut *slot, element_cx)
            })?;
            mapped.push(slot);
        }
        if mapped.is_empty() {
            self.probe(items.element_type(), element_type)?;
        }
        if destination.replace_elements(mapped) {
            Ok(())
        } else {
            Err(MapError::UnsupportedKind)
        }
    }

    /// Dry-run the mapping of one zero `source` element into one zero
    /// `destination` element. Field diagnostics from the probe are dropped.
    fn probe(&self, source: TypeInfo, destination: TypeInfo) -> MapResult<()> {
        let element = source.zeroed();
        let mut slot = destination.zeroed();
        let outcome = self.map_value(&*element, &mut *slot, &mut MapContext::default());
        tracing::trace!(
            source = source.type_name(),
            destination = destination.type_name(),
            compatible = outcome.is_ok(),
            "probed empty collection element types"
        );
        outcome
    }
}
