//! Reflection for `Option<T>` (pointer), `Vec<T>` (collection) and `Arc<T>`
//! (shared storage, transparent for reads).

use std::sync::Arc;

use super::{
    Collection, Kind, Pointer, Reflect, ReflectMut, ReflectRef, TypeInfo, Typed, assign_cloned,
    take,
};

impl<T: Typed> Typed for Option<T> {
    fn type_info() -> TypeInfo {
        TypeInfo::of::<Self>(Kind::Pointer(T::type_info))
    }
}

impl<T: Typed> Reflect for Option<T> {
    fn represented_type(&self) -> TypeInfo {
        <Self as Typed>::type_info()
    }

    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Pointer(self)
    }

    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        ReflectMut::Pointer(self)
    }

    fn try_assign(&mut self, source: &dyn Reflect) -> bool {
        assign_cloned(self, source)
    }
}

impl<T: Typed> Pointer for Option<T> {
    fn pointee(&self) -> Option<&dyn Reflect> {
        self.as_ref().map(|value| value as &dyn Reflect)
    }

    fn pointee_type(&self) -> TypeInfo {
        T::type_info()
    }

    fn attach(&mut self, value: Box<dyn Reflect>) -> bool {
        let Some(pointee) = take::<T>(value) else {
            return false;
        };
        *self = Some(pointee);
        true
    }
}

impl<T: Typed> Typed for Vec<T> {
    fn type_info() -> TypeInfo {
        TypeInfo::of::<Self>(Kind::Collection(T::type_info))
    }
}

impl<T: Typed> Reflect for Vec<T> {
    fn represented_type(&self) -> TypeInfo {
        <Self as Typed>::type_info()
    }

    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Collection(self)
    }

    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        ReflectMut::Collection(self)
    }

    fn try_assign(&mut self, source: &dyn Reflect) -> bool {
        assign_cloned(self, source)
    }
}

impl<T: Typed> Collection for Vec<T> {
    fn len(&self) -> usize {
        Self::len(self)
    }

    fn element(&self, index: usize) -> Option<&dyn Reflect> {
        self.get(index).map(|value| value as &dyn Reflect)
    }

    fn element_type(&self) -> TypeInfo {
        T::type_info()
    }

    fn replace_elements(&mut self, elements: Vec<Box<dyn Reflect>>) -> bool {
        let mut items = Self::with_capacity(elements.len());
        for element in elements {
            let Some(item) = take::<T>(element) else {
                return false;
            };
            items.push(item);
        }
        *self = items;
        true
    }
}

// `Arc` borrows through to its contents, so it shares the kind of `T` while
// keeping its own type identity for exact-match assignment.
impl<T: Typed> Typed for Arc<T> {
    fn type_info() -> TypeInfo {
        TypeInfo::transparent::<Self, T>()
    }
}

impl<T: Typed> Reflect for Arc<T> {
    fn represented_type(&self) -> TypeInfo {
        <Self as Typed>::type_info()
    }

    fn reflect_ref(&self) -> ReflectRef<'_> {
        (**self).reflect_ref()
    }

    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        match Self::get_mut(self) {
            Some(inner) => inner.reflect_mut(),
            None => ReflectMut::Shared,
        }
    }

    /// Replaces the `Arc` itself from another `Arc<T>`, or writes a `T` into
    /// uniquely owned contents.
    fn try_assign(&mut self, source: &dyn Reflect) -> bool {
        assign_cloned(self, source)
            || Self::get_mut(self).is_some_and(|inner| inner.try_assign(source))
    }
}
