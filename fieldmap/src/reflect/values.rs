//! Leaf implementations for primitives, strings and timestamps.

/// Implement [`Typed`](crate::Typed) and [`Reflect`](crate::Reflect) for leaf
/// types that are copied whole and never decomposed.
///
/// The types must implement `Clone` and `Default`. Use this to make your own
/// scalar types (identifiers, money amounts, ...) mappable.
///
/// # Examples
///
/// ```
/// #[derive(Clone, Debug, Default, PartialEq)]
/// struct AccountId(u64);
///
/// fieldmap::impl_reflect_value!(AccountId);
///
/// let mut destination = AccountId::default();
/// fieldmap::map(&AccountId(7), &mut destination).expect("same type maps");
/// assert_eq!(destination, AccountId(7));
/// ```
#[macro_export]
macro_rules! impl_reflect_value {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Typed for $ty {
                fn type_info() -> $crate::TypeInfo {
                    $crate::TypeInfo::of::<Self>($crate::Kind::Value)
                }
            }

            impl $crate::Reflect for $ty {
                fn represented_type(&self) -> $crate::TypeInfo {
                    <Self as $crate::Typed>::type_info()
                }

                fn reflect_ref(&self) -> $crate::ReflectRef<'_> {
                    $crate::ReflectRef::Value(self)
                }

                fn reflect_mut(&mut self) -> $crate::ReflectMut<'_> {
                    $crate::ReflectMut::Value(self)
                }

                fn try_assign(&mut self, source: &dyn $crate::Reflect) -> bool {
                    $crate::reflect::assign_cloned(self, source)
                }
            }
        )+
    };
}

impl_reflect_value!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
    String, (),
);

#[cfg(feature = "chrono")]
impl_reflect_value!(
    chrono::DateTime<chrono::Utc>,
    chrono::NaiveDateTime,
    chrono::NaiveDate,
);

#[cfg(test)]
mod tests {
    //! Unit tests for leaf reflection.

    use rstest::rstest;

    use crate::{Kind, Reflect, ReflectMut, ReflectRef, Typed};

    #[rstest]
    fn leaves_reflect_as_values() {
        let value = 5_u16;
        assert!(matches!(value.reflect_ref(), ReflectRef::Value(_)));
        assert!(matches!(u16::type_info().kind(), Kind::Value));
    }

    #[rstest]
    fn assign_accepts_identical_types_only() {
        let mut target = String::from("before");
        assert!(target.try_assign(&String::from("after")));
        assert_eq!(target, "after");
        assert!(!target.try_assign(&7_i32));
        assert_eq!(target, "after");
    }

    #[rstest]
    fn value_views_are_writable() {
        let mut value = 1.5_f64;
        assert!(matches!(value.reflect_mut(), ReflectMut::Value(_)));
    }

    #[cfg(feature = "chrono")]
    #[rstest]
    fn timestamps_zero_to_the_epoch() {
        let zero = <chrono::DateTime<chrono::Utc> as Typed>::type_info().zeroed();
        let epoch = chrono::DateTime::<chrono::Utc>::UNIX_EPOCH;
        assert_eq!(
            zero.downcast_ref::<chrono::DateTime<chrono::Utc>>(),
            Some(&epoch)
        );
    }
}
