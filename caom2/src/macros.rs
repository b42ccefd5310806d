/// Marks a struct as a CAOM2 entity reporting a fixed [`EntityType`] tag and
/// generates:
/// - `impl Typed for $name` returning `$tag`
/// - an associated `TYPE` class property yielding the same tag
///
/// Usage:
///   define_entity_type!(Plane, EntityType::Plane);
///
/// [`EntityType`]: crate::core::EntityType
#[macro_export]
macro_rules! define_entity_type {
    ($name:ident, $tag:expr) => {
        impl $crate::typed::Typed for $name {
            type Tag = $crate::core::EntityType;

            fn type_tag(&self) -> $crate::core::EntityType {
                $tag
            }
        }

        impl $name {
            /// Entity tag of this type, readable without an instance.
            pub const TYPE: $crate::typed::ClassProperty<$name, $crate::core::EntityType> = {
                fn tag() -> $crate::core::EntityType {
                    $tag
                }
                $crate::typed::ClassProperty::new("type", tag)
            };
        }
    };
}
