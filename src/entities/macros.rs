//! Macros for reducing boilerplate when defining entities

/// Implement [`Entity`](crate::core::entity::Entity) for a struct with an
/// `id: EntityId` field
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Debug, Clone)]
/// pub struct Category {
///     pub id: EntityId,
///     pub name: String,
/// }
///
/// impl_entity!(Category, "category", "categories");
/// ```
#[macro_export]
macro_rules! impl_entity {
    ($type:ident, $singular:expr, $plural:expr) => {
        impl $crate::core::entity::Entity for $type {
            fn resource_name() -> &'static str {
                $plural
            }

            fn resource_name_singular() -> &'static str {
                $singular
            }

            fn id(&self) -> $crate::core::entity::EntityId {
                self.id
            }

            fn set_id(&mut self, id: $crate::core::entity::EntityId) {
                self.id = id;
            }
        }
    };
}
