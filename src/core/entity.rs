//! Entity traits defining the identity capability shared by every stored type

/// Durable identity of a stored entity.
///
/// Identities are positive once an entity has been added to a store. A value
/// of `0` (or below) marks an entity that has not been assigned one yet.
pub type EntityId = i64;

/// Base trait for all entities the repositories can hold.
///
/// This is deliberately the only capability the query engine needs: a
/// durable identity plus a couple of names for diagnostics. Domain fields are
/// reached through closures inside specifications, never through this trait.
pub trait Entity: Clone + Send + Sync + 'static {
    /// The plural resource name (e.g., "posts", "categories")
    fn resource_name() -> &'static str;

    /// The singular resource name (e.g., "post", "category")
    fn resource_name_singular() -> &'static str;

    /// Get the unique identifier for this entity instance
    fn id(&self) -> EntityId;

    /// Assign the identity chosen by the store
    fn set_id(&mut self, id: EntityId);

    /// Check if the entity already carries a store-assigned identity
    fn has_identity(&self) -> bool {
        self.id() > 0
    }
}
