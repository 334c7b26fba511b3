//! Common repository traits
//!
//! This module defines generic interfaces for storage operations. They are
//! declared with `async_trait` so a repository can sit behind a trait object
//! inside [`AppState`](crate::core::AppState).

use async_trait::async_trait;

/// Trait for enumerating every entity of a collection
///
/// # Type Parameters
/// * `Entity` - Type of the entities to read
#[async_trait]
pub trait FindAll<Entity: Send>: Send + Sync {
    /// Reads all entities from the storage
    ///
    /// # Returns
    /// * `Ok(Vec<Entity>)` - All stored entities (can be empty), in storage order
    /// * `Err(sqlx::Error)` - Error during reading
    async fn find_all(&self) -> Result<Vec<Entity>, sqlx::Error>;
}

/// Trait for reading a single entity by primary key
///
/// # Type Parameters
/// * `Entity` - Type of the entity to read
/// * `Id` - Type of the primary key (e.g. `String`)
#[async_trait]
pub trait FindOne<Entity: Send, Id: Sync>: Send + Sync {
    /// Reads an entity from the storage by its primary key
    ///
    /// # Arguments
    /// * `id` - Primary key of the entity to read
    ///
    /// # Returns
    /// * `Ok(Some(Entity))` - Entity found
    /// * `Ok(None)` - No entity with that ID
    /// * `Err(sqlx::Error)` - Error during reading
    async fn find_one(&self, id: &Id) -> Result<Option<Entity>, sqlx::Error>;
}

/// Trait for persisting an entity, new or existing
///
/// # Type Parameters
/// * `Entity` - Type of the entity to store
#[async_trait]
pub trait Save<Entity: Send>: Send + Sync {
    /// Stores an entity
    ///
    /// # Arguments
    /// * `entity` - Entity to store. Without an ID a new one is assigned by the storage,
    ///   with an ID the record matching it is overwritten (or created if missing)
    ///
    /// # Returns
    /// * `Ok(Entity)` - Stored entity, always carrying its ID
    /// * `Err(sqlx::Error)` - Error during writing
    async fn save(&self, entity: Entity) -> Result<Entity, sqlx::Error>;
}
