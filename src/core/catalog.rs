use crate::domain::error::CloudResult;
use crate::domain::resources::{Creatable, Mutable, Resource};
use async_trait::async_trait;
use serde_json::Value as JsonValue;

/// Source of platform resources.
///
/// Commands only talk to the platform through this trait, so any request
/// layer can sit behind it.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// List every resource of a collection
    async fn list<T: Resource>(&self) -> CloudResult<Vec<T>>;

    /// Order a new resource and return it with its assigned id
    async fn create<T: Creatable>(&self, request: T::Create) -> CloudResult<T>;

    /// Apply `update` to the resource with `id` and return the new state
    async fn update<T: Mutable>(&self, id: u64, update: T::Update) -> CloudResult<T>;

    /// Remove the resource with `id`
    async fn delete<T: Resource>(&self, id: u64) -> CloudResult<()>;

    /// A collection as untyped JSON
    async fn raw(&self, collection: &str) -> CloudResult<JsonValue>;

    /// Names of the collections this catalog holds
    async fn collections(&self) -> Vec<String>;
}
