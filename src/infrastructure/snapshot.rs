use crate::core::catalog::Catalog;
use crate::domain::error::{CloudError, CloudResult};
use crate::domain::resources::{Creatable, Mutable, Resource};
use async_trait::async_trait;
use serde_json::{Map, Value as JsonValue};
use std::fs;
use std::path::Path;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// In-memory catalog seeded from a JSON snapshot.
///
/// The snapshot is an object mapping collection names (`locations`,
/// `servers`, ...) to arrays of resources. Updates and deletes only change
/// the loaded copy.
pub struct SnapshotCatalog {
    collections: RwLock<Map<String, JsonValue>>,
}

impl SnapshotCatalog {
    /// Build a catalog from an already parsed snapshot
    pub fn from_value(value: JsonValue) -> CloudResult<Self> {
        match value {
            JsonValue::Object(collections) => Ok(Self {
                collections: RwLock::new(collections),
            }),
            _ => Err(CloudError::Snapshot {
                message: "snapshot must be a JSON object of collections".to_string(),
            }),
        }
    }

    /// Load a snapshot file
    pub fn load(path: &Path) -> CloudResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| CloudError::Snapshot {
            message: format!("Failed to read snapshot {}: {}", path.display(), e),
        })?;

        let value: JsonValue = serde_json::from_str(&content).map_err(|e| CloudError::Snapshot {
            message: format!("Failed to parse snapshot {}: {}", path.display(), e),
        })?;

        let catalog = Self::from_value(value)?;
        info!("Loaded catalog snapshot from {}", path.display());
        Ok(catalog)
    }

    fn decode<T: Resource>(collections: &Map<String, JsonValue>) -> CloudResult<Vec<T>> {
        let Some(value) = collections.get(T::COLLECTION) else {
            debug!("Snapshot has no '{}' collection", T::COLLECTION);
            return Ok(Vec::new());
        };

        serde_json::from_value(value.clone()).map_err(|e| CloudError::Snapshot {
            message: format!("Invalid '{}' collection: {}", T::COLLECTION, e),
        })
    }
}

#[async_trait]
impl Catalog for SnapshotCatalog {
    async fn list<T: Resource>(&self) -> CloudResult<Vec<T>> {
        let collections = self.collections.read().await;
        Self::decode(&collections)
    }

    async fn create<T: Creatable>(&self, request: T::Create) -> CloudResult<T> {
        let mut collections = self.collections.write().await;
        let mut items: Vec<T> = Self::decode(&collections)?;

        let id = items.iter().map(|item| item.id()).max().unwrap_or(0) + 1;
        debug!("Creating {} {} from {:?}", T::KIND, id, request);
        let created = T::create(id, request);
        items.push(created.clone());

        collections.insert(T::COLLECTION.to_string(), serde_json::to_value(&items)?);
        Ok(created)
    }

    async fn update<T: Mutable>(&self, id: u64, update: T::Update) -> CloudResult<T> {
        let mut collections = self.collections.write().await;
        let mut items: Vec<T> = Self::decode(&collections)?;

        let item = items
            .iter_mut()
            .find(|item| item.id() == id)
            .ok_or(CloudError::NotFound { kind: T::KIND, id })?;
        debug!("Updating {} {} with {:?}", T::KIND, id, update);
        item.apply(update);
        let updated = item.clone();

        collections.insert(T::COLLECTION.to_string(), serde_json::to_value(&items)?);
        Ok(updated)
    }

    async fn delete<T: Resource>(&self, id: u64) -> CloudResult<()> {
        let mut collections = self.collections.write().await;
        let mut items: Vec<T> = Self::decode(&collections)?;

        let before = items.len();
        items.retain(|item| item.id() != id);
        if items.len() == before {
            return Err(CloudError::NotFound { kind: T::KIND, id });
        }

        debug!("Deleted {} {}", T::KIND, id);
        collections.insert(T::COLLECTION.to_string(), serde_json::to_value(&items)?);
        Ok(())
    }

    async fn raw(&self, collection: &str) -> CloudResult<JsonValue> {
        let collections = self.collections.read().await;
        collections
            .get(collection)
            .cloned()
            .ok_or_else(|| CloudError::InvalidInput(format!("unknown collection '{}'", collection)))
    }

    async fn collections(&self) -> Vec<String> {
        self.collections.read().await.keys().cloned().collect()
    }
}
