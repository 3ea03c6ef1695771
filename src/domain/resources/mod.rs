// Resources module - Platform resources as returned by the catalog
pub mod compute;
pub mod kubernetes;
pub mod location;
pub mod macbaremetal;
pub mod product;

pub use compute::{Network, NetworkUpdate, Server, ServerUpdate};
pub use kubernetes::{Cluster, ClusterCreate, ClusterUpdate};
pub use location::Location;
pub use macbaremetal::{Device, DeviceCreate, DeviceUpdate};
pub use product::{Product, ProductType};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A resource collection served by a catalog
pub trait Resource:
    Clone + fmt::Display + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Key of the collection in a catalog snapshot
    const COLLECTION: &'static str;
    /// Human readable resource kind used in messages
    const KIND: &'static str;

    fn id(&self) -> u64;
}

/// A resource that accepts partial updates
pub trait Mutable: Resource {
    type Update: fmt::Debug + Send + 'static;

    /// Whether `update` would change anything at all
    fn is_noop(update: &Self::Update) -> bool;

    fn apply(&mut self, update: Self::Update);
}

/// A resource that can be ordered through a catalog
pub trait Creatable: Resource {
    type Create: fmt::Debug + Send + 'static;

    /// Build the new resource from its request, `id` is assigned by the catalog
    fn create(id: u64, request: Self::Create) -> Self;
}

/// Reference to another resource embedded in a resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    pub id: u64,
    pub name: String,
}

impl Reference {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self { id, name: name.into() }
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Display form shared by all resources, also used to list ambiguous matches
pub(crate) fn fmt_resource(f: &mut fmt::Formatter<'_>, name: &str, id: u64) -> fmt::Result {
    write!(f, "{} ({})", name, id)
}
