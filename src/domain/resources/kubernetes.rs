use super::{fmt_resource, Creatable, Mutable, Reference, Resource};
use crate::core::filter::Filterable;
use crate::core::table::{Displayable, Fields};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Managed kubernetes cluster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cluster {
    pub id: u64,
    pub name: String,
    pub status: String,
    pub location: Reference,
    pub worker_product: Reference,
    pub worker_count: u32,
    #[serde(default)]
    pub network: Option<Reference>,
    #[serde(default)]
    pub external_ip: Option<String>,
}

/// Changes applied by `kubernetes cluster update`
#[derive(Debug, Clone, Default)]
pub struct ClusterUpdate {
    pub name: Option<String>,
}

/// Request of `kubernetes cluster create`
#[derive(Debug, Clone)]
pub struct ClusterCreate {
    pub name: String,
    pub location: Reference,
    pub network: Option<Reference>,
    pub worker_product: Reference,
    pub worker_count: u32,
}

impl fmt::Display for Cluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_resource(f, &self.name, self.id)
    }
}

impl Resource for Cluster {
    const COLLECTION: &'static str = "clusters";
    const KIND: &'static str = "kubernetes cluster";

    fn id(&self) -> u64 {
        self.id
    }
}

impl Mutable for Cluster {
    type Update = ClusterUpdate;

    fn is_noop(update: &ClusterUpdate) -> bool {
        update.name.is_none()
    }

    fn apply(&mut self, update: ClusterUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
    }
}

impl Creatable for Cluster {
    type Create = ClusterCreate;

    fn create(id: u64, request: ClusterCreate) -> Self {
        Self {
            id,
            name: request.name,
            status: "creating".to_string(),
            location: request.location,
            worker_product: request.worker_product,
            worker_count: request.worker_count,
            network: request.network,
            external_ip: None,
        }
    }
}

impl Displayable for Cluster {
    fn columns(&self) -> Vec<&'static str> {
        vec!["id", "name", "status", "location", "workers", "network", "external_ip"]
    }

    fn values(&self) -> Fields {
        Fields::from([
            ("id".to_string(), self.id.into()),
            ("name".to_string(), (&self.name).into()),
            ("status".to_string(), (&self.status).into()),
            ("location".to_string(), self.location.to_string().into()),
            (
                "workers".to_string(),
                format!("{} x {}", self.worker_count, self.worker_product).into(),
            ),
            ("network".to_string(), self.network.as_ref().map(ToString::to_string).into()),
            ("external_ip".to_string(), self.external_ip.clone().into()),
        ])
    }
}

impl Filterable for Cluster {
    fn filter_values(&self) -> Vec<String> {
        vec![self.id.to_string(), self.name.clone()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cluster_from_snapshot_json() {
        let cluster: Cluster = serde_json::from_value(serde_json::json!({
            "id": 9,
            "name": "production",
            "status": "running",
            "location": {"id": 1, "name": "ALP1"},
            "worker_product": {"id": 4, "name": "b1.4x8"},
            "worker_count": 3
        }))
        .unwrap();

        assert!(cluster.network.is_none());
        let values = cluster.values();
        assert_eq!(values["workers"].to_string(), "3 x b1.4x8");
        assert_eq!(values["network"].to_string(), "");
    }

    #[test]
    fn test_create_starts_in_creating_state() {
        let cluster = Cluster::create(
            12,
            ClusterCreate {
                name: "staging".to_string(),
                location: Reference::new(1, "ALP1"),
                network: Some(Reference::new(7, "default")),
                worker_product: Reference::new(4, "b1.4x8"),
                worker_count: 2,
            },
        );

        assert_eq!(cluster.id(), 12);
        assert_eq!(cluster.status, "creating");
        assert!(cluster.external_ip.is_none());
        assert_eq!(cluster.values()["network"].to_string(), "default");
    }
}
