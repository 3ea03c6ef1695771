use super::{fmt_resource, Mutable, Reference, Resource};
use crate::core::filter::Filterable;
use crate::core::table::{Displayable, Fields};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Compute server instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Server {
    pub id: u64,
    pub name: String,
    pub status: String,
    pub image: Reference,
    pub product: Reference,
    pub location: Reference,
    #[serde(default)]
    pub public_ip: Option<String>,
    #[serde(default)]
    pub private_ips: Vec<String>,
}

/// Changes applied by `compute server update`
#[derive(Debug, Clone, Default)]
pub struct ServerUpdate {
    pub name: Option<String>,
}

impl fmt::Display for Server {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_resource(f, &self.name, self.id)
    }
}

impl Resource for Server {
    const COLLECTION: &'static str = "servers";
    const KIND: &'static str = "server";

    fn id(&self) -> u64 {
        self.id
    }
}

impl Mutable for Server {
    type Update = ServerUpdate;

    fn is_noop(update: &ServerUpdate) -> bool {
        update.name.is_none()
    }

    fn apply(&mut self, update: ServerUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
    }
}

impl Displayable for Server {
    fn columns(&self) -> Vec<&'static str> {
        vec!["id", "name", "status", "image", "product", "location", "public_ip", "private_ip"]
    }

    fn values(&self) -> Fields {
        Fields::from([
            ("id".to_string(), self.id.into()),
            ("name".to_string(), (&self.name).into()),
            ("status".to_string(), (&self.status).into()),
            ("image".to_string(), self.image.to_string().into()),
            ("product".to_string(), self.product.to_string().into()),
            ("location".to_string(), self.location.to_string().into()),
            ("public_ip".to_string(), self.public_ip.clone().into()),
            ("private_ip".to_string(), self.private_ips.clone().into()),
        ])
    }
}

impl Filterable for Server {
    fn filter_values(&self) -> Vec<String> {
        let mut values = vec![self.id.to_string(), self.name.clone()];
        values.extend(self.public_ip.iter().cloned());
        values
    }
}

/// Private network
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Network {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub cidr: String,
    pub location: Reference,
}

/// Changes applied by `compute network update`
#[derive(Debug, Clone, Default)]
pub struct NetworkUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_resource(f, &self.name, self.id)
    }
}

impl Resource for Network {
    const COLLECTION: &'static str = "networks";
    const KIND: &'static str = "network";

    fn id(&self) -> u64 {
        self.id
    }
}

impl Mutable for Network {
    type Update = NetworkUpdate;

    fn is_noop(update: &NetworkUpdate) -> bool {
        update.name.is_none() && update.description.is_none()
    }

    fn apply(&mut self, update: NetworkUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
    }
}

impl Displayable for Network {
    fn columns(&self) -> Vec<&'static str> {
        vec!["id", "name", "cidr", "location", "description"]
    }

    fn values(&self) -> Fields {
        Fields::from([
            ("id".to_string(), self.id.into()),
            ("name".to_string(), (&self.name).into()),
            ("cidr".to_string(), (&self.cidr).into()),
            ("location".to_string(), self.location.to_string().into()),
            ("description".to_string(), (&self.description).into()),
        ])
    }
}

impl Filterable for Network {
    fn filter_values(&self) -> Vec<String> {
        vec![self.id.to_string(), self.name.clone(), self.cidr.clone()]
    }
}
