use super::{fmt_resource, Creatable, Mutable, Reference, Resource};
use crate::core::filter::Filterable;
use crate::core::table::{Displayable, Fields};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Mac bare metal device
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Device {
    pub id: u64,
    pub name: String,
    pub status: String,
    pub location: Reference,
    pub product: Reference,
    pub network: Reference,
    #[serde(default)]
    pub elastic_ip: Option<String>,
}

/// Changes applied by `mac-bare-metal device update`
#[derive(Debug, Clone, Default)]
pub struct DeviceUpdate {
    pub name: Option<String>,
}

/// Request of `mac-bare-metal device create`
#[derive(Debug, Clone)]
pub struct DeviceCreate {
    pub name: String,
    pub location: Reference,
    pub product: Reference,
    pub network: Reference,
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_resource(f, &self.name, self.id)
    }
}

impl Resource for Device {
    const COLLECTION: &'static str = "devices";
    const KIND: &'static str = "mac bare metal device";

    fn id(&self) -> u64 {
        self.id
    }
}

impl Mutable for Device {
    type Update = DeviceUpdate;

    fn is_noop(update: &DeviceUpdate) -> bool {
        update.name.is_none()
    }

    fn apply(&mut self, update: DeviceUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
    }
}

impl Creatable for Device {
    type Create = DeviceCreate;

    fn create(id: u64, request: DeviceCreate) -> Self {
        Self {
            id,
            name: request.name,
            status: "creating".to_string(),
            location: request.location,
            product: request.product,
            network: request.network,
            elastic_ip: None,
        }
    }
}

impl Displayable for Device {
    fn columns(&self) -> Vec<&'static str> {
        vec!["id", "name", "status", "location", "product", "network", "elastic_ip"]
    }

    fn values(&self) -> Fields {
        Fields::from([
            ("id".to_string(), self.id.into()),
            ("name".to_string(), (&self.name).into()),
            ("status".to_string(), (&self.status).into()),
            ("location".to_string(), self.location.to_string().into()),
            ("product".to_string(), self.product.to_string().into()),
            ("network".to_string(), self.network.to_string().into()),
            ("elastic_ip".to_string(), self.elastic_ip.clone().into()),
        ])
    }
}

impl Filterable for Device {
    fn filter_values(&self) -> Vec<String> {
        vec![self.id.to_string(), self.name.clone()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_row() {
        let device = Device::create(
            3,
            DeviceCreate {
                name: "build-1".to_string(),
                location: Reference::new(1, "ALP1"),
                product: Reference::new(9, "mac-mini-m2"),
                network: Reference::new(7, "default"),
            },
        );

        assert_eq!(device.to_string(), "build-1 (3)");
        let values = device.values();
        assert_eq!(values["status"].to_string(), "creating");
        assert_eq!(values["product"].to_string(), "mac-mini-m2");
        assert_eq!(values["elastic_ip"].to_string(), "");
        assert!(device.matches("BUILD"));
    }
}
