use super::{fmt_resource, Resource};
use crate::core::filter::Filterable;
use crate::core::table::{Displayable, Fields};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Product category
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProductType {
    ComputeServer,
    KubernetesNode,
    MacBareMetal,
    ObjectStorage,
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductType::ComputeServer => write!(f, "compute-server"),
            ProductType::KubernetesNode => write!(f, "kubernetes-node"),
            ProductType::MacBareMetal => write!(f, "mac-bare-metal"),
            ProductType::ObjectStorage => write!(f, "object-storage"),
        }
    }
}

/// Orderable product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub name: String,
    #[serde(rename = "type")]
    pub product_type: ProductType,
    #[serde(default)]
    pub cpu: u32,
    /// Memory in GiB
    #[serde(default)]
    pub memory: u32,
    /// Storage in GiB
    #[serde(default)]
    pub storage: u32,
    /// Monthly price
    pub price: f64,
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_resource(f, &self.name, self.id)
    }
}

impl Resource for Product {
    const COLLECTION: &'static str = "products";
    const KIND: &'static str = "product";

    fn id(&self) -> u64 {
        self.id
    }
}

impl Displayable for Product {
    fn columns(&self) -> Vec<&'static str> {
        vec!["id", "name", "type", "cpu", "memory", "storage", "price"]
    }

    fn values(&self) -> Fields {
        Fields::from([
            ("id".to_string(), self.id.into()),
            ("name".to_string(), (&self.name).into()),
            ("type".to_string(), self.product_type.to_string().into()),
            ("cpu".to_string(), self.cpu.into()),
            ("memory".to_string(), format!("{} GiB", self.memory).into()),
            ("storage".to_string(), format!("{} GiB", self.storage).into()),
            ("price".to_string(), format!("{:.2}", self.price).into()),
        ])
    }
}

impl Filterable for Product {
    fn filter_values(&self) -> Vec<String> {
        vec![self.id.to_string(), self.name.clone()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_type_serde() {
        let product: Product = serde_json::from_str(
            r#"{"id": 4, "name": "b1.4x8", "type": "kubernetes-node", "cpu": 4, "memory": 8, "price": 80.5}"#,
        )
        .unwrap();

        assert_eq!(product.product_type, ProductType::KubernetesNode);
        assert_eq!(product.storage, 0);
        assert_eq!(product.values()["price"].to_string(), "80.50");
        assert_eq!(product.values()["type"].to_string(), "kubernetes-node");
    }
}
