use super::{fmt_resource, Resource};
use crate::core::filter::Filterable;
use crate::core::table::{Displayable, Fields};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Datacenter location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: u64,
    pub name: String,
    /// Short location key, e.g. `ALP1`
    pub key: String,
    pub city: String,
    /// Names of the modules available in this location
    #[serde(default)]
    pub modules: Vec<String>,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_resource(f, &self.name, self.id)
    }
}

impl Resource for Location {
    const COLLECTION: &'static str = "locations";
    const KIND: &'static str = "location";

    fn id(&self) -> u64 {
        self.id
    }
}

impl Displayable for Location {
    fn columns(&self) -> Vec<&'static str> {
        vec!["id", "name", "key", "city", "modules"]
    }

    fn values(&self) -> Fields {
        Fields::from([
            ("id".to_string(), self.id.into()),
            ("name".to_string(), (&self.name).into()),
            ("key".to_string(), (&self.key).into()),
            ("city".to_string(), (&self.city).into()),
            ("modules".to_string(), self.modules.clone().into()),
        ])
    }
}

impl Filterable for Location {
    fn filter_values(&self) -> Vec<String> {
        vec![self.id.to_string(), self.name.clone(), self.key.clone(), self.city.clone()]
    }
}
