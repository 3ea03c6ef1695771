//! Cloudbit Library
//!
//! Command line client for a cloud management platform. The interesting parts
//! live in [`core`]: a generic table builder that turns any [`Displayable`]
//! resource into aligned text, and a matcher resolving user supplied terms to
//! exactly one resource.

pub mod cli;
pub mod core;
pub mod domain;
pub mod infrastructure;

pub use crate::core::catalog::Catalog;
pub use crate::core::filter::{find, find_one, FilterError, Filterable};
pub use crate::core::table::{Displayable, Fields, Item, OutputError, RenderOptions, Table, Value};
pub use domain::config::CloudConfig;
pub use domain::error::{CloudError, CloudResult};
pub use infrastructure::snapshot::SnapshotCatalog;
