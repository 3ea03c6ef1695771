// Core module - Presentation, resolution and the catalog boundary
pub mod catalog;
pub mod filter;
pub mod table;

pub use catalog::Catalog;
pub use filter::{find, find_one, FilterError, Filterable};
pub use table::{Displayable, Item, OutputError, RenderOptions, Table};
