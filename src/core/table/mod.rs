// Table module - Generic tabular presentation of domain values
pub mod column;
pub mod item;
pub mod render;
pub mod value;

pub use column::Column;
pub use item::{Displayable, Item};
pub use render::RenderOptions;
pub use value::{Fields, Value};

use serde_json::Value as JsonValue;
use std::io;
use tracing::{debug, trace};

/// Table building and rendering errors
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("unable to display value of type {type_name:?}")]
    UnsupportedType { type_name: &'static str },
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// In-memory table built from one or more items.
///
/// The first inserted item fixes the columns. Rows inserted afterwards are
/// projected onto those columns: missing fields become empty cells and
/// unknown fields are dropped.
#[derive(Debug, Clone, Default)]
pub struct Table {
    columns: Vec<Column>,
    rows: Vec<Vec<String>>,
    sealed: bool,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn find_column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    /// Flatten `item` into rows
    pub fn insert(&mut self, item: Item<'_>) {
        match item {
            Item::Sequence(items) => {
                for item in items {
                    self.insert(item);
                }
            }
            Item::Mapping(fields) => {
                if !self.sealed {
                    // Fields iterate in key order, so mapping columns come out sorted
                    let names: Vec<String> = fields.keys().cloned().collect();
                    self.insert_columns(names);
                }
                self.insert_row(fields);
            }
            Item::Record(record) => {
                if !self.sealed {
                    self.insert_columns(record.columns());
                }
                self.insert_row(record.values());
            }
        }
    }

    /// Insert a runtime-shaped JSON value, objects become rows and arrays are
    /// flattened
    pub fn insert_json(&mut self, value: JsonValue) -> Result<(), OutputError> {
        let item = Item::try_from(value)?;
        self.insert(item);
        Ok(())
    }

    /// Define the columns, a no-op once the schema is fixed
    pub fn insert_columns<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if self.sealed {
            debug!("Table columns already defined, ignoring new column set");
            return;
        }
        self.sealed = true;

        for name in names {
            let name = name.into();
            if self.find_column(&name).is_some() {
                debug!("Ignoring duplicate column '{}'", name);
                continue;
            }
            let index = self.columns.len();
            self.columns.push(Column::new(index, name));
        }

        trace!("Table columns: {:?}", self.columns.iter().map(|c| &c.name).collect::<Vec<_>>());
    }

    /// Append a row, placing each value under the column of the same name
    pub fn insert_row(&mut self, fields: Fields) {
        let mut row = vec![String::new(); self.columns.len()];

        for (name, value) in fields {
            let Some(column) = self.columns.iter_mut().find(|column| column.name == name) else {
                trace!("Dropping field '{}' without matching column", name);
                continue;
            };

            let cell = value.to_string();
            column.fit(&cell);
            row[column.index] = cell;
        }

        self.rows.push(row);
    }
}
