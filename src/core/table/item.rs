use super::value::{Fields, Value};
use super::OutputError;
use serde_json::Value as JsonValue;

/// Capability a domain value needs to be printed as a table row.
///
/// `columns` gives the column order used when the value is the first one
/// inserted into a table, `values` gives the cells keyed by column name.
/// Keys without a matching column are ignored, columns without a key stay
/// empty.
pub trait Displayable {
    fn columns(&self) -> Vec<&'static str>;
    fn values(&self) -> Fields;
}

impl<T: Displayable + ?Sized> Displayable for &T {
    fn columns(&self) -> Vec<&'static str> {
        (**self).columns()
    }

    fn values(&self) -> Fields {
        (**self).values()
    }
}

/// Something a table knows how to flatten into rows
pub enum Item<'a> {
    /// Every element is inserted in order
    Sequence(Vec<Item<'a>>),
    /// A single row given as raw field values
    Mapping(Fields),
    /// A single row produced by a [`Displayable`] value
    Record(&'a dyn Displayable),
}

impl<'a> Item<'a> {
    pub fn record<T: Displayable>(value: &'a T) -> Self {
        Item::Record(value)
    }

    pub fn records<T: Displayable>(values: &'a [T]) -> Self {
        Item::Sequence(values.iter().map(|value| Item::Record(value)).collect())
    }

    pub fn mapping<K, V, I>(fields: I) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        Item::Mapping(
            fields
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

impl TryFrom<JsonValue> for Item<'static> {
    type Error = OutputError;

    fn try_from(value: JsonValue) -> Result<Self, Self::Error> {
        match value {
            JsonValue::Array(values) => values
                .into_iter()
                .map(Item::try_from)
                .collect::<Result<Vec<_>, _>>()
                .map(Item::Sequence),
            JsonValue::Object(map) => Ok(Item::Mapping(
                map.into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect(),
            )),
            other => Err(OutputError::UnsupportedType {
                type_name: json_type_name(&other),
            }),
        }
    }
}

fn json_type_name(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "bool",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}
