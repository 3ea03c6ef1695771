use serde_json::Value as JsonValue;
use std::collections::BTreeMap;
use std::fmt;

/// Field values of one row, keyed by column name
pub type Fields = BTreeMap<String, Value>;

/// A single cell value before stringification
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Missing value, rendered as an empty cell
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    /// Rendered as its elements joined by `", "`
    List(Vec<Value>),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Bool(value) => write!(f, "{}", value),
            Value::Int(value) => write!(f, "{}", value),
            Value::Float(value) => write!(f, "{}", value),
            Value::Text(value) => f.write_str(value),
            Value::List(values) => {
                for (idx, value) in values.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", value)?;
                }
                Ok(())
            }
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Value::Text(value.clone())
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value.into())
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Int(value.into())
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        i64::try_from(value).map_or_else(|_| Value::Text(value.to_string()), Value::Int)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Value::List(values.into_iter().map(Into::into).collect())
    }
}

impl From<JsonValue> for Value {
    fn from(value: JsonValue) -> Self {
        match value {
            JsonValue::Null => Value::Null,
            JsonValue::Bool(value) => Value::Bool(value),
            JsonValue::Number(number) => {
                if let Some(value) = number.as_i64() {
                    Value::Int(value)
                } else if let Some(value) = number.as_f64() {
                    Value::Float(value)
                } else {
                    Value::Text(number.to_string())
                }
            }
            JsonValue::String(value) => Value::Text(value),
            JsonValue::Array(values) => Value::List(values.into_iter().map(Value::from).collect()),
            // Nested objects have no column of their own, keep them readable as compact JSON
            object @ JsonValue::Object(_) => Value::Text(object.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalar_display() {
        assert_eq!(Value::Null.to_string(), "");
        assert_eq!(Value::from(true).to_string(), "true");
        assert_eq!(Value::from(-42i64).to_string(), "-42");
        assert_eq!(Value::from(2.5).to_string(), "2.5");
        assert_eq!(Value::from("zrh1").to_string(), "zrh1");
    }

    #[test]
    fn test_option_and_list_display() {
        assert_eq!(Value::from(None::<String>).to_string(), "");
        assert_eq!(Value::from(Some(8u32)).to_string(), "8");
        assert_eq!(Value::from(vec!["10.0.0.1", "10.0.0.2"]).to_string(), "10.0.0.1, 10.0.0.2");
        assert_eq!(Value::List(Vec::new()).to_string(), "");
    }

    #[test]
    fn test_large_unsigned_falls_back_to_text() {
        assert_eq!(Value::from(u64::MAX), Value::Text(u64::MAX.to_string()));
        assert_eq!(Value::from(7u64), Value::Int(7));
    }

    #[test]
    fn test_from_json() {
        assert_eq!(Value::from(json!(null)), Value::Null);
        assert_eq!(Value::from(json!(3)), Value::Int(3));
        assert_eq!(Value::from(json!(1.25)), Value::Float(1.25));
        assert_eq!(Value::from(json!("abc")), Value::Text("abc".to_string()));
        assert_eq!(
            Value::from(json!(["a", 1])),
            Value::List(vec![Value::Text("a".to_string()), Value::Int(1)])
        );
        assert_eq!(Value::from(json!({"id": 1})).to_string(), r#"{"id":1}"#);
    }
}
