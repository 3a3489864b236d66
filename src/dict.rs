use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Typed access to the fields of a JSON object
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DictObject {
    src: Map<String, Value>,
}

impl DictObject {
    pub fn new(src: Map<String, Value>) -> Self {
        Self { src }
    }

    /// Raw value of a field
    pub fn get(&self, name: &str) -> Result<&Value> {
        self.src.get(name).ok_or_else(|| Error::MissingKey {
            key: name.to_string(),
        })
    }

    /// Field deserialized into `T`
    pub fn get_as<T: DeserializeOwned>(&self, name: &str) -> Result<T> {
        let value = self.get(name)?;
        Ok(T::deserialize(value)?)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.src.contains_key(name)
    }

    /// The wrapped map
    pub fn src(&self) -> &Map<String, Value> {
        &self.src
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.src
    }
}

impl From<Map<String, Value>> for DictObject {
    fn from(src: Map<String, Value>) -> Self {
        Self::new(src)
    }
}

impl TryFrom<Value> for DictObject {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Object(src) => Ok(Self::new(src)),
            Value::Null => Err(Error::NotAnObject {
                found: "null".to_string(),
            }),
            Value::Bool(_) => Err(Error::NotAnObject {
                found: "a boolean".to_string(),
            }),
            Value::Number(_) => Err(Error::NotAnObject {
                found: "a number".to_string(),
            }),
            Value::String(_) => Err(Error::NotAnObject {
                found: "a string".to_string(),
            }),
            Value::Array(_) => Err(Error::NotAnObject {
                found: "an array".to_string(),
            }),
        }
    }
}
