use std::fmt;

use common_utils::errors::{CustomResult, ParsingError};
use error_stack::{report, ResultExt};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{Map, Value};

/// A payment-method record exactly as the gateway returned it.
///
/// The record is kept verbatim for audit purposes. Its `Debug` output only lists the top-level
/// keys so that the billing and card data it holds never end up in logs.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UpstreamRecord(Map<String, Value>);

impl UpstreamRecord {
    pub fn new(record: Map<String, Value>) -> Self {
        Self(record)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Looks up a string at `path`, treating `null`, empty and whitespace-only strings as absent.
    pub fn get_str(&self, path: &[&str]) -> Option<&str> {
        let (last, parents) = path.split_last()?;
        let mut object = &self.0;
        for key in parents {
            object = object.get(*key)?.as_object()?;
        }
        object
            .get(*last)?
            .as_str()
            .filter(|value| !value.trim().is_empty())
    }

    /// Deserializes the nested object under `key`. A missing or `null` key yields `None`.
    pub fn parse_object<T>(&self, key: &'static str) -> CustomResult<Option<T>, ParsingError>
    where
        T: DeserializeOwned,
    {
        match self.0.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => serde_json::from_value::<T>(value.clone())
                .map(Some)
                .change_context(ParsingError::StructParseFailure(key)),
        }
    }
}

impl From<Map<String, Value>> for UpstreamRecord {
    fn from(record: Map<String, Value>) -> Self {
        Self(record)
    }
}

impl TryFrom<Value> for UpstreamRecord {
    type Error = error_stack::Report<ParsingError>;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(record) => Ok(Self(record)),
            other => Err(report!(ParsingError::StructParseFailure("UpstreamRecord"))
                .attach_printable(format!("expected a JSON object, found {}", json_kind(&other)))),
        }
    }
}

impl fmt::Debug for UpstreamRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UpstreamRecord")
            .field("keys", &self.0.keys().collect::<Vec<_>>())
            .finish()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
