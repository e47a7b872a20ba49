//! Decoding of execution results as served by the evaluation API.
//!
//! An execution result is an envelope `{"result": <object>, "error": "..."}`.
//! Each object names its variant in `type.class` and carries the payload in
//! the matching `*Value` field:
//!
//! ```json
//! {"type": {"class": "list"},
//!  "listValue": {"elements": [{"type": {"class": "number"}, "numberValue": 1}]}}
//! ```
//!
//! Record properties arrive as a JSON object. Member order is kept as the
//! property order and repeated member names are kept as separate properties.

use std::fmt;
use std::io::Read;

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;

use super::value::{Property, ResultKind, ResultValue};
use crate::error::{Result, WireError};

#[derive(Debug, Default, Deserialize)]
struct WireExecutionResult {
    #[serde(default)]
    result: Option<WireObject>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireObject {
    #[serde(rename = "type", default)]
    object_type: Option<WireType>,
    #[serde(default)]
    boolean_value: Option<bool>,
    #[serde(default)]
    number_value: Option<f64>,
    #[serde(default)]
    string_value: Option<String>,
    #[serde(default)]
    lambda_value: Option<WireLambda>,
    #[serde(default)]
    list_value: Option<WireList>,
    #[serde(default)]
    record_value: Option<WireRecord>,
    #[serde(default)]
    error_value: Option<WireErrorValue>,
}

#[derive(Debug, Deserialize)]
struct WireType {
    class: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireLambda {
    #[serde(default)]
    free_variables: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize)]
struct WireList {
    #[serde(default)]
    elements: Option<Vec<WireObject>>,
}

#[derive(Debug, Default, Deserialize)]
struct WireRecord {
    #[serde(default)]
    properties: Option<WireProperties>,
}

#[derive(Debug, Default, Deserialize)]
struct WireErrorValue {
    #[serde(default)]
    message: String,
}

/// Record members in document order, duplicates included.
#[derive(Debug, Default)]
struct WireProperties(Vec<(String, WireObject)>);

impl<'de> Deserialize<'de> for WireProperties {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct PropertiesVisitor;

        impl<'de> Visitor<'de> for PropertiesVisitor {
            type Value = WireProperties;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of property names to result objects")
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((name, object)) = map.next_entry::<String, WireObject>()? {
                    entries.push((name, object));
                }
                Ok(WireProperties(entries))
            }
        }

        deserializer.deserialize_map(PropertiesVisitor)
    }
}

impl WireObject {
    fn into_value(self, path: &str) -> Result<ResultValue> {
        let Some(object_type) = self.object_type else {
            return Err(WireError::MissingType {
                path: path.to_string(),
            });
        };
        let Some(kind) = ResultKind::from_name(&object_type.class) else {
            log::debug!("rejecting result class '{}' at {}", object_type.class, path);
            return Err(WireError::UnknownClass {
                class: object_type.class,
                path: path.to_string(),
            });
        };

        let missing = |field: &'static str| WireError::MissingPayload {
            kind,
            field,
            path: path.to_string(),
        };

        let value = match kind {
            ResultKind::None => ResultValue::None,
            ResultKind::Boolean => {
                ResultValue::Boolean(self.boolean_value.ok_or_else(|| missing("booleanValue"))?)
            }
            ResultKind::Number => {
                ResultValue::Number(self.number_value.ok_or_else(|| missing("numberValue"))?)
            }
            ResultKind::String => {
                ResultValue::String(self.string_value.ok_or_else(|| missing("stringValue"))?)
            }
            ResultKind::Lambda => {
                let lambda = self.lambda_value.ok_or_else(|| missing("lambdaValue"))?;
                ResultValue::Lambda {
                    free_variables: lambda.free_variables.unwrap_or_default(),
                }
            }
            ResultKind::List => {
                let list = self.list_value.ok_or_else(|| missing("listValue"))?;
                let elements = list
                    .elements
                    .unwrap_or_default()
                    .into_iter()
                    .enumerate()
                    .map(|(i, element)| {
                        element.into_value(&format!("{}.listValue.elements[{}]", path, i))
                    })
                    .collect::<Result<Vec<_>>>()?;
                ResultValue::List(elements)
            }
            ResultKind::Record => {
                let record = self.record_value.ok_or_else(|| missing("recordValue"))?;
                let properties = record
                    .properties
                    .unwrap_or_default()
                    .0
                    .into_iter()
                    .map(|(name, object)| -> Result<Property> {
                        let value = object
                            .into_value(&format!("{}.recordValue.properties.{}", path, name))?;
                        Ok(Property::new(name, value))
                    })
                    .collect::<Result<Vec<_>>>()?;
                ResultValue::Record(properties)
            }
            ResultKind::Error => {
                let error = self.error_value.ok_or_else(|| missing("errorValue"))?;
                ResultValue::Error {
                    message: error.message,
                }
            }
        };
        Ok(value)
    }
}

impl WireExecutionResult {
    fn into_value(self) -> Result<ResultValue> {
        if let Some(message) = self.error.filter(|m| !m.is_empty()) {
            return Ok(ResultValue::Error { message });
        }
        match self.result {
            Some(object) => object.into_value("result"),
            None => Ok(ResultValue::None),
        }
    }
}

/// Deserialize without serde_json's nesting limit; results may nest as deep
/// as the evaluator produced them.
fn from_deserializer<'de, R, T>(mut de: serde_json::Deserializer<R>) -> Result<T>
where
    R: serde_json::de::Read<'de>,
    T: Deserialize<'de>,
{
    de.disable_recursion_limit();
    let value = T::deserialize(&mut de)?;
    de.end()?;
    Ok(value)
}

/// Decode an execution-result envelope.
///
/// A non-empty `error` becomes [`ResultValue::Error`]; a missing or null
/// `result` becomes [`ResultValue::None`].
pub fn decode_execution_result(json: &str) -> Result<ResultValue> {
    let envelope: WireExecutionResult =
        from_deserializer(serde_json::Deserializer::from_str(json))?;
    let value = envelope.into_value()?;
    log::debug!("decoded {} result", value.kind());
    Ok(value)
}

/// Decode an execution-result envelope from a reader.
pub fn decode_execution_result_reader<R: Read>(reader: R) -> Result<ResultValue> {
    let envelope: WireExecutionResult =
        from_deserializer(serde_json::Deserializer::from_reader(reader))?;
    let value = envelope.into_value()?;
    log::debug!("decoded {} result", value.kind());
    Ok(value)
}

/// Decode a bare result object (no envelope).
pub fn decode_object(json: &str) -> Result<ResultValue> {
    let object: WireObject = from_deserializer(serde_json::Deserializer::from_str(json))?;
    object.into_value("result")
}

/// Decode a bare result object from a reader.
pub fn decode_object_reader<R: Read>(reader: R) -> Result<ResultValue> {
    let object: WireObject = from_deserializer(serde_json::Deserializer::from_reader(reader))?;
    object.into_value("result")
}
