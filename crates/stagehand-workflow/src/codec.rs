//! Spec codec: converts between raw payload and typed spec forms.
//!
//! Two decode paths exist. The strict path ([`decode`]) is for payloads
//! from persisted storage and uses the payload's typing as-is. The YAML
//! path ([`decode_yaml`], [`decode_yaml_str`]) is for authoring documents,
//! where scalars get YAML's content-based typing.
//!
//! Missing optional fields default to their zero value; a payload whose
//! shape is structurally incompatible with the target fails with
//! [`DecodeError`]. Both directions are pure transformations.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::DecodeError;
use crate::job::JobSpec;

/// Strictly decode a spec payload into its typed form.
pub fn decode<T: DeserializeOwned>(spec: &JobSpec) -> Result<T, DecodeError> {
  Ok(serde_json::from_value(normalize(spec.to_value()?))?)
}

/// Leniently decode an authoring payload into its typed form.
///
/// The payload is re-serialized as YAML text and parsed from there, the
/// same route an authoring document takes into the engine.
pub fn decode_yaml<T: DeserializeOwned>(spec: &JobSpec) -> Result<T, DecodeError> {
  let text = serde_yaml::to_string(&normalize(spec.to_value()?))?;
  decode_yaml_str(&text)
}

/// Decode an authoring document given directly as YAML text.
pub fn decode_yaml_str<T: DeserializeOwned>(text: &str) -> Result<T, DecodeError> {
  Ok(serde_yaml::from_str(text)?)
}

/// Encode a typed spec back into its payload form.
pub fn encode<T: Serialize>(spec: &T) -> Result<serde_json::Value, DecodeError> {
  Ok(serde_json::to_value(spec)?)
}

// An absent spec decodes like an empty mapping.
fn normalize(value: serde_json::Value) -> serde_json::Value {
  match value {
    serde_json::Value::Null => serde_json::Value::Object(serde_json::Map::new()),
    value => value,
  }
}
