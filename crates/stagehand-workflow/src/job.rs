use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DecodeError;
use crate::patch::PatchJobSpec;

/// One step in a workflow: a named job with a type tag and a type-specific
/// spec payload.
///
/// Definitions are owned by the workflow that contains them and are mutated
/// in place by lifecycle phases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobDefinition {
  pub name: String,
  pub job_type: JobType,
  #[serde(default)]
  pub spec: JobSpec,
}

/// Job-type tag stored on a definition and used for behavior dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JobType {
  /// Apply strategic patches to resources in one cluster namespace.
  K8sPatch,
  /// Engine-defined build/exec steps; the embedding engine registers the
  /// behavior for this tag.
  Freestyle,
}

impl fmt::Display for JobType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      JobType::K8sPatch => f.write_str("k8s-patch"),
      JobType::Freestyle => f.write_str("freestyle"),
    }
  }
}

/// A job spec in one of its two states.
///
/// Deserialization always produces `Raw` - the payload exactly as stored.
/// Lifecycle phases decode it and re-establish the typed arm, so phases that
/// follow observe typed state whatever shape the spec held on entry.
/// Serialization is transparent either way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum JobSpec {
  Raw(serde_json::Value),
  K8sPatch(Box<PatchJobSpec>),
}

impl JobSpec {
  /// The payload form of this spec, re-encoding the typed arm if needed.
  pub fn to_value(&self) -> Result<serde_json::Value, DecodeError> {
    match self {
      JobSpec::Raw(value) => Ok(value.clone()),
      JobSpec::K8sPatch(spec) => Ok(serde_json::to_value(spec)?),
    }
  }
}

impl Default for JobSpec {
  fn default() -> Self {
    JobSpec::Raw(serde_json::Value::Null)
  }
}
