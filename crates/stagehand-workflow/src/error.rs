use thiserror::Error;

/// Errors produced by the spec codec.
#[derive(Debug, Error)]
pub enum DecodeError {
  /// The payload's shape is structurally incompatible with the target spec,
  /// e.g. a required field holds the wrong primitive kind.
  #[error("spec payload does not match the target shape: {0}")]
  Shape(#[from] serde_json::Error),

  /// The authoring payload is not parseable YAML.
  #[error("authoring payload is not valid yaml: {0}")]
  Yaml(#[from] serde_yaml::Error),
}
