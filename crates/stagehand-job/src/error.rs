use stagehand_cluster::CatalogError;
use stagehand_license::LicenseError;
use stagehand_render::RenderError;
use stagehand_workflow::{DecodeError, JobType};
use thiserror::Error;

/// Errors surfaced by job lifecycle phases.
///
/// Nothing here is retried internally; every phase either returns a fully
/// updated definition or one of these with no partial mutation left behind.
#[derive(Debug, Error)]
pub enum JobError {
  /// The definition's spec payload could not be decoded.
  #[error(transparent)]
  Decode(#[from] DecodeError),

  /// The cluster catalog query failed.
  #[error("failed to list clusters: {source}")]
  Catalog {
    #[from]
    source: CatalogError,
  },

  /// The entitlement precondition is not met.
  #[error(transparent)]
  License(#[from] LicenseError),

  /// Template rendering failed during task expansion.
  #[error(transparent)]
  Render(#[from] RenderError),

  /// No behavior is registered for the definition's job type.
  #[error("unknown job type: {0}")]
  UnknownJobType(JobType),
}
