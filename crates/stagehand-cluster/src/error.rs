use thiserror::Error;

/// Errors from cluster inventory queries.
#[derive(Debug, Error)]
pub enum CatalogError {
  /// The inventory lookup failed.
  #[error("cluster query failed: {reason}")]
  Query { reason: String },
}
