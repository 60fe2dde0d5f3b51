use thiserror::Error;

/// Errors from entitlement checks.
#[derive(Debug, Error)]
pub enum LicenseError {
  /// The entitlement precondition is not met. The reason is user-facing
  /// denial text.
  #[error("license invalid: {reason}")]
  Invalid { reason: String },
}
