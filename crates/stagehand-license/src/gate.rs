use crate::error::LicenseError;

/// Entitlement check consulted before a job may run or be saved.
pub trait LicenseGate: Send + Sync {
  /// Verify the professional entitlement holds.
  fn check_professional(&self) -> Result<(), LicenseError>;
}

/// A gate that always allows.
#[derive(Debug, Clone, Copy, Default)]
pub struct Licensed;

impl LicenseGate for Licensed {
  fn check_professional(&self) -> Result<(), LicenseError> {
    Ok(())
  }
}

/// A gate that always denies with an explanatory reason.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unlicensed;

impl LicenseGate for Unlicensed {
  fn check_professional(&self) -> Result<(), LicenseError> {
    Err(LicenseError::Invalid {
      reason: "this job type requires a professional license".to_string(),
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_licensed_allows() {
    assert!(Licensed.check_professional().is_ok());
  }

  #[test]
  fn test_unlicensed_denies_with_reason() {
    let err = Unlicensed.check_professional().unwrap_err();
    assert!(err.to_string().contains("professional license"));
  }
}
