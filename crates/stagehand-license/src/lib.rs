//! Stagehand License
//!
//! Entitlement checks modeled as an injected capability. Phases that gate on
//! licensing take a [`LicenseGate`] rather than calling a process-wide
//! service, so embedders and tests substitute their own gate.

mod error;
mod gate;

pub use error::LicenseError;
pub use gate::{LicenseGate, Licensed, Unlicensed};
