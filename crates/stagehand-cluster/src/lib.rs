//! Stagehand Cluster
//!
//! The cluster inventory port. Jobs that target execution clusters query
//! the inventory through [`ClusterCatalog`] - a synchronous request/response
//! seam with no implicit retry; callers needing retry/backoff wrap the call
//! themselves.
//!
//! [`StaticCatalog`] is shipped alongside the trait for tests and for
//! embedders that load their inventory up front.

mod catalog;
mod error;
mod record;
mod static_catalog;

pub use catalog::{ClusterCatalog, ListOptions};
pub use error::CatalogError;
pub use record::{AdvancedConfig, ClusterRecord, ScheduleStrategy};
pub use static_catalog::StaticCatalog;
