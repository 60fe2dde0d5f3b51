use crate::error::CatalogError;
use crate::record::ClusterRecord;

/// Filter for a catalog query. `ids: None` lists every cluster.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListOptions {
  pub ids: Option<Vec<String>>,
}

/// Query seam to the cluster inventory.
pub trait ClusterCatalog: Send + Sync {
  /// List clusters matching the filter, in inventory order.
  fn list(&self, options: &ListOptions) -> Result<Vec<ClusterRecord>, CatalogError>;
}
