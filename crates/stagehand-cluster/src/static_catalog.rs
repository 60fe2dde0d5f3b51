use crate::catalog::{ClusterCatalog, ListOptions};
use crate::error::CatalogError;
use crate::record::ClusterRecord;

/// In-memory catalog over a fixed set of records.
///
/// Records are returned in construction order.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
  records: Vec<ClusterRecord>,
}

impl StaticCatalog {
  pub fn new(records: Vec<ClusterRecord>) -> Self {
    Self { records }
  }
}

impl ClusterCatalog for StaticCatalog {
  fn list(&self, options: &ListOptions) -> Result<Vec<ClusterRecord>, CatalogError> {
    let records = match &options.ids {
      Some(ids) => self
        .records
        .iter()
        .filter(|record| ids.contains(&record.id))
        .cloned()
        .collect(),
      None => self.records.clone(),
    };
    Ok(records)
  }
}
