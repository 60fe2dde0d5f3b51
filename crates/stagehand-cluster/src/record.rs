use serde::{Deserialize, Serialize};

/// A cluster known to the inventory.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClusterRecord {
  pub id: String,
  pub name: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub advanced_config: Option<AdvancedConfig>,
}

/// Advanced scheduling configuration on a cluster.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdvancedConfig {
  #[serde(default)]
  pub schedule_strategies: Vec<ScheduleStrategy>,
}

/// A named scheduling policy configured on a cluster, offered as a
/// selectable option during job authoring.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleStrategy {
  pub strategy_id: String,
  pub strategy_name: String,
}
