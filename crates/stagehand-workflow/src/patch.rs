//! Spec types for the `k8s-patch` job variant.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Declarative spec for a job that applies patches to resources in one
/// cluster namespace.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PatchJobSpec {
  #[serde(default)]
  pub cluster_id: String,
  #[serde(default)]
  pub namespace: String,
  /// Catalog-derived selection options for authoring UIs.
  ///
  /// Derived and transient: populated by the preset phase from the live
  /// cluster catalog. Persistence of this field is best-effort, not
  /// authoritative - readers must not depend on it being current.
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub cluster_options: Vec<ClusterBrief>,
  #[serde(default)]
  pub patch_items: Vec<PatchItem>,
}

/// Read-only projection of a catalog cluster offered as a selection option.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClusterBrief {
  pub cluster_id: String,
  pub cluster_name: String,
  /// Schedule strategies configured on the cluster. Empty when the cluster
  /// has no advanced scheduling configured; the cluster entry itself is
  /// still listed.
  #[serde(default)]
  pub strategies: Vec<StrategyBrief>,
}

/// Read-only projection of a schedule strategy configured on a cluster.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StrategyBrief {
  pub strategy_id: String,
  pub strategy_name: String,
}

/// One declarative patch against a named cluster resource.
///
/// `patch_content` is a template; rendering substitutes the names present in
/// `params`. A template referencing a name absent from `params` surfaces at
/// expansion time, not earlier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PatchItem {
  #[serde(default)]
  pub resource_name: String,
  #[serde(default)]
  pub resource_kind: String,
  #[serde(default)]
  pub resource_group: String,
  #[serde(default)]
  pub resource_version: String,
  #[serde(default)]
  pub patch_content: String,
  #[serde(default)]
  pub patch_strategy: PatchStrategy,
  #[serde(default)]
  pub params: HashMap<String, String>,
}

/// Patch application strategy understood by the execution runtime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PatchStrategy {
  #[default]
  StrategicMerge,
  Merge,
  Json,
}
