use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use stagehand_workflow::{JobType, PatchStrategy};

/// Key under which a descriptor's `job_info` carries the originating job
/// name.
pub const JOB_NAME_KEY: &str = "jobName";

/// An executable unit handed to the task execution runtime.
///
/// Descriptors are derived, immutable snapshots created fresh for every run.
/// They are owned by the run's task list and never fed back into the
/// definition they came from, so concurrent runs of one definition cannot
/// observe each other's output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskDescriptor {
  pub name: String,
  /// Stable key for the task within the run.
  pub key: String,
  /// Free-form labels; always carries at least [`JOB_NAME_KEY`].
  pub job_info: HashMap<String, String>,
  pub job_type: JobType,
  pub spec: TaskPayload,
}

/// Type-specific task payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TaskPayload {
  K8sPatch(PatchTaskSpec),
}

/// Task payload for the `k8s-patch` variant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PatchTaskSpec {
  pub cluster_id: String,
  pub namespace: String,
  #[serde(default)]
  pub patch_items: Vec<RenderedPatchItem>,
}

/// A patch item with its content fully rendered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderedPatchItem {
  pub resource_name: String,
  pub resource_kind: String,
  pub resource_group: String,
  pub resource_version: String,
  /// Rendered form: every parameter marker substituted.
  pub patch_content: String,
  pub patch_strategy: PatchStrategy,
  pub params: HashMap<String, String>,
}
