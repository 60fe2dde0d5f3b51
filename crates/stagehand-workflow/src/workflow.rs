use serde::{Deserialize, Serialize};

use crate::job::JobDefinition;

/// A workflow definition: ordered stages of ordered jobs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkflowDefinition {
  pub name: String,
  #[serde(default)]
  pub stages: Vec<StageDefinition>,
}

/// One stage of a workflow.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StageDefinition {
  pub name: String,
  #[serde(default)]
  pub jobs: Vec<JobDefinition>,
}

impl WorkflowDefinition {
  /// Iterate all jobs in stage order, then job order within the stage.
  pub fn jobs(&self) -> impl Iterator<Item = &JobDefinition> {
    self.stages.iter().flat_map(|stage| stage.jobs.iter())
  }

  /// Mutable variant of [`WorkflowDefinition::jobs`].
  pub fn jobs_mut(&mut self) -> impl Iterator<Item = &mut JobDefinition> {
    self.stages.iter_mut().flat_map(|stage| stage.jobs.iter_mut())
  }

  /// Find a job by name, searching in stage order.
  pub fn find_job(&self, name: &str) -> Option<&JobDefinition> {
    self.jobs().find(|job| job.name == name)
  }
}
