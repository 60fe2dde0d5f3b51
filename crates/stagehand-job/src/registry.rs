//! Behavior registry: job-type tag to lifecycle implementation.

use std::collections::HashMap;

use stagehand_cluster::ClusterCatalog;
use stagehand_license::LicenseGate;
use stagehand_workflow::{JobDefinition, JobType};

use crate::error::JobError;
use crate::lifecycle::JobBehavior;
use crate::patch::K8sPatchJob;
use crate::task::TaskDescriptor;

/// Maps job-type tags to their lifecycle behaviors.
///
/// The engine holds one registry and dispatches every phase through it, so
/// job-type variants register here instead of being switched over at call
/// sites. Dispatching a tag with no registered behavior is
/// [`JobError::UnknownJobType`].
pub struct JobRegistry {
  behaviors: HashMap<JobType, Box<dyn JobBehavior>>,
}

impl JobRegistry {
  /// An empty registry.
  pub fn new() -> Self {
    Self {
      behaviors: HashMap::new(),
    }
  }

  /// A registry with the built-in job types registered.
  pub fn builtin() -> Self {
    let mut registry = Self::new();
    registry.register(JobType::K8sPatch, Box::new(K8sPatchJob));
    registry
  }

  /// Register (or replace) the behavior for a job type.
  pub fn register(&mut self, job_type: JobType, behavior: Box<dyn JobBehavior>) {
    self.behaviors.insert(job_type, behavior);
  }

  /// Look up the behavior for a job type.
  pub fn get(&self, job_type: JobType) -> Result<&dyn JobBehavior, JobError> {
    self
      .behaviors
      .get(&job_type)
      .map(|behavior| behavior.as_ref())
      .ok_or(JobError::UnknownJobType(job_type))
  }

  /// Dispatch the instantiate phase for a definition.
  pub fn instantiate(&self, job: &mut JobDefinition) -> Result<(), JobError> {
    self.get(job.job_type)?.instantiate(job)
  }

  /// Dispatch the preset phase for a definition.
  pub fn set_preset(
    &self,
    job: &mut JobDefinition,
    catalog: &dyn ClusterCatalog,
  ) -> Result<(), JobError> {
    self.get(job.job_type)?.set_preset(job, catalog)
  }

  /// Dispatch the merge phase for a definition.
  pub fn merge_args(&self, job: &mut JobDefinition, args: &JobDefinition) -> Result<(), JobError> {
    self.get(job.job_type)?.merge_args(job, args)
  }

  /// Dispatch the expansion phase for a definition.
  pub fn to_tasks(
    &self,
    job: &mut JobDefinition,
    run_id: u64,
  ) -> Result<Vec<TaskDescriptor>, JobError> {
    self.get(job.job_type)?.to_tasks(job, run_id)
  }

  /// Dispatch the lint phase for a definition.
  pub fn lint(&self, job: &JobDefinition, license: &dyn LicenseGate) -> Result<(), JobError> {
    self.get(job.job_type)?.lint(job, license)
  }
}

impl Default for JobRegistry {
  fn default() -> Self {
    Self::new()
  }
}
