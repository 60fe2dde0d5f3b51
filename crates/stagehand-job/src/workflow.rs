//! Workflow-level phase drivers.
//!
//! The engine drives each job of a definition through its lifecycle phases;
//! these helpers walk stage order then job order and stop at the first
//! failing job.

use stagehand_cluster::ClusterCatalog;
use stagehand_license::LicenseGate;
use stagehand_workflow::WorkflowDefinition;
use tracing::info;

use crate::error::JobError;
use crate::registry::JobRegistry;
use crate::task::TaskDescriptor;

/// Decode every job's authoring payload into its typed spec.
pub fn instantiate_workflow(
  workflow: &mut WorkflowDefinition,
  registry: &JobRegistry,
) -> Result<(), JobError> {
  for job in workflow.jobs_mut() {
    registry.instantiate(job)?;
  }
  Ok(())
}

/// Populate catalog-derived presets on every job.
pub fn preset_workflow(
  workflow: &mut WorkflowDefinition,
  registry: &JobRegistry,
  catalog: &dyn ClusterCatalog,
) -> Result<(), JobError> {
  for job in workflow.jobs_mut() {
    registry.set_preset(job, catalog)?;
  }
  Ok(())
}

/// Fold run-submission overrides into the definition.
///
/// Args jobs are matched by name; the per-job name/type rule still guards
/// each merge, so a name collision with a different job type merges
/// nothing. Jobs with no counterpart in `args` are left untouched.
pub fn merge_workflow_args(
  workflow: &mut WorkflowDefinition,
  registry: &JobRegistry,
  args: &WorkflowDefinition,
) -> Result<(), JobError> {
  for job in workflow.jobs_mut() {
    if let Some(args_job) = args.find_job(&job.name) {
      registry.merge_args(job, args_job)?;
    }
  }
  Ok(())
}

/// Expand every job into its task descriptors for one run.
///
/// Descriptors come back in stage order, then job order within the stage.
pub fn workflow_to_tasks(
  workflow: &mut WorkflowDefinition,
  registry: &JobRegistry,
  run_id: u64,
) -> Result<Vec<TaskDescriptor>, JobError> {
  let mut tasks = Vec::new();
  for job in workflow.jobs_mut() {
    tasks.extend(registry.to_tasks(job, run_id)?);
  }
  info!(workflow = %workflow.name, run_id, tasks = tasks.len(), "expanded workflow into tasks");
  Ok(tasks)
}

/// Lint every job before a state-changing phase is allowed.
pub fn lint_workflow(
  workflow: &WorkflowDefinition,
  registry: &JobRegistry,
  license: &dyn LicenseGate,
) -> Result<(), JobError> {
  for job in workflow.jobs() {
    registry.lint(job, license)?;
  }
  Ok(())
}
