use stagehand_cluster::ClusterCatalog;
use stagehand_license::LicenseGate;
use stagehand_workflow::JobDefinition;

use crate::error::JobError;
use crate::task::TaskDescriptor;

/// The five-phase lifecycle every job type implements.
///
/// Behaviors are stateless; the definition is passed in and mutated by the
/// phase. Each mutating phase decodes first and assigns `job.spec` last, so
/// a failure leaves no partial mutation behind, and every phase leaves the
/// spec in its typed form for the phases that follow.
pub trait JobBehavior: Send + Sync {
  /// Decode a raw authoring payload into the typed spec.
  ///
  /// Runs when a workflow is authored or edited.
  fn instantiate(&self, job: &mut JobDefinition) -> Result<(), JobError>;

  /// Enrich the spec with live catalog-derived selection options.
  ///
  /// Catalog failures propagate with context; they are never swallowed.
  fn set_preset(
    &self,
    job: &mut JobDefinition,
    catalog: &dyn ClusterCatalog,
  ) -> Result<(), JobError>;

  /// Fold caller-supplied overrides into the definition.
  ///
  /// A no-op unless `args` carries the same name and job type. Identity and
  /// location fields stay with the base definition; only content comes from
  /// the override.
  fn merge_args(&self, job: &mut JobDefinition, args: &JobDefinition) -> Result<(), JobError>;

  /// Expand the definition into executable task descriptors for one run.
  fn to_tasks(
    &self,
    job: &mut JobDefinition,
    run_id: u64,
  ) -> Result<Vec<TaskDescriptor>, JobError>;

  /// Verify non-spec preconditions before the job may run or be saved.
  fn lint(&self, job: &JobDefinition, license: &dyn LicenseGate) -> Result<(), JobError>;
}
