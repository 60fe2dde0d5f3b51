//! The `k8s-patch` job behavior.

use std::collections::HashMap;

use stagehand_cluster::{ClusterCatalog, ListOptions};
use stagehand_license::LicenseGate;
use stagehand_workflow::{
  ClusterBrief, JobDefinition, JobSpec, PatchJobSpec, StrategyBrief, codec,
};
use tracing::debug;

use crate::error::JobError;
use crate::expand::expand;
use crate::lifecycle::JobBehavior;
use crate::task::{JOB_NAME_KEY, TaskDescriptor, TaskPayload};

/// Lifecycle behavior for jobs that apply strategic patches to resources in
/// one cluster namespace.
#[derive(Debug, Clone, Copy, Default)]
pub struct K8sPatchJob;

impl JobBehavior for K8sPatchJob {
  fn instantiate(&self, job: &mut JobDefinition) -> Result<(), JobError> {
    let spec: PatchJobSpec = codec::decode_yaml(&job.spec)?;
    job.spec = JobSpec::K8sPatch(Box::new(spec));
    Ok(())
  }

  fn set_preset(
    &self,
    job: &mut JobDefinition,
    catalog: &dyn ClusterCatalog,
  ) -> Result<(), JobError> {
    let mut spec: PatchJobSpec = codec::decode(&job.spec)?;
    let clusters = catalog.list(&ListOptions::default())?;
    debug!(job = %job.name, clusters = clusters.len(), "populating cluster options");

    let mut options = Vec::with_capacity(clusters.len());
    for cluster in clusters {
      let strategies = cluster
        .advanced_config
        .map(|config| {
          config
            .schedule_strategies
            .into_iter()
            .map(|strategy| StrategyBrief {
              strategy_id: strategy.strategy_id,
              strategy_name: strategy.strategy_name,
            })
            .collect()
        })
        .unwrap_or_default();
      options.push(ClusterBrief {
        cluster_id: cluster.id,
        cluster_name: cluster.name,
        strategies,
      });
    }

    spec.cluster_options = options;
    job.spec = JobSpec::K8sPatch(Box::new(spec));
    Ok(())
  }

  fn merge_args(&self, job: &mut JobDefinition, args: &JobDefinition) -> Result<(), JobError> {
    if job.name != args.name || job.job_type != args.job_type {
      debug!(job = %job.name, args = %args.name, "merge skipped: name or job type mismatch");
      return Ok(());
    }

    let mut spec: PatchJobSpec = codec::decode(&job.spec)?;
    let args_spec: PatchJobSpec = codec::decode(&args.spec)?;
    spec.patch_items = args_spec.patch_items;
    job.spec = JobSpec::K8sPatch(Box::new(spec));
    Ok(())
  }

  fn to_tasks(
    &self,
    job: &mut JobDefinition,
    _run_id: u64,
  ) -> Result<Vec<TaskDescriptor>, JobError> {
    let spec: PatchJobSpec = codec::decode(&job.spec)?;
    let task_spec = expand(&spec)?;

    let descriptor = TaskDescriptor {
      name: job.name.clone(),
      key: job.name.clone(),
      job_info: HashMap::from([(JOB_NAME_KEY.to_string(), job.name.clone())]),
      job_type: job.job_type,
      spec: TaskPayload::K8sPatch(task_spec),
    };

    job.spec = JobSpec::K8sPatch(Box::new(spec));
    Ok(vec![descriptor])
  }

  fn lint(&self, _job: &JobDefinition, license: &dyn LicenseGate) -> Result<(), JobError> {
    license.check_professional()?;
    Ok(())
  }
}
