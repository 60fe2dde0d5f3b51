//! Tests for the workflow-level phase drivers.

use serde_json::json;
use stagehand_cluster::StaticCatalog;
use stagehand_job::{
  JobRegistry, instantiate_workflow, lint_workflow, merge_workflow_args, preset_workflow,
  workflow_to_tasks,
};
use stagehand_license::{Licensed, Unlicensed};
use stagehand_workflow::{
  JobDefinition, JobSpec, JobType, StageDefinition, WorkflowDefinition,
};

fn patch_job(name: &str, resource: &str) -> JobDefinition {
  JobDefinition {
    name: name.to_string(),
    job_type: JobType::K8sPatch,
    spec: JobSpec::Raw(json!({
      "cluster_id": "c-1",
      "namespace": "staging",
      "patch_items": [{
        "resource_name": resource,
        "resource_kind": "Deployment",
        "patch_content": "replicas: {{.count}}",
        "params": {"count": "2"},
      }],
    })),
  }
}

fn release_workflow() -> WorkflowDefinition {
  WorkflowDefinition {
    name: "release".to_string(),
    stages: vec![
      StageDefinition {
        name: "canary".to_string(),
        jobs: vec![patch_job("patch-canary", "web-canary")],
      },
      StageDefinition {
        name: "rollout".to_string(),
        jobs: vec![
          patch_job("patch-web", "web"),
          patch_job("patch-api", "api"),
        ],
      },
    ],
  }
}

#[test]
fn test_workflow_to_tasks_preserves_stage_order() {
  let registry = JobRegistry::builtin();
  let mut workflow = release_workflow();

  let tasks = workflow_to_tasks(&mut workflow, &registry, 11).unwrap();

  let names: Vec<&str> = tasks.iter().map(|t| t.name.as_str()).collect();
  assert_eq!(names, ["patch-canary", "patch-web", "patch-api"]);
}

#[test]
fn test_instantiate_and_preset_cover_every_job() {
  let registry = JobRegistry::builtin();
  let catalog = StaticCatalog::new(vec![]);
  let mut workflow = release_workflow();

  instantiate_workflow(&mut workflow, &registry).unwrap();
  preset_workflow(&mut workflow, &registry, &catalog).unwrap();

  for job in workflow.jobs() {
    assert!(matches!(job.spec, JobSpec::K8sPatch(_)));
  }
}

#[test]
fn test_merge_workflow_args_matches_by_name() {
  let registry = JobRegistry::builtin();
  let mut workflow = release_workflow();

  let args = WorkflowDefinition {
    name: "release".to_string(),
    stages: vec![StageDefinition {
      name: "rollout".to_string(),
      jobs: vec![patch_job("patch-api", "api-override")],
    }],
  };

  merge_workflow_args(&mut workflow, &registry, &args).unwrap();

  let merged = workflow.find_job("patch-api").unwrap();
  let JobSpec::K8sPatch(spec) = &merged.spec else {
    panic!("merged spec is not typed");
  };
  assert_eq!(spec.patch_items[0].resource_name, "api-override");

  // jobs without a counterpart in args stay raw and untouched
  let untouched = workflow.find_job("patch-web").unwrap();
  assert!(matches!(untouched.spec, JobSpec::Raw(_)));
}

#[test]
fn test_lint_workflow_stops_on_denial() {
  let registry = JobRegistry::builtin();
  let workflow = release_workflow();

  assert!(lint_workflow(&workflow, &registry, &Licensed).is_ok());
  assert!(lint_workflow(&workflow, &registry, &Unlicensed).is_err());
}
