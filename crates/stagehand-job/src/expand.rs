//! Task expansion for the `k8s-patch` variant.

use stagehand_render::{DelimiterStyle, RenderError, render};
use stagehand_workflow::PatchJobSpec;

use crate::task::{PatchTaskSpec, RenderedPatchItem};

/// Expand a validated patch spec into its task payload.
///
/// Items are rendered in input order and copied verbatim otherwise.
/// Duplicate `(resource_name, resource_kind)` pairs pass through unchanged;
/// resource identity is the execution runtime's to validate. An unresolved
/// parameter aborts the expansion - no partial payload is returned.
pub fn expand(spec: &PatchJobSpec) -> Result<PatchTaskSpec, RenderError> {
  let mut patch_items = Vec::with_capacity(spec.patch_items.len());
  for item in &spec.patch_items {
    let content = render(&item.patch_content, DelimiterStyle::RenderValue, &item.params)?;
    patch_items.push(RenderedPatchItem {
      resource_name: item.resource_name.clone(),
      resource_kind: item.resource_kind.clone(),
      resource_group: item.resource_group.clone(),
      resource_version: item.resource_version.clone(),
      patch_content: content,
      patch_strategy: item.patch_strategy,
      params: item.params.clone(),
    });
  }
  Ok(PatchTaskSpec {
    cluster_id: spec.cluster_id.clone(),
    namespace: spec.namespace.clone(),
    patch_items,
  })
}

#[cfg(test)]
mod tests {
  use stagehand_workflow::PatchItem;

  use super::*;

  fn item(name: &str, content: &str, params: &[(&str, &str)]) -> PatchItem {
    PatchItem {
      resource_name: name.to_string(),
      resource_kind: "Deployment".to_string(),
      patch_content: content.to_string(),
      params: params
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect(),
      ..Default::default()
    }
  }

  #[test]
  fn test_expand_renders_in_input_order() {
    let spec = PatchJobSpec {
      cluster_id: "c-1".to_string(),
      namespace: "staging".to_string(),
      patch_items: vec![
        item("web", "replicas: {{.count}}", &[("count", "3")]),
        item("api", "image: {{.tag}}", &[("tag", "v2")]),
      ],
      ..Default::default()
    };

    let task = expand(&spec).unwrap();
    assert_eq!(task.cluster_id, "c-1");
    assert_eq!(task.namespace, "staging");
    assert_eq!(task.patch_items.len(), 2);
    assert_eq!(task.patch_items[0].resource_name, "web");
    assert_eq!(task.patch_items[0].patch_content, "replicas: 3");
    assert_eq!(task.patch_items[1].resource_name, "api");
    assert_eq!(task.patch_items[1].patch_content, "image: v2");
  }

  #[test]
  fn test_expand_passes_duplicates_through() {
    let spec = PatchJobSpec {
      patch_items: vec![
        item("web", "a: 1", &[]),
        item("web", "b: 2", &[]),
      ],
      ..Default::default()
    };

    let task = expand(&spec).unwrap();
    assert_eq!(task.patch_items.len(), 2);
    assert_eq!(task.patch_items[0].patch_content, "a: 1");
    assert_eq!(task.patch_items[1].patch_content, "b: 2");
  }

  #[test]
  fn test_expand_unresolved_param_fails() {
    let spec = PatchJobSpec {
      patch_items: vec![item("web", "value: {{.missing}}", &[("foo", "bar")])],
      ..Default::default()
    };

    assert!(matches!(
      expand(&spec),
      Err(RenderError::UnresolvedParam { .. })
    ));
  }

  #[test]
  fn test_expand_keeps_params_and_strategy() {
    let spec = PatchJobSpec {
      patch_items: vec![item("web", "replicas: {{.count}}", &[("count", "3")])],
      ..Default::default()
    };

    let task = expand(&spec).unwrap();
    let rendered = &task.patch_items[0];
    assert_eq!(rendered.params["count"], "3");
    assert_eq!(rendered.patch_strategy, spec.patch_items[0].patch_strategy);
  }
}
