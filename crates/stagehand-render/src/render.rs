use std::collections::HashMap;

use minijinja::syntax::SyntaxConfig;
use minijinja::{Environment, ErrorKind, UndefinedBehavior};

use crate::error::RenderError;

/// Marker convention used to spot parameter references in a template.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DelimiterStyle {
  /// Render-value markers of the form `{{.name}}`. A `{{ name }}` without
  /// the leading dot is not a marker and stays literal.
  #[default]
  RenderValue,
}

impl DelimiterStyle {
  fn syntax(self) -> Result<SyntaxConfig, RenderError> {
    match self {
      DelimiterStyle::RenderValue => SyntaxConfig::builder()
        .variable_delimiters("{{.", "}}")
        .build()
        .map_err(|e| RenderError::Render {
          message: e.to_string(),
        }),
    }
  }
}

/// Render `template`, substituting the names in `params`.
///
/// An unresolved parameter reference fails the render; see the crate docs
/// for the policy.
pub fn render(
  template: &str,
  style: DelimiterStyle,
  params: &HashMap<String, String>,
) -> Result<String, RenderError> {
  let mut env = Environment::new();
  env.set_undefined_behavior(UndefinedBehavior::Strict);
  env.set_syntax(style.syntax()?);

  env.render_str(template, params).map_err(|e| match e.kind() {
    ErrorKind::UndefinedError => RenderError::UnresolvedParam {
      message: e.to_string(),
    },
    _ => RenderError::Render {
      message: e.to_string(),
    },
  })
}

#[cfg(test)]
mod tests {
  use super::*;

  fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
      .iter()
      .map(|(k, v)| (k.to_string(), v.to_string()))
      .collect()
  }

  #[test]
  fn test_render_substitutes_param() {
    let out = render(
      "value: {{.foo}}",
      DelimiterStyle::RenderValue,
      &params(&[("foo", "bar")]),
    )
    .unwrap();
    assert_eq!(out, "value: bar");
  }

  #[test]
  fn test_render_multiple_markers() {
    let out = render(
      "image: {{.repo}}:{{.tag}}",
      DelimiterStyle::RenderValue,
      &params(&[("repo", "web"), ("tag", "v2")]),
    )
    .unwrap();
    assert_eq!(out, "image: web:v2");
  }

  #[test]
  fn test_render_unresolved_param_fails() {
    let result = render(
      "value: {{.missing}}",
      DelimiterStyle::RenderValue,
      &params(&[("foo", "bar")]),
    );
    assert!(matches!(result, Err(RenderError::UnresolvedParam { .. })));
  }

  #[test]
  fn test_render_plain_text_untouched() {
    let out = render("replicas: 3", DelimiterStyle::RenderValue, &HashMap::new()).unwrap();
    assert_eq!(out, "replicas: 3");
  }

  #[test]
  fn test_render_dotless_braces_stay_literal() {
    let out = render(
      "value: {{ foo }}",
      DelimiterStyle::RenderValue,
      &params(&[("foo", "bar")]),
    )
    .unwrap();
    assert_eq!(out, "value: {{ foo }}");
  }
}
