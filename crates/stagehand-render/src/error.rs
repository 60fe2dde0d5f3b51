use thiserror::Error;

/// Errors from template rendering.
#[derive(Debug, Error)]
pub enum RenderError {
  /// A marker references a parameter not present in the substitution table.
  #[error("unresolved parameter in template: {message}")]
  UnresolvedParam { message: String },

  /// The template is malformed for the delimiter convention.
  #[error("template render failed: {message}")]
  Render { message: String },
}
