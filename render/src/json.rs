//! JSON projection of the extracted model.

use onto2dot_extractor::OntologyModel;

use crate::error::RenderError;

/// Serializes `model` as pretty-printed JSON, followed by a newline.
///
/// # Errors
///
/// Returns [`RenderError::Json`] if serialization fails.
pub fn render_json(model: &OntologyModel) -> Result<String, RenderError> {
    let mut out = serde_json::to_string_pretty(model)?;
    out.push('\n');
    Ok(out)
}
