use serde::Serialize;
use tera::{Context, Tera};

use crate::error::ReportError;

/// Render a Tera template with any serializable context value.
///
/// The `template_content` is the raw template string (Jinja2 syntax).
/// The context value's fields become the template variables.
pub fn render_template<C: Serialize>(
    template_name: &str,
    template_content: &str,
    context: &C,
) -> Result<String, ReportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ReportError::TemplateParse(e.to_string()))?;

    // Bridge the context through serde_json so any Serialize works.
    let value = serde_json::to_value(context)?;
    let context = Context::from_value(value)
        .map_err(|e| ReportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(template_name, &context)?;
    Ok(rendered)
}
