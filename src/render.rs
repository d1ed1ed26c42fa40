//! HTML page rendering.
//!
//! The page template and the viewer bootstrap script are compiled into the
//! binary. The template is handed to a fresh minijinja [`Environment`] on
//! every render, the same way static HTML files are rendered on request.
//!
//! Spec content is spliced into an inline `<script>`. The `script_string`
//! filter rewrites `</` as `<\/` so text such as `</script>` inside the
//! spec cannot close the element; JavaScript reads `<\/` back as `</`.

use minijinja::Environment;
use once_cell::sync::Lazy;
use serde::Serialize;

use crate::error::RenderError;

const TEMPLATE_NAME: &str = "index.html";
const INDEX_TEMPLATE: &str = include_str!("../templates/index.html");
const API_REFERENCE_JS: &str = include_str!("../templates/scripts/api_reference.js");

/// `<script>` element wrapping the embedded viewer bootstrap.
pub(crate) static SCRIPT_TAG: Lazy<String> =
    Lazy::new(|| format!("<script>{API_REFERENCE_JS}</script>"));

/// Values exposed to the page template.
#[derive(Debug, Serialize)]
pub(crate) struct PageContext<'a> {
    pub title: &'a str,
    pub language: &'a str,
    pub script: &'a str,
    pub content: &'a str,
}

pub(crate) fn render_page(ctx: &PageContext<'_>) -> Result<String, RenderError> {
    render_with_source(INDEX_TEMPLATE, ctx)
}

fn script_string(value: String) -> String {
    value.replace("</", "<\\/")
}

fn render_with_source(source: &str, ctx: &PageContext<'_>) -> Result<String, RenderError> {
    let mut env = Environment::new();
    env.add_filter("script_string", script_string);
    env.add_template(TEMPLATE_NAME, source)
        .map_err(RenderError::TemplateParse)?;
    let tmpl = env
        .get_template(TEMPLATE_NAME)
        .map_err(RenderError::TemplateParse)?;
    tmpl.render(ctx).map_err(RenderError::TemplateExecute)
}
