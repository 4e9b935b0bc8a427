//! Template engine for prompt management using Jinja2 syntax.
//!
//! Prompt templates live in `templates/prompts/` and are compiled into the
//! binary, so rendering never depends on the working directory.

use minijinja::{Environment, Value};
use std::sync::OnceLock;
use thiserror::Error;

/// Global template environment
static TEMPLATE_ENV: OnceLock<Environment<'static>> = OnceLock::new();

/// (name, source) of every bundled template
const TEMPLATES: &[(&str, &str)] = &[
    (
        "translation/en_to_ru.jinja",
        include_str!("../../../templates/prompts/translation/en_to_ru.jinja"),
    ),
    (
        "translation/ru_to_en.jinja",
        include_str!("../../../templates/prompts/translation/ru_to_en.jinja"),
    ),
];

/// Errors that can occur during template operations
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Template '{0}' not found")]
    NotFound(String),

    #[error("Failed to render template: {0}")]
    RenderError(String),
}

fn init_environment() -> Environment<'static> {
    let mut env = Environment::new();

    for (name, source) in TEMPLATES {
        if let Err(e) = env.add_template(*name, *source) {
            tracing::warn!("Failed to load template {}: {}", name, e);
        }
    }

    env
}

fn get_environment() -> &'static Environment<'static> {
    TEMPLATE_ENV.get_or_init(init_environment)
}

/// Render a bundled template with the given context.
///
/// `.jinja` templates are not auto-escaped, so values are inserted verbatim.
pub fn render_template(template_name: &str, ctx: Value) -> Result<String, TemplateError> {
    let template = get_environment()
        .get_template(template_name)
        .map_err(|_| TemplateError::NotFound(template_name.to_string()))?;

    template
        .render(ctx)
        .map_err(|e| TemplateError::RenderError(e.to_string()))
}
