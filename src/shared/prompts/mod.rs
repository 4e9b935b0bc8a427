//! Prompt template management module.
//!
//! Templates are stored in `templates/prompts/` and use Jinja2 syntax.

pub mod engine;

pub use engine::{render_template, TemplateError};

use minijinja::context;

use crate::shared::language::Language;

/// Render the instruction asking the model to translate `text` into `target`.
///
/// The source language is implied: the forum only translates between English
/// and Russian, so the source is always the counterpart of `target`.
pub fn render_translation_prompt(text: &str, target: Language) -> Result<String, TemplateError> {
    let template = match target {
        Language::Ru => "translation/en_to_ru.jinja",
        Language::En => "translation/ru_to_en.jinja",
    };

    render_template(template, context! { text => text })
}
