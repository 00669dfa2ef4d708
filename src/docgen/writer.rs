use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use askama::Template;
use tracing::info;

use super::json_example::{pretty_example, pretty_example_object};
use super::markdown::{indent_marker, render_table, render_tree_table, ClassDocTemplate, MethodDocTemplate};
use crate::config::GeneratorConfig;
use crate::resolver::{EndpointModel, Field};

/// Render the full Markdown document for one endpoint.
pub fn render_method_doc(config: &GeneratorConfig, model: &EndpointModel) -> anyhow::Result<String> {
    let marker = indent_marker(&config.indent_prefix);
    let request_fields: Vec<Field> = model.request.iter().map(|b| b.field.clone()).collect();
    let has_request = !request_fields.is_empty();
    let request_example = match model.body_field() {
        Some(body) => pretty_example(body),
        None => pretty_example_object(&request_fields),
    };
    let (has_response, response_example, response_table) = match &model.response {
        Some(root) => (true, pretty_example(root), render_tree_table(root, &marker)),
        None => (false, String::new(), String::new()),
    };
    let template = MethodDocTemplate {
        title: doc_file_name(config, model),
        description: model.description.clone(),
        declaration: model.declaration.clone(),
        has_request,
        request_example,
        request_table: render_table(&request_fields, &marker),
        has_response,
        response_example,
        response_table,
    };
    template.render().context("rendering method document")
}

/// Render the field-listing Markdown document for a class.
pub fn render_class_doc(
    config: &GeneratorConfig,
    name: &str,
    fields: &[Field],
) -> anyhow::Result<String> {
    let marker = indent_marker(&config.indent_prefix);
    let template = ClassDocTemplate {
        name: name.to_string(),
        has_fields: !fields.is_empty(),
        example: pretty_example_object(fields),
        table: render_table(fields, &marker),
    };
    template.render().context("rendering class document")
}

/// Write one endpoint document; the file is created only once its full
/// content has been composed, so no partial file is left on failure.
pub fn write_method_doc(
    config: &GeneratorConfig,
    model: &EndpointModel,
) -> anyhow::Result<PathBuf> {
    let content = render_method_doc(config, model)?;
    write_doc(config, &doc_file_name(config, model), &content)
}

/// Write one class field-listing document.
pub fn write_class_doc(
    config: &GeneratorConfig,
    name: &str,
    fields: &[Field],
) -> anyhow::Result<PathBuf> {
    let content = render_class_doc(config, name, fields)?;
    write_doc(config, name, &content)
}

fn write_doc(config: &GeneratorConfig, name: &str, content: &str) -> anyhow::Result<PathBuf> {
    fs::create_dir_all(&config.output_dir).with_context(|| {
        format!("creating output directory {}", config.output_dir.display())
    })?;
    let path = config.output_dir.join(format!("{name}.md"));
    fs::write(&path, content).with_context(|| format!("writing {}", path.display()))?;
    info!(path = %path.display(), "wrote api doc");
    Ok(path)
}

/// File naming strategy: the technical method name, or the first token of
/// the method description when configured. A description without a space
/// has no leading summary token to take, so the method name is kept.
pub fn doc_file_name(config: &GeneratorConfig, model: &EndpointModel) -> String {
    if config.doc_name_from_description && model.description.contains(' ') {
        if let Some(first) = model.description.split_whitespace().next() {
            return first.to_string();
        }
    }
    model.method_name.clone()
}
