use anyhow::Context;
use tracing::info;

use super::client::CatalogClient;
use super::types::{required_flag, FormParam, Header, InterfacePayload, PathParam, QueryParam};
use crate::config::GeneratorConfig;
use crate::docgen::pretty_example;
use crate::resolver::{Category, EndpointModel, Field, ParamBinding};

/// Comma-joined stand-in example for collection-valued query and form
/// parameters, which have no JSON body to carry structure.
const FLAT_COLLECTION_EXAMPLE: &str = "1,1,1";

/// Build the upload schema for an endpoint, resolving its category against
/// the remote catalog first. A category matching the endpoint's category
/// name is reused; otherwise one is created. Any remote failure aborts the
/// upload before the interface itself is touched.
pub fn build_interface(
    model: &EndpointModel,
    config: &GeneratorConfig,
    client: &dyn CatalogClient,
) -> anyhow::Result<InterfacePayload> {
    let categories = client
        .list_categories()
        .context("listing catalog categories")?;
    let category = match categories.into_iter().find(|c| c.name == model.category_name) {
        Some(existing) => existing,
        None => {
            info!(name = %model.category_name, "creating catalog category");
            client
                .add_category(&model.category_name)
                .with_context(|| format!("creating category {}", model.category_name))?
        }
    };
    Ok(interface_payload(model, config, &category.id.to_string()))
}

/// Project an endpoint model into the flat upload schema.
///
/// Parameter groups map one to one from the model's bindings: path variables
/// to `req_params`, query parameters to `req_query`, form fields to
/// `req_body_form` with body type `form`, and a JSON body to
/// `req_body_other` with body type `json`. The groups are mutually
/// exclusive by construction of the model.
pub fn interface_payload(
    model: &EndpointModel,
    config: &GeneratorConfig,
    cat_id: &str,
) -> InterfacePayload {
    let body = model.body_field();
    let forms = model.fields_bound(ParamBinding::FormField);
    let queries = model.fields_bound(ParamBinding::Query);
    let paths = model.fields_bound(ParamBinding::PathVariable);

    let (req_body_type, req_body_other, req_body_form, req_query) = if let Some(body) = body {
        (
            Some("json".to_string()),
            Some(pretty_example(body)),
            Vec::new(),
            Vec::new(),
        )
    } else if !forms.is_empty() {
        (
            Some("form".to_string()),
            None,
            forms.iter().map(|f| form_param(f)).collect(),
            Vec::new(),
        )
    } else {
        (
            None,
            None,
            Vec::new(),
            queries.iter().map(|f| query_param(f)).collect(),
        )
    };

    let content_type = if body.is_some() || model.json_response {
        Header::json()
    } else {
        Header::form()
    };
    let (res_body_type, res_body) = if model.json_response {
        (
            "json".to_string(),
            model.response.as_ref().map(pretty_example).unwrap_or_default(),
        )
    } else {
        ("raw".to_string(), String::new())
    };

    let title = if model.description.is_empty() {
        format!("{} {}", model.verb, model.method_name)
    } else {
        format!("{} {}", model.verb, model.description)
    };

    InterfacePayload {
        token: config.project_token.clone(),
        method: model.verb.to_string(),
        catid: cat_id.to_string(),
        title,
        path: model.path.clone(),
        req_headers: vec![content_type],
        req_params: paths.iter().map(|f| path_param(f)).collect(),
        req_query,
        req_body_type,
        req_body_form,
        req_body_other,
        res_body_type,
        res_body,
        desc: declaration_block(&model.declaration),
    }
}

/// Parameter description enriched with the documented value range.
pub fn describe(field: &Field) -> String {
    match field.range.as_deref() {
        None => field.description.clone(),
        Some(range) if field.description.is_empty() => format!("range: {range}"),
        Some(range) => format!("{}, range: {range}", field.description),
    }
}

fn example_string(field: &Field) -> String {
    match field.category {
        Category::Collection | Category::Map => FLAT_COLLECTION_EXAMPLE.to_string(),
        _ => match &field.example {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        },
    }
}

fn query_param(field: &Field) -> QueryParam {
    QueryParam {
        name: field.name.clone(),
        desc: describe(field),
        example: example_string(field),
        required: required_flag(field.required),
    }
}

fn form_param(field: &Field) -> FormParam {
    FormParam {
        name: field.name.clone(),
        desc: describe(field),
        example: example_string(field),
        required: required_flag(field.required),
    }
}

fn path_param(field: &Field) -> PathParam {
    PathParam {
        name: field.name.clone(),
        desc: describe(field),
        example: example_string(field),
    }
}

/// The source declaration, preformatted for the catalog's rich-text
/// description field.
fn declaration_block(declaration: &str) -> String {
    let escaped = declaration.replace('<', "&lt;").replace('>', "&gt;");
    format!("<pre><code>{escaped}</code></pre>")
}
