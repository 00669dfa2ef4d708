mod common;

use apigen::config::GeneratorConfig;
use apigen::resolver::{category_name, MethodModelBuilder, ParamBinding};
use http::Method;

use common::{sample_config, sample_graph};

fn build(method: &str) -> apigen::EndpointModel {
    let graph = sample_graph();
    let config = sample_config();
    let builder = MethodModelBuilder::new(&graph, &graph, &config);
    let decl = graph
        .class("ItemController")
        .expect("class declared")
        .method(method)
        .expect("method declared");
    builder.build(decl).expect("model builds")
}

#[test]
fn test_get_param_defaults_to_query() {
    let model = build("get_item");
    assert_eq!(model.verb, Method::GET);
    assert_eq!(model.path, "/item/get");
    let queries = model.fields_bound(ParamBinding::Query);
    assert_eq!(queries.len(), 1);
    assert_eq!(queries[0].name, "id");
    assert!(queries[0].required);
    assert!(model.body_field().is_none());
}

#[test]
fn test_object_query_param_is_flattened() {
    let model = build("list_items");
    let queries = model.fields_bound(ParamBinding::Query);
    let names: Vec<&str> = queries.iter().map(|f| f.name.as_str()).collect();
    // One entry per member, not one entry for the composite parameter.
    assert_eq!(names, vec!["keyword", "limit"]);
    assert_eq!(queries[1].range.as_deref(), Some("1-100"));
    assert!(!queries[0].required);
}

#[test]
fn test_path_variable_uses_annotation_name() {
    let model = build("find_item");
    let paths = model.fields_bound(ParamBinding::PathVariable);
    assert_eq!(paths.len(), 1);
    assert_eq!(paths[0].name, "id");
    assert_eq!(model.path, "/item/{id}");
}

#[test]
fn test_body_keeps_nested_tree_and_suppresses_inference() {
    let model = build("save_item");
    let body = model.body_field().expect("body present");
    assert!(body.children.iter().any(|c| c.name == "name"));
    assert!(model.fields_bound(ParamBinding::Query).is_empty());
    assert!(model.fields_bound(ParamBinding::FormField).is_empty());
    // The unannotated second parameter stays out of every group.
    let unbound = model.fields_bound(ParamBinding::Unbound);
    assert_eq!(unbound.len(), 1);
    assert_eq!(unbound[0].name, "notify");
}

#[test]
fn test_non_get_params_default_to_form() {
    let model = build("update_item");
    let forms = model.fields_bound(ParamBinding::FormField);
    assert_eq!(forms.len(), 2);
    assert!(model.fields_bound(ParamBinding::Query).is_empty());
    // void return type resolves to no response tree.
    assert!(model.response.is_none());
}

#[test]
fn test_scalar_response_tree() {
    let model = build("save_item");
    let response = model.response.as_ref().expect("response present");
    assert!(response.children.is_empty());
    assert_eq!(response.type_label, "long");
}

#[test]
fn test_unmapped_method_is_not_an_endpoint() {
    let graph = sample_graph();
    let config = sample_config();
    let builder = MethodModelBuilder::new(&graph, &graph, &config);
    let decl = graph
        .class("ItemController")
        .expect("class declared")
        .method("helper")
        .expect("method declared");
    assert!(!decl.is_endpoint());
    let err = builder.build(decl).expect_err("no mapping, no model");
    assert!(err.to_string().contains("no HTTP mapping"));
}

#[test]
fn test_category_naming() {
    let mut config = GeneratorConfig::default();
    assert_eq!(category_name(&config, "Items management api"), "api_generator");
    config.auto_category = true;
    assert_eq!(category_name(&config, "Items management api"), "Items");
    // No description to draw from: fall back to the default.
    assert_eq!(category_name(&config, ""), "api_generator");
}

#[test]
fn test_model_category_follows_config() {
    let graph = sample_graph();
    let mut config = sample_config();
    config.auto_category = true;
    let builder = MethodModelBuilder::new(&graph, &graph, &config);
    let decl = graph
        .class("ItemController")
        .expect("class declared")
        .method("get_item")
        .expect("method declared");
    let model = builder.build(decl).expect("model builds");
    assert_eq!(model.category_name, "Items");
}
