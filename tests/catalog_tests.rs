mod common;

use std::cell::RefCell;

use anyhow::bail;
use apigen::catalog::{
    build_interface, interface_payload, CatalogClient, CategoryInfo, InterfacePayload, ProjectInfo,
};
use apigen::resolver::MethodModelBuilder;

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

#[derive(Default)]
struct FakeCatalog {
    categories: RefCell<Vec<CategoryInfo>>,
    created: RefCell<Vec<String>>,
    fail_listing: bool,
}

impl CatalogClient for FakeCatalog {
    fn project_info(&self) -> anyhow::Result<ProjectInfo> {
        Ok(ProjectInfo {
            id: Some(11),
            name: "demo".to_string(),
        })
    }

    fn list_categories(&self) -> anyhow::Result<Vec<CategoryInfo>> {
        if self.fail_listing {
            bail!("catalog error 40011: invalid token");
        }
        Ok(self.categories.borrow().clone())
    }

    fn add_category(&self, name: &str) -> anyhow::Result<CategoryInfo> {
        self.created.borrow_mut().push(name.to_string());
        let category = CategoryInfo {
            id: 77,
            name: name.to_string(),
        };
        self.categories.borrow_mut().push(category.clone());
        Ok(category)
    }

    fn save_interface(&self, _payload: &InterfacePayload) -> anyhow::Result<()> {
        Ok(())
    }
}

#[test]
fn test_query_payload() {
    let mut config = sample_config();
    config.project_token = "tok".to_string();
    let payload = interface_payload(&build("get_item"), &config, "5");

    assert_eq!(payload.token, "tok");
    assert_eq!(payload.method, "GET");
    assert_eq!(payload.catid, "5");
    assert_eq!(payload.title, "GET Get one item");
    assert_eq!(payload.path, "/item/get");
    assert_eq!(payload.req_query.len(), 1);
    assert_eq!(payload.req_query[0].name, "id");
    assert_eq!(payload.req_query[0].required, "1");
    assert_eq!(payload.req_query[0].example, "0");
    assert!(payload.req_body_type.is_none());
    assert!(payload.req_body_form.is_empty());
    assert_eq!(payload.res_body_type, "json");
    assert!(payload.res_body.contains("\"id\": 0"));
    assert!(payload.desc.starts_with("<pre><code>"));
}

#[test]
fn test_json_body_payload() {
    let config = sample_config();
    let payload = interface_payload(&build("save_item"), &config, "5");

    assert_eq!(payload.req_body_type.as_deref(), Some("json"));
    let body = payload.req_body_other.expect("body example present");
    assert!(body.contains("\"name\": \"string\""));
    assert!(payload.req_query.is_empty());
    assert!(payload.req_body_form.is_empty());
    assert_eq!(payload.req_headers[0].value, "application/json");
}

#[test]
fn test_form_payload() {
    let config = sample_config();
    let payload = interface_payload(&build("update_item"), &config, "5");

    assert_eq!(payload.req_body_type.as_deref(), Some("form"));
    assert_eq!(payload.req_body_form.len(), 2);
    assert_eq!(payload.req_body_form[0].name, "id");
    assert_eq!(payload.req_body_form[0].required, "1");
    assert!(payload.req_query.is_empty());
    // void response: nothing to show as a body example.
    assert!(payload.res_body.is_empty());
}

#[test]
fn test_path_params_and_description_range() {
    let config = sample_config();
    let payload = interface_payload(&build("find_item"), &config, "5");
    assert_eq!(payload.req_params.len(), 1);
    assert_eq!(payload.req_params[0].name, "id");

    let payload = interface_payload(&build("list_items"), &config, "5");
    let limit = payload
        .req_query
        .iter()
        .find(|q| q.name == "limit")
        .expect("limit present");
    assert_eq!(limit.desc, "page size, range: 1-100");
}

#[test]
fn test_declaration_escaped_in_desc() {
    let config = sample_config();
    let payload = interface_payload(&build("list_items"), &config, "5");
    assert!(payload.desc.contains("Page&lt;Item&gt; list_items(Filter filter)"));
}

#[test]
fn test_category_created_when_missing() {
    let config = sample_config();
    let client = FakeCatalog::default();
    let payload = build_interface(&build("get_item"), &config, &client).expect("builds");
    assert_eq!(payload.catid, "77");
    assert_eq!(*client.created.borrow(), vec!["api_generator".to_string()]);
}

#[test]
fn test_category_reused_when_present() {
    let config = sample_config();
    let client = FakeCatalog::default();
    client.categories.borrow_mut().push(CategoryInfo {
        id: 3,
        name: "api_generator".to_string(),
    });
    let payload = build_interface(&build("get_item"), &config, &client).expect("builds");
    assert_eq!(payload.catid, "3");
    assert!(client.created.borrow().is_empty());
}

#[test]
fn test_remote_failure_aborts_build() {
    let config = sample_config();
    let client = FakeCatalog {
        fail_listing: true,
        ..FakeCatalog::default()
    };
    let err = build_interface(&build("get_item"), &config, &client).expect_err("aborts");
    assert!(format!("{err:#}").contains("invalid token"));
}
