#![allow(dead_code)]

use apigen::config::GeneratorConfig;
use apigen::decl::TypeGraph;

/// Declaration graph shared by the integration tests: a small items api with
/// an enum, a self-referential composite, a generic page wrapper and one
/// endpoint class exercising every parameter binding.
pub fn sample_graph() -> TypeGraph {
    TypeGraph::from_yaml(SAMPLE_GRAPH).expect("sample graph must parse")
}

pub fn sample_config() -> GeneratorConfig {
    GeneratorConfig::default()
}

const SAMPLE_GRAPH: &str = r#"
types:
  Status:
    description: item status
    constants: [ACTIVE, ARCHIVED]
  Item:
    description: a catalog item
    members:
      - name: id
        type: long
        description: item id
      - name: name
        type: string
        description: item name
      - name: status
        type: Status
        description: current status
      - name: tags
        type: List<string>
        description: item tags
        optional: true
      - name: parent
        type: Item
        description: parent item
        optional: true
      - name: serial_version
        type: long
  Page:
    description: one page of results
    members:
      - name: total
        type: int
        description: total record count
      - name: records
        type: List<Item>
        description: records on this page
  Filter:
    description: list filter
    members:
      - name: keyword
        type: string
        description: search keyword
        optional: true
      - name: limit
        type: int
        description: page size
        range: 1-100
classes:
  ItemController:
    description: Items management api
    rest: true
    path: /item
    methods:
      - name: get_item
        description: Get one item
        verb: get
        path: /get
        returns: Item
        params:
          - name: id
            type: long
            description: item id
      - name: find_item
        description: Find item by path id
        verb: get
        path: /{id}
        returns: Item
        params:
          - name: item_id
            type: long
            binding: path
            path_name: id
            description: item id
      - name: list_items
        description: List items
        verb: get
        path: /list
        returns: Page<Item>
        params:
          - name: filter
            type: Filter
      - name: save_item
        description: Save an item
        verb: post
        path: /save
        returns: long
        params:
          - name: item
            type: Item
            binding: body
          - name: notify
            type: boolean
            description: send a notification
      - name: update_item
        description: Update an item
        verb: post
        path: /update
        returns: void
        params:
          - name: id
            type: long
            description: item id
          - name: name
            type: string
            description: new name
      - name: helper
        description: internal helper
  PlainService:
    description: not an api
    rest: false
    methods:
      - name: compute
        verb: get
        returns: long
"#;
