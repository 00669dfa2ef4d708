use serde_json::{json, Map, Value};

use crate::resolver::{Category, Field};

/// Project a field tree into its example JSON value.
///
/// The walk mirrors the tree shape exactly: objects become JSON objects over
/// their children, collections a fixed-length array of the element example,
/// maps a single-key object. Leaves contribute their synthesized example.
pub fn example_value(field: &Field) -> Value {
    match field.category {
        Category::Literal | Category::Enum => field.example.clone(),
        Category::Object => {
            if field.has_children() {
                children_object(field)
            } else if field.example.is_null() {
                json!({})
            } else {
                field.example.clone()
            }
        }
        Category::Collection => {
            if field.has_children() {
                json!([children_object(field)])
            } else {
                field.example.clone()
            }
        }
        Category::Map => {
            if field.has_children() {
                json!({ "key": children_object(field) })
            } else {
                field.example.clone()
            }
        }
        Category::Excluded => Value::Null,
    }
}

/// Example JSON object over a list of top-level fields, in order.
pub fn example_object(fields: &[Field]) -> Value {
    let mut map = Map::new();
    for field in fields {
        map.insert(field.name.clone(), example_value(field));
    }
    Value::Object(map)
}

fn children_object(field: &Field) -> Value {
    example_object(&field.children)
}

/// Pretty-printed example JSON for a field tree.
pub fn pretty_example(field: &Field) -> String {
    serde_json::to_string_pretty(&example_value(field)).unwrap_or_else(|_| "null".to_string())
}

/// Pretty-printed example JSON object over top-level fields.
pub fn pretty_example_object(fields: &[Field]) -> String {
    serde_json::to_string_pretty(&example_object(fields)).unwrap_or_else(|_| "{}".to_string())
}
