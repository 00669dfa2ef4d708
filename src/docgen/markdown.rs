use askama::Template;

use crate::resolver::Field;

const TABLE_HEADER: &str = "Name|Type|Required|Range|Description\n--|--|--|--|--\n";

/// Resolve the configured indent marker; a single space renders as an
/// HTML em-space so nesting survives Markdown table cells.
pub fn indent_marker(prefix: &str) -> String {
    if prefix == " " {
        "&emsp;".to_string()
    } else {
        prefix.to_string()
    }
}

/// Render a Markdown parameter table over top-level fields.
///
/// Rows are emitted depth-first, pre-order; each nesting level is prefixed
/// with one more indent marker, and a field with children renders its own
/// row with the name emphasized.
pub fn render_table(fields: &[Field], marker: &str) -> String {
    let mut out = String::from(TABLE_HEADER);
    for field in fields {
        push_rows(&mut out, field, 0, marker);
    }
    out
}

/// Table for a single resolved tree (a response). An object root renders its
/// children as the top-level rows; a leaf root renders one row named after
/// its type.
pub fn render_tree_table(root: &Field, marker: &str) -> String {
    if root.has_children() {
        render_table(&root.children, marker)
    } else {
        let mut row = root.clone();
        if row.name.is_empty() {
            row.name = row.type_label.clone();
        }
        render_table(std::slice::from_ref(&row), marker)
    }
}

fn push_rows(out: &mut String, field: &Field, depth: usize, marker: &str) {
    let name = if field.has_children() {
        format!("**{}**", field.name)
    } else {
        field.name.clone()
    };
    let range = field.range.as_deref().unwrap_or("N/A");
    let required = if field.required { "Y" } else { "N" };
    out.push_str(&marker.repeat(depth));
    out.push_str(&format!(
        "{}|{}|{}|{}|{}\n",
        name, field.type_label, required, range, field.description
    ));
    for child in &field.children {
        push_rows(out, child, depth + 1, marker);
    }
}

/// Markdown document for one endpoint method.
#[derive(Template)]
#[template(
    source = "# {{ title }}

## Description

{{ description }}

## Declaration

```text
{{ declaration }}
```

## Request
{% if has_request %}
### Example

```json
{{ request_example }}
```

### Parameters

{{ request_table }}{% endif %}
## Response
{% if has_response %}
### Example

```json
{{ response_example }}
```

### Fields

{{ response_table }}{% endif %}",
    ext = "md"
)]
pub struct MethodDocTemplate {
    pub title: String,
    pub description: String,
    pub declaration: String,
    pub has_request: bool,
    pub request_example: String,
    pub request_table: String,
    pub has_response: bool,
    pub response_example: String,
    pub response_table: String,
}

/// Markdown document for a class in field-listing mode.
#[derive(Template)]
#[template(
    source = "# {{ name }}
{% if has_fields %}
## Example

```json
{{ example }}
```

## Fields

{{ table }}{% endif %}",
    ext = "md"
)]
pub struct ClassDocTemplate {
    pub name: String,
    pub has_fields: bool,
    pub example: String,
    pub table: String,
}
