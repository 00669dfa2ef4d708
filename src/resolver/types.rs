use http::Method;
use serde_json::Value;

/// Semantic taxonomy of a resolved type.
///
/// `Excluded` (void, raw generic placeholders) never appears on an emitted
/// [`Field`]; excluded members are dropped during resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Literal,
    Enum,
    Collection,
    Map,
    Object,
    Excluded,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Category::Literal => "Literal",
            Category::Enum => "Enum",
            Category::Collection => "Collection",
            Category::Map => "Map",
            Category::Object => "Object",
            Category::Excluded => "Excluded",
        };
        write!(f, "{}", s)
    }
}

/// The resolved unit: one named, typed, described field with a synthesized
/// example value and resolved children.
///
/// A `Field` tree is always finite; cycles in the underlying type graph are
/// cut by leaving `children` empty the second time the same composite type
/// identity appears on the root-to-node path.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    /// Display string of the resolved type.
    pub type_label: String,
    pub category: Category,
    pub description: String,
    pub required: bool,
    /// Enum value list or range-style annotation text.
    pub range: Option<String>,
    /// Synthesized or literal-derived example value. `Null` for composite
    /// fields whose example derives from `children`.
    pub example: Value,
    pub children: Vec<Field>,
}

impl Field {
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

/// How a top-level request field is transmitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamBinding {
    PathVariable,
    Query,
    FormField,
    JsonBody,
    /// No HTTP-mapping annotation and inference suppressed by a body binding.
    Unbound,
}

impl std::fmt::Display for ParamBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ParamBinding::PathVariable => "PathVariable",
            ParamBinding::Query => "Query",
            ParamBinding::FormField => "FormField",
            ParamBinding::JsonBody => "JsonBody",
            ParamBinding::Unbound => "Unbound",
        };
        write!(f, "{}", s)
    }
}

/// A top-level request field together with its transmission binding.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundField {
    pub binding: ParamBinding,
    pub field: Field,
}

/// Resolved description of one HTTP operation, ready for rendering or upload.
///
/// Constructed once per generation/upload action and discarded afterwards.
#[derive(Debug, Clone)]
pub struct EndpointModel {
    pub method_name: String,
    pub class_name: String,
    pub verb: Method,
    /// Class-level prefix concatenated with the method-level suffix.
    pub path: String,
    pub category_name: String,
    pub request: Vec<BoundField>,
    pub response: Option<Field>,
    pub description: String,
    /// Source declaration text, embedded in rendered artifacts.
    pub declaration: String,
    /// Whether the response body is JSON (REST class marker).
    pub json_response: bool,
}

impl EndpointModel {
    pub fn body_field(&self) -> Option<&Field> {
        self.request
            .iter()
            .find(|b| b.binding == ParamBinding::JsonBody)
            .map(|b| &b.field)
    }

    pub fn fields_bound(&self, binding: ParamBinding) -> Vec<&Field> {
        self.request
            .iter()
            .filter(|b| b.binding == binding)
            .map(|b| &b.field)
            .collect()
    }
}
