use http::Method;

/// Stable identity of a declared type, used for cycle detection.
///
/// Two [`TypeRef`]s with equal ids denote the same declared composite type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeId(pub String);

impl std::fmt::Display for TypeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque handle to a declared type in the source type system.
///
/// The `label` is the display string of the type as declared (e.g. `long`,
/// `List<Item>`, `Map<String, Item>`). Structural queries about the type go
/// through [`TypeProvider`](super::provider::TypeProvider); the resolver never
/// mutates a `TypeRef`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeRef {
    pub id: TypeId,
    pub label: String,
}

impl TypeRef {
    /// Build a reference from a declared type label.
    pub fn named(label: impl Into<String>) -> Self {
        let label = label.into();
        TypeRef {
            id: TypeId(label.clone()),
            label,
        }
    }
}

impl std::fmt::Display for TypeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// A declared member (field) of a composite type: name plus type reference.
#[derive(Debug, Clone)]
pub struct MemberDecl {
    pub name: String,
    pub ty: TypeRef,
}

/// Documentation and annotation data for one member or parameter.
///
/// `required` is `None` when the declaration carries no explicit
/// optional/nullable marker; the resolver then applies its defaulting rule
/// (required for primitive-kind members, optional otherwise).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocInfo {
    pub description: String,
    pub required: Option<bool>,
    pub range: Option<String>,
}

/// Transmission-binding annotation attached to a method parameter.
///
/// A closed set populated by the declaration reader through an explicit
/// mapping table; the resolver never inspects annotation text itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingMarker {
    /// The parameter is the JSON request body.
    Body,
    /// The parameter binds a path template variable.
    Path,
}

/// HTTP mapping annotation of an endpoint method: resolved verb plus the
/// method-level path fragment (possibly empty).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingAnnotation {
    pub verb: Method,
    pub path: String,
}

/// A declared method parameter.
#[derive(Debug, Clone)]
pub struct ParamDecl {
    pub name: String,
    pub ty: TypeRef,
    pub marker: Option<BindingMarker>,
    /// Explicit path-variable name carried by the path marker, overriding the
    /// parameter name when present.
    pub path_name: Option<String>,
    pub doc: DocInfo,
}

/// A declared method, as exposed by the declaration reader.
#[derive(Debug, Clone)]
pub struct MethodDecl {
    pub name: String,
    pub description: String,
    /// Rendered source declaration (return type, name, parameter list).
    pub declaration: String,
    pub class_name: String,
    pub class_description: String,
    /// Class-level path prefix (possibly empty).
    pub class_path: String,
    /// Whether responses are serialized as JSON (REST class marker).
    pub json_response: bool,
    pub mapping: Option<MappingAnnotation>,
    pub params: Vec<ParamDecl>,
    pub returns: Option<TypeRef>,
}

impl MethodDecl {
    /// A method without an HTTP mapping annotation is not model-able as an
    /// endpoint; callers check this before building a model.
    pub fn is_endpoint(&self) -> bool {
        self.mapping.is_some()
    }
}

/// A declared class with its methods, as loaded from a declaration graph.
#[derive(Debug, Clone)]
pub struct ClassDecl {
    pub name: String,
    pub description: String,
    /// Whether the class carries a REST controller marker.
    pub rest: bool,
    pub base_path: String,
    pub methods: Vec<MethodDecl>,
}

impl ClassDecl {
    pub fn method(&self, name: &str) -> Option<&MethodDecl> {
        self.methods.iter().find(|m| m.name == name)
    }

    /// Methods that qualify as HTTP endpoints.
    pub fn endpoints(&self) -> impl Iterator<Item = &MethodDecl> {
        self.methods.iter().filter(|m| m.is_endpoint())
    }
}
