use std::collections::HashMap;
use std::path::Path;

use anyhow::Context;
use http::Method;
use serde::Deserialize;

use super::provider::{DocReader, TypeProvider};
use super::types::{
    BindingMarker, ClassDecl, DocInfo, MappingAnnotation, MemberDecl, MethodDecl, ParamDecl,
    TypeRef,
};

const COLLECTION_HEADS: [&str; 6] = ["List", "Set", "Vec", "Collection", "ArrayList", "LinkedList"];
const MAP_HEADS: [&str; 5] = ["Map", "HashMap", "TreeMap", "LinkedHashMap", "BTreeMap"];

/// Raw declaration-graph file model (YAML or JSON).
#[derive(Debug, Deserialize)]
struct RawGraph {
    #[serde(default)]
    types: HashMap<String, RawType>,
    #[serde(default)]
    classes: HashMap<String, RawClass>,
}

#[derive(Debug, Deserialize)]
struct RawType {
    #[serde(default)]
    description: String,
    #[serde(default)]
    members: Vec<RawMember>,
    /// Non-empty marks the type as an enumeration.
    #[serde(default)]
    constants: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RawMember {
    name: String,
    #[serde(rename = "type")]
    ty: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    optional: Option<bool>,
    #[serde(default)]
    range: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawClass {
    #[serde(default)]
    description: String,
    #[serde(default)]
    rest: bool,
    #[serde(default)]
    path: String,
    #[serde(default)]
    methods: Vec<RawMethod>,
}

#[derive(Debug, Deserialize)]
struct RawMethod {
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    verb: Option<String>,
    #[serde(default)]
    path: String,
    #[serde(default)]
    returns: Option<String>,
    #[serde(default)]
    params: Vec<RawParam>,
}

#[derive(Debug, Deserialize)]
struct RawParam {
    name: String,
    #[serde(rename = "type")]
    ty: String,
    #[serde(default)]
    binding: Option<String>,
    #[serde(default)]
    path_name: Option<String>,
    #[serde(default)]
    description: String,
    #[serde(default)]
    optional: Option<bool>,
    #[serde(default)]
    range: Option<String>,
}

#[derive(Debug, Clone)]
struct TypeRecord {
    description: String,
    members: Vec<RecordMember>,
    constants: Vec<String>,
}

#[derive(Debug, Clone)]
struct RecordMember {
    name: String,
    ty: String,
    doc: DocInfo,
}

/// In-memory declaration graph backing both the [`TypeProvider`] and
/// [`DocReader`] seams.
///
/// Container and map types are referenced structurally through their labels
/// (`List<Item>`, `Item[]`, `Map<String, Item>`); composite and enumerated
/// types are declared by name under `types`, endpoint classes under
/// `classes`.
#[derive(Debug, Clone)]
pub struct TypeGraph {
    types: HashMap<String, TypeRecord>,
    classes: HashMap<String, ClassDecl>,
}

/// Load a declaration graph from a YAML or JSON file.
pub fn load_graph(path: &Path) -> anyhow::Result<TypeGraph> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading declaration graph {}", path.display()))?;
    let yaml = !matches!(path.extension().and_then(|e| e.to_str()), Some("json"));
    if yaml {
        TypeGraph::from_yaml(&content)
    } else {
        TypeGraph::from_json(&content)
    }
    .with_context(|| format!("parsing declaration graph {}", path.display()))
}

impl TypeGraph {
    pub fn from_yaml(content: &str) -> anyhow::Result<Self> {
        let raw: RawGraph = serde_yaml::from_str(content)?;
        Self::from_raw(raw)
    }

    pub fn from_json(content: &str) -> anyhow::Result<Self> {
        let raw: RawGraph = serde_json::from_str(content)?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawGraph) -> anyhow::Result<Self> {
        let mut types = HashMap::new();
        for (name, decl) in raw.types {
            let members = decl
                .members
                .into_iter()
                .map(|m| RecordMember {
                    name: m.name,
                    ty: m.ty,
                    doc: DocInfo {
                        description: m.description,
                        required: m.optional.map(|o| !o),
                        range: m.range,
                    },
                })
                .collect();
            types.insert(
                name,
                TypeRecord {
                    description: decl.description,
                    members,
                    constants: decl.constants,
                },
            );
        }

        let mut classes = HashMap::new();
        for (name, decl) in raw.classes {
            let mut methods = Vec::with_capacity(decl.methods.len());
            for m in &decl.methods {
                methods.push(build_method(&name, &decl, m)?);
            }
            classes.insert(
                name.clone(),
                ClassDecl {
                    name,
                    description: decl.description,
                    rest: decl.rest,
                    base_path: decl.path,
                    methods,
                },
            );
        }
        Ok(TypeGraph { types, classes })
    }

    pub fn class(&self, name: &str) -> Option<&ClassDecl> {
        self.classes.get(name)
    }

    /// Reference to a declared type, for class field-listing mode.
    pub fn type_ref(&self, name: &str) -> Option<TypeRef> {
        self.types.contains_key(name).then(|| TypeRef::named(name))
    }

    pub fn type_description(&self, name: &str) -> Option<&str> {
        self.types.get(name).map(|t| t.description.as_str())
    }

    /// Lookup by full label first, falling back to the generic head so a
    /// wrapper reference like `Page<Item>` finds the `Page` declaration.
    fn record(&self, label: &str) -> Option<&TypeRecord> {
        self.types.get(label).or_else(|| {
            let head = generic_head(label)?;
            self.types.get(head)
        })
    }
}

fn build_method(class_name: &str, class: &RawClass, raw: &RawMethod) -> anyhow::Result<MethodDecl> {
    let mapping = match &raw.verb {
        Some(verb) => Some(MappingAnnotation {
            verb: parse_verb(verb)
                .with_context(|| format!("method {}.{}", class_name, raw.name))?,
            path: raw.path.clone(),
        }),
        None => None,
    };
    let mut params = Vec::with_capacity(raw.params.len());
    for p in &raw.params {
        let marker = match p.binding.as_deref() {
            None => None,
            Some(b) => Some(
                binding_marker(b)
                    .with_context(|| format!("parameter {} of {}.{}", p.name, class_name, raw.name))?,
            ),
        };
        params.push(ParamDecl {
            name: p.name.clone(),
            ty: TypeRef::named(&p.ty),
            marker,
            path_name: p.path_name.clone(),
            doc: DocInfo {
                description: p.description.clone(),
                required: p.optional.map(|o| !o),
                range: p.range.clone(),
            },
        });
    }
    // At most one parameter may carry the request body.
    let bodies = params
        .iter()
        .filter(|p| p.marker == Some(BindingMarker::Body))
        .count();
    if bodies > 1 {
        anyhow::bail!(
            "method {}.{} declares more than one body parameter",
            class_name,
            raw.name
        );
    }
    Ok(MethodDecl {
        name: raw.name.clone(),
        description: raw.description.clone(),
        declaration: render_declaration(raw),
        class_name: class_name.to_string(),
        class_description: class.description.clone(),
        class_path: class.path.clone(),
        json_response: class.rest,
        mapping,
        params,
        returns: raw.returns.as_deref().map(TypeRef::named),
    })
}

/// Explicit mapping table from annotation literals to the closed verb set.
fn parse_verb(raw: &str) -> anyhow::Result<Method> {
    match raw.to_ascii_lowercase().as_str() {
        "get" => Ok(Method::GET),
        "post" => Ok(Method::POST),
        "put" => Ok(Method::PUT),
        "delete" => Ok(Method::DELETE),
        "patch" => Ok(Method::PATCH),
        other => anyhow::bail!("unknown HTTP verb '{other}'"),
    }
}

/// Explicit mapping table from annotation literals to the closed binding set.
fn binding_marker(raw: &str) -> anyhow::Result<BindingMarker> {
    match raw.to_ascii_lowercase().as_str() {
        "body" | "request_body" => Ok(BindingMarker::Body),
        "path" | "path_variable" => Ok(BindingMarker::Path),
        other => anyhow::bail!("unknown parameter binding '{other}'"),
    }
}

fn render_declaration(raw: &RawMethod) -> String {
    let params = raw
        .params
        .iter()
        .map(|p| format!("{} {}", p.ty, p.name))
        .collect::<Vec<_>>()
        .join(", ");
    let returns = raw.returns.as_deref().unwrap_or("void");
    format!("{} {}({})", returns, raw.name, params)
}

/// Split a generic label into head and top-level arguments.
///
/// `Map<String, List<Item>>` → `("Map", ["String", "List<Item>"])`.
fn generic_args(label: &str) -> Option<(&str, Vec<&str>)> {
    let open = label.find('<')?;
    let inner = label.strip_suffix('>')?.get(open + 1..)?;
    let head = &label[..open];
    let mut args = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;
    for (i, c) in inner.char_indices() {
        match c {
            '<' => depth += 1,
            '>' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                args.push(inner[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }
    args.push(inner[start..].trim());
    Some((head, args))
}

fn generic_head(label: &str) -> Option<&str> {
    generic_args(label).map(|(head, _)| head)
}

impl TypeProvider for TypeGraph {
    fn is_map(&self, ty: &TypeRef) -> bool {
        generic_head(&ty.label)
            .map(|h| MAP_HEADS.contains(&h))
            .unwrap_or(false)
    }

    fn is_collection(&self, ty: &TypeRef) -> bool {
        if ty.label.ends_with("[]") {
            return true;
        }
        match generic_head(&ty.label) {
            Some(h) => COLLECTION_HEADS.contains(&h),
            // A raw collection reference without element arguments.
            None => COLLECTION_HEADS.contains(&ty.label.as_str()),
        }
    }

    fn is_enum(&self, ty: &TypeRef) -> bool {
        self.record(&ty.label)
            .map(|r| !r.constants.is_empty())
            .unwrap_or(false)
    }

    fn element_type(&self, ty: &TypeRef) -> Option<TypeRef> {
        if let Some(element) = ty.label.strip_suffix("[]") {
            return Some(TypeRef::named(element));
        }
        let (head, args) = generic_args(&ty.label)?;
        if MAP_HEADS.contains(&head) {
            // Key types are not modeled; maps document by value type.
            args.get(1).map(|a| TypeRef::named(*a))
        } else if COLLECTION_HEADS.contains(&head) {
            args.first().map(|a| TypeRef::named(*a))
        } else {
            None
        }
    }

    fn members(&self, ty: &TypeRef) -> Vec<MemberDecl> {
        self.record(&ty.label)
            .map(|r| {
                r.members
                    .iter()
                    .map(|m| MemberDecl {
                        name: m.name.clone(),
                        ty: TypeRef::named(&m.ty),
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    fn enum_constants(&self, ty: &TypeRef) -> Vec<String> {
        self.record(&ty.label)
            .map(|r| r.constants.clone())
            .unwrap_or_default()
    }
}

impl DocReader for TypeGraph {
    fn member_doc(&self, owner: &TypeRef, member: &str) -> DocInfo {
        self.record(&owner.label)
            .and_then(|r| r.members.iter().find(|m| m.name == member))
            .map(|m| m.doc.clone())
            .unwrap_or_default()
    }
}
