use serde_json::{json, Value};

use super::classify::{classify, literal_kind, LiteralKind};
use super::example::{enum_example, synthesize, COLLECTION_EXAMPLE_LEN};
use super::types::{Category, Field};
use crate::decl::{DocInfo, DocReader, TypeProvider, TypeRef};

/// Ordered set of composite type identities currently being expanded.
///
/// Each resolution owns its own path, so concurrent resolutions never
/// interfere. An `Object` expansion either cuts (the identity is already on
/// the path) or pushes a previously-unseen identity, which bounds recursion
/// depth by the number of distinct composite types and guarantees
/// termination on cyclic type graphs.
#[derive(Debug, Default)]
pub struct AncestorPath(Vec<crate::decl::TypeId>);

impl AncestorPath {
    pub fn new() -> Self {
        Self::default()
    }

    fn contains(&self, id: &crate::decl::TypeId) -> bool {
        self.0.contains(id)
    }

    fn push(&mut self, id: crate::decl::TypeId) {
        self.0.push(id);
    }

    fn pop(&mut self) {
        let _ = self.0.pop();
    }
}

/// The core algorithm: recursively turns a type reference into a finite
/// [`Field`] tree with synthesized example values.
///
/// Pure over its immutable inputs; descriptions, required flags and range
/// text come from the [`DocReader`], never invented here.
pub struct FieldTreeResolver<'a> {
    provider: &'a dyn TypeProvider,
    docs: &'a dyn DocReader,
    /// Member names excluded from expansion (technical/internal fields).
    excluded: &'a [String],
}

impl<'a> FieldTreeResolver<'a> {
    pub fn new(
        provider: &'a dyn TypeProvider,
        docs: &'a dyn DocReader,
        excluded: &'a [String],
    ) -> Self {
        FieldTreeResolver {
            provider,
            docs,
            excluded,
        }
    }

    /// Resolve a root type reference (a parameter or return type).
    ///
    /// Returns `None` when the type is excluded (void, generic placeholder).
    pub fn resolve_root(&self, name: &str, ty: &TypeRef, doc: DocInfo) -> Option<Field> {
        let mut path = AncestorPath::new();
        self.resolve(name, ty, doc, &mut path)
    }

    fn resolve(
        &self,
        name: &str,
        ty: &TypeRef,
        doc: DocInfo,
        path: &mut AncestorPath,
    ) -> Option<Field> {
        match classify(self.provider, ty) {
            Category::Excluded => None,
            Category::Literal => Some(self.literal_field(name, ty, doc)),
            Category::Enum => Some(self.enum_field(name, ty, doc)),
            Category::Collection => Some(self.container_field(name, ty, doc, path, false)),
            Category::Map => Some(self.container_field(name, ty, doc, path, true)),
            Category::Object => Some(self.object_field(name, ty, doc, path)),
        }
    }

    fn literal_field(&self, name: &str, ty: &TypeRef, doc: DocInfo) -> Field {
        let kind = literal_kind(&ty.label).unwrap_or(LiteralKind::String);
        Field {
            name: name.to_string(),
            type_label: ty.label.clone(),
            category: Category::Literal,
            description: doc.description,
            required: doc.required.unwrap_or(true),
            range: doc.range,
            example: synthesize(kind),
            children: Vec::new(),
        }
    }

    fn enum_field(&self, name: &str, ty: &TypeRef, doc: DocInfo) -> Field {
        let constants = self.provider.enum_constants(ty);
        let range = doc.range.or_else(|| {
            if constants.is_empty() {
                None
            } else {
                Some(constants.join(","))
            }
        });
        Field {
            name: name.to_string(),
            type_label: ty.label.clone(),
            category: Category::Enum,
            description: doc.description,
            required: doc.required.unwrap_or(true),
            range,
            example: enum_example(&constants),
            children: Vec::new(),
        }
    }

    /// Collections and maps resolve their element (value) type with the same
    /// ancestor path. An object element contributes its children to this
    /// field; a scalar element contributes a fixed multi-value example.
    fn container_field(
        &self,
        name: &str,
        ty: &TypeRef,
        doc: DocInfo,
        path: &mut AncestorPath,
        map: bool,
    ) -> Field {
        let category = if map { Category::Map } else { Category::Collection };
        let mut field = Field {
            name: name.to_string(),
            type_label: ty.label.clone(),
            category,
            description: doc.description,
            required: doc.required.unwrap_or(false),
            range: doc.range,
            example: if map { json!({}) } else { json!([]) },
            children: Vec::new(),
        };
        let element = self.provider.element_type(ty);
        let resolved =
            element.and_then(|el| self.resolve(name, &el, DocInfo::default(), path));
        if let Some(el) = resolved {
            if el.has_children() {
                field.children = el.children;
            } else if el.category == Category::Object {
                // Cycle-cut or opaque element; keep the container placeholder.
                field.example = if map { json!({ "key": {} }) } else { json!([{}]) };
            } else if map {
                field.example = json!({ "key": el.example });
            } else {
                field.example = Value::Array(vec![el.example; COLLECTION_EXAMPLE_LEN]);
            }
        }
        field
    }

    fn object_field(
        &self,
        name: &str,
        ty: &TypeRef,
        doc: DocInfo,
        path: &mut AncestorPath,
    ) -> Field {
        let mut field = Field {
            name: name.to_string(),
            type_label: ty.label.clone(),
            category: Category::Object,
            description: doc.description,
            required: doc.required.unwrap_or(false),
            range: doc.range,
            example: Value::Null,
            children: Vec::new(),
        };
        if path.contains(&ty.id) {
            // Second occurrence on the current root-to-node path: cut the
            // cycle, leave children empty.
            field.example = json!({});
            return field;
        }
        path.push(ty.id.clone());
        for member in self.provider.members(ty) {
            if self.excluded.contains(&member.name) {
                continue;
            }
            let doc = self.docs.member_doc(ty, &member.name);
            if let Some(child) = self.resolve(&member.name, &member.ty, doc, path) {
                field.children.push(child);
            }
        }
        path.pop();
        field
    }
}
