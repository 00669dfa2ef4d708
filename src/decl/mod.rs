//! Source-level type declarations and the seams to the host type system.
//!
//! The resolver consumes two read-only collaborators: a [`TypeProvider`]
//! answering structural queries about [`TypeRef`]s, and a [`DocReader`]
//! supplying doc-comment text and annotation data. [`TypeGraph`] is the
//! built-in implementation backed by a YAML/JSON declaration file.

mod graph;
mod provider;
mod types;

pub use graph::{load_graph, TypeGraph};
pub use provider::{DocReader, TypeProvider};
pub use types::{
    BindingMarker, ClassDecl, DocInfo, MappingAnnotation, MemberDecl, MethodDecl, ParamDecl,
    TypeId, TypeRef,
};
