//! # apigen
//!
//! **apigen** generates API documentation from source-level type
//! declarations: Markdown documents with parameter tables and example JSON,
//! and uploadable endpoint schemas for a YApi-compatible api-catalog
//! service.
//!
//! ## Architecture
//!
//! - **[`decl`]** - Declaration model and the seams to the host type system;
//!   [`decl::TypeGraph`] is the built-in YAML/JSON-backed implementation
//! - **[`resolver`]** - The type-model resolver: classifies types and builds
//!   field trees with descriptions, required flags and synthesized examples,
//!   cutting recursion on self-referential types
//! - **[`docgen`]** - Markdown projection: parameter tables and pretty
//!   example JSON, written one file per endpoint or type
//! - **[`catalog`]** - Interface-schema upload to the api-catalog service,
//!   including category lookup and creation
//! - **[`cli`]** - The `apigen` command line
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::path::Path;
//!
//! use apigen::config::GeneratorConfig;
//! use apigen::decl::load_graph;
//! use apigen::resolver::MethodModelBuilder;
//!
//! let graph = load_graph(Path::new("api.yaml")).expect("failed to load graph");
//! let config = GeneratorConfig::default();
//! let class = graph.class("ItemController").expect("unknown class");
//! let builder = MethodModelBuilder::new(&graph, &graph, &config);
//! for method in class.endpoints() {
//!     let model = builder.build(method).expect("resolution failed");
//!     apigen::docgen::write_method_doc(&config, &model).expect("write failed");
//! }
//! ```

pub mod catalog;
pub mod cli;
pub mod config;
pub mod decl;
pub mod docgen;
pub mod resolver;

pub use config::GeneratorConfig;
pub use decl::{load_graph, TypeGraph};
pub use resolver::{EndpointModel, Field, MethodModelBuilder, ParamBinding};
