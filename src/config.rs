//! Generator configuration.
//!
//! A plain value threaded into every component at call time; prompting for
//! and persisting missing values is a host concern, not handled here.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

/// Configuration for doc generation and schema upload.
///
/// Loadable from a YAML file; every key has a default so a partial file (or
/// none at all) is valid.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Directory Markdown documents are written to.
    pub output_dir: PathBuf,
    /// Member names excluded from field trees (technical/internal fields).
    pub excluded_fields: Vec<String>,
    /// Indent marker prefixed once per nesting level in parameter tables.
    /// A single space renders as `&emsp;`.
    pub indent_prefix: String,
    /// Derive the category name from the first token of the class
    /// description instead of using `default_category`.
    pub auto_category: bool,
    /// Category name used when auto-category is off or yields nothing.
    pub default_category: String,
    /// Name doc files after the first token of the method description
    /// instead of the technical method name.
    pub doc_name_from_description: bool,
    /// Base URL of the API-catalog service.
    pub server_url: String,
    /// Project token for the catalog service.
    pub project_token: String,
    /// Project id in the catalog service; discovered via the token when
    /// empty.
    pub project_id: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            output_dir: PathBuf::from("target/api_docs"),
            excluded_fields: Vec::new(),
            indent_prefix: " ".to_string(),
            auto_category: false,
            default_category: "api_generator".to_string(),
            doc_name_from_description: false,
            server_url: String::new(),
            project_token: String::new(),
            project_id: String::new(),
        }
    }
}

impl GeneratorConfig {
    /// Load configuration from a YAML file.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        serde_yaml::from_str(&content)
            .with_context(|| format!("parsing config {}", path.display()))
    }
}
