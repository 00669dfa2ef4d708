use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use tracing::{info, warn};

use crate::catalog::{build_interface, CatalogClient, HttpCatalogClient};
use crate::config::GeneratorConfig;
use crate::decl::{load_graph, ClassDecl, DocInfo, MethodDecl, TypeGraph};
use crate::docgen::{write_class_doc, write_method_doc};
use crate::resolver::{FieldTreeResolver, MethodModelBuilder};

/// Command line interface for the generator.
#[derive(Parser)]
#[command(name = "apigen", version, about = "API doc and catalog-schema generator")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate Markdown API documents from a declaration graph
    Doc {
        /// Declaration graph file (YAML or JSON)
        graph: PathBuf,
        /// Endpoint class to document (all mapped methods unless --method)
        #[arg(long)]
        class: Option<String>,
        /// Single method of --class to document
        #[arg(long, requires = "class")]
        method: Option<String>,
        /// Composite type to document in field-listing mode
        #[arg(long = "type", conflicts_with = "class")]
        type_name: Option<String>,
        /// Configuration file (YAML)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Output directory override
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Upload endpoint schemas to the api-catalog service
    Upload {
        /// Declaration graph file (YAML or JSON)
        graph: PathBuf,
        /// Endpoint class to upload (all mapped methods unless --method)
        #[arg(long)]
        class: String,
        /// Single method of --class to upload
        #[arg(long)]
        method: Option<String>,
        /// Configuration file (YAML)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Catalog server base URL override
        #[arg(long)]
        server_url: Option<String>,
        /// Catalog project token override
        #[arg(long)]
        token: Option<String>,
        /// Catalog project id override
        #[arg(long)]
        project_id: Option<String>,
    },
}

/// Parse arguments and dispatch.
pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Doc {
            graph,
            class,
            method,
            type_name,
            config,
            output,
        } => {
            let mut config = load_config(config.as_deref())?;
            if let Some(output) = output {
                config.output_dir = output;
            }
            let graph = load_graph(&graph)?;
            run_doc(&graph, &config, class.as_deref(), method.as_deref(), type_name.as_deref())
        }
        Commands::Upload {
            graph,
            class,
            method,
            config,
            server_url,
            token,
            project_id,
        } => {
            let mut config = load_config(config.as_deref())?;
            if let Some(url) = server_url {
                config.server_url = url;
            }
            if let Some(token) = token {
                config.project_token = token;
            }
            if let Some(id) = project_id {
                config.project_id = id;
            }
            let graph = load_graph(&graph)?;
            run_upload(&graph, &config, &class, method.as_deref())
        }
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<GeneratorConfig> {
    match path {
        Some(path) => GeneratorConfig::from_file(path),
        None => Ok(GeneratorConfig::default()),
    }
}

fn run_doc(
    graph: &TypeGraph,
    config: &GeneratorConfig,
    class: Option<&str>,
    method: Option<&str>,
    type_name: Option<&str>,
) -> anyhow::Result<()> {
    if let Some(name) = type_name {
        return write_type_doc(graph, config, name);
    }
    let Some(class_name) = class else {
        bail!("pass --class to document an endpoint class, or --type for a composite type");
    };
    let class = lookup_class(graph, class_name)?;
    let builder = MethodModelBuilder::new(graph, graph, config);
    for method in selected_methods(class, method)? {
        if !method.is_endpoint() {
            // Not an error: plain methods simply have nothing to document.
            info!(method = %method.name, "no HTTP mapping, skipped");
            continue;
        }
        let model = builder.build(method)?;
        write_method_doc(config, &model)?;
    }
    Ok(())
}

/// Field-listing mode: document a composite type's members without any
/// endpoint context.
fn write_type_doc(graph: &TypeGraph, config: &GeneratorConfig, name: &str) -> anyhow::Result<()> {
    let ty = graph
        .type_ref(name)
        .with_context(|| format!("type '{name}' is not declared in the graph"))?;
    let resolver = FieldTreeResolver::new(graph, graph, &config.excluded_fields);
    let fields = match resolver.resolve_root("", &ty, DocInfo::default()) {
        Some(root) if root.has_children() => root.children,
        Some(root) => vec![root],
        None => Vec::new(),
    };
    write_class_doc(config, name, &fields)?;
    Ok(())
}

fn run_upload(
    graph: &TypeGraph,
    config: &GeneratorConfig,
    class_name: &str,
    method: Option<&str>,
) -> anyhow::Result<()> {
    let class = lookup_class(graph, class_name)?;
    let methods = selected_methods(class, method)?;
    // A class without the REST marker, or with no mapped method in the
    // selection, has nothing uploadable; report that instead of touching
    // the catalog.
    if !class.rest || methods.iter().all(|m| !m.is_endpoint()) {
        warn!(class = %class_name, "not a REST api, nothing to upload");
        return Ok(());
    }
    let mut client = HttpCatalogClient::new(config)?;
    let project_id = client.resolve_project_id()?;
    info!(project_id = %project_id, "uploading to catalog project");

    let builder = MethodModelBuilder::new(graph, graph, config);
    for method in methods {
        if !method.is_endpoint() {
            info!(method = %method.name, "no HTTP mapping, skipped");
            continue;
        }
        let model = builder.build(method)?;
        let payload = build_interface(&model, config, &client)?;
        client
            .save_interface(&payload)
            .with_context(|| format!("uploading {}", model.method_name))?;
        info!(method = %model.method_name, path = %model.path, "uploaded interface");
    }
    Ok(())
}

fn lookup_class<'a>(graph: &'a TypeGraph, name: &str) -> anyhow::Result<&'a ClassDecl> {
    graph
        .class(name)
        .with_context(|| format!("class '{name}' is not declared in the graph"))
}

fn selected_methods<'a>(
    class: &'a ClassDecl,
    method: Option<&str>,
) -> anyhow::Result<Vec<&'a MethodDecl>> {
    match method {
        Some(name) => {
            let found = class
                .method(name)
                .with_context(|| format!("method '{}' not found on {}", name, class.name))?;
            Ok(vec![found])
        }
        None => Ok(class.methods.iter().collect()),
    }
}
