use anyhow::bail;
use http::Method;

use super::tree::FieldTreeResolver;
use super::types::{BoundField, Category, EndpointModel, ParamBinding};
use crate::config::GeneratorConfig;
use crate::decl::{BindingMarker, DocInfo, DocReader, MethodDecl, TypeProvider};

/// Builds an [`EndpointModel`] from a method declaration: one resolver
/// invocation per parameter plus one for the return type, with
/// binding-annotation rules applied to each top-level parameter.
pub struct MethodModelBuilder<'a> {
    provider: &'a dyn TypeProvider,
    docs: &'a dyn DocReader,
    config: &'a GeneratorConfig,
}

impl<'a> MethodModelBuilder<'a> {
    pub fn new(
        provider: &'a dyn TypeProvider,
        docs: &'a dyn DocReader,
        config: &'a GeneratorConfig,
    ) -> Self {
        MethodModelBuilder {
            provider,
            docs,
            config,
        }
    }

    /// Build the endpoint model for a mapped method.
    ///
    /// # Errors
    ///
    /// Fails when the method carries no HTTP mapping annotation; callers are
    /// expected to check [`MethodDecl::is_endpoint`] first and treat absence
    /// as "not an endpoint" rather than a defect.
    pub fn build(&self, method: &MethodDecl) -> anyhow::Result<EndpointModel> {
        let Some(mapping) = &method.mapping else {
            bail!(
                "{}.{} has no HTTP mapping annotation; not an endpoint",
                method.class_name,
                method.name
            );
        };
        let resolver =
            FieldTreeResolver::new(self.provider, self.docs, &self.config.excluded_fields);
        let has_body = method
            .params
            .iter()
            .any(|p| p.marker == Some(BindingMarker::Body));

        let mut request = Vec::new();
        for param in &method.params {
            let Some(mut field) = resolver.resolve_root(&param.name, &param.ty, param.doc.clone())
            else {
                continue;
            };
            let binding = match param.marker {
                Some(BindingMarker::Body) => ParamBinding::JsonBody,
                Some(BindingMarker::Path) => ParamBinding::PathVariable,
                // Body and query/form parameter styles are mutually
                // exclusive per endpoint; a body binding suppresses
                // inference for the remaining parameters.
                None if has_body => ParamBinding::Unbound,
                None if mapping.verb == Method::GET => ParamBinding::Query,
                None => ParamBinding::FormField,
            };
            match binding {
                ParamBinding::PathVariable => {
                    if let Some(name) = &param.path_name {
                        field.name = name.clone();
                    }
                    request.push(BoundField { binding, field });
                }
                // Query/form encodings are flat: an object parameter
                // contributes one top-level entry per member.
                ParamBinding::Query | ParamBinding::FormField
                    if field.category == Category::Object =>
                {
                    for child in field.children {
                        request.push(BoundField {
                            binding,
                            field: child,
                        });
                    }
                }
                _ => request.push(BoundField { binding, field }),
            }
        }

        let response = method
            .returns
            .as_ref()
            .and_then(|ty| resolver.resolve_root("", ty, DocInfo::default()));

        Ok(EndpointModel {
            method_name: method.name.clone(),
            class_name: method.class_name.clone(),
            verb: mapping.verb.clone(),
            path: format!("{}{}", method.class_path, mapping.path),
            category_name: category_name(self.config, &method.class_description),
            request,
            response,
            description: method.description.clone(),
            declaration: method.declaration.clone(),
            json_response: method.json_response,
        })
    }
}

/// Category naming strategy: the first token of the class description when
/// auto-category is enabled and a description exists, the configured default
/// name otherwise.
pub fn category_name(config: &GeneratorConfig, class_description: &str) -> String {
    if config.auto_category {
        if let Some(first) = class_description.split_whitespace().next() {
            return first.to_string();
        }
    }
    config.default_category.clone()
}
