use anyhow::{bail, Context};
use serde_json::json;
use tracing::debug;

use super::types::{CatalogResponse, CategoryInfo, InterfacePayload, ProjectInfo};
use crate::config::GeneratorConfig;

/// Operations the uploader needs from the api-catalog service. The HTTP
/// implementation talks to a YApi-compatible server; tests substitute an
/// in-memory fake.
pub trait CatalogClient {
    /// Project coordinates for the configured token.
    fn project_info(&self) -> anyhow::Result<ProjectInfo>;

    /// All interface categories of the project.
    fn list_categories(&self) -> anyhow::Result<Vec<CategoryInfo>>;

    /// Create a category and return it.
    fn add_category(&self, name: &str) -> anyhow::Result<CategoryInfo>;

    /// Create or update one interface.
    fn save_interface(&self, payload: &InterfacePayload) -> anyhow::Result<()>;
}

/// Blocking HTTP client for a YApi-compatible catalog server.
pub struct HttpCatalogClient {
    base_url: String,
    token: String,
    project_id: String,
    http: reqwest::blocking::Client,
}

impl HttpCatalogClient {
    /// # Errors
    ///
    /// Fails when the server url or project token is missing from the
    /// configuration.
    pub fn new(config: &GeneratorConfig) -> anyhow::Result<Self> {
        if config.server_url.is_empty() {
            bail!("catalog upload requires server_url in the configuration");
        }
        if config.project_token.is_empty() {
            bail!("catalog upload requires project_token in the configuration");
        }
        Ok(HttpCatalogClient {
            base_url: config.server_url.trim_end_matches('/').to_string(),
            token: config.project_token.clone(),
            project_id: config.project_id.clone(),
            http: reqwest::blocking::Client::new(),
        })
    }

    /// Configured project id, or the one the server reports for the token.
    pub fn resolve_project_id(&mut self) -> anyhow::Result<String> {
        if self.project_id.is_empty() {
            let info = self
                .project_info()
                .context("looking up the project for the configured token")?;
            match info.id {
                Some(id) => self.project_id = id.to_string(),
                None => bail!("catalog did not report a project id; set project_id in the configuration"),
            }
        }
        Ok(self.project_id.clone())
    }

    pub fn token(&self) -> &str {
        &self.token
    }
}

impl CatalogClient for HttpCatalogClient {
    fn project_info(&self) -> anyhow::Result<ProjectInfo> {
        let url = format!("{}/api/project/get?token={}", self.base_url, self.token);
        debug!(url = %url, "fetching project info");
        let response: CatalogResponse<ProjectInfo> = self
            .http
            .get(&url)
            .send()
            .context("requesting project info")?
            .json()
            .context("decoding project info")?;
        response.into_data()
    }

    fn list_categories(&self) -> anyhow::Result<Vec<CategoryInfo>> {
        let url = format!(
            "{}/api/interface/getCatMenu?token={}&project_id={}",
            self.base_url, self.token, self.project_id
        );
        debug!(url = %url, "listing categories");
        let response: CatalogResponse<Vec<CategoryInfo>> = self
            .http
            .get(&url)
            .send()
            .context("requesting category list")?
            .json()
            .context("decoding category list")?;
        response.into_data()
    }

    fn add_category(&self, name: &str) -> anyhow::Result<CategoryInfo> {
        let url = format!("{}/api/interface/add_cat", self.base_url);
        debug!(url = %url, name, "creating category");
        let body = json!({
            "token": self.token,
            "project_id": self.project_id,
            "name": name,
            "desc": "",
        });
        let response: CatalogResponse<CategoryInfo> = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .context("creating category")?
            .json()
            .context("decoding created category")?;
        response.into_data()
    }

    fn save_interface(&self, payload: &InterfacePayload) -> anyhow::Result<()> {
        let url = format!("{}/api/interface/save", self.base_url);
        debug!(url = %url, title = %payload.title, "saving interface");
        let response: CatalogResponse<serde_json::Value> = self
            .http
            .post(&url)
            .json(payload)
            .send()
            .context("saving interface")?
            .json()
            .context("decoding save response")?;
        response.check()
    }
}
