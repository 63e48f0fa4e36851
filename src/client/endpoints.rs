//! Raw REST surface of the two endpoint families.
//!
//! # Responsibilities
//! - Build per-family request URLs from the configured route tables
//! - Issue the actual HTTP calls
//! - Translate non-success statuses into errors
//!
//! # Design Decisions
//! - One shared reqwest client serves both families
//! - Success is decided purely by HTTP status; add/delete response bodies
//!   are never read

use std::time::Duration;

use reqwest::Client;

use crate::client::error::ApiError;
use crate::client::family::EndpointFamily;
use crate::client::types::{NewTodo, Todo, TodoId};
use crate::config::schema::{EndpointsConfig, FamilyConfig, TimeoutConfig};

/// Fully resolved routes for one family.
#[derive(Debug, Clone)]
struct FamilyRoutes {
    base_url: String,
    list: String,
    add: String,
    delete: String,
}

impl FamilyRoutes {
    fn resolve(shared_base: &str, config: &FamilyConfig) -> Self {
        let base = config.base_url.as_deref().unwrap_or(shared_base);
        Self {
            base_url: base.trim_end_matches('/').to_string(),
            list: config.list.clone(),
            add: config.add.clone(),
            delete: config.delete.clone(),
        }
    }
}

/// HTTP-level access to both endpoint families.
pub struct EndpointApi {
    client: Client,
    primary: FamilyRoutes,
    secondary: FamilyRoutes,
}

impl EndpointApi {
    /// Build the API handle from validated configuration.
    pub fn new(
        endpoints: &EndpointsConfig,
        timeouts: &TimeoutConfig,
    ) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder();
        if timeouts.connect_secs > 0 {
            builder = builder.connect_timeout(Duration::from_secs(timeouts.connect_secs));
        }
        if timeouts.request_secs > 0 {
            builder = builder.timeout(Duration::from_secs(timeouts.request_secs));
        }

        Ok(Self {
            client: builder.build()?,
            primary: FamilyRoutes::resolve(&endpoints.base_url, &endpoints.primary),
            secondary: FamilyRoutes::resolve(&endpoints.base_url, &endpoints.secondary),
        })
    }

    fn routes(&self, family: EndpointFamily) -> &FamilyRoutes {
        match family {
            EndpointFamily::Primary => &self.primary,
            EndpointFamily::Secondary => &self.secondary,
        }
    }

    /// GET the family's todo list.
    pub async fn fetch_todos(&self, family: EndpointFamily) -> Result<Vec<Todo>, ApiError> {
        let routes = self.routes(family);
        let res = self
            .client
            .get(format!("{}{}", routes.base_url, routes.list))
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }

        Ok(res.json::<Vec<Todo>>().await?)
    }

    /// POST a new task to the family's add endpoint.
    pub async fn create_todo(&self, family: EndpointFamily, task: &str) -> Result<(), ApiError> {
        let routes = self.routes(family);
        let res = self
            .client
            .post(format!("{}{}", routes.base_url, routes.add))
            .json(&NewTodo { task })
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }
        Ok(())
    }

    /// DELETE a todo by id from the family's delete endpoint.
    pub async fn remove_todo(&self, family: EndpointFamily, id: &TodoId) -> Result<(), ApiError> {
        let routes = self.routes(family);
        let res = self
            .client
            .delete(format!("{}{}/{}", routes.base_url, routes.delete, id))
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }
        Ok(())
    }
}
