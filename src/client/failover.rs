//! Failover dispatch across the two endpoint families.

use std::sync::Arc;

use uuid::Uuid;

use crate::client::endpoints::EndpointApi;
use crate::client::error::ClientError;
use crate::client::family::EndpointFamily;
use crate::client::types::{Todo, TodoId};
use crate::ui::{Frontend, StatusKind};

/// A rendered list and the family that served it.
///
/// Callers keep the family around: deletes against the displayed ids must
/// go to the deployment that assigned them.
#[derive(Debug, Clone)]
pub struct Listing {
    pub todos: Vec<Todo>,
    pub family: EndpointFamily,
    /// True when the preferred family failed and the fallback answered.
    pub degraded: bool,
}

/// CRUD client for a pair of functionally identical REST deployments.
///
/// Each operation prefers its home family. List and delete fall back to
/// the other family on any failure of the first; add reports its failure
/// without cascading.
pub struct FailoverClient {
    api: EndpointApi,
    frontend: Arc<dyn Frontend>,
}

impl FailoverClient {
    pub fn new(api: EndpointApi, frontend: Arc<dyn Frontend>) -> Self {
        Self { api, frontend }
    }

    /// Fetch and render the todo list, preferring `family`.
    ///
    /// Exactly one render on any success path; one status message on
    /// fallback success or total failure, none on preferred success.
    pub async fn list(&self, family: EndpointFamily) -> Result<Listing, ClientError> {
        let op_id = Uuid::new_v4();
        match self.api.fetch_todos(family).await {
            Ok(todos) => {
                tracing::debug!(%op_id, family = %family, count = todos.len(), "list served");
                self.frontend.render(&todos, family);
                Ok(Listing {
                    todos,
                    family,
                    degraded: false,
                })
            }
            Err(preferred_error) => {
                let fallback = family.fallback();
                tracing::warn!(
                    %op_id,
                    preferred = %family,
                    error = %preferred_error,
                    "list failed, trying {}",
                    fallback
                );
                match self.api.fetch_todos(fallback).await {
                    Ok(todos) => {
                        self.frontend.render(&todos, fallback);
                        self.frontend.show_status(
                            StatusKind::Success,
                            &format!("Loaded from {} ({} unavailable)", fallback, family),
                        );
                        Ok(Listing {
                            todos,
                            family: fallback,
                            degraded: true,
                        })
                    }
                    Err(fallback_error) => {
                        tracing::error!(
                            %op_id,
                            preferred = %family,
                            error = %fallback_error,
                            "list failed on both families"
                        );
                        self.frontend.show_status(
                            StatusKind::Error,
                            "Could not load todos from either endpoint",
                        );
                        Err(ClientError::BothFamilies {
                            preferred: family,
                            fallback,
                            preferred_error,
                            fallback_error,
                        })
                    }
                }
            }
        }
    }

    /// Validate and create a task on `family`, then refresh the list.
    ///
    /// No fallback; writes stay on the family the caller addressed.
    pub async fn add(&self, family: EndpointFamily, input: &str) -> Result<Listing, ClientError> {
        let task = input.trim();
        if task.is_empty() {
            self.frontend
                .show_status(StatusKind::Error, "Please enter a task");
            return Err(ClientError::EmptyTask);
        }

        match self.api.create_todo(family, task).await {
            Ok(()) => {
                self.frontend.clear_input();
                self.frontend
                    .show_status(StatusKind::Success, &format!("Todo added via {}", family));
                self.list(family).await
            }
            Err(source) => {
                tracing::warn!(family = %family, error = %source, "add failed");
                self.frontend.show_status(
                    StatusKind::Error,
                    &format!("Error adding todo via {}", family),
                );
                Err(ClientError::Family { family, source })
            }
        }
    }

    /// Confirm and delete `id` from `family`, falling back on failure.
    ///
    /// The id is carried verbatim to the fallback family; id namespaces
    /// are independent, so a cross-family delete usually fails and is
    /// reported through the combined error message.
    pub async fn delete(
        &self,
        family: EndpointFamily,
        id: &TodoId,
    ) -> Result<Listing, ClientError> {
        if !self.frontend.confirm_delete(family, id) {
            return Err(ClientError::Cancelled);
        }

        let op_id = Uuid::new_v4();
        match self.api.remove_todo(family, id).await {
            Ok(()) => {
                self.frontend.show_status(
                    StatusKind::Success,
                    &format!("Todo deleted from {}", family),
                );
                self.list(family).await
            }
            Err(preferred_error) => {
                let fallback = family.fallback();
                tracing::warn!(
                    %op_id,
                    preferred = %family,
                    error = %preferred_error,
                    "delete failed, trying {}",
                    fallback
                );
                match self.api.remove_todo(fallback, id).await {
                    Ok(()) => {
                        self.frontend.show_status(
                            StatusKind::Success,
                            &format!("Todo deleted via {} ({} unavailable)", fallback, family),
                        );
                        self.list(fallback).await
                    }
                    Err(fallback_error) => {
                        tracing::error!(
                            %op_id,
                            preferred = %family,
                            error = %fallback_error,
                            "delete failed on both families"
                        );
                        self.frontend.show_status(
                            StatusKind::Error,
                            "Could not delete the todo from either endpoint",
                        );
                        Err(ClientError::BothFamilies {
                            preferred: family,
                            fallback,
                            preferred_error,
                            fallback_error,
                        })
                    }
                }
            }
        }
    }
}
