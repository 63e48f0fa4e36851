//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the
//! client. All types derive Serde traits for deserialization from config
//! files.

use serde::{Deserialize, Serialize};

use crate::client::family::EndpointFamily;

/// Root configuration for the todo client.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ClientConfig {
    /// Backend endpoint families and their route tables.
    pub endpoints: EndpointsConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Interface behavior (status messages, confirmations).
    pub ui: UiConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Endpoint configuration for the two families.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct EndpointsConfig {
    /// Base URL shared by both families (e.g. an API gateway stage).
    pub base_url: String,

    /// Family tried first when the invocation does not pick one.
    pub preferred: EndpointFamily,

    /// Routes served by the primary deployment.
    pub primary: FamilyConfig,

    /// Routes served by the secondary deployment.
    pub secondary: FamilyConfig,
}

impl Default for EndpointsConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            preferred: EndpointFamily::Primary,
            primary: FamilyConfig {
                base_url: None,
                list: "/todos".to_string(),
                add: "/add-todo".to_string(),
                delete: "/delete-todo".to_string(),
            },
            secondary: FamilyConfig {
                base_url: None,
                list: "/todos-a".to_string(),
                add: "/add-todo-a".to_string(),
                delete: "/delete-todo-a".to_string(),
            },
        }
    }
}

/// Route table for one endpoint family.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FamilyConfig {
    /// Overrides the shared base URL when this deployment lives on its
    /// own host.
    #[serde(default)]
    pub base_url: Option<String>,

    /// GET path returning the todo list.
    pub list: String,

    /// POST path creating a todo.
    pub add: String,

    /// DELETE path prefix; the todo id is appended as a path segment.
    pub delete: String,
}

/// Timeout configuration for backend calls.
///
/// A value of 0 leaves the transport default in place: no explicit
/// deadline, a hung endpoint stays pending.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Connection establishment timeout in seconds.
    pub connect_secs: u64,

    /// Total request timeout in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            connect_secs: 0,
            request_secs: 0,
        }
    }
}

/// Interface configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UiConfig {
    /// Seconds a transient status message stays visible.
    pub status_clear_secs: u64,

    /// Ask before deleting.
    pub confirm_delete: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            status_clear_secs: 3,
            confirm_delete: true,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
