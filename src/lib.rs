//! Todo client for a pair of redundant backend deployments.
//!
//! Two functionally identical CRUD deployments (a "primary" and a
//! "secondary" family) sit behind equivalent REST surfaces. The client
//! prefers one family per operation and falls back to the other when the
//! first fails, keeping every rendered list tagged with the family that
//! actually served it.

// Core subsystems
pub mod client;
pub mod config;

// Interface
pub mod repl;
pub mod ui;

// Cross-cutting concerns
pub mod observability;

pub use client::failover::{FailoverClient, Listing};
pub use client::family::EndpointFamily;
pub use config::schema::ClientConfig;
