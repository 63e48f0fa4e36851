//! Endpoint-failover client subsystem.
//!
//! # Data Flow
//! ```text
//! operation (list / add / delete)
//!     → failover.rs (pick preferred family, fall back on failure)
//!     → endpoints.rs (per-family URLs, actual HTTP calls)
//!     → types.rs (wire types)
//!     → Frontend (render tagged with the family that answered)
//! ```
//!
//! # Design Decisions
//! - One parameterized implementation per verb instead of one copy per
//!   family
//! - List and delete fall back to the other family; add does not
//! - Renders carry the serving family so deletes target the right
//!   id namespace

pub mod endpoints;
pub mod error;
pub mod failover;
pub mod family;
pub mod types;

pub use endpoints::EndpointApi;
pub use error::{ApiError, ClientError};
pub use failover::{FailoverClient, Listing};
pub use family::EndpointFamily;
pub use types::{Todo, TodoId};
