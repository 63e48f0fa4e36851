//! User-facing surface of the client.
//!
//! # Data Flow
//! ```text
//! FailoverClient
//!     → frontend.rs (render / status / confirm seam)
//!     → terminal.rs (stdout rendering, stdin confirmation)
//!     → status.rs (transient message, cleared after a delay)
//! ```
//!
//! # Design Decisions
//! - The client core only sees the Frontend trait; tests swap in a
//!   recording implementation
//! - Every render replaces the whole displayed list
//! - Status messages are transient; the board owns the clear timer

pub mod frontend;
pub mod status;
pub mod terminal;

pub use frontend::{Frontend, StatusKind};
