//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via tracing; the fmt layer writes to stdout
//! - Terminal failures reach the user as status messages, so logs carry
//!   the diagnostics (family, status, operation correlation id) only
//! - No metrics endpoint; this is a client-side process

pub mod logging;
