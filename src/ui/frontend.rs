//! Rendering surface consumed by the failover client.

use crate::client::family::EndpointFamily;
use crate::client::types::{Todo, TodoId};

/// Severity of a transient status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

/// What the client core needs from whatever is displaying the list.
///
/// One render call replaces the whole displayed list; status messages are
/// transient and independent of the list contents.
pub trait Frontend: Send + Sync {
    /// Replace the displayed list with `todos`, served by `source`.
    ///
    /// The source tag matters: deletes against the displayed ids must be
    /// routed to this family.
    fn render(&self, todos: &[Todo], source: EndpointFamily);

    /// Show a transient status message.
    fn show_status(&self, kind: StatusKind, message: &str);

    /// Clear the pending-task input after a successful add.
    fn clear_input(&self);

    /// Ask the user to confirm a delete. Returning false aborts the
    /// operation silently.
    fn confirm_delete(&self, family: EndpointFamily, id: &TodoId) -> bool;
}
