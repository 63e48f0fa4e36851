//! Terminal frontend.

use std::io::{self, Write};
use std::sync::Arc;

use crate::client::family::EndpointFamily;
use crate::client::types::{Todo, TodoId};
use crate::ui::status::StatusBoard;
use crate::ui::{Frontend, StatusKind};

/// Frontend that renders to stdout and confirms on stdin.
pub struct TerminalFrontend {
    status: Arc<StatusBoard>,
    /// Skip the interactive confirmation (one-shot `--yes` mode, or
    /// confirmations disabled in config).
    assume_yes: bool,
}

impl TerminalFrontend {
    pub fn new(status: Arc<StatusBoard>, assume_yes: bool) -> Self {
        Self { status, assume_yes }
    }
}

impl Frontend for TerminalFrontend {
    fn render(&self, todos: &[Todo], source: EndpointFamily) {
        println!();
        println!("todos ({})", source);
        if todos.is_empty() {
            println!("  no todos yet, add one to get started");
            return;
        }
        for todo in todos {
            println!("  [{}] {}", todo.id, todo.task);
        }
    }

    fn show_status(&self, kind: StatusKind, message: &str) {
        self.status.set(kind, message);
        match kind {
            StatusKind::Success => println!("{}", message),
            StatusKind::Error => eprintln!("{}", message),
        }
    }

    fn clear_input(&self) {
        // The prompt line is consumed on submit; nothing buffered to clear.
    }

    fn confirm_delete(&self, family: EndpointFamily, id: &TodoId) -> bool {
        if self.assume_yes {
            return true;
        }
        print!("Delete todo {} from {}? [y/N] ", id, family);
        if io::stdout().flush().is_err() {
            return false;
        }
        let mut line = String::new();
        if io::stdin().read_line(&mut line).is_err() {
            return false;
        }
        matches!(line.trim(), "y" | "Y" | "yes")
    }
}
