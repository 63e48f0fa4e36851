//! Interactive session.
//!
//! # Responsibilities
//! - Load the preferred family's list on startup
//! - Drive list/add/delete from a prompt loop
//! - Track which family served the current render, so deletes go to the
//!   deployment that owns the displayed ids

use std::io::{self, Write};
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};

use crate::client::failover::FailoverClient;
use crate::client::family::EndpointFamily;
use crate::client::types::TodoId;
use crate::ui::status::StatusBoard;
use crate::ui::StatusKind;

pub struct Session {
    client: FailoverClient,
    status: Arc<StatusBoard>,
    /// Family tried first for list and add.
    preferred: EndpointFamily,
    /// Family that served the current render; deletes go here.
    view: EndpointFamily,
}

impl Session {
    pub fn new(
        client: FailoverClient,
        status: Arc<StatusBoard>,
        preferred: EndpointFamily,
    ) -> Self {
        Self {
            client,
            status,
            preferred,
            view: preferred,
        }
    }

    /// Run the prompt loop until `quit` or end of input.
    pub async fn run(&mut self) -> io::Result<()> {
        // Initial load, the terminal equivalent of opening the page.
        if let Ok(listing) = self.client.list(self.preferred).await {
            self.view = listing.family;
        }

        let stdin = BufReader::new(tokio::io::stdin());
        let mut lines = stdin.lines();

        loop {
            self.print_prompt()?;
            let Some(line) = lines.next_line().await? else {
                break;
            };
            let input = line.trim();
            let (command, rest) = match input.split_once(char::is_whitespace) {
                Some((command, rest)) => (command, rest.trim()),
                None => (input, ""),
            };

            match command {
                "" => {}
                "quit" | "exit" => break,
                "help" => print_help(),
                "list" => {
                    if let Ok(listing) = self.client.list(self.preferred).await {
                        self.view = listing.family;
                    }
                }
                "family" => match rest.parse::<EndpointFamily>() {
                    Ok(family) => {
                        self.preferred = family;
                        println!("preferring {} endpoints", family);
                    }
                    Err(e) => println!("{}", e),
                },
                "add" => {
                    if let Ok(listing) = self.client.add(self.preferred, rest).await {
                        self.view = listing.family;
                    }
                }
                "delete" | "del" => {
                    if rest.is_empty() {
                        println!("usage: delete <id>");
                        continue;
                    }
                    let id = TodoId::from(rest);
                    if let Ok(listing) = self.client.delete(self.view, &id).await {
                        self.view = listing.family;
                    }
                }
                other => println!("unknown command '{}', try 'help'", other),
            }
        }

        Ok(())
    }

    /// Re-show a still-visible status line above the prompt, the terminal
    /// stand-in for the page's transient message area.
    fn print_prompt(&self) -> io::Result<()> {
        if let Some(line) = self.status.current() {
            let marker = match line.kind {
                StatusKind::Success => "*",
                StatusKind::Error => "!",
            };
            println!("{} {}", marker, line.text);
        }
        print!("todo ({})> ", self.preferred);
        io::stdout().flush()
    }
}

fn print_help() {
    println!("commands:");
    println!("  list                 fetch and show the todo list");
    println!("  add <task>           create a task");
    println!("  delete <id>          delete a task from the displayed list");
    println!("  family <primary|secondary>   switch the preferred endpoint family");
    println!("  help                 show this message");
    println!("  quit                 leave");
}
