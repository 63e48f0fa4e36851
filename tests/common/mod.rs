//! Shared utilities for integration testing.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use failover_todo::client::family::EndpointFamily;
use failover_todo::client::types::{Todo, TodoId};
use failover_todo::ui::{Frontend, StatusKind};

/// Start a mock backend that routes on method and path, so one listener
/// can serve both families' route tables.
pub async fn start_family_backend<F, Fut>(addr: SocketAddr, f: F)
where
    F: Fn(String, String) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = (u16, String)> + Send + 'static,
{
    let listener = TcpListener::bind(addr).await.unwrap();
    let f = Arc::new(f);

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let f = f.clone();
                    tokio::spawn(async move {
                        let Some((method, path)) = read_request(&mut socket).await else {
                            return;
                        };
                        let (status, body) = f(method, path).await;
                        let status_text = match status {
                            200 => "200 OK",
                            404 => "404 Not Found",
                            429 => "429 Too Many Requests",
                            500 => "500 Internal Server Error",
                            502 => "502 Bad Gateway",
                            503 => "503 Service Unavailable",
                            _ => "200 OK",
                        };

                        let response_str = format!(
                            "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            status_text,
                            body.len(),
                            body
                        );
                        let _ = socket.write_all(response_str.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });
}

/// Read one request off the socket, returning its method and path.
///
/// Drains the body (per Content-Length) so the client never sees a reset
/// while still writing.
async fn read_request(socket: &mut tokio::net::TcpStream) -> Option<(String, String)> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];

    let head_end = loop {
        match socket.read(&mut chunk).await {
            Ok(0) => return None,
            Ok(n) => {
                buf.extend_from_slice(&chunk[..n]);
                if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                    break pos;
                }
            }
            Err(_) => return None,
        }
    };

    let head = String::from_utf8_lossy(&buf[..head_end]).to_string();
    let mut request_line = head.lines().next()?.split_whitespace();
    let method = request_line.next()?.to_string();
    let path = request_line.next()?.to_string();

    let content_length = head
        .lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            if name.eq_ignore_ascii_case("content-length") {
                value.trim().parse::<usize>().ok()
            } else {
                None
            }
        })
        .unwrap_or(0);

    let expected = head_end + 4 + content_length;
    while buf.len() < expected {
        match socket.read(&mut chunk).await {
            Ok(0) => break,
            Ok(n) => buf.extend_from_slice(&chunk[..n]),
            Err(_) => break,
        }
    }

    Some((method, path))
}

/// What the client asked the frontend to do, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    Render {
        source: EndpointFamily,
        tasks: Vec<String>,
    },
    Status {
        kind: StatusKind,
        text: String,
    },
    ClearInput,
}

/// Frontend that records every call for assertions.
pub struct RecordingFrontend {
    events: Mutex<Vec<UiEvent>>,
    confirm: bool,
}

impl RecordingFrontend {
    pub fn new(confirm: bool) -> Arc<Self> {
        Arc::new(Self {
            events: Mutex::new(Vec::new()),
            confirm,
        })
    }

    pub fn events(&self) -> Vec<UiEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn renders(&self) -> Vec<(EndpointFamily, Vec<String>)> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                UiEvent::Render { source, tasks } => Some((source, tasks)),
                _ => None,
            })
            .collect()
    }

    pub fn statuses(&self) -> Vec<(StatusKind, String)> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                UiEvent::Status { kind, text } => Some((kind, text)),
                _ => None,
            })
            .collect()
    }

    pub fn input_clears(&self) -> usize {
        self.events()
            .into_iter()
            .filter(|e| matches!(e, UiEvent::ClearInput))
            .count()
    }
}

impl Frontend for RecordingFrontend {
    fn render(&self, todos: &[Todo], source: EndpointFamily) {
        self.events.lock().unwrap().push(UiEvent::Render {
            source,
            tasks: todos.iter().map(|t| t.task.clone()).collect(),
        });
    }

    fn show_status(&self, kind: StatusKind, message: &str) {
        self.events.lock().unwrap().push(UiEvent::Status {
            kind,
            text: message.to_string(),
        });
    }

    fn clear_input(&self) {
        self.events.lock().unwrap().push(UiEvent::ClearInput);
    }

    fn confirm_delete(&self, _family: EndpointFamily, _id: &TodoId) -> bool {
        self.confirm
    }
}
