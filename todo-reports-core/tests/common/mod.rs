//! Mock todos/users server for integration tests
//!
//! Serves `GET /todos` and `GET /users` from canned bodies with
//! configurable status codes, so the real reqwest adapter can be exercised
//! without network access.

#![allow(dead_code)]

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// What the mock answers on each endpoint
#[derive(Debug, Clone)]
pub struct MockConfig {
    pub todos_status: u16,
    pub todos_body: String,
    pub users_status: u16,
    pub users_body: String,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            todos_status: 200,
            todos_body: sample_todos().to_string(),
            users_status: 200,
            users_body: sample_users().to_string(),
        }
    }
}

/// Mock server running on a background thread
pub struct MockServer {
    port: u16,
    running: Arc<AtomicBool>,
    requests: Arc<AtomicUsize>,
    thread_handle: Option<thread::JoinHandle<()>>,
}

impl MockServer {
    /// Start on a random free port
    pub fn start(config: MockConfig) -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0")?;
        let port = listener.local_addr()?.port();
        listener.set_nonblocking(true)?;

        let running = Arc::new(AtomicBool::new(true));
        let requests = Arc::new(AtomicUsize::new(0));
        let running_clone = running.clone();
        let requests_clone = requests.clone();

        let thread_handle = thread::spawn(move || {
            while running_clone.load(Ordering::SeqCst) {
                match listener.accept() {
                    Ok((stream, _)) => {
                        requests_clone.fetch_add(1, Ordering::SeqCst);
                        handle_connection(stream, &config);
                    }
                    Err(ref e) if e.kind() == std::io::ErrorKind::WouldBlock => {
                        thread::sleep(Duration::from_millis(5));
                    }
                    Err(_) => break,
                }
            }
        });

        Ok(Self {
            port,
            running,
            requests,
            thread_handle: Some(thread_handle),
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://127.0.0.1:{}{}", self.port, path)
    }

    /// Number of connections accepted so far
    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    pub fn stop(&mut self) {
        self.running.store(false, Ordering::SeqCst);
        if let Some(handle) = self.thread_handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for MockServer {
    fn drop(&mut self) {
        self.stop();
    }
}

fn handle_connection(mut stream: TcpStream, config: &MockConfig) {
    let _ = stream.set_nonblocking(false);
    let mut buffer = [0; 4096];

    if let Ok(n) = stream.read(&mut buffer) {
        let request = String::from_utf8_lossy(&buffer[..n]);
        let first_line = request.lines().next().unwrap_or("");
        let path = first_line.split_whitespace().nth(1).unwrap_or("");

        match path {
            "/todos" => send_response(&mut stream, config.todos_status, &config.todos_body),
            "/users" => send_response(&mut stream, config.users_status, &config.users_body),
            _ => send_response(&mut stream, 404, r#"{"error": "not found"}"#),
        }
    }
}

fn send_response(stream: &mut TcpStream, status: u16, body: &str) {
    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        reason(status),
        body.len(),
        body
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.flush();
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "Status",
    }
}

/// Two complete users and one without a company
pub fn sample_users() -> &'static str {
    r#"[
        {"id": 1, "name": "Ann Lee", "username": "ann", "email": "ann@x.com",
         "company": {"name": "Acme", "catchPhrase": "Multi-layered"}},
        {"id": 2, "name": "Bob Stone", "username": "bob", "email": "bob@x.com",
         "company": {"name": "Globex"}},
        {"id": 3, "name": "Eve", "username": "eve", "email": "eve@x.com"}
    ]"#
}

/// Tasks for ann (mixed), bob (current only), eve (skipped) and nobody
pub fn sample_todos() -> &'static str {
    r#"[
        {"userId": 1, "id": 1, "title": "Buy milk", "completed": false},
        {"userId": 1, "id": 2, "title": "Ship release", "completed": true},
        {"userId": 2, "id": 3, "title": "Review the quarterly planning document before Friday", "completed": false},
        {"userId": 3, "id": 4, "title": "Orphaned by validation", "completed": true},
        {"userId": 9, "id": 5, "title": "No such user", "completed": true}
    ]"#
}
