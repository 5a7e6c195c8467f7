//! Minimal HTTP/1.1 server that serves fixed routes for integration tests.
//!
//! Each route has a status line, optional `Content-Type` and `Location`, a
//! body, and an optional stall before responding (to trigger client
//! timeouts). Unknown paths get 404. Every request's `User-Agent` is recorded.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Route {
    pub status: &'static str,
    pub content_type: Option<&'static str>,
    pub location: Option<&'static str>,
    pub body: Vec<u8>,
    pub stall: Option<Duration>,
}

impl Route {
    /// 200 with the given content type and body.
    pub fn ok(content_type: &'static str, body: &[u8]) -> Self {
        Self {
            status: "200 OK",
            content_type: Some(content_type),
            location: None,
            body: body.to_vec(),
            stall: None,
        }
    }

    pub fn status(status: &'static str) -> Self {
        Self {
            status,
            content_type: Some("text/plain"),
            location: None,
            body: status.as_bytes().to_vec(),
            stall: None,
        }
    }

    pub fn redirect(location: &'static str) -> Self {
        Self {
            status: "302 Found",
            content_type: None,
            location: Some(location),
            body: Vec::new(),
            stall: None,
        }
    }

    /// Sleeps for `delay` before answering like `self`.
    pub fn stalled(mut self, delay: Duration) -> Self {
        self.stall = Some(delay);
        self
    }
}

pub struct ImageServer {
    base: String,
    user_agents: Arc<Mutex<Vec<String>>>,
}

impl ImageServer {
    /// Full URL for `path` (without leading slash).
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    pub fn user_agents(&self) -> Vec<String> {
        self.user_agents.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.user_agents.lock().unwrap().len()
    }
}

/// Starts a server in a background thread serving `routes` (keyed by path,
/// e.g. "/cat.png"). The server runs until the process exits.
pub fn start(routes: Vec<(&'static str, Route)>) -> ImageServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let routes: Arc<HashMap<&'static str, Route>> = Arc::new(routes.into_iter().collect());
    let user_agents = Arc::new(Mutex::new(Vec::new()));
    let agents = Arc::clone(&user_agents);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let routes = Arc::clone(&routes);
            let agents = Arc::clone(&agents);
            thread::spawn(move || handle(stream, &routes, &agents));
        }
    });
    ImageServer {
        base: format!("http://127.0.0.1:{}/", port),
        user_agents,
    }
}

/// A loopback URL on a port nobody listens on (connection refused).
pub fn dead_url(path: &str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/{}", port, path)
}

fn handle(
    mut stream: TcpStream,
    routes: &HashMap<&'static str, Route>,
    agents: &Mutex<Vec<String>>,
) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    let (path, user_agent) = parse_request(request);
    agents
        .lock()
        .unwrap()
        .push(user_agent.unwrap_or_default().to_string());

    let not_found = Route::status("404 Not Found");
    let route = routes.get(path).unwrap_or(&not_found);
    if let Some(delay) = route.stall {
        thread::sleep(delay);
    }

    let mut head = format!(
        "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n",
        route.status,
        route.body.len()
    );
    if let Some(ct) = route.content_type {
        head.push_str(&format!("Content-Type: {}\r\n", ct));
    }
    if let Some(loc) = route.location {
        head.push_str(&format!("Location: {}\r\n", loc));
    }
    head.push_str("\r\n");
    let _ = stream.write_all(head.as_bytes());
    let _ = stream.write_all(&route.body);
}

/// Returns (path without query, optional User-Agent value).
fn parse_request(request: &str) -> (&str, Option<&str>) {
    let mut path = "";
    let mut user_agent = None;
    for (i, line) in request.lines().enumerate() {
        let line = line.trim();
        if i == 0 {
            let target = line.split_whitespace().nth(1).unwrap_or("/");
            path = target.split('?').next().unwrap_or(target);
            continue;
        }
        if line.is_empty() {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            if name.trim().eq_ignore_ascii_case("user-agent") {
                user_agent = Some(value.trim());
            }
        }
    }
    (path, user_agent)
}
