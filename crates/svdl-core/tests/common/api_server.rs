//! Minimal HTTP/1.1 server serving one canned response for integration tests.
//!
//! Stands in for the metadata gateway (and for a CDN in download tests).
//! Every request gets the same response; request heads are recorded so tests
//! can assert on the query string and headers the client sent.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread;

/// The response every request receives.
#[derive(Debug, Clone)]
pub struct CannedResponse {
    pub status: u16,
    pub content_type: &'static str,
    pub body: Vec<u8>,
}

impl CannedResponse {
    /// A JSON response, as the metadata gateway would send.
    pub fn json(status: u16, body: &str) -> Self {
        CannedResponse {
            status,
            content_type: "application/json",
            body: body.as_bytes().to_vec(),
        }
    }

    /// A binary response, as a CDN would send for a video GET.
    pub fn bytes(status: u16, body: Vec<u8>) -> Self {
        CannedResponse {
            status,
            content_type: "application/octet-stream",
            body,
        }
    }
}

/// Request heads (request line plus headers) seen by the server, in order.
pub type RequestLog = Arc<Mutex<Vec<String>>>;

/// Starts a server in a background thread. Returns the base URL
/// (e.g. "http://127.0.0.1:12345/") and the request log. The server runs
/// until the process exits.
pub fn start(response: CannedResponse) -> (String, RequestLog) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let log: RequestLog = Arc::new(Mutex::new(Vec::new()));
    let response = Arc::new(response);
    let thread_log = Arc::clone(&log);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let response = Arc::clone(&response);
            let log = Arc::clone(&thread_log);
            thread::spawn(move || handle(stream, &response, &log));
        }
    });
    (format!("http://127.0.0.1:{}/", port), log)
}

fn handle(mut stream: std::net::TcpStream, response: &CannedResponse, log: &RequestLog) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 16 * 1024];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    if let Ok(request) = std::str::from_utf8(&buf[..n]) {
        log.lock().unwrap().push(request.to_string());
    }

    let head = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        response.status,
        reason(response.status),
        response.content_type,
        response.body.len()
    );
    let _ = stream.write_all(head.as_bytes());
    let _ = stream.write_all(&response.body);
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "Not Found",
        429 => "Too Many Requests",
        500 => "Internal Server Error",
        _ => "Status",
    }
}
