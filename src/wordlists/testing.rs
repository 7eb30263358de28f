//! Local HTTP endpoints for download tests

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

/// A word list server on 127.0.0.1 that answers every request the same way
pub struct WordServer {
    pub url: String,
    requests: Arc<AtomicUsize>,
}

impl WordServer {
    /// Serve `body` with `200 OK`
    pub fn ok(body: &'static str) -> Self {
        Self::start("200 OK", body)
    }

    /// Answer every request with `404 Not Found`
    pub fn not_found() -> Self {
        Self::start("404 Not Found", "")
    }

    fn start(status: &'static str, body: &'static str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/words.txt", listener.local_addr().unwrap());
        let requests = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&requests);
        thread::spawn(move || {
            for stream in listener.incoming().flatten() {
                counter.fetch_add(1, Ordering::SeqCst);
                respond(stream, status, body);
            }
        });

        Self { url, requests }
    }

    /// Number of connections accepted so far
    pub fn requests(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

fn respond(mut stream: TcpStream, status: &str, body: &str) {
    let mut request = Vec::new();
    let mut buf = [0; 1024];
    while !request.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut buf) {
            Ok(0) | Err(_) => break,
            Ok(n) => request.extend_from_slice(&buf[..n]),
        }
    }

    let response = format!(
        "HTTP/1.1 {status}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    let _ = stream.write_all(response.as_bytes());
}

/// URL on a local port with nothing listening
pub fn closed_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/words.txt")
}
