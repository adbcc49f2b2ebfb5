//! In-process mock of the Help.Me backend built on `tiny_http`.
//!
//! The server answers a fixed script of replies, one per request, on a
//! background thread and records what it received.

#![allow(dead_code)]

use std::thread::JoinHandle;
use std::time::Duration;

use helpme_auth::AuthClient;

/// One scripted answer.
pub enum Reply {
    /// Respond with this status and body.
    Body(u16, String),
    /// Hold the request open for this long, then drop it.
    Hang(Duration),
}

impl Reply {
    pub fn ok(body: impl Into<String>) -> Self {
        Self::Body(200, body.into())
    }

    pub fn json(value: &serde_json::Value) -> Self {
        Self::Body(200, value.to_string())
    }
}

#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub url: String,
    pub body: serde_json::Value,
}

pub struct MockServer {
    pub base_url: String,
    handle: JoinHandle<Vec<Recorded>>,
}

impl MockServer {
    /// Start a server that answers `replies` in order, then stops.
    pub fn start(replies: Vec<Reply>) -> Self {
        let server = tiny_http::Server::http("127.0.0.1:0").expect("bind mock server");
        let port = server.server_addr().to_ip().expect("ip address").port();

        let handle = std::thread::spawn(move || {
            let mut seen = Vec::new();
            for reply in replies {
                let mut request = match server.recv_timeout(Duration::from_secs(10)) {
                    Ok(Some(request)) => request,
                    _ => break,
                };

                let mut raw = String::new();
                let _ = request.as_reader().read_to_string(&mut raw);
                seen.push(Recorded {
                    method: request.method().to_string(),
                    url: request.url().to_string(),
                    body: serde_json::from_str(&raw).unwrap_or(serde_json::Value::Null),
                });

                match reply {
                    Reply::Body(status, text) => {
                        let header = tiny_http::Header::from_bytes(
                            &b"Content-Type"[..],
                            &b"application/json"[..],
                        )
                        .expect("header");
                        let response = tiny_http::Response::from_string(text)
                            .with_status_code(status)
                            .with_header(header);
                        let _ = request.respond(response);
                    }
                    Reply::Hang(duration) => {
                        std::thread::sleep(duration);
                        drop(request);
                    }
                }
            }
            seen
        });

        Self {
            base_url: format!("http://127.0.0.1:{port}"),
            handle,
        }
    }

    pub fn client(&self) -> AuthClient {
        self.client_with_timeout(Duration::from_secs(5))
    }

    /// Client talking to this server directly, ignoring any proxy settings
    /// in the environment.
    pub fn client_with_timeout(&self, timeout: Duration) -> AuthClient {
        let http = reqwest::Client::builder()
            .no_proxy()
            .build()
            .expect("http client");
        AuthClient::with_http(http, &self.base_url, timeout)
    }

    /// Wait for the script to finish and return the recorded requests.
    pub fn finish(self) -> Vec<Recorded> {
        self.handle.join().expect("mock server thread")
    }
}

/// The double-encoded body the real `/login` route sends.
pub fn double_encoded(value: &serde_json::Value) -> String {
    serde_json::Value::String(value.to_string()).to_string()
}
