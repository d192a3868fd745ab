//! Access log format module
//!
//! Formats one line per request in Common Log Format (CLF).

use chrono::Local;

/// Access log entry containing request/response information
#[derive(Debug, Clone)]
pub struct AccessLogEntry {
    /// Client IP address
    pub remote_addr: String,
    /// Request timestamp
    pub time: chrono::DateTime<Local>,
    /// HTTP method (GET, HEAD, ...)
    pub method: String,
    /// Request URI path
    pub path: String,
    /// HTTP version token, e.g. "HTTP/1.1"
    pub http_version: String,
    /// Response status code
    pub status: u16,
    /// Response body size in bytes
    pub body_bytes: u64,
}

impl AccessLogEntry {
    /// Create a new access log entry with current timestamp
    pub fn new(
        remote_addr: String,
        method: String,
        path: String,
        http_version: String,
        status: u16,
        body_bytes: u64,
    ) -> Self {
        Self {
            remote_addr,
            time: Local::now(),
            method,
            path,
            http_version,
            status,
            body_bytes,
        }
    }

    /// Format as a Common Log Format line:
    /// `127.0.0.1 - - [10/Oct/2000:13:55:36 -0700] "GET /app.js HTTP/1.1" 200 2326`
    pub fn format_common(&self) -> String {
        format!(
            "{} - - [{}] \"{} {} {}\" {} {}",
            self.remote_addr,
            self.time.format("%d/%b/%Y:%H:%M:%S %z"),
            self.method,
            self.path,
            self.http_version,
            self.status,
            self.body_bytes
        )
    }
}
