//! Logger module
//!
//! Provides logging utilities for the server:
//! - Startup banner with the listening URL and entry-point hints
//! - Per-request access logging (Common Log Format)
//! - Error and warning logging

mod format;

pub use format::AccessLogEntry;

use std::net::SocketAddr;
use std::path::Path;

/// Suggested entry-point pages printed at startup. Cosmetic only.
const ENTRY_POINT_HINTS: [(&str, &str); 5] = [
    ("index.html", "login page"),
    ("home.html", "member home page"),
    ("signup.html", "signup page"),
    ("booking.html", "booking page"),
    ("test-booking.html", "diagnostics"),
];

pub fn log_server_start(addr: &SocketAddr, root: &Path) {
    println!("======================================");
    println!("Static asset server started");
    println!("Serving from: {}", root.display());
    println!("Server running at http://localhost:{}/", addr.port());
    for (page, label) in ENTRY_POINT_HINTS {
        println!("Open http://localhost:{}/{page} for {label}", addr.port());
    }
    println!("======================================\n");
}

/// Log formatted access log entry
pub fn log_access(entry: &AccessLogEntry) {
    println!("{}", entry.format_common());
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[ERROR] Failed to serve connection: {err:?}");
}

pub fn log_error(message: &str) {
    eprintln!("[ERROR] {message}");
}

pub fn log_warning(message: &str) {
    eprintln!("[WARN] {message}");
}

pub fn log_shutdown(signal: &str) {
    println!("\n[{signal}] Shutting down");
}
