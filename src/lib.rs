//! Local static asset server.
//!
//! Serves files from the launch directory over HTTP/1.x with two fixed
//! policies: `.js` assets always go out as `application/javascript`, and
//! every response disables client-side caching.

pub mod config;
pub mod handler;
pub mod http;
pub mod logger;
pub mod server;
