//! Request handler module
//!
//! Entry point for HTTP request processing: method validation, static
//! file dispatch, and access logging. Each request is stateless.

pub mod static_files;

use crate::config::ServerConfig;
use crate::http;
use crate::logger::{self, AccessLogEntry};
use http_body_util::Full;
use hyper::body::{Body as _, Bytes};
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;

/// Main entry point for HTTP request handling.
///
/// GET and HEAD are served from the root directory; every other method
/// gets 405. The cache override is attached by the response builders,
/// so it holds for every path out of here.
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    config: Arc<ServerConfig>,
    peer_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method();
    let path = req.uri().path();
    let http_version = format!("{:?}", req.version());
    let is_head = *method == Method::HEAD;

    let response = match method {
        &Method::GET | &Method::HEAD => {
            static_files::serve_path(&config.root, path, is_head).await
        }
        other => {
            logger::log_warning(&format!("Method not allowed: {other}"));
            http::build_405_response()
        }
    };

    let entry = AccessLogEntry::new(
        peer_addr.ip().to_string(),
        method.to_string(),
        path.to_string(),
        http_version,
        response.status().as_u16(),
        response.body().size_hint().exact().unwrap_or(0),
    );
    logger::log_access(&entry);

    Ok(response)
}
