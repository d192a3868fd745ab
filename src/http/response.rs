//! HTTP response building module
//!
//! Every builder here stamps the fixed no-cache `Cache-Control` value
//! before the response is finalized, success and error alike.

use crate::http::mime::MimeGuess;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

/// Fixed Cache-Control value attached to every response.
pub const CACHE_CONTROL_VALUE: &str = "no-store, no-cache, must-revalidate";

/// Build 200 OK response for a file's bytes.
///
/// HEAD requests get the same headers (including the real
/// `Content-Length`) with an empty body. The encoding a lookup may
/// report is not surfaced as a header: compressed files go out as
/// plain downloads of their stored bytes.
pub fn build_file_response(data: Bytes, guess: &MimeGuess, is_head: bool) -> Response<Full<Bytes>> {
    let content_length = data.len();
    let body = if is_head { Bytes::new() } else { data };

    Response::builder()
        .status(200)
        .header("Cache-Control", CACHE_CONTROL_VALUE)
        .header("Content-Type", guess.content_type)
        .header("Content-Length", content_length)
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error("200", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 404 Not Found response
pub fn build_404_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(404)
        .header("Cache-Control", CACHE_CONTROL_VALUE)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from("404 Not Found")))
        .unwrap_or_else(|e| {
            log_build_error("404", &e);
            Response::new(Full::new(Bytes::from("404 Not Found")))
        })
}

/// Build 405 Method Not Allowed response
pub fn build_405_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(405)
        .header("Cache-Control", CACHE_CONTROL_VALUE)
        .header("Content-Type", "text/plain")
        .header("Allow", "GET, HEAD")
        .body(Full::new(Bytes::from("405 Method Not Allowed")))
        .unwrap_or_else(|e| {
            log_build_error("405", &e);
            Response::new(Full::new(Bytes::from("405 Method Not Allowed")))
        })
}

/// Build 301 redirect response (directory requests missing the
/// trailing slash).
pub fn build_redirect_response(target: &str) -> Response<Full<Bytes>> {
    Response::builder()
        .status(301)
        .header("Cache-Control", CACHE_CONTROL_VALUE)
        .header("Location", target)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from("Moved Permanently")))
        .unwrap_or_else(|e| {
            log_build_error("301", &e);
            Response::new(Full::new(Bytes::from("Moved Permanently")))
        })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}
