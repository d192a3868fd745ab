//! Static file serving module
//!
//! Resolves request paths to files under the serving root, loads them,
//! and builds the response with MIME inference applied.

use crate::http::{self, mime, mime::MimeGuess};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::Path;
use tokio::fs;

/// File served for directory requests. No directory listing is ever
/// produced: a directory without an index file is a 404.
const INDEX_FILE: &str = "index.html";

/// Outcome of resolving a request path against the root.
enum Resolved {
    File { data: Bytes, guess: MimeGuess },
    Redirect(String),
    NotFound,
}

/// Serve a request path from the root directory.
pub async fn serve_path(root: &Path, request_path: &str, is_head: bool) -> Response<Full<Bytes>> {
    match resolve_and_load(root, request_path).await {
        Resolved::File { data, guess } => http::build_file_response(data, &guess, is_head),
        Resolved::Redirect(target) => http::build_redirect_response(&target),
        Resolved::NotFound => http::build_404_response(),
    }
}

/// Resolve a request path to a file under `root` and read it.
///
/// `root` must already be canonical. The path is percent-decoded, then
/// `..` segments are stripped before joining; the canonical
/// containment check is the gate that also refuses symlink escapes.
async fn resolve_and_load(root: &Path, request_path: &str) -> Resolved {
    let Some(decoded) = percent_decode(request_path) else {
        return Resolved::NotFound;
    };
    let clean = decoded.trim_start_matches('/').replace("..", "");
    let mut file_path = root.join(&clean);

    // Directory request: redirect to the slashed form, then look for
    // the index file.
    if file_path.is_dir() {
        if !request_path.ends_with('/') {
            return Resolved::Redirect(format!("{request_path}/"));
        }
        file_path = file_path.join(INDEX_FILE);
    }

    // File not found is common (404), no need to log
    let Ok(canonical) = file_path.canonicalize() else {
        return Resolved::NotFound;
    };
    if !canonical.starts_with(root) {
        logger::log_warning(&format!(
            "Path escape blocked: {} -> {}",
            request_path,
            canonical.display()
        ));
        return Resolved::NotFound;
    }

    match fs::read(&canonical).await {
        Ok(content) => Resolved::File {
            data: Bytes::from(content),
            guess: mime::guess_type(&file_path),
        },
        Err(e) => {
            logger::log_error(&format!(
                "Failed to read file '{}': {}",
                canonical.display(),
                e
            ));
            Resolved::NotFound
        }
    }
}

/// Percent-decode a request path so encoded filenames (spaces,
/// non-ASCII) resolve to files on disk.
///
/// Returns `None` for truncated or non-hex escapes, decoded NUL bytes,
/// or bytes that do not form valid UTF-8; the caller answers 404.
/// `+` is left as-is, it is only significant in query strings.
fn percent_decode(path: &str) -> Option<String> {
    let bytes = path.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let hex = std::str::from_utf8(bytes.get(i + 1..i + 3)?).ok()?;
            let byte = u8::from_str_radix(hex, 16).ok()?;
            if byte == 0 {
                return None;
            }
            out.push(byte);
            i += 3;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }
    String::from_utf8(out).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use std::path::PathBuf;

    fn temp_root(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("staticserve-{name}-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir.canonicalize().unwrap()
    }

    async fn body_bytes(resp: Response<Full<Bytes>>) -> Bytes {
        resp.into_body().collect().await.unwrap().to_bytes()
    }

    fn cache_control(resp: &Response<Full<Bytes>>) -> &str {
        resp.headers()
            .get("cache-control")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
    }

    #[tokio::test]
    async fn test_existing_file_byte_identical() {
        let root = temp_root("bytes");
        let content = b"<html><body>hello</body></html>";
        std::fs::write(root.join("hello.html"), content).unwrap();

        let resp = serve_path(&root, "/hello.html", false).await;
        assert_eq!(resp.status(), 200);
        assert_eq!(
            resp.headers().get("content-type").unwrap(),
            "text/html; charset=utf-8"
        );
        assert_eq!(body_bytes(resp).await.as_ref(), content);
    }

    #[tokio::test]
    async fn test_app_js_scenario() {
        let root = temp_root("appjs");
        let content = b"console.log('booked');";
        std::fs::write(root.join("app.js"), content).unwrap();

        let resp = serve_path(&root, "/app.js", false).await;
        assert_eq!(resp.status(), 200);
        assert_eq!(
            resp.headers().get("content-type").unwrap(),
            "application/javascript"
        );
        assert_eq!(cache_control(&resp), "no-store, no-cache, must-revalidate");
        assert_eq!(body_bytes(resp).await.as_ref(), content);
    }

    #[tokio::test]
    async fn test_missing_path_404_keeps_cache_header() {
        let root = temp_root("missing");

        let resp = serve_path(&root, "/missing.html", false).await;
        assert_eq!(resp.status(), 404);
        assert_eq!(cache_control(&resp), "no-store, no-cache, must-revalidate");
    }

    #[tokio::test]
    async fn test_root_serves_index() {
        let root = temp_root("index");
        std::fs::write(root.join("index.html"), b"login").unwrap();

        let resp = serve_path(&root, "/", false).await;
        assert_eq!(resp.status(), 200);
        assert_eq!(body_bytes(resp).await.as_ref(), b"login");
    }

    #[tokio::test]
    async fn test_directory_without_slash_redirects() {
        let root = temp_root("redirect");
        std::fs::create_dir(root.join("admin")).unwrap();
        std::fs::write(root.join("admin/index.html"), b"admin").unwrap();

        let resp = serve_path(&root, "/admin", false).await;
        assert_eq!(resp.status(), 301);
        assert_eq!(resp.headers().get("location").unwrap(), "/admin/");
        assert_eq!(cache_control(&resp), "no-store, no-cache, must-revalidate");

        let resp = serve_path(&root, "/admin/", false).await;
        assert_eq!(resp.status(), 200);
        assert_eq!(body_bytes(resp).await.as_ref(), b"admin");
    }

    #[tokio::test]
    async fn test_directory_without_index_404() {
        let root = temp_root("noindex");
        std::fs::create_dir(root.join("empty")).unwrap();

        let resp = serve_path(&root, "/empty/", false).await;
        assert_eq!(resp.status(), 404);
    }

    #[tokio::test]
    async fn test_percent_encoded_filename() {
        let root = temp_root("encoded");
        let content = b"<html>space</html>";
        std::fs::write(root.join("hello world.html"), content).unwrap();

        let resp = serve_path(&root, "/hello%20world.html", false).await;
        assert_eq!(resp.status(), 200);
        assert_eq!(body_bytes(resp).await.as_ref(), content);
    }

    #[tokio::test]
    async fn test_plus_sign_is_literal() {
        let root = temp_root("plus");
        std::fs::write(root.join("a+b.txt"), b"plus").unwrap();

        let resp = serve_path(&root, "/a+b.txt", false).await;
        assert_eq!(resp.status(), 200);
        assert_eq!(body_bytes(resp).await.as_ref(), b"plus");
    }

    #[tokio::test]
    async fn test_bad_escapes_404() {
        let root = temp_root("badescape");
        std::fs::write(root.join("ok.txt"), b"ok").unwrap();

        // Truncated, non-hex, and NUL escapes all answer 404
        for path in ["/ok.txt%", "/ok%zz.txt", "/ok%00.txt"] {
            let resp = serve_path(&root, path, false).await;
            assert_eq!(resp.status(), 404, "path {path} should not resolve");
        }
    }

    #[tokio::test]
    async fn test_encoded_traversal_refused() {
        let parent = temp_root("enc-traversal");
        let root = parent.join("webroot");
        std::fs::create_dir_all(&root).unwrap();
        let root = root.canonicalize().unwrap();
        std::fs::write(parent.join("secret.txt"), b"outside").unwrap();

        // %2e%2e decodes to ".." and is stripped like the literal form
        let resp = serve_path(&root, "/%2e%2e/secret.txt", false).await;
        assert_eq!(resp.status(), 404);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_symlink_escape_refused() {
        let parent = temp_root("symlink-escape");
        let root = parent.join("webroot");
        std::fs::create_dir_all(&root).unwrap();
        let root = root.canonicalize().unwrap();
        std::fs::write(parent.join("secret.txt"), b"outside").unwrap();
        std::os::unix::fs::symlink(parent.join("secret.txt"), root.join("link.txt")).unwrap();

        let resp = serve_path(&root, "/link.txt", false).await;
        assert_eq!(resp.status(), 404);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_symlink_inside_root_followed() {
        let root = temp_root("symlink-inside");
        std::fs::write(root.join("real.txt"), b"inside").unwrap();
        std::os::unix::fs::symlink(root.join("real.txt"), root.join("alias.txt")).unwrap();

        let resp = serve_path(&root, "/alias.txt", false).await;
        assert_eq!(resp.status(), 200);
        assert_eq!(body_bytes(resp).await.as_ref(), b"inside");
    }

    #[tokio::test]
    async fn test_traversal_refused() {
        let parent = temp_root("traversal");
        let root = parent.join("webroot");
        std::fs::create_dir_all(&root).unwrap();
        let root = root.canonicalize().unwrap();
        std::fs::write(parent.join("secret.txt"), b"outside").unwrap();

        let resp = serve_path(&root, "/../secret.txt", false).await;
        assert_eq!(resp.status(), 404);
    }

    #[tokio::test]
    async fn test_head_empty_body_full_headers() {
        let root = temp_root("head");
        std::fs::write(root.join("app.js"), b"export {};").unwrap();

        let resp = serve_path(&root, "/app.js", true).await;
        assert_eq!(resp.status(), 200);
        assert_eq!(
            resp.headers().get("content-type").unwrap(),
            "application/javascript"
        );
        assert_eq!(resp.headers().get("content-length").unwrap(), "10");
        assert!(body_bytes(resp).await.is_empty());
    }
}
