//! MIME type detection module
//!
//! Maps file paths to a fixed `(content type, optional encoding)` pair,
//! with a hard override forcing `application/javascript` for `.js`
//! assets after the general lookup runs.

use std::path::Path;

/// Content type forced for every `.js` path, regardless of what the
/// general lookup would say.
pub const JAVASCRIPT: &str = "application/javascript";

/// Result of a MIME lookup. The shape is fixed: a content type plus an
/// optional transfer encoding for compressed suffixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MimeGuess {
    pub content_type: &'static str,
    pub encoding: Option<&'static str>,
}

/// Guess the MIME type for a path.
///
/// A `.gz` suffix is reported as `gzip` encoding with the inner
/// extension's content type. Any path ending in `.js` yields exactly
/// [`JAVASCRIPT`], unconditionally.
///
/// # Examples
/// ```
/// use staticserve::http::mime::guess_type;
/// assert_eq!(guess_type("app.js".as_ref()).content_type, "application/javascript");
/// assert_eq!(guess_type("index.html".as_ref()).content_type, "text/html; charset=utf-8");
/// assert_eq!(guess_type("bundle.js.gz".as_ref()).encoding, Some("gzip"));
/// ```
pub fn guess_type(path: &Path) -> MimeGuess {
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();

    let (stem, encoding) = match file_name.strip_suffix(".gz") {
        Some(inner) => (inner, Some("gzip")),
        None => (file_name, None),
    };

    let extension = stem.rsplit_once('.').map(|(_, ext)| ext);
    let mut content_type = content_type_for_extension(extension);

    // Override rule: applied after the general lookup.
    if file_name.ends_with(".js") {
        content_type = JAVASCRIPT;
    }

    MimeGuess {
        content_type,
        encoding,
    }
}

/// Get MIME Content-Type based on file extension
///
/// The table is fixed at compile time; `.mjs` is registered as
/// JavaScript alongside `.js` for general lookups.
pub fn content_type_for_extension(extension: Option<&str>) -> &'static str {
    match extension {
        // Text
        Some("html" | "htm") => "text/html; charset=utf-8",
        Some("css") => "text/css",
        Some("txt" | "md") => "text/plain; charset=utf-8",
        Some("xml") => "application/xml",

        // JavaScript/WASM
        Some("js" | "mjs") => JAVASCRIPT,
        Some("json") => "application/json",
        Some("wasm") => "application/wasm",

        // Images
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("webp") => "image/webp",

        // Fonts
        Some("woff") => "font/woff",
        Some("woff2") => "font/woff2",
        Some("ttf") => "font/ttf",
        Some("otf") => "font/otf",

        // Documents
        Some("pdf") => "application/pdf",
        Some("zip") => "application/zip",
        Some("tar") => "application/x-tar",

        // Default
        _ => "application/octet-stream",
    }
}
