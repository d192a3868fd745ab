// Connection handling module
// Serves a single accepted TCP connection over HTTP/1.

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use std::net::SocketAddr;
use std::sync::Arc;

use crate::config::ServerConfig;
use crate::handler;
use crate::logger;

/// Handle a single connection in a spawned task.
///
/// Wraps the TCP stream in `TokioIo`, serves it with HTTP/1.1
/// keep-alive, and dispatches every request to the static file
/// handler. Connection-level errors are logged and never take the
/// process down.
pub fn handle_connection(
    stream: tokio::net::TcpStream,
    peer_addr: SocketAddr,
    config: Arc<ServerConfig>,
) {
    tokio::spawn(async move {
        let io = TokioIo::new(stream);

        let conn = http1::Builder::new().keep_alive(true).serve_connection(
            io,
            service_fn(move |req| {
                let config = Arc::clone(&config);
                async move { handler::handle_request(req, config, peer_addr).await }
            }),
        );

        if let Err(err) = conn.await {
            logger::log_connection_error(&err);
        }
    });
}
