use std::sync::Arc;

use staticserve::config::ServerConfig;
use staticserve::{logger, server};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async_main())
}

async fn async_main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Arc::new(ServerConfig::from_launch_dir()?);

    // Bind failure is fatal: the error propagates out of main and the
    // process exits non-zero.
    let listener = server::create_listener(config.addr)?;

    logger::log_server_start(&config.addr, &config.root);

    let shutdown = server::wait_for_shutdown();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        server::handle_connection(stream, peer_addr, Arc::clone(&config));
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            result = &mut shutdown => {
                result?;
                break;
            }
        }
    }

    Ok(())
}
