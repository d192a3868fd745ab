// Startup constants and root directory resolution
// No config file, environment variables, or CLI arguments are consumed.

use std::io;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Fixed listening port.
pub const PORT: u16 = 8000;

/// Immutable per-process configuration, resolved once before the
/// listener binds.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Wildcard bind address on [`PORT`].
    pub addr: SocketAddr,
    /// Canonical base directory all served paths must stay under.
    pub root: PathBuf,
}

impl ServerConfig {
    /// Resolve the serving root from the process launch directory.
    ///
    /// The root is canonicalized up front so per-request containment
    /// checks compare against a symlink-free base.
    pub fn from_launch_dir() -> io::Result<Self> {
        let root = std::env::current_dir()?.canonicalize()?;
        Ok(Self {
            addr: SocketAddr::from(([0, 0, 0, 0], PORT)),
            root,
        })
    }
}
