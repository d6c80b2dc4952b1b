//! Application settings loaded via OrthoConfig.
//!
//! Values layer CLI flags over `USERDESK_*` environment variables over
//! configuration files, falling back to `0.0.0.0:8080` and `./users.json`.

use std::io;
use std::net::{SocketAddr, ToSocketAddrs};

use camino::Utf8PathBuf;
use ortho_config::OrthoConfig;
use serde::Deserialize;

/// Server and storage configuration.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "USERDESK")]
pub struct AppSettings {
    /// Interface to listen on.
    #[ortho_config(default = "0.0.0.0".to_owned())]
    pub host: String,
    /// TCP port to listen on.
    #[ortho_config(default = 8080)]
    pub port: u16,
    /// Directory holding the user document.
    #[ortho_config(default = ".".to_owned())]
    pub data_dir: String,
    /// File name of the user document inside `data_dir`.
    #[ortho_config(default = "users.json".to_owned())]
    pub data_file: String,
}

impl AppSettings {
    /// Interface to listen on.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// TCP port to listen on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Directory holding the user document.
    pub fn data_dir(&self) -> Utf8PathBuf {
        Utf8PathBuf::from(&self.data_dir)
    }

    /// File name of the user document.
    pub fn data_file(&self) -> Utf8PathBuf {
        Utf8PathBuf::from(&self.data_file)
    }

    /// Resolve `host:port` to the first matching socket address.
    ///
    /// # Errors
    /// Propagates resolution failures, or reports that the host resolved to
    /// no address.
    pub fn bind_addr(&self) -> io::Result<SocketAddr> {
        (self.host(), self.port())
            .to_socket_addrs()?
            .next()
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::AddrNotAvailable,
                    format!("{}:{} resolved to no address", self.host(), self.port()),
                )
            })
    }
}
