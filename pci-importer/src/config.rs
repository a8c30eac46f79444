use clap::Parser;
use pci_importer_lib::ValidationPolicy;
use std::net::{IpAddr, SocketAddr};

/// 10 MiB
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Server configuration, from command-line flags or the environment
#[derive(Parser, Debug, Clone)]
#[command(name = "pci-importer")]
#[command(about = "HTTP service that validates road PCI spreadsheets")]
#[command(version)]
pub struct ServerConfig {
    /// Address to bind to
    #[arg(long, env = "PCI_HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(long, env = "PCI_PORT", default_value_t = 8000)]
    pub port: u16,

    /// `strict` rejects the whole upload on any invalid row, `lenient` drops invalid rows
    #[arg(long, env = "PCI_VALIDATION_POLICY", default_value = "strict")]
    pub policy: ValidationPolicy,

    /// Largest accepted request body, in bytes
    #[arg(long, env = "PCI_MAX_UPLOAD_BYTES", default_value_t = DEFAULT_MAX_UPLOAD_BYTES)]
    pub max_upload_bytes: usize,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
