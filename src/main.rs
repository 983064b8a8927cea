use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use log::error;

use tritonhttp::{HttpServer, PathPolicy, ServerConfig};

/// Serve the files under a directory over HTTP/1.1
#[derive(Parser, Debug)]
#[command(name = "tritonhttp", version, about)]
struct Cli {
    /// Port to listen on (all interfaces)
    port: u16,

    /// Directory to serve files from
    doc_root: String,

    /// Maximum number of connections served at once (0 = unlimited)
    #[arg(long, default_value_t = 1024)]
    max_connections: usize,

    /// Size of each socket read, in bytes
    #[arg(long, default_value_t = 1024, value_parser = clap::value_parser!(u64).range(1..=usize::MAX as u64))]
    read_chunk_size: u64,

    /// Also canonicalize paths and reject files that resolve outside the document root
    #[arg(long)]
    canonical_paths: bool,
}

impl From<Cli> for ServerConfig {
    fn from(cli: Cli) -> Self {
        let mut config = ServerConfig::new(cli.port, cli.doc_root);
        config.max_connections = cli.max_connections;
        // Range-checked by clap, so this never saturates
        config.read_buffer_size = usize::try_from(cli.read_chunk_size).unwrap_or(usize::MAX);
        if cli.canonical_paths {
            config.path_policy = PathPolicy::Canonical;
        }
        config
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            let _ = e.print();
            return ExitCode::FAILURE;
        }
    };

    let config = ServerConfig::from(cli);
    let server = match HttpServer::bind(config).await {
        Ok(server) => server,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let port = match server.local_addr() {
        Ok(addr) => addr.port(),
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };
    println!("Server listening on port {port}...");
    server.run().await;

    ExitCode::SUCCESS
}
