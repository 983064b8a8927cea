//! HTTP server implementation.

use std::net::SocketAddr;
use std::sync::Arc;
use tokio::io::AsyncWriteExt;
use tokio::net::{TcpListener, TcpSocket, TcpStream};
use tokio::sync::{OwnedSemaphorePermit, Semaphore};
use log::{debug, error, info};

use crate::server::config::ServerConfig;
use crate::server::connection::handle_connection;
use crate::server::docroot::DocumentRoot;
use crate::server::error::Error;

/// A bound HTTP file server.
pub struct HttpServer {
    /// The server configuration.
    pub config: ServerConfig,
    listener: TcpListener,
    doc_root: Arc<DocumentRoot>,
    limiter: Option<Arc<Semaphore>>,
}

impl HttpServer {
    /// Create the listening socket described by `config`.
    ///
    /// Must be called from within a tokio runtime.
    pub async fn bind(config: ServerConfig) -> Result<Self, Error> {
        let addr = config.addr;
        let socket = if addr.is_ipv4() {
            TcpSocket::new_v4()
        } else {
            TcpSocket::new_v6()
        }
        .map_err(Error::Socket)?;

        socket
            .bind(addr)
            .map_err(|source| Error::Bind { addr, source })?;
        let listener = socket.listen(config.backlog).map_err(Error::Listen)?;

        let doc_root = Arc::new(DocumentRoot::new(config.doc_root.clone(), config.path_policy));
        info!(
            "Bound to {addr}, serving {root}",
            addr = listener.local_addr()?,
            root = doc_root.as_str()
        );
        let limiter = match config.max_connections {
            0 => None,
            max => Some(Arc::new(Semaphore::new(max.min(Semaphore::MAX_PERMITS)))),
        };

        Ok(Self {
            config,
            listener,
            doc_root,
            limiter,
        })
    }

    /// The address the listener is actually bound to.
    pub fn local_addr(&self) -> Result<SocketAddr, Error> {
        Ok(self.listener.local_addr()?)
    }

    /// Wait for a free connection slot, if connections are limited.
    async fn acquire_slot(&self) -> Option<OwnedSemaphorePermit> {
        let semaphore = self.limiter.as_ref()?;
        // The semaphore is never closed, so this only fails if that changes
        semaphore.clone().acquire_owned().await.ok()
    }

    /// Serve a new connection on its own task.
    fn dispatch(&self, mut socket: TcpStream, addr: SocketAddr, permit: Option<OwnedSemaphorePermit>) {
        let doc_root = Arc::clone(&self.doc_root);
        let read_buffer_size = self.config.read_buffer_size;

        tokio::spawn(async move {
            // The permit is dropped when the task completes, releasing the slot
            let _permit = permit;

            match handle_connection(&mut socket, &doc_root, read_buffer_size).await {
                Ok(Some(status)) => debug!("{addr}: {} {}", status.as_u16(), status.reason_phrase()),
                Ok(None) => debug!("{addr}: closed without sending a request"),
                Err(e) => error!("{e}"),
            }

            let _ = socket.shutdown().await;
        });
    }

    /// Log an accept failure and pause briefly before the next attempt.
    async fn handle_accept_error(e: std::io::Error) {
        error!("Error accepting client connection: {e}");
        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;
    }

    /// Accept connections forever, serving each on its own task.
    pub async fn run(self) {
        loop {
            let permit = self.acquire_slot().await;

            match self.listener.accept().await {
                Ok((socket, addr)) => self.dispatch(socket, addr, permit),
                Err(e) => Self::handle_accept_error(e).await,
            }
        }
    }
}
