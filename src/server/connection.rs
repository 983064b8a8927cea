//! Serving a single connection: read one request, answer it, done.

use log::debug;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::parser::{HttpRequest, parse_request};
use crate::server::docroot::DocumentRoot;
use crate::server::error::Error;
use crate::server::response::{HttpResponse, StatusCode};

/// Marks the end of the request header block.
pub const HEADER_TERMINATOR: &[u8] = b"\r\n\r\n";

fn find_terminator(buf: &[u8], from: usize) -> Option<usize> {
    buf.get(from..)?
        .windows(HEADER_TERMINATOR.len())
        .position(|window| window == HEADER_TERMINATOR)
        .map(|pos| from + pos)
}

/// Read from `socket` until the header terminator has arrived or the peer
/// stops sending.
///
/// Whatever was received is returned on EOF, terminator or not.
pub async fn read_request(
    socket: &mut (impl AsyncRead + Unpin),
    read_buffer_size: usize,
) -> Result<Vec<u8>, Error> {
    let mut request = Vec::new();
    let mut chunk = vec![0; read_buffer_size.max(1)];

    loop {
        let n = socket.read(&mut chunk).await.map_err(Error::Read)?;
        if n == 0 {
            break;
        }

        // The terminator may straddle two reads
        let search_from = request.len().saturating_sub(HEADER_TERMINATOR.len() - 1);
        request.extend_from_slice(&chunk[..n]);
        if find_terminator(&request, search_from).is_some() {
            break;
        }
    }

    Ok(request)
}

/// Decide the response for a parsed request.
///
/// The target is validated before the method is looked at, so a non-GET
/// request for an invalid target gets 404 while the same method on a valid
/// target gets 400. Rejected targets are reported as Not Found.
pub async fn respond(request: &HttpRequest, doc_root: &DocumentRoot) -> HttpResponse {
    let target = request.target_or_empty();

    if !doc_root.is_valid(target) {
        debug!("Rejected target {target:?}");
        return HttpResponse::status_only(StatusCode::NotFound);
    }

    if !request.is_get() {
        return HttpResponse::status_only(StatusCode::BadRequest);
    }

    let file_path = doc_root.resolve(target);
    match tokio::fs::read(&file_path).await {
        Ok(body) => {
            let file_name = file_path
                .file_name()
                .map(|name| name.to_string_lossy())
                .unwrap_or_default();
            HttpResponse::file(body, &file_name)
        }
        Err(e) => {
            debug!("Cannot read {}: {e}", file_path.display());
            HttpResponse::status_only(StatusCode::NotFound)
        }
    }
}

/// Handle a single connection.
///
/// Reads one request, writes one response and returns the status that was
/// sent. Returns `Ok(None)` when the peer closed the connection without
/// sending anything. A read error sends nothing. Closing the socket is left
/// to the caller.
pub async fn handle_connection(
    socket: &mut (impl AsyncRead + AsyncWrite + Unpin),
    doc_root: &DocumentRoot,
    read_buffer_size: usize,
) -> Result<Option<StatusCode>, Error> {
    let raw = read_request(socket, read_buffer_size).await?;
    if raw.is_empty() {
        return Ok(None);
    }

    let request = parse_request(&raw);
    debug!(
        "Request: method={:?} target={:?} version={:?}",
        request.method, request.target, request.version
    );

    let response = respond(&request, doc_root).await;
    socket
        .write_all(&response.to_bytes())
        .await
        .map_err(Error::Write)?;
    socket.flush().await.map_err(Error::Write)?;

    Ok(Some(response.status))
}
