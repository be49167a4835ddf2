//! Shared test utilities for integration tests.
//!
//! Provides a canned HTTP server standing in for the generation endpoint
//! and a helper for writing fixture files.

#![allow(dead_code)]

use anyhow::Result;
use std::path::{Path, PathBuf};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Writes file under `dir`, creating parent directories as needed.
///
/// # Errors
///
/// Returns error if directory creation or file write fails
pub fn write_file(dir: &Path, path: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(path);
    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Serves exactly one HTTP request with a fixed response.
///
/// Returns the base URL to point a client at and a task resolving to the
/// raw request (headers and body) as received.
///
/// # Errors
///
/// Returns error if the listener cannot bind a local port
pub async fn serve_once(
    status: u16,
    body: &'static str,
) -> Result<(String, JoinHandle<Result<String>>)> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let base_url = format!("http://{}", listener.local_addr()?);

    let task = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await?;
        let request = read_request(&mut socket).await?;

        let response = format!(
            "HTTP/1.1 {} OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await?;
        socket.shutdown().await?;
        Ok::<String, anyhow::Error>(request)
    });

    Ok((base_url, task))
}

/// Reads one request, honoring content length or chunked encoding.
async fn read_request(socket: &mut tokio::net::TcpStream) -> Result<String> {
    let mut buffer = Vec::new();
    let mut chunk = [0u8; 4096];

    loop {
        let n = socket.read(&mut chunk).await?;
        if n == 0 {
            break;
        }
        buffer.extend_from_slice(&chunk[..n]);

        let text = String::from_utf8_lossy(&buffer);
        let Some(header_end) = text.find("\r\n\r\n") else {
            continue;
        };
        let headers = text[..header_end].to_ascii_lowercase();
        let body_len = buffer.len() - (header_end + 4);

        let content_length = headers
            .lines()
            .find_map(|line| line.strip_prefix("content-length:"))
            .and_then(|value| value.trim().parse::<usize>().ok());

        let complete = match content_length {
            Some(length) => body_len >= length,
            None => text.ends_with("0\r\n\r\n"),
        };
        if complete {
            break;
        }
    }

    Ok(String::from_utf8_lossy(&buffer).into_owned())
}
