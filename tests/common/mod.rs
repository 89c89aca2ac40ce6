//! Shared utilities for integration testing.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Start a mock news backend that hands each request's method, path, and raw
/// head to a closure and writes back the (status, headers, body) it returns.
#[allow(dead_code)]
pub async fn start_json_backend<F, Fut>(addr: SocketAddr, f: F)
where
    F: Fn(String, String, String) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = (u16, Vec<(&'static str, String)>, String)> + Send + 'static,
{
    let listener = TcpListener::bind(addr).await.unwrap();
    let f = Arc::new(f);

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let f = f.clone();
                    tokio::spawn(async move {
                        // Read the full head, then drain the body per
                        // Content-Length so the client finishes sending
                        // before the response goes out.
                        let mut buf = Vec::new();
                        let mut chunk = [0u8; 1024];
                        let head_end = loop {
                            if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                                break pos + 4;
                            }
                            match socket.read(&mut chunk).await {
                                Ok(0) => return,
                                Ok(n) => buf.extend_from_slice(&chunk[..n]),
                                Err(_) => return,
                            }
                        };

                        let head = String::from_utf8_lossy(&buf[..head_end]).to_string();
                        let content_length = head
                            .lines()
                            .find_map(|line| {
                                let (name, value) = line.split_once(':')?;
                                name.eq_ignore_ascii_case("content-length")
                                    .then(|| value.trim().parse::<usize>().ok())?
                            })
                            .unwrap_or(0);
                        while buf.len() < head_end + content_length {
                            match socket.read(&mut chunk).await {
                                Ok(0) => break,
                                Ok(n) => buf.extend_from_slice(&chunk[..n]),
                                Err(_) => return,
                            }
                        }
                        let mut request_line = head.lines().next().unwrap_or("").split(' ');
                        let method = request_line.next().unwrap_or("").to_string();
                        let target = request_line.next().unwrap_or("").to_string();

                        let (status, headers, body) = f(method, target, head).await;
                        let status_text = match status {
                            200 => "200 OK",
                            400 => "400 Bad Request",
                            401 => "401 Unauthorized",
                            403 => "403 Forbidden",
                            404 => "404 Not Found",
                            422 => "422 Unprocessable Entity",
                            500 => "500 Internal Server Error",
                            502 => "502 Bad Gateway",
                            503 => "503 Service Unavailable",
                            _ => "200 OK",
                        };

                        let mut response_str = format!(
                            "HTTP/1.1 {}\r\nContent-Length: {}\r\nContent-Type: application/json\r\nConnection: close\r\n",
                            status_text,
                            body.len()
                        );
                        for (name, value) in headers {
                            response_str.push_str(&format!("{}: {}\r\n", name, value));
                        }
                        response_str.push_str("\r\n");
                        response_str.push_str(&body);

                        let _ = socket.write_all(response_str.as_bytes()).await;
                        let _ = socket.shutdown().await;
                        tokio::time::sleep(Duration::from_millis(10)).await;
                    });
                }
                Err(_) => break,
            }
        }
    });
}

/// Start a backend that returns the same (status, headers, body) for every
/// request.
#[allow(dead_code)]
pub async fn start_fixed_backend(
    addr: SocketAddr,
    status: u16,
    headers: Vec<(&'static str, String)>,
    body: &'static str,
) {
    start_json_backend(addr, move |_method, _target, _head| {
        let headers = headers.clone();
        async move { (status, headers, body.to_string()) }
    })
    .await;
}
