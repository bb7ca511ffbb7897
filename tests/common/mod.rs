//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

/// Serve exactly one HTTP response on a loopback port.
///
/// Returns the URL to request and a handle yielding the raw request text.
pub fn serve_once(
    status: &str,
    content_type: Option<&str>,
    body: &[u8],
) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}/hosts", listener.local_addr().unwrap());

    let mut response = format!("HTTP/1.1 {}\r\n", status).into_bytes();
    if let Some(ct) = content_type {
        response.extend_from_slice(format!("Content-Type: {}\r\n", ct).as_bytes());
    }
    response.extend_from_slice(
        format!("Content-Length: {}\r\nConnection: close\r\n\r\n", body.len()).as_bytes(),
    );
    response.extend_from_slice(body);

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut buf).unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }
        stream.write_all(&response).unwrap();
        stream.flush().unwrap();
        String::from_utf8_lossy(&request).into_owned()
    });

    (url, handle)
}
