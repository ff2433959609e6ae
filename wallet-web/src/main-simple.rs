//! Static file server for the wallet connection page
//!
//! Serves the built WASM app from `dist/`. Unknown paths fall back to
//! `index.html` so client-side routes (`/status`) survive a reload.
//! Bind address: `WALLET_SERVER_ADDR`, default `127.0.0.1:8080`.

use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::path::{Component, Path, PathBuf};

const DIST_DIR: &str = "dist";
const DEFAULT_ADDR: &str = "127.0.0.1:8080";

fn main() {
    let addr = std::env::var("WALLET_SERVER_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());
    let listener = match TcpListener::bind(&addr) {
        Ok(listener) => listener,
        Err(e) => {
            eprintln!("Failed to bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    println!("Wallet page served at http://{}", addr);
    println!("Serving from {}/ (Ctrl+C to stop)\n", DIST_DIR);

    for stream in listener.incoming() {
        match stream {
            Ok(stream) => handle_client(stream),
            Err(e) => eprintln!("Connection error: {}", e),
        }
    }
}

fn handle_client(mut stream: TcpStream) {
    let request_line = match BufReader::new(&mut stream).lines().next() {
        Some(Ok(line)) => line,
        _ => {
            eprintln!("Failed to read request line");
            return;
        }
    };

    let target = request_line.split_whitespace().nth(1).unwrap_or("/");
    let path = target.split_once('?').map_or(target, |(path, _)| path);

    let file = resolve(Path::new(DIST_DIR), path);
    let (status, body, content_type) = match fs::read(&file) {
        Ok(body) => ("200 OK", body, content_type(&file)),
        Err(e) => {
            eprintln!("Cannot read {}: {}", file.display(), e);
            (
                "404 NOT FOUND",
                b"<!DOCTYPE html><html><body><h1>Not found</h1><p>Run trunk build first.</p></body></html>".to_vec(),
                "text/html; charset=utf-8",
            )
        }
    };

    let head = format!(
        "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\n\r\n",
        status,
        content_type,
        body.len()
    );
    if let Err(e) = stream.write_all(head.as_bytes()).and_then(|_| stream.write_all(&body)) {
        eprintln!("Failed to write response: {}", e);
    }
    let _ = stream.flush();
}

/// Map a request path to a file under `root`, falling back to `index.html`.
fn resolve(root: &Path, request_path: &str) -> PathBuf {
    let index = root.join("index.html");
    let relative = Path::new(request_path.trim_start_matches('/'));

    // Only plain segments; anything else could escape the root
    if relative.components().any(|c| !matches!(c, Component::Normal(_))) {
        return index;
    }

    let candidate = root.join(relative);
    if candidate.is_file() {
        candidate
    } else {
        index
    }
}

fn content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("html") => "text/html; charset=utf-8",
        Some("css") => "text/css",
        Some("js") => "application/javascript",
        Some("wasm") => "application/wasm",
        Some("json") => "application/json",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type() {
        assert_eq!(content_type(Path::new("dist/app_bg.wasm")), "application/wasm");
        assert_eq!(content_type(Path::new("dist/index.html")), "text/html; charset=utf-8");
        assert_eq!(content_type(Path::new("dist/LICENSE")), "application/octet-stream");
    }

    #[test]
    fn test_resolve_falls_back_to_index() {
        let root = Path::new("does-not-exist");
        assert_eq!(resolve(root, "/"), root.join("index.html"));
        assert_eq!(resolve(root, "/status"), root.join("index.html"));
        assert_eq!(resolve(root, "/../Cargo.toml"), root.join("index.html"));
    }

    #[test]
    fn test_resolve_existing_file() {
        // Cargo runs tests from the package root
        let root = Path::new("src");
        assert_eq!(resolve(root, "/main.rs"), root.join("main.rs"));
    }
}
