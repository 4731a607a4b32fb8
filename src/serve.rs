//! Static file server for `bober run --html5`.
//!
//! Emscripten builds drop an `.html`/`.js`/`.wasm` triple into `build/`,
//! which browsers refuse to load from `file://`. This serves that directory
//! over HTTP until the process is interrupted.

use axum::Router;
use axum::extract::State;
use axum::handler::Handler;
use axum::http::{StatusCode, Uri};
use axum::response::Html;
use std::net::{SocketAddr, TcpListener};
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;
use tower_http::services::ServeDir;

use crate::error::{BoberError, Result};

pub struct StaticServer {
    listener: TcpListener,
    root: PathBuf,
}

impl StaticServer {
    /// Binds the listening socket right away so a busy port is reported
    /// before anything blocks.
    pub fn bind(addr: SocketAddr, root: impl Into<PathBuf>) -> Result<Self> {
        let start_error = |source| BoberError::ServerStart { addr, source };
        let listener = TcpListener::bind(addr).map_err(start_error)?;
        listener.set_nonblocking(true).map_err(start_error)?;

        Ok(Self {
            listener,
            root: root.into(),
        })
    }

    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Serves files until the process is killed.
    pub fn serve(self) -> Result<()> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(BoberError::Serve)?;

        let app = router(&self.root);
        let listener = self.listener;
        runtime
            .block_on(async move {
                let listener = tokio::net::TcpListener::from_std(listener)?;
                axum::serve(listener, app).await
            })
            .map_err(BoberError::Serve)
    }
}

/// Files come from `ServeDir`; a directory without `index.html` gets a
/// plain listing instead of a 404.
fn router(root: &Path) -> Router {
    let listing = list_directory.with_state(Arc::new(root.to_path_buf()));
    Router::new().fallback_service(ServeDir::new(root).fallback(listing))
}

async fn list_directory(
    State(root): State<Arc<PathBuf>>,
    uri: Uri,
) -> std::result::Result<Html<String>, StatusCode> {
    let relative = Path::new(uri.path().trim_start_matches('/'));
    if relative
        .components()
        .any(|c| !matches!(c, Component::Normal(_)))
    {
        return Err(StatusCode::NOT_FOUND);
    }

    let dir = root.join(relative);
    let mut entries = tokio::fs::read_dir(&dir)
        .await
        .map_err(|_| StatusCode::NOT_FOUND)?;

    let mut names = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
    {
        let mut name = entry.file_name().to_string_lossy().into_owned();
        if entry.file_type().await.is_ok_and(|t| t.is_dir()) {
            name.push('/');
        }
        names.push(name);
    }
    names.sort();

    Ok(Html(render_listing(&names)))
}

fn render_listing(names: &[String]) -> String {
    let mut body = String::from("<pre>\n");
    for name in names {
        let name = escape_html(name);
        body.push_str(&format!("<a href=\"{name}\">{name}</a>\n"));
    }
    body.push_str("</pre>\n");
    body
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpStream;
    use std::time::Duration;

    fn get(addr: SocketAddr, path: &str) -> String {
        let mut stream = TcpStream::connect(addr).unwrap();
        stream
            .set_read_timeout(Some(Duration::from_secs(5)))
            .unwrap();
        write!(
            stream,
            "GET {path} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n"
        )
        .unwrap();
        let mut response = String::new();
        stream.read_to_string(&mut response).unwrap();
        response
    }

    #[test]
    fn test_serves_files_from_root() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<h1>hello wasm</h1>").unwrap();
        std::fs::create_dir_all(dir.path().join("assets")).unwrap();
        std::fs::write(dir.path().join("assets").join("app.js"), "run();").unwrap();

        let server = StaticServer::bind(SocketAddr::from(([127, 0, 0, 1], 0)), dir.path()).unwrap();
        let addr = server.local_addr().unwrap();
        std::thread::spawn(move || server.serve());

        let index = get(addr, "/index.html");
        assert!(index.starts_with("HTTP/1.1 200"), "{index}");
        assert!(index.contains("<h1>hello wasm</h1>"));

        let script = get(addr, "/assets/app.js");
        assert!(script.contains("run();"));

        let missing = get(addr, "/nope.wasm");
        assert!(missing.starts_with("HTTP/1.1 404"), "{missing}");
    }

    #[test]
    fn test_lists_directory_without_index() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("app.html"), "<canvas></canvas>").unwrap();
        std::fs::write(dir.path().join("app.wasm"), "").unwrap();
        std::fs::create_dir_all(dir.path().join("data")).unwrap();
        std::fs::write(dir.path().join("data").join("level1.bin"), "").unwrap();

        let server = StaticServer::bind(SocketAddr::from(([127, 0, 0, 1], 0)), dir.path()).unwrap();
        let addr = server.local_addr().unwrap();
        std::thread::spawn(move || server.serve());

        let root = get(addr, "/");
        assert!(root.starts_with("HTTP/1.1 200"), "{root}");
        assert!(root.contains(r#"<a href="app.html">app.html</a>"#), "{root}");
        assert!(root.contains(r#"<a href="app.wasm">app.wasm</a>"#), "{root}");
        assert!(root.contains(r#"<a href="data/">data/</a>"#), "{root}");

        let nested = get(addr, "/data/");
        assert!(nested.starts_with("HTTP/1.1 200"), "{nested}");
        assert!(nested.contains("level1.bin"), "{nested}");

        let page = get(addr, "/app.html");
        assert!(page.contains("<canvas></canvas>"));
    }

    #[test]
    fn test_render_listing_escapes_names() {
        let names = vec!["a&b.js".to_string(), "<x>/".to_string()];
        assert_eq!(
            render_listing(&names),
            "<pre>\n<a href=\"a&amp;b.js\">a&amp;b.js</a>\n<a href=\"&lt;x&gt;/\">&lt;x&gt;/</a>\n</pre>\n"
        );
    }

    #[test]
    fn test_busy_port_fails_to_start() {
        let dir = tempfile::tempdir().unwrap();
        let taken = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = taken.local_addr().unwrap();

        let err = StaticServer::bind(addr, dir.path()).err().unwrap();
        assert!(matches!(err, BoberError::ServerStart { addr: a, .. } if a == addr));
    }
}
