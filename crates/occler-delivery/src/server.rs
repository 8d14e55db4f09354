//! Download server.
//!
//! Serves the component index, hands archives to the browser as attachments
//! and pushes a toast to every open page once a download starts.

use std::net::SocketAddr;
use std::path::{Path as FsPath, PathBuf};
use std::sync::Arc;

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        Path, State,
    },
    http::{header, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use tokio::sync::broadcast::error::RecvError;
use tower_http::services::ServeDir;

use occler_catalog::Category;
use occler_package::{Archive, ArchiveBuilder, ArchiveRequest, BuildError};

use crate::flow::{download, DownloadError};
use crate::notify::{notify_client_script, NotificationHub, NotifyMessage};
use crate::traits::{Delivery, DeliveryError};

/// Path of the notification WebSocket.
const NOTIFY_PATH: &str = "/__notify";

/// Configuration for the download server.
#[derive(Debug, Clone)]
pub struct DownloadServerConfig {
    /// Host to bind to
    pub host: String,

    /// Port to listen on
    pub port: u16,

    /// Open browser on start
    pub open: bool,

    /// Directory of preview images, served under `/previews`
    pub previews_dir: Option<PathBuf>,
}

impl Default for DownloadServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 4000,
            open: true,
            previews_dir: None,
        }
    }
}

/// Errors that can occur with the server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Failed to bind to {0}: {1}")]
    BindError(SocketAddr, String),
}

/// Delivers archives as HTTP attachments.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpDelivery;

impl Delivery for HttpDelivery {
    type Output = Response;

    fn deliver(&self, archive: Archive) -> Result<Response, DeliveryError> {
        let disposition = HeaderValue::from_str(&content_disposition(&archive.filename))
            .map_err(|e| DeliveryError::Unavailable(e.to_string()))?;

        Ok((
            [
                (header::CONTENT_TYPE, HeaderValue::from_static("application/zip")),
                (header::CONTENT_DISPOSITION, disposition),
            ],
            archive.bytes,
        )
            .into_response())
    }
}

/// `attachment` disposition with an ASCII `filename` fallback and the exact
/// name as an RFC 5987 `filename*` parameter.
fn content_disposition(filename: &str) -> String {
    let fallback: String = filename
        .chars()
        .map(|c| match c {
            '"' | '\\' => '_',
            ' ' => c,
            c if c.is_ascii_graphic() => c,
            _ => '_',
        })
        .collect();

    format!(
        "attachment; filename=\"{}\"; filename*=UTF-8''{}",
        fallback,
        urlencoding::encode(filename)
    )
}

/// Shared server state.
struct ServerState {
    builder: Arc<ArchiveBuilder>,
    hub: NotificationHub,
    previews: bool,
}

/// Download server.
pub struct DownloadServer {
    config: DownloadServerConfig,
    builder: Arc<ArchiveBuilder>,
}

impl DownloadServer {
    /// Create a new download server.
    pub fn new(config: DownloadServerConfig, builder: Arc<ArchiveBuilder>) -> Self {
        Self { config, builder }
    }

    /// Start serving until the process is stopped.
    pub async fn start(self) -> Result<(), ServerError> {
        let addr: SocketAddr = format!("{}:{}", self.config.host, self.config.port)
            .parse()
            .map_err(|_| {
                ServerError::InvalidAddress(format!("{}:{}", self.config.host, self.config.port))
            })?;

        let state = Arc::new(ServerState {
            builder: Arc::clone(&self.builder),
            hub: NotificationHub::new(),
            previews: self.config.previews_dir.is_some(),
        });

        let app = router(state, self.config.previews_dir.as_deref());

        tracing::info!("Serving downloads at http://{}", addr);

        if self.config.open {
            let url = format!("http://{}", addr);
            if let Err(e) = open::that(&url) {
                tracing::debug!("Could not open browser: {}", e);
            }
        }

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| ServerError::BindError(addr, e.to_string()))?;

        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::BindError(addr, e.to_string()))?;

        Ok(())
    }
}

fn router(state: Arc<ServerState>, previews_dir: Option<&FsPath>) -> Router {
    let mut app = Router::new()
        .route("/", get(index_handler))
        .route("/download/{id}", get(download_handler))
        .route("/download-all", get(download_all_handler))
        .route(NOTIFY_PATH, get(ws_handler))
        .route("/__notify.js", get(notify_script_handler));

    if let Some(dir) = previews_dir {
        app = app.nest_service("/previews", ServeDir::new(dir));
    }

    app.with_state(state)
}

/// Handler for the index page.
async fn index_handler(State(state): State<Arc<ServerState>>) -> Response {
    let catalog = state.builder.catalog();

    let readme = match state.builder.documents().main_readme(catalog) {
        Ok(markdown) => render_markdown(&markdown),
        Err(e) => {
            tracing::error!("Failed to render index: {}", e);
            return (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response();
        }
    };

    let mut downloads = String::from(
        r#"<h2>Downloads</h2>
<p><a class="download-all" href="/download-all">Download the complete design system</a></p>
"#,
    );
    for category in Category::ALL {
        let mut components = catalog.in_category(category).peekable();
        if components.peek().is_none() {
            continue;
        }

        downloads.push_str(&format!("<h3>{}</h3>\n<ul>\n", category.label()));
        for component in components {
            let preview = if state.previews {
                format!(
                    r#"<img src="/previews/{}" alt="" loading="lazy"> "#,
                    escape_html(&component.preview)
                )
            } else {
                String::new()
            };
            downloads.push_str(&format!(
                "  <li>{}<a href=\"/download/{}\">{}</a></li>\n",
                preview,
                escape_html(&component.id),
                escape_html(&component.name)
            ));
        }
        downloads.push_str("</ul>\n");
    }

    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>OCCLER Components</title>
  <style>
    body {{ font-family: system-ui, sans-serif; max-width: 800px; margin: 2rem auto; padding: 0 1rem; }}
    h1 {{ font-size: 2rem; }}
    li img {{ height: 32px; vertical-align: middle; }}
  </style>
</head>
<body>
  <div class="content">{}</div>
  <section class="downloads">{}</section>
  <script src="/__notify.js"></script>
</body>
</html>"#,
        readme, downloads
    ))
    .into_response()
}

/// Handler for single-component downloads.
async fn download_handler(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<String>,
) -> Response {
    serve_archive(&state, ArchiveRequest::single(id)).await
}

/// Handler for the complete archive.
async fn download_all_handler(State(state): State<Arc<ServerState>>) -> Response {
    serve_archive(&state, ArchiveRequest::All).await
}

async fn serve_archive(state: &ServerState, request: ArchiveRequest) -> Response {
    match download(&state.builder, &request, &HttpDelivery, &state.hub).await {
        Ok(response) => response,
        Err(e) => error_response(e),
    }
}

fn error_response(err: DownloadError) -> Response {
    let status = match &err {
        DownloadError::Build(BuildError::ComponentNotFound(_)) => StatusCode::NOT_FOUND,
        DownloadError::Build(_) => StatusCode::INTERNAL_SERVER_ERROR,
        DownloadError::DeliveryUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
    };
    (status, err.to_string()).into_response()
}

/// Handler for the notification WebSocket endpoint.
async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<ServerState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_ws(socket, state))
}

/// Forward notifications to one browser until it disconnects.
async fn handle_ws(mut socket: WebSocket, state: Arc<ServerState>) {
    let mut rx = state.hub.subscribe();

    if !send_message(&mut socket, &NotifyMessage::Connected).await {
        return;
    }

    loop {
        match rx.recv().await {
            Ok(msg) => {
                if !send_message(&mut socket, &msg).await {
                    break;
                }
            }
            Err(RecvError::Lagged(skipped)) => {
                tracing::debug!("Notification client skipped {} messages", skipped);
            }
            Err(RecvError::Closed) => break,
        }
    }
}

/// Send `msg` as JSON. Returns false once the client is gone.
async fn send_message(socket: &mut WebSocket, msg: &NotifyMessage) -> bool {
    let json = match serde_json::to_string(msg) {
        Ok(json) => json,
        Err(e) => {
            tracing::warn!("Failed to encode notification: {}", e);
            return true;
        }
    };
    socket.send(Message::Text(json.into())).await.is_ok()
}

/// Handler for the notification client script.
async fn notify_script_handler() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript")],
        notify_client_script(NOTIFY_PATH),
    )
}

/// Markdown to HTML renderer. Raw HTML in the source is shown as text, since
/// names and descriptions come from user manifests.
fn render_markdown(content: &str) -> String {
    use pulldown_cmark::{html, Event, Options, Parser};

    let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH;
    let parser = Parser::new_ext(content, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });

    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);

    html_output
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
    use axum::body::to_bytes;
    use occler_catalog::Catalog;
    use pretty_assertions::assert_eq;

    fn state() -> Arc<ServerState> {
        Arc::new(ServerState {
            builder: Arc::new(ArchiveBuilder::new(Arc::new(Catalog::builtin()))),
            hub: NotificationHub::new(),
            previews: false,
        })
    }

    #[test]
    fn creates_server_with_default_config() {
        let config = DownloadServerConfig::default();
        assert_eq!(config.port, 4000);
        assert_eq!(config.host, "127.0.0.1");
    }

    #[tokio::test]
    async fn serves_component_archive_as_attachment() {
        let state = state();
        let mut rx = state.hub.subscribe();

        let response =
            download_handler(State(Arc::clone(&state)), Path("ghost-buttons".to_string())).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/zip");
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"occler-ghost-buttons-component.zip\"; \
             filename*=UTF-8''occler-ghost-buttons-component.zip"
        );

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(body.starts_with(b"PK"));

        match rx.try_recv() {
            Ok(NotifyMessage::DownloadStarted(n)) => {
                assert_eq!(n.message, "Ghost Buttons download started.")
            }
            other => panic!("Expected DownloadStarted, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn serves_complete_archive() {
        let response = download_all_handler(State(state())).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"occler-linear-design-system-complete.zip\"; \
             filename*=UTF-8''occler-linear-design-system-complete.zip"
        );
    }

    #[tokio::test]
    async fn unknown_component_is_not_found() {
        let state = state();
        let mut rx = state.hub.subscribe();

        let response =
            download_handler(State(Arc::clone(&state)), Path("missing".to_string())).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn index_lists_download_links() {
        let response = index_handler(State(state())).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let html = String::from_utf8(body.to_vec()).unwrap();

        assert!(html.contains(r#"href="/download/primary-buttons""#));
        assert!(html.contains(r#"href="/download-all""#));
        assert!(html.contains("/__notify.js"));
        assert!(!html.contains("/previews/"));
    }

    #[test]
    fn maps_errors_to_status_codes() {
        let not_found = error_response(DownloadError::Build(BuildError::ComponentNotFound(
            "x".to_string(),
        )));
        let failed = error_response(DownloadError::Build(BuildError::SerializationFailure(
            "disk".to_string(),
        )));
        let unavailable = error_response(DownloadError::DeliveryUnavailable(
            DeliveryError::Unavailable("closed".to_string()),
        ));

        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);
        assert_eq!(failed.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(unavailable.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn non_ascii_filenames_are_delivered() {
        let archive = Archive {
            bytes: b"PK".to_vec(),
            filename: "occler-bouton-été-component.zip".to_string(),
            label: "Bouton Été".to_string(),
            entries: vec![],
        };

        let response = HttpDelivery.deliver(archive).unwrap();

        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"occler-bouton-_t_-component.zip\"; \
             filename*=UTF-8''occler-bouton-%C3%A9t%C3%A9-component.zip"
        );
    }

    #[test]
    fn quotes_are_replaced_in_fallback_filename() {
        let disposition = content_disposition("a\"b.zip");

        assert!(disposition.starts_with("attachment; filename=\"a_b.zip\";"));
        assert!(disposition.ends_with("filename*=UTF-8''a%22b.zip"));
    }

    #[tokio::test]
    async fn index_escapes_manifest_html() {
        let component = occler_catalog::ComponentDescriptor::new(
            "evil-cards",
            "Evil <b>Cards</b>",
            Category::Cards,
            "<div></div>",
            ".evil {}",
        )
        .with_description("<img src=x onerror=alert(1)>");
        let state = Arc::new(ServerState {
            builder: Arc::new(ArchiveBuilder::new(Arc::new(
                Catalog::new([component]).unwrap(),
            ))),
            hub: NotificationHub::new(),
            previews: false,
        });

        let response = index_handler(State(state)).await;
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let html = String::from_utf8(body.to_vec()).unwrap();

        assert!(!html.contains("<img src=x"));
        assert!(!html.contains("<b>Cards</b>"));
        assert!(html.contains("&lt;img src=x onerror=alert(1)&gt;"));
    }

    #[test]
    fn renders_raw_html_as_text() {
        let html = render_markdown("<script>alert(1)</script>\n\nInline <em>tag</em>");

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("&lt;em&gt;tag&lt;/em&gt;"));
    }

    #[test]
    fn renders_markdown() {
        let html = render_markdown("# Linear Design System\n\nComponents");

        assert!(html.contains("<h1>Linear Design System</h1>"));
        assert!(html.contains("<p>Components</p>"));
    }

    #[test]
    fn escapes_component_names() {
        assert_eq!(escape_html(r#"<b>"A&B"</b>"#), "&lt;b&gt;&quot;A&amp;B&quot;&lt;/b&gt;");
    }
}
