//! HTTP Server for the docintel host.
//!
//! Serves the upload widget and forwards uploaded documents to the
//! extraction service. No document is parsed or stored here.
//!
//! # API Endpoints
//!
//! | Method | Path                | Description                           |
//! |--------|---------------------|---------------------------------------|
//! | GET    | `/`                 | Service banner                        |
//! | GET    | `/health`           | Health check                          |
//! | POST   | `/upload-document/` | Upload one document for extraction    |
//! | GET    | `/api/logs`         | SSE stream of upload logs             |
//! | GET    | `/static/*`         | Widget assets (when configured)       |

use axum::{
    extract::{DefaultBodyLimit, Multipart, State},
    http::{header, Method, StatusCode},
    response::{sse::Event, Json, Sse},
    routing::{get, post},
    Router,
};
use futures::stream::Stream;
use serde_json::{json, Value};
use std::{convert::Infallible, net::SocketAddr, path::Path, time::Duration};
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::StreamExt as _;
use tower_http::{cors::CorsLayer, services::ServeDir};
use uuid::Uuid;

use super::logs::{log_info, log_upload, log_warning, LogEntry, LOG_BROADCASTER};
use super::types::UploadResponse;
use crate::config::{ServerConfig, MAX_REQUEST_BODY, MAX_UPLOAD_SIZE};
use crate::error::{ExtractionError, ServerError, ServerResult};
use crate::extraction::ExtractionClient;
use crate::upload::UploadedFile;

/// Shared handler state.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    extraction: Option<ExtractionClient>,
}

impl AppState {
    pub fn new(extraction: Option<ExtractionClient>) -> Self {
        Self { extraction }
    }

    pub fn from_config(config: &ServerConfig) -> Self {
        Self::new(config.extraction_url.clone().map(ExtractionClient::new))
    }
}

/// Build the application router.
pub fn build_router(state: AppState, static_dir: Option<&Path>) -> Router {
    // Permissive CORS, the widget may be served from another origin in development
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .expose_headers([header::CONTENT_TYPE]);

    let mut app = Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/upload-document/", post(upload_document))
        .route("/api/logs", get(sse_logs))
        .layer(DefaultBodyLimit::max(MAX_REQUEST_BODY))
        .with_state(state);

    if let Some(dir) = static_dir {
        app = app.nest_service("/static", ServeDir::new(dir));
    }

    app.layer(cors)
}

/// Start the HTTP server
pub async fn start_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    config.validate()?;

    let state = AppState::from_config(&config);
    let app = build_router(state, config.static_dir.as_deref());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    println!("🚀 Document Intelligence host running on http://localhost:{}", config.port);
    println!("   POST /upload-document/ - Upload a document");
    println!("   GET  /api/logs         - SSE log stream");
    println!("   GET  /health           - Health check");
    if let Some(dir) = &config.static_dir {
        println!("   GET  /static/          - Widget ({})", dir.display());
    }
    println!();

    match &config.extraction_url {
        Some(url) => log_info(format!("Forwarding uploads to {}", url)),
        None => log_warning("EXTRACTION_SERVICE_URL not set, uploads will be rejected"),
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Service banner
async fn root() -> Json<Value> {
    Json(json!({
        "message": "Document Intelligence System is running!"
    }))
}

/// Health check endpoint
async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "docintel",
        "version": env!("CARGO_PKG_VERSION"),
        "extractionConfigured": state.extraction.is_some(),
        "endpoints": {
            "upload": "POST /upload-document/",
            "logs": "GET /api/logs (SSE)"
        }
    }))
}

/// SSE endpoint for real-time log streaming
async fn sse_logs() -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let rx = LOG_BROADCASTER.subscribe();

    let stream = BroadcastStream::new(rx).filter_map(|result| match result {
        Ok(entry) => {
            let json = serde_json::to_string(&entry).ok()?;
            Some(Ok(Event::default().data(json)))
        }
        Err(_) => None,
    });

    Sse::new(stream).keep_alive(
        axum::response::sse::KeepAlive::new()
            .interval(Duration::from_secs(15))
            .text("keep-alive"),
    )
}

/// Upload document endpoint
async fn upload_document(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, (StatusCode, Json<Value>)> {
    let upload_id = Uuid::new_v4();

    match process_upload(&state, &mut multipart, upload_id).await {
        Ok(response) => {
            log_upload(upload_id, LogEntry::success("Extraction complete"));
            Ok(Json(response))
        }
        Err(e) => {
            log_upload(upload_id, LogEntry::error(e.to_string()));
            Err(e.into_http())
        }
    }
}

async fn process_upload(
    state: &AppState,
    multipart: &mut Multipart,
    upload_id: Uuid,
) -> ServerResult<UploadResponse> {
    let file = read_file_field(multipart).await?;

    log_upload(
        upload_id,
        LogEntry::info(format!(
            "📄 New upload: {} ({}, {} bytes)",
            file.file_name,
            file.content_type,
            file.bytes.len()
        )),
    );

    file.validate()?;

    let client = state
        .extraction
        .as_ref()
        .ok_or(ExtractionError::NotConfigured)?;

    let file_name = file.file_name.clone();
    let output = client.extract(file).await?;

    log_upload(
        upload_id,
        LogEntry::info(format!(
            "{} fields, {} characters of text",
            output.extracted_data.len(),
            output.raw_text.chars().count()
        )),
    );

    Ok(UploadResponse::new(file_name, output))
}

/// Read the `file` part; other parts are ignored.
async fn read_file_field(multipart: &mut Multipart) -> ServerResult<UploadedFile> {
    let mut file = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(e.status(), e.body_text()))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| multipart_error(e.status(), e.body_text()))?;

        file = Some(UploadedFile::new(
            file_name.as_deref(),
            content_type.as_deref(),
            bytes.to_vec(),
        ));
    }

    file.ok_or_else(|| ServerError::BadRequest("No file provided".to_string()))
}

fn multipart_error(status: StatusCode, message: String) -> ServerError {
    if status == StatusCode::PAYLOAD_TOO_LARGE {
        ServerError::PayloadTooLarge {
            limit: MAX_UPLOAD_SIZE,
        }
    } else {
        ServerError::BadRequest(format!("Multipart error: {}", message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use tempfile::tempdir;
    use tower::ServiceExt;

    const BOUNDARY: &str = "docintel-test-boundary";

    fn multipart_request(field: &str, file_name: &str, content_type: &str, bytes: &[u8]) -> Request<Body> {
        let mut body = Vec::new();
        body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
                field, file_name
            )
            .as_bytes(),
        );
        body.extend_from_slice(format!("Content-Type: {}\r\n\r\n", content_type).as_bytes());
        body.extend_from_slice(bytes);
        body.extend_from_slice(format!("\r\n--{}--\r\n", BOUNDARY).as_bytes());

        Request::builder()
            .method("POST")
            .uri("/upload-document/")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={}", BOUNDARY),
            )
            .body(Body::from(body))
            .unwrap()
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    /// Serve `router` on an ephemeral port and return its `/extract` URL.
    async fn spawn_extractor(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}/extract", addr)
    }

    async fn fake_extractor(mut multipart: Multipart) -> Json<Value> {
        let mut received = String::new();
        while let Some(field) = multipart.next_field().await.unwrap() {
            if field.name() == Some("file") {
                received = field.file_name().unwrap_or_default().to_string();
                let _ = field.bytes().await.unwrap();
            }
        }

        Json(json!({
            "raw_text": format!("text of {}", received),
            "extracted_data": {
                "document_type": "invoice",
                "company_name": "Acme",
                "addresses": []
            }
        }))
    }

    async fn broken_extractor() -> (StatusCode, &'static str) {
        (StatusCode::INTERNAL_SERVER_ERROR, "OCR processing failed")
    }

    #[tokio::test]
    async fn test_root_banner() {
        let app = build_router(AppState::default(), None);
        let request = Request::builder().uri("/").body(Body::empty()).unwrap();

        let (status, body) = send(app, request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Document Intelligence System is running!");
    }

    #[tokio::test]
    async fn test_health_reports_extraction_config() {
        let app = build_router(AppState::default(), None);
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();

        let (status, body) = send(app, request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["extractionConfigured"], false);
    }

    #[tokio::test]
    async fn test_missing_file_part() {
        let app = build_router(AppState::default(), None);
        let request = multipart_request("document", "a.pdf", "application/pdf", b"%PDF");

        let (status, body) = send(app, request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert!(body["detail"].as_str().unwrap().contains("No file provided"));
    }

    #[tokio::test]
    async fn test_unsupported_type() {
        let app = build_router(AppState::default(), None);
        let request = multipart_request("file", "notes.txt", "text/plain", b"hello");

        let (status, body) = send(app, request).await;
        assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_extraction_not_configured() {
        let app = build_router(AppState::default(), None);
        let request = multipart_request("file", "a.pdf", "application/pdf", b"%PDF");

        let (status, body) = send(app, request).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_upload_is_forwarded_and_wrapped() {
        let url = spawn_extractor(Router::new().route("/extract", post(fake_extractor))).await;
        let app = build_router(AppState::new(Some(ExtractionClient::new(url))), None);
        let request = multipart_request("file", "invoice.pdf", "application/pdf", b"%PDF-1.4");

        let (status, body) = send(app, request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["file_name"], "invoice.pdf");
        assert_eq!(body["data"]["raw_text"], "text of invoice.pdf");
        assert_eq!(body["data"]["processing_status"], "success");

        let keys: Vec<&String> = body["data"]["extracted_data"]
            .as_object()
            .unwrap()
            .keys()
            .collect();
        assert_eq!(keys, vec!["document_type", "company_name", "addresses"]);
    }

    #[tokio::test]
    async fn test_upstream_failure_is_bad_gateway() {
        let url = spawn_extractor(Router::new().route("/extract", post(broken_extractor))).await;
        let app = build_router(AppState::new(Some(ExtractionClient::new(url))), None);
        let request = multipart_request("file", "scan.png", "image/png", b"\x89PNG");

        let (status, body) = send(app, request).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["success"], false);
        assert!(body["detail"].as_str().unwrap().contains("OCR processing failed"));
    }

    #[tokio::test]
    async fn test_static_assets() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<html>widget</html>").unwrap();

        let app = build_router(AppState::default(), Some(dir.path()));
        let request = Request::builder()
            .uri("/static/index.html")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], b"<html>widget</html>");
    }
}
