use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap, Method, StatusCode, Uri};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::Router;
use fastotp::{Client, Config};
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::mpsc;

pub const API_KEY: &str = "test-api-key";

#[derive(Debug)]
pub struct CapturedRequest {
    pub method: Method,
    pub path: String,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl CapturedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

#[derive(Clone)]
struct Canned {
    status: StatusCode,
    body: &'static str,
    requests: mpsc::UnboundedSender<CapturedRequest>,
}

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn client_for(base_url: &str, timeout_secs: u64) -> anyhow::Result<Client> {
    let config = Config {
        base_url: base_url.to_owned(),
        timeout_secs,
    };
    Ok(Client::with_config(config, API_KEY)?)
}

async fn reply(
    State(canned): State<Canned>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    let _ = canned.requests.send(CapturedRequest {
        method,
        path: uri.path().to_owned(),
        headers,
        body,
    });
    (
        canned.status,
        [(header::CONTENT_TYPE, "application/json")],
        canned.body,
    )
}

async fn bind(app: Router) -> anyhow::Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let base_url = format!("http://{}", listener.local_addr()?);
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    Ok(base_url)
}

/// Answers every OTP route with `status` and `body`, reporting each request.
pub async fn serve(
    status: StatusCode,
    body: &'static str,
) -> anyhow::Result<(String, mpsc::UnboundedReceiver<CapturedRequest>)> {
    let (requests, rx) = mpsc::unbounded_channel();
    let app = Router::new()
        .route("/generate", post(reply))
        .route("/validate", post(reply))
        .route("/:id", get(reply))
        .with_state(Canned {
            status,
            body,
            requests,
        });
    Ok((bind(app).await?, rx))
}

/// Accepts requests and never answers.
pub async fn serve_silent() -> anyhow::Result<String> {
    let app = Router::new().route(
        "/:id",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            StatusCode::OK
        }),
    );
    bind(app).await
}
