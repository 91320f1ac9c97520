#![allow(dead_code)]

use std::{
    net::{SocketAddr, TcpListener},
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use axum::{
    body::{Body, Bytes},
    extract::State,
    http::{header::CONTENT_TYPE, HeaderMap, Method, Request, StatusCode, Uri},
    response::Response,
    Json, Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use blackwell_api::{
    app::{env::Envy, router::build_router},
    storage::object_store::{ObjectStore, ObjectStoreError},
    AppState,
};

pub const TEST_ENDPOINT_ID: &str = "test-endpoint";
pub const TEST_API_KEY: &str = "secret-key";
pub const MULTIPART_BOUNDARY: &str = "blackwell-test-boundary";

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub authorization: Option<String>,
    pub body: Value,
}

pub struct MockState {
    pub requests: Mutex<Vec<RecordedRequest>>,
    run_reply: Mutex<(StatusCode, Value)>,
    status_reply: Mutex<(StatusCode, Value)>,
}

/// Stand-in for the provider. Records every request and answers `/run` and
/// `/status/:id` with configurable replies.
pub struct MockProvider {
    pub base_url: String,
    pub state: Arc<MockState>,
}

impl MockProvider {
    pub async fn spawn() -> Self {
        let state = Arc::new(MockState {
            requests: Mutex::new(Vec::new()),
            run_reply: Mutex::new((StatusCode::OK, json!({ "id": "job-1", "status": "IN_QUEUE" }))),
            status_reply: Mutex::new((StatusCode::OK, json!({ "id": "job-1", "status": "IN_PROGRESS" }))),
        });

        let app = Router::new().fallback(record).with_state(state.clone());
        let addr = serve(app);

        Self {
            base_url: format!("http://{}", addr),
            state,
        }
    }

    pub fn reply_to_run(&self, status: StatusCode, body: Value) {
        *self.state.run_reply.lock().unwrap() = (status, body);
    }

    pub fn reply_to_status(&self, status: StatusCode, body: Value) {
        *self.state.status_reply.lock().unwrap() = (status, body);
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn proxy_base_url(&self) -> String {
        format!("{}/proxy", self.base_url)
    }

    pub fn direct_base_url(&self) -> String {
        format!("{}/direct", self.base_url)
    }

    pub fn envy(&self) -> Envy {
        Envy {
            runpod_endpoint_id: TEST_ENDPOINT_ID.to_string(),
            runpod_proxy_base_url: self.proxy_base_url(),
            runpod_direct_base_url: self.direct_base_url(),
            runpod_api_key: Some(TEST_API_KEY.to_string()),
            ..Envy::default()
        }
    }
}

async fn record(
    State(state): State<Arc<MockState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> (StatusCode, Json<Value>) {
    let path = uri.path().to_string();
    let authorization = headers
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_string());

    state.requests.lock().unwrap().push(RecordedRequest {
        method,
        path: path.clone(),
        authorization,
        body: serde_json::from_slice(&body).unwrap_or(Value::Null),
    });

    let (status, reply) = match path.contains("/status/") {
        true => state.status_reply.lock().unwrap().clone(),
        false => state.run_reply.lock().unwrap().clone(),
    };

    (status, Json(reply))
}

/// Serves `app` on an ephemeral local port.
pub fn serve(app: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::Server::from_tcp(listener)
            .unwrap()
            .serve(app.into_make_service())
            .await
            .unwrap();
    });

    addr
}

/// An address nothing listens on.
pub fn closed_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

pub fn build_test_app(envy: Envy) -> Router {
    build_router(AppState::from_envy(envy))
}

pub fn build_test_app_with_store(envy: Envy, store: Arc<dyn ObjectStore>) -> Router {
    let mut state = AppState::from_envy(envy);
    state.storage = Some(store);
    build_router(state)
}

pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response {
    post_raw(app, uri, "application/json", body.to_string().into_bytes()).await
}

pub async fn post_raw(app: Router, uri: &str, content_type: &str, body: Vec<u8>) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(CONTENT_TYPE, content_type)
            .body(Body::from(body))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn body_json(response: Response) -> Value {
    let bytes = hyper::body::to_bytes(response.into_body()).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

pub struct Part<'a> {
    pub name: &'a str,
    pub file_name: Option<&'a str>,
    pub content_type: Option<&'a str>,
    pub data: Vec<u8>,
}

impl<'a> Part<'a> {
    pub fn text(name: &'a str, value: &str) -> Self {
        Self {
            name,
            file_name: None,
            content_type: None,
            data: value.as_bytes().to_vec(),
        }
    }

    pub fn file(name: &'a str, file_name: &'a str, content_type: &'a str, data: Vec<u8>) -> Self {
        Self {
            name,
            file_name: Some(file_name),
            content_type: Some(content_type),
            data,
        }
    }
}

pub fn multipart_content_type() -> String {
    format!("multipart/form-data; boundary={}", MULTIPART_BOUNDARY)
}

pub fn multipart_body(parts: &[Part]) -> Vec<u8> {
    let mut body = Vec::new();

    for part in parts {
        body.extend_from_slice(format!("--{}\r\n", MULTIPART_BOUNDARY).as_bytes());
        let disposition = match part.file_name {
            Some(file_name) => format!(
                "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
                part.name, file_name
            ),
            None => format!("Content-Disposition: form-data; name=\"{}\"\r\n", part.name),
        };
        body.extend_from_slice(disposition.as_bytes());
        if let Some(content_type) = part.content_type {
            body.extend_from_slice(format!("Content-Type: {}\r\n", content_type).as_bytes());
        }
        body.extend_from_slice(b"\r\n");
        body.extend_from_slice(&part.data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{}--\r\n", MULTIPART_BOUNDARY).as_bytes());

    body
}

/// In-memory bucket recording uploads.
#[derive(Default)]
pub struct MemoryStore {
    pub objects: Mutex<Vec<(String, String, Vec<u8>)>>,
}

#[async_trait]
impl ObjectStore for MemoryStore {
    async fn put_object(&self, key: &str, data: Bytes, content_type: &str) -> Result<(), ObjectStoreError> {
        self.objects
            .lock()
            .unwrap()
            .push((key.to_string(), content_type.to_string(), data.to_vec()));
        Ok(())
    }

    async fn presign_get(&self, key: &str, expires_in: std::time::Duration) -> Result<String, ObjectStoreError> {
        Ok(format!("https://bucket.local/{}?expires={}", key, expires_in.as_secs()))
    }
}

pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let image = image::RgbImage::from_fn(width, height, |x, y| image::Rgb([x as u8, y as u8, 90]));
    let mut bytes = Vec::new();
    image::DynamicImage::ImageRgb8(image)
        .write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Png)
        .unwrap();
    bytes
}
