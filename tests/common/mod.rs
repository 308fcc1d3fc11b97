#![allow(dead_code)]

pub mod memory;

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use reqwest::Client;
use serde_json::{Value, json};

use rentdesk::config::Config;

/// A request as seen by the fake backend.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub query: HashMap<String, String>,
    pub body: Value,
}

/// Scripted state of the fake property-management backend.
#[derive(Default)]
pub struct BackendState {
    pub houses: Vec<Value>,
    pub tenants: Vec<Value>,
    pub complaints: Vec<Value>,
    pub rent_status: Vec<Value>,
    /// Answer collection requests as `{ "<key>": [...] }` instead of a bare array.
    pub wrap_lists: bool,
    /// Canned `(status, body)` answers per path, taking precedence over the defaults.
    pub overrides: HashMap<String, (u16, String)>,
    pub requests: Vec<Recorded>,
}

/// A fake backend listening on a random local port.
#[derive(Clone)]
pub struct FakeBackend {
    pub addr: SocketAddr,
    pub state: Arc<Mutex<BackendState>>,
}

impl FakeBackend {
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.state.lock().unwrap().requests.clone()
    }

    pub fn requests_to(&self, method: &str, path: &str) -> Vec<Recorded> {
        self.requests()
            .into_iter()
            .filter(|r| r.method == method && r.path == path)
            .collect()
    }

    pub fn clear_requests(&self) {
        self.state.lock().unwrap().requests.clear();
    }

    /// Make every request to `path` answer with `status` and a raw `body`.
    pub fn respond(&self, path: &str, status: u16, body: &str) {
        self.state
            .lock()
            .unwrap()
            .overrides
            .insert(path.to_string(), (status, body.to_string()));
    }

    pub fn wrap_lists(&self, wrap: bool) {
        self.state.lock().unwrap().wrap_lists = wrap;
    }
}

/// Two houses as the backend serialises them: every column stringified.
pub fn seed_houses() -> Vec<Value> {
    vec![
        json!({
            "id": "1", "address": "1 Elm St", "num_apartments": "4",
            "rent_price": "900.0", "vacant_apartments": "2", "landlord_id": "42"
        }),
        json!({
            "id": 2, "address": "2 Oak Ave", "num_apartments": 6,
            "rent_price": 1500, "vacant_apartments": 0, "landlord_id": 7
        }),
    ]
}

pub fn seed_complaints() -> Vec<Value> {
    vec![
        json!({
            "id": 11,
            "tenant_id": 5,
            "house_id": 1,
            "description": "Leaking tap",
            "status": "Pending"
        }),
        json!({
            "id": 12,
            "tenant_id": 6,
            "house_id": 2,
            "description": "Broken heater",
            "status": "pending"
        }),
    ]
}

pub async fn spawn_backend() -> FakeBackend {
    let state = Arc::new(Mutex::new(BackendState {
        houses: seed_houses(),
        tenants: vec![
            json!({ "id": 5, "name": "Ada", "house_id": 1 }),
            json!({ "id": 6, "name": "Grace", "house_id": "2" }),
            json!({ "id": 8, "name": "Linus", "house_id": "None" }),
        ],
        complaints: seed_complaints(),
        rent_status: vec![
            json!({ "tenantId": 5, "tenantName": "Ada", "rentPaid": true }),
            json!({ "tenantId": 6, "tenantName": "Grace", "rentPaid": "False" }),
        ],
        ..Default::default()
    }));

    let app = Router::new().fallback(handle).with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind fake backend");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Fake backend failed");
    });

    FakeBackend { addr, state }
}

fn list(state: &BackendState, key: &str, items: Vec<Value>) -> Response {
    if state.wrap_lists {
        let mut wrapped = serde_json::Map::new();
        wrapped.insert(key.to_string(), Value::Array(items));
        axum::Json(Value::Object(wrapped)).into_response()
    } else {
        axum::Json(Value::Array(items)).into_response()
    }
}

fn matches_id(record: &Value, field: &str, wanted: &str) -> bool {
    match &record[field] {
        Value::String(s) => s == wanted,
        Value::Number(n) => n.to_string() == wanted,
        _ => false,
    }
}

async fn handle(
    State(state): State<Arc<Mutex<BackendState>>>,
    method: Method,
    uri: Uri,
    body: Bytes,
) -> Response {
    let path = uri.path().to_string();
    let query: HashMap<String, String> = uri
        .query()
        .map(|q| form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default();
    let body: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);

    let mut s = state.lock().unwrap();
    s.requests.push(Recorded {
        method: method.to_string(),
        path: path.clone(),
        query: query.clone(),
        body: body.clone(),
    });

    if let Some((status, raw)) = s.overrides.get(&path) {
        return (StatusCode::from_u16(*status).unwrap(), raw.clone()).into_response();
    }

    match (method.as_str(), path.as_str()) {
        ("POST", "/login/landlord") => {
            axum::Json(json!({ "message": "Login successful", "landlordId": 42 })).into_response()
        }
        ("POST", "/login/tenant") => {
            axum::Json(json!({ "message": "Login successful", "token": "tenant-token-abc" }))
                .into_response()
        }
        ("POST", "/signup/landlord") | ("POST", "/signup/tenant") => (
            StatusCode::CREATED,
            axum::Json(json!({ "message": "Signed up successfully", "name": body["name"] })),
        )
            .into_response(),
        ("GET", "/houses") => {
            let houses = match query.get("landlord_id") {
                Some(id) => s
                    .houses
                    .iter()
                    .filter(|h| matches_id(h, "landlord_id", id))
                    .cloned()
                    .collect(),
                None => s.houses.clone(),
            };
            list(&s, "houses", houses)
        }
        ("POST", "/houses") => {
            let id = s.houses.len() + 1;
            let house = json!({
                "id": id,
                "address": body["address"],
                "num_apartments": body["num_apartments"],
                "rent_price": body["rent_price"],
                "vacant_apartments": body["num_apartments"],
                "landlord_id": body["landlord_id"],
            });
            s.houses.push(house.clone());
            (StatusCode::CREATED, axum::Json(house)).into_response()
        }
        // Ignores house_id; the dashboard narrows tenants itself.
        ("GET", "/tenants") => {
            let tenants = s.tenants.clone();
            list(&s, "tenants", tenants)
        }
        ("POST", "/tenants/move-in") => {
            let moved = json!({ "id": body["tenant_id"], "house_id": body["house_id"] });
            axum::Json(moved).into_response()
        }
        ("POST", "/tenants/move-out") => {
            axum::Json(json!({ "message": "Tenant moved out successfully" })).into_response()
        }
        ("POST", "/rent-payment") => {
            axum::Json(json!({ "message": "Payment recorded" })).into_response()
        }
        ("GET", "/rent-status") => {
            let statuses = s.rent_status.clone();
            list(&s, "rentStatus", statuses)
        }
        ("POST", "/complaints") => {
            let complaint = json!({
                "id": 100 + s.complaints.len(),
                "tenant_id": body["tenant_id"],
                "description": body["complaint"],
                "status": "Pending",
            });
            s.complaints.push(complaint.clone());
            (StatusCode::CREATED, axum::Json(complaint)).into_response()
        }
        ("GET", "/complaints") => {
            let complaints = match query.get("house_id") {
                Some(id) => s
                    .complaints
                    .iter()
                    .filter(|c| matches_id(c, "house_id", id))
                    .cloned()
                    .collect(),
                None => s.complaints.clone(),
            };
            list(&s, "complaints", complaints)
        }
        ("POST", "/complaints/status") => {
            let wanted = body["complaint_id"].to_string();
            let status = body["status"].clone();
            match s
                .complaints
                .iter_mut()
                .find(|c| matches_id(c, "id", &wanted))
            {
                Some(complaint) => {
                    complaint["status"] = status;
                    axum::Json(complaint.clone()).into_response()
                }
                None => (
                    StatusCode::NOT_FOUND,
                    axum::Json(json!({ "error": "Complaint not found" })),
                )
                    .into_response(),
            }
        }
        _ => (
            StatusCode::NOT_FOUND,
            axum::Json(json!({ "message": "Not found" })),
        )
            .into_response(),
    }
}

pub fn test_config(backend_url: &str) -> Config {
    Config {
        host: "127.0.0.1".parse().unwrap(),
        port: 0,
        backend_url: backend_url.to_string(),
        backend_timeout: Some(std::time::Duration::from_secs(5)),
        secure_cookies: false,
        log_level: "warn".to_string(),
    }
}

/// A running front end wired to its own fake backend.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
    pub backend: FakeBackend,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub async fn get(&self, path: &str, cookie: Option<&str>) -> reqwest::Response {
        let mut req = self.client.get(self.url(path));
        if let Some(cookie) = cookie {
            req = req.header("cookie", cookie);
        }
        req.send().await.expect("GET request failed")
    }

    /// POST an urlencoded form, the way a browser submits one.
    pub async fn post_form(
        &self,
        path: &str,
        fields: &[(&str, &str)],
        cookie: Option<&str>,
    ) -> reqwest::Response {
        let body = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(fields.iter())
            .finish();
        let mut req = self
            .client
            .post(self.url(path))
            .header("content-type", "application/x-www-form-urlencoded")
            .body(body);
        if let Some(cookie) = cookie {
            req = req.header("cookie", cookie);
        }
        req.send().await.expect("POST request failed")
    }
}

pub async fn spawn_app() -> TestApp {
    let backend = spawn_backend().await;
    let app = rentdesk::build_app(test_config(&backend.url())).expect("Failed to build app");

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    let client = Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();

    TestApp {
        addr,
        client,
        backend,
    }
}

/// Location header of a redirect response.
pub fn location(resp: &reqwest::Response) -> String {
    resp.headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

/// All `Set-Cookie` headers of a response.
pub fn set_cookies(resp: &reqwest::Response) -> Vec<String> {
    resp.headers()
        .get_all("set-cookie")
        .iter()
        .filter_map(|v| v.to_str().ok().map(str::to_string))
        .collect()
}
