//! In-process stand-in for the two backends the client talks to: the
//! JSON-server collections and the authenticated `/api` service.
//!
//! Every request is recorded before it is handled, so tests can assert on
//! what went over the wire as well as on what came back.

use axum::{
    body::Body,
    extract::{Path, Query, Request, State},
    http::{header, HeaderMap, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, patch, post},
    Json, Router,
};
use client::{ApiClient, AuthApi, AuthService, DataService, MemoryStore, NotificationApi};
use serde_json::{json, Map, Value};
use shared_types::PaginatedResponse;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

/// Collections served by the mock JSON-server.
pub const COLLECTIONS: &[&str] = &[
    "offers",
    "scholarships",
    "financements",
    "consultations",
    "applications",
    "notifications",
    "blog",
];

pub const PASSWORD: &str = "secret1";

/// A request as the server saw it.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub authorization: Option<String>,
    pub body: Option<Value>,
}

impl RecordedRequest {
    pub fn param(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn params(&self, key: &str) -> Vec<&str> {
        self.query
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }
}

#[derive(Default)]
struct Db {
    collections: HashMap<String, Vec<Value>>,
    users: Vec<(String, Value)>,
    api_notifications: Vec<Value>,
    requests: Vec<RecordedRequest>,
    canned: Option<(StatusCode, String)>,
    next_id: u64,
}

impl Db {
    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

#[derive(Clone, Default)]
pub struct MockState(Arc<Mutex<Db>>);

impl MockState {
    fn db(&self) -> MutexGuard<'_, Db> {
        self.0.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Replace the content of a collection.
    pub fn seed(&self, collection: &str, items: Vec<Value>) {
        self.db().collections.insert(collection.to_string(), items);
    }

    pub fn items(&self, collection: &str) -> Vec<Value> {
        self.db()
            .collections
            .get(collection)
            .cloned()
            .unwrap_or_default()
    }

    /// Register an account for the auth endpoints. Its token is `token-<id>`.
    pub fn add_user(&self, id: u64, email: &str, role: &str) {
        let user = json!({
            "id": id,
            "email": email,
            "firstName": "Awa",
            "lastName": "Diallo",
            "role": role,
        });
        self.db().users.push((email.to_string(), user));
    }

    pub fn seed_api_notifications(&self, items: Vec<Value>) {
        self.db().api_notifications = items;
    }

    pub fn api_notifications(&self) -> Vec<Value> {
        self.db().api_notifications.clone()
    }

    /// Answer the next request with `status` and a raw `body`, whatever it is.
    pub fn respond_next(&self, status: StatusCode, body: &str) {
        self.db().canned = Some((status, body.to_string()));
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.db().requests.clone()
    }

    pub fn request_count(&self) -> usize {
        self.db().requests.len()
    }

    pub fn last_request(&self) -> RecordedRequest {
        self.db()
            .requests
            .last()
            .cloned()
            .expect("no request was recorded")
    }

    fn user_for_token(&self, headers: &HeaderMap) -> Option<Value> {
        let token = headers
            .get(header::AUTHORIZATION)?
            .to_str()
            .ok()?
            .strip_prefix("Bearer ")?
            .to_string();
        self.db()
            .users
            .iter()
            .map(|(_, user)| user)
            .find(|user| format!("token-{}", user["id"]) == token)
            .cloned()
    }
}

/// A running mock server.
pub struct TestServer {
    pub base_url: String,
    pub state: MockState,
}

impl TestServer {
    pub fn api(&self) -> ApiClient {
        ApiClient::new(self.base_url.clone())
    }

    pub fn data(&self) -> DataService {
        DataService::new(self.api())
    }

    pub fn auth_service(&self, store: Arc<MemoryStore>) -> AuthService {
        AuthService::new(AuthApi::new(self.api()), store)
    }

    pub fn notifications(&self, token: &str) -> NotificationApi {
        NotificationApi::for_token(&self.api(), token)
    }
}

/// Start a mock server on an ephemeral port with every collection empty.
pub async fn start_server() -> TestServer {
    client::telemetry::init_logging();

    let state = MockState::default();
    for name in COLLECTIONS {
        state.seed(name, Vec::new());
    }

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Failed to read local addr");
    let app = router(state.clone());
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("mock server stopped");
    });

    TestServer {
        base_url: format!("http://{addr}"),
        state,
    }
}

/// A base URL nothing listens on.
pub async fn unreachable_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Failed to read local addr");
    drop(listener);
    format!("http://{addr}")
}

fn router(state: MockState) -> Router {
    Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/auth/register", post(register))
        .route("/api/auth/me", get(me))
        .route("/api/notifications", get(api_list_notifications))
        .route("/api/notifications/unread-count", get(api_unread_count))
        .route("/api/notifications/read-all", patch(api_mark_all_read))
        .route(
            "/api/notifications/preferences",
            get(api_preferences).put(api_update_preferences),
        )
        .route("/api/notifications/{id}/read", patch(api_mark_read))
        .route(
            "/api/notifications/{id}",
            axum::routing::delete(api_delete_notification),
        )
        .route("/{collection}", get(list_items).post(create_item))
        .route(
            "/{collection}/{id}",
            get(get_item)
                .put(replace_item)
                .patch(patch_item)
                .delete(delete_item),
        )
        .layer(middleware::from_fn_with_state(state.clone(), record))
        .with_state(state)
}

async fn record(State(state): State<MockState>, req: Request, next: Next) -> Response {
    let (parts, body) = req.into_parts();
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .unwrap_or_default();
    let query = Query::<Vec<(String, String)>>::try_from_uri(&parts.uri)
        .map(|Query(q)| q)
        .unwrap_or_default();

    let canned = {
        let mut db = state.db();
        db.requests.push(RecordedRequest {
            method: parts.method.to_string(),
            path: parts.uri.path().to_string(),
            query,
            authorization: parts
                .headers
                .get(header::AUTHORIZATION)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string),
            body: serde_json::from_slice(&bytes).ok(),
        });
        db.canned.take()
    };

    if let Some((status, body)) = canned {
        return (status, body).into_response();
    }
    next.run(Request::from_parts(parts, Body::from(bytes))).await
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Json(json!({}))).into_response()
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "message": "Token invalide ou expiré" })),
    )
        .into_response()
}

fn as_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn same_id(item: &Value, id: &str) -> bool {
    as_text(&item["id"]) == id
}

/// JSON-server query semantics: equality filters (repeated keys are OR-ed),
/// `<field>_like` substring match, `_sort`/`_order`, `_page`/`_limit`.
fn apply_query(mut items: Vec<Value>, params: &[(String, String)]) -> Vec<Value> {
    let mut equals: HashMap<&str, Vec<&str>> = HashMap::new();
    let mut likes = Vec::new();
    let mut sort = None;
    let mut descending = false;
    let mut page = None;
    let mut limit = None;

    for (key, value) in params {
        match key.as_str() {
            "_sort" => sort = Some(value.as_str()),
            "_order" => descending = value == "desc",
            "_page" => page = value.parse::<usize>().ok(),
            "_limit" => limit = value.parse::<usize>().ok(),
            k if k.ends_with("_like") => likes.push((k.trim_end_matches("_like"), value)),
            k => equals.entry(k).or_default().push(value.as_str()),
        }
    }

    items.retain(|item| {
        equals
            .iter()
            .all(|(field, wanted)| wanted.contains(&as_text(&item[*field]).as_str()))
            && likes.iter().all(|(field, needle)| {
                as_text(&item[*field])
                    .to_lowercase()
                    .contains(&needle.to_lowercase())
            })
    });

    if let Some(field) = sort {
        items.sort_by(|a, b| as_text(&a[field]).cmp(&as_text(&b[field])));
        if descending {
            items.reverse();
        }
    }

    match (page, limit) {
        (Some(page), Some(limit)) => items
            .into_iter()
            .skip(page.saturating_sub(1) * limit)
            .take(limit)
            .collect(),
        (None, Some(limit)) => items.into_iter().take(limit).collect(),
        _ => items,
    }
}

// ── JSON-server collections ──

async fn list_items(
    State(state): State<MockState>,
    Path(collection): Path<String>,
    Query(params): Query<Vec<(String, String)>>,
) -> Response {
    let Some(items) = state.db().collections.get(&collection).cloned() else {
        return not_found();
    };
    Json(apply_query(items, &params)).into_response()
}

async fn get_item(
    State(state): State<MockState>,
    Path((collection, id)): Path<(String, String)>,
) -> Response {
    let db = state.db();
    match db
        .collections
        .get(&collection)
        .and_then(|items| items.iter().find(|item| same_id(item, &id)))
    {
        Some(item) => Json(item.clone()).into_response(),
        None => not_found(),
    }
}

async fn create_item(
    State(state): State<MockState>,
    Path(collection): Path<String>,
    Json(mut body): Json<Value>,
) -> Response {
    let mut db = state.db();
    if !db.collections.contains_key(&collection) {
        return not_found();
    }
    let missing_id = body
        .get("id")
        .map(|id| as_text(id).is_empty())
        .unwrap_or(true);
    if missing_id {
        let id = db.next_id();
        if let Some(obj) = body.as_object_mut() {
            obj.insert("id".to_string(), json!(id));
        }
    }
    db.collections
        .entry(collection)
        .or_default()
        .push(body.clone());
    (StatusCode::CREATED, Json(body)).into_response()
}

async fn replace_item(
    State(state): State<MockState>,
    Path((collection, id)): Path<(String, String)>,
    Json(mut body): Json<Value>,
) -> Response {
    let mut db = state.db();
    let Some(item) = db
        .collections
        .get_mut(&collection)
        .and_then(|items| items.iter_mut().find(|item| same_id(item, &id)))
    else {
        return not_found();
    };
    if let Some(obj) = body.as_object_mut() {
        obj.insert("id".to_string(), item["id"].clone());
    }
    *item = body.clone();
    Json(body).into_response()
}

async fn patch_item(
    State(state): State<MockState>,
    Path((collection, id)): Path<(String, String)>,
    Json(body): Json<Map<String, Value>>,
) -> Response {
    let mut db = state.db();
    let Some(item) = db
        .collections
        .get_mut(&collection)
        .and_then(|items| items.iter_mut().find(|item| same_id(item, &id)))
    else {
        return not_found();
    };
    if let Some(obj) = item.as_object_mut() {
        obj.extend(body);
    }
    Json(item.clone()).into_response()
}

async fn delete_item(
    State(state): State<MockState>,
    Path((collection, id)): Path<(String, String)>,
) -> Response {
    let mut db = state.db();
    let Some(items) = db.collections.get_mut(&collection) else {
        return not_found();
    };
    let before = items.len();
    items.retain(|item| !same_id(item, &id));
    if items.len() == before {
        return not_found();
    }
    Json(json!({})).into_response()
}

// ── Authentication ──

async fn login(State(state): State<MockState>, Json(body): Json<Value>) -> Response {
    let email = as_text(&body["email"]);
    let password = as_text(&body["password"]);
    let user = state
        .db()
        .users
        .iter()
        .find(|(e, _)| *e == email)
        .map(|(_, user)| user.clone());

    match user {
        Some(user) if password == PASSWORD => {
            Json(json!({ "token": format!("token-{}", user["id"]), "user": user }))
                .into_response()
        }
        _ => (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "Email ou mot de passe incorrect" })),
        )
            .into_response(),
    }
}

async fn register(State(state): State<MockState>, Json(body): Json<Value>) -> Response {
    let email = as_text(&body["email"]);
    let mut db = state.db();
    if db.users.iter().any(|(e, _)| *e == email) {
        return (
            StatusCode::CONFLICT,
            Json(json!({ "message": "Cet email est déjà utilisé" })),
        )
            .into_response();
    }
    let id = 100 + db.next_id();
    let mut user = json!({
        "id": id,
        "email": email,
        "firstName": body["firstName"],
        "lastName": body["lastName"],
        "role": body["role"],
    });
    if let (Some(company), Some(obj)) = (body.get("company"), user.as_object_mut()) {
        obj.insert("company".to_string(), company.clone());
    }
    db.users.push((email, user.clone()));
    (
        StatusCode::CREATED,
        Json(json!({ "accessToken": format!("token-{id}"), "user": user })),
    )
        .into_response()
}

async fn me(State(state): State<MockState>, headers: HeaderMap) -> Response {
    match state.user_for_token(&headers) {
        Some(user) => Json(user).into_response(),
        None => unauthorized(),
    }
}

// ── Notification API ──

fn owned_by(item: &Value, user: &Value) -> bool {
    as_text(&item["userId"]) == as_text(&user["id"])
}

async fn api_list_notifications(
    State(state): State<MockState>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let Some(user) = state.user_for_token(&headers) else {
        return unauthorized();
    };
    let page: usize = params.get("page").and_then(|p| p.parse().ok()).unwrap_or(1);
    let limit: usize = params.get("limit").and_then(|l| l.parse().ok()).unwrap_or(20);
    let unread_only = params.get("unread").map(|u| u == "true").unwrap_or(false);

    let mine: Vec<Value> = state
        .api_notifications()
        .into_iter()
        .filter(|n| owned_by(n, &user))
        .filter(|n| !unread_only || !n["read"].as_bool().unwrap_or(false))
        .collect();
    let total = mine.len();
    let data: Vec<Value> = mine
        .into_iter()
        .skip(page.saturating_sub(1) * limit)
        .take(limit)
        .collect();

    Json(PaginatedResponse::new(data, page as i64, limit as i64, total as i64)).into_response()
}

async fn api_unread_count(State(state): State<MockState>, headers: HeaderMap) -> Response {
    let Some(user) = state.user_for_token(&headers) else {
        return unauthorized();
    };
    let count = state
        .api_notifications()
        .iter()
        .filter(|n| owned_by(n, &user) && !n["read"].as_bool().unwrap_or(false))
        .count();
    Json(json!({ "unreadCount": count })).into_response()
}

async fn api_mark_read(
    State(state): State<MockState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    let Some(user) = state.user_for_token(&headers) else {
        return unauthorized();
    };
    let mut db = state.db();
    match db
        .api_notifications
        .iter_mut()
        .find(|n| same_id(n, &id) && owned_by(n, &user))
    {
        Some(n) => {
            n["read"] = json!(true);
            StatusCode::NO_CONTENT.into_response()
        }
        None => not_found(),
    }
}

async fn api_mark_all_read(State(state): State<MockState>, headers: HeaderMap) -> Response {
    let Some(user) = state.user_for_token(&headers) else {
        return unauthorized();
    };
    for n in state
        .db()
        .api_notifications
        .iter_mut()
        .filter(|n| owned_by(n, &user))
    {
        n["read"] = json!(true);
    }
    StatusCode::NO_CONTENT.into_response()
}

async fn api_delete_notification(
    State(state): State<MockState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    let Some(user) = state.user_for_token(&headers) else {
        return unauthorized();
    };
    let mut db = state.db();
    let before = db.api_notifications.len();
    db.api_notifications
        .retain(|n| !(same_id(n, &id) && owned_by(n, &user)));
    if db.api_notifications.len() == before {
        return not_found();
    }
    StatusCode::NO_CONTENT.into_response()
}

async fn api_preferences(State(state): State<MockState>, headers: HeaderMap) -> Response {
    if state.user_for_token(&headers).is_none() {
        return unauthorized();
    }
    Json(json!({ "email": true, "push": false, "newOffers": true })).into_response()
}

async fn api_update_preferences(
    State(state): State<MockState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if state.user_for_token(&headers).is_none() {
        return unauthorized();
    }
    Json(body).into_response()
}

// ── Fixtures ──

pub fn offer(id: u64, title: &str, recruiter: u64, active: bool, created_at: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "company": "Sonatel",
        "location": "Dakar",
        "sector": "Télécoms",
        "contractType": "CDI",
        "salary": "600 000 FCFA",
        "description": "Poste basé à Dakar.",
        "requirements": ["Bac+3"],
        "deadline": "2099-12-31",
        "recruiterId": recruiter,
        "isActive": active,
        "createdAt": created_at,
    })
}

pub fn listing(id: u64, title: &str, recruiter: u64) -> Value {
    json!({
        "id": id,
        "title": title,
        "organization": "Fondation Orange",
        "client": "Ministère de l'Économie",
        "description": "Programme régional.",
        "recruiterId": recruiter,
        "isActive": true,
        "createdAt": "2026-03-01T09:00:00Z",
    })
}

pub fn application(
    id: u64,
    user: u64,
    opportunity: u64,
    kind: &str,
    status: &str,
    created_at: &str,
) -> Value {
    json!({
        "id": id,
        "userId": user,
        "opportunityId": opportunity,
        "opportunityType": kind,
        "coverLetter": "Je souhaite rejoindre votre équipe.",
        "status": status,
        "createdAt": created_at,
    })
}

pub fn notification(id: u64, user: u64, read: bool, created_at: &str) -> Value {
    json!({
        "id": id,
        "userId": user,
        "title": format!("Notification {id}"),
        "message": "Votre candidature a été examinée.",
        "type": "application",
        "read": read,
        "link": "/candidat/candidatures",
        "createdAt": created_at,
    })
}
