//! In-process stand-in for the maps REST backend, used by the async tests.

use std::{
    net::SocketAddr,
    sync::{Arc, Mutex, MutexGuard},
};

use axum::{
    extract::{Path, State},
    http::{header::CONTENT_TYPE, HeaderMap, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{any, delete, get, post, put},
    Json, Router,
};
use serde_json::{json, Value};

use crate::{
    api::ApiClient,
    models::{MapId, PointId},
};

const CREATED_AT: &str = "Tue, 14 Nov 2023 10:00:00 GMT";

struct StoredMap {
    id: MapId,
    name: String,
}

struct StoredPoint {
    id: PointId,
    name: String,
    lat: f64,
    lng: f64,
    map: MapId,
}

#[derive(Default)]
pub struct Store {
    maps: Vec<StoredMap>,
    points: Vec<StoredPoint>,
    next_id: u64,
    calls: Vec<String>,
    reads_fail: bool,
}

impl Store {
    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    fn record(&mut self, call: String) {
        self.calls.push(call);
    }

    fn point_json(point: &StoredPoint) -> Value {
        // Decimal columns come back as strings.
        json!({
            "id": point.id,
            "nome": point.name,
            "latitude": format!("{:.6}", point.lat),
            "longitude": format!("{:.6}", point.lng),
            "mapa_id": point.map,
        })
    }
}

type Shared = Arc<Mutex<Store>>;

pub struct FakeBackend {
    pub api: ApiClient,
    store: Shared,
}

impl FakeBackend {
    pub async fn start() -> Self {
        let store = Shared::default();
        let app = Router::new()
            .route("/api/mapas", get(list_maps).post(create_map))
            .route("/api/mapas/:id", get(map_detail))
            .route("/api/mapas/:id/pontos", delete(clear_points))
            .route("/api/pontos", post(create_point))
            .route("/api/pontos/:id", put(rename_point).delete(delete_point))
            .route("/api/echo", any(echo))
            .route("/api/missing", get(missing))
            .route("/api/broken", get(broken))
            .with_state(store.clone());

        let addr: SocketAddr = ([127, 0, 0, 1], 0).into();
        let server = axum::Server::bind(&addr).serve(app.into_make_service());
        let addr = server.local_addr();
        tokio::spawn(server);

        Self {
            api: ApiClient::new(format!("http://{addr}/api")),
            store,
        }
    }

    fn store(&self) -> MutexGuard<'_, Store> {
        self.store.lock().unwrap()
    }

    pub fn seed_map(&self, name: &str) -> MapId {
        let mut store = self.store();
        let id = store.next_id();
        store.maps.push(StoredMap {
            id,
            name: name.to_string(),
        });
        id
    }

    pub fn seed_point(&self, map: MapId, name: &str, lat: f64, lng: f64) -> PointId {
        let mut store = self.store();
        let id = store.next_id();
        store.points.push(StoredPoint {
            id,
            name: name.to_string(),
            lat,
            lng,
            map,
        });
        id
    }

    /// Every request seen so far, as `"METHOD /path"` without the `/api` prefix.
    pub fn calls(&self) -> Vec<String> {
        self.store().calls.clone()
    }

    pub fn forget_calls(&self) {
        self.store().calls.clear();
    }

    /// From now on `GET /mapas` and `GET /mapas/{id}` answer 500 with a plain
    /// text body. Writes keep working.
    pub fn fail_reads(&self) {
        self.store().reads_fail = true;
    }

    pub fn map_names(&self) -> Vec<String> {
        self.store().maps.iter().map(|map| map.name.clone()).collect()
    }

    pub fn point_names(&self, map: MapId) -> Vec<String> {
        self.store()
            .points
            .iter()
            .filter(|p| p.map == map)
            .map(|p| p.name.clone())
            .collect()
    }
}

fn read_failure() -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
}

async fn list_maps(State(store): State<Shared>) -> Response {
    let mut store = store.lock().unwrap();
    store.record("GET /mapas".into());
    if store.reads_fail {
        return read_failure();
    }
    let maps = store
        .maps
        .iter()
        .map(|map| {
            let count = store.points.iter().filter(|p| p.map == map.id).count();
            json!({
                "id": map.id,
                "nome": map.name,
                "data_criacao": CREATED_AT,
                "totalPontos": count,
            })
        })
        .collect();
    Json(Value::Array(maps)).into_response()
}

async fn create_map(State(store): State<Shared>, Json(body): Json<Value>) -> impl IntoResponse {
    let mut store = store.lock().unwrap();
    store.record("POST /mapas".into());
    let id = store.next_id();
    let name = body["nome"].as_str().unwrap_or_default().to_string();
    store.maps.push(StoredMap { id, name });
    (StatusCode::CREATED, Json(json!({"id": id, "status": "sucesso"})))
}

async fn map_detail(State(store): State<Shared>, Path(id): Path<MapId>) -> Response {
    let mut store = store.lock().unwrap();
    store.record(format!("GET /mapas/{id}"));
    if store.reads_fail {
        return read_failure();
    }
    let map = store
        .maps
        .iter()
        .find(|map| map.id == id)
        .map(|map| json!({"id": map.id, "nome": map.name, "data_criacao": CREATED_AT}))
        .unwrap_or(Value::Null);
    let points: Vec<Value> = store
        .points
        .iter()
        .filter(|p| p.map == id)
        .map(Store::point_json)
        .collect();
    Json(json!({"mapa": map, "pontos": points})).into_response()
}

async fn clear_points(State(store): State<Shared>, Path(id): Path<MapId>) -> Json<Value> {
    let mut store = store.lock().unwrap();
    store.record(format!("DELETE /mapas/{id}/pontos"));
    store.points.retain(|p| p.map != id);
    Json(json!({"status": "todos excluidos"}))
}

async fn create_point(State(store): State<Shared>, Json(body): Json<Value>) -> impl IntoResponse {
    let mut store = store.lock().unwrap();
    store.record("POST /pontos".into());
    let id = store.next_id();
    store.points.push(StoredPoint {
        id,
        name: body["nome"].as_str().unwrap_or_default().to_string(),
        lat: body["lat"].as_f64().unwrap_or_default(),
        lng: body["lng"].as_f64().unwrap_or_default(),
        map: body["mapa_id"].as_u64().unwrap_or_default(),
    });
    (StatusCode::CREATED, Json(json!({"status": "sucesso"})))
}

async fn rename_point(
    State(store): State<Shared>,
    Path(id): Path<PointId>,
    Json(body): Json<Value>,
) -> Json<Value> {
    let mut store = store.lock().unwrap();
    store.record(format!("PUT /pontos/{id}"));
    let name = body["nome"].as_str().unwrap_or_default().to_string();
    if let Some(point) = store.points.iter_mut().find(|p| p.id == id) {
        point.name = name;
    }
    Json(json!({"status": "atualizado"}))
}

async fn delete_point(State(store): State<Shared>, Path(id): Path<PointId>) -> Json<Value> {
    let mut store = store.lock().unwrap();
    store.record(format!("DELETE /pontos/{id}"));
    store.points.retain(|p| p.id != id);
    Json(json!({"status": "excluido"}))
}

async fn echo(method: Method, headers: HeaderMap, body: String) -> Json<Value> {
    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    Json(json!({
        "method": method.as_str(),
        "content_type": content_type,
        "body": body,
    }))
}

async fn missing() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(json!({"error": "not found"})))
}

async fn broken() -> impl IntoResponse {
    (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
}
