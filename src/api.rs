use anyhow::Context;
use reqwest::{header::CONTENT_TYPE, Method};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::models::{
    Coordinates, Map, MapDetail, MapId, NewMap, NewPoint, PointId, RenamePoint,
};

const NO_BODY: Option<&()> = None;

/// Thin JSON-over-HTTP client for the maps backend.
///
/// Every call sends `Content-Type: application/json` and parses the answer as
/// JSON whatever its status code. There is no retry and no timeout.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            http: reqwest::Client::new(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{endpoint}", self.base.trim_end_matches('/'))
    }

    /// Sends one request and returns the response body as a JSON value.
    ///
    /// A non-2xx answer with a JSON body comes back as if it were data; a
    /// body that isn't JSON is an error.
    pub async fn call<B>(&self, endpoint: &str, method: Method, body: Option<&B>) -> anyhow::Result<Value>
    where
        B: Serialize + ?Sized,
    {
        log::debug!("{method} {endpoint}");
        let mut request = self
            .http
            .request(method.clone(), self.url(endpoint))
            .header(CONTENT_TYPE, "application/json");
        if let Some(body) = body {
            let body = serde_json::to_string(body)
                .with_context(|| format!("{method} {endpoint}: could not encode body"))?;
            request = request.body(body);
        }

        let response = request
            .send()
            .await
            .with_context(|| format!("{method} {endpoint}: request failed"))?;
        let status = response.status();
        if !status.is_success() {
            log::warn!("{method} {endpoint} answered {status}");
        }
        response
            .json::<Value>()
            .await
            .with_context(|| format!("{method} {endpoint}: response ({status}) is not JSON"))
    }

    async fn fetch<T, B>(&self, endpoint: &str, method: Method, body: Option<&B>) -> anyhow::Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let value = self.call(endpoint, method.clone(), body).await?;
        serde_json::from_value(value)
            .with_context(|| format!("{method} {endpoint}: unexpected response shape"))
    }

    pub async fn list_maps(&self) -> anyhow::Result<Vec<Map>> {
        self.fetch("/mapas", Method::GET, NO_BODY).await
    }

    pub async fn create_map(&self, name: &str) -> anyhow::Result<()> {
        self.call("/mapas", Method::POST, Some(&NewMap { name }))
            .await
            .map(drop)
    }

    pub async fn map_detail(&self, id: MapId) -> anyhow::Result<MapDetail> {
        self.fetch(&format!("/mapas/{id}"), Method::GET, NO_BODY).await
    }

    pub async fn clear_points(&self, map: MapId) -> anyhow::Result<()> {
        self.call(&format!("/mapas/{map}/pontos"), Method::DELETE, NO_BODY)
            .await
            .map(drop)
    }

    pub async fn create_point(&self, map: MapId, name: &str, at: Coordinates) -> anyhow::Result<()> {
        let body = NewPoint {
            name,
            lat: at.lat,
            lng: at.lng,
            map_id: map,
        };
        self.call("/pontos", Method::POST, Some(&body)).await.map(drop)
    }

    pub async fn rename_point(&self, id: PointId, name: &str) -> anyhow::Result<()> {
        self.call(&format!("/pontos/{id}"), Method::PUT, Some(&RenamePoint { name }))
            .await
            .map(drop)
    }

    pub async fn delete_point(&self, id: PointId) -> anyhow::Result<()> {
        self.call(&format!("/pontos/{id}"), Method::DELETE, NO_BODY)
            .await
            .map(drop)
    }
}
