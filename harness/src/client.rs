//! REST client for one Bookstore collection
//!
//! Translates logical CRUD intents into HTTP calls against the configured
//! base URL. No assertions here; every HTTP outcome, 2xx or not, is returned
//! as data for the caller to interpret. Only a transport failure is an error.

use std::collections::HashMap;
use std::fmt;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::Serialize;
use serde_json::Value;

use shared::{HarnessConfig, HarnessResult};

/// Characters that cannot appear raw in a URL path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'/');

/// Identifier carried into the request path as-is.
///
/// Numeric and non-numeric ids are both accepted; the client never validates
/// them. Rejection of a nonsense id must come from the server.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResourceId(String);

impl ResourceId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<i64> for ResourceId {
    fn from(id: i64) -> Self {
        Self(id.to_string())
    }
}

impl From<&str> for ResourceId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Request body for a mutating call.
#[derive(Clone, Debug)]
pub enum Payload {
    /// Well-formed resource JSON
    Resource(Value),
    /// Arbitrary text sent verbatim (malformed JSON, empty body)
    Raw(String),
}

impl Payload {
    /// Build a structured payload from any serializable resource.
    pub fn resource<T: Serialize>(resource: &T) -> Self {
        Self::Resource(serde_json::to_value(resource).expect("resource types serialize to JSON"))
    }

    /// Carry a body verbatim, without any client-side validation.
    pub fn raw(body: impl Into<String>) -> Self {
        Self::Raw(body.into())
    }

    fn body_string(&self) -> String {
        match self {
            Payload::Resource(value) => value.to_string(),
            Payload::Raw(body) => body.clone(),
        }
    }
}

/// Raw HTTP outcome of one call: status, headers and body, unexamined.
#[derive(Clone, Debug)]
pub struct ApiResponse {
    pub status: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
}

impl ApiResponse {
    /// Lenient JSON view of the body.
    pub fn json(&self) -> Option<Value> {
        serde_json::from_str(&self.body).ok()
    }

    /// Top-level field lookup on a JSON object body.
    pub fn field(&self, name: &str) -> Option<Value> {
        self.json().and_then(|value| value.get(name).cloned())
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// CRUD request issuer for one resource collection.
#[derive(Clone)]
pub struct ResourceClient {
    collection_url: String,
    client: reqwest::Client,
}

impl ResourceClient {
    /// Create a client for an arbitrary collection path.
    pub fn new(config: &HarnessConfig, collection_path: &str) -> Self {
        let base = config.base_url.as_str().trim_end_matches('/').to_string();
        let collection_url = format!("{}{}", base, collection_path);

        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { collection_url, client }
    }

    /// Client for the Authors collection
    pub fn authors(config: &HarnessConfig) -> Self {
        Self::new(config, "/api/v1/Authors")
    }

    /// Client for the Books collection
    pub fn books(config: &HarnessConfig) -> Self {
        Self::new(config, "/api/v1/Books")
    }

    /// GET the whole collection.
    pub async fn list_all(&self) -> HarnessResult<ApiResponse> {
        tracing::debug!("GET {}", self.collection_url);
        let response = self.client.get(&self.collection_url).send().await?;
        Self::into_api_response(response).await
    }

    /// GET a single item by id.
    pub async fn get_by_id(&self, id: &ResourceId) -> HarnessResult<ApiResponse> {
        let url = self.item_url(id);
        tracing::debug!("GET {}", url);
        let response = self.client.get(&url).send().await?;
        Self::into_api_response(response).await
    }

    /// POST a new item.
    pub async fn create(&self, payload: &Payload) -> HarnessResult<ApiResponse> {
        tracing::debug!("POST {}", self.collection_url);
        let response = self
            .client
            .post(&self.collection_url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(payload.body_string())
            .send()
            .await?;
        Self::into_api_response(response).await
    }

    /// PUT an existing item by id.
    pub async fn update(&self, id: &ResourceId, payload: &Payload) -> HarnessResult<ApiResponse> {
        let url = self.item_url(id);
        tracing::debug!("PUT {}", url);
        let response = self
            .client
            .put(&url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(payload.body_string())
            .send()
            .await?;
        Self::into_api_response(response).await
    }

    /// DELETE an item by id.
    pub async fn delete(&self, id: &ResourceId) -> HarnessResult<ApiResponse> {
        let url = self.item_url(id);
        tracing::debug!("DELETE {}", url);
        let response = self.client.delete(&url).send().await?;
        Self::into_api_response(response).await
    }

    pub(crate) fn item_url(&self, id: &ResourceId) -> String {
        // Escape so that ids like "!@#%" survive URL parsing and reach the
        // server as the intended path segment.
        let segment = utf8_percent_encode(id.as_str(), PATH_SEGMENT);
        format!("{}/{}", self.collection_url, segment)
    }

    async fn into_api_response(response: reqwest::Response) -> HarnessResult<ApiResponse> {
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(key, value)| {
                (
                    key.as_str().to_string(),
                    String::from_utf8_lossy(value.as_bytes()).to_string(),
                )
            })
            .collect();
        let body = response.text().await?;

        Ok(ApiResponse { status, headers, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Book;

    fn test_client() -> ResourceClient {
        let config = HarnessConfig::from_base_url("http://localhost:3000").unwrap();
        ResourceClient::books(&config)
    }

    #[test]
    fn item_url_joins_numeric_ids() {
        let client = test_client();
        let url = client.item_url(&ResourceId::from(101));
        assert_eq!(url, "http://localhost:3000/api/v1/Books/101");
    }

    #[test]
    fn item_url_escapes_special_characters() {
        let client = test_client();
        let url = client.item_url(&ResourceId::from("!@#%"));
        assert_eq!(url, "http://localhost:3000/api/v1/Books/!@%23%25");
    }

    #[test]
    fn structured_payload_renders_as_json() {
        let book = Book::new(101, Some("Title"), None, Some(200), None, None);
        let payload = Payload::resource(&book);
        let body = payload.body_string();

        let value: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["id"], 101);
        assert_eq!(value["title"], "Title");
    }

    #[test]
    fn raw_payload_is_sent_verbatim() {
        let payload = Payload::raw("{\"id\":, \"title\":\"Missing value\"");
        assert_eq!(payload.body_string(), "{\"id\":, \"title\":\"Missing value\"");
    }

    #[test]
    fn response_header_lookup_is_case_insensitive() {
        let mut headers = HashMap::new();
        headers.insert("content-type".to_string(), "application/json; charset=utf-8".to_string());
        let response = ApiResponse { status: 200, headers, body: "[]".to_string() };

        assert!(response.header("Content-Type").unwrap().contains("application/json"));
    }
}
