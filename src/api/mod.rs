use crate::models::{FormDraft, Note};
use serde::{Deserialize, Serialize};

#[cfg(test)]
pub(crate) mod mock;

pub(crate) const DEFAULT_API_URL: &str = "https://notes-api.dicoding.dev/v2/notes";

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum ApiErrorKind {
    /// Transport failure: the request never produced a response.
    Network,
    /// The server answered with a non-success status.
    Http,
    Parse,
}

#[derive(Clone, Debug)]
pub(crate) struct ApiError {
    pub kind: ApiErrorKind,
    pub status: Option<u16>,
    pub message: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    fn network(e: reqwest::Error) -> Self {
        Self {
            kind: ApiErrorKind::Network,
            status: None,
            message: format!("Network error: {e}"),
        }
    }

    fn parse(e: impl std::fmt::Display) -> Self {
        Self {
            kind: ApiErrorKind::Parse,
            status: None,
            message: format!("Unexpected response: {e}"),
        }
    }

    pub(crate) fn http(status: u16, body: &str, ctx: &str) -> Self {
        // The notes API answers failures with `{ "status": "fail", "message": ... }`.
        let detail = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_string))
            .unwrap_or_else(|| body.trim().to_string());

        let message = if detail.is_empty() {
            format!("{ctx} ({status})")
        } else {
            format!("{ctx} ({status}): {detail}")
        };

        Self {
            kind: ApiErrorKind::Http,
            status: Some(status),
            message,
        }
    }

    /// One-line description for the console, prefixed with what was attempted.
    pub(crate) fn summary(&self, action: &str) -> String {
        match (&self.kind, self.status) {
            (ApiErrorKind::Network, _) => format!("{action}: server unreachable: {self}"),
            (ApiErrorKind::Http, Some(404)) => format!("{action}: not found: {self}"),
            (ApiErrorKind::Http, _) => format!("{action}: rejected by server: {self}"),
            (ApiErrorKind::Parse, _) => format!("{action}: {self}"),
        }
    }

    pub(crate) fn log(&self, action: &str) {
        log::error!("{}", self.summary(action));
    }
}

pub(crate) type ApiResult<T> = Result<T, ApiError>;

#[derive(Serialize, Deserialize, Clone, Debug)]
pub(crate) struct EnvConfig {
    pub api_url: String,
}

impl EnvConfig {
    pub fn new() -> Self {
        // Both `window.ENV.API_URL` and `window.ENV.api_url` are honoured.
        if let Some(window) = web_sys::window() {
            if let Some(env) = window.get("ENV") {
                if !env.is_undefined() && env.is_object() {
                    for key in ["API_URL", "api_url"] {
                        if let Ok(api_url) = js_sys::Reflect::get(&env, &key.into()) {
                            if let Some(url_str) = api_url.as_string() {
                                if !url_str.trim().is_empty() {
                                    return Self { api_url: url_str };
                                }
                            }
                        }
                    }
                }
            }
        }

        Self {
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Remote note storage, as seen by the views.
///
/// Each call is a single attempt; failures come back as [`ApiError`] and are
/// never retried here.
#[allow(async_fn_in_trait)]
pub(crate) trait NotesApi {
    async fn list_notes(&self) -> ApiResult<Vec<Note>>;
    async fn create_note(&self, draft: &FormDraft) -> ApiResult<()>;
    async fn delete_note(&self, id: &str) -> ApiResult<()>;
}

#[derive(Clone, Debug)]
pub(crate) struct ApiClient {
    pub(crate) base_url: String,
}

impl ApiClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_env() -> Self {
        Self::new(EnvConfig::new().api_url)
    }

    pub(crate) fn note_url(&self, id: &str) -> String {
        format!("{}/{}", self.base_url, urlencoding::encode(id))
    }

    async fn send(&self, req: reqwest::RequestBuilder, ctx: &str) -> ApiResult<reqwest::Response> {
        let res = req.send().await.map_err(ApiError::network)?;

        if res.status().is_success() {
            Ok(res)
        } else {
            let status = res.status().as_u16();
            let body = res.text().await.unwrap_or_default();
            Err(ApiError::http(status, &body, ctx))
        }
    }

    /// Accepts either a bare array or the `{ "data": [...] }` envelope.
    pub(crate) fn parse_note_list_response(data: serde_json::Value) -> ApiResult<Vec<Note>> {
        let list = match data {
            serde_json::Value::Array(_) => data,
            serde_json::Value::Object(mut map) => match map.remove("data") {
                Some(inner @ serde_json::Value::Array(_)) => inner,
                _ => return Err(ApiError::parse("missing `data` array")),
            },
            other => return Err(ApiError::parse(format!("expected note list, got {other}"))),
        };

        serde_json::from_value(list).map_err(ApiError::parse)
    }
}

impl NotesApi for ApiClient {
    async fn list_notes(&self) -> ApiResult<Vec<Note>> {
        let res = self
            .send(reqwest::Client::new().get(&self.base_url), "Fetching notes failed")
            .await?;
        let data: serde_json::Value = res.json().await.map_err(ApiError::parse)?;
        Self::parse_note_list_response(data)
    }

    async fn create_note(&self, draft: &FormDraft) -> ApiResult<()> {
        // `.json()` also sets `Content-Type: application/json`.
        self.send(
            reqwest::Client::new().post(&self.base_url).json(draft),
            "Adding note failed",
        )
        .await?;
        Ok(())
    }

    async fn delete_note(&self, id: &str) -> ApiResult<()> {
        self.send(reqwest::Client::new().delete(self.note_url(id)), "Deleting note failed")
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_client_new_trims_trailing_slash() {
        let client = ApiClient::new("http://localhost:3000/notes/".to_string());
        assert_eq!(client.base_url, "http://localhost:3000/notes");
    }

    #[test]
    fn test_note_url_appends_encoded_id() {
        let client = ApiClient::new(DEFAULT_API_URL.to_string());
        assert_eq!(
            client.note_url("notes-abc"),
            "https://notes-api.dicoding.dev/v2/notes/notes-abc"
        );
        assert_eq!(
            client.note_url("a b/c"),
            "https://notes-api.dicoding.dev/v2/notes/a%20b%2Fc"
        );
    }

    #[test]
    fn test_parse_note_list_accepts_bare_array() {
        let data = serde_json::json!([
            {"id": "n2", "title": "Second", "body": "second body", "createdAt": "2024-01-02T00:00:00.000Z"},
            {"id": "n1", "title": "First", "body": "first body", "createdAt": "2024-01-01T00:00:00.000Z"}
        ]);
        let notes = ApiClient::parse_note_list_response(data).expect("should parse");
        let ids: Vec<&str> = notes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["n2", "n1"]);
    }

    #[test]
    fn test_parse_note_list_accepts_data_envelope() {
        let data = serde_json::json!({
            "status": "success",
            "message": "Notes retrieved",
            "data": [
                {"id": "n1", "title": "First", "body": "first body", "createdAt": "2024-01-01T00:00:00.000Z", "archived": false}
            ]
        });
        let notes = ApiClient::parse_note_list_response(data).expect("should parse");
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].title, "First");
    }

    #[test]
    fn test_parse_note_list_rejects_other_shapes() {
        let err = ApiClient::parse_note_list_response(serde_json::json!({"status": "success"}))
            .expect_err("missing data should fail");
        assert_eq!(err.kind, ApiErrorKind::Parse);

        let err = ApiClient::parse_note_list_response(serde_json::json!("nope"))
            .expect_err("string should fail");
        assert_eq!(err.kind, ApiErrorKind::Parse);
    }

    #[test]
    fn test_http_error_uses_server_message() {
        let err = ApiError::http(
            404,
            r#"{"status":"fail","message":"Note is not found"}"#,
            "Deleting note failed",
        );
        assert_eq!(err.kind, ApiErrorKind::Http);
        assert_eq!(err.status, Some(404));
        assert_eq!(err.to_string(), "Deleting note failed (404): Note is not found");
    }

    #[test]
    fn test_summary_depends_on_kind() {
        let network = ApiError {
            kind: ApiErrorKind::Network,
            status: None,
            message: "Network error: connection refused".to_string(),
        };
        assert_eq!(
            network.summary("failed to fetch notes"),
            "failed to fetch notes: server unreachable: Network error: connection refused"
        );

        let missing = ApiError::http(404, "", "Deleting note failed");
        assert_eq!(
            missing.summary("failed to delete note"),
            "failed to delete note: not found: Deleting note failed (404)"
        );

        let rejected = ApiError::http(400, r#"{"message":"bad body"}"#, "Adding note failed");
        assert_eq!(
            rejected.summary("failed to add note"),
            "failed to add note: rejected by server: Adding note failed (400): bad body"
        );
    }

    #[test]
    fn test_http_error_without_body() {
        let err = ApiError::http(500, "", "Fetching notes failed");
        assert_eq!(err.to_string(), "Fetching notes failed (500)");
    }
}
