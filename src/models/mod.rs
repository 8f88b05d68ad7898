use serde::{Deserialize, Serialize};

/// A note as stored by the remote notes API.
///
/// The server owns `id` and `created_at`; the client only ever reads them.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Note {
    pub id: String,
    pub title: String,
    pub body: String,

    /// ISO-8601 timestamp assigned by the server.
    #[serde(rename = "createdAt", default)]
    pub created_at: String,
}

/// In-progress form input, before submission.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct FormDraft {
    pub title: String,
    pub body: String,
}

impl FormDraft {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}
