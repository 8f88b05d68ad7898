pub(crate) mod form;
mod loading;
pub(crate) mod notes;

pub(crate) use form::{submit_note, NoteFormState};
pub(crate) use loading::LoadingIndicator;
pub(crate) use notes::{delete_note, refresh_notes, NoteListState, NotesEvents};

use crate::api::ApiClient;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub(crate) struct AppState {
    pub api_client: StoredValue<ApiClient>,

    /// Shared by every view that talks to the API.
    pub loading: LoadingIndicator,

    pub notes: NoteListState,
    pub form: NoteFormState,
    pub events: NotesEvents,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_client(ApiClient::from_env())
    }

    pub fn with_client(api_client: ApiClient) -> Self {
        Self {
            api_client: StoredValue::new(api_client),
            loading: LoadingIndicator::new(),
            notes: NoteListState::new(),
            form: NoteFormState::new(),
            events: NotesEvents::new(),
        }
    }

    pub fn api(&self) -> ApiClient {
        self.api_client.get_value()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Copy)]
pub(crate) struct AppContext(pub AppState);
