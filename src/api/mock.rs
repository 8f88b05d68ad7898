use super::{ApiError, ApiErrorKind, ApiResult, NotesApi};
use crate::models::{FormDraft, Note};
use crate::state::LoadingIndicator;
use futures::channel::oneshot;
use std::cell::{Cell, RefCell};

/// In-memory notes server for exercising the view flows.
///
/// New notes are prepended so `list_notes` is newest-first, like the real API.
#[derive(Default)]
pub(crate) struct MockNotesApi {
    pub notes: RefCell<Vec<Note>>,
    pub created: RefCell<Vec<FormDraft>>,
    pub deleted: RefCell<Vec<String>>,
    pub list_calls: Cell<usize>,

    /// When set, `list_notes` parks until the test answers through
    /// `held_lists`, in whatever order it likes.
    pub hold_lists: Cell<bool>,
    pub held_lists: RefCell<Vec<oneshot::Sender<Vec<Note>>>>,

    /// When set, the next call fails with this kind (then the flag clears).
    pub fail_next: RefCell<Option<ApiErrorKind>>,

    /// Loading visibility sampled inside each call.
    pub loading: Option<LoadingIndicator>,
    pub loading_seen: RefCell<Vec<bool>>,

    next_id: Cell<u32>,
}

impl MockNotesApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_notes(notes: Vec<Note>) -> Self {
        Self {
            notes: RefCell::new(notes),
            ..Self::default()
        }
    }

    pub fn observing(mut self, loading: LoadingIndicator) -> Self {
        self.loading = Some(loading);
        self
    }

    pub fn fail_next(&self, kind: ApiErrorKind) {
        *self.fail_next.borrow_mut() = Some(kind);
    }

    fn enter(&self) -> ApiResult<()> {
        if let Some(loading) = &self.loading {
            self.loading_seen
                .borrow_mut()
                .push(loading.is_visible_untracked());
        }

        match self.fail_next.borrow_mut().take() {
            None => Ok(()),
            Some(ApiErrorKind::Http) => Err(ApiError::http(500, "", "Mock request failed")),
            Some(kind) => Err(ApiError {
                kind,
                status: None,
                message: "mock failure".to_string(),
            }),
        }
    }
}

pub(crate) fn note(id: &str, title: &str, body: &str) -> Note {
    Note {
        id: id.to_string(),
        title: title.to_string(),
        body: body.to_string(),
        created_at: "2024-01-01T00:00:00.000Z".to_string(),
    }
}

impl NotesApi for MockNotesApi {
    async fn list_notes(&self) -> ApiResult<Vec<Note>> {
        self.list_calls.set(self.list_calls.get() + 1);
        self.enter()?;

        if self.hold_lists.get() {
            let (tx, rx) = oneshot::channel();
            self.held_lists.borrow_mut().push(tx);
            return rx.await.map_err(|_| ApiError {
                kind: ApiErrorKind::Network,
                status: None,
                message: "held response dropped".to_string(),
            });
        }

        Ok(self.notes.borrow().clone())
    }

    async fn create_note(&self, draft: &FormDraft) -> ApiResult<()> {
        self.enter()?;
        self.created.borrow_mut().push(draft.clone());

        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        self.notes
            .borrow_mut()
            .insert(0, note(&format!("notes-{id}"), &draft.title, &draft.body));
        Ok(())
    }

    async fn delete_note(&self, id: &str) -> ApiResult<()> {
        self.enter()?;

        let mut notes = self.notes.borrow_mut();
        let before = notes.len();
        notes.retain(|n| n.id != id);
        if notes.len() == before {
            return Err(ApiError::http(
                404,
                r#"{"status":"fail","message":"Note is not found"}"#,
                "Deleting note failed",
            ));
        }

        self.deleted.borrow_mut().push(id.to_string());
        Ok(())
    }
}
