use crate::api::{ApiError, NotesApi};
use crate::models::FormDraft;
use crate::state::{LoadingIndicator, NotesEvents};
use leptos::prelude::*;

pub(crate) const TITLE_MIN_CHARS: usize = 3;
pub(crate) const BODY_MIN_CHARS: usize = 10;

pub(crate) const TITLE_TOO_SHORT: &str = "Title must be at least 3 characters.";
pub(crate) const BODY_TOO_SHORT: &str = "Note must be at least 10 characters.";

/// Length as the browser reports it for form input (UTF-16 code units).
fn input_len(value: &str) -> usize {
    value.encode_utf16().count()
}

pub(crate) fn title_error(title: &str) -> Option<&'static str> {
    (input_len(title) < TITLE_MIN_CHARS).then_some(TITLE_TOO_SHORT)
}

pub(crate) fn body_error(body: &str) -> Option<&'static str> {
    (input_len(body) < BODY_MIN_CHARS).then_some(BODY_TOO_SHORT)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum FormPhase {
    Idle,
    Submitting,
}

#[derive(Debug)]
pub(crate) enum SubmitOutcome {
    /// Validation failed at click time; nothing was sent.
    Invalid,
    /// A previous submission has not settled yet.
    Busy,
    Created,
    Failed(ApiError),
}

/// Input fields and validation messages of the note form.
#[derive(Clone, Copy, Debug)]
pub(crate) struct NoteFormState {
    pub title: RwSignal<String>,
    pub body: RwSignal<String>,
    pub title_error: RwSignal<Option<&'static str>>,
    pub body_error: RwSignal<Option<&'static str>>,
    pub phase: RwSignal<FormPhase>,
}

impl NoteFormState {
    pub fn new() -> Self {
        Self {
            title: RwSignal::new(String::new()),
            body: RwSignal::new(String::new()),
            title_error: RwSignal::new(None),
            body_error: RwSignal::new(None),
            phase: RwSignal::new(FormPhase::Idle),
        }
    }

    /// Stores the typed title and re-runs its validation.
    pub fn input_title(&self, value: String) {
        self.title_error.set(title_error(&value));
        self.title.set(value);
    }

    pub fn input_body(&self, value: String) {
        self.body_error.set(body_error(&value));
        self.body.set(value);
    }

    pub fn draft_untracked(&self) -> FormDraft {
        FormDraft::new(self.title.get_untracked(), self.body.get_untracked())
    }

    /// Re-checks both fields against their current values and refreshes the
    /// messages. Returns whether the draft may be submitted.
    pub fn validate_all(&self) -> bool {
        let draft = self.draft_untracked();
        let title = title_error(&draft.title);
        let body = body_error(&draft.body);
        self.title_error.set(title);
        self.body_error.set(body);
        title.is_none() && body.is_none()
    }

    pub fn is_submitting(&self) -> bool {
        self.phase.get() == FormPhase::Submitting
    }

    pub fn clear(&self) {
        self.title.set(String::new());
        self.body.set(String::new());
        self.title_error.set(None);
        self.body_error.set(None);
    }
}

impl Default for NoteFormState {
    fn default() -> Self {
        Self::new()
    }
}

/// Sends the form content as a new note.
///
/// On success the fields are cleared and `NotesChanged` is published; on
/// failure the error is handed back and the typed values stay in place.
pub(crate) async fn submit_note<A: NotesApi>(
    api: &A,
    loading: LoadingIndicator,
    form: NoteFormState,
    events: NotesEvents,
) -> SubmitOutcome {
    if form.phase.get_untracked() == FormPhase::Submitting {
        return SubmitOutcome::Busy;
    }

    if !form.validate_all() {
        return SubmitOutcome::Invalid;
    }

    let draft = form.draft_untracked();
    form.phase.set(FormPhase::Submitting);

    let result = {
        let _loading = loading.begin();
        api.create_note(&draft).await
    };

    form.phase.set(FormPhase::Idle);

    match result {
        Ok(()) => {
            log::debug!("note created");
            form.clear();
            events.publish_notes_changed();
            SubmitOutcome::Created
        }
        Err(e) => SubmitOutcome::Failed(e),
    }
}
