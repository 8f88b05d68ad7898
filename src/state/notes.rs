use crate::api::{ApiResult, NotesApi};
use crate::models::Note;
use crate::state::LoadingIndicator;
use leptos::prelude::*;

/// `NotesChanged` notifications from the form to the list.
///
/// Subscribers track the revision; publishing bumps it.
#[derive(Clone, Copy, Debug)]
pub(crate) struct NotesEvents {
    revision: RwSignal<u64>,
}

impl NotesEvents {
    pub fn new() -> Self {
        Self {
            revision: RwSignal::new(0),
        }
    }

    pub fn publish_notes_changed(&self) {
        self.revision.update(|r| *r = r.wrapping_add(1));
    }

    /// Subscribes the current reactive scope to future changes.
    pub fn track(&self) -> u64 {
        self.revision.get()
    }

    #[cfg(test)]
    pub fn revision_untracked(&self) -> u64 {
        self.revision.get_untracked()
    }
}

impl Default for NotesEvents {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs `refresh` once now and again after every `NotesChanged`.
///
/// Must be called under a reactive owner, e.g. from a component body.
pub(crate) fn on_notes_changed(events: NotesEvents, refresh: impl Fn() + 'static) {
    Effect::new(move |_| {
        events.track();
        refresh();
    });
}

/// The rendered note collection.
#[derive(Clone, Copy, Debug)]
pub(crate) struct NoteListState {
    pub notes: RwSignal<Vec<Note>>,
    /// Set after the first successful fetch; drives the empty-state text.
    pub loaded: RwSignal<bool>,
}

impl NoteListState {
    pub fn new() -> Self {
        Self {
            notes: RwSignal::new(vec![]),
            loaded: RwSignal::new(false),
        }
    }

    /// Swaps in a freshly fetched collection in one write.
    pub fn replace(&self, notes: Vec<Note>) {
        self.notes.set(notes);
        self.loaded.set(true);
    }
}

impl Default for NoteListState {
    fn default() -> Self {
        Self::new()
    }
}

/// Re-fetches the full collection and replaces the rendered list.
///
/// On failure the previous list stays on screen. Overlapping refreshes are
/// not sequenced: whichever response lands last is what gets rendered.
pub(crate) async fn refresh_notes<A: NotesApi>(
    api: &A,
    loading: LoadingIndicator,
    list: NoteListState,
) -> ApiResult<()> {
    let result = {
        let _loading = loading.begin();
        api.list_notes().await
    };

    match result {
        Ok(notes) => {
            log::debug!("fetched {} notes", notes.len());
            list.replace(notes);
            Ok(())
        }
        Err(e) => {
            e.log("failed to fetch notes");
            Err(e)
        }
    }
}

/// Deletes one note, then refreshes the list if the delete went through.
///
/// The deleted item stays rendered until that refresh lands.
pub(crate) async fn delete_note<A: NotesApi>(
    api: &A,
    loading: LoadingIndicator,
    list: NoteListState,
    id: &str,
) -> ApiResult<()> {
    let result = {
        let _loading = loading.begin();
        api.delete_note(id).await
    };

    if let Err(e) = result {
        e.log(&format!("failed to delete note {id}"));
        return Err(e);
    }

    log::debug!("note deleted: {id}");
    refresh_notes(api, loading, list).await
}
