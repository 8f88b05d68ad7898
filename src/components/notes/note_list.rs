use crate::components::ui::{Button, ButtonSize, ButtonVariant, NoteGrid, NoteItem};
use crate::models::Note;
use crate::state::notes::on_notes_changed;
use crate::state::{delete_note, refresh_notes, AppContext, AppState};
use crate::util::format_created_at;
use icons::X;
use leptos::prelude::*;
use leptos::task::spawn_local;

fn spawn_refresh(app_state: AppState) {
    let api = app_state.api();
    spawn_local(async move {
        let _ = refresh_notes(&api, app_state.loading, app_state.notes).await;
    });
}

/// Full note collection, re-fetched on mount and on every `NotesChanged`.
#[component]
pub fn NoteList() -> impl IntoView {
    let app_state = expect_context::<AppContext>().0;
    let notes = app_state.notes;

    on_notes_changed(app_state.events, move || spawn_refresh(app_state));

    view! {
        <section class="flex flex-col gap-3">
            <h2 class="text-sm font-medium text-muted-foreground">
                {move || format!("{} notes", notes.notes.get().len())}
            </h2>

            <Show
                when=move || !notes.notes.get().is_empty()
                fallback=move || view! {
                    <div class="text-xs text-muted-foreground">
                        {move || if notes.loaded.get() { "No notes yet." } else { "Loading notes..." }}
                    </div>
                }
            >
                <NoteGrid>
                    {move || {
                        notes
                            .notes
                            .get()
                            .into_iter()
                            .map(|note| view! { <NoteCard note=note /> })
                            .collect_view()
                    }}
                </NoteGrid>
            </Show>
        </section>
    }
}

#[component]
fn NoteCard(note: Note) -> impl IntoView {
    let app_state = expect_context::<AppContext>().0;
    let Note {
        id,
        title,
        body,
        created_at,
    } = note;
    let created = format_created_at(&created_at);
    let item_id = id.clone();

    let on_delete = move |_| {
        let api = app_state.api();
        let id = id.clone();
        spawn_local(async move {
            let _ = delete_note(&api, app_state.loading, app_state.notes, &id).await;
        });
    };

    view! {
        <NoteItem attr:data-note-id=item_id>
            <div class="flex items-start justify-between gap-2">
                <h3 class="text-sm font-semibold break-words">{title}</h3>
                <Button
                    variant=ButtonVariant::Ghost
                    size=ButtonSize::Icon
                    attr:aria-label="Delete note"
                    on:click=on_delete
                >
                    <X />
                </Button>
            </div>
            <p class="text-sm whitespace-pre-wrap break-words">{body}</p>
            <small class="text-xs text-muted-foreground">
                {created}
            </small>
        </NoteItem>
    }
}
