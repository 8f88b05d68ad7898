use crate::components::notes::{AppBar, LoadingOverlay, NoteForm, NoteList};
use leptos::prelude::*;

#[component]
pub fn NotesPage() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-background">
            <AppBar />
            <LoadingOverlay />

            <main class="mx-auto flex w-full max-w-[1080px] flex-col gap-6 px-4 py-8">
                <NoteForm />
                <NoteList />
            </main>
        </div>
    }
}
