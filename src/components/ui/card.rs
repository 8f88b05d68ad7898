use leptos::prelude::*;
use leptos_ui::clx;

mod components {
    use super::*;
    clx! {Card, div, "bg-card text-card-foreground flex flex-col gap-4 rounded-xl border py-6 shadow-sm"}
    clx! {CardHeader, div, "flex flex-col items-start gap-1.5 px-6"}
    clx! {CardTitle, h2, "leading-none font-semibold"}
    clx! {CardDescription, p, "text-muted-foreground text-sm"}
    clx! {CardContent, div, "px-6"}

    // One rendered note inside the list.
    clx! {NoteGrid, ul, "grid gap-4 sm:grid-cols-2 lg:grid-cols-3"}
    clx! {NoteItem, li, "flex flex-col gap-2 rounded-lg border px-4 py-3"}
}

#[allow(unused_imports)]
pub use components::*;
