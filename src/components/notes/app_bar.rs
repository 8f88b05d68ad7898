use leptos::prelude::*;

#[component]
pub fn AppBar(#[prop(into, default = "Notes App".to_string())] title: String) -> impl IntoView {
    view! {
        <header class="border-b bg-background">
            <div class="mx-auto flex h-14 w-full max-w-[1080px] items-center px-4">
                <h1 class="text-lg font-semibold">{title}</h1>
            </div>
        </header>
    }
}
