use leptos::prelude::*;
use tw_merge::tw_merge;

const CONTROL_CLASS: &str = "placeholder:text-muted-foreground border-input w-full min-w-0 rounded-md border bg-transparent px-3 py-1 text-base shadow-xs outline-none focus-visible:border-ring focus-visible:ring-ring/50 focus-visible:ring-2 aria-invalid:border-destructive md:text-sm";

/// Labelled text control with an inline validation message.
///
/// Every input event is forwarded to `on_value`; the caller decides what to
/// store and which message to show.
#[component]
pub fn Field(
    #[prop(into)] id: String,
    #[prop(into)] label: String,
    #[prop(into, optional)] placeholder: String,
    #[prop(optional)] multiline: bool,
    value: RwSignal<String>,
    error: RwSignal<Option<&'static str>>,
    on_value: Callback<String>,
) -> impl IntoView {
    let on_input = move |ev: web_sys::Event| on_value.run(event_target_value(&ev));
    let invalid = move || error.get().is_some().to_string();
    let error_id = format!("{id}-error");

    let control = if multiline {
        view! {
            <textarea
                id=id.clone()
                class=tw_merge!(CONTROL_CLASS, "min-h-28 py-2")
                placeholder=placeholder
                aria-invalid=invalid
                aria-describedby=error_id.clone()
                prop:value=move || value.get()
                on:input=on_input
            ></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                id=id.clone()
                type="text"
                class=tw_merge!(CONTROL_CLASS, "h-9")
                placeholder=placeholder
                aria-invalid=invalid
                aria-describedby=error_id.clone()
                prop:value=move || value.get()
                on:input=on_input
            />
        }
        .into_any()
    };

    view! {
        <div class="flex flex-col gap-2">
            <label class="text-sm leading-none font-medium select-none" r#for=id>
                {label}
            </label>
            {control}
            <span id=error_id class="min-h-4 text-xs text-destructive">
                {move || error.get().unwrap_or_default()}
            </span>
        </div>
    }
}
