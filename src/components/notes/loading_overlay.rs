use crate::components::ui::Spinner;
use crate::state::AppContext;
use leptos::prelude::*;

/// Page-wide indicator, visible while any request is in flight.
#[component]
pub fn LoadingOverlay() -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let loading = app_state.0.loading;

    view! {
        <Show when=move || loading.is_visible() fallback=|| ().into_view()>
            <div
                class="fixed inset-x-0 top-14 z-50 flex justify-center"
                aria-live="polite"
            >
                <div class="inline-flex items-center gap-2 rounded-md border bg-background px-3 py-1.5 text-xs text-muted-foreground shadow-sm">
                    <Spinner />
                    "Loading..."
                </div>
            </div>
        </Show>
    }
}
