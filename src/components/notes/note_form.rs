use crate::components::ui::{
    Button, Card, CardContent, CardDescription, CardHeader, CardTitle, Field, Spinner,
};
use crate::state::form::SubmitOutcome;
use crate::state::{submit_note, AppContext};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn NoteForm() -> impl IntoView {
    let app_state = expect_context::<AppContext>().0;
    let form = app_state.form;

    let on_title = Callback::new(move |v: String| form.input_title(v));
    let on_body = Callback::new(move |v: String| form.input_body(v));

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let api = app_state.api();
        spawn_local(async move {
            // The typed values stay in the form for another try.
            if let SubmitOutcome::Failed(e) =
                submit_note(&api, app_state.loading, form, app_state.events).await
            {
                e.log("failed to add note");
            }
        });
    };

    view! {
        <Card>
            <CardHeader>
                <CardTitle>"New note"</CardTitle>
                <CardDescription>"Give it a title and write something down."</CardDescription>
            </CardHeader>

            <CardContent>
                <form class="flex flex-col gap-4" on:submit=on_submit>
                    <Field
                        id="note-title"
                        label="Title"
                        placeholder="Note title"
                        value=form.title
                        error=form.title_error
                        on_value=on_title
                    />

                    <Field
                        id="note-body"
                        label="Note"
                        placeholder="Write your note"
                        multiline=true
                        value=form.body
                        error=form.body_error
                        on_value=on_body
                    />

                    <Button class="w-full" attr:disabled=move || form.is_submitting()>
                        <span class="inline-flex items-center gap-2">
                            <Show when=move || form.is_submitting() fallback=|| ().into_view()>
                                <Spinner />
                            </Show>
                            {move || if form.is_submitting() { "Adding..." } else { "Add note" }}
                        </span>
                    </Button>
                </form>
            </CardContent>
        </Card>
    }
}
