use leptos::prelude::*;

/// Labelled multi-line text input bound to a signal
#[component]
pub fn Textarea(
    /// Label text
    #[prop(into)]
    label: String,
    /// Current value
    #[prop(into)]
    value: Signal<String>,
    /// Receives the text on every keystroke
    on_input: Callback<String>,
    /// Marks the field as required in the label
    #[prop(optional)]
    required: bool,
    /// Rows attribute, 3 unless set
    #[prop(optional)]
    rows: Option<u32>,
    /// ID for the textarea element
    #[prop(into)]
    id: String,
) -> impl IntoView {
    let textarea_rows = rows.unwrap_or(3);
    let label_id = id.clone();

    view! {
        <div class="form__group">
            <label class="form__label" for=label_id>
                {label}
                {required.then(|| view! { <span class="form__required">" *"</span> })}
            </label>
            <textarea
                id=id
                class="form__textarea"
                rows=textarea_rows
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}
