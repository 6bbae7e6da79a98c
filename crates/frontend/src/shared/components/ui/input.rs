use leptos::prelude::*;

/// Labelled text or number input bound to a signal
#[component]
pub fn Input(
    /// Label text
    #[prop(into)]
    label: String,
    /// Current value, re-applied whenever it changes
    #[prop(into)]
    value: Signal<String>,
    /// Receives the raw text on every keystroke
    on_input: Callback<String>,
    /// Input type: "text" (default) or "number"
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    /// Step for number inputs
    #[prop(optional, into)]
    step: MaybeProp<String>,
    /// Marks the field as required in the label
    #[prop(optional)]
    required: bool,
    /// ID for the input element
    #[prop(into)]
    id: String,
) -> impl IntoView {
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());
    let input_step = move || step.get();
    let label_id = id.clone();

    view! {
        <div class="form__group">
            <label class="form__label" for=label_id>
                {label}
                {required.then(|| view! { <span class="form__required">" *"</span> })}
            </label>
            <input
                id=id
                class="form__input"
                type=input_t
                step=input_step
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}
