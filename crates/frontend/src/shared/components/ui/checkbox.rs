use leptos::prelude::*;

/// Checkbox with a trailing label
#[component]
pub fn Checkbox(
    /// Label text
    #[prop(into)]
    label: String,
    /// Checked state
    #[prop(into)]
    checked: Signal<bool>,
    /// Receives the new state on change
    on_change: Callback<bool>,
    /// ID for the checkbox element
    #[prop(into)]
    id: String,
) -> impl IntoView {
    let label_id = id.clone();

    view! {
        <div class="form__checkbox-wrapper">
            <input
                id=id
                type="checkbox"
                class="form__checkbox"
                prop:checked=move || checked.get()
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
            <label class="form__checkbox-label" for=label_id>
                {label}
            </label>
        </div>
    }
}
