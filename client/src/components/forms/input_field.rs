//! Labeled input/select fields with per-field validation messages.

use leptos::prelude::*;
use records::forms::FieldErrors;

/// Text-like input bound to a string signal. The `field` name keys into the
/// form's `FieldErrors` for the message shown under the input.
#[component]
pub fn InputField(
    label: &'static str,
    field: &'static str,
    value: RwSignal<String>,
    errors: RwSignal<FieldErrors>,
    #[prop(default = "text")] input_type: &'static str,
) -> impl IntoView {
    let message = move || errors.get().get(field).map(ToOwned::to_owned);
    view! {
        <label class="input-field">
            <span class="input-field__label">{label}</span>
            <input
                class="input-field__input"
                type=input_type
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            <Show when=move || message().is_some()>
                <p class="input-field__error">{move || message().unwrap_or_default()}</p>
            </Show>
        </label>
    }
}

/// Select bound to a string signal. Options are `(value, label)` pairs; an
/// empty leading option stands for "not chosen yet".
#[component]
pub fn SelectField(
    label: &'static str,
    field: &'static str,
    value: RwSignal<String>,
    errors: RwSignal<FieldErrors>,
    options: Vec<(&'static str, &'static str)>,
) -> impl IntoView {
    let message = move || errors.get().get(field).map(ToOwned::to_owned);
    view! {
        <label class="input-field">
            <span class="input-field__label">{label}</span>
            <select
                class="input-field__input"
                prop:value=move || value.get()
                on:change=move |ev| value.set(event_target_value(&ev))
            >
                <option value="">"-- select --"</option>
                {options
                    .into_iter()
                    .map(|(val, text)| {
                        view! {
                            <option value=val selected=move || value.get() == val>
                                {text}
                            </option>
                        }
                    })
                    .collect::<Vec<_>>()}
            </select>
            <Show when=move || message().is_some()>
                <p class="input-field__error">{move || message().unwrap_or_default()}</p>
            </Show>
        </label>
    }
}
