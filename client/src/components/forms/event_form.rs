//! Event create/update form.

use leptos::prelude::*;
use records::endpoints;
use records::entity::{EntityKind, FormMode};
use records::forms::FieldErrors;
use records::forms::event::EventDraft;
use records::rows::EventRow;

use crate::components::banner::{Banner, BannerView};
use crate::components::forms::input_field::InputField;
use crate::components::forms::{SubmitMethod, spawn_json_submit};
use crate::state::session::{backend_url, use_session};

#[component]
pub fn EventForm(mode: FormMode, #[prop(optional)] seed: Option<EventRow>) -> impl IntoView {
    let session = use_session();
    let is_update = mode == FormMode::Update;
    let id = seed.as_ref().map(|s| s.id).unwrap_or_default();

    let event_title = RwSignal::new(seed.as_ref().map(|s| s.title.clone()).unwrap_or_default());
    let description =
        RwSignal::new(seed.as_ref().map(|s| s.description.clone()).unwrap_or_default());
    let start_time = RwSignal::new(seed.as_ref().map(|s| s.start_time.clone()).unwrap_or_default());
    let end_time = RwSignal::new(seed.as_ref().map(|s| s.end_time.clone()).unwrap_or_default());
    let class_name = RwSignal::new(
        seed.as_ref().map(|s| s.class.clone()).filter(|c| c != "N/A").unwrap_or_default(),
    );

    let errors = RwSignal::new(FieldErrors::new());
    let banner = RwSignal::new(None::<Banner>);
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        let draft = EventDraft {
            event_title: event_title.get(),
            description: description.get(),
            start_time: start_time.get(),
            end_time: end_time.get(),
            class_name: class_name.get(),
        };
        match draft.validate() {
            Err(errs) => errors.set(errs),
            Ok(payload) => {
                errors.set(FieldErrors::new());
                let base = session.get_untracked().session;
                let path = if is_update {
                    endpoints::update(EntityKind::Event, id)
                } else {
                    endpoints::add(EntityKind::Event).to_owned()
                };
                spawn_json_submit(
                    backend_url(&base, &path),
                    SubmitMethod::Post,
                    payload,
                    "Event saved successfully!",
                    banner,
                    submitting,
                );
            }
        }
    };

    view! {
        <form class="entity-form" on:submit=on_submit>
            <h2 class="entity-form__title">
                {if is_update { "Update the Event" } else { "Create a New Event" }}
            </h2>
            <div class="entity-form__grid">
                <InputField label="Event Title" field="eventTitle" value=event_title errors=errors/>
                <InputField label="Description" field="description" value=description errors=errors/>
                <InputField
                    label="Start Time"
                    field="startTime"
                    value=start_time
                    errors=errors
                    input_type="datetime-local"
                />
                <InputField
                    label="End Time"
                    field="endTime"
                    value=end_time
                    errors=errors
                    input_type="datetime-local"
                />
                <InputField label="Class Name" field="className" value=class_name errors=errors/>
            </div>
            <button
                class="btn btn--primary entity-form__submit"
                type="submit"
                disabled=move || submitting.get()
            >
                {if is_update { "Update" } else { "Create" }}
            </button>
            <BannerView banner=banner/>
        </form>
    }
}
