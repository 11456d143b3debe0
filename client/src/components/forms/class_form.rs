//! Class create/update form.

use leptos::prelude::*;
use records::entity::{EntityKind, FormMode};
use records::forms::FieldErrors;
use records::forms::class::ClassDraft;
use records::rows::ClassRow;
use records::endpoints;

use crate::components::banner::{Banner, BannerView};
use crate::components::forms::input_field::InputField;
use crate::components::forms::{SubmitMethod, spawn_json_submit};
use crate::state::session::{backend_url, use_session};

#[component]
pub fn ClassForm(mode: FormMode, #[prop(optional)] seed: Option<ClassRow>) -> impl IntoView {
    let session = use_session();
    let is_update = mode == FormMode::Update;
    let id = seed.as_ref().map(|s| s.id).unwrap_or_default();

    let class_name = RwSignal::new(seed.as_ref().map(|s| s.name.clone()).unwrap_or_default());
    let capacity = RwSignal::new(seed.as_ref().map(|s| s.capacity.clone()).unwrap_or_default());
    let teacher_name =
        RwSignal::new(seed.as_ref().map(|s| s.supervisor.clone()).unwrap_or_default());
    let level = RwSignal::new(seed.as_ref().map(|s| s.grade.clone()).unwrap_or_default());

    let errors = RwSignal::new(FieldErrors::new());
    let banner = RwSignal::new(None::<Banner>);
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        let draft = ClassDraft {
            class_name: class_name.get(),
            capacity: capacity.get(),
            teacher_name: teacher_name.get(),
            level: level.get(),
        };
        match draft.validate() {
            Err(errs) => errors.set(errs),
            Ok(payload) => {
                errors.set(FieldErrors::new());
                let base = session.get_untracked().session;
                let (url, method, message) = if is_update {
                    (
                        backend_url(&base, &endpoints::update(EntityKind::Class, id)),
                        SubmitMethod::Put,
                        "Class updated successfully!",
                    )
                } else {
                    (
                        backend_url(&base, endpoints::add(EntityKind::Class)),
                        SubmitMethod::Post,
                        "Class created successfully!",
                    )
                };
                spawn_json_submit(url, method, payload, message, banner, submitting);
            }
        }
    };

    view! {
        <form class="entity-form" on:submit=on_submit>
            <h2 class="entity-form__title">
                {if is_update { "Update the Class" } else { "Create a New Class" }}
            </h2>
            <div class="entity-form__grid">
                <InputField label="Class Name" field="className" value=class_name errors=errors/>
                <InputField
                    label="Capacity"
                    field="capacity"
                    value=capacity
                    errors=errors
                    input_type="number"
                />
                <InputField
                    label="Teacher Name"
                    field="teacherName"
                    value=teacher_name
                    errors=errors
                />
                <InputField label="Grade Level" field="level" value=level errors=errors/>
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
