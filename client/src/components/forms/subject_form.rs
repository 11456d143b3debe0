//! Subject create/update form.

use leptos::prelude::*;
use records::endpoints;
use records::entity::{EntityKind, FormMode};
use records::forms::FieldErrors;
use records::forms::subject::SubjectDraft;
use records::rows::SubjectRow;

use crate::components::banner::{Banner, BannerView};
use crate::components::forms::input_field::InputField;
use crate::components::forms::{SubmitMethod, spawn_json_submit};
use crate::state::session::{backend_url, use_session};

#[component]
pub fn SubjectForm(mode: FormMode, #[prop(optional)] seed: Option<SubjectRow>) -> impl IntoView {
    let session = use_session();
    let is_update = mode == FormMode::Update;
    let id = seed.as_ref().map(|s| s.id).unwrap_or_default();

    let subject_name =
        RwSignal::new(seed.as_ref().map(|s| s.subject_name.clone()).unwrap_or_default());
    let teacher_name =
        RwSignal::new(seed.as_ref().map(|s| s.teachers.clone()).unwrap_or_default());
    let lesson = RwSignal::new(String::new());

    let errors = RwSignal::new(FieldErrors::new());
    let banner = RwSignal::new(None::<Banner>);
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        let draft = SubjectDraft {
            subject_name: subject_name.get(),
            teacher_name: teacher_name.get(),
            lesson: lesson.get(),
        };
        match draft.validate() {
            Err(errs) => errors.set(errs),
            Ok(payload) => {
                errors.set(FieldErrors::new());
                let base = session.get_untracked().session;
                let (url, method, message) = if is_update {
                    (
                        backend_url(&base, &endpoints::update(EntityKind::Subject, id)),
                        SubmitMethod::Put,
                        "Subject updated successfully!",
                    )
                } else {
                    (
                        backend_url(&base, endpoints::add(EntityKind::Subject)),
                        SubmitMethod::Post,
                        "Subject created successfully!",
                    )
                };
                spawn_json_submit(url, method, payload, message, banner, submitting);
            }
        }
    };

    view! {
        <form class="entity-form" on:submit=on_submit>
            <h2 class="entity-form__title">
                {if is_update { "Update the Subject" } else { "Create a New Subject" }}
            </h2>
            <div class="entity-form__grid">
                <InputField
                    label="Subject Name"
                    field="subjectName"
                    value=subject_name
                    errors=errors
                />
                <InputField
                    label="Teacher Name"
                    field="teacherName"
                    value=teacher_name
                    errors=errors
                />
                <InputField label="Lesson" field="lesson" value=lesson errors=errors/>
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
