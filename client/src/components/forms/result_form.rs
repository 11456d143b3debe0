//! Result (score) create/update form.

use leptos::prelude::*;
use records::endpoints;
use records::entity::{EntityKind, FormMode};
use records::forms::FieldErrors;
use records::forms::result::ResultDraft;
use records::rows::ResultRow;

use crate::components::banner::{Banner, BannerView};
use crate::components::forms::input_field::InputField;
use crate::components::forms::{SubmitMethod, spawn_json_submit};
use crate::state::session::{backend_url, use_session};

#[component]
pub fn ResultForm(mode: FormMode, #[prop(optional)] seed: Option<ResultRow>) -> impl IntoView {
    let session = use_session();
    let is_update = mode == FormMode::Update;
    let id = seed.as_ref().map(|s| s.id).unwrap_or_default();

    let score = RwSignal::new(seed.as_ref().map(|s| s.score.clone()).unwrap_or_default());
    let exam_title = RwSignal::new(
        seed.as_ref().map(|s| s.exam_title.clone()).filter(|t| t != "N/A").unwrap_or_default(),
    );
    let assignment_title = RwSignal::new(
        seed.as_ref()
            .map(|s| s.assignment_title.clone())
            .filter(|t| t != "N/A")
            .unwrap_or_default(),
    );
    let student_name =
        RwSignal::new(seed.as_ref().map(|s| s.student_name.clone()).unwrap_or_default());

    let errors = RwSignal::new(FieldErrors::new());
    let banner = RwSignal::new(None::<Banner>);
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        let draft = ResultDraft {
            score: score.get(),
            exam_title: exam_title.get(),
            assignment_title: assignment_title.get(),
            student_name: student_name.get(),
        };
        match draft.validate() {
            Err(errs) => errors.set(errs),
            Ok(payload) => {
                errors.set(FieldErrors::new());
                let base = session.get_untracked().session;
                let (url, method, message) = if is_update {
                    (
                        backend_url(&base, &endpoints::update(EntityKind::Result, id)),
                        SubmitMethod::Put,
                        "Result updated successfully!",
                    )
                } else {
                    (
                        backend_url(&base, endpoints::add(EntityKind::Result)),
                        SubmitMethod::Post,
                        "Result added successfully!",
                    )
                };
                spawn_json_submit(url, method, payload, message, banner, submitting);
            }
        }
    };

    view! {
        <form class="entity-form" on:submit=on_submit>
            <h2 class="entity-form__title">
                {if is_update { "Update the Result" } else { "Create a New Result" }}
            </h2>
            <div class="entity-form__grid">
                <InputField
                    label="Score"
                    field="score"
                    value=score
                    errors=errors
                    input_type="number"
                />
                <InputField label="Exam Title" field="examTitle" value=exam_title errors=errors/>
                <InputField
                    label="Assignment Title"
                    field="assignmentTitle"
                    value=assignment_title
                    errors=errors
                />
                <InputField
                    label="Student Name"
                    field="studentName"
                    value=student_name
                    errors=errors
                />
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
