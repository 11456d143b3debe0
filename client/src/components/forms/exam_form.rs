//! Exam create/update form.
//!
//! Creates post straight to the backend; updates go through the shared
//! action layer so their outcome arrives in the uniform result shape.

use leptos::prelude::*;
use records::endpoints;
use records::entity::{EntityKind, FormMode};
use records::forms::FieldErrors;
use records::forms::exam::ExamDraft;
use records::rows::ExamRow;

use crate::components::banner::{Banner, BannerView};
use crate::components::forms::input_field::InputField;
use crate::components::forms::{SubmitMethod, spawn_action_submit, spawn_json_submit};
use crate::net::actions;
use crate::state::session::{backend_url, use_session};

#[component]
pub fn ExamForm(mode: FormMode, #[prop(optional)] seed: Option<ExamRow>) -> impl IntoView {
    let session = use_session();
    let is_update = mode == FormMode::Update;
    let id = seed.as_ref().map(|s| s.id).unwrap_or_default();

    let exam_title = RwSignal::new(seed.as_ref().map(|s| s.exam_title.clone()).unwrap_or_default());
    let start_time = RwSignal::new(seed.as_ref().map(|s| s.start_time.clone()).unwrap_or_default());
    let end_time = RwSignal::new(seed.as_ref().map(|s| s.end_time.clone()).unwrap_or_default());
    let lesson_name = RwSignal::new(
        seed.as_ref().map(|s| s.lesson_name.clone()).filter(|l| l != "N/A").unwrap_or_default(),
    );
    let score = RwSignal::new(
        seed.as_ref().map(|s| s.score.clone()).filter(|sc| sc != "N/A").unwrap_or_default(),
    );

    let errors = RwSignal::new(FieldErrors::new());
    let banner = RwSignal::new(None::<Banner>);
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        let draft = ExamDraft {
            exam_title: exam_title.get(),
            start_time: start_time.get(),
            end_time: end_time.get(),
            lesson_name: lesson_name.get(),
            score: score.get(),
        };
        match draft.validate() {
            Err(errs) => errors.set(errs),
            Ok(payload) => {
                errors.set(FieldErrors::new());
                if is_update {
                    spawn_action_submit(
                        async move { actions::update_exam(id, &payload).await },
                        banner,
                        submitting,
                    );
                } else {
                    let base = session.get_untracked().session;
                    spawn_json_submit(
                        backend_url(&base, endpoints::add(EntityKind::Exam)),
                        SubmitMethod::Post,
                        payload,
                        "Create successful!",
                        banner,
                        submitting,
                    );
                }
            }
        }
    };

    view! {
        <form class="entity-form" on:submit=on_submit>
            <h2 class="entity-form__title">
                {if is_update { "Update the Exam" } else { "Create a New Exam" }}
            </h2>
            <div class="entity-form__grid">
                <InputField label="Exam Title" field="examTitle" value=exam_title errors=errors/>
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
                <InputField label="Lesson Name" field="lessonName" value=lesson_name errors=errors/>
                <InputField label="Score" field="score" value=score errors=errors/>
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
