//! Assignment create/update form.

use leptos::prelude::*;
use records::endpoints;
use records::entity::{EntityKind, FormMode};
use records::forms::FieldErrors;
use records::forms::assignment::AssignmentDraft;
use records::rows::AssignmentRow;

use crate::components::banner::{Banner, BannerView};
use crate::components::forms::input_field::InputField;
use crate::components::forms::{SubmitMethod, spawn_json_submit};
use crate::state::session::{backend_url, use_session};

#[component]
pub fn AssignmentForm(
    mode: FormMode,
    #[prop(optional)] seed: Option<AssignmentRow>,
) -> impl IntoView {
    let session = use_session();
    let is_update = mode == FormMode::Update;
    let id = seed.as_ref().map(|s| s.id).unwrap_or_default();

    let assignment_title =
        RwSignal::new(seed.as_ref().map(|s| s.assignment_title.clone()).unwrap_or_default());
    let start_date = RwSignal::new(seed.as_ref().map(|s| s.start_date.clone()).unwrap_or_default());
    let due_date = RwSignal::new(seed.as_ref().map(|s| s.due_date.clone()).unwrap_or_default());
    let lesson_name = RwSignal::new(seed.as_ref().map(|s| s.lesson.clone()).unwrap_or_default());

    let errors = RwSignal::new(FieldErrors::new());
    let banner = RwSignal::new(None::<Banner>);
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        let draft = AssignmentDraft {
            assignment_title: assignment_title.get(),
            start_date: start_date.get(),
            due_date: due_date.get(),
            lesson_name: lesson_name.get(),
        };
        match draft.validate() {
            Err(errs) => errors.set(errs),
            Ok(payload) => {
                errors.set(FieldErrors::new());
                let base = session.get_untracked().session;
                let path = if is_update {
                    endpoints::update(EntityKind::Assignment, id)
                } else {
                    endpoints::add(EntityKind::Assignment).to_owned()
                };
                spawn_json_submit(
                    backend_url(&base, &path),
                    SubmitMethod::Post,
                    payload,
                    "Assignment added successfully!",
                    banner,
                    submitting,
                );
            }
        }
    };

    view! {
        <form class="entity-form" on:submit=on_submit>
            <h2 class="entity-form__title">
                {if is_update { "Update the Assignment" } else { "Create a New Assignment" }}
            </h2>
            <div class="entity-form__grid">
                <InputField
                    label="Assignment Title"
                    field="assignmentTitle"
                    value=assignment_title
                    errors=errors
                />
                <InputField
                    label="Start Date"
                    field="startDate"
                    value=start_date
                    errors=errors
                    input_type="date"
                />
                <InputField
                    label="Due Date"
                    field="dueDate"
                    value=due_date
                    errors=errors
                    input_type="date"
                />
                <InputField label="Lesson Name" field="lessonName" value=lesson_name errors=errors/>
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
