//! Attendance create/update form. Presence is an explicit yes/no selector.

use leptos::prelude::*;
use records::endpoints;
use records::entity::{EntityKind, FormMode};
use records::forms::FieldErrors;
use records::forms::attendance::AttendanceDraft;
use records::rows::AttendanceRow;

use crate::components::banner::{Banner, BannerView};
use crate::components::forms::input_field::{InputField, SelectField};
use crate::components::forms::{SubmitMethod, spawn_json_submit};
use crate::state::session::{backend_url, use_session};

#[component]
pub fn AttendanceForm(
    mode: FormMode,
    #[prop(optional)] seed: Option<AttendanceRow>,
) -> impl IntoView {
    let session = use_session();
    let is_update = mode == FormMode::Update;
    let id = seed.as_ref().map(|s| s.id).unwrap_or_default();

    let date = RwSignal::new(seed.as_ref().map(|s| s.date.clone()).unwrap_or_default());
    // "Yes"/"No" from the row, empty until the user chooses on create.
    let present = RwSignal::new(seed.as_ref().map(|s| s.present.clone()).unwrap_or_default());
    let student_name =
        RwSignal::new(seed.as_ref().map(|s| s.student_name.clone()).unwrap_or_default());
    let lesson_name =
        RwSignal::new(seed.as_ref().map(|s| s.lesson_name.clone()).unwrap_or_default());

    let errors = RwSignal::new(FieldErrors::new());
    let banner = RwSignal::new(None::<Banner>);
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        let draft = AttendanceDraft {
            date: date.get(),
            present: match present.get().as_str() {
                "Yes" => Some(true),
                "No" => Some(false),
                _ => None,
            },
            student_name: student_name.get(),
            lesson_name: lesson_name.get(),
        };
        match draft.validate() {
            Err(errs) => errors.set(errs),
            Ok(payload) => {
                errors.set(FieldErrors::new());
                let base = session.get_untracked().session;
                let (url, method, message) = if is_update {
                    (
                        backend_url(&base, &endpoints::update(EntityKind::Attendance, id)),
                        SubmitMethod::Put,
                        "Attendance updated successfully!",
                    )
                } else {
                    (
                        backend_url(&base, endpoints::add(EntityKind::Attendance)),
                        SubmitMethod::Post,
                        "Attendance added successfully!",
                    )
                };
                spawn_json_submit(url, method, payload, message, banner, submitting);
            }
        }
    };

    view! {
        <form class="entity-form" on:submit=on_submit>
            <h2 class="entity-form__title">
                {if is_update { "Update the Attendance" } else { "Record Attendance" }}
            </h2>
            <div class="entity-form__grid">
                <InputField
                    label="Date"
                    field="date"
                    value=date
                    errors=errors
                    input_type="date"
                />
                <SelectField
                    label="Present"
                    field="present"
                    value=present
                    errors=errors
                    options=vec![("Yes", "Yes"), ("No", "No")]
                />
                <InputField
                    label="Student Name"
                    field="studentName"
                    value=student_name
                    errors=errors
                />
                <InputField
                    label="Lesson Name"
                    field="lessonName"
                    value=lesson_name
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
