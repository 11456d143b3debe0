//! Lesson create/update form. Updates post the full payload to a fixed URL,
//! as the backend expects for lessons.

use leptos::prelude::*;
use records::endpoints;
use records::entity::{EntityKind, FormMode};
use records::forms::{FieldErrors, LessonDay};
use records::forms::lesson::LessonDraft;
use records::rows::LessonRow;

use crate::components::banner::{Banner, BannerView};
use crate::components::forms::input_field::{InputField, SelectField};
use crate::components::forms::{SubmitMethod, spawn_json_submit};
use crate::state::session::{backend_url, use_session};

fn day_options() -> Vec<(&'static str, &'static str)> {
    LessonDay::ALL
        .into_iter()
        .map(|d| {
            let label = match d {
                LessonDay::Monday => "Monday",
                LessonDay::Tuesday => "Tuesday",
                LessonDay::Wednesday => "Wednesday",
                LessonDay::Thursday => "Thursday",
                LessonDay::Friday => "Friday",
            };
            (d.as_str(), label)
        })
        .collect()
}

#[component]
pub fn LessonForm(mode: FormMode, #[prop(optional)] seed: Option<LessonRow>) -> impl IntoView {
    let session = use_session();
    let is_update = mode == FormMode::Update;
    let id = seed.as_ref().map(|s| s.id).unwrap_or_default();

    let lesson_name = RwSignal::new(seed.as_ref().map(|s| s.name.clone()).unwrap_or_default());
    let day = RwSignal::new(
        seed.as_ref().map(|s| s.day.clone()).filter(|d| LessonDay::parse(d).is_some()).unwrap_or_default(),
    );
    let start_time = RwSignal::new(seed.as_ref().map(|s| s.start_time.clone()).unwrap_or_default());
    let end_time = RwSignal::new(seed.as_ref().map(|s| s.end_time.clone()).unwrap_or_default());
    let subject_name = RwSignal::new(seed.as_ref().map(|s| s.subject.clone()).unwrap_or_default());
    let class_name = RwSignal::new(seed.as_ref().map(|s| s.class.clone()).unwrap_or_default());
    let teacher_name = RwSignal::new(seed.as_ref().map(|s| s.teacher.clone()).unwrap_or_default());

    let errors = RwSignal::new(FieldErrors::new());
    let banner = RwSignal::new(None::<Banner>);
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        let draft = LessonDraft {
            lesson_name: lesson_name.get(),
            day: day.get(),
            start_time: start_time.get(),
            end_time: end_time.get(),
            subject_name: subject_name.get(),
            class_name: class_name.get(),
            teacher_name: teacher_name.get(),
        };
        match draft.validate() {
            Err(errs) => errors.set(errs),
            Ok(payload) => {
                errors.set(FieldErrors::new());
                let base = session.get_untracked().session;
                let path = if is_update {
                    endpoints::update(EntityKind::Lesson, id)
                } else {
                    endpoints::add(EntityKind::Lesson).to_owned()
                };
                spawn_json_submit(
                    backend_url(&base, &path),
                    SubmitMethod::Post,
                    payload,
                    "Lesson saved successfully!",
                    banner,
                    submitting,
                );
            }
        }
    };

    view! {
        <form class="entity-form" on:submit=on_submit>
            <h2 class="entity-form__title">
                {if is_update { "Update the Lesson" } else { "Create a New Lesson" }}
            </h2>
            <div class="entity-form__grid">
                <InputField label="Lesson Name" field="lessonName" value=lesson_name errors=errors/>
                <SelectField label="Day" field="day" value=day errors=errors options=day_options()/>
                <InputField
                    label="Start Time"
                    field="startTime"
                    value=start_time
                    errors=errors
                    input_type="time"
                />
                <InputField
                    label="End Time"
                    field="endTime"
                    value=end_time
                    errors=errors
                    input_type="time"
                />
                <InputField label="Subject" field="subjectName" value=subject_name errors=errors/>
                <InputField label="Class Name" field="className" value=class_name errors=errors/>
                <InputField
                    label="Teacher Name"
                    field="teacherName"
                    value=teacher_name
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
