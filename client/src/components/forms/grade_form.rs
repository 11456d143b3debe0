//! Grade (level) create/update form.

use leptos::prelude::*;
use records::endpoints;
use records::entity::{EntityKind, FormMode};
use records::forms::FieldErrors;
use records::forms::grade::GradeDraft;
use records::rows::GradeRow;

use crate::components::banner::{Banner, BannerView};
use crate::components::forms::input_field::InputField;
use crate::components::forms::{SubmitMethod, spawn_json_submit};
use crate::state::session::{backend_url, use_session};

#[component]
pub fn GradeForm(mode: FormMode, #[prop(optional)] seed: Option<GradeRow>) -> impl IntoView {
    let session = use_session();
    let is_update = mode == FormMode::Update;
    let id = seed.as_ref().map(|s| s.id).unwrap_or_default();

    let level = RwSignal::new(seed.as_ref().map(|s| s.level.clone()).unwrap_or_default());
    let errors = RwSignal::new(FieldErrors::new());
    let banner = RwSignal::new(None::<Banner>);
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        match (GradeDraft { level: level.get() }).validate() {
            Err(errs) => errors.set(errs),
            Ok(payload) => {
                errors.set(FieldErrors::new());
                let base = session.get_untracked().session;
                let (url, method, message) = if is_update {
                    (
                        backend_url(&base, &endpoints::update(EntityKind::Grade, id)),
                        SubmitMethod::Put,
                        "Grade updated successfully!",
                    )
                } else {
                    (
                        backend_url(&base, endpoints::add(EntityKind::Grade)),
                        SubmitMethod::Post,
                        "Grade created successfully!",
                    )
                };
                spawn_json_submit(url, method, payload, message, banner, submitting);
            }
        }
    };

    view! {
        <form class="entity-form" on:submit=on_submit>
            <h2 class="entity-form__title">
                {if is_update { "Update the Grade" } else { "Create a New Grade" }}
            </h2>
            <div class="entity-form__grid">
                <InputField
                    label="Grade Level"
                    field="level"
                    value=level
                    errors=errors
                    input_type="number"
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
