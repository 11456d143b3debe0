//! Announcement create/update form. Updates go through the shared action
//! layer.

use leptos::prelude::*;
use records::endpoints;
use records::entity::{EntityKind, FormMode};
use records::forms::FieldErrors;
use records::forms::announcement::AnnouncementDraft;
use records::rows::AnnouncementRow;

use crate::components::banner::{Banner, BannerView};
use crate::components::forms::input_field::InputField;
use crate::components::forms::{SubmitMethod, spawn_action_submit, spawn_json_submit};
use crate::net::actions;
use crate::state::session::{backend_url, use_session};

#[component]
pub fn AnnouncementForm(
    mode: FormMode,
    #[prop(optional)] seed: Option<AnnouncementRow>,
) -> impl IntoView {
    let session = use_session();
    let is_update = mode == FormMode::Update;
    let id = seed.as_ref().map(|s| s.id).unwrap_or_default();

    let announcement_title =
        RwSignal::new(seed.as_ref().map(|s| s.title.clone()).unwrap_or_default());
    let description = RwSignal::new(
        seed.as_ref()
            .map(|s| s.description.clone())
            .filter(|d| d != records::rows::NO_DESCRIPTION)
            .unwrap_or_default(),
    );
    let date = RwSignal::new(seed.as_ref().map(|s| s.date.clone()).unwrap_or_default());
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
        let draft = AnnouncementDraft {
            announcement_title: announcement_title.get(),
            description: description.get(),
            date: date.get(),
            class_name: class_name.get(),
        };
        match draft.validate() {
            Err(errs) => errors.set(errs),
            Ok(payload) => {
                errors.set(FieldErrors::new());
                if is_update {
                    spawn_action_submit(
                        async move { actions::update_announcement(id, &payload).await },
                        banner,
                        submitting,
                    );
                } else {
                    let base = session.get_untracked().session;
                    spawn_json_submit(
                        backend_url(&base, endpoints::add(EntityKind::Announcement)),
                        SubmitMethod::Post,
                        payload,
                        "Announcement saved successfully!",
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
                {if is_update { "Update the Announcement" } else { "Create a New Announcement" }}
            </h2>
            <div class="entity-form__grid">
                <InputField
                    label="Announcement Title"
                    field="announcementTitle"
                    value=announcement_title
                    errors=errors
                />
                <InputField label="Description" field="description" value=description errors=errors/>
                <InputField
                    label="Date"
                    field="date"
                    value=date
                    errors=errors
                    input_type="date"
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
