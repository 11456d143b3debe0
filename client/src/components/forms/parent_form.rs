//! Parent create/update form. Updates go through the shared action layer.

use leptos::prelude::*;
use records::endpoints;
use records::entity::{EntityKind, FormMode};
use records::forms::FieldErrors;
use records::forms::parent::ParentDraft;
use records::rows::ParentRow;

use crate::components::banner::{Banner, BannerView};
use crate::components::forms::input_field::InputField;
use crate::components::forms::{SubmitMethod, spawn_action_submit, spawn_json_submit};
use crate::net::actions;
use crate::state::session::{backend_url, use_session};

#[component]
pub fn ParentForm(mode: FormMode, #[prop(optional)] seed: Option<ParentRow>) -> impl IntoView {
    let session = use_session();
    let is_update = mode == FormMode::Update;
    let id = seed.as_ref().map(|s| s.id).unwrap_or_default();

    // The list row shows the joined display name; editing re-splits it on
    // the first space, which is as much as the row data can tell us.
    let (seed_first, seed_last) = seed
        .as_ref()
        .map(|s| match s.name.split_once(' ') {
            Some((first, last)) => (first.to_owned(), last.to_owned()),
            None => (s.name.clone(), String::new()),
        })
        .unwrap_or_default();

    let username = RwSignal::new(String::new());
    let parent_name = RwSignal::new(seed_first);
    let surname = RwSignal::new(seed_last);
    let email = RwSignal::new(seed.as_ref().map(|s| s.email.clone()).unwrap_or_default());
    let phone = RwSignal::new(
        seed.as_ref().map(|s| s.phone.clone()).filter(|p| p != "N/A").unwrap_or_default(),
    );
    let address = RwSignal::new(
        seed.as_ref().map(|s| s.address.clone()).filter(|a| a != "N/A").unwrap_or_default(),
    );

    let errors = RwSignal::new(FieldErrors::new());
    let banner = RwSignal::new(None::<Banner>);
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        let draft = ParentDraft {
            username: username.get(),
            parent_name: parent_name.get(),
            surname: surname.get(),
            email: email.get(),
            phone: phone.get(),
            address: address.get(),
        };
        match draft.validate() {
            Err(errs) => errors.set(errs),
            Ok(payload) => {
                errors.set(FieldErrors::new());
                if is_update {
                    spawn_action_submit(
                        async move { actions::update_parent(id, &payload).await },
                        banner,
                        submitting,
                    );
                } else {
                    let base = session.get_untracked().session;
                    spawn_json_submit(
                        backend_url(&base, endpoints::add(EntityKind::Parent)),
                        SubmitMethod::Post,
                        payload,
                        "Parent saved successfully!",
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
                {if is_update { "Update the Parent" } else { "Create a New Parent" }}
            </h2>
            <div class="entity-form__grid">
                <InputField label="Username" field="username" value=username errors=errors/>
                <InputField label="First Name" field="parentName" value=parent_name errors=errors/>
                <InputField label="Surname" field="surname" value=surname errors=errors/>
                <InputField
                    label="Email"
                    field="email"
                    value=email
                    errors=errors
                    input_type="email"
                />
                <InputField label="Phone" field="phone" value=phone errors=errors/>
                <InputField label="Address" field="address" value=address errors=errors/>
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
