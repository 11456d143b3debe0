//! Teacher create/update form. Multipart like the student form.

use leptos::html::Input;
use leptos::prelude::*;
use records::endpoints;
use records::entity::{EntityKind, FormMode};
use records::forms::FieldErrors;
use records::forms::teacher::TeacherDraft;
use records::rows::TeacherRow;

use crate::components::banner::{Banner, BannerView};
use crate::components::forms::input_field::{InputField, SelectField};
use crate::components::forms::spawn_multipart_submit;
use crate::state::session::{backend_url, use_session};

#[component]
pub fn TeacherForm(mode: FormMode, #[prop(optional)] seed: Option<TeacherRow>) -> impl IntoView {
    let session = use_session();
    let is_update = mode == FormMode::Update;

    let (seed_first, seed_last) = seed
        .as_ref()
        .map(|s| match s.name.split_once(' ') {
            Some((first, last)) => (first.to_owned(), last.to_owned()),
            None => (s.name.clone(), String::new()),
        })
        .unwrap_or_default();

    let username = RwSignal::new(String::new());
    let teacher_name = RwSignal::new(seed_first);
    let surname = RwSignal::new(seed_last);
    let email = RwSignal::new(seed.as_ref().map(|s| s.email.clone()).unwrap_or_default());
    let phone = RwSignal::new(seed.as_ref().map(|s| s.phone.clone()).unwrap_or_default());
    let address = RwSignal::new(seed.as_ref().map(|s| s.address.clone()).unwrap_or_default());
    let blood_type = RwSignal::new(String::new());
    let sex = RwSignal::new(String::new());
    let birthday = RwSignal::new(String::new());

    let image_ref = NodeRef::<Input>::new();
    let errors = RwSignal::new(FieldErrors::new());
    let banner = RwSignal::new(None::<Banner>);
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        let draft = TeacherDraft {
            username: username.get(),
            teacher_name: teacher_name.get(),
            surname: surname.get(),
            email: email.get(),
            phone: phone.get(),
            address: address.get(),
            blood_type: blood_type.get(),
            sex: sex.get(),
            birthday: birthday.get(),
        };
        match draft.validate() {
            Err(errs) => errors.set(errs),
            Ok(payload) => {
                errors.set(FieldErrors::new());
                #[cfg(feature = "hydrate")]
                let image = image_ref
                    .get()
                    .and_then(|input| input.files())
                    .and_then(|files| files.get(0));
                #[cfg(not(feature = "hydrate"))]
                let image = None;

                let base = session.get_untracked().session;
                let path = if is_update {
                    endpoints::update(EntityKind::Teacher, 0)
                } else {
                    endpoints::add(EntityKind::Teacher).to_owned()
                };
                spawn_multipart_submit(
                    backend_url(&base, &path),
                    payload.multipart_fields(),
                    image,
                    "Teacher saved successfully!",
                    banner,
                    submitting,
                );
            }
        }
    };

    view! {
        <form class="entity-form" on:submit=on_submit>
            <h2 class="entity-form__title">
                {if is_update { "Update Teacher" } else { "Create New Teacher" }}
            </h2>
            <span class="entity-form__section">"Authentication Information"</span>
            <div class="entity-form__grid">
                <InputField label="Username" field="username" value=username errors=errors/>
                <InputField
                    label="Email"
                    field="email"
                    value=email
                    errors=errors
                    input_type="email"
                />
            </div>
            <span class="entity-form__section">"Personal Information"</span>
            <div class="entity-form__grid">
                <InputField label="Teacher Name" field="teacherName" value=teacher_name errors=errors/>
                <InputField label="Surname" field="surname" value=surname errors=errors/>
                <InputField label="Phone" field="phone" value=phone errors=errors/>
                <InputField label="Address" field="address" value=address errors=errors/>
                <InputField label="Blood Type" field="bloodType" value=blood_type errors=errors/>
                <InputField
                    label="Birthday"
                    field="birthday"
                    value=birthday
                    errors=errors
                    input_type="date"
                />
                <SelectField
                    label="Sex"
                    field="sex"
                    value=sex
                    errors=errors
                    options=vec![("MALE", "Male"), ("FEMALE", "Female")]
                />
            </div>
            <label class="entity-form__upload">
                <span>"Upload a Photo"</span>
                <input type="file" node_ref=image_ref/>
            </label>
            <button
                class="btn btn--primary entity-form__submit"
                type="submit"
                disabled=move || submitting.get()
            >
                {if is_update { "Update Teacher" } else { "Create Teacher" }}
            </button>
            <BannerView banner=banner/>
        </form>
    }
}
