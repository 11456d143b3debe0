//! Entity form components, one per entity kind.
//!
//! ARCHITECTURE
//! ============
//! Every form collects its fields into signals, validates through the
//! matching `records::forms` schema on submit, and only then talks to the
//! network: JSON to the school backend for most entities, multipart for
//! student/teacher, and the shared action layer for exam, announcement,
//! and parent updates. Validation failures surface per-field and never
//! reach the wire.

pub mod input_field;

pub mod announcement_form;
pub mod assignment_form;
pub mod attendance_form;
pub mod class_form;
pub mod event_form;
pub mod exam_form;
pub mod grade_form;
pub mod lesson_form;
pub mod parent_form;
pub mod result_form;
pub mod student_form;
pub mod subject_form;
pub mod teacher_form;

use leptos::prelude::*;

use crate::components::banner::Banner;

/// HTTP verb a JSON submit should use.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitMethod {
    Post,
    Put,
}

/// Fire a validated JSON payload at the backend and land the outcome in the
/// banner. Browser-only; the SSR build renders forms but never submits.
pub(crate) fn spawn_json_submit<T>(
    url: String,
    method: SubmitMethod,
    payload: T,
    success_message: &'static str,
    banner: RwSignal<Option<Banner>>,
    submitting: RwSignal<bool>,
) where
    T: serde::Serialize + 'static,
{
    #[cfg(feature = "hydrate")]
    {
        submitting.set(true);
        leptos::task::spawn_local(async move {
            let outcome = match method {
                SubmitMethod::Post => crate::net::api::post_json(&url, &payload).await,
                SubmitMethod::Put => crate::net::api::put_json(&url, &payload).await,
            };
            banner.set(Some(Banner::from_outcome(&outcome, success_message)));
            submitting.set(false);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (url, method, payload, success_message, banner, submitting);
    }
}

/// Fire a validated multipart payload (student/teacher, optional image) at
/// the backend and land the outcome in the banner.
pub(crate) fn spawn_multipart_submit(
    url: String,
    fields: Vec<(&'static str, String)>,
    image: Option<crate::net::api::ImageFile>,
    success_message: &'static str,
    banner: RwSignal<Option<Banner>>,
    submitting: RwSignal<bool>,
) {
    #[cfg(feature = "hydrate")]
    {
        submitting.set(true);
        leptos::task::spawn_local(async move {
            let outcome = crate::net::api::post_multipart(&url, &fields, image).await;
            banner.set(Some(Banner::from_outcome(&outcome, success_message)));
            submitting.set(false);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (url, fields, image, success_message, banner, submitting);
    }
}

/// Run an action-layer future and land its uniform result in the banner.
pub(crate) fn spawn_action_submit<F>(
    action: F,
    banner: RwSignal<Option<Banner>>,
    submitting: RwSignal<bool>,
) where
    F: std::future::Future<Output = records::result::ActionResult> + 'static,
{
    #[cfg(feature = "hydrate")]
    {
        submitting.set(true);
        leptos::task::spawn_local(async move {
            let result = action.await;
            banner.set(Some(Banner::from_action(&result)));
            submitting.set(false);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (action, banner, submitting);
    }
}
