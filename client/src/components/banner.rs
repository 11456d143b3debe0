//! Success/error banner shown under forms and inside the modal.

#[cfg(test)]
#[path = "banner_test.rs"]
mod banner_test;

use leptos::prelude::*;
use records::result::{ActionResult, FetchError};

/// One banner's worth of feedback.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Banner {
    pub message: String,
    pub success: bool,
}

impl Banner {
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self { message: message.into(), success: true }
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self { message: message.into(), success: false }
    }

    /// Banner for a fetch outcome: the given success text, or the error's
    /// display message ("Error: ...").
    #[must_use]
    pub fn from_outcome(outcome: &Result<(), FetchError>, success_message: &str) -> Self {
        match outcome {
            Ok(()) => Self::success(success_message),
            Err(err) => Self::error(err.banner_message()),
        }
    }

    /// Banner for an action-layer result. Failures render as "Error: ...",
    /// matching the form banners.
    #[must_use]
    pub fn from_action(result: &ActionResult) -> Self {
        if result.success {
            Self::success(result.message.clone())
        } else {
            Self::error(format!("Error: {}", result.message))
        }
    }
}

/// Renders the current banner, if any.
#[component]
pub fn BannerView(banner: RwSignal<Option<Banner>>) -> impl IntoView {
    view! {
        <Show when=move || banner.get().is_some()>
            {move || {
                let b = banner.get().unwrap_or_else(|| Banner::error(""));
                view! {
                    <div
                        class="form-banner"
                        class:form-banner--success=b.success
                        class:form-banner--error=!b.success
                    >
                        {b.message}
                    </div>
                }
            }}
        </Show>
    }
}
