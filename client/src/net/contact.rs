//! Contact form transport.
//!
//! Client-side (hydrate): one URL-encoded POST to the form backend via
//! `gloo-net`. Server-side (SSR): a stub error, since submission only happens
//! in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Non-OK responses and transport failures both come back as [`SubmitError`];
//! callers turn them into a user-facing notice. There is no retry.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use crate::state::contact::ContactForm;

/// Third-party form backend receiving contact submissions.
pub const FORM_ENDPOINT: &str = "https://formspree.io/f/mqaqdbdz";

/// Errors produced by a contact submission.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// The form backend answered with a non-success status.
    #[error("form backend rejected submission: status {status}")]
    Rejected { status: u16 },

    /// The request never produced a response.
    #[error("form submission failed: {0}")]
    Network(String),
}

impl SubmitError {
    /// Message shown under the form.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Rejected { .. } => "Something went wrong. Please try again.",
            Self::Network(_) => "An error occurred. Please try again.",
        }
    }
}

/// Map an HTTP status to a submission outcome. Any 2xx counts as delivered.
///
/// # Errors
///
/// Returns [`SubmitError::Rejected`] for every non-2xx status.
pub fn check_status(status: u16) -> Result<(), SubmitError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(SubmitError::Rejected { status })
    }
}

/// POST the form fields to [`FORM_ENDPOINT`].
///
/// # Errors
///
/// Returns [`SubmitError::Rejected`] on a non-OK response and
/// [`SubmitError::Network`] when the request itself fails.
pub async fn submit_contact(form: &ContactForm) -> Result<(), SubmitError> {
    #[cfg(feature = "hydrate")]
    {
        let params = web_sys::UrlSearchParams::new().map_err(|e| SubmitError::Network(format!("{e:?}")))?;
        for (name, value) in form.fields() {
            params.append(name, value);
        }
        let resp = gloo_net::http::Request::post(FORM_ENDPOINT)
            .header("Accept", "application/json")
            .body(params)
            .map_err(|e| SubmitError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| SubmitError::Network(e.to_string()))?;
        check_status(resp.status())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = form;
        Err(SubmitError::Network("not available on server".to_owned()))
    }
}
