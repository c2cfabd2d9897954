//! Contact section: details plus the message form.
//!
//! Submission runs on the browser task queue; the notice under the form is
//! dismissed after [`NOTICE_DISMISS_MS`] unless a newer one replaced it.

use leptos::prelude::*;

use crate::data::profile::{EMAIL, GITHUB_URL, LINKEDIN_LABEL, LINKEDIN_URL};
use crate::state::contact::{ContactState, Field, NOTICE_DISMISS_MS, NoticeKind};

#[component]
pub fn ContactSection() -> impl IntoView {
    let contact = RwSignal::new(ContactState::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let form = match contact.try_update(ContactState::begin_submit) {
            Some(Ok(form)) => form,
            Some(Err(Some(seq))) => {
                schedule_dismiss(contact, seq);
                return;
            }
            Some(Err(None)) | None => return,
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::contact::submit_contact(&form).await;
            if let Err(e) = &result {
                leptos::logging::warn!("contact submission failed: {e}");
            }
            if let Some(seq) = contact.try_update(|c| c.finish(result)) {
                schedule_dismiss(contact, seq);
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = form;
    };

    view! {
        <section id="contact" class="contact">
            <h2 class="section-title">"Contact Me"</h2>
            <div class="contact__layout">
                <div class="contact__info">
                    <h3>"Get In Touch"</h3>
                    <p>"Feel free to reach out for collaborations or just a friendly hello."</p>
                    <p class="contact__item">
                        <span>"✉ "</span>
                        <a href=format!("mailto:{EMAIL}")>{EMAIL}</a>
                    </p>
                    <p class="contact__item">
                        <span>"in "</span>
                        <a href=LINKEDIN_URL target="_blank" rel="noopener noreferrer">{LINKEDIN_LABEL}</a>
                    </p>
                    <p class="contact__item">
                        <span>"⌥ "</span>
                        <a href=GITHUB_URL target="_blank" rel="noopener noreferrer">"GitHub"</a>
                    </p>
                </div>
                <form class="contact-form" on:submit=on_submit novalidate>
                    <FormInput contact=contact field=Field::Name label="Name" kind="text"/>
                    <FormInput contact=contact field=Field::Email label="Email" kind="email"/>
                    <label class="contact-form__field">
                        <span>"Message"</span>
                        <textarea
                            class="contact-form__input"
                            name="message"
                            rows="5"
                            required
                            prop:value=move || contact.with(|c| c.form.message.clone())
                            on:input=move |ev| contact.update(|c| c.form.set(Field::Message, event_target_value(&ev)))
                        ></textarea>
                    </label>
                    <button class="button button--primary" type="submit" disabled=move || contact.with(|c| c.submitting)>
                        {move || if contact.with(|c| c.submitting) { "Sending..." } else { "Send Message" }}
                    </button>
                    {move || {
                        contact
                            .with(|c| c.notice.clone())
                            .map(|notice| {
                                let class = match notice.kind {
                                    NoticeKind::Success => "contact-form__notice contact-form__notice--success",
                                    NoticeKind::Error => "contact-form__notice contact-form__notice--error",
                                };
                                view! { <p class=class role="status">{notice.text}</p> }
                            })
                    }}
                </form>
            </div>
        </section>
    }
}

#[component]
fn FormInput(
    contact: RwSignal<ContactState>,
    field: Field,
    label: &'static str,
    kind: &'static str,
) -> impl IntoView {
    view! {
        <label class="contact-form__field">
            <span>{label}</span>
            <input
                class="contact-form__input"
                type=kind
                name=label.to_ascii_lowercase()
                required
                prop:value=move || contact.with(|c| c.form.get(field).to_owned())
                on:input=move |ev| contact.update(|c| c.form.set(field, event_target_value(&ev)))
            />
        </label>
    }
}

/// Clear notice `seq` after the display interval.
fn schedule_dismiss(contact: RwSignal<ContactState>, seq: u64) {
    #[cfg(feature = "hydrate")]
    gloo_timers::callback::Timeout::new(NOTICE_DISMISS_MS, move || {
        contact.try_update(|c| c.dismiss_notice(seq));
    })
    .forget();
    #[cfg(not(feature = "hydrate"))]
    let _ = (contact, seq, NOTICE_DISMISS_MS);
}
