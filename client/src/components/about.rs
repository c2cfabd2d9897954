//! About section.

use leptos::prelude::*;

use crate::data::profile::{ABOUT_PARAGRAPHS, DEGREE, UNIVERSITY};

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="about">
            <h2 class="section-title">"About Me"</h2>
            <div class="about__text">
                {ABOUT_PARAGRAPHS.iter().map(|p| view! { <p>{*p}</p> }).collect_view()}
            </div>
            <div class="about__education">
                <h3>"Education"</h3>
                <p class="about__degree">{DEGREE}</p>
                <p class="about__university">{UNIVERSITY}</p>
            </div>
        </section>
    }
}
