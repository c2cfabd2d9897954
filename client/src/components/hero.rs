//! Landing section with the typewriter role line and primary actions.

use leptos::prelude::*;

use crate::data::profile::{CV_PATH, DEGREE, GITHUB_URL, HERO_ROLES, OWNER_NAME, PROFILE_PICTURE, UNIVERSITY};
use crate::state::typewriter::Typewriter;
use crate::util::browser;

#[component]
pub fn Hero() -> impl IntoView {
    let typed = RwSignal::new(Typewriter::new(HERO_ROLES));

    #[cfg(feature = "hydrate")]
    {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                let Some(delay) = typed.try_with_untracked(Typewriter::delay_ms) else {
                    break;
                };
                gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(delay))).await;
                if !alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                typed.try_update(Typewriter::tick);
            }
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    view! {
        <section id="home" class="hero">
            <div class="hero__content">
                <img class="hero__picture" src=PROFILE_PICTURE alt=OWNER_NAME/>
                <p class="hero__greeting">"Hello, I'm"</p>
                <h1 class="hero__name">{OWNER_NAME}</h1>
                <p class="hero__role">
                    <span class="hero__typed">{move || typed.with(Typewriter::text)}</span>
                    <span class="hero__cursor">"|"</span>
                </p>
                <p class="hero__degree">{DEGREE}</p>
                <p class="hero__university">{UNIVERSITY}</p>
                <div class="hero__actions">
                    <button class="button button--primary" on:click=move |_| browser::open_in_new_tab(CV_PATH)>
                        "View CV"
                    </button>
                    <button
                        class="button button--secondary"
                        on:click=move |_| browser::scroll_to_section("contact")
                    >
                        "Contact Me"
                    </button>
                    <button class="button button--ghost" on:click=move |_| browser::open_in_new_tab(GITHUB_URL)>
                        "GitHub"
                    </button>
                </div>
            </div>
        </section>
    }
}
