//! Overlay with the full write-up of the selected project.
//!
//! DESIGN
//! ======
//! Rendering follows `ModalState`; the body scroll lock follows it too. The
//! lock guard lives in a stored value that `scroll_lock::sync` keeps in step
//! with `is_open()` from an effect; `on_cleanup` syncs it closed if the
//! component unmounts while open.

use leptos::prelude::*;

use crate::components::screenshot_carousel::ScreenshotCarousel;
use crate::data::projects::Project;
use crate::state::modal::{ModalState, ProjectDetail};
use crate::util::scroll_lock::{self, DocumentScroll, ScrollLock};

#[component]
pub fn ProjectDetailModal() -> impl IntoView {
    let modal = expect_context::<RwSignal<ModalState>>();
    let lock = StoredValue::new(None::<ScrollLock<DocumentScroll>>);

    Effect::new(move || {
        let open = modal.with(ModalState::is_open);
        lock.update_value(|slot| scroll_lock::sync(slot, open, || DocumentScroll));
    });
    on_cleanup(move || {
        lock.try_update_value(|slot| scroll_lock::sync(slot, false, || DocumentScroll));
    });

    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::keydown, move |ev| {
            if ev.key() == "Escape" && modal.with_untracked(ModalState::is_open) {
                ev.prevent_default();
                modal.update(ModalState::close);
            }
        });
        on_cleanup(move || handle.remove());
    }

    let on_close = Callback::new(move |()| modal.update(ModalState::close));

    move || {
        modal
            .with(ModalState::project)
            .map(|project| view! { <ProjectDetailDialog project=project on_close=on_close/> })
    }
}

#[component]
fn ProjectDetailDialog(project: &'static Project, on_close: Callback<()>) -> impl IntoView {
    let detail = ProjectDetail::new(project);
    let (category_icon, category_label) = detail.category_badge();

    view! {
        <div class="project-modal__backdrop" on:click=move |_| on_close.run(())>
            <div
                class="project-modal"
                role="dialog"
                aria-modal="true"
                aria-label=detail.title()
                on:click=move |ev| ev.stop_propagation()
            >
                <div class="project-modal__hero">
                    {detail
                        .header_image()
                        .map(|src| view! { <img class="project-modal__hero-image" src=src alt=detail.title()/> })}
                    <span class="project-modal__badge">{category_icon} " " {category_label}</span>
                </div>

                <div class="project-modal__header">
                    <div>
                        <h2 class="project-modal__title">{detail.title()}</h2>
                        <span class="project-modal__type">{detail.type_label()}</span>
                    </div>
                    <button class="project-modal__close" on:click=move |_| on_close.run(()) title="Close">
                        "✕"
                    </button>
                </div>

                {(!detail.screenshots().is_empty())
                    .then(|| view! { <ScreenshotCarousel screenshots=detail.screenshots() title=detail.title()/> })}

                <section class="project-modal__section">
                    <h3>"Overview"</h3>
                    <p>{detail.overview()}</p>
                </section>

                <div class="project-modal__facts">
                    {detail
                        .facts()
                        .into_iter()
                        .map(|fact| {
                            view! {
                                <div class="project-modal__fact">
                                    <span class="project-modal__fact-icon">{fact.icon}</span>
                                    <span class="project-modal__fact-label">{fact.label}</span>
                                    <span class="project-modal__fact-value">{fact.value}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <section class="project-modal__section">
                    <h3>"Technologies"</h3>
                    <div class="project-modal__tech">
                        {project.technologies.iter().map(|tech| view! { <span class="tech-chip">{*tech}</span> }).collect_view()}
                    </div>
                </section>

                <BulletSection title="Key Features" items=detail.features()/>
                <BulletSection title="My Contribution" items=detail.contribution()/>

                {detail
                    .challenges_and_solutions()
                    .map(|(challenges, solutions)| {
                        view! {
                            <div class="project-modal__columns">
                                <BulletSection title="Challenges" items=challenges/>
                                <BulletSection title="Solutions" items=solutions/>
                            </div>
                        }
                    })}

                <div class="project-modal__links">
                    {detail
                        .links()
                        .into_iter()
                        .map(|link| {
                            view! {
                                <a
                                    class=if link.primary { "button button--primary" } else { "button button--ghost" }
                                    href=link.href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                >
                                    {link.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

/// Titled bullet list; renders nothing when `items` is empty.
#[component]
fn BulletSection(title: &'static str, items: &'static [&'static str]) -> impl IntoView {
    (!items.is_empty()).then(|| {
        view! {
            <section class="project-modal__section">
                <h3>{title}</h3>
                <ul>{items.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}</ul>
            </section>
        }
    })
}
