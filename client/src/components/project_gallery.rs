//! Projects section: category filter bar and the card grid.

use leptos::prelude::*;

use crate::components::project_card::ProjectCard;
use crate::data::projects::PROJECTS;
use crate::state::gallery::{GalleryFilter, filter_projects};
use crate::state::modal::ModalState;

#[component]
pub fn ProjectGallery() -> impl IntoView {
    let modal = expect_context::<RwSignal<ModalState>>();
    let filter = RwSignal::new(GalleryFilter::default());
    let on_select = Callback::new(move |id: &'static str| {
        if !modal.try_update(|m| m.open(id)).unwrap_or(false) {
            leptos::logging::warn!("unknown project {id}");
        }
    });

    view! {
        <section id="projects" class="projects">
            <h2 class="section-title">"Projects"</h2>
            <div class="projects__filters" role="tablist">
                {GalleryFilter::ALL
                    .into_iter()
                    .map(|option| {
                        view! {
                            <button
                                class=move || {
                                    if filter.get() == option {
                                        "filter-button filter-button--active"
                                    } else {
                                        "filter-button"
                                    }
                                }
                                on:click=move |_| filter.set(option)
                            >
                                {option.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="projects__grid">
                {move || {
                    filter_projects(PROJECTS, filter.get())
                        .into_iter()
                        .map(|project| view! { <ProjectCard project=project on_select=on_select/> })
                        .collect_view()
                }}
            </div>
        </section>
    }
}
