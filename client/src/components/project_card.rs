//! Summary card in the project grid.

use leptos::prelude::*;

use crate::data::projects::Project;
use crate::state::gallery::TechPreview;

/// `on_select` receives the project id when the card or its button is clicked.
#[component]
pub fn ProjectCard(project: &'static Project, on_select: Callback<&'static str>) -> impl IntoView {
    let open = move |_: leptos::ev::MouseEvent| on_select.run(project.id);
    let preview = TechPreview::of(project);

    view! {
        <article class="project-card" on:click=open>
            {project.image.map(|src| view! { <img class="project-card__image" src=src alt=project.title loading="lazy"/> })}
            <div class="project-card__body">
                <span class="project-card__category">
                    {project.category.icon()}
                    " "
                    {project.category.label()}
                </span>
                <h3 class="project-card__title">{project.title}</h3>
                <p class="project-card__description">{project.description}</p>
                <div class="project-card__tech">
                    {preview.shown.iter().map(|tech| view! { <span class="tech-chip">{*tech}</span> }).collect_view()}
                    {preview.more_label().map(|more| view! { <span class="tech-chip tech-chip--more">{more}</span> })}
                </div>
                <div class="project-card__actions">
                    <button
                        class="button button--primary"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            open(ev);
                        }
                    >
                        "View Details"
                    </button>
                    {project.github.map(|href| {
                        view! {
                            <a
                                class="button button--ghost"
                                href=href
                                target="_blank"
                                rel="noopener noreferrer"
                                on:click=move |ev| ev.stop_propagation()
                            >
                                "GitHub"
                            </a>
                        }
                    })}
                </div>
            </div>
        </article>
    }
}
