//! Screenshot slider inside the detail modal.
//!
//! Arrow buttons and dots drive [`Carousel`]; a horizontal pointer drag past
//! the swipe threshold steps one slide.

use leptos::prelude::*;

use crate::state::carousel::{Carousel, SwipeTracker};

#[component]
pub fn ScreenshotCarousel(screenshots: &'static [&'static str], title: &'static str) -> impl IntoView {
    let carousel = RwSignal::new(Carousel::new(screenshots.len()));
    let swipe = StoredValue::new(SwipeTracker::default());
    let multiple = screenshots.len() > 1;

    let on_pointer_down = move |ev: leptos::ev::PointerEvent| {
        swipe.update_value(|s| s.begin(f64::from(ev.client_x())));
    };
    let on_pointer_up = move |ev: leptos::ev::PointerEvent| {
        let x = f64::from(ev.client_x());
        if let Some(direction) = swipe.try_update_value(|s| s.end(x)).flatten() {
            carousel.update(|c| c.apply(direction));
        }
    };
    let on_pointer_cancel = move |_: leptos::ev::PointerEvent| swipe.update_value(SwipeTracker::cancel);

    view! {
        <div class="carousel">
            <div
                class="carousel__viewport"
                on:pointerdown=on_pointer_down
                on:pointerup=on_pointer_up
                on:pointercancel=on_pointer_cancel
                on:pointerleave=on_pointer_cancel
            >
                {move || {
                    let index = carousel.with(Carousel::index);
                    screenshots
                        .get(index)
                        .map(|src| {
                            view! {
                                <img
                                    class="carousel__image"
                                    src=*src
                                    alt=format!("{title} screenshot {}", index + 1)
                                    draggable="false"
                                />
                            }
                        })
                }}
            </div>
            <Show when=move || multiple>
                <button class="carousel__arrow carousel__arrow--prev" on:click=move |_| carousel.update(Carousel::retreat) aria-label="Previous screenshot">
                    "‹"
                </button>
                <button class="carousel__arrow carousel__arrow--next" on:click=move |_| carousel.update(Carousel::advance) aria-label="Next screenshot">
                    "›"
                </button>
                <div class="carousel__dots">
                    {(0..screenshots.len())
                        .map(|i| {
                            view! {
                                <button
                                    class=move || {
                                        if carousel.with(Carousel::index) == i {
                                            "carousel__dot carousel__dot--active"
                                        } else {
                                            "carousel__dot"
                                        }
                                    }
                                    on:click=move |_| carousel.update(|c| c.go_to(i))
                                    aria-label=format!("Screenshot {}", i + 1)
                                ></button>
                            }
                        })
                        .collect_view()}
                </div>
                <span class="carousel__counter">{move || carousel.with(Carousel::position_label)}</span>
            </Show>
        </div>
    }
}
