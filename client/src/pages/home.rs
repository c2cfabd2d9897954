//! The portfolio page: every section in scroll order plus the overlays.

use leptos::prelude::*;

use crate::components::{
    about::About, back_to_top::BackToTop, contact_form::ContactSection, footer::Footer, hero::Hero, navbar::Navbar,
    project_detail_modal::ProjectDetailModal, project_gallery::ProjectGallery, skills::Skills,
};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Navbar/>
        <main class="page">
            <Hero/>
            <ProjectGallery/>
            <Skills/>
            <About/>
            <ContactSection/>
        </main>
        <Footer/>
        <BackToTop/>
        <ProjectDetailModal/>
    }
}
