//! Project detail modal state and its view model.
//!
//! DESIGN
//! ======
//! `ModalState` is the open/closed flag and the selected record in one value,
//! so a modal can never be open without a project. The body scroll lock is
//! not stored here: the modal component owns a `ScrollLock` guard whose
//! lifetime follows `is_open()`.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

use crate::data::projects::{Project, find_project};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    Open(&'static Project),
}

impl ModalState {
    /// Open the modal on the project with `id`.
    ///
    /// Returns `false` and leaves the state untouched when the id is unknown.
    pub fn open(&mut self, id: &str) -> bool {
        match find_project(id) {
            Some(project) => {
                *self = Self::Open(project);
                true
            }
            None => false,
        }
    }

    pub fn close(&mut self) {
        *self = Self::Closed;
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }

    #[must_use]
    pub fn project(&self) -> Option<&'static Project> {
        match self {
            Self::Open(project) => Some(project),
            Self::Closed => None,
        }
    }
}

/// Labelled fact tile in the modal summary row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fact {
    pub label: &'static str,
    pub value: String,
    pub icon: &'static str,
}

/// External link rendered in the modal footer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProjectLink {
    pub label: &'static str,
    pub href: &'static str,
    pub primary: bool,
}

/// Everything the detail modal renders for one project. Absent optional
/// fields produce empty sections, which the component omits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProjectDetail {
    project: &'static Project,
}

impl ProjectDetail {
    #[must_use]
    pub fn new(project: &'static Project) -> Self {
        Self { project }
    }

    #[must_use]
    pub fn title(&self) -> &'static str {
        self.project.title
    }

    #[must_use]
    pub fn overview(&self) -> &'static str {
        self.project.overview()
    }

    /// Hero image shown above the title, independent of screenshots.
    #[must_use]
    pub fn header_image(&self) -> Option<&'static str> {
        self.project.image
    }

    /// Icon and label for the category badge on the hero.
    #[must_use]
    pub fn category_badge(&self) -> (&'static str, &'static str) {
        let category = self.project.category;
        (category.icon(), category.label())
    }

    #[must_use]
    pub fn type_label(&self) -> String {
        format!("{} Application", self.project.category.label())
    }

    /// Duration and team tiles when present, then the always-present type tile.
    #[must_use]
    pub fn facts(&self) -> Vec<Fact> {
        let mut facts = Vec::with_capacity(3);
        if let Some(duration) = self.project.duration {
            facts.push(Fact { label: "Duration", value: duration.to_owned(), icon: "📅" });
        }
        if let Some(team) = self.project.team {
            facts.push(Fact { label: "Team", value: team.to_owned(), icon: "👥" });
        }
        facts.push(Fact { label: "Type", value: self.type_label(), icon: "</>" });
        facts
    }

    #[must_use]
    pub fn features(&self) -> &'static [&'static str] {
        self.project.features.unwrap_or(&[])
    }

    #[must_use]
    pub fn contribution(&self) -> &'static [&'static str] {
        self.project.my_contribution.unwrap_or(&[])
    }

    /// Challenges and solutions render side by side, only when both exist.
    #[must_use]
    pub fn challenges_and_solutions(&self) -> Option<(&'static [&'static str], &'static [&'static str])> {
        self.project.challenges.zip(self.project.solutions)
    }

    #[must_use]
    pub fn links(&self) -> Vec<ProjectLink> {
        let mut links = Vec::with_capacity(2);
        if let Some(href) = self.project.github {
            links.push(ProjectLink { label: "View Source Code", href, primary: false });
        }
        if let Some(href) = self.project.demo {
            links.push(ProjectLink { label: "Live Demo", href, primary: true });
        }
        links
    }

    #[must_use]
    pub fn screenshots(&self) -> &'static [&'static str] {
        self.project.screenshot_list()
    }
}
