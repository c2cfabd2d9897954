//! Project gallery filtering and card preview helpers.

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

use crate::data::projects::{Category, Project};

/// Technologies shown on a gallery card before collapsing into "+N more".
pub const CARD_TECH_LIMIT: usize = 3;

/// Category selector above the gallery grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GalleryFilter {
    #[default]
    All,
    Mobile,
    Desktop,
    Web,
}

impl GalleryFilter {
    /// Filter buttons in display order.
    pub const ALL: [Self; 4] = [Self::All, Self::Mobile, Self::Desktop, Self::Web];

    #[must_use]
    pub fn category(self) -> Option<Category> {
        match self {
            Self::All => None,
            Self::Mobile => Some(Category::Mobile),
            Self::Desktop => Some(Category::Desktop),
            Self::Web => Some(Category::Web),
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        self.category().map_or("All", Category::label)
    }

    #[must_use]
    pub fn matches(self, category: Category) -> bool {
        self.category().is_none_or(|c| c == category)
    }

    /// Parse a lowercase selector (`all`, `mobile`, `desktop`, `web`).
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        if raw == "all" {
            return Some(Self::All);
        }
        Category::parse(raw).map(Self::from)
    }
}

impl From<Category> for GalleryFilter {
    fn from(category: Category) -> Self {
        match category {
            Category::Mobile => Self::Mobile,
            Category::Desktop => Self::Desktop,
            Category::Web => Self::Web,
        }
    }
}

/// Projects visible under `filter`, in catalog order.
#[must_use]
pub fn filter_projects(catalog: &[Project], filter: GalleryFilter) -> Vec<&Project> {
    catalog.iter().filter(|p| filter.matches(p.category)).collect()
}

/// Leading technologies on a card plus the count folded into "+N more".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TechPreview {
    pub shown: &'static [&'static str],
    pub hidden: usize,
}

impl TechPreview {
    #[must_use]
    pub fn of(project: &Project) -> Self {
        let techs = project.technologies;
        let cut = techs.len().min(CARD_TECH_LIMIT);
        Self { shown: &techs[..cut], hidden: techs.len() - cut }
    }

    #[must_use]
    pub fn more_label(&self) -> Option<String> {
        (self.hidden > 0).then(|| format!("+{} more", self.hidden))
    }
}
