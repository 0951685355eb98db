//! Static portfolio catalog and the category filter behind the gallery tabs.

use serde::{Deserialize, Serialize};

/// Gallery category of a finished piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PortfolioCategory {
    Portraits,
    Traditional,
    Family,
    Abstract,
}

impl PortfolioCategory {
    pub const ALL: [PortfolioCategory; 4] = [
        PortfolioCategory::Portraits,
        PortfolioCategory::Traditional,
        PortfolioCategory::Family,
        PortfolioCategory::Abstract,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            PortfolioCategory::Portraits => "portraits",
            PortfolioCategory::Traditional => "traditional",
            PortfolioCategory::Family => "family",
            PortfolioCategory::Abstract => "abstract",
        }
    }

    /// Label shown on the filter tab.
    pub fn tab_label(&self) -> &'static str {
        match self {
            PortfolioCategory::Portraits => "Celebrity Portraits",
            PortfolioCategory::Traditional => "Traditional Art",
            PortfolioCategory::Family => "Family Portraits",
            PortfolioCategory::Abstract => "Abstract",
        }
    }
}

/// Selected gallery tab. `All` is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(PortfolioCategory),
}

impl CategoryFilter {
    /// Tabs in display order: "All Work" first, then each category.
    pub fn tabs() -> impl Iterator<Item = CategoryFilter> {
        std::iter::once(CategoryFilter::All)
            .chain(PortfolioCategory::ALL.into_iter().map(CategoryFilter::Only))
    }

    pub fn id(&self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(c) => c.id(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All Work",
            CategoryFilter::Only(c) => c.tab_label(),
        }
    }

    pub fn matches(&self, category: PortfolioCategory) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => *c == category,
        }
    }
}

/// A finished piece shown in the gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortfolioItem {
    pub category: PortfolioCategory,
    pub title: &'static str,
    pub image: &'static str,
}

/// Gallery contents in display order.
pub const CATALOG: &[PortfolioItem] = &[
    PortfolioItem {
        category: PortfolioCategory::Portraits,
        title: "Celebrity Portrait",
        image: "https://images.unsplash.com/photo-1602773842897-90aea5e63427",
    },
    PortfolioItem {
        category: PortfolioCategory::Traditional,
        title: "Classical Dancer",
        image: "https://images.unsplash.com/photo-1479813183133-f2e9b38ed6c4",
    },
    PortfolioItem {
        category: PortfolioCategory::Portraits,
        title: "Portrait Study",
        image: "https://images.pexels.com/photos/32311678/pexels-photo-32311678.jpeg",
    },
    PortfolioItem {
        category: PortfolioCategory::Traditional,
        title: "Traditional Dancer",
        image: "https://images.unsplash.com/photo-1479812627010-aa5bd9d173b1",
    },
    PortfolioItem {
        category: PortfolioCategory::Family,
        title: "Family Portrait",
        image: "https://images.unsplash.com/photo-1579167728798-a1cf3d595960",
    },
    PortfolioItem {
        category: PortfolioCategory::Traditional,
        title: "Cultural Art",
        image: "https://images.pexels.com/photos/1162983/pexels-photo-1162983.jpeg",
    },
];

/// Items visible under `filter`, in catalog order.
pub fn visible_items(catalog: &[PortfolioItem], filter: CategoryFilter) -> Vec<PortfolioItem> {
    catalog
        .iter()
        .filter(|item| filter.matches(item.category))
        .copied()
        .collect()
}
