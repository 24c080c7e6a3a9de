//! Fixed page content: the portfolio catalog plus the static copy shown around it.

use std::collections::HashSet;

use shared::domain::{Category, Highlight, ItemId, PortfolioItem, ProfileStat};
use thiserror::Error;

pub const BRAND_NAME: &str = "ALEX CHEN";
pub const HERO_TITLE: &str = "3D ARTIST";
pub const HERO_TAGLINE: &str = "Creating Digital Worlds";
pub const HERO_INTRO: &str = "Bringing imagination to life through cutting-edge 3D artistry, architectural visualization, and immersive digital experiences.";
pub const ABOUT_PARAGRAPHS: [&str; 2] = [
    "With over 8 years of experience in 3D artistry, I specialize in creating stunning visual experiences that bridge the gap between imagination and reality. My work spans across architectural visualization, character design, and immersive digital environments.",
    "I believe in the power of visual storytelling and strive to create art that not only looks beautiful but also evokes emotion and tells a story.",
];
pub const CONTACT_PITCH: &str = "Ready to bring your vision to life? Let's create something amazing together.";
pub const FOOTER_TAGLINE: &str = "Creating digital worlds, one polygon at a time.";
pub const COPYRIGHT: &str = "© 2024 Alex Chen. All rights reserved.";

/// In-page anchors, in navigation order.
pub const SECTION_ANCHORS: [&str; 4] = ["Home", "About", "Portfolio", "Contact"];

const PLACEHOLDER_IMAGE: &str = "/placeholder.svg?height=400&width=600";

static PORTFOLIO_ITEMS: [PortfolioItem; 6] = [
    PortfolioItem {
        id: ItemId(1),
        title: "Cyberpunk Cityscape",
        category: Category::Environment,
        software: "Blender",
        image: PLACEHOLDER_IMAGE,
        description: "A futuristic cyberpunk city with neon lighting and atmospheric effects.",
    },
    PortfolioItem {
        id: ItemId(2),
        title: "Organic Sculpture",
        category: Category::Sculpture,
        software: "ZBrush",
        image: PLACEHOLDER_IMAGE,
        description: "Abstract organic form exploring natural curves and textures.",
    },
    PortfolioItem {
        id: ItemId(3),
        title: "Mechanical Robot",
        category: Category::Character,
        software: "Maya",
        image: PLACEHOLDER_IMAGE,
        description: "Highly detailed mechanical robot with intricate components.",
    },
    PortfolioItem {
        id: ItemId(4),
        title: "Fantasy Weapon",
        category: Category::Props,
        software: "Blender",
        image: PLACEHOLDER_IMAGE,
        description: "Mystical fantasy sword with magical elements and detailed textures.",
    },
    PortfolioItem {
        id: ItemId(5),
        title: "Architectural Visualization",
        category: Category::Architecture,
        software: "3ds Max",
        image: PLACEHOLDER_IMAGE,
        description: "Modern architectural visualization with realistic lighting.",
    },
    PortfolioItem {
        id: ItemId(6),
        title: "Character Portrait",
        category: Category::Character,
        software: "ZBrush",
        image: PLACEHOLDER_IMAGE,
        description: "Realistic character portrait with detailed facial features.",
    },
];

pub static HIGHLIGHTS: [Highlight; 2] = [
    Highlight {
        title: "Award-Winning Architectural Visualization",
        description: "Created a photorealistic visualization for a luxury resort that won the International Architecture Award 2023.",
        image: PLACEHOLDER_IMAGE,
        stats: [
            "2M+ Views",
            "Featured in ArchDaily",
            "Client: Luxury Resorts Inc.",
        ],
    },
    Highlight {
        title: "Character Design for AAA Game",
        description: "Designed and modeled the main character for an upcoming AAA video game title, focusing on realistic anatomy and detailed texturing.",
        image: PLACEHOLDER_IMAGE,
        stats: [
            "6 Months Development",
            "50+ Iterations",
            "Client: Major Game Studio",
        ],
    },
];

pub static PROFILE_STATS: [ProfileStat; 4] = [
    ProfileStat {
        label: "Projects Completed",
        value: "150+",
    },
    ProfileStat {
        label: "Years Experience",
        value: "8+",
    },
    ProfileStat {
        label: "Happy Clients",
        value: "80+",
    },
    ProfileStat {
        label: "Awards Won",
        value: "12",
    },
];

/// (label, value) pairs for the contact sidebar.
pub static CONTACT_DETAILS: [(&str, &str); 3] = [
    ("Email", "alex.chen@3dartist.com"),
    ("Phone", "+1 (555) 123-4567"),
    ("Location", "San Francisco, CA"),
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("portfolio item ids must be positive")]
    ZeroId,
    #[error("duplicate portfolio item id {0}")]
    DuplicateId(u32),
    #[error("portfolio item {0} has an empty title")]
    EmptyTitle(u32),
}

/// Immutable view over the portfolio entries. Order is display order.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    items: &'static [PortfolioItem],
}

impl Catalog {
    pub fn new(items: &'static [PortfolioItem]) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in items {
            if item.id.0 == 0 {
                return Err(CatalogError::ZeroId);
            }
            if !seen.insert(item.id) {
                return Err(CatalogError::DuplicateId(item.id.0));
            }
            if item.title.trim().is_empty() {
                return Err(CatalogError::EmptyTitle(item.id.0));
            }
        }
        Ok(Self { items })
    }

    /// The shipped catalog, validated like any other. A rejected catalog is
    /// logged and replaced by an empty one.
    pub fn builtin() -> Self {
        Self::new(&PORTFOLIO_ITEMS).unwrap_or_else(|err| {
            tracing::error!(%err, "builtin portfolio catalog rejected");
            Self { items: &[] }
        })
    }

    pub fn items(&self) -> &'static [PortfolioItem] {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn find(&self, id: ItemId) -> Option<&'static PortfolioItem> {
        self.items.iter().find(|item| item.id == id)
    }
}

#[cfg(test)]
#[path = "tests/catalog_tests.rs"]
mod tests;
