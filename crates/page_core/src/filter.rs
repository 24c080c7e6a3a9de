//! Category filter over the catalog.

use shared::domain::{Category, PortfolioItem};

use crate::catalog::Catalog;

pub const ALL_LABEL: &str = "All";

/// Current category selection.
///
/// Labels that name no category are kept as-is and simply match nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
    Unrecognized(String),
}

impl CategoryFilter {
    pub fn parse(label: &str) -> Self {
        if label == ALL_LABEL {
            return CategoryFilter::All;
        }
        match label.parse::<Category>() {
            Ok(category) => CategoryFilter::Only(category),
            Err(_) => CategoryFilter::Unrecognized(label.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_LABEL,
            CategoryFilter::Only(category) => category.label(),
            CategoryFilter::Unrecognized(label) => label,
        }
    }

    pub fn matches(&self, item: &PortfolioItem) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => item.category == *category,
            CategoryFilter::Unrecognized(_) => false,
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}

/// Render props for one filter button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryOption {
    pub filter: CategoryFilter,
    pub label: &'static str,
    pub is_selected: bool,
}

#[derive(Debug, Clone, Default)]
pub struct FilterController {
    selected: CategoryFilter,
}

impl FilterController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> &CategoryFilter {
        &self.selected
    }

    pub fn select(&mut self, filter: CategoryFilter) {
        if self.selected != filter {
            tracing::debug!(from = self.selected.label(), to = filter.label(), "category selected");
        }
        self.selected = filter;
    }

    pub fn select_label(&mut self, label: &str) {
        self.select(CategoryFilter::parse(label));
    }

    /// Entries matching the current selection, in catalog order.
    pub fn visible_items(&self, catalog: &Catalog) -> Vec<&'static PortfolioItem> {
        catalog
            .items()
            .iter()
            .filter(|item| self.selected.matches(item))
            .collect()
    }

    /// "All" followed by every category, flagged against the current selection.
    pub fn options(&self) -> Vec<CategoryOption> {
        std::iter::once((CategoryFilter::All, ALL_LABEL))
            .chain(
                Category::ALL
                    .into_iter()
                    .map(|category| (CategoryFilter::Only(category), category.label())),
            )
            .map(|(filter, label)| CategoryOption {
                is_selected: filter == self.selected,
                filter,
                label,
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "tests/filter_tests.rs"]
mod tests;
