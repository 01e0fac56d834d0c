use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CategoryParseError;

/// Closed set of tags partitioning the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Buttons,
    Loaders,
    Progress,
    Skeleton,
}

impl Category {
    /// Canonical order used by filter chrome.
    pub const ALL: [Category; 4] = [
        Category::Buttons,
        Category::Loaders,
        Category::Progress,
        Category::Skeleton,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Buttons => "buttons",
            Category::Loaders => "loaders",
            Category::Progress => "progress",
            Category::Skeleton => "skeleton",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| CategoryParseError::Unknown(s.to_string()))
    }
}

/// Filter selection: either the `all` pseudo-category or one real category.
///
/// `all` only ever appears here; entries never carry it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub const ALL_LITERAL: &'static str = "all";

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryFilter::All => Self::ALL_LITERAL,
            CategoryFilter::Only(category) => category.as_str(),
        }
    }

    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => *selected == category,
        }
    }

    /// Every selectable filter, `all` first.
    pub fn choices() -> impl Iterator<Item = CategoryFilter> {
        std::iter::once(CategoryFilter::All).chain(Category::ALL.into_iter().map(Self::Only))
    }
}

impl Display for CategoryFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryFilter {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == Self::ALL_LITERAL {
            return Ok(CategoryFilter::All);
        }
        s.parse().map(CategoryFilter::Only)
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}

impl TryFrom<String> for CategoryFilter {
    type Error = CategoryParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CategoryFilter> for String {
    fn from(filter: CategoryFilter) -> Self {
        filter.as_str().to_string()
    }
}
