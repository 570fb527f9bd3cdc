//! Category models and selection state
//!
//! Services use a closed set of four categories. Publication categories are
//! free-form tags, so their tab selection is an open set.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of the "show everything" selection
pub const ALL: &str = "all";

/// The fixed service categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceCategory {
    Audit,
    Business,
    Tax,
    Advisory,
}

impl ServiceCategory {
    /// Get all categories in display order
    pub fn all() -> &'static [Self] {
        &[Self::Audit, Self::Business, Self::Tax, Self::Advisory]
    }

    /// The identifier used in data files and on the command line
    pub fn id(&self) -> &'static str {
        match self {
            Self::Audit => "audit",
            Self::Business => "business",
            Self::Tax => "tax",
            Self::Advisory => "advisory",
        }
    }

    /// Display label for tabs and headings
    pub fn label(&self) -> &'static str {
        match self {
            Self::Audit => "Audit & Assurance",
            Self::Business => "Business Services",
            Self::Tax => "Tax Services",
            Self::Advisory => "Advisory",
        }
    }
}

impl fmt::Display for ServiceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ServiceCategory {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|c| c.id() == needle)
            .ok_or_else(|| CategoryParseError(s.to_string()))
    }
}

/// Error for unknown service category identifiers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryParseError(pub String);

impl fmt::Display for CategoryParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown category '{}' (expected all, audit, business, tax or advisory)",
            self.0
        )
    }
}

impl std::error::Error for CategoryParseError {}

/// Active filter on the services page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(ServiceCategory),
}

impl CategoryFilter {
    /// Every selectable filter, `All` first
    pub fn options() -> Vec<Self> {
        std::iter::once(Self::All)
            .chain(ServiceCategory::all().iter().copied().map(Self::Only))
            .collect()
    }

    /// Whether a service in `category` passes this filter
    pub fn matches(&self, category: ServiceCategory) -> bool {
        match self {
            Self::All => true,
            Self::Only(c) => *c == category,
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            Self::All => ALL,
            Self::Only(c) => c.id(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All Services",
            Self::Only(c) => c.label(),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case(ALL) {
            return Ok(Self::All);
        }
        s.parse().map(Self::Only)
    }
}

/// Active tab on the media page
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PublicationTab {
    #[default]
    All,
    Category(String),
}

impl PublicationTab {
    /// Build a tab from its identifier; `"all"` selects everything
    pub fn from_id(id: &str) -> Self {
        let id = id.trim();
        if id.eq_ignore_ascii_case(ALL) {
            Self::All
        } else {
            Self::Category(id.to_string())
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Self::All => ALL,
            Self::Category(c) => c,
        }
    }

    /// Whether a publication tagged `category` shows under this tab
    pub fn matches(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Category(c) => c == category,
        }
    }
}

impl fmt::Display for PublicationTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
