//! Publication catalog accessors
//!
//! Backs the media page: distinct categories, the tab strip, tab filtering
//! and the "featured" selection of the most recent publications.

use std::cmp::Reverse;

use crate::models::{Publication, PublicationTab};
use crate::storage::Storage;

use super::labels::tab_label;

/// Default number of featured publications
pub const DEFAULT_FEATURED_COUNT: usize = 4;

/// Query layer over the publication catalog
pub struct PublicationCatalog<'a> {
    publications: &'a [Publication],
}

/// A selectable tab on the media page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabEntry {
    pub tab: PublicationTab,
    pub label: String,
}

impl<'a> PublicationCatalog<'a> {
    /// Create a catalog view over the loaded storage
    pub fn new(storage: &'a Storage) -> Self {
        Self::from_slice(storage.publications.all())
    }

    /// Create a catalog view over an in-memory slice
    pub fn from_slice(publications: &'a [Publication]) -> Self {
        Self { publications }
    }

    pub fn all(&self) -> &'a [Publication] {
        self.publications
    }

    pub fn len(&self) -> usize {
        self.publications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.publications.is_empty()
    }

    /// Find a publication by id
    pub fn get_by_id(&self, id: &str) -> Option<&'a Publication> {
        self.publications.iter().find(|p| p.id.as_str() == id)
    }

    /// Unique category values present in the catalog.
    ///
    /// The order is first-seen, but callers should not rely on it.
    pub fn distinct_categories(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for publication in self.publications {
            if !seen.iter().any(|c| *c == publication.category) {
                seen.push(publication.category.clone());
            }
        }
        seen
    }

    /// `All` followed by one tab per distinct category
    pub fn tabs(&self) -> Vec<TabEntry> {
        std::iter::once(PublicationTab::All)
            .chain(
                self.distinct_categories()
                    .into_iter()
                    .map(PublicationTab::Category),
            )
            .map(|tab| TabEntry {
                label: tab_label(&tab).to_string(),
                tab,
            })
            .collect()
    }

    /// Publications under the given tab, in catalog order
    pub fn filter_by_tab(&self, tab: &PublicationTab) -> Vec<&'a Publication> {
        self.publications
            .iter()
            .filter(|p| tab.matches(&p.category))
            .collect()
    }

    /// The `count` most recent publications.
    ///
    /// Sorted by date descending with a stable sort, so equal dates keep
    /// catalog order. Unparseable dates sort after every valid date.
    pub fn featured(&self, count: usize) -> Vec<&'a Publication> {
        let mut sorted: Vec<&Publication> = self.publications.iter().collect();
        sorted.sort_by_key(|p| match p.parsed_date() {
            Some(date) => (0, Reverse(date)),
            None => (1, Reverse(chrono::NaiveDate::MIN)),
        });
        sorted.truncate(count);
        sorted
    }
}
