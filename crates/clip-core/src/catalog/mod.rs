//! Catalog of animation entries.
//!
//! A [`Catalog`] is built once and never mutated. Controllers share it through
//! an `Arc<Catalog>`.

mod category;
mod entry;

use std::collections::HashMap;

use serde::Deserialize;
use tracing::debug;

pub use category::{Category, CategoryFilter};
pub use entry::{Entry, Preview, Renderer};

use crate::errors::CatalogError;
use crate::ids::EntryId;

const BUILTIN_CATALOG: &str = include_str!("../../assets/catalog.json");

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    entries: Vec<EntryRecord>,
}

#[derive(Debug, Deserialize)]
struct EntryRecord {
    id: EntryId,
    title: String,
    description: String,
    category: Category,
    component: String,
    payload: String,
}

impl From<EntryRecord> for Entry {
    fn from(record: EntryRecord) -> Self {
        Entry {
            id: record.id,
            title: record.title,
            description: record.description,
            category: record.category,
            payload: record.payload,
            render: Renderer::component(record.component),
        }
    }
}

#[derive(Debug)]
pub struct Catalog {
    entries: Vec<Entry>,
    index: HashMap<EntryId, usize>,
}

impl Catalog {
    /// Builds a catalog, keeping definition order. Fails on duplicate ids.
    pub fn from_entries(entries: Vec<Entry>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(entries.len());
        for (pos, entry) in entries.iter().enumerate() {
            if index.insert(entry.id.clone(), pos).is_some() {
                return Err(CatalogError::DuplicateId(entry.id.clone()));
            }
        }
        Ok(Self { entries, index })
    }

    /// Parses a JSON catalog document of the form `{"entries": [...]}`.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let doc: CatalogDocument = serde_json::from_str(json)?;
        Self::from_entries(doc.entries.into_iter().map(Entry::from).collect())
    }

    /// The gallery's bundled entries.
    pub fn builtin() -> Result<Self, CatalogError> {
        let catalog = Self::from_json(BUILTIN_CATALOG)?;
        debug!(entries = catalog.len(), "built-in catalog loaded");
        Ok(catalog)
    }

    pub fn all_entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn entries_by_category(&self, category: Category) -> impl Iterator<Item = &Entry> + '_ {
        self.entries.iter().filter(move |e| e.category == category)
    }

    /// Entries visible under `filter`, in catalog order.
    pub fn filtered(&self, filter: CategoryFilter) -> impl Iterator<Item = &Entry> + '_ {
        self.entries.iter().filter(move |e| filter.matches(e.category))
    }

    pub fn count(&self, filter: CategoryFilter) -> usize {
        match filter {
            CategoryFilter::All => self.entries.len(),
            CategoryFilter::Only(category) => self.entries_by_category(category).count(),
        }
    }

    pub fn entry_by_id(&self, id: &EntryId) -> Option<&Entry> {
        self.index.get(id).map(|&pos| &self.entries[pos])
    }

    pub fn categories(&self) -> &'static [Category] {
        &Category::ALL
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
