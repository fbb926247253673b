use crate::{Error, Result};
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Delimiter used by the data pipeline to join categories into one field.
pub const CATEGORY_DELIMITER: &str = ", ";

/// A raw catalog row as produced by the external data pipeline.
///
/// Categories arrive as a single delimited string; everything else is
/// carried through as-is. This is the serde boundary type — [`Item`] is
/// the parsed, indexed form the engine works with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemRecord {
    pub title: String,
    /// Categories joined with `", "`; may be empty.
    #[serde(default)]
    pub categories: String,
    /// Absent rating is distinct from a rating of zero.
    #[serde(default)]
    pub rating: Option<f32>,
    pub popularity: f32,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_ref: String,
    #[serde(default)]
    pub detail_url: String,
}

/// A catalog item with its stable dense identifier and parsed categories.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    /// Dense index in `[0, N)`, assigned in record order at build time.
    pub id: usize,
    pub title: String,
    pub categories: Vec<String>,
    pub rating: Option<f32>,
    pub popularity: f32,
    pub description: String,
    pub image_ref: String,
    pub detail_url: String,
}

/// Split a delimited category field, discarding empty tokens.
pub fn parse_categories(raw: &str) -> Vec<String> {
    raw.split(CATEGORY_DELIMITER)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Read-only indexed access to catalog items.
///
/// Built once at load time and never mutated afterwards, so shared
/// references are safe across threads without locking.
#[derive(Debug)]
pub struct CatalogStore {
    items: Vec<Item>,
    /// Lowercased title -> id. On duplicate lowercased titles the first
    /// record wins; `check_unique_titles` makes collisions detectable.
    title_index: AHashMap<String, usize>,
}

impl CatalogStore {
    /// Build a store from raw pipeline records.
    ///
    /// Identifiers are assigned densely in record order, so row `i` of a
    /// similarity matrix aligned with the input corresponds to item `i`.
    pub fn from_records(records: Vec<ItemRecord>) -> Self {
        let mut items = Vec::with_capacity(records.len());
        let mut title_index = AHashMap::with_capacity(records.len());

        for (id, record) in records.into_iter().enumerate() {
            title_index
                .entry(record.title.to_lowercase())
                .or_insert(id);
            items.push(Item {
                id,
                categories: parse_categories(&record.categories),
                title: record.title,
                rating: record.rating,
                popularity: record.popularity,
                description: record.description,
                image_ref: record.image_ref,
                detail_url: record.detail_url,
            });
        }

        Self { items, title_index }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Case-insensitive exact title lookup.
    ///
    /// Returns the first matching item when multiple rows share a
    /// lowercased title.
    pub fn get_by_title(&self, title: &str) -> Result<&Item> {
        self.title_index
            .get(&title.to_lowercase())
            .map(|&id| &self.items[id])
            .ok_or_else(|| Error::TitleNotFound(title.to_string()))
    }

    /// Direct indexed access. Identifiers originate from this store or
    /// from a matrix validated against it, so they are always in range.
    pub fn get_by_id(&self, id: usize) -> &Item {
        &self.items[id]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    /// Distinct categories across all items, sorted ascending.
    pub fn all_categories(&self) -> Vec<String> {
        let set: BTreeSet<&str> = self
            .items
            .iter()
            .flat_map(|item| item.categories.iter().map(String::as_str))
            .collect();
        set.into_iter().map(String::from).collect()
    }

    /// All titles sorted ascending. Not deduplicated.
    pub fn all_titles(&self) -> Vec<String> {
        let mut titles: Vec<String> =
            self.items.iter().map(|item| item.title.clone()).collect();
        titles.sort();
        titles
    }

    /// Fail if two items share a lowercased title.
    ///
    /// Lookup itself tolerates collisions (first match wins); loaders
    /// call this so a served catalog can never hit the ambiguous path.
    pub fn check_unique_titles(&self) -> Result<()> {
        let mut seen = AHashMap::with_capacity(self.items.len());
        for item in &self.items {
            if seen.insert(item.title.to_lowercase(), item.id).is_some() {
                return Err(Error::DuplicateTitle(item.title.clone()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, categories: &str, popularity: f32) -> ItemRecord {
        ItemRecord {
            title: title.to_string(),
            categories: categories.to_string(),
            rating: None,
            popularity,
            description: String::new(),
            image_ref: String::new(),
            detail_url: String::new(),
        }
    }

    #[test]
    fn test_parse_categories() {
        assert_eq!(
            parse_categories("Action, Drama, Sci-Fi"),
            vec!["Action", "Drama", "Sci-Fi"]
        );
        assert_eq!(parse_categories(""), Vec::<String>::new());
        assert_eq!(parse_categories("Action, , Drama"), vec!["Action", "Drama"]);
    }

    #[test]
    fn test_dense_ids_in_record_order() {
        let store = CatalogStore::from_records(vec![
            record("Alpha", "", 1.0),
            record("Beta", "", 2.0),
            record("Gamma", "", 3.0),
        ]);
        assert_eq!(store.len(), 3);
        for (i, item) in store.iter().enumerate() {
            assert_eq!(item.id, i);
        }
        assert_eq!(store.get_by_id(1).title, "Beta");
    }

    #[test]
    fn test_case_insensitive_lookup() {
        let store = CatalogStore::from_records(vec![record("Cowboy Bebop", "", 1.0)]);
        assert_eq!(store.get_by_title("cowboy bebop").unwrap().id, 0);
        assert_eq!(store.get_by_title("COWBOY BEBOP").unwrap().id, 0);
    }

    #[test]
    fn test_unknown_title_is_not_found() {
        let store = CatalogStore::from_records(vec![record("Alpha", "", 1.0)]);
        let err = store.get_by_title("DoesNotExist").unwrap_err();
        assert!(matches!(err, Error::TitleNotFound(t) if t == "DoesNotExist"));
    }

    #[test]
    fn test_duplicate_title_first_match_wins() {
        let store = CatalogStore::from_records(vec![
            record("Monster", "Thriller", 1.0),
            record("MONSTER", "Horror", 2.0),
        ]);
        // Lookup resolves to the first record regardless of query casing.
        assert_eq!(store.get_by_title("monster").unwrap().id, 0);
        assert!(matches!(
            store.check_unique_titles(),
            Err(Error::DuplicateTitle(_))
        ));
    }

    #[test]
    fn test_unique_titles_ok() {
        let store = CatalogStore::from_records(vec![
            record("Alpha", "", 1.0),
            record("Beta", "", 2.0),
        ]);
        assert!(store.check_unique_titles().is_ok());
    }

    #[test]
    fn test_all_categories_sorted_distinct() {
        let store = CatalogStore::from_records(vec![
            record("A", "Drama, Action", 1.0),
            record("B", "Action, Comedy", 2.0),
            record("C", "", 3.0),
        ]);
        assert_eq!(store.all_categories(), vec!["Action", "Comedy", "Drama"]);
    }

    #[test]
    fn test_all_titles_sorted_not_deduplicated() {
        let store = CatalogStore::from_records(vec![
            record("Gamma", "", 1.0),
            record("Alpha", "", 2.0),
            record("Gamma", "", 3.0),
        ]);
        assert_eq!(store.all_titles(), vec!["Alpha", "Gamma", "Gamma"]);
    }
}
