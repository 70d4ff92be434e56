//! In-memory vocabulary catalog loaded from a JSON seed document.
//!
//! The seed is validated fail-fast: the first problem found is returned and
//! nothing is partially loaded. Ids, names and terms are trimmed before they
//! are checked or stored.
//!
//! ## Seed format (`v2.1`)
//!
//! ```json
//! {
//!   "version": "v2.1",
//!   "categories":   [{ "id": "cat_01", "name": "…", "orderIndex": 1 }],
//!   "lexicalItems": [{ "id": "li_001", "categoryId": "cat_01", "termDe": "…", "termEs": "…" }]
//! }
//! ```
//!
//! ## Configuration
//!
//! `LEXICAL_SEED_PATH` points [`Catalog::from_env`] at a seed file; without it
//! the seed bundled with the crate is used.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::CatalogError;
use crate::exercise_engine::session::ItemSource;

pub const SEED_VERSION: &str = "v2.1";
pub const MIN_CATEGORIES: usize = 5;
pub const SEED_PATH_ENV: &str = "LEXICAL_SEED_PATH";

const BUILTIN_SEED: &str = include_str!("../data/seed_v2_1.json");

// ---------------------------------------------------------------------------
// Domain records
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub order_index: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexicalItem {
    pub id: String,
    pub category_id: String,
    pub term_de: String,
    pub term_es: String,
}

// ---------------------------------------------------------------------------
// Seed document (wire shape)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SeedDocument {
    version: String,
    #[serde(default)]
    categories: Vec<SeedCategory>,
    #[serde(default)]
    lexical_items: Vec<SeedItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SeedCategory {
    id: String,
    name: String,
    order_index: i32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SeedItem {
    id: String,
    category_id: String,
    term_de: String,
    term_es: String,
}

fn required(
    value: &str,
    entity: &'static str,
    index: usize,
    field: &'static str,
) -> Result<String, CatalogError> {
    let v = value.trim();
    if v.is_empty() {
        return Err(CatalogError::EmptyField { entity, index, field });
    }
    Ok(v.to_string())
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Catalog {
    categories: Vec<Category>,
    items: Vec<LexicalItem>,
    by_category: HashMap<String, Vec<usize>>,
}

impl Catalog {
    /// The seed compiled into the crate.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json_str(BUILTIN_SEED)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let catalog = Self::from_json_str(&raw)?;
        info!(target: "catalog", path = %path.display(),
              categories = catalog.categories.len(), items = catalog.items.len(),
              "loaded seed catalog");
        Ok(catalog)
    }

    /// Load from `LEXICAL_SEED_PATH` when set, else the built-in seed.
    pub fn from_env() -> Result<Self, CatalogError> {
        match std::env::var(SEED_PATH_ENV) {
            Ok(path) if !path.trim().is_empty() => Self::from_path(path.trim()),
            _ => {
                info!(target: "catalog", "{} not set, using built-in seed", SEED_PATH_ENV);
                Self::builtin()
            }
        }
    }

    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        let doc: SeedDocument = serde_json::from_str(raw)?;
        if doc.version.trim() != SEED_VERSION {
            return Err(CatalogError::Version {
                found: doc.version,
                expected: SEED_VERSION,
            });
        }

        let mut categories = Vec::with_capacity(doc.categories.len());
        let mut category_ids = HashSet::new();
        for (i, c) in doc.categories.iter().enumerate() {
            let id = required(&c.id, "category", i, "id")?;
            let name = required(&c.name, "category", i, "name")?;
            if !category_ids.insert(id.clone()) {
                return Err(CatalogError::DuplicateCategory(id));
            }
            categories.push(Category { id, name, order_index: c.order_index });
        }
        if categories.len() < MIN_CATEGORIES {
            return Err(CatalogError::TooFewCategories {
                min: MIN_CATEGORIES,
                found: categories.len(),
            });
        }

        let mut items = Vec::with_capacity(doc.lexical_items.len());
        let mut item_ids = HashSet::new();
        let mut by_category: HashMap<String, Vec<usize>> = HashMap::new();
        for (i, it) in doc.lexical_items.iter().enumerate() {
            let id = required(&it.id, "lexical item", i, "id")?;
            let category_id = required(&it.category_id, "lexical item", i, "categoryId")?;
            let term_de = required(&it.term_de, "lexical item", i, "termDe")?;
            let term_es = required(&it.term_es, "lexical item", i, "termEs")?;
            if !item_ids.insert(id.clone()) {
                return Err(CatalogError::DuplicateItem(id));
            }
            if !category_ids.contains(&category_id) {
                return Err(CatalogError::UnknownCategory { item_id: id, category_id });
            }
            by_category.entry(category_id.clone()).or_default().push(items.len());
            items.push(LexicalItem { id, category_id, term_de, term_es });
        }

        categories.sort_by(|a, b| a.order_index.cmp(&b.order_index).then_with(|| a.id.cmp(&b.id)));
        Ok(Catalog { categories, items, by_category })
    }

    /// Categories ordered by `(order_index, id)`.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Items of one category in seed order.
    pub fn items_in(&self, category_id: &str) -> Vec<&LexicalItem> {
        self.by_category
            .get(category_id)
            .map(|idx| idx.iter().map(|&i| &self.items[i]).collect())
            .unwrap_or_default()
    }

    pub fn item(&self, id: &str) -> Option<&LexicalItem> {
        self.items.iter().find(|it| it.id == id)
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

impl ItemSource for Catalog {
    fn item_ids(&self, category_id: &str) -> Vec<String> {
        self.items_in(category_id).into_iter().map(|it| it.id.clone()).collect()
    }
}
