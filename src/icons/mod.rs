//! Contextual icon selection.
//!
//! Maps free text to a short list of icon identifiers from a closed
//! vocabulary. The category table is embedded in the binary at compile time
//! and loaded on demand, with an exact-key lookup map built over the ordered
//! category list, following the same shape as the keyword tables in the
//! harmony engine.
//!
//! Two selection flows exist:
//! - [`IconDb::select`]: deterministic, one canonical list per category.
//! - [`IconDb::select_seeded`]: per-category pools of alternative lists,
//!   indexed by a caller-supplied seed to give variety across repeated
//!   generations while staying deterministic for a fixed seed.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;

/// A named icon category with its canonical identifier list (5-6 entries).
#[derive(Debug, Clone, Deserialize)]
pub struct IconCategory {
    /// Category key (e.g. "finance").
    pub name: String,
    /// Ordered icon identifiers from the closed vocabulary.
    pub icons: Vec<String>,
}

/// A per-category pool of alternative icon lists for seeded selection.
#[derive(Debug, Clone, Deserialize)]
struct IconPool {
    name: String,
    alternates: Vec<Vec<String>>,
}

/// Database schema of icons.json.
#[derive(Debug, Deserialize)]
struct IconTable {
    #[allow(dead_code)]
    version: String,
    categories: Vec<IconCategory>,
    default_icons: Vec<String>,
    pools: Vec<IconPool>,
    default_pool: Vec<Vec<String>>,
}

/// Icon category table with exact-first keyword resolution and seeded pools.
#[derive(Debug, Clone)]
pub struct IconDb {
    /// Categories in resolution order (order matters for substring scans).
    categories: Vec<IconCategory>,
    /// Fast exact lookup by category name.
    lookup: HashMap<String, usize>,
    /// The canonical fallback list.
    default_icons: Vec<String>,
    /// Alternative lists per category for seeded selection.
    pools: HashMap<String, Vec<Vec<String>>>,
    /// Pool used when the resolved category has no dedicated pool.
    default_pool: Vec<Vec<String>>,
}

impl IconDb {
    /// Loads the icon table from the embedded JSON file.
    pub fn load() -> Result<Self> {
        let json_data = include_str!("icons.json");
        let table: IconTable =
            serde_json::from_str(json_data).context("Failed to parse embedded icons.json")?;

        let mut lookup = HashMap::new();
        for (idx, category) in table.categories.iter().enumerate() {
            lookup.insert(category.name.clone(), idx);
        }

        anyhow::ensure!(
            !table.default_pool.is_empty(),
            "icons.json default pool must not be empty"
        );
        for pool in &table.pools {
            anyhow::ensure!(
                !pool.alternates.is_empty(),
                "icon pool '{}' must carry at least one alternate list",
                pool.name
            );
        }

        let pools = table
            .pools
            .into_iter()
            .map(|p| (p.name, p.alternates))
            .collect();

        Ok(Self {
            categories: table.categories,
            lookup,
            default_icons: table.default_icons,
            pools,
            default_pool: table.default_pool,
        })
    }

    /// All categories, in resolution order.
    #[must_use]
    pub fn categories(&self) -> &[IconCategory] {
        &self.categories
    }

    /// The canonical fallback icon list.
    #[must_use]
    pub fn default_icons(&self) -> &[String] {
        &self.default_icons
    }

    /// Resolves a keyword to a category name, if any matches.
    ///
    /// Exact lowercase key lookup first (so "finance" can never be shadowed
    /// by an overlapping substring entry), then a substring containment scan
    /// in either direction over the ordered table, first match winning. Blank
    /// keywords match nothing; `str::contains("")` would otherwise hand them
    /// to the first category.
    #[must_use]
    pub fn resolve_category(&self, keyword: &str) -> Option<&str> {
        let keyword = keyword.trim().to_lowercase();
        if keyword.is_empty() {
            return None;
        }

        if let Some(&idx) = self.lookup.get(&keyword) {
            return Some(&self.categories[idx].name);
        }

        self.categories
            .iter()
            .find(|c| keyword.contains(&c.name) || c.name.contains(&keyword))
            .map(|c| c.name.as_str())
    }

    /// Selects the canonical icon list for a keyword.
    ///
    /// Total function: unmatched keywords (including blank input) get the
    /// default list. Every returned list has 5 or 6 entries.
    #[must_use]
    pub fn select(&self, keyword: &str) -> &[String] {
        match self.resolve_category(keyword) {
            Some(name) => {
                let idx = self.lookup[name];
                &self.categories[idx].icons
            }
            None => &self.default_icons,
        }
    }

    /// Selects an icon list for a keyword using a seed to pick among
    /// per-category alternates.
    ///
    /// The keyword resolves to a category with the same rules as
    /// [`Self::select`]; the category's pool (or the default pool when it has
    /// none, or nothing matched) is indexed with `seed % pool.len()`.
    /// Deterministic for a fixed seed.
    #[must_use]
    pub fn select_seeded(&self, keyword: &str, seed: u64) -> &[String] {
        let pool = self
            .resolve_category(keyword)
            .and_then(|name| self.pools.get(name))
            .unwrap_or(&self.default_pool);

        let index = (seed % pool.len() as u64) as usize;
        &pool[index]
    }
}
