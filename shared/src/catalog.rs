//! Menu catalog accumulator
//!
//! Collects menu items across pages. Invalid records are skipped and
//! counted, duplicates (same identity key) keep their first occurrence, and
//! insertion order follows the source order.

use crate::models::MenuItem;
use serde_json::Value;
use std::collections::HashSet;

/// Outcome of ingesting one batch of raw records
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestStats {
    pub accepted: usize,
    pub invalid: usize,
    pub duplicates: usize,
}

/// Ordered, de-duplicated menu items
#[derive(Debug, Clone, Default)]
pub struct MenuCatalog {
    items: Vec<MenuItem>,
    seen: HashSet<String>,
    skipped_invalid: usize,
    skipped_duplicates: usize,
}

impl MenuCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and append a batch of raw records
    pub fn ingest(&mut self, records: &[Value]) -> IngestStats {
        let mut stats = IngestStats::default();
        for record in records {
            match MenuItem::from_record(record) {
                Ok(item) => {
                    if self.push(item) {
                        stats.accepted += 1;
                    } else {
                        stats.duplicates += 1;
                    }
                }
                Err(reason) => {
                    tracing::debug!(reason = %reason, "Skipping menu record");
                    self.skipped_invalid += 1;
                    stats.invalid += 1;
                }
            }
        }
        stats
    }

    /// Append an item unless its identity key was already seen.
    /// Returns `false` for duplicates.
    pub fn push(&mut self, item: MenuItem) -> bool {
        if !self.seen.insert(item.identity_key()) {
            tracing::debug!(name = %item.name, "Dropping duplicate menu item");
            self.skipped_duplicates += 1;
            return false;
        }
        self.items.push(item);
        true
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn skipped_invalid(&self) -> usize {
        self.skipped_invalid
    }

    pub fn skipped_duplicates(&self) -> usize {
        self.skipped_duplicates
    }

    pub fn into_items(self) -> Vec<MenuItem> {
        self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn names(catalog: &MenuCatalog) -> Vec<&str> {
        catalog.items().iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn test_duplicates_across_batches_keep_first() {
        let a = json!({ "Nombre": "A", "Precio (€)": 1 });
        let b = json!({ "Nombre": "B", "Precio (€)": "2,00", "Descripción": "first" });
        let b_again = json!({ "Nombre": "b", "Precio (€)": 2, "Descripción": "second" });
        let c = json!({ "Nombre": "C", "Precio (€)": 3 });

        let mut catalog = MenuCatalog::new();
        assert_eq!(
            catalog.ingest(&[a, b.clone()]),
            IngestStats { accepted: 2, invalid: 0, duplicates: 0 }
        );
        assert_eq!(
            catalog.ingest(&[b, b_again, c]),
            IngestStats { accepted: 1, invalid: 0, duplicates: 2 }
        );

        assert_eq!(names(&catalog), vec!["A", "B", "C"]);
        assert_eq!(catalog.items()[1].description.as_deref(), Some("first"));
        assert_eq!(catalog.skipped_duplicates(), 2);
    }

    #[test]
    fn test_invalid_records_are_counted_not_fatal() {
        let mut catalog = MenuCatalog::new();
        let stats = catalog.ingest(&[
            json!({ "Descripción": "no name, no price" }),
            json!(42),
            json!({ "Nombre": "Pan", "Precio (€)": "1,20" }),
        ]);
        assert_eq!(stats.invalid, 2);
        assert_eq!(names(&catalog), vec!["Pan"]);
        assert_eq!(catalog.skipped_invalid(), 2);
    }

    #[test]
    fn test_same_name_different_price_is_distinct() {
        let mut catalog = MenuCatalog::new();
        catalog.ingest(&[
            json!({ "Nombre": "Caña", "Precio (€)": 2 }),
            json!({ "Nombre": "Caña", "Precio (€)": 3 }),
        ]);
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_explicit_id_wins_over_name() {
        let mut catalog = MenuCatalog::new();
        catalog.ingest(&[
            json!({ "Id": 1, "Nombre": "Tarta", "Precio (€)": 5 }),
            json!({ "Id": 1, "Nombre": "Tarta de queso", "Precio (€)": 6 }),
            json!({ "Id": 2, "Nombre": "Tarta", "Precio (€)": 5 }),
        ]);
        assert_eq!(names(&catalog), vec!["Tarta", "Tarta"]);
    }
}
