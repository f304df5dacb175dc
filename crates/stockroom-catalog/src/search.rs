//! # Catalog Search
//!
//! Filters the parts and products listings for the shell's search box.
//!
//! ## Matching
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  query "12"                                                             │
//! │       │                                                                 │
//! │       ├── all digits? ──► exact id lookup ──► listed first if found     │
//! │       │                                                                 │
//! │       └── name contains "12" (case-insensitive) ──► appended in order   │
//! │                                                                         │
//! │  query ""  ──► everything, in insertion order                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use stockroom_core::{Part, PartId, Product, ProductId};

use crate::catalog::Catalog;

/// Reads a query as an id if it is nothing but ASCII digits.
pub fn id_query(query: &str) -> Option<u32> {
    let query = query.trim();
    if query.is_empty() || !query.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    query.parse().ok()
}

fn name_matches(name: &str, needle: &str) -> bool {
    name.to_lowercase().contains(needle)
}

impl Catalog {
    /// Parts matching a search query.
    pub fn search_parts(&self, query: &str) -> Vec<&Part> {
        let query = query.trim();
        if query.is_empty() {
            return self.parts.iter().collect();
        }

        let exact = id_query(query).and_then(|id| self.lookup_part(PartId::new(id)));
        let needle = query.to_lowercase();

        let mut results: Vec<&Part> = exact.into_iter().collect();
        results.extend(
            self.parts
                .iter()
                .filter(|p| Some(p.id) != exact.map(|e| e.id))
                .filter(|p| name_matches(&p.name, &needle)),
        );
        results
    }

    /// Products matching a search query.
    pub fn search_products(&self, query: &str) -> Vec<&Product> {
        let query = query.trim();
        if query.is_empty() {
            return self.products.iter().collect();
        }

        let exact = id_query(query).and_then(|id| self.lookup_product(ProductId::new(id)));
        let needle = query.to_lowercase();

        let mut results: Vec<&Product> = exact.into_iter().collect();
        results.extend(
            self.products
                .iter()
                .filter(|p| Some(p.id) != exact.map(|e| e.id))
                .filter(|p| name_matches(&p.name, &needle)),
        );
        results
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_core::{Money, PartDraft, PartSource, ProductDraft};

    fn part_draft(name: &str) -> PartDraft {
        PartDraft {
            name: name.to_string(),
            price: Money::from_cents(100),
            stock: 1,
            min: 0,
            max: 5,
            source: PartSource::InHouse { machine_id: 1 },
        }
    }

    fn catalog_with(names: &[&str]) -> Catalog {
        let mut catalog = Catalog::new();
        for name in names {
            catalog.create_part(part_draft(name)).unwrap();
        }
        catalog
    }

    fn names<'a>(parts: &[&'a Part]) -> Vec<&'a str> {
        parts.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_id_query() {
        assert_eq!(id_query("12"), Some(12));
        assert_eq!(id_query(" 7 "), Some(7));
        assert_eq!(id_query("12a"), None);
        assert_eq!(id_query("-3"), None);
        assert_eq!(id_query(""), None);
        assert_eq!(id_query("99999999999"), None);
    }

    #[test]
    fn test_empty_query_lists_everything() {
        let catalog = catalog_with(&["Bolt", "Nut", "Washer"]);
        assert_eq!(names(&catalog.search_parts("  ")), vec!["Bolt", "Nut", "Washer"]);
    }

    #[test]
    fn test_name_search_is_case_insensitive() {
        let catalog = catalog_with(&["Hex Bolt", "Nut", "Carriage BOLT"]);
        assert_eq!(
            names(&catalog.search_parts("bolt")),
            vec!["Hex Bolt", "Carriage BOLT"]
        );
        assert!(catalog.search_parts("gear").is_empty());
    }

    #[test]
    fn test_id_match_comes_first_without_duplicates() {
        // Part 2 is "Nut"; part 3's name mentions 2
        let catalog = catalog_with(&["Bolt", "Nut", "Spring 2mm"]);
        assert_eq!(names(&catalog.search_parts("2")), vec!["Nut", "Spring 2mm"]);

        // Unknown id falls back to names only
        assert_eq!(names(&catalog.search_parts("9")), Vec::<&str>::new());
    }

    #[test]
    fn test_search_products() {
        let mut catalog = catalog_with(&["Wheel"]);
        let wheel = catalog.parts()[0].clone();
        for name in ["Road Bike", "Mountain Bike", "Scooter"] {
            catalog
                .create_product(ProductDraft {
                    name: name.to_string(),
                    price: Money::from_cents(500),
                    stock: 1,
                    min: 0,
                    max: 3,
                    associated_parts: vec![wheel.clone()],
                })
                .unwrap();
        }

        let found: Vec<&str> = catalog
            .search_products("bike")
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(found, vec!["Road Bike", "Mountain Bike"]);

        let by_id: Vec<&str> = catalog
            .search_products("3")
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(by_id, vec!["Scooter"]);
    }
}
