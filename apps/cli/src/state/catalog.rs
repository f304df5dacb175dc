//! # Catalog State
//!
//! Owns the one [`Catalog`] the shell works on.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  run()                                                                  │
//! │    │                                                                    │
//! │    ├── CatalogState::new()      empty catalog, ids start at 1           │
//! │    │                                                                    │
//! │    ├── seed (optional)          demo parts and products                 │
//! │    │                                                                    │
//! │    ├── shell loop               commands borrow &/&mut CatalogState     │
//! │    │                                                                    │
//! │    └── exit                     dropped; nothing is persisted           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The shell is single-threaded, so the catalog is owned outright rather
//! than shared behind a lock. Commands that only read take `&CatalogState`.

use serde::{Deserialize, Serialize};
use stockroom_catalog::Catalog;

/// Catalog counts for the banner and `config` output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogTotals {
    pub parts: usize,
    pub products: usize,
    pub next_part_id: u32,
    pub next_product_id: u32,
}

impl From<&Catalog> for CatalogTotals {
    fn from(catalog: &Catalog) -> Self {
        CatalogTotals {
            parts: catalog.parts_count(),
            products: catalog.products_count(),
            next_part_id: catalog.next_part_id().get(),
            next_product_id: catalog.next_product_id().get(),
        }
    }
}

/// The shell's catalog.
#[derive(Debug, Default)]
pub struct CatalogState {
    catalog: Catalog,
}

impl CatalogState {
    /// Creates a state holding an empty catalog.
    pub fn new() -> Self {
        CatalogState {
            catalog: Catalog::new(),
        }
    }

    /// Wraps an already populated catalog.
    pub fn from_catalog(catalog: Catalog) -> Self {
        CatalogState { catalog }
    }

    /// Executes a function with read access to the catalog.
    pub fn with_catalog<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Catalog) -> R,
    {
        f(&self.catalog)
    }

    /// Executes a function with write access to the catalog.
    pub fn with_catalog_mut<F, R>(&mut self, f: F) -> R
    where
        F: FnOnce(&mut Catalog) -> R,
    {
        f(&mut self.catalog)
    }

    /// Current counts.
    pub fn totals(&self) -> CatalogTotals {
        CatalogTotals::from(&self.catalog)
    }
}
