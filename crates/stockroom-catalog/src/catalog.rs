//! # Catalog
//!
//! The container itself: storage, id counters, counts and listings.
//! Entity operations live in `parts.rs` and `products.rs` as further
//! `impl Catalog` blocks.
//!
//! ## Id Assignment
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Ids come from a counter, never from the collection size               │
//! │                                                                         │
//! │  create A ──► id 1        parts: [A]                                    │
//! │  create B ──► id 2        parts: [A, B]                                 │
//! │  remove A                 parts: [B]                                    │
//! │  create C ──► id 3        parts: [B, C]   (len would have said 1 or 2)  │
//! │                                                                         │
//! │  Removed ids are never handed out again.                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use stockroom_core::{Part, PartId, Product, ProductId};

/// First id handed out for both parts and products.
pub const FIRST_ID: u32 = 1;

/// In-memory repository of parts and products.
///
/// ## Invariants
/// - Part ids are unique within `parts`, product ids within `products`
/// - `next_part_id` is greater than every part id ever stored (same for products)
/// - Listings keep insertion order; updates keep an entity's position
#[derive(Debug, Clone)]
pub struct Catalog {
    pub(crate) parts: Vec<Part>,
    pub(crate) products: Vec<Product>,
    pub(crate) next_part_id: u32,
    pub(crate) next_product_id: u32,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Catalog {
            parts: Vec::new(),
            products: Vec::new(),
            next_part_id: FIRST_ID,
            next_product_id: FIRST_ID,
        }
    }

    // -------------------------------------------------------------------------
    // Id allocation
    // -------------------------------------------------------------------------

    /// The id the next part allocation will return, for "add" forms.
    pub fn next_part_id(&self) -> PartId {
        PartId::new(self.next_part_id)
    }

    /// The id the next product allocation will return.
    pub fn next_product_id(&self) -> ProductId {
        ProductId::new(self.next_product_id)
    }

    /// Takes the next part id and advances the counter.
    pub fn allocate_part_id(&mut self) -> PartId {
        let id = self.next_part_id();
        self.next_part_id = self.next_part_id.saturating_add(1);
        id
    }

    /// Takes the next product id and advances the counter.
    pub fn allocate_product_id(&mut self) -> ProductId {
        let id = self.next_product_id();
        self.next_product_id = self.next_product_id.saturating_add(1);
        id
    }

    /// Keeps the counter ahead of an id supplied by the caller.
    pub(crate) fn observe_part_id(&mut self, id: PartId) {
        if id.get() >= self.next_part_id {
            self.next_part_id = id.get().saturating_add(1);
        }
    }

    pub(crate) fn observe_product_id(&mut self, id: ProductId) {
        if id.get() >= self.next_product_id {
            self.next_product_id = id.get().saturating_add(1);
        }
    }

    // -------------------------------------------------------------------------
    // Counts and listings
    // -------------------------------------------------------------------------

    pub fn parts_count(&self) -> usize {
        self.parts.len()
    }

    pub fn products_count(&self) -> usize {
        self.products.len()
    }

    /// All parts, in insertion order.
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// All products, in insertion order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_catalog_is_empty() {
        let catalog = Catalog::new();
        assert_eq!(catalog.parts_count(), 0);
        assert_eq!(catalog.products_count(), 0);
        assert_eq!(catalog.next_part_id(), PartId::new(FIRST_ID));
        assert_eq!(catalog.next_product_id(), ProductId::new(FIRST_ID));
    }

    #[test]
    fn test_allocation_is_monotonic() {
        let mut catalog = Catalog::new();
        assert_eq!(catalog.allocate_part_id(), PartId::new(1));
        assert_eq!(catalog.allocate_part_id(), PartId::new(2));
        assert_eq!(catalog.next_part_id(), PartId::new(3));

        // Product ids are counted separately
        assert_eq!(catalog.allocate_product_id(), ProductId::new(1));
    }

    #[test]
    fn test_observed_ids_push_the_counter() {
        let mut catalog = Catalog::new();
        catalog.observe_part_id(PartId::new(40));
        assert_eq!(catalog.next_part_id(), PartId::new(41));

        // Lower ids leave it alone
        catalog.observe_part_id(PartId::new(7));
        assert_eq!(catalog.next_part_id(), PartId::new(41));

        catalog.observe_product_id(ProductId::new(2));
        assert_eq!(catalog.next_product_id(), ProductId::new(3));
    }
}
