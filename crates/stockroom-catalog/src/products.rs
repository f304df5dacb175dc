//! Product operations on the [`Catalog`].
//!
//! ## Delete Protection
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  delete_product(id)                                                     │
//! │       │                                                                 │
//! │       ├── not in catalog? ─────────► ProductNotFound                    │
//! │       │                                                                 │
//! │       ├── associated parts > 0? ───► ProductHasParts (nothing removed)  │
//! │       │                                                                 │
//! │       └── otherwise ───────────────► removed, returned to caller        │
//! │                                                                         │
//! │  remove_product(id) is the raw form: no protection, returns bool.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::debug;

use stockroom_core::validation::validate_product_draft;
use stockroom_core::{CoreError, CoreResult, PartId, Product, ProductDraft, ProductId};

use crate::catalog::Catalog;

impl Catalog {
    /// Stores a product that already carries its id.
    ///
    /// ## Errors
    /// `DuplicateProductId` if a product with the same id is present.
    pub fn add_product(&mut self, product: Product) -> CoreResult<()> {
        if self.lookup_product(product.id).is_some() {
            return Err(CoreError::DuplicateProductId(product.id));
        }

        self.observe_product_id(product.id);
        debug!(
            product_id = %product.id,
            name = %product.name,
            parts = product.associated_parts_count(),
            "Product added"
        );
        self.products.push(product);
        Ok(())
    }

    /// Validates a draft, checks its parts exist, assigns the next id and
    /// stores it.
    ///
    /// ## Errors
    /// - `Validation` for the first violated product rule
    /// - `PartNotFound` if an associated part is not in the catalog
    pub fn create_product(&mut self, draft: ProductDraft) -> CoreResult<ProductId> {
        validate_product_draft(&draft)?;
        if let Some(missing) = draft
            .associated_parts
            .iter()
            .find(|p| self.lookup_part(p.id).is_none())
        {
            return Err(CoreError::PartNotFound(missing.id));
        }

        let id = self.allocate_product_id();
        self.add_product(Product::from_draft(id, draft))?;
        Ok(id)
    }

    /// Finds a product by id.
    pub fn lookup_product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Replaces the stored product that has the same id.
    ///
    /// ## Errors
    /// `ProductNotFound` if no product has that id; nothing is inserted.
    pub fn update_product(&mut self, product: Product) -> CoreResult<()> {
        let slot = self
            .products
            .iter_mut()
            .find(|p| p.id == product.id)
            .ok_or(CoreError::ProductNotFound(product.id))?;

        debug!(
            product_id = %product.id,
            name = %product.name,
            parts = product.associated_parts_count(),
            "Product updated"
        );
        *slot = product;
        Ok(())
    }

    /// Removes a product by id without checking its parts.
    ///
    /// ## Returns
    /// `true` if a product was removed, `false` if the id was not present.
    pub fn remove_product(&mut self, id: ProductId) -> bool {
        match self.products.iter().position(|p| p.id == id) {
            Some(index) => {
                let removed = self.products.remove(index);
                debug!(product_id = %id, name = %removed.name, "Product removed");
                true
            }
            None => {
                debug!(product_id = %id, "remove_product: no such product");
                false
            }
        }
    }

    /// A product can be deleted only once it has no associated parts.
    pub fn can_delete_product(product: &Product) -> bool {
        product.associated_parts.is_empty()
    }

    /// Removes a product if it exists and has no associated parts.
    pub fn delete_product(&mut self, id: ProductId) -> CoreResult<Product> {
        let index = self
            .products
            .iter()
            .position(|p| p.id == id)
            .ok_or(CoreError::ProductNotFound(id))?;

        let product = &self.products[index];
        if !Self::can_delete_product(product) {
            return Err(CoreError::ProductHasParts {
                id,
                count: product.associated_parts_count(),
            });
        }

        debug!(product_id = %id, "Product deleted");
        Ok(self.products.remove(index))
    }

    /// Copies the catalog's current version of a part into a product's
    /// bill of materials.
    ///
    /// The product itself is not stored; callers validate and then
    /// `update_product` or `create_product`.
    pub fn associate_part(&self, product: &mut Product, part_id: PartId) -> CoreResult<()> {
        let part = self
            .lookup_part(part_id)
            .ok_or(CoreError::PartNotFound(part_id))?;

        product.add_associated_part(part.clone());
        Ok(())
    }

    /// Products whose bill of materials lists this part.
    pub fn products_using_part(&self, part_id: PartId) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.lookup_associated_part(part_id).is_some())
            .collect()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
