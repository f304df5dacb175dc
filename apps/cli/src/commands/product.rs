//! # Product Commands
//!
//! Listing, search and edits for products and their bills of materials.
//!
//! ## Bill of Materials Edits
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  link 2 5                                                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  copy product 2 ──► copy part 5 into it ──► validate ──► store          │
//! │                                                 │                       │
//! │                                                 └── price < cost?       │
//! │                                                     VALIDATION_ERROR,   │
//! │                                                     product unchanged   │
//! │                                                                         │
//! │  unlink 2 5                                                             │
//! │       │                                                                 │
//! │       ├── part 5 not listed? ────────────► NOT_FOUND                    │
//! │       ├── part 5 is the only part? ──────► BUSINESS_LOGIC               │
//! │       └── otherwise remove one copy ──► validate ──► store              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every change is made on a copy and stored only once the copy
//! validates, so the catalog never holds a product that breaks a rule.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::commands::part::PartDto;
use crate::error::ApiError;
use crate::forms::{ProductEdit, ProductForm, ProductInput};
use crate::state::CatalogState;
use stockroom_catalog::Catalog;
use stockroom_core::validation::validate_product;
use stockroom_core::{PartId, Product, ProductId};

/// Product as shown to the user or written as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: u32,
    pub name: String,
    pub price_cents: i64,
    pub stock: i64,
    pub min: i64,
    pub max: i64,
    /// Sum of the associated parts' prices
    pub parts_cost_cents: i64,
    /// Whether `delete-product` would succeed without `--purge`
    pub can_delete: bool,
    pub parts: Vec<PartDto>,
}

impl From<&Product> for ProductDto {
    fn from(p: &Product) -> Self {
        ProductDto {
            id: p.id.get(),
            name: p.name.clone(),
            price_cents: p.price.cents(),
            stock: p.stock,
            min: p.min,
            max: p.max,
            parts_cost_cents: p.parts_cost().cents(),
            can_delete: Catalog::can_delete_product(p),
            parts: p.associated_parts.iter().map(PartDto::from).collect(),
        }
    }
}

fn current_product(catalog: &Catalog, id: ProductId) -> Result<Product, ApiError> {
    catalog
        .lookup_product(id)
        .cloned()
        .ok_or_else(|| ApiError::not_found("Product", id))
}

/// Validates a changed copy and stores it in place of the original.
fn store_validated(catalog: &mut Catalog, product: Product) -> Result<ProductDto, ApiError> {
    validate_product(&product)?;
    let dto = ProductDto::from(&product);
    catalog.update_product(product)?;
    Ok(dto)
}

/// All products, in insertion order.
pub fn list_products(catalog: &CatalogState) -> Vec<ProductDto> {
    debug!("list_products command");
    catalog.with_catalog(|c| c.products().iter().map(ProductDto::from).collect())
}

/// Products matching an id or a name fragment.
pub fn search_products(catalog: &CatalogState, query: &str) -> Vec<ProductDto> {
    debug!(query = %query, "search_products command");
    catalog.with_catalog(|c| {
        c.search_products(query)
            .into_iter()
            .map(ProductDto::from)
            .collect()
    })
}

/// One product by id, with its parts.
pub fn get_product(catalog: &CatalogState, id: ProductId) -> Result<ProductDto, ApiError> {
    debug!(product_id = %id, "get_product command");
    catalog.with_catalog(|c| current_product(c, id).map(|p| ProductDto::from(&p)))
}

/// Parses the form, copies the listed parts in, validates and stores.
pub fn add_product(catalog: &mut CatalogState, form: &ProductForm) -> Result<ProductDto, ApiError> {
    debug!(name = %form.name, parts = form.part_ids.len(), "add_product command");
    let ProductInput {
        mut draft,
        part_ids,
    } = form.parse()?;

    let id = catalog.with_catalog_mut(|c| -> Result<ProductId, ApiError> {
        for part_id in part_ids {
            let part = c
                .lookup_part(part_id)
                .cloned()
                .ok_or_else(|| ApiError::not_found("Part", part_id))?;
            draft.associated_parts.push(part);
        }
        Ok(c.create_product(draft)?)
    })?;

    info!(product_id = %id, "Product created");
    get_product(catalog, id)
}

/// Applies an edit to a product's own fields; its parts are kept.
pub fn update_product(
    catalog: &mut CatalogState,
    id: ProductId,
    edit: &ProductEdit,
) -> Result<ProductDto, ApiError> {
    debug!(product_id = %id, "update_product command");
    let dto = catalog.with_catalog_mut(|c| -> Result<ProductDto, ApiError> {
        let current = current_product(c, id)?;
        let candidate = Product::from_draft(id, edit.apply(current.to_draft())?);
        store_validated(c, candidate)
    })?;

    info!(product_id = %id, "Product updated");
    Ok(dto)
}

/// Adds the catalog's current version of a part to a product.
pub fn associate_part(
    catalog: &mut CatalogState,
    product_id: ProductId,
    part_id: PartId,
) -> Result<ProductDto, ApiError> {
    debug!(product_id = %product_id, part_id = %part_id, "associate_part command");
    let dto = catalog.with_catalog_mut(|c| -> Result<ProductDto, ApiError> {
        let mut product = current_product(c, product_id)?;
        c.associate_part(&mut product, part_id)?;
        store_validated(c, product)
    })?;

    info!(product_id = %product_id, part_id = %part_id, "Part associated");
    Ok(dto)
}

/// Removes one copy of a part from a product.
///
/// ## Errors
/// - `NOT_FOUND` if the product is missing or does not list the part
/// - `BUSINESS_LOGIC` if it is the product's only part
pub fn disassociate_part(
    catalog: &mut CatalogState,
    product_id: ProductId,
    part_id: PartId,
) -> Result<ProductDto, ApiError> {
    debug!(product_id = %product_id, part_id = %part_id, "disassociate_part command");
    let dto = catalog.with_catalog_mut(|c| -> Result<ProductDto, ApiError> {
        let mut product = current_product(c, product_id)?;

        if product.lookup_associated_part(part_id).is_none() {
            return Err(ApiError::not_found(
                "Associated part",
                format!("{} on product {}", part_id, product_id),
            ));
        }
        if product.associated_parts_count() < 2 {
            return Err(ApiError::business("product must keep at least one part"));
        }

        product.remove_associated_part(part_id);
        store_validated(c, product)
    })?;

    info!(product_id = %product_id, part_id = %part_id, "Part disassociated");
    Ok(dto)
}

/// Deletes a product.
///
/// Without `purge` a product that still lists parts is refused. With it,
/// the parts are dropped from the product first and the delete goes ahead.
pub fn delete_product(
    catalog: &mut CatalogState,
    id: ProductId,
    purge: bool,
) -> Result<ProductDto, ApiError> {
    debug!(product_id = %id, purge, "delete_product command");
    let removed = catalog.with_catalog_mut(|c| -> Result<Product, ApiError> {
        if purge {
            let mut product = current_product(c, id)?;
            let dropped = product.associated_parts_count();
            product.purge_associated_parts();
            c.update_product(product)?;
            debug!(product_id = %id, parts = dropped, "Associated parts purged");
        }
        Ok(c.delete_product(id)?)
    })?;

    info!(product_id = %id, "Product deleted");
    Ok(ProductDto::from(&removed))
}
