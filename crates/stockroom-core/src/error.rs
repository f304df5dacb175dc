//! # Error Types
//!
//! Domain-specific error types for stockroom-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  stockroom-core errors (this file)                                      │
//! │  ├── CoreError        - Catalog and referential failures                │
//! │  ├── ValidationError  - First violated consistency rule                 │
//! │  └── MoneyParseError  - Decimal text that is not an amount              │
//! │                                                                         │
//! │  stockroom-cli errors (app)                                             │
//! │  ├── FormError        - Text field could not be parsed                  │
//! │  └── ApiError         - What the shell prints (code + message)          │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Terminal                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in variants (ids, offending values)
//! 3. Validation messages are fixed strings so callers can match on them

use thiserror::Error;

use crate::money::Money;
use crate::types::{PartId, ProductId};

// =============================================================================
// Core Error
// =============================================================================

/// Catalog-level failures.
///
/// Lookups signal absence with `Option`; these variants are for operations
/// that were asked to act on something and could not.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// No part with this id is in the catalog.
    ///
    /// ## When This Occurs
    /// - Updating a part that was removed
    /// - Associating a part id that was never created
    #[error("Part not found: {0}")]
    PartNotFound(PartId),

    /// No product with this id is in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// A part with this id already exists.
    #[error("Part id {0} is already in use")]
    DuplicatePartId(PartId),

    /// A product with this id already exists.
    #[error("Product id {0} is already in use")]
    DuplicateProductId(ProductId),

    /// Product still has associated parts and cannot be deleted.
    ///
    /// ## User Workflow
    /// ```text
    /// delete-product 3
    ///      │
    ///      ▼
    /// can_delete_product? associated_parts = 2
    ///      │
    ///      ▼
    /// ProductHasParts { id: 3, count: 2 }
    ///      │
    ///      ▼
    /// Shell shows: "Product 3 has 2 associated part(s) and cannot be deleted"
    /// ```
    #[error("Product {id} has {count} associated part(s) and cannot be deleted")]
    ProductHasParts { id: ProductId, count: usize },

    /// Candidate failed validation (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// The first consistency rule a candidate Part or Product violates.
///
/// Messages are stable; the shell shows them verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("name required")]
    NameRequired,

    #[error("stock must be non-negative")]
    NegativeStock { stock: i64 },

    #[error("price must be non-negative")]
    NegativePrice { price: Money },

    #[error("min must be non-negative")]
    NegativeMin { min: i64 },

    #[error("min must not exceed max")]
    MinExceedsMax { min: i64, max: i64 },

    #[error("stock must be within [min, max]")]
    StockOutOfRange { stock: i64, min: i64, max: i64 },

    #[error("product requires at least one part")]
    NoAssociatedParts,

    /// Sum of associated part prices exceeds the product price.
    #[error("product price must cover associated parts' total cost")]
    PriceBelowPartsCost { price: Money, parts_cost: Money },
}

// =============================================================================
// Money Parse Error
// =============================================================================

/// Decimal text that could not be read as an amount of money.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyParseError {
    #[error("amount is empty")]
    Empty,

    #[error("'{0}' is not a valid amount")]
    InvalidFormat(String),

    #[error("'{0}' has more than two decimal places")]
    TooManyDecimals(String),

    #[error("'{0}' is too large")]
    Overflow(String),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
