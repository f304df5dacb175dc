//! # Domain Types
//!
//! Entities stored in the Stockroom catalog.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐          ┌──────────────────────────────┐          │
//! │  │      Part       │          │           Product            │          │
//! │  │  ─────────────  │          │  ──────────────────────────  │          │
//! │  │  id (PartId)    │ snapshot │  id (ProductId)              │          │
//! │  │  name, price    │◄─────────│  name, price                 │          │
//! │  │  stock/min/max  │          │  stock/min/max               │          │
//! │  │  source ───┐    │          │  associated_parts: Vec<Part> │          │
//! │  └────────────┼────┘          └──────────────────────────────┘          │
//! │               ▼                                                         │
//! │  ┌──────────────────────────────────────┐                               │
//! │  │ PartSource                           │                               │
//! │  │  InHouse { machine_id }              │                               │
//! │  │  Outsourced { company_name }         │                               │
//! │  └──────────────────────────────────────┘                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Drafts
//! `PartDraft` and `ProductDraft` are candidates without an id. The catalog
//! assigns the id when it accepts a draft.
//!
//! ## Association Semantics
//! A product keeps a copy of each associated part as it was when linked.
//! Editing or removing the part in the catalog later leaves existing
//! products as they are.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use crate::money::Money;

// =============================================================================
// Identifiers
// =============================================================================

/// Catalog-assigned part identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PartId(u32);

impl PartId {
    #[inline]
    pub const fn new(value: u32) -> Self {
        PartId(value)
    }

    #[inline]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for PartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PartId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(PartId)
    }
}

/// Catalog-assigned product identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u32);

impl ProductId {
    #[inline]
    pub const fn new(value: u32) -> Self {
        ProductId(value)
    }

    #[inline]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ProductId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(ProductId)
    }
}

// =============================================================================
// Part Source
// =============================================================================

/// Where a part comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PartSource {
    /// Manufactured on one of our own machines.
    InHouse { machine_id: i64 },
    /// Bought from a vendor.
    Outsourced { company_name: String },
}

impl PartSource {
    /// Short label for tables.
    pub fn label(&self) -> &'static str {
        match self {
            PartSource::InHouse { .. } => "In-House",
            PartSource::Outsourced { .. } => "Outsourced",
        }
    }

    /// The variant-specific value as display text.
    pub fn detail(&self) -> String {
        match self {
            PartSource::InHouse { machine_id } => format!("machine {}", machine_id),
            PartSource::Outsourced { company_name } => company_name.clone(),
        }
    }
}

// =============================================================================
// Part
// =============================================================================

/// A part candidate that has not been given an id yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartDraft {
    pub name: String,
    pub price: Money,
    pub stock: i64,
    pub min: i64,
    pub max: i64,
    pub source: PartSource,
}

/// A component kept in stock, usable alone or in products.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    /// Unique identifier, assigned by the catalog.
    pub id: PartId,

    /// Display name. Must not be empty.
    pub name: String,

    /// Unit price.
    pub price: Money,

    /// Quantity on hand.
    pub stock: i64,

    /// Lowest allowed stock level (inclusive).
    pub min: i64,

    /// Highest allowed stock level (inclusive).
    pub max: i64,

    /// In-house or outsourced, with the variant's own data.
    pub source: PartSource,
}

impl Part {
    /// Builds a part from a draft and a freshly assigned id.
    pub fn from_draft(id: PartId, draft: PartDraft) -> Self {
        Part {
            id,
            name: draft.name,
            price: draft.price,
            stock: draft.stock,
            min: draft.min,
            max: draft.max,
            source: draft.source,
        }
    }

    /// Copies every field but the id into a draft, for edit forms.
    pub fn to_draft(&self) -> PartDraft {
        PartDraft {
            name: self.name.clone(),
            price: self.price,
            stock: self.stock,
            min: self.min,
            max: self.max,
            source: self.source.clone(),
        }
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product candidate that has not been given an id yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub price: Money,
    pub stock: i64,
    pub min: i64,
    pub max: i64,
    pub associated_parts: Vec<Part>,
}

/// A sellable assembly made of one or more parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier, assigned by the catalog.
    pub id: ProductId,

    pub name: String,

    pub price: Money,

    pub stock: i64,

    pub min: i64,

    pub max: i64,

    /// Bill of materials, in the order parts were linked.
    pub associated_parts: Vec<Part>,
}

impl Product {
    /// Builds a product from a draft and a freshly assigned id.
    pub fn from_draft(id: ProductId, draft: ProductDraft) -> Self {
        Product {
            id,
            name: draft.name,
            price: draft.price,
            stock: draft.stock,
            min: draft.min,
            max: draft.max,
            associated_parts: draft.associated_parts,
        }
    }

    /// Copies every field but the id into a draft, for edit forms.
    pub fn to_draft(&self) -> ProductDraft {
        ProductDraft {
            name: self.name.clone(),
            price: self.price,
            stock: self.stock,
            min: self.min,
            max: self.max,
            associated_parts: self.associated_parts.clone(),
        }
    }

    /// Appends a part to the bill of materials.
    pub fn add_associated_part(&mut self, part: Part) {
        self.associated_parts.push(part);
    }

    /// Finds an associated part by id.
    pub fn lookup_associated_part(&self, id: PartId) -> Option<&Part> {
        self.associated_parts.iter().find(|p| p.id == id)
    }

    /// Removes the first associated part with this id.
    ///
    /// ## Returns
    /// `true` if a part was removed, `false` if none matched.
    pub fn remove_associated_part(&mut self, id: PartId) -> bool {
        match self.associated_parts.iter().position(|p| p.id == id) {
            Some(index) => {
                self.associated_parts.remove(index);
                true
            }
            None => false,
        }
    }

    /// Drops every associated part.
    pub fn purge_associated_parts(&mut self) {
        self.associated_parts.clear();
    }

    #[inline]
    pub fn associated_parts_count(&self) -> usize {
        self.associated_parts.len()
    }

    /// Sum of the associated parts' prices, capped at `Money::MAX`.
    pub fn parts_cost(&self) -> Money {
        self.associated_parts.iter().map(|p| p.price).sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
