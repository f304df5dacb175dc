//! # stockroom-core: Pure Domain Logic for Stockroom
//!
//! This crate holds the entity model and the rules a Part or Product must
//! satisfy before the catalog accepts it. Everything here is a pure function
//! over plain data.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stockroom Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 stockroom-cli (interactive shell)               │   │
//! │  │    parts ──► add-part ──► link ──► delete-product ...           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │            stockroom-catalog (in-memory repository)             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ stockroom-core (THIS CRATE) ★                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   error   │  │ validation│  │   │
//! │  │   │   Part    │  │   Money   │  │ CoreError │  │   rules   │  │   │
//! │  │   │  Product  │  │  parsing  │  │ Validation│  │   order   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOGGING • NO GLOBAL STATE • PURE FUNCTIONS        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Entities (Part, Product, drafts, ids)
//! - [`money`] - Money type with integer arithmetic
//! - [`error`] - Domain error types
//! - [`validation`] - Ordered consistency rules
//!
//! ## Example Usage
//!
//! ```rust
//! use stockroom_core::validation::validate_part;
//! use stockroom_core::{Money, Part, PartId, PartSource};
//!
//! let bolt = Part {
//!     id: PartId::new(1),
//!     name: "Bolt".to_string(),
//!     price: Money::from_cents(500),
//!     stock: 0,
//!     min: 0,
//!     max: 10,
//!     source: PartSource::InHouse { machine_id: 7 },
//! };
//!
//! assert!(validate_part(&bolt).is_ok());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, MoneyParseError, ValidationError};
pub use money::Money;
pub use types::*;
