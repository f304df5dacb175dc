//! # stockroom-catalog: In-Memory Catalog for Stockroom
//!
//! The [`Catalog`] is the single authority over which parts and products
//! exist. It is an ordinary value: the application root constructs one and
//! lends it to whatever needs it. There is no global instance.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stockroom Data Flow                              │
//! │                                                                         │
//! │  Shell command (add-part ...)                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  stockroom-catalog (THIS CRATE)                 │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Catalog     │    │  parts.rs     │    │  search.rs   │  │   │
//! │  │   │ (catalog.rs)  │    │  products.rs  │    │              │  │   │
//! │  │   │               │    │               │    │ id first,    │  │   │
//! │  │   │ Vec<Part>     │◄───│ add / update  │    │ then name    │  │   │
//! │  │   │ Vec<Product>  │    │ remove / link │    │ substring    │  │   │
//! │  │   │ id counters   │    │               │    │              │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Process memory only. Everything is gone at exit.                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use stockroom_catalog::Catalog;
//! use stockroom_core::{Money, PartDraft, PartSource};
//!
//! let mut catalog = Catalog::new();
//! let id = catalog
//!     .create_part(PartDraft {
//!         name: "Bolt".to_string(),
//!         price: Money::from_cents(500),
//!         stock: 0,
//!         min: 0,
//!         max: 10,
//!         source: PartSource::InHouse { machine_id: 3 },
//!     })
//!     .unwrap();
//!
//! assert_eq!(catalog.lookup_part(id).map(|p| p.name.as_str()), Some("Bolt"));
//! assert!(catalog.remove_part(id));
//! assert_eq!(catalog.parts_count(), 0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
mod parts;
mod products;
pub mod search;

// =============================================================================
// Re-exports
// =============================================================================

pub use catalog::Catalog;
