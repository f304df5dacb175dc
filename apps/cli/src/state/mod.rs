//! # State Module
//!
//! Application state for the shell.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │          ┌──────────────────┐         ┌──────────────────┐              │
//! │          │  CatalogState    │         │   ConfigState    │              │
//! │          │                  │         │                  │              │
//! │          │  Catalog         │         │  store_name      │              │
//! │          │  (parts,         │         │  currency_symbol │              │
//! │          │   products,      │         │  output_format   │              │
//! │          │   id counters)   │         │  confirm_deletes │              │
//! │          └──────────────────┘         └──────────────────┘              │
//! │                                                                         │
//! │  CatalogState: mutated by commands, owned by the shell                  │
//! │  ConfigState:  read-only after startup                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod catalog;
mod config;

pub use catalog::{CatalogState, CatalogTotals};
pub use config::{ConfigState, OutputFormat};
