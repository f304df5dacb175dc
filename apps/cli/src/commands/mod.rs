//! # Commands Module
//!
//! Handlers behind every shell command.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── part.rs     ◄─── Part listing, search, add/edit/delete
//! ├── product.rs  ◄─── Product CRUD, link/unlink parts
//! └── config.rs   ◄─── Configuration display
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  stockroom> part 3                                                      │
//! │         │                                                               │
//! │         ▼  (shell parses the line)                                      │
//! │  ShellCommand::Part { id: PartId(3) }                                   │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  fn get_part(                                                           │
//! │      catalog: &CatalogState,  ◄── only the state it needs               │
//! │      id: PartId,                                                        │
//! │  ) -> Result<PartDto, ApiError>                                         │
//! │         │                                                               │
//! │         ▼  (table or JSON)                                              │
//! │  stdout                                                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Read-only commands take `&CatalogState`; edits take `&mut CatalogState`.

pub mod config;
pub mod part;
pub mod product;

pub use config::ConfigDto;
pub use part::{DeletedPartDto, PartDto};
pub use product::ProductDto;
