//! # Part Commands
//!
//! Listing, search and edits for parts.
//!
//! ## Add Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  add-part --name Bolt --price 0.25 --stock 10 --min 0 --max 100 ...     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  PartForm::parse()        ── FormError ──────────► PARSE_ERROR          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Catalog::create_part()   ── ValidationError ────► VALIDATION_ERROR     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  PartDto (with the new id)                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::ApiError;
use crate::forms::{PartEdit, PartForm};
use crate::state::CatalogState;
use stockroom_core::validation::validate_part;
use stockroom_core::{Part, PartId, PartSource};

/// Part as shown to the user or written as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartDto {
    pub id: u32,
    pub name: String,
    pub price_cents: i64,
    pub stock: i64,
    pub min: i64,
    pub max: i64,
    /// "In-House" or "Outsourced"
    pub source: String,
    /// "machine 7" or the company name
    pub source_detail: String,
    pub machine_id: Option<i64>,
    pub company_name: Option<String>,
}

impl From<&Part> for PartDto {
    fn from(p: &Part) -> Self {
        let (machine_id, company_name) = match &p.source {
            PartSource::InHouse { machine_id } => (Some(*machine_id), None),
            PartSource::Outsourced { company_name } => (None, Some(company_name.clone())),
        };
        PartDto {
            id: p.id.get(),
            name: p.name.clone(),
            price_cents: p.price.cents(),
            stock: p.stock,
            min: p.min,
            max: p.max,
            source: p.source.label().to_string(),
            source_detail: p.source.detail(),
            machine_id,
            company_name,
        }
    }
}

/// Result of `delete-part`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletedPartDto {
    pub part: PartDto,
    /// Products that still list their copy of the part
    pub still_used_by: Vec<u32>,
}

/// All parts, in insertion order.
pub fn list_parts(catalog: &CatalogState) -> Vec<PartDto> {
    debug!("list_parts command");
    catalog.with_catalog(|c| c.parts().iter().map(PartDto::from).collect())
}

/// Parts matching an id or a name fragment.
pub fn search_parts(catalog: &CatalogState, query: &str) -> Vec<PartDto> {
    debug!(query = %query, "search_parts command");
    let dtos: Vec<PartDto> = catalog.with_catalog(|c| {
        c.search_parts(query)
            .into_iter()
            .map(PartDto::from)
            .collect()
    });
    debug!(count = dtos.len(), "search_parts complete");
    dtos
}

/// One part by id.
pub fn get_part(catalog: &CatalogState, id: PartId) -> Result<PartDto, ApiError> {
    debug!(part_id = %id, "get_part command");
    catalog
        .with_catalog(|c| c.lookup_part(id).map(PartDto::from))
        .ok_or_else(|| ApiError::not_found("Part", id))
}

/// Parses, validates and stores a new part.
pub fn add_part(catalog: &mut CatalogState, form: &PartForm) -> Result<PartDto, ApiError> {
    debug!(name = %form.name, "add_part command");
    let draft = form.parse()?;

    let id = catalog.with_catalog_mut(|c| c.create_part(draft))?;
    info!(part_id = %id, "Part created");
    get_part(catalog, id)
}

/// Applies an edit to an existing part.
///
/// Products that already link the part keep the copy they took.
pub fn update_part(
    catalog: &mut CatalogState,
    id: PartId,
    edit: &PartEdit,
) -> Result<PartDto, ApiError> {
    debug!(part_id = %id, "update_part command");
    let current = catalog
        .with_catalog(|c| c.lookup_part(id).cloned())
        .ok_or_else(|| ApiError::not_found("Part", id))?;

    let candidate = Part::from_draft(id, edit.apply(current.to_draft())?);
    validate_part(&candidate)?;

    let dto = PartDto::from(&candidate);
    catalog.with_catalog_mut(|c| c.update_part(candidate))?;
    info!(part_id = %id, "Part updated");
    Ok(dto)
}

/// Removes a part from the catalog.
pub fn delete_part(catalog: &mut CatalogState, id: PartId) -> Result<DeletedPartDto, ApiError> {
    debug!(part_id = %id, "delete_part command");
    catalog.with_catalog_mut(|c| -> Result<DeletedPartDto, ApiError> {
        let part = c
            .lookup_part(id)
            .map(PartDto::from)
            .ok_or_else(|| ApiError::not_found("Part", id))?;

        c.remove_part(id);
        let still_used_by = c
            .products_using_part(id)
            .iter()
            .map(|p| p.id.get())
            .collect();

        info!(part_id = %id, "Part deleted");
        Ok(DeletedPartDto {
            part,
            still_used_by,
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use stockroom_core::{Money, ProductDraft};

    fn bolt() -> PartForm {
        PartForm {
            name: "Bolt".to_string(),
            price: "0.25".to_string(),
            stock: "10".to_string(),
            min: "0".to_string(),
            max: "100".to_string(),
            machine_id: Some("7".to_string()),
            company_name: None,
        }
    }

    #[test]
    fn test_add_and_get() {
        let mut catalog = CatalogState::new();
        let added = add_part(&mut catalog, &bolt()).unwrap();

        assert_eq!(added.id, 1);
        assert_eq!(added.price_cents, 25);
        assert_eq!(added.source, "In-House");
        assert_eq!(added.source_detail, "machine 7");
        assert_eq!(added.machine_id, Some(7));
        assert_eq!(get_part(&catalog, PartId::new(1)).unwrap(), added);
    }

    #[test]
    fn test_add_reports_parse_then_validation_errors() {
        let mut catalog = CatalogState::new();

        let err = add_part(
            &mut catalog,
            &PartForm {
                stock: "lots".to_string(),
                ..bolt()
            },
        )
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::ParseError);

        let err = add_part(
            &mut catalog,
            &PartForm {
                stock: "500".to_string(),
                ..bolt()
            },
        )
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "stock must be within [min, max]");

        assert!(list_parts(&catalog).is_empty());
    }

    #[test]
    fn test_get_missing_part() {
        let catalog = CatalogState::new();
        let err = get_part(&catalog, PartId::new(9)).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Part not found: 9");
    }

    #[test]
    fn test_update_validates_and_keeps_original_on_failure() {
        let mut catalog = CatalogState::new();
        add_part(&mut catalog, &bolt()).unwrap();

        let err = update_part(
            &mut catalog,
            PartId::new(1),
            &PartEdit {
                min: Some("200".to_string()),
                ..PartEdit::default()
            },
        )
        .unwrap_err();
        assert_eq!(err.message, "min must not exceed max");
        assert_eq!(get_part(&catalog, PartId::new(1)).unwrap().min, 0);

        let updated = update_part(
            &mut catalog,
            PartId::new(1),
            &PartEdit {
                name: Some("Hex Bolt".to_string()),
                company_name: Some("Acme".to_string()),
                ..PartEdit::default()
            },
        )
        .unwrap();
        assert_eq!(updated.name, "Hex Bolt");
        assert_eq!(updated.source, "Outsourced");
        assert_eq!(updated.source_detail, "Acme");
        assert_eq!(updated.machine_id, None);
        assert_eq!(get_part(&catalog, PartId::new(1)).unwrap(), updated);
    }

    #[test]
    fn test_update_missing_part() {
        let mut catalog = CatalogState::new();
        let err = update_part(&mut catalog, PartId::new(3), &PartEdit::default()).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_search() {
        let mut catalog = CatalogState::new();
        add_part(&mut catalog, &bolt()).unwrap();
        add_part(
            &mut catalog,
            &PartForm {
                name: "Wing Nut".to_string(),
                ..bolt()
            },
        )
        .unwrap();

        let found = search_parts(&catalog, "NUT");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Wing Nut");
        assert_eq!(search_parts(&catalog, "").len(), 2);
    }

    #[test]
    fn test_delete_reports_referencing_products() {
        let mut catalog = CatalogState::new();
        add_part(&mut catalog, &bolt()).unwrap();
        catalog
            .with_catalog_mut(|c| {
                let parts = vec![c.lookup_part(PartId::new(1)).unwrap().clone()];
                c.create_product(ProductDraft {
                    name: "Shelf".to_string(),
                    price: Money::from_cents(1000),
                    stock: 1,
                    min: 0,
                    max: 5,
                    associated_parts: parts,
                })
            })
            .unwrap();

        let deleted = delete_part(&mut catalog, PartId::new(1)).unwrap();
        assert_eq!(deleted.part.name, "Bolt");
        assert_eq!(deleted.still_used_by, vec![1]);
        assert!(list_parts(&catalog).is_empty());

        let err = delete_part(&mut catalog, PartId::new(1)).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }
}
