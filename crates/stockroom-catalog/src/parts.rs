//! Part operations on the [`Catalog`].

use tracing::{debug, warn};

use stockroom_core::validation::validate_part_draft;
use stockroom_core::{CoreError, CoreResult, Part, PartDraft, PartId};

use crate::catalog::Catalog;

impl Catalog {
    /// Stores a part that already carries its id.
    ///
    /// ## Errors
    /// `DuplicatePartId` if a part with the same id is present.
    pub fn add_part(&mut self, part: Part) -> CoreResult<()> {
        if self.lookup_part(part.id).is_some() {
            return Err(CoreError::DuplicatePartId(part.id));
        }

        self.observe_part_id(part.id);
        debug!(part_id = %part.id, name = %part.name, source = part.source.label(), "Part added");
        self.parts.push(part);
        Ok(())
    }

    /// Validates a draft, assigns it the next id and stores it.
    ///
    /// Nothing changes and no id is consumed when validation fails.
    pub fn create_part(&mut self, draft: PartDraft) -> CoreResult<PartId> {
        validate_part_draft(&draft)?;

        let id = self.allocate_part_id();
        self.add_part(Part::from_draft(id, draft))?;
        Ok(id)
    }

    /// Finds a part by id.
    pub fn lookup_part(&self, id: PartId) -> Option<&Part> {
        self.parts.iter().find(|p| p.id == id)
    }

    /// Replaces the stored part that has the same id.
    ///
    /// ## Errors
    /// `PartNotFound` if no part has that id. The catalog is unchanged and
    /// the part is not inserted.
    pub fn update_part(&mut self, part: Part) -> CoreResult<()> {
        let slot = self
            .parts
            .iter_mut()
            .find(|p| p.id == part.id)
            .ok_or(CoreError::PartNotFound(part.id))?;

        debug!(part_id = %part.id, name = %part.name, "Part updated");
        *slot = part;
        Ok(())
    }

    /// Removes a part by id.
    ///
    /// Products that linked the part keep their copy of it; a warning names
    /// them.
    ///
    /// ## Returns
    /// `true` if a part was removed, `false` if the id was not present.
    pub fn remove_part(&mut self, id: PartId) -> bool {
        let Some(index) = self.parts.iter().position(|p| p.id == id) else {
            debug!(part_id = %id, "remove_part: no such part");
            return false;
        };

        let removed = self.parts.remove(index);

        let still_linked: Vec<String> = self
            .products_using_part(id)
            .iter()
            .map(|p| p.id.to_string())
            .collect();
        if !still_linked.is_empty() {
            warn!(
                part_id = %id,
                products = %still_linked.join(","),
                "Removed part is still listed by products"
            );
        }

        debug!(part_id = %id, name = %removed.name, "Part removed");
        true
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_core::{Money, PartSource, ValidationError};

    fn draft(name: &str) -> PartDraft {
        PartDraft {
            name: name.to_string(),
            price: Money::from_cents(500),
            stock: 0,
            min: 0,
            max: 10,
            source: PartSource::InHouse { machine_id: 3 },
        }
    }

    #[test]
    fn test_add_then_lookup_round_trip() {
        let mut catalog = Catalog::new();
        let part = Part::from_draft(catalog.allocate_part_id(), draft("Bolt"));

        catalog.add_part(part.clone()).unwrap();

        assert_eq!(catalog.lookup_part(part.id), Some(&part));
        assert_eq!(catalog.parts_count(), 1);
    }

    #[test]
    fn test_add_rejects_duplicate_id() {
        let mut catalog = Catalog::new();
        let id = catalog.create_part(draft("Bolt")).unwrap();

        let clash = Part::from_draft(id, draft("Nut"));
        assert_eq!(catalog.add_part(clash), Err(CoreError::DuplicatePartId(id)));
        assert_eq!(catalog.parts_count(), 1);
        assert_eq!(catalog.lookup_part(id).unwrap().name, "Bolt");
    }

    #[test]
    fn test_add_with_explicit_id_advances_counter() {
        let mut catalog = Catalog::new();
        catalog
            .add_part(Part::from_draft(PartId::new(10), draft("Bolt")))
            .unwrap();

        let next = catalog.create_part(draft("Nut")).unwrap();
        assert_eq!(next, PartId::new(11));
    }

    #[test]
    fn test_create_rejects_invalid_draft_without_consuming_id() {
        let mut catalog = Catalog::new();
        let before = catalog.next_part_id();

        let err = catalog.create_part(draft("")).unwrap_err();

        assert_eq!(err, CoreError::Validation(ValidationError::NameRequired));
        assert_eq!(catalog.parts_count(), 0);
        assert_eq!(catalog.next_part_id(), before);
    }

    #[test]
    fn test_ids_not_reused_after_removal() {
        let mut catalog = Catalog::new();
        let a = catalog.create_part(draft("A")).unwrap();
        let b = catalog.create_part(draft("B")).unwrap();

        assert!(catalog.remove_part(a));
        let c = catalog.create_part(draft("C")).unwrap();

        assert_ne!(c, a);
        assert_ne!(c, b);
        assert_eq!(catalog.parts_count(), 2);
    }

    #[test]
    fn test_update_replaces_in_place() {
        let mut catalog = Catalog::new();
        let a = catalog.create_part(draft("A")).unwrap();
        let b = catalog.create_part(draft("B")).unwrap();
        catalog.create_part(draft("C")).unwrap();
        catalog.remove_part(a);

        let mut edited = catalog.lookup_part(b).unwrap().clone();
        edited.name = "B2".to_string();
        edited.source = PartSource::Outsourced {
            company_name: "Acme".to_string(),
        };
        catalog.update_part(edited.clone()).unwrap();

        assert_eq!(catalog.lookup_part(b), Some(&edited));
        // Position kept: B is still listed before C
        assert_eq!(catalog.parts()[0].id, b);
        assert_eq!(catalog.parts_count(), 2);
    }

    #[test]
    fn test_update_missing_part_fails_without_insert() {
        let mut catalog = Catalog::new();
        catalog.create_part(draft("A")).unwrap();

        let ghost = Part::from_draft(PartId::new(99), draft("Ghost"));
        assert_eq!(
            catalog.update_part(ghost),
            Err(CoreError::PartNotFound(PartId::new(99)))
        );
        assert_eq!(catalog.parts_count(), 1);
        assert!(catalog.lookup_part(PartId::new(99)).is_none());
    }

    #[test]
    fn test_remove_missing_part_is_noop() {
        let mut catalog = Catalog::new();
        let a = catalog.create_part(draft("A")).unwrap();
        let snapshot = catalog.parts().to_vec();

        assert!(!catalog.remove_part(PartId::new(42)));
        assert_eq!(catalog.parts(), snapshot.as_slice());
        assert!(catalog.lookup_part(a).is_some());
    }
}
