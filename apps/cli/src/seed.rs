//! # Demo Data
//!
//! Populates an empty catalog with a small bicycle workshop: a few in-house
//! and outsourced parts, and products assembled from them.
//!
//! ## Usage
//! ```bash
//! STOCKROOM_SEED=1 cargo run -p stockroom-cli
//! ```
//!
//! Everything goes through `create_part` / `create_product`, so the demo
//! data obeys the same rules as typed-in entries.

use tracing::info;

use stockroom_catalog::Catalog;
use stockroom_core::{
    CoreError, CoreResult, Money, Part, PartDraft, PartId, PartSource, ProductDraft,
};

enum Source {
    Machine(i64),
    Company(&'static str),
}

/// (name, price in cents, stock, min, max, source)
const PARTS: &[(&str, i64, i64, i64, i64, Source)] = &[
    ("Hex Bolt", 25, 40, 10, 500, Source::Machine(12)),
    ("Brake Cable", 680, 12, 4, 40, Source::Company("Shimano")),
    ("Steel Frame", 8500, 6, 2, 20, Source::Machine(3)),
    ("Wheel", 2400, 18, 6, 60, Source::Company("Mavic")),
    ("Chain", 1599, 25, 5, 80, Source::Company("KMC")),
    ("Saddle", 1250, 9, 3, 30, Source::Machine(7)),
];

/// (name, price in cents, stock, min, max, indexes into `PARTS`)
const PRODUCTS: &[(&str, i64, i64, i64, i64, &[usize])] = &[
    ("Road Bike", 29_999, 3, 1, 10, &[2, 3, 3, 4, 5, 1, 0]),
    ("Kids Bike", 14_999, 5, 2, 15, &[2, 3, 3, 5]),
    ("Repair Kit", 3_499, 14, 5, 50, &[1, 4, 0]),
];

/// What the seeder added.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub parts: usize,
    pub products: usize,
}

/// Adds the demo parts and products to `catalog`.
pub fn seed_demo_catalog(catalog: &mut Catalog) -> CoreResult<SeedSummary> {
    let mut part_ids: Vec<PartId> = Vec::with_capacity(PARTS.len());
    for (name, cents, stock, min, max, source) in PARTS {
        let source = match source {
            Source::Machine(machine_id) => PartSource::InHouse {
                machine_id: *machine_id,
            },
            Source::Company(company) => PartSource::Outsourced {
                company_name: company.to_string(),
            },
        };
        part_ids.push(catalog.create_part(PartDraft {
            name: name.to_string(),
            price: Money::from_cents(*cents),
            stock: *stock,
            min: *min,
            max: *max,
            source,
        })?);
    }

    for (name, cents, stock, min, max, parts) in PRODUCTS {
        let ids: Vec<PartId> = parts.iter().map(|index| part_ids[*index]).collect();
        let associated_parts = parts_for(catalog, &ids)?;
        catalog.create_product(ProductDraft {
            name: name.to_string(),
            price: Money::from_cents(*cents),
            stock: *stock,
            min: *min,
            max: *max,
            associated_parts,
        })?;
    }

    let summary = SeedSummary {
        parts: PARTS.len(),
        products: PRODUCTS.len(),
    };
    info!(
        parts = summary.parts,
        products = summary.products,
        "Demo catalog seeded"
    );
    Ok(summary)
}

/// Copies the listed parts out of the catalog, in order.
fn parts_for(catalog: &Catalog, ids: &[PartId]) -> CoreResult<Vec<Part>> {
    ids.iter()
        .map(|&id| {
            catalog
                .lookup_part(id)
                .cloned()
                .ok_or(CoreError::PartNotFound(id))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_core::validation::{validate_part, validate_product};

    #[test]
    fn test_seed_populates_valid_catalog() {
        let mut catalog = Catalog::new();
        let summary = seed_demo_catalog(&mut catalog).unwrap();

        assert_eq!(summary, SeedSummary { parts: 6, products: 3 });
        assert_eq!(catalog.parts_count(), 6);
        assert_eq!(catalog.products_count(), 3);
        assert!(catalog.parts().iter().all(|p| validate_part(p).is_ok()));
        assert!(catalog.products().iter().all(|p| validate_product(p).is_ok()));
    }

    #[test]
    fn test_seed_mixes_sources_and_shared_parts() {
        let mut catalog = Catalog::new();
        seed_demo_catalog(&mut catalog).unwrap();

        let in_house = |p: &Part| matches!(p.source, PartSource::InHouse { .. });
        assert!(catalog.parts().iter().any(in_house));
        assert!(catalog.parts().iter().any(|p| !in_house(p)));

        // The frame goes into both bikes
        let frame = catalog.search_parts("frame")[0].id;
        assert_eq!(catalog.products_using_part(frame).len(), 2);

        let road_bike = catalog.search_products("road")[0];
        assert_eq!(road_bike.associated_parts_count(), 7);
        assert!(road_bike.parts_cost() <= road_bike.price);
    }

    #[test]
    fn test_parts_for_missing_part_is_an_error() {
        let mut catalog = Catalog::new();
        seed_demo_catalog(&mut catalog).unwrap();
        let missing = PartId::new(999);

        let err = parts_for(&catalog, &[PartId::new(1), missing]).unwrap_err();
        assert!(matches!(err, CoreError::PartNotFound(id) if id == missing));

        let found = parts_for(&catalog, &[PartId::new(1), PartId::new(1)]).unwrap();
        assert_eq!(found.len(), 2);
    }
}
