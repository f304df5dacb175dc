//! # Validation Module
//!
//! Consistency rules a Part or Product must satisfy before the catalog
//! accepts it.
//!
//! ## Check Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Rule Order (first failure wins)                    │
//! │                                                                         │
//! │        Part                              Product                        │
//! │        ────                              ───────                        │
//! │  1. name required                  1. name required                     │
//! │  2. stock >= 0                     2. stock >= 0                        │
//! │  3. price >= 0                     3. price >= 0                        │
//! │  4. min >= 0                       4. at least one part                 │
//! │  5. min <= max                     5. price covers parts' cost          │
//! │  6. min <= stock <= max            6. min >= 0                          │
//! │                                    7. min <= max                        │
//! │                                    8. min <= stock <= max               │
//! │                                                                         │
//! │  Only the first violation is reported, so messages are deterministic.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Product rules read the associated parts attached at call time, so callers
//! link parts before validating.
//!
//! ## Usage
//! ```rust
//! use stockroom_core::validation::validate_inventory_bounds;
//! use stockroom_core::ValidationError;
//!
//! assert!(validate_inventory_bounds(5, 0, 10).is_ok());
//! assert_eq!(
//!     validate_inventory_bounds(5, 8, 2),
//!     Err(ValidationError::MinExceedsMax { min: 8, max: 2 })
//! );
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{Part, PartDraft, Product, ProductDraft};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Field Validators
// =============================================================================

/// Rejects empty or whitespace-only names.
pub fn validate_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::NameRequired);
    }

    Ok(())
}

/// Stock on hand can be zero but not negative.
pub fn validate_stock(stock: i64) -> ValidationResult<()> {
    if stock < 0 {
        return Err(ValidationError::NegativeStock { stock });
    }

    Ok(())
}

/// Prices can be zero (free items) but not negative.
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::NegativePrice { price });
    }

    Ok(())
}

/// Checks the min/max pair and that stock sits inside it.
///
/// ## Rules
/// - `min` must be non-negative
/// - `min` must not exceed `max`
/// - `stock` must lie in `[min, max]`
pub fn validate_inventory_bounds(stock: i64, min: i64, max: i64) -> ValidationResult<()> {
    if min < 0 {
        return Err(ValidationError::NegativeMin { min });
    }

    if min > max {
        return Err(ValidationError::MinExceedsMax { min, max });
    }

    if stock < min || stock > max {
        return Err(ValidationError::StockOutOfRange { stock, min, max });
    }

    Ok(())
}

/// Checks a product's bill of materials against its price.
///
/// ## Rules
/// - At least one associated part
/// - Sum of part prices must not exceed the product price
/// - A sum that overflows counts as exceeding it
///
/// ## Example
/// ```text
/// Product "Bike" $5.00
///   └── Wheel $10.00
///          │
///          ▼
///   parts_cost $10.00 > price $5.00
///          │
///          ▼
///   PriceBelowPartsCost
/// ```
pub fn validate_bill_of_materials(price: Money, parts: &[Part]) -> ValidationResult<()> {
    if parts.is_empty() {
        return Err(ValidationError::NoAssociatedParts);
    }

    // A total past the i64 range is more than any price can cover
    let checked_cost = parts
        .iter()
        .try_fold(Money::zero(), |total, p| total.checked_add(p.price));
    match checked_cost {
        Some(parts_cost) if parts_cost <= price => {}
        _ => {
            let parts_cost = parts.iter().map(|p| p.price).sum();
            return Err(ValidationError::PriceBelowPartsCost { price, parts_cost });
        }
    }

    Ok(())
}

// =============================================================================
// Entity Validators
// =============================================================================

fn check_part_fields(
    name: &str,
    price: Money,
    stock: i64,
    min: i64,
    max: i64,
) -> ValidationResult<()> {
    validate_name(name)?;
    validate_stock(stock)?;
    validate_price(price)?;
    validate_inventory_bounds(stock, min, max)
}

fn check_product_fields(
    name: &str,
    price: Money,
    stock: i64,
    min: i64,
    max: i64,
    parts: &[Part],
) -> ValidationResult<()> {
    validate_name(name)?;
    validate_stock(stock)?;
    validate_price(price)?;
    validate_bill_of_materials(price, parts)?;
    validate_inventory_bounds(stock, min, max)
}

/// Validates a part, reporting the first violated rule.
pub fn validate_part(part: &Part) -> ValidationResult<()> {
    check_part_fields(&part.name, part.price, part.stock, part.min, part.max)
}

/// Same rules as [`validate_part`], before an id is assigned.
pub fn validate_part_draft(draft: &PartDraft) -> ValidationResult<()> {
    check_part_fields(&draft.name, draft.price, draft.stock, draft.min, draft.max)
}

/// Validates a product, reporting the first violated rule.
pub fn validate_product(product: &Product) -> ValidationResult<()> {
    check_product_fields(
        &product.name,
        product.price,
        product.stock,
        product.min,
        product.max,
        &product.associated_parts,
    )
}

/// Same rules as [`validate_product`], before an id is assigned.
pub fn validate_product_draft(draft: &ProductDraft) -> ValidationResult<()> {
    check_product_fields(
        &draft.name,
        draft.price,
        draft.stock,
        draft.min,
        draft.max,
        &draft.associated_parts,
    )
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PartId, PartSource, ProductId};
    use proptest::prelude::*;

    fn part(name: &str, cents: i64, stock: i64, min: i64, max: i64) -> Part {
        Part {
            id: PartId::new(1),
            name: name.to_string(),
            price: Money::from_cents(cents),
            stock,
            min,
            max,
            source: PartSource::Outsourced {
                company_name: "Acme".to_string(),
            },
        }
    }

    fn product(cents: i64, parts: Vec<Part>) -> Product {
        Product {
            id: ProductId::new(1),
            name: "Bike".to_string(),
            price: Money::from_cents(cents),
            stock: 2,
            min: 1,
            max: 5,
            associated_parts: parts,
        }
    }

    #[test]
    fn test_valid_part() {
        assert!(validate_part(&part("Bolt", 500, 0, 0, 10)).is_ok());
        assert!(validate_part(&part("Bolt", 0, 10, 0, 10)).is_ok());
    }

    #[test]
    fn test_part_rule_order() {
        assert_eq!(
            validate_part(&part("", -1, -1, -1, -5)),
            Err(ValidationError::NameRequired)
        );
        assert_eq!(
            validate_part(&part("   ", 500, 1, 0, 10)),
            Err(ValidationError::NameRequired)
        );
        assert_eq!(
            validate_part(&part("Bolt", -1, -1, -1, -5)),
            Err(ValidationError::NegativeStock { stock: -1 })
        );
        assert_eq!(
            validate_part(&part("Bolt", -1, 1, -1, -5)),
            Err(ValidationError::NegativePrice {
                price: Money::from_cents(-1)
            })
        );
        assert_eq!(
            validate_part(&part("Bolt", 1, 1, -1, -5)),
            Err(ValidationError::NegativeMin { min: -1 })
        );
        assert_eq!(
            validate_part(&part("Bolt", 1, 1, 6, 5)),
            Err(ValidationError::MinExceedsMax { min: 6, max: 5 })
        );
        assert_eq!(
            validate_part(&part("Bolt", 1, 11, 0, 10)),
            Err(ValidationError::StockOutOfRange {
                stock: 11,
                min: 0,
                max: 10
            })
        );
        assert_eq!(
            validate_part(&part("Bolt", 1, 2, 3, 10)),
            Err(ValidationError::StockOutOfRange {
                stock: 2,
                min: 3,
                max: 10
            })
        );
    }

    #[test]
    fn test_valid_product() {
        let p = product(2000, vec![part("Wheel", 1000, 1, 0, 5), part("Seat", 1000, 1, 0, 5)]);
        assert!(validate_product(&p).is_ok());
    }

    #[test]
    fn test_product_price_must_cover_parts() {
        let p = product(500, vec![part("Wheel", 1000, 1, 0, 5)]);
        assert_eq!(
            validate_product(&p),
            Err(ValidationError::PriceBelowPartsCost {
                price: Money::from_cents(500),
                parts_cost: Money::from_cents(1000),
            })
        );
    }

    #[test]
    fn test_product_requires_a_part() {
        let err = validate_product(&product(500, Vec::new())).unwrap_err();
        assert_eq!(err, ValidationError::NoAssociatedParts);
        assert_eq!(err.to_string(), "product requires at least one part");
    }

    #[test]
    fn test_product_rule_order() {
        // Parts rules come before the inventory bounds
        let mut p = product(500, Vec::new());
        p.min = 9;
        p.max = 1;
        assert_eq!(validate_product(&p), Err(ValidationError::NoAssociatedParts));

        // ...but after price
        p.price = Money::from_cents(-5);
        assert!(matches!(
            validate_product(&p),
            Err(ValidationError::NegativePrice { .. })
        ));

        let mut p = product(5000, vec![part("Wheel", 1000, 1, 0, 5)]);
        p.min = -1;
        assert_eq!(
            validate_product(&p),
            Err(ValidationError::NegativeMin { min: -1 })
        );
        p.min = 6;
        assert_eq!(
            validate_product(&p),
            Err(ValidationError::MinExceedsMax { min: 6, max: 5 })
        );
        p.min = 3;
        assert_eq!(
            validate_product(&p),
            Err(ValidationError::StockOutOfRange {
                stock: 2,
                min: 3,
                max: 5
            })
        );
    }

    #[test]
    fn test_drafts_follow_entity_rules() {
        let draft = part("", 100, 1, 0, 5).to_draft();
        assert_eq!(validate_part_draft(&draft), Err(ValidationError::NameRequired));

        let draft = product(100, vec![part("Wheel", 1000, 1, 0, 5)]).to_draft();
        assert!(matches!(
            validate_product_draft(&draft),
            Err(ValidationError::PriceBelowPartsCost { .. })
        ));
    }

    #[test]
    fn test_parts_cost_overflow_is_rejected() {
        let p = product(
            1,
            vec![part("Frame", i64::MAX, 0, 0, 0), part("Fork", i64::MAX, 0, 0, 0)],
        );
        assert_eq!(
            validate_product(&p),
            Err(ValidationError::PriceBelowPartsCost {
                price: Money::from_cents(1),
                parts_cost: Money::MAX,
            })
        );

        // Even the largest price cannot cover an overflowing cost
        let mut p = p;
        p.price = Money::MAX;
        assert!(matches!(
            validate_product(&p),
            Err(ValidationError::PriceBelowPartsCost { .. })
        ));
    }

    #[test]
    fn test_parts_cost_at_the_limit_is_accepted() {
        let parts = vec![part("Frame", i64::MAX - 1, 0, 0, 0), part("Bolt", 1, 0, 0, 0)];
        assert!(validate_bill_of_materials(Money::MAX, &parts).is_ok());
        assert!(validate_bill_of_materials(Money::from_cents(i64::MAX - 1), &parts).is_err());
    }

    proptest! {
        #[test]
        fn empty_name_always_fails_first(
            cents in any::<i32>(),
            stock in any::<i32>(),
            min in any::<i32>(),
            max in any::<i32>(),
        ) {
            let candidate = part("", i64::from(cents), i64::from(stock), i64::from(min), i64::from(max));
            prop_assert_eq!(validate_part(&candidate), Err(ValidationError::NameRequired));
        }

        #[test]
        fn min_above_max_fails_regardless_of_stock(
            (min, max) in (1i64..10_000).prop_flat_map(|min| (Just(min), 0..min)),
            stock in 0i64..20_000,
            cents in 0i64..1_000_000,
        ) {
            let candidate = part("Bolt", cents, stock, min, max);
            prop_assert_eq!(
                validate_part(&candidate),
                Err(ValidationError::MinExceedsMax { min, max })
            );
        }

        #[test]
        fn stock_inside_bounds_is_valid(
            (min, max, stock) in (0i64..1_000)
                .prop_flat_map(|min| (Just(min), min..2_000))
                .prop_flat_map(|(min, max)| (Just(min), Just(max), min..=max)),
            cents in 0i64..1_000_000,
        ) {
            prop_assert!(validate_part(&part("Bolt", cents, stock, min, max)).is_ok());
        }

        #[test]
        fn large_parts_cost_matches_exact_sum(
            prices in prop::collection::vec(0i64..=i64::MAX, 1..4),
            price in 0i64..=i64::MAX,
        ) {
            let parts: Vec<Part> = prices
                .iter()
                .map(|&cents| part("Frame", cents, 0, 0, 0))
                .collect();
            let exact: i128 = prices.iter().map(|&cents| i128::from(cents)).sum();

            let result = validate_bill_of_materials(Money::from_cents(price), &parts);
            if exact <= i128::from(price) {
                prop_assert!(result.is_ok());
            } else {
                let is_price_below_cost = matches!(
                    result,
                    Err(ValidationError::PriceBelowPartsCost { .. })
                );
                prop_assert!(is_price_below_cost);
            }
        }
    }
}
