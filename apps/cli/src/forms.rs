//! # Entry Forms
//!
//! Raw text from the shell, turned into typed drafts.
//!
//! ## Form Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  --price "12.5" --stock "4" ...                                         │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  PartForm::parse() ──── text unreadable? ──► FormError (PARSE_ERROR)    │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  PartDraft ──► validate ──► rule broken? ──► ValidationError            │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  Catalog::create_part                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Forms only read text. Whether the values make sense together is the
//! validator's job, so an empty name or `min > max` parses fine here.

use thiserror::Error;

use stockroom_core::{Money, MoneyParseError, PartDraft, PartId, PartSource, ProductDraft};

/// Field text that could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{field}: '{value}' is not a whole number")]
    InvalidNumber { field: &'static str, value: String },

    #[error("{field}: {source}")]
    InvalidPrice {
        field: &'static str,
        value: String,
        #[source]
        source: MoneyParseError,
    },

    #[error("{field} is required")]
    MissingField { field: &'static str },

    /// Both a machine id and a company name were given.
    #[error("a part is either in-house (machine id) or outsourced (company), not both")]
    ConflictingSource,
}

fn parse_whole(field: &'static str, value: &str) -> Result<i64, FormError> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|_| FormError::InvalidNumber {
            field,
            value: value.to_string(),
        })
}

fn parse_price(field: &'static str, value: &str) -> Result<Money, FormError> {
    value.parse::<Money>().map_err(|source| FormError::InvalidPrice {
        field,
        value: value.to_string(),
        source,
    })
}

fn parse_part_id(value: &str) -> Result<PartId, FormError> {
    value.parse::<PartId>().map_err(|_| FormError::InvalidNumber {
        field: "part",
        value: value.to_string(),
    })
}

/// Reads the source pair. `None` when neither was given.
fn parse_source(
    machine_id: Option<&str>,
    company_name: Option<&str>,
) -> Result<Option<PartSource>, FormError> {
    match (machine_id, company_name) {
        (Some(_), Some(_)) => Err(FormError::ConflictingSource),
        (Some(machine_id), None) => Ok(Some(PartSource::InHouse {
            machine_id: parse_whole("machine id", machine_id)?,
        })),
        (None, Some(company)) => {
            let company = company.trim();
            if company.is_empty() {
                return Err(FormError::MissingField { field: "company" });
            }
            Ok(Some(PartSource::Outsourced {
                company_name: company.to_string(),
            }))
        }
        (None, None) => Ok(None),
    }
}

// =============================================================================
// Part Forms
// =============================================================================

/// New part entry. Every field is required; exactly one of `machine_id`
/// and `company_name` picks the source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartForm {
    pub name: String,
    pub price: String,
    pub stock: String,
    pub min: String,
    pub max: String,
    pub machine_id: Option<String>,
    pub company_name: Option<String>,
}

impl PartForm {
    pub fn parse(&self) -> Result<PartDraft, FormError> {
        let price = parse_price("price", &self.price)?;
        let stock = parse_whole("stock", &self.stock)?;
        let min = parse_whole("min", &self.min)?;
        let max = parse_whole("max", &self.max)?;
        let source = parse_source(self.machine_id.as_deref(), self.company_name.as_deref())?
            .ok_or(FormError::MissingField {
                field: "machine id or company",
            })?;

        Ok(PartDraft {
            name: self.name.trim().to_string(),
            price,
            stock,
            min,
            max,
            source,
        })
    }
}

/// Edit of an existing part. Absent fields keep their current value; giving
/// a machine id or company switches the source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartEdit {
    pub name: Option<String>,
    pub price: Option<String>,
    pub stock: Option<String>,
    pub min: Option<String>,
    pub max: Option<String>,
    pub machine_id: Option<String>,
    pub company_name: Option<String>,
}

impl PartEdit {
    /// Overlays the edited fields on the part's current values.
    pub fn apply(&self, mut draft: PartDraft) -> Result<PartDraft, FormError> {
        if let Some(name) = &self.name {
            draft.name = name.trim().to_string();
        }
        if let Some(price) = &self.price {
            draft.price = parse_price("price", price)?;
        }
        if let Some(stock) = &self.stock {
            draft.stock = parse_whole("stock", stock)?;
        }
        if let Some(min) = &self.min {
            draft.min = parse_whole("min", min)?;
        }
        if let Some(max) = &self.max {
            draft.max = parse_whole("max", max)?;
        }
        if let Some(source) =
            parse_source(self.machine_id.as_deref(), self.company_name.as_deref())?
        {
            draft.source = source;
        }
        Ok(draft)
    }

    pub fn is_empty(&self) -> bool {
        *self == PartEdit::default()
    }
}

// =============================================================================
// Product Forms
// =============================================================================

/// New product entry. The listed part ids are resolved against the catalog
/// by the command, not here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductForm {
    pub name: String,
    pub price: String,
    pub stock: String,
    pub min: String,
    pub max: String,
    pub part_ids: Vec<String>,
}

/// A parsed product form: the draft has no parts yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductInput {
    pub draft: ProductDraft,
    pub part_ids: Vec<PartId>,
}

impl ProductForm {
    pub fn parse(&self) -> Result<ProductInput, FormError> {
        let price = parse_price("price", &self.price)?;
        let stock = parse_whole("stock", &self.stock)?;
        let min = parse_whole("min", &self.min)?;
        let max = parse_whole("max", &self.max)?;
        let part_ids = self
            .part_ids
            .iter()
            .map(|id| parse_part_id(id))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ProductInput {
            draft: ProductDraft {
                name: self.name.trim().to_string(),
                price,
                stock,
                min,
                max,
                associated_parts: Vec::new(),
            },
            part_ids,
        })
    }
}

/// Edit of an existing product's own fields. The bill of materials is left
/// alone; `link`/`unlink` change it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductEdit {
    pub name: Option<String>,
    pub price: Option<String>,
    pub stock: Option<String>,
    pub min: Option<String>,
    pub max: Option<String>,
}

impl ProductEdit {
    pub fn apply(&self, mut draft: ProductDraft) -> Result<ProductDraft, FormError> {
        if let Some(name) = &self.name {
            draft.name = name.trim().to_string();
        }
        if let Some(price) = &self.price {
            draft.price = parse_price("price", price)?;
        }
        if let Some(stock) = &self.stock {
            draft.stock = parse_whole("stock", stock)?;
        }
        if let Some(min) = &self.min {
            draft.min = parse_whole("min", min)?;
        }
        if let Some(max) = &self.max {
            draft.max = parse_whole("max", max)?;
        }
        Ok(draft)
    }

    pub fn is_empty(&self) -> bool {
        *self == ProductEdit::default()
    }
}
