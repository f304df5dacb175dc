//! # Output Rendering
//!
//! Turns command results into text tables or JSON documents.
//!
//! ```text
//! ID    Name                    Price       Stock    Min    Max  Source
//! 1     Hex Bolt                $0.25          40     10    500  In-House (machine 12)
//! 2     Brake Cable             $6.80          12      4     40  Outsourced (Shimano)
//! ```

use std::fmt::Write;

use serde::Serialize;

use crate::commands::{ConfigDto, DeletedPartDto, PartDto, ProductDto};
use crate::error::ApiError;
use crate::state::{ConfigState, OutputFormat};

/// Everything a command can print.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CommandOutput {
    Parts(Vec<PartDto>),
    Part(PartDto),
    Products(Vec<ProductDto>),
    Product(ProductDto),
    DeletedPart(DeletedPartDto),
    DeletedProduct(ProductDto),
    Config(ConfigDto),
    Message { message: String },
}

impl CommandOutput {
    pub fn message(message: impl Into<String>) -> Self {
        CommandOutput::Message {
            message: message.into(),
        }
    }

    /// Renders in the configured format.
    pub fn render(&self, config: &ConfigState) -> Result<String, ApiError> {
        match config.output_format {
            OutputFormat::Json => serde_json::to_string_pretty(self)
                .map_err(|e| ApiError::internal(format!("JSON encoding failed: {}", e))),
            OutputFormat::Table => Ok(self.render_text(config)),
        }
    }

    fn render_text(&self, config: &ConfigState) -> String {
        match self {
            CommandOutput::Parts(parts) => parts_table(parts, config),
            CommandOutput::Part(part) => part_detail(part, config),
            CommandOutput::Products(products) => products_table(products, config),
            CommandOutput::Product(product) => product_detail(product, config),
            CommandOutput::DeletedPart(deleted) => {
                let mut out = format!("Deleted part {} '{}'", deleted.part.id, deleted.part.name);
                if !deleted.still_used_by.is_empty() {
                    let ids: Vec<String> =
                        deleted.still_used_by.iter().map(u32::to_string).collect();
                    let _ = write!(
                        out,
                        "\nWarning: still listed by product(s) {}",
                        ids.join(", ")
                    );
                }
                out
            }
            CommandOutput::DeletedProduct(product) => {
                format!("Deleted product {} '{}'", product.id, product.name)
            }
            CommandOutput::Config(dto) => config_text(dto),
            CommandOutput::Message { message } => message.clone(),
        }
    }
}

fn source_text(part: &PartDto) -> String {
    format!("{} ({})", part.source, part.source_detail)
}

// =============================================================================
// Parts
// =============================================================================

fn parts_table(parts: &[PartDto], config: &ConfigState) -> String {
    if parts.is_empty() {
        return "No parts found.".to_string();
    }

    let mut out = format!(
        "{:<5} {:<24} {:>10} {:>7} {:>6} {:>6}  {}",
        "ID", "Name", "Price", "Stock", "Min", "Max", "Source"
    );
    for part in parts {
        let _ = write!(
            out,
            "\n{:<5} {:<24} {:>10} {:>7} {:>6} {:>6}  {}",
            part.id,
            part.name,
            config.format_currency(part.price_cents),
            part.stock,
            part.min,
            part.max,
            source_text(part)
        );
    }
    out
}

fn part_detail(part: &PartDto, config: &ConfigState) -> String {
    format!(
        "Part {}: {}\n  Price:  {}\n  Stock:  {} (min {}, max {})\n  Source: {}",
        part.id,
        part.name,
        config.format_currency(part.price_cents),
        part.stock,
        part.min,
        part.max,
        source_text(part)
    )
}

// =============================================================================
// Products
// =============================================================================

fn products_table(products: &[ProductDto], config: &ConfigState) -> String {
    if products.is_empty() {
        return "No products found.".to_string();
    }

    let mut out = format!(
        "{:<5} {:<24} {:>10} {:>7} {:>6} {:>6} {:>6}",
        "ID", "Name", "Price", "Stock", "Min", "Max", "Parts"
    );
    for product in products {
        let _ = write!(
            out,
            "\n{:<5} {:<24} {:>10} {:>7} {:>6} {:>6} {:>6}",
            product.id,
            product.name,
            config.format_currency(product.price_cents),
            product.stock,
            product.min,
            product.max,
            product.parts.len()
        );
    }
    out
}

fn product_detail(product: &ProductDto, config: &ConfigState) -> String {
    let mut out = format!(
        "Product {}: {}\n  Price:  {} (parts cost {})\n  Stock:  {} (min {}, max {})",
        product.id,
        product.name,
        config.format_currency(product.price_cents),
        config.format_currency(product.parts_cost_cents),
        product.stock,
        product.min,
        product.max,
    );

    if product.parts.is_empty() {
        out.push_str("\n  No associated parts.");
    } else {
        out.push_str("\n  Associated parts:");
        for part in &product.parts {
            let _ = write!(
                out,
                "\n    {:<5} {:<24} {:>10}  {}",
                part.id,
                part.name,
                config.format_currency(part.price_cents),
                source_text(part)
            );
        }
    }
    out
}

// =============================================================================
// Config
// =============================================================================

fn config_text(dto: &ConfigDto) -> String {
    let config = &dto.config;
    let format = match config.output_format {
        OutputFormat::Table => "table",
        OutputFormat::Json => "json",
    };
    format!(
        "Store:            {}\nCurrency symbol:  {}\nOutput:           {}\nConfirm deletes:  {}\nDemo data:        {}\nParts:            {} (next id {})\nProducts:         {} (next id {})",
        config.store_name,
        config.currency_symbol,
        format,
        if config.confirm_deletes { "yes" } else { "no" },
        if config.seed_demo_data { "yes" } else { "no" },
        dto.catalog.parts,
        dto.catalog.next_part_id,
        dto.catalog.products,
        dto.catalog.next_product_id,
    )
}
