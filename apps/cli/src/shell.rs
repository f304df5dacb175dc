//! # Shell
//!
//! Reads one command per line and runs it against the catalog.
//!
//! ## Line Handling
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  add-part --name "Hex Bolt" --price 0.25 ...                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  split_args()         quotes group words; unterminated → error          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  clap (ShellLine)     unknown command / bad flag → INVALID_COMMAND      │
//! │       │               `help` → usage text                               │
//! │       ▼                                                                 │
//! │  Shell::execute()     delete? → confirm (unless --yes or disabled)      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  commands::*  ──►  CommandOutput  ──►  table / JSON                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use clap::error::ErrorKind;
use clap::{Args, Parser, Subcommand};
use tracing::debug;

use crate::commands::{config, part, product};
use crate::error::ApiError;
use crate::forms::{PartEdit, PartForm, ProductEdit, ProductForm};
use crate::render::CommandOutput;
use crate::state::{CatalogState, ConfigState};
use stockroom_core::{CoreError, PartId, ProductId};

// =============================================================================
// Command Grammar
// =============================================================================

#[derive(Debug, Parser)]
#[command(name = "stockroom", no_binary_name = true)]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

/// Every command the shell understands.
#[derive(Debug, Subcommand)]
pub enum ShellCommand {
    /// List parts, or search them by id or name
    Parts { query: Vec<String> },

    /// List products, or search them by id or name
    Products { query: Vec<String> },

    /// Show one part
    Part { id: PartId },

    /// Show one product with its parts
    Product { id: ProductId },

    /// Add a part
    AddPart(AddPartArgs),

    /// Change fields of a part
    EditPart {
        id: PartId,
        #[command(flatten)]
        fields: EditPartArgs,
    },

    /// Delete a part
    DeletePart {
        id: PartId,
        /// Skip the confirmation question
        #[arg(short, long)]
        yes: bool,
    },

    /// Add a product made of existing parts
    AddProduct(AddProductArgs),

    /// Change a product's own fields
    EditProduct {
        id: ProductId,
        #[command(flatten)]
        fields: EditProductArgs,
    },

    /// Add a part to a product
    Link { product: ProductId, part: PartId },

    /// Remove a part from a product
    Unlink { product: ProductId, part: PartId },

    /// Delete a product that has no parts
    DeleteProduct {
        id: ProductId,
        /// Drop the product's parts first
        #[arg(long)]
        purge: bool,
        /// Skip the confirmation question
        #[arg(short, long)]
        yes: bool,
    },

    /// Show configuration and catalog counts
    Config,

    /// Leave the shell
    #[command(alias = "quit")]
    Exit,
}

#[derive(Debug, Args)]
pub struct AddPartArgs {
    #[arg(long)]
    name: String,
    #[arg(long, allow_hyphen_values = true)]
    price: String,
    #[arg(long, allow_hyphen_values = true)]
    stock: String,
    #[arg(long, allow_hyphen_values = true)]
    min: String,
    #[arg(long, allow_hyphen_values = true)]
    max: String,
    /// In-house part made on this machine
    #[arg(long, allow_hyphen_values = true)]
    machine_id: Option<String>,
    /// Outsourced part bought from this company
    #[arg(long)]
    company: Option<String>,
}

impl From<AddPartArgs> for PartForm {
    fn from(args: AddPartArgs) -> Self {
        PartForm {
            name: args.name,
            price: args.price,
            stock: args.stock,
            min: args.min,
            max: args.max,
            machine_id: args.machine_id,
            company_name: args.company,
        }
    }
}

#[derive(Debug, Args)]
pub struct EditPartArgs {
    #[arg(long)]
    name: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    price: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    stock: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    min: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    max: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    machine_id: Option<String>,
    #[arg(long)]
    company: Option<String>,
}

impl From<EditPartArgs> for PartEdit {
    fn from(args: EditPartArgs) -> Self {
        PartEdit {
            name: args.name,
            price: args.price,
            stock: args.stock,
            min: args.min,
            max: args.max,
            machine_id: args.machine_id,
            company_name: args.company,
        }
    }
}

#[derive(Debug, Args)]
pub struct AddProductArgs {
    #[arg(long)]
    name: String,
    #[arg(long, allow_hyphen_values = true)]
    price: String,
    #[arg(long, allow_hyphen_values = true)]
    stock: String,
    #[arg(long, allow_hyphen_values = true)]
    min: String,
    #[arg(long, allow_hyphen_values = true)]
    max: String,
    /// Part id to include; repeat or comma-separate for more
    #[arg(long = "part", value_delimiter = ',')]
    parts: Vec<String>,
}

impl From<AddProductArgs> for ProductForm {
    fn from(args: AddProductArgs) -> Self {
        ProductForm {
            name: args.name,
            price: args.price,
            stock: args.stock,
            min: args.min,
            max: args.max,
            part_ids: args.parts,
        }
    }
}

#[derive(Debug, Args)]
pub struct EditProductArgs {
    #[arg(long)]
    name: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    price: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    stock: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    min: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    max: Option<String>,
}

impl From<EditProductArgs> for ProductEdit {
    fn from(args: EditProductArgs) -> Self {
        ProductEdit {
            name: args.name,
            price: args.price,
            stock: args.stock,
            min: args.min,
            max: args.max,
        }
    }
}

// =============================================================================
// Tokenizer
// =============================================================================

/// Splits a line into words. Single or double quotes group words and may
/// be empty (`--name ""`); a backslash escapes the next character outside
/// single quotes.
pub fn split_args(line: &str) -> Result<Vec<String>, ApiError> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match quote {
            Some(q) if c == q => quote = None,
            Some('"') if c == '\\' => current.push(chars.next().unwrap_or('\\')),
            Some(_) => current.push(c),
            None => match c {
                '"' | '\'' => {
                    quote = Some(c);
                    in_word = true;
                }
                '\\' => {
                    current.push(chars.next().unwrap_or('\\'));
                    in_word = true;
                }
                c if c.is_whitespace() => {
                    if in_word {
                        args.push(std::mem::take(&mut current));
                        in_word = false;
                    }
                }
                c => {
                    current.push(c);
                    in_word = true;
                }
            },
        }
    }

    if let Some(q) = quote {
        return Err(ApiError::invalid_command(format!("unterminated {} quote", q)));
    }
    if in_word {
        args.push(current);
    }
    Ok(args)
}

/// Parses a line that has already been split.
pub fn parse_command(args: &[String]) -> Result<ParsedLine, ApiError> {
    match ShellLine::try_parse_from(args) {
        Ok(line) => Ok(ParsedLine::Command(line.command)),
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            | ErrorKind::DisplayVersion => Ok(ParsedLine::Help(e.to_string())),
            _ => {
                let text = e.to_string();
                let text = text.strip_prefix("error: ").unwrap_or(&text);
                Err(ApiError::invalid_command(text.trim_end()))
            }
        },
    }
}

/// A parsed line: a command to run, or usage text to print.
#[derive(Debug)]
pub enum ParsedLine {
    Command(ShellCommand),
    Help(String),
}

// =============================================================================
// Shell
// =============================================================================

/// Asks the user a yes/no question before destructive commands.
pub trait Confirm {
    fn confirm(&mut self, question: &str) -> bool;
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, question: &str) -> bool {
        self(question)
    }
}

/// Reads `y` / `yes` (any case) as agreement.
pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

/// What the caller should do after a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print this and read the next line
    Output(String),
    /// Nothing to print
    Nothing,
    /// Leave the loop
    Exit,
}

/// The interactive session: configuration plus the catalog it edits.
#[derive(Debug)]
pub struct Shell {
    config: ConfigState,
    catalog: CatalogState,
}

impl Shell {
    pub fn new(config: ConfigState, catalog: CatalogState) -> Self {
        Shell { config, catalog }
    }

    pub fn config(&self) -> &ConfigState {
        &self.config
    }

    pub fn catalog(&self) -> &CatalogState {
        &self.catalog
    }

    /// Runs one input line.
    ///
    /// Blank lines and lines starting with `#` do nothing.
    pub fn execute_line(
        &mut self,
        line: &str,
        confirm: &mut dyn Confirm,
    ) -> Result<Outcome, ApiError> {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Ok(Outcome::Nothing);
        }

        let args = split_args(trimmed)?;
        let command = match parse_command(&args)? {
            ParsedLine::Command(command) => command,
            ParsedLine::Help(text) => return Ok(Outcome::Output(text.trim_end().to_string())),
        };
        debug!(?command, "Executing shell command");

        match self.execute(command, confirm)? {
            Some(output) => Ok(Outcome::Output(output.render(&self.config)?)),
            None => Ok(Outcome::Exit),
        }
    }

    fn needs_confirmation(&self, yes: bool) -> bool {
        self.config.confirm_deletes && !yes
    }

    /// `None` means exit.
    fn execute(
        &mut self,
        command: ShellCommand,
        confirm: &mut dyn Confirm,
    ) -> Result<Option<CommandOutput>, ApiError> {
        let output = match command {
            ShellCommand::Parts { query } => {
                let query = query.join(" ");
                if query.trim().is_empty() {
                    CommandOutput::Parts(part::list_parts(&self.catalog))
                } else {
                    CommandOutput::Parts(part::search_parts(&self.catalog, &query))
                }
            }
            ShellCommand::Products { query } => {
                let query = query.join(" ");
                if query.trim().is_empty() {
                    CommandOutput::Products(product::list_products(&self.catalog))
                } else {
                    CommandOutput::Products(product::search_products(&self.catalog, &query))
                }
            }
            ShellCommand::Part { id } => CommandOutput::Part(part::get_part(&self.catalog, id)?),
            ShellCommand::Product { id } => {
                CommandOutput::Product(product::get_product(&self.catalog, id)?)
            }
            ShellCommand::AddPart(args) => {
                CommandOutput::Part(part::add_part(&mut self.catalog, &args.into())?)
            }
            ShellCommand::EditPart { id, fields } => {
                let edit = PartEdit::from(fields);
                if edit.is_empty() {
                    return Err(ApiError::invalid_command("edit-part needs at least one field"));
                }
                CommandOutput::Part(part::update_part(&mut self.catalog, id, &edit)?)
            }
            ShellCommand::DeletePart { id, yes } => {
                let target = part::get_part(&self.catalog, id)?;
                let question = format!("Delete part {} '{}'? [y/N] ", target.id, target.name);
                if self.needs_confirmation(yes) && !confirm.confirm(&question) {
                    CommandOutput::message("Cancelled.")
                } else {
                    CommandOutput::DeletedPart(part::delete_part(&mut self.catalog, id)?)
                }
            }
            ShellCommand::AddProduct(args) => {
                CommandOutput::Product(product::add_product(&mut self.catalog, &args.into())?)
            }
            ShellCommand::EditProduct { id, fields } => {
                let edit = ProductEdit::from(fields);
                if edit.is_empty() {
                    return Err(ApiError::invalid_command(
                        "edit-product needs at least one field",
                    ));
                }
                CommandOutput::Product(product::update_product(&mut self.catalog, id, &edit)?)
            }
            ShellCommand::Link {
                product: product_id,
                part: part_id,
            } => CommandOutput::Product(product::associate_part(
                &mut self.catalog,
                product_id,
                part_id,
            )?),
            ShellCommand::Unlink {
                product: product_id,
                part: part_id,
            } => CommandOutput::Product(product::disassociate_part(
                &mut self.catalog,
                product_id,
                part_id,
            )?),
            ShellCommand::DeleteProduct { id, purge, yes } => {
                let target = product::get_product(&self.catalog, id)?;
                if !target.can_delete && !purge {
                    return Err(CoreError::ProductHasParts {
                        id,
                        count: target.parts.len(),
                    }
                    .into());
                }

                let question = if purge && !target.can_delete {
                    format!(
                        "Delete product {} '{}' and drop its {} part(s)? [y/N] ",
                        target.id,
                        target.name,
                        target.parts.len()
                    )
                } else {
                    format!("Delete product {} '{}'? [y/N] ", target.id, target.name)
                };
                if self.needs_confirmation(yes) && !confirm.confirm(&question) {
                    CommandOutput::message("Cancelled.")
                } else {
                    CommandOutput::DeletedProduct(product::delete_product(
                        &mut self.catalog,
                        id,
                        purge,
                    )?)
                }
            }
            ShellCommand::Config => {
                CommandOutput::Config(config::get_config(&self.config, &self.catalog))
            }
            ShellCommand::Exit => return Ok(None),
        };
        Ok(Some(output))
    }
}
