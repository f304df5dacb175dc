//! # Stockroom Shell Library
//!
//! Interactive terminal front end for the Stockroom inventory catalog.
//!
//! ## Module Organization
//! ```text
//! stockroom_cli/
//! ├── lib.rs          ◄─── You are here (startup & line loop)
//! ├── shell.rs        ◄─── Line parsing and command dispatch
//! ├── forms.rs        ◄─── Raw field text → drafts
//! ├── render.rs       ◄─── Tables and JSON
//! ├── seed.rs         ◄─── Demo catalog
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── catalog.rs  ◄─── The one Catalog of the session
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── part.rs     ◄─── Part commands
//! │   ├── product.rs  ◄─── Product commands
//! │   └── config.rs   ◄─── Config command
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod commands;
pub mod error;
pub mod forms;
pub mod render;
pub mod seed;
pub mod shell;
pub mod state;

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use shell::{is_yes, Confirm, Outcome, Shell};
use state::{CatalogState, ConfigState, OutputFormat};
use stockroom_catalog::Catalog;

/// Runs the interactive shell until `exit` or end of input.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, written to stderr             │
/// │     • Default: warn, info for stockroom crates; RUST_LOG overrides      │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • STOCKROOM_* environment variables over defaults                   │
/// │                                                                         │
/// │  3. Build the Catalog ────────────────────────────────────────────────► │
/// │     • Empty, or seeded with demo data when STOCKROOM_SEED is set        │
/// │                                                                         │
/// │  4. Line Loop ────────────────────────────────────────────────────────► │
/// │     • rustyline prompt with history                                     │
/// │     • Errors are printed and the loop continues                         │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config = ConfigState::from_env();
    info!(store = %config.store_name, "Starting Stockroom shell");

    let catalog = build_catalog(&config);
    let mut shell = Shell::new(config, catalog);

    let mut editor = DefaultEditor::new()?;
    if shell.config().output_format == OutputFormat::Table {
        let totals = shell.catalog().totals();
        println!(
            "{}: {} part(s), {} product(s). Type `help` for commands.",
            shell.config().store_name,
            totals.parts,
            totals.products
        );
    }

    loop {
        let prompt = shell.config().prompt.clone();
        let line = match editor.readline(&prompt) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        };
        if !line.trim().is_empty() {
            record_history(&mut editor, &line);
        }

        let mut confirm = EditorConfirm(&mut editor);
        match shell.execute_line(&line, &mut confirm) {
            Ok(Outcome::Output(text)) => println!("{}", text),
            Ok(Outcome::Nothing) => {}
            Ok(Outcome::Exit) => break,
            Err(err) => print_error(shell.config(), &err),
        }
    }

    info!("Stockroom shell closed");
    Ok(())
}

fn record_history(editor: &mut DefaultEditor, line: &str) {
    if let Err(e) = editor.add_history_entry(line) {
        debug!(error = %e, "History entry not recorded");
    }
}

/// Asks confirmation questions on the same line editor.
struct EditorConfirm<'a>(&'a mut DefaultEditor);

impl Confirm for EditorConfirm<'_> {
    fn confirm(&mut self, question: &str) -> bool {
        matches!(self.0.readline(question), Ok(answer) if is_yes(&answer))
    }
}

fn build_catalog(config: &ConfigState) -> CatalogState {
    let mut catalog = Catalog::new();
    if config.seed_demo_data {
        if let Err(e) = seed::seed_demo_catalog(&mut catalog) {
            // Keep whatever was added; the shell is still usable
            warn!(error = %e, "Demo data could not be fully loaded");
        }
    }
    CatalogState::from_catalog(catalog)
}

fn print_error(config: &ConfigState, err: &error::ApiError) {
    match config.output_format {
        OutputFormat::Json => match serde_json::to_string_pretty(err) {
            Ok(json) => println!("{}", json),
            Err(e) => tracing::error!("Could not encode error as JSON: {}", e),
        },
        OutputFormat::Table => eprintln!("error [{}]: {}", err.code.as_str(), err.message),
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=stockroom=trace` - Show trace for stockroom crates only
/// - Default: WARN, INFO for stockroom crates
///
/// Logs go to stderr so they never mix with command output.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,stockroom=info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustyline::history::History;

    #[test]
    fn test_record_history_keeps_entered_lines() {
        let mut editor = DefaultEditor::new().unwrap();
        record_history(&mut editor, "list-parts");
        record_history(&mut editor, "list-products");

        assert_eq!(editor.history().len(), 2);
    }
}
