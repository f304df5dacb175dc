//! # Config Commands
//!
//! Shows the active configuration alongside catalog counts.

use serde::Serialize;
use tracing::debug;

use crate::state::{CatalogState, CatalogTotals, ConfigState};

/// Output of the `config` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDto {
    #[serde(flatten)]
    pub config: ConfigState,
    pub catalog: CatalogTotals,
}

/// Gets the current configuration (read-only) and catalog counts.
pub fn get_config(config: &ConfigState, catalog: &CatalogState) -> ConfigDto {
    debug!("get_config command");
    ConfigDto {
        config: config.clone(),
        catalog: catalog.totals(),
    }
}
