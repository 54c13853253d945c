use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::normalize::{self, RowSchema};
use crate::errors::AppResult;
use crate::import;
use crate::ui::messages::success;
use std::path::Path;

/// Roster-only validation: required columns, non-empty, unique IDs. Runs
/// the same normalization the report uses, so a roster that checks clean
/// here cannot fail roster validation later.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Check { roster } = cmd {
        let schema = RowSchema::roster(&cfg.roster_headers);
        let rows = import::read_rows(Path::new(roster))?;
        let validated = normalize::roster_from_rows(&rows, &schema, roster)?;

        success(format!(
            "{}: {} roster entries, all IDs unique",
            roster,
            validated.len()
        ));
    }
    Ok(())
}
