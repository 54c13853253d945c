use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::normalize::{self, RowSchema};
use crate::core::pivot;
use crate::errors::AppResult;
use crate::import;
use crate::ui::messages::warning;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Days { attendance } = cmd {
        let schema = RowSchema::attendance(&cfg.attendance_headers);
        let rows = import::read_rows(Path::new(attendance))?;
        let checkins = normalize::checkins_from_rows(&rows, &schema, attendance)?;

        let days = pivot::distinct_days(&checkins)?;

        if days.is_empty() {
            warning("No check-in rows found.");
            return Ok(());
        }

        for day in &days {
            println!("{}", day);
        }
    }
    Ok(())
}
