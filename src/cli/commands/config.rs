use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        init,
        path,
    } = cmd
    {
        if *path {
            println!("{}", Config::config_file().display());
            return Ok(());
        }

        if *init {
            let file = Config::config_file();
            cfg.save_to(&file)?;
            success(format!("Configuration written to {}", file.display()));
            return Ok(());
        }

        if *print_config {
            let text = serde_yaml::to_string(cfg).map_err(|e| AppError::Config(e.to_string()))?;
            print!("{}", text);
            return Ok(());
        }

        info("Nothing to do: pass --print, --init or --path.");
    }
    Ok(())
}
