//! CLI smoke entry point.
//!
//! Opens the database given as the first argument (in-memory when absent)
//! and prints deterministic facts about it for quick local sanity checks.
//! File logging is enabled when `PETLISTING_LOG_DIR` names an absolute
//! directory.

use petlisting_core::db::migrations::current_version;
use petlisting_core::db::{open_db, open_db_in_memory};
use petlisting_core::{
    core_version, default_log_level, init_logging, LoggingConfig, PetRepository,
    SqlitePetRepository,
};
use std::error::Error;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run(std::env::args().nth(1)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("event=cli_run module=cli status=error error={err}");
            eprintln!("petlisting_cli: {err}");
            ExitCode::FAILURE
        }
    }
}

const LOG_DIR_ENV: &str = "PETLISTING_LOG_DIR";

fn run(db_path: Option<String>) -> Result<(), Box<dyn Error>> {
    if let Some(log_dir) = std::env::var_os(LOG_DIR_ENV) {
        init_logging(&LoggingConfig::new(default_log_level(), log_dir)?)?;
    }

    let conn = match db_path.as_deref() {
        Some(path) => open_db(path)?,
        None => open_db_in_memory()?,
    };
    let pets = SqlitePetRepository::try_new(&conn)?.find_all()?;

    println!("petlisting_core version={}", core_version());
    println!("database={}", db_path.as_deref().unwrap_or(":memory:"));
    println!("schema_version={}", current_version(&conn)?);
    println!("pets={}", pets.len());
    Ok(())
}
