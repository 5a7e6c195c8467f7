//! Interactive front end: load config, then run one session on stdin/stdout.

use anyhow::Result;
use imgfetch_core::config::{self, FetcherConfig};
use imgfetch_core::session;
use std::io;

/// Loads the config file, falling back to defaults if it is unusable so a
/// broken config never blocks a run.
pub fn load_config() -> FetcherConfig {
    match config::load_or_init() {
        Ok(cfg) => {
            tracing::debug!("loaded config: {:?}", cfg);
            cfg
        }
        Err(err) => {
            tracing::warn!("config unavailable, using defaults: {:#}", err);
            FetcherConfig::default()
        }
    }
}

pub fn run() -> Result<()> {
    let cfg = load_config();
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    session::run_interactive(stdin.lock(), &mut out, &cfg)?;
    Ok(())
}
