// crates/version_mark/src/main.rs

use anyhow::Result;
use std::env;

use version_mark::{build_cli, defaults_from_env, AppConfig};

fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}

fn main() -> Result<()> {
    let matches = build_cli().get_matches();
    let config = AppConfig::from_matches(&matches);
    init_logging(config.verbose);
    log::debug!("{:?}", config);

    let defaults = defaults_from_env(|key| env::var(key).ok());
    let outcome = version_mark::run(&config, defaults)?;

    for line in &outcome.lines {
        println!("{}", line);
    }
    for path in &outcome.written {
        log::info!("Wrote {}", path.display());
    }

    Ok(())
}
