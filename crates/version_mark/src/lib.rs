// crates/version_mark/src/lib.rs

use anyhow::{Context, Result};
use std::path::PathBuf;

use mark_emitter::{cargo_directive, render_enabled, write_file_list};
use version_resolver::{resolve_options, Defaults, ResolvedConfig};

pub mod config;

pub use config::{build_cli, defaults_from_env, AppConfig};

/// What a run produced: the resolved mark, the lines to print and the files written.
#[derive(Debug)]
pub struct Outcome {
    pub resolved: ResolvedConfig,
    pub lines: Vec<String>,
    pub written: Vec<PathBuf>,
}

/// Resolves the version mark for `config`, renders the enabled forms and
/// writes the requested files under `config.out_dir`.
pub fn run(config: &AppConfig, defaults: Defaults) -> Result<Outcome> {
    let resolved =
        resolve_options(config.to_options(), defaults).context("Failed to resolve version mark")?;

    let mut lines: Vec<String> = render_enabled(&resolved)
        .into_iter()
        .map(|emission| emission.text)
        .collect();
    if config.cargo {
        lines.push(cargo_directive(&resolved));
    }

    let written = write_file_list(&config.out_dir, &resolved.file_list).with_context(|| {
        format!("Failed to write output files under {}", config.out_dir.display())
    })?;

    Ok(Outcome {
        resolved,
        lines,
        written,
    })
}
