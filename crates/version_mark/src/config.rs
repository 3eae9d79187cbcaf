// crates/version_mark/src/config.rs

use std::path::PathBuf;

use clap::{Arg, ArgAction, ArgMatches, Command};
use version_resolver::{Defaults, FileDescriptor, OutputFile, Options, DEFAULT_VERSION_PATH};

/// Checked in order for the default package name.
pub const NAME_ENV_VARS: &[&str] = &["VERSION_MARK_NAME", "CARGO_PKG_NAME", "npm_package_name"];

/// Checked in order for the default package version.
pub const VERSION_ENV_VARS: &[&str] = &[
    "VERSION_MARK_VERSION",
    "CARGO_PKG_VERSION",
    "npm_package_version",
];

/// Runtime configuration composed from the command line.
#[derive(Clone, Debug, Default)]
pub struct AppConfig {
    pub name: Option<String>,
    pub version: Option<String>,
    pub command: Option<String>,
    pub short_sha: bool,
    pub git_sha: bool,
    pub meta: bool,
    pub log: bool,
    pub global: bool,
    pub export: bool,
    pub output_file: bool,
    pub output_paths: Vec<String>,
    pub out_dir: PathBuf,
    pub cargo: bool,
    pub verbose: bool,
}

impl AppConfig {
    pub fn from_matches(matches: &ArgMatches) -> Self {
        Self {
            name: matches.get_one::<String>("name").cloned(),
            version: matches.get_one::<String>("version_value").cloned(),
            command: matches.get_one::<String>("command").cloned(),
            short_sha: matches.get_flag("short_sha"),
            git_sha: matches.get_flag("git_sha"),
            meta: !matches.get_flag("no_meta"),
            log: !matches.get_flag("no_log"),
            global: !matches.get_flag("no_global"),
            export: matches.get_flag("export"),
            output_file: matches.get_flag("output_file"),
            output_paths: matches
                .get_many::<String>("output_path")
                .unwrap_or_default()
                .cloned()
                .collect(),
            out_dir: matches
                .get_one::<PathBuf>("out_dir")
                .cloned()
                .unwrap_or_else(|| PathBuf::from(".")),
            cargo: matches.get_flag("cargo"),
            verbose: matches.get_flag("verbose"),
        }
    }

    /// Builds resolver options. Extra `--output-path`s turn the output file
    /// into a generator writing the version to each path.
    pub fn to_options(&self) -> Options {
        let mut options = Options::new()
            .short_sha(self.short_sha)
            .git_sha(self.git_sha)
            .meta(self.meta)
            .log(self.log)
            .global(self.global)
            .export(self.export);
        options.name = self.name.clone();
        options.version = self.version.clone();
        options.command = self.command.clone();

        if self.output_paths.is_empty() {
            return options.output_file(self.output_file);
        }

        let mut paths = self.output_paths.clone();
        if self.output_file {
            paths.insert(0, DEFAULT_VERSION_PATH.to_string());
        }
        options.output_file(OutputFile::generator(move |version| {
            paths
                .iter()
                .map(|path| FileDescriptor::new(path.clone(), version))
                .collect::<Vec<_>>()
                .into()
        }))
    }
}

/// Resolves the fallback name and version from an environment lookup.
pub fn defaults_from_env<F>(lookup: F) -> Defaults
where
    F: Fn(&str) -> Option<String>,
{
    let first = |keys: &[&str]| keys.iter().find_map(|key| lookup(key));
    Defaults::new(first(NAME_ENV_VARS), first(VERSION_ENV_VARS))
}

pub fn build_cli() -> Command {
    Command::new("version_mark")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Resolves a build version mark and emits it as constants, log lines and files")
        .arg(
            Arg::new("name")
                .long("name")
                .num_args(1)
                .help("Package name used to derive the constant name"),
        )
        .arg(
            Arg::new("version_value")
                .long("version-value")
                .num_args(1)
                .help("Version to use when no command is given"),
        )
        .arg(
            Arg::new("command")
                .long("command")
                .num_args(1)
                .help("Shell command whose output is the version"),
        )
        .arg(
            Arg::new("short_sha")
                .long("short-sha")
                .help("Use the short git SHA of HEAD")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("git_sha")
                .long("git-sha")
                .help("Use the full git SHA of HEAD")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no_meta")
                .long("no-meta")
                .help("Do not emit the meta tag")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no_log")
                .long("no-log")
                .help("Do not emit the info line")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no_global")
                .long("no-global")
                .help("Do not emit the constant definition")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("export")
                .long("export")
                .help("Emit a shell export statement")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("output_file")
                .long("output-file")
                .help("Write the version to .well-known/version")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("output_path")
                .long("output-path")
                .action(ArgAction::Append)
                .help("Also write the version to this path (repeatable)"),
        )
        .arg(
            Arg::new("out_dir")
                .long("out-dir")
                .num_args(1)
                .value_parser(clap::value_parser!(PathBuf))
                .default_value(".")
                .help("Directory output files are written under"),
        )
        .arg(
            Arg::new("cargo")
                .long("cargo")
                .help("Print a cargo:rustc-env directive for build scripts")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose logging")
                .action(ArgAction::SetTrue),
        )
}
