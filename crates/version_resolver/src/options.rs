// crates/version_resolver/src/options.rs

use crate::output_file::OutputFile;

/// Fallback name and version supplied by whoever calls the resolver,
/// typically read from the package environment at the process boundary.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Defaults {
    pub name: Option<String>,
    pub version: Option<String>,
}

impl Defaults {
    pub fn new(name: Option<String>, version: Option<String>) -> Self {
        Self { name, version }
    }
}

/// Caller input. Every field is optional; unset fields take their defaults
/// during resolution.
#[derive(Debug, Default)]
pub struct Options {
    pub name: Option<String>,
    pub version: Option<String>,
    /// Shell command whose output becomes the version. Beats both SHA shortcuts.
    pub command: Option<String>,
    pub if_short_sha: Option<bool>,
    pub if_git_sha: Option<bool>,
    pub if_meta: Option<bool>,
    pub if_log: Option<bool>,
    pub if_global: Option<bool>,
    pub if_export: Option<bool>,
    pub output_file: Option<OutputFile>,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn command(mut self, command: impl Into<String>) -> Self {
        self.command = Some(command.into());
        self
    }

    pub fn short_sha(mut self, on: bool) -> Self {
        self.if_short_sha = Some(on);
        self
    }

    pub fn git_sha(mut self, on: bool) -> Self {
        self.if_git_sha = Some(on);
        self
    }

    pub fn meta(mut self, on: bool) -> Self {
        self.if_meta = Some(on);
        self
    }

    pub fn log(mut self, on: bool) -> Self {
        self.if_log = Some(on);
        self
    }

    pub fn global(mut self, on: bool) -> Self {
        self.if_global = Some(on);
        self
    }

    pub fn export(mut self, on: bool) -> Self {
        self.if_export = Some(on);
        self
    }

    pub fn output_file(mut self, output_file: impl Into<OutputFile>) -> Self {
        self.output_file = Some(output_file.into());
        self
    }

    /// Applies `defaults` and the fixed flag defaults.
    pub(crate) fn normalize(self, defaults: Defaults) -> Normalized {
        Normalized {
            name: self.name.or(defaults.name),
            version: self.version.or(defaults.version),
            command: self.command,
            if_short_sha: self.if_short_sha.unwrap_or(false),
            if_git_sha: self.if_git_sha.unwrap_or(false),
            if_meta: self.if_meta.unwrap_or(true),
            if_log: self.if_log.unwrap_or(true),
            if_global: self.if_global.unwrap_or(true),
            if_export: self.if_export.unwrap_or(false),
            output_file: self.output_file,
        }
    }
}

/// Options with every default applied.
#[derive(Debug)]
pub(crate) struct Normalized {
    pub name: Option<String>,
    pub version: Option<String>,
    pub command: Option<String>,
    pub if_short_sha: bool,
    pub if_git_sha: bool,
    pub if_meta: bool,
    pub if_log: bool,
    pub if_global: bool,
    pub if_export: bool,
    pub output_file: Option<OutputFile>,
}
