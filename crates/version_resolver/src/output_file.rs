// crates/version_resolver/src/output_file.rs

use std::fmt;

/// Path used when the output file is requested with a plain `true`.
pub const DEFAULT_VERSION_PATH: &str = ".well-known/version";

/// A file the build tool should write, relative to its output root.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileDescriptor {
    pub path: String,
    pub content: String,
}

impl FileDescriptor {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}

/// What a generator hands back: one descriptor or a list of them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutputFiles {
    One(FileDescriptor),
    Many(Vec<FileDescriptor>),
}

impl OutputFiles {
    pub fn into_vec(self) -> Vec<FileDescriptor> {
        match self {
            OutputFiles::One(file) => vec![file],
            OutputFiles::Many(files) => files,
        }
    }
}

impl From<FileDescriptor> for OutputFiles {
    fn from(file: FileDescriptor) -> Self {
        OutputFiles::One(file)
    }
}

impl From<Vec<FileDescriptor>> for OutputFiles {
    fn from(files: Vec<FileDescriptor>) -> Self {
        OutputFiles::Many(files)
    }
}

/// Callback that maps the resolved version to the files to write.
pub type OutputFileGenerator = Box<dyn Fn(&str) -> OutputFiles>;

/// How the caller asks for output files.
pub enum OutputFile {
    /// `true` writes the version to [`DEFAULT_VERSION_PATH`], `false` writes nothing.
    StaticFlag(bool),
    /// Called once with the resolved version (empty when there is none).
    Generator(OutputFileGenerator),
}

impl OutputFile {
    pub fn generator<F>(f: F) -> Self
    where
        F: Fn(&str) -> OutputFiles + 'static,
    {
        OutputFile::Generator(Box::new(f))
    }
}

impl From<bool> for OutputFile {
    fn from(flag: bool) -> Self {
        OutputFile::StaticFlag(flag)
    }
}

impl fmt::Debug for OutputFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFile::StaticFlag(flag) => f.debug_tuple("StaticFlag").field(flag).finish(),
            OutputFile::Generator(_) => f.write_str("Generator(..)"),
        }
    }
}

/// Expands an output file request into the concrete list of files.
pub fn expand_output_file(
    output_file: Option<&OutputFile>,
    print_version: Option<&str>,
) -> Vec<FileDescriptor> {
    let version = print_version.unwrap_or_default();
    match output_file {
        Some(OutputFile::Generator(generate)) => generate(version).into_vec(),
        Some(OutputFile::StaticFlag(true)) => vec![FileDescriptor::new(DEFAULT_VERSION_PATH, version)],
        Some(OutputFile::StaticFlag(false)) | None => Vec::new(),
    }
}
