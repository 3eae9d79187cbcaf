// crates/mark_emitter/src/writer.rs

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use version_resolver::FileDescriptor;

/// Writes every descriptor under `root`, in order, creating parent
/// directories as needed. Existing files are overwritten, so when two
/// descriptors share a path the later one wins.
///
/// Returns the paths written, one per descriptor.
///
/// # Errors
///
/// Fails with `InvalidInput` for an empty, absolute, or `..` path, and with
/// the underlying I/O error if a directory or file cannot be written. Files
/// written before the failure stay on disk.
pub fn write_file_list(root: &Path, files: &[FileDescriptor]) -> io::Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(files.len());
    for file in files {
        let target = root.join(checked_relative(&file.path)?);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&target, &file.content)?;
        log::debug!("wrote {} ({} bytes)", target.display(), file.content.len());
        written.push(target);
    }
    Ok(written)
}

fn checked_relative(path: &str) -> io::Result<&Path> {
    let rel = Path::new(path);
    let escapes = rel
        .components()
        .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
    if path.is_empty() || escapes {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("output path '{}' must stay inside the output root", path),
        ));
    }
    Ok(rel)
}
