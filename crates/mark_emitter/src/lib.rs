// crates/mark_emitter/src/lib.rs

//! Turns a [`ResolvedConfig`](version_resolver::ResolvedConfig) into output:
//! files on disk and the text forms a build injects (log line, global
//! constant, meta tag, export statement, cargo directive).

mod render;
mod writer;

pub use render::{
    cargo_directive, export_statement, global_define, log_line, meta_tag, render_enabled, Emission,
    EmissionKind,
};
pub use writer::write_file_list;
