// crates/mark_emitter/src/render.rs

use version_resolver::ResolvedConfig;

/// Which flag of the resolved config an emission belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EmissionKind {
    Meta,
    Log,
    Global,
    Export,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Emission {
    pub kind: EmissionKind,
    pub text: String,
}

/// The info line, e.g. `APP_VERSION: 1.2.3`.
pub fn log_line(config: &ResolvedConfig) -> String {
    config.print_info.clone()
}

/// An HTML meta tag carrying the version.
pub fn meta_tag(config: &ResolvedConfig) -> String {
    format!(
        r#"<meta name="{}" content="{}">"#,
        escape_html(&config.print_name),
        escape_html(config.version_text())
    )
}

/// A Rust constant definition, e.g. `pub const APP_VERSION: &str = "1.2.3";`.
pub fn global_define(config: &ResolvedConfig) -> String {
    // Debug formatting of a str is a valid Rust string literal.
    format!("pub const {}: &str = {:?};", config.print_name, config.version_text())
}

/// A POSIX shell export, single-quoted.
pub fn export_statement(config: &ResolvedConfig) -> String {
    format!(
        "export {}='{}'",
        config.print_name,
        config.version_text().replace('\'', r"'\''")
    )
}

/// A `build.rs` directive that makes the version available through `env!`.
pub fn cargo_directive(config: &ResolvedConfig) -> String {
    format!("cargo:rustc-env={}={}", config.print_name, config.version_text())
}

/// Renders every form whose flag is set, in the order meta, log, global, export.
pub fn render_enabled(config: &ResolvedConfig) -> Vec<Emission> {
    let candidates: [(bool, EmissionKind, fn(&ResolvedConfig) -> String); 4] = [
        (config.if_meta, EmissionKind::Meta, meta_tag),
        (config.if_log, EmissionKind::Log, log_line),
        (config.if_global, EmissionKind::Global, global_define),
        (config.if_export, EmissionKind::Export, export_statement),
    ];
    candidates
        .into_iter()
        .filter(|(enabled, _, _)| *enabled)
        .map(|(_, kind, render)| Emission {
            kind,
            text: render(config),
        })
        .collect()
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}
