use std::path::PathBuf;

use crate::cli::Cli;

pub const DEFAULT_SEARCH_ROOT: &str = "./";

pub fn resolve_search_roots(cli: &Cli) -> Vec<PathBuf> {
    if cli.dirs.is_empty() {
        return vec![PathBuf::from(DEFAULT_SEARCH_ROOT)];
    }
    cli.dirs.clone()
}

pub fn default_log_filter(cli: &Cli) -> &'static str {
    if cli.verbose { "debug" } else { "warn" }
}

pub fn canonical_current_dir() -> String {
    std::fs::canonicalize(".")
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| DEFAULT_SEARCH_ROOT.to_string())
}

pub fn usage_text() -> String {
    format!(
        "Usage: jar-finder classname [ dir ] [ dir2 ] [ dir3 ] [ ... ]\n\
         If no directories are specified, the current directory '{}' will be searched.\n",
        canonical_current_dir()
    )
}
