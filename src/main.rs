use anyhow::{Context, Result};
use clap::Parser;
use jar_finder::cli::{Cli, OutputFormat};
use jar_finder::config::{default_log_filter, resolve_search_roots, usage_text};
use jar_finder::logging::init_logging;
use jar_finder::query::Query;
use jar_finder::report::{RootReport, SearchReport, render_json, render_text};
use jar_finder::session::SearchSession;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

/// `-1` as seen by the parent process.
const USAGE_EXIT_CODE: u8 = 255;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(default_log_filter(&cli));

    let Some(class_name) = cli.class_name.clone() else {
        print!("{}", usage_text());
        return Ok(ExitCode::from(USAGE_EXIT_CODE));
    };

    let report = find_class(&class_name, resolve_search_roots(&cli));
    let content = match cli.format {
        OutputFormat::Text => render_text(&report),
        OutputFormat::Json => {
            let mut json = render_json(&report).context("Failed to serialize search report")?;
            json.push('\n');
            json
        }
    };

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(content.as_bytes())
        .and_then(|_| stdout.flush())
        .context("Failed to write search report")?;

    Ok(ExitCode::SUCCESS)
}

fn find_class(class_name: &str, roots: Vec<PathBuf>) -> SearchReport {
    let query = Query::new(class_name);

    let reports = roots
        .into_iter()
        .map(|root| {
            let display = root.display().to_string();
            match SearchSession::new(query.clone(), root).into_matches() {
                Ok(matches) => RootReport {
                    root: display,
                    matches,
                    error: None,
                },
                Err(e) => {
                    eprintln!("error: {e}");
                    RootReport {
                        root: display,
                        matches: Vec::new(),
                        error: Some(e.to_string()),
                    }
                }
            }
        })
        .collect();

    SearchReport::new(class_name, reports)
}
