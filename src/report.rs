use serde::Serialize;
use std::fmt::Write;

use crate::probe::Match;

#[derive(Debug, Serialize)]
pub struct RootReport {
    pub root: String,
    pub matches: Vec<Match>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SearchReport {
    pub class_name: String,
    pub found: bool,
    pub roots: Vec<RootReport>,
}

impl SearchReport {
    pub fn new(class_name: impl Into<String>, roots: Vec<RootReport>) -> Self {
        let found = roots.iter().any(|r| !r.matches.is_empty());
        Self {
            class_name: class_name.into(),
            found,
            roots,
        }
    }
}

pub fn render_text(report: &SearchReport) -> String {
    let mut out = String::new();
    for root in report.roots.iter().filter(|r| !r.matches.is_empty()) {
        let _ = writeln!(out, "Search results for '{}':", report.class_name);
        for m in &root.matches {
            let _ = writeln!(
                out,
                "{} contains the class '{}' ({})",
                m.archive.display(),
                m.class_name,
                m.kind
            );
        }
    }

    if !report.found {
        let _ = writeln!(
            out,
            "Could not find class '{}' in any jar in the given path(s)",
            report.class_name
        );
    }
    out
}

pub fn render_json(report: &SearchReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::MatchKind;
    use std::path::PathBuf;

    fn matched(archive: &str, class_name: &str, kind: MatchKind) -> Match {
        Match {
            archive: PathBuf::from(archive),
            class_name: class_name.to_string(),
            kind,
        }
    }

    #[test]
    fn text_lists_each_matching_root_under_a_header() {
        let report = SearchReport::new(
            "X",
            vec![
                RootReport {
                    root: "/r1".to_string(),
                    matches: vec![
                        matched("/r1/a.jar", "a.X", MatchKind::Compiled),
                        matched("/r1/b.jar", "b.X", MatchKind::Source),
                    ],
                    error: None,
                },
                RootReport {
                    root: "/r2".to_string(),
                    matches: Vec::new(),
                    error: None,
                },
                RootReport {
                    root: "/r3".to_string(),
                    matches: vec![matched("/r3/c.jar", "X", MatchKind::Compiled)],
                    error: None,
                },
            ],
        );

        assert_eq!(
            render_text(&report),
            "Search results for 'X':\n\
             /r1/a.jar contains the class 'a.X' (compiled)\n\
             /r1/b.jar contains the class 'b.X' (source)\n\
             Search results for 'X':\n\
             /r3/c.jar contains the class 'X' (compiled)\n"
        );
    }

    #[test]
    fn text_reports_not_found() {
        let report = SearchReport::new(
            "com.foo.Bar",
            vec![RootReport {
                root: "./".to_string(),
                matches: Vec::new(),
                error: None,
            }],
        );
        assert!(!report.found);
        assert_eq!(
            render_text(&report),
            "Could not find class 'com.foo.Bar' in any jar in the given path(s)\n"
        );
    }

    #[test]
    fn json_carries_kind_and_error() -> anyhow::Result<()> {
        let report = SearchReport::new(
            "X",
            vec![
                RootReport {
                    root: "/r".to_string(),
                    matches: vec![matched("/r/a.jar", "p.X", MatchKind::Source)],
                    error: None,
                },
                RootReport {
                    root: "/missing".to_string(),
                    matches: Vec::new(),
                    error: Some("'/missing' is neither a jar file nor a directory".to_string()),
                },
            ],
        );

        let value: serde_json::Value = serde_json::from_str(&render_json(&report)?)?;
        assert_eq!(value["found"], true);
        assert_eq!(value["roots"][0]["matches"][0]["kind"], "source");
        assert_eq!(value["roots"][0]["matches"][0]["archive"], "/r/a.jar");
        assert!(value["roots"][0].get("error").is_none());
        assert_eq!(value["roots"][1]["root"], "/missing");
        assert!(value["roots"][1]["error"].is_string());
        Ok(())
    }
}
