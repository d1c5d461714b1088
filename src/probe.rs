use memmap2::Mmap;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use std::fs::File;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use zip::ZipArchive;

use crate::error::{FinderError, Result};
use crate::query::{Query, class_path_to_class_name};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    Compiled,
    Source,
}

impl MatchKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Compiled => "compiled",
            Self::Source => "source",
        }
    }
}

impl fmt::Display for MatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Match {
    pub archive: PathBuf,
    pub class_name: String,
    pub kind: MatchKind,
}

/// Scans one jar, logging and absorbing any failure to open or read it.
pub fn scan_archive(jar_path: &Path, query: &Query) -> Vec<Match> {
    match try_scan_archive(jar_path, query) {
        Ok(matches) => matches,
        Err(e) => {
            tracing::warn!("skipping unreadable jar: {e}");
            Vec::new()
        }
    }
}

pub fn try_scan_archive(jar_path: &Path, query: &Query) -> Result<Vec<Match>> {
    let open_err = |source| FinderError::ArchiveOpen {
        path: jar_path.to_path_buf(),
        source,
    };
    let read_err = |source| FinderError::ArchiveRead {
        path: jar_path.to_path_buf(),
        source,
    };

    let len = std::fs::metadata(jar_path).map_err(open_err)?.len();
    if len == 0 {
        tracing::debug!("skipping empty jar {}", jar_path.display());
        return Ok(Vec::new());
    }

    let file = File::open(jar_path).map_err(open_err)?;

    // SAFETY: The file is opened read-only and outlives the mapping, which is
    // dropped at the end of this function together with the archive reading it.
    let mmap = unsafe { Mmap::map(&file) }.map_err(open_err)?;
    let mut archive = ZipArchive::new(Cursor::new(&mmap[..])).map_err(read_err)?;

    let archive_path = std::fs::canonicalize(jar_path).unwrap_or_else(|_| jar_path.to_path_buf());
    let mut matches = Vec::new();

    // Exact lookups only consult the central directory, never the local headers.
    let (has_class, has_source) = {
        let names: HashSet<&str> = archive.file_names().collect();
        (
            names.contains(query.class_path()),
            names.contains(query.source_path()),
        )
    };

    if has_class {
        matches.push(Match {
            archive: archive_path.clone(),
            class_name: query.class_name().to_string(),
            kind: MatchKind::Compiled,
        });
    } else if has_source {
        matches.push(Match {
            archive: archive_path.clone(),
            class_name: query.class_name().to_string(),
            kind: MatchKind::Source,
        });
    }

    if query.is_bare() {
        let class_suffix = format!("/{}", query.class_path());
        let source_suffix = format!("/{}", query.source_path());

        for i in 0..archive.len() {
            let entry = match archive.by_index_raw(i) {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!(
                        "skipping unreadable entry #{i} in {}: {e}",
                        jar_path.display()
                    );
                    continue;
                }
            };
            let name = entry.name();
            let kind = if name.ends_with(&class_suffix) {
                MatchKind::Compiled
            } else if name.ends_with(&source_suffix) {
                MatchKind::Source
            } else {
                continue;
            };
            matches.push(Match {
                archive: archive_path.clone(),
                class_name: class_path_to_class_name(name),
                kind,
            });
        }
    }

    tracing::debug!(
        "scanned {} ({} entries, {} matches)",
        jar_path.display(),
        archive.len(),
        matches.len()
    );
    Ok(matches)
}
