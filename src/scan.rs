use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::error::{FinderError, Result};
use crate::probe::{Match, scan_archive};
use crate::query::Query;

pub const ARCHIVE_SUFFIX: &str = ".jar";

/// Case-sensitive `.jar` suffix test on a file name.
pub fn is_archive_name(file_name: &OsStr) -> bool {
    file_name
        .as_encoded_bytes()
        .ends_with(ARCHIVE_SUFFIX.as_bytes())
}

fn is_archive_file(path: &Path) -> bool {
    path.is_file() && path.file_name().is_some_and(is_archive_name)
}

pub fn walk(root: &Path, query: &Query) -> Result<Vec<Match>> {
    let mut matches = Vec::new();
    walk_into(root, query, &mut matches)?;
    Ok(matches)
}

/// Depth-first walk of `root`, appending every match in discovery order.
///
/// Children are visited in the order the directory listing returns them and a
/// subdirectory is fully walked before its next sibling. The frontier is an
/// explicit stack of pending listings, so depth is bounded by the heap rather
/// than the call stack. Symlinks are followed without cycle detection.
pub fn walk_into(root: &Path, query: &Query, matches: &mut Vec<Match>) -> Result<()> {
    if root.as_os_str().is_empty() {
        return Err(FinderError::InvalidArgument(
            "cannot search an empty path".to_string(),
        ));
    }

    if is_archive_file(root) {
        matches.extend(scan_archive(root, query));
        return Ok(());
    }
    if !root.is_dir() {
        return Err(FinderError::InvalidPathKind {
            path: root.to_path_buf(),
        });
    }

    let listing = list_dir(root).map_err(|source| FinderError::Io {
        path: root.to_path_buf(),
        source,
    })?;
    let mut frontier = vec![listing.into_iter()];

    while let Some(children) = frontier.last_mut() {
        let Some(child) = children.next() else {
            frontier.pop();
            continue;
        };

        if child.is_dir() {
            match list_dir(&child) {
                Ok(listing) => frontier.push(listing.into_iter()),
                Err(e) => tracing::warn!("skipping unreadable directory {}: {e}", child.display()),
            }
        } else if is_archive_file(&child) {
            matches.extend(scan_archive(&child, query));
        }
    }

    Ok(())
}

fn list_dir(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    std::fs::read_dir(dir)?
        .map(|entry| entry.map(|e| e.path()))
        .collect()
}
