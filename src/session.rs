use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::probe::Match;
use crate::query::Query;
use crate::scan::walk_into;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    NotSearched,
    Searching,
    Completed,
}

/// One query evaluated against one search root.
///
/// The walk runs lazily on first read and its result is kept until
/// [`SearchSession::refresh`] discards it and walks the tree again.
#[derive(Debug)]
pub struct SearchSession {
    query: Query,
    root: PathBuf,
    state: SearchState,
    matches: Vec<Match>,
}

impl SearchSession {
    pub fn new(query: Query, root: impl Into<PathBuf>) -> Self {
        Self {
            query,
            root: root.into(),
            state: SearchState::NotSearched,
            matches: Vec::new(),
        }
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    /// Walks the root unless a completed result is already held.
    ///
    /// On failure the partial result is dropped and the session returns to
    /// `NotSearched`, so the next read retries the walk.
    pub fn search(&mut self) -> Result<()> {
        if self.state == SearchState::Completed {
            return Ok(());
        }

        self.state = SearchState::Searching;
        self.matches.clear();
        match walk_into(&self.root, &self.query, &mut self.matches) {
            Ok(()) => {
                self.state = SearchState::Completed;
                tracing::debug!(
                    "search for '{}' under {} found {} matches",
                    self.query.class_name(),
                    self.root.display(),
                    self.matches.len()
                );
                Ok(())
            }
            Err(e) => {
                self.matches.clear();
                self.state = SearchState::NotSearched;
                Err(e)
            }
        }
    }

    pub fn refresh(&mut self) -> Result<()> {
        self.state = SearchState::NotSearched;
        self.matches.clear();
        self.search()
    }

    pub fn matches(&mut self) -> Result<&[Match]> {
        self.search()?;
        Ok(&self.matches)
    }

    pub fn match_count(&mut self) -> Result<usize> {
        Ok(self.matches()?.len())
    }

    /// Consumes the session, running the search first if needed.
    pub fn into_matches(mut self) -> Result<Vec<Match>> {
        self.search()?;
        Ok(self.matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FinderError;
    use std::fs;
    use std::io::Write;
    use zip::write::FileOptions;

    fn temp_dir(prefix: &str) -> PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let p = std::env::temp_dir().join(format!("{prefix}-{}-{nanos}", std::process::id()));
        fs::create_dir_all(&p).unwrap();
        p
    }

    fn write_jar(path: &Path, entries: &[&str]) {
        let file = fs::File::create(path).unwrap();
        let mut zip = zip::ZipWriter::new(file);
        for name in entries {
            zip.start_file(*name, FileOptions::default()).unwrap();
            zip.write_all(b"").unwrap();
        }
        zip.finish().unwrap();
    }

    #[test]
    fn first_read_triggers_search() {
        let root = temp_dir("jar-finder-session-lazy");
        write_jar(&root.join("a.jar"), &["com/foo/Bar.class"]);

        let mut session = SearchSession::new(Query::new("com.foo.Bar"), &root);
        assert_eq!(session.state(), SearchState::NotSearched);
        assert_eq!(session.match_count().unwrap(), 1);
        assert_eq!(session.state(), SearchState::Completed);

        let _ = fs::remove_dir_all(root);
    }

    #[test]
    fn completed_result_is_cached_until_refresh() {
        let root = temp_dir("jar-finder-session-refresh");
        write_jar(&root.join("a.jar"), &["com/foo/Bar.class"]);

        let mut session = SearchSession::new(Query::new("com.foo.Bar"), &root);
        assert_eq!(session.match_count().unwrap(), 1);

        write_jar(&root.join("b.jar"), &["com/foo/Bar.java"]);
        fs::remove_file(root.join("a.jar")).unwrap();
        assert_eq!(session.match_count().unwrap(), 1);
        assert!(session.matches().unwrap()[0].archive.ends_with("a.jar"));

        session.refresh().unwrap();
        let matches = session.matches().unwrap();
        assert_eq!(matches.len(), 1);
        assert!(matches[0].archive.ends_with("b.jar"));
        assert_eq!(matches[0].kind.as_str(), "source");

        let _ = fs::remove_dir_all(root);
    }

    #[test]
    fn failed_search_returns_to_not_searched() {
        let root = temp_dir("jar-finder-session-missing");
        let missing = root.join("gone");

        let mut session = SearchSession::new(Query::new("X"), &missing);
        let err = session.match_count().unwrap_err();
        assert!(matches!(err, FinderError::InvalidPathKind { .. }));
        assert_eq!(session.state(), SearchState::NotSearched);

        fs::create_dir_all(missing.join("lib")).unwrap();
        write_jar(&missing.join("lib/x.jar"), &["p/X.class"]);
        assert_eq!(session.match_count().unwrap(), 1);

        let _ = fs::remove_dir_all(root);
    }
}
