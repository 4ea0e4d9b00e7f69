//! Locate a single session log by full or partial id

use std::path::PathBuf;

use crate::source::{SessionStore, session_id_from_path};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SessionMatch {
    Found(PathBuf),
    /// Ids of every log that partially matched
    Ambiguous(Vec<String>),
    NotFound,
}

impl SessionStore {
    /// Find the log whose id equals `query`, or else the only one containing
    /// it. Sub-agent logs are never candidates.
    pub(crate) fn find_session_file(&self, query: &str) -> SessionMatch {
        let mut partial: Vec<(String, PathBuf)> = Vec::new();

        for path in self.find_session_logs() {
            let Some(session_id) = session_id_from_path(&path) else {
                continue;
            };
            if session_id == query {
                return SessionMatch::Found(path);
            }
            if session_id.contains(query) {
                partial.push((session_id, path));
            }
        }

        match partial.len() {
            0 => SessionMatch::NotFound,
            1 => SessionMatch::Found(partial.remove(0).1),
            _ => SessionMatch::Ambiguous(partial.into_iter().map(|(id, _)| id).collect()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::test_support::write_file;

    fn store_with(files: &[&str]) -> (tempfile::TempDir, SessionStore) {
        let dir = tempfile::tempdir().unwrap();
        for file in files {
            write_file(&dir.path().join(file), "");
        }
        let store = SessionStore::new(dir.path());
        (dir, store)
    }

    #[test]
    fn partial_prefix_finds_single_match() {
        let (_dir, store) = store_with(&["-p/49f2e931-1111.jsonl", "-p/aaaa0000-2222.jsonl"]);
        match store.find_session_file("49f2e9") {
            SessionMatch::Found(path) => assert!(path.ends_with("49f2e931-1111.jsonl")),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn two_partial_matches_are_ambiguous() {
        let (_dir, store) = store_with(&["-p/abc-1.jsonl", "-q/abc-2.jsonl", "-q/zzz.jsonl"]);
        assert_eq!(
            store.find_session_file("abc"),
            SessionMatch::Ambiguous(vec!["abc-1".to_string(), "abc-2".to_string()])
        );
    }

    #[test]
    fn exact_id_beats_partial_matches() {
        let (_dir, store) = store_with(&["-p/abc.jsonl", "-p/abc-extended.jsonl"]);
        match store.find_session_file("abc") {
            SessionMatch::Found(path) => assert!(path.ends_with("abc.jsonl")),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn unknown_id_is_not_found() {
        let (_dir, store) = store_with(&["-p/abc.jsonl"]);
        assert_eq!(store.find_session_file("nope"), SessionMatch::NotFound);
    }

    #[test]
    fn subagent_logs_are_not_candidates() {
        let (_dir, store) = store_with(&["-p/agent-abc.jsonl", "-p/real-abc.jsonl"]);
        match store.find_session_file("abc") {
            SessionMatch::Found(path) => assert!(path.ends_with("real-abc.jsonl")),
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(store.find_session_file("agent-abc"), SessionMatch::NotFound);
    }
}
