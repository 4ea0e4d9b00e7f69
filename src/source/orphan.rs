//! Sessions that have a log file but no index entry

use chrono::{DateTime, Local};
use serde_json::Value;
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::Path;

use crate::consts::PROMPT_MAX_CHARS;
use crate::core::{Session, SessionOrigin, Timestamp};
use crate::source::log::LogReader;
use crate::source::{SessionStore, session_id_from_path};
use crate::utils::{truncate_chars, warn};

const ORPHAN_SUMMARY: &str = "Unindexed session";
const SUMMARY_PROMPT_CHARS: usize = 50;

/// Build sessions for every top-level log whose id is not in `known`.
///
/// Results follow the store's scan order. A file that cannot be read is
/// reported and left out; it never stops the scan.
pub(crate) fn find_orphan_sessions(store: &SessionStore, known: &HashSet<String>) -> Vec<Session> {
    let mut orphans = Vec::new();

    for path in store.find_session_logs() {
        let Some(session_id) = session_id_from_path(&path) else {
            continue;
        };
        if known.contains(&session_id) {
            continue;
        }

        match orphan_from_log(&path, session_id, store.projects_dir()) {
            Ok(session) => orphans.push(session),
            Err(err) => warn(format!("Could not process orphan {}: {}", path.display(), err)),
        }
    }

    orphans
}

fn orphan_from_log(path: &Path, session_id: String, projects_dir: &Path) -> io::Result<Session> {
    let modified = fs::metadata(path)?.modified()?;
    let created = Timestamp::Aware(DateTime::<Local>::from(modified).fixed_offset());

    let first_prompt = read_first_prompt(path)?;
    let summary = if first_prompt.is_empty() {
        ORPHAN_SUMMARY.to_string()
    } else {
        format!(
            "{ORPHAN_SUMMARY}: {}...",
            truncate_chars(&first_prompt, SUMMARY_PROMPT_CHARS)
        )
    };

    // Orphans only know their encoded project directory name
    let project_path = path
        .parent()
        .map(|parent| parent.strip_prefix(projects_dir).unwrap_or(parent))
        .map(|parent| parent.to_string_lossy().into_owned())
        .unwrap_or_default();

    Ok(Session {
        session_id,
        summary,
        first_prompt,
        message_count: 0,
        created: Some(created),
        modified: String::new(),
        project_path,
        git_branch: String::new(),
        full_path: path.to_string_lossy().into_owned(),
        origin: SessionOrigin::Orphan,
    })
}

/// Content of the first message whose content is a plain string. Reading
/// stops there, so later damage in the file does not matter.
fn read_first_prompt(path: &Path) -> io::Result<String> {
    for record in LogReader::open(path)? {
        let Some(message) = record?.message else {
            continue;
        };
        if let Value::String(content) = message.content {
            return Ok(truncate_chars(&content, PROMPT_MAX_CHARS));
        }
    }
    Ok(String::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::test_support::{set_mtime, write_file};

    fn known(ids: &[&str]) -> HashSet<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn reports_only_unknown_logs() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write_file(&root.join("-p").join("indexed.jsonl"), "");
        write_file(&root.join("-p").join("stray.jsonl"), "");

        let store = SessionStore::new(root);
        let orphans = find_orphan_sessions(&store, &known(&["indexed"]));
        assert_eq!(orphans.len(), 1);
        let o = &orphans[0];
        assert_eq!(o.session_id, "stray");
        assert_eq!(o.origin, SessionOrigin::Orphan);
        assert_eq!(o.message_count, 0);
        assert_eq!(o.project_path, "-p");
        assert_eq!(o.summary, ORPHAN_SUMMARY);
        assert!(o.full_path.ends_with("stray.jsonl"));
    }

    #[test]
    fn created_is_file_mtime() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("-p").join("s.jsonl");
        write_file(&path, "");
        set_mtime(&path, 1_704_103_200); // 2024-01-01T10:00:00Z

        let store = SessionStore::new(dir.path());
        let orphan = &find_orphan_sessions(&store, &HashSet::new())[0];
        let expected = DateTime::from_timestamp(1_704_103_200, 0).unwrap().naive_utc();
        assert_eq!(orphan.created.unwrap().normalized(), expected);
    }

    #[test]
    fn first_string_content_becomes_prompt() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("-p").join("s.jsonl");
        write_file(
            &path,
            concat!(
                "{\"type\":\"summary\",\"summary\":\"x\"}\n",
                "garbage line\n",
                "{\"message\":{\"role\":\"assistant\",\"content\":[{\"type\":\"text\",\"text\":\"block\"}]}}\n",
                "{\"message\":{\"role\":\"user\",\"content\":\"Please refactor the parser so it handles nested quotes\"}}\n",
                "{\"message\":{\"role\":\"user\",\"content\":\"second\"}}\n",
            ),
        );

        let store = SessionStore::new(dir.path());
        let orphan = &find_orphan_sessions(&store, &HashSet::new())[0];
        assert_eq!(
            orphan.first_prompt,
            "Please refactor the parser so it handles nested quotes"
        );
        assert_eq!(
            orphan.summary,
            "Unindexed session: Please refactor the parser so it handles nested qu..."
        );
    }

    #[test]
    fn long_prompt_is_truncated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("-p").join("s.jsonl");
        let content = "word ".repeat(60);
        write_file(
            &path,
            &format!("{{\"message\":{{\"role\":\"user\",\"content\":\"{content}\"}}}}\n"),
        );

        let store = SessionStore::new(dir.path());
        let orphan = &find_orphan_sessions(&store, &HashSet::new())[0];
        assert_eq!(orphan.first_prompt.chars().count(), PROMPT_MAX_CHARS);
    }

    #[test]
    fn unreadable_file_is_skipped_with_others_kept() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write_file(&root.join("-p").join("fine.jsonl"), "{\"message\":{\"content\":\"ok\"}}\n");
        // Invalid UTF-8 before any prompt makes the read fail
        std::fs::write(root.join("-p").join("broken.jsonl"), b"\xff\xfe\n").unwrap();

        let store = SessionStore::new(root);
        let ids: Vec<String> = find_orphan_sessions(&store, &HashSet::new())
            .into_iter()
            .map(|s| s.session_id)
            .collect();
        assert_eq!(ids, vec!["fine"]);
    }

    #[test]
    fn subagent_logs_are_never_orphans() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write_file(&root.join("-p").join("agent-abc.jsonl"), "");
        write_file(&root.join("-p").join("s").join("subagents").join("agent-x.jsonl"), "");

        let store = SessionStore::new(root);
        assert!(find_orphan_sessions(&store, &HashSet::new()).is_empty());
    }
}
