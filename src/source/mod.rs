//! Claude Code session store
//!
//! Reads the per-project `sessions-index.json` manifests and raw `*.jsonl`
//! logs under a projects directory (normally `~/.claude/projects`). The store
//! is read-only; every call scans the directory afresh.

mod index;
mod loader;
pub(crate) mod log;
mod lookup;
mod orphan;

use std::path::{Path, PathBuf};

use crate::consts::{AGENT_FILE_PREFIX, INDEX_FILE_NAME, SUBAGENTS_DIR};
use crate::utils::warn;

pub(crate) use lookup::SessionMatch;

/// Projects directory holding one subdirectory per project
#[derive(Debug, Clone)]
pub(crate) struct SessionStore {
    projects_dir: PathBuf,
}

impl SessionStore {
    pub(crate) fn new(projects_dir: impl Into<PathBuf>) -> Self {
        Self {
            projects_dir: projects_dir.into(),
        }
    }

    pub(crate) fn projects_dir(&self) -> &Path {
        &self.projects_dir
    }

    /// `<root>/*/sessions-index.json`, in alphabetical order
    pub(crate) fn find_index_files(&self) -> Vec<PathBuf> {
        self.glob_sorted(&format!("*/{INDEX_FILE_NAME}"))
    }

    /// Top-level session logs (`<root>/*/*.jsonl`), sub-agent logs excluded
    pub(crate) fn find_session_logs(&self) -> Vec<PathBuf> {
        self.glob_sorted("*/*.jsonl")
            .into_iter()
            .filter(|path| !path.is_dir() && !self.is_subagent_log(path))
            .collect()
    }

    /// Delegated sub-conversations live under a `subagents` directory or are
    /// named `agent-*.jsonl`; they are never sessions of their own.
    pub(crate) fn is_subagent_log(&self, path: &Path) -> bool {
        let relative = path.strip_prefix(&self.projects_dir).unwrap_or(path);
        let in_subagents_dir = relative
            .components()
            .any(|component| component.as_os_str() == SUBAGENTS_DIR);
        let agent_named = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.starts_with(AGENT_FILE_PREFIX));
        in_subagents_dir || agent_named
    }

    fn glob_sorted(&self, tail: &str) -> Vec<PathBuf> {
        let root = glob::Pattern::escape(&self.projects_dir.to_string_lossy());
        let pattern = format!("{root}/{tail}");

        let entries = match glob::glob(&pattern) {
            Ok(entries) => entries,
            Err(err) => {
                warn(format!("Invalid search pattern {pattern}: {err}"));
                return Vec::new();
            }
        };

        let mut paths = Vec::new();
        for entry in entries {
            match entry {
                Ok(path) => paths.push(path),
                Err(err) => warn(format!(
                    "Could not read {}: {}",
                    err.path().display(),
                    err.error()
                )),
            }
        }
        paths
    }
}

/// Session identifier of a log file: its name without extension
pub(crate) fn session_id_from_path(path: &Path) -> Option<String> {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
}
