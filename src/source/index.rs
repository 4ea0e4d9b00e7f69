//! `sessions-index.json` parser

use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::Path;

use crate::consts::PROMPT_MAX_CHARS;
use crate::core::{Session, SessionOrigin};
use crate::error::IndexError;
use crate::utils::{debug_log, parse_timestamp, truncate_chars, warn};

const DEFAULT_SUMMARY: &str = "No summary";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct IndexFile {
    /// Kept raw so one bad entry does not sink the whole file
    #[serde(default)]
    entries: Option<Vec<Value>>,
    #[serde(default)]
    original_path: Option<String>,
}

/// Fields are kept loosely typed: a value of the wrong JSON type is treated
/// as absent instead of costing the whole entry.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct IndexEntry {
    #[serde(default)]
    session_id: Option<Value>,
    #[serde(default)]
    summary: Option<Value>,
    #[serde(default)]
    first_prompt: Option<Value>,
    #[serde(default)]
    message_count: Option<Value>,
    #[serde(default)]
    created: Option<Value>,
    #[serde(default)]
    modified: Option<Value>,
    #[serde(default)]
    project_path: Option<Value>,
    #[serde(default)]
    git_branch: Option<Value>,
    #[serde(default)]
    full_path: Option<Value>,
}

fn string_field(value: Option<Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) => Some(s),
        _ => None,
    }
}

/// Non-negative whole numbers only; `5.0` counts, `"many"` does not
fn count_field(value: Option<&Value>) -> u64 {
    let Some(Value::Number(n)) = value else {
        return 0;
    };
    n.as_u64()
        .or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && *f >= 0.0 && f.fract() == 0.0)
                .map(|f| f as u64)
        })
        .unwrap_or(0)
}

impl IndexEntry {
    fn into_session(self, original_path: Option<&str>) -> Session {
        let created = match self.created {
            Some(Value::String(raw)) => {
                let parsed = parse_timestamp(&raw);
                if parsed.is_none() {
                    debug_log(format!("Unparseable created timestamp {raw:?}"));
                }
                parsed
            }
            None | Some(Value::Null) => None,
            Some(other) => {
                debug_log(format!("Ignoring non-string created value {other}"));
                None
            }
        };

        Session {
            session_id: string_field(self.session_id).unwrap_or_default(),
            summary: string_field(self.summary).unwrap_or_else(|| DEFAULT_SUMMARY.to_string()),
            first_prompt: string_field(self.first_prompt)
                .map(|prompt| truncate_chars(&prompt, PROMPT_MAX_CHARS))
                .unwrap_or_default(),
            message_count: count_field(self.message_count.as_ref()),
            created,
            modified: string_field(self.modified).unwrap_or_default(),
            project_path: string_field(self.project_path)
                .or_else(|| original_path.map(str::to_string))
                .unwrap_or_default(),
            git_branch: string_field(self.git_branch).unwrap_or_default(),
            full_path: string_field(self.full_path).unwrap_or_default(),
            origin: SessionOrigin::Indexed,
        }
    }
}

/// Read one index file. Entries that are not objects are skipped with a
/// warning; every object entry yields one session.
pub(crate) fn read_session_index(path: &Path) -> Result<Vec<Session>, IndexError> {
    let content = fs::read_to_string(path)?;
    let file: IndexFile = serde_json::from_str(&content)?;
    let original_path = file.original_path.as_deref();

    let entries = file.entries.unwrap_or_default();
    let mut sessions = Vec::with_capacity(entries.len());
    for (pos, raw) in entries.into_iter().enumerate() {
        match serde_json::from_value::<IndexEntry>(raw) {
            Ok(entry) => sessions.push(entry.into_session(original_path)),
            Err(err) => warn(format!(
                "Skipping entry {} in {}: {}",
                pos + 1,
                path.display(),
                err
            )),
        }
    }
    Ok(sessions)
}

/// Best-effort variant used by the collector: a missing or malformed index
/// contributes no sessions and a warning.
pub(crate) fn parse_session_index(path: &Path) -> Vec<Session> {
    match read_session_index(path) {
        Ok(sessions) => sessions,
        Err(err) => {
            warn(format!("Could not parse {}: {}", path.display(), err));
            Vec::new()
        }
    }
}
