//! Markdown transcript of a single session log

use serde_json::Value;
use std::io;
use std::path::Path;

use crate::source::log::LogRecord;
use crate::utils::{truncate_chars, truncate_with, warn};

const ASSISTANT_MAX_CHARS: usize = 2000;
const TOOL_RESULT_MAX_CHARS: usize = 200;
const COMMAND_MAX_CHARS: usize = 80;

/// Flatten message content into displayable text. Strings pass through;
/// block lists keep text blocks and replace tool traffic with one-line
/// markers. Unknown block types are dropped.
pub(crate) fn extract_message_content(content: &Value) -> String {
    match content {
        Value::String(text) => text.clone(),
        Value::Array(blocks) => blocks
            .iter()
            .filter_map(render_block)
            .collect::<Vec<_>>()
            .join("\n"),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn render_block(block: &Value) -> Option<String> {
    if let Value::String(text) = block {
        return Some(text.clone());
    }
    match block.get("type").and_then(Value::as_str)? {
        "text" => Some(
            block
                .get("text")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
        ),
        "tool_use" => Some(summarize_tool_use(block)),
        "tool_result" => {
            let result = match block.get("content") {
                Some(Value::String(text)) => text.clone(),
                Some(nested @ Value::Array(_)) => extract_message_content(nested),
                _ => String::new(),
            };
            Some(format!(
                "[Result: {}]",
                truncate_with(&result, TOOL_RESULT_MAX_CHARS, "...")
            ))
        }
        _ => None,
    }
}

fn summarize_tool_use(block: &Value) -> String {
    let name = block
        .get("name")
        .and_then(Value::as_str)
        .unwrap_or("unknown");
    let input = |key: &str| {
        block
            .get("input")
            .and_then(|input| input.get(key))
            .and_then(Value::as_str)
    };

    match name {
        "Read" => format!("[Reading: {}]", input("file_path").unwrap_or("?")),
        "Edit" => format!("[Editing: {}]", input("file_path").unwrap_or("?")),
        "Write" => format!("[Writing: {}]", input("file_path").unwrap_or("?")),
        "Bash" => format!(
            "[Running: {}]",
            truncate_chars(input("command").unwrap_or_default(), COMMAND_MAX_CHARS)
        ),
        "Grep" => format!("[Searching: {}]", input("pattern").unwrap_or("?")),
        "Glob" => format!("[Finding: {}]", input("pattern").unwrap_or("?")),
        other => format!("[Tool: {other}]"),
    }
}

/// Render up to `max_messages` non-empty messages (0 means no limit).
///
/// Every non-empty message counts toward the limit, but only user and
/// assistant turns get a section. When the limit is hit and the log has more
/// lines, a truncation notice ends the transcript.
pub(crate) fn render_transcript<I>(
    session_id: &str,
    path: &Path,
    records: I,
    max_messages: usize,
) -> String
where
    I: IntoIterator<Item = io::Result<LogRecord>>,
{
    let mut lines = vec![
        format!("# Session: {session_id}"),
        format!("**File:** `{}`\n", path.display()),
        "---\n".to_string(),
    ];

    let mut shown = 0usize;
    for record in records {
        if max_messages > 0 && shown >= max_messages {
            lines.push(format!(
                "\n... truncated (showing {max_messages} messages) ..."
            ));
            break;
        }

        let record = match record {
            Ok(record) => record,
            Err(err) => {
                warn(format!("Stopped reading {}: {}", path.display(), err));
                break;
            }
        };
        let Some(message) = record.message else {
            continue;
        };
        let content = extract_message_content(&message.content);
        if content.trim().is_empty() {
            continue;
        }
        shown += 1;

        match message.role.as_deref() {
            Some("user") => {
                lines.push("## User\n".to_string());
                lines.push(content);
                lines.push(String::new());
            }
            Some("assistant") => {
                lines.push("## Assistant\n".to_string());
                lines.push(truncate_with(
                    &content,
                    ASSISTANT_MAX_CHARS,
                    "\n\n... (truncated)",
                ));
                lines.push(String::new());
            }
            _ => {}
        }
    }

    if shown == 0 {
        lines.push("No messages found in session.".to_string());
    }
    lines.join("\n")
}
