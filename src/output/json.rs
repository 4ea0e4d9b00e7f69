use chrono::{DateTime, Local, SecondsFormat};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::core::{GroupedSessions, SessionOrigin, total_sessions};
use crate::output::ReportContext;

#[derive(Serialize)]
struct JsonReport<'a> {
    generated_at: String,
    total_sessions: usize,
    sessions_by_date: BTreeMap<&'a str, Vec<JsonSession<'a>>>,
}

#[derive(Serialize)]
struct JsonSession<'a> {
    project: String,
    summary: &'a str,
    first_prompt: &'a str,
    message_count: u64,
    created: Option<String>,
    session_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    git_branch: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    modified: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    full_path: Option<&'a str>,
    origin: &'static str,
}

fn non_empty(value: &str) -> Option<&str> {
    Some(value).filter(|v| !v.is_empty())
}

/// Pretty-printed JSON report; `created` is ISO-8601 or null
pub(crate) fn render_json(
    grouped: &GroupedSessions,
    ctx: &ReportContext<'_>,
    generated_at: DateTime<Local>,
) -> Result<String, serde_json::Error> {
    let sessions_by_date = grouped
        .iter()
        .map(|(date_key, sessions)| {
            let rows = sessions
                .iter()
                .map(|s| JsonSession {
                    project: ctx.projects.display(&s.project_path),
                    summary: &s.summary,
                    first_prompt: &s.first_prompt,
                    message_count: s.message_count,
                    created: s.created.map(|ts| ts.shifted(ctx.timezone).to_iso()),
                    session_id: &s.session_id,
                    git_branch: non_empty(&s.git_branch),
                    modified: non_empty(&s.modified),
                    full_path: non_empty(&s.full_path),
                    origin: match s.origin {
                        SessionOrigin::Indexed => "indexed",
                        SessionOrigin::Orphan => "orphan",
                    },
                })
                .collect();
            (date_key.as_str(), rows)
        })
        .collect();

    let report = JsonReport {
        generated_at: generated_at.to_rfc3339_opts(SecondsFormat::Micros, false),
        total_sessions: total_sessions(grouped),
        sessions_by_date,
    };
    serde_json::to_string_pretty(&report)
}
