use crate::core::{GroupedSessions, total_messages, total_sessions};
use crate::output::ReportContext;
use crate::output::format::{format_date_heading, session_time};

/// Markdown report: totals, then one table per date bucket
pub(crate) fn render_markdown(grouped: &GroupedSessions, ctx: &ReportContext<'_>) -> String {
    let mut lines = vec![
        "# Claude Code Session History\n".to_string(),
        format!("**Total Sessions:** {}  ", total_sessions(grouped)),
        format!("**Total Messages:** {}\n", total_messages(grouped)),
        "---\n".to_string(),
    ];

    for (date_key, sessions) in grouped {
        lines.push(format!("## {}\n", format_date_heading(date_key, true)));
        lines.push("| Project | Summary | Messages |".to_string());
        lines.push("|---------|---------|----------|".to_string());

        for session in sessions {
            let project = code_span(&ctx.projects.display(&session.project_path));
            let summary = escape_cell(&session.summary);
            let summary = match session_time(session, ctx.timezone) {
                Some(time) => format!("**{summary}** ({time})"),
                None => format!("**{summary}**"),
            };
            lines.push(format!(
                "| {project} | {summary} | {} |",
                session.message_count
            ));
        }
        lines.push(String::new());
    }

    lines.join("\n")
}

/// Keep cell text on one row of the table
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|").replace(['\r', '\n'], " ")
}

/// Inline code whose fence is longer than any backtick run inside `text`
fn code_span(text: &str) -> String {
    let longest_run = text
        .split(|c| c != '`')
        .map(str::len)
        .max()
        .unwrap_or(0);
    let fence = "`".repeat(longest_run + 1);
    let body = escape_cell(text);
    if body.starts_with('`') || body.ends_with('`') {
        format!("{fence} {body} {fence}")
    } else {
        format!("{fence}{body}{fence}")
    }
}
