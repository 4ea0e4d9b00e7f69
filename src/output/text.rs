use crate::core::GroupedSessions;
use crate::output::ReportContext;
use crate::output::format::format_date_heading;

/// Plain-text report for terminals without markdown rendering
pub(crate) fn render_text(grouped: &GroupedSessions, ctx: &ReportContext<'_>) -> String {
    let mut lines = vec![
        "CLAUDE CODE SESSION HISTORY".to_string(),
        "=".repeat(40),
        String::new(),
    ];

    for (date_key, sessions) in grouped {
        let heading = format_date_heading(date_key, false);
        let underline = "-".repeat(heading.chars().count());
        lines.push(format!("\n{heading}"));
        lines.push(underline);

        for session in sessions {
            lines.push(format!("  [{}]", ctx.projects.display(&session.project_path)));
            lines.push(format!("    {}", session.summary));
            if session.message_count > 0 {
                lines.push(format!("    ({} messages)", session.message_count));
            }
            lines.push(String::new());
        }
    }

    lines.join("\n")
}
