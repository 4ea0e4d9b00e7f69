use comfy_table::Color;

use crate::core::{GroupedSessions, total_messages, total_sessions};
use crate::output::ReportContext;
use crate::output::format::{
    create_styled_table, format_date_heading, format_number, header_cell, right_cell,
    session_time, styled_cell,
};

/// Terminal table with one row per session; the date is shown once per bucket
pub(crate) fn render_table(
    grouped: &GroupedSessions,
    ctx: &ReportContext<'_>,
    use_color: bool,
) -> String {
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Date", use_color),
        header_cell("Time", use_color),
        header_cell("Project", use_color),
        header_cell("Summary", use_color),
        header_cell("Messages", use_color),
    ]);

    let date_color = use_color.then_some(Color::Green);
    let dim_color = use_color.then_some(Color::DarkGrey);
    for (date_key, sessions) in grouped {
        for (i, session) in sessions.iter().enumerate() {
            let date = if i == 0 {
                format_date_heading(date_key, false)
            } else {
                String::new()
            };
            let time = session_time(session, ctx.timezone).unwrap_or_default();
            table.add_row(vec![
                styled_cell(&date, date_color, false),
                styled_cell(&time, dim_color, false),
                styled_cell(&ctx.projects.display(&session.project_path), None, false),
                styled_cell(&session.summary, None, false),
                right_cell(&format_number(session.message_count), None, false),
            ]);
        }
    }

    let total_color = use_color.then_some(Color::Yellow);
    table.add_row(vec![
        styled_cell("TOTAL", total_color, true),
        styled_cell("", None, false),
        styled_cell("", None, false),
        styled_cell(
            &format!("{} sessions", format_number(total_sessions(grouped) as u64)),
            total_color,
            true,
        ),
        right_cell(&format_number(total_messages(grouped)), total_color, true),
    ]);

    format!("\n  Claude Code Session History\n\n{table}\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FsProbe, ProjectFormatter, group_by_date};
    use crate::output::test_support::session;

    #[test]
    fn rows_and_totals() {
        let grouped = group_by_date(
            vec![
                session("a", "/work/app", "Fix login", 1200, Some("2024-01-05T09:30:00Z")),
                session("b", "/work/api", "Add tests", 3, Some("2024-01-05T11:00:00Z")),
            ],
            None,
        );
        let probe = FsProbe;
        let ctx = ReportContext::new(ProjectFormatter::new(None, &probe), None);
        let out = render_table(&grouped, &ctx, false);

        assert!(out.contains("Claude Code Session History"));
        assert!(out.contains("January 05, 2024"));
        assert_eq!(out.matches("January 05, 2024").count(), 1);
        assert!(out.contains("Fix login"));
        assert!(out.contains("1,200"));
        assert!(out.contains("TOTAL"));
        assert!(out.contains("2 sessions"));
        assert!(out.contains("1,203"));
    }
}
