use chrono::NaiveDate;
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ContentArrangement, Table, TableComponent,
    modifiers::UTF8_SOLID_INNER_BORDERS, presets::UTF8_FULL,
};

use crate::consts::DATE_FORMAT;
use crate::core::Session;
use crate::utils::Timezone;

/// Human heading for a date bucket key ("January 05, 2024"), optionally with
/// the weekday. Keys that are not dates (`Unknown`) are shown as they are.
pub(super) fn format_date_heading(key: &str, with_weekday: bool) -> String {
    match NaiveDate::parse_from_str(key, DATE_FORMAT) {
        Ok(date) if with_weekday => date.format("%B %d, %Y (%A)").to_string(),
        Ok(date) => date.format("%B %d, %Y").to_string(),
        Err(_) => key.to_string(),
    }
}

/// `HH:MM` of the session start, in the same zone used for its date bucket
pub(super) fn session_time(session: &Session, timezone: Option<Timezone>) -> Option<String> {
    session
        .created
        .map(|ts| ts.wall_clock(timezone).format("%H:%M").to_string())
}

pub(super) fn format_number(n: u64) -> String {
    let digits = n.to_string();
    let mut result = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

pub(super) fn styled_cell(text: &str, color: Option<Color>, bold: bool) -> Cell {
    let mut cell = Cell::new(text);
    if let Some(c) = color {
        cell = cell.fg(c);
    }
    if bold {
        cell = cell.add_attribute(Attribute::Bold);
    }
    cell
}

pub(super) fn header_cell(text: &str, use_color: bool) -> Cell {
    let mut cell = Cell::new(text).add_attribute(Attribute::Bold);
    if use_color {
        cell = cell.fg(Color::Cyan);
    }
    cell
}

pub(super) fn right_cell(text: &str, color: Option<Color>, bold: bool) -> Cell {
    let mut cell = Cell::new(text).set_alignment(CellAlignment::Right);
    if let Some(c) = color {
        cell = cell.fg(c);
    }
    if bold {
        cell = cell.add_attribute(Attribute::Bold);
    }
    cell
}

/// Replace the double-line header separator (╞═╪═╡) with single-line (├─┼─┤)
fn normalize_header_separator(table: &mut Table) {
    table.set_style(TableComponent::HeaderLines, '─');
    table.set_style(TableComponent::LeftHeaderIntersection, '├');
    table.set_style(TableComponent::MiddleHeaderIntersections, '┼');
    table.set_style(TableComponent::RightHeaderIntersection, '┤');
}

/// Create a table with the standard preset, inner borders, and normalized header separator.
pub(super) fn create_styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    normalize_header_separator(&mut table);
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{SessionOrigin, Timestamp};
    use chrono::DateTime;

    #[test]
    fn format_number_with_commas() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(1_234_567), "1,234,567");
    }

    #[test]
    fn date_heading_variants() {
        assert_eq!(
            format_date_heading("2024-01-05", true),
            "January 05, 2024 (Friday)"
        );
        assert_eq!(format_date_heading("2024-01-05", false), "January 05, 2024");
        assert_eq!(format_date_heading("Unknown", true), "Unknown");
    }

    #[test]
    fn session_time_follows_timezone() {
        let created = DateTime::parse_from_rfc3339("2024-01-01T10:05:00Z").unwrap();
        let session = Session {
            session_id: "s".to_string(),
            summary: String::new(),
            first_prompt: String::new(),
            message_count: 0,
            created: Some(Timestamp::Aware(created)),
            modified: String::new(),
            project_path: String::new(),
            git_branch: String::new(),
            full_path: String::new(),
            origin: SessionOrigin::Indexed,
        };
        assert_eq!(session_time(&session, None).as_deref(), Some("10:05"));
        assert_eq!(
            session_time(&session, Some(Timezone::Named(chrono_tz::Asia::Tokyo))).as_deref(),
            Some("19:05")
        );
        let undated = Session {
            created: None,
            ..session
        };
        assert_eq!(session_time(&undated, None), None);
    }
}
