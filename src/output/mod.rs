mod format;
mod json;
mod markdown;
mod table;
mod text;
mod transcript;

pub(crate) use json::render_json;
pub(crate) use markdown::render_markdown;
pub(crate) use table::render_table;
pub(crate) use text::render_text;
pub(crate) use transcript::render_transcript;

use crate::core::ProjectFormatter;
use crate::utils::Timezone;

/// What every report renderer needs besides the sessions themselves
pub(crate) struct ReportContext<'a> {
    pub(crate) projects: ProjectFormatter<'a>,
    /// Zone for times shown next to sessions; must match the grouping zone
    pub(crate) timezone: Option<Timezone>,
}

impl<'a> ReportContext<'a> {
    pub(crate) fn new(projects: ProjectFormatter<'a>, timezone: Option<Timezone>) -> Self {
        Self { projects, timezone }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::core::{Session, SessionOrigin};
    use crate::utils::parse_timestamp;

    pub(crate) fn session(
        id: &str,
        project: &str,
        summary: &str,
        message_count: u64,
        created: Option<&str>,
    ) -> Session {
        Session {
            session_id: id.to_string(),
            summary: summary.to_string(),
            first_prompt: String::new(),
            message_count,
            created: created.and_then(parse_timestamp),
            modified: String::new(),
            project_path: project.to_string(),
            git_branch: String::new(),
            full_path: String::new(),
            origin: SessionOrigin::Indexed,
        }
    }
}
