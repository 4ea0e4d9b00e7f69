use chrono::Local;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::{Cli, OutputFormat};
use crate::core::{FsProbe, ProjectFormatter, group_by_date};
use crate::error::AppError;
use crate::output::{
    ReportContext, render_json, render_markdown, render_table, render_text, render_transcript,
};
use crate::source::log::LogReader;
use crate::source::{SessionMatch, SessionStore};
use crate::utils::{Timezone, debug_log, warn};

/// Everything resolved before any work is done
pub(crate) struct RunContext<'a> {
    pub(crate) cli: &'a Cli,
    pub(crate) home: Option<&'a Path>,
    pub(crate) timezone: Option<Timezone>,
}

/// `--projects-dir` (or config) wins, then `$CLAUDE_CONFIG_DIR/projects`,
/// then `~/.claude/projects`
pub(crate) fn resolve_projects_dir(
    explicit: Option<&Path>,
    claude_config_dir: Option<PathBuf>,
    home: Option<&Path>,
) -> Result<PathBuf, AppError> {
    if let Some(dir) = explicit {
        return Ok(dir.to_path_buf());
    }
    if let Some(dir) = claude_config_dir.filter(|d| !d.as_os_str().is_empty()) {
        return Ok(dir.join("projects"));
    }
    home.map(|h| h.join(".claude").join("projects"))
        .ok_or(AppError::HomeDirNotFound)
}

pub(crate) fn run(ctx: &RunContext<'_>) -> Result<(), AppError> {
    let projects_dir = resolve_projects_dir(
        ctx.cli.projects_dir.as_deref(),
        env::var_os("CLAUDE_CONFIG_DIR").map(PathBuf::from),
        ctx.home,
    )?;
    debug_log(format!("Projects directory: {}", projects_dir.display()));
    let store = SessionStore::new(projects_dir);

    match ctx.cli.view_target() {
        Some(session_id) => view_session(&store, session_id, ctx),
        None => summarize(&store, ctx),
    }
}

fn summarize(store: &SessionStore, ctx: &RunContext<'_>) -> Result<(), AppError> {
    let sessions = store.collect();
    if sessions.is_empty() {
        println!("No sessions found.");
        return Ok(());
    }

    let grouped = group_by_date(sessions, ctx.timezone);
    let probe = FsProbe;
    let report = ReportContext::new(ProjectFormatter::new(ctx.home, &probe), ctx.timezone);

    let output = match ctx.cli.output_format() {
        OutputFormat::Markdown => render_markdown(&grouped, &report),
        OutputFormat::Text => render_text(&grouped, &report),
        OutputFormat::Table => render_table(&grouped, &report, ctx.cli.use_color()),
        OutputFormat::Json => render_json(&grouped, &report, Local::now())?,
    };

    emit(&output, ctx.cli.save.as_deref())
}

fn view_session(
    store: &SessionStore,
    session_id: &str,
    ctx: &RunContext<'_>,
) -> Result<(), AppError> {
    let path = match store.find_session_file(session_id) {
        SessionMatch::Found(path) => path,
        SessionMatch::NotFound => {
            println!("Session not found: {session_id}");
            return Ok(());
        }
        SessionMatch::Ambiguous(candidates) => {
            println!("Multiple sessions match '{session_id}':");
            for candidate in candidates {
                println!("  {candidate}");
            }
            return Ok(());
        }
    };
    debug_log(format!("Viewing {}", path.display()));

    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| session_id.to_string());
    let transcript = match LogReader::open(&path) {
        Ok(records) => render_transcript(&stem, &path, records, ctx.cli.max_messages()),
        Err(e) => {
            warn(format!("Could not read {}: {}", path.display(), e));
            render_transcript(&stem, &path, Vec::new(), ctx.cli.max_messages())
        }
    };

    emit(&transcript, ctx.cli.save.as_deref())
}

/// Print to stdout, or write to `save` and confirm
fn emit(output: &str, save: Option<&Path>) -> Result<(), AppError> {
    match save {
        Some(path) => {
            fs::write(path, output).map_err(|source| AppError::WriteOutput {
                path: path.to_path_buf(),
                source,
            })?;
            println!("Saved to {}", path.display());
        }
        None => println!("{output}"),
    }
    Ok(())
}
