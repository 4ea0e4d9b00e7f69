//! CLI argument definitions
//!
//! Command-line options and configuration merging logic.

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::{Config, ConfigColorMode, ConfigOutputFormat};

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub(crate) enum OutputFormat {
    /// Markdown report with one table per day (default)
    #[default]
    #[value(alias = "md")]
    Markdown,
    /// Machine-readable JSON
    Json,
    /// Plain indented text
    Text,
    /// Terminal table
    Table,
}

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub(crate) enum ColorMode {
    /// Auto-detect based on terminal (default)
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser)]
#[command(name = "ccsummary")]
#[command(about = "Summarize Claude Code session history by date", version)]
pub(crate) struct Cli {
    /// Output format [default: markdown]
    #[arg(short, long, value_enum)]
    pub(crate) output: Option<OutputFormat>,

    /// Claude Code projects directory (default: ~/.claude/projects)
    #[arg(short, long, value_name = "DIR")]
    pub(crate) projects_dir: Option<PathBuf>,

    /// Write output to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub(crate) save: Option<PathBuf>,

    /// Show the transcript of one session (full or partial id)
    #[arg(short, long, value_name = "SESSION_ID")]
    pub(crate) view: Option<String>,

    /// Maximum messages shown with --view [default: 0, no limit]
    #[arg(short, long, value_name = "N")]
    pub(crate) max_messages: Option<usize>,

    /// Timezone for grouping and times (e.g., "Europe/Berlin", "UTC", "local")
    #[arg(long, value_name = "TZ")]
    pub(crate) timezone: Option<String>,

    /// Color output mode [default: auto]
    #[arg(long, value_enum)]
    pub(crate) color: Option<ColorMode>,

    /// Disable colored output (shorthand for --color=never)
    #[arg(long)]
    pub(crate) no_color: bool,

    /// Enable debug output (show processing details)
    #[arg(long)]
    pub(crate) debug: bool,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        // Boolean flags: config only applies if CLI is false (default)
        if !self.no_color && config.no_color {
            self.no_color = true;
        }
        if !self.debug && config.debug {
            self.debug = true;
        }

        // Valued options: only apply if CLI didn't set them
        if self.output.is_none() {
            self.output = config.output.map(|output| match output {
                ConfigOutputFormat::Markdown => OutputFormat::Markdown,
                ConfigOutputFormat::Json => OutputFormat::Json,
                ConfigOutputFormat::Text => OutputFormat::Text,
                ConfigOutputFormat::Table => OutputFormat::Table,
            });
        }
        if self.color.is_none() {
            self.color = config.color.map(|color| match color {
                ConfigColorMode::Auto => ColorMode::Auto,
                ConfigColorMode::Always => ColorMode::Always,
                ConfigColorMode::Never => ColorMode::Never,
            });
        }
        if self.max_messages.is_none() {
            self.max_messages = config.max_messages;
        }
        if self.timezone.is_none() {
            self.timezone = config.timezone.clone();
        }
        if self.projects_dir.is_none() {
            self.projects_dir = config.projects_dir.clone();
        }

        self
    }

    pub(crate) fn use_color(&self) -> bool {
        if self.no_color {
            return false;
        }
        match self.color.unwrap_or_default() {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stdout().is_terminal(),
        }
    }

    pub(crate) fn output_format(&self) -> OutputFormat {
        self.output.unwrap_or_default()
    }

    /// Transcript message cap; 0 means no limit
    pub(crate) fn max_messages(&self) -> usize {
        self.max_messages.unwrap_or(0)
    }

    /// Session id to view; an empty id means report mode
    pub(crate) fn view_target(&self) -> Option<&str> {
        self.view.as_deref().filter(|id| !id.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("ccsummary").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults() {
        let cli = parse(&["-v", "x"]);
        assert_eq!(cli.output_format(), OutputFormat::Markdown);
        assert_eq!(cli.max_messages(), 0);
        assert!(cli.save.is_none());
        assert!(parse(&[]).view.is_none());
    }

    #[test]
    fn md_is_an_alias_for_markdown() {
        assert_eq!(parse(&["-o", "md"]).output_format(), OutputFormat::Markdown);
        assert_eq!(parse(&["--output", "json"]).output_format(), OutputFormat::Json);
    }

    #[test]
    fn unknown_format_is_rejected() {
        assert!(Cli::try_parse_from(["ccsummary", "-o", "yaml"]).is_err());
    }

    #[test]
    fn empty_view_means_report_mode() {
        assert_eq!(parse(&["-v", ""]).view_target(), None);
        assert_eq!(parse(&["-v", "49f2"]).view_target(), Some("49f2"));
    }

    #[test]
    fn config_fills_unset_options_only() {
        let config: Config = toml::from_str(
            r#"
            output = "json"
            timezone = "UTC"
            max_messages = 10
            projects_dir = "/srv/claude/projects"
            no_color = true
            "#,
        )
        .unwrap();

        let merged = parse(&[]).with_config(&config);
        assert_eq!(merged.output_format(), OutputFormat::Json);
        assert_eq!(merged.timezone.as_deref(), Some("UTC"));
        assert_eq!(merged.max_messages(), 10);
        assert_eq!(
            merged.projects_dir,
            Some(PathBuf::from("/srv/claude/projects"))
        );
        assert!(!merged.use_color());

        let explicit = parse(&["-o", "text", "--timezone", "Asia/Tokyo", "-m", "5"])
            .with_config(&config);
        assert_eq!(explicit.output_format(), OutputFormat::Text);
        assert_eq!(explicit.timezone.as_deref(), Some("Asia/Tokyo"));
        assert_eq!(explicit.max_messages(), 5);
    }

    #[test]
    fn explicit_defaults_beat_config() {
        let config: Config = toml::from_str(
            r#"
            output = "json"
            max_messages = 10
            color = "always"
            "#,
        )
        .unwrap();

        let merged =
            parse(&["-o", "markdown", "-m", "50", "--color", "never"]).with_config(&config);
        assert_eq!(merged.output_format(), OutputFormat::Markdown);
        assert_eq!(merged.max_messages(), 50);
        assert!(!merged.use_color());

        let unlimited = parse(&["-m", "0"]).with_config(&config);
        assert_eq!(unlimited.max_messages(), 0);
    }

    #[test]
    fn color_modes() {
        assert!(parse(&["--color", "always"]).use_color());
        assert!(!parse(&["--color", "always", "--no-color"]).use_color());
        assert!(!parse(&["--color", "never"]).use_color());
    }
}
