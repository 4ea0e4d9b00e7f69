/// Standard date format used for bucket keys: "2025-01-15"
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Bucket key for sessions without a creation timestamp
pub(crate) const UNKNOWN_DATE: &str = "Unknown";

/// Per-project manifest written by Claude Code
pub(crate) const INDEX_FILE_NAME: &str = "sessions-index.json";

/// Maximum length (in characters) kept for a session's first prompt
pub(crate) const PROMPT_MAX_CHARS: usize = 100;

/// Directory segment that holds delegated sub-conversations
pub(crate) const SUBAGENTS_DIR: &str = "subagents";

/// File name prefix of delegated sub-conversation logs
pub(crate) const AGENT_FILE_PREFIX: &str = "agent-";
