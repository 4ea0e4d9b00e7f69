//! Line-by-line reader for `*.jsonl` session logs

use serde::Deserialize;
use serde_json::Value;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};

use crate::utils::{debug_enabled, debug_log};

/// One log record. Only the conversational payload is of interest; every
/// other field Claude Code writes is ignored.
#[derive(Debug, Deserialize)]
pub(crate) struct LogRecord {
    #[serde(default)]
    pub(crate) message: Option<LogMessage>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LogMessage {
    #[serde(default)]
    pub(crate) role: Option<String>,
    /// Plain string, or a list of content blocks
    #[serde(default)]
    pub(crate) content: Value,
}

/// Yields parsed records, skipping blank and malformed lines. I/O errors are
/// passed through so callers decide whether the whole file is lost.
pub(crate) struct LogReader {
    path: PathBuf,
    lines: Lines<BufReader<File>>,
    line_no: usize,
}

impl LogReader {
    pub(crate) fn open(path: &Path) -> io::Result<Self> {
        let file = File::open(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            lines: BufReader::new(file).lines(),
            line_no: 0,
        })
    }
}

impl Iterator for LogReader {
    type Item = io::Result<LogRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(err) => return Some(Err(err)),
            };
            self.line_no += 1;

            if line.trim().is_empty() {
                continue;
            }

            match serde_json::from_str::<LogRecord>(&line) {
                Ok(record) => return Some(Ok(record)),
                Err(err) => {
                    if debug_enabled() {
                        debug_log(format!(
                            "Invalid JSON at {}:{}: {}",
                            self.path.display(),
                            self.line_no,
                            err
                        ));
                    }
                }
            }
        }
    }
}
