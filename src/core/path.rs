//! Project directory name decoding
//!
//! Claude Code stores each project's logs under a directory named after the
//! project path with every `/` replaced by `-` (`/home/pat/app` becomes
//! `-home-pat-app`). The encoding is lossy: a `-` or `_` inside a path segment
//! looks exactly like a separator. Decoding therefore asks the filesystem
//! which interpretation exists, merging two adjacent segments greedily from
//! the left whenever the merged path is found. The result is a best guess,
//! not a guaranteed inverse.

use std::path::Path;

const DELIMITER: char = '-';

/// Characters tried, in order, when gluing two encoded segments back together
const JOINERS: [char; 2] = ['-', '_'];

/// Existence oracle consulted by the decoder
pub(crate) trait PathProbe {
    fn exists(&self, path: &Path) -> bool;
}

/// Probe backed by the real filesystem. Errors (permission denied, broken
/// symlinks, I/O failures) count as "does not exist".
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct FsProbe;

impl PathProbe for FsProbe {
    fn exists(&self, path: &Path) -> bool {
        path.try_exists().unwrap_or(false)
    }
}

/// Forward encoding used by Claude Code for project directory names
#[cfg(test)]
pub(crate) fn encode_project_path(path: &str) -> String {
    path.replace('/', "-")
}

fn absolute(parts: &[String], last: Option<&str>) -> String {
    let mut out = String::from("/");
    let mut first = true;
    for part in parts.iter().map(String::as_str).chain(last) {
        if !first {
            out.push('/');
        }
        out.push_str(part);
        first = false;
    }
    out
}

/// Decode an encoded project directory name back to a path.
///
/// Names not starting with `-` are returned unchanged.
pub(crate) fn decode_project_dir_name(encoded: &str, probe: &dyn PathProbe) -> String {
    let Some(rest) = encoded.strip_prefix(DELIMITER) else {
        return encoded.to_string();
    };

    let parts: Vec<&str> = rest.split(DELIMITER).collect();
    let mut decoded: Vec<String> = Vec::with_capacity(parts.len());
    let mut i = 0;
    while i < parts.len() {
        if let Some(next) = parts.get(i + 1) {
            let merged = JOINERS
                .iter()
                .map(|joiner| format!("{}{joiner}{next}", parts[i]))
                .find(|candidate| {
                    probe.exists(Path::new(&absolute(&decoded, Some(candidate.as_str()))))
                });
            if let Some(merged) = merged {
                decoded.push(merged);
                i += 2;
                continue;
            }
        }
        decoded.push(parts[i].to_string());
        i += 1;
    }

    absolute(&decoded, None)
}

/// Turns stored project paths into what reports show: encoded names are
/// decoded and the home directory is abbreviated to `~`.
pub(crate) struct ProjectFormatter<'a> {
    home: Option<&'a Path>,
    probe: &'a dyn PathProbe,
}

impl<'a> ProjectFormatter<'a> {
    pub(crate) fn new(home: Option<&'a Path>, probe: &'a dyn PathProbe) -> Self {
        Self { home, probe }
    }

    pub(crate) fn display(&self, project_path: &str) -> String {
        let path = if project_path.starts_with(DELIMITER) {
            decode_project_dir_name(project_path, self.probe)
        } else {
            project_path.to_string()
        };

        if let Some(home) = self.home.and_then(Path::to_str)
            && !home.is_empty()
            && let Some(rest) = path.strip_prefix(home)
            && (rest.is_empty() || rest.starts_with('/'))
        {
            return format!("~{rest}");
        }
        path
    }
}
