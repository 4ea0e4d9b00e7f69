//! Core module - session model, date grouping and project path decoding

mod grouper;
pub(crate) mod path;
mod types;

pub(crate) use grouper::{group_by_date, total_messages, total_sessions};
pub(crate) use path::{FsProbe, ProjectFormatter};
pub(crate) use types::{GroupedSessions, Session, SessionOrigin, Timestamp};
