//! Core data types shared by the collector, grouper and renderers

use chrono::{DateTime, FixedOffset, NaiveDateTime, SecondsFormat};
use std::collections::BTreeMap;

use crate::consts::DATE_FORMAT;
use crate::utils::Timezone;

/// A creation time as recorded: with an offset or without one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Timestamp {
    Aware(DateTime<FixedOffset>),
    Naive(NaiveDateTime),
}

impl Timestamp {
    /// Offset-free instant used for ordering. Aware values are converted to
    /// UTC; naive values are taken as written.
    pub(crate) fn normalized(&self) -> NaiveDateTime {
        match self {
            Timestamp::Aware(dt) => dt.naive_utc(),
            Timestamp::Naive(dt) => *dt,
        }
    }

    /// Same instant expressed in `timezone`; naive values cannot be moved
    pub(crate) fn shifted(self, timezone: Option<Timezone>) -> Timestamp {
        match (self, timezone) {
            (Timestamp::Aware(dt), Some(tz)) => Timestamp::Aware(tz.shift(dt)),
            (ts, _) => ts,
        }
    }

    /// Wall-clock time in the recorded offset, or in `timezone` when given
    pub(crate) fn wall_clock(&self, timezone: Option<Timezone>) -> NaiveDateTime {
        match self.shifted(timezone) {
            Timestamp::Aware(dt) => dt.naive_local(),
            Timestamp::Naive(dt) => dt,
        }
    }

    pub(crate) fn date_key(&self, timezone: Option<Timezone>) -> String {
        self.wall_clock(timezone).format(DATE_FORMAT).to_string()
    }

    /// ISO-8601 rendering; aware values keep their offset
    pub(crate) fn to_iso(&self) -> String {
        match self {
            Timestamp::Aware(dt) => dt.to_rfc3339_opts(SecondsFormat::AutoSi, false),
            Timestamp::Naive(dt) => dt.format("%Y-%m-%dT%H:%M:%S%.f").to_string(),
        }
    }
}

/// Where a session's metadata came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SessionOrigin {
    /// Listed in a project's `sessions-index.json`
    Indexed,
    /// Raw log file with no index entry
    Orphan,
}

/// One recorded conversation
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Session {
    pub(crate) session_id: String,
    pub(crate) summary: String,
    /// At most 100 characters
    pub(crate) first_prompt: String,
    /// 0 when unknown (always for orphans)
    pub(crate) message_count: u64,
    pub(crate) created: Option<Timestamp>,
    /// Raw value from the index, never parsed
    pub(crate) modified: String,
    /// Plain path, or an encoded project directory name for orphans
    pub(crate) project_path: String,
    pub(crate) git_branch: String,
    pub(crate) full_path: String,
    pub(crate) origin: SessionOrigin,
}

/// Sessions bucketed by `YYYY-MM-DD` (or `Unknown`), keys in ascending order
pub(crate) type GroupedSessions = BTreeMap<String, Vec<Session>>;
