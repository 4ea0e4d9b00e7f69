//! Buckets collected sessions by calendar date

use chrono::NaiveDateTime;

use crate::consts::UNKNOWN_DATE;
use crate::core::types::{GroupedSessions, Session};
use crate::utils::Timezone;

/// Ordering key within a bucket; sessions without a timestamp come first
fn sort_key(session: &Session) -> NaiveDateTime {
    session
        .created
        .map(|ts| ts.normalized())
        .unwrap_or(NaiveDateTime::MIN)
}

/// Group sessions by the date of `created` (consumes sessions to avoid cloning).
///
/// The date is taken in the timestamp's recorded offset unless `timezone` is
/// given. Sessions without `created` land in the `Unknown` bucket. Each bucket
/// is stable-sorted by normalized timestamp, so sessions created in the same
/// instant keep their collection order.
pub(crate) fn group_by_date(sessions: Vec<Session>, timezone: Option<Timezone>) -> GroupedSessions {
    let mut by_date = GroupedSessions::new();

    for session in sessions {
        let key = match &session.created {
            Some(ts) => ts.date_key(timezone),
            None => UNKNOWN_DATE.to_string(),
        };
        by_date.entry(key).or_default().push(session);
    }

    for bucket in by_date.values_mut() {
        bucket.sort_by_key(sort_key);
    }

    by_date
}

pub(crate) fn total_sessions(grouped: &GroupedSessions) -> usize {
    grouped.values().map(Vec::len).sum()
}

pub(crate) fn total_messages(grouped: &GroupedSessions) -> u64 {
    grouped
        .values()
        .flatten()
        .map(|session| session.message_count)
        .sum()
}
