//! Unified session collection: indexes first, then orphans

use std::collections::HashSet;
use std::time::Instant;

use crate::core::Session;
use crate::source::SessionStore;
use crate::source::index::parse_session_index;
use crate::source::orphan::find_orphan_sessions;
use crate::utils::debug_log;

impl SessionStore {
    /// Collect every session in the store, each id at most once.
    ///
    /// Indexed sessions come first, in index discovery order; an id listed by
    /// several indexes keeps its first entry, while entries without an id are
    /// all kept. Orphans follow in scan order and are computed once against
    /// the ids of all indexes together.
    pub(crate) fn collect(&self) -> Vec<Session> {
        let start = Instant::now();
        let index_files = self.find_index_files();
        debug_log(format!(
            "Found {} index files under {}",
            index_files.len(),
            self.projects_dir().display()
        ));

        let mut sessions = Vec::new();
        let mut known: HashSet<String> = HashSet::new();
        for index_path in &index_files {
            for session in parse_session_index(index_path) {
                // Entries without an id cannot collide with anything
                if session.session_id.is_empty() || known.insert(session.session_id.clone()) {
                    sessions.push(session);
                } else {
                    debug_log(format!(
                        "Dropping duplicate session {} from {}",
                        session.session_id,
                        index_path.display()
                    ));
                }
            }
        }

        let indexed = sessions.len();
        let orphans = find_orphan_sessions(self, &known);
        debug_log(format!(
            "Collected {} indexed and {} orphan sessions ({:.2}ms)",
            indexed,
            orphans.len(),
            start.elapsed().as_secs_f64() * 1000.0
        ));

        sessions.extend(orphans);
        sessions
    }
}
