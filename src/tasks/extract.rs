use crate::model::{Commit, TaskInterval};
use crate::util::short_id;
use chrono::Duration;
use std::collections::BTreeMap;

struct PendingOpen<'a> {
    commit: &'a Commit,
    name: String,
}

/// Pair `+`/`-` marker commits into task intervals.
///
/// Commits are scanned oldest first regardless of input order. A message
/// starting with `+` opens a task named by the trimmed remainder; a later `+`
/// replaces a still-open task without ever closing it. A message starting
/// with `-` closes the open task, keyed by the closing commit's short id; a
/// `-` with nothing open is a no-op, as is any unmarked message.
pub fn extract_intervals(commits: &[Commit]) -> BTreeMap<String, TaskInterval> {
    let mut ordered: Vec<&Commit> = commits.iter().collect();
    ordered.sort_by_key(|c| c.timestamp);

    let mut pending: Option<PendingOpen<'_>> = None;
    let mut intervals = BTreeMap::new();

    for commit in ordered {
        let message = commit.message.trim();

        if let Some(rest) = message.strip_prefix('+') {
            pending = Some(PendingOpen {
                commit,
                name: rest.trim().to_string(),
            });
        } else if message.starts_with('-') {
            if let Some(open) = pending.take() {
                let span = commit.timestamp - open.commit.timestamp;
                let duration = span.max(Duration::zero());
                intervals.insert(
                    short_id(&commit.id).to_string(),
                    TaskInterval {
                        name: open.name,
                        start: open.commit.timestamp,
                        end: commit.timestamp,
                        duration_secs: duration.num_seconds(),
                    },
                );
            }
        }
    }

    intervals
}
