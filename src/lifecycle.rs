use crate::model::Commit;
use chrono::{DateTime, Utc};

const COMPLETION_MARKER: &str = "[end]";

/// Project-level facts derived from one pass over the commit history.
#[derive(Debug, Clone)]
pub struct Lifecycle {
    pub start: Option<DateTime<Utc>>,
    pub completion_commit: Option<Commit>,
    pub finished: bool,
    pub elapsed_days: i64,
}

fn is_completion(message: &str) -> bool {
    message.to_lowercase().contains(COMPLETION_MARKER)
}

/// Derive start, completion and elapsed days from the commit history.
///
/// `now` anchors the day count for projects without a completion commit, so
/// repeated calls on an unchanged history move forward with the clock. The
/// caller passes `Utc::now()`; tests pass a fixed instant.
pub fn analyze(commits: &[Commit], now: DateTime<Utc>) -> Lifecycle {
    let start = commits.iter().map(|c| c.timestamp).min();

    let completion_commit = commits
        .iter()
        .filter(|c| is_completion(&c.message))
        .max_by_key(|c| c.timestamp)
        .cloned();

    let finished = completion_commit.is_some();
    let end_reference = completion_commit
        .as_ref()
        .map(|c| c.timestamp)
        .unwrap_or(now);

    let elapsed_days = start
        .map(|s| {
            (end_reference.date_naive() - s.date_naive())
                .num_days()
                .max(0)
        })
        .unwrap_or(0);

    Lifecycle {
        start,
        completion_commit,
        finished,
        elapsed_days,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn commit(id: &str, ymd: (i32, u32, u32), message: &str) -> Commit {
        Commit {
            id: id.to_string(),
            timestamp: Utc
                .with_ymd_and_hms(ymd.0, ymd.1, ymd.2, 12, 0, 0)
                .unwrap(),
            message: message.to_string(),
        }
    }

    fn noon(ymd: (i32, u32, u32)) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(ymd.0, ymd.1, ymd.2, 12, 0, 0).unwrap()
    }

    #[test]
    fn start_is_the_minimum_timestamp() {
        let commits = vec![
            commit("b", (2024, 1, 5), "more work"),
            commit("a", (2024, 1, 2), "init"),
            commit("c", (2024, 1, 9), "later"),
        ];

        let lifecycle = analyze(&commits, noon((2024, 1, 10)));

        assert_eq!(lifecycle.start, Some(noon((2024, 1, 2))));
    }

    #[test]
    fn completion_marker_is_case_insensitive() {
        let commits = vec![
            commit("a", (2024, 1, 1), "init"),
            commit("b", (2024, 1, 4), "release [end]"),
        ];

        let lifecycle = analyze(&commits, noon((2024, 2, 1)));

        assert!(lifecycle.finished);
        assert_eq!(lifecycle.completion_commit.unwrap().id, "b");
        assert_eq!(lifecycle.elapsed_days, 3);
    }

    #[test]
    fn most_recent_completion_commit_wins() {
        let commits = vec![
            commit("a", (2024, 1, 1), "init"),
            commit("b", (2024, 1, 3), "[END] first attempt"),
            commit("c", (2024, 1, 8), "[End] re-release"),
        ];

        let lifecycle = analyze(&commits, noon((2024, 3, 1)));

        assert_eq!(lifecycle.completion_commit.unwrap().id, "c");
        assert_eq!(lifecycle.elapsed_days, 7);
    }

    #[test]
    fn unfinished_project_counts_days_to_now() {
        let commits = vec![
            commit("a", (2024, 1, 1), "init"),
            commit("b", (2024, 1, 2), "work"),
        ];

        let lifecycle = analyze(&commits, noon((2024, 1, 6)));

        assert!(!lifecycle.finished);
        assert!(lifecycle.completion_commit.is_none());
        assert_eq!(lifecycle.elapsed_days, 5);
    }

    #[test]
    fn elapsed_days_grow_with_the_clock() {
        let commits = vec![commit("a", (2024, 1, 1), "init")];

        let earlier = analyze(&commits, noon((2024, 1, 3))).elapsed_days;
        let later = analyze(&commits, noon((2024, 1, 8))).elapsed_days;

        assert!(later >= earlier);
    }

    #[test]
    fn empty_history_yields_no_start_and_zero_days() {
        let lifecycle = analyze(&[], noon((2024, 1, 1)));

        assert!(lifecycle.start.is_none());
        assert!(!lifecycle.finished);
        assert_eq!(lifecycle.elapsed_days, 0);
    }

    #[test]
    fn elapsed_days_never_go_negative() {
        let commits = vec![commit("a", (2024, 1, 10), "init")];

        // Clock behind the first commit, e.g. host clock skew.
        let lifecycle = analyze(&commits, noon((2024, 1, 3)));

        assert_eq!(lifecycle.elapsed_days, 0);
    }
}
