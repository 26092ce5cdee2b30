use chrono::{DateTime, Duration, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

pub const SCHEMA_VERSION: u32 = 1;

/// One commit as seen by the analysis pass. Timestamps are normalized to UTC
/// at the repository boundary; the UTC instant is the ordering key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Commit {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub message: String,
}

/// A bounded span of work between a `+` marker commit and the `-` marker
/// commit that closed it. Never mutated after creation; recomputed from the
/// full history on every pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskInterval {
    pub name: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    /// Clamped to >= 0 at creation; integer seconds keep sums exact.
    pub duration_secs: i64,
}

impl TaskInterval {
    pub fn duration(&self) -> Duration {
        Duration::seconds(self.duration_secs)
    }
}

/// One appended line of the push log: which commit was at the branch head,
/// and the wall-clock time the push happened.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PushRecord {
    pub commit_id: String,
    pub pushed_at: NaiveDateTime,
}

/// Derived project-level facts, recomputed each pass and never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectSummary {
    pub start: Option<DateTime<Utc>>,
    pub finished: bool,
    pub completion_commit: Option<Commit>,
    pub elapsed_days: i64,
    pub total_duration_secs: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitEntry {
    pub id: String,
    pub short_id: String,
    pub timestamp: DateTime<Utc>,
    pub message: String,
    pub task: Option<TaskInterval>,
    pub pushed_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitsOutput {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub repository_path: String,
    pub commits: Vec<CommitEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskEntry {
    /// Short id of the closing commit; the stable key for this interval.
    pub closed_by: String,
    pub name: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub duration_secs: i64,
    pub duration: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TasksOutput {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub repository_path: String,
    pub tasks: Vec<TaskEntry>,
    pub total_secs: i64,
    pub total: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryOutput {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub repository_path: String,
    pub commit_count: usize,
    pub push_count: usize,
    pub project: ProjectSummary,
    pub total_duration: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepoEntry {
    pub name: String,
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReposOutput {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub base_dir: String,
    pub repos: Vec<RepoEntry>,
}
