use crate::cli::CommonArgs;
use crate::git::GitRepo;
use crate::model::{CommitEntry, CommitsOutput, SCHEMA_VERSION};
use crate::pushlog;
use crate::tasks::{extract_intervals, format_duration};
use crate::util::{display_timestamp, short_id};
use anyhow::Context;
use chrono::Utc;
use console::style;

pub fn exec(common: CommonArgs, json: bool, ndjson: bool) -> anyhow::Result<()> {
    let repo = GitRepo::open(common.repo.as_ref()).context("Failed to open git repository")?;
    let commits = repo
        .collect_commits()
        .context("Failed to collect commits from repository")?;
    let pushes = pushlog::read_push_log(&pushlog::push_log_path(repo.path()))
        .context("Failed to read push log")?;

    let intervals = extract_intervals(&commits);

    let mut entries: Vec<CommitEntry> = commits
        .iter()
        .map(|c| {
            let sid = short_id(&c.id).to_string();
            let task = intervals.get(&sid).cloned();
            let pushed_at = pushes.get(&sid).copied();
            CommitEntry {
                id: c.id.clone(),
                short_id: sid,
                timestamp: c.timestamp,
                message: c.message.clone(),
                task,
                pushed_at,
            }
        })
        .collect();
    // Newest first, the way git log presents history.
    entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

    if json {
        let output = CommitsOutput {
            version: SCHEMA_VERSION,
            generated_at: Utc::now(),
            repository_path: repo.path().to_string_lossy().to_string(),
            commits: entries,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if ndjson {
        for entry in &entries {
            println!("{}", serde_json::to_string(entry)?);
        }
    } else {
        output_table(&entries)?;
    }

    Ok(())
}

fn output_table(entries: &[CommitEntry]) -> anyhow::Result<()> {
    if entries.is_empty() {
        println!("No commits found");
        return Ok(());
    }

    println!(
        "{:<8} {:<20} {:<12} {}",
        style("SHA").bold(),
        style("Commit Date").bold(),
        style("Task Time").bold(),
        style("Message").bold()
    );
    println!("{}", "─".repeat(100));

    for entry in entries {
        let task_time = entry
            .task
            .as_ref()
            .map(|t| format_duration(t.duration()))
            .unwrap_or_default();
        println!(
            "{:<8} {:<20} {:<12} {}",
            entry.short_id,
            display_timestamp(&entry.timestamp),
            task_time,
            entry.message
        );
    }

    println!("\n{} commits", entries.len());
    Ok(())
}
