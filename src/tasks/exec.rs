use crate::cli::CommonArgs;
use crate::git::GitRepo;
use crate::model::{TaskEntry, TasksOutput, SCHEMA_VERSION};
use crate::tasks::{extract_intervals, format_duration, total_duration};
use crate::util::display_timestamp;
use anyhow::Context;
use chrono::Utc;
use console::style;

pub fn exec(common: CommonArgs, json: bool, ndjson: bool) -> anyhow::Result<()> {
    let repo = GitRepo::open(common.repo.as_ref()).context("Failed to open git repository")?;
    let commits = repo
        .collect_commits()
        .context("Failed to collect commits from repository")?;

    let intervals = extract_intervals(&commits);
    let total = total_duration(intervals.values());

    let mut tasks: Vec<TaskEntry> = intervals
        .into_iter()
        .map(|(closed_by, interval)| TaskEntry {
            closed_by,
            duration: format_duration(interval.duration()),
            name: interval.name,
            start: interval.start,
            end: interval.end,
            duration_secs: interval.duration_secs,
        })
        .collect();
    tasks.sort_by_key(|t| t.end);

    if json {
        let output = TasksOutput {
            version: SCHEMA_VERSION,
            generated_at: Utc::now(),
            repository_path: repo.path().to_string_lossy().to_string(),
            total_secs: total.num_seconds(),
            total: format_duration(total),
            tasks,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if ndjson {
        for task in &tasks {
            println!("{}", serde_json::to_string(task)?);
        }
    } else {
        output_table(&tasks, format_duration(total))?;
    }

    Ok(())
}

fn output_table(tasks: &[TaskEntry], total: String) -> anyhow::Result<()> {
    if tasks.is_empty() {
        println!("No task markers found");
        return Ok(());
    }

    println!(
        "{:<30} {:<20} {:<20} {:>10}",
        style("Task").bold(),
        style("Start").bold(),
        style("End").bold(),
        style("Duration").bold()
    );
    println!("{}", "─".repeat(84));

    for task in tasks {
        println!(
            "{:<30} {:<20} {:<20} {:>10}",
            task.name,
            display_timestamp(&task.start),
            display_timestamp(&task.end),
            task.duration
        );
    }

    println!("\nTotal tracked time: {}", style(total).green());
    Ok(())
}
