use crate::cli::CommonArgs;
use crate::git::GitRepo;
use crate::lifecycle;
use crate::model::{ProjectSummary, SummaryOutput, SCHEMA_VERSION};
use crate::pushlog;
use crate::tasks::{extract_intervals, format_duration, total_duration};
use anyhow::Context;
use chrono::Utc;
use console::style;

pub fn exec(common: CommonArgs, json: bool) -> anyhow::Result<()> {
    let repo = GitRepo::open(common.repo.as_ref()).context("Failed to open git repository")?;
    let commits = repo
        .collect_commits()
        .context("Failed to collect commits from repository")?;
    let pushes = pushlog::read_push_log(&pushlog::push_log_path(repo.path()))
        .context("Failed to read push log")?;

    let intervals = extract_intervals(&commits);
    let total = total_duration(intervals.values());
    let facts = lifecycle::analyze(&commits, Utc::now());

    let project = ProjectSummary {
        start: facts.start,
        finished: facts.finished,
        completion_commit: facts.completion_commit,
        elapsed_days: facts.elapsed_days,
        total_duration_secs: total.num_seconds(),
    };

    let output = SummaryOutput {
        version: SCHEMA_VERSION,
        generated_at: Utc::now(),
        repository_path: repo.path().to_string_lossy().to_string(),
        commit_count: commits.len(),
        push_count: pushes.len(),
        total_duration: format_duration(total),
        project,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        output_text(&output);
    }

    Ok(())
}

fn output_text(output: &SummaryOutput) {
    println!("{}", style("Project Summary").bold());
    println!("{}", "─".repeat(50));

    println!("Commits: {}", style(output.commit_count).cyan());
    println!("Pushes: {}", style(output.push_count).cyan());

    match output.project.start {
        Some(start) => println!(
            "Project start: {}",
            style(start.format("%Y-%m-%d")).dim()
        ),
        None => println!("Project start: unknown"),
    }

    println!(
        "Total task time: {}",
        style(&output.total_duration).green()
    );

    if let Some(completion) = &output.project.completion_commit {
        println!(
            "Days elapsed: {} (finished {})",
            style(output.project.elapsed_days).cyan(),
            style(completion.timestamp.format("%Y-%m-%d")).dim()
        );
    } else {
        println!(
            "Days elapsed: {}",
            style(output.project.elapsed_days).cyan()
        );
    }
}
