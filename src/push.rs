use crate::cli::CommonArgs;
use crate::git::GitRepo;
use crate::model::PushRecord;
use crate::pushlog;
use crate::util::short_id;
use anyhow::Context;
use chrono::Local;
use console::style;

/// Push the current branch head to origin and record it.
///
/// The record is appended before success is reported; a failed push writes
/// nothing.
pub fn exec(common: CommonArgs, branch: &str) -> anyhow::Result<()> {
    let repo = GitRepo::open(common.repo.as_ref()).context("Failed to open git repository")?;

    repo.push_branch(branch)
        .with_context(|| format!("Failed to push '{branch}' to origin"))?;

    let head = repo
        .head_commit_id()
        .context("Failed to resolve branch head")?;
    let record = PushRecord {
        commit_id: short_id(&head).to_string(),
        pushed_at: Local::now().naive_local(),
    };
    pushlog::append_push_record(&pushlog::push_log_path(repo.path()), &record)
        .context("Failed to record push")?;

    println!(
        "Pushed {} at {}",
        style(&record.commit_id).cyan(),
        style(record.pushed_at.format(pushlog::TIMESTAMP_FORMAT)).dim()
    );
    Ok(())
}
