use crate::model::{RepoEntry, ReposOutput, SCHEMA_VERSION};
use anyhow::Context;
use chrono::Utc;
use console::style;
use std::path::Path;

/// A directory counts as a repository when it has a `.git` entry; worktrees
/// keep a `.git` file rather than a directory, so either form qualifies.
fn is_git_repo(path: &Path) -> bool {
    path.join(".git").exists()
}

pub fn exec(base: &Path, json: bool) -> anyhow::Result<()> {
    let entries = std::fs::read_dir(base)
        .with_context(|| format!("Failed to read directory {}", base.display()))?;

    let mut repos = Vec::new();
    for entry in entries {
        let entry = entry?;
        let path = entry.path();
        if path.is_dir() && is_git_repo(&path) {
            repos.push(RepoEntry {
                name: entry.file_name().to_string_lossy().to_string(),
                path: path.to_string_lossy().to_string(),
            });
        }
    }
    repos.sort_by(|a, b| a.name.cmp(&b.name));

    if json {
        let output = ReposOutput {
            version: SCHEMA_VERSION,
            generated_at: Utc::now(),
            base_dir: base.to_string_lossy().to_string(),
            repos,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if repos.is_empty() {
        println!("No git repositories under {}", base.display());
        return Ok(());
    }

    println!("{}", style("Repositories").bold());
    println!("{}", "─".repeat(50));
    for repo in &repos {
        println!("{:<24} {}", repo.name, style(&repo.path).dim());
    }

    Ok(())
}
