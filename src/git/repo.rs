use crate::error::{GtaskError, Result};
use crate::model::Commit;
use chrono::DateTime;
use gix::{discover, ObjectId, Repository};
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::{HashSet, VecDeque};
use std::path::{Path, PathBuf};
use std::process::Command;

pub struct GitRepo {
    repo: Repository,
    path: PathBuf,
}

impl GitRepo {
    /// Open a repository at `path`, or current dir if `None`
    pub fn open<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        let repo_path = path
            .map(|p| p.as_ref().to_path_buf())
            .unwrap_or(std::env::current_dir()?);

        let repo = discover(&repo_path)?;
        let path = repo.workdir().unwrap_or_else(|| repo.path()).to_path_buf();

        Ok(Self { repo, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Walk the ancestry of HEAD and return one record per reachable commit.
    ///
    /// Commits whose time or message cannot be decoded are skipped; the walk
    /// continues through their parents. An unborn HEAD yields an empty list.
    pub fn collect_commits(&self) -> Result<Vec<Commit>> {
        let head = self.repo.head()?;
        let Some(head_id) = head.id() else {
            return Ok(Vec::new());
        };

        let mut commits = Vec::new();
        let mut seen: HashSet<ObjectId> = HashSet::new();
        let mut stack: VecDeque<ObjectId> = VecDeque::from([head_id.detach()]);

        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message("Reading commits...");

        while let Some(commit_id) = stack.pop_back() {
            if !seen.insert(commit_id) {
                continue;
            }

            let commit = self.repo.find_commit(commit_id)?;
            let parents: Vec<ObjectId> = commit.parent_ids().map(|id| id.into()).collect();

            match commit_record(&commit, commit_id) {
                Ok(record) => commits.push(record),
                Err(e) => log::warn!("skipping commit {commit_id}: {e}"),
            }

            for pid in parents {
                stack.push_back(pid);
            }

            pb.inc(1);
        }

        pb.finish_and_clear();
        Ok(commits)
    }

    /// Full id of the commit HEAD currently points at.
    pub fn head_commit_id(&self) -> Result<String> {
        let head = self.repo.head()?;
        let id = head
            .id()
            .ok_or_else(|| GtaskError::Parse("HEAD is unborn".to_string()))?;
        Ok(id.detach().to_string())
    }

    /// Push `branch` to origin. Recording the push is the caller's job and
    /// must only happen after this returns Ok.
    pub fn push_branch(&self, branch: &str) -> Result<()> {
        let output = Command::new("git")
            .arg("-C")
            .arg(&self.path)
            .args(["push", "origin", branch])
            .output()?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(GtaskError::Push(stderr));
        }
        Ok(())
    }
}

fn commit_record(commit: &gix::Commit<'_>, id: ObjectId) -> Result<Commit> {
    let secs = commit.time()?.seconds;
    let timestamp = DateTime::from_timestamp(secs, 0)
        .ok_or_else(|| GtaskError::InvalidDate(format!("Invalid timestamp: {secs}")))?;
    let message = commit.message()?.title.to_string();

    Ok(Commit {
        id: id.to_string(),
        timestamp,
        message,
    })
}
