use anyhow::Result;
use std::path::PathBuf;

use super::storage::{
    contributions_path, feedback_path, load_contributions, load_feedback, save_contributions,
    save_feedback_log,
};
use super::types::{Contribution, ContributionKind, FeedbackEntry, Status};

/// Persistent contribution/feedback store rooted at one directory.
///
/// Constructed once at startup and passed by reference to whatever needs
/// it; pointing it at a temp directory substitutes a throwaway store in
/// tests. Every write is a load-mutate-save of the whole collection, so
/// two processes racing on the same directory can lose an update; this is
/// accepted for a single-user tool.
#[derive(Debug, Clone)]
pub struct ContributionStore {
    dir: PathBuf,
}

impl ContributionStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Create a new contribution. `Status::Published` is the admin path
    /// that skips moderation.
    pub fn submit(
        &self,
        name: &str,
        content: &str,
        kind: ContributionKind,
        status: Status,
    ) -> Result<Contribution> {
        let path = contributions_path(&self.dir);
        let mut log = load_contributions(&path)?;
        let entry = log.submit(name, content, kind, status);
        save_contributions(&path, &log)?;
        Ok(entry)
    }

    /// Publish a pending contribution. Returns false (and writes nothing)
    /// when the id is absent.
    pub fn approve(&self, id: &str) -> Result<bool> {
        let path = contributions_path(&self.dir);
        let mut log = load_contributions(&path)?;
        if !log.approve(id) {
            return Ok(false);
        }
        save_contributions(&path, &log)?;
        Ok(true)
    }

    /// Delete a contribution regardless of status. Returns false when
    /// the id is absent.
    pub fn delete(&self, id: &str) -> Result<bool> {
        let path = contributions_path(&self.dir);
        let mut log = load_contributions(&path)?;
        if !log.remove(id) {
            return Ok(false);
        }
        save_contributions(&path, &log)?;
        Ok(true)
    }

    pub fn pending(&self) -> Result<Vec<Contribution>> {
        let log = load_contributions(&contributions_path(&self.dir))?;
        Ok(log.pending().into_iter().cloned().collect())
    }

    pub fn published(&self) -> Result<Vec<Contribution>> {
        let log = load_contributions(&contributions_path(&self.dir))?;
        Ok(log.published().into_iter().cloned().collect())
    }

    pub fn save_feedback(&self, content: &str) -> Result<FeedbackEntry> {
        let path = feedback_path(&self.dir);
        let mut log = load_feedback(&path)?;
        let entry = log.add(content);
        save_feedback_log(&path, &log)?;
        Ok(entry)
    }

    pub fn feedback(&self) -> Result<Vec<FeedbackEntry>> {
        let log = load_feedback(&feedback_path(&self.dir))?;
        Ok(log.entries)
    }

    pub fn delete_feedback(&self, id: &str) -> Result<bool> {
        let path = feedback_path(&self.dir);
        let mut log = load_feedback(&path)?;
        if !log.remove(id) {
            return Ok(false);
        }
        save_feedback_log(&path, &log)?;
        Ok(true)
    }
}
