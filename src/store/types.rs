use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Display name used when a submitter leaves the name blank.
pub const ANONYMOUS_NAME: &str = "Anonymous Student";

/// On-disk format version for both collections.
pub const LOG_VERSION: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContributionKind {
    Quote,
    Story,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Pending,
    Published,
}

/// One submitted quote or story. Never edited after creation; the only
/// mutation is the pending -> published status flip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contribution {
    pub id: String,
    pub name: String,
    pub content: String,
    #[serde(rename = "type")]
    pub kind: ContributionKind,
    pub status: Status,
    pub created_at: DateTime<Utc>,
}

/// Anonymous feedback. Append-only apart from deletion; no moderation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackEntry {
    pub id: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// The whole contribution collection, as persisted. Entries are appended,
/// so vector order is insertion (and therefore timestamp) order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContributionLog {
    pub version: u32,
    #[serde(default)]
    pub entries: Vec<Contribution>,
}

impl Default for ContributionLog {
    fn default() -> Self {
        Self::new()
    }
}

impl ContributionLog {
    pub fn new() -> Self {
        Self {
            version: LOG_VERSION,
            entries: Vec::new(),
        }
    }

    /// Append a new contribution with a fresh id and the current time.
    /// A blank or whitespace-only name becomes [`ANONYMOUS_NAME`].
    pub fn submit(
        &mut self,
        name: &str,
        content: &str,
        kind: ContributionKind,
        status: Status,
    ) -> Contribution {
        let name = name.trim();
        let entry = Contribution {
            id: Uuid::new_v4().to_string(),
            name: if name.is_empty() {
                ANONYMOUS_NAME.to_string()
            } else {
                name.to_string()
            },
            content: content.to_string(),
            kind,
            status,
            created_at: Utc::now(),
        };
        self.entries.push(entry.clone());
        entry
    }

    /// Flip an entry to published. Approving an already-published entry is a
    /// harmless overwrite. Returns false (a no-op) when the id is absent.
    pub fn approve(&mut self, id: &str) -> bool {
        match self.entries.iter_mut().find(|e| e.id == id) {
            Some(entry) => {
                entry.status = Status::Published;
                true
            }
            None => false,
        }
    }

    /// Remove an entry whatever its status. Returns false when absent.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    pub fn pending(&self) -> Vec<&Contribution> {
        self.entries
            .iter()
            .filter(|e| e.status == Status::Pending)
            .collect()
    }

    pub fn published(&self) -> Vec<&Contribution> {
        self.entries
            .iter()
            .filter(|e| e.status == Status::Published)
            .collect()
    }
}

/// The feedback collection. Same envelope as [`ContributionLog`], no status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackLog {
    pub version: u32,
    #[serde(default)]
    pub entries: Vec<FeedbackEntry>,
}

impl Default for FeedbackLog {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedbackLog {
    pub fn new() -> Self {
        Self {
            version: LOG_VERSION,
            entries: Vec::new(),
        }
    }

    pub fn add(&mut self, content: &str) -> FeedbackEntry {
        let entry = FeedbackEntry {
            id: Uuid::new_v4().to_string(),
            content: content.to_string(),
            created_at: Utc::now(),
        };
        self.entries.push(entry.clone());
        entry
    }

    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }
}
