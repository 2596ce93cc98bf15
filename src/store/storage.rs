use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use super::types::{ContributionLog, FeedbackLog, LOG_VERSION};

/// Get the default data directory path (~/.config/healer/)
pub fn get_data_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Could not determine home directory");
    home.join(".config").join("healer")
}

pub fn contributions_path(dir: &Path) -> PathBuf {
    dir.join("contributions.json")
}

pub fn feedback_path(dir: &Path) -> PathBuf {
    dir.join("feedback.json")
}

/// Ensure the data directory exists
pub fn ensure_data_dir(dir: &Path) -> Result<()> {
    if !dir.exists() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create data directory at {}", dir.display()))?;
    }
    Ok(())
}

/// Load the contribution collection from a JSON file.
///
/// A missing file is a new, empty collection. A file that exists but does
/// not parse fails closed: the error is reported on stderr and an empty
/// collection is returned, so a mangled wall file never takes the rest of
/// the tool down. An unsupported version is an error.
pub fn load_contributions(path: &Path) -> Result<ContributionLog> {
    load_log(path, "contribution log")
}

/// Load the feedback collection. Same rules as [`load_contributions`].
pub fn load_feedback(path: &Path) -> Result<FeedbackLog> {
    load_log(path, "feedback log")
}

/// Save the contribution collection atomically.
pub fn save_contributions(path: &Path, log: &ContributionLog) -> Result<()> {
    save_log(path, log, "contribution log")
}

/// Save the feedback collection atomically.
pub fn save_feedback_log(path: &Path, log: &FeedbackLog) -> Result<()> {
    save_log(path, log, "feedback log")
}

trait Versioned {
    fn version(&self) -> u32;
}

impl Versioned for ContributionLog {
    fn version(&self) -> u32 {
        self.version
    }
}

impl Versioned for FeedbackLog {
    fn version(&self) -> u32 {
        self.version
    }
}

fn load_log<T>(path: &Path, what: &str) -> Result<T>
where
    T: DeserializeOwned + Default + Versioned,
{
    if !path.exists() {
        return Ok(T::default());
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {} at {}", what, path.display()))?;

    let log: T = match serde_json::from_str(&data) {
        Ok(log) => log,
        Err(e) => {
            eprintln!(
                "Warning: {} at {} is corrupt ({}); starting from an empty collection",
                what,
                path.display(),
                e
            );
            return Ok(T::default());
        }
    };

    if log.version() != LOG_VERSION {
        anyhow::bail!("Unsupported {} version: {}", what, log.version());
    }

    Ok(log)
}

/// Uses atomic-write-file so the file is never left half-written.
/// Creates the data directory if it doesn't exist.
fn save_log<T: Serialize>(path: &Path, log: &T, what: &str) -> Result<()> {
    if let Some(dir) = path.parent() {
        ensure_data_dir(dir)?;
    }

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;

    serde_json::to_writer_pretty(&mut file, log)
        .with_context(|| format!("Failed to serialize {}", what))?;

    file.commit()
        .with_context(|| format!("Failed to save {}", what))?;

    Ok(())
}
