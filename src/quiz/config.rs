use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Sentinel transition target marking the end of the questionnaire.
pub const END_NODE: &str = "END";

/// The built-in question table shipped with the binary.
const DEFAULT_TABLE_YAML: &str = include_str!("questions.yaml");

/// A full question table: the designated start node plus every node keyed
/// by its id.
///
/// Example YAML:
/// ```yaml
/// start: academicPressure
/// nodes:
///   academicPressure:
///     question: "How would you rate the academic pressure?"
///     section: "Your Academic Life"
///     options: ["Low", "High"]
///     next:
///       "Low": workload
///       "High": sourceOfPressure
///   sourceOfPressure:
///     question: "Where is that pressure coming from?"
///     section: "Your Academic Life"
///     options: ["Myself", "Family"]
///     next: workload
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct NodeTable {
    /// Id of the first question presented.
    pub start: String,

    /// All questions, keyed by node id.
    pub nodes: BTreeMap<String, QuizNode>,
}

/// One question plus its transition rule.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct QuizNode {
    /// Prompt text shown to the user.
    pub question: String,

    /// Section heading this question belongs to.
    pub section: String,

    /// Ordered answer options. Answers outside this list are a UI concern;
    /// the engine only sees listed options.
    pub options: Vec<String>,

    /// Where to go after this question is answered.
    pub next: Transition,
}

/// Transition rule: either a single unconditional target, or a map from
/// answer text to target. Targets are node ids or the `END` sentinel.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Transition {
    To(String),
    ByAnswer(BTreeMap<String, String>),
}

impl NodeTable {
    pub fn get(&self, id: &str) -> Option<&QuizNode> {
        self.nodes.get(id)
    }
}

/// Parse the built-in question table.
///
/// The embedded YAML is part of the binary, so a parse failure here is a
/// packaging bug rather than a user error.
pub fn default_table() -> Result<NodeTable> {
    serde_saphyr::from_str(DEFAULT_TABLE_YAML).context("Failed to parse built-in question table")
}

/// Load a question table from a YAML file.
///
/// # Errors
///
/// Returns an error if the file does not exist, cannot be read, or is not
/// valid YAML. Graph-level consistency is checked separately by
/// [`crate::quiz::validate_table`].
pub fn load_table(path: &Path) -> Result<NodeTable> {
    if !path.exists() {
        anyhow::bail!("Question table not found at {}", path.display());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read question table at {}", path.display()))?;

    let table: NodeTable = serde_saphyr::from_str(&content)
        .with_context(|| format!("Failed to parse question table: invalid YAML in {}", path.display()))?;

    Ok(table)
}
