use anyhow::{anyhow, Result};

use super::config::{NodeTable, QuizNode};
use super::engine::{advance, Step};
use super::scoring::AnswerSet;

/// State for one traversal of the question graph: the current node, the
/// visited-node history (for back-navigation), and the answers collected
/// so far.
#[derive(Debug, Clone)]
pub struct QuizSession<'a> {
    table: &'a NodeTable,
    /// None once the traversal reached END.
    current: Option<String>,
    history: Vec<String>,
    answers: AnswerSet,
}

impl<'a> QuizSession<'a> {
    pub fn new(table: &'a NodeTable) -> Self {
        Self {
            table,
            current: Some(table.start.clone()),
            history: Vec::new(),
            answers: AnswerSet::new(),
        }
    }

    /// The question currently being asked, or None when complete.
    pub fn current(&self) -> Option<&QuizNode> {
        self.current.as_deref().and_then(|id| self.table.get(id))
    }

    pub fn current_id(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// 1-based position shown in the progress line.
    pub fn question_number(&self) -> usize {
        self.history.len() + 1
    }

    pub fn is_complete(&self) -> bool {
        self.current.is_none()
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    /// Record `answer` for the current question and move to the next one.
    ///
    /// Re-answering after going back overwrites the earlier answer; stale
    /// answers from abandoned branches stay in the set, where they either
    /// match no weight table entry or are overwritten on revisit.
    pub fn answer(&mut self, answer: &str) -> Result<Step> {
        let id = self
            .current
            .clone()
            .ok_or_else(|| anyhow!("Quiz is already complete"))?;

        let step = advance(self.table, &id, answer)?;
        self.answers.insert(id.clone(), answer.to_string());
        self.history.push(id);
        self.current = match &step {
            Step::Next(next) => Some(next.clone()),
            Step::Complete => None,
        };
        Ok(step)
    }

    /// Return to the previously asked question. No-op at the start.
    pub fn back(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => {
                self.current = Some(previous);
                true
            }
            None => false,
        }
    }
}
