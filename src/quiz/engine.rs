use anyhow::{anyhow, Result};

use super::config::{NodeTable, Transition, END_NODE};

/// Outcome of answering one question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Id of the next question to present.
    Next(String),
    /// The questionnaire is finished; score the collected answers.
    Complete,
}

/// Resolve the question that follows `current_id` once `answer` is chosen.
///
/// Pure over its inputs: no side effects, same inputs always give the same
/// step. An unconditional rule ignores `answer`.
///
/// # Errors
///
/// An unknown node id, or a conditional rule with no branch for `answer`,
/// is a configuration bug. Both fail with an error naming the offending
/// node/answer; silently picking a default here would misclassify the
/// user's risk, so there is deliberately no fallback.
pub fn advance(table: &NodeTable, current_id: &str, answer: &str) -> Result<Step> {
    let node = table
        .get(current_id)
        .ok_or_else(|| anyhow!("Unknown question id '{}'", current_id))?;

    let target = match &node.next {
        Transition::To(target) => target,
        Transition::ByAnswer(branches) => branches.get(answer).ok_or_else(|| {
            anyhow!(
                "Question '{}' has no branch for answer '{}'",
                current_id,
                answer
            )
        })?,
    };

    if target.as_str() == END_NODE {
        Ok(Step::Complete)
    } else {
        Ok(Step::Next(target.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::config::default_table;
    use crate::quiz::validation::validate_table;

    #[test]
    fn test_unconditional_advance() {
        let table = default_table().unwrap();
        // sourceOfPressure always goes to workload, whatever the answer
        let step = advance(&table, "sourceOfPressure", "From my family").unwrap();
        assert_eq!(step, Step::Next("workload".to_string()));
    }

    #[test]
    fn test_unconditional_ignores_answer() {
        let table = default_table().unwrap();
        let a = advance(&table, "courseSatisfaction", "Neutral").unwrap();
        let b = advance(&table, "courseSatisfaction", "Very Satisfied").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_conditional_branches_by_answer() {
        let table = default_table().unwrap();
        assert_eq!(
            advance(&table, "academicPressure", "Very High").unwrap(),
            Step::Next("sourceOfPressure".to_string())
        );
        assert_eq!(
            advance(&table, "academicPressure", "Low").unwrap(),
            Step::Next("workload".to_string())
        );
    }

    #[test]
    fn test_terminal_node_completes() {
        let table = default_table().unwrap();
        assert_eq!(
            advance(&table, "soughtTreatment", "No").unwrap(),
            Step::Complete
        );
    }

    #[test]
    fn test_unknown_node_fails() {
        let table = default_table().unwrap();
        let err = advance(&table, "ghost", "Yes").unwrap_err();
        assert!(err.to_string().contains("ghost"));
    }

    #[test]
    fn test_unmapped_answer_fails() {
        let table = default_table().unwrap();
        let err = advance(&table, "academicPressure", "Extremely High").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("academicPressure"));
        assert!(msg.contains("Extremely High"));
    }

    #[test]
    fn test_every_option_on_every_node_advances() {
        // Traversal closure over the whole canonical table: any listed
        // option leads to a present node or completion, never elsewhere.
        let table = default_table().unwrap();
        validate_table(&table).unwrap();

        for (id, node) in &table.nodes {
            for option in &node.options {
                match advance(&table, id, option).unwrap() {
                    Step::Next(next) => assert!(
                        table.get(&next).is_some(),
                        "node '{}' option '{}' led to missing node '{}'",
                        id,
                        option,
                        next
                    ),
                    Step::Complete => {}
                }
            }
        }
    }
}
