use super::config::{NodeTable, Transition, END_NODE};

/// Validate a question table at startup.
/// Returns all problems at once (not just the first).
///
/// A table that passes is safe to traverse: every listed option on every
/// node resolves to a present node or to `END`, so [`super::advance`] can
/// only fail on inputs that were never in the table to begin with.
pub fn validate_table(table: &NodeTable) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if !table.nodes.contains_key(&table.start) {
        errors.push(format!("start: node '{}' is not defined", table.start));
    }

    for (id, node) in &table.nodes {
        if node.options.is_empty() {
            errors.push(format!("nodes.{}.options: must list at least one answer", id));
        }

        match &node.next {
            Transition::To(target) => {
                if !resolves(table, target) {
                    errors.push(format!(
                        "nodes.{}.next: target '{}' is not defined",
                        id, target
                    ));
                }
            }
            Transition::ByAnswer(branches) => {
                // Exhaustive both ways: every option branches somewhere, and
                // every branch key is a listed option.
                for option in &node.options {
                    if !branches.contains_key(option) {
                        errors.push(format!(
                            "nodes.{}.next: no branch for option '{}'",
                            id, option
                        ));
                    }
                }
                for (answer, target) in branches {
                    if !node.options.iter().any(|o| o == answer) {
                        errors.push(format!(
                            "nodes.{}.next: branch key '{}' is not a listed option",
                            id, answer
                        ));
                    }
                    if !resolves(table, target) {
                        errors.push(format!(
                            "nodes.{}.next['{}']: target '{}' is not defined",
                            id, answer, target
                        ));
                    }
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn resolves(table: &NodeTable, target: &str) -> bool {
    target == END_NODE || table.nodes.contains_key(target)
}
