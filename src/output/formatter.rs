use chrono::{DateTime, Utc};
use owo_colors::OwoColorize;
use std::io::IsTerminal;
use terminal_size::{terminal_size, Width};

use crate::quiz::{RiskAssessment, RiskLevel};
use crate::store::{Contribution, ContributionKind, FeedbackEntry};

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format the positivity wall: one block per published contribution.
pub fn format_wall(entries: &[Contribution], use_colors: bool) -> String {
    if entries.is_empty() {
        return "The wall is empty. Be the first to share something uplifting.".to_string();
    }

    entries
        .iter()
        .map(|entry| format_wall_entry(entry, use_colors))
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn format_wall_entry(entry: &Contribution, use_colors: bool) -> String {
    let content = truncate_content(&entry.content, content_width());
    if use_colors {
        format!(
            "\"{}\"\n  - {}, {} ({})",
            content.bold(),
            entry.name.cyan(),
            kind_label(entry.kind),
            format_date(entry.created_at)
        )
    } else {
        format!(
            "\"{}\"\n  - {}, {} ({})",
            content,
            entry.name,
            kind_label(entry.kind),
            format_date(entry.created_at)
        )
    }
}

/// Format the moderation queue: one line per pending contribution, id first
/// so it can be passed straight to `approve`/`remove`.
pub fn format_queue(entries: &[Contribution], use_colors: bool) -> String {
    if entries.is_empty() {
        return "Nothing waiting for moderation.".to_string();
    }

    entries
        .iter()
        .map(|entry| {
            let content = truncate_content(&entry.content, content_width());
            if use_colors {
                format!(
                    "{} | {} | {} | {}",
                    entry.id.yellow(),
                    kind_label(entry.kind),
                    entry.name.cyan(),
                    content
                )
            } else {
                format!(
                    "{} | {} | {} | {}",
                    entry.id,
                    kind_label(entry.kind),
                    entry.name,
                    content
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_feedback(entries: &[FeedbackEntry], use_colors: bool) -> String {
    if entries.is_empty() {
        return "No feedback yet.".to_string();
    }

    entries
        .iter()
        .map(|entry| {
            let content = truncate_content(&entry.content, content_width());
            if use_colors {
                format!(
                    "{} | {} | {}",
                    entry.id.yellow(),
                    format_date(entry.created_at),
                    content
                )
            } else {
                format!(
                    "{} | {} | {}",
                    entry.id,
                    format_date(entry.created_at),
                    content
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format a finished assessment. The level gets a traffic-light color; the
/// raw total only shows in the verbose breakdown.
pub fn format_assessment(assessment: &RiskAssessment, use_colors: bool) -> String {
    let label = assessment.level.label();
    if use_colors {
        let colored = match assessment.level {
            RiskLevel::Low => label.green().to_string(),
            RiskLevel::Moderate => label.yellow().to_string(),
            RiskLevel::High => label.red().bold().to_string(),
        };
        format!("Result: {}", colored)
    } else {
        format!("Result: {}", label)
    }
}

/// Per-factor breakdown for verbose mode.
pub fn format_breakdown(assessment: &RiskAssessment) -> String {
    let mut lines: Vec<String> = assessment
        .contributions
        .iter()
        .map(|c| format!("  {:>3}  {}", format!("+{}", c.points), c.label))
        .collect();
    lines.push(format!("  Total: {}", assessment.total));
    lines.join("\n")
}

fn kind_label(kind: ContributionKind) -> &'static str {
    match kind {
        ContributionKind::Quote => "quote",
        ContributionKind::Story => "story",
    }
}

fn format_date(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d").to_string()
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Room left for content after ids, separators and margins.
fn content_width() -> usize {
    match get_terminal_width() {
        Some(w) if w > 50 => w - 50,
        Some(_) => 30,
        None => usize::MAX,
    }
}

/// Truncate content to fit available width, accounting for Unicode
fn truncate_content(content: &str, max_width: usize) -> String {
    let chars: Vec<char> = content.chars().collect();
    if chars.len() <= max_width {
        content.to_string()
    } else {
        let truncated: String = chars[..max_width.saturating_sub(1)].iter().collect();
        format!("{}…", truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::{score, AnswerSet};
    use crate::store::Status;

    fn sample_contribution(content: &str, status: Status) -> Contribution {
        Contribution {
            id: "test-id".to_string(),
            name: "Alex".to_string(),
            content: content.to_string(),
            kind: ContributionKind::Quote,
            status,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_empty_wall_message() {
        let out = format_wall(&[], false);
        assert!(out.contains("empty"));
    }

    #[test]
    fn test_wall_entry_plain() {
        let entries = vec![sample_contribution("Keep going", Status::Published)];
        let out = format_wall(&entries, false);
        assert!(out.contains("\"Keep going\""));
        assert!(out.contains("Alex"));
        assert!(out.contains("quote"));
    }

    #[test]
    fn test_queue_contains_id() {
        let entries = vec![sample_contribution("Needs review", Status::Pending)];
        let out = format_queue(&entries, false);
        assert!(out.starts_with("test-id | "));
    }

    #[test]
    fn test_empty_queue_message() {
        assert!(format_queue(&[], false).contains("Nothing waiting"));
    }

    #[test]
    fn test_assessment_plain_label() {
        let assessment = score(&AnswerSet::new());
        let out = format_assessment(&assessment, false);
        assert_eq!(out, "Result: Low Risk");
    }

    #[test]
    fn test_breakdown_lists_factors_and_total() {
        let mut set = AnswerSet::new();
        set.insert("panicAttack".to_string(), "Yes".to_string());
        set.insert("workload".to_string(), "Overwhelming".to_string());
        let assessment = score(&set);

        let out = format_breakdown(&assessment);
        assert!(out.contains("+4  Panic attack"));
        assert!(out.contains("+2  Workload"));
        assert!(out.contains("Total: 6"));
    }

    #[test]
    fn test_truncate_short_content_unchanged() {
        assert_eq!(truncate_content("short", 20), "short");
    }

    #[test]
    fn test_truncate_long_content_adds_ellipsis() {
        let out = truncate_content("abcdefghij", 5);
        assert_eq!(out.chars().count(), 5);
        assert!(out.ends_with('…'));
    }
}
