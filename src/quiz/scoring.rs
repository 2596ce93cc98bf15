use std::collections::BTreeMap;

/// Accumulated answers for one traversal, keyed by node id. Keys exist only
/// for questions actually visited; a missing key scores zero.
pub type AnswerSet = BTreeMap<String, String>;

/// Totals at or above this are classified High.
pub const HIGH_THRESHOLD: i32 = 28;
/// Totals at or above this (but below [`HIGH_THRESHOLD`]) are Moderate.
pub const MODERATE_THRESHOLD: i32 = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    pub fn from_total(total: i32) -> Self {
        if total >= HIGH_THRESHOLD {
            RiskLevel::High
        } else if total >= MODERATE_THRESHOLD {
            RiskLevel::Moderate
        } else {
            RiskLevel::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low Risk",
            RiskLevel::Moderate => "Moderate Risk",
            RiskLevel::High => "High Risk",
        }
    }
}

/// One factor's contribution to the total, for the verbose breakdown.
#[derive(Debug, Clone)]
pub struct ScoreContribution {
    pub label: String, // e.g. "Interest loss", "Burnout"
    pub points: i32,
}

#[derive(Debug, Clone)]
pub struct RiskAssessment {
    pub total: i32,
    pub level: RiskLevel,
    pub contributions: Vec<ScoreContribution>,
}

/// PHQ-style frequency scale shared by the four symptom questions.
fn frequency_points(answer: &str) -> i32 {
    match answer {
        "Several days" => 1,
        "More than half the days" => 2,
        "Nearly every day" => 3,
        _ => 0, // "Not at all", unanswered
    }
}

/// Burnout has its own five-step scale.
fn burnout_points(answer: &str) -> i32 {
    match answer {
        "A few times" => 1,
        "About once a week" => 2,
        "Multiple times a week" => 3,
        "Nearly every day" => 4,
        _ => 0,
    }
}

/// Classify an answer set into a risk level via a fixed weighted sum.
///
/// Deterministic and pure: the same answers always give the same
/// assessment. The symptom questions contribute scaled frequency points;
/// a handful of specific answers elsewhere add flat bonuses. Unanswered
/// questions contribute nothing.
pub fn score(answers: &AnswerSet) -> RiskAssessment {
    let get = |key: &str| answers.get(key).map(String::as_str).unwrap_or("");

    let mut contributions = Vec::new();
    let mut push = |label: &str, points: i32| {
        if points > 0 {
            contributions.push(ScoreContribution {
                label: label.to_string(),
                points,
            });
        }
    };

    push("Interest loss", frequency_points(get("interestLoss")) * 3);
    push("Feeling down", frequency_points(get("feelingDown")) * 3);
    push("Anxiety", frequency_points(get("anxiety")) * 2);
    push("Worrying", frequency_points(get("worrying")) * 2);
    push("Burnout", burnout_points(get("burnoutFeeling")));

    if get("panicAttack") == "Yes" {
        push("Panic attack", 4);
    }
    if get("futureAnxiety") == "A lot" {
        push("Future anxiety", 3);
    }
    if get("energyLevels") == "Very low/Exhausted" {
        push("Low energy", 2);
    }
    if get("academicPressure") == "Very High" {
        push("Academic pressure", 2);
    }
    if get("workload") == "Overwhelming" {
        push("Workload", 2);
    }
    if get("socialSatisfaction") == "Very Dissatisfied" {
        push("Social dissatisfaction", 2);
    }
    if get("supportSystem").contains("No") {
        push("No support system", 3);
    }
    drop(push);

    let total = contributions.iter().map(|c| c.points).sum();
    RiskAssessment {
        total,
        level: RiskLevel::from_total(total),
        contributions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers(pairs: &[(&str, &str)]) -> AnswerSet {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_empty_answers_score_zero() {
        let result = score(&AnswerSet::new());
        assert_eq!(result.total, 0);
        assert_eq!(result.level, RiskLevel::Low);
        assert!(result.contributions.is_empty());
    }

    #[test]
    fn test_scoring_is_deterministic() {
        let set = answers(&[
            ("interestLoss", "Several days"),
            ("panicAttack", "Yes"),
            ("workload", "Overwhelming"),
        ]);
        let a = score(&set);
        let b = score(&set);
        assert_eq!(a.total, b.total);
        assert_eq!(a.level, b.level);
    }

    #[test]
    fn test_threshold_boundaries() {
        assert_eq!(RiskLevel::from_total(14), RiskLevel::Low);
        assert_eq!(RiskLevel::from_total(15), RiskLevel::Moderate);
        assert_eq!(RiskLevel::from_total(27), RiskLevel::Moderate);
        assert_eq!(RiskLevel::from_total(28), RiskLevel::High);
    }

    #[test]
    fn test_high_risk_scenario() {
        // 9 + 9 + 4 + 3 + 4 = 29
        let set = answers(&[
            ("interestLoss", "Nearly every day"),
            ("feelingDown", "Nearly every day"),
            ("panicAttack", "Yes"),
            ("supportSystem", "No"),
            ("burnoutFeeling", "Nearly every day"),
        ]);
        let result = score(&set);
        assert!(result.total >= HIGH_THRESHOLD, "total was {}", result.total);
        assert_eq!(result.level, RiskLevel::High);
    }

    #[test]
    fn test_low_risk_scenario() {
        let set = answers(&[
            ("interestLoss", "Not at all"),
            ("feelingDown", "Not at all"),
            ("panicAttack", "No"),
        ]);
        let result = score(&set);
        assert_eq!(result.total, 0);
        assert_eq!(result.level, RiskLevel::Low);
    }

    #[test]
    fn test_moderate_risk_at_exact_threshold() {
        // 9 + 6 = 15, right on the Moderate boundary
        let set = answers(&[
            ("interestLoss", "Nearly every day"),
            ("anxiety", "Nearly every day"),
        ]);
        let result = score(&set);
        assert_eq!(result.total, MODERATE_THRESHOLD);
        assert_eq!(result.level, RiskLevel::Moderate);
    }

    #[test]
    fn test_symptom_weights() {
        let set = answers(&[("interestLoss", "More than half the days")]);
        assert_eq!(score(&set).total, 6); // 2 * 3

        let set = answers(&[("worrying", "More than half the days")]);
        assert_eq!(score(&set).total, 4); // 2 * 2
    }

    #[test]
    fn test_support_system_variants_all_count() {
        // Both "no support" phrasings from the canonical table add the bonus
        for answer in ["Not really", "No, I handle things on my own"] {
            let set = answers(&[("supportSystem", answer)]);
            assert_eq!(score(&set).total, 3, "answer: {}", answer);
        }
        let set = answers(&[("supportSystem", "Yes, definitely")]);
        assert_eq!(score(&set).total, 0);
    }

    #[test]
    fn test_flat_bonuses_accumulate() {
        let set = answers(&[
            ("academicPressure", "Very High"),
            ("workload", "Overwhelming"),
            ("socialSatisfaction", "Very Dissatisfied"),
            ("futureAnxiety", "A lot"),
        ]);
        let result = score(&set);
        assert_eq!(result.total, 9); // 2 + 2 + 2 + 3
        assert_eq!(result.contributions.len(), 4);
    }

    #[test]
    fn test_unmatched_answers_contribute_nothing() {
        let set = answers(&[
            ("interestLoss", "something unexpected"),
            ("workload", "A bit much"),
            ("panicAttack", "No"),
        ]);
        assert_eq!(score(&set).total, 0);
    }

    #[test]
    fn test_breakdown_matches_total() {
        let set = answers(&[
            ("feelingDown", "Several days"),
            ("burnoutFeeling", "About once a week"),
            ("panicAttack", "Yes"),
        ]);
        let result = score(&set);
        let sum: i32 = result.contributions.iter().map(|c| c.points).sum();
        assert_eq!(sum, result.total);
        assert_eq!(result.total, 9); // 3 + 2 + 4
    }
}
