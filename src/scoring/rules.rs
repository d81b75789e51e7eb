use std::fmt;

/// Every non-blank title starts here before rule adjustments.
pub const BASELINE_SCORE: i32 = 5;
pub const MAX_SCORE: i32 = 10;

/// Past-tense achievement verbs. Matched by plain containment, so
/// "made" also fires inside "homemade" — kept deliberately loose.
const RESULT_VERBS: [&str; 9] = [
    "built", "launched", "increased", "saved", "moved", "created", "grew", "made", "solved",
];

/// Question words/phrases checked as prefixes of the lowercased title.
const QUESTION_OPENERS: [&str; 4] = ["how", "why", "what", "should i"];

/// Hedging vocabulary that weakens a declarative claim.
const HEDGING_WORDS: [&str; 6] = ["think", "believe", "consider", "hope", "might", "maybe"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    Positive,
    Negative,
    Neutral,
}

impl Polarity {
    fn marker(self) -> &'static str {
        match self {
            Polarity::Positive => "✅",
            Polarity::Negative => "❌",
            Polarity::Neutral => "📝",
        }
    }
}

/// One annotation explaining why a rule affected the score, or the
/// overall verdict synthesized from the final score band.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub polarity: Polarity,
    pub text: String,
}

impl Feedback {
    fn positive(text: &str) -> Self {
        Self {
            polarity: Polarity::Positive,
            text: text.to_string(),
        }
    }

    fn negative(text: &str) -> Self {
        Self {
            polarity: Polarity::Negative,
            text: text.to_string(),
        }
    }

    fn neutral(text: &str) -> Self {
        Self {
            polarity: Polarity::Neutral,
            text: text.to_string(),
        }
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.polarity.marker(), self.text)
    }
}

/// Result of scoring one title: a clamped 0–10 score and the ordered
/// feedback list, verdict entry first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleAnalysis {
    pub score: u8,
    pub feedback: Vec<Feedback>,
}

/// Score a headline for narrative strength.
///
/// Pure and total: any string is a valid input, blank input included.
/// Every rule is evaluated independently; none short-circuits another,
/// so a title can collect positive and negative adjustments at once.
pub fn score_title(title: &str) -> TitleAnalysis {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return TitleAnalysis {
            score: 0,
            feedback: vec![Feedback::neutral("Empty title: nothing to analyze.")],
        };
    }

    let lower = trimmed.to_lowercase();
    let mut score = BASELINE_SCORE;
    let mut feedback = Vec::new();

    if starts_with_word(&lower, "i") || starts_with_word(&lower, "we") {
        score += 2;
        feedback.push(Feedback::positive(
            "First-person opener: frames the title as a personal story.",
        ));
    }

    if lower.chars().any(|c| c.is_ascii_digit()) {
        score += 2;
        feedback.push(Feedback::positive(
            "Contains a number: makes the outcome concrete and credible.",
        ));
    }

    if RESULT_VERBS.iter().any(|verb| lower.contains(verb)) {
        score += 1;
        feedback.push(Feedback::positive(
            "Result-oriented verb: signals a story with an outcome.",
        ));
    }

    if QUESTION_OPENERS
        .iter()
        .any(|opener| lower.starts_with(opener))
    {
        score -= 3;
        feedback.push(Feedback::negative(
            "Question opener: reads as a help-seeking topic rather than a declarative story; consider rewriting as a statement.",
        ));
    }

    if HEDGING_WORDS.iter().any(|word| lower.contains(word)) {
        score -= 2;
        feedback.push(Feedback::negative(
            "Speculative vocabulary: hedging language weakens the claim.",
        ));
    }

    let score = score.clamp(0, MAX_SCORE);

    if feedback.is_empty() {
        feedback.push(Feedback::neutral("Structurally neutral title."));
    }

    feedback.insert(0, verdict(score));

    TitleAnalysis {
        score: u8::try_from(score).unwrap_or(0),
        feedback,
    }
}

/// Prefix match on a whole word: "we built" starts with "we", "went" does not.
fn starts_with_word(text: &str, word: &str) -> bool {
    text.strip_prefix(word)
        .is_some_and(|rest| rest.starts_with(char::is_whitespace))
}

fn verdict(score: i32) -> Feedback {
    if score >= 8 {
        Feedback::positive("Overall: strong narrative pull and persuasive power.")
    } else if score >= 6 {
        Feedback::positive("Overall: good narrative quality with room to optimize.")
    } else {
        Feedback::negative("Overall: leans topical; add narrative elements.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_title_scores_zero_with_single_entry() {
        let analysis = score_title("");
        assert_eq!(analysis.score, 0);
        assert_eq!(analysis.feedback.len(), 1);
        assert_eq!(analysis.feedback[0].polarity, Polarity::Neutral);
    }

    #[test]
    fn whitespace_only_title_scores_zero() {
        let analysis = score_title("   ");
        assert_eq!(analysis.score, 0);
        assert_eq!(analysis.feedback.len(), 1);
    }

    #[test]
    fn all_positive_rules_clamp_to_ten() {
        let analysis = score_title("I built a tool that saved 10 hours a week");
        assert_eq!(analysis.score, 10);

        let positives = analysis
            .feedback
            .iter()
            .filter(|f| f.polarity == Polarity::Positive)
            .count();
        // Verdict plus first-person, digit, and result-verb entries.
        assert_eq!(positives, 4);
        assert!(
            analysis
                .feedback
                .iter()
                .all(|f| f.polarity != Polarity::Negative)
        );
    }

    #[test]
    fn question_opener_scores_two() {
        let analysis = score_title("How should I price my SaaS?");
        assert_eq!(analysis.score, 2);
        assert!(analysis.feedback[0].text.contains("leans topical"));
        assert!(
            analysis
                .feedback
                .iter()
                .any(|f| f.polarity == Polarity::Negative && f.text.contains("Question opener"))
        );
    }

    #[test]
    fn hedging_cancels_first_person_bonus() {
        let analysis = score_title("We think this might work");
        assert_eq!(analysis.score, 5);
        // Band 5 < 6 gives the cautionary verdict.
        assert!(analysis.feedback[0].text.contains("leans topical"));
        assert!(
            analysis
                .feedback
                .iter()
                .any(|f| f.polarity == Polarity::Positive && f.text.contains("First-person"))
        );
        assert!(
            analysis
                .feedback
                .iter()
                .any(|f| f.polarity == Polarity::Negative && f.text.contains("hedging"))
        );
    }

    #[test]
    fn neutral_title_keeps_baseline_and_gets_fallback_entry() {
        let analysis = score_title("This is a title");
        assert_eq!(analysis.score, 5);
        assert_eq!(analysis.feedback.len(), 2);
        assert_eq!(analysis.feedback[0].polarity, Polarity::Negative);
        assert_eq!(analysis.feedback[1].text, "Structurally neutral title.");
    }

    #[test]
    fn score_never_leaves_range() {
        let inputs = [
            "",
            "   ",
            "I built and launched and saved 100 things we created",
            "How why what should i maybe think believe hope",
            "plain words only",
            "数字 42 in unicode text",
        ];
        for input in inputs {
            let analysis = score_title(input);
            assert!(analysis.score <= 10, "out of range for {input:?}");
        }
    }

    #[test]
    fn all_negative_rules_clamp_at_zero() {
        // Question opener (-3) and hedging (-2) from baseline 5.
        let analysis = score_title("how maybe");
        assert_eq!(analysis.score, 0);
    }

    #[test]
    fn scoring_is_idempotent() {
        let input = "We grew revenue 3x after one change";
        assert_eq!(score_title(input), score_title(input));
    }

    #[test]
    fn first_person_needs_word_boundary() {
        let analysis = score_title("went to market");
        assert!(
            analysis
                .feedback
                .iter()
                .all(|f| !f.text.contains("First-person"))
        );
    }

    #[test]
    fn case_insensitive_matching() {
        let upper = score_title("WE LAUNCHED IN 3 DAYS");
        let lower = score_title("we launched in 3 days");
        assert_eq!(upper.score, lower.score);
    }

    #[test]
    fn question_and_first_person_are_additive() {
        // The opener here is "how", so the first-person rule stays quiet
        // while the question rule and the result verb both fire.
        let analysis = score_title("How I built this");
        assert_eq!(analysis.score, 3);
        assert!(
            analysis
                .feedback
                .iter()
                .any(|f| f.text.contains("Question opener"))
        );
    }

    #[test]
    fn result_verb_fires_once_for_many_verbs() {
        let single = score_title("Team launched today");
        let many = score_title("Team launched and built and solved today");
        assert_eq!(single.score, many.score);
    }

    #[test]
    fn verdict_band_moderate() {
        // First-person (+2) only: 7 lands in the moderate band.
        let analysis = score_title("We shipped a new dashboard");
        assert_eq!(analysis.score, 7);
        assert!(analysis.feedback[0].text.contains("room to optimize"));
    }

    #[test]
    fn verdict_is_always_first() {
        for input in ["I saved 10 hours", "how do I", "plain title"] {
            let analysis = score_title(input);
            assert!(analysis.feedback[0].text.starts_with("Overall:"));
        }
    }

    #[test]
    fn feedback_displays_with_polarity_marker() {
        let entry = Feedback {
            polarity: Polarity::Positive,
            text: "Contains a number.".to_string(),
        };
        assert_eq!(entry.to_string(), "✅ Contains a number.");
    }
}
