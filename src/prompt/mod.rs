//! Prompt builders and response parsing for the AI critique and the
//! idea generator, plus the static fallbacks used when the remote
//! service is unavailable.

pub const CRITIQUE_FALLBACK: &str =
    "The AI critique service is currently unavailable. Please try again later.";

pub const IDEAS_FALLBACK: [&str; 3] = [
    "The AI idea service is currently unavailable",
    "Check your network connection or try again in a moment",
    "Contact support if the problem persists",
];

/// Prompt for a short qualitative critique of one headline.
pub fn critique_prompt(title: &str) -> String {
    format!(
        "Act as a world-class copywriter reviewing a headline for Hacker News. \
         The headline is: \"{title}\". Based on the core principle of \"stories over topics\", \
         provide a brief, insightful analysis (max 50 words) covering one key strength \
         and one key area for improvement. Respond in raw text without any markdown formatting."
    )
}

/// Prompt for three story-driven headline ideas.
///
/// With a product description the ideas are grounded in it; without one
/// the model is asked for generic templates a founder could adapt.
pub fn ideas_prompt(description: Option<&str>) -> String {
    match description {
        Some(description) => format!(
            "Act as a viral headline generator for Hacker News. Based on the product \
             description: \"{description}\", generate 3 story-driven headline ideas. \
             Output exactly 3 lines of raw text, one headline per line, with no \
             numbering, formatting, or introductory sentences."
        ),
        None => "Act as a viral headline generator for Hacker News. Generate 3 generic but \
                 powerful story-driven headline templates that a startup founder could adapt. \
                 Output exactly 3 lines of raw text, one template per line, with no numbering, \
                 formatting, or introductory sentences."
            .to_string(),
    }
}

/// Split a raw completion into idea lines, dropping blanks.
pub fn parse_ideas(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}
