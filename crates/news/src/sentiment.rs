//! Headline sentiment tagging from a small word lexicon.

use agora_core::Sentiment;

const POSITIVE: &[&str] = &[
    "beat", "beats", "boom", "bullish", "gain", "gains", "growth", "jump", "jumps", "optimism",
    "profit", "profits", "rally", "rallies", "rebound", "record", "rise", "rises", "soar",
    "soars", "surge", "surges", "upgrade",
];

const NEGATIVE: &[&str] = &[
    "bearish", "crash", "decline", "declines", "downgrade", "drop", "drops", "fall", "falls",
    "fear", "fears", "layoffs", "loss", "losses", "miss", "misses", "plunge", "plunges",
    "recession", "selloff", "slump", "slumps",
];

/// Tag a headline by counting lexicon hits
///
/// More positive than negative words is positive, the reverse is negative,
/// a tie (including no hits) is neutral.
pub fn classify_sentiment(headline: &str) -> Sentiment {
    let lowered = headline.to_lowercase();
    let mut score = 0i32;

    for word in lowered.split(|c: char| !c.is_alphanumeric()) {
        if POSITIVE.contains(&word) {
            score += 1;
        } else if NEGATIVE.contains(&word) {
            score -= 1;
        }
    }

    match score {
        s if s > 0 => Sentiment::Positive,
        s if s < 0 => Sentiment::Negative,
        _ => Sentiment::Neutral,
    }
}
