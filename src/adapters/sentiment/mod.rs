//! Wordlist sentiment probe.
//!
//! In-process implementation of the sentiment port: counts positive and
//! negative cue words and labels the utterance by majority. Keeps the
//! service self-contained; anything heavier plugs in behind the same port.

use async_trait::async_trait;

use crate::domain::{Mood, MoodLabel};
use crate::ports::{SentimentError, SentimentProbe};

const POSITIVE_CUES: &[&str] = &[
    "love", "like", "great", "good", "amazing", "wonderful", "perfect", "happy", "excellent",
    "thanks", "thank",
];

const NEGATIVE_CUES: &[&str] = &[
    "hate", "bad", "terrible", "awful", "angry", "worst", "horrible", "disappointed", "annoyed",
    "broken", "refund",
];

/// Sentiment probe backed by fixed cue-word lists.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordlistSentimentProbe;

impl WordlistSentimentProbe {
    /// Creates the probe.
    pub fn new() -> Self {
        Self
    }

    fn classify(utterance: &str) -> Mood {
        let lowered = utterance.to_lowercase();
        let positive = POSITIVE_CUES
            .iter()
            .filter(|cue| lowered.contains(**cue))
            .count();
        let negative = NEGATIVE_CUES
            .iter()
            .filter(|cue| lowered.contains(**cue))
            .count();

        let total = positive + negative;
        if total == 0 || positive == negative {
            return Mood::new(MoodLabel::Neutral, 0.5);
        }

        let margin = positive.abs_diff(negative) as f32 / total as f32;
        let score = 0.5 + margin / 2.0;
        if positive > negative {
            Mood::new(MoodLabel::Positive, score)
        } else {
            Mood::new(MoodLabel::Negative, score)
        }
    }
}

#[async_trait]
impl SentimentProbe for WordlistSentimentProbe {
    async fn analyze(&self, utterance: &str) -> Result<Mood, SentimentError> {
        Ok(Self::classify(utterance))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn positive_cues_yield_positive_mood() {
        let mood = WordlistSentimentProbe::new()
            .analyze("I love this cream, it is great")
            .await
            .unwrap();
        assert_eq!(mood.label, MoodLabel::Positive);
        assert!(mood.score > 0.5);
    }

    #[tokio::test]
    async fn negative_cues_yield_negative_mood() {
        let mood = WordlistSentimentProbe::new()
            .analyze("this is terrible, I want a refund")
            .await
            .unwrap();
        assert_eq!(mood.label, MoodLabel::Negative);
    }

    #[tokio::test]
    async fn no_cues_yield_neutral_mood() {
        let mood = WordlistSentimentProbe::new()
            .analyze("what products do you have")
            .await
            .unwrap();
        assert_eq!(mood.label, MoodLabel::Neutral);
        assert_eq!(mood.score, 0.5);
    }

    #[tokio::test]
    async fn balanced_cues_yield_neutral_mood() {
        let mood = WordlistSentimentProbe::new()
            .analyze("good cream but bad smell")
            .await
            .unwrap();
        assert_eq!(mood.label, MoodLabel::Neutral);
    }

    #[test]
    fn score_stays_in_unit_interval() {
        for text in ["love love love", "hate", "great awful", ""] {
            let mood = WordlistSentimentProbe::classify(text);
            assert!((0.0..=1.0).contains(&mood.score));
        }
    }
}
