//! Claim classification engine.
//!
//! This is the mock stand-in for the real verification pipeline: keyword
//! substring matching over the lowercased claim text, fixed priority order,
//! first match wins. The future pipeline stages (entity extraction, web
//! search, classifier inference) are external collaborators this module
//! would call; none of them exist yet.

use std::sync::Arc;

use chrono::{DateTime, Local, SecondsFormat};
use rand::Rng;

use crate::models::{AnalysisResponse, Credibility, Source, Verdict};

/// Static model-version string reported by the health check.
pub const MODEL_VERSION: &str = "v1.0.0";

/// Inclusive bounds of the randomized confidence value.
pub const CONFIDENCE_MIN: u8 = 70;
pub const CONFIDENCE_MAX: u8 = 99;

/// Keywords checked first. Any hit forces a False verdict regardless of
/// what else the text contains.
const MISINFORMATION_KEYWORDS: &[&str] = &["fake", "scam"];

/// Keywords checked second, only when no misinformation keyword matched.
const OFFICIAL_KEYWORDS: &[&str] = &["verified", "official"];

const SUMMARY_FALSE: &str = "Language patterns indicate high probability of misinformation.";
const SUMMARY_TRUE: &str = "Claim aligns with official sources.";
const SUMMARY_UNVERIFIED: &str = "Analysis pending deeper verification.";

/// Clock seam so tests can pin the response timestamp.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;
}

/// Production clock: reads the system wall clock.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Confidence seam so tests can pin the randomized confidence value.
pub trait ConfidenceSource: Send + Sync {
    /// Returns a confidence value in [CONFIDENCE_MIN, CONFIDENCE_MAX].
    fn sample(&self) -> u8;
}

/// Production confidence source: uniform draw from the thread RNG.
pub struct RandomConfidence;

impl ConfidenceSource for RandomConfidence {
    fn sample(&self) -> u8 {
        rand::thread_rng().gen_range(CONFIDENCE_MIN..=CONFIDENCE_MAX)
    }
}

/// Classify a claim: (verdict, score, summary).
///
/// Case-insensitive substring test, fixed priority: misinformation
/// keywords win over official keywords when both are present.
pub fn classify(text: &str) -> (Verdict, u8, &'static str) {
    let text = text.to_lowercase();

    if MISINFORMATION_KEYWORDS.iter().any(|kw| text.contains(kw)) {
        (Verdict::False, 15, SUMMARY_FALSE)
    } else if OFFICIAL_KEYWORDS.iter().any(|kw| text.contains(kw)) {
        (Verdict::True, 92, SUMMARY_TRUE)
    } else {
        (Verdict::Unverified, 50, SUMMARY_UNVERIFIED)
    }
}

/// The two fixed source records attached to every response, in order.
pub fn default_sources() -> Vec<Source> {
    vec![
        Source::new("Reuters", "https://reuters.com", Credibility::High),
        Source::new("AP News", "https://apnews.com", Credibility::High),
    ]
}

/// Stateless claim analyzer. Pure apart from the clock read and the
/// confidence draw, both of which come through injectable providers.
#[derive(Clone)]
pub struct Analyzer {
    clock: Arc<dyn Clock>,
    confidence: Arc<dyn ConfidenceSource>,
}

impl Analyzer {
    pub fn new() -> Self {
        Self::with_providers(Arc::new(SystemClock), Arc::new(RandomConfidence))
    }

    pub fn with_providers(clock: Arc<dyn Clock>, confidence: Arc<dyn ConfidenceSource>) -> Self {
        Self { clock, confidence }
    }

    /// Run the full mock analysis for one claim.
    pub fn analyze(&self, text: &str) -> AnalysisResponse {
        let (verdict, score, summary) = classify(text);
        let confidence = self.confidence.sample();
        let timestamp = self
            .clock
            .now()
            .to_rfc3339_opts(SecondsFormat::Micros, false);

        tracing::debug!(?verdict, score, confidence, "claim classified");

        AnalysisResponse {
            verdict,
            score,
            confidence,
            summary: summary.to_string(),
            sources: default_sources(),
            timestamp,
        }
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    struct FixedClock(DateTime<Local>);

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Local> {
            self.0
        }
    }

    struct FixedConfidence(u8);

    impl ConfidenceSource for FixedConfidence {
        fn sample(&self) -> u8 {
            self.0
        }
    }

    fn fixed_analyzer(confidence: u8) -> Analyzer {
        let instant = Local.with_ymd_and_hms(2026, 8, 25, 12, 0, 0).unwrap();
        Analyzer::with_providers(
            Arc::new(FixedClock(instant)),
            Arc::new(FixedConfidence(confidence)),
        )
    }

    // ========================================================================
    // TEST 1: misinformation keywords produce False / 15
    // ========================================================================
    #[test]
    fn test_classify_misinformation_keywords() {
        for text in ["this is fake", "a SCAM offer", "Fake News!", "scammy scam"] {
            let (verdict, score, summary) = classify(text);
            assert_eq!(verdict, Verdict::False, "text: {}", text);
            assert_eq!(score, 15);
            assert_eq!(summary, SUMMARY_FALSE);
        }
    }

    // ========================================================================
    // TEST 2: official keywords produce True / 92
    // ========================================================================
    #[test]
    fn test_classify_official_keywords() {
        for text in ["verified account", "an OFFICIAL statement", "Verified."] {
            let (verdict, score, summary) = classify(text);
            assert_eq!(verdict, Verdict::True, "text: {}", text);
            assert_eq!(score, 92);
            assert_eq!(summary, SUMMARY_TRUE);
        }
    }

    // ========================================================================
    // TEST 3: everything else (including empty) is Unverified / 50
    // ========================================================================
    #[test]
    fn test_classify_default_branch() {
        for text in ["", "the sky is blue", "some unrelated claim"] {
            let (verdict, score, summary) = classify(text);
            assert_eq!(verdict, Verdict::Unverified, "text: {:?}", text);
            assert_eq!(score, 50);
            assert_eq!(summary, SUMMARY_UNVERIFIED);
        }
    }

    // ========================================================================
    // TEST 4: priority — misinformation keywords win over official ones
    // ========================================================================
    #[test]
    fn test_classify_priority_misinformation_first() {
        let (verdict, score, _) = classify("an official statement about a fake video");
        assert_eq!(verdict, Verdict::False, "fake/scam must be checked first");
        assert_eq!(score, 15);
    }

    // ========================================================================
    // TEST 5: keyword matching is substring-based, not word-based
    // ========================================================================
    #[test]
    fn test_classify_substring_match() {
        let (verdict, _, _) = classify("unofficially speaking");
        // "unofficially" contains "official"
        assert_eq!(verdict, Verdict::True);
    }

    // ========================================================================
    // TEST 6: fixed sources — exactly two, fixed order, both High
    // ========================================================================
    #[test]
    fn test_default_sources_fixed() {
        let sources = default_sources();
        assert_eq!(sources.len(), 2);
        assert_eq!(sources[0].name, "Reuters");
        assert_eq!(sources[0].url, "https://reuters.com");
        assert_eq!(sources[1].name, "AP News");
        assert_eq!(sources[1].url, "https://apnews.com");
        assert!(sources
            .iter()
            .all(|s| s.credibility == Credibility::High));
    }

    // ========================================================================
    // TEST 7: analyzer with injected providers is fully deterministic
    // ========================================================================
    #[test]
    fn test_analyzer_deterministic_with_injected_providers() {
        let analyzer = fixed_analyzer(85);
        let resp = analyzer.analyze("this video is fake");

        assert_eq!(resp.verdict, Verdict::False);
        assert_eq!(resp.score, 15);
        assert_eq!(resp.confidence, 85);
        assert_eq!(resp.summary, SUMMARY_FALSE);
        assert_eq!(resp.sources.len(), 2);

        let instant = Local.with_ymd_and_hms(2026, 8, 25, 12, 0, 0).unwrap();
        assert_eq!(
            resp.timestamp,
            instant.to_rfc3339_opts(SecondsFormat::Micros, false)
        );
    }

    // ========================================================================
    // TEST 8: production confidence source stays within [70, 99]
    // ========================================================================
    #[test]
    fn test_random_confidence_within_bounds() {
        let source = RandomConfidence;
        for _ in 0..1000 {
            let c = source.sample();
            assert!(
                (CONFIDENCE_MIN..=CONFIDENCE_MAX).contains(&c),
                "confidence {} out of bounds",
                c
            );
        }
    }

    // ========================================================================
    // TEST 9: default analyzer produces a parseable ISO-8601 timestamp
    // ========================================================================
    #[test]
    fn test_default_analyzer_timestamp_parses() {
        let resp = Analyzer::new().analyze("anything");
        let parsed = DateTime::parse_from_rfc3339(&resp.timestamp);
        assert!(parsed.is_ok(), "timestamp not ISO-8601: {}", resp.timestamp);

        let age = Local::now().signed_duration_since(parsed.unwrap());
        assert!(
            age.num_seconds().abs() < 5,
            "timestamp should be within a few seconds of now"
        );
    }
}
