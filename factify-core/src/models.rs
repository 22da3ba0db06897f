//! Wire-level types for the claim analysis API.
//!
//! Field names and enum spellings are part of the public JSON contract
//! and must not change: callers match on `"True"` / `"False"` /
//! `"Unverified"` verdict strings and the `"High"` credibility label.

use serde::{Deserialize, Serialize};

/// Incoming claim payload for POST /analyze.
#[derive(Debug, Clone, Deserialize)]
pub struct ClaimRequest {
    pub text: String,
}

/// Mock classification outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    True,
    False,
    Unverified,
}

/// Qualitative label attached to a cited source.
/// Only `High` is produced by the current mock pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Credibility {
    High,
    Medium,
    Low,
}

/// A cited source record. Two fixed instances accompany every response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Source {
    pub name: String,
    pub url: String,
    pub credibility: Credibility,
}

impl Source {
    pub fn new(name: &str, url: &str, credibility: Credibility) -> Self {
        Self {
            name: name.to_string(),
            url: url.to_string(),
            credibility,
        }
    }
}

/// Full analysis result returned by POST /analyze.
///
/// `timestamp` is a preformatted ISO-8601 string (local time at response
/// construction) rather than a typed datetime, matching the wire contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub verdict: Verdict,
    pub score: u8,
    pub confidence: u8,
    pub summary: String,
    pub sources: Vec<Source>,
    pub timestamp: String,
}
