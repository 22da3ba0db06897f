pub mod classify;
pub mod config;
pub mod error;
pub mod models;

pub use classify::{
    Analyzer, Clock, ConfidenceSource, RandomConfidence, SystemClock, CONFIDENCE_MAX,
    CONFIDENCE_MIN, MODEL_VERSION,
};
pub use config::FactifyConfig;
pub use error::FactifyError;
pub use models::{AnalysisResponse, ClaimRequest, Credibility, Source, Verdict};
