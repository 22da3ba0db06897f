//! factify-cli — shell frontend for the Factify claim analysis service
//!
//! # Subcommands
//! - `analyze <text> [--json]` — submit a claim and print the verdict
//! - `status`                  — show server health and model version

use clap::{Parser, Subcommand};
use serde::Deserialize;

const DEFAULT_SERVER: &str = "http://127.0.0.1:8000";

// ============================================================================
// CLI Definition
// ============================================================================

#[derive(Debug, Parser)]
#[command(
    name = "factify-cli",
    version,
    about = "Factify claim analysis — command-line frontend"
)]
struct Cli {
    /// Factify HTTP server URL (overrides FACTIFY_HTTP_URL env var)
    #[arg(long, env = "FACTIFY_HTTP_URL", default_value = DEFAULT_SERVER)]
    server: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Analyze a claim
    Analyze {
        /// Claim text to analyze
        text: String,

        /// Print the raw JSON response instead of the summary view
        #[arg(long)]
        json: bool,
    },

    /// Show Factify server status
    Status,
}

// ============================================================================
// API Response Types
// ============================================================================

/// A cited source in the analysis response
#[derive(Debug, Deserialize)]
pub struct CliSource {
    pub name: String,
    pub url: String,
    pub credibility: String,
}

/// The full analysis response from POST /analyze
#[derive(Debug, Deserialize)]
pub struct CliAnalysis {
    pub verdict: String,
    pub score: u8,
    pub confidence: u8,
    pub summary: String,
    pub sources: Vec<CliSource>,
    pub timestamp: String,
}

/// Render an analysis as the human-readable terminal view.
pub fn format_analysis(a: &CliAnalysis) -> String {
    let mut out = String::new();
    out.push_str(&format!("Verdict:     {}\n", a.verdict));
    out.push_str(&format!("Score:       {}/100\n", a.score));
    out.push_str(&format!("Confidence:  {}%\n", a.confidence));
    out.push_str(&format!("Summary:     {}\n", a.summary));
    out.push_str("Sources:\n");
    for s in &a.sources {
        out.push_str(&format!("  - {} ({}) [{}]\n", s.name, s.url, s.credibility));
    }
    out.push_str(&format!("Analyzed at: {}\n", a.timestamp));
    out
}

// ============================================================================
// HTTP Client Calls
// ============================================================================

/// Submit a claim to POST /analyze and print the result.
fn do_analyze(server: &str, text: &str, json_output: bool) -> anyhow::Result<()> {
    let client = reqwest::blocking::Client::builder()
        .timeout(std::time::Duration::from_secs(30))
        .build()?;

    let url = format!("{}/analyze", server);
    let body = serde_json::json!({ "text": text });

    let resp = match client.post(&url).json(&body).send() {
        Ok(r) => r,
        Err(e) => {
            eprintln!("factify-cli: connection failed to {}: {}", url, e);
            std::process::exit(1);
        }
    };

    if !resp.status().is_success() {
        let status = resp.status();
        let body = resp.text().unwrap_or_default();
        eprintln!("factify-cli: server returned {}: {}", status, body);
        std::process::exit(1);
    }

    if json_output {
        let raw: serde_json::Value = resp.json()?;
        println!("{}", serde_json::to_string_pretty(&raw)?);
        return Ok(());
    }

    let analysis: CliAnalysis = match resp.json() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("factify-cli: failed to parse analysis response: {}", e);
            std::process::exit(1);
        }
    };

    print!("{}", format_analysis(&analysis));
    Ok(())
}

/// Show the server status by calling GET /.
fn do_status(server: &str) -> anyhow::Result<()> {
    let client = reqwest::blocking::Client::builder()
        .timeout(std::time::Duration::from_secs(10))
        .build()?;

    let url = format!("{}/", server);

    match client.get(&url).send() {
        Ok(r) if r.status().is_success() => {
            let body: serde_json::Value = r.json().unwrap_or_default();
            println!(
                "Factify server: {}",
                body["status"].as_str().unwrap_or("unknown")
            );
            println!(
                "Model version:  {}",
                body["model_version"].as_str().unwrap_or("?")
            );
        }
        Ok(r) => {
            eprintln!("factify-cli: server unhealthy (HTTP {})", r.status());
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("factify-cli: cannot reach {} — {}", url, e);
            std::process::exit(1);
        }
    }

    Ok(())
}

// ============================================================================
// Main
// ============================================================================

fn main() {
    let cli = Cli::parse();
    let server = cli.server.trim_end_matches('/').to_string();

    let result = match cli.command {
        Commands::Analyze { text, json } => do_analyze(&server, &text, json),
        Commands::Status => do_status(&server),
    };

    if let Err(e) = result {
        eprintln!("factify-cli: {}", e);
        std::process::exit(1);
    }
}

// ============================================================================
// Tests
// ============================================================================
