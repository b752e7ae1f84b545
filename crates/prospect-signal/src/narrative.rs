//! LLM-backed sector narrative
//!
//! Wraps the opaque text-generation capability: given a finished
//! [`SectorReport`], ask a model for an investor-facing narrative. The
//! model may fail transiently or produce different text on every call, so
//! callers fall back to the report's deterministic summary.

use crate::model::SectorReport;
use prospect_llm::{GenerationRequest, TextGenerator};
use std::fmt::Write as _;
use std::sync::Arc;
use tracing::instrument;

const SYSTEM_PROMPT: &str = "You are a market sentiment analyst. Write a concise, \
factual narrative of retail investor sentiment for the given sector. Do not invent \
data beyond what is provided.";

/// Generates sector narratives through a text-generation provider
pub struct SectorNarrator {
    provider: Arc<dyn TextGenerator>,
    model: String,
}

impl SectorNarrator {
    /// Create a narrator for the given provider and model
    pub fn new(provider: Arc<dyn TextGenerator>, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
        }
    }

    /// Ask the model for a narrative over the report
    #[instrument(skip(self, report), fields(sector = %report.sector, model = %self.model))]
    pub async fn narrate(&self, report: &SectorReport) -> prospect_llm::Result<String> {
        let request = GenerationRequest::builder(&self.model)
            .system(SYSTEM_PROMPT)
            .prompt(build_prompt(report))
            .max_tokens(512)
            .temperature(0.3)
            .build();

        self.provider.generate(&request).await
    }
}

/// Render the report into a prompt the model can narrate from
fn build_prompt(report: &SectorReport) -> String {
    let mut prompt = format!(
        "Sector: {}\nDeterministic summary: {}\n\nCandidates:\n",
        report.sector, report.summary
    );

    if report.candidates.is_empty() {
        prompt.push_str("(none - no trending data was found)\n");
    }
    for candidate in &report.candidates {
        let _ = writeln!(
            prompt,
            "- {}: {} mentions, average sentiment {:.3}, relevance {:.3}",
            candidate.ticker,
            candidate.mention_count,
            candidate.average_sentiment,
            candidate.relevance_score,
        );
    }

    prompt.push_str("\nWrite a short narrative of sector sentiment for an investor.");
    prompt
}
