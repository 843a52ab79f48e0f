use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::PhraseConfig;
use crate::ranking::{aggregate_with, rank_with, PhraseRanking, TextSource};

/// Text pulled from one page, ready for ranking.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisInput {
    /// Output of [`crate::tokenizer::text_from_url`].
    pub url_text: String,
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub h1: Vec<String>,
    #[serde(default)]
    pub h2: Vec<String>,
    #[serde(default)]
    pub h3: Vec<String>,
    pub leading_paragraphs: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRankings {
    pub url_title_desc: PhraseRanking,
    pub h1: PhraseRanking,
    pub h2: PhraseRanking,
    pub h3: PhraseRanking,
    pub paragraphs: PhraseRanking,
}

impl SourceRankings {
    /// Rankings in voting order.
    pub fn as_array(&self) -> [&PhraseRanking; 5] {
        [&self.url_title_desc, &self.h1, &self.h2, &self.h3, &self.paragraphs]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub per_source_rankings: SourceRankings,
    pub winning_keywords: PhraseRanking,
}

pub fn analyze(input: &AnalysisInput) -> AnalysisReport {
    analyze_with(input, &PhraseConfig::default())
}

/// Rank each source group, then vote across the five rankings.
pub fn analyze_with(input: &AnalysisInput, config: &PhraseConfig) -> AnalysisReport {
    let url_title_desc = rank_with(
        &[
            TextSource::whitespace("url", Some(input.url_text.clone())),
            TextSource::new("title", input.title.clone()),
            TextSource::new("description", input.description.clone()),
        ],
        config,
    );
    let h1 = rank_with(&heading_sources("h1", &input.h1), config);
    let h2 = rank_with(&heading_sources("h2", &input.h2), config);
    let h3 = rank_with(&heading_sources("h3", &input.h3), config);
    let paragraphs = rank_with(
        &[TextSource::whitespace("paragraph", input.leading_paragraphs.clone())],
        config,
    );

    let per_source_rankings = SourceRankings { url_title_desc, h1, h2, h3, paragraphs };
    let stage: Vec<PhraseRanking> = per_source_rankings.as_array().into_iter().cloned().collect();
    let winning_keywords = aggregate_with(&stage, config);
    debug!(
        winners = winning_keywords.len(),
        url_title_desc = per_source_rankings.url_title_desc.len(),
        paragraphs = per_source_rankings.paragraphs.len(),
        "phrase analysis complete"
    );
    AnalysisReport { per_source_rankings, winning_keywords }
}

fn heading_sources(id: &str, texts: &[String]) -> Vec<TextSource> {
    texts.iter().map(|t| TextSource::new(id, Some(t.clone()))).collect()
}
