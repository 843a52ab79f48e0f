//! Repeated four-word phrase ranking over the text signals of a web page.

pub mod analysis;
pub mod config;
pub mod phrases;
pub mod ranking;
pub mod tokenizer;

pub use analysis::{analyze, analyze_with, AnalysisInput, AnalysisReport, SourceRankings};
pub use config::PhraseConfig;
pub use phrases::{build_ngrams, build_phrases, PhraseCounter};
pub use ranking::{aggregate, aggregate_with, rank, rank_texts, rank_with, PhraseRanking, RankedPhrase, TextSource};
pub use tokenizer::{split_whitespace, text_from_url, tokenize, tokenize_opt, Tokenization};
