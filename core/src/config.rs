use serde::{Deserialize, Serialize};

pub const PHRASE_LEN: usize = 4;
pub const TOP_N: usize = 3;
pub const LEADING_PARAGRAPHS: usize = 3;

/// Window size and ranking depth used by the phrase voter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhraseConfig {
    /// Tokens per phrase.
    #[serde(default = "default_phrase_len")]
    pub phrase_len: usize,
    /// Entries kept per ranking.
    #[serde(default = "default_top_n")]
    pub top_n: usize,
}
fn default_phrase_len() -> usize { PHRASE_LEN }
fn default_top_n() -> usize { TOP_N }

impl Default for PhraseConfig {
    fn default() -> Self {
        Self { phrase_len: PHRASE_LEN, top_n: TOP_N }
    }
}
