use serde::{Deserialize, Serialize};

use crate::config::PhraseConfig;
use crate::phrases::{build_ngrams, PhraseCounter};
use crate::tokenizer::Tokenization;

/// One text origin fed to the ranker. `text` is `None` when the page lacks it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextSource {
    pub id: String,
    pub text: Option<String>,
    #[serde(default)]
    pub tokenization: Tokenization,
}

impl TextSource {
    pub fn new(id: impl Into<String>, text: Option<String>) -> Self {
        Self { id: id.into(), text, tokenization: Tokenization::Words }
    }

    pub fn whitespace(id: impl Into<String>, text: Option<String>) -> Self {
        Self { id: id.into(), text, tokenization: Tokenization::Whitespace }
    }

    pub fn tokens(&self) -> Vec<String> {
        self.tokenization.apply(self.text.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedPhrase {
    pub phrase: String,
    pub count: usize,
}

/// Most frequent phrases, highest count first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhraseRanking(Vec<RankedPhrase>);

impl PhraseRanking {
    pub fn len(&self) -> usize { self.0.len() }
    pub fn is_empty(&self) -> bool { self.0.is_empty() }
    pub fn iter(&self) -> std::slice::Iter<'_, RankedPhrase> { self.0.iter() }
    pub fn top(&self) -> Option<&RankedPhrase> { self.0.first() }

    pub fn phrases(&self) -> Vec<&str> {
        self.0.iter().map(|r| r.phrase.as_str()).collect()
    }
}

impl From<Vec<RankedPhrase>> for PhraseRanking {
    fn from(v: Vec<RankedPhrase>) -> Self { Self(v) }
}

impl<'a> IntoIterator for &'a PhraseRanking {
    type Item = &'a RankedPhrase;
    type IntoIter = std::slice::Iter<'a, RankedPhrase>;
    fn into_iter(self) -> Self::IntoIter { self.0.iter() }
}

/// Pool the phrases of every source and return the most frequent ones.
///
/// Each source is tokenized and windowed on its own, so no phrase spans two sources.
/// Absent or short sources contribute nothing.
pub fn rank(sources: &[TextSource]) -> PhraseRanking {
    rank_with(sources, &PhraseConfig::default())
}

pub fn rank_with(sources: &[TextSource], config: &PhraseConfig) -> PhraseRanking {
    let mut counter = PhraseCounter::new();
    for source in sources {
        counter.extend(build_ngrams(&source.tokens(), config.phrase_len));
    }
    counter.most_common(config.top_n)
}

/// [`rank`] over plain optional texts, tokenized on word boundaries.
pub fn rank_texts(texts: &[Option<&str>]) -> PhraseRanking {
    let sources: Vec<TextSource> = texts
        .iter()
        .map(|t| TextSource::new("text", t.map(str::to_string)))
        .collect();
    rank(&sources)
}

/// Majority vote across rankings: one vote per (ranking, slot) a phrase holds.
///
/// Counts inside the input rankings are ignored. Ties keep the order in which phrases
/// first appear, walking rankings in order and slots within each ranking.
pub fn aggregate(rankings: &[PhraseRanking]) -> PhraseRanking {
    aggregate_with(rankings, &PhraseConfig::default())
}

pub fn aggregate_with(rankings: &[PhraseRanking], config: &PhraseConfig) -> PhraseRanking {
    let mut votes = PhraseCounter::new();
    for ranking in rankings {
        votes.extend(ranking.iter().map(|r| r.phrase.as_str()));
    }
    votes.most_common(config.top_n)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranking(entries: &[(&str, usize)]) -> PhraseRanking {
        entries
            .iter()
            .map(|(p, c)| RankedPhrase { phrase: p.to_string(), count: *c })
            .collect::<Vec<_>>()
            .into()
    }

    #[test]
    fn all_absent_sources_rank_empty() {
        assert!(rank_texts(&[None, None]).is_empty());
        assert!(rank(&[]).is_empty());
    }

    #[test]
    fn phrases_do_not_cross_sources() {
        let r = rank_texts(&[Some("one two"), Some("three four")]);
        assert!(r.is_empty());
    }

    #[test]
    fn fewer_than_three_phrases_are_not_padded() {
        let r = rank_texts(&[Some("a b c d e")]);
        assert_eq!(r.len(), 2);
        assert!(r.iter().all(|p| p.count == 1));
    }

    #[test]
    fn aggregate_ignores_inner_counts() {
        let a = ranking(&[("heavy phrase here now", 50)]);
        let b = ranking(&[("light phrase here now", 1)]);
        let c = ranking(&[("light phrase here now", 1)]);
        let out = aggregate(&[a, b, c]);
        assert_eq!(out.top().map(|r| (r.phrase.as_str(), r.count)), Some(("light phrase here now", 2)));
    }

    #[test]
    fn aggregate_of_nothing_is_empty() {
        assert!(aggregate(&[]).is_empty());
        assert!(aggregate(&[PhraseRanking::default(), PhraseRanking::default()]).is_empty());
    }

    #[test]
    fn custom_config_changes_window_and_depth() {
        let cfg = PhraseConfig { phrase_len: 2, top_n: 1 };
        let r = rank_with(&[TextSource::new("t", Some("a b a b".into()))], &cfg);
        assert_eq!(r.len(), 1);
        assert_eq!(r.top().map(|p| p.count), Some(2));
    }
}
