use std::collections::HashMap;

use crate::config::PHRASE_LEN;
use crate::ranking::{PhraseRanking, RankedPhrase};

/// Sliding four-token phrases: `max(0, n - 3)` of them for `n` tokens.
pub fn build_phrases(tokens: &[String]) -> Vec<String> {
    build_ngrams(tokens, PHRASE_LEN)
}

/// Every window of `n` consecutive tokens, space-joined.
pub fn build_ngrams(tokens: &[String], n: usize) -> Vec<String> {
    if n == 0 {
        return Vec::new();
    }
    tokens.windows(n).map(|w| w.join(" ")).collect()
}

/// Phrase counts that remember the order in which each phrase was first seen.
#[derive(Debug, Default, Clone)]
pub struct PhraseCounter {
    slots: HashMap<String, usize>,
    entries: Vec<RankedPhrase>,
}

impl PhraseCounter {
    pub fn new() -> Self { Self::default() }

    pub fn add(&mut self, phrase: &str) {
        match self.slots.get(phrase) {
            Some(&slot) => self.entries[slot].count += 1,
            None => {
                self.slots.insert(phrase.to_string(), self.entries.len());
                self.entries.push(RankedPhrase { phrase: phrase.to_string(), count: 1 });
            }
        }
    }

    pub fn extend<I, S>(&mut self, phrases: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for p in phrases {
            self.add(p.as_ref());
        }
    }

    pub fn count(&self, phrase: &str) -> usize {
        self.slots.get(phrase).map_or(0, |&slot| self.entries[slot].count)
    }

    /// The `n` most frequent phrases. Equal counts keep first-seen order.
    pub fn most_common(&self, n: usize) -> PhraseRanking {
        let mut ranked = self.entries.clone();
        // stable: ties stay in insertion order
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked.truncate(n);
        PhraseRanking::from(ranked)
    }
}
