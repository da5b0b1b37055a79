//! Word selection by fractional position.
//!
//! Tagging text is not done here. A [`WordSource`] is handed words that
//! already carry a part-of-speech tag and answers "which word sits at this
//! fraction of the list".

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Coarse part of speech, grouped from Penn Treebank tags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum PartOfSpeech {
    Noun,
    Adjective,
    Adverb,
    Other,
}

impl PartOfSpeech {
    /// Map a Penn tag. Comparative and superlative adverbs (`RBR`, `RBS`)
    /// map to [`PartOfSpeech::Other`].
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "NN" | "NNP" | "NNS" | "NNPS" => Self::Noun,
            "JJ" | "JJR" | "JJS" => Self::Adjective,
            "RB" => Self::Adverb,
            _ => Self::Other,
        }
    }
}

/// A list of words addressable by a ratio in `[0, 1)`.
pub trait WordSource {
    /// The word at `floor(ratio * len)`.
    fn word_at(&self, ratio: f64) -> Option<&str>;

    /// The first word of `kind` at or after `floor(ratio * len)`, wrapping
    /// around to the start of the list once.
    fn word_of_kind(&self, ratio: f64, kind: PartOfSpeech) -> Option<&str>;
}

/// Words with their part of speech, indexed by kind.
#[derive(Clone, Debug, Default)]
pub struct TaggedWordList {
    words: Vec<(String, PartOfSpeech)>,
    nouns: Vec<usize>,
    adjectives: Vec<usize>,
    adverbs: Vec<usize>,
    others: Vec<usize>,
}

impl TaggedWordList {
    pub fn new(words: impl IntoIterator<Item = (String, PartOfSpeech)>) -> Self {
        let mut list = Self::default();
        for (word, kind) in words {
            let index = list.words.len();
            list.index_mut(kind).push(index);
            list.words.push((word, kind));
        }
        list
    }

    /// Parse `word<TAB>TAG` lines. Blank lines and lines starting with `#`
    /// are skipped; a line without a tag is tagged [`PartOfSpeech::Other`].
    pub fn parse(text: &str) -> Self {
        Self::new(
            text.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#'))
                .map(|line| {
                    let mut parts = line.split_whitespace();
                    let word = parts.next().unwrap_or_default().to_string();
                    let kind = parts
                        .next()
                        .map(PartOfSpeech::from_tag)
                        .unwrap_or(PartOfSpeech::Other);
                    (word, kind)
                }),
        )
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    fn index(&self, kind: PartOfSpeech) -> &[usize] {
        match kind {
            PartOfSpeech::Noun => &self.nouns,
            PartOfSpeech::Adjective => &self.adjectives,
            PartOfSpeech::Adverb => &self.adverbs,
            PartOfSpeech::Other => &self.others,
        }
    }

    fn index_mut(&mut self, kind: PartOfSpeech) -> &mut Vec<usize> {
        match kind {
            PartOfSpeech::Noun => &mut self.nouns,
            PartOfSpeech::Adjective => &mut self.adjectives,
            PartOfSpeech::Adverb => &mut self.adverbs,
            PartOfSpeech::Other => &mut self.others,
        }
    }

    fn position(&self, ratio: f64) -> usize {
        let position = (ratio * self.words.len() as f64).floor();
        (position.max(0.0) as usize).min(self.words.len().saturating_sub(1))
    }
}

impl WordSource for TaggedWordList {
    fn word_at(&self, ratio: f64) -> Option<&str> {
        if self.words.is_empty() {
            return None;
        }
        self.words
            .get(self.position(ratio))
            .map(|(word, _)| word.as_str())
    }

    fn word_of_kind(&self, ratio: f64, kind: PartOfSpeech) -> Option<&str> {
        let index = self.index(kind);
        let first = *index.first()?;
        let start = self.position(ratio);
        let found = index
            .get(index.partition_point(|&i| i < start))
            .copied()
            .unwrap_or(first);
        Some(self.words[found].0.as_str())
    }
}
