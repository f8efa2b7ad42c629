//! Review corpus: the line-oriented restaurant review file, loaded once per
//! run and immutable thereafter.
//!
//! File format, one restaurant per non-empty line:
//!
//! ```text
//! <Name>. <review text, sentences separated by . ! or ?>
//! ```
//!
//! The split happens on the first `". "` (falling back to the first `.`), so
//! names may contain spaces. Review text is fragmented into sentences on
//! terminal punctuation, with the punctuation stripped.

use crate::error::DatasetError;
use crate::utils::fold;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// One restaurant and its review sentences. Read-only for the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestaurantRecord {
    /// Display name exactly as stored in the corpus.
    pub name: String,
    pub sentences: Vec<String>,
}

/// The full record set, indexed by folded (lowercased, accent-stripped)
/// identity for case-insensitive exact lookup.
#[derive(Debug, Default)]
pub struct ReviewCorpus {
    records: Vec<RestaurantRecord>,
    index: HashMap<String, usize>,
}

impl ReviewCorpus {
    /// Load the corpus from `path`. A relative path that does not exist is
    /// also tried under `data/`, mirroring where the bundled corpus lives.
    pub fn load(path: &Path) -> Result<Self, DatasetError> {
        let mut candidates = vec![path.to_path_buf()];
        if path.is_relative() {
            candidates.push(PathBuf::from("data").join(path));
        }

        let Some(found) = candidates.iter().find(|c| c.exists()) else {
            return Err(DatasetError::NotFound {
                path: path.to_path_buf(),
            });
        };

        let text = fs::read_to_string(found)?;
        let corpus = Self::parse(&text);
        debug!(path = %found.display(), restaurants = corpus.len(), "loaded review corpus");
        Ok(corpus)
    }

    /// Parse corpus text. A later line for the same identity replaces the
    /// earlier one.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let mut corpus = Self::default();
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let (name, review) = match line.split_once(". ") {
                Some((name, review)) => (name, review),
                None => match line.split_once('.') {
                    Some((name, review)) => (name, review),
                    None => (line, ""),
                },
            };
            corpus.insert(RestaurantRecord {
                name: name.trim().to_string(),
                sentences: split_sentences(review),
            });
        }
        corpus
    }

    fn insert(&mut self, record: RestaurantRecord) {
        let key = fold(&record.name);
        match self.index.get(&key) {
            Some(&slot) => self.records[slot] = record,
            None => {
                self.index.insert(key, self.records.len());
                self.records.push(record);
            }
        }
    }

    /// Case- and accent-insensitive exact lookup. No fuzzy matching: the
    /// folded query must equal a folded stored identity.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&RestaurantRecord> {
        self.index.get(&fold(name)).map(|&slot| &self.records[slot])
    }

    /// Stored display names, in corpus order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.name.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Fragment review text into sentences on `.` `!` `?`, trimming whitespace
/// and dropping the terminal punctuation and empty fragments.
fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut acc = String::new();
    for ch in text.chars() {
        if matches!(ch, '.' | '!' | '?') {
            let fragment = acc.trim();
            if !fragment.is_empty() {
                sentences.push(fragment.to_string());
            }
            acc.clear();
        } else {
            acc.push(ch);
        }
    }
    let tail = acc.trim();
    if !tail.is_empty() {
        sentences.push(tail.to_string());
    }
    sentences
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Bob's. A comida é mediana. O atendimento foi ruim!
Paris 6. Pratos bons e um serviço mediano.

KFC. Frango mediano. Espera mediana.
";

    #[test]
    fn parses_names_and_sentence_counts() {
        let corpus = ReviewCorpus::parse(SAMPLE);
        assert_eq!(corpus.len(), 3);
        let bobs = corpus.lookup("Bob's").unwrap();
        assert_eq!(bobs.name, "Bob's");
        assert_eq!(
            bobs.sentences,
            vec!["A comida é mediana", "O atendimento foi ruim"]
        );
    }

    #[test]
    fn name_may_contain_spaces() {
        let corpus = ReviewCorpus::parse(SAMPLE);
        assert!(corpus.lookup("Paris 6").is_some());
    }

    #[test]
    fn lookup_is_case_and_accent_insensitive() {
        let corpus = ReviewCorpus::parse(SAMPLE);
        assert!(corpus.lookup("bob's").is_some());
        assert!(corpus.lookup("BOB'S").is_some());
        assert!(corpus.lookup("kfc").is_some());
    }

    #[test]
    fn lookup_is_exact_not_fuzzy() {
        let corpus = ReviewCorpus::parse(SAMPLE);
        assert!(corpus.lookup("Bob").is_none());
        assert!(corpus.lookup("Paris").is_none());
        assert!(corpus.lookup("NoSuchPlace").is_none());
    }

    #[test]
    fn later_line_replaces_earlier_identity() {
        let corpus = ReviewCorpus::parse("KFC. Frango bom.\nkfc. Frango ruim.\n");
        assert_eq!(corpus.len(), 1);
        assert_eq!(corpus.lookup("KFC").unwrap().sentences, vec!["Frango ruim"]);
    }

    #[test]
    fn line_without_review_text_yields_empty_record() {
        let corpus = ReviewCorpus::parse("Vazio.\n");
        assert!(corpus.lookup("Vazio").unwrap().sentences.is_empty());
    }

    #[test]
    fn split_sentences_handles_mixed_punctuation() {
        assert_eq!(
            split_sentences("Ótimo! Sério? Sim."),
            vec!["Ótimo", "Sério", "Sim"]
        );
        assert_eq!(split_sentences("sem pontuação final"), vec!["sem pontuação final"]);
        assert!(split_sentences("  ").is_empty());
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = ReviewCorpus::load(Path::new("/definitely/not/here.txt")).unwrap_err();
        assert!(matches!(err, DatasetError::NotFound { .. }));
    }
}
