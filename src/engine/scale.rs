use crate::error::ScaleError;
use crate::utils::fold;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::collections::hash_map::Entry;

/// One of the two independently scored review aspects.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Food,
    Service,
}

impl Dimension {
    pub const ALL: [Dimension; 2] = [Dimension::Food, Dimension::Service];

    fn index(self) -> usize {
        match self {
            Dimension::Food => 0,
            Dimension::Service => 1,
        }
    }
}

/// Score assigned to a sentence dimension when no scale adjective matches.
pub const NEUTRAL_SCORE: u8 = 3;

/// One authored vocabulary entry: a canonical adjective scored for one
/// dimension. Inflected surface forms are derived, never authored.
#[derive(Debug, Clone)]
pub struct AdjectiveEntry {
    pub canonical: &'static str,
    pub dimension: Dimension,
    pub score: u8,
}

/// Closed adjective vocabulary with an expanded, immutable lookup table.
///
/// Built once at initialization: every canonical adjective is folded, run
/// through the inflection rules, and each resulting surface form is keyed
/// into a per-dimension hash map. Lookup is exact-token (after folding),
/// never substring, so unrelated words containing a scale word do not match.
#[derive(Debug)]
pub struct AdjectiveScale {
    // surface form -> base score, one map per dimension
    forms: [HashMap<String, u8>; 2],
    max_phrase_words: usize,
}

impl AdjectiveScale {
    /// Build a scale from authored entries, failing fast on a score outside
    /// 1..=5 or on a surface form that would map to two different scores
    /// within the same dimension.
    pub fn build(entries: &[AdjectiveEntry]) -> Result<Self, ScaleError> {
        let mut forms: [HashMap<String, u8>; 2] = [HashMap::new(), HashMap::new()];
        let mut max_phrase_words = 1;

        for entry in entries {
            if !(1..=5).contains(&entry.score) {
                return Err(ScaleError::ScoreOutOfRange {
                    word: entry.canonical.to_string(),
                    score: entry.score,
                });
            }

            for form in inflections(&fold(entry.canonical)) {
                max_phrase_words = max_phrase_words.max(form.split(' ').count());
                let map = &mut forms[entry.dimension.index()];
                match map.entry(form) {
                    Entry::Occupied(slot) => {
                        let existing = *slot.get();
                        if existing != entry.score {
                            return Err(ScaleError::AmbiguousForm {
                                form: slot.key().clone(),
                                dimension: entry.dimension,
                                existing,
                                conflicting: entry.score,
                            });
                        }
                    }
                    Entry::Vacant(slot) => {
                        slot.insert(entry.score);
                    }
                }
            }
        }

        Ok(Self {
            forms,
            max_phrase_words,
        })
    }

    /// The deployed rating rubric: a single shared five-point ladder,
    /// registered under both dimensions.
    #[must_use]
    pub fn stock() -> Self {
        const LADDER: [(&str, u8); 15] = [
            ("horrivel", 1),
            ("nojento", 1),
            ("terrivel", 1),
            ("ruim", 2),
            ("desagradavel", 2),
            ("ofensivo", 2),
            ("mediano", 3),
            ("sem graca", 3),
            ("irrelevante", 3),
            ("bom", 4),
            ("agradavel", 4),
            ("satisfatorio", 4),
            ("incrivel", 5),
            ("impressionante", 5),
            ("surpreendente", 5),
        ];

        let entries: Vec<AdjectiveEntry> = Dimension::ALL
            .into_iter()
            .flat_map(|dimension| {
                LADDER.into_iter().map(move |(canonical, score)| AdjectiveEntry {
                    canonical,
                    dimension,
                    score,
                })
            })
            .collect();

        // The rubric is fixed at compile time; ambiguity here is a defect in
        // the table above, not a runtime condition.
        Self::build(&entries).expect("stock adjective scale is unambiguous")
    }

    /// Score of a surface word (or multi-word phrase) for one dimension.
    /// Case- and diacritic-insensitive; `None` when the word is not in the
    /// vocabulary for that dimension.
    #[must_use]
    pub fn score_of(&self, word: &str, dimension: Dimension) -> Option<u8> {
        self.lookup_folded(&fold(word), dimension)
    }

    /// Lookup for already-folded text. The analyzer folds each sentence once
    /// and probes tokens through this path.
    #[must_use]
    pub fn lookup_folded(&self, folded: &str, dimension: Dimension) -> Option<u8> {
        self.forms[dimension.index()].get(folded).copied()
    }

    /// Longest surface form in words; bounds the analyzer's phrase window.
    #[must_use]
    pub fn max_phrase_words(&self) -> usize {
        self.max_phrase_words
    }
}

/// Generate the inflected surface forms of a folded canonical adjective.
///
/// The rules are the PT-BR gender/number classes the rubric needs, nothing
/// more: two irregulars, then suffix classes applied as a set union (a word
/// matching several classes contributes every generated form). Multi-word
/// entries are invariant.
fn inflections(canonical: &str) -> Vec<String> {
    fn push(forms: &mut Vec<String>, form: String) {
        if !forms.contains(&form) {
            forms.push(form);
        }
    }

    let a = canonical;
    let mut out = vec![a.to_string()];

    if a == "bom" {
        for f in ["boa", "bons", "boas"] {
            push(&mut out, f.to_string());
        }
        return out;
    }
    if a == "ruim" {
        push(&mut out, "ruins".to_string());
        return out;
    }
    if a.contains(' ') {
        return out;
    }

    if let Some(stem) = a.strip_suffix('o') {
        push(&mut out, format!("{stem}a"));
        push(&mut out, format!("{stem}os"));
        push(&mut out, format!("{stem}as"));
    }
    if let Some(stem) = a.strip_suffix("ivel") {
        push(&mut out, format!("{stem}iveis"));
    }
    if let Some(stem) = a.strip_suffix("vel") {
        push(&mut out, format!("{stem}veis"));
    }
    if let Some(stem) = a.strip_suffix("el") {
        push(&mut out, format!("{stem}eis"));
    }
    if a.ends_with("ente") || a.ends_with("ante") {
        push(&mut out, format!("{a}s"));
    }
    if let Some(stem) = a.strip_suffix("ivo") {
        push(&mut out, format!("{stem}iva"));
        push(&mut out, format!("{stem}ivos"));
        push(&mut out, format!("{stem}ivas"));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimension_parses_and_displays_lowercase() {
        assert_eq!("food".parse::<Dimension>().unwrap(), Dimension::Food);
        assert_eq!("service".parse::<Dimension>().unwrap(), Dimension::Service);
        assert_eq!(Dimension::Food.to_string(), "food");
        assert!("ambience".parse::<Dimension>().is_err());
    }

    #[test]
    fn irregular_inflections() {
        let forms = inflections("bom");
        assert_eq!(forms, vec!["bom", "boa", "bons", "boas"]);
        assert_eq!(inflections("ruim"), vec!["ruim", "ruins"]);
    }

    #[test]
    fn o_suffix_generates_gender_and_number() {
        let forms = inflections("mediano");
        assert!(forms.contains(&"mediana".to_string()));
        assert!(forms.contains(&"medianos".to_string()));
        assert!(forms.contains(&"medianas".to_string()));
    }

    #[test]
    fn ivel_suffix_generates_plural() {
        assert!(inflections("incrivel").contains(&"incriveis".to_string()));
        assert!(inflections("terrivel").contains(&"terriveis".to_string()));
        assert!(inflections("agradavel").contains(&"agradaveis".to_string()));
    }

    #[test]
    fn ente_and_ante_take_plain_plural() {
        assert!(inflections("impressionante").contains(&"impressionantes".to_string()));
        assert!(inflections("surpreendente").contains(&"surpreendentes".to_string()));
    }

    #[test]
    fn ivo_suffix_generates_all_variants() {
        let forms = inflections("ofensivo");
        for f in ["ofensiva", "ofensivos", "ofensivas"] {
            assert!(forms.contains(&f.to_string()), "missing {f}");
        }
    }

    #[test]
    fn multiword_entries_are_invariant() {
        assert_eq!(inflections("sem graca"), vec!["sem graca"]);
    }

    #[test]
    fn stock_scale_scores_canonicals_in_both_dimensions() {
        let scale = AdjectiveScale::stock();
        for dim in Dimension::ALL {
            assert_eq!(scale.score_of("horrivel", dim), Some(1));
            assert_eq!(scale.score_of("ruim", dim), Some(2));
            assert_eq!(scale.score_of("mediano", dim), Some(3));
            assert_eq!(scale.score_of("bom", dim), Some(4));
            assert_eq!(scale.score_of("incrivel", dim), Some(5));
        }
    }

    #[test]
    fn inflected_forms_resolve_to_base_score() {
        let scale = AdjectiveScale::stock();
        assert_eq!(scale.score_of("boas", Dimension::Food), Some(4));
        assert_eq!(scale.score_of("terriveis", Dimension::Service), Some(1));
        assert_eq!(scale.score_of("ruins", Dimension::Food), Some(2));
        assert_eq!(scale.score_of("impressionantes", Dimension::Service), Some(5));
        assert_eq!(scale.score_of("ofensivas", Dimension::Food), Some(2));
    }

    #[test]
    fn matching_is_case_and_accent_insensitive() {
        let scale = AdjectiveScale::stock();
        assert_eq!(scale.score_of("Incrível", Dimension::Food), Some(5));
        assert_eq!(scale.score_of("SATISFATÓRIO", Dimension::Service), Some(4));
    }

    #[test]
    fn no_substring_matches() {
        let scale = AdjectiveScale::stock();
        // "bomba" contains "bom" but is not in the vocabulary
        assert_eq!(scale.score_of("bomba", Dimension::Food), None);
        assert_eq!(scale.score_of("ruimx", Dimension::Service), None);
    }

    #[test]
    fn unknown_word_is_absent() {
        let scale = AdjectiveScale::stock();
        assert_eq!(scale.score_of("delicioso", Dimension::Food), None);
    }

    #[test]
    fn ambiguous_form_fails_fast() {
        let entries = [
            AdjectiveEntry {
                canonical: "bom",
                dimension: Dimension::Food,
                score: 4,
            },
            AdjectiveEntry {
                canonical: "bom",
                dimension: Dimension::Food,
                score: 5,
            },
        ];
        let err = AdjectiveScale::build(&entries).unwrap_err();
        assert!(matches!(err, ScaleError::AmbiguousForm { .. }));
    }

    #[test]
    fn same_word_may_carry_different_scores_across_dimensions() {
        let entries = [
            AdjectiveEntry {
                canonical: "bom",
                dimension: Dimension::Food,
                score: 4,
            },
            AdjectiveEntry {
                canonical: "bom",
                dimension: Dimension::Service,
                score: 5,
            },
        ];
        let scale = AdjectiveScale::build(&entries).unwrap();
        assert_eq!(scale.score_of("bom", Dimension::Food), Some(4));
        assert_eq!(scale.score_of("bom", Dimension::Service), Some(5));
    }

    #[test]
    fn score_out_of_range_fails_fast() {
        let entries = [AdjectiveEntry {
            canonical: "bom",
            dimension: Dimension::Food,
            score: 6,
        }];
        assert_eq!(
            AdjectiveScale::build(&entries).unwrap_err(),
            ScaleError::ScoreOutOfRange {
                word: "bom".to_string(),
                score: 6
            }
        );
    }

    #[test]
    fn phrase_window_covers_multiword_entries() {
        assert_eq!(AdjectiveScale::stock().max_phrase_words(), 2);
    }
}
