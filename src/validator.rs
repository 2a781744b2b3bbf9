//! Heuristic checks on a generated outcome sentence.

use crate::i18n::Lang;
use once_cell::sync::Lazy;
use regex::Regex;

/// Minimum length (in characters) of a sufficiently detailed outcome.
pub const MIN_DETAIL_CHARS: usize = 80;

static MODAL_PHRASE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:será|sera) capaz de|will be able to").expect("static regex"));
static NON_OBSERVABLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:aprender|entender|conocer|learn|understand|know)\b")
        .expect("static regex")
});
static THRESHOLD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)≥|al menos|m[ií]nim[oa]|at least|minimum").expect("static regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Defect {
    WrongStructure,
    NonObservableVerb,
    MissingThreshold,
    InsufficientDetail,
}

impl Defect {
    pub fn message(&self, lang: Lang) -> &'static str {
        match (self, lang) {
            (Defect::WrongStructure, Lang::Es) => {
                "Usa la estructura '… será capaz de …' / '… will be able to …'"
            }
            (Defect::WrongStructure, Lang::En) => {
                "Use the structure '… will be able to …' / '… será capaz de …'"
            }
            (Defect::NonObservableVerb, Lang::Es) => "Evita verbos no observables.",
            (Defect::NonObservableVerb, Lang::En) => "Avoid non-observable verbs.",
            (Defect::MissingThreshold, Lang::Es) => "Añade un umbral medible.",
            (Defect::MissingThreshold, Lang::En) => "Add a measurable threshold.",
            (Defect::InsufficientDetail, Lang::Es) => {
                "Añade más detalle para condición y evidencia."
            }
            (Defect::InsufficientDetail, Lang::En) => {
                "Add more detail about the condition and evidence."
            }
        }
    }
}

pub fn has_measurable_threshold(text: &str) -> bool {
    THRESHOLD.is_match(text)
}

/// Run every rule independently and return the defects in rule order.
pub fn find_defects(text: &str) -> Vec<Defect> {
    let mut defects = Vec::new();
    if !MODAL_PHRASE.is_match(text) {
        defects.push(Defect::WrongStructure);
    }
    if NON_OBSERVABLE.is_match(text) {
        defects.push(Defect::NonObservableVerb);
    }
    if !has_measurable_threshold(text) {
        defects.push(Defect::MissingThreshold);
    }
    if text.chars().count() < MIN_DETAIL_CHARS {
        defects.push(Defect::InsufficientDetail);
    }
    defects
}

/// Localized defect messages; an empty list means the outcome passes.
pub fn validate_outcome(lang: Lang, text: &str) -> Vec<String> {
    find_defects(text)
        .into_iter()
        .map(|d| d.message(lang).to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOOD: &str = "Al finalizar 1 clase, el estudiante será capaz de analizar Revolución Industrial a partir de fuentes primarias, identificando al menos 3 evidencias clave.";

    #[test]
    fn good_outcome_passes() {
        assert!(find_defects(GOOD).is_empty());
        assert!(validate_outcome(Lang::Es, GOOD).is_empty());
    }

    #[test]
    fn non_observable_matches_whole_words_only() {
        let bad = GOOD.replace("analizar", "Entender");
        assert_eq!(find_defects(&bad), vec![Defect::NonObservableVerb]);
        let fine = "By the end of the unit, the student will be able to apply knowledge of ratios, solving at least 4 of 5 exercises.";
        assert!(!find_defects(fine).contains(&Defect::NonObservableVerb));
    }

    #[test]
    fn threshold_markers() {
        assert!(has_measurable_threshold("con ≥2 fuentes"));
        assert!(has_measurable_threshold("un MÍNIMO de tres"));
        assert!(has_measurable_threshold("minima cantidad"));
        assert!(has_measurable_threshold("At Least two"));
        assert!(!has_measurable_threshold("con varias fuentes"));
    }

    #[test]
    fn every_rule_fires_independently() {
        assert_eq!(
            find_defects("I know things."),
            vec![
                Defect::WrongStructure,
                Defect::NonObservableVerb,
                Defect::MissingThreshold,
                Defect::InsufficientDetail
            ]
        );
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // 79 two-byte characters is still short.
        let short = "ñ".repeat(79);
        assert!(find_defects(&short).contains(&Defect::InsufficientDetail));
        let long = "ñ".repeat(80);
        assert!(!find_defects(&long).contains(&Defect::InsufficientDetail));
    }
}
