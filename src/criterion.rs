//! Measurable-criterion suggestions.
//! Deterministic keyword rules, no side effects.

use crate::error::OutcomesError;
use crate::i18n::Lang;
use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

/// A named evaluation criterion with its weight in percent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RubricRow {
    pub name: String,
    pub weight: i32,
}

impl RubricRow {
    pub fn new(name: impl Into<String>, weight: i32) -> Self {
        Self {
            name: name.into(),
            weight,
        }
    }
}

/// Parses `NAME=WEIGHT`, splitting on the last `=`.
impl std::str::FromStr for RubricRow {
    type Err = OutcomesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || OutcomesError::InvalidParams {
            message: format!("rubric row '{}' must look like NAME=WEIGHT", s),
        };
        let (name, weight) = s.rsplit_once('=').ok_or_else(invalid)?;
        let name = name.trim();
        if name.is_empty() {
            return Err(invalid());
        }
        let weight = weight.trim().parse::<i32>().map_err(|_| invalid())?;
        Ok(Self::new(name, weight))
    }
}

/// The three-row rubric every new wizard starts with.
pub fn default_rubric() -> Vec<RubricRow> {
    vec![
        RubricRow::new("Calidad del contenido", 40),
        RubricRow::new("Claridad y organización", 30),
        RubricRow::new("Evidencia y fuentes", 30),
    ]
}

/// Running weight total. Advisory only, never used to block progression.
pub fn rubric_sum(rubric: &[RubricRow]) -> i32 {
    rubric.iter().map(|r| r.weight).sum()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerbCategory {
    Computation,
    Analysis,
    Creation,
    Argumentation,
}

const COMPUTATION: &[&str] = &[
    "resolver", "calcular", "usar", "aplicar", "solve", "calculate", "use", "apply",
];
const ANALYSIS: &[&str] = &[
    "analizar",
    "examinar",
    "relacionar",
    "comparar",
    "analyze",
    "analyse",
    "examine",
    "relate",
    "compare",
];
const CREATION: &[&str] = &[
    "diseñar",
    "construir",
    "producir",
    "planificar",
    "componer",
    "formular",
    "design",
    "build",
    "produce",
    "plan",
    "compose",
    "formulate",
];
const ARGUMENTATION: &[&str] = &[
    "argumentar",
    "justificar",
    "evaluar",
    "valorar",
    "criticar",
    "argue",
    "justify",
    "evaluate",
    "assess",
    "critique",
];

/// Trimmed, lower-cased, NFC form used whenever verbs are compared.
pub fn normalize_verb(verb: &str) -> String {
    verb.trim().to_lowercase().nfc().collect()
}

/// Classify a verb into one of the fixed categories, if any.
pub fn classify_verb(verb: &str) -> Option<VerbCategory> {
    let v = normalize_verb(verb);
    let v = v.as_str();
    if COMPUTATION.contains(&v) {
        Some(VerbCategory::Computation)
    } else if ANALYSIS.contains(&v) {
        Some(VerbCategory::Analysis)
    } else if CREATION.contains(&v) {
        Some(VerbCategory::Creation)
    } else if ARGUMENTATION.contains(&v) {
        Some(VerbCategory::Argumentation)
    } else {
        None
    }
}

/// Suggest a measurable criterion clause for the given picks.
///
/// A non-empty rubric always wins; otherwise the verb category decides, and
/// an unknown verb gets the generic performance clause.
pub fn suggest_criterion(lang: Lang, verb: &str, content: &str, rubric: &[RubricRow]) -> String {
    if !rubric.is_empty() {
        let items = rubric
            .iter()
            .map(|r| format!("{} ({}%)", r.name, r.weight))
            .collect::<Vec<_>>()
            .join(", ");
        return match lang {
            Lang::Es => format!("alcanzando ≥70% en la rúbrica ({})", items),
            Lang::En => format!("achieving ≥70% on the rubric ({})", items),
        };
    }

    let content = content.trim();
    let base = match (lang, content.is_empty()) {
        (Lang::Es, true) => "sobre el tema".to_string(),
        (Lang::Es, false) => format!("sobre {}", content),
        (Lang::En, true) => "on the topic".to_string(),
        (Lang::En, false) => format!("on {}", content),
    };

    match (classify_verb(verb), lang) {
        (Some(VerbCategory::Computation), Lang::Es) => {
            format!("resolviendo correctamente al menos 4 de 5 ejercicios {}", base)
        }
        (Some(VerbCategory::Computation), Lang::En) => {
            format!("correctly solving at least 4 of 5 exercises {}", base)
        }
        (Some(VerbCategory::Analysis), Lang::Es) => {
            format!("identificando al menos 3 evidencias o patrones clave {}", base)
        }
        (Some(VerbCategory::Analysis), Lang::En) => {
            format!("identifying at least 3 key pieces of evidence or patterns {}", base)
        }
        (Some(VerbCategory::Creation), Lang::Es) => {
            "entregando un prototipo funcional que cumpla 3 de 4 criterios de calidad".to_string()
        }
        (Some(VerbCategory::Creation), Lang::En) => {
            "delivering a working prototype that meets 3 of 4 quality criteria".to_string()
        }
        (Some(VerbCategory::Argumentation), Lang::Es) => {
            "presentando argumentos con ≥2 fuentes fiables y puntuación ≥3/4 en la rúbrica"
                .to_string()
        }
        (Some(VerbCategory::Argumentation), Lang::En) => {
            "presenting arguments with ≥2 reliable sources and a score of ≥3/4 on the rubric"
                .to_string()
        }
        (None, Lang::Es) => "cumpliendo los criterios de desempeño definidos (≥70%)".to_string(),
        (None, Lang::En) => "meeting the defined performance criteria (≥70%)".to_string(),
    }
}

/// Criterion clause for a deliverable product chip.
pub fn product_criterion(lang: Lang, product: &str) -> String {
    match lang {
        Lang::Es => format!("entregando un {} que cumpla ≥70% de la rúbrica", product.trim()),
        Lang::En => format!("delivering a {} that meets ≥70% of the rubric", product.trim()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rubric_row_parses_name_and_weight() {
        let row: RubricRow = "Rigor = 2 =50".parse().unwrap();
        assert_eq!(row, RubricRow::new("Rigor = 2", 50));
        assert!("Rigor".parse::<RubricRow>().is_err());
        assert!("=40".parse::<RubricRow>().is_err());
        assert!("Rigor=cuarenta".parse::<RubricRow>().is_err());
    }

    #[test]
    fn rubric_clause_lists_rows_in_order() {
        let rubric = vec![RubricRow::new("Precisión", 50), RubricRow::new("Estilo", 25)];
        let out = suggest_criterion(Lang::Es, "analizar", "tema", &rubric);
        assert_eq!(
            out,
            "alcanzando ≥70% en la rúbrica (Precisión (50%), Estilo (25%))"
        );
    }

    #[test]
    fn verb_categories() {
        assert_eq!(classify_verb("  Calcular "), Some(VerbCategory::Computation));
        assert_eq!(classify_verb("EXAMINAR"), Some(VerbCategory::Analysis));
        assert_eq!(classify_verb("Diseñar"), Some(VerbCategory::Creation));
        assert_eq!(classify_verb("assess"), Some(VerbCategory::Argumentation));
        assert_eq!(classify_verb("enumerar"), None);
    }

    #[test]
    fn decomposed_accents_still_classify() {
        // "diseñar" with n + combining tilde
        let decomposed = "disen\u{0303}ar";
        assert_eq!(classify_verb(decomposed), Some(VerbCategory::Creation));
    }

    #[test]
    fn content_placeholder_when_empty() {
        assert_eq!(
            suggest_criterion(Lang::Es, "resolver", "", &[]),
            "resolviendo correctamente al menos 4 de 5 ejercicios sobre el tema"
        );
        assert_eq!(
            suggest_criterion(Lang::Es, "analizar", "la Guerra Fría", &[]),
            "identificando al menos 3 evidencias o patrones clave sobre la Guerra Fría"
        );
    }

    #[test]
    fn unknown_verb_gets_generic_fallback() {
        assert_eq!(
            suggest_criterion(Lang::Es, "bailar", "salsa", &[]),
            "cumpliendo los criterios de desempeño definidos (≥70%)"
        );
        assert_eq!(
            suggest_criterion(Lang::En, "dance", "salsa", &[]),
            "meeting the defined performance criteria (≥70%)"
        );
    }

    #[test]
    fn product_clause_and_sum() {
        assert_eq!(
            product_criterion(Lang::Es, "ensayo"),
            "entregando un ensayo que cumpla ≥70% de la rúbrica"
        );
        assert_eq!(rubric_sum(&default_rubric()), 100);
        assert_eq!(rubric_sum(&[]), 0);
    }
}
