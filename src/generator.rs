//! Outcome sentence templating.

use crate::i18n::Lang;
use crate::validator::has_measurable_threshold;
use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("static regex"));
static SPACE_BEFORE_COMMA: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s,").expect("static regex"));
static SPACE_BEFORE_FINAL_DOT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s\.$").expect("static regex"));

/// The form values a sentence is built from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutcomeParts {
    pub duracion: String,
    pub verbo: String,
    pub contenido: String,
    pub condicion: String,
    pub criterio: String,
}

/// Replacement verb/condition/criterion used when building variations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub verb: String,
    pub condition: String,
    pub criterion: String,
}

/// Opening clause up to and including the modal phrase.
pub fn preamble(lang: Lang, duracion: &str) -> String {
    match lang {
        Lang::Es => format!(
            "Al finalizar {}, el estudiante será capaz de",
            duracion.trim()
        ),
        Lang::En => format!(
            "By the end of {}, the student will be able to",
            duracion.trim()
        ),
    }
}

/// Collapse runs of whitespace and drop the space left before a comma or the
/// closing period when an optional piece was empty.
pub fn normalize_spacing(text: &str) -> String {
    let collapsed = WHITESPACE.replace_all(text.trim(), " ");
    let commas = SPACE_BEFORE_COMMA.replace_all(&collapsed, ",");
    SPACE_BEFORE_FINAL_DOT.replace(&commas, ".").into_owned()
}

/// Compose the outcome sentence. `overrides` replace verb, condition and
/// criterion for this call only; `parts` is never modified.
pub fn generate_outcome(lang: Lang, parts: &OutcomeParts, overrides: Option<&Overrides>) -> String {
    let (verb, condition, criterion) = match overrides {
        Some(o) => (o.verb.as_str(), o.condition.as_str(), o.criterion.as_str()),
        None => (
            parts.verbo.as_str(),
            parts.condicion.as_str(),
            parts.criterio.as_str(),
        ),
    };
    let criterion = criterion.trim();
    let tail = if criterion.is_empty() {
        String::new()
    } else {
        format!(", {}", criterion)
    };
    let raw = format!(
        "{} {} {} {}{}.",
        preamble(lang, &parts.duracion),
        verb.trim().to_lowercase(),
        parts.contenido.trim(),
        condition.trim(),
        tail
    );
    normalize_spacing(&raw)
}

/// Tidy an outcome and append a default rubric threshold when none is present.
pub fn improve_outcome(lang: Lang, text: &str) -> String {
    let tidy = WHITESPACE.replace_all(text.trim(), " ").into_owned();
    if has_measurable_threshold(&tidy) {
        return tidy;
    }
    let extra = match lang {
        Lang::Es => " (Criterio: desempeño ≥70% según rúbrica).",
        Lang::En => " (Criterion: performance ≥70% by rubric).",
    };
    format!("{}{}", tidy, extra)
}
