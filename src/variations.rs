//! Alternative outcome sentences built from sampled verbs and conditions.

use crate::bank::PhraseBank;
use crate::criterion::{RubricRow, normalize_verb, suggest_criterion};
use crate::generator::{OutcomeParts, Overrides, generate_outcome};
use crate::i18n::Lang;
use rand::rngs::{StdRng, ThreadRng};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Maximum number of variations produced per call.
pub const MAX_VARIATIONS: usize = 3;

/// Verbs used when the cognitive level offers too few alternatives.
pub const FALLBACK_VERBS: [&str; 3] = ["analizar", "diseñar", "resolver"];

/// Source of non-repeating samples. Swappable so callers can pin the order.
pub trait Sampler {
    /// Return at most `n` distinct entries of `items`.
    fn sample(&mut self, items: &[String], n: usize) -> Vec<String>;
}

pub struct RandomSampler<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomSampler<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomSampler<ThreadRng> {
    pub fn thread() -> Self {
        Self::new(rand::thread_rng())
    }
}

impl RandomSampler<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Sampler for RandomSampler<R> {
    fn sample(&mut self, items: &[String], n: usize) -> Vec<String> {
        let mut pool = items.to_vec();
        pool.shuffle(&mut self.rng);
        pool.truncate(n);
        pool
    }
}

/// Takes items in their given order.
#[derive(Debug, Default)]
pub struct InOrderSampler;

impl Sampler for InOrderSampler {
    fn sample(&mut self, items: &[String], n: usize) -> Vec<String> {
        items.iter().take(n).cloned().collect()
    }
}

/// Build up to three alternative sentences for the current form values.
///
/// Verbs come from `level` minus the selected verb, padded from
/// [`FALLBACK_VERBS`] (again minus the selected verb, so fewer than three
/// may come back); each verb is paired positionally with a sampled
/// resource phrase, or the current condition once those run out.
pub fn generate_variations(
    lang: Lang,
    parts: &OutcomeParts,
    bank: &PhraseBank,
    level: &str,
    rubric: &[RubricRow],
    sampler: &mut dyn Sampler,
) -> Vec<String> {
    let selected = normalize_verb(&parts.verbo);
    let alternatives: Vec<String> = bank
        .verbs_for(level)
        .iter()
        .filter(|v| normalize_verb(v) != selected)
        .cloned()
        .collect();

    let mut verbs = sampler.sample(&alternatives, MAX_VARIATIONS);
    if verbs.len() < MAX_VARIATIONS {
        let padding: Vec<String> = FALLBACK_VERBS
            .iter()
            .map(|v| v.to_string())
            .filter(|v| *v != selected && !verbs.iter().any(|p| normalize_verb(p) == *v))
            .collect();
        let needed = MAX_VARIATIONS - verbs.len();
        verbs.extend(sampler.sample(&padding, needed));
    }

    let conditions = sampler.sample(&bank.resources, MAX_VARIATIONS);
    tracing::debug!(
        "Sampled {} verbs and {} conditions for variations",
        verbs.len(),
        conditions.len()
    );

    verbs
        .iter()
        .enumerate()
        .map(|(i, verb)| {
            let condition = conditions
                .get(i)
                .cloned()
                .unwrap_or_else(|| parts.condicion.clone());
            let overrides = Overrides {
                verb: verb.clone(),
                condition,
                criterion: suggest_criterion(lang, verb, &parts.contenido, rubric),
            };
            generate_outcome(lang, parts, Some(&overrides))
        })
        .collect()
}
