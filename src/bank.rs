//! Phrase bank: Bloom verbs per cognitive level, topic examples per area,
//! resource phrases and deliverable products. Persisted as one JSON blob.

use crate::error::{OutcomesError, Result};
use crate::i18n::Lang;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Storage key of the persisted bank; the file is `<key>.json`.
pub const BANK_KEY: &str = "outcomes_bank_v1";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhraseBank {
    // Missing keys in a user edit are empty, not the built-in values.
    #[serde(default)]
    pub bloom_verbs: IndexMap<String, Vec<String>>,
    #[serde(default)]
    pub area_examples: IndexMap<String, Vec<String>>,
    #[serde(default)]
    pub resources: Vec<String>,
    #[serde(default)]
    pub products: Vec<String>,
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for PhraseBank {
    fn default() -> Self {
        let mut bloom_verbs = IndexMap::new();
        bloom_verbs.insert(
            "Recordar".to_string(),
            owned(&[
                "enumerar",
                "definir",
                "identificar",
                "listar",
                "nombrar",
                "reconocer",
                "describir",
            ]),
        );
        bloom_verbs.insert(
            "Comprender".to_string(),
            owned(&[
                "explicar",
                "resumir",
                "interpretar",
                "clasificar",
                "comparar",
                "ilustrar",
            ]),
        );
        bloom_verbs.insert(
            "Aplicar".to_string(),
            owned(&[
                "resolver",
                "usar",
                "implementar",
                "demostrar",
                "ejecutar",
                "calcular",
            ]),
        );
        bloom_verbs.insert(
            "Analizar".to_string(),
            owned(&[
                "analizar",
                "diferenciar",
                "organizar",
                "atribuir",
                "relacionar",
                "examinar",
            ]),
        );
        bloom_verbs.insert(
            "Evaluar".to_string(),
            owned(&[
                "evaluar",
                "justificar",
                "argumentar",
                "valorar",
                "criticar",
                "comprobar",
            ]),
        );
        bloom_verbs.insert(
            "Crear".to_string(),
            owned(&[
                "diseñar",
                "construir",
                "producir",
                "planificar",
                "componer",
                "formular",
            ]),
        );

        let mut area_examples = IndexMap::new();
        area_examples.insert(
            "Matemáticas".to_string(),
            owned(&[
                "ecuaciones cuadráticas",
                "funciones lineales",
                "probabilidad básica",
            ]),
        );
        area_examples.insert(
            "Lengua".to_string(),
            owned(&[
                "argumentación escrita",
                "comprensión lectora",
                "cohesión y coherencia",
            ]),
        );
        area_examples.insert(
            "Ciencias".to_string(),
            owned(&["ciclo del agua", "fotosíntesis", "cambio climático"]),
        );
        area_examples.insert(
            "Historia".to_string(),
            owned(&[
                "Revolución Industrial",
                "Independencias en América",
                "Guerra Fría",
            ]),
        );
        area_examples.insert(
            "Tecnología".to_string(),
            owned(&[
                "diseño de prototipos",
                "alfabetización digital",
                "seguridad en la red",
            ]),
        );

        Self {
            bloom_verbs,
            area_examples,
            resources: owned(&[
                "a partir de fuentes primarias",
                "usando simuladores virtuales",
                "con apoyo de rúbrica",
                "mediante una guía de lectura",
                "en equipo de 3 a 4 estudiantes",
                "con retroalimentación por pares",
            ]),
            products: owned(&[
                "ensayo",
                "informe",
                "presentación",
                "prototipo",
                "portafolio",
                "póster científico",
                "rúbrica aplicada",
            ]),
        }
    }
}

impl PhraseBank {
    /// Cognitive level names in bank order.
    pub fn levels(&self) -> Vec<&str> {
        self.bloom_verbs.keys().map(String::as_str).collect()
    }

    /// Verbs for a cognitive level; empty when the level is unknown.
    pub fn verbs_for(&self, level: &str) -> &[String] {
        self.bloom_verbs
            .get(level)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Topic examples shown as a hint for the chosen area.
    pub fn area_examples(&self, area: &str) -> &[String] {
        self.area_examples
            .get(area)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn areas(&self) -> Vec<&str> {
        self.area_examples.keys().map(String::as_str).collect()
    }

    pub fn to_pretty_json(&self) -> String {
        // A struct of strings, vecs and string-keyed maps always serializes.
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

/// File-backed key/value slot holding the serialized bank.
#[derive(Debug, Clone)]
pub struct BankStore {
    path: PathBuf,
}

impl BankStore {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            path: data_dir.as_ref().join(format!("{}.json", BANK_KEY)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the persisted bank. Missing or malformed state falls back to the
    /// built-in default without surfacing an error.
    pub fn load(&self) -> PhraseBank {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::debug!("No persisted bank at {}: {}", self.path.display(), e);
                return PhraseBank::default();
            }
        };
        match PhraseBank::from_json(&raw) {
            Ok(bank) => bank,
            Err(e) => {
                tracing::warn!(
                    "Persisted bank at {} is malformed, using defaults: {}",
                    self.path.display(),
                    e
                );
                PhraseBank::default()
            }
        }
    }

    /// Write `bank` as pretty JSON, creating the data directory if needed.
    pub fn save(&self, bank: &PhraseBank) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, bank.to_pretty_json())?;
        tracing::info!("Bank saved to {}", self.path.display());
        Ok(())
    }

    /// Parse a hand-edited bank and, if it parses, replace `bank` and persist.
    /// On a syntax error `bank` is left untouched and the returned error holds
    /// the localized rejection notice. A write failure keeps the replacement
    /// in memory and returns `Storage`.
    pub fn save_from_text(&self, lang: Lang, text: &str, bank: &mut PhraseBank) -> Result<()> {
        let parsed = PhraseBank::from_json(text).map_err(|e| {
            let detail = match e {
                OutcomesError::Serialization { message } => message,
                other => other.to_string(),
            };
            OutcomesError::InvalidBank {
                message: format!("{}: {}", lang.labels().invalid_json, detail),
            }
        })?;
        *bank = parsed;
        self.save(bank).map_err(|e| {
            tracing::warn!("Edited bank kept in memory but not persisted: {}", e);
            match e {
                OutcomesError::Storage { message } => OutcomesError::Storage {
                    message: format!("{}: {}", self.path.display(), message),
                },
                other => other,
            }
        })
    }

    /// Remove the persisted file so the next load yields the default bank.
    pub fn clear(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bank_has_six_levels_in_bloom_order() {
        let bank = PhraseBank::default();
        assert_eq!(
            bank.levels(),
            vec![
                "Recordar",
                "Comprender",
                "Aplicar",
                "Analizar",
                "Evaluar",
                "Crear"
            ]
        );
        assert!(bank.bloom_verbs.values().all(|v| !v.is_empty()));
        assert!(!bank.resources.is_empty());
        assert!(!bank.products.is_empty());
    }

    #[test]
    fn json_uses_camel_case_keys() {
        let json = PhraseBank::default().to_pretty_json();
        assert!(json.contains("\"bloomVerbs\""));
        assert!(json.contains("\"areaExamples\""));
        let back = PhraseBank::from_json(&json).unwrap();
        assert_eq!(back, PhraseBank::default());
    }

    #[test]
    fn unknown_lookups_are_empty() {
        let bank = PhraseBank::default();
        assert!(bank.verbs_for("Soñar").is_empty());
        assert!(bank.area_examples("Música").is_empty());
        assert_eq!(bank.area_examples("Historia")[0], "Revolución Industrial");
    }

    #[test]
    fn partial_override_is_accepted_as_is() {
        let bank = PhraseBank::from_json(r#"{"resources":["con mapas"]}"#).unwrap();
        assert_eq!(bank.resources, vec!["con mapas".to_string()]);
        assert!(bank.bloom_verbs.is_empty());
    }
}
