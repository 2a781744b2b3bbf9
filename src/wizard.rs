//! Wizard state and its reducer.
//!
//! The state is owned by the top-level view and only changes through
//! [`WizardState::apply`]. Derived values (suggested criterion, generated
//! sentence, findings) are recomputed inside the reducer when their inputs
//! change, never by ambient watchers.

use crate::bank::PhraseBank;
use crate::criterion::{RubricRow, default_rubric, product_criterion, rubric_sum, suggest_criterion};
use crate::generator::{OutcomeParts, generate_outcome, improve_outcome};
use crate::i18n::Lang;
use crate::validator::validate_outcome;
use crate::variations::{Sampler, generate_variations};

pub const FIRST_STEP: u8 = 1;
/// Last screen the wizard can reach. The step strip shows eight labels but
/// validation and export share the seventh screen.
pub const LAST_STEP: u8 = 7;
pub const DEFAULT_DURATION: &str = "1 clase";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardState {
    pub step: u8,
    pub lang: Lang,
    pub nivel: String,
    pub area: String,
    pub tema: String,
    pub duracion: String,
    pub nivel_cognitivo: String,
    pub verbo: String,
    pub contenido: String,
    pub condicion: String,
    pub criterio: String,
    /// Set once the user types or picks a criterion; suppresses re-suggestion.
    pub criterion_overridden: bool,
    pub rubric: Vec<RubricRow>,
    pub resultado: String,
    pub variaciones: Vec<String>,
    pub validacion: Vec<String>,
    default_duration: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SetLang(Lang),
    SetNivel(String),
    SetArea(String),
    SetTema(String),
    SetDuracion(String),
    SetNivelCognitivo(String),
    SetVerbo(String),
    SetContenido(String),
    SetCondicion(String),
    SetCriterio(String),
    PickProduct(String),
    AddRubricRow,
    UpdateRubricName(usize, String),
    UpdateRubricWeight(usize, i32),
    RemoveRubricRow(usize),
    Next,
    Back,
    GoTo(u8),
    Generate,
    Improve,
    EditResult(String),
    Validate,
    Reset,
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new(Lang::default(), DEFAULT_DURATION)
    }
}

impl WizardState {
    pub fn new(lang: Lang, default_duration: &str) -> Self {
        Self {
            step: FIRST_STEP,
            lang,
            nivel: String::new(),
            area: String::new(),
            tema: String::new(),
            duracion: default_duration.to_string(),
            nivel_cognitivo: String::new(),
            verbo: String::new(),
            contenido: String::new(),
            condicion: String::new(),
            criterio: String::new(),
            criterion_overridden: false,
            rubric: default_rubric(),
            resultado: String::new(),
            variaciones: Vec::new(),
            validacion: Vec::new(),
            default_duration: default_duration.to_string(),
        }
    }

    pub fn parts(&self) -> OutcomeParts {
        OutcomeParts {
            duracion: self.duracion.clone(),
            verbo: self.verbo.clone(),
            contenido: self.contenido.clone(),
            condicion: self.condicion.clone(),
            criterio: self.criterio.clone(),
        }
    }

    pub fn rubric_sum(&self) -> i32 {
        rubric_sum(&self.rubric)
    }

    /// Whether the current step has what it needs to move forward.
    pub fn can_advance(&self) -> bool {
        match self.step {
            1 => !self.nivel.trim().is_empty() && !self.area.trim().is_empty(),
            2 => !self.verbo.trim().is_empty(),
            3 => !self.contenido.trim().is_empty(),
            4 => !self.condicion.trim().is_empty(),
            5 | 6 => true,
            _ => false,
        }
    }

    /// Outcome text as it would be generated right now.
    pub fn preview(&self) -> String {
        generate_outcome(self.lang, &self.parts(), None)
    }

    fn resuggest(&mut self) {
        if self.criterion_overridden || self.verbo.trim().is_empty() {
            return;
        }
        self.criterio = suggest_criterion(self.lang, &self.verbo, &self.contenido, &self.rubric);
    }

    fn generate(&mut self) {
        self.resultado = self.preview();
        self.validacion = validate_outcome(self.lang, &self.resultado);
    }

    fn validate(&mut self) {
        if self.resultado.trim().is_empty() {
            self.resultado = self.preview();
        }
        self.validacion = validate_outcome(self.lang, &self.resultado);
    }

    /// Apply one user action.
    pub fn apply(&mut self, action: Action) {
        tracing::debug!("wizard step {} <- {:?}", self.step, action);
        match action {
            Action::SetLang(lang) => {
                self.lang = lang;
                self.resuggest();
            }
            Action::SetNivel(v) => self.nivel = v,
            Action::SetArea(v) => self.area = v,
            Action::SetTema(v) => self.tema = v,
            Action::SetDuracion(v) => self.duracion = v,
            Action::SetNivelCognitivo(level) => {
                self.nivel_cognitivo = level;
                self.verbo.clear();
            }
            Action::SetVerbo(v) => {
                self.verbo = v;
                self.resuggest();
            }
            Action::SetContenido(v) => {
                self.contenido = v;
                self.resuggest();
            }
            Action::SetCondicion(v) => self.condicion = v,
            Action::SetCriterio(v) => {
                // An emptied field accepts suggestions again, but only once
                // verb, content or rubric change.
                self.criterion_overridden = !v.trim().is_empty();
                self.criterio = v;
            }
            Action::PickProduct(product) => {
                self.criterio = product_criterion(self.lang, &product);
                self.criterion_overridden = true;
            }
            Action::AddRubricRow => {
                self.rubric
                    .push(RubricRow::new(self.lang.labels().new_criterion, 20));
                self.resuggest();
            }
            Action::UpdateRubricName(idx, name) => {
                if let Some(row) = self.rubric.get_mut(idx) {
                    row.name = name;
                    self.resuggest();
                }
            }
            Action::UpdateRubricWeight(idx, weight) => {
                if let Some(row) = self.rubric.get_mut(idx) {
                    row.weight = weight;
                    self.resuggest();
                }
            }
            Action::RemoveRubricRow(idx) => {
                if idx < self.rubric.len() {
                    self.rubric.remove(idx);
                    self.resuggest();
                }
            }
            Action::Next => self.advance(),
            Action::Back => {
                if self.step > FIRST_STEP {
                    self.step -= 1;
                }
            }
            Action::GoTo(step) => {
                if (FIRST_STEP..=LAST_STEP).contains(&step) && step <= self.step {
                    self.step = step;
                }
            }
            Action::Generate => self.generate(),
            Action::Improve => {
                let base = if self.resultado.trim().is_empty() {
                    self.preview()
                } else {
                    self.resultado.clone()
                };
                self.resultado = improve_outcome(self.lang, &base);
                self.validacion = validate_outcome(self.lang, &self.resultado);
            }
            Action::EditResult(text) => {
                self.resultado = text;
                self.validacion.clear();
            }
            Action::Validate => self.validate(),
            Action::Reset => {
                *self = Self::new(self.lang, &self.default_duration);
            }
        }
    }

    fn advance(&mut self) {
        if !self.can_advance() {
            tracing::debug!("step {} incomplete, staying", self.step);
            return;
        }
        match self.step {
            5 => {
                if self.criterio.trim().is_empty() {
                    self.criterio =
                        suggest_criterion(self.lang, &self.verbo, &self.contenido, &self.rubric);
                }
                self.generate();
                self.step = 6;
            }
            6 => {
                self.validate();
                self.step = 7;
            }
            s if s < LAST_STEP => self.step += 1,
            _ => {}
        }
    }

    /// Fill `variaciones` with up to three alternative sentences.
    pub fn generate_variations(&mut self, bank: &PhraseBank, sampler: &mut dyn Sampler) {
        self.variaciones = generate_variations(
            self.lang,
            &self.parts(),
            bank,
            &self.nivel_cognitivo,
            &self.rubric,
            sampler,
        );
    }
}
