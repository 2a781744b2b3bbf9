//! Static label tables for the two supported locales.

use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    Es,
    En,
}

impl Lang {
    pub fn as_str(&self) -> &'static str {
        match self {
            Lang::Es => "es",
            Lang::En => "en",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "es" | "spa" | "spanish" | "español" => Some(Lang::Es),
            "en" | "eng" | "english" => Some(Lang::En),
            _ => None,
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Lang::Es => Lang::En,
            Lang::En => Lang::Es,
        }
    }

    pub fn labels(&self) -> &'static Labels {
        match self {
            Lang::Es => &ES,
            Lang::En => &EN,
        }
    }
}

pub struct Labels {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub step: &'static str,
    pub steps: [&'static str; 8],
    pub next: &'static str,
    pub back: &'static str,
    pub reset: &'static str,
    pub improve: &'static str,
    pub validate_export: &'static str,
    pub copy: &'static str,
    pub copy_success: &'static str,
    pub copy_manual_title: &'static str,
    pub copy_manual_msg: &'static str,
    pub close: &'static str,
    pub download_txt: &'static str,
    pub download_docx: &'static str,
    pub download_xlsx: &'static str,
    pub create_another: &'static str,
    pub context_title: &'static str,
    pub context_desc: &'static str,
    pub level: &'static str,
    pub area: &'static str,
    pub topic: &'static str,
    pub duration: &'static str,
    pub examples: &'static str,
    pub bloom_title: &'static str,
    pub bloom_desc: &'static str,
    pub cognitive_level: &'static str,
    pub verb: &'static str,
    pub custom_verb: &'static str,
    pub content_title: &'static str,
    pub condition_title: &'static str,
    pub condition_desc: &'static str,
    pub custom_condition: &'static str,
    pub criterion_title: &'static str,
    pub rubric_title: &'static str,
    pub rubric_desc: &'static str,
    pub add_criterion: &'static str,
    pub new_criterion: &'static str,
    pub current_sum: &'static str,
    pub gen_btn: &'static str,
    pub result_title: &'static str,
    pub result_desc: &'static str,
    pub variations_btn: &'static str,
    pub variations: &'static str,
    pub variation: &'static str,
    pub outcome_label: &'static str,
    pub outcome_heading: &'static str,
    pub validation_title: &'static str,
    pub validation_ok: &'static str,
    pub final_outcome: &'static str,
    pub empty: &'static str,
    pub lang: &'static str,
    pub bank: &'static str,
    pub bank_desc: &'static str,
    pub bank_save: &'static str,
    pub bank_saved: &'static str,
    pub invalid_json: &'static str,
    pub exported: &'static str,
}

pub static ES: Labels = Labels {
    title: "Creador de Resultados de Aprendizaje",
    subtitle: "Redacta resultados claros, observables y medibles.",
    step: "Paso",
    steps: [
        "Contexto",
        "Verbo (Bloom)",
        "Contenido/Competencia",
        "Condición/Recursos",
        "Criterio medible",
        "Rúbrica rápida (opcional)",
        "Generar",
        "Validar y exportar",
    ],
    next: "Continuar",
    back: "Atrás",
    reset: "Reiniciar",
    improve: "Mejorar",
    validate_export: "Validar y exportar",
    copy: "Copiar",
    copy_success: "Copiado al portapapeles",
    copy_manual_title: "Copiar manualmente",
    copy_manual_msg: "Selecciona el texto y cópialo con el atajo de tu terminal",
    close: "Cerrar",
    download_txt: "Descargar .txt",
    download_docx: "Descargar .docx",
    download_xlsx: "Descargar .xlsx",
    create_another: "Crear otro",
    context_title: "Selecciona el contexto",
    context_desc: "Personalizamos ejemplos y verbos según tu realidad.",
    level: "Nivel educativo",
    area: "Área o asignatura",
    topic: "Tema específico",
    duration: "Duración",
    examples: "Ejemplos",
    bloom_title: "Selecciona un verbo de acción (Bloom)",
    bloom_desc: "Escoge el nivel cognitivo y luego un verbo observable.",
    cognitive_level: "Nivel",
    verb: "Verbo",
    custom_verb: "o escribe tu propio verbo en infinitivo",
    content_title: "Define el contenido o competencia",
    condition_title: "Describe la condición o contexto",
    condition_desc: "¿Con qué recursos o situación se evidenciará?",
    custom_condition: "o escribe tu propia condición (p. ej., mediante un estudio de caso real)",
    criterion_title: "Establece el criterio de evaluación",
    rubric_title: "Rúbrica rápida (opcional)",
    rubric_desc: "3–4 criterios con pesos (100%).",
    add_criterion: "Añadir criterio",
    new_criterion: "Criterio nuevo",
    current_sum: "Suma actual",
    gen_btn: "Generar",
    result_title: "Resultado generado",
    result_desc: "Edita o mejora automáticamente.",
    variations_btn: "Generar 3 variaciones",
    variations: "Variaciones",
    variation: "Variación",
    outcome_label: "Resultado",
    outcome_heading: "Resultado de aprendizaje",
    validation_title: "Validación automática",
    validation_ok: "✅ ¡Todo se ve bien!",
    final_outcome: "Resultado final",
    empty: "(vacío)",
    lang: "Idioma",
    bank: "Banco",
    bank_desc: "Personaliza verbos Bloom y ejemplos por área. Se guarda localmente.",
    bank_save: "Guardar",
    bank_saved: "Banco guardado",
    invalid_json: "JSON inválido",
    exported: "Exportado a",
};

pub static EN: Labels = Labels {
    title: "Learning Outcomes Builder",
    subtitle: "Write clear, observable, measurable outcomes.",
    step: "Step",
    steps: [
        "Context",
        "Verb (Bloom)",
        "Content/Competency",
        "Condition/Resources",
        "Measurable criterion",
        "Quick rubric (optional)",
        "Generate",
        "Validate & export",
    ],
    next: "Next",
    back: "Back",
    reset: "Reset",
    improve: "Improve",
    validate_export: "Validate & export",
    copy: "Copy",
    copy_success: "Copied to clipboard",
    copy_manual_title: "Copy manually",
    copy_manual_msg: "Select the text and copy it with your terminal's shortcut",
    close: "Close",
    download_txt: "Download .txt",
    download_docx: "Download .docx",
    download_xlsx: "Download .xlsx",
    create_another: "Create another",
    context_title: "Select context",
    context_desc: "We tailor examples and verbs to your reality.",
    level: "Educational level",
    area: "Subject/Area",
    topic: "Specific topic",
    duration: "Duration",
    examples: "Examples",
    bloom_title: "Choose an action verb (Bloom)",
    bloom_desc: "Pick the cognitive level then an observable verb.",
    cognitive_level: "Level",
    verb: "Verb",
    custom_verb: "or type your own verb (infinitive)",
    content_title: "Define content or competency",
    condition_title: "Describe the condition/context",
    condition_desc: "With which resources or situation?",
    custom_condition: "or write your own condition (e.g., via a real case study)",
    criterion_title: "Set the assessment criterion",
    rubric_title: "Quick rubric (optional)",
    rubric_desc: "3–4 criteria with weights (100%).",
    add_criterion: "Add criterion",
    new_criterion: "New criterion",
    current_sum: "Current sum",
    gen_btn: "Generate",
    result_title: "Generated outcome",
    result_desc: "Edit or auto-improve.",
    variations_btn: "Generate 3 variations",
    variations: "Variations",
    variation: "Variation",
    outcome_label: "Outcome",
    outcome_heading: "Learning outcome",
    validation_title: "Automatic validation",
    validation_ok: "✅ Looks good!",
    final_outcome: "Final outcome",
    empty: "(empty)",
    lang: "Language",
    bank: "Bank",
    bank_desc: "Customize Bloom verbs and area examples. Saved locally.",
    bank_save: "Save",
    bank_saved: "Bank saved",
    invalid_json: "Invalid JSON",
    exported: "Exported to",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_codes_and_names() {
        assert_eq!(Lang::parse("ES"), Some(Lang::Es));
        assert_eq!(Lang::parse(" english "), Some(Lang::En));
        assert_eq!(Lang::parse("fr"), None);
    }

    #[test]
    fn both_tables_have_eight_steps() {
        assert_eq!(Lang::Es.labels().steps.len(), 8);
        assert_eq!(Lang::En.labels().steps[7], "Validate & export");
        assert_eq!(Lang::Es.toggle(), Lang::En);
    }
}
