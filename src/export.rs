//! Plain text, .docx and .xlsx serializers for the final outcome.

use crate::error::{OutcomesError, Result};
use crate::i18n::Lang;
use docx_rs::{Docx, Paragraph, Run};
use rust_xlsxwriter::Workbook;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Base name shared by every exported file.
pub const EXPORT_STEM: &str = "resultado_aprendizaje";

/// Name of the single worksheet in the spreadsheet export.
pub const SHEET_NAME: &str = "Outcome";

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    Txt,
    Docx,
    Xlsx,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Txt => "txt",
            ExportFormat::Docx => "docx",
            ExportFormat::Xlsx => "xlsx",
        }
    }

    pub fn file_name(&self) -> String {
        format!("{}.{}", EXPORT_STEM, self.extension())
    }
}

/// Outcome text followed, when present, by a bulleted variations section.
pub fn to_plain_text(lang: Lang, resultado: &str, variaciones: &[String]) -> String {
    let mut out = resultado.to_string();
    if !variaciones.is_empty() {
        out.push_str("\n\n");
        out.push_str(lang.labels().variations);
        out.push(':');
        for v in variaciones {
            out.push_str("\n- ");
            out.push_str(v);
        }
    }
    out
}

fn bold_paragraph(text: &str) -> Paragraph {
    Paragraph::new().add_run(Run::new().add_text(text).bold())
}

fn text_paragraph(text: &str) -> Paragraph {
    Paragraph::new().add_run(Run::new().add_text(text))
}

/// Assemble the document paragraphs in export order.
pub fn build_docx(lang: Lang, resultado: &str, variaciones: &[String]) -> Docx {
    let labels = lang.labels();
    let mut doc = Docx::new()
        .add_paragraph(bold_paragraph(labels.outcome_heading))
        .add_paragraph(text_paragraph(resultado));
    if !variaciones.is_empty() {
        doc = doc
            .add_paragraph(Paragraph::new())
            .add_paragraph(bold_paragraph(labels.variations));
        for v in variaciones {
            doc = doc.add_paragraph(text_paragraph(&format!("• {}", v)));
        }
    }
    doc
}

/// Spreadsheet rows: outcome first, then one numbered row per variation.
pub fn sheet_rows(lang: Lang, resultado: &str, variaciones: &[String]) -> Vec<(String, String)> {
    let labels = lang.labels();
    let mut rows = vec![(labels.outcome_label.to_string(), resultado.to_string())];
    rows.extend(
        variaciones
            .iter()
            .enumerate()
            .map(|(i, v)| (format!("{} {}", labels.variation, i + 1), v.clone())),
    );
    rows
}

fn target(dir: &Path, format: ExportFormat) -> Result<PathBuf> {
    if !dir.as_os_str().is_empty() {
        std::fs::create_dir_all(dir).map_err(|e| OutcomesError::Export {
            message: format!("cannot create {}: {}", dir.display(), e),
        })?;
    }
    Ok(dir.join(format.file_name()))
}

pub fn export_txt(dir: &Path, lang: Lang, resultado: &str, variaciones: &[String]) -> Result<PathBuf> {
    let path = target(dir, ExportFormat::Txt)?;
    std::fs::write(&path, to_plain_text(lang, resultado, variaciones)).map_err(|e| {
        OutcomesError::Export {
            message: format!("txt: {}", e),
        }
    })?;
    Ok(path)
}

pub fn export_docx(
    dir: &Path,
    lang: Lang,
    resultado: &str,
    variaciones: &[String],
) -> Result<PathBuf> {
    let path = target(dir, ExportFormat::Docx)?;
    let file = File::create(&path).map_err(|e| OutcomesError::Export {
        message: format!("docx: {}", e),
    })?;
    build_docx(lang, resultado, variaciones)
        .build()
        .pack(file)
        .map_err(|e| OutcomesError::Export {
            message: format!("docx: {}", e),
        })?;
    Ok(path)
}

pub fn export_xlsx(
    dir: &Path,
    lang: Lang,
    resultado: &str,
    variaciones: &[String],
) -> Result<PathBuf> {
    let path = target(dir, ExportFormat::Xlsx)?;
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;
    for (row, (label, text)) in sheet_rows(lang, resultado, variaciones).iter().enumerate() {
        let row = u32::try_from(row).map_err(|_| OutcomesError::Export {
            message: "too many rows".into(),
        })?;
        sheet.write_string(row, 0, label.as_str())?;
        sheet.write_string(row, 1, text.as_str())?;
    }
    workbook.save(&path)?;
    Ok(path)
}

/// Write one export and return the file path.
pub fn export(
    format: ExportFormat,
    dir: &Path,
    lang: Lang,
    resultado: &str,
    variaciones: &[String],
) -> Result<PathBuf> {
    let path = match format {
        ExportFormat::Txt => export_txt(dir, lang, resultado, variaciones),
        ExportFormat::Docx => export_docx(dir, lang, resultado, variaciones),
        ExportFormat::Xlsx => export_xlsx(dir, lang, resultado, variaciones),
    }?;
    tracing::info!("Exported {} to {}", format.extension(), path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_without_variations_is_just_the_outcome() {
        assert_eq!(to_plain_text(Lang::Es, "Resultado.", &[]), "Resultado.");
    }

    #[test]
    fn plain_text_lists_variations() {
        let vars = vec!["Uno.".to_string(), "Dos.".to_string()];
        assert_eq!(
            to_plain_text(Lang::En, "Main.", &vars),
            "Main.\n\nVariations:\n- Uno.\n- Dos."
        );
    }

    #[test]
    fn sheet_rows_are_labelled_and_numbered() {
        let vars = vec!["a".to_string(), "b".to_string()];
        let rows = sheet_rows(Lang::Es, "r", &vars);
        assert_eq!(
            rows,
            vec![
                ("Resultado".to_string(), "r".to_string()),
                ("Variación 1".to_string(), "a".to_string()),
                ("Variación 2".to_string(), "b".to_string()),
            ]
        );
    }

    #[test]
    fn fixed_file_names() {
        assert_eq!(ExportFormat::Txt.file_name(), "resultado_aprendizaje.txt");
        assert_eq!(ExportFormat::Docx.file_name(), "resultado_aprendizaje.docx");
        assert_eq!(ExportFormat::Xlsx.file_name(), "resultado_aprendizaje.xlsx");
    }
}
