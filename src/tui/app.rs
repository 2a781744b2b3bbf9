//! Wizard application state for the terminal UI: focus, overlays and the
//! mapping from key presses to wizard actions.

use crate::bank::{BankStore, PhraseBank};
use crate::clipboard::{Clipboard, CopyOptions};
use crate::export::{ExportFormat, export};
use crate::tui::textarea::TextArea;
use crate::variations::Sampler;
use crate::wizard::{Action, WizardState};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Nivel,
    Area,
    Tema,
    Duracion,
    Verbo,
    Contenido,
    Condicion,
    Criterio,
    Resultado,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chips {
    Areas,
    Levels,
    Verbs,
    Resources,
    Products,
}

/// A focusable element on the current step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Widget {
    Text(Field),
    Chips(Chips),
    RubricName(usize),
    RubricWeight(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Wizard,
    BankEditor(TextArea),
    /// Manual-copy overlay holding the text shown pre-selected.
    ManualCopy(String),
}

pub struct App {
    pub wizard: WizardState,
    pub bank: PhraseBank,
    pub mode: Mode,
    pub focus: usize,
    pub chip_cursor: usize,
    /// Blocking notice shown over everything until a key is pressed.
    pub notice: Option<String>,
    pub should_quit: bool,
    store: BankStore,
    clipboard: Clipboard,
    sampler: Box<dyn Sampler>,
    export_dir: PathBuf,
}

impl App {
    pub fn new(
        wizard: WizardState,
        store: BankStore,
        clipboard: Clipboard,
        sampler: Box<dyn Sampler>,
        export_dir: PathBuf,
    ) -> Self {
        let bank = store.load();
        Self {
            wizard,
            bank,
            mode: Mode::Wizard,
            focus: 0,
            chip_cursor: 0,
            notice: None,
            should_quit: false,
            store,
            clipboard,
            sampler,
            export_dir,
        }
    }

    /// Focusable widgets of the current step, in tab order.
    pub fn widgets(&self) -> Vec<Widget> {
        match self.wizard.step {
            1 => vec![
                Widget::Text(Field::Nivel),
                Widget::Text(Field::Area),
                Widget::Chips(Chips::Areas),
                Widget::Text(Field::Tema),
                Widget::Text(Field::Duracion),
            ],
            2 => vec![
                Widget::Chips(Chips::Levels),
                Widget::Chips(Chips::Verbs),
                Widget::Text(Field::Verbo),
            ],
            3 => vec![Widget::Text(Field::Contenido)],
            4 => vec![
                Widget::Chips(Chips::Resources),
                Widget::Text(Field::Condicion),
            ],
            5 => {
                let mut w = vec![
                    Widget::Chips(Chips::Products),
                    Widget::Text(Field::Criterio),
                ];
                for i in 0..self.wizard.rubric.len() {
                    w.push(Widget::RubricName(i));
                    w.push(Widget::RubricWeight(i));
                }
                w
            }
            6 => vec![Widget::Text(Field::Resultado)],
            _ => Vec::new(),
        }
    }

    pub fn focused(&self) -> Option<Widget> {
        self.widgets().get(self.focus).copied()
    }

    pub fn chip_items(&self, chips: Chips) -> Vec<String> {
        match chips {
            Chips::Areas => self.bank.areas().into_iter().map(str::to_string).collect(),
            Chips::Levels => self.bank.levels().into_iter().map(str::to_string).collect(),
            Chips::Verbs => self.bank.verbs_for(&self.wizard.nivel_cognitivo).to_vec(),
            Chips::Resources => self.bank.resources.clone(),
            Chips::Products => self.bank.products.clone(),
        }
    }

    pub fn field_value(&self, field: Field) -> &str {
        let w = &self.wizard;
        match field {
            Field::Nivel => &w.nivel,
            Field::Area => &w.area,
            Field::Tema => &w.tema,
            Field::Duracion => &w.duracion,
            Field::Verbo => &w.verbo,
            Field::Contenido => &w.contenido,
            Field::Condicion => &w.condicion,
            Field::Criterio => &w.criterio,
            Field::Resultado => &w.resultado,
        }
    }

    fn set_field(&mut self, field: Field, value: String) {
        let action = match field {
            Field::Nivel => Action::SetNivel(value),
            Field::Area => Action::SetArea(value),
            Field::Tema => Action::SetTema(value),
            Field::Duracion => Action::SetDuracion(value),
            Field::Verbo => Action::SetVerbo(value),
            Field::Contenido => Action::SetContenido(value),
            Field::Condicion => Action::SetCondicion(value),
            Field::Criterio => Action::SetCriterio(value),
            Field::Resultado => Action::EditResult(value),
        };
        self.wizard.apply(action);
    }

    fn move_focus(&mut self, forward: bool) {
        let n = self.widgets().len();
        if n == 0 {
            self.focus = 0;
            return;
        }
        self.focus = if forward {
            (self.focus + 1) % n
        } else {
            (self.focus + n - 1) % n
        };
        self.chip_cursor = 0;
    }

    fn step_changed(&mut self, before: u8) {
        if self.wizard.step != before {
            self.focus = 0;
            self.chip_cursor = 0;
        }
    }

    fn dispatch(&mut self, action: Action) {
        let before = self.wizard.step;
        self.wizard.apply(action);
        self.step_changed(before);
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if self.notice.take().is_some() {
            return;
        }
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q')) {
            self.should_quit = true;
            return;
        }
        match self.mode {
            Mode::Wizard => self.handle_wizard_key(key, ctrl),
            Mode::BankEditor(_) => self.handle_bank_key(key, ctrl),
            Mode::ManualCopy(_) => {
                if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
                    self.mode = Mode::Wizard;
                }
            }
        }
    }

    fn handle_wizard_key(&mut self, key: KeyEvent, ctrl: bool) {
        if ctrl {
            match key.code {
                KeyCode::Char('l') => {
                    let lang = self.wizard.lang.toggle();
                    self.dispatch(Action::SetLang(lang));
                }
                KeyCode::Char('k') => self.open_bank_editor(),
                KeyCode::Char('r') => self.dispatch(Action::Reset),
                KeyCode::Char('n') => self.dispatch(Action::Next),
                KeyCode::Char('b') => self.dispatch(Action::Back),
                KeyCode::Char('a') if self.wizard.step == 5 => {
                    self.dispatch(Action::AddRubricRow)
                }
                KeyCode::Char('d') if self.wizard.step == 5 => self.remove_focused_row(),
                KeyCode::Char('e') if self.wizard.step == 6 => self.dispatch(Action::Improve),
                KeyCode::Char('g') if self.wizard.step == 6 => {
                    self.wizard
                        .generate_variations(&self.bank, self.sampler.as_mut());
                }
                KeyCode::Char('y') if self.wizard.step == 7 => self.copy_result(),
                KeyCode::Char('t') if self.wizard.step == 7 => self.export(ExportFormat::Txt),
                KeyCode::Char('d') if self.wizard.step == 7 => self.export(ExportFormat::Docx),
                KeyCode::Char('x') if self.wizard.step == 7 => self.export(ExportFormat::Xlsx),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Tab | KeyCode::Down => self.move_focus(true),
            KeyCode::BackTab | KeyCode::Up => self.move_focus(false),
            KeyCode::Esc => self.dispatch(Action::Back),
            KeyCode::Enter => match self.focused() {
                Some(Widget::Chips(chips)) => self.pick_chip(chips),
                _ => self.dispatch(Action::Next),
            },
            KeyCode::Left => {
                if let Some(Widget::Chips(_)) = self.focused() {
                    self.chip_cursor = self.chip_cursor.saturating_sub(1);
                }
            }
            KeyCode::Right => {
                if let Some(Widget::Chips(chips)) = self.focused() {
                    let len = self.chip_items(chips).len();
                    if self.chip_cursor + 1 < len {
                        self.chip_cursor += 1;
                    }
                }
            }
            KeyCode::Backspace => self.edit_focused(None),
            KeyCode::Char(c) => self.edit_focused(Some(c)),
            _ => {}
        }
    }

    fn edit_focused(&mut self, c: Option<char>) {
        match self.focused() {
            Some(Widget::Text(field)) => {
                let mut value = self.field_value(field).to_string();
                match c {
                    Some(c) => value.push(c),
                    None => {
                        value.pop();
                    }
                }
                self.set_field(field, value);
            }
            Some(Widget::RubricName(i)) => {
                if let Some(row) = self.wizard.rubric.get(i) {
                    let mut name = row.name.clone();
                    match c {
                        Some(c) => name.push(c),
                        None => {
                            name.pop();
                        }
                    }
                    self.wizard.apply(Action::UpdateRubricName(i, name));
                }
            }
            Some(Widget::RubricWeight(i)) => {
                if let Some(row) = self.wizard.rubric.get(i) {
                    let weight = match c {
                        Some(c) => match c.to_digit(10) {
                            Some(d) => row.weight.saturating_mul(10).saturating_add(d as i32),
                            None => return,
                        },
                        None => row.weight / 10,
                    };
                    self.wizard.apply(Action::UpdateRubricWeight(i, weight));
                }
            }
            _ => {}
        }
    }

    fn pick_chip(&mut self, chips: Chips) {
        let Some(item) = self.chip_items(chips).get(self.chip_cursor).cloned() else {
            return;
        };
        let action = match chips {
            Chips::Areas => Action::SetArea(item),
            Chips::Levels => Action::SetNivelCognitivo(item),
            Chips::Verbs => Action::SetVerbo(item),
            Chips::Resources => Action::SetCondicion(item),
            Chips::Products => Action::PickProduct(item),
        };
        self.wizard.apply(action);
    }

    fn remove_focused_row(&mut self) {
        let idx = match self.focused() {
            Some(Widget::RubricName(i)) | Some(Widget::RubricWeight(i)) => i,
            _ => return,
        };
        self.wizard.apply(Action::RemoveRubricRow(idx));
        let n = self.widgets().len();
        if self.focus >= n {
            self.focus = n.saturating_sub(1);
        }
    }

    fn copy_result(&mut self) {
        let text = self.wizard.resultado.clone();
        let res = self.clipboard.copy_text(&text, CopyOptions::default());
        tracing::info!("Copy attempted via {}: ok={}", res.method.as_str(), res.ok);
        if res.ok {
            self.notice = Some(self.wizard.lang.labels().copy_success.to_string());
        } else {
            self.mode = Mode::ManualCopy(text);
        }
    }

    fn export(&mut self, format: ExportFormat) {
        let labels = self.wizard.lang.labels();
        let result = export(
            format,
            &self.export_dir,
            self.wizard.lang,
            &self.wizard.resultado,
            &self.wizard.variaciones,
        );
        self.notice = Some(match result {
            Ok(path) => format!("{} {}", labels.exported, path.display()),
            Err(e) => {
                tracing::error!("Export failed: {}", e);
                e.to_string()
            }
        });
    }

    fn open_bank_editor(&mut self) {
        self.mode = Mode::BankEditor(TextArea::new(&self.bank.to_pretty_json()));
    }

    fn handle_bank_key(&mut self, key: KeyEvent, ctrl: bool) {
        if ctrl {
            match key.code {
                KeyCode::Char('s') => self.save_bank(),
                KeyCode::Char('d') => {
                    self.mode =
                        Mode::BankEditor(TextArea::new(&PhraseBank::default().to_pretty_json()));
                }
                _ => {}
            }
            return;
        }
        let Mode::BankEditor(area) = &mut self.mode else {
            return;
        };
        match key.code {
            KeyCode::Esc => self.mode = Mode::Wizard,
            KeyCode::Enter => area.newline(),
            KeyCode::Backspace => area.backspace(),
            KeyCode::Left => area.left(),
            KeyCode::Right => area.right(),
            KeyCode::Up => area.up(),
            KeyCode::Down => area.down(),
            KeyCode::Tab => {
                area.insert_char(' ');
                area.insert_char(' ');
            }
            KeyCode::Char(c) => area.insert_char(c),
            _ => {}
        }
    }

    fn save_bank(&mut self) {
        let Mode::BankEditor(area) = &self.mode else {
            return;
        };
        let text = area.text();
        let lang = self.wizard.lang;
        match self.store.save_from_text(lang, &text, &mut self.bank) {
            Ok(()) => self.notice = Some(lang.labels().bank_saved.to_string()),
            Err(e) => self.notice = Some(e.to_string()),
        }
    }
}
