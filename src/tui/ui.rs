use crate::i18n::Labels;
use crate::tui::app::{App, Chips, Field, Mode, Widget};
use crate::wizard::LAST_STEP;
use ratatui::prelude::*;
use ratatui::widgets::*;

pub fn draw(f: &mut Frame, app: &mut App) {
    let labels = app.wizard.lang.labels();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(3),
        ])
        .split(f.size());

    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            labels.title,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  |  "),
        Span::raw(labels.subtitle),
        Span::raw("  |  "),
        Span::raw(format!("{}: {}", labels.lang, app.wizard.lang.as_str())),
    ]))
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    f.render_widget(step_strip(app, labels), chunks[1]);

    let body = Paragraph::new(step_body(app, labels))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(step_title(app.wizard.step, labels)),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(body, chunks[2]);

    let help = Paragraph::new(help_line(app, labels))
        .block(Block::default().borders(Borders::ALL).title("Keys"))
        .wrap(Wrap { trim: true });
    f.render_widget(help, chunks[3]);

    match &mut app.mode {
        Mode::Wizard => {}
        Mode::BankEditor(area) => {
            let rect = centered_rect(80, 80, f.size());
            f.render_widget(Clear, rect);
            let block = Block::default()
                .borders(Borders::ALL)
                .title(format!(
                    "{} | Ctrl+S {} | Ctrl+D default | Esc {}",
                    labels.bank, labels.bank_save, labels.close
                ));
            let inner = block.inner(rect);
            f.render_widget(block, rect);

            let parts = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(2), Constraint::Min(1)])
                .split(inner);
            f.render_widget(
                Paragraph::new(labels.bank_desc).wrap(Wrap { trim: true }),
                parts[0],
            );

            area.follow_cursor(parts[1].height);
            let lines: Vec<Line> = area.lines().iter().map(|l| Line::raw(l.clone())).collect();
            f.render_widget(Paragraph::new(lines).scroll((area.scroll, 0)), parts[1]);

            let (row, col) = area.cursor();
            let y = u16::try_from(row)
                .unwrap_or(u16::MAX)
                .saturating_sub(area.scroll);
            let x = u16::try_from(col).unwrap_or(u16::MAX);
            if y < parts[1].height && x < parts[1].width {
                f.set_cursor(parts[1].x + x, parts[1].y + y);
            }
        }
        Mode::ManualCopy(text) => {
            let rect = centered_rect(70, 50, f.size());
            f.render_widget(Clear, rect);
            let p = Paragraph::new(vec![
                Line::raw(labels.copy_manual_msg),
                Line::raw(""),
                Line::styled(
                    text.clone(),
                    Style::default().add_modifier(Modifier::REVERSED),
                ),
            ])
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!("{} | Esc {}", labels.copy_manual_title, labels.close)),
            )
            .wrap(Wrap { trim: false });
            f.render_widget(p, rect);
        }
    }

    if let Some(notice) = &app.notice {
        let rect = centered_rect(60, 20, f.size());
        f.render_widget(Clear, rect);
        let p = Paragraph::new(notice.as_str())
            .block(Block::default().borders(Borders::ALL))
            .style(Style::default().fg(Color::Yellow))
            .wrap(Wrap { trim: true });
        f.render_widget(p, rect);
    }
}

fn step_title(step: u8, labels: &Labels) -> String {
    let title = match step {
        1 => labels.context_title,
        2 => labels.bloom_title,
        3 => labels.content_title,
        4 => labels.condition_title,
        5 => labels.criterion_title,
        6 => labels.result_title,
        _ => labels.validation_title,
    };
    format!("{} {}/{} · {}", labels.step, step, LAST_STEP, title)
}

fn step_strip<'a>(app: &App, labels: &'a Labels) -> Paragraph<'a> {
    let current = usize::from(app.wizard.step);
    let mut spans = Vec::new();
    for (i, name) in labels.steps.iter().enumerate() {
        let n = i + 1;
        let style = if n == current || (n == 8 && current == usize::from(LAST_STEP)) {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else if n < current {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!(" {}. {} ", n, name), style));
    }
    Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL))
}

fn field_line(label: &str, value: &str, focused: bool) -> Line<'static> {
    let label_style = if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    let mut spans = vec![
        Span::styled(format!("{}: ", label), label_style),
        Span::raw(value.to_string()),
    ];
    if focused {
        spans.push(Span::styled("▏", Style::default().fg(Color::Cyan)));
    }
    Line::from(spans)
}

fn chips_line(app: &App, chips: Chips, selected: &str, focused: bool) -> Line<'static> {
    let items = app.chip_items(chips);
    if items.is_empty() {
        return Line::styled("—", Style::default().fg(Color::DarkGray));
    }
    let mut spans = Vec::new();
    for (i, item) in items.iter().enumerate() {
        let mut style = Style::default();
        if item == selected {
            style = style.fg(Color::Green).add_modifier(Modifier::BOLD);
        }
        if focused && i == app.chip_cursor {
            style = style.add_modifier(Modifier::REVERSED);
        }
        spans.push(Span::styled(format!("[{}]", item), style));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn desc(text: &str) -> Line<'static> {
    Line::styled(text.to_string(), Style::default().fg(Color::DarkGray))
}

fn step_body(app: &App, labels: &Labels) -> Vec<Line<'static>> {
    let w = &app.wizard;
    let focused = app.focused();
    let is = |widget: Widget| focused == Some(widget);
    let text = |label: &str, field: Field| field_line(label, app.field_value(field), is(Widget::Text(field)));

    let mut lines = Vec::new();
    match w.step {
        1 => {
            lines.push(desc(labels.context_desc));
            lines.push(Line::raw(""));
            lines.push(text(labels.level, Field::Nivel));
            lines.push(text(labels.area, Field::Area));
            lines.push(chips_line(app, Chips::Areas, &w.area, is(Widget::Chips(Chips::Areas))));
            let examples = app.bank.area_examples(&w.area);
            if !examples.is_empty() {
                lines.push(desc(&format!("{}: {}", labels.examples, examples.join(", "))));
            }
            lines.push(text(labels.topic, Field::Tema));
            lines.push(text(labels.duration, Field::Duracion));
        }
        2 => {
            lines.push(desc(labels.bloom_desc));
            lines.push(Line::raw(""));
            lines.push(Line::raw(format!("{}:", labels.cognitive_level)));
            lines.push(chips_line(
                app,
                Chips::Levels,
                &w.nivel_cognitivo,
                is(Widget::Chips(Chips::Levels)),
            ));
            lines.push(Line::raw(format!("{}:", labels.verb)));
            lines.push(chips_line(app, Chips::Verbs, &w.verbo, is(Widget::Chips(Chips::Verbs))));
            lines.push(text(labels.custom_verb, Field::Verbo));
        }
        3 => {
            lines.push(text(labels.content_title, Field::Contenido));
        }
        4 => {
            lines.push(desc(labels.condition_desc));
            lines.push(Line::raw(""));
            lines.push(chips_line(
                app,
                Chips::Resources,
                &w.condicion,
                is(Widget::Chips(Chips::Resources)),
            ));
            lines.push(text(labels.custom_condition, Field::Condicion));
        }
        5 => {
            lines.push(chips_line(app, Chips::Products, "", is(Widget::Chips(Chips::Products))));
            lines.push(text(labels.criterion_title, Field::Criterio));
            lines.push(Line::raw(""));
            lines.push(Line::styled(
                labels.rubric_title,
                Style::default().add_modifier(Modifier::BOLD),
            ));
            lines.push(desc(labels.rubric_desc));
            for (i, row) in w.rubric.iter().enumerate() {
                let mut spans = field_line("•", &row.name, is(Widget::RubricName(i))).spans;
                spans.push(Span::raw("  "));
                spans.extend(
                    field_line("%", &row.weight.to_string(), is(Widget::RubricWeight(i))).spans,
                );
                lines.push(Line::from(spans));
            }
            let sum = w.rubric_sum();
            let sum_style = if sum == 100 {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::Yellow)
            };
            lines.push(Line::styled(format!("{}: {}%", labels.current_sum, sum), sum_style));
            lines.push(Line::raw(""));
            lines.push(field_line(labels.outcome_label, &w.preview(), false));
        }
        6 => {
            lines.push(desc(labels.result_desc));
            lines.push(Line::raw(""));
            lines.push(text(labels.outcome_label, Field::Resultado));
            push_variations(&mut lines, &w.variaciones, labels);
        }
        _ => {
            if w.validacion.is_empty() {
                lines.push(Line::styled(
                    format!("✓ {}", labels.validation_ok),
                    Style::default().fg(Color::Green),
                ));
            } else {
                for finding in &w.validacion {
                    lines.push(Line::styled(
                        format!("• {}", finding),
                        Style::default().fg(Color::Red),
                    ));
                }
            }
            lines.push(Line::raw(""));
            lines.push(Line::styled(
                labels.final_outcome,
                Style::default().add_modifier(Modifier::BOLD),
            ));
            lines.push(Line::raw(w.resultado.clone()));
            push_variations(&mut lines, &w.variaciones, labels);
        }
    }
    lines
}

fn push_variations(lines: &mut Vec<Line<'static>>, variaciones: &[String], labels: &Labels) {
    if variaciones.is_empty() {
        return;
    }
    lines.push(Line::raw(""));
    lines.push(Line::styled(
        labels.variations,
        Style::default().add_modifier(Modifier::BOLD),
    ));
    for (i, v) in variaciones.iter().enumerate() {
        lines.push(Line::raw(format!("{} {}: {}", labels.variation, i + 1, v)));
    }
}

fn help_line(app: &App, labels: &Labels) -> Line<'static> {
    let mut keys = vec![
        "Tab/←→ move".to_string(),
        format!("Ctrl+N {}", labels.next),
        format!("Esc {}", labels.back),
    ];
    match app.wizard.step {
        5 => keys.push(format!("Ctrl+A {} • Ctrl+D del", labels.add_criterion)),
        6 => keys.push(format!(
            "Ctrl+E {} • Ctrl+G {}",
            labels.improve, labels.variations_btn
        )),
        7 => keys.push(format!(
            "Ctrl+Y {} • Ctrl+T {} • Ctrl+D {} • Ctrl+X {}",
            labels.copy, labels.download_txt, labels.download_docx, labels.download_xlsx
        )),
        _ => {}
    }
    keys.push(format!("Ctrl+R {}", labels.reset));
    keys.push(format!("Ctrl+L {}", labels.lang));
    keys.push(format!("Ctrl+K {}", labels.bank));
    keys.push("Ctrl+Q quit".to_string());
    if app.wizard.step == LAST_STEP {
        keys.push(format!("Ctrl+R {}", labels.create_another));
    }
    Line::raw(keys.join(" • "))
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::BankStore;
    use crate::clipboard::Clipboard;
    use crate::variations::InOrderSampler;
    use crate::wizard::WizardState;
    use ratatui::backend::TestBackend;

    fn render(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .iter()
            .map(|c| c.symbol().to_string())
            .collect::<String>()
    }

    #[test]
    fn renders_first_step_and_bank_overlay() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = App::new(
            WizardState::default(),
            BankStore::new(dir.path()),
            Clipboard::system(),
            Box::new(InOrderSampler),
            dir.path().to_path_buf(),
        );
        let screen = render(&mut app);
        assert!(screen.contains("Creador de Resultados"));
        assert!(screen.contains("[Historia]"));

        app.handle_key(crossterm::event::KeyEvent::new(
            crossterm::event::KeyCode::Char('k'),
            crossterm::event::KeyModifiers::CONTROL,
        ));
        let screen = render(&mut app);
        assert!(screen.contains("bloomVerbs"));
    }
}
