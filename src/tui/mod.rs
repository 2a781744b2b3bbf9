//! Terminal front end for the outcome wizard.

pub mod app;
pub mod textarea;
pub mod ui;

use crate::bank::BankStore;
use crate::clipboard::Clipboard;
use crate::config::Config;
use crate::error::OutcomesError;
use crate::variations::RandomSampler;
use crate::wizard::WizardState;
use app::App;
use crossterm::{event, execute, terminal};
use ratatui::prelude::*;
use std::io;
use std::time::Duration;

/// Run the interactive wizard until the user quits.
pub fn run(config: &Config) -> anyhow::Result<()> {
    let mut app = App::new(
        WizardState::new(config.app.lang, &config.app.default_duration),
        BankStore::new(config.data_dir()),
        Clipboard::system(),
        Box::new(RandomSampler::thread()),
        config.export_dir(),
    );

    terminal::enable_raw_mode().map_err(terminal_error)?;
    let mut stdout = io::stdout();
    undo_on_err(execute!(stdout, terminal::EnterAlternateScreen), || {
        let _ = terminal::disable_raw_mode();
    })
    .map_err(terminal_error)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal =
        undo_on_err(Terminal::new(backend), restore_terminal).map_err(terminal_error)?;
    tracing::info!("Wizard started (lang={})", config.app.lang.as_str());

    let result = event_loop(&mut terminal, &mut app);

    terminal::disable_raw_mode()?;
    execute!(terminal.backend_mut(), terminal::LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    tracing::info!("Wizard closed");
    result
}

/// Run `undo` before handing back an error from a half-finished setup.
fn undo_on_err<T, E>(result: Result<T, E>, undo: impl FnOnce()) -> Result<T, E> {
    if result.is_err() {
        undo();
    }
    result
}

fn restore_terminal() {
    let _ = execute!(io::stdout(), terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();
}

fn terminal_error(err: io::Error) -> OutcomesError {
    OutcomesError::Terminal {
        message: err.to_string(),
    }
}

fn event_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> anyhow::Result<()> {
    while !app.should_quit {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(Duration::from_millis(200))?
            && let event::Event::Key(k) = event::read()?
            && k.kind == event::KeyEventKind::Press
        {
            app.handle_key(k);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn setup_failure_runs_undo() {
        let undone = Cell::new(false);
        let res: Result<(), io::Error> =
            undo_on_err(Err(io::Error::other("no tty")), || undone.set(true));
        assert!(res.is_err());
        assert!(undone.get());
        assert_eq!(terminal_error(io::Error::other("no tty")).to_string(), "Terminal error: no tty");
    }

    #[test]
    fn setup_success_skips_undo() {
        let undone = Cell::new(false);
        let res: Result<u8, io::Error> = undo_on_err(Ok(1), || undone.set(true));
        assert_eq!(res.unwrap(), 1);
        assert!(!undone.get());
    }
}
