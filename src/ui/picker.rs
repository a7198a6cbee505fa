//! Terminal-backed [`ListPicker`] built on ratatui and crossterm.

use crate::config::UiConfig;
use crate::error::{LauncherError, Result};
use crate::services::{ListPicker, PickedRow};
use crate::ui::input::{Action, InputHandler};
use crate::ui::widgets::candidate_list::{CandidateListWidget, ListSelection};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::io;

type CrosstermTerminal = Terminal<CrosstermBackend<io::Stdout>>;

/// Outcome of feeding one action to the selection loop
#[derive(Debug, PartialEq, Eq)]
enum Step {
    Continue,
    Confirmed(PickedRow),
    Cancelled,
}

/// Picker that takes over the terminal only while a choice is pending
pub struct TerminalPicker {
    input_handler: InputHandler,
    width: u16,
    height: u16,
}

impl TerminalPicker {
    pub fn new(config: &UiConfig) -> Self {
        Self {
            input_handler: InputHandler::new(config.vim_navigation),
            width: config.width,
            height: config.height,
        }
    }

    fn event_loop(
        &self,
        terminal: &mut CrosstermTerminal,
        title: &str,
        selection: &mut ListSelection,
    ) -> Result<Option<PickedRow>> {
        loop {
            terminal
                .draw(|frame| {
                    let area = list_area(frame.area(), self.width, self.height);
                    frame.render_widget(CandidateListWidget::new(title, &*selection), area);
                })
                .map_err(|e| LauncherError::Terminal(e.to_string()))?;

            // Blocks until the next event; there is no timeout
            let Event::Key(key) = event::read().map_err(|e| LauncherError::Terminal(e.to_string()))?
            else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }

            let Some(action) = self.input_handler.handle_key(key) else {
                continue;
            };
            match apply(selection, action) {
                Step::Continue => {}
                Step::Confirmed(row) => return Ok(Some(row)),
                Step::Cancelled => return Ok(None),
            }
        }
    }
}

impl ListPicker for TerminalPicker {
    fn pick(&mut self, title: &str, rows: &[String]) -> Result<Option<PickedRow>> {
        let mut selection = ListSelection::new(rows.to_vec());

        let mut terminal = setup_terminal().map_err(|e| {
            LauncherError::Terminal(format!("failed to initialize terminal: {}", e))
        })?;
        let result = self.event_loop(&mut terminal, title, &mut selection);

        // Restore terminal (always, even on error)
        restore_terminal(&mut terminal).map_err(|e| LauncherError::Terminal(e.to_string()))?;
        result
    }
}

/// Apply an action to the selection
fn apply(selection: &mut ListSelection, action: Action) -> Step {
    match action {
        Action::MoveDown => selection.move_down(),
        Action::MoveUp => selection.move_up(),
        Action::Home => selection.first(),
        Action::End => selection.last(),
        Action::Confirm => {
            return match selection.selected_row() {
                Some(text) => Step::Confirmed(PickedRow {
                    index: selection.selected_index(),
                    text: text.to_string(),
                }),
                None => Step::Cancelled,
            };
        }
        Action::Quit => return Step::Cancelled,
    }
    Step::Continue
}

/// Top-left rectangle of at most `width` x `height` inside `area`
fn list_area(area: Rect, width: u16, height: u16) -> Rect {
    Rect {
        x: area.x,
        y: area.y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}

/// Setup the terminal for the selection list
fn setup_terminal() -> io::Result<CrosstermTerminal> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

/// Restore the terminal to normal mode
fn restore_terminal(terminal: &mut CrosstermTerminal) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Best-effort restore used from the panic hook
pub fn force_restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
}
