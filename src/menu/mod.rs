pub mod render;
pub mod session;

use console::Key;

use crate::{
    error::ConfigError,
    params::{self, ParamSpec, CATALOG},
};
use session::TerminalSession;

// ── Inputs & outcomes ─────────────────────────────────────────────────────────

/// A decoded keypress, independent of the terminal library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Up,
    Down,
    Toggle,
    Confirm,
    Quit,
    Interrupt,
    Other,
}

impl Input {
    pub fn from_key(key: Key) -> Self {
        match key {
            Key::ArrowUp => Input::Up,
            Key::ArrowDown => Input::Down,
            Key::Char(' ') => Input::Toggle,
            Key::Enter => Input::Confirm,
            Key::Char('q') | Key::Char('Q') => Input::Quit,
            Key::Char('\u{3}') => Input::Interrupt,
            _ => Input::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    Cancelled,
    Interrupted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Finished(Outcome),
}

// ── Menu state ────────────────────────────────────────────────────────────────

/// Selection + cursor for one run of the checklist.
///
/// `focus` ranges over `0..=CATALOG.len()`; the last index is the
/// "Apply Configuration" row.
#[derive(Debug, Clone)]
pub struct MenuState {
    core_range: String,
    selected: Vec<bool>,
    focus: usize,
    offset: usize,
}

impl MenuState {
    /// Everything selected, focus on the first parameter.
    pub fn new(core_range: impl Into<String>) -> Self {
        Self {
            core_range: core_range.into(),
            selected: vec![true; CATALOG.len()],
            focus: 0,
            offset: 0,
        }
    }

    pub fn core_range(&self) -> &str {
        &self.core_range
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn apply_row(&self) -> usize {
        CATALOG.len()
    }

    pub fn is_selected(&self, key: &str) -> bool {
        params::index_of(key)
            .map(|i| self.selected[i])
            .unwrap_or(false)
    }

    /// The catalog entry under the cursor, `None` on the apply row.
    pub fn focused_param(&self) -> Option<&'static ParamSpec> {
        CATALOG.get(self.focus)
    }

    /// Applies one input. `viewport` is how many list rows fit on screen.
    pub fn update(&mut self, input: Input, viewport: usize) -> Control {
        let viewport = viewport.max(1);

        match input {
            Input::Up => {
                self.focus = self.focus.saturating_sub(1);
                if self.focus < self.offset {
                    self.offset = self.focus;
                }
            }
            Input::Down => {
                self.focus = (self.focus + 1).min(self.apply_row());
                if self.focus >= self.offset + viewport {
                    self.offset = self.focus + 1 - viewport;
                }
            }
            Input::Toggle => {
                if let Some(flag) = self.selected.get_mut(self.focus) {
                    *flag = !*flag;
                }
            }
            // Enter on a parameter row is a no-op.
            Input::Confirm => {
                if self.focus == self.apply_row() {
                    return Control::Finished(Outcome::Applied);
                }
            }
            Input::Quit => return Control::Finished(Outcome::Cancelled),
            Input::Interrupt => return Control::Finished(Outcome::Interrupted),
            Input::Other => {}
        }

        Control::Continue
    }

    /// Space-joined tokens for every selected parameter, in catalog order.
    pub fn selected_params(&self) -> String {
        CATALOG
            .iter()
            .zip(&self.selected)
            .filter(|(_, on)| **on)
            .map(|(p, _)| p.template.render(&self.core_range))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

// ── Interactive loop ──────────────────────────────────────────────────────────

/// Runs the checklist until the operator applies, quits or hits Ctrl-C.
/// The terminal is restored before this returns, on every path.
pub fn run(state: &mut MenuState) -> Result<Outcome, ConfigError> {
    let session = TerminalSession::open()?;

    loop {
        let (rows, cols) = session.size();
        session.draw(&render::compose(state, rows, cols))?;

        let input = session.read_input()?;
        if let Control::Finished(outcome) = state.update(input, render::viewport(rows)) {
            return Ok(outcome);
        }
    }
}
