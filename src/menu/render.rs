use console::{measure_text_width, style, truncate_str};

use super::MenuState;
use crate::params::CATALOG;

// ── Layout ────────────────────────────────────────────────────────────────────
//
//   0  title (core range)
//   1  key help
//   2  ───────
//   3… checklist rows
//  -3  ───────
//  -2  info line for the focused row
//  -1  (spare)

const HEADER_ROWS: usize = 3;
const CHROME_ROWS: usize = 6;
const KEY_WIDTH: usize = 18;

const KEY_HELP: &str = "  Use ↑↓ to navigate, SPACE to toggle, ENTER to apply, q to quit";
const APPLY_LABEL: &str = "  >> Apply Configuration";
const APPLY_INFO: &str = "Apply the selected kernel parameters to GRUB configuration";

/// How many checklist rows fit in a terminal `rows` tall.
pub fn viewport(rows: usize) -> usize {
    rows.saturating_sub(CHROME_ROWS).max(1)
}

/// Builds one full frame: exactly `rows` lines, each already styled.
pub fn compose(state: &MenuState, rows: usize, cols: usize) -> Vec<String> {
    let mut frame = vec![String::new(); rows];
    let rule = "─".repeat(cols.saturating_sub(1));

    let mut put = |y: usize, line: String| {
        if let Some(slot) = frame.get_mut(y) {
            *slot = line;
        }
    };

    let fit = |text: &str| truncate_str(text, cols.saturating_sub(2), "").into_owned();

    let title = format!("  Kernel Configuration - Core Range: {}", state.core_range());
    put(0, style(fit(&title)).bold().to_string());
    put(1, fit(KEY_HELP));
    put(2, rule.clone());

    let total = CATALOG.len() + 1;
    let start = state.offset();
    let end = total.min(start + viewport(rows));

    for (y, i) in (start..end).enumerate() {
        let focused = i == state.focus();
        let line = match CATALOG.get(i) {
            Some(param) => {
                let checkbox = if state.is_selected(param.key) { "[X]" } else { "[ ]" };
                let text = format!(
                    "  {} {:<width$} {}",
                    checkbox,
                    param.key,
                    param.description,
                    width = KEY_WIDTH
                );
                let text = fit(&text);
                if focused {
                    style(text).reverse().to_string()
                } else {
                    text
                }
            }
            None => {
                let label = style(fit(APPLY_LABEL)).bold();
                if focused {
                    label.reverse().to_string()
                } else {
                    label.to_string()
                }
            }
        };
        put(HEADER_ROWS + y, line);
    }

    if rows >= 3 {
        put(rows - 3, rule);
        put(rows - 2, format!("  {}", info_line(state, cols)));
    }

    frame
}

/// The substituted token and its note for the focused row, or the apply
/// blurb, cut down to fit with a trailing `...`.
pub fn info_line(state: &MenuState, cols: usize) -> String {
    let text = match state.focused_param() {
        Some(param) => format!(
            "{}: {}",
            param.template.render(state.core_range()),
            param.explanation
        ),
        None => APPLY_INFO.to_string(),
    };

    let room = cols.saturating_sub(4);
    if measure_text_width(&text) > room {
        truncate_str(&text, room, "...").into_owned()
    } else {
        text
    }
}
