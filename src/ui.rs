use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

// ── Feedback messages ─────────────────────────────────────────────────────────

/// Green ✓ — operation completed successfully.
pub fn print_success(msg: &str) {
    println!("  {}  {}", style("✓").green().bold(), style(msg).green());
}

/// Blue → — neutral info / progress note.
pub fn print_info(msg: &str) {
    println!("  {}  {}", style("→").blue().bold(), msg);
}

/// Yellow ⚠  — non-fatal notice.
pub fn print_warning(msg: &str) {
    println!("  {}  {}", style("⚠").yellow().bold(), style(msg).yellow());
}

/// Red ✗ — error (written to stderr).
pub fn print_error(msg: &str) {
    eprintln!("  {}  {}", style("✗").red().bold(), style(msg).red());
}

// ── Spinner ───────────────────────────────────────────────────────────────────

/// Returns a running braille spinner.
/// Call `pb.finish_and_clear()` when done.
pub fn spinner(msg: impl Into<String>) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("  {spinner:.cyan.bold}  {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]);
    pb.set_style(style);
    pb.set_message(msg.into());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}
