mod cli;
mod cmd;
mod error;
mod grub;
mod menu;
mod params;
mod ui;

use std::sync::atomic::{AtomicBool, Ordering};

use clap::{error::ErrorKind, Parser};

use cli::{Action, Cli};
use error::ConfigError;
use grub::GrubTarget;
use menu::{MenuState, Outcome};

// ── Global dry-run flag ───────────────────────────────────────────────────────

/// When `true`, neither the GRUB defaults file nor `update-grub` is touched;
/// the planned change is printed instead.
/// Set by passing `--dry-run` on the command line.
pub static DRY_RUN: AtomicBool = AtomicBool::new(false);

#[inline]
pub fn is_dry_run() -> bool {
    DRY_RUN.load(Ordering::Relaxed)
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Usage errors exit 1 before the root check.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            // clap's message already ends with the usage line.
            let _ = e.print();
            std::process::exit(1);
        }
    };

    if cli.dry_run {
        DRY_RUN.store(true, Ordering::Relaxed);
    }

    if let Err(e) = run(&cli) {
        ui::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), ConfigError> {
    // ── Guard ─────────────────────────────────────────────────────────────────
    check_root()?;

    if is_dry_run() {
        ui::print_warning("DRY-RUN MODE — /etc/default/grub will not be modified.");
    }

    match cli.action()? {
        Action::Enable { core_range } => enable(&core_range),
        Action::Disable => disable(),
    }
}

// ── Actions ───────────────────────────────────────────────────────────────────

/// Shows the checklist, then writes whatever is still ticked.
fn enable(core_range: &str) -> Result<(), ConfigError> {
    let mut state = MenuState::new(core_range);

    // The terminal is already restored once `menu::run` returns.
    let outcome = menu::run(&mut state)?;
    finish_enable(outcome, &state, &GrubTarget::system())
}

/// Acts on how the checklist ended. Only an applied, non-empty selection
/// reaches `target`.
fn finish_enable(
    outcome: Outcome,
    state: &MenuState,
    target: &GrubTarget,
) -> Result<(), ConfigError> {
    match outcome {
        Outcome::Applied => {}
        Outcome::Cancelled | Outcome::Interrupted => {
            ui::print_warning("Configuration cancelled.");
            return Ok(());
        }
    }

    let params = state.selected_params();
    if params.is_empty() {
        ui::print_info("No parameters selected. Exiting.");
        return Ok(());
    }

    ui::print_info(&format!("Applying parameters: {}", params));
    grub::write_params(target, &params).map_err(|e| ConfigError::Apply(Box::new(e)))?;

    if is_dry_run() {
        ui::print_success("Dry run complete; nothing was changed.");
    } else {
        ui::print_success("Selected kernel parameters installed. Reboot to apply.");
    }
    Ok(())
}

/// Empties the kernel command-line default. No menu.
fn disable() -> Result<(), ConfigError> {
    grub::clear_params(&GrubTarget::system()).map_err(|e| ConfigError::Clear(Box::new(e)))?;

    if is_dry_run() {
        ui::print_success("Dry run complete; nothing was changed.");
    } else {
        ui::print_success("Kernel parameters cleared. Reboot to revert.");
    }
    Ok(())
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Checks that the process runs with an effective UID of 0.
/// Skipped automatically in dry-run mode.
fn check_root() -> Result<(), ConfigError> {
    if is_dry_run() {
        return Ok(()); // nothing will be written
    }

    // Uid:  real  effective  saved  fs
    let euid = std::fs::read_to_string("/proc/self/status")
        .ok()
        .and_then(|s| {
            s.lines()
                .find(|l| l.starts_with("Uid:"))
                .and_then(|l| l.split_whitespace().nth(2))
                .and_then(|v| v.parse::<u32>().ok())
        })
        .unwrap_or(1); // default to non-root if unreadable

    if euid != 0 {
        return Err(ConfigError::NotRoot);
    }

    Ok(())
}
