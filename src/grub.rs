use std::{
    fs,
    path::{Path, PathBuf},
};

use console::style;

use crate::{cmd, error::ConfigError, ui};

pub const DEFAULT_CONFIG: &str = "/etc/default/grub";
pub const CMDLINE_PREFIX: &str = "GRUB_CMDLINE_LINUX_DEFAULT=";
pub const BACKUP_SUFFIX: &str = ".backup";
pub const REGEN_PROGRAM: &str = "update-grub";

// ── Target ────────────────────────────────────────────────────────────────────

/// The defaults file to patch and the command that rebuilds `grub.cfg`
/// from it.
#[derive(Debug, Clone)]
pub struct GrubTarget {
    pub config_path: PathBuf,
    pub regen_program: String,
}

impl GrubTarget {
    /// `/etc/default/grub` + `update-grub`.
    pub fn system() -> Self {
        Self {
            config_path: PathBuf::from(DEFAULT_CONFIG),
            regen_program: REGEN_PROGRAM.to_string(),
        }
    }

    /// Sibling path with `.backup` appended to the file name.
    pub fn backup_path(&self) -> PathBuf {
        let mut name = self.config_path.as_os_str().to_owned();
        name.push(BACKUP_SUFFIX);
        PathBuf::from(name)
    }
}

// ── Line patching ─────────────────────────────────────────────────────────────

/// `GRUB_CMDLINE_LINUX_DEFAULT="<params>"`
pub fn assignment_line(params: &str) -> String {
    format!("{}\"{}\"", CMDLINE_PREFIX, params)
}

/// Replaces the first line starting with [`CMDLINE_PREFIX`], or appends a
/// new one. Every other line is kept byte-for-byte, terminator included.
pub fn set_cmdline(content: &str, params: &str) -> String {
    let new_line = assignment_line(params);
    let mut out = String::with_capacity(content.len() + new_line.len() + 1);
    let mut replaced = false;

    for line in content.split_inclusive('\n') {
        if !replaced && line.starts_with(CMDLINE_PREFIX) {
            out.push_str(&new_line);
            out.push('\n');
            replaced = true;
        } else {
            out.push_str(line);
        }
    }

    if !replaced {
        if !out.is_empty() && !out.ends_with('\n') {
            out.push('\n');
        }
        out.push_str(&new_line);
        out.push('\n');
    }

    out
}

fn read_config(path: &Path) -> Result<String, ConfigError> {
    fs::read_to_string(path).map_err(|source| ConfigError::ReadConfig {
        path: path.to_path_buf(),
        source,
    })
}

fn write_config(path: &Path, content: &str) -> Result<(), ConfigError> {
    fs::write(path, content).map_err(|source| ConfigError::WriteConfig {
        path: path.to_path_buf(),
        source,
    })
}

fn regenerate(target: &GrubTarget) -> Result<(), ConfigError> {
    cmd::run_with_spinner(
        &target.regen_program,
        &[],
        &format!("Running {}…", target.regen_program),
        "GRUB configuration regenerated.",
    )
}

/// Dry-run stand-in for a write: shows the line and the command instead.
fn describe(target: &GrubTarget, params: &str, backup: bool) {
    if backup {
        ui::print_info(&format!(
            "Would back up {} → {}",
            target.config_path.display(),
            target.backup_path().display()
        ));
    }
    ui::print_info(&format!(
        "Would write to {}:  {}",
        target.config_path.display(),
        style(assignment_line(params)).cyan()
    ));
    ui::print_info(&format!("Would run: {}", target.regen_program));
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Backs up the defaults file, points the kernel command-line default at
/// `params`, then regenerates the GRUB config.
///
/// Nothing is modified if the backup cannot be taken.
pub fn write_params(target: &GrubTarget, params: &str) -> Result<(), ConfigError> {
    if crate::is_dry_run() {
        describe(target, params, true);
        return Ok(());
    }

    let backup = target.backup_path();
    fs::copy(&target.config_path, &backup).map_err(|source| ConfigError::Backup {
        path: target.config_path.clone(),
        source,
    })?;
    ui::print_info(&format!("Backup saved to {}", backup.display()));

    let content = read_config(&target.config_path)?;
    write_config(&target.config_path, &set_cmdline(&content, params))?;

    regenerate(target)
}

/// Empties the kernel command-line default and regenerates. No backup.
pub fn clear_params(target: &GrubTarget) -> Result<(), ConfigError> {
    if crate::is_dry_run() {
        describe(target, "", false);
        return Ok(());
    }

    let content = read_config(&target.config_path)?;
    write_config(&target.config_path, &set_cmdline(&content, ""))?;

    regenerate(target)
}
