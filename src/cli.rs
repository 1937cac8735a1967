use clap::Parser;

use crate::error::ConfigError;

pub const DEFAULT_CORE_RANGE: &str = "1-12";

#[derive(Parser, Debug)]
#[command(name = "kernel-config")]
#[command(about = "Pick low-latency kernel boot parameters and install them into GRUB")]
#[command(
    after_help = "ACTIONS:\n  enable [CORE_RANGE]  Choose parameters interactively and write them\n  disable              Clear GRUB_CMDLINE_LINUX_DEFAULT"
)]
pub struct Cli {
    /// What to do: enable or disable
    pub action: String,

    /// Cores to isolate, passed through verbatim (e.g. 2-7 or 1,3,5)
    #[arg(default_value = DEFAULT_CORE_RANGE, allow_hyphen_values = true)]
    pub core_range: String,

    /// Show what would be written without touching the system
    #[arg(long)]
    pub dry_run: bool,

    /// Anything after the core range is accepted and ignored.
    #[allow(dead_code)]
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub ignored: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Enable { core_range: String },
    Disable,
}

impl Cli {
    /// Resolves the free-form action string. Kept separate from parsing so
    /// the root check can run in between.
    pub fn action(&self) -> Result<Action, ConfigError> {
        match self.action.as_str() {
            "enable" => Ok(Action::Enable {
                core_range: self.core_range.clone(),
            }),
            "disable" => Ok(Action::Disable),
            other => Err(ConfigError::InvalidAction(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("kernel-config").chain(args.iter().copied()))
    }

    #[test]
    fn enable_defaults_core_range() {
        let cli = parse(&["enable"]).unwrap();
        assert_eq!(
            cli.action().unwrap(),
            Action::Enable {
                core_range: "1-12".to_string()
            }
        );
        assert!(!cli.dry_run);
    }

    #[test]
    fn enable_takes_core_range_verbatim() {
        let cli = parse(&["enable", "0-3,8-11"]).unwrap();
        assert_eq!(
            cli.action().unwrap(),
            Action::Enable {
                core_range: "0-3,8-11".to_string()
            }
        );
    }

    #[test]
    fn disable_ignores_extra_argument() {
        let cli = parse(&["--dry-run", "disable", "4-7"]).unwrap();
        assert_eq!(cli.action().unwrap(), Action::Disable);
        assert!(cli.dry_run);
    }

    #[test]
    fn trailing_arguments_are_ignored() {
        let cli = parse(&["disable", "4-7", "extra", "--more"]).unwrap();
        assert_eq!(cli.action().unwrap(), Action::Disable);
        assert_eq!(cli.ignored, ["extra", "--more"]);

        let cli = parse(&["enable", "2-3", "junk"]).unwrap();
        assert_eq!(
            cli.action().unwrap(),
            Action::Enable {
                core_range: "2-3".to_string()
            }
        );
    }

    #[test]
    fn unknown_action_parses_but_does_not_resolve() {
        let cli = parse(&["bogus"]).unwrap();
        match cli.action() {
            Err(ConfigError::InvalidAction(a)) => assert_eq!(a, "bogus"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn missing_action_is_a_parse_error() {
        let err = parse(&[]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }
}
