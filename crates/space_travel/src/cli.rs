//! Command-line interface for the space travel demo

use std::path::PathBuf;

use clap::{Arg, ArgAction, ArgMatches, Command};

/// Arguments accepted on the command line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliArgs {
    /// TOML or RON configuration file; built-in defaults when absent
    pub config_path: Option<PathBuf>,
    /// Overrides `frustum_culling` from the configuration
    pub culling: Option<bool>,
}

impl CliArgs {
    /// Parse the process arguments, exiting with usage output on error or `--help`
    pub fn parse() -> Self {
        Self::from_matches(&command().get_matches())
    }

    /// Parse an explicit argument list
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Ok(Self::from_matches(&command().try_get_matches_from(args)?))
    }

    fn from_matches(matches: &ArgMatches) -> Self {
        let culling = if matches.get_flag("culling") {
            Some(true)
        } else if matches.get_flag("no-culling") {
            Some(false)
        } else {
            None
        };

        Self {
            config_path: matches.get_one::<PathBuf>("config").cloned(),
            culling,
        }
    }
}

fn command() -> Command {
    Command::new("space_travel")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Flies a spacecraft through a frustum-culled asteroid field")
        .arg(
            Arg::new("config")
                .value_name("FILE")
                .help("Configuration file (.toml or .ron)")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("culling")
                .long("culling")
                .help("Start with frustum culling enabled")
                .action(ArgAction::SetTrue)
                .conflicts_with("no-culling"),
        )
        .arg(
            Arg::new("no-culling")
                .long("no-culling")
                .help("Start with frustum culling disabled")
                .action(ArgAction::SetTrue),
        )
}
