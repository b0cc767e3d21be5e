//! `advertise` command-line entry point.
//!
//! Usage: `advertise [address|version|version-json|help]` (default
//! `address`). Output goes to stdout; logs go to stderr, filtered by
//! `RUST_LOG`.

mod config;

use anyhow::bail;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "\
Usage: advertise [COMMAND]

Commands:
  address       Print the IPv4 address this host should advertise (default)
  version       Print build information as text
  version-json  Print build information as JSON
  help          Print this message";

/// What to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Address,
    Version,
    VersionJson,
    Help,
}

impl Command {
    fn parse(arg: Option<&str>) -> anyhow::Result<Self> {
        match arg {
            None | Some("address") => Ok(Command::Address),
            Some("version") => Ok(Command::Version),
            Some("version-json") => Ok(Command::VersionJson),
            Some("help") | Some("--help") | Some("-h") => Ok(Command::Help),
            Some(other) => bail!("unknown command '{other}'\n\n{USAGE}"),
        }
    }

    /// Only the build info commands read the config file.
    fn needs_config(self) -> bool {
        matches!(self, Command::Version | Command::VersionJson)
    }
}

fn main() -> anyhow::Result<()> {
    // Stdout carries the result, so keep logging quiet by default.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let arg = std::env::args().nth(1);
    let command = Command::parse(arg.as_deref())?;

    let service = command.needs_config().then(service_name).unwrap_or_default();

    match command {
        Command::Address => println!("{}", advertise_netaddr::resolve_local_ipv4()),
        Command::Version => advertise_version::print(&service),
        Command::VersionJson => advertise_version::print_json(&service),
        Command::Help => println!("{USAGE}"),
    }
    Ok(())
}

/// Service name for build info, from the config file or defaults.
fn service_name() -> String {
    let config = match config::Config::load() {
        Ok(c) => c,
        Err(e) => {
            tracing::warn!(error = %e, "failed to load config, using defaults");
            config::Config::default()
        }
    };
    tracing::debug!(service = %config.service_name, "configuration loaded");
    config.service_name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_commands() {
        assert_eq!(Command::parse(None).unwrap(), Command::Address);
        assert_eq!(Command::parse(Some("address")).unwrap(), Command::Address);
        assert_eq!(Command::parse(Some("version")).unwrap(), Command::Version);
        assert_eq!(Command::parse(Some("help")).unwrap(), Command::Help);
        assert_eq!(Command::parse(Some("--help")).unwrap(), Command::Help);
        assert_eq!(Command::parse(Some("-h")).unwrap(), Command::Help);
        assert_eq!(
            Command::parse(Some("version-json")).unwrap(),
            Command::VersionJson
        );
    }

    #[test]
    fn parse_unknown_command() {
        let err = Command::parse(Some("serve")).unwrap_err();
        assert!(err.to_string().contains("serve"));
        assert!(err.to_string().contains("Usage: advertise"));
    }

    #[test]
    fn version_flags_are_not_aliases() {
        assert!(Command::parse(Some("--version")).is_err());
        assert!(Command::parse(Some("-V")).is_err());
    }

    #[test]
    fn only_version_commands_read_config() {
        assert!(!Command::Address.needs_config());
        assert!(!Command::Help.needs_config());
        assert!(Command::Version.needs_config());
        assert!(Command::VersionJson.needs_config());
    }

    #[test]
    fn usage_lists_every_command() {
        for cmd in ["address", "version", "version-json", "help"] {
            assert!(USAGE.contains(cmd), "usage is missing {cmd}");
        }
    }
}
