use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use tracing_subscriber::filter::LevelFilter;

#[derive(Debug, Parser)]
#[command(name = "swatch")]
#[command(about = "Render and inspect the UI component showcase")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Increase log output (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Write the showcase page as HTML
    Render(RenderArgs),
    /// Print the resolved class string for one component
    Resolve(ResolveArgs),
    /// List components with their axes, values and defaults
    List(StylesheetArg),
}

#[derive(Debug, Args)]
pub struct StylesheetArg {
    /// YAML stylesheet layered over the built-in styles
    #[arg(short, long, value_name = "FILE")]
    pub stylesheet: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct RenderArgs {
    #[command(flatten)]
    pub styles: StylesheetArg,

    /// Write to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Initially selected panel of the settings tabs
    #[arg(long, value_name = "VALUE", default_value = "account")]
    pub account_tab: String,

    /// Initially selected panel of the registration form
    #[arg(long, value_name = "VALUE", default_value = "personal")]
    pub registration_tab: String,

    /// Emit only the page body, without the document shell
    #[arg(long)]
    pub fragment: bool,
}

#[derive(Debug, Args)]
pub struct ResolveArgs {
    #[command(flatten)]
    pub styles: StylesheetArg,

    /// Component name, e.g. `button` or `card-header`
    pub component: String,

    /// Select a variant value; may be repeated
    #[arg(long = "set", value_name = "AXIS=VALUE", value_parser = parse_assignment)]
    pub selections: Vec<(String, String)>,

    /// Extra classes appended last
    #[arg(long, value_name = "CLASSES", default_value = "")]
    pub class: String,
}

/// Parses `axis=value`.
pub fn parse_assignment(input: &str) -> Result<(String, String), String> {
    let (axis, value) = input
        .split_once('=')
        .ok_or_else(|| format!("expected AXIS=VALUE, got '{input}'"))?;
    let (axis, value) = (axis.trim(), value.trim());
    if axis.is_empty() || value.is_empty() {
        return Err(format!("expected AXIS=VALUE, got '{input}'"));
    }
    Ok((axis.to_string(), value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_assignment() {
        assert_eq!(
            parse_assignment("variant=ghost"),
            Ok(("variant".to_string(), "ghost".to_string()))
        );
        assert_eq!(
            parse_assignment(" size = icon-sm "),
            Ok(("size".to_string(), "icon-sm".to_string()))
        );
        assert!(parse_assignment("variant").is_err());
        assert!(parse_assignment("=ghost").is_err());
        assert!(parse_assignment("variant=").is_err());
    }

    #[test]
    fn test_resolve_args() {
        let cli = Cli::try_parse_from([
            "swatch",
            "resolve",
            "button",
            "--set",
            "variant=ghost",
            "--set",
            "size=sm",
            "--class",
            "w-full",
        ])
        .unwrap();
        let Command::Resolve(args) = cli.command else {
            panic!("expected resolve");
        };
        assert_eq!(args.component, "button");
        assert_eq!(args.selections.len(), 2);
        assert_eq!(args.class, "w-full");
        assert!(args.styles.stylesheet.is_none());
    }

    #[test]
    fn test_verbosity_levels() {
        let quiet = Cli::try_parse_from(["swatch", "list"]).unwrap();
        assert_eq!(quiet.log_level(), LevelFilter::WARN);
        let loud = Cli::try_parse_from(["swatch", "-vv", "list"]).unwrap();
        assert_eq!(loud.log_level(), LevelFilter::TRACE);
    }

    #[test]
    fn test_render_defaults() {
        let cli = Cli::try_parse_from(["swatch", "render", "--fragment"]).unwrap();
        let Command::Render(args) = cli.command else {
            panic!("expected render");
        };
        assert_eq!(args.account_tab, "account");
        assert_eq!(args.registration_tab, "personal");
        assert!(args.fragment);
        assert!(args.output.is_none());
    }
}
