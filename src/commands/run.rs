//! Command dispatch logic for envsnap

use super::common::{ColorMode, LogLevel, init_logging};
use super::{InitArgs, RenderArgs, init_config, render_snapshot};
use crate::{Host, Result};
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use clap::{Parser, Subcommand};

const CLAP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(name = "envsnap", version, long_about = None)]
#[command(about = "Generate project-defined snapshots of development environments")]
#[command(styles = CLAP_STYLES)]
struct Cli {
    #[command(subcommand)]
    command: EnvsnapSubcommand,

    /// Set the logging level for diagnostic output
    #[arg(long, value_name = "LEVEL", default_value = "none", global = true)]
    log_level: LogLevel,

    /// Control when to use colored output
    #[arg(long, value_name = "WHEN", default_value = "auto", global = true)]
    color: ColorMode,
}

#[derive(Subcommand, Debug)]
enum EnvsnapSubcommand {
    /// Initialize a boilerplate .envsnap config
    Init(InitArgs),
    /// Render the environment as specified by the config
    Render(RenderArgs),
}

/// Dispatch command-line arguments to the appropriate handler
///
/// This function parses the command-line arguments and executes the corresponding
/// subcommand. It's designed to be called from main.rs with the program arguments.
///
/// # Errors
///
/// Returns an error if the executed command fails, including a render that completed with warnings
pub async fn run<I, T, H>(host: &mut H, args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
    H: Host,
{
    let cli = Cli::parse_from(args);
    init_logging(cli.log_level);

    match &cli.command {
        EnvsnapSubcommand::Init(init_args) => init_config(host, init_args),
        EnvsnapSubcommand::Render(render_args) => render_snapshot(host, render_args, cli.color.for_stderr())
            .await
            .map_err(Into::into),
    }
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
    fn test_parse_render() {
        let cli = Cli::parse_from(["envsnap", "render", "dir", "-o", "json", "-f", "out.json", "-q", "--timeout", "5"]);
        let EnvsnapSubcommand::Render(args) = cli.command else {
            panic!("expected render");
        };
        assert_eq!(args.path.as_deref(), Some("dir"));
        assert_eq!(args.output, "json");
        assert_eq!(args.file.as_deref().map(camino::Utf8Path::as_str), Some("out.json"));
        assert!(args.quiet);
        assert_eq!(args.timeout, Some(5));
    }

    #[test]
    fn test_parse_render_defaults() {
        let cli = Cli::parse_from(["envsnap", "render"]);
        let EnvsnapSubcommand::Render(args) = cli.command else {
            panic!("expected render");
        };
        assert_eq!(args.path, None);
        assert_eq!(args.output, "md");
        assert!(!args.quiet);
        assert_eq!(cli.log_level, LogLevel::None);
        assert_eq!(cli.color, ColorMode::Auto);
    }

    #[test]
    fn test_parse_init_langs() {
        let cli = Cli::parse_from(["envsnap", "init", "-t", "--lang", "py,go", "-l", "golang", "--log-level", "debug"]);
        let EnvsnapSubcommand::Init(args) = cli.command else {
            panic!("expected init");
        };
        assert!(args.terse);
        assert_eq!(args.lang, ["py", "go", "golang"]);
        assert_eq!(cli.log_level, LogLevel::Debug);
    }
}
