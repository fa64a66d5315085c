use super::Host;
use crate::Error;
use crate::config::{Config, ConfigLocation};
use crate::facts::CollectionContext;
use crate::reports::OutputFormat;
use camino::Utf8PathBuf;
use clap::Parser;
use core::time::Duration;

const LOG_TARGET: &str = "    render";

#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// Configuration file or directory, or a `github.com/<owner>/<repo>[@<ref>]` reference (default is `./.envsnap`)
    #[arg(value_name = "PATH")]
    pub path: Option<String>,

    /// Output format: md, txt, yaml, or json
    #[arg(long, short = 'o', value_name = "FORMAT", default_value = "md")]
    pub output: String,

    /// Write the output to a file instead of standard output
    #[arg(long, short = 'f', value_name = "PATH")]
    pub file: Option<Utf8PathBuf>,

    /// Ignore any warnings generated during render
    #[arg(long, short = 'q')]
    pub quiet: bool,

    /// Give up on any single command after this many seconds
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,
}

/// Load, collect, and emit a snapshot.
///
/// When collection produced warnings and `quiet` is not set, the warnings are written to the
/// host's error stream after the output and [`Error::IncompleteRender`] is returned.
pub async fn render_snapshot<H: Host>(host: &mut H, args: &RenderArgs, use_colors: bool) -> Result<(), Error> {
    let format = OutputFormat::parse(&args.output)?;
    let location = ConfigLocation::resolve(args.path.as_deref())?;
    let config = Config::load(&location).await?;

    let mut ctx = CollectionContext::new().with_timeout(args.timeout.map(Duration::from_secs));
    let snapshot = config.render(&mut ctx).await?;

    match &args.file {
        Some(path) => {
            log::debug!(target: LOG_TARGET, "Writing {format} output to '{path}'");
            snapshot.write(path, format)?;
        }
        None => snapshot.print(&mut host.output(), format)?,
    }

    let warnings = ctx.into_warnings();
    if !args.quiet && warnings.has_warnings() {
        log::debug!(target: LOG_TARGET, "Render finished with {} warning(s)", warnings.count());
        warnings.print(&mut host.error(), use_colors).map_err(Error::Output)?;
        return Err(Error::IncompleteRender);
    }

    Ok(())
}
