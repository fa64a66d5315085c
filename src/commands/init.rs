use super::Host;
use crate::Error;
use crate::config::{CONFIG_FILE, ConfigVersion};
use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use core::fmt::Write as _;
use core::str::FromStr;
use std::io::Write;

const LOG_TARGET: &str = "      init";

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Directory in which to create the `.envsnap` file (default is the current directory)
    #[arg(value_name = "PATH")]
    pub path: Option<Utf8PathBuf>,

    /// Initialize the config without extra comments
    #[arg(long, short = 't')]
    pub terse: bool,

    /// Add basic sections for the specified languages: python (py), golang (go)
    #[arg(long, short = 'l', value_name = "LANG", value_delimiter = ',')]
    pub lang: Vec<String>,
}

/// Languages with a boilerplate section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lang {
    Python,
    Golang,
}

impl FromStr for Lang {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "python" | "py" => Ok(Self::Python),
            "golang" | "go" => Ok(Self::Golang),
            other => Err(Error::UnsupportedLang(other.to_string())),
        }
    }
}

const HEADER: &str = "envsnap configuration (yaml format)
use 'envsnap render' to generate an environment snapshot
for more details, see: https://www.github.com/edaniszewski/envsnap";

const SYSTEM_SECTION: (&str, &str) = (
    "System configurations provide details about the user's system.",
    "system:\n  core:\n  - os\n  - arch\n",
);

const PYTHON_SECTION: (&str, &str) = (
    "Python configurations provide details about the user's Python\ninstallation and dependencies.",
    "python:\n  core:\n  - version\n  dependencies:\n    packages: []\n",
);

const GOLANG_SECTION: (&str, &str) = (
    "Golang configurations provide details about the user's Go installation.",
    "go:\n  core:\n  - version\n",
);

fn push_comment(doc: &mut String, text: &str) {
    for line in text.lines() {
        let _ = writeln!(doc, "# {line}");
    }
}

/// Produce the boilerplate configuration document.
///
/// Every section is preceded by a blank line; without `terse`, also by a comment describing it.
#[must_use]
pub fn boilerplate(terse: bool, langs: &[Lang]) -> String {
    let mut doc = String::new();

    push_comment(&mut doc, HEADER);
    doc.push('\n');
    let _ = writeln!(doc, "version: {}", ConfigVersion::V1 as i64);

    let mut sections = vec![SYSTEM_SECTION];
    if langs.contains(&Lang::Python) {
        sections.push(PYTHON_SECTION);
    }
    if langs.contains(&Lang::Golang) {
        sections.push(GOLANG_SECTION);
    }

    for (comment, body) in sections {
        doc.push('\n');
        if !terse {
            push_comment(&mut doc, comment);
        }
        doc.push_str(body);
    }

    doc
}

/// Write a boilerplate `.envsnap` into `dir`, refusing to replace an existing one.
pub fn write_config(dir: &Utf8Path, terse: bool, langs: &[String]) -> Result<Utf8PathBuf, Error> {
    let path = dir.join(CONFIG_FILE);
    if path.exists() {
        return Err(Error::ConfigExists);
    }

    let langs = langs.iter().map(|l| l.trim().parse()).collect::<Result<Vec<Lang>, _>>()?;

    log::debug!(target: LOG_TARGET, "Writing boilerplate configuration to '{path}'");
    std::fs::write(&path, boilerplate(terse, &langs)).map_err(|e| Error::io(path.clone(), e))?;
    Ok(path)
}

pub fn init_config<H: Host>(host: &mut H, args: &InitArgs) -> crate::Result<()> {
    let dir = args.path.clone().unwrap_or_else(|| Utf8PathBuf::from("."));
    let path = write_config(&dir, args.terse, &args.lang)?;
    let _ = writeln!(host.output(), "Generated configuration file: {path}");
    Ok(())
}
