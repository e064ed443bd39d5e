use std::io::{self, Read, Write};
use std::path::PathBuf;

use log::debug;

use crate::config::RenderConfig;
use crate::error::{RenderError, RenderResult};
use crate::load;
use crate::render::{write_contact_tables, RenderContext};

pub const USAGE: &str = "\
contact-html - render contacts as HTML tables

Usage: contact-html [OPTIONS] <CONTACTS_JSON>...

Options:
  -c, --config <PATH>    Rendering config (JSON)
  -s, --style <STYLE>    Inline style for every table (overrides config)
  -h, --help             Show this help

A file named - is read from standard input.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliArgs {
    pub config: Option<PathBuf>,
    pub style: Option<String>,
    pub inputs: Vec<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Render(CliArgs),
}

/// Parses arguments, not including the program name.
pub fn parse_args<I>(args: I) -> Result<Command, String>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let mut parsed = CliArgs::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" | "-c" => {
                let path = args.next().ok_or("--config requires a path argument")?;
                parsed.config = Some(PathBuf::from(path));
            }
            "--style" | "-s" => {
                let style = args.next().ok_or("--style requires a value")?;
                parsed.style = Some(style);
            }
            "--help" | "-h" => return Ok(Command::Help),
            other if other.starts_with('-') && other.len() > 1 => {
                return Err(format!("Unknown argument: {}", other));
            }
            path => parsed.inputs.push(PathBuf::from(path)),
        }
    }

    if parsed.inputs.is_empty() {
        return Err("no contact files given".into());
    }
    Ok(Command::Render(parsed))
}

/// Renders every contact in `args.inputs` to `out`. Returns how many
/// contacts were written.
pub fn run<W: Write + ?Sized>(args: &CliArgs, out: &mut W) -> RenderResult<usize> {
    let config = match &args.config {
        Some(path) => RenderConfig::load(path)?,
        None => RenderConfig::default(),
    };
    let style = args.style.as_deref().or(config.style.as_deref());
    if let Some(style) = args.style.as_deref() {
        if style.trim().is_empty() {
            return Err(RenderError::Config {
                field: "--style".into(),
                reason: "cannot be blank".into(),
            });
        }
    }

    let mut contacts = Vec::new();
    for path in &args.inputs {
        if path.as_os_str() == "-" {
            let mut json = String::new();
            io::stdin().read_to_string(&mut json)?;
            contacts.extend(load::contacts_from_str(&json)?);
        } else {
            contacts.extend(load::contacts_from_path(path)?);
        }
    }
    debug!("rendering {} contact(s)", contacts.len());

    let page_index = config.page_index();
    let mut ctx = RenderContext::new();
    if let Some(index) = &page_index {
        ctx = ctx.with_ids(index);
    }

    write_contact_tables(&ctx, out, style, &contacts)?;
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(contacts.len())
}
