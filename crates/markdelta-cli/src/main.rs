//! Command-line interface for markdelta
//!
//! Reads Markdown from a file (or stdin) and prints the delta as JSON.
//!
//! Usage:
//!   markdelta [PATH] [--pretty] [--preserve-soft-breaks] [-v...]

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use markdelta::{DeltaOptions, MarkdownToDelta};

#[derive(Debug, Parser)]
#[command(name = "markdelta", version, about = "Convert Markdown to rich-text delta JSON")]
struct Args {
    /// Markdown file to convert; reads stdin when omitted or `-`
    path: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Keep soft line breaks as separate lines instead of joining them
    #[arg(long)]
    preserve_soft_breaks: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();

    let _ = {
        use log::LevelFilter::*;

        let level = match args.verbose {
            0 => Warn,
            1 => Debug,
            _ => Trace,
        };
        env_logger::builder()
            .filter_module("markdelta", level)
            .parse_default_env()
            .try_init()
    };

    if let Err(e) = run(&args) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let markdown = read_input(args.path.as_ref())?;

    let service = MarkdownToDelta::with_options(DeltaOptions {
        collapse_soft_line_breaks: !args.preserve_soft_breaks,
    });
    let delta = service
        .convert_markdown(&markdown)
        .context("failed to convert markdown")?;

    let json = if args.pretty {
        delta.to_json_pretty()?
    } else {
        delta.to_json()?
    };
    println!("{json}");
    Ok(())
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_args() {
        let args = Args::parse_from(["markdelta", "notes.md", "--pretty", "-vv"]);
        assert_eq!(args.path, Some(PathBuf::from("notes.md")));
        assert!(args.pretty);
        assert!(!args.preserve_soft_breaks);
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn test_stdin_marker() {
        let args = Args::parse_from(["markdelta", "-", "--preserve-soft-breaks"]);
        assert_eq!(args.path.as_deref().and_then(|p| p.to_str()), Some("-"));
        assert!(args.preserve_soft_breaks);
    }
}
