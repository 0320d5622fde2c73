use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use rake_outline::cli::CliArgs;
use rake_outline::{outline_file, outline_source, DocumentSymbol};

fn main() -> ExitCode {
    rake_outline::tracing::init();
    let args = CliArgs::parse();

    let label_paths = args.paths.len() > 1;
    let mut failed = false;

    for path in &args.paths {
        if label_paths {
            println!("{}:", path.display());
        }
        if let Err(err) = process(path, &args) {
            eprintln!("{}: {:#}", path.display(), err);
            failed = true;
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn process(path: &Path, args: &CliArgs) -> Result<()> {
    let symbols = if args.force {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        outline_source(&source)?
    } else {
        outline_file(path)?
    };

    if args.json {
        let json = serde_json::to_string_pretty(&symbols).context("serializing outline")?;
        println!("{json}");
    } else {
        print_tree(&symbols, 0);
    }
    Ok(())
}

/// Print symbols as an indented tree, one per line:
/// `<kind> <name>  <line>:<col>` (1-based, pointing at the name)
fn print_tree(symbols: &[DocumentSymbol], depth: usize) {
    for symbol in symbols {
        let start = symbol.selection_range.start;
        println!(
            "{}{} {}  {}:{}",
            "  ".repeat(depth),
            symbol.kind.label(),
            symbol.name,
            start.line + 1,
            start.character + 1,
        );
        print_tree(&symbol.children, depth + 1);
    }
}
