//! rake-outline - document symbol outlines for Rake build files
//!
//! Parses a Rakefile with tree-sitter and extracts a nested outline of
//! `namespace` and task declarations (`task`, `file`, `directory`,
//! `multitask`). Namespaces nest; tasks are leaves. The outline carries
//! LSP-style ranges so editors can jump to each declaration.
//!
//! ## Architecture
//!
//! ```text
//! source → RubyParser (tree-sitter) → dispatch (call enter/leave events)
//!        → RakeSymbolListener (pattern match + scope stack)
//!        → Vec<DocumentSymbol>
//! ```

pub mod cli;
pub mod dispatch;
pub mod outline;
pub mod syntax;
pub mod tracing;

// Re-export commonly used types
pub use outline::{
    is_rake_path, DocumentSymbol, Position, RakeSymbolListener, SymbolBuilder, SymbolKind,
    SymbolRange,
};

use std::path::Path;

use anyhow::{Context, Result};

/// Extract the outline from Ruby source.
///
/// Builds a fresh parser, scope stack, and listener per call; nothing is
/// shared or retained across requests.
pub fn outline_source(source: &str) -> Result<Vec<DocumentSymbol>> {
    let mut parser = syntax::RubyParser::new()?;
    let tree = parser.parse(source)?;

    let builder = SymbolBuilder::new(DocumentSymbol::root());
    let mut listener = RakeSymbolListener::new(builder);
    dispatch::dispatch(tree.root_node(), source, &mut listener);

    Ok(listener.into_outline())
}

/// Extract the outline from a file, applying the Rake filename gate.
///
/// Files whose name does not look like a Rake build file yield an empty
/// outline without being read.
pub fn outline_file(path: &Path) -> Result<Vec<DocumentSymbol>> {
    if !is_rake_path(path) {
        return Ok(Vec::new());
    }
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    outline_source(&source)
}
