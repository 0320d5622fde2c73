//! Ruby parsing front-end
//!
//! Wraps a tree-sitter parser configured with the Ruby grammar. Parsers are
//! cheap to construct and not `Sync`, so each outline request builds its own.

use anyhow::{Context, Result};
use tree_sitter::{Parser, Tree};

pub struct RubyParser {
    parser: Parser,
}

impl RubyParser {
    pub fn new() -> Result<Self> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_ruby::LANGUAGE.into())
            .context("loading the Ruby grammar")?;
        Ok(Self { parser })
    }

    /// Parse Ruby source into a concrete syntax tree.
    ///
    /// Tree-sitter is error-tolerant: malformed source still produces a
    /// tree, with error nodes around the unparseable parts, so a broken
    /// Rakefile still gets a partial outline.
    pub fn parse(&mut self, source: &str) -> Result<Tree> {
        self.parser
            .parse(source, None)
            .context("parser produced no tree")
    }
}
