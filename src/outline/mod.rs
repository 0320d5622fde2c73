//! Document symbol model for Rake outlines
//!
//! Provides the tree of symbols shown in an outline: namespaces nest,
//! tasks are leaves. Serializes to the LSP `DocumentSymbol` JSON shape
//! (camelCase fields, numeric symbol kinds).

mod builder;
mod rake;

pub use builder::SymbolBuilder;
pub use rake::{is_rake_path, RakeSymbolListener};

use serde::{Serialize, Serializer};
use tree_sitter::Node;

/// Symbol kind for display and LSP interop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    Namespace,
    Task,
}

impl SymbolKind {
    /// Short label for rendering in the outline tree
    pub fn label(&self) -> &'static str {
        match self {
            SymbolKind::Namespace => "ns",
            SymbolKind::Task => "task",
        }
    }

    /// Numeric LSP `SymbolKind` code: namespaces report as Module,
    /// tasks as Method.
    pub fn lsp_code(&self) -> u8 {
        match self {
            SymbolKind::Namespace => 2,
            SymbolKind::Task => 6,
        }
    }
}

impl Serialize for SymbolKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.lsp_code())
    }
}

/// A position in the document (0-based line and column)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    pub line: usize,
    pub character: usize,
}

/// A span in the document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SymbolRange {
    pub start: Position,
    pub end: Position,
}

impl SymbolRange {
    pub const ZERO: SymbolRange = SymbolRange {
        start: Position {
            line: 0,
            character: 0,
        },
        end: Position {
            line: 0,
            character: 0,
        },
    };

    /// The span of a syntax node
    pub fn of(node: &Node) -> Self {
        let start = node.start_position();
        let end = node.end_position();
        SymbolRange {
            start: Position {
                line: start.row,
                character: start.column,
            },
            end: Position {
                line: end.row,
                character: end.column,
            },
        }
    }
}

/// A single node in the outline tree
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSymbol {
    pub name: String,
    pub kind: SymbolKind,
    /// The span the symbol covers (here: the span of the name argument)
    pub range: SymbolRange,
    /// The span to reveal when the symbol is picked
    pub selection_range: SymbolRange,
    /// Child symbols in source order; always empty for tasks
    pub children: Vec<DocumentSymbol>,
}

impl DocumentSymbol {
    /// Create a symbol whose range and selection range both cover `range`
    pub fn new(name: String, kind: SymbolKind, range: SymbolRange) -> Self {
        Self {
            name,
            kind,
            range,
            selection_range: range,
            children: Vec::new(),
        }
    }

    /// The synthetic root representing the whole document. Never emitted;
    /// the outline is its `children`.
    pub fn root() -> Self {
        Self::new(String::new(), SymbolKind::Namespace, SymbolRange::ZERO)
    }
}
