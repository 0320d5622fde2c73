//! Scope stack for assembling the outline tree
//!
//! Tracks the currently-open nesting path during one traversal. The bottom
//! of the stack is the document root; the top is the innermost open
//! namespace and receives newly declared symbols.

use tracing::{debug, warn};

use super::DocumentSymbol;

/// Stack of currently-open symbols, created fresh per outline request.
///
/// Unlike a builder that hands out mutable references into the tree, the
/// stack owns each in-progress symbol and attaches it to its parent when the
/// scope closes. A namespace always closes before its next sibling is
/// entered, so children still end up in source order.
pub struct SymbolBuilder {
    stack: Vec<DocumentSymbol>,
}

impl SymbolBuilder {
    /// Seed the stack with the document root symbol
    pub fn new(root: DocumentSymbol) -> Self {
        Self { stack: vec![root] }
    }

    /// Number of open scopes, including the root
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Append a finished symbol to the innermost open scope
    pub fn attach(&mut self, symbol: DocumentSymbol) {
        debug!(name = %symbol.name, depth = self.stack.len(), "attach symbol");
        if let Some(top) = self.stack.last_mut() {
            top.children.push(symbol);
        }
    }

    /// Open a new scope; subsequent attaches go to `symbol` until `close`
    pub fn open(&mut self, symbol: DocumentSymbol) {
        debug!(name = %symbol.name, depth = self.stack.len(), "open scope");
        self.stack.push(symbol);
    }

    /// Close the innermost scope and attach it to its parent.
    ///
    /// The root is never closed: a close at root depth means the traversal
    /// was unbalanced, which is logged and ignored rather than panicked on.
    pub fn close(&mut self) {
        if self.stack.len() <= 1 {
            warn!("scope close with no open scope, ignoring");
            return;
        }
        let Some(finished) = self.stack.pop() else {
            return;
        };
        debug!(name = %finished.name, "close scope");
        self.attach(finished);
    }

    /// Consume the builder and return the root symbol.
    ///
    /// Scopes left open by a malformed traversal are closed in order so
    /// their symbols are not lost.
    pub fn finish(mut self) -> DocumentSymbol {
        if self.stack.len() > 1 {
            warn!(open = self.stack.len() - 1, "unclosed scopes after traversal");
            while self.stack.len() > 1 {
                self.close();
            }
        }
        self.stack.pop().unwrap_or_else(DocumentSymbol::root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outline::{SymbolKind, SymbolRange};

    fn sym(name: &str, kind: SymbolKind) -> DocumentSymbol {
        DocumentSymbol::new(name.to_string(), kind, SymbolRange::ZERO)
    }

    #[test]
    fn test_attach_goes_to_top() {
        let mut builder = SymbolBuilder::new(DocumentSymbol::root());
        builder.attach(sym("a", SymbolKind::Task));
        builder.open(sym("ns", SymbolKind::Namespace));
        builder.attach(sym("b", SymbolKind::Task));
        builder.close();

        let root = builder.finish();
        assert_eq!(root.children.len(), 2);
        assert_eq!(root.children[0].name, "a");
        assert_eq!(root.children[1].name, "ns");
        assert_eq!(root.children[1].children[0].name, "b");
    }

    #[test]
    fn test_close_preserves_sibling_order() {
        let mut builder = SymbolBuilder::new(DocumentSymbol::root());
        builder.open(sym("first", SymbolKind::Namespace));
        builder.close();
        builder.attach(sym("second", SymbolKind::Task));

        let root = builder.finish();
        let names: Vec<_> = root.children.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["first", "second"]);
    }

    #[test]
    fn test_close_at_root_is_ignored() {
        let mut builder = SymbolBuilder::new(DocumentSymbol::root());
        builder.close();
        builder.close();
        assert_eq!(builder.depth(), 1);

        builder.attach(sym("survivor", SymbolKind::Task));
        let root = builder.finish();
        assert_eq!(root.children.len(), 1);
    }

    #[test]
    fn test_finish_closes_dangling_scopes() {
        let mut builder = SymbolBuilder::new(DocumentSymbol::root());
        builder.open(sym("outer", SymbolKind::Namespace));
        builder.open(sym("inner", SymbolKind::Namespace));
        builder.attach(sym("t", SymbolKind::Task));

        let root = builder.finish();
        assert_eq!(root.children.len(), 1);
        assert_eq!(root.children[0].name, "outer");
        assert_eq!(root.children[0].children[0].name, "inner");
        assert_eq!(root.children[0].children[0].children[0].name, "t");
    }

    #[test]
    fn test_depth_tracks_open_scopes() {
        let mut builder = SymbolBuilder::new(DocumentSymbol::root());
        assert_eq!(builder.depth(), 1);
        builder.open(sym("a", SymbolKind::Namespace));
        assert_eq!(builder.depth(), 2);
        builder.close();
        assert_eq!(builder.depth(), 1);
    }
}
