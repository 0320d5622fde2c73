//! Rake declaration recognition
//!
//! Classifies call nodes as namespace or task declarations, extracts the
//! declared name from the accepted argument shapes, and assembles the
//! outline via the scope stack. Traversal itself is driven by the
//! dispatcher; this module only reacts to call enter/leave events.

use std::path::Path;

use tracing::debug;
use tree_sitter::Node;

use super::{DocumentSymbol, SymbolBuilder, SymbolKind, SymbolRange};
use crate::dispatch::CallListener;

/// Call names that declare a single named unit of work
const TASK_KEYWORDS: [&str; 4] = ["task", "file", "directory", "multitask"];

/// Call name that opens a named grouping scope
const NAMESPACE_KEYWORD: &str = "namespace";

/// True when `path` names a Rake build file (`Rakefile` or `*.rake`)
pub fn is_rake_path(path: &Path) -> bool {
    match path.file_name().and_then(|name| name.to_str()) {
        Some(name) => name.ends_with("Rakefile") || name.ends_with(".rake"),
        None => false,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CallKind {
    Namespace,
    Task,
}

fn classify(method: &str) -> Option<CallKind> {
    if method == NAMESPACE_KEYWORD {
        Some(CallKind::Namespace)
    } else if TASK_KEYWORDS.contains(&method) {
        Some(CallKind::Task)
    } else {
        None
    }
}

/// The method name of a call node (`task` in `task :build`), ignoring any
/// receiver
fn method_name<'s>(node: Node, source: &'s str) -> Option<&'s str> {
    let method = node.child_by_field_name("method")?;
    method.utf8_text(source.as_bytes()).ok()
}

/// First positional argument of a call node, if any
fn first_argument(node: Node) -> Option<Node> {
    node.child_by_field_name("arguments")?.named_child(0)
}

fn node_text(node: Node, source: &str) -> Option<String> {
    node.utf8_text(source.as_bytes()).ok().map(str::to_string)
}

/// Text of a `:name` symbol literal without the leading colon
fn symbol_text(node: Node, source: &str) -> Option<String> {
    let text = node.utf8_text(source.as_bytes()).ok()?;
    Some(text.trim_start_matches(':').to_string())
}

/// Content of a string literal, without the quotes.
///
/// The grammar splits the content around escape sequences, so a literal is
/// a run of `string_content` and `escape_sequence` children. Escapes are
/// processed into the characters they denote. Interpolated strings have no
/// literal content and empty strings have no children; both yield no name.
fn string_content(node: Node, source: &str) -> Option<String> {
    let mut cursor = node.walk();
    let mut content = String::new();
    let mut has_fragment = false;
    for child in node.named_children(&mut cursor) {
        match child.kind() {
            "string_content" => {
                content.push_str(child.utf8_text(source.as_bytes()).ok()?);
                has_fragment = true;
            }
            "escape_sequence" => {
                content.push_str(&unescape(child.utf8_text(source.as_bytes()).ok()?));
                has_fragment = true;
            }
            _ => return None,
        }
    }
    has_fragment.then_some(content)
}

/// Processed text of a `\n`-style escape sequence, per double-quoted string
/// rules: known single-letter escapes map to their character, any other
/// escaped character means the character itself (`\"` is `"`). Numeric
/// escapes (hex, unicode, octal) are kept as written.
fn unescape(sequence: &str) -> String {
    let mut chars = sequence.chars();
    if chars.next() != Some('\\') {
        return sequence.to_string();
    }
    match (chars.next(), chars.next()) {
        (Some(escaped), None) => match escaped {
            'n' => "\n".to_string(),
            't' => "\t".to_string(),
            'r' => "\r".to_string(),
            's' => " ".to_string(),
            '0' => "\0".to_string(),
            'a' => "\x07".to_string(),
            'b' => "\x08".to_string(),
            'e' => "\x1b".to_string(),
            'f' => "\x0c".to_string(),
            'v' => "\x0b".to_string(),
            other => other.to_string(),
        },
        _ => sequence.to_string(),
    }
}

/// Extract the declared name from the first argument of a recognized call.
///
/// Accepted shapes, tried in order:
/// - bare symbol: `task :build`
/// - string: `task "build"`
/// - keyword/hash argument: `task build: [...]` or `task "build" => [...]`,
///   where the name is the first pair's key
///
/// Anything else yields no name and the declaration is skipped.
fn extract_name(argument: Node, source: &str) -> Option<String> {
    match argument.kind() {
        "simple_symbol" => symbol_text(argument, source),
        "string" => string_content(argument, source),
        "pair" => {
            let key = argument.child_by_field_name("key")?;
            match key.kind() {
                "hash_key_symbol" => node_text(key, source),
                "simple_symbol" => symbol_text(key, source),
                "string" => string_content(key, source),
                _ => None,
            }
        }
        _ => None,
    }
}

/// Name and span of a declaration call's first argument.
///
/// The span covers the whole argument node: for the keyword/hash shape that
/// is the pair (`two: []`), not just its key, matching how the symbol is
/// revealed in an editor.
fn declared_name(node: Node, source: &str) -> Option<(String, SymbolRange)> {
    let argument = first_argument(node)?;
    let name = extract_name(argument, source)?;
    Some((name, SymbolRange::of(&argument)))
}

/// Builds the document symbol outline for one Rake file.
///
/// Namespace declarations open a scope; task declarations attach to the
/// innermost open scope and never nest further. Scope bookkeeping is
/// symmetric: every `namespace` call records on enter whether it opened a
/// scope, and the matching leave pops only if it did, so a namespace without
/// an extractable name cannot unbalance the stack.
pub struct RakeSymbolListener {
    builder: SymbolBuilder,
    /// One entry per `namespace` call currently being traversed; true when
    /// the matching enter opened a scope.
    opened: Vec<bool>,
}

impl RakeSymbolListener {
    pub fn new(builder: SymbolBuilder) -> Self {
        Self {
            builder,
            opened: Vec::new(),
        }
    }

    /// Consume the listener and return the collected outline
    pub fn into_outline(self) -> Vec<DocumentSymbol> {
        self.builder.finish().children
    }

    /// Returns true when a scope was opened
    fn enter_namespace(&mut self, node: Node, source: &str) -> bool {
        let Some((name, range)) = declared_name(node, source) else {
            return false;
        };
        debug!(%name, "namespace declaration");
        self.builder
            .open(DocumentSymbol::new(name, SymbolKind::Namespace, range));
        true
    }

    fn declare_task(&mut self, node: Node, source: &str) {
        let Some((name, range)) = declared_name(node, source) else {
            return;
        };
        debug!(%name, "task declaration");
        self.builder
            .attach(DocumentSymbol::new(name, SymbolKind::Task, range));
    }
}

impl CallListener for RakeSymbolListener {
    fn on_call_enter(&mut self, node: Node, source: &str) {
        let Some(method) = method_name(node, source) else {
            return;
        };
        match classify(method) {
            Some(CallKind::Namespace) => {
                let opened = self.enter_namespace(node, source);
                self.opened.push(opened);
            }
            Some(CallKind::Task) => self.declare_task(node, source),
            None => {}
        }
    }

    fn on_call_leave(&mut self, node: Node, source: &str) {
        let Some(method) = method_name(node, source) else {
            return;
        };
        if method == NAMESPACE_KEYWORD && self.opened.pop() == Some(true) {
            self.builder.close();
        }
    }
}
