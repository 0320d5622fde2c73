//! Call-node traversal dispatch
//!
//! Single synchronous depth-first walk over a parse tree, firing enter and
//! leave callbacks for call nodes. Every node is entered exactly once on the
//! way down and left exactly once on the way up, in source order.

use tree_sitter::Node;

/// Node kind dispatched to listeners. Covers both `task :x` and
/// `Rake.application.foo`; parenthesized and parenless argument lists parse
/// to the same kind in the Ruby grammar.
const CALL_KIND: &str = "call";

/// Receives enter/leave events for call nodes during one traversal
pub trait CallListener {
    fn on_call_enter(&mut self, node: Node, source: &str);
    fn on_call_leave(&mut self, node: Node, source: &str);
}

/// Walk the tree rooted at `root`, invoking `listener` for every call node.
///
/// Uses the cursor descend/sibling/parent loop, so traversal depth does not
/// consume call stack.
pub fn dispatch(root: Node, source: &str, listener: &mut dyn CallListener) {
    let mut cursor = root.walk();
    loop {
        enter(cursor.node(), source, listener);
        if cursor.goto_first_child() {
            continue;
        }
        loop {
            leave(cursor.node(), source, listener);
            if cursor.goto_next_sibling() {
                break;
            }
            if !cursor.goto_parent() {
                return;
            }
        }
    }
}

fn enter(node: Node, source: &str, listener: &mut dyn CallListener) {
    if node.kind() == CALL_KIND {
        listener.on_call_enter(node, source);
    }
}

fn leave(node: Node, source: &str, listener: &mut dyn CallListener) {
    if node.kind() == CALL_KIND {
        listener.on_call_leave(node, source);
    }
}
