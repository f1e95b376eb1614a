//! Text rendering of a tree's shape. Pure presentation: takes a read-only
//! handle on the root and draws the structure sideways, right subtree above
//! each node and left subtree below.

use std::fmt::{self, Write};

use crate::tree::{Node, Tree};

/// Renders the subtree under `root` as indented text, one node per line.
///
/// Reading top to bottom gives the values in descending order; the box-drawing
/// connectors show which node each line hangs off of.
///
/// # Examples
///
/// ```
/// use balanced_bst::{print, Tree};
///
/// let tree = Tree::build([1, 2, 3]);
///
/// assert_eq!(print::render(tree.root()), "\
/// │   ┌── 3
/// └── 2
///     └── 1
/// ");
/// ```
pub fn render<T: fmt::Display>(root: Option<&Node<T>>) -> String {
    let mut out = String::new();
    if let Some(node) = root {
        render_into(node, "", true, &mut out);
    }
    out
}

fn render_into<T: fmt::Display>(node: &Node<T>, prefix: &str, is_left: bool, out: &mut String) {
    if let Some(right) = node.right() {
        let deeper = format!("{prefix}{}", if is_left { "│   " } else { "    " });
        render_into(right, &deeper, false, out);
    }
    let connector = if is_left { "└── " } else { "┌── " };
    // Writing into a String cannot fail.
    let _ = writeln!(out, "{prefix}{connector}{}", node.value());
    if let Some(left) = node.left() {
        let deeper = format!("{prefix}{}", if is_left { "    " } else { "│   " });
        render_into(left, &deeper, true, out);
    }
}

impl<T: fmt::Display> fmt::Display for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self.root()))
    }
}
