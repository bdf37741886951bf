//! Indented console listing of the tree

use std::fmt::Write as _;

use crate::tree::ArticleNode;

/// Render the tree as an indented text listing, two spaces per level.
///
/// Used for the console echo of the built structure; remarks are appended
/// when present.
pub fn render_text(root: &ArticleNode) -> String {
    let mut out = String::new();
    render_node(root, 0, &mut out);
    out
}

fn render_node(node: &ArticleNode, indent: usize, out: &mut String) {
    let _ = write!(
        out,
        "{:indent$}{} - {} (Количество: {})",
        "",
        node.designation,
        node.name,
        node.quantity,
    );
    if let Some(remark) = &node.remark {
        if !remark.is_empty() {
            let _ = write!(out, " [{remark}]");
        }
    }
    out.push('\n');
    for child in &node.children {
        render_node(child, indent + 2, out);
    }
}
