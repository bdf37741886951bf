//! Collapsible HTML rendering
//!
//! Serializes an [`ArticleNode`] tree into a self-contained HTML document.
//! Every rendered node consumes one value from a sequential counter local
//! to the render call; nodes with children use it to pair their toggle
//! control (`btnnodeN`) with their child container (`nodeN`). Containers
//! start hidden, the toggle flips visibility and its glyph between `+` and
//! `−`. Leaves render a fixed-width spacer instead of a toggle so the text
//! stays aligned.

use std::fmt::Write as _;

use crate::tree::ArticleNode;

use super::config::RenderConfig;

/// Renders an article tree as a static collapsible HTML document.
///
/// Rendering is a pure function of the tree: the node-id counter is reset
/// at the start of every [`render`](Self::render) call, so identical trees
/// produce byte-identical documents.
pub struct HtmlRenderer {
    config: RenderConfig,
}

impl HtmlRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn render(&self, root: &ArticleNode) -> String {
        let mut body = String::new();
        let mut counter = 0usize;
        self.render_node(root, &mut counter, &mut body);

        let mut out = String::new();
        out.push_str("<!DOCTYPE html>\n");
        let _ = writeln!(out, "<html lang='{}'>", self.config.lang);
        out.push_str("<head>\n");
        out.push_str("  <meta charset='UTF-8'>\n");
        let _ = writeln!(out, "  <title>{}</title>", escape_html(&self.config.title));
        out.push_str(concat!(
            "  <style>\n",
            "    ul { list-style-type: none; padding-left: 20px; }\n",
            "    li { margin: 5px; }\n",
            "    .toggle { cursor: pointer; color: blue; font-weight: bold; margin-right: 5px; }\n",
            "    .hidden { display: none; }\n",
            "  </style>\n",
            "  <script>\n",
            "    function toggle(id, btnId) {\n",
            "      var elem = document.getElementById(id);\n",
            "      var btn = document.getElementById(btnId);\n",
            "      if (elem.style.display === 'none' || elem.classList.contains('hidden')) {\n",
            "        elem.classList.remove('hidden');\n",
            "        elem.style.display = 'block';\n",
            "        btn.innerHTML = '\u{2212}';\n",
            "      } else {\n",
            "        elem.style.display = 'none';\n",
            "        btn.innerHTML = '+';\n",
            "      }\n",
            "    }\n",
            "  </script>\n",
            "</head>\n",
            "<body>\n",
        ));
        let _ = writeln!(out, "  <h1>{}</h1>", escape_html(&self.config.title));
        out.push_str(&body);
        out.push_str("</body>\n</html>\n");
        out
    }

    fn render_node(&self, node: &ArticleNode, counter: &mut usize, out: &mut String) {
        let id = *counter;
        *counter += 1;

        out.push_str("<ul>\n  <li>\n");
        if node.is_leaf() {
            out.push_str("    <span style='display:inline-block; width:16px;'></span>\n");
        } else {
            let _ = writeln!(
                out,
                "    <span id='btnnode{id}' class='toggle' \
                 onclick=\"toggle('node{id}', 'btnnode{id}')\">+</span>"
            );
        }
        let _ = writeln!(
            out,
            "    {} - {} (Количество: {})",
            escape_html(&node.designation),
            escape_html(&node.name),
            escape_html(&node.quantity)
        );
        if !node.is_leaf() {
            let _ = writeln!(out, "    <div id='node{id}' class='hidden'>");
            for child in &node.children {
                self.render_node(child, counter, out);
            }
            out.push_str("    </div>\n");
        }
        out.push_str("  </li>\n</ul>\n");
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new(RenderConfig::default())
    }
}

/// Escape text for insertion into HTML element content or attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
